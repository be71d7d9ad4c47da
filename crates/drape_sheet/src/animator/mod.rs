//! Presentation animators
//!
//! An animator turns presentation lifecycle callbacks and drag input into
//! container frame proposals. It never owns the frame: everything goes
//! through a [`PresentationPort`], which the controller implements.
//!
//! Three strategies share the [`PresentationAnimator`] interface:
//!
//! - [`BottomSheetAnimator`]: edge-anchored sheet with collapsed and
//!   expanded resting heights
//! - [`PopUpVerticalAnimator`]: centred card flung away up or down
//! - [`PopUpHorizontalAnimator`]: centred card flung away left or right
//!
//! [`animator_for`] picks one from the configured style and direction.

mod bottom_sheet;
mod pop_up;

pub use bottom_sheet::BottomSheetAnimator;
pub use pop_up::{PopUpHorizontalAnimator, PopUpVerticalAnimator};

use drape_animation::{FrameAnimation, SpringCurve};
use drape_core::state::candidate_state;
use drape_core::{
    resolve_direction, Axis, HeightPair, PanDirection, PanRecognizer, PresentationDirection, Rect,
    SheetState, Vec2,
};

use crate::config::{PresentationStyle, SheetConfig};
use crate::host::{AnimationId, AnimationPurpose};
use crate::transition::TransitionSpec;

/// The controller side of an animator
///
/// Frame changes are proposals: the controller applies them and re-lays out
/// the header and content in one step.
pub trait PresentationPort {
    /// Container bounds, origin at zero
    fn bounds(&self) -> Rect;
    fn content_frame(&self) -> Rect;
    fn heights(&self) -> HeightPair;
    fn state(&self) -> SheetState;
    fn transition(&self) -> TransitionSpec;

    /// State the sheet is heading for: the target of a pending settle,
    /// otherwise the committed state
    fn target_state(&self) -> SheetState {
        self.state()
    }

    /// Apply a frame immediately
    fn update_content_frame(&mut self, frame: Rect);

    /// Animate to a frame; completion is routed back by purpose
    fn animate_content_frame(&mut self, animation: FrameAnimation, purpose: AnimationPurpose) -> AnimationId;

    /// Dismiss the sheet, sliding out over `duration` seconds
    fn dismiss(&mut self, duration: f64);

    fn update_scroll_enabled(&mut self, enabled: bool);

    /// A drag finished settling
    fn pan_completed(&mut self);

    fn commit_state(&mut self, state: SheetState);
}

/// Timing shared by all animators
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimatorSettings {
    /// Settle duration for a release that still has the whole span to travel
    pub base_duration: f64,
    /// Duration of height re-anchoring
    pub resize_duration: f64,
    pub spring: SpringCurve,
    /// Horizontal inset of pop-up cards
    pub pop_up_inset: f32,
}

impl Default for AnimatorSettings {
    fn default() -> Self {
        Self::from(&SheetConfig::default())
    }
}

impl From<&SheetConfig> for AnimatorSettings {
    fn from(config: &SheetConfig) -> Self {
        Self {
            base_duration: config.settle.base_duration,
            resize_duration: config.settle.resize_duration,
            spring: SpringCurve::new(config.settle.damping_ratio, config.settle.initial_velocity),
            pop_up_inset: config.pop_up_inset,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimatorKind {
    BottomSheet,
    PopUpVertical,
    PopUpHorizontal,
}

/// Frame strategy for one presentation style
pub trait PresentationAnimator {
    fn kind(&self) -> AnimatorKind;

    fn direction(&self) -> PresentationDirection;

    /// Off-screen frame the presentation starts from
    fn initial_frame(&self, bounds: Rect, heights: HeightPair) -> Rect;

    /// Frame at rest once presented
    fn resting_frame(&self, bounds: Rect, heights: HeightPair) -> Rect;

    /// Slide in alongside the present transition
    fn will_begin_presentation(&mut self, port: &mut dyn PresentationPort);

    /// Presentation finished; commits the first visible state
    fn did_begin_presentation(&mut self, port: &mut dyn PresentationPort);

    /// Slide out alongside the dismiss transition
    fn will_begin_dismissal(&mut self, port: &mut dyn PresentationPort);

    /// Drive the container from a pan gesture
    fn handle_pan(&mut self, port: &mut dyn PresentationPort, pan: &mut dyn PanRecognizer);

    /// A settle animation ended at `state`
    fn finish_settle(&mut self, port: &mut dyn PresentationPort, state: SheetState) {
        port.commit_state(state);
        port.update_scroll_enabled(self.scroll_enabled_after(state, port.heights()));
    }

    /// Re-anchor to the current heights
    fn reset_heights(&mut self, port: &mut dyn PresentationPort);

    /// Inner scrolling allowed once settled at `state`
    fn scroll_enabled_after(&self, state: SheetState, heights: HeightPair) -> bool;
}

/// Pick the animator for a style and direction
pub fn animator_for(
    style: PresentationStyle,
    direction: PresentationDirection,
    settings: AnimatorSettings,
) -> Box<dyn PresentationAnimator> {
    match (style, direction.axis()) {
        (PresentationStyle::Sheet, _) => Box::new(BottomSheetAnimator::new(direction, settings)),
        (PresentationStyle::PopUp, Axis::Vertical) => Box::new(PopUpVerticalAnimator::new(direction, settings)),
        (PresentationStyle::PopUp, Axis::Horizontal) => {
            Box::new(PopUpHorizontalAnimator::new(direction, settings))
        }
    }
}

/// How a drag release will be resolved
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReleasePlan {
    pub candidate: SheetState,
    pub direction: PanDirection,
    pub final_state: SheetState,
    /// Upper resting position of the span the release is decided in
    pub min: f32,
    /// Lower resting position
    pub max: f32,
}

impl ReleasePlan {
    /// Resolve a vertical release at leading edge `y` with velocity `velocity_y`
    pub fn resolve(state: SheetState, heights: HeightPair, extent: f32, y: f32, velocity_y: f32) -> Self {
        let candidate = candidate_state(state, y, extent, heights);
        let (min, max) = if candidate == SheetState::Minimised {
            (extent - heights.collapsed, extent)
        } else {
            (extent - heights.expanded, extent - heights.collapsed)
        };
        let direction = resolve_direction(velocity_y, y, min, max);
        let final_state = drape_core::state::final_state(state, candidate, direction);

        Self {
            candidate,
            direction,
            final_state,
            min,
            max,
        }
    }

    /// Fraction of the span already travelled toward the destination
    pub fn progress(&self, y: f32) -> f32 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 1.0;
        }
        let travelled = match self.direction {
            PanDirection::Down | PanDirection::Right => y - self.min,
            PanDirection::Up | PanDirection::Left => self.max - y,
        };
        (travelled / span).clamp(0.0, 1.0)
    }

    /// Settle duration: the closer to the destination, the faster
    pub fn duration(&self, y: f32, base_duration: f64) -> f64 {
        (1.0 - self.progress(y) as f64) * base_duration
    }
}

/// Direction the next drag is expected to move in, for scroll coordination
pub fn predicted_direction(
    state: SheetState,
    heights: HeightPair,
    bounds: Rect,
    frame: Rect,
    velocity: Vec2,
) -> PanDirection {
    ReleasePlan::resolve(state, heights, bounds.height(), frame.y(), velocity.y).direction
}
