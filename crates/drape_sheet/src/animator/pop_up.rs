//! Pop-up cards
//!
//! A pop-up rests centred in the container, inset from the sides, at the
//! collapsed height. It has a single visible state (`Expanded`). Dragging
//! moves it freely along its axis; releasing it while it pokes out of the
//! container flings it away, otherwise it springs back to the centre.

use drape_animation::{Easing, FrameAnimation};
use drape_core::{
    dominant_direction, Axis, HeightPair, PanDirection, PanPhase, PanRecognizer, PresentationDirection, Rect,
    SheetState,
};

use super::{AnimatorKind, AnimatorSettings, PresentationAnimator, PresentationPort};
use crate::host::AnimationPurpose;

/// Behaviour shared by both pop-up axes
#[derive(Clone, Copy, Debug)]
struct PopUpCore {
    direction: PresentationDirection,
    settings: AnimatorSettings,
    axis: Axis,
    /// Direction the last relevant drag event moved in
    last_direction: Option<PanDirection>,
}

impl PopUpCore {
    fn new(direction: PresentationDirection, settings: AnimatorSettings, axis: Axis) -> Self {
        Self {
            direction,
            settings,
            axis,
            last_direction: None,
        }
    }

    /// Direction assumed when the velocity has none
    fn fallback_direction(&self) -> PanDirection {
        match self.axis {
            Axis::Vertical => PanDirection::Down,
            Axis::Horizontal => PanDirection::Left,
        }
    }

    fn resting_frame(&self, bounds: Rect, heights: HeightPair) -> Rect {
        let inset = self.settings.pop_up_inset;
        let c = heights.collapsed;
        Rect::new(
            inset,
            (bounds.height() - c) / 2.0,
            (bounds.width() - 2.0 * inset).max(0.0),
            c,
        )
    }

    fn will_begin_presentation(&self, port: &mut dyn PresentationPort) {
        let frame = port.content_frame();
        let target = self.resting_frame(port.bounds(), port.heights());
        let animation = port.transition().frame_animation(frame, target);
        port.animate_content_frame(animation, AnimationPurpose::Presentation);
    }

    fn will_begin_dismissal(&self, port: &mut dyn PresentationPort) {
        let bounds = port.bounds();
        let frame = port.content_frame();
        let direction = self.last_direction.unwrap_or_else(|| self.direction.dismiss_direction());

        let target = match direction {
            PanDirection::Up => frame.with_origin_y(bounds.min_y() - frame.height()),
            PanDirection::Down => frame.with_origin_y(bounds.max_y()),
            PanDirection::Left => frame.with_origin_x(bounds.min_x() - bounds.width()),
            PanDirection::Right => frame.with_origin_x(bounds.max_x()),
        };
        tracing::trace!("pop-up dismissing {:?}", direction);

        let animation = port.transition().frame_animation(frame, target);
        port.animate_content_frame(animation, AnimationPurpose::Dismissal);
    }

    fn handle_pan(&mut self, port: &mut dyn PresentationPort, pan: &mut dyn PanRecognizer) {
        let direction = dominant_direction(pan.velocity()).unwrap_or_else(|| self.fallback_direction());
        if direction.axis() != self.axis {
            return;
        }
        self.last_direction = Some(direction);

        match pan.phase() {
            PanPhase::Began | PanPhase::Changed => {
                let translation = pan.translation();
                let frame = port.content_frame();
                let moved = match self.axis {
                    Axis::Vertical => frame.offset(0.0, translation.y),
                    Axis::Horizontal => frame.offset(translation.x, 0.0),
                };
                pan.reset_translation();
                port.update_content_frame(moved);
            }
            PanPhase::Ended | PanPhase::Cancelled => self.release(port),
            PanPhase::Possible => {}
        }
    }

    fn release(&self, port: &mut dyn PresentationPort) {
        let bounds = port.bounds();
        let frame = port.content_frame();
        let duration = self.settings.base_duration;

        let final_state = if port.state() == SheetState::Expanded && frame.escapes(&bounds, self.axis) {
            SheetState::Minimised
        } else {
            SheetState::Expanded
        };
        tracing::debug!("pop-up released at {:?}: {}", frame.origin, final_state);

        if final_state == SheetState::Minimised {
            port.dismiss(duration);
            return;
        }

        let target = self.resting_frame(bounds, port.heights());
        let animation = FrameAnimation::spring(frame, target, duration, self.settings.spring);
        port.animate_content_frame(animation, AnimationPurpose::Settle(final_state));
    }

    fn reset_heights(&self, port: &mut dyn PresentationPort) {
        let frame = port.content_frame();
        let target = self.resting_frame(port.bounds(), port.heights());
        let animation = FrameAnimation::eased(frame, target, self.settings.resize_duration, Easing::EaseInOut);
        port.animate_content_frame(animation, AnimationPurpose::Resize);
    }
}

/// Pop-up entering from the top or bottom edge, flung away up or down
#[derive(Clone, Copy, Debug)]
pub struct PopUpVerticalAnimator {
    core: PopUpCore,
}

impl PopUpVerticalAnimator {
    pub fn new(direction: PresentationDirection, settings: AnimatorSettings) -> Self {
        Self {
            core: PopUpCore::new(direction, settings, Axis::Vertical),
        }
    }

    /// Direction of the most recent vertical drag event
    pub fn last_direction(&self) -> Option<PanDirection> {
        self.core.last_direction
    }
}

impl PresentationAnimator for PopUpVerticalAnimator {
    fn kind(&self) -> AnimatorKind {
        AnimatorKind::PopUpVertical
    }

    fn direction(&self) -> PresentationDirection {
        self.core.direction
    }

    fn initial_frame(&self, bounds: Rect, heights: HeightPair) -> Rect {
        let rest = self.core.resting_frame(bounds, heights);
        match self.core.direction {
            PresentationDirection::TopToBottom => rest.with_origin_y(bounds.min_y() - rest.height()),
            _ => rest.with_origin_y(bounds.max_y()),
        }
    }

    fn resting_frame(&self, bounds: Rect, heights: HeightPair) -> Rect {
        self.core.resting_frame(bounds, heights)
    }

    fn will_begin_presentation(&mut self, port: &mut dyn PresentationPort) {
        self.core.will_begin_presentation(port);
    }

    fn did_begin_presentation(&mut self, port: &mut dyn PresentationPort) {
        port.commit_state(SheetState::Expanded);
    }

    fn will_begin_dismissal(&mut self, port: &mut dyn PresentationPort) {
        self.core.will_begin_dismissal(port);
    }

    fn handle_pan(&mut self, port: &mut dyn PresentationPort, pan: &mut dyn PanRecognizer) {
        self.core.handle_pan(port, pan);
    }

    fn reset_heights(&mut self, port: &mut dyn PresentationPort) {
        self.core.reset_heights(port);
    }

    fn scroll_enabled_after(&self, _state: SheetState, _heights: HeightPair) -> bool {
        false
    }
}

/// Pop-up entering from the left or right edge, flung away sideways
#[derive(Clone, Copy, Debug)]
pub struct PopUpHorizontalAnimator {
    core: PopUpCore,
}

impl PopUpHorizontalAnimator {
    pub fn new(direction: PresentationDirection, settings: AnimatorSettings) -> Self {
        Self {
            core: PopUpCore::new(direction, settings, Axis::Horizontal),
        }
    }

    /// Direction of the most recent horizontal drag event
    pub fn last_direction(&self) -> Option<PanDirection> {
        self.core.last_direction
    }
}

impl PresentationAnimator for PopUpHorizontalAnimator {
    fn kind(&self) -> AnimatorKind {
        AnimatorKind::PopUpHorizontal
    }

    fn direction(&self) -> PresentationDirection {
        self.core.direction
    }

    fn initial_frame(&self, bounds: Rect, heights: HeightPair) -> Rect {
        let rest = self.core.resting_frame(bounds, heights);
        match self.core.direction {
            PresentationDirection::RightToLeft => rest.with_origin_x(bounds.max_x()),
            _ => rest.with_origin_x(bounds.min_x() - bounds.width()),
        }
    }

    fn resting_frame(&self, bounds: Rect, heights: HeightPair) -> Rect {
        self.core.resting_frame(bounds, heights)
    }

    fn will_begin_presentation(&mut self, port: &mut dyn PresentationPort) {
        self.core.will_begin_presentation(port);
    }

    fn did_begin_presentation(&mut self, port: &mut dyn PresentationPort) {
        port.commit_state(SheetState::Expanded);
    }

    fn will_begin_dismissal(&mut self, port: &mut dyn PresentationPort) {
        self.core.will_begin_dismissal(port);
    }

    fn handle_pan(&mut self, port: &mut dyn PresentationPort, pan: &mut dyn PanRecognizer) {
        self.core.handle_pan(port, pan);
    }

    fn reset_heights(&mut self, port: &mut dyn PresentationPort) {
        self.core.reset_heights(port);
    }

    fn scroll_enabled_after(&self, _state: SheetState, _heights: HeightPair) -> bool {
        true
    }
}
