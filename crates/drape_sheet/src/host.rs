//! Services the host toolkit provides to a sheet

use drape_animation::FrameAnimation;
use drape_core::SheetState;
use slotmap::new_key_type;

use crate::layout::SheetLayout;
use crate::transition::TransitionSpec;

new_key_type! {
    /// Identifier of an animation the sheet asked the host to run
    pub struct AnimationId;
}

/// What an animation is for, and so what its completion commits
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimationPurpose {
    /// Sliding in alongside the present transition
    Presentation,
    /// Snapping to a resting state after a drag
    Settle(SheetState),
    /// Re-anchoring after a height change
    Resize,
    /// Sliding out alongside the dismiss transition
    Dismissal,
}

/// Animated container frame change
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationRequest {
    pub id: AnimationId,
    pub animation: FrameAnimation,
    /// Layout at the end of the animation
    pub layout: SheetLayout,
    pub purpose: AnimationPurpose,
}

/// Host toolkit services
pub trait SheetHost {
    /// Apply a layout immediately
    fn apply_layout(&mut self, layout: &SheetLayout);

    /// Run an animation and report back through
    /// `SheetController::animation_finished` once it stops, whether it
    /// finished or was interrupted.
    fn run_animation(&mut self, request: AnimationRequest);

    /// Start the modal dismiss transition
    fn dismiss(&mut self, transition: &TransitionSpec);

    /// Attach or detach the sheet's pan recognizer
    fn set_pan_enabled(&mut self, _enabled: bool) {}

    /// Raise the header above the content after a drag settles
    fn bring_header_to_front(&mut self) {}
}
