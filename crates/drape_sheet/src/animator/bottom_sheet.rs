//! Edge-anchored sheet with collapsed and expanded resting heights

use drape_animation::{Easing, FrameAnimation};
use drape_core::{Axis, HeightPair, PanDirection, PanPhase, PanRecognizer, PresentationDirection, Rect, SheetState};

use super::{AnimatorKind, AnimatorSettings, PresentationAnimator, PresentationPort, ReleasePlan};
use crate::host::AnimationPurpose;

/// Sheet that rests against the bottom edge
///
/// The presentation direction only decides which edge the sheet slides in
/// from and leaves through. Once shown it always rests on the bottom edge
/// and drags vertically,
/// 1:1 with the finger, between the expanded anchor and the bottom edge.
#[derive(Clone, Copy, Debug)]
pub struct BottomSheetAnimator {
    direction: PresentationDirection,
    settings: AnimatorSettings,
}

impl BottomSheetAnimator {
    pub fn new(direction: PresentationDirection, settings: AnimatorSettings) -> Self {
        Self {
            direction,
            settings,
        }
    }

    fn rest_for(bounds: Rect, height: f32) -> Rect {
        Rect::new(0.0, bounds.height() - height, bounds.width(), height)
    }

    fn drag(&self, port: &mut dyn PresentationPort, pan: &mut dyn PanRecognizer) {
        let extent = port.bounds().height();
        let heights = port.heights();
        let frame = port.content_frame();
        let new_y = frame.y() + pan.translation().y;

        if new_y < extent - heights.expanded || new_y > extent {
            return;
        }

        port.update_content_frame(Rect::new(frame.x(), new_y, frame.width(), extent - new_y));
        pan.reset_translation();
    }

    fn release(&self, port: &mut dyn PresentationPort, velocity_y: f32) {
        let extent = port.bounds().height();
        let heights = port.heights();
        let frame = port.content_frame();
        let y = frame.y();

        let plan = ReleasePlan::resolve(port.state(), heights, extent, y, velocity_y);
        let duration = plan.duration(y, self.settings.base_duration);

        tracing::debug!(
            "sheet released at y={:.1} v={:.1}: {} -> {} ({:?}, {:.3}s)",
            y,
            velocity_y,
            port.state(),
            plan.final_state,
            plan.direction,
            duration
        );

        if plan.final_state == SheetState::Minimised {
            port.dismiss(duration);
            return;
        }

        let height = heights.for_state(plan.final_state);
        let target = Rect::new(frame.x(), extent - height, frame.width(), height);
        let animation = FrameAnimation::spring(frame, target, duration, self.settings.spring);
        port.animate_content_frame(animation, AnimationPurpose::Settle(plan.final_state));
    }
}

impl PresentationAnimator for BottomSheetAnimator {
    fn kind(&self) -> AnimatorKind {
        AnimatorKind::BottomSheet
    }

    fn direction(&self) -> PresentationDirection {
        self.direction
    }

    fn initial_frame(&self, bounds: Rect, heights: HeightPair) -> Rect {
        let (w, h, c) = (bounds.width(), bounds.height(), heights.collapsed);
        match self.direction {
            PresentationDirection::BottomToTop => Rect::new(0.0, h, w, c),
            PresentationDirection::TopToBottom => Rect::new(0.0, -c, w, c),
            PresentationDirection::RightToLeft => Rect::new(w, h - c, w, c),
            PresentationDirection::LeftToRight => Rect::new(-w, h - c, w, c),
        }
    }

    fn resting_frame(&self, bounds: Rect, heights: HeightPair) -> Rect {
        Self::rest_for(bounds, heights.collapsed)
    }

    fn will_begin_presentation(&mut self, port: &mut dyn PresentationPort) {
        let frame = port.content_frame();
        let rest = self.resting_frame(port.bounds(), port.heights());
        let target = match self.direction.axis() {
            Axis::Vertical => frame.with_origin_y(rest.y()),
            Axis::Horizontal => frame.with_origin_x(rest.x()),
        };
        let animation = port.transition().frame_animation(frame, target);
        port.animate_content_frame(animation, AnimationPurpose::Presentation);
    }

    fn did_begin_presentation(&mut self, port: &mut dyn PresentationPort) {
        port.commit_state(SheetState::Collapsed);
    }

    fn will_begin_dismissal(&mut self, port: &mut dyn PresentationPort) {
        let bounds = port.bounds();
        let frame = port.content_frame();
        let target = match self.direction.dismiss_direction() {
            PanDirection::Up => frame.with_origin_y(bounds.min_y() - frame.height()),
            PanDirection::Down => frame.with_origin_y(bounds.max_y()),
            PanDirection::Left => frame.with_origin_x(bounds.min_x() - bounds.width()),
            PanDirection::Right => frame.with_origin_x(bounds.max_x()),
        };
        let animation = port.transition().frame_animation(frame, target);
        port.animate_content_frame(animation, AnimationPurpose::Dismissal);
    }

    fn handle_pan(&mut self, port: &mut dyn PresentationPort, pan: &mut dyn PanRecognizer) {
        match pan.phase() {
            PanPhase::Began | PanPhase::Changed => self.drag(port, pan),
            PanPhase::Ended | PanPhase::Cancelled => self.release(port, pan.velocity().y),
            PanPhase::Possible => {}
        }
    }

    fn finish_settle(&mut self, port: &mut dyn PresentationPort, state: SheetState) {
        port.commit_state(state);
        port.pan_completed();
        port.update_scroll_enabled(self.scroll_enabled_after(state, port.heights()));
    }

    fn reset_heights(&mut self, port: &mut dyn PresentationPort) {
        let bounds = port.bounds();
        let heights = port.heights();
        let height = match port.target_state() {
            SheetState::Expanded => heights.expanded,
            _ => heights.collapsed,
        };
        let frame = port.content_frame();
        let target = Self::rest_for(bounds, height).with_origin_x(frame.x());
        let animation = FrameAnimation::eased(frame, target, self.settings.resize_duration, Easing::EaseInOut);
        port.animate_content_frame(animation, AnimationPurpose::Resize);
    }

    fn scroll_enabled_after(&self, state: SheetState, heights: HeightPair) -> bool {
        match state {
            SheetState::Expanded => true,
            SheetState::Collapsed => heights.collapsed >= heights.expanded,
            SheetState::Minimised => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animator::testing::{TestPan, TestPort};
    use drape_animation::AnimationCurve;
    use drape_core::Vec2;

    const BOUNDS: Rect = Rect::new(0.0, 0.0, 400.0, 800.0);
    const HEIGHTS: HeightPair = HeightPair::new(300.0, 600.0);

    fn animator() -> BottomSheetAnimator {
        BottomSheetAnimator::new(PresentationDirection::BottomToTop, AnimatorSettings::default())
    }

    fn collapsed_port() -> TestPort {
        let mut port = TestPort::new(BOUNDS, HEIGHTS, SheetState::Collapsed);
        port.frame = Rect::new(0.0, 500.0, 400.0, 300.0);
        port
    }

    #[test]
    fn test_initial_frames() {
        let settings = AnimatorSettings::default();
        let frame = |direction| BottomSheetAnimator::new(direction, settings).initial_frame(BOUNDS, HEIGHTS);

        assert_eq!(frame(PresentationDirection::BottomToTop), Rect::new(0.0, 800.0, 400.0, 300.0));
        assert_eq!(frame(PresentationDirection::TopToBottom), Rect::new(0.0, -300.0, 400.0, 300.0));
        assert_eq!(frame(PresentationDirection::RightToLeft), Rect::new(400.0, 500.0, 400.0, 300.0));
        assert_eq!(frame(PresentationDirection::LeftToRight), Rect::new(-400.0, 500.0, 400.0, 300.0));
    }

    #[test]
    fn test_presentation_slides_to_collapsed() {
        let mut sheet = animator();
        let mut port = TestPort::new(BOUNDS, HEIGHTS, SheetState::Minimised);
        port.frame = sheet.initial_frame(BOUNDS, HEIGHTS);

        sheet.will_begin_presentation(&mut port);
        let (animation, purpose) = port.last_animation().copied().unwrap();
        assert_eq!(purpose, AnimationPurpose::Presentation);
        assert_eq!(animation.to, Rect::new(0.0, 500.0, 400.0, 300.0));
        assert_eq!(animation.duration, port.transition.duration());

        sheet.did_begin_presentation(&mut port);
        assert_eq!(port.state, SheetState::Collapsed);
    }

    #[test]
    fn test_horizontal_presentation_keeps_y() {
        let mut sheet = BottomSheetAnimator::new(PresentationDirection::LeftToRight, AnimatorSettings::default());
        let mut port = TestPort::new(BOUNDS, HEIGHTS, SheetState::Minimised);
        port.frame = sheet.initial_frame(BOUNDS, HEIGHTS);

        sheet.will_begin_presentation(&mut port);
        assert_eq!(port.frame, Rect::new(0.0, 500.0, 400.0, 300.0));
    }

    #[test]
    fn test_drag_tracks_finger_and_resets_translation() {
        let mut sheet = animator();
        let mut port = collapsed_port();

        let mut pan = TestPan::new(PanPhase::Changed, Vec2::new(0.0, -100.0), Vec2::new(0.0, -300.0));
        sheet.handle_pan(&mut port, &mut pan);
        assert_eq!(port.frame, Rect::new(0.0, 400.0, 400.0, 400.0));
        assert_eq!(pan.resets, 1);
        assert_eq!(pan.translation, Vec2::ZERO);
    }

    #[test]
    fn test_drag_past_expanded_anchor_is_ignored() {
        let mut sheet = animator();
        let mut port = collapsed_port();

        let mut pan = TestPan::new(PanPhase::Changed, Vec2::new(0.0, -301.0), Vec2::ZERO);
        sheet.handle_pan(&mut port, &mut pan);
        assert_eq!(port.frame, Rect::new(0.0, 500.0, 400.0, 300.0));
        assert_eq!(pan.resets, 0);

        // Below the bottom edge
        let mut pan = TestPan::new(PanPhase::Changed, Vec2::new(0.0, 301.0), Vec2::ZERO);
        sheet.handle_pan(&mut port, &mut pan);
        assert_eq!(port.frame.y(), 500.0);
    }

    #[test]
    fn test_upward_release_settles_expanded() {
        let mut sheet = animator();
        let mut port = collapsed_port();

        let mut pan = TestPan::new(PanPhase::Ended, Vec2::ZERO, Vec2::new(0.0, -200.0));
        sheet.handle_pan(&mut port, &mut pan);

        let (animation, purpose) = port.last_animation().copied().unwrap();
        assert_eq!(purpose, AnimationPurpose::Settle(SheetState::Expanded));
        assert_eq!(animation.to, Rect::new(0.0, 200.0, 400.0, 600.0));
        assert_eq!(animation.duration, 0.5);
        assert!(animation.allow_user_interaction);
        assert!(matches!(animation.curve, AnimationCurve::Spring(_)));

        // Not committed until the settle completes
        assert_eq!(port.state, SheetState::Collapsed);
        sheet.finish_settle(&mut port, SheetState::Expanded);
        assert_eq!(port.state, SheetState::Expanded);
        assert_eq!(port.pan_completions, 1);
        assert_eq!(port.scroll_enabled, Some(true));
    }

    #[test]
    fn test_cancel_behaves_like_end() {
        let mut sheet = animator();
        let mut port = collapsed_port();

        let mut pan = TestPan::new(PanPhase::Cancelled, Vec2::ZERO, Vec2::new(0.0, -200.0));
        sheet.handle_pan(&mut port, &mut pan);
        assert_eq!(
            port.last_animation().map(|(_, purpose)| *purpose),
            Some(AnimationPurpose::Settle(SheetState::Expanded))
        );
    }

    #[test]
    fn test_release_below_anchor_dismisses() {
        let mut sheet = animator();
        let mut port = collapsed_port();
        port.frame = Rect::new(0.0, 650.0, 400.0, 150.0);

        let mut pan = TestPan::new(PanPhase::Ended, Vec2::ZERO, Vec2::new(0.0, 300.0));
        sheet.handle_pan(&mut port, &mut pan);

        assert_eq!(port.dismissed, Some(0.25));
        assert!(port.animations.is_empty());
    }

    #[test]
    fn test_collapsed_scroll_only_when_degenerate() {
        let sheet = animator();
        assert!(!sheet.scroll_enabled_after(SheetState::Collapsed, HEIGHTS));
        assert!(sheet.scroll_enabled_after(SheetState::Collapsed, HeightPair::new(400.0, 400.0)));
        assert!(!sheet.scroll_enabled_after(SheetState::Minimised, HEIGHTS));
    }

    #[test]
    fn test_reset_heights_reanchors() {
        let mut sheet = animator();
        let mut port = collapsed_port();
        port.heights = HeightPair::new(350.0, 600.0);

        sheet.reset_heights(&mut port);
        let (animation, purpose) = port.last_animation().copied().unwrap();
        assert_eq!(purpose, AnimationPurpose::Resize);
        assert_eq!(animation.to, Rect::new(0.0, 450.0, 400.0, 350.0));
        assert_eq!(animation.duration, 0.2);
        assert!(matches!(animation.curve, AnimationCurve::Eased(Easing::EaseInOut)));
    }

    #[test]
    fn test_dismissal_slides_below() {
        let mut sheet = animator();
        let mut port = collapsed_port();

        sheet.will_begin_dismissal(&mut port);
        let (animation, purpose) = port.last_animation().copied().unwrap();
        assert_eq!(purpose, AnimationPurpose::Dismissal);
        assert_eq!(animation.to.y(), 800.0);
    }

    #[test]
    fn test_dismissal_leaves_through_entry_edge() {
        let settings = AnimatorSettings::default();
        let cases = [
            (PresentationDirection::TopToBottom, Rect::new(0.0, -300.0, 400.0, 300.0)),
            (PresentationDirection::LeftToRight, Rect::new(-400.0, 500.0, 400.0, 300.0)),
            (PresentationDirection::RightToLeft, Rect::new(400.0, 500.0, 400.0, 300.0)),
        ];
        for (direction, expected) in cases {
            let mut sheet = BottomSheetAnimator::new(direction, settings);
            let mut port = collapsed_port();
            sheet.will_begin_dismissal(&mut port);
            assert_eq!(port.frame, expected, "{direction:?}");
        }
    }

    #[test]
    fn test_reset_during_settle_anchors_at_settle_target() {
        let mut sheet = animator();
        let mut port = collapsed_port();
        port.settling = Some(SheetState::Expanded);

        sheet.reset_heights(&mut port);
        let (animation, _) = port.last_animation().copied().unwrap();
        assert_eq!(animation.to, Rect::new(0.0, 200.0, 400.0, 600.0));
    }
}
