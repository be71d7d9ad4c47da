//! Appearance lifecycle, delegate notifications and host interplay

mod common;

use common::*;
use drape_core::{PanPhase, Point, PresentationDirection, Rect, SheetState, Vec2};
use drape_sheet::{
    AnimationPurpose, AnimatorKind, ParentKind, ScrollViewState, SharedScrollRegion, SheetConfig, SheetController,
    StatusBarAnimation, StatusBarStyle,
};

fn event_log(log: &Log) -> Vec<String> {
    log.lock()
        .unwrap()
        .iter()
        .filter(|entry| entry.starts_with("delegate.") || entry.starts_with("content."))
        .cloned()
        .collect()
}

#[test]
fn test_appearance_notifies_in_order() {
    let log = new_log();
    let mut sheet = SheetController::new(RecordingContent::new(log.clone()), RecordingHost::new(log.clone()))
        .with_delegate(RecordingDelegate::new(log.clone()));

    sheet.view_will_appear(BOUNDS);
    assert_eq!(
        event_log(&log),
        vec!["content.will_add", "delegate.will_show", "delegate.will_appear"]
    );
    assert_eq!(sheet.state(), SheetState::Minimised);
    assert_eq!(sheet.host().pan_enabled, None);

    log.lock().unwrap().clear();
    sheet.view_did_appear();
    assert_eq!(
        event_log(&log),
        vec!["content.did_add", "delegate.did_show", "delegate.did_appear"]
    );
    assert_eq!(sheet.state(), SheetState::Collapsed);
    assert_eq!(sheet.host().pan_enabled, Some(true));
    assert_eq!(sheet.pending_animations(), 0);
}

#[test]
fn test_content_without_view_still_animates() {
    let log = new_log();
    let content = RecordingContent::new(log.clone()).without_view();
    let sheet = present(content, SheetConfig::default(), &log);

    assert_eq!(event_log(&log), vec!["delegate.will_appear", "delegate.did_appear"]);
    assert_eq!(sheet.host().requests_for(AnimationPurpose::Presentation).len(), 1);
    assert_eq!(sheet.state(), SheetState::Collapsed);
}

#[test]
fn test_dismissal_sequence() {
    let log = new_log();
    let mut sheet = presented_sheet(&log);
    log.lock().unwrap().clear();

    sheet.dismiss();
    assert_eq!(sheet.state(), SheetState::Minimised);
    assert_eq!(sheet.host().dismissals, vec![0.5]);

    sheet.view_will_disappear();
    assert_eq!(
        event_log(&log),
        vec!["content.will_remove", "delegate.will_hide", "delegate.will_disappear"]
    );
    let request = *sheet.host().last_request().unwrap();
    assert_eq!(request.purpose, AnimationPurpose::Dismissal);
    assert_eq!(request.animation.to, Rect::new(0.0, 800.0, 400.0, 300.0));

    log.lock().unwrap().clear();
    sheet.view_did_disappear();
    assert_eq!(
        event_log(&log),
        vec!["content.did_remove", "delegate.did_hide", "delegate.did_disappear"]
    );
    assert_eq!(sheet.host().pan_enabled, Some(false));
}

#[test]
fn test_dismiss_is_idempotent() {
    let log = new_log();
    let mut sheet = presented_sheet(&log);

    sheet.dismiss();
    sheet.dismiss();
    assert_eq!(sheet.host().dismissals.len(), 1);
    assert!(sheet.is_dismissing());
}

#[test]
fn test_disappearing_while_visible_skips_hide() {
    let log = new_log();
    let mut sheet = presented_sheet(&log);
    log.lock().unwrap().clear();

    // Host covered the sheet without dismissing it
    sheet.view_will_disappear();
    sheet.view_did_disappear();
    assert_eq!(event_log(&log), vec!["delegate.will_disappear", "delegate.did_disappear"]);
    assert_eq!(sheet.state(), SheetState::Collapsed);
}

#[test]
fn test_touch_outside_dismisses() {
    let log = new_log();
    let mut sheet = presented_sheet(&log);

    assert!(!sheet.handle_touch_began(Point::new(200.0, 600.0)));
    assert!(sheet.host().dismissals.is_empty());

    assert!(sheet.handle_touch_began(Point::new(200.0, 100.0)));
    assert_eq!(sheet.host().dismissals, vec![0.5]);
}

#[test]
fn test_touch_outside_can_be_disabled() {
    let log = new_log();
    let config = SheetConfig {
        dismiss_on_touch_outside: false,
        ..SheetConfig::default()
    };
    let mut sheet = present(RecordingContent::new(log.clone()), config, &log);

    assert!(!sheet.handle_touch_began(Point::new(200.0, 100.0)));
    assert_eq!(sheet.state(), SheetState::Collapsed);
}

#[test]
fn test_gesture_gate_consults_delegate_and_content() {
    let log = new_log();
    let mut sheet = presented_sheet(&log);
    assert!(sheet.gesture_should_begin());
    assert_eq!(entries(&log, "content.touch").len(), 1);

    let veto = RecordingDelegate {
        log: log.clone(),
        allow_drag: false,
    };
    sheet.set_delegate(Some(Box::new(veto)));
    assert!(!sheet.gesture_should_begin());
    assert_eq!(entries(&log, "content.touch").len(), 1);
}

#[test]
fn test_equal_heights_still_allow_drag() {
    let log = new_log();
    let content = RecordingContent::new(log.clone()).heights(Some(400.0), Some(400.0));
    let mut sheet = present(content, SheetConfig::default(), &log);
    assert!(sheet.gesture_should_begin());
}

#[test]
fn test_drag_during_settle_is_ignored() {
    let log = new_log();
    let mut sheet = presented_sheet(&log);

    drag_and_release(&mut sheet, 0.0, -200.0);
    let requests = sheet.host().requests.len();
    let frame = sheet.content_frame();

    // Second drag while the settle is still running
    drag_and_release(&mut sheet, 100.0, 400.0);
    assert_eq!(sheet.content_frame(), frame);
    assert_eq!(sheet.host().requests.len(), requests);

    finish_animations(&mut sheet);
    assert_eq!(sheet.state(), SheetState::Expanded);

    // Once settled, drags work again
    sheet.handle_pan(&mut ScriptedPan::vertical(PanPhase::Began, 0.0, 100.0));
    sheet.handle_pan(&mut ScriptedPan::vertical(PanPhase::Changed, 50.0, 100.0));
    assert_eq!(sheet.content_frame().y(), 250.0);
}

#[test]
fn test_drag_before_appearance_completes_is_ignored() {
    let log = new_log();
    let mut sheet = SheetController::new(RecordingContent::new(log.clone()), RecordingHost::new(log.clone()));
    sheet.view_will_appear(BOUNDS);

    drag_and_release(&mut sheet, -100.0, -400.0);
    assert_eq!(sheet.content_frame(), Rect::new(0.0, 500.0, 400.0, 300.0));
    assert_eq!(sheet.host().requests.len(), 1);
}

#[test]
fn test_dismiss_drops_pending_settle() {
    let log = new_log();
    let mut sheet = presented_sheet(&log);

    drag_and_release(&mut sheet, 0.0, -200.0);
    sheet.dismiss();
    finish_animations(&mut sheet);

    assert_eq!(sheet.state(), SheetState::Minimised);
    assert_eq!(sheet.host().header_raises, 0);
}

#[test]
fn test_interrupted_settle_still_commits() {
    let log = new_log();
    let mut sheet = presented_sheet(&log);

    drag_and_release(&mut sheet, 0.0, -200.0);
    let id = sheet.host().last_request().unwrap().id;
    sheet.animation_finished(id, false);
    assert_eq!(sheet.state(), SheetState::Expanded);

    // Reported twice: ignored
    sheet.animation_finished(id, true);
    assert_eq!(sheet.state_machine().history().len(), 2);
}

#[test]
fn test_keyboard_grows_and_restores_heights() {
    let log = new_log();
    let config = SheetConfig {
        handle_keyboard: true,
        ..SheetConfig::default()
    };
    let mut sheet = present(RecordingContent::new(log.clone()), config, &log);

    sheet.keyboard_will_show(Some(200.0));
    assert_eq!(sheet.heights().collapsed, 500.0);
    let request = *sheet.host().last_request().unwrap();
    assert_eq!(request.purpose, AnimationPurpose::Resize);
    assert_eq!(request.animation.to, Rect::new(0.0, 300.0, 400.0, 500.0));

    sheet.keyboard_did_show();
    assert!(sheet.is_keyboard_present());

    sheet.keyboard_will_change_frame(Some(100.0));
    assert_eq!(sheet.heights().collapsed, 400.0);

    sheet.keyboard_will_hide();
    assert_eq!(sheet.heights().collapsed, 300.0);
    assert_eq!(sheet.content_frame(), Rect::new(0.0, 500.0, 400.0, 300.0));

    sheet.keyboard_did_hide();
    assert!(!sheet.is_keyboard_present());
}

#[test]
fn test_keyboard_ignored_unless_enabled() {
    let log = new_log();
    let mut sheet = presented_sheet(&log);
    let requests = sheet.host().requests.len();

    sheet.keyboard_will_show(Some(200.0));
    sheet.keyboard_did_show();
    assert_eq!(sheet.heights().collapsed, 300.0);
    assert_eq!(sheet.host().requests.len(), requests);
    assert!(!sheet.is_keyboard_present());
}

#[test]
fn test_scroll_region_is_coordinated() {
    let log = new_log();
    let region = ScrollViewState::at_offset(0.0).shared();
    let shared: SharedScrollRegion = region.clone();
    let content = RecordingContent::new(log.clone()).observing(shared);
    let mut sheet = present(content, SheetConfig::default(), &log);

    // Collapsed with room to expand: the sheet owns the drag
    assert!(!region.lock().unwrap().scroll_enabled);

    drag_and_release(&mut sheet, 0.0, -200.0);
    finish_animations(&mut sheet);
    assert!(region.lock().unwrap().scroll_enabled);

    // At the top and pulling down: suspended
    assert!(!sheet.should_recognize_simultaneously(Vec2::new(0.0, 300.0)));
    assert!(!region.lock().unwrap().scroll_enabled);

    // Pushing up: free to scroll
    assert!(!sheet.should_recognize_simultaneously(Vec2::new(0.0, -300.0)));
    assert!(region.lock().unwrap().scroll_enabled);

    // Mid-content: free to scroll either way
    region.lock().unwrap().offset_y = 120.0;
    sheet.should_recognize_simultaneously(Vec2::new(0.0, 300.0));
    assert!(region.lock().unwrap().scroll_enabled);
}

#[test]
fn test_pop_up_presents_expanded() {
    let log = new_log();
    let content = RecordingContent::new(log.clone()).heights(Some(300.0), None);
    let mut sheet = present(content, SheetConfig::pop_up(PresentationDirection::BottomToTop), &log);

    assert_eq!(sheet.animator().kind(), AnimatorKind::PopUpVertical);
    assert_eq!(sheet.state(), SheetState::Expanded);
    assert_eq!(sheet.content_frame(), Rect::new(10.0, 250.0, 380.0, 300.0));

    // Sideways drags are not for a vertical pop-up
    sheet.handle_pan(&mut ScriptedPan::new(PanPhase::Began, Vec2::ZERO, Vec2::new(400.0, 0.0)));
    sheet.handle_pan(&mut ScriptedPan::new(PanPhase::Changed, Vec2::new(0.0, 90.0), Vec2::new(400.0, 20.0)));
    assert_eq!(sheet.content_frame().y(), 250.0);

    // Fling it off the bottom
    sheet.handle_pan(&mut ScriptedPan::new(PanPhase::Changed, Vec2::new(0.0, 400.0), Vec2::new(0.0, 900.0)));
    sheet.handle_pan(&mut ScriptedPan::new(PanPhase::Ended, Vec2::ZERO, Vec2::new(0.0, 900.0)));
    assert_eq!(sheet.host().dismissals, vec![0.5]);
    assert_eq!(sheet.state(), SheetState::Minimised);
}

#[test]
fn test_horizontal_pop_up_selected() {
    let log = new_log();
    let sheet = present(
        RecordingContent::new(log.clone()),
        SheetConfig::pop_up(PresentationDirection::RightToLeft),
        &log,
    );
    assert_eq!(sheet.animator().kind(), AnimatorKind::PopUpHorizontal);
    assert_eq!(sheet.content_frame().x(), 10.0);
}

#[test]
fn test_header_and_status_bar_defaults() {
    let log = new_log();
    let mut sheet = presented_sheet(&log);

    assert!(sheet.shows_close_button());
    assert!(!sheet.prefers_status_bar_hidden());
    assert_eq!(sheet.preferred_status_bar_style(), StatusBarStyle::Default);
    assert_eq!(sheet.preferred_status_bar_update_animation(), StatusBarAnimation::Fade);

    sheet.set_safe_area_top(20.0);
    assert_eq!(sheet.layout().header.map(|header| header.height()), Some(44.0));
}

#[test]
fn test_no_header_when_disabled() {
    let log = new_log();
    let config = SheetConfig {
        show_default_header: false,
        ..SheetConfig::default()
    };
    let sheet = present(RecordingContent::new(log.clone()), config, &log);

    assert_eq!(sheet.header_item(), None);
    assert!(!sheet.shows_close_button());
    assert_eq!(sheet.layout().content, Rect::new(0.0, 0.0, 400.0, 300.0));
}

#[test]
fn test_transition_duration_rejects_negative() {
    let log = new_log();
    let mut sheet = presented_sheet(&log);

    sheet.set_transition_duration(-2.0);
    assert_eq!(sheet.transition().duration(), 0.5);
    sheet.set_transition_duration(0.3);
    sheet.dismiss();
    assert_eq!(sheet.host().dismissals, vec![0.3]);
}

#[test]
fn test_attach_to_window() {
    let log = new_log();
    let mut sheet = presented_sheet(&log);
    sheet.attach_to_parent(ParentKind::Window);
    assert_eq!(sheet.parent(), Some(ParentKind::Window));
}

#[test]
#[should_panic(expected = "navigation container")]
fn test_attach_to_navigation_panics() {
    let log = new_log();
    let mut sheet = presented_sheet(&log);
    sheet.attach_to_parent(ParentKind::Navigation);
}

#[test]
#[should_panic(expected = "read-only")]
fn test_transitioning_delegate_is_read_only() {
    let log = new_log();
    let mut sheet = presented_sheet(&log);
    sheet.set_transitioning_delegate(Box::new(()));
}

#[test]
fn test_resize_during_settle_anchors_at_settle_target() {
    let log = new_log();
    let mut sheet = presented_sheet(&log);

    drag_and_release(&mut sheet, 0.0, -200.0);
    let settle = sheet.host().last_request().unwrap().id;
    sheet.reset_heights(300.0, 600.0);

    let resize = *sheet.host().last_request().unwrap();
    assert_eq!(resize.purpose, AnimationPurpose::Resize);
    assert_eq!(resize.animation.to, Rect::new(0.0, 200.0, 400.0, 600.0));

    // The resize interrupts the settle; its completion still commits
    sheet.animation_finished(settle, false);
    sheet.animation_finished(resize.id, true);

    assert_eq!(sheet.state(), SheetState::Expanded);
    assert_eq!(sheet.content_frame(), Rect::new(0.0, 200.0, 400.0, 600.0));
    assert_eq!(sheet.pending_animations(), 0);
}
