//! Shared fixtures for sheet integration tests
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use drape_core::{PanPhase, PanRecognizer, Rect, SheetEvent, Vec2};
use drape_sheet::{
    AnimationPurpose, AnimationRequest, SharedScrollRegion, SheetConfig, SheetContent, SheetContext,
    SheetController, SheetDelegate, SheetHost, SheetLayout, TransitionSpec, ViewHandle,
};

pub const BOUNDS: Rect = Rect::new(0.0, 0.0, 400.0, 800.0);

pub type Log = Arc<Mutex<Vec<String>>>;

pub fn new_log() -> Log {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn entries(log: &Log, prefix: &str) -> Vec<String> {
    log.lock()
        .unwrap()
        .iter()
        .filter(|entry| entry.starts_with(prefix))
        .cloned()
        .collect()
}

fn push(log: &Log, entry: impl Into<String>) {
    log.lock().unwrap().push(entry.into());
}

// ============================================================================
// Host
// ============================================================================

#[derive(Default)]
pub struct RecordingHost {
    pub log: Log,
    pub layouts: Vec<SheetLayout>,
    pub requests: Vec<AnimationRequest>,
    pub dismissals: Vec<f64>,
    pub pan_enabled: Option<bool>,
    pub header_raises: usize,
}

impl RecordingHost {
    pub fn new(log: Log) -> Self {
        Self {
            log,
            ..Self::default()
        }
    }

    pub fn last_request(&self) -> Option<&AnimationRequest> {
        self.requests.last()
    }

    pub fn requests_for(&self, purpose: AnimationPurpose) -> Vec<AnimationRequest> {
        self.requests
            .iter()
            .filter(|request| request.purpose == purpose)
            .copied()
            .collect()
    }
}

impl SheetHost for RecordingHost {
    fn apply_layout(&mut self, layout: &SheetLayout) {
        self.layouts.push(*layout);
    }

    fn run_animation(&mut self, request: AnimationRequest) {
        push(&self.log, format!("host.animate.{:?}", request.purpose));
        self.requests.push(request);
    }

    fn dismiss(&mut self, transition: &TransitionSpec) {
        push(&self.log, "host.dismiss");
        self.dismissals.push(transition.duration());
    }

    fn set_pan_enabled(&mut self, enabled: bool) {
        self.pan_enabled = Some(enabled);
    }

    fn bring_header_to_front(&mut self) {
        self.header_raises += 1;
    }
}

// ============================================================================
// Content and delegate
// ============================================================================

pub struct RecordingContent {
    pub log: Log,
    pub has_view: bool,
    pub collapsed: Option<f32>,
    pub expanded: Option<f32>,
    pub scroll: Option<SharedScrollRegion>,
}

impl RecordingContent {
    pub fn new(log: Log) -> Self {
        Self {
            log,
            has_view: true,
            collapsed: Some(300.0),
            expanded: Some(600.0),
            scroll: None,
        }
    }

    pub fn heights(mut self, collapsed: Option<f32>, expanded: Option<f32>) -> Self {
        self.collapsed = collapsed;
        self.expanded = expanded;
        self
    }

    pub fn without_view(mut self) -> Self {
        self.has_view = false;
        self
    }

    pub fn observing(mut self, scroll: SharedScrollRegion) -> Self {
        self.scroll = Some(scroll);
        self
    }
}

impl SheetContent for RecordingContent {
    fn view(&self) -> Option<ViewHandle> {
        self.has_view.then_some(ViewHandle(7))
    }

    fn collapsed_height(&self, _sheet: &SheetContext) -> Option<f32> {
        self.collapsed
    }

    fn expanded_height(&self, _sheet: &SheetContext) -> Option<f32> {
        self.expanded
    }

    fn scroll_view_to_observe(&self, _sheet: &SheetContext) -> Option<SharedScrollRegion> {
        self.scroll.clone()
    }

    fn will_add_content(&mut self, _sheet: &SheetContext) {
        push(&self.log, "content.will_add");
    }

    fn did_add_content(&mut self, _sheet: &SheetContext) {
        push(&self.log, "content.did_add");
    }

    fn will_remove_content(&mut self, _sheet: &SheetContext) {
        push(&self.log, "content.will_remove");
    }

    fn did_remove_content(&mut self, _sheet: &SheetContext) {
        push(&self.log, "content.did_remove");
    }

    fn will_begin_touch_handling(&mut self, _sheet: &SheetContext) {
        push(&self.log, "content.touch");
    }
}

pub struct RecordingDelegate {
    pub log: Log,
    pub allow_drag: bool,
}

impl RecordingDelegate {
    pub fn new(log: Log) -> Self {
        Self {
            log,
            allow_drag: true,
        }
    }
}

impl SheetDelegate for RecordingDelegate {
    fn should_begin_drag(&mut self, _sheet: &SheetContext) -> bool {
        self.allow_drag
    }

    fn notify(&mut self, event: SheetEvent, _sheet: &SheetContext) {
        push(&self.log, format!("delegate.{}", event.name()));
    }
}

// ============================================================================
// Gestures
// ============================================================================

/// Pan event with a fixed translation and velocity
pub struct ScriptedPan {
    pub phase: PanPhase,
    pub translation: Vec2,
    pub velocity: Vec2,
}

impl ScriptedPan {
    pub fn vertical(phase: PanPhase, dy: f32, velocity_y: f32) -> Self {
        Self {
            phase,
            translation: Vec2::new(0.0, dy),
            velocity: Vec2::new(0.0, velocity_y),
        }
    }

    pub fn new(phase: PanPhase, translation: Vec2, velocity: Vec2) -> Self {
        Self {
            phase,
            translation,
            velocity,
        }
    }
}

impl PanRecognizer for ScriptedPan {
    fn phase(&self) -> PanPhase {
        self.phase
    }

    fn translation(&self) -> Vec2 {
        self.translation
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn reset_translation(&mut self) {
        self.translation = Vec2::ZERO;
    }
}

// ============================================================================
// Scenarios
// ============================================================================

pub type Sheet = SheetController<RecordingHost>;

/// Present a sheet and run its appearance sequence to completion
pub fn present(content: RecordingContent, config: SheetConfig, log: &Log) -> Sheet {
    let mut sheet = SheetController::with_config(content, RecordingHost::new(log.clone()), config)
        .with_delegate(RecordingDelegate::new(log.clone()));
    sheet.view_will_appear(BOUNDS);
    sheet.view_did_appear();
    sheet
}

/// Default bottom sheet with heights 300/600 in an 800pt tall container
pub fn presented_sheet(log: &Log) -> Sheet {
    present(RecordingContent::new(log.clone()), SheetConfig::default(), log)
}

/// Report every animation the host was asked to run as finished
pub fn finish_animations(sheet: &mut Sheet) {
    let ids: Vec<_> = sheet.host_mut().requests.drain(..).map(|request| request.id).collect();
    for id in ids {
        sheet.animation_finished(id, true);
    }
}

/// Drag by `dy` and release with `velocity_y`
pub fn drag_and_release(sheet: &mut Sheet, dy: f32, velocity_y: f32) {
    sheet.handle_pan(&mut ScriptedPan::vertical(PanPhase::Began, 0.0, velocity_y));
    sheet.handle_pan(&mut ScriptedPan::vertical(PanPhase::Changed, dy, velocity_y));
    sheet.handle_pan(&mut ScriptedPan::vertical(PanPhase::Ended, 0.0, velocity_y));
}
