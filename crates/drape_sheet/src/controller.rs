//! Sheet controller
//!
//! Owns the content container frame, the discrete state and the resting
//! heights. The host drives it with appearance callbacks, pan events and
//! animation completions; the controller answers with layouts, animation
//! requests and delegate notifications.
//!
//! State only advances in completion callbacks. Between a drag release and
//! its settle completion the controller still reports the pre-drag state.

use std::any::Any;

use drape_animation::FrameAnimation;
use drape_core::{
    HeightPair, PanPhase, PanRecognizer, Point, Rect, SheetEvent, SheetState, SheetStateMachine, Vec2,
};
use slotmap::SlotMap;

use crate::animator::{
    animator_for, predicted_direction, AnimatorSettings, PresentationAnimator, PresentationPort,
};
use crate::config::SheetConfig;
use crate::content::{NavigationItem, SheetContent, SheetContext, StatusBarAnimation, StatusBarStyle};
use crate::delegate::SheetDelegate;
use crate::host::{AnimationId, AnimationPurpose, AnimationRequest, SheetHost};
use crate::keyboard::KeyboardAvoidance;
use crate::layout::SheetLayout;
use crate::scroll::ScrollCoordinator;
use crate::transition::TransitionSpec;

/// Kind of container a sheet is being attached to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParentKind {
    /// Presented modally over a window
    Window,
    /// Embedded in a plain container view
    Container,
    /// Pushed onto a navigation stack (not supported)
    Navigation,
}

// ============================================================================
// Model
// ============================================================================

/// Everything the animator may read or propose changes to
struct SheetModel<H: SheetHost> {
    host: H,
    config: SheetConfig,
    machine: SheetStateMachine,
    bounds: Rect,
    frame: Rect,
    layout: SheetLayout,
    heights: HeightPair,
    transition: TransitionSpec,
    scroll: ScrollCoordinator,
    safe_area_top: f32,
    /// Animations handed to the host and not yet reported back
    pending: SlotMap<AnimationId, AnimationPurpose>,
    dismissing: bool,
}

impl<H: SheetHost> SheetModel<H> {
    fn layout_for(&self, frame: Rect) -> SheetLayout {
        SheetLayout::compute(
            frame,
            self.config.show_default_header,
            self.config.header_min_height,
            self.safe_area_top,
        )
    }

    fn relayout(&mut self) {
        self.layout = self.layout_for(self.frame);
        self.host.apply_layout(&self.layout);
    }

    /// An animation that should keep new drags away is in flight
    fn blocks_drag(&self) -> bool {
        self.dismissing
            || self
                .pending
                .values()
                .any(|purpose| !matches!(purpose, AnimationPurpose::Resize))
    }
}

impl<H: SheetHost> PresentationPort for SheetModel<H> {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn content_frame(&self) -> Rect {
        self.frame
    }

    fn heights(&self) -> HeightPair {
        self.heights
    }

    fn state(&self) -> SheetState {
        self.machine.state()
    }

    fn transition(&self) -> TransitionSpec {
        self.transition
    }

    fn target_state(&self) -> SheetState {
        self.pending
            .values()
            .find_map(|purpose| match purpose {
                AnimationPurpose::Settle(state) => Some(*state),
                _ => None,
            })
            .unwrap_or_else(|| self.machine.state())
    }

    fn update_content_frame(&mut self, frame: Rect) {
        self.frame = frame;
        self.relayout();
    }

    fn animate_content_frame(&mut self, animation: FrameAnimation, purpose: AnimationPurpose) -> AnimationId {
        let id = self.pending.insert(purpose);

        // The model frame jumps to the target; the host animates the visuals
        self.frame = animation.to;
        self.layout = self.layout_for(animation.to);

        tracing::trace!("animating container to {:?} for {:?}", animation.to, purpose);
        self.host.run_animation(AnimationRequest {
            id,
            animation,
            layout: self.layout,
            purpose,
        });
        id
    }

    fn dismiss(&mut self, duration: f64) {
        if self.dismissing {
            return;
        }
        self.dismissing = true;
        self.machine.commit(SheetState::Minimised);
        self.pending
            .retain(|_, purpose| !matches!(purpose, AnimationPurpose::Settle(_)));
        self.transition.set_duration(duration);

        tracing::debug!("dismissing sheet over {:.3}s", self.transition.duration());
        self.host.dismiss(&self.transition);
    }

    fn update_scroll_enabled(&mut self, enabled: bool) {
        self.scroll.set_scroll_enabled(enabled);
    }

    fn pan_completed(&mut self) {
        if self.config.show_default_header {
            self.host.bring_header_to_front();
        }
    }

    fn commit_state(&mut self, state: SheetState) {
        self.machine.commit(state);
    }
}

// ============================================================================
// Controller
// ============================================================================

/// Modal sheet hosting one piece of content
///
/// One controller serves exactly one presentation; build a new one to
/// present again.
pub struct SheetController<H: SheetHost> {
    content: Box<dyn SheetContent>,
    delegate: Option<Box<dyn SheetDelegate>>,
    animator: Box<dyn PresentationAnimator>,
    model: SheetModel<H>,
    keyboard: KeyboardAvoidance,
    parent: Option<ParentKind>,
    pan_enabled: bool,
    /// The current drag began while an animation was in flight
    drag_suppressed: bool,
}

impl<H: SheetHost> SheetController<H> {
    /// Sheet with the default configuration
    pub fn new(content: impl SheetContent + 'static, host: H) -> Self {
        Self::with_config(content, host, SheetConfig::default())
    }

    pub fn with_config(content: impl SheetContent + 'static, host: H, config: SheetConfig) -> Self {
        let animator = animator_for(config.style, config.direction, AnimatorSettings::from(&config));
        let transition = config.transition();

        Self {
            content: Box::new(content),
            delegate: None,
            animator,
            model: SheetModel {
                host,
                config,
                machine: SheetStateMachine::new(),
                bounds: Rect::ZERO,
                frame: Rect::ZERO,
                layout: SheetLayout::default(),
                heights: HeightPair::default(),
                transition,
                scroll: ScrollCoordinator::new(),
                safe_area_top: 0.0,
                pending: SlotMap::with_key(),
                dismissing: false,
            },
            keyboard: KeyboardAvoidance::new(),
            parent: None,
            pan_enabled: false,
            drag_suppressed: false,
        }
    }

    /// Builder: attach a delegate
    pub fn with_delegate(mut self, delegate: impl SheetDelegate + 'static) -> Self {
        self.delegate = Some(Box::new(delegate));
        self
    }

    pub fn set_delegate(&mut self, delegate: Option<Box<dyn SheetDelegate>>) {
        self.delegate = delegate;
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn state(&self) -> SheetState {
        self.model.machine.state()
    }

    pub fn state_machine(&self) -> &SheetStateMachine {
        &self.model.machine
    }

    pub fn content_frame(&self) -> Rect {
        self.model.frame
    }

    pub fn heights(&self) -> HeightPair {
        self.model.heights
    }

    pub fn bounds(&self) -> Rect {
        self.model.bounds
    }

    pub fn layout(&self) -> &SheetLayout {
        &self.model.layout
    }

    pub fn config(&self) -> &SheetConfig {
        &self.model.config
    }

    pub fn transition(&self) -> &TransitionSpec {
        &self.model.transition
    }

    /// Change the present/dismiss duration; negative values are ignored
    pub fn set_transition_duration(&mut self, duration: f64) {
        self.model.transition.set_duration(duration);
    }

    pub fn animator(&self) -> &dyn PresentationAnimator {
        self.animator.as_ref()
    }

    pub fn host(&self) -> &H {
        &self.model.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.model.host
    }

    pub fn is_pan_enabled(&self) -> bool {
        self.pan_enabled
    }

    pub fn is_dismissing(&self) -> bool {
        self.model.dismissing
    }

    /// Number of animations the host has not reported back yet
    pub fn pending_animations(&self) -> usize {
        self.model.pending.len()
    }

    pub fn parent(&self) -> Option<ParentKind> {
        self.parent
    }

    /// Snapshot handed to content and delegate callbacks
    pub fn context(&self) -> SheetContext {
        SheetContext {
            bounds: self.model.bounds,
            frame: self.model.frame,
            state: self.model.machine.state(),
            heights: self.model.heights,
        }
    }

    fn has_content_view(&self) -> bool {
        self.content.view().is_some()
    }

    fn emit(&mut self, event: SheetEvent) {
        tracing::debug!("sheet {}", event);
        let ctx = self.context();
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.notify(event, &ctx);
        }
    }

    // ========================================================================
    // Attachment
    // ========================================================================

    /// Record the container the sheet is attached to
    ///
    /// # Panics
    ///
    /// A sheet is presented, never pushed: attaching it to a navigation
    /// stack panics.
    #[track_caller]
    pub fn attach_to_parent(&mut self, parent: ParentKind) {
        if parent == ParentKind::Navigation {
            panic!("a sheet cannot be embedded in a navigation container; present it instead");
        }
        self.parent = Some(parent);
    }

    /// The sheet drives its own transition
    ///
    /// # Panics
    ///
    /// Always. The transitioning delegate is read-only.
    #[track_caller]
    pub fn set_transitioning_delegate(&mut self, _delegate: Box<dyn Any>) -> ! {
        panic!("the transitioning delegate of a sheet is read-only");
    }

    // ========================================================================
    // Appearance lifecycle
    // ========================================================================

    /// The sheet is about to appear in `bounds`
    ///
    /// On first presentation this resolves the resting heights, places the
    /// container off-screen and starts the slide-in.
    pub fn view_will_appear(&mut self, bounds: Rect) {
        self.model.bounds = bounds;

        if self.state() == SheetState::Minimised && !self.model.dismissing {
            let ctx = self.context();
            self.model.heights = HeightPair::resolve(
                self.content.collapsed_height(&ctx),
                self.content.expanded_height(&ctx),
                bounds.height(),
                self.model.config.collapsed_height_ratio,
            );
            tracing::debug!(
                "presenting sheet in {}x{} with heights {:?}",
                bounds.width(),
                bounds.height(),
                self.model.heights
            );

            let initial = self.animator.initial_frame(bounds, self.model.heights);
            self.model.update_content_frame(initial);

            let has_view = self.has_content_view();
            if has_view {
                let ctx = self.context();
                self.content.will_add_content(&ctx);
            }

            self.animator.will_begin_presentation(&mut self.model);

            if has_view {
                self.emit(SheetEvent::WillShow);
            }
        }

        self.emit(SheetEvent::WillAppear);
    }

    /// The present transition finished
    pub fn view_did_appear(&mut self) {
        if self.state() == SheetState::Minimised && !self.model.dismissing {
            self.model
                .pending
                .retain(|_, purpose| *purpose != AnimationPurpose::Presentation);
            self.animator.did_begin_presentation(&mut self.model);

            let has_view = self.has_content_view();
            if has_view {
                let ctx = self.context();
                self.content.did_add_content(&ctx);
            }

            let enable_pan = self.model.config.enable_pan_gesture;
            self.set_pan_enabled(enable_pan);

            let ctx = self.context();
            self.model.scroll.observe(self.content.scroll_view_to_observe(&ctx));
            let scroll_enabled = self.animator.scroll_enabled_after(self.state(), self.model.heights);
            self.model.update_scroll_enabled(scroll_enabled);

            if has_view {
                self.emit(SheetEvent::DidShow);
            }
        }

        self.emit(SheetEvent::DidAppear);
    }

    /// Dismiss with the configured transition duration
    pub fn dismiss(&mut self) {
        let duration = self.model.transition.duration();
        self.model.dismiss(duration);
    }

    /// The dismiss transition is about to run
    pub fn view_will_disappear(&mut self) {
        if self.state() == SheetState::Minimised {
            let has_view = self.has_content_view();
            if has_view {
                let ctx = self.context();
                self.content.will_remove_content(&ctx);
            }

            self.animator.will_begin_dismissal(&mut self.model);

            if has_view {
                self.emit(SheetEvent::WillHide);
            }
        }

        self.emit(SheetEvent::WillDisappear);
    }

    /// The dismiss transition finished
    pub fn view_did_disappear(&mut self) {
        if self.state() == SheetState::Minimised {
            self.model.pending.clear();
            self.set_pan_enabled(false);

            if self.has_content_view() {
                let ctx = self.context();
                self.content.did_remove_content(&ctx);
                self.emit(SheetEvent::DidHide);
            }
        }

        self.emit(SheetEvent::DidDisappear);
    }

    /// Host report that an animation stopped
    ///
    /// Settle completions commit their state whether or not the animation
    /// ran to the end.
    pub fn animation_finished(&mut self, id: AnimationId, finished: bool) {
        let Some(purpose) = self.model.pending.remove(id) else {
            tracing::trace!("ignoring completion of stale animation {:?}", id);
            return;
        };
        tracing::trace!("animation {:?} for {:?} done (finished={})", id, purpose, finished);

        if let AnimationPurpose::Settle(state) = purpose {
            self.animator.finish_settle(&mut self.model, state);
        }
    }

    // ========================================================================
    // Gestures
    // ========================================================================

    /// Attach or detach the sheet's own pan recognizer
    pub fn set_pan_enabled(&mut self, enabled: bool) {
        self.pan_enabled = enabled;
        self.model.host.set_pan_enabled(enabled);
    }

    /// May the sheet's own drag start?
    pub fn gesture_should_begin(&mut self) -> bool {
        let ctx = self.context();
        let permitted = self.model.heights.allows_drag()
            && self
                .delegate
                .as_mut()
                .map_or(true, |delegate| delegate.should_begin_drag(&ctx));

        if permitted {
            self.content.will_begin_touch_handling(&ctx);
        }
        permitted
    }

    /// Simultaneous recognition query from the host's scroll gesture
    ///
    /// Always `false`. Suspends or re-enables the observed scroll region as
    /// a side effect, based on where a drag with `velocity` would head.
    pub fn should_recognize_simultaneously(&mut self, velocity: Vec2) -> bool {
        let ctx = self.context();
        self.model.scroll.observe(self.content.scroll_view_to_observe(&ctx));

        let state = self.state();
        let direction = predicted_direction(state, self.model.heights, self.model.bounds, self.model.frame, velocity);
        self.model
            .scroll
            .should_recognize_simultaneously(state, self.model.heights, direction)
    }

    /// Feed one pan event
    ///
    /// A drag that begins while a presentation, settle or dismissal is in
    /// flight is ignored until it ends.
    pub fn handle_pan(&mut self, pan: &mut dyn PanRecognizer) {
        if !self.pan_enabled {
            return;
        }

        let phase = pan.phase();
        if phase == PanPhase::Began {
            self.drag_suppressed = self.model.blocks_drag();
            if self.drag_suppressed {
                tracing::debug!("drag ignored while an animation is in flight");
            }
        }

        if self.drag_suppressed {
            if phase.is_finished() {
                self.drag_suppressed = false;
            }
            return;
        }

        self.animator.handle_pan(&mut self.model, pan);
    }

    /// Touch landed in the sheet's container; returns true if it dismissed
    pub fn handle_touch_began(&mut self, point: Point) -> bool {
        let outside = !self.model.frame.contains(point);
        if self.model.config.dismiss_on_touch_outside && outside && self.state().is_visible() {
            tracing::debug!("touch outside sheet at ({}, {})", point.x, point.y);
            self.dismiss();
            return true;
        }
        false
    }

    // ========================================================================
    // Heights
    // ========================================================================

    /// Replace the resting heights and re-anchor the container
    ///
    /// Each height is clamped to the container extent.
    pub fn reset_heights(&mut self, collapsed: f32, expanded: f32) {
        let extent = self.model.bounds.height().max(0.0);
        let clamp = |h: f32| if h.is_nan() { 0.0 } else { h.clamp(0.0, extent) };
        self.model.heights = HeightPair::new(clamp(collapsed), clamp(expanded));
        tracing::debug!("sheet heights reset to {:?}", self.model.heights);

        if self.state().is_visible() && !self.model.dismissing {
            self.animator.reset_heights(&mut self.model);
        }
    }

    fn apply_heights(&mut self, heights: HeightPair) {
        self.reset_heights(heights.collapsed, heights.expanded);
    }

    /// Top safe area inset; the header grows when the sheet slides under it
    pub fn set_safe_area_top(&mut self, inset: f32) {
        self.model.safe_area_top = inset.max(0.0);
        self.model.relayout();
    }

    // ========================================================================
    // Keyboard
    // ========================================================================

    pub fn keyboard_will_show(&mut self, keyboard_height: Option<f32>) {
        if !self.model.config.handle_keyboard {
            return;
        }
        if let Some(heights) = self.keyboard.will_show(self.model.heights, keyboard_height) {
            self.apply_heights(heights);
        }
    }

    pub fn keyboard_did_show(&mut self) {
        if self.model.config.handle_keyboard {
            self.keyboard.did_show();
        }
    }

    pub fn keyboard_will_hide(&mut self) {
        if !self.model.config.handle_keyboard {
            return;
        }
        if let Some(heights) = self.keyboard.will_hide() {
            self.apply_heights(heights);
        }
    }

    pub fn keyboard_did_hide(&mut self) {
        if self.model.config.handle_keyboard {
            self.keyboard.did_hide(self.model.heights);
        }
    }

    pub fn keyboard_will_change_frame(&mut self, keyboard_height: Option<f32>) {
        if !self.model.config.handle_keyboard {
            return;
        }
        if let Some(heights) = self.keyboard.will_change_frame(keyboard_height) {
            self.apply_heights(heights);
        }
    }

    pub fn is_keyboard_present(&self) -> bool {
        self.keyboard.is_present()
    }

    // ========================================================================
    // Header and status bar
    // ========================================================================

    /// Items for the default header, if one is shown
    pub fn header_item(&self) -> Option<NavigationItem> {
        if !self.model.config.show_default_header {
            return None;
        }
        Some(self.content.navigation_item().unwrap_or_default())
    }

    /// The default header adds a close button when content has no leading item
    pub fn shows_close_button(&self) -> bool {
        self.header_item().is_some_and(|item| !item.has_leading_item)
    }

    pub fn prefers_status_bar_hidden(&self) -> bool {
        self.content.prefers_status_bar_hidden(&self.context())
    }

    pub fn preferred_status_bar_style(&self) -> StatusBarStyle {
        self.content.preferred_status_bar_style(&self.context())
    }

    pub fn preferred_status_bar_update_animation(&self) -> StatusBarAnimation {
        self.content.preferred_status_bar_update_animation(&self.context())
    }
}

impl<H: SheetHost + std::fmt::Debug> std::fmt::Debug for SheetController<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetController")
            .field("state", &self.state())
            .field("frame", &self.model.frame)
            .field("heights", &self.model.heights)
            .field("animator", &self.animator.kind())
            .field("host", &self.model.host)
            .finish()
    }
}
