//! Coordination between the sheet's drag and one inner scrollable region
//!
//! The sheet's drag never runs simultaneously with the inner scroll
//! gesture. Instead, every simultaneity query toggles the region's
//! scroll-enabled flag so the pull-down-to-dismiss drag wins exactly at the
//! region's top boundary while mid-content scrolling stays free.

use std::sync::{Arc, Mutex, Weak};

use drape_core::{HeightPair, PanDirection, SheetState};

/// Scrollable region observed by a sheet
pub trait ScrollRegion {
    fn content_offset_y(&self) -> f32;

    /// Top content inset (negative offsets down to `-inset` are "at top")
    fn content_inset_top(&self) -> f32 {
        0.0
    }

    fn is_scroll_enabled(&self) -> bool;

    fn set_scroll_enabled(&mut self, enabled: bool);

    /// Scrolled to (or pulled past) its top
    fn is_at_top(&self) -> bool {
        self.content_offset_y() + self.content_inset_top() <= 0.0
    }
}

/// Scroll region shared between the content and the sheet
pub type SharedScrollRegion = Arc<Mutex<dyn ScrollRegion + Send>>;

/// Plain scroll region state, for hosts without one of their own
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollViewState {
    pub offset_y: f32,
    pub inset_top: f32,
    pub scroll_enabled: bool,
}

impl Default for ScrollViewState {
    fn default() -> Self {
        Self {
            offset_y: 0.0,
            inset_top: 0.0,
            scroll_enabled: true,
        }
    }
}

impl ScrollViewState {
    pub fn at_offset(offset_y: f32) -> Self {
        Self {
            offset_y,
            ..Self::default()
        }
    }

    /// Wrap into a [`SharedScrollRegion`]
    pub fn shared(self) -> Arc<Mutex<ScrollViewState>> {
        Arc::new(Mutex::new(self))
    }
}

impl ScrollRegion for ScrollViewState {
    fn content_offset_y(&self) -> f32 {
        self.offset_y
    }

    fn content_inset_top(&self) -> f32 {
        self.inset_top
    }

    fn is_scroll_enabled(&self) -> bool {
        self.scroll_enabled
    }

    fn set_scroll_enabled(&mut self, enabled: bool) {
        self.scroll_enabled = enabled;
    }
}

/// Should the observed region be suspended for the coming drag?
pub fn should_suspend_scroll(
    state: SheetState,
    heights: HeightPair,
    at_top: bool,
    direction: PanDirection,
) -> bool {
    if !heights.allows_drag() {
        return false;
    }

    let pulling_down_at_top = at_top && direction == PanDirection::Down;
    let collapsed_with_room = state == SheetState::Collapsed && heights.can_expand();
    pulling_down_at_top || collapsed_with_room
}

/// Tracks the observed region without keeping it alive
#[derive(Default)]
pub struct ScrollCoordinator {
    observed: Option<Weak<Mutex<dyn ScrollRegion + Send>>>,
}

impl std::fmt::Debug for ScrollCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollCoordinator")
            .field("observing", &self.resolve().is_some())
            .finish()
    }
}

impl ScrollCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the observed region
    ///
    /// `None` keeps the previous region so content that only reports its
    /// scroll view some of the time does not lose coordination.
    pub fn observe(&mut self, region: Option<SharedScrollRegion>) {
        if let Some(region) = region {
            self.observed = Some(Arc::downgrade(&region));
        }
    }

    /// Stop observing any region
    pub fn clear(&mut self) {
        self.observed = None;
    }

    /// The observed region, if it is still alive
    pub fn resolve(&self) -> Option<SharedScrollRegion> {
        self.observed.as_ref().and_then(Weak::upgrade)
    }

    pub fn is_at_top(&self) -> Option<bool> {
        let region = self.resolve()?;
        let guard = region.lock().ok()?;
        Some(guard.is_at_top())
    }

    pub fn set_scroll_enabled(&self, enabled: bool) {
        let Some(region) = self.resolve() else {
            return;
        };
        let Ok(mut guard) = region.lock() else {
            return;
        };
        if guard.is_scroll_enabled() != enabled {
            tracing::trace!("observed scroll region enabled={}", enabled);
        }
        guard.set_scroll_enabled(enabled);
    }

    /// Answer a simultaneous-recognition query
    ///
    /// Always `false`; the region's scroll-enabled flag is updated as a side
    /// effect. Without an observed region nothing happens.
    pub fn should_recognize_simultaneously(
        &self,
        state: SheetState,
        heights: HeightPair,
        direction: PanDirection,
    ) -> bool {
        if let Some(at_top) = self.is_at_top() {
            let suspend = should_suspend_scroll(state, heights, at_top, direction);
            self.set_scroll_enabled(!suspend);
        }
        false
    }
}
