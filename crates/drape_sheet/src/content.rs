//! Content hosted inside a sheet
//!
//! Every member of [`SheetContent`] has a default, so content only
//! overrides what it cares about.

use drape_core::{HeightPair, Rect, SheetState};

use crate::scroll::SharedScrollRegion;

/// Opaque handle to the host's view for the content
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ViewHandle(pub u64);

/// Items shown in the default header
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationItem {
    pub title: Option<String>,
    /// Content supplies its own leading button; otherwise the header adds a close button
    pub has_leading_item: bool,
}

impl NavigationItem {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            has_leading_item: false,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StatusBarStyle {
    #[default]
    Default,
    LightContent,
    DarkContent,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StatusBarAnimation {
    None,
    #[default]
    Fade,
    Slide,
}

/// Snapshot of the sheet handed to content and delegate callbacks
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetContext {
    /// Container bounds the sheet is presented in
    pub bounds: Rect,
    /// Current content container frame
    pub frame: Rect,
    pub state: SheetState,
    pub heights: HeightPair,
}

/// Capabilities of content embedded in a sheet
pub trait SheetContent {
    /// The view to embed. Content without a view gets no add/remove hooks
    /// and the sheet emits no show/hide notifications for it.
    fn view(&self) -> Option<ViewHandle> {
        None
    }

    fn navigation_item(&self) -> Option<NavigationItem> {
        None
    }

    /// `None` (or zero) means half of the container
    fn collapsed_height(&self, _sheet: &SheetContext) -> Option<f32> {
        None
    }

    /// `None` means the same as the collapsed height
    fn expanded_height(&self, _sheet: &SheetContext) -> Option<f32> {
        None
    }

    /// Inner scrollable region whose scrolling is coordinated with the sheet
    fn scroll_view_to_observe(&self, _sheet: &SheetContext) -> Option<SharedScrollRegion> {
        None
    }

    fn will_add_content(&mut self, _sheet: &SheetContext) {}

    fn did_add_content(&mut self, _sheet: &SheetContext) {}

    fn will_remove_content(&mut self, _sheet: &SheetContext) {}

    fn did_remove_content(&mut self, _sheet: &SheetContext) {}

    fn prefers_status_bar_hidden(&self, _sheet: &SheetContext) -> bool {
        false
    }

    fn preferred_status_bar_style(&self, _sheet: &SheetContext) -> StatusBarStyle {
        StatusBarStyle::Default
    }

    fn preferred_status_bar_update_animation(&self, _sheet: &SheetContext) -> StatusBarAnimation {
        StatusBarAnimation::Fade
    }

    /// A drag on the sheet is about to start (e.g. resign text input focus)
    fn will_begin_touch_handling(&mut self, _sheet: &SheetContext) {}
}

/// Content with nothing but a view
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlainContent {
    pub view: ViewHandle,
}

impl SheetContent for PlainContent {
    fn view(&self) -> Option<ViewHandle> {
        Some(self.view)
    }
}
