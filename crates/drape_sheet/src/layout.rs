//! Layout of the views that depend on the content container frame

use drape_core::Rect;

/// Default header height
pub const HEADER_MIN_HEIGHT: f32 = 44.0;

/// Container frame plus the header and content rectangles inside it
///
/// `header` and `content` are relative to the container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SheetLayout {
    pub container: Rect,
    pub header: Option<Rect>,
    pub content: Rect,
}

impl SheetLayout {
    /// Lay out dependents of `container`
    ///
    /// When the container slides under the top safe area the header grows
    /// by the overlap so its bar stays below the status bar, up to
    /// `header_min_height + safe_area_top`.
    pub fn compute(
        container: Rect,
        show_header: bool,
        header_min_height: f32,
        safe_area_top: f32,
    ) -> Self {
        let width = container.width();

        if !show_header {
            return Self {
                container,
                header: None,
                content: Rect::new(0.0, 0.0, width, container.height()),
            };
        }

        let header_height = if container.y() < safe_area_top {
            let max = header_min_height + safe_area_top;
            (header_min_height + (safe_area_top - container.y())).min(max)
        } else {
            header_min_height
        };

        Self {
            container,
            header: Some(Rect::new(0.0, 0.0, width, header_height)),
            content: Rect::new(
                0.0,
                header_height,
                width,
                (container.height() - header_height).max(0.0),
            ),
        }
    }
}
