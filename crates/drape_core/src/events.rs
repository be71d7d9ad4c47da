//! Sheet notifications
//!
//! Appearance events track the sheet's own lifecycle; show/hide events
//! bracket the content's presence inside it.

/// Lifecycle notification emitted to the sheet's delegate
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SheetEvent {
    WillAppear,
    DidAppear,
    WillDisappear,
    DidDisappear,
    WillShow,
    DidShow,
    WillHide,
    DidHide,
}

impl SheetEvent {
    pub const ALL: [SheetEvent; 8] = [
        SheetEvent::WillAppear,
        SheetEvent::DidAppear,
        SheetEvent::WillDisappear,
        SheetEvent::DidDisappear,
        SheetEvent::WillShow,
        SheetEvent::DidShow,
        SheetEvent::WillHide,
        SheetEvent::DidHide,
    ];

    /// Name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            SheetEvent::WillAppear => "will_appear",
            SheetEvent::DidAppear => "did_appear",
            SheetEvent::WillDisappear => "will_disappear",
            SheetEvent::DidDisappear => "did_disappear",
            SheetEvent::WillShow => "will_show",
            SheetEvent::DidShow => "did_show",
            SheetEvent::WillHide => "will_hide",
            SheetEvent::DidHide => "did_hide",
        }
    }
}

impl std::fmt::Display for SheetEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
