//! Outward notifications

use drape_core::SheetEvent;

use crate::content::SheetContext;

/// Observer of a sheet's lifecycle
///
/// Appear/disappear fire on every appearance pass. Show/hide fire only when
/// content is actually added to or removed from the sheet.
pub trait SheetDelegate {
    fn will_appear(&mut self, _sheet: &SheetContext) {}
    fn did_appear(&mut self, _sheet: &SheetContext) {}
    fn will_disappear(&mut self, _sheet: &SheetContext) {}
    fn did_disappear(&mut self, _sheet: &SheetContext) {}

    fn will_show(&mut self, _sheet: &SheetContext) {}
    fn did_show(&mut self, _sheet: &SheetContext) {}
    fn will_hide(&mut self, _sheet: &SheetContext) {}
    fn did_hide(&mut self, _sheet: &SheetContext) {}

    /// Veto for the sheet's own drag
    fn should_begin_drag(&mut self, _sheet: &SheetContext) -> bool {
        true
    }

    /// Dispatch `event` to the matching notification
    fn notify(&mut self, event: SheetEvent, sheet: &SheetContext) {
        match event {
            SheetEvent::WillAppear => self.will_appear(sheet),
            SheetEvent::DidAppear => self.did_appear(sheet),
            SheetEvent::WillDisappear => self.will_disappear(sheet),
            SheetEvent::DidDisappear => self.did_disappear(sheet),
            SheetEvent::WillShow => self.will_show(sheet),
            SheetEvent::DidShow => self.did_show(sheet),
            SheetEvent::WillHide => self.will_hide(sheet),
            SheetEvent::DidHide => self.did_hide(sheet),
        }
    }
}
