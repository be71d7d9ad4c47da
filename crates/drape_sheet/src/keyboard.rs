//! Keyboard avoidance
//!
//! While the software keyboard is up both resting heights grow by the
//! keyboard height (capped at the expanded height), and they are restored
//! from a snapshot once it hides.

use drape_core::HeightPair;

/// Keyboard height assumed when the host does not report one
pub const DEFAULT_KEYBOARD_HEIGHT: f32 = 250.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct KeyboardAvoidance {
    saved: HeightPair,
    present: bool,
}

impl KeyboardAvoidance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_present(&self) -> bool {
        self.present
    }

    /// Heights in effect before the keyboard appeared
    pub fn saved(&self) -> HeightPair {
        self.saved
    }

    /// Keyboard about to show; returns the heights to resize to
    pub fn will_show(&mut self, current: HeightPair, keyboard_height: Option<f32>) -> Option<HeightPair> {
        if self.present {
            return None;
        }
        self.saved = current;
        Some(Self::grow(current, keyboard_height))
    }

    pub fn did_show(&mut self) {
        self.present = true;
    }

    /// Keyboard about to hide; returns the heights to restore
    pub fn will_hide(&mut self) -> Option<HeightPair> {
        self.present.then_some(self.saved)
    }

    pub fn did_hide(&mut self, current: HeightPair) {
        if self.present {
            self.present = false;
            self.saved = current;
        }
    }

    /// Keyboard frame changed while shown; grows from the saved heights
    pub fn will_change_frame(&mut self, keyboard_height: Option<f32>) -> Option<HeightPair> {
        self.present.then(|| Self::grow(self.saved, keyboard_height))
    }

    fn grow(base: HeightPair, keyboard_height: Option<f32>) -> HeightPair {
        let keyboard = keyboard_height.unwrap_or(DEFAULT_KEYBOARD_HEIGHT).max(0.0);
        base.grown_by(keyboard, base.expanded)
    }
}
