//! Collapsed and expanded resting heights

use crate::state::SheetState;

/// Fraction of the container used when content does not supply a collapsed height
pub const DEFAULT_COLLAPSED_RATIO: f32 = 0.5;

/// Resting heights of a sheet
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HeightPair {
    pub collapsed: f32,
    pub expanded: f32,
}

impl HeightPair {
    pub const fn new(collapsed: f32, expanded: f32) -> Self {
        Self {
            collapsed,
            expanded,
        }
    }

    /// Resolve content-supplied heights against the container extent
    ///
    /// - `collapsed` is clamped to `[0, extent]`; zero or `None` falls back
    ///   to `ratio * extent`.
    /// - `expanded` is clamped to `[0, extent]`; `None` falls back to the
    ///   collapsed height, and the result is never below it.
    pub fn resolve(
        proposed_collapsed: Option<f32>,
        proposed_expanded: Option<f32>,
        extent: f32,
        ratio: f32,
    ) -> Self {
        let extent = extent.max(0.0);
        let clamp = |h: f32| if h.is_nan() { 0.0 } else { h.clamp(0.0, extent) };

        let mut collapsed = proposed_collapsed.map(clamp).unwrap_or(0.0);
        if collapsed == 0.0 {
            collapsed = ratio.clamp(0.0, 1.0) * extent;
        }

        let expanded = proposed_expanded.map(clamp).unwrap_or(collapsed).max(collapsed);

        Self {
            collapsed,
            expanded,
        }
    }

    /// True when there is no room to expand beyond the collapsed height
    ///
    /// Gesture-driven state changes only reach `Minimised` in this case.
    pub fn is_degenerate(&self) -> bool {
        self.expanded <= self.collapsed
    }

    /// True when `collapsed <= expanded`, the condition under which the
    /// sheet's own drag may begin
    pub fn allows_drag(&self) -> bool {
        self.collapsed <= self.expanded
    }

    /// True when the expanded height is strictly taller
    pub fn can_expand(&self) -> bool {
        self.expanded > self.collapsed
    }

    /// Height of the resting rectangle for a visible state
    pub fn for_state(&self, state: SheetState) -> f32 {
        match state {
            SheetState::Expanded => self.expanded,
            SheetState::Collapsed => self.collapsed,
            SheetState::Minimised => 0.0,
        }
    }

    /// Grow both heights by `amount`, capped at `cap`
    pub fn grown_by(&self, amount: f32, cap: f32) -> Self {
        Self {
            collapsed: (self.collapsed + amount).min(cap),
            expanded: (self.expanded + amount).min(cap),
        }
    }
}
