//! Sheet State Machine
//!
//! The three resting states of a sheet and the rules that move it between
//! them.
//!
//! Lifecycle transitions (presentation, settle, dismissal) go through
//! [`SheetState::on_event`]. Drag releases are decided in two steps:
//!
//! 1. [`candidate_state`] picks the state the drag is heading for from the
//!    current state and the sheet's leading edge.
//! 2. [`final_state`] combines the candidate with the resolved drag direction.
//!
//! ```
//! use drape_core::{HeightPair, PanDirection, SheetState};
//! use drape_core::state::{candidate_state, final_state};
//!
//! let heights = HeightPair::new(300.0, 600.0);
//! let candidate = candidate_state(SheetState::Collapsed, 520.0, 800.0, heights);
//! assert_eq!(candidate, SheetState::Minimised);
//!
//! // Released while moving back up: stays collapsed
//! assert_eq!(
//!     final_state(SheetState::Collapsed, candidate, PanDirection::Up),
//!     SheetState::Collapsed
//! );
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::direction::PanDirection;
use crate::heights::HeightPair;

/// Discrete sheet state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetState {
    /// Off-screen, not presented
    #[default]
    Minimised,
    /// Partially visible at the collapsed height
    Collapsed,
    /// Fully visible at the expanded height
    Expanded,
}

impl SheetState {
    /// Handle a lifecycle event and return the new state, or None if no transition
    pub fn on_event(&self, event: LifecycleEvent) -> Option<Self> {
        match (self, event) {
            (SheetState::Minimised, LifecycleEvent::PresentedPartial) => Some(SheetState::Collapsed),
            (SheetState::Minimised, LifecycleEvent::PresentedFull) => Some(SheetState::Expanded),
            (SheetState::Minimised, _) => None,
            (_, LifecycleEvent::Dismissed) => Some(SheetState::Minimised),
            (current, LifecycleEvent::Settled(target)) if *current != target => Some(target),
            _ => None,
        }
    }

    /// True for `Collapsed` and `Expanded`
    pub fn is_visible(&self) -> bool {
        !matches!(self, SheetState::Minimised)
    }

    pub fn name(&self) -> &'static str {
        match self {
            SheetState::Minimised => "minimised",
            SheetState::Collapsed => "collapsed",
            SheetState::Expanded => "expanded",
        }
    }
}

impl std::fmt::Display for SheetState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Events that drive lifecycle transitions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    /// Appearance finished at the collapsed height
    PresentedPartial,
    /// Appearance finished fully shown (pop-ups)
    PresentedFull,
    /// A settle animation completed at the given state
    Settled(SheetState),
    /// The sheet left the screen
    Dismissed,
}

/// Candidate state a drag is heading for
///
/// `position` is the sheet's leading edge, `extent` the container extent
/// along the drag axis.
pub fn candidate_state(
    current: SheetState,
    position: f32,
    extent: f32,
    heights: HeightPair,
) -> SheetState {
    if heights.is_degenerate() {
        return SheetState::Minimised;
    }

    match current {
        SheetState::Expanded => SheetState::Collapsed,
        SheetState::Collapsed => {
            // Must cross the collapsed anchor, not just move toward it
            if position > extent - heights.collapsed {
                SheetState::Minimised
            } else {
                SheetState::Expanded
            }
        }
        SheetState::Minimised => SheetState::Minimised,
    }
}

/// Final state of a drag release
///
/// `Up`/`Left` count as moving toward the expanded state.
pub fn final_state(current: SheetState, candidate: SheetState, direction: PanDirection) -> SheetState {
    let up = direction.is_toward_origin();

    match current {
        SheetState::Collapsed => match (candidate, up) {
            (SheetState::Minimised, true) => SheetState::Collapsed,
            (SheetState::Minimised, false) => SheetState::Minimised,
            (_, true) => SheetState::Expanded,
            (_, false) => SheetState::Collapsed,
        },
        SheetState::Expanded => {
            if up {
                SheetState::Expanded
            } else {
                SheetState::Collapsed
            }
        }
        SheetState::Minimised => SheetState::Minimised,
    }
}

/// State holder with a transition history
#[derive(Clone, Debug, Default)]
pub struct SheetStateMachine {
    state: SheetState,
    /// History of state transitions (for debugging)
    history: SmallVec<[(SheetState, LifecycleEvent, SheetState); 8]>,
}

impl SheetStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SheetState {
        self.state
    }

    /// Feed a lifecycle event, returning true if the state changed
    pub fn send(&mut self, event: LifecycleEvent) -> bool {
        match self.state.on_event(event) {
            Some(next) => {
                tracing::trace!("sheet state {} -> {} on {:?}", self.state, next, event);
                self.history.push((self.state, event, next));
                self.state = next;
                true
            }
            None => false,
        }
    }

    /// Move to `target` through whichever lifecycle event leads there
    pub fn commit(&mut self, target: SheetState) -> bool {
        let event = match (self.state, target) {
            (_, SheetState::Minimised) => LifecycleEvent::Dismissed,
            (SheetState::Minimised, SheetState::Collapsed) => LifecycleEvent::PresentedPartial,
            (SheetState::Minimised, SheetState::Expanded) => LifecycleEvent::PresentedFull,
            (_, target) => LifecycleEvent::Settled(target),
        };
        self.send(event)
    }

    pub fn candidate_state(&self, position: f32, extent: f32, heights: HeightPair) -> SheetState {
        candidate_state(self.state, position, extent, heights)
    }

    pub fn final_state(&self, candidate: SheetState, direction: PanDirection) -> SheetState {
        final_state(self.state, candidate, direction)
    }

    pub fn history(&self) -> &[(SheetState, LifecycleEvent, SheetState)] {
        &self.history
    }
}
