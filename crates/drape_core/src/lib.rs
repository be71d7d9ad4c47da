//! Drape Core
//!
//! Foundational primitives for gesture-driven sheets:
//!
//! - **Geometry**: points, sizes, rectangles and drag axes
//! - **Direction**: velocity-vs-position heuristic for drag releases
//! - **State Machine**: minimised / collapsed / expanded transitions
//! - **Gestures**: the pan recognizer contract and a pointer-fed tracker
//!
//! # Example
//!
//! ```rust
//! use drape_core::{resolve_direction, HeightPair, PanDirection, SheetStateMachine};
//! use drape_core::state::LifecycleEvent;
//!
//! let heights = HeightPair::resolve(Some(300.0), Some(600.0), 800.0, 0.5);
//! let mut sheet = SheetStateMachine::new();
//! sheet.send(LifecycleEvent::PresentedPartial);
//!
//! // Released at y = 450 while flicking upward
//! let candidate = sheet.candidate_state(450.0, 800.0, heights);
//! let direction = resolve_direction(-200.0, 450.0, 200.0, 500.0);
//! assert_eq!(direction, PanDirection::Up);
//! assert_eq!(sheet.final_state(candidate, direction), drape_core::SheetState::Expanded);
//! ```

pub mod direction;
pub mod error;
pub mod events;
pub mod geometry;
pub mod gesture;
pub mod heights;
pub mod state;

pub use direction::{
    dominant_direction, resolve_direction, resolve_direction_on, PanDirection,
    PresentationDirection, THRESHOLD_VELOCITY_SQUARE,
};
pub use error::{Result, SheetError};
pub use events::SheetEvent;
pub use geometry::{Axis, Point, Rect, Size, Vec2};
pub use gesture::{PanPhase, PanRecognizer, PanTracker};
pub use heights::{HeightPair, DEFAULT_COLLAPSED_RATIO};
pub use state::{LifecycleEvent, SheetState, SheetStateMachine};
