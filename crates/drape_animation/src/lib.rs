//! Drape Animation System
//!
//! Timing curves and frame animations for sheet presentation.
//!
//! # Features
//!
//! - **Easing**: the standard ease-in / ease-out / ease-in-out cubic beziers
//! - **Spring Timing**: damped springs stretched over a fixed duration
//! - **Frame Animations**: rectangle-to-rectangle animations a host can run
//! - **Interruptible**: a new animation on the same channel replaces the old one

pub mod easing;
pub mod frame;
pub mod scheduler;
pub mod spring;

pub use easing::Easing;
pub use frame::{AnimationCurve, FrameAnimation};
pub use scheduler::{AnimationScheduler, Channel, Completion, FrameAnimationId, FrameUpdate, TickOutput};
pub use spring::SpringCurve;
