//! Pan gesture tracking
//!
//! The sheet consumes drags through [`PanRecognizer`]: a phase, the
//! translation accumulated since the last reset, and an instantaneous
//! velocity. Hosts with their own gesture system implement the trait
//! directly; [`PanTracker`] builds one from raw pointer samples.

use smallvec::SmallVec;

use crate::geometry::{Point, Vec2};

/// Samples older than this are ignored for velocity estimation
pub const VELOCITY_WINDOW_MS: f64 = 100.0;

/// Phase of a pan gesture
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PanPhase {
    #[default]
    Possible,
    Began,
    Changed,
    Ended,
    /// Settled the same way as `Ended`
    Cancelled,
}

impl PanPhase {
    /// True while the finger is down
    pub fn is_active(&self) -> bool {
        matches!(self, PanPhase::Began | PanPhase::Changed)
    }

    /// True once the finger has lifted (ended or cancelled)
    pub fn is_finished(&self) -> bool {
        matches!(self, PanPhase::Ended | PanPhase::Cancelled)
    }
}

/// Gesture primitive consumed by the sheet
pub trait PanRecognizer {
    fn phase(&self) -> PanPhase;

    /// Translation accumulated since the last [`reset_translation`](Self::reset_translation)
    fn translation(&self) -> Vec2;

    /// Instantaneous velocity in points per second
    fn velocity(&self) -> Vec2;

    /// Zero the accumulated translation without ending the gesture
    fn reset_translation(&mut self);
}

#[derive(Clone, Copy, Debug)]
struct Sample {
    position: Point,
    time_ms: f64,
}

/// [`PanRecognizer`] fed from pointer events
#[derive(Clone, Debug, Default)]
pub struct PanTracker {
    phase: PanPhase,
    origin: Point,
    translation: Vec2,
    last: Point,
    samples: SmallVec<[Sample; 16]>,
    release_velocity: Vec2,
}

impl PanTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer down
    pub fn begin(&mut self, position: Point, time_ms: f64) {
        self.phase = PanPhase::Began;
        self.origin = position;
        self.last = position;
        self.translation = Vec2::ZERO;
        self.release_velocity = Vec2::ZERO;
        self.samples.clear();
        self.push_sample(position, time_ms);
    }

    /// Pointer moved
    pub fn move_to(&mut self, position: Point, time_ms: f64) {
        if !self.phase.is_active() {
            return;
        }
        self.translation.x += position.x - self.last.x;
        self.translation.y += position.y - self.last.y;
        self.last = position;
        self.phase = PanPhase::Changed;
        self.push_sample(position, time_ms);
    }

    /// Pointer up
    pub fn end(&mut self, position: Point, time_ms: f64) {
        self.finish(position, time_ms, PanPhase::Ended);
    }

    /// Gesture interrupted by the system
    pub fn cancel(&mut self, time_ms: f64) {
        let last = self.last;
        self.finish(last, time_ms, PanPhase::Cancelled);
    }

    /// Where the gesture started
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Total movement since the gesture began, regardless of resets
    pub fn cumulative_translation(&self) -> Vec2 {
        Vec2::new(self.last.x - self.origin.x, self.last.y - self.origin.y)
    }

    fn finish(&mut self, position: Point, time_ms: f64, phase: PanPhase) {
        if !self.phase.is_active() {
            return;
        }
        self.translation.x += position.x - self.last.x;
        self.translation.y += position.y - self.last.y;
        self.last = position;
        self.push_sample(position, time_ms);
        self.release_velocity = self.estimate_velocity();
        self.phase = phase;
    }

    fn push_sample(&mut self, position: Point, time_ms: f64) {
        self.samples.push(Sample { position, time_ms });
        let cutoff = time_ms - VELOCITY_WINDOW_MS;
        let stale = self.samples.iter().take_while(|s| s.time_ms < cutoff).count();
        if stale > 0 {
            self.samples.drain(..stale);
        }
    }

    fn estimate_velocity(&self) -> Vec2 {
        let (Some(first), Some(last)) = (self.samples.first(), self.samples.last()) else {
            return Vec2::ZERO;
        };
        let dt = (last.time_ms - first.time_ms) / 1000.0;
        if dt <= 0.0 {
            return Vec2::ZERO;
        }
        Vec2::new(
            ((last.position.x - first.position.x) as f64 / dt) as f32,
            ((last.position.y - first.position.y) as f64 / dt) as f32,
        )
    }
}

impl PanRecognizer for PanTracker {
    fn phase(&self) -> PanPhase {
        self.phase
    }

    fn translation(&self) -> Vec2 {
        self.translation
    }

    fn velocity(&self) -> Vec2 {
        if self.phase.is_finished() {
            self.release_velocity
        } else {
            self.estimate_velocity()
        }
    }

    fn reset_translation(&mut self) {
        self.translation = Vec2::ZERO;
    }
}
