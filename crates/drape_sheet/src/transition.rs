//! Present/dismiss transition parameters
//!
//! The host owns the modal presentation itself. The sheet only supplies the
//! timing and the animated properties: the scrim behind the sheet, the
//! presented view's alpha and the content container frame, all driven by
//! the same spring over the same duration.

use drape_animation::{FrameAnimation, SpringCurve};
use drape_core::Rect;

/// Transition duration used when nothing else is configured
pub const DEFAULT_TRANSITION_DURATION: f64 = 0.5;

/// Which way the transition runs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransitionPhase {
    Presenting,
    Dismissing,
}

/// Timing and animated properties of the present/dismiss transition
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionSpec {
    duration: f64,
    blur_background: bool,
    spring: SpringCurve,
}

impl Default for TransitionSpec {
    fn default() -> Self {
        Self::new()
    }
}

impl TransitionSpec {
    pub fn new() -> Self {
        Self {
            duration: DEFAULT_TRANSITION_DURATION,
            blur_background: false,
            spring: SpringCurve::sheet(),
        }
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Negative (and NaN) durations are ignored
    pub fn set_duration(&mut self, duration: f64) {
        if duration >= 0.0 {
            self.duration = duration;
        }
    }

    pub fn with_duration(mut self, duration: f64) -> Self {
        self.set_duration(duration);
        self
    }

    pub fn blur_background(&self) -> bool {
        self.blur_background
    }

    pub fn with_blur_background(mut self, blur: bool) -> Self {
        self.blur_background = blur;
        self
    }

    pub fn spring(&self) -> SpringCurve {
        self.spring
    }

    pub fn with_spring(mut self, damping_ratio: f32, initial_velocity: f32) -> Self {
        self.spring = SpringCurve::new(damping_ratio, initial_velocity);
        self
    }

    /// Scrim opacity at `progress` through the transition
    ///
    /// A blurred background is not faded out on dismissal.
    pub fn scrim_alpha(&self, phase: TransitionPhase, progress: f32) -> f32 {
        let progress = progress.clamp(0.0, 1.0);
        match phase {
            TransitionPhase::Presenting => progress,
            TransitionPhase::Dismissing if self.blur_background => 1.0,
            TransitionPhase::Dismissing => 1.0 - progress,
        }
    }

    /// Presented view opacity at `elapsed` seconds into the transition
    pub fn view_alpha(&self, phase: TransitionPhase, elapsed: f64) -> f32 {
        let t = self.spring.progress(elapsed, self.duration);
        match phase {
            TransitionPhase::Presenting => t,
            TransitionPhase::Dismissing => 1.0 - t,
        }
    }

    /// Content frame animation running alongside the transition
    pub fn frame_animation(&self, from: Rect, to: Rect) -> FrameAnimation {
        FrameAnimation::spring(from, to, self.duration, self.spring)
    }
}
