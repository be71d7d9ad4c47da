//! Frame animations
//!
//! A [`FrameAnimation`] moves a rectangle from one frame to another over a
//! fixed duration, along either an easing curve or a spring curve. Hosts
//! with a native animation layer can translate it directly; headless hosts
//! sample it through the [`AnimationScheduler`](crate::AnimationScheduler).

use drape_core::Rect;

use crate::easing::Easing;
use crate::spring::SpringCurve;

/// Timing curve of a frame animation
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimationCurve {
    Eased(Easing),
    Spring(SpringCurve),
}

impl Default for AnimationCurve {
    fn default() -> Self {
        AnimationCurve::Eased(Easing::EaseInOut)
    }
}

impl AnimationCurve {
    /// Progress at `elapsed` seconds into an animation of `duration` seconds
    pub fn progress(&self, elapsed: f64, duration: f64) -> f32 {
        match self {
            AnimationCurve::Eased(easing) => {
                if duration <= 0.0 {
                    1.0
                } else {
                    easing.apply((elapsed / duration) as f32)
                }
            }
            AnimationCurve::Spring(spring) => spring.progress(elapsed, duration),
        }
    }
}

/// Rectangle animation request
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameAnimation {
    pub from: Rect,
    pub to: Rect,
    /// Seconds
    pub duration: f64,
    pub curve: AnimationCurve,
    /// Touches keep reaching the animated view while it moves
    pub allow_user_interaction: bool,
}

impl FrameAnimation {
    /// Eased animation
    pub fn eased(from: Rect, to: Rect, duration: f64, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            curve: AnimationCurve::Eased(easing),
            allow_user_interaction: false,
        }
    }

    /// Spring animation, interruptible by touches
    pub fn spring(from: Rect, to: Rect, duration: f64, spring: SpringCurve) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            curve: AnimationCurve::Spring(spring),
            allow_user_interaction: true,
        }
    }

    /// Builder: toggle user interaction during the animation
    pub fn allow_user_interaction(mut self, allow: bool) -> Self {
        self.allow_user_interaction = allow;
        self
    }

    /// Frame at `elapsed` seconds
    pub fn sample(&self, elapsed: f64) -> Rect {
        if self.is_complete(elapsed) {
            return self.to;
        }
        let t = self.curve.progress(elapsed, self.duration);
        self.from.lerp(&self.to, t)
    }

    pub fn is_complete(&self, elapsed: f64) -> bool {
        elapsed >= self.duration
    }
}
