//! Duration-based spring timing
//!
//! A damped harmonic oscillator stretched over a fixed duration, the model
//! platform toolkits use for "spring with damping ratio and initial velocity"
//! animations. The natural frequency is chosen so that the oscillation
//! envelope decays to 1/1000 of the distance by the end of the duration,
//! at which point the curve snaps to its target.
//!
//! Progress starts at 0 (the `from` value) and converges on 1 (the target).
//! Underdamped curves overshoot past 1 before settling.

/// Envelope decay at the end of the duration (`e^{-ζω₀} = 1/1000`)
const SETTLE_LN: f64 = 6.907_755_278_982_137; // ln(1000)

/// Spring timing parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringCurve {
    /// 1.0 is critically damped, lower values oscillate
    pub damping_ratio: f32,
    /// Initial velocity as a fraction of the total distance per second
    pub initial_velocity: f32,
}

impl Default for SpringCurve {
    fn default() -> Self {
        Self::sheet()
    }
}

impl SpringCurve {
    pub const fn new(damping_ratio: f32, initial_velocity: f32) -> Self {
        Self {
            damping_ratio,
            initial_velocity,
        }
    }

    /// Settle spring used when a released sheet snaps to a resting state
    pub const fn sheet() -> Self {
        Self::new(0.75, 0.8)
    }

    /// No overshoot
    pub const fn critical() -> Self {
        Self::new(1.0, 0.0)
    }

    /// Progress at `elapsed` seconds into an animation of `duration` seconds
    pub fn progress(&self, elapsed: f64, duration: f64) -> f32 {
        if duration <= 0.0 || elapsed >= duration {
            return 1.0;
        }
        if elapsed <= 0.0 {
            return 0.0;
        }

        // Work in normalized time s in [0, 1]
        let s = elapsed / duration;
        let zeta = (self.damping_ratio as f64).clamp(0.01, 1.0);
        let omega0 = SETTLE_LN / zeta;
        let v0 = self.initial_velocity as f64 * duration;

        let displacement = if zeta < 1.0 {
            let omega_d = omega0 * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * omega0 * s).exp();
            envelope
                * ((omega_d * s).cos() + ((zeta * omega0 - v0) / omega_d) * (omega_d * s).sin())
        } else {
            (1.0 + (omega0 - v0) * s) * (-omega0 * s).exp()
        };

        (1.0 - displacement) as f32
    }
}
