//! Drag direction resolution
//!
//! Turns the release velocity of a drag and the position of the sheet's
//! leading edge between two resting points into a binary direction.
//!
//! Two rules are blended:
//!
//! - **Position**: whichever resting point is geometrically closer wins.
//! - **Velocity**: the sign of the velocity decides (negative is toward the
//!   container origin, i.e. `Up` or `Left`).
//!
//! Velocity is trusted once `v² >= threshold`. Near the midpoint between the
//! two resting points (`ratio` within [`RELAXED_RATIO_BAND`]) the threshold
//! drops to zero, so even a tiny flick decides. Elsewhere a release slower
//! than 100 px/s falls back to position.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::geometry::{Axis, Vec2};

/// Squared velocity below which a release is "too slow to trust" (|v| < 100 px/s)
pub const THRESHOLD_VELOCITY_SQUARE: f32 = 10_000.0;

/// Band of `(max - progress) / (progress - min)` ratios in which the
/// velocity threshold is relaxed to zero. Both ends are inclusive.
pub const RELAXED_RATIO_BAND: RangeInclusive<f32> = 0.5..=2.0;

/// Discrete drag direction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PanDirection {
    Up,
    Down,
    Left,
    Right,
}

impl PanDirection {
    /// Axis this direction lies on
    pub fn axis(&self) -> Axis {
        match self {
            PanDirection::Up | PanDirection::Down => Axis::Vertical,
            PanDirection::Left | PanDirection::Right => Axis::Horizontal,
        }
    }

    /// True for `Up` and `Left`, the directions toward the container origin
    pub fn is_toward_origin(&self) -> bool {
        matches!(self, PanDirection::Up | PanDirection::Left)
    }

    /// Direction on `axis` toward (`true`) or away from the origin
    pub fn on_axis(axis: Axis, toward_origin: bool) -> Self {
        match (axis, toward_origin) {
            (Axis::Vertical, true) => PanDirection::Up,
            (Axis::Vertical, false) => PanDirection::Down,
            (Axis::Horizontal, true) => PanDirection::Left,
            (Axis::Horizontal, false) => PanDirection::Right,
        }
    }
}

/// Edge the sheet enters from, fixed per sheet instance
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresentationDirection {
    TopToBottom,
    #[default]
    BottomToTop,
    LeftToRight,
    RightToLeft,
}

impl PresentationDirection {
    /// Axis the sheet travels along while presenting
    pub fn axis(&self) -> Axis {
        match self {
            PresentationDirection::TopToBottom | PresentationDirection::BottomToTop => {
                Axis::Vertical
            }
            PresentationDirection::LeftToRight | PresentationDirection::RightToLeft => {
                Axis::Horizontal
            }
        }
    }

    /// Drag direction that moves the sheet back out the way it came in
    pub fn dismiss_direction(&self) -> PanDirection {
        match self {
            PresentationDirection::TopToBottom => PanDirection::Up,
            PresentationDirection::BottomToTop => PanDirection::Down,
            PresentationDirection::LeftToRight => PanDirection::Left,
            PresentationDirection::RightToLeft => PanDirection::Right,
        }
    }
}

/// Position ratio between the two resting points
///
/// Returns a non-finite value when `progress == min`; such values never fall
/// inside [`RELAXED_RATIO_BAND`].
pub fn position_ratio(progress: f32, min: f32, max: f32) -> f32 {
    (max - progress) / (progress - min)
}

/// Velocity threshold (squared) in effect at `progress`
pub fn velocity_threshold(progress: f32, min: f32, max: f32) -> f32 {
    let ratio = position_ratio(progress, min, max);
    if RELAXED_RATIO_BAND.contains(&ratio) {
        0.0
    } else {
        THRESHOLD_VELOCITY_SQUARE
    }
}

/// Resolve a vertical drag direction
///
/// `velocity` is the release velocity along y, `progress` the sheet's leading
/// edge, `min` and `max` the two candidate resting positions (`min < max`).
pub fn resolve_direction(velocity: f32, progress: f32, min: f32, max: f32) -> PanDirection {
    resolve_direction_on(Axis::Vertical, velocity, progress, min, max)
}

/// Resolve a drag direction along `axis`
pub fn resolve_direction_on(
    axis: Axis,
    velocity: f32,
    progress: f32,
    min: f32,
    max: f32,
) -> PanDirection {
    let threshold = velocity_threshold(progress, min, max);

    let toward_origin = if velocity * velocity < threshold {
        // Too slow to trust: closer resting point wins
        max - progress > progress - min
    } else {
        velocity < 0.0
    };

    PanDirection::on_axis(axis, toward_origin)
}

/// Direction of whichever velocity component dominates
///
/// Vertical wins only when `|v.y| > |v.x|`. A zero velocity has no direction.
pub fn dominant_direction(velocity: Vec2) -> Option<PanDirection> {
    if velocity == Vec2::ZERO {
        return None;
    }

    let axis = Axis::of(velocity);
    Some(PanDirection::on_axis(axis, velocity.along(axis) < 0.0))
}
