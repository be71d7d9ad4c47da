//! Core geometry types
//!
//! Points, sizes and rectangles in the sheet's container coordinate space.
//! The origin is the top-left corner of the container, y grows downward.

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Extent of this size along an axis
    pub fn extent(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Vertical => self.height,
            Axis::Horizontal => self.width,
        }
    }
}

impl From<Size> for Rect {
    /// Convert Size to Rect at origin (0, 0)
    fn from(size: Size) -> Self {
        Rect {
            origin: Point::ZERO,
            size,
        }
    }
}

/// 2D rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn x(&self) -> f32 {
        self.origin.x
    }

    pub fn y(&self) -> f32 {
        self.origin.y
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    pub fn min_x(&self) -> f32 {
        self.origin.x
    }

    pub fn max_x(&self) -> f32 {
        self.origin.x + self.size.width
    }

    pub fn min_y(&self) -> f32 {
        self.origin.y
    }

    pub fn max_y(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Leading edge along an axis (`min_y` for vertical, `min_x` for horizontal)
    pub fn leading(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Vertical => self.min_y(),
            Axis::Horizontal => self.min_x(),
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x()
            && point.x <= self.max_x()
            && point.y >= self.min_y()
            && point.y <= self.max_y()
    }

    /// True when this rect pokes out of `outer` on either side of `axis`
    pub fn escapes(&self, outer: &Rect, axis: Axis) -> bool {
        match axis {
            Axis::Vertical => self.min_y() < outer.min_y() || self.max_y() > outer.max_y(),
            Axis::Horizontal => self.min_x() < outer.min_x() || self.max_x() > outer.max_x(),
        }
    }

    /// Offset the rect by a delta
    pub fn offset(&self, dx: f32, dy: f32) -> Self {
        Rect {
            origin: Point::new(self.origin.x + dx, self.origin.y + dy),
            size: self.size,
        }
    }

    pub fn with_origin_x(mut self, x: f32) -> Self {
        self.origin.x = x;
        self
    }

    pub fn with_origin_y(mut self, y: f32) -> Self {
        self.origin.y = y;
        self
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.size.height = height;
        self
    }

    /// Linear interpolation between two rects, `t` in `[0, 1]` (values outside overshoot)
    pub fn lerp(&self, to: &Rect, t: f32) -> Rect {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Rect::new(
            mix(self.origin.x, to.origin.x),
            mix(self.origin.y, to.origin.y),
            mix(self.size.width, to.size.width),
            mix(self.size.height, to.size.height),
        )
    }
}

/// 2D vector (translations and velocities)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component along an axis
    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Vertical => self.y,
            Axis::Horizontal => self.x,
        }
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

/// Drag axis
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Vertical,
    Horizontal,
}

impl Axis {
    /// Dominant axis of a vector. Ties go horizontal, matching a strict
    /// `|y| > |x|` vertical test.
    pub fn of(v: Vec2) -> Axis {
        if v.y.abs() > v.x.abs() {
            Axis::Vertical
        } else {
            Axis::Horizontal
        }
    }
}
