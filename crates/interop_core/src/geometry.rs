//! Axis-parameterised geometry
//!
//! Everything in the scroll area is computed once per axis. Instead of
//! duplicating `x`/`y` logic, callers pick an [`Axis`] and read values
//! "along" it through the helpers on [`Point`], [`Size`] and [`Rect`].

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

// ============================================================================
// Axis
// ============================================================================

/// A scroll axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Horizontal axis
    X,
    /// Vertical axis
    Y,
}

impl Axis {
    /// Both axes, horizontal first
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];

    /// The other axis
    pub fn perpendicular(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }

    /// Lowercase name, as used in `data-axis`
    pub fn as_str(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
        }
    }

    /// Orientation a part laid out along this axis has
    pub fn orientation(self) -> Orientation {
        match self {
            Axis::X => Orientation::Horizontal,
            Axis::Y => Orientation::Vertical,
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pair of values, one per axis
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisMap<T> {
    pub x: T,
    pub y: T,
}

impl<T> AxisMap<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Build both entries from a per-axis closure
    pub fn from_fn(mut f: impl FnMut(Axis) -> T) -> Self {
        Self {
            x: f(Axis::X),
            y: f(Axis::Y),
        }
    }

    /// Iterate `(axis, value)` pairs, horizontal first
    pub fn iter(&self) -> impl Iterator<Item = (Axis, &T)> {
        [(Axis::X, &self.x), (Axis::Y, &self.y)].into_iter()
    }
}

impl<T> Index<Axis> for AxisMap<T> {
    type Output = T;

    fn index(&self, axis: Axis) -> &T {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }
}

impl<T> IndexMut<Axis> for AxisMap<T> {
    fn index_mut(&mut self, axis: Axis) -> &mut T {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        }
    }
}

// ============================================================================
// Orientation / Direction
// ============================================================================

/// Layout orientation of a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }

    pub fn perpendicular(self) -> Orientation {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// Reading direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }

    pub fn is_rtl(self) -> bool {
        self == Direction::Rtl
    }
}

// ============================================================================
// Point / Size / Rect
// ============================================================================

/// A 2D point in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Coordinate along `axis`
    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Replace the coordinate along `axis`
    pub fn with_along(mut self, axis: Axis, value: f32) -> Self {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
        }
        self
    }
}

/// A 2D size in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Length along `axis` (width for X, height for Y)
    pub fn along(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }

    /// Thickness of a bar laid out along `axis`
    ///
    /// A horizontal scrollbar is as thick as it is tall, a vertical one as
    /// thick as it is wide.
    pub fn thickness(&self, axis: Axis) -> f32 {
        self.along(axis.perpendicular())
    }
}

/// An axis-aligned rectangle in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Check whether a point lies inside (edges inclusive)
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Project onto `axis`
    pub fn logical(&self, axis: Axis) -> LogicalRect {
        LogicalRect {
            position: self.origin().along(axis),
            size: self.size().along(axis),
        }
    }
}

/// A one-dimensional projection of a rect along an axis
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LogicalRect {
    /// Leading edge
    pub position: f32,
    /// Length
    pub size: f32,
}

impl LogicalRect {
    pub fn new(position: f32, size: f32) -> Self {
        Self { position, size }
    }

    /// Trailing edge
    pub fn end(&self) -> f32 {
        self.position + self.size
    }

    pub fn contains(&self, value: f32) -> bool {
        value >= self.position && value <= self.end()
    }
}
