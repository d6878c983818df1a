//! Integer grid geometry: points and axis-aligned rectangles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// A point on the integer placement grid.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i64,
    /// Vertical coordinate.
    pub y: i64,
}

impl Point {
    /// The grid origin `(0, 0)`.
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    /// Creates a point.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Returns the Manhattan (L1) distance to `other`.
    pub fn manhattan(self, other: Point) -> i64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Returns `true` if both coordinates are non-negative.
    pub fn is_non_negative(self) -> bool {
        self.x >= 0 && self.y >= 0
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A half-open axis-aligned rectangle `[x, x + width) × [y, y + height)`.
///
/// The origin is the lower-left corner. Two rectangles that only share an
/// edge do not overlap.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Rect {
    /// Lower-left corner.
    pub origin: Point,
    /// Extent along x.
    pub width: i64,
    /// Extent along y.
    pub height: i64,
}

impl Rect {
    /// Creates a rectangle from its lower-left corner and size.
    pub const fn new(origin: Point, width: i64, height: i64) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i64 {
        self.origin.x + self.width
    }

    /// Exclusive top edge.
    pub fn top(&self) -> i64 {
        self.origin.y + self.height
    }

    /// Returns `true` if the interiors of the two rectangles intersect.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.origin.x < other.right()
            && self.right() > other.origin.x
            && self.origin.y < other.top()
            && self.top() > other.origin.y
    }
}
