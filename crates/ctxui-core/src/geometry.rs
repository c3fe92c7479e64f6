#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! Pointer positions are fractional ([`Point`]); laid-out extents, hit
//! rectangles, and draw offsets are whole pixels ([`Size`], [`Rect`],
//! [`Offset`]). The origin is the top-left corner of the viewport, with `y`
//! growing downward.

use std::ops::{Add, Sub};

/// A fractional position in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Round each axis to the nearest whole pixel, halfway cases away from zero.
    #[inline]
    pub fn round(self) -> Offset {
        Offset::new(self.x.round() as i32, self.y.round() as i32)
    }
}

impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<Offset> for Point {
    #[inline]
    fn from(offset: Offset) -> Self {
        Point::new(offset.x as f32, offset.y as f32)
    }
}

/// A whole-pixel translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    /// No translation.
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a new offset.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Offset {
    type Output = Offset;

    #[inline]
    fn add(self, rhs: Offset) -> Offset {
        Offset::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for Offset {
    type Output = Offset;

    #[inline]
    fn sub(self, rhs: Offset) -> Offset {
        Offset::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

/// A laid-out extent in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// Zero extent.
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a new size.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Check if either axis is zero (or negative).
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Clamp each axis into `[min, max]`.
    #[inline]
    pub fn clamp(self, min: Size, max: Size) -> Size {
        Size::new(
            self.width.max(min.width).min(max.width.max(min.width)),
            self.height.max(min.height).min(max.height.max(min.height)),
        )
    }
}

/// A rectangle for hit testing and fills.
///
/// `x`/`y` is the top-left corner (inclusive), `right()`/`bottom()` are
/// exclusive. Coordinates may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: i32,
    /// Top edge (inclusive).
    pub y: i32,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    /// Create a rectangle with its top-left corner at `origin`.
    #[inline]
    pub const fn at(origin: Offset, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Top-left corner.
    #[inline]
    pub const fn origin(&self) -> Offset {
        Offset::new(self.x, self.y)
    }

    /// Extent.
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Check if a point lies inside the half-open rectangle.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x as f32
            && point.x < self.right() as f32
            && point.y >= self.y as f32
            && point.y < self.bottom() as f32
    }

    /// Translate the rectangle.
    #[inline]
    pub fn translate(&self, by: Offset) -> Rect {
        Rect::new(
            self.x.saturating_add(by.x),
            self.y.saturating_add(by.y),
            self.width,
            self.height,
        )
    }
}

/// Layout constraints handed to a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Constraints {
    pub min: Size,
    pub max: Size,
}

impl Constraints {
    /// Constraints forcing exactly `size`.
    #[inline]
    pub const fn tight(size: Size) -> Self {
        Self {
            min: size,
            max: size,
        }
    }

    /// Constraints allowing anything from zero up to `max`.
    #[inline]
    pub const fn loose(max: Size) -> Self {
        Self {
            min: Size::ZERO,
            max,
        }
    }

    /// Clamp a widget's requested size into these constraints.
    #[inline]
    pub fn constrain(&self, size: Size) -> Size {
        size.clamp(self.min, self.max)
    }
}

/// Mapping from a target's local coordinate space to the viewport.
///
/// Targets are registered under pure translations, so the transform is the
/// viewport position of the local origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    origin: Point,
}

impl Transform {
    /// The identity mapping.
    pub const IDENTITY: Self = Self {
        origin: Point::ZERO,
    };

    /// A translation placing the local origin at `origin`.
    #[inline]
    pub const fn translate(origin: Point) -> Self {
        Self { origin }
    }

    /// Map a local point to viewport coordinates.
    #[inline]
    pub fn apply(&self, local: Point) -> Point {
        local + self.origin
    }

    /// Map a viewport point back into local coordinates.
    #[inline]
    pub fn invert(&self, viewport: Point) -> Point {
        viewport - self.origin
    }
}
