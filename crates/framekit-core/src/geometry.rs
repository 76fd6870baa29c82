//! Geometry value types for view frames.
//!
//! All types are plain `f64` value types with pure arithmetic. A frame is a
//! [`Rect`] expressed in the parent's coordinate space; derived quantities
//! (edges, centers) are projections of the four stored fields, and every
//! `with_*` rewrite recomputes exactly one of `x`/`y`/`width`/`height` so the
//! `max_x - min_x == width` identity holds by construction.

use glam::Vec2;

use crate::errors::GeometryError;

/// A point in a parent-relative coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The origin point (0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Vec2> for Point {
    fn from(v: Vec2) -> Self {
        Self::new(v.x as f64, v.y as f64)
    }
}

impl From<Point> for Vec2 {
    fn from(p: Point) -> Self {
        Vec2::new(p.x as f32, p.y as f32)
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// The zero size.
    pub const ZERO: Self = Self { width: 0.0, height: 0.0 };

    /// Create a size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Return this size with both components multiplied by independent
    /// factors. Negative factors pass through; interpretation is left to the
    /// caller.
    pub fn scaled(&self, sx: f64, sy: f64) -> Self {
        Self::new(self.width * sx, self.height * sy)
    }
}

/// An axis-aligned rectangle: origin plus size in the parent's space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// The zero rect (0, 0, 0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, width: 0.0, height: 0.0 };

    /// Create a rect from origin and size components.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rect from an origin point and a size.
    pub fn from_parts(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Create a rect from position and size vectors.
    pub fn from_vecs(position: Vec2, size: Vec2) -> Self {
        Self {
            x: position.x as f64,
            y: position.y as f64,
            width: size.x as f64,
            height: size.y as f64,
        }
    }

    /// Get position as Vec2.
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }

    /// Get size as Vec2.
    pub fn extent(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// The origin (top-left) point.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// The size component.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// The left edge.
    pub fn min_x(&self) -> f64 {
        self.x
    }

    /// The horizontal center.
    pub fn mid_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// The right edge (x + width).
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    /// The top edge.
    pub fn min_y(&self) -> f64 {
        self.y
    }

    /// The vertical center.
    pub fn mid_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// The bottom edge (y + height).
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// Rect with the left edge moved to `v`; size unchanged.
    pub fn with_min_x(self, v: f64) -> Self {
        Self { x: v, ..self }
    }

    /// Rect with the horizontal center moved to `v`; size unchanged, so
    /// `x = v - width / 2`.
    pub fn with_mid_x(self, v: f64) -> Self {
        Self { x: v - self.width / 2.0, ..self }
    }

    /// Rect with the right edge moved to `v`; size unchanged, so
    /// `x = v - width`.
    pub fn with_max_x(self, v: f64) -> Self {
        Self { x: v - self.width, ..self }
    }

    /// Rect with the top edge moved to `v`; size unchanged.
    pub fn with_min_y(self, v: f64) -> Self {
        Self { y: v, ..self }
    }

    /// Rect with the vertical center moved to `v`; size unchanged.
    pub fn with_mid_y(self, v: f64) -> Self {
        Self { y: v - self.height / 2.0, ..self }
    }

    /// Rect with the bottom edge moved to `v`; size unchanged.
    pub fn with_max_y(self, v: f64) -> Self {
        Self { y: v - self.height, ..self }
    }

    /// Rect with a new origin; size unchanged.
    pub fn with_origin(self, origin: Point) -> Self {
        Self { x: origin.x, y: origin.y, ..self }
    }

    /// Rect with a new size; origin fixed, so the max edges move.
    pub fn with_size(self, size: Size) -> Self {
        Self { width: size.width, height: size.height, ..self }
    }

    /// Rect with a new width; origin fixed.
    pub fn with_width(self, width: f64) -> Self {
        Self { width, ..self }
    }

    /// Rect with a new height; origin fixed.
    pub fn with_height(self, height: f64) -> Self {
        Self { height, ..self }
    }

    /// Rect shifted by the given deltas; size unchanged.
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy, ..self }
    }

    /// Rect with width and height multiplied by independent factors; origin
    /// untouched. Negative factors pass through with defined arithmetic.
    pub fn scaled(self, sx: f64, sy: f64) -> Self {
        Self { width: self.width * sx, height: self.height * sy, ..self }
    }

    /// Compute union (bounding box) with another rect.
    pub fn union(&self, other: &Rect) -> Rect {
        let x1 = self.x.min(other.x);
        let y1 = self.y.min(other.y);
        let x2 = self.max_x().max(other.max_x());
        let y2 = self.max_y().max(other.max_y());
        Rect::new(x1, y1, x2 - x1, y2 - y1)
    }

    /// Check that all four components are finite.
    pub fn ensure_finite(&self) -> Result<(), GeometryError> {
        ensure_finite("x", self.x)?;
        ensure_finite("y", self.y)?;
        ensure_finite("width", self.width)?;
        ensure_finite("height", self.height)?;
        Ok(())
    }
}

/// Validate a scalar on its way into a frame write.
///
/// NaN and infinite values are rejected before anything is mutated; the
/// stored frame is never silently coerced.
pub fn ensure_finite(property: &'static str, value: f64) -> Result<(), GeometryError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::InvalidGeometry { property, value })
    }
}

/// The minimal rect enclosing every rect in the slice.
///
/// Empty input yields [`Rect::ZERO`] rather than an error.
pub fn bounding_rect(rects: &[Rect]) -> Rect {
    let mut iter = rects.iter();
    let first = match iter.next() {
        Some(r) => *r,
        None => return Rect::ZERO,
    };
    iter.fold(first, |acc, r| acc.union(r))
}

/// Sum of the widths of all rects.
pub fn sum_widths(rects: &[Rect]) -> f64 {
    rects.iter().map(|r| r.width).sum()
}

/// Sum of the heights of all rects.
pub fn sum_heights(rects: &[Rect]) -> f64 {
    rects.iter().map(|r| r.height).sum()
}

/// Both reducers packed into a `Size`.
///
/// Only meaningful when every rect shares one axis's extent; layout code
/// consumes the single axis-relevant reducer instead.
pub fn summed_size(rects: &[Rect]) -> Size {
    Size::new(sum_widths(rects), sum_heights(rects))
}
