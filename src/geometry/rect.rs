//! Axis-aligned rectangle type.

use std::fmt;

use super::Point2D;
use crate::error::GeometryError;

/// An axis-aligned rectangle `[xmin, xmax] x [ymin, ymax]`.
///
/// All four edges are inclusive. Construction guarantees `xmin <= xmax` and
/// `ymin <= ymax`; NaN bounds are rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectHV {
    xmin: f64,
    ymin: f64,
    xmax: f64,
    ymax: f64,
}

impl RectHV {
    /// Create a rectangle from its bounds.
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Result<Self, GeometryError> {
        // `!(a <= b)` also catches NaN on either side.
        if !(xmin <= xmax) || !(ymin <= ymax) {
            return Err(GeometryError::InvalidRect {
                xmin,
                ymin,
                xmax,
                ymax,
            });
        }
        Ok(Self {
            xmin,
            ymin,
            xmax,
            ymax,
        })
    }

    /// Create the smallest rectangle spanning two corners, in any order.
    pub fn from_corners(a: Point2D, b: Point2D) -> Result<Self, GeometryError> {
        Self::new(
            a.x().min(b.x()),
            a.y().min(b.y()),
            a.x().max(b.x()),
            a.y().max(b.y()),
        )
    }

    #[inline]
    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    #[inline]
    pub fn ymin(&self) -> f64 {
        self.ymin
    }

    #[inline]
    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    #[inline]
    pub fn ymax(&self) -> f64 {
        self.ymax
    }

    /// Width along x.
    #[inline]
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    /// Height along y.
    #[inline]
    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// Whether the point lies inside or on the boundary.
    #[inline]
    pub fn contains(&self, p: Point2D) -> bool {
        p.x() >= self.xmin && p.x() <= self.xmax && p.y() >= self.ymin && p.y() <= self.ymax
    }

    /// Whether the two rectangles share at least one point.
    pub fn intersects(&self, other: &RectHV) -> bool {
        self.xmin <= other.xmax
            && self.xmax >= other.xmin
            && self.ymin <= other.ymax
            && self.ymax >= other.ymin
    }

    /// Euclidean distance from the point to the closest point of the rectangle.
    ///
    /// Zero when the point is inside.
    pub fn distance_to(&self, p: Point2D) -> f64 {
        self.distance_squared_to(p).sqrt()
    }

    /// Squared Euclidean distance from the point to the rectangle.
    pub fn distance_squared_to(&self, p: Point2D) -> f64 {
        let dx = if p.x() < self.xmin {
            p.x() - self.xmin
        } else if p.x() > self.xmax {
            p.x() - self.xmax
        } else {
            0.0
        };
        let dy = if p.y() < self.ymin {
            p.y() - self.ymin
        } else if p.y() > self.ymax {
            p.y() - self.ymax
        } else {
            0.0
        };
        dx * dx + dy * dy
    }
}

impl fmt::Display for RectHV {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}] x [{}, {}]", self.xmin, self.xmax, self.ymin, self.ymax)
    }
}
