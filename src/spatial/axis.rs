//! Discriminant axis of a tree level.

use std::fmt;

use crate::geometry::{Point2D, RectHV};

/// The coordinate a tree node splits on.
///
/// The root splits on [`Axis::X`]; every level below flips to the other axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// The axis used by nodes at the given depth (root is depth 0).
    #[inline]
    pub fn for_depth(depth: usize) -> Self {
        if depth % 2 == 0 { Axis::X } else { Axis::Y }
    }

    /// The other axis.
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }

    /// The point's coordinate along this axis.
    #[inline]
    pub fn coord(self, p: Point2D) -> f64 {
        match self {
            Axis::X => p.x(),
            Axis::Y => p.y(),
        }
    }

    /// The rectangle's closed interval `(lo, hi)` along this axis.
    #[inline]
    pub fn interval(self, rect: &RectHV) -> (f64, f64) {
        match self {
            Axis::X => (rect.xmin(), rect.xmax()),
            Axis::Y => (rect.ymin(), rect.ymax()),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_toggles() {
        assert_eq!(Axis::X.flip(), Axis::Y);
        assert_eq!(Axis::Y.flip(), Axis::X);
        assert_eq!(Axis::X.flip().flip(), Axis::X);
    }

    #[test]
    fn test_for_depth_alternates() {
        assert_eq!(Axis::for_depth(0), Axis::X);
        assert_eq!(Axis::for_depth(1), Axis::Y);
        assert_eq!(Axis::for_depth(2), Axis::X);
        assert_eq!(Axis::for_depth(7), Axis::Y);
        for depth in 0..10 {
            assert_eq!(Axis::for_depth(depth + 1), Axis::for_depth(depth).flip());
        }
    }

    #[test]
    fn test_coord_and_interval() {
        let p = Point2D::new(0.25, 0.75);
        assert_eq!(Axis::X.coord(p), 0.25);
        assert_eq!(Axis::Y.coord(p), 0.75);

        let rect = RectHV::new(0.1, 0.2, 0.3, 0.4).unwrap();
        assert_eq!(Axis::X.interval(&rect), (0.1, 0.3));
        assert_eq!(Axis::Y.interval(&rect), (0.2, 0.4));
        assert_eq!(format!("{}/{}", Axis::X, Axis::Y), "x/y");
    }
}
