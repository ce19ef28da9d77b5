//! Planar geometry primitives.
//!
//! The spatial index consumes these types but never produces new ones:
//! - [`Point2D`]: an immutable coordinate pair with exact equality
//! - [`RectHV`]: an immutable axis-aligned rectangle with inclusive bounds

mod point;
mod rect;

pub use point::Point2D;
pub use rect::RectHV;
