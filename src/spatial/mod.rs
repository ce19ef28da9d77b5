//! Spatial indexing for point membership, range and nearest-neighbor queries.
//!
//! This module provides a 2d-tree: a binary tree that splits the plane
//! alternately along x and y at each level.

mod axis;
mod kdtree;

pub use axis::Axis;
pub use kdtree::{Iter, KdTree};
