//! 2d-tree built by single-point insertion.
//!
//! Provides:
//! - Membership test and insertion in O(depth)
//! - Inclusive rectangle range search with half-plane pruning
//! - Nearest neighbor with branch-and-bound pruning
//!
//! The tree is never rebalanced, so its shape depends on insertion order.

use log::{debug, trace};

use super::Axis;
use crate::error::KdTreeError;
use crate::geometry::{Point2D, RectHV};

/// Which child a point descends into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// A node in the tree. Every node holds a point.
#[derive(Debug, Clone)]
struct Node {
    point: Point2D,
    /// Split axis; always `Axis::for_depth(depth)`.
    axis: Axis,
    /// Points strictly less than `point` along `axis`.
    left: Option<Box<Node>>,
    /// Points greater than or equal to `point` along `axis`.
    right: Option<Box<Node>>,
}

impl Node {
    fn new(point: Point2D, axis: Axis) -> Self {
        Self {
            point,
            axis,
            left: None,
            right: None,
        }
    }

    /// Ties on the split axis go right.
    #[inline]
    fn side_of(&self, p: Point2D) -> Side {
        if self.axis.coord(p) < self.axis.coord(self.point) {
            Side::Left
        } else {
            Side::Right
        }
    }

    #[inline]
    fn child(&self, side: Side) -> Option<&Node> {
        match side {
            Side::Left => self.left.as_deref(),
            Side::Right => self.right.as_deref(),
        }
    }

    #[inline]
    fn child_mut(&mut self, side: Side) -> &mut Option<Box<Node>> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// A 2d-tree over planar points.
///
/// Each level splits the plane on one axis, starting with x at the root and
/// alternating with depth. Duplicate points are stored once.
///
/// # Example
///
/// ```
/// use kdtree_wasm::geometry::{Point2D, RectHV};
/// use kdtree_wasm::spatial::KdTree;
///
/// let mut tree = KdTree::new();
/// tree.insert(Point2D::new(0.5, 0.5)).unwrap();
/// tree.insert(Point2D::new(0.2, 0.3)).unwrap();
/// tree.insert(Point2D::new(0.8, 0.9)).unwrap();
///
/// let all = tree.range(&RectHV::new(0.0, 0.0, 1.0, 1.0).unwrap());
/// assert_eq!(all.len(), 3);
///
/// let nearest = tree.nearest(Point2D::new(0.25, 0.35)).unwrap();
/// assert_eq!(nearest, Point2D::new(0.2, 0.3));
/// ```
#[derive(Debug, Clone)]
pub struct KdTree {
    root: Option<Box<Node>>,
    len: usize,
}

impl KdTree {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Build a tree by inserting points in iteration order.
    ///
    /// Stops at the first non-finite point.
    pub fn from_points<I>(points: I) -> Result<Self, KdTreeError>
    where
        I: IntoIterator<Item = Point2D>,
    {
        let mut tree = Self::new();
        for point in points {
            tree.insert(point)?;
        }
        Ok(tree)
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the tree has no points.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if the exact point is stored in the tree.
    pub fn contains(&self, point: Point2D) -> bool {
        point.is_finite() && self.find(point).is_some()
    }

    /// Insert a point.
    ///
    /// Returns `Ok(true)` if the point was added and `Ok(false)` if it was
    /// already present. A point with a NaN or infinite coordinate is rejected
    /// and the tree is left untouched.
    pub fn insert(&mut self, point: Point2D) -> Result<bool, KdTreeError> {
        if !point.is_finite() {
            debug!("rejected non-finite point {point}");
            return Err(KdTreeError::NonFinitePoint {
                x: point.x(),
                y: point.y(),
            });
        }

        let mut slot = &mut self.root;
        let mut axis = Axis::X;
        let mut depth = 0;
        while let Some(node) = slot {
            if node.point == point {
                return Ok(false);
            }
            axis = node.axis.flip();
            depth += 1;
            let side = node.side_of(point);
            slot = node.child_mut(side);
        }

        *slot = Some(Box::new(Node::new(point, axis)));
        self.len += 1;
        trace!("inserted {point} at depth {depth}, splitting on {axis}");
        Ok(true)
    }

    /// Insert points from a flat `[x0, y0, x1, y1, ...]` buffer.
    ///
    /// The whole buffer is checked before anything is inserted: an odd length
    /// or any non-finite coordinate fails and leaves the tree untouched.
    /// Returns the number of points that were new.
    pub fn insert_positions(&mut self, positions: &[f64]) -> Result<usize, KdTreeError> {
        if positions.len() % 2 != 0 {
            return Err(KdTreeError::OddCoordinateCount {
                len: positions.len(),
            });
        }

        let points: Vec<Point2D> = positions
            .chunks_exact(2)
            .map(|pair| Point2D::new(pair[0], pair[1]))
            .collect();
        if let Some(bad) = points.iter().find(|p| !p.is_finite()) {
            debug!("rejected position buffer containing {bad}");
            return Err(KdTreeError::NonFinitePoint {
                x: bad.x(),
                y: bad.y(),
            });
        }

        let mut added = 0;
        for point in points {
            if self.insert(point)? {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Depth of the node storing `point` (root is 0), if present.
    pub fn depth_of(&self, point: Point2D) -> Option<usize> {
        self.find(point).map(|(_, depth)| depth)
    }

    /// Split axis of the node storing `point`, if present.
    pub fn axis_of(&self, point: Point2D) -> Option<Axis> {
        self.find(point).map(|(node, _)| node.axis)
    }

    /// Number of levels in the tree; 0 when empty.
    pub fn height(&self) -> usize {
        fn height_of(node: Option<&Node>) -> usize {
            node.map_or(0, |n| {
                1 + height_of(n.left.as_deref()).max(height_of(n.right.as_deref()))
            })
        }
        height_of(self.root.as_deref())
    }

    /// Walk from the root following the split rule until the point is found
    /// or an empty slot is reached.
    fn find(&self, point: Point2D) -> Option<(&Node, usize)> {
        let mut current = self.root.as_deref();
        let mut depth = 0;
        while let Some(node) = current {
            if node.point == point {
                return Some((node, depth));
            }
            current = node.child(node.side_of(point));
            depth += 1;
        }
        None
    }

    /// Find all points inside the rectangle, boundaries included.
    ///
    /// The order is a pre-order walk of the tree and carries no meaning.
    pub fn range(&self, rect: &RectHV) -> Vec<Point2D> {
        let mut results = Vec::new();
        Self::range_recursive(self.root.as_deref(), rect, &mut results);
        results
    }

    fn range_recursive(node: Option<&Node>, rect: &RectHV, results: &mut Vec<Point2D>) {
        let Some(node) = node else {
            return;
        };

        if rect.contains(node.point) {
            results.push(node.point);
        }

        let split = node.axis.coord(node.point);
        let (lo, hi) = node.axis.interval(rect);

        if hi < split {
            // Whole interval below the split: right half-plane can't overlap
            Self::range_recursive(node.left.as_deref(), rect, results);
        } else if lo >= split {
            // Left subtree is strictly below the split
            Self::range_recursive(node.right.as_deref(), rect, results);
        } else {
            Self::range_recursive(node.left.as_deref(), rect, results);
            Self::range_recursive(node.right.as_deref(), rect, results);
        }
    }

    /// Find the stored point closest to `query` by Euclidean distance.
    ///
    /// Among equally distant points, the first one reached by the traversal
    /// wins. Fails with [`KdTreeError::EmptyTree`] when there are no points.
    pub fn nearest(&self, query: Point2D) -> Result<Point2D, KdTreeError> {
        if !query.is_finite() {
            return Err(KdTreeError::NonFinitePoint {
                x: query.x(),
                y: query.y(),
            });
        }
        let root = self.root.as_deref().ok_or(KdTreeError::EmptyTree)?;

        let mut search = NearestSearch::new(query);
        search.visit(root);
        trace!(
            "nearest to {query}: visited {} of {} nodes, pruned {} subtrees",
            search.visited,
            self.len,
            search.pruned
        );

        search
            .champion
            .map(|(point, _)| point)
            .ok_or(KdTreeError::EmptyTree)
    }

    /// Iterate over the stored points in order: left subtree, node, right subtree.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.root.as_deref(), self.len)
    }
}

impl Default for KdTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for KdTree {
    fn drop(&mut self) {
        // Unlink children before each box is freed so a chain-shaped tree
        // doesn't drop one level per stack frame.
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<'a> IntoIterator for &'a KdTree {
    type Item = Point2D;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// State of one nearest-neighbor search.
struct NearestSearch {
    query: Point2D,
    /// Best point so far and its squared distance to `query`.
    champion: Option<(Point2D, f64)>,
    visited: usize,
    pruned: usize,
}

impl NearestSearch {
    fn new(query: Point2D) -> Self {
        Self {
            query,
            champion: None,
            visited: 0,
            pruned: 0,
        }
    }

    /// Whether something at squared distance `dist_sq` would beat the champion.
    #[inline]
    fn improves(&self, dist_sq: f64) -> bool {
        self.champion.is_none_or(|(_, best)| dist_sq < best)
    }

    fn visit(&mut self, node: &Node) {
        self.visited += 1;

        let dist_sq = node.point.distance_squared_to(self.query);
        if self.improves(dist_sq) {
            self.champion = Some((node.point, dist_sq));
        }

        let near_side = node.side_of(self.query);
        let far_side = match near_side {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        };

        if let Some(near) = node.child(near_side) {
            self.visit(near);
        }

        if let Some(far) = node.child(far_side) {
            // Nothing across the split line is closer than the line itself
            let gap = node.axis.coord(self.query) - node.axis.coord(node.point);
            if self.improves(gap * gap) {
                self.visit(far);
            } else {
                self.pruned += 1;
            }
        }
    }
}

/// In-order iterator over the points of a [`KdTree`].
///
/// Uses an explicit stack, so degenerate (chain-shaped) trees don't recurse.
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    fn new(root: Option<&'a Node>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = Point2D;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}
