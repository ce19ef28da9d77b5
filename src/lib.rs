//! kdtree-wasm - WASM Module
//!
//! This module provides a 2d-tree spatial index over planar points, plus a
//! small undirected graph. It is compiled to WebAssembly and exposes a
//! JavaScript-friendly API via wasm-bindgen.
//!
//! # Architecture
//!
//! - `geometry`: Point and axis-aligned rectangle primitives
//! - `spatial`: 2d-tree with insertion, range search and nearest neighbor
//! - `graph`: Fixed-size undirected graph using petgraph's StableGraph
//! - `error`: Typed errors for all fallible operations

use js_sys::Float64Array;
use wasm_bindgen::prelude::*;

pub mod error;
pub mod geometry;
pub mod graph;
pub mod spatial;

use geometry::{Point2D, RectHV};
use graph::UndirectedGraph;
use spatial::KdTree;

/// Initialize the WASM module.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Flatten points into [x0, y0, x1, y1, ...].
fn interleave<I>(points: I) -> Vec<f64>
where
    I: IntoIterator<Item = Point2D>,
{
    points.into_iter().flat_map(|p| [p.x(), p.y()]).collect()
}

/// 2d-tree exposed to JavaScript.
#[wasm_bindgen]
pub struct KdTreeWasm {
    tree: KdTree,
}

#[wasm_bindgen]
impl KdTreeWasm {
    /// Create a new empty tree.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            tree: KdTree::new(),
        }
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Insert a point.
    ///
    /// Returns true if the point was added, false if it was already present.
    /// Throws on NaN or infinite coordinates.
    pub fn insert(&mut self, x: f64, y: f64) -> Result<bool, JsError> {
        Ok(self.tree.insert(Point2D::new(x, y))?)
    }

    /// Insert points from a Float64Array of positions.
    ///
    /// The positions array should be [x0, y0, x1, y1, ...].
    /// Returns the number of points that were new. Throws on an odd length or
    /// any NaN or infinite coordinate, in which case nothing is inserted.
    #[wasm_bindgen(js_name = insertFromPositions)]
    pub fn insert_from_positions(&mut self, positions: &[f64]) -> Result<u32, JsError> {
        Ok(self.tree.insert_positions(positions)? as u32)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Check if the exact point is stored.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.tree.contains(Point2D::new(x, y))
    }

    /// Number of stored points.
    pub fn size(&self) -> usize {
        self.tree.len()
    }

    /// Check if the tree is empty.
    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Find all points within a rectangle, boundaries included.
    ///
    /// Returns a Float64Array [x0, y0, x1, y1, ...].
    pub fn range(
        &self,
        xmin: f64,
        ymin: f64,
        xmax: f64,
        ymax: f64,
    ) -> Result<Float64Array, JsError> {
        let rect = RectHV::new(xmin, ymin, xmax, ymax)?;
        let flat = interleave(self.tree.range(&rect));
        Ok(Float64Array::from(&flat[..]))
    }

    /// Find all points within a rectangle as an array of `{x, y}` objects.
    #[wasm_bindgen(js_name = rangePoints)]
    pub fn range_points(
        &self,
        xmin: f64,
        ymin: f64,
        xmax: f64,
        ymax: f64,
    ) -> Result<JsValue, JsError> {
        let rect = RectHV::new(xmin, ymin, xmax, ymax)?;
        Ok(serde_wasm_bindgen::to_value(&self.tree.range(&rect))?)
    }

    /// Find the nearest stored point.
    ///
    /// Returns [x, y]. Throws if the tree is empty.
    pub fn nearest(&self, x: f64, y: f64) -> Result<Vec<f64>, JsError> {
        let p = self.tree.nearest(Point2D::new(x, y))?;
        Ok(vec![p.x(), p.y()])
    }

    /// All points in tree order (left subtree, node, right subtree).
    ///
    /// Returns a Float64Array [x0, y0, x1, y1, ...] for rendering.
    #[wasm_bindgen(js_name = pointsInOrder)]
    pub fn points_in_order(&self) -> Float64Array {
        let flat = interleave(self.tree.iter());
        Float64Array::from(&flat[..])
    }

    /// Number of levels in the tree.
    pub fn height(&self) -> usize {
        self.tree.height()
    }
}

impl Default for KdTreeWasm {
    fn default() -> Self {
        Self::new()
    }
}

/// Undirected graph exposed to JavaScript.
#[wasm_bindgen]
pub struct UndirectedGraphWasm {
    graph: UndirectedGraph,
}

#[wasm_bindgen]
impl UndirectedGraphWasm {
    /// Create a graph with vertices 0..vertex_count.
    #[wasm_bindgen(constructor)]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            graph: UndirectedGraph::new(vertex_count),
        }
    }

    /// Connect two vertices. Throws if either is out of range.
    #[wasm_bindgen(js_name = addEdge)]
    pub fn add_edge(&mut self, v: usize, w: usize) -> Result<(), JsError> {
        Ok(self.graph.add_edge(v, w)?)
    }

    /// Neighbors of a vertex, sorted ascending.
    pub fn neighbors(&self, v: usize) -> Result<Vec<u32>, JsError> {
        let neighbors = self.graph.neighbors(v)?;
        Ok(neighbors.into_iter().map(|n| n as u32).collect())
    }

    /// Number of neighbors of a vertex.
    pub fn degree(&self, v: usize) -> Result<usize, JsError> {
        Ok(self.graph.degree(v)?)
    }

    #[wasm_bindgen(js_name = vertexCount)]
    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    #[wasm_bindgen(js_name = edgeCount)]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
