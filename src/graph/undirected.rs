//! Undirected graph over a fixed vertex range.
//!
//! Vertices are the integers `0..vertex_count`, created up front. Each vertex
//! keeps a neighbor set: adding edge (v, w) puts w in v's set and v in w's.

use petgraph::stable_graph::{NodeIndex, StableUnGraph};

use crate::error::GraphError;

/// An undirected graph with a fixed number of vertices.
#[derive(Debug, Clone)]
pub struct UndirectedGraph {
    /// Node weights are unused; vertex `v` is `NodeIndex::new(v)`.
    graph: StableUnGraph<(), ()>,
    vertex_count: usize,
}

impl UndirectedGraph {
    /// Create a graph with vertices `0..vertex_count` and no edges.
    pub fn new(vertex_count: usize) -> Self {
        let mut graph = StableUnGraph::with_capacity(vertex_count, 0);
        for _ in 0..vertex_count {
            graph.add_node(());
        }
        Self {
            graph,
            vertex_count,
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Connect `v` and `w`.
    ///
    /// Adding an edge that already exists changes nothing. Fails without
    /// touching the graph if either vertex is out of range.
    pub fn add_edge(&mut self, v: usize, w: usize) -> Result<(), GraphError> {
        let a = self.index(v)?;
        let b = self.index(w)?;
        self.graph.update_edge(a, b, ());
        Ok(())
    }

    /// Neighbor set of `v`, sorted ascending.
    pub fn neighbors(&self, v: usize) -> Result<Vec<usize>, GraphError> {
        let a = self.index(v)?;
        let mut neighbors: Vec<usize> = self.graph.neighbors(a).map(|n| n.index()).collect();
        neighbors.sort_unstable();
        // A self-loop can be reported from both of its ends
        neighbors.dedup();
        Ok(neighbors)
    }

    /// Size of the neighbor set of `v`.
    pub fn degree(&self, v: usize) -> Result<usize, GraphError> {
        self.neighbors(v).map(|n| n.len())
    }

    /// Check if `v` and `w` are connected.
    pub fn has_edge(&self, v: usize, w: usize) -> Result<bool, GraphError> {
        let a = self.index(v)?;
        let b = self.index(w)?;
        Ok(self.graph.find_edge(a, b).is_some())
    }

    fn index(&self, vertex: usize) -> Result<NodeIndex, GraphError> {
        if vertex < self.vertex_count {
            Ok(NodeIndex::new(vertex))
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count,
            })
        }
    }
}
