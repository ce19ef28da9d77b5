//! Graph data structures.
//!
//! This module provides a fixed-size undirected graph with adjacency sets,
//! backed by petgraph's StableGraph.

mod undirected;

pub use undirected::UndirectedGraph;
