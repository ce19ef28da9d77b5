//! Browser-side checks of the JavaScript surface.
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use kdtree_wasm::{KdTreeWasm, UndirectedGraphWasm};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn insert_and_query() {
    let mut tree = KdTreeWasm::new();
    assert!(tree.is_empty());
    assert!(tree.insert(0.5, 0.5).unwrap());
    assert!(tree.insert(0.2, 0.3).unwrap());
    assert!(tree.insert(0.8, 0.9).unwrap());
    assert!(!tree.insert(0.2, 0.3).unwrap());

    assert_eq!(tree.size(), 3);
    assert!(tree.contains(0.8, 0.9));
    assert_eq!(tree.range(0.0, 0.0, 1.0, 1.0).unwrap().length(), 6);
    assert_eq!(tree.nearest(0.25, 0.35).unwrap(), vec![0.2, 0.3]);
    assert_eq!(tree.points_in_order().to_vec(), vec![0.2, 0.3, 0.5, 0.5, 0.8, 0.9]);

    let points = js_sys::Array::from(&tree.range_points(0.0, 0.0, 0.6, 0.6).unwrap());
    assert_eq!(points.length(), 2);
    let xs: Vec<f64> = points
        .iter()
        .map(|p| js_sys::Reflect::get(&p, &"x".into()).unwrap().as_f64().unwrap())
        .collect();
    assert!(xs.contains(&0.2) && xs.contains(&0.5));
}

#[wasm_bindgen_test]
fn errors_surface_as_exceptions() {
    let mut tree = KdTreeWasm::new();
    assert!(tree.nearest(0.0, 0.0).is_err());
    assert!(tree.insert(f64::NAN, 0.0).is_err());
    assert!(tree.range(1.0, 0.0, 0.0, 1.0).is_err());
    assert_eq!(tree.insert_from_positions(&[0.1, 0.1, 0.2, 0.2, 0.1, 0.1]).unwrap(), 2);
}

#[wasm_bindgen_test]
fn bad_position_buffers_insert_nothing() {
    let mut tree = KdTreeWasm::new();
    tree.insert(0.5, 0.5).unwrap();

    assert!(tree.insert_from_positions(&[0.1, 0.1, 0.2]).is_err());
    assert!(tree.insert_from_positions(&[0.1, 0.1, f64::NAN, 0.2]).is_err());
    assert!(tree.insert_from_positions(&[0.3, 0.3, f64::NEG_INFINITY, 0.2]).is_err());
    assert_eq!(tree.size(), 1);
    assert!(!tree.contains(0.1, 0.1));
    assert!(!tree.contains(0.3, 0.3));
}

#[wasm_bindgen_test]
fn graph_surface() {
    let mut graph = UndirectedGraphWasm::new(3);
    graph.add_edge(0, 2).unwrap();
    assert_eq!(graph.neighbors(2).unwrap(), vec![0]);
    assert_eq!(graph.degree(0).unwrap(), 1);
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.add_edge(0, 3).is_err());
}
