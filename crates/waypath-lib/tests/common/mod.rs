//! Common test utilities and fixture helpers.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use waypath_lib::{load_network, Graph};

/// Path to fixtures directory used by tests (networks, vehicle catalogs).
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Eight-edge network with several alternative routes between
/// Hyderabad and Vijayawada.
#[allow(dead_code)]
pub fn sample_network() -> Graph {
    load_network(&fixtures_dir().join("sample_network.csv")).expect("load sample_network.csv")
}

/// Two components with no edge between them.
#[allow(dead_code)]
pub fn split_network() -> Graph {
    let mut graph = Graph::new();
    graph.add_edge("Hyderabad", "Warangal", 140.0).expect("edge");
    graph.add_edge("Guntur", "Nellore", 250.0).expect("edge");
    graph
}

/// Write `contents` into a fresh temp dir; the dir must outlive the path.
#[allow(dead_code)]
pub fn write_temp_csv(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write csv");
    (dir, path)
}
