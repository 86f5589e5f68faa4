mod common;

use common::{fixtures_dir, write_temp_csv};
use waypath_lib::{load_network, load_network_from_reader, Error};

#[test]
fn fixture_network_loads() {
    let graph = load_network(&fixtures_dir().join("sample_network.csv")).expect("fixture loads");
    assert_eq!(graph.location_count(), 7);
    assert_eq!(graph.edge_count(), 8);
    assert!(graph.contains("Guntur"));
}

#[test]
fn header_synonyms_are_accepted() {
    let csv = "Source, Target, Weight\nA, B, 3.5\nB, C, 1\n";
    let graph = load_network_from_reader(csv.as_bytes()).expect("synonyms");
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.neighbours("B").unwrap().len(), 2);
}

#[test]
fn non_positive_weight_is_rejected() {
    let (_dir, path) = write_temp_csv("bad.csv", "from,to,distance_km\nA,B,-4\n");
    let err = load_network(&path).expect_err("negative weight");
    assert!(matches!(err, Error::NetworkData { .. }), "got {err:?}");
    let message = err.to_string();
    assert!(message.contains("invalid weight -4"), "got {message}");
    assert!(message.contains("row 2"), "got {message}");
}

#[test]
fn self_loop_names_the_row() {
    let csv = "from,to,distance_km\nA,B,1\nB,C,2\nC,C,3\n";
    let err = load_network_from_reader(csv.as_bytes()).expect_err("self-loop");
    assert!(err.to_string().contains("row 4"), "got {err}");
}

#[test]
fn unparsable_distance_names_the_row() {
    let csv = "from,to,distance_km\nA,B,1\nB,C,far\n";
    let err = load_network_from_reader(csv.as_bytes()).expect_err("bad distance");
    assert!(err.to_string().contains("row 3"), "got {err}");
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_network(&fixtures_dir().join("does_not_exist.csv")).expect_err("missing");
    assert!(matches!(err, Error::Io(_)));
}
