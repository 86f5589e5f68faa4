//! Network loading: the built-in reference network and CSV edge lists.
//!
//! Edge lists are CSV files with one undirected edge per row. Column names
//! are matched case-insensitively against a small set of synonyms so files
//! exported from spreadsheets load without renaming:
//!
//! | Field         | Accepted headers                              |
//! |---------------|-----------------------------------------------|
//! | `from`        | `from`, `source`, `origin`, `u`               |
//! | `to`          | `to`, `target`, `destination`, `v`            |
//! | `distance_km` | `distance_km`, `distance`, `weight`, `km`     |

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::graph::Graph;

/// Road distances (km) between cities in Telangana and Andhra Pradesh.
const REFERENCE_EDGES: &[(&str, &str, f64)] = &[
    ("Hyderabad", "Warangal", 140.0),
    ("Hyderabad", "Nalgonda", 100.0),
    ("Warangal", "Karimnagar", 70.0),
    ("Warangal", "Khammam", 120.0),
    ("Karimnagar", "Nizamabad", 150.0),
    ("Khammam", "Vijayawada", 130.0),
    ("Vijayawada", "Guntur", 40.0),
    ("Vijayawada", "Visakhapatnam", 350.0),
    ("Guntur", "Nellore", 250.0),
    ("Nellore", "Tirupati", 140.0),
    ("Visakhapatnam", "Srikakulam", 100.0),
    ("Srikakulam", "Vizianagaram", 50.0),
    ("Vizianagaram", "Rajahmundry", 190.0),
    ("Rajahmundry", "Kakinada", 65.0),
    ("Kakinada", "Amaravati", 200.0),
];

/// Build the reference network shipped with the library.
pub fn reference_network() -> Graph {
    let mut graph = Graph::new();
    for &(from, to, distance) in REFERENCE_EDGES {
        // Constant data: every weight is positive and no edge is a self-loop.
        if let Err(err) = graph.add_edge(from, to, distance) {
            warn!(%from, %to, error = %err, "skipping invalid reference edge");
        }
    }
    graph
}

/// Load a network from a CSV edge list on disk.
pub fn load_network(path: &Path) -> Result<Graph> {
    let file = fs::File::open(path)?;
    let graph = load_network_from_reader(file)?;
    info!(
        path = %path.display(),
        locations = graph.location_count(),
        edges = graph.edge_count(),
        "loaded network"
    );
    Ok(graph)
}

/// Load a network from any CSV reader (file, in-memory buffer, stdin).
pub fn load_network_from_reader<R: Read>(reader: R) -> Result<Graph> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|err| Error::NetworkData {
            message: format!("failed to read network headers: {err}"),
        })?
        .clone();

    let synonyms: &[(&str, &[&str])] = &[
        ("from", &["from", "source", "origin", "u"]),
        ("to", &["to", "target", "destination", "v"]),
        ("distance_km", &["distance_km", "distance", "weight", "km"]),
    ];
    let index_map = map_headers(&headers, synonyms);

    let missing: Vec<&str> = ["from", "to", "distance_km"]
        .into_iter()
        .filter(|c| !index_map.contains_key(c))
        .collect();
    if !missing.is_empty() {
        return Err(Error::NetworkData {
            message: format!(
                "network csv missing required columns: {}. Available: {}",
                missing.join(", "),
                headers.iter().collect::<Vec<_>>().join(", ")
            ),
        });
    }

    let mut graph = Graph::new();
    let mut seen: HashSet<(String, String)> = HashSet::new();

    for (offset, result) in csv_reader.records().enumerate() {
        // Header is line 1.
        let row = offset + 2;
        let record = result.map_err(|e| Error::NetworkData {
            message: e.to_string(),
        })?;

        let from = field(&record, &index_map, "from").ok_or_else(|| Error::NetworkData {
            message: format!("missing origin at row {row}"),
        })?;
        let to = field(&record, &index_map, "to").ok_or_else(|| Error::NetworkData {
            message: format!("missing destination at row {row}"),
        })?;
        let distance: f64 = field(&record, &index_map, "distance_km")
            .ok_or_else(|| Error::NetworkData {
                message: format!("missing distance for {from} - {to} at row {row}"),
            })?
            .parse()
            .map_err(|e| Error::NetworkData {
                message: format!("invalid distance for {from} - {to} at row {row}: {e}"),
            })?;

        let key = if from <= to {
            (from.to_string(), to.to_string())
        } else {
            (to.to_string(), from.to_string())
        };
        if !seen.insert(key) {
            warn!(%from, %to, row, "parallel edge in network data");
        }

        graph
            .add_edge(from, to, distance)
            .map_err(|e| Error::NetworkData {
                message: format!("{e} at row {row}"),
            })?;
    }

    if graph.is_empty() {
        return Err(Error::NetworkData {
            message: "network csv contains no edges".to_string(),
        });
    }

    Ok(graph)
}

/// Map canonical field names to column indices using normalised header synonyms.
pub(crate) fn map_headers<'a>(
    headers: &csv::StringRecord,
    synonyms: &[(&'a str, &[&str])],
) -> BTreeMap<&'a str, usize> {
    let normalized: Vec<String> = headers.iter().map(normalize_header).collect();
    let mut index_map = BTreeMap::new();

    for (canon, alts) in synonyms {
        'outer: for alt in *alts {
            let alt_n = normalize_header(alt);
            for (i, h) in normalized.iter().enumerate() {
                if *h == alt_n {
                    index_map.insert(*canon, i);
                    break 'outer;
                }
            }
        }
    }

    index_map
}

/// Trimmed, non-empty value of a canonical field in `record`.
pub(crate) fn field<'r>(
    record: &'r csv::StringRecord,
    index_map: &BTreeMap<&str, usize>,
    name: &str,
) -> Option<&'r str> {
    index_map
        .get(name)
        .and_then(|&i| record.get(i))
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn normalize_header(s: &str) -> String {
    s.to_ascii_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_network_registers_every_city() {
        let graph = reference_network();
        assert_eq!(graph.edge_count(), REFERENCE_EDGES.len());
        assert_eq!(graph.location_count(), 16);
        assert_eq!(graph.locations().next(), Some("Hyderabad"));
    }

    #[test]
    fn header_synonyms_are_normalised() {
        let csv = "Source,Target,Weight (km)\nA,B,5\n";
        // "Weight (km)" normalises to "weightkm", which is not a synonym.
        let err = load_network_from_reader(csv.as_bytes()).expect_err("unknown header");
        assert!(err.to_string().contains("distance_km"));

        let csv = "Source,Target,Weight\nA,B,5\n";
        let graph = load_network_from_reader(csv.as_bytes()).expect("synonyms accepted");
        assert_eq!(graph.neighbours("A").unwrap()[0].distance, 5.0);
    }

    #[test]
    fn reports_row_of_bad_distance() {
        let csv = "from,to,distance_km\nA,B,5\nB,C,far\n";
        let err = load_network_from_reader(csv.as_bytes()).expect_err("bad distance");
        let message = err.to_string();
        assert!(message.contains("row 3"), "got: {message}");
    }
}
