use std::cmp::Ordering;
use std::collections::HashMap;

use crate::error::{Error, Result};

/// Location identifier. Locations are compared and hashed by name.
pub type Location = String;

/// Minimum Jaro-Winkler similarity for a registered name to be offered as a
/// suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Number of suggestions attached to an [`Error::UnknownLocation`].
const MAX_SUGGESTIONS: usize = 3;

/// Half of an undirected edge, stored in the adjacency list of its source.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub target: Location,
    /// Distance in kilometres.
    pub distance: f64,
}

/// Undirected weighted graph over named locations.
///
/// Every location touched by an edge is registered, and locations keep the
/// order in which they were first seen so front ends can list them stably.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: HashMap<Location, Vec<Edge>>,
    order: Vec<Location>,
    edge_count: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an undirected edge between `from` and `to`.
    ///
    /// Both endpoints are registered when first seen. Inserting the same pair
    /// twice yields two parallel edges; both are explored by the search.
    pub fn add_edge(&mut self, from: &str, to: &str, distance: f64) -> Result<()> {
        if !distance.is_finite() || distance <= 0.0 {
            return Err(Error::InvalidEdgeWeight {
                from: from.to_string(),
                to: to.to_string(),
                weight: distance,
            });
        }
        if from == to {
            return Err(Error::InvalidEdge {
                message: format!("self-loop on {from} cannot be part of a route"),
            });
        }

        self.register(from);
        self.register(to);

        self.adjacency
            .entry(from.to_string())
            .or_default()
            .push(Edge {
                target: to.to_string(),
                distance,
            });
        self.adjacency
            .entry(to.to_string())
            .or_default()
            .push(Edge {
                target: from.to_string(),
                distance,
            });
        self.edge_count += 1;
        Ok(())
    }

    fn register(&mut self, location: &str) {
        if !self.adjacency.contains_key(location) {
            self.adjacency.insert(location.to_string(), Vec::new());
            self.order.push(location.to_string());
        }
    }

    /// Return the neighbours of a registered location in insertion order.
    pub fn neighbours(&self, location: &str) -> Result<&[Edge]> {
        self.adjacency
            .get(location)
            .map(Vec::as_slice)
            .ok_or_else(|| self.unknown_location(location))
    }

    /// All registered locations, in first-registration order.
    pub fn locations(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }

    pub fn contains(&self, location: &str) -> bool {
        self.adjacency.contains_key(location)
    }

    pub fn location_count(&self) -> usize {
        self.order.len()
    }

    /// Number of undirected edges (parallel edges counted individually).
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Resolve user input to a registered location name.
    ///
    /// Exact names win; otherwise a unique case-insensitive match is accepted.
    /// Misses become [`Error::UnknownLocation`] with suggestions.
    pub fn resolve(&self, name: &str) -> Result<&str> {
        let trimmed = name.trim();
        if let Some((key, _)) = self.adjacency.get_key_value(trimmed) {
            return Ok(key.as_str());
        }

        let mut folded = self
            .order
            .iter()
            .filter(|candidate| candidate.eq_ignore_ascii_case(trimmed));
        if let (Some(only), None) = (folded.next(), folded.next()) {
            return Ok(only.as_str());
        }

        Err(self.unknown_location(trimmed))
    }

    /// Registered names similar to `name`, best match first.
    pub fn fuzzy_location_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.to_lowercase();
        let mut scored: Vec<(f64, &String)> = self
            .order
            .iter()
            .map(|candidate| {
                let score = strsim::jaro_winkler(&needle, &candidate.to_lowercase());
                (score, candidate)
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| {
            b.0.partial_cmp(&a.0)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.1.cmp(b.1))
        });

        scored
            .into_iter()
            .take(limit)
            .map(|(_, candidate)| candidate.clone())
            .collect()
    }

    fn unknown_location(&self, name: &str) -> Error {
        Error::UnknownLocation {
            name: name.to_string(),
            suggestions: self.fuzzy_location_matches(name, MAX_SUGGESTIONS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        let mut graph = Graph::new();
        graph.add_edge("Alpha", "Beta", 3.0).unwrap();
        graph.add_edge("Beta", "Gamma", 4.0).unwrap();
        graph.add_edge("Alpha", "Gamma", 9.0).unwrap();
        graph
    }

    #[test]
    fn registration_order_is_preserved() {
        let graph = triangle();
        let names: Vec<_> = graph.locations().collect();
        assert_eq!(names, vec!["Alpha", "Beta", "Gamma"]);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn rejects_non_positive_weights() {
        let mut graph = Graph::new();
        for weight in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = graph.add_edge("A", "B", weight).expect_err("weight rejected");
            assert!(matches!(err, Error::InvalidEdgeWeight { .. }));
        }
        assert!(graph.is_empty(), "failed inserts must not register locations");
    }

    #[test]
    fn rejects_self_loops() {
        let mut graph = Graph::new();
        let err = graph.add_edge("A", "A", 1.0).expect_err("self-loop rejected");
        assert!(matches!(err, Error::InvalidEdge { .. }));
    }

    #[test]
    fn resolve_accepts_case_insensitive_input() {
        let graph = triangle();
        assert_eq!(graph.resolve("beta").unwrap(), "Beta");
        assert_eq!(graph.resolve("  Gamma ").unwrap(), "Gamma");
    }

    #[test]
    fn unknown_neighbour_lookup_carries_suggestions() {
        let graph = triangle();
        match graph.neighbours("Gama") {
            Err(Error::UnknownLocation { name, suggestions }) => {
                assert_eq!(name, "Gama");
                assert_eq!(suggestions.first().map(String::as_str), Some("Gamma"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn fuzzy_matches_respect_limit_and_threshold() {
        let graph = triangle();
        assert!(graph.fuzzy_location_matches("Alpha", 1).len() <= 1);
        assert!(graph.fuzzy_location_matches("Zzzzzzzz", 3).is_empty());
    }
}
