use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{Graph, Location};

/// One discovered path from start to goal with its raw cumulative distance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteCandidate {
    pub path: Vec<Location>,
    /// Sum of edge distances in kilometres, before any conditions adjustment.
    pub distance: f64,
}

impl RouteCandidate {
    /// Number of edges traversed.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// `true` if `location` appears anywhere on the path.
    pub fn visits(&self, location: &str) -> bool {
        self.path.iter().any(|step| step == location)
    }
}

/// Collect every route the priority-ordered exploration completes.
///
/// Each location is expanded at most once (the first time it is popped as a
/// non-goal), while every arrival at `goal` is recorded and left unexpanded.
/// Routes come back in pop order, so distances are non-decreasing and the
/// first route is a shortest one. Later routes are alternatives the search
/// happened to complete, not a certified k-shortest set; see
/// [`find_k_shortest_routes`] for that.
pub fn find_routes(graph: &Graph, start: &str, goal: &str) -> Result<Vec<RouteCandidate>> {
    graph.neighbours(start)?;
    graph.neighbours(goal)?;

    let mut queue = BinaryHeap::new();
    let mut finalized: HashSet<&str> = HashSet::new();
    let mut routes = Vec::new();

    queue.push(SearchState {
        cost: FloatOrd(0.0),
        node: start,
        path: Vec::new(),
    });

    while let Some(SearchState {
        cost,
        node,
        mut path,
    }) = queue.pop()
    {
        path.push(node);

        if node == goal {
            routes.push(RouteCandidate {
                path: path.iter().map(|step| step.to_string()).collect(),
                distance: cost.0,
            });
            continue;
        }

        if !finalized.insert(node) {
            continue;
        }

        for edge in graph.neighbours(node)? {
            queue.push(SearchState {
                cost: FloatOrd(cost.0 + edge.distance),
                node: edge.target.as_str(),
                path: path.clone(),
            });
        }
    }

    debug!(
        %start,
        %goal,
        expanded = finalized.len(),
        routes = routes.len(),
        "priority search finished"
    );

    if routes.is_empty() {
        return Err(Error::NoRouteFound {
            start: start.to_string(),
            goal: goal.to_string(),
        });
    }
    Ok(routes)
}

/// Yen's algorithm: up to `k` loopless routes in non-decreasing distance.
///
/// Parallel edges collapse to the lightest one, so each route is a distinct
/// sequence of locations.
pub fn find_k_shortest_routes(
    graph: &Graph,
    start: &str,
    goal: &str,
    k: usize,
) -> Result<Vec<RouteCandidate>> {
    graph.neighbours(start)?;
    graph.neighbours(goal)?;

    let no_route = || Error::NoRouteFound {
        start: start.to_string(),
        goal: goal.to_string(),
    };

    let first = shortest_path(graph, start, goal, &HashSet::new(), &HashSet::new())
        .ok_or_else(no_route)?;
    if k == 0 {
        return Ok(Vec::new());
    }

    let mut accepted: Vec<(Vec<&str>, f64)> = vec![first];
    let mut seen: HashSet<Vec<&str>> = HashSet::new();
    seen.insert(accepted[0].0.clone());
    let mut pending = BinaryHeap::new();

    while accepted.len() < k {
        let previous = accepted[accepted.len() - 1].0.clone();

        for spur_index in 0..previous.len().saturating_sub(1) {
            let spur_node = previous[spur_index];
            let root = &previous[..=spur_index];

            let banned_edges: HashSet<(&str, &str)> = accepted
                .iter()
                .filter(|(path, _)| path.len() > spur_index + 1 && &path[..=spur_index] == root)
                .map(|(path, _)| (path[spur_index], path[spur_index + 1]))
                .collect();
            let banned_nodes: HashSet<&str> = root[..spur_index].iter().copied().collect();

            let Some((spur_path, spur_cost)) =
                shortest_path(graph, spur_node, goal, &banned_nodes, &banned_edges)
            else {
                continue;
            };

            let mut total: Vec<&str> = root[..spur_index].to_vec();
            total.extend(spur_path);
            if !seen.insert(total.clone()) {
                continue;
            }

            let cost = path_cost(graph, root) + spur_cost;
            pending.push(PendingRoute {
                cost: FloatOrd(cost),
                path: total,
            });
        }

        let Some(next) = pending.pop() else {
            break;
        };
        accepted.push((next.path, next.cost.0));
    }

    debug!(%start, %goal, k, routes = accepted.len(), "yen search finished");

    Ok(accepted
        .into_iter()
        .map(|(path, distance)| RouteCandidate {
            path: path.into_iter().map(str::to_string).collect(),
            distance,
        })
        .collect())
}

/// Dijkstra over the graph, skipping banned nodes and directed edges.
fn shortest_path<'g>(
    graph: &'g Graph,
    start: &'g str,
    goal: &str,
    banned_nodes: &HashSet<&str>,
    banned_edges: &HashSet<(&str, &str)>,
) -> Option<(Vec<&'g str>, f64)> {
    let mut distances: HashMap<&str, f64> = HashMap::new();
    let mut parents: HashMap<&'g str, &'g str> = HashMap::new();
    let mut queue = BinaryHeap::new();

    distances.insert(start, 0.0);
    queue.push(QueueEntry::new(start, 0.0));

    while let Some(entry) = queue.pop() {
        if entry.cost.0 > *distances.get(entry.node).unwrap_or(&f64::INFINITY) {
            continue;
        }

        if entry.node == goal {
            let mut path = vec![entry.node];
            let mut current = entry.node;
            while let Some(&parent) = parents.get(current) {
                path.push(parent);
                current = parent;
            }
            path.reverse();
            return Some((path, entry.cost.0));
        }

        let Ok(edges) = graph.neighbours(entry.node) else {
            continue;
        };
        for edge in edges {
            let next = edge.target.as_str();
            if banned_nodes.contains(next) || banned_edges.contains(&(entry.node, next)) {
                continue;
            }

            let next_cost = entry.cost.0 + edge.distance;
            if next_cost < *distances.get(next).unwrap_or(&f64::INFINITY) {
                distances.insert(next, next_cost);
                parents.insert(next, entry.node);
                queue.push(QueueEntry::new(next, next_cost));
            }
        }
    }

    None
}

/// Distance along `path` using the lightest edge between consecutive steps.
fn path_cost(graph: &Graph, path: &[&str]) -> f64 {
    path.windows(2)
        .map(|pair| {
            graph
                .neighbours(pair[0])
                .map(|edges| {
                    edges
                        .iter()
                        .filter(|edge| edge.target == pair[1])
                        .map(|edge| edge.distance)
                        .fold(f64::INFINITY, f64::min)
                })
                .unwrap_or(f64::INFINITY)
        })
        .sum()
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Partial route held in the enumeration queue.
#[derive(Clone, Debug, Eq, PartialEq)]
struct SearchState<'g> {
    cost: FloatOrd,
    node: &'g str,
    path: Vec<&'g str>,
}

impl Ord for SearchState<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap; ties resolve by
        // location name, then by path, keeping the output deterministic.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(self.node))
            .then_with(|| other.path.cmp(&self.path))
    }
}

impl PartialOrd for SearchState<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry<'g> {
    node: &'g str,
    cost: FloatOrd,
}

impl<'g> QueueEntry<'g> {
    fn new(node: &'g str, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(self.node))
    }
}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct PendingRoute<'g> {
    cost: FloatOrd,
    path: Vec<&'g str>,
}

impl Ord for PendingRoute<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.path.cmp(&self.path))
    }
}

impl PartialOrd for PendingRoute<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> Graph {
        // A-B-D is 2, A-C-D is 3, A-D direct is 10.
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 1.0).unwrap();
        graph.add_edge("B", "D", 1.0).unwrap();
        graph.add_edge("A", "C", 1.0).unwrap();
        graph.add_edge("C", "D", 2.0).unwrap();
        graph.add_edge("A", "D", 10.0).unwrap();
        graph
    }

    #[test]
    fn priority_search_collects_every_arrival() {
        let graph = diamond();
        let routes = find_routes(&graph, "A", "D").unwrap();
        let summary: Vec<(Vec<&str>, f64)> = routes
            .iter()
            .map(|r| (r.path.iter().map(String::as_str).collect(), r.distance))
            .collect();
        assert_eq!(
            summary,
            vec![
                (vec!["A", "B", "D"], 2.0),
                (vec!["A", "C", "D"], 3.0),
                (vec!["A", "D"], 10.0),
            ]
        );
    }

    #[test]
    fn start_equal_goal_yields_trivial_route() {
        let graph = diamond();
        let routes = find_routes(&graph, "A", "A").unwrap();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].path, vec!["A".to_string()]);
        assert_eq!(routes[0].hop_count(), 0);
    }

    #[test]
    fn parallel_edges_produce_separate_routes() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 4.0).unwrap();
        graph.add_edge("A", "B", 6.0).unwrap();
        let routes = find_routes(&graph, "A", "B").unwrap();
        let distances: Vec<f64> = routes.iter().map(|r| r.distance).collect();
        assert_eq!(distances, vec![4.0, 6.0]);
    }

    fn names(route: &RouteCandidate) -> Vec<&str> {
        route.path.iter().map(String::as_str).collect()
    }

    #[test]
    fn yen_stops_when_simple_paths_run_out() {
        let graph = diamond();
        let routes = find_k_shortest_routes(&graph, "A", "D", 5).unwrap();
        let distances: Vec<f64> = routes.iter().map(|r| r.distance).collect();
        assert_eq!(distances, vec![2.0, 3.0, 10.0]);
    }

    #[test]
    fn yen_finds_routes_the_priority_search_skips() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 1.0).unwrap();
        graph.add_edge("B", "D", 1.0).unwrap();
        graph.add_edge("A", "C", 1.0).unwrap();
        graph.add_edge("C", "B", 1.0).unwrap();
        graph.add_edge("C", "D", 5.0).unwrap();

        let collected = find_routes(&graph, "A", "D").unwrap();
        assert_eq!(collected.len(), 2);
        assert_eq!(names(&collected[1]), vec!["A", "C", "D"]);

        let yen = find_k_shortest_routes(&graph, "A", "D", 5).unwrap();
        let summary: Vec<(Vec<&str>, f64)> =
            yen.iter().map(|r| (names(r), r.distance)).collect();
        assert_eq!(
            summary,
            vec![
                (vec!["A", "B", "D"], 2.0),
                (vec!["A", "C", "B", "D"], 3.0),
                (vec!["A", "C", "D"], 6.0),
                (vec!["A", "B", "C", "D"], 7.0),
            ]
        );
    }

    #[test]
    fn disconnected_pair_reports_no_route() {
        let mut graph = diamond();
        graph.add_edge("X", "Y", 1.0).unwrap();
        let err = find_routes(&graph, "A", "Y").expect_err("no route");
        assert!(matches!(err, Error::NoRouteFound { .. }));
        let err = find_k_shortest_routes(&graph, "A", "Y", 3).expect_err("no route");
        assert!(matches!(err, Error::NoRouteFound { .. }));
    }
}
