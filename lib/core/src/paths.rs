// Bounded all-simple-paths enumeration for pathway tracing
use crate::graph::{Graph, NodeId};
use serde::Serialize;
use std::collections::HashSet;

/// An ordered node-id sequence, start to end inclusive, with no repeats.
pub type Path = Vec<NodeId>;

/// Default bound on path length, in nodes.
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// Enumerates every simple path between `start_id` and `end_id` whose length
/// does not exceed `max_depth` nodes.
///
/// Depth-first search over the undirected adjacency, visiting neighbors in
/// edge-list order; the visited set is scoped to the active branch
/// (add-before-recurse / remove-after-recurse), so sibling branches may reuse
/// each other's nodes. Results come back in discovery order, and the search
/// is exhaustive within the bound - there is no early exit on first match.
///
/// If either endpoint is absent from the graph the result is empty, not an
/// error. `start_id == end_id` yields exactly the single-node path.
/// A `max_depth` of 0 is treated as 1.
///
/// Worst-case work is exponential in `max_depth`; there is deliberately no
/// visit budget or deadline, so callers should keep the bound small on dense
/// graphs.
pub fn enumerate_paths(graph: &Graph, start_id: &str, end_id: &str, max_depth: usize) -> Vec<Path> {
    if !graph.contains_node(start_id) || !graph.contains_node(end_id) {
        return Vec::new();
    }
    let max_depth = max_depth.max(1);

    let mut found = Vec::new();
    let mut path: Vec<NodeId> = Vec::with_capacity(max_depth);
    let mut on_path: HashSet<NodeId> = HashSet::new();
    visit(graph, start_id, end_id, max_depth, &mut path, &mut on_path, &mut found);
    found
}

fn visit(
    graph: &Graph,
    current: &str,
    end_id: &str,
    max_depth: usize,
    path: &mut Vec<NodeId>,
    on_path: &mut HashSet<NodeId>,
    found: &mut Vec<Path>,
) {
    path.push(current.to_string());
    on_path.insert(current.to_string());

    if current == end_id {
        // A complete path terminates its branch; no expansion past the end.
        found.push(path.clone());
    } else if path.len() < max_depth {
        for neighbor in graph.neighbors(current) {
            if !on_path.contains(neighbor) {
                visit(graph, neighbor, end_id, max_depth, path, on_path, found);
            }
        }
    }

    on_path.remove(current);
    path.pop();
}

/// Pathway result with the statistics derived from it.
///
/// `shortest_path_length` and a meaningful average exist only for non-empty
/// result sets; an empty set reports `None` and `0.0` respectively.
#[derive(Debug, Clone, Serialize)]
pub struct PathSummary {
    pub paths: Vec<Path>,
    pub shortest_path_length: Option<usize>,
    pub stats: PathStats,
}

#[derive(Debug, Clone, Serialize)]
pub struct PathStats {
    pub path_count: usize,
    pub avg_path_length: f64,
}

impl PathSummary {
    #[must_use]
    pub fn from_paths(paths: Vec<Path>) -> Self {
        let shortest_path_length = paths.iter().map(Vec::len).min();
        let avg_path_length = if paths.is_empty() {
            0.0
        } else {
            paths.iter().map(Vec::len).sum::<usize>() as f64 / paths.len() as f64
        };
        let stats = PathStats {
            path_count: paths.len(),
            avg_path_length,
        };
        Self {
            paths,
            shortest_path_length,
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Edge, Node};

    fn diamond() -> Graph {
        // A-B, B-C, A-D, D-C
        let nodes = ["A", "B", "C", "D"].iter().map(|id| Node::new(*id)).collect();
        let edges = vec![
            Edge::new("A", "B"),
            Edge::new("B", "C"),
            Edge::new("A", "D"),
            Edge::new("D", "C"),
        ];
        Graph::new(nodes, edges)
    }

    fn ids(path: &[&str]) -> Path {
        path.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_diamond_two_paths() {
        let graph = diamond();
        let paths = enumerate_paths(&graph, "A", "C", 5);

        assert_eq!(paths, vec![ids(&["A", "B", "C"]), ids(&["A", "D", "C"])]);

        let summary = PathSummary::from_paths(paths);
        assert_eq!(summary.shortest_path_length, Some(3));
        assert_eq!(summary.stats.path_count, 2);
        assert!((summary.stats.avg_path_length - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_start_equals_end() {
        let graph = diamond();
        let paths = enumerate_paths(&graph, "A", "A", 5);
        assert_eq!(paths, vec![ids(&["A"])]);
    }

    #[test]
    fn test_depth_bound_excludes_longer_paths() {
        let graph = diamond();
        // No path of length <= 1 reaches C from A; A-C is not an edge.
        assert!(enumerate_paths(&graph, "A", "C", 1).is_empty());
        // Length 2 still falls short.
        assert!(enumerate_paths(&graph, "A", "C", 2).is_empty());
        // Exactly max_depth nodes is admissible.
        assert_eq!(enumerate_paths(&graph, "A", "C", 3).len(), 2);
    }

    #[test]
    fn test_every_path_within_bound_and_simple() {
        let graph = diamond();
        for max_depth in 1..=6 {
            for path in enumerate_paths(&graph, "A", "C", max_depth) {
                assert!(path.len() <= max_depth);
                let distinct: HashSet<&NodeId> = path.iter().collect();
                assert_eq!(distinct.len(), path.len(), "repeated node in {path:?}");
            }
        }
    }

    #[test]
    fn test_absent_endpoint_is_empty_not_error() {
        let graph = diamond();
        assert!(enumerate_paths(&graph, "Z", "C", 5).is_empty());
        assert!(enumerate_paths(&graph, "A", "Z", 5).is_empty());
    }

    #[test]
    fn test_disconnected_endpoints_yield_empty() {
        let nodes = vec![Node::new("A"), Node::new("B"), Node::new("X"), Node::new("Y")];
        let edges = vec![Edge::new("A", "B"), Edge::new("X", "Y")];
        let graph = Graph::new(nodes, edges);
        assert!(enumerate_paths(&graph, "A", "Y", 5).is_empty());
    }

    #[test]
    fn test_idempotent_and_order_preserving() {
        let graph = diamond();
        let first = enumerate_paths(&graph, "A", "C", 5);
        let second = enumerate_paths(&graph, "A", "C", 5);
        assert_eq!(first, second);
    }

    #[test]
    fn test_self_loops_and_multi_edges_terminate() {
        let nodes = vec![Node::new("A"), Node::new("B"), Node::new("C")];
        let edges = vec![
            Edge::new("A", "A"),
            Edge::new("A", "B"),
            Edge::new("A", "B"),
            Edge::new("B", "C"),
        ];
        let graph = Graph::new(nodes, edges);

        let paths = enumerate_paths(&graph, "A", "C", 5);
        // The duplicate A-B edge spawns two identical branches; each is
        // a distinct DFS discovery.
        assert_eq!(paths, vec![ids(&["A", "B", "C"]), ids(&["A", "B", "C"])]);
    }

    #[test]
    fn test_sibling_branches_may_reuse_nodes() {
        // A-B, A-C, B-D, C-D, D-E: both A-B-D-E and A-C-D-E must appear,
        // even though the branches share D.
        let nodes = ["A", "B", "C", "D", "E"].iter().map(|id| Node::new(*id)).collect();
        let edges = vec![
            Edge::new("A", "B"),
            Edge::new("A", "C"),
            Edge::new("B", "D"),
            Edge::new("C", "D"),
            Edge::new("D", "E"),
        ];
        let graph = Graph::new(nodes, edges);

        let paths = enumerate_paths(&graph, "A", "E", 5);
        assert!(paths.contains(&ids(&["A", "B", "D", "E"])));
        assert!(paths.contains(&ids(&["A", "C", "D", "E"])));
    }

    #[test]
    fn test_zero_depth_clamped_to_one() {
        let graph = diamond();
        assert_eq!(enumerate_paths(&graph, "A", "A", 0), vec![ids(&["A"])]);
        assert!(enumerate_paths(&graph, "A", "B", 0).is_empty());
    }

    #[test]
    fn test_empty_summary_stats() {
        let summary = PathSummary::from_paths(Vec::new());
        assert_eq!(summary.shortest_path_length, None);
        assert_eq!(summary.stats.path_count, 0);
        assert_eq!(summary.stats.avg_path_length, 0.0);
    }
}
