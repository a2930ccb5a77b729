// Attribute filters applied to the graph before rendering or analysis
use crate::graph::{Graph, NodeId};
use chrono::Datelike;
use serde::Deserialize;
use std::collections::HashSet;

/// Filter parameters for the network view.
///
/// Every field is optional and the literal `"all"` is a no-op, so the struct
/// deserializes directly from query strings. Filters apply in declaration
/// order; edge filters restrict the node set to surviving endpoints, and a
/// final pass drops edges whose endpoints were filtered away.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NetworkFilter {
    /// Exact node type tag ("company", "investor", ...).
    pub node_type: Option<String>,
    /// Case-insensitive substring of the node region.
    pub region: Option<String>,
    /// Case-insensitive substring of the node industry.
    pub sector: Option<String>,
    /// Case-insensitive substring of the edge funding type.
    pub funding_type: Option<String>,
    /// Named year window: "2024", "2023", "2022", "last-12-months",
    /// "last-6-months".
    pub time_period: Option<String>,
    /// Case-insensitive substring of the node name; keeps matches and their
    /// direct neighbors.
    pub search: Option<String>,
}

fn active(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != "all")
}

impl NetworkFilter {
    pub fn is_empty(&self) -> bool {
        active(&self.node_type).is_none()
            && active(&self.region).is_none()
            && active(&self.sector).is_none()
            && active(&self.funding_type).is_none()
            && active(&self.time_period).is_none()
            && active(&self.search).is_none()
    }

    #[must_use]
    pub fn apply(&self, graph: &Graph) -> Graph {
        self.apply_at(graph, chrono::Utc::now().year())
    }

    /// Like [`apply`](Self::apply) with an explicit current year, so the
    /// time-period windows are testable.
    #[must_use]
    pub fn apply_at(&self, graph: &Graph, current_year: i32) -> Graph {
        let mut nodes: Vec<_> = graph.nodes().to_vec();
        let mut edges: Vec<_> = graph.edges().to_vec();

        if let Some(node_type) = active(&self.node_type) {
            nodes.retain(|node| node.node_type() == node_type);
        }

        if let Some(region) = active(&self.region) {
            let needle = region.to_lowercase();
            nodes.retain(|node| {
                node.region()
                    .is_some_and(|r| r.to_lowercase().contains(&needle))
            });
        }

        if let Some(sector) = active(&self.sector) {
            let needle = sector.to_lowercase();
            nodes.retain(|node| {
                node.industry()
                    .is_some_and(|s| s.to_lowercase().contains(&needle))
            });
        }

        if let Some(funding_type) = active(&self.funding_type) {
            let needle = funding_type.to_lowercase();
            edges.retain(|edge| {
                edge.funding_type()
                    .is_some_and(|t| t.to_lowercase().contains(&needle))
            });
            restrict_to_edge_endpoints(&mut nodes, &edges);
        }

        if let Some(period) = active(&self.time_period) {
            if let Some(cutoff) = year_cutoff(period, current_year) {
                // Edges without a year are kept; the dataset treats an
                // unknown year as current.
                edges.retain(|edge| edge.year.map_or(true, |y| y >= cutoff));
                restrict_to_edge_endpoints(&mut nodes, &edges);
            }
        }

        if let Some(search) = active(&self.search) {
            let needle = search.to_lowercase();
            let matching: HashSet<&NodeId> = nodes
                .iter()
                .filter(|node| node.display_name().to_lowercase().contains(&needle))
                .map(|node| &node.id)
                .collect();

            // Keep matches plus their direct connections.
            let mut connected: HashSet<NodeId> = matching.iter().map(|id| (*id).clone()).collect();
            for edge in &edges {
                if matching.contains(&edge.source) {
                    connected.insert(edge.target.clone());
                }
                if matching.contains(&edge.target) {
                    connected.insert(edge.source.clone());
                }
            }

            nodes.retain(|node| connected.contains(&node.id));
            edges.retain(|edge| connected.contains(&edge.source) && connected.contains(&edge.target));
        }

        // Graph::new prunes any edge left dangling by the node filters.
        Graph::new(nodes, edges)
    }
}

fn restrict_to_edge_endpoints(nodes: &mut Vec<crate::graph::Node>, edges: &[crate::graph::Edge]) {
    let endpoint_ids: HashSet<&NodeId> = edges
        .iter()
        .flat_map(|edge| [&edge.source, &edge.target])
        .collect();
    nodes.retain(|node| endpoint_ids.contains(&node.id));
}

fn year_cutoff(period: &str, current_year: i32) -> Option<i32> {
    match period {
        "2024" | "last-6-months" => Some(current_year),
        "2023" | "last-12-months" => Some(current_year - 1),
        "2022" => Some(current_year - 2),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Edge, Node};

    fn sample() -> Graph {
        let nodes = vec![
            Node::new("c1")
                .with_type("company")
                .with_name("Acme Robotics"),
            Node::new("c2").with_type("company").with_name("Globex"),
            Node::new("i1").with_type("investor").with_name("Seed Fund"),
        ];
        let edges = vec![
            Edge::new("i1", "c1").with_funding_type("series-a").with_year(2023),
            Edge::new("i1", "c2").with_funding_type("seed").with_year(2020),
        ];
        Graph::new(nodes, edges)
    }

    #[test]
    fn test_empty_filter_is_identity() {
        let graph = sample();
        let filter = NetworkFilter::default();
        assert!(filter.is_empty());

        let out = filter.apply(&graph);
        assert_eq!(out.node_count(), graph.node_count());
        assert_eq!(out.edge_count(), graph.edge_count());
    }

    #[test]
    fn test_all_is_a_noop_value() {
        let graph = sample();
        let filter = NetworkFilter {
            node_type: Some("all".to_string()),
            ..Default::default()
        };
        assert!(filter.is_empty());
        assert_eq!(filter.apply(&graph).node_count(), 3);
    }

    #[test]
    fn test_node_type_filter_drops_cross_type_edges() {
        let graph = sample();
        let filter = NetworkFilter {
            node_type: Some("company".to_string()),
            ..Default::default()
        };

        let out = filter.apply(&graph);
        assert_eq!(out.node_count(), 2);
        // Both edges touched the investor, so none survive.
        assert_eq!(out.edge_count(), 0);
    }

    #[test]
    fn test_funding_type_restricts_nodes_to_endpoints() {
        let graph = sample();
        let filter = NetworkFilter {
            funding_type: Some("Series".to_string()),
            ..Default::default()
        };

        let out = filter.apply(&graph);
        assert_eq!(out.edge_count(), 1);
        assert!(out.contains_node("i1"));
        assert!(out.contains_node("c1"));
        assert!(!out.contains_node("c2"));
    }

    #[test]
    fn test_time_period_cutoff() {
        let graph = sample();
        let filter = NetworkFilter {
            time_period: Some("2023".to_string()),
            ..Default::default()
        };

        // With 2024 as "now", the 2023 window keeps year >= 2023.
        let out = filter.apply_at(&graph, 2024);
        assert_eq!(out.edge_count(), 1);
        assert!(!out.contains_node("c2"));
    }

    #[test]
    fn test_time_period_keeps_undated_edges() {
        let nodes = vec![Node::new("a"), Node::new("b")];
        let edges = vec![Edge::new("a", "b")];
        let graph = Graph::new(nodes, edges);

        let filter = NetworkFilter {
            time_period: Some("2024".to_string()),
            ..Default::default()
        };
        assert_eq!(filter.apply_at(&graph, 2024).edge_count(), 1);
    }

    #[test]
    fn test_search_keeps_direct_neighbors() {
        let graph = sample();
        let filter = NetworkFilter {
            search: Some("acme".to_string()),
            ..Default::default()
        };

        let out = filter.apply(&graph);
        assert!(out.contains_node("c1"));
        assert!(out.contains_node("i1")); // direct neighbor of the match
        assert!(!out.contains_node("c2"));
        assert_eq!(out.edge_count(), 1);
    }

    #[test]
    fn test_search_without_match_empties_graph() {
        let graph = sample();
        let filter = NetworkFilter {
            search: Some("nonexistent".to_string()),
            ..Default::default()
        };

        let out = filter.apply(&graph);
        assert_eq!(out.node_count(), 0);
        assert_eq!(out.edge_count(), 0);
    }
}
