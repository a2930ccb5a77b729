// Graph model - nodes, edges and the undirected adjacency they imply
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

pub type NodeId = String;

/// A company or investor in the funding network.
///
/// `name`/`label` and the region/industry pairs are kept as separate optional
/// fields because real dataset exports use either spelling; accessors below
/// resolve the preference order. Anything else in the source document lands
/// in `extra` untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub node_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Node {
    #[must_use]
    pub fn new(id: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            node_type: None,
            name: None,
            label: None,
            region: None,
            location: None,
            industry: None,
            sector: None,
            extra: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_type(mut self, node_type: impl Into<String>) -> Self {
        self.node_type = Some(node_type.into());
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Display name: `name`, falling back to `label`, falling back to the id.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.label.as_deref())
            .unwrap_or(&self.id)
    }

    /// Region attribute, `region` preferred over `location`.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref().or(self.location.as_deref())
    }

    /// Industry attribute, `industry` preferred over `sector`.
    pub fn industry(&self) -> Option<&str> {
        self.industry.as_deref().or(self.sector.as_deref())
    }

    /// Type tag, `"unknown"` when untyped.
    pub fn node_type(&self) -> &str {
        self.node_type.as_deref().unwrap_or("unknown")
    }
}

/// A funding relationship between two nodes.
///
/// Carries a source/target orientation for display, but traversal treats
/// every edge as undirected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funding_round_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funding_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Edge {
    #[must_use]
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            funding_round_type: None,
            funding_type: None,
            year: None,
            extra: HashMap::new(),
        }
    }

    #[must_use]
    pub fn with_funding_type(mut self, funding_type: impl Into<String>) -> Self {
        self.funding_round_type = Some(funding_type.into());
        self
    }

    #[must_use]
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Funding type attribute, `funding_round_type` preferred over `funding_type`.
    pub fn funding_type(&self) -> Option<&str> {
        self.funding_round_type
            .as_deref()
            .or(self.funding_type.as_deref())
    }
}

/// An immutable node/edge collection with a precomputed undirected adjacency.
///
/// Construction prunes edges whose endpoints are not in the node set rather
/// than treating them as an error; after that the graph never changes.
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    node_index: HashMap<NodeId, usize>,
    adjacency: HashMap<NodeId, Vec<NodeId>>,
}

impl Graph {
    #[must_use]
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        let node_index: HashMap<NodeId, usize> = nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (node.id.clone(), i))
            .collect();

        // Drop dangling edges defensively.
        let edges: Vec<Edge> = edges
            .into_iter()
            .filter(|edge| {
                node_index.contains_key(&edge.source) && node_index.contains_key(&edge.target)
            })
            .collect();

        // Neighbor lists in edge-list order; one entry per incident edge,
        // so a self-loop contributes a single entry.
        let mut adjacency: HashMap<NodeId, Vec<NodeId>> = HashMap::new();
        for edge in &edges {
            adjacency
                .entry(edge.source.clone())
                .or_default()
                .push(edge.target.clone());
            if edge.source != edge.target {
                adjacency
                    .entry(edge.target.clone())
                    .or_default()
                    .push(edge.source.clone());
            }
        }

        Self {
            nodes,
            edges,
            node_index,
            adjacency,
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.node_index.get(id).map(|&i| &self.nodes[i])
    }

    /// Neighbors of `id` in edge-list order, one entry per incident edge.
    pub fn neighbors(&self, id: &str) -> &[NodeId] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of edges touching `id`.
    pub fn degree(&self, id: &str) -> usize {
        self.neighbors(id).len()
    }

    /// Restrict the graph to the given node ids, dropping edges with a
    /// removed endpoint. Used by the network filters.
    #[must_use]
    pub fn retain_nodes(&self, keep: &HashSet<NodeId>) -> Graph {
        let nodes = self
            .nodes
            .iter()
            .filter(|node| keep.contains(&node.id))
            .cloned()
            .collect();
        let edges = self
            .edges
            .iter()
            .filter(|edge| keep.contains(&edge.source) && keep.contains(&edge.target))
            .cloned()
            .collect();
        Graph::new(nodes, edges)
    }
}
