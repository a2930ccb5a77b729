// Deterministic network analysis: centrality metrics and community grouping
use crate::graph::{Graph, Node, NodeId};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet, VecDeque};

/// Centrality scores for one node.
#[derive(Debug, Clone, Serialize)]
pub struct NodeCentrality {
    /// Number of incident edges.
    pub degree: usize,
    /// Degree divided by `n - 1`.
    pub normalized: f64,
    /// BFS closeness: `(reachable - 1) / sum_of_distances`, 0 when isolated.
    pub closeness: f64,
    /// Brandes betweenness, normalized by `(n - 1)(n - 2) / 2`.
    pub betweenness: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedNode {
    #[serde(flatten)]
    pub node: Node,
    pub degree: usize,
    pub normalized: f64,
    pub closeness: f64,
    pub betweenness: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct GraphStats {
    pub avg_degree: f64,
    pub max_degree: usize,
    pub density: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CentralityReport {
    pub centrality: BTreeMap<NodeId, NodeCentrality>,
    pub top_nodes: Vec<RankedNode>,
    pub stats: GraphStats,
}

/// Number of top-ranked nodes returned in the centrality report.
const TOP_NODES: usize = 10;

/// Computes degree, closeness and betweenness centrality for every node.
///
/// All three metrics are exact over the undirected, unweighted graph;
/// betweenness uses Brandes' accumulation. O(n * (n + m)) overall.
#[must_use]
pub fn centrality(graph: &Graph) -> CentralityReport {
    let n = graph.node_count();
    let indexed = IndexedGraph::new(graph);
    let betweenness = indexed.betweenness();

    let mut centrality = BTreeMap::new();
    let mut max_degree = 0;
    for (i, node) in graph.nodes().iter().enumerate() {
        let degree = graph.degree(&node.id);
        max_degree = max_degree.max(degree);
        centrality.insert(
            node.id.clone(),
            NodeCentrality {
                degree,
                normalized: degree as f64 / 1.0_f64.max((n - 1) as f64),
                closeness: indexed.closeness(i),
                betweenness: betweenness[i],
            },
        );
    }

    let mut top_nodes: Vec<RankedNode> = graph
        .nodes()
        .iter()
        .map(|node| {
            let scores = &centrality[&node.id];
            RankedNode {
                node: node.clone(),
                degree: scores.degree,
                normalized: scores.normalized,
                closeness: scores.closeness,
                betweenness: scores.betweenness,
            }
        })
        .collect();
    // Ties broken by id so the ranking is stable across runs.
    top_nodes.sort_by(|a, b| {
        b.betweenness
            .total_cmp(&a.betweenness)
            .then_with(|| a.node.id.cmp(&b.node.id))
    });
    top_nodes.truncate(TOP_NODES);

    let m = graph.edge_count();
    let stats = GraphStats {
        avg_degree: if n > 0 { 2.0 * m as f64 / n as f64 } else { 0.0 },
        max_degree,
        density: if n > 1 {
            2.0 * m as f64 / (n as f64 * (n - 1) as f64)
        } else {
            0.0
        },
    };

    CentralityReport {
        centrality,
        top_nodes,
        stats,
    }
}

/// Index-based adjacency used by the traversal-heavy metrics.
struct IndexedGraph {
    adjacency: Vec<Vec<usize>>,
}

impl IndexedGraph {
    fn new(graph: &Graph) -> Self {
        let index: BTreeMap<&str, usize> = graph
            .nodes()
            .iter()
            .enumerate()
            .map(|(i, node)| (node.id.as_str(), i))
            .collect();
        let adjacency = graph
            .nodes()
            .iter()
            .map(|node| {
                graph
                    .neighbors(&node.id)
                    .iter()
                    .map(|id| index[id.as_str()])
                    .collect()
            })
            .collect();
        Self { adjacency }
    }

    fn len(&self) -> usize {
        self.adjacency.len()
    }

    /// Closeness of node `s` within its connected component.
    fn closeness(&self, s: usize) -> f64 {
        let mut dist = vec![usize::MAX; self.len()];
        dist[s] = 0;
        let mut queue = VecDeque::from([s]);
        let mut reachable = 0usize;
        let mut total = 0usize;
        while let Some(v) = queue.pop_front() {
            reachable += 1;
            total += dist[v];
            for &w in &self.adjacency[v] {
                if dist[w] == usize::MAX {
                    dist[w] = dist[v] + 1;
                    queue.push_back(w);
                }
            }
        }
        if total == 0 {
            0.0
        } else {
            (reachable - 1) as f64 / total as f64
        }
    }

    /// Brandes betweenness over the unweighted graph, normalized to [0, 1].
    fn betweenness(&self) -> Vec<f64> {
        let n = self.len();
        let mut scores = vec![0.0f64; n];

        for s in 0..n {
            let mut stack = Vec::with_capacity(n);
            let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];
            let mut sigma = vec![0.0f64; n];
            let mut dist = vec![isize::MAX; n];
            sigma[s] = 1.0;
            dist[s] = 0;

            let mut queue = VecDeque::from([s]);
            while let Some(v) = queue.pop_front() {
                stack.push(v);
                for &w in &self.adjacency[v] {
                    if dist[w] == isize::MAX {
                        dist[w] = dist[v] + 1;
                        queue.push_back(w);
                    }
                    if dist[w] == dist[v] + 1 {
                        sigma[w] += sigma[v];
                        predecessors[w].push(v);
                    }
                }
            }

            let mut delta = vec![0.0f64; n];
            while let Some(w) = stack.pop() {
                for &v in &predecessors[w] {
                    delta[v] += sigma[v] / sigma[w] * (1.0 + delta[w]);
                }
                if w != s {
                    scores[w] += delta[w];
                }
            }
        }

        // Each undirected pair was counted from both endpoints.
        let norm = if n > 2 {
            ((n - 1) * (n - 2)) as f64
        } else {
            1.0
        };
        for score in &mut scores {
            *score /= norm;
        }
        scores
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Community {
    pub name: String,
    pub nodes: Vec<Node>,
    pub node_count: usize,
    pub internal_edges: usize,
    pub color: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommunityStats {
    pub largest_community: usize,
    pub avg_community_size: f64,
    pub modularity: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommunityReport {
    pub communities: Vec<Community>,
    pub community_count: usize,
    pub stats: CommunityStats,
}

/// Groups nodes into communities by type tag, then by industry where the
/// dataset carries one; an industry group replaces a type group with the
/// same name. Communities come back largest first, ties broken by name.
#[must_use]
pub fn communities(graph: &Graph) -> CommunityReport {
    let mut groups: BTreeMap<String, Vec<&Node>> = BTreeMap::new();
    for node in graph.nodes() {
        groups.entry(node.node_type().to_string()).or_default().push(node);
    }
    if graph.nodes().iter().any(|node| node.industry().is_some()) {
        let mut by_industry: BTreeMap<String, Vec<&Node>> = BTreeMap::new();
        for node in graph.nodes() {
            if let Some(industry) = node.industry() {
                by_industry.entry(industry.to_string()).or_default().push(node);
            }
        }
        groups.extend(by_industry);
    }

    let mut communities: Vec<Community> = groups
        .into_iter()
        .map(|(name, members)| {
            let member_ids: HashSet<&NodeId> = members.iter().map(|node| &node.id).collect();
            let internal_edges = graph
                .edges()
                .iter()
                .filter(|edge| {
                    member_ids.contains(&edge.source) && member_ids.contains(&edge.target)
                })
                .count();
            Community {
                color: palette_color(&name),
                node_count: members.len(),
                internal_edges,
                nodes: members.into_iter().cloned().collect(),
                name,
            }
        })
        .collect();
    communities.sort_by(|a, b| {
        b.node_count
            .cmp(&a.node_count)
            .then_with(|| a.name.cmp(&b.name))
    });

    let n = graph.node_count();
    let stats = CommunityStats {
        largest_community: communities.first().map_or(0, |c| c.node_count),
        avg_community_size: if communities.is_empty() {
            0.0
        } else {
            n as f64 / communities.len() as f64
        },
        modularity: modularity(graph, &communities),
    };

    CommunityReport {
        community_count: communities.len(),
        communities,
        stats,
    }
}

/// Modularity of the community partition: `sum(e_c/m - (a_c/2m)^2)` where
/// `e_c` is the internal edge count and `a_c` the total degree of the
/// community's members.
fn modularity(graph: &Graph, communities: &[Community]) -> f64 {
    let m = graph.edge_count() as f64;
    if m == 0.0 {
        return 0.0;
    }
    communities
        .iter()
        .map(|community| {
            let total_degree: usize = community
                .nodes
                .iter()
                .map(|node| graph.degree(&node.id))
                .sum();
            let a = total_degree as f64 / (2.0 * m);
            community.internal_edges as f64 / m - a * a
        })
        .sum()
}

const PALETTE: [&str; 8] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#FFA07A", "#98D8C8", "#F7DC6F", "#BB8FCE", "#85C1E2",
];

/// Stable palette color for a community name (djb2-style string hash).
fn palette_color(name: &str) -> String {
    let mut hash: i32 = 0;
    for c in name.chars() {
        hash = (hash << 5).wrapping_sub(hash).wrapping_add(c as i32);
    }
    PALETTE[hash.unsigned_abs() as usize % PALETTE.len()].to_string()
}
