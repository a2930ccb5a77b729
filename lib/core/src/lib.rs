//! # fundnet Core
//!
//! Core library for the fundnet network explorer backend.
//!
//! This crate provides the graph model and the algorithms behind the API:
//!
//! - [`Graph`] - Immutable node/edge collections with undirected adjacency
//! - [`enumerate_paths`] - Bounded all-simple-paths enumeration
//! - [`NetworkFilter`] - Attribute filters over the node/edge sets
//! - [`centrality`] / [`communities`] - Deterministic network analysis
//!
//! ## Example
//!
//! ```rust
//! use fundnet_core::{Edge, Graph, Node, enumerate_paths, PathSummary};
//!
//! let nodes = vec![Node::new("a"), Node::new("b"), Node::new("c")];
//! let edges = vec![Edge::new("a", "b"), Edge::new("b", "c")];
//! let graph = Graph::new(nodes, edges);
//!
//! let paths = enumerate_paths(&graph, "a", "c", 5);
//! let summary = PathSummary::from_paths(paths);
//! assert_eq!(summary.shortest_path_length, Some(3));
//! ```

pub mod analysis;
pub mod error;
pub mod filter;
pub mod graph;
pub mod paths;

pub use analysis::{centrality, communities, CentralityReport, CommunityReport};
pub use error::{Error, Result};
pub use filter::NetworkFilter;
pub use graph::{Edge, Graph, Node, NodeId};
pub use paths::{enumerate_paths, Path, PathStats, PathSummary, DEFAULT_MAX_DEPTH};
