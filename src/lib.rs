//! # fundnet
//!
//! Backend for a browser-based funding-network visualization tool: a small
//! HTTP API that filters and analyzes a static graph dataset (nodes are
//! companies and investors, edges are funding relationships).
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! fundnet --dataset ./data/network.json --http-port 5000
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use fundnet::prelude::*;
//!
//! let nodes = vec![
//!     Node::new("acme").with_type("company").with_name("Acme"),
//!     Node::new("fund").with_type("investor").with_name("Seed Fund"),
//! ];
//! let edges = vec![Edge::new("fund", "acme").with_funding_type("seed")];
//! let graph = Graph::new(nodes, edges);
//!
//! let paths = enumerate_paths(&graph, "fund", "acme", DEFAULT_MAX_DEPTH);
//! assert_eq!(paths.len(), 1);
//! ```
//!
//! ## Crate Structure
//!
//! - `fundnet-core` - Graph model, path enumeration, filters, analysis
//! - `fundnet-store` - Dataset file loading (default, alternate, reload)
//! - `fundnet-api` - REST endpoints and the response envelope

// Re-export core types
pub use fundnet_core::{
    centrality, communities, enumerate_paths, CentralityReport, CommunityReport, Edge, Error,
    Graph, NetworkFilter, Node, NodeId, Path, PathStats, PathSummary, Result, DEFAULT_MAX_DEPTH,
};

// Re-export store
pub use fundnet_store::{Dataset, DatasetStore};

// Re-export API
pub use fundnet_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        centrality, communities, enumerate_paths, CentralityReport, CommunityReport, Dataset,
        DatasetStore, Edge, Error, Graph, NetworkFilter, Node, NodeId, Path, PathStats,
        PathSummary, RestApi, Result, DEFAULT_MAX_DEPTH,
    };
}
