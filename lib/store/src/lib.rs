//! # fundnet Store
//!
//! Dataset loading for the fundnet backend.
//!
//! A [`DatasetStore`] reads the default dataset file once at startup and
//! hands out an immutable [`Graph`] per request. A failed load is not fatal:
//! the store simply holds no data and every graph-dependent operation
//! reports [`Error::DatasetNotLoaded`] until a successful [`reload`].
//! Alternate datasets are read per request and never replace the default.
//!
//! [`reload`]: DatasetStore::reload

use fundnet_core::{Edge, Error, Graph, Node, Result};
use parking_lot::RwLock;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// On-disk dataset document: a `nodes` collection and an `edges` collection.
/// Unknown top-level fields (dataset exports carry a `metadata` block) are
/// ignored.
#[derive(Debug, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Dataset {
    /// Builds the graph, pruning dangling edges.
    #[must_use]
    pub fn into_graph(self) -> Graph {
        Graph::new(self.nodes, self.edges)
    }
}

/// Holds the default in-memory dataset and loads alternates on demand.
pub struct DatasetStore {
    path: PathBuf,
    graph: RwLock<Option<Arc<Graph>>>,
}

impl DatasetStore {
    /// Opens the store and attempts to load the default dataset.
    ///
    /// A missing or malformed file is a startup-time condition, not an
    /// error: the store is still constructed and serves
    /// [`Error::DatasetNotLoaded`] from [`graph`](Self::graph).
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let graph = match Self::read_graph(&path) {
            Ok(graph) => {
                info!(
                    nodes = graph.node_count(),
                    edges = graph.edge_count(),
                    "Network data loaded successfully"
                );
                Some(Arc::new(graph))
            }
            Err(e) => {
                warn!("Failed to load network data from {}: {}", path.display(), e);
                None
            }
        };
        Self {
            path,
            graph: RwLock::new(graph),
        }
    }

    /// Path of the default dataset file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_loaded(&self) -> bool {
        self.graph.read().is_some()
    }

    /// The default graph, or [`Error::DatasetNotLoaded`].
    pub fn graph(&self) -> Result<Arc<Graph>> {
        self.graph.read().clone().ok_or(Error::DatasetNotLoaded)
    }

    /// Reads an alternate dataset file for a single request. The default
    /// in-memory dataset is not touched.
    pub fn load_alternate<P: AsRef<Path>>(&self, path: P) -> Result<Arc<Graph>> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::DatasetMissing(path.display().to_string()));
        }
        let graph = Self::read_graph(path)?;
        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "Loaded alternate dataset {}",
            path.display()
        );
        Ok(Arc::new(graph))
    }

    /// Re-reads the default dataset file, replacing the in-memory graph on
    /// success. On failure the previous graph (if any) stays in place.
    pub fn reload(&self) -> Result<()> {
        let graph = Self::read_graph(&self.path)?;
        info!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "Reloaded network data"
        );
        *self.graph.write() = Some(Arc::new(graph));
        Ok(())
    }

    fn read_graph(path: &Path) -> Result<Graph> {
        let raw = std::fs::read_to_string(path)?;
        let dataset: Dataset =
            serde_json::from_str(&raw).map_err(|e| Error::DatasetParse(e.to_string()))?;
        Ok(dataset.into_graph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Seek, Write};

    fn write_dataset(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    const SAMPLE: &str = r#"{
        "nodes": [
            {"id": "c1", "type": "company", "name": "Acme"},
            {"id": "i1", "type": "investor", "name": "Fund"}
        ],
        "edges": [
            {"source": "i1", "target": "c1", "funding_round_type": "seed"},
            {"source": "i1", "target": "ghost"}
        ],
        "metadata": {"total_nodes": 2}
    }"#;

    #[test]
    fn test_open_loads_and_prunes() {
        let file = write_dataset(SAMPLE);
        let store = DatasetStore::open(file.path());

        assert!(store.is_loaded());
        let graph = store.graph().unwrap();
        assert_eq!(graph.node_count(), 2);
        // The dangling edge to "ghost" is dropped.
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_missing_file_is_not_fatal() {
        let store = DatasetStore::open("/definitely/not/here.json");
        assert!(!store.is_loaded());
        assert!(matches!(store.graph(), Err(Error::DatasetNotLoaded)));
    }

    #[test]
    fn test_malformed_file_is_not_fatal() {
        let file = write_dataset("{ not json");
        let store = DatasetStore::open(file.path());
        assert!(!store.is_loaded());
    }

    #[test]
    fn test_alternate_does_not_mutate_default() {
        let default_file = write_dataset(SAMPLE);
        let alternate_file = write_dataset(r#"{"nodes": [{"id": "x"}], "edges": []}"#);

        let store = DatasetStore::open(default_file.path());
        let alternate = store.load_alternate(alternate_file.path()).unwrap();
        assert_eq!(alternate.node_count(), 1);
        assert!(alternate.contains_node("x"));

        // Default is untouched.
        let default = store.graph().unwrap();
        assert_eq!(default.node_count(), 2);
        assert!(!default.contains_node("x"));
    }

    #[test]
    fn test_alternate_missing_file() {
        let file = write_dataset(SAMPLE);
        let store = DatasetStore::open(file.path());
        assert!(matches!(
            store.load_alternate("/no/such/dataset.json"),
            Err(Error::DatasetMissing(_))
        ));
    }

    #[test]
    fn test_reload_picks_up_new_contents() {
        let mut file = write_dataset(r#"{"nodes": [{"id": "a"}], "edges": []}"#);
        let store = DatasetStore::open(file.path());
        assert_eq!(store.graph().unwrap().node_count(), 1);

        file.as_file_mut().set_len(0).unwrap();
        file.as_file_mut().rewind().unwrap();
        file.write_all(br#"{"nodes": [{"id": "a"}, {"id": "b"}], "edges": []}"#)
            .unwrap();
        file.flush().unwrap();

        store.reload().unwrap();
        assert_eq!(store.graph().unwrap().node_count(), 2);
    }

    #[test]
    fn test_failed_reload_keeps_previous_graph() {
        let file = write_dataset(SAMPLE);
        let store = DatasetStore::open(file.path());
        let before = store.graph().unwrap().node_count();

        // Break the file on disk, then ask for a reload.
        std::fs::write(file.path(), "{ broken").unwrap();
        assert!(store.reload().is_err());
        assert_eq!(store.graph().unwrap().node_count(), before);
    }
}
