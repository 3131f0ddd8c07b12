//! Sitemap snapshots and the store holding the current one.

use std::sync::{Arc, RwLock};

use crate::route::{RouteNode, find_route};

/// An immutable snapshot of the site hierarchy.
///
/// Root nodes keep the order the CMS delivered them in; lookup order over
/// the forest follows it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sitemap {
    roots: Vec<RouteNode>,
}

impl Sitemap {
    /// Create a snapshot from root nodes.
    #[must_use]
    pub fn new(roots: Vec<RouteNode>) -> Self {
        Self { roots }
    }

    /// Root nodes in stored order.
    #[must_use]
    pub fn roots(&self) -> &[RouteNode] {
        &self.roots
    }

    /// Find the node matching `path`, depth-first pre-order.
    #[must_use]
    pub fn find(&self, path: &str) -> Option<&RouteNode> {
        find_route(&self.roots, path)
    }

    /// Total number of nodes in the forest.
    #[must_use]
    pub fn node_count(&self) -> usize {
        fn count(nodes: &[RouteNode]) -> usize {
            nodes.iter().map(|n| 1 + count(&n.items)).sum()
        }
        count(&self.roots)
    }

    /// Whether the forest has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

/// Store for the most recently loaded sitemap and the active navigation path.
///
/// The hierarchy is replaced wholesale on every load; readers get an
/// `Arc<Sitemap>` snapshot that stays internally consistent regardless of
/// later replacements. Forest shape is not validated here — a hierarchy
/// with cycles or duplicate permalinks is a precondition violation.
#[derive(Debug, Default)]
pub struct SitemapStore {
    sitemap: RwLock<Option<Arc<Sitemap>>>,
    current_path: RwLock<Option<String>>,
}

impl SitemapStore {
    /// Create an empty store with no sitemap loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored hierarchy wholesale.
    ///
    /// Returns the installed snapshot so the caller can notify subscribers.
    ///
    /// # Panics
    ///
    /// Panics if the internal `RwLock` is poisoned.
    pub fn set(&self, sitemap: Sitemap) -> Arc<Sitemap> {
        let sitemap = Arc::new(sitemap);
        *self.sitemap.write().unwrap() = Some(Arc::clone(&sitemap));
        sitemap
    }

    /// Current sitemap snapshot, `None` before the first load.
    ///
    /// # Panics
    ///
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn sitemap(&self) -> Option<Arc<Sitemap>> {
        self.sitemap.read().unwrap().clone()
    }

    /// Last navigation path seen, `None` before the first navigation.
    ///
    /// # Panics
    ///
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn current_path(&self) -> Option<String> {
        self.current_path.read().unwrap().clone()
    }

    /// Record the active navigation path.
    ///
    /// # Panics
    ///
    /// Panics if the internal `RwLock` is poisoned.
    pub fn set_current_path(&self, path: &str) {
        *self.current_path.write().unwrap() = Some(path.to_owned());
    }
}
