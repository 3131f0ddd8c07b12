//! Client-side content cache for Pagecast.
//!
//! A flat, append-only list of resolved content models, queried by content
//! identity. The cache never updates, evicts or expires entries: a model
//! inserted under an id is served for that id for the process lifetime,
//! including across sitemap reloads. Callers are expected to check
//! [`ContentCache::find`] before fetching, which is what keeps ids unique.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use pagecast_api::ContentModel;
//! use pagecast_cache::ContentCache;
//! use pagecast_sitemap::RouteId;
//!
//! let cache = ContentCache::new();
//! let model = Arc::new(ContentModel {
//!     id: RouteId::from("A"),
//!     ..ContentModel::default()
//! });
//!
//! assert!(cache.find(&RouteId::from("A")).is_none());
//! cache.insert(model);
//! assert!(cache.find(&RouteId::from("A")).is_some());
//! ```

use std::sync::{Arc, RwLock};

use pagecast_api::ContentModel;
use pagecast_sitemap::RouteId;

/// Append-only cache of resolved content models, keyed by content identity.
#[derive(Debug, Default)]
pub struct ContentCache {
    entries: RwLock<Vec<Arc<ContentModel>>>,
}

impl ContentCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a cached model by id.
    ///
    /// Linear scan in insertion order; with unique ids (the caller's
    /// responsibility) at most one entry can match.
    ///
    /// # Panics
    ///
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn find(&self, id: &RouteId) -> Option<Arc<ContentModel>> {
        self.entries
            .read()
            .unwrap()
            .iter()
            .find(|model| model.id == *id)
            .cloned()
    }

    /// Append a model unconditionally.
    ///
    /// Duplicate-id protection is the caller's `find`-before-fetch check,
    /// not this method.
    ///
    /// # Panics
    ///
    /// Panics if the internal `RwLock` is poisoned.
    pub fn insert(&self, model: Arc<ContentModel>) {
        tracing::debug!(id = %model.id, "caching content model");
        self.entries.write().unwrap().push(model);
    }

    /// Number of cached entries.
    ///
    /// # Panics
    ///
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    /// Whether the cache holds no entries.
    ///
    /// # Panics
    ///
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }
}
