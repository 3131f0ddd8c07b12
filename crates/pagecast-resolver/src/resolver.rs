//! The resolution coordinator.
//!
//! One [`ContentResolver`] serves a client session: it owns the sitemap
//! store, the content cache, the notification channels and the view gate,
//! and drives every navigation event through lookup, dispatch and
//! publication.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use tracing::{debug, warn};

use pagecast_api::{ApiError, ContentFetcher, ContentModel};
use pagecast_cache::ContentCache;
use pagecast_sitemap::{RouteId, RouteNode, Sitemap, SitemapStore};

use crate::dispatch::{dispatch_fetch, wants_alt_menu};
use crate::events::CmsEvents;
use crate::sinks::{MetadataSink, NullMetadataSink, NullRedirectExecutor, RedirectExecutor};
use crate::view::ViewGate;

/// Coordinates route-to-content resolution for one client session.
///
/// Every navigation event resolves independently: the path is looked up in
/// the current hierarchy snapshot, the cache is consulted by content
/// identity, and on a miss the page-type's fetch strategy runs. Publication
/// pushes the model to `model_changed` subscribers and derived metadata to
/// the [`MetadataSink`] — unless the model redirects, in which case only
/// the [`RedirectExecutor`] fires.
///
/// In-flight fetches are never cancelled; instead each navigation takes a
/// fresh generation and results from superseded generations are discarded
/// unpublished.
pub struct ContentResolver {
    fetcher: Arc<dyn ContentFetcher>,
    metadata: Arc<dyn MetadataSink>,
    redirect: Arc<dyn RedirectExecutor>,
    store: SitemapStore,
    cache: ContentCache,
    events: CmsEvents,
    view_gate: Arc<ViewGate>,
    generation: AtomicU64,
    active_subtree: RwLock<Vec<RouteNode>>,
}

impl ContentResolver {
    /// Create a resolver with no-op metadata and redirect sinks.
    #[must_use]
    pub fn new(fetcher: Arc<dyn ContentFetcher>) -> Self {
        Self {
            fetcher,
            metadata: Arc::new(NullMetadataSink),
            redirect: Arc::new(NullRedirectExecutor),
            store: SitemapStore::new(),
            cache: ContentCache::new(),
            events: CmsEvents::new(),
            view_gate: Arc::new(ViewGate::new()),
            generation: AtomicU64::new(0),
            active_subtree: RwLock::new(Vec::new()),
        }
    }

    /// Use `sink` for title and meta-tag updates.
    #[must_use]
    pub fn with_metadata_sink(mut self, sink: Arc<dyn MetadataSink>) -> Self {
        self.metadata = sink;
        self
    }

    /// Use `redirect` for hard navigation replacements.
    #[must_use]
    pub fn with_redirect_executor(mut self, redirect: Arc<dyn RedirectExecutor>) -> Self {
        self.redirect = redirect;
        self
    }

    /// Replace the view gate (e.g. with [`ViewGate::detached`] for
    /// headless use).
    #[must_use]
    pub fn with_view_gate(mut self, gate: ViewGate) -> Self {
        self.view_gate = Arc::new(gate);
        self
    }

    /// Notification channels owned by this resolver.
    #[must_use]
    pub fn events(&self) -> &CmsEvents {
        &self.events
    }

    /// Handle for the rendering layer to signal view readiness.
    #[must_use]
    pub fn view_gate(&self) -> Arc<ViewGate> {
        Arc::clone(&self.view_gate)
    }

    /// The content cache for this session.
    #[must_use]
    pub fn cache(&self) -> &ContentCache {
        &self.cache
    }

    /// Last navigation path seen.
    #[must_use]
    pub fn current_path(&self) -> Option<String> {
        self.store.current_path()
    }

    /// Children of the most recently resolved node, for sibling
    /// navigation UIs.
    ///
    /// # Panics
    ///
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn active_subtree(&self) -> Vec<RouteNode> {
        self.active_subtree.read().unwrap().clone()
    }

    /// Fetch the hierarchy from the CMS and install it.
    ///
    /// # Errors
    ///
    /// Returns the fetch error unchanged; nothing is installed on failure.
    pub async fn load_sitemap(&self, id: Option<&RouteId>) -> Result<Arc<Sitemap>, ApiError> {
        let roots = self.fetcher.fetch_sitemap(id).await?;
        Ok(self.install_sitemap(Sitemap::new(roots)))
    }

    /// Install a hierarchy, replacing any previous one wholesale.
    ///
    /// Emits `sitemap_changed` with the installed snapshot. Does not
    /// trigger resolution and does not touch the content cache.
    pub fn install_sitemap(&self, sitemap: Sitemap) -> Arc<Sitemap> {
        let snapshot = self.store.set(sitemap);
        self.events.emit_sitemap(Arc::clone(&snapshot));
        snapshot
    }

    /// Resolve a navigation event for `path`.
    ///
    /// A no-op before the first sitemap load or for an empty path. A path
    /// with no matching node publishes the synthetic alternate-menu model.
    /// Fetch failures settle silently: logged, no model published, but the
    /// `loading_changed(false)` signal still fires so the view is not left
    /// loading forever.
    ///
    /// # Panics
    ///
    /// Panics if the internal `RwLock` is poisoned.
    pub async fn navigate(&self, path: &str) {
        self.store.set_current_path(path);
        if path.is_empty() {
            return;
        }
        let Some(sitemap) = self.store.sitemap() else {
            return;
        };

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.view_gate.arm();

        let Some(node) = sitemap.find(path) else {
            debug!(path, "no route matches; falling back to alternate menu");
            self.view_gate.wait_ready().await;
            if !self.is_current(generation) {
                return;
            }
            self.events.emit_model(Arc::new(ContentModel::alternate_menu()));
            self.events.emit_loading(false);
            return;
        };

        *self.active_subtree.write().unwrap() = node.items.clone();

        if let Some(cached) = self.cache.find(&node.id) {
            debug!(id = %node.id, path, "serving content model from cache");
            self.view_gate.wait_ready().await;
            if !self.is_current(generation) {
                return;
            }
            self.publish(&cached);
            self.events.emit_loading(false);
            return;
        }

        let Some(outcome) = dispatch_fetch(self.fetcher.as_ref(), node).await else {
            return;
        };

        if !self.is_current(generation) {
            debug!(id = %node.id, "discarding fetch result from superseded navigation");
            return;
        }

        match outcome {
            Ok(model) => {
                let model = Arc::new(ContentModel {
                    alt_menu: wants_alt_menu(node.page_type),
                    ..model
                });
                self.cache.insert(Arc::clone(&model));
                self.publish(&model);
                self.events.emit_loading(false);
            }
            Err(error) => {
                warn!(error = %error, path, "content fetch failed");
                self.events.emit_loading(false);
            }
        }
    }

    /// Redirect-or-publish a finalized model.
    ///
    /// A non-empty redirect target suppresses publication entirely;
    /// otherwise the model goes out on `model_changed` followed by the
    /// derived title and meta-tag updates.
    fn publish(&self, model: &Arc<ContentModel>) {
        if let Some(url) = model.redirect_target() {
            debug!(%url, "model redirects; skipping publication");
            self.redirect.replace(url);
            return;
        }

        self.events.emit_model(Arc::clone(model));

        self.metadata.set_title(&model.title);
        self.metadata
            .set_meta_tag("keywords", model.meta_keywords.as_deref().unwrap_or(""));
        self.metadata.set_meta_tag("og:title", &model.title);
        let description = model.meta_description.as_deref().unwrap_or("");
        self.metadata.set_meta_tag("description", description);
        self.metadata.set_meta_tag("og:description", description);
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }
}
