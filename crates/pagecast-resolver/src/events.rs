//! Typed notification channels owned by the resolver.
//!
//! Replaces subject-style globals with broadcast channels created with the
//! resolver and dropped with it. Subscribers that lag or disappear never
//! block or fail an emission.

use std::sync::Arc;

use tokio::sync::broadcast;

use pagecast_api::ContentModel;
use pagecast_sitemap::Sitemap;

/// Buffered events per subscriber before a slow one starts lagging.
const CHANNEL_CAPACITY: usize = 16;

/// Notification channels for resolution outcomes.
///
/// - `sitemap_changed`: a new hierarchy was installed
/// - `model_changed`: a content model was published (or the synthetic
///   alternate-menu model on a resolution miss)
/// - `loading_changed`: `false` once a resolution attempt settles; this
///   core never emits `true` — signalling loading-start is the caller's job
pub struct CmsEvents {
    sitemap: broadcast::Sender<Arc<Sitemap>>,
    model: broadcast::Sender<Arc<ContentModel>>,
    loading: broadcast::Sender<bool>,
}

impl CmsEvents {
    pub(crate) fn new() -> Self {
        let (sitemap, _) = broadcast::channel(CHANNEL_CAPACITY);
        let (model, _) = broadcast::channel(CHANNEL_CAPACITY);
        let (loading, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            sitemap,
            model,
            loading,
        }
    }

    /// Subscribe to hierarchy replacements.
    #[must_use]
    pub fn sitemap_changed(&self) -> broadcast::Receiver<Arc<Sitemap>> {
        self.sitemap.subscribe()
    }

    /// Subscribe to published content models.
    #[must_use]
    pub fn model_changed(&self) -> broadcast::Receiver<Arc<ContentModel>> {
        self.model.subscribe()
    }

    /// Subscribe to loading-settled signals.
    #[must_use]
    pub fn loading_changed(&self) -> broadcast::Receiver<bool> {
        self.loading.subscribe()
    }

    pub(crate) fn emit_sitemap(&self, sitemap: Arc<Sitemap>) {
        let _ = self.sitemap.send(sitemap);
    }

    pub(crate) fn emit_model(&self, model: Arc<ContentModel>) {
        let _ = self.model.send(model);
    }

    pub(crate) fn emit_loading(&self, loading: bool) {
        let _ = self.loading.send(loading);
    }
}
