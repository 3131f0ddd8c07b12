//! Side-effect seams toward the host environment.
//!
//! The resolver pushes page metadata and hard redirects through these
//! traits; a browser host binds them to the document, headless hosts use
//! the no-op implementations.

/// Sink for document title and named meta-tag updates.
///
/// Re-applying the same values must be a no-op from the caller's
/// perspective; the resolver pushes the full set on every publication.
pub trait MetadataSink: Send + Sync {
    /// Set the document title.
    fn set_title(&self, title: &str);

    /// Set a named meta tag (e.g. `keywords`, `og:title`).
    fn set_meta_tag(&self, name: &str, content: &str);
}

/// Executes a full-page navigation replacement.
///
/// Invoked instead of publication when a model carries a redirect target.
/// The replacement is immediate and unconditional; it does not take part
/// in in-app routing history.
pub trait RedirectExecutor: Send + Sync {
    /// Replace the current location with `url`.
    fn replace(&self, url: &str);
}

/// [`MetadataSink`] that discards every update.
pub struct NullMetadataSink;

impl MetadataSink for NullMetadataSink {
    fn set_title(&self, _title: &str) {}

    fn set_meta_tag(&self, _name: &str, _content: &str) {}
}

/// [`RedirectExecutor`] that discards redirects.
pub struct NullRedirectExecutor;

impl RedirectExecutor for NullRedirectExecutor {
    fn replace(&self, _url: &str) {}
}
