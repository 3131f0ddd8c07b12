//! Route-to-content resolution engine for Pagecast.
//!
//! The [`ContentResolver`] coordinates a navigation event end to end:
//! look the path up in the loaded site hierarchy, reuse a cached content
//! model or dispatch the page-type's fetch strategy, then publish the
//! model and its page metadata to subscribers.
//!
//! # Quick Start
//!
//! ```no_run
//! # async fn run() -> Result<(), pagecast_api::ApiError> {
//! use std::sync::Arc;
//! use pagecast_api::CmsClient;
//! use pagecast_resolver::{ContentResolver, ViewGate};
//!
//! let client = Arc::new(CmsClient::new("https://host.example/api/cms"));
//! let resolver = ContentResolver::new(client).with_view_gate(ViewGate::detached());
//!
//! let mut models = resolver.events().model_changed();
//!
//! resolver.load_sitemap(None).await?;
//! resolver.navigate("/").await;
//!
//! let resolved = models.recv().await;
//! # Ok(())
//! # }
//! ```

pub(crate) mod dispatch;
pub(crate) mod events;
pub(crate) mod resolver;
pub(crate) mod sinks;
pub(crate) mod view;

pub use events::CmsEvents;
pub use resolver::ContentResolver;
pub use sinks::{MetadataSink, NullMetadataSink, NullRedirectExecutor, RedirectExecutor};
pub use view::ViewGate;
