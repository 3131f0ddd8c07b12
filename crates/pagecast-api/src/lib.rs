//! CMS content API client for Pagecast.
//!
//! This crate provides:
//! - [`ContentModel`]: the resolved page content returned by the CMS
//! - [`ContentFetcher`]: the asynchronous fetch seam the resolver dispatches to
//! - [`CmsClient`]: HTTP implementation of the seam against the CMS REST API
//!
//! The five fetch operations issue requests of the shape
//! `<base>/<kind>?id=<id>&...filters` with `kind` one of `sitemap`,
//! `archive`, `page`, `post` and `startpage`.

pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod fetcher;
pub(crate) mod model;

pub use client::CmsClient;
pub use error::ApiError;
pub use fetcher::{ArchiveQuery, ContentFetcher};
pub use model::ContentModel;
