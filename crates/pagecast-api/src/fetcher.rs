//! The asynchronous fetch seam between the resolver and the CMS.

use async_trait::async_trait;
use pagecast_sitemap::{RouteId, RouteNode};

use crate::error::ApiError;
use crate::model::ContentModel;

/// Optional filters for archive fetches.
///
/// Absent filters are omitted from the request entirely. Category and tag
/// filters carry the id of the category/tag node whose parent archive is
/// being queried.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArchiveQuery {
    /// Restrict to a publication year.
    pub year: Option<u16>,
    /// Restrict to a publication month (1-12).
    pub month: Option<u8>,
    /// Result page number.
    pub page: Option<u32>,
    /// Restrict to posts in a category.
    pub category: Option<RouteId>,
    /// Restrict to posts carrying a tag.
    pub tag: Option<RouteId>,
}

impl ArchiveQuery {
    /// Query filtered to a single category.
    #[must_use]
    pub fn for_category(category: RouteId) -> Self {
        Self {
            category: Some(category),
            ..Self::default()
        }
    }

    /// Query filtered to a single tag.
    #[must_use]
    pub fn for_tag(tag: RouteId) -> Self {
        Self {
            tag: Some(tag),
            ..Self::default()
        }
    }
}

/// Content-fetch collaborator.
///
/// One asynchronous operation per content kind; each either yields the raw
/// payload interpreted as a [`ContentModel`] (or the hierarchy, for
/// `fetch_sitemap`) or fails with an [`ApiError`]. Implementations must not
/// retry on their own — retry policy belongs to the caller.
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    /// Fetch the site hierarchy, optionally rooted at `id`.
    async fn fetch_sitemap(&self, id: Option<&RouteId>) -> Result<Vec<RouteNode>, ApiError>;

    /// Fetch the start page content for `id`.
    async fn fetch_start_page(&self, id: &RouteId) -> Result<ContentModel, ApiError>;

    /// Fetch archive content for `id`, filtered by `query`.
    async fn fetch_archive(
        &self,
        id: &RouteId,
        query: &ArchiveQuery,
    ) -> Result<ContentModel, ApiError>;

    /// Fetch standard page content for `id`.
    async fn fetch_page(&self, id: &RouteId) -> Result<ContentModel, ApiError>;

    /// Fetch blog post content for `id`.
    async fn fetch_post(&self, id: &RouteId) -> Result<ContentModel, ApiError>;
}
