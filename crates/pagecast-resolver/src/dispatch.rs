//! Page-type dispatch to content-fetch strategies.

use tracing::{debug, warn};

use pagecast_api::{ApiError, ArchiveQuery, ContentFetcher, ContentModel};
use pagecast_sitemap::{PageType, RouteNode};

/// Invoke the fetch strategy for `node`'s page type.
///
/// Returns `None` when no strategy applies: unrecognized page types, and
/// category/tag nodes missing the parent archive identity. Neither issues
/// a fetch nor produces an error.
pub(crate) async fn dispatch_fetch(
    fetcher: &dyn ContentFetcher,
    node: &RouteNode,
) -> Option<Result<ContentModel, ApiError>> {
    match node.page_type {
        PageType::StartPage => Some(fetcher.fetch_start_page(&node.id).await),
        PageType::BlogArchive => {
            Some(fetcher.fetch_archive(&node.id, &ArchiveQuery::default()).await)
        }
        PageType::BlogPost => Some(fetcher.fetch_post(&node.id).await),
        PageType::StandardPage => Some(fetcher.fetch_page(&node.id).await),
        PageType::Category => match &node.parent_id {
            Some(parent) => Some(
                fetcher
                    .fetch_archive(parent, &ArchiveQuery::for_category(node.id.clone()))
                    .await,
            ),
            None => {
                warn!(id = %node.id, "category node has no parent archive; skipping fetch");
                None
            }
        },
        PageType::Tag => match &node.parent_id {
            Some(parent) => Some(
                fetcher
                    .fetch_archive(parent, &ArchiveQuery::for_tag(node.id.clone()))
                    .await,
            ),
            None => {
                warn!(id = %node.id, "tag node has no parent archive; skipping fetch");
                None
            }
        },
        PageType::Unknown => {
            debug!(id = %node.id, "unrecognized page type; no fetch strategy");
            None
        }
    }
}

/// Whether models of this page type carry the alternate-menu marker.
pub(crate) fn wants_alt_menu(page_type: PageType) -> bool {
    matches!(page_type, PageType::StandardPage | PageType::BlogPost)
}
