//! Resolved page content.

use pagecast_sitemap::RouteId;
use serde::{Deserialize, Serialize};

/// Content resolved for a route node.
///
/// Wire fields use the CMS PascalCase naming. Page-type-specific payload
/// fields are opaque to the resolution core and kept in `extra`. The
/// `alt_menu` flag never comes from the wire; the resolver injects it
/// before publishing so the view layer knows to render the alternate
/// navigation affordance.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentModel {
    /// Identity shared with the originating route node; the cache key.
    #[serde(rename = "Id", default)]
    pub id: RouteId,
    /// Document title.
    #[serde(rename = "Title", default)]
    pub title: String,
    /// Keywords for the `keywords` meta tag.
    #[serde(rename = "MetaKeywords", default, skip_serializing_if = "Option::is_none")]
    pub meta_keywords: Option<String>,
    /// Description for the `description` and `og:description` meta tags.
    #[serde(
        rename = "MetaDescription",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub meta_description: Option<String>,
    /// Hard-redirect target; when non-empty the model is never published.
    #[serde(rename = "RedirectUrl", default, skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
    /// Render the alternate navigation affordance for this model.
    #[serde(skip)]
    pub alt_menu: bool,
    /// Page-type-specific payload, passed through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ContentModel {
    /// Synthetic model published when no route matches the navigation path.
    ///
    /// Carries no content, only the alternate-menu marker.
    #[must_use]
    pub fn alternate_menu() -> Self {
        Self {
            alt_menu: true,
            ..Self::default()
        }
    }

    /// Redirect target, if the model carries a non-empty one.
    #[must_use]
    pub fn redirect_target(&self) -> Option<&str> {
        self.redirect_url.as_deref().filter(|url| !url.is_empty())
    }
}
