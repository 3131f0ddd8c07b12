//! Route nodes and permalink lookup.
//!
//! The site hierarchy arrives from the CMS as a forest of nodes in wire
//! (PascalCase) naming. Nodes carry a permalink, a page-type classification
//! that decides the content-fetch strategy, and an ordered child sequence.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque content identity assigned by the CMS.
///
/// Identifies both a route node and the content model resolved for it; the
/// two share the same id, which is also the content cache key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteId(String);

impl RouteId {
    /// Create an id from its wire representation.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The wire representation of the id.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RouteId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

/// Page-type classification of a route node.
///
/// The CMS sends the classification as a display string; unrecognized
/// values map to [`PageType::Unknown`], for which no content is fetched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageType {
    /// Site start page.
    #[serde(rename = "Start page")]
    StartPage,
    /// Blog archive listing.
    #[serde(rename = "Blog Archive")]
    BlogArchive,
    /// Individual blog post.
    BlogPost,
    /// Standard content page.
    #[serde(rename = "Standard page")]
    StandardPage,
    /// Category listing under a blog archive.
    Category,
    /// Tag listing under a blog archive.
    Tag,
    /// Any classification this client does not recognize.
    #[serde(other)]
    Unknown,
}

impl PageType {
    /// The wire string for this classification.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::StartPage => "Start page",
            Self::BlogArchive => "Blog Archive",
            Self::BlogPost => "BlogPost",
            Self::StandardPage => "Standard page",
            Self::Category => "Category",
            Self::Tag => "Tag",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for PageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node in the site hierarchy.
///
/// Permalinks are unique across the forest and child order is the order
/// the CMS stores; both are relied on by [`find_route`]. A node whose wire
/// form omits `Items` deserializes with an empty child sequence and is
/// treated as a leaf.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteNode {
    /// Content identity, shared with the resolved content model.
    #[serde(rename = "Id")]
    pub id: RouteId,
    /// Canonical path this node is reachable under.
    #[serde(rename = "Permalink")]
    pub permalink: String,
    /// Classification deciding the content-fetch strategy.
    #[serde(rename = "PageTypeName")]
    pub page_type: PageType,
    /// Identity of the logical parent, used by archive-style lookups
    /// (category and tag listings query their parent archive).
    #[serde(rename = "ParentId", default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<RouteId>,
    /// Ordered child nodes.
    #[serde(rename = "Items", default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<RouteNode>,
}

/// Find the node matching `path` by depth-first pre-order traversal.
///
/// At each node the permalink is compared first; on a miss the children are
/// searched before the next sibling. The first match wins, so sibling and
/// child order decide ties. Runs in O(n) over the forest.
///
/// # Arguments
///
/// * `forest` - Root nodes in stored order
/// * `path` - Navigation path to match against permalinks
#[must_use]
pub fn find_route<'a>(forest: &'a [RouteNode], path: &str) -> Option<&'a RouteNode> {
    for node in forest {
        if node.permalink == path {
            return Some(node);
        }
        if let Some(found) = find_route(&node.items, path) {
            return Some(found);
        }
    }
    None
}
