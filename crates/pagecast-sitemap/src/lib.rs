//! Site hierarchy model and route lookup for Pagecast.
//!
//! This crate provides:
//! - [`RouteNode`]: a node in the site hierarchy, classified by [`PageType`]
//! - [`find_route`]: depth-first permalink lookup over a forest of nodes
//! - [`SitemapStore`]: snapshot store for the currently loaded hierarchy
//!
//! # Quick Start
//!
//! ```
//! use pagecast_sitemap::{RouteNode, Sitemap, find_route};
//!
//! let forest: Vec<RouteNode> = serde_json::from_str(
//!     r#"[{"Id": "A", "Permalink": "/", "PageTypeName": "Start page"}]"#,
//! ).unwrap();
//!
//! let sitemap = Sitemap::new(forest);
//! assert!(sitemap.find("/").is_some());
//! assert!(sitemap.find("/missing").is_none());
//! ```

pub(crate) mod route;
pub(crate) mod store;

pub use route::{PageType, RouteId, RouteNode, find_route};
pub use store::{Sitemap, SitemapStore};
