//! # scrapeo
//!
//! A Rust library for locating an HTML element by tag and attributes and
//! extracting the text that matters for SEO, plus a command-line tool that
//! fetches a page and prints its title, meta description, robots directive
//! and headings.
//!
//! ## Features
//!
//! - **Element search**: first match by tag name, by attribute name/value pairs, or by a
//!   bare value held in any attribute
//! - **Relevant text**: node text for content elements, attribute text for empty elements
//!   such as `<meta>` or on request
//! - **SEO report**: common fields collected in one pass, with per-field errors
//! - **Fetching** (`fetch` feature): async HTTP GET with `reqwest`
//!
//! ## Command-line usage
//!
//! ```bash
//! # Title and meta description
//! scrapeo https://example.com meta
//!
//! # Robots directive, as JSON
//! scrapeo --format json https://example.com meta --robots
//!
//! # Every second-level heading
//! scrapeo example.com content --heading h2 --all
//! ```
//!
//! ## Library usage
//!
//! ```rust
//! use scrapeo::{Scrapeo, SearchQuery};
//!
//! # fn main() -> scrapeo::Result<()> {
//! let html = r#"<head><title>My Page</title><meta content="x"></head>"#;
//! let page = Scrapeo::from_html(html);
//!
//! assert_eq!(page.get_text(&SearchQuery::new("title"), None)?, "My Page");
//!
//! // Match a value in any attribute; empty elements yield their `content`
//! assert_eq!(page.get_text(&SearchQuery::new("meta").with_value("x"), None)?, "x");
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Overview
//!
//! - [`dom`]: HTML parsing, borrowed element views, and search queries
//! - [`navigator`]: Resolving a query to one element
//! - [`analyzer`]: Choosing node text or attribute text
//! - [`scrapeo`]: The search-and-extract facade
//! - [`seo`]: SEO field catalogue and reports
//! - [`fetch`]: Page fetching (requires `fetch` feature)
//! - [`error`]: Error types and result aliases

pub mod analyzer;
pub mod dom;
pub mod error;
pub mod navigator;
pub mod scrapeo;
pub mod seo;

#[cfg(feature = "fetch")]
pub mod fetch;

pub use analyzer::{Analyzer, ElementAnalyzer};
pub use dom::{DomTree, Element, ElementNode, SearchQuery};
pub use error::{Result, ScrapeoError};
pub use navigator::{DomNavigator, Navigator};
pub use scrapeo::Scrapeo;
pub use seo::{FieldReport, FieldStatus, HeadingLevel, SeoField, SeoReport};

#[cfg(feature = "fetch")]
pub use fetch::{FetchOptions, fetch_html};
