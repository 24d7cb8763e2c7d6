//! DOM parsing and searching module
//!
//! This module parses HTML text into a read-only document and provides the
//! primitives the navigator searches with. It includes:
//! - Element: Borrowed view of a DOM element
//! - ElementNode: Owned snapshot of an element's tag and attributes
//! - DomTree: Parsed document with document-order traversal
//! - SearchQuery: Tag name plus attribute constraints

pub mod element;
pub mod query;
pub mod tree;

pub use element::{Element, ElementNode};
pub use query::SearchQuery;
pub use tree::DomTree;
