//! Element search over a parsed document

use crate::dom::{DomTree, Element, SearchQuery};
use crate::error::Result;

/// Anything that can resolve a [`SearchQuery`] to a single element
pub trait Navigator {
    /// Find the element matching `query`, or fail with `ElementNotFound`
    fn find(&self, query: &SearchQuery) -> Result<Element<'_>>;
}

/// Navigator over an owned, parsed HTML document
#[derive(Debug)]
pub struct DomNavigator {
    dom: DomTree,
}

impl DomNavigator {
    /// Parse `html` and wrap the resulting document
    pub fn new(html: &str) -> Self {
        Self::from_tree(DomTree::parse(html))
    }

    /// Wrap an already built document
    pub fn from_tree(dom: DomTree) -> Self {
        Self { dom }
    }

    /// The document being searched
    pub fn dom(&self) -> &DomTree {
        &self.dom
    }

    /// All elements with the given tag, in document order
    pub fn find_all(&self, tag: &str) -> Vec<Element<'_>> {
        self.dom.find_all(tag)
    }

    /// Linear scan for the first `tag` element holding `value` in any attribute
    fn search_by_value(&self, tag: &str, value: &str) -> Option<Element<'_>> {
        self.dom
            .iter()
            .find(|element| element.is_tag(tag) && element.has_attribute_value(value))
    }
}

impl Navigator for DomNavigator {
    fn find(&self, query: &SearchQuery) -> Result<Element<'_>> {
        let found = match query.scans_by_value() {
            Some(value) => {
                log::debug!("Scanning <{}> elements for attribute value {:?}", query.tag_name, value);
                self.search_by_value(&query.tag_name, value)
            }
            None => {
                log::debug!("Searching for <{}> matching {:?}", query.tag_name, query.attrs);
                self.dom.find_first(&query.tag_name, &query.attrs)
            }
        };

        found.ok_or_else(|| query.not_found())
    }
}
