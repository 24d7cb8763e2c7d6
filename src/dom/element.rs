use indexmap::IndexMap;
use scraper::ElementRef;
use serde::{Deserialize, Serialize};

/// Tags that never carry content in HTML; their payload lives in attributes
const VOID_TAGS: &[&str] = &[
    "area", "base", "basefont", "bgsound", "br", "col", "command", "embed", "frame", "hr",
    "image", "img", "input", "isindex", "keygen", "link", "menuitem", "meta", "nextid",
    "param", "source", "spacer", "track", "wbr",
];

fn is_void_tag(tag: &str) -> bool {
    VOID_TAGS.iter().any(|void| void.eq_ignore_ascii_case(tag))
}

/// Borrowed view of an element inside a parsed [`DomTree`](super::DomTree)
#[derive(Debug, Clone, Copy)]
pub struct Element<'a> {
    inner: ElementRef<'a>,
}

impl<'a> Element<'a> {
    pub(crate) fn new(inner: ElementRef<'a>) -> Self {
        Self { inner }
    }

    /// HTML tag name, lowercased by the parser
    pub fn tag_name(&self) -> &'a str {
        self.inner.value().name()
    }

    /// Attributes in source order
    pub fn attributes(&self) -> impl Iterator<Item = (&'a str, &'a str)> + use<'a> {
        self.inner.value().attrs()
    }

    /// Get attribute value by key
    pub fn get_attribute(&self, key: &str) -> Option<&'a str> {
        self.inner.value().attr(key)
    }

    /// Concatenated text of all descendant text nodes, as the parser produced it
    pub fn text(&self) -> String {
        self.inner.text().collect()
    }

    /// Check if element is a specific tag
    pub fn is_tag(&self, tag: &str) -> bool {
        self.tag_name().eq_ignore_ascii_case(tag)
    }

    /// Check if element has a specific class
    pub fn has_class(&self, class_name: &str) -> bool {
        if let Some(classes) = self.get_attribute("class") {
            classes.split_whitespace().any(|c| c == class_name)
        } else {
            false
        }
    }

    /// Whether this is a void tag (`meta`, `img`, `link`, ...) with no content.
    pub fn is_empty_element(&self) -> bool {
        is_void_tag(self.tag_name()) && !self.inner.has_children()
    }

    /// Whether any attribute, whatever its name, holds exactly `value`
    pub fn has_attribute_value(&self, value: &str) -> bool {
        self.attributes().any(|(_, v)| v == value)
    }

    /// Whether the attribute `key` satisfies `expected`.
    ///
    /// `class` is matched against each class token as well as the full
    /// attribute value; every other attribute requires an exact match.
    pub fn attribute_matches(&self, key: &str, expected: &str) -> bool {
        match self.get_attribute(key) {
            Some(actual) if actual == expected => true,
            Some(_) if key.eq_ignore_ascii_case("class") => self.has_class(expected),
            _ => false,
        }
    }

    /// Owned copy of the tag and attributes, without the subtree
    pub fn to_node(&self) -> ElementNode {
        let mut node = ElementNode::new(self.tag_name());
        for (key, value) in self.attributes() {
            node.add_attribute(key, value);
        }
        node
    }
}

/// Owned snapshot of an element's tag and attributes.
///
/// Outlives the document it was taken from, so errors can carry it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ElementNode {
    /// HTML tag name (e.g., "meta", "title", "h1")
    pub tag_name: String,

    /// Element attributes, in source order
    #[serde(default)]
    pub attributes: IndexMap<String, String>,
}

impl ElementNode {
    /// Create a new ElementNode
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attributes: IndexMap::new(),
        }
    }

    /// Builder method: add one attribute
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_attribute(key, value);
        self
    }

    /// Add a single attribute
    pub fn add_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Get attribute value by key
    pub fn get_attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Check if element is a specific tag
    pub fn is_tag(&self, tag: &str) -> bool {
        self.tag_name.eq_ignore_ascii_case(tag)
    }

    /// Convert to a simplified string representation
    pub fn to_simple_string(&self) -> String {
        let mut parts = vec![format!("<{}", self.tag_name)];

        for (key, value) in &self.attributes {
            parts.push(format!(" {}=\"{}\"", key, value));
        }

        parts.push(">".to_string());
        parts.join("")
    }
}
