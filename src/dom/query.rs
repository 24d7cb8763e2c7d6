use crate::error::{Result, ScrapeoError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// What to look for in a document: a tag name plus optional attribute constraints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchQuery {
    /// Element name to search for
    pub tag_name: String,

    /// Value that any attribute of the element must hold
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// Attribute name/value pairs that must all match
    /// Uses IndexMap to preserve the caller's order
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub attrs: IndexMap<String, String>,
}

impl SearchQuery {
    /// Create a query matching the first element with the given tag name
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            value: None,
            attrs: IndexMap::new(),
        }
    }

    /// Builder method: set the bare value to look for in any attribute
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Builder method: require `key` to equal `value`
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// The bare value only drives the search when it is non-empty and no
    /// attribute pairs are given.
    pub fn scans_by_value(&self) -> Option<&str> {
        match &self.value {
            Some(value) if !value.is_empty() && self.attrs.is_empty() => Some(value.as_str()),
            _ => None,
        }
    }

    /// Check that the tag and attribute names are usable identifiers
    pub fn validate(&self) -> Result<()> {
        if !is_valid_tag_name(&self.tag_name) {
            return Err(ScrapeoError::InvalidQuery(format!(
                "'{}' is not a valid tag name",
                self.tag_name
            )));
        }

        if let Some(key) = self.attrs.keys().find(|key| !is_valid_attr_name(key)) {
            return Err(ScrapeoError::InvalidQuery(format!(
                "'{}' is not a valid attribute name",
                key
            )));
        }

        Ok(())
    }

    /// Error describing this query when nothing matched
    pub fn not_found(&self) -> ScrapeoError {
        ScrapeoError::ElementNotFound {
            search_term: self.tag_name.clone(),
            value: self.value.clone(),
            attrs: self.attrs.clone(),
        }
    }
}

fn is_valid_tag_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ':' | '.'))
        }
        _ => false,
    }
}

fn is_valid_attr_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| !c.is_whitespace() && !c.is_control() && !matches!(c, '"' | '\'' | '>' | '<' | '/' | '='))
}
