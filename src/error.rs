use crate::dom::ElementNode;
use indexmap::IndexMap;
use thiserror::Error;

/// Result type alias for scrapeo operations
pub type Result<T> = std::result::Result<T, ScrapeoError>;

/// Errors that can occur while fetching, searching or extracting
#[derive(Debug, Error)]
pub enum ScrapeoError {
    /// No element satisfied the query
    #[error("No <{search_term}> element found{}", describe_filters(.value, .attrs))]
    ElementNotFound {
        search_term: String,
        value: Option<String>,
        attrs: IndexMap<String, String>,
    },

    /// Element was found but lacks the requested attribute
    #[error("Element {} has no '{attr}' attribute", .element.to_simple_string())]
    ElementAttribute { element: Box<ElementNode>, attr: String },

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Invalid heading level '{0}' (expected h1 through h6)")]
    InvalidHeading(String),

    #[error("Failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    #[error("HTTP {status} returned by {url}")]
    HttpStatus { url: String, status: u16 },
}

impl ScrapeoError {
    /// True when no element matched the query
    pub fn is_not_found(&self) -> bool {
        matches!(self, ScrapeoError::ElementNotFound { .. })
    }

    /// True when the element matched but the attribute to read was absent
    pub fn is_missing_attribute(&self) -> bool {
        matches!(self, ScrapeoError::ElementAttribute { .. })
    }
}

fn describe_filters(value: &Option<String>, attrs: &IndexMap<String, String>) -> String {
    if !attrs.is_empty() {
        let pairs: Vec<String> = attrs.iter().map(|(k, v)| format!("{}=\"{}\"", k, v)).collect();
        format!(" with {}", pairs.join(" "))
    } else if let Some(value) = value {
        format!(" with an attribute value of \"{}\"", value)
    } else {
        String::new()
    }
}
