//! Relevant-text extraction from a located element

use crate::dom::Element;
use crate::error::{Result, ScrapeoError};

/// Attribute read from empty elements when no other attribute is requested.
/// Matches the payload of `<meta name="..." content="...">`.
pub const DEFAULT_ATTRIBUTE: &str = "content";

/// Anything that can decide which text of an element to report
pub trait Analyzer {
    /// Text worth reporting for `element`, read from `seo_attr` when given
    fn relevant_text(&self, element: &Element<'_>, seo_attr: Option<&str>) -> Result<String>;
}

/// Reads attribute text from empty elements or on request, node text otherwise
#[derive(Debug, Clone, Copy, Default)]
pub struct ElementAnalyzer;

impl ElementAnalyzer {
    pub fn new() -> Self {
        Self
    }

    fn value_from_attr(element: &Element<'_>, seo_attr: Option<&str>) -> Result<String> {
        let attr = seo_attr.unwrap_or(DEFAULT_ATTRIBUTE);

        element
            .get_attribute(attr)
            .map(str::to_string)
            .ok_or_else(|| ScrapeoError::ElementAttribute {
                element: Box::new(element.to_node()),
                attr: attr.to_string(),
            })
    }
}

impl Analyzer for ElementAnalyzer {
    fn relevant_text(&self, element: &Element<'_>, seo_attr: Option<&str>) -> Result<String> {
        if element.is_empty_element() || seo_attr.is_some() {
            Self::value_from_attr(element, seo_attr)
        } else {
            Ok(element.text())
        }
    }
}
