//! SEO fields the command-line tool knows how to report

use crate::analyzer::Analyzer;
use crate::dom::SearchQuery;
use crate::error::{Result, ScrapeoError};
use crate::navigator::{DomNavigator, Navigator};
use crate::scrapeo::Scrapeo;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Heading element level, `h1` through `h6`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingLevel {
    #[default]
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    /// Tag name of the heading
    pub fn tag(&self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
            HeadingLevel::H4 => "h4",
            HeadingLevel::H5 => "h5",
            HeadingLevel::H6 => "h6",
        }
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for HeadingLevel {
    type Err = ScrapeoError;

    /// Accepts `h1`..`h6` in any case, or a bare digit `1`..`6`
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('h')
            .or_else(|| trimmed.strip_prefix('H'))
            .unwrap_or(trimmed);

        match digits {
            "1" => Ok(HeadingLevel::H1),
            "2" => Ok(HeadingLevel::H2),
            "3" => Ok(HeadingLevel::H3),
            "4" => Ok(HeadingLevel::H4),
            "5" => Ok(HeadingLevel::H5),
            "6" => Ok(HeadingLevel::H6),
            _ => Err(ScrapeoError::InvalidHeading(s.to_string())),
        }
    }
}

/// A piece of page information to report
#[derive(Debug, Clone, PartialEq)]
pub enum SeoField {
    /// Text of `<title>`
    Title,
    /// `content` of `<meta name="description">`
    Description,
    /// `content` of `<meta name="robots">`
    Robots,
    /// A `<meta>` tag chosen by the caller.
    ///
    /// With `attr`, the tag must have `attr="value"`; with only `value`, any
    /// attribute holding `value` will do. `seo_attr` names the attribute to
    /// read (default `content`).
    Meta {
        attr: Option<String>,
        value: Option<String>,
        seo_attr: Option<String>,
    },
    /// Text of the first heading of a level
    Heading(HeadingLevel),
}

impl SeoField {
    /// Short name used when printing the field
    pub fn label(&self) -> String {
        match self {
            SeoField::Title => "title".to_string(),
            SeoField::Description => "description".to_string(),
            SeoField::Robots => "robots".to_string(),
            SeoField::Meta { attr, value, .. } => match (attr, value) {
                (Some(attr), Some(value)) => format!("meta[{}={}]", attr, value),
                (None, Some(value)) => format!("meta[*={}]", value),
                _ => "meta".to_string(),
            },
            SeoField::Heading(level) => level.to_string(),
        }
    }

    /// Query locating the field's element
    pub fn query(&self) -> SearchQuery {
        match self {
            SeoField::Title => SearchQuery::new("title"),
            SeoField::Description => SearchQuery::new("meta").with_attr("name", "description"),
            SeoField::Robots => SearchQuery::new("meta").with_attr("name", "robots"),
            SeoField::Meta { attr, value, .. } => {
                let query = SearchQuery::new("meta");
                match (attr, value) {
                    (Some(attr), Some(value)) => query.with_attr(attr.as_str(), value.as_str()),
                    (None, Some(value)) => query.with_value(value.as_str()),
                    _ => query,
                }
            }
            SeoField::Heading(level) => SearchQuery::new(level.tag()),
        }
    }

    /// Attribute to read the text from, if not the default
    pub fn seo_attr(&self) -> Option<&str> {
        match self {
            SeoField::Meta { seo_attr, .. } => seo_attr.as_deref(),
            _ => None,
        }
    }
}

/// How looking up one field went
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldStatus {
    Found,
    NotFound,
    MissingAttribute,
    Invalid,
}

/// Outcome of one requested field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldReport {
    pub field: String,
    pub status: FieldStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FieldReport {
    fn from_outcome(field: String, outcome: Result<String>) -> Self {
        match outcome {
            Ok(text) => Self { field, status: FieldStatus::Found, text: Some(text), error: None },
            Err(e) => {
                let status = if e.is_not_found() {
                    FieldStatus::NotFound
                } else if e.is_missing_attribute() {
                    FieldStatus::MissingAttribute
                } else {
                    FieldStatus::Invalid
                };
                Self { field, status, text: None, error: Some(e.to_string()) }
            }
        }
    }

    pub fn is_found(&self) -> bool {
        self.status == FieldStatus::Found
    }
}

/// Results for a set of fields, in the order they were requested
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SeoReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub fields: Vec<FieldReport>,
}

impl SeoReport {
    /// Look up every field; a failed field is recorded and the rest still run
    pub fn collect<N: Navigator, A: Analyzer>(page: &Scrapeo<N, A>, fields: &[SeoField]) -> Self {
        let fields = fields
            .iter()
            .map(|field| {
                let outcome = page.get_text(&field.query(), field.seo_attr());
                FieldReport::from_outcome(field.label(), outcome)
            })
            .collect();

        Self { url: None, fields }
    }

    /// Report the text of every heading of `level`
    pub fn collect_headings<A: Analyzer>(page: &Scrapeo<DomNavigator, A>, level: HeadingLevel) -> Self {
        let label = level.to_string();
        let fields = match page.get_all_text(level.tag(), None) {
            Ok(texts) => texts
                .into_iter()
                .map(|text| FieldReport::from_outcome(label.clone(), Ok(text)))
                .collect(),
            Err(e) => vec![FieldReport::from_outcome(label, Err(e))],
        };

        Self { url: None, fields }
    }

    /// Builder method: record the page URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Number of fields that were found
    pub fn found_count(&self) -> usize {
        self.fields.iter().filter(|f| f.is_found()).count()
    }

    /// Export to JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
