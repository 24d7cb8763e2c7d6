//! Search-and-extract facade

use crate::analyzer::{Analyzer, ElementAnalyzer};
use crate::dom::SearchQuery;
use crate::error::Result;
use crate::navigator::{DomNavigator, Navigator};

/// Finds an element in a page and returns its relevant text.
///
/// `Scrapeo` pairs a [`Navigator`] (search) with an [`Analyzer`]
/// (extraction). [`Scrapeo::from_html`] wires up the standard pair; the
/// `with_*` constructors accept substitutes, e.g. test doubles.
///
/// ```
/// use scrapeo::{Scrapeo, SearchQuery};
///
/// let page = Scrapeo::from_html(r#"<meta name="description" content="hello">"#);
/// let query = SearchQuery::new("meta").with_attr("name", "description");
///
/// assert_eq!(page.get_text(&query, None).unwrap(), "hello");
/// ```
#[derive(Debug, Clone)]
pub struct Scrapeo<N = DomNavigator, A = ElementAnalyzer> {
    navigator: N,
    analyzer: A,
}

impl Scrapeo {
    /// Parse `html` and use the standard navigator and analyzer
    pub fn from_html(html: &str) -> Self {
        Self::with_navigator(DomNavigator::new(html))
    }
}

impl<N: Navigator> Scrapeo<N, ElementAnalyzer> {
    /// Use a custom navigator with the standard analyzer
    pub fn with_navigator(navigator: N) -> Self {
        Self::with_components(navigator, ElementAnalyzer::new())
    }
}

impl<A: Analyzer> Scrapeo<DomNavigator, A> {
    /// Parse `html` with the standard navigator and use a custom analyzer
    pub fn with_analyzer(html: &str, analyzer: A) -> Self {
        Self::with_components(DomNavigator::new(html), analyzer)
    }

    /// Relevant text of every `tag` element, in document order.
    ///
    /// Fails with `ElementNotFound` when the page has no such element, and
    /// with the first extraction error otherwise.
    pub fn get_all_text(&self, tag: &str, seo_attr: Option<&str>) -> Result<Vec<String>> {
        let query = SearchQuery::new(tag);
        query.validate()?;

        let elements = self.navigator.find_all(tag);
        if elements.is_empty() {
            return Err(query.not_found());
        }

        elements
            .into_iter()
            .map(|element| self.analyzer.relevant_text(&element, seo_attr))
            .collect()
    }
}

impl<N: Navigator, A: Analyzer> Scrapeo<N, A> {
    /// Use the given navigator and analyzer
    pub fn with_components(navigator: N, analyzer: A) -> Self {
        Self { navigator, analyzer }
    }

    /// Search for `query` and return the relevant text of the match.
    ///
    /// Text comes from `seo_attr` when given (or `content` for empty
    /// elements such as `<meta>`), and from the node body otherwise.
    /// `ElementNotFound` and `ElementAttribute` errors are passed through
    /// unchanged.
    pub fn get_text(&self, query: &SearchQuery, seo_attr: Option<&str>) -> Result<String> {
        query.validate()?;

        let element = self.navigator.find(query)?;
        self.analyzer.relevant_text(&element, seo_attr)
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }
}
