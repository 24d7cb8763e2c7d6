use crate::dom::element::Element;
use indexmap::IndexMap;
use scraper::{ElementRef, Html};

/// Represents the parsed DOM tree of a web page
#[derive(Debug)]
pub struct DomTree {
    html: Html,
}

impl DomTree {
    /// Parse an HTML document.
    ///
    /// The HTML5 parser recovers from malformed markup, so this never fails;
    /// missing `<html>`, `<head>` and `<body>` elements are synthesised.
    pub fn parse(html: &str) -> Self {
        let tree = Self {
            html: Html::parse_document(html),
        };
        log::trace!("Parsed {} bytes of HTML into {} elements", html.len(), tree.count_elements());
        tree
    }

    /// Root element of the document (normally `<html>`)
    pub fn root(&self) -> Element<'_> {
        Element::new(self.html.root_element())
    }

    /// Iterate over every element in document order.
    ///
    /// The walk is iterative, so nesting depth is bounded by memory only.
    pub fn iter(&self) -> impl Iterator<Item = Element<'_>> {
        self.html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .map(Element::new)
    }

    /// First element in document order with the given tag whose attributes
    /// satisfy every pair in `attrs`
    pub fn find_first(&self, tag: &str, attrs: &IndexMap<String, String>) -> Option<Element<'_>> {
        self.iter().find(|element| {
            element.is_tag(tag) && attrs.iter().all(|(key, value)| element.attribute_matches(key, value))
        })
    }

    /// All elements with the given tag, in document order
    pub fn find_all(&self, tag: &str) -> Vec<Element<'_>> {
        self.iter().filter(|element| element.is_tag(tag)).collect()
    }

    /// Count total elements in the tree
    pub fn count_elements(&self) -> usize {
        self.iter().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html>
        <head><title>Test Page</title><meta name="description" content="First"></head>
        <body><section>Hello<h1 id="first">Hello</h1></section><h1 id="second">Again</h1></body>
    </html>"#;

    #[test]
    fn test_root_is_html() {
        let tree = DomTree::parse(PAGE);
        assert_eq!(tree.root().tag_name(), "html");
    }

    #[test]
    fn test_document_order() {
        let tree = DomTree::parse(PAGE);
        let tags: Vec<_> = tree.iter().map(|e| e.tag_name()).collect();

        assert_eq!(tags, vec!["html", "head", "title", "meta", "body", "section", "h1", "h1"]);
    }

    #[test]
    fn test_count_elements() {
        let tree = DomTree::parse(PAGE);
        assert_eq!(tree.count_elements(), 8);
    }

    #[test]
    fn test_find_all_preserves_order() {
        let tree = DomTree::parse(PAGE);
        let ids: Vec<_> = tree
            .find_all("h1")
            .iter()
            .map(|e| e.get_attribute("id").unwrap())
            .collect();

        assert_eq!(ids, vec!["first", "second"]);
        assert!(tree.find_all("h2").is_empty());
    }

    #[test]
    fn test_find_first() {
        let tree = DomTree::parse(PAGE);

        let first = tree.find_first("h1", &IndexMap::new()).unwrap();
        assert_eq!(first.text(), "Hello");

        let mut attrs = IndexMap::new();
        attrs.insert("id".to_string(), "second".to_string());
        let second = tree.find_first("H1", &attrs).unwrap();
        assert_eq!(second.text(), "Again");

        attrs.insert("class".to_string(), "missing".to_string());
        assert!(tree.find_first("h1", &attrs).is_none());
    }

    #[test]
    fn test_parse_html() {
        let tree = DomTree::parse(
            r#"<!DOCTYPE html>
            <html><head><title>My Page</title>
            <meta name="description" content="hello"></head>
            <body><h1>Welcome <em>home</em></h1><img src="a.png" alt="A"></body></html>"#,
        );

        let title = tree.find_first("title", &IndexMap::new()).unwrap();
        assert_eq!(title.text(), "My Page");

        let h1 = tree.find_first("h1", &IndexMap::new()).unwrap();
        assert_eq!(h1.text(), "Welcome home");

        let img = tree.find_first("img", &IndexMap::new()).unwrap();
        assert!(img.is_empty_element());
        assert_eq!(img.get_attribute("alt"), Some("A"));

        let meta = tree.find_first("meta", &IndexMap::new()).unwrap();
        assert_eq!(meta.get_attribute("content"), Some("hello"));
    }

    #[test]
    fn test_parse_fragment_synthesises_structure() {
        let tree = DomTree::parse("<h1>Welcome</h1><h1>Second</h1>");
        let tags: Vec<_> = tree.iter().map(|e| e.tag_name()).collect();

        assert_eq!(tags, vec!["html", "head", "body", "h1", "h1"]);
    }

    #[test]
    fn test_deeply_nested_document() {
        let depth = 10_000;
        let html = format!("{}<h1>deep</h1>{}", "<div>".repeat(depth), "</div>".repeat(depth));
        let tree = DomTree::parse(&html);

        assert_eq!(tree.count_elements(), depth + 4);
        assert_eq!(tree.find_all("div").len(), depth);

        let h1 = tree.find_first("h1", &IndexMap::new()).unwrap();
        assert_eq!(h1.text(), "deep");

        let outer = tree.find_first("div", &IndexMap::new()).unwrap();
        assert_eq!(outer.text(), "deep");
    }
}
