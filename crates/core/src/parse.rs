//! HTML parsing and article text extraction.
//!
//! This module provides the [`Document`] and [`Element`] types for parsing
//! HTML and querying it with CSS selectors, plus
//! [`Document::article_text`], which turns a page into the plain text the
//! readability statistics are computed from.
//!
//! # Example
//!
//! ```rust
//! use lesbar_core::Document;
//!
//! let html = r#"
//!     <html>
//!         <body>
//!             <nav>Menü</nav>
//!             <article><h1>Titel</h1><p>Ein kurzer Absatz.</p></article>
//!         </body>
//!     </html>
//! "#;
//!
//! let text = Document::article_text_from_html(html);
//! assert_eq!(text, "Titel Ein kurzer Absatz.");
//! ```

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

use crate::preprocess::{PreprocessConfig, preprocess_html};
use crate::{LesbarError, Result};

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Containers tried in order when locating the article body.
pub const CONTENT_SELECTORS: &[&str] = &["article", "main", ".content", ".post", ".entry-content", "#content"];

/// Represents a parsed HTML document.
///
/// # Example
///
/// ```rust
/// use lesbar_core::Document;
///
/// let html = "<html><head><title>Test</title></head><body><p>Hallo</p></body></html>";
/// let doc = Document::parse(html).unwrap();
/// assert_eq!(doc.title(), Some("Test".to_string()));
/// ```
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string without preprocessing.
    pub fn parse(html: &str) -> Result<Self> {
        Ok(Self { html: Html::parse_document(html) })
    }

    /// Parses HTML after removing boilerplate elements (see
    /// [`crate::preprocess::BOILERPLATE_TAGS`]).
    pub fn parse_with_preprocessing(html: &str) -> Result<Self> {
        let cleaned = preprocess_html(html, &PreprocessConfig::default());
        Self::parse(&cleaned)
    }

    /// Gets the raw HTML representation.
    pub fn html(&self) -> &Html {
        &self.html
    }

    /// Selects elements using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`LesbarError::HtmlParseError`] if the selector is invalid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lesbar_core::Document;
    ///
    /// let html = r#"<p class="content">Erster</p><p class="content">Zweiter</p>"#;
    /// let doc = Document::parse(html).unwrap();
    /// let elements = doc.select("p.content").unwrap();
    /// assert_eq!(elements.len(), 2);
    /// ```
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel = parse_selector(selector)?;
        Ok(self.html.select(&sel).map(|el| Element { element: el }).collect())
    }

    /// First element matching `selector`, if any.
    pub fn select_first(&'_ self, selector: &str) -> Result<Option<Element<'_>>> {
        let sel = parse_selector(selector)?;
        Ok(self.html.select(&sel).next().map(|el| Element { element: el }))
    }

    /// Number of elements matching `selector`; 0 for invalid selectors.
    pub fn count(&self, selector: &str) -> usize {
        parse_selector(selector).map(|sel| self.html.select(&sel).count()).unwrap_or(0)
    }

    /// Gets the title of the document.
    pub fn title(&self) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        self.html
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<String>())
    }

    /// Gets all text content from the document.
    pub fn text_content(&self) -> String {
        self.html.root_element().text().collect()
    }

    /// Text of the main content container.
    ///
    /// Uses the first element matching one of [`CONTENT_SELECTORS`] (tried in
    /// order), falling back to `<body>`. Text nodes are joined with spaces and
    /// whitespace is collapsed. Call this on a preprocessed document to keep
    /// navigation and footer text out.
    pub fn article_text(&self) -> String {
        for selector in CONTENT_SELECTORS {
            if let Ok(Some(element)) = self.select_first(selector) {
                return element.clean_text();
            }
        }

        match self.select_first("body") {
            Ok(Some(body)) => body.clean_text(),
            _ => String::new(),
        }
    }

    /// Preprocesses `html` and returns its article text.
    pub fn article_text_from_html(html: &str) -> String {
        Self::parse_with_preprocessing(html)
            .map(|doc| doc.article_text())
            .unwrap_or_default()
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| LesbarError::HtmlParseError(format!("Invalid selector: {}", e)))
}

/// Collapses whitespace runs to single spaces and trims.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text, " ").trim().to_string()
}

/// A wrapper around scraper's ElementRef.
///
/// # Example
///
/// ```rust
/// use lesbar_core::Document;
///
/// let html = r#"<a href="https://example.de">Linktext</a>"#;
/// let doc = Document::parse(html).unwrap();
/// let link = &doc.select("a").unwrap()[0];
///
/// assert_eq!(link.text(), "Linktext");
/// assert_eq!(link.attr("href"), Some("https://example.de"));
/// ```
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: scraper::ElementRef<'a>,
}

impl<'a> Element<'a> {
    /// Gets the inner HTML of this element.
    pub fn inner_html(&self) -> String {
        self.element.inner_html()
    }

    /// Concatenation of all text nodes within this element.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Text nodes trimmed, joined with single spaces and whitespace-collapsed.
    pub fn clean_text(&self) -> String {
        let joined = self
            .element
            .text()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        normalize_whitespace(&joined)
    }

    /// Gets the value of an attribute.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.element.value().attr(name)
    }

    /// Gets the lowercase tag name.
    pub fn tag_name(&self) -> String {
        self.element.value().name().to_lowercase()
    }

    /// Selects descendant elements using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`LesbarError::HtmlParseError`] if the selector is invalid.
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel = parse_selector(selector)?;
        Ok(self.element.select(&sel).map(|el| Element { element: el }).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_HTML: &str = r#"
        <!DOCTYPE html>
        <html lang="de">
        <head>
            <meta charset="UTF-8">
            <title>Testseite</title>
        </head>
        <body>
            <header>Kopfbereich</header>
            <h1>Überschrift</h1>
            <p class="content">Absatz 1</p>
            <p class="content">Absatz 2</p>
            <a href="https://example.de">Link</a>
        </body>
        </html>
    "#;

    #[test]
    fn test_parse_document() {
        let doc = Document::parse(SAMPLE_HTML).unwrap();
        assert_eq!(doc.title(), Some("Testseite".to_string()));
    }

    #[test]
    fn test_select_elements() {
        let doc = Document::parse(SAMPLE_HTML).unwrap();
        let elements = doc.select("p.content").unwrap();

        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].text(), "Absatz 1");
        assert_eq!(elements[1].text(), "Absatz 2");
    }

    #[test]
    fn test_invalid_selector() {
        let doc = Document::parse(SAMPLE_HTML).unwrap();
        assert!(matches!(doc.select("[[invalid"), Err(LesbarError::HtmlParseError(_))));
        assert_eq!(doc.count("[[invalid"), 0);
    }

    #[test]
    fn test_count() {
        let doc = Document::parse(SAMPLE_HTML).unwrap();
        assert_eq!(doc.count("p"), 2);
        assert_eq!(doc.count("img"), 0);
    }

    #[test]
    fn test_article_text_prefers_article() {
        let html = "<body><div>Außen</div><main>Haupt</main><article>  Artikel\n\n  Text </article></body>";
        let doc = Document::parse(html).unwrap();
        assert_eq!(doc.article_text(), "Artikel Text");
    }

    #[test]
    fn test_article_text_selector_order() {
        let html = r#"<body><div id="content">Id</div><div class="post">Klasse</div></body>"#;
        let doc = Document::parse(html).unwrap();
        assert_eq!(doc.article_text(), "Klasse");
    }

    #[test]
    fn test_article_text_falls_back_to_body() {
        let text = Document::article_text_from_html(SAMPLE_HTML);
        assert!(!text.contains("Kopfbereich"));
        assert!(text.starts_with("Überschrift Absatz 1 Absatz 2"));
    }

    #[test]
    fn test_article_text_joins_inline_nodes() {
        let html = "<article><p>Eins</p><p>Zwei <b>drei</b></p></article>";
        assert_eq!(Document::article_text_from_html(html), "Eins Zwei drei");
    }

    #[test]
    fn test_article_text_empty() {
        assert_eq!(Document::article_text_from_html(""), "");
        assert_eq!(Document::article_text_from_html("<script>var x;</script>"), "");
    }
}
