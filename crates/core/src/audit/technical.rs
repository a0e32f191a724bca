//! On-page technical signals.

use serde::Serialize;

use crate::links::{domain_of, is_external_link};
use crate::parse::Document;
use crate::text::count_words;

/// Optimal title length in characters.
pub const TITLE_OPTIMAL: std::ops::RangeInclusive<usize> = 50..=60;

/// Optimal meta description length in characters.
pub const DESCRIPTION_OPTIMAL: std::ops::RangeInclusive<usize> = 150..=160;

/// Words of main content below which a page counts as thin.
pub const MIN_WORD_COUNT: usize = 300;

const HEADING_SAMPLES: usize = 3;
const HEADING_SAMPLE_CHARS: usize = 50;

/// Presence and length of a text tag like `<title>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextTagCheck {
    pub exists: bool,
    pub text: String,
    /// Length in characters.
    pub length: usize,
    pub optimal: bool,
}

impl TextTagCheck {
    fn new(text: Option<String>, optimal: &std::ops::RangeInclusive<usize>) -> Self {
        let exists = text.is_some();
        let text = text.unwrap_or_default();
        let length = text.chars().count();
        Self { exists, optimal: exists && optimal.contains(&length), text, length }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingLevel {
    pub level: u8,
    pub count: usize,
    /// Up to three headings, each cut to 50 characters.
    pub samples: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageStats {
    pub total: usize,
    pub with_alt: usize,
    /// Percentage of images with a non-empty `alt`; 0 without images.
    pub alt_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkStats {
    pub internal: usize,
    pub external: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechnicalSeo {
    pub title: TextTagCheck,
    pub meta_description: TextTagCheck,
    pub headings: Vec<HeadingLevel>,
    pub word_count: usize,
    pub images: ImageStats,
    pub links: LinkStats,
    pub https: bool,
    pub mobile_friendly: bool,
    /// Seconds; absent when auditing a local file.
    pub load_time: Option<f64>,
    /// JSON-LD `@type`s.
    pub structured_data: Vec<String>,
}

impl TechnicalSeo {
    pub fn heading(&self, level: u8) -> Option<&HeadingLevel> {
        self.headings.iter().find(|h| h.level == level)
    }
}

pub fn analyze_technical(url: &str, doc: &Document, main_text: &str, load_time: Option<f64>) -> TechnicalSeo {
    let title = doc.title().map(|t| t.trim().to_string());
    let description = match doc.select_first("meta[name=\"description\"]") {
        Ok(Some(meta)) => Some(meta.attr("content").unwrap_or_default().to_string()),
        _ => None,
    };

    TechnicalSeo {
        title: TextTagCheck::new(title, &TITLE_OPTIMAL),
        meta_description: TextTagCheck::new(description, &DESCRIPTION_OPTIMAL),
        headings: (1..=6).map(|level| heading_level(doc, level)).collect(),
        word_count: count_words(main_text),
        images: image_stats(doc),
        links: link_stats(doc, &domain_of(url)),
        https: url.starts_with("https://"),
        mobile_friendly: doc.count("meta[name=\"viewport\"]") > 0,
        load_time,
        structured_data: doc.json_ld_types(),
    }
}

fn heading_level(doc: &Document, level: u8) -> HeadingLevel {
    let headings = doc.select(&format!("h{}", level)).unwrap_or_default();
    let samples = headings
        .iter()
        .take(HEADING_SAMPLES)
        .map(|h| h.clean_text().chars().take(HEADING_SAMPLE_CHARS).collect())
        .collect();

    HeadingLevel { level, count: headings.len(), samples }
}

fn image_stats(doc: &Document) -> ImageStats {
    let images = doc.select("img").unwrap_or_default();
    let with_alt = images
        .iter()
        .filter(|img| img.attr("alt").is_some_and(|alt| !alt.trim().is_empty()))
        .count();
    let alt_ratio = if images.is_empty() { 0.0 } else { with_alt as f64 / images.len() as f64 * 100.0 };

    ImageStats { total: images.len(), with_alt, alt_ratio }
}

fn link_stats(doc: &Document, domain: &str) -> LinkStats {
    let anchors = doc.select("a[href]").unwrap_or_default();
    let hrefs: Vec<&str> = anchors.iter().filter_map(|a| a.attr("href")).collect();

    let internal = hrefs
        .iter()
        .filter(|href| href.starts_with('/') || (!domain.is_empty() && href.contains(domain)))
        .count();
    let external = hrefs.iter().filter(|href| is_external_link(href, domain)).count();

    LinkStats { internal, external, total: hrefs.len() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const PAGE: &str = r#"
        <html>
        <head>
            <title>Offene Daten für Kommunen: Leitfaden und Praxisbeispiele</title>
            <meta name="description" content="Kurz.">
            <meta name="viewport" content="width=device-width">
            <script type="application/ld+json">{"@type": "Article"}</script>
        </head>
        <body>
            <h1>Offene Daten</h1>
            <h2>Erstens</h2><h2>Zweitens</h2><h2>Drittens</h2><h2>Viertens</h2>
            <img src="a.png" alt="Karte"><img src="b.png" alt=""><img src="c.png">
            <a href="/themen">Themen</a>
            <a href="https://example.de/blog">Blog</a>
            <a href="https://de.wikipedia.org/wiki/Open_Data">Wikipedia</a>
            <a href="mailto:info@kommune.de">Mail</a>
        </body>
        </html>
    "#;

    fn audit() -> TechnicalSeo {
        let doc = Document::parse(PAGE).unwrap();
        analyze_technical("https://example.de/blog/offene-daten", &doc, "Ein paar Worte Text.", Some(0.42))
    }

    #[test]
    fn test_title_and_description() {
        let seo = audit();
        assert!(seo.title.exists);
        assert_eq!(seo.title.length, 56);
        assert!(seo.title.optimal);
        assert!(seo.meta_description.exists);
        assert_eq!(seo.meta_description.length, 5);
        assert!(!seo.meta_description.optimal);
    }

    #[test]
    fn test_headings() {
        let seo = audit();
        assert_eq!(seo.headings.len(), 6);
        assert_eq!(seo.heading(1).unwrap().samples, vec!["Offene Daten"]);
        let h2 = seo.heading(2).unwrap();
        assert_eq!(h2.count, 4);
        assert_eq!(h2.samples.len(), 3);
        assert_eq!(seo.heading(6).unwrap().count, 0);
    }

    #[test]
    fn test_images_and_links() {
        let seo = audit();
        assert_eq!(seo.images.total, 3);
        assert_eq!(seo.images.with_alt, 1);
        assert_relative_eq!(seo.images.alt_ratio, 100.0 / 3.0);
        assert_eq!(seo.links, LinkStats { internal: 2, external: 1, total: 4 });
    }

    #[test]
    fn test_flags() {
        let seo = audit();
        assert!(seo.https);
        assert!(seo.mobile_friendly);
        assert_eq!(seo.word_count, 4);
        assert_eq!(seo.load_time, Some(0.42));
        assert_eq!(seo.structured_data, vec!["Article"]);
    }

    #[test]
    fn test_missing_tags() {
        let doc = Document::parse("<html><body><p>Nur Text</p></body></html>").unwrap();
        let seo = analyze_technical("http://example.de/a/b", &doc, "Nur Text", None);
        assert!(!seo.title.exists);
        assert!(!seo.title.optimal);
        assert!(!seo.meta_description.exists);
        assert!(!seo.https);
        assert!(!seo.mobile_friendly);
        assert_relative_eq!(seo.images.alt_ratio, 0.0);
    }
}
