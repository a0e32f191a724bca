//! AI-overview exposure, brand, UX and keyword density signals.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::keywords::most_common;
use crate::parse::Document;
use crate::text::words;

/// Keyword density above this percentage counts as stuffing.
pub const STUFFING_THRESHOLD: f64 = 3.0;

const OPENING_CHARS: usize = 500;
const DENSITY_WINDOW: usize = 10_000;
const DEFINITION_CUES: &[&str] = &["ist", "sind", "bedeutet", "definition"];
const SOCIAL_NETWORKS: &[&str] = &["facebook", "twitter", "linkedin", "instagram"];

static BRAND_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-ZÄÖÜ][a-zäöüß]{2,}\s(GmbH|AG|eV|e\.V\.)\b").expect("valid brand regex")
});

/// Likelihood that a search engine answers the query without a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AiOverviewRisk {
    Low,
    Medium,
    High,
}

impl AiOverviewRisk {
    fn from_cues(cues: usize) -> Self {
        match cues {
            0..=1 => AiOverviewRisk::Low,
            2 => AiOverviewRisk::Medium,
            _ => AiOverviewRisk::High,
        }
    }
}

impl fmt::Display for AiOverviewRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AiOverviewRisk::Low => "low",
            AiOverviewRisk::Medium => "medium",
            AiOverviewRisk::High => "high",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrandSignals {
    /// An image whose `alt` mentions a logo.
    pub logo: bool,
    /// Names followed by a German legal form.
    pub brand_mentions: usize,
    pub social_links: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UxElements {
    pub lists: usize,
    pub tables: usize,
    pub images: usize,
    /// `<video>` and `<iframe>` elements.
    pub videos: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordDensity {
    pub top_word: String,
    /// Rounded to two decimals.
    pub density_percent: f64,
    pub stuffing_risk: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModernSignals {
    pub ai_overview_risk: AiOverviewRisk,
    pub brand: BrandSignals,
    pub ux: UxElements,
    /// `None` when the text has no word longer than three letters.
    pub keyword_density: Option<KeywordDensity>,
}

pub fn analyze_modern(doc: &Document, main_text: &str) -> ModernSignals {
    let opening = main_text.chars().take(OPENING_CHARS).collect::<String>().to_lowercase();
    let cues = DEFINITION_CUES.iter().filter(|cue| opening.contains(*cue)).count();

    ModernSignals {
        ai_overview_risk: AiOverviewRisk::from_cues(cues),
        brand: brand_signals(doc, main_text),
        ux: UxElements {
            lists: doc.count("ul, ol"),
            tables: doc.count("table"),
            images: doc.count("img"),
            videos: doc.count("video, iframe"),
        },
        keyword_density: keyword_density(main_text),
    }
}

fn brand_signals(doc: &Document, main_text: &str) -> BrandSignals {
    let logo = doc
        .select("img[alt]")
        .unwrap_or_default()
        .iter()
        .any(|img| img.attr("alt").is_some_and(|alt| alt.to_lowercase().contains("logo")));

    let social_links = doc
        .select("a[href]")
        .unwrap_or_default()
        .iter()
        .filter_map(|a| a.attr("href"))
        .filter(|href| SOCIAL_NETWORKS.iter().any(|s| href.contains(s)))
        .count();

    BrandSignals { logo, brand_mentions: BRAND_RE.find_iter(main_text).count(), social_links }
}

/// Density of the most frequent alphabetic word longer than three letters.
pub fn keyword_density(text: &str) -> Option<KeywordDensity> {
    let window: String = text.chars().take(DENSITY_WINDOW).collect();
    let candidates: Vec<String> = words(&window)
        .into_iter()
        .filter(|w| w.chars().count() > 3 && w.chars().all(char::is_alphabetic))
        .map(str::to_lowercase)
        .collect();

    let total = candidates.len();
    let (top_word, count) = most_common(candidates, Some(1)).into_iter().next()?;
    let density = count as f64 / total as f64 * 100.0;

    Some(KeywordDensity {
        top_word,
        density_percent: (density * 100.0).round() / 100.0,
        stuffing_risk: density > STUFFING_THRESHOLD,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ai_overview_risk() {
        let doc = Document::parse("<body></body>").unwrap();
        let high = analyze_modern(&doc, "Open Data ist ein Begriff. Offene Daten sind frei. Das bedeutet Transparenz.");
        assert_eq!(high.ai_overview_risk, AiOverviewRisk::High);

        let low = analyze_modern(&doc, "Heute regnet es.");
        assert_eq!(low.ai_overview_risk, AiOverviewRisk::Low);
    }

    #[test]
    fn test_brand_and_ux() {
        let html = r#"
            <body>
                <img src="logo.svg" alt="Firmen-Logo">
                <ul><li>Eins</li></ul><ol><li>Zwei</li></ol>
                <table><tr><td>1</td></tr></table>
                <iframe src="https://video.example.de"></iframe>
                <a href="https://www.linkedin.com/company/beispiel">LinkedIn</a>
                <a href="https://instagram.com/beispiel">Instagram</a>
            </body>
        "#;
        let doc = Document::parse(html).unwrap();
        let signals = analyze_modern(&doc, "Die Muster GmbH und die Beispiel AG arbeiten zusammen.");

        assert!(signals.brand.logo);
        assert_eq!(signals.brand.brand_mentions, 2);
        assert_eq!(signals.brand.social_links, 2);
        assert_eq!(signals.ux, UxElements { lists: 2, tables: 1, images: 1, videos: 1 });
    }

    #[test]
    fn test_keyword_density() {
        let density = keyword_density("Daten Daten Daten über Städte und Daten").unwrap();
        assert_eq!(density.top_word, "daten");
        assert_relative_eq!(density.density_percent, 66.67);
        assert!(density.stuffing_risk);
    }

    #[test]
    fn test_keyword_density_without_long_words() {
        assert!(keyword_density("Ja, so ist es.").is_none());
    }
}
