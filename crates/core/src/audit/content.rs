//! Content quality and E-A-T signals.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::formulas::amstad;
use crate::parse::Document;
use crate::profile::ScoringProfile;
use crate::text::TextStatistics;

/// Link targets counted as authority sources (substring match on the href).
pub const AUTHORITY_DOMAINS: &[&str] = &["wikipedia.org", "gov", "edu", "destatis.de", "bundesregierung.de"];

/// E-A-T signals needed before the content counts as trustworthy.
pub const MIN_EAT_SIGNALS: usize = 3;

static ABOUT_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(about|ueber|impressum)").expect("valid about link regex"));
static CONTACT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(kontakt|email|telefon)").expect("valid contact regex"));

/// Reading-ease band of the German Flesch score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FleschBand {
    VeryEasy,
    Easy,
    Medium,
    Hard,
    VeryHard,
}

impl FleschBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            FleschBand::VeryEasy
        } else if score >= 60.0 {
            FleschBand::Easy
        } else if score >= 40.0 {
            FleschBand::Medium
        } else if score >= 20.0 {
            FleschBand::Hard
        } else {
            FleschBand::VeryHard
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FleschBand::VeryEasy => "very easy",
            FleschBand::Easy => "easy",
            FleschBand::Medium => "medium",
            FleschBand::Hard => "hard",
            FleschBand::VeryHard => "very hard",
        }
    }
}

impl fmt::Display for FleschBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct EatSignals {
    /// An element with `author` in its class, or a byline in the page metadata.
    pub author_box: bool,
    /// A link to an about or imprint page.
    pub about_page: bool,
    /// Contact words anywhere in the page text.
    pub contact_info: bool,
    /// A `<time>` element, an element with `date` in its class, or a
    /// publish date in the page metadata.
    pub date_published: bool,
}

impl EatSignals {
    pub fn count(&self) -> usize {
        [self.author_box, self.about_page, self.contact_info, self.date_published]
            .iter()
            .filter(|&&s| s)
            .count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentQuality {
    /// Amstad reading ease of the main text; 0 when it cannot be computed.
    pub flesch_score: f64,
    /// `None` when the text has no words or sentences.
    pub flesch_band: Option<FleschBand>,
    pub authority_links: usize,
    pub eat_signals: EatSignals,
}

pub fn analyze_content(doc: &Document, main_text: &str, profile: &ScoringProfile) -> ContentQuality {
    let flesch = TextStatistics::compute(main_text, profile).map(|stats| amstad(&stats));

    let hrefs: Vec<String> = doc
        .select("a[href]")
        .unwrap_or_default()
        .iter()
        .filter_map(|a| a.attr("href").map(str::to_lowercase))
        .collect();

    let authority_links = hrefs
        .iter()
        .filter(|href| AUTHORITY_DOMAINS.iter().any(|d| href.contains(d)))
        .count();

    ContentQuality {
        flesch_score: flesch.unwrap_or(0.0),
        flesch_band: flesch.map(FleschBand::from_score),
        authority_links,
        eat_signals: eat_signals(doc, &hrefs),
    }
}

fn eat_signals(doc: &Document, hrefs: &[String]) -> EatSignals {
    let class_contains = |needle: &str| {
        doc.select("[class]")
            .unwrap_or_default()
            .iter()
            .any(|el| el.attr("class").is_some_and(|c| c.to_lowercase().contains(needle)))
    };

    EatSignals {
        author_box: class_contains("author") || doc.extract_author().is_some(),
        about_page: hrefs.iter().any(|href| ABOUT_LINK_RE.is_match(href)),
        contact_info: CONTACT_RE.is_match(&doc.text_content()),
        date_published: doc.count("time") > 0 || class_contains("date") || doc.extract_date().is_some(),
    }
}
