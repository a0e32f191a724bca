//! SEO and local search audit of a single page.
//!
//! [`audit_html`] combines five signal groups into an [`AuditReport`] with an
//! overall score from 0 to 100 and a short list of recommendations:
//!
//! - [`technical`]: title, description, headings, links, structured data
//! - [`content`]: reading ease, authority links, E-A-T signals
//! - [`intent`]: search intent classification
//! - [`geo`]: local SEO signals
//! - [`modern`]: AI-overview exposure, brand, UX and keyword density
//!
//! # Example
//!
//! ```rust
//! use lesbar_core::audit::audit_html;
//!
//! let html = "<html><head><title>Kurz</title></head><body><p>Ein Satz.</p></body></html>";
//! let report = audit_html("https://example.de/seite", html, None).unwrap();
//! assert!(report.score <= 100);
//! assert!(!report.recommendations.is_empty());
//! ```

pub mod content;
pub mod geo;
pub mod intent;
pub mod modern;
pub mod technical;

use std::fmt;

use serde::Serialize;

use crate::parse::Document;
use crate::profile::ScoringProfile;
use crate::{LesbarError, Result};

pub use content::{ContentQuality, EatSignals, FleschBand, MIN_EAT_SIGNALS, analyze_content};
pub use geo::{GeoSignals, analyze_geo};
pub use intent::{Intent, IntentScore, SearchIntent, classify_intent};
pub use modern::{AiOverviewRisk, BrandSignals, KeywordDensity, ModernSignals, UxElements, analyze_modern};
pub use technical::{MIN_WORD_COUNT, TechnicalSeo, analyze_technical};

/// Recommendations listed at most.
pub const MAX_RECOMMENDATIONS: usize = 8;

const MIN_FLESCH: f64 = 40.0;
const MIN_ALT_RATIO: f64 = 80.0;
const LOCAL_SEO_THRESHOLD: u8 = 5;

/// Overall rating band of the audit score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditRating {
    Excellent,
    Good,
    Average,
    Weak,
}

impl AuditRating {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => AuditRating::Excellent,
            60..=79 => AuditRating::Good,
            40..=59 => AuditRating::Average,
            _ => AuditRating::Weak,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AuditRating::Excellent => "very well optimised",
            AuditRating::Good => "good, with room for improvement",
            AuditRating::Average => "average, needs clear optimisation",
            AuditRating::Weak => "weakly optimised, needs a fundamental rework",
        }
    }
}

impl fmt::Display for AuditRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Full audit of one page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditReport {
    pub url: String,
    /// 0 to 100.
    pub score: u8,
    pub rating: AuditRating,
    pub technical: TechnicalSeo,
    pub content: ContentQuality,
    pub intent: SearchIntent,
    pub geo: GeoSignals,
    pub modern: ModernSignals,
    pub recommendations: Vec<String>,
}

impl AuditReport {
    /// Gets the report as structured JSON.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Audits a page from its HTML.
///
/// `load_time` is the fetch duration in seconds, if known. The main text is
/// the article text after boilerplate removal.
///
/// # Errors
///
/// Returns [`LesbarError::InvalidUrl`] if `url` is not an absolute URL.
#[tracing::instrument(skip(html), fields(bytes = html.len()))]
pub fn audit_html(url: &str, html: &str, load_time: Option<f64>) -> Result<AuditReport> {
    url::Url::parse(url).map_err(|e| LesbarError::InvalidUrl(format!("{}: {}", url, e)))?;

    let main_text = Document::article_text_from_html(html);
    let doc = Document::parse(html)?;
    let profile = ScoringProfile::heuristic();

    let technical = analyze_technical(url, &doc, &main_text, load_time);
    let content = analyze_content(&doc, &main_text, &profile);
    let intent = classify_intent(&doc, &main_text);
    let geo = analyze_geo(&doc, &main_text);
    let modern = analyze_modern(&doc, &main_text);

    let score = overall_score(&technical, &content, &geo);
    let recommendations = recommendations(&technical, &content, &intent, &geo);
    tracing::debug!(score, words = technical.word_count, "audited page");

    Ok(AuditReport {
        url: url.to_string(),
        score,
        rating: AuditRating::from_score(score),
        technical,
        content,
        intent,
        geo,
        modern,
        recommendations,
    })
}

/// Fetches a page and audits it, recording the load time.
#[cfg(feature = "fetch")]
pub async fn audit_url(url: &str, config: &crate::fetch::FetchConfig) -> Result<AuditReport> {
    let page = crate::fetch::fetch_url_timed(url, config).await?;
    audit_html(url, &page.body, Some(page.elapsed))
}

/// Technical 40, content 30, GEO 20 points; capped at 100.
pub fn overall_score(technical: &TechnicalSeo, content: &ContentQuality, geo: &GeoSignals) -> u8 {
    let checks: [(bool, u8); 8] = [
        (technical.title.optimal, 10),
        (technical.meta_description.optimal, 10),
        (technical.https, 5),
        (technical.mobile_friendly, 5),
        (technical.word_count >= MIN_WORD_COUNT, 10),
        (content.flesch_score >= MIN_FLESCH, 10),
        (content.authority_links > 0, 10),
        (content.eat_signals.count() >= MIN_EAT_SIGNALS, 10),
    ];

    let points: u8 = checks.iter().filter(|(hit, _)| *hit).map(|(_, p)| p).sum();
    points.saturating_add(geo.score.saturating_mul(2)).min(100)
}

fn recommendations(
    technical: &TechnicalSeo, content: &ContentQuality, intent: &SearchIntent, geo: &GeoSignals,
) -> Vec<String> {
    let mut recs = Vec::new();

    if !technical.title.optimal {
        recs.push(format!("Optimise the title ({} characters, optimal: 50-60)", technical.title.length));
    }
    if !technical.meta_description.optimal {
        recs.push(format!(
            "Optimise the meta description ({} characters, optimal: 150-160)",
            technical.meta_description.length
        ));
    }
    if technical.word_count < MIN_WORD_COUNT {
        recs.push(format!(
            "Expand the content ({} words, at least {} recommended)",
            technical.word_count,
            MIN_WORD_COUNT
        ));
    }
    if technical.images.alt_ratio < MIN_ALT_RATIO {
        recs.push("Add alt text to all images".to_string());
    }
    if content.authority_links == 0 {
        recs.push("Link to authoritative sources (Wikipedia, .gov, .edu)".to_string());
    }
    if content.eat_signals.count() < MIN_EAT_SIGNALS {
        recs.push("Strengthen E-A-T: name the author, link the about page and imprint".to_string());
    }
    if geo.score < LOCAL_SEO_THRESHOLD && intent.primary == Intent::VisitInPerson {
        recs.push("Improve local SEO: name, address and phone, Google Maps, schema.org LocalBusiness".to_string());
    }
    if technical.structured_data.is_empty() {
        recs.push("Add structured data (schema.org)".to_string());
    }

    recs.truncate(MAX_RECOMMENDATIONS);
    recs
}
