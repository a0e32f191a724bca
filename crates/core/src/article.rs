//! Per-article analysis.
//!
//! This module defines [`ArticleAnalysis`], the complete result of analysing
//! one fetched page: extracted text metrics, readability, complexity,
//! content type, keywords and internal links.

use serde::Serialize;

use crate::complexity::{ComplexityAssessment, assess_complexity};
use crate::content_type::{ContentType, detect_content_type};
use crate::keywords::{Keyword, extract_keywords};
use crate::links::extract_internal_links;
use crate::profile::ScoringProfile;
use crate::readability::{HixScorer, ReadabilityVerdict};
use crate::text::count_words;
use crate::{Document, LesbarError, Result};

/// Extracted text shorter than this many characters is not analysed.
pub const DEFAULT_MIN_TEXT_LENGTH: usize = 100;

/// Keywords kept per article.
pub const KEYWORDS_PER_ARTICLE: usize = 15;

/// The complete analysis of one article.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleAnalysis {
    pub url: String,
    pub title: Option<String>,
    /// Length of the extracted text in characters.
    pub text_length: usize,
    pub word_count: usize,
    pub complexity: ComplexityAssessment,
    /// Verdict without breakdown.
    pub readability: ReadabilityVerdict,
    pub content_type: ContentType,
    pub keywords: Vec<Keyword>,
    pub internal_links: Vec<String>,
}

impl ArticleAnalysis {
    pub fn internal_link_count(&self) -> usize {
        self.internal_links.len()
    }

    /// Gets the analysis as structured JSON.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Analyses one article with the default minimum text length.
///
/// # Errors
///
/// Returns [`LesbarError::NoContent`] if the extracted text is shorter than
/// [`DEFAULT_MIN_TEXT_LENGTH`] characters.
///
/// # Example
///
/// ```rust
/// use lesbar_core::{ScoringProfile, analyze_article};
///
/// let html = "<article><p>Zu kurz.</p></article>";
/// let result = analyze_article("https://example.de/a/b", html, "example.de", &ScoringProfile::heuristic());
/// assert!(result.is_err());
/// ```
pub fn analyze_article(url: &str, html: &str, base_domain: &str, profile: &ScoringProfile) -> Result<ArticleAnalysis> {
    analyze_article_with(url, html, base_domain, profile, DEFAULT_MIN_TEXT_LENGTH)
}

/// Analyses one article with an explicit minimum text length.
pub fn analyze_article_with(
    url: &str, html: &str, base_domain: &str, profile: &ScoringProfile, min_text_length: usize,
) -> Result<ArticleAnalysis> {
    let text = Document::article_text_from_html(html);
    let text_length = text.chars().count();
    if text_length < min_text_length {
        tracing::debug!(url, text_length, min_text_length, "article text too short");
        return Err(LesbarError::NoContent);
    }

    let doc = Document::parse(html)?;
    let readability = HixScorer::with_profile(profile.clone()).score(&text).summary();
    let complexity = assess_complexity(&text);

    let analysis = ArticleAnalysis {
        url: url.to_string(),
        title: doc.extract_title(),
        text_length,
        word_count: count_words(&text),
        complexity,
        readability,
        content_type: detect_content_type(url, &doc, &text),
        keywords: extract_keywords(&text, KEYWORDS_PER_ARTICLE),
        internal_links: extract_internal_links(&doc, base_domain),
    };

    tracing::debug!(
        url,
        words = analysis.word_count,
        hix = analysis.readability.hix,
        complexity = analysis.complexity.score,
        "analyzed article"
    );

    Ok(analysis)
}
