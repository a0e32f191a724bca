//! Per-site aggregation and cross-site summaries.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use serde::Serialize;

use crate::article::ArticleAnalysis;
use crate::content_type::ContentType;
use crate::keywords::most_common;
use crate::readability::HixBucket;

/// Number of themes kept per site by default.
pub const DEFAULT_TOP_THEMES: usize = 15;

/// Average internal links per article above which redirects need a plan.
const REDIRECT_LINK_THRESHOLD: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleLinks {
    pub url: String,
    pub link_count: usize,
    pub links: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ComplexityDistribution {
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
}

impl ComplexityDistribution {
    fn record(&mut self, score: u8) {
        match score {
            1 => self.easy += 1,
            2 => self.medium += 1,
            _ => self.hard += 1,
        }
    }
}

/// Aggregated results for one site.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteReport {
    pub name: String,
    /// Article URLs left after filtering the sitemap.
    pub total_articles: usize,
    pub successful_analyses: usize,
    pub failed: usize,
    pub average_word_count: f64,
    pub average_complexity: f64,
    pub average_hix: f64,
    /// Bucket of `average_hix`; `None` when nothing was analysed.
    pub average_hix_bucket: Option<HixBucket>,
    pub complexity_distribution: ComplexityDistribution,
    pub hix_scores: Vec<f64>,
    pub content_types: BTreeMap<ContentType, usize>,
    /// Keywords across all articles, most common first.
    pub top_themes: Vec<(String, usize)>,
    pub internal_links: Vec<ArticleLinks>,
    pub average_internal_links: f64,
}

fn mean<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    let (sum, n) = values.into_iter().fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if n == 0 { 0.0 } else { sum / n as f64 }
}

impl SiteReport {
    /// Aggregates analysed articles.
    ///
    /// `total_articles` is the number of candidate URLs and `failed` the
    /// number of those that could not be fetched or analysed.
    pub fn from_analyses(
        name: &str, total_articles: usize, failed: usize, analyses: &[ArticleAnalysis], top_themes: usize,
    ) -> Self {
        let mut complexity_distribution = ComplexityDistribution::default();
        let mut content_types = BTreeMap::new();

        for analysis in analyses {
            complexity_distribution.record(analysis.complexity.score);
            *content_types.entry(analysis.content_type).or_insert(0) += 1;
        }

        let hix_scores: Vec<f64> = analyses.iter().map(|a| a.readability.hix).collect();
        let average_hix = mean(hix_scores.iter().copied());
        let average_hix_bucket = (!analyses.is_empty()).then(|| HixBucket::from_score(average_hix));

        let themes = analyses
            .iter()
            .flat_map(|a| a.keywords.iter().map(|k| k.text.clone()));

        let internal_links: Vec<ArticleLinks> = analyses
            .iter()
            .map(|a| ArticleLinks { url: a.url.clone(), link_count: a.internal_link_count(), links: a.internal_links.clone() })
            .collect();

        Self {
            name: name.to_string(),
            total_articles,
            successful_analyses: analyses.len(),
            failed,
            average_word_count: mean(analyses.iter().map(|a| a.word_count as f64)),
            average_complexity: mean(analyses.iter().map(|a| a.complexity.score as f64)),
            average_hix,
            average_hix_bucket,
            complexity_distribution,
            hix_scores,
            content_types,
            top_themes: most_common(themes, Some(top_themes)),
            average_internal_links: mean(internal_links.iter().map(|l| l.link_count as f64)),
            internal_links,
        }
    }

    /// Zero-valued report for a site whose sitemap lists no articles.
    pub fn empty(name: &str) -> Self {
        Self::from_analyses(name, 0, 0, &[], 0)
    }

    /// Theme strings without counts.
    pub fn theme_set(&self) -> BTreeSet<&str> {
        self.top_themes.iter().map(|(t, _)| t.as_str()).collect()
    }

    /// Articles with the most internal links, highest first.
    pub fn most_linked(&self, n: usize) -> Vec<&ArticleLinks> {
        let mut sorted: Vec<&ArticleLinks> = self.internal_links.iter().collect();
        sorted.sort_by(|a, b| b.link_count.cmp(&a.link_count));
        sorted.truncate(n);
        sorted
    }
}

/// Shared top themes of one site pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeOverlap {
    pub first: String,
    pub second: String,
    /// Sorted alphabetically.
    pub shared: Vec<String>,
}

/// Shared top themes for every unordered pair of sites, in report order.
pub fn thematic_overlap(reports: &[SiteReport]) -> Vec<ThemeOverlap> {
    let mut overlaps = Vec::new();

    for (i, first) in reports.iter().enumerate() {
        let first_themes = first.theme_set();
        for second in &reports[i + 1..] {
            let shared = first_themes
                .intersection(&second.theme_set())
                .map(|t| t.to_string())
                .collect();
            overlaps.push(ThemeOverlap { first: first.name.clone(), second: second.name.clone(), shared });
        }
    }

    overlaps
}

/// Totals and article-weighted averages across all sites.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallSummary {
    pub total_articles: usize,
    pub total_analyzed: usize,
    pub total_failed: usize,
    pub average_word_count: f64,
    pub average_hix: f64,
    pub average_hix_bucket: Option<HixBucket>,
    pub average_internal_links: f64,
    /// Distinct content types seen on any site.
    pub content_type_diversity: usize,
    pub migration_hints: Vec<String>,
}

impl OverallSummary {
    pub fn from_reports(reports: &[SiteReport]) -> Self {
        let total_articles: usize = reports.iter().map(|r| r.total_articles).sum();
        let total_analyzed: usize = reports.iter().map(|r| r.successful_analyses).sum();

        let weighted = |f: fn(&SiteReport) -> f64| {
            if total_analyzed == 0 {
                0.0
            } else {
                reports.iter().map(|r| f(r) * r.successful_analyses as f64).sum::<f64>() / total_analyzed as f64
            }
        };

        let average_word_count = weighted(|r| r.average_word_count);
        let average_hix = weighted(|r| r.average_hix);
        let average_internal_links = weighted(|r| r.average_internal_links);

        let content_type_diversity = reports
            .iter()
            .flat_map(|r| r.content_types.keys())
            .collect::<HashSet<_>>()
            .len();

        let mut migration_hints = Vec::new();
        if total_analyzed > 0 {
            migration_hints.push(format!(
                "{} different content types: define a unified taxonomy",
                content_type_diversity
            ));
            if average_internal_links > REDIRECT_LINK_THRESHOLD {
                migration_hints.push(format!(
                    "{:.1} internal links per article: a redirect strategy is important",
                    average_internal_links
                ));
            } else {
                migration_hints.push(format!(
                    "{:.1} internal links per article: redirects are manageable",
                    average_internal_links
                ));
            }
        }

        Self {
            total_articles,
            total_analyzed,
            total_failed: total_articles.saturating_sub(total_analyzed),
            average_word_count,
            average_hix,
            average_hix_bucket: (total_analyzed > 0).then(|| HixBucket::from_score(average_hix)),
            average_internal_links,
            content_type_diversity,
            migration_hints,
        }
    }
}

/// A site that produced no report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedSite {
    pub name: String,
    pub reason: String,
}

/// Everything one analyzer run produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisRun {
    pub reports: Vec<SiteReport>,
    pub skipped: Vec<SkippedSite>,
    pub overlap: Vec<ThemeOverlap>,
    pub summary: OverallSummary,
}

impl AnalysisRun {
    /// Derives the overlap and summary from the site reports.
    pub fn from_reports(reports: Vec<SiteReport>, skipped: Vec<SkippedSite>) -> Self {
        let overlap = thematic_overlap(&reports);
        let summary = OverallSummary::from_reports(&reports);
        Self { reports, skipped, overlap, summary }
    }
}
