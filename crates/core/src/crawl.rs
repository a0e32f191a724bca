//! Sitemap-driven site analysis.
//!
//! [`SiteAnalyzer`] walks every configured site: it loads the sitemap,
//! filters article URLs, fetches each article sequentially with a politeness
//! delay, analyses it and aggregates the results into a [`SiteReport`].

use std::time::Duration;

use crate::article::analyze_article_with;
use crate::config::{AnalyzerConfig, SiteEntry};
use crate::fetch::{FetchConfig, fetch_url};
use crate::links::domain_of;
use crate::profile::ScoringProfile;
use crate::report::{AnalysisRun, SiteReport, SkippedSite};
use crate::sitemap::article_urls_from_sitemap;
use crate::{LesbarError, Result};

/// Analyses the sites of an [`AnalyzerConfig`].
#[derive(Debug, Clone)]
pub struct SiteAnalyzer {
    config: AnalyzerConfig,
    profile: ScoringProfile,
    fetch: FetchConfig,
}

impl SiteAnalyzer {
    /// Creates an analyzer using the profile named in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`LesbarError::ConfigError`] if the scoring profile cannot be
    /// loaded.
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        let profile = config.scoring_profile()?;
        Ok(Self::with_profile(config, profile))
    }

    /// Creates an analyzer with an already loaded profile.
    pub fn with_profile(config: AnalyzerConfig, profile: ScoringProfile) -> Self {
        let fetch = config.fetch_config();
        Self { config, profile, fetch }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyses every configured site in order.
    ///
    /// Sites whose sitemap cannot be read are recorded in
    /// [`AnalysisRun::skipped`] and do not stop the run.
    #[tracing::instrument(skip(self), fields(sites = self.config.sites.len()))]
    pub async fn analyze_all(&self) -> AnalysisRun {
        let mut reports = Vec::new();
        let mut skipped = Vec::new();

        for site in &self.config.sites {
            match self.analyze_site(site).await {
                Ok(report) => reports.push(report),
                Err(e) => {
                    tracing::warn!(site = %site.name, error = %e, "skipping site");
                    skipped.push(SkippedSite { name: site.name.clone(), reason: e.to_string() });
                }
            }
        }

        AnalysisRun::from_reports(reports, skipped)
    }

    /// Analyses one site.
    ///
    /// Articles that fail to fetch or are too short are counted as failed
    /// and skipped.
    ///
    /// # Errors
    ///
    /// Returns [`LesbarError::FileNotFound`] or [`LesbarError::SitemapError`]
    /// if the sitemap is missing or unreadable. A sitemap without article
    /// URLs yields a zero-valued report.
    #[tracing::instrument(skip(self), fields(site = %site.name))]
    pub async fn analyze_site(&self, site: &SiteEntry) -> Result<SiteReport> {
        let urls = article_urls_from_sitemap(&site.sitemap, &self.config.exclusions)?;
        if urls.is_empty() {
            tracing::info!("no article URLs in sitemap");
            return Ok(SiteReport::empty(&site.name));
        }

        let base_domain = urls.first().map(|u| domain_of(u)).unwrap_or_default();
        tracing::info!(articles = urls.len(), domain = %base_domain, "analyzing site");

        let delay = Duration::from_millis(self.config.delay_ms);
        let mut analyses = Vec::new();
        let mut failed = 0;

        for (i, url) in urls.iter().enumerate() {
            if i > 0 && !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }

            match self.analyze_url(url, &base_domain).await {
                Ok(analysis) => analyses.push(analysis),
                Err(e) => {
                    failed += 1;
                    match e {
                        LesbarError::NoContent => tracing::debug!(url = %url, "no usable article text"),
                        e => tracing::warn!(url = %url, error = %e, "article failed"),
                    }
                }
            }
        }

        Ok(SiteReport::from_analyses(&site.name, urls.len(), failed, &analyses, self.config.top_themes))
    }

    async fn analyze_url(&self, url: &str, base_domain: &str) -> Result<crate::ArticleAnalysis> {
        let html = fetch_url(url, &self.fetch).await?;
        analyze_article_with(url, &html, base_domain, &self.profile, self.config.min_text_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config_for(dir: &TempDir, sitemap: &str) -> AnalyzerConfig {
        let path = dir.path().join("sitemap.xml");
        fs::write(&path, sitemap).unwrap();
        AnalyzerConfig::builder().site("Testseite", path).delay_ms(0).timeout(2).build()
    }

    #[tokio::test]
    async fn test_missing_sitemap_is_skipped() {
        let config = AnalyzerConfig::builder()
            .site("Fehlt", "/nonexistent/sitemap.xml")
            .delay_ms(0)
            .build();
        let analyzer = SiteAnalyzer::with_profile(config, ScoringProfile::heuristic());

        let run = analyzer.analyze_all().await;

        assert!(run.reports.is_empty());
        assert_eq!(run.skipped.len(), 1);
        assert_eq!(run.skipped[0].name, "Fehlt");
        assert_eq!(run.summary.total_articles, 0);
    }

    #[tokio::test]
    async fn test_all_urls_excluded() {
        let dir = TempDir::new().unwrap();
        let config = config_for(
            &dir,
            "<urlset><url><loc>https://example.de/de/impressum/</loc></url>\
             <url><loc>https://example.de/de/kontakt/</loc></url></urlset>",
        );
        let analyzer = SiteAnalyzer::with_profile(config, ScoringProfile::heuristic());

        let run = analyzer.analyze_all().await;

        assert_eq!(run.reports.len(), 1);
        assert_eq!(run.reports[0].total_articles, 0);
        assert_eq!(run.reports[0].successful_analyses, 0);
        assert!(run.overlap.is_empty());
    }

    #[tokio::test]
    async fn test_empty_sitemap_reports_zero() {
        let dir = TempDir::new().unwrap();
        let config = config_for(&dir, "<urlset/>");
        let analyzer = SiteAnalyzer::with_profile(config, ScoringProfile::heuristic());

        let run = analyzer.analyze_all().await;

        assert!(run.skipped.is_empty());
        assert_eq!(run.reports, vec![SiteReport::empty("Testseite")]);
        assert_eq!(run.reports[0].average_hix, 0.0);
        assert!(run.reports[0].average_hix_bucket.is_none());
        assert_eq!(run.summary.total_articles, 0);
    }

    #[tokio::test]
    async fn test_unreachable_articles_count_as_failed() {
        let dir = TempDir::new().unwrap();
        let config = config_for(
            &dir,
            "<urlset><url><loc>http://127.0.0.1:9/blog/artikel-eins</loc></url>\
             <url><loc>http://127.0.0.1:9/blog/artikel-zwei</loc></url></urlset>",
        );
        let analyzer = SiteAnalyzer::with_profile(config, ScoringProfile::heuristic());

        let run = analyzer.analyze_all().await;

        let report = &run.reports[0];
        assert_eq!(report.total_articles, 2);
        assert_eq!(report.failed, 2);
        assert_eq!(report.successful_analyses, 0);
    }
}
