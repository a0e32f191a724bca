//! Sitemap URL extraction and article filtering.
//!
//! Sitemaps are read as plain text: every absolute `http(s)` URL in the file
//! is a candidate, which makes both XML sitemaps and exported HTML sitemap
//! pages work.

use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::{LesbarError, Result};

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"https?://[^\s<>"'()]+"#).expect("valid sitemap URL regex"));

/// URL fragments marking pages that are not articles.
pub const DEFAULT_EXCLUSIONS: &[&str] = &[
    "404", "impressum", "datenschutz", "kontakt", "suche", "search", "kategorie", "category", "tag", "author", "page",
    "feed", "sitemap", "login", "register", "profil", "ueber-uns", "/start", "/home", "startseite",
];

/// Minimum number of `/` characters for a URL to be treated as an article.
/// `https://host/section/slug` has four.
const MIN_SLASHES: usize = 4;

/// Extracts unique absolute URLs from sitemap content.
///
/// Duplicates are detected ignoring trailing slashes; the first spelling is
/// kept. `w3.org` URLs (XML namespaces and schemas) are skipped.
pub fn extract_urls(content: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut urls = Vec::new();

    for m in URL_RE.find_iter(content) {
        let url = m.as_str();
        if url.contains("w3.org") {
            continue;
        }
        if seen.insert(url.trim_end_matches('/').to_string()) {
            urls.push(url.to_string());
        }
    }

    urls
}

/// Keeps URLs deep enough to be articles and free of excluded keywords.
///
/// Keyword matching is a case-insensitive substring test on the whole URL.
pub fn filter_article_urls<S: AsRef<str>>(urls: &[String], exclusions: &[S]) -> Vec<String> {
    urls.iter()
        .filter(|url| url.matches('/').count() >= MIN_SLASHES)
        .filter(|url| {
            let lower = url.to_lowercase();
            !exclusions.iter().any(|keyword| lower.contains(&keyword.as_ref().to_lowercase()))
        })
        .cloned()
        .collect()
}

/// Reads a sitemap file from disk.
///
/// # Errors
///
/// Returns [`LesbarError::FileNotFound`] if the file does not exist,
/// [`LesbarError::SitemapError`] if it is not valid UTF-8, or
/// [`LesbarError::IoError`] for other read failures.
pub fn load_sitemap(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(LesbarError::FileNotFound(path.to_path_buf()));
    }
    let bytes = std::fs::read(path)?;
    String::from_utf8(bytes)
        .map_err(|e| LesbarError::SitemapError(format!("{} is not valid UTF-8: {}", path.display(), e)))
}

/// Loads a sitemap and returns its filtered article URLs.
///
/// A sitemap without any URLs yields an empty list.
///
/// # Errors
///
/// Returns any error from [`load_sitemap`].
pub fn article_urls_from_sitemap<S: AsRef<str>>(path: &Path, exclusions: &[S]) -> Result<Vec<String>> {
    let content = load_sitemap(path)?;
    let urls = extract_urls(&content);

    let articles = filter_article_urls(&urls, exclusions);
    tracing::debug!(path = %path.display(), total = urls.len(), articles = articles.len(), "loaded sitemap");
    Ok(articles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SITEMAP: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <url><loc>https://example.de/blog/ki-in-der-verwaltung/</loc></url>
  <url><loc>https://example.de/blog/ki-in-der-verwaltung</loc></url>
  <url><loc>https://example.de/impressum/</loc></url>
  <url><loc>https://example.de/</loc></url>
  <url><loc>https://example.de/projekte/civic-tech/</loc></url>
</urlset>"#;

    #[test]
    fn test_extract_urls_dedups_trailing_slash() {
        let urls = extract_urls(SITEMAP);
        assert_eq!(urls, vec![
            "http://www.sitemaps.org/schemas/sitemap/0.9",
            "https://example.de/blog/ki-in-der-verwaltung/",
            "https://example.de/impressum/",
            "https://example.de/",
            "https://example.de/projekte/civic-tech/",
        ]);
    }

    #[test]
    fn test_extract_urls_skips_w3() {
        assert!(extract_urls(SITEMAP).iter().all(|u| !u.contains("w3.org")));
    }

    #[test]
    fn test_extract_urls_from_html() {
        let html = r#"<ul><li><a href="https://example.de/a/b/">A</a></li><li>(https://example.de/c/d)</li></ul>"#;
        assert_eq!(extract_urls(html), vec!["https://example.de/a/b/", "https://example.de/c/d"]);
    }

    #[test]
    fn test_filter_requires_depth() {
        let urls = extract_urls(SITEMAP);
        let filtered = filter_article_urls(&urls, DEFAULT_EXCLUSIONS);
        assert_eq!(filtered, vec![
            "https://example.de/blog/ki-in-der-verwaltung/",
            "https://example.de/projekte/civic-tech/",
        ]);
    }

    #[test]
    fn test_filter_exclusions_case_insensitive() {
        let urls = vec![
            "https://example.de/Kontakt/formular".to_string(),
            "https://example.de/blog/Tagung-2024".to_string(),
            "https://example.de/blog/verwaltung".to_string(),
        ];
        // "tag" also matches "Tagung"
        let filtered = filter_article_urls(&urls, DEFAULT_EXCLUSIONS);
        assert_eq!(filtered, vec!["https://example.de/blog/verwaltung"]);
    }

    #[test]
    fn test_filter_custom_exclusions() {
        let urls = vec!["https://example.de/blog/a".to_string(), "https://example.de/news/b".to_string()];
        let filtered = filter_article_urls(&urls, &["news".to_string()]);
        assert_eq!(filtered, vec!["https://example.de/blog/a"]);
    }

    #[test]
    fn test_load_sitemap_missing() {
        let result = load_sitemap(Path::new("/nonexistent/sitemap.xml"));
        assert!(matches!(result, Err(LesbarError::FileNotFound(_))));
    }

    #[test]
    fn test_article_urls_from_sitemap() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SITEMAP.as_bytes()).unwrap();

        let urls = article_urls_from_sitemap(file.path(), DEFAULT_EXCLUSIONS).unwrap();
        assert_eq!(urls.len(), 2);
    }

    #[test]
    fn test_article_urls_from_empty_sitemap() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"<urlset></urlset>").unwrap();

        let urls = article_urls_from_sitemap(file.path(), DEFAULT_EXCLUSIONS).unwrap();
        assert!(urls.is_empty());
    }

    #[test]
    fn test_load_sitemap_rejects_invalid_utf8() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0x3c, 0x75, 0xff, 0xfe]).unwrap();

        let result = load_sitemap(file.path());
        assert!(matches!(result, Err(LesbarError::SitemapError(_))));
    }
}
