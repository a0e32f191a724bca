//! Heuristic page classification.

use std::fmt;

use serde::Serialize;

use crate::parse::Document;
use crate::text::count_words;

const DOWNLOAD_EXTENSIONS: &[&str] = &[".pdf", ".doc", ".docx", ".xls", ".xlsx", ".ppt", ".pptx"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    ProjectCaseStudy,
    NewsPress,
    Publication,
    ArticleBlog,
    StaticPage,
}

impl ContentType {
    pub fn label(&self) -> &'static str {
        match self {
            ContentType::ProjectCaseStudy => "Project/Case study",
            ContentType::NewsPress => "News/Press",
            ContentType::Publication => "Publication",
            ContentType::ArticleBlog => "Article/Blog",
            ContentType::StaticPage => "Page/Static",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn is_download_link(href: &str) -> bool {
    let lower = href.to_lowercase();
    DOWNLOAD_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

fn classify_url(url: &str) -> Option<ContentType> {
    let lower = url.to_lowercase();
    let has_any = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));

    if has_any(&["projekt", "project", "fallstudie", "case"]) {
        Some(ContentType::ProjectCaseStudy)
    } else if has_any(&["news", "presse", "aktuell"]) {
        Some(ContentType::NewsPress)
    } else if has_any(&["publikation", "download", "studie", "bericht"]) {
        Some(ContentType::Publication)
    } else {
        None
    }
}

/// Classifies a page from its URL, then from its structure.
///
/// URL keywords win. Otherwise: more than two document downloads make a
/// publication; more than 1000 words with more than three images an
/// article; more than 500 words a project page; fewer than 500 a static
/// page. Exactly 500 words falls through to article.
pub fn detect_content_type(url: &str, doc: &Document, text: &str) -> ContentType {
    if let Some(content_type) = classify_url(url) {
        return content_type;
    }

    let images = doc.count("img");
    let downloads = doc
        .select("a[href]")
        .map(|links| links.iter().filter(|a| a.attr("href").is_some_and(is_download_link)).count())
        .unwrap_or(0);
    let word_count = count_words(text);

    if downloads > 2 {
        ContentType::Publication
    } else if word_count > 1000 && images > 3 {
        ContentType::ArticleBlog
    } else if word_count > 500 {
        ContentType::ProjectCaseStudy
    } else if word_count < 500 {
        ContentType::StaticPage
    } else {
        ContentType::ArticleBlog
    }
}
