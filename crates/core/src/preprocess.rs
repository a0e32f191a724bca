//! HTML cleanup before text extraction.
//!
//! Boilerplate elements are removed with a streaming `lol_html` rewriter so
//! their text never reaches the readability statistics.

use std::sync::LazyLock;

use regex::Regex;

static COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("valid comment regex"));

/// Elements whose content is never article text.
pub const BOILERPLATE_TAGS: &[&str] = &["script", "style", "nav", "footer", "header", "aside", "form"];

/// Configuration for HTML preprocessing
#[derive(Debug, Clone)]
pub struct PreprocessConfig {
    /// Tags removed together with their content
    pub remove_tags: Vec<String>,
    /// Whether to remove HTML comments
    pub remove_comments: bool,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self { remove_tags: BOILERPLATE_TAGS.iter().map(|t| t.to_string()).collect(), remove_comments: true }
    }
}

/// Preprocess HTML by removing boilerplate elements and comments
pub fn preprocess_html(html: &str, config: &PreprocessConfig) -> String {
    let mut processed = if config.remove_tags.is_empty() {
        html.to_string()
    } else {
        remove_tags(html, &config.remove_tags)
    };

    if config.remove_comments {
        processed = COMMENT_RE.replace_all(&processed, "").to_string();
    }

    processed
}

/// Remove the given tags and everything inside them.
///
/// Invalid selectors are skipped. Falls back to the unmodified input if the
/// rewriter rejects the document.
fn remove_tags(html: &str, tags: &[String]) -> String {
    let mut output = String::new();
    let mut rewriter = lol_html::HtmlRewriter::new(
        lol_html::Settings {
            element_content_handlers: tags
                .iter()
                .filter(|tag| tag.parse::<lol_html::Selector>().is_ok())
                .map(|tag| {
                    lol_html::element!(tag.as_str(), |el| {
                        el.remove();
                        Ok(())
                    })
                })
                .collect(),
            ..Default::default()
        },
        |c: &[u8]| {
            output.push_str(&String::from_utf8_lossy(c));
        },
    );

    if rewriter.write(html.as_bytes()).is_err() {
        return html.to_string();
    }

    if rewriter.end().is_err() {
        return html.to_string();
    }

    if output.is_empty() { html.to_string() } else { output }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html>
            <head><script>alert('test');</script><style>body{color:red;}</style></head>
            <body>
                <header><a href="/">Startseite</a></header>
                <nav><ul><li>Menü</li></ul></nav>
                <!-- Tracking -->
                <article><p>Der eigentliche Inhalt.</p></article>
                <aside>Verwandte Artikel</aside>
                <form><input name="q"> Suche</form>
                <footer>Impressum</footer>
            </body>
        </html>
    "#;

    #[test]
    fn test_removes_boilerplate() {
        let result = preprocess_html(PAGE, &PreprocessConfig::default());

        for gone in ["alert", "color:red", "Startseite", "Menü", "Verwandte", "Suche", "Impressum", "Tracking"] {
            assert!(!result.contains(gone), "{} should be removed", gone);
        }
        assert!(result.contains("<p>Der eigentliche Inhalt.</p>"));
    }

    #[test]
    fn test_custom_tags() {
        let config = PreprocessConfig { remove_tags: vec!["aside".to_string()], remove_comments: false };
        let result = preprocess_html(PAGE, &config);

        assert!(!result.contains("Verwandte"));
        assert!(result.contains("Impressum"));
        assert!(result.contains("<!-- Tracking -->"));
    }

    #[test]
    fn test_no_tags_is_identity_without_comments() {
        let config = PreprocessConfig { remove_tags: vec![], remove_comments: false };
        assert_eq!(preprocess_html(PAGE, &config), PAGE);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(preprocess_html("", &PreprocessConfig::default()), "");
    }
}
