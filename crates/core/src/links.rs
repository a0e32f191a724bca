//! Link classification.

use url::Url;

use crate::parse::Document;

/// Internal links of a page.
///
/// A link is internal when its `href` contains `base_domain` or starts with
/// `/`. Root-relative hrefs are made absolute as `https://{domain}{href}`.
/// An empty `base_domain` matches only root-relative links.
pub fn extract_internal_links(doc: &Document, base_domain: &str) -> Vec<String> {
    let Ok(anchors) = doc.select("a[href]") else {
        return Vec::new();
    };

    anchors
        .iter()
        .filter_map(|a| a.attr("href"))
        .filter_map(|href| {
            if href.starts_with('/') {
                Some(format!("https://{}{}", base_domain, href))
            } else if !base_domain.is_empty() && href.contains(base_domain) {
                Some(href.to_string())
            } else {
                None
            }
        })
        .collect()
}

/// True if `href` points away from `base_domain`: an absolute `http(s)` URL
/// that does not contain the domain.
pub fn is_external_link(href: &str, base_domain: &str) -> bool {
    href.starts_with("http") && !href.starts_with('/') && (base_domain.is_empty() || !href.contains(base_domain))
}

/// Host of `url`, or an empty string if it does not parse.
pub fn domain_of(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_default()
}
