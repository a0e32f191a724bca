//! Title, byline and structured-data lookups used by article analyses and
//! the audit's E-A-T signals.

use serde_json::Value;

use crate::Document;

impl Document {
    /// Extract title with priority fallback:
    /// 1. `<title>` element
    /// 2. Open Graph `og:title`
    /// 3. First `<h1>` element
    pub fn extract_title(&self) -> Option<String> {
        if let Some(title) = self.title() {
            let title = title.trim();
            if !title.is_empty() {
                return Some(title.to_string());
            }
        }

        if let Some(title) = self.meta_content("og:title") {
            return Some(title);
        }

        if let Ok(Some(h1)) = self.select_first("h1") {
            let text = h1.clean_text();
            if !text.is_empty() {
                return Some(text);
            }
        }

        None
    }

    /// Extract author with priority fallback:
    /// 1. JSON-LD `author.name`
    /// 2. Meta `author`
    /// 3. `[rel="author"]` link text
    pub fn extract_author(&self) -> Option<String> {
        for json_ld in self.json_ld() {
            if let Some(author) = json_ld.get("author")
                && let Some(name) = author_from_json_ld(author)
            {
                return Some(name);
            }
        }

        if let Some(author) = self.meta_content("author") {
            return Some(author);
        }

        if let Ok(Some(el)) = self.select_first("[rel=\"author\"]") {
            let text = el.clean_text();
            if !text.is_empty() {
                return Some(text);
            }
        }

        None
    }

    /// Extract date with priority fallback:
    /// 1. JSON-LD `datePublished`
    /// 2. Meta `article:published_time`
    /// 3. `<time datetime="">` element
    pub fn extract_date(&self) -> Option<String> {
        for json_ld in self.json_ld() {
            if let Some(value) = json_ld.get("datePublished").and_then(Value::as_str) {
                return Some(value.to_string());
            }
        }

        if let Some(date) = self.meta_content("article:published_time") {
            return Some(date);
        }

        if let Ok(Some(time)) = self.select_first("time[datetime]")
            && let Some(datetime) = time.attr("datetime")
        {
            return Some(datetime.to_string());
        }

        None
    }

    /// Get meta tag content by name or property attribute
    pub fn meta_content(&self, attr: &str) -> Option<String> {
        for selector in [format!("meta[name=\"{}\"]", attr), format!("meta[property=\"{}\"]", attr)] {
            if let Ok(Some(el)) = self.select_first(&selector)
                && let Some(content) = el.attr("content")
            {
                return Some(content.to_string());
            }
        }

        None
    }

    /// All JSON-LD blocks that parse, with top-level arrays and `@graph`
    /// lists flattened into individual objects.
    pub fn json_ld(&self) -> Vec<Value> {
        let mut values = Vec::new();
        let Ok(scripts) = self.select("script[type=\"application/ld+json\"]") else {
            return values;
        };

        for script in scripts {
            if let Ok(value) = serde_json::from_str::<Value>(script.text().trim()) {
                flatten_json_ld(value, &mut values);
            }
        }

        values
    }

    /// The `@type` of every JSON-LD object; `Unknown` when missing.
    pub fn json_ld_types(&self) -> Vec<String> {
        self.json_ld()
            .iter()
            .flat_map(|value| match value.get("@type") {
                Some(Value::String(t)) => vec![t.clone()],
                Some(Value::Array(types)) => types.iter().filter_map(Value::as_str).map(str::to_string).collect(),
                _ => vec!["Unknown".to_string()],
            })
            .collect()
    }
}

fn flatten_json_ld(value: Value, out: &mut Vec<Value>) {
    match value {
        Value::Array(items) => {
            for item in items {
                flatten_json_ld(item, out);
            }
        }
        Value::Object(mut map) => {
            if let Some(Value::Array(graph)) = map.remove("@graph") {
                for item in graph {
                    flatten_json_ld(item, out);
                }
            }
            if !map.is_empty() && !(map.len() == 1 && map.contains_key("@context")) {
                out.push(Value::Object(map));
            }
        }
        _ => {}
    }
}

/// Handles string, object and array author values
fn author_from_json_ld(author: &Value) -> Option<String> {
    match author {
        Value::String(name) => Some(name.clone()),
        Value::Object(obj) => obj.get("name").and_then(Value::as_str).map(str::to_string),
        Value::Array(items) => items.first().and_then(author_from_json_ld),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HTML_WITH_META: &str = r#"
        <!DOCTYPE html>
        <html lang="de">
        <head>
            <title>KI in der Verwaltung</title>
            <meta name="description" content="Wie Behörden künstliche Intelligenz einsetzen.">
            <meta name="author" content="Erika Mustermann">
            <script type="application/ld+json">
            {
                "@context": "https://schema.org",
                "@type": "Article",
                "datePublished": "2024-03-01",
                "author": [{"@type": "Person", "name": "Max Beispiel"}]
            }
            </script>
        </head>
        <body><h1>KI in der Verwaltung</h1></body>
        </html>
    "#;

    #[test]
    fn test_extract_title_author_date() {
        let doc = Document::parse(HTML_WITH_META).unwrap();

        assert_eq!(doc.extract_title().as_deref(), Some("KI in der Verwaltung"));
        assert_eq!(doc.extract_author().as_deref(), Some("Max Beispiel"));
        assert_eq!(doc.extract_date().as_deref(), Some("2024-03-01"));
    }

    #[test]
    fn test_author_falls_back_to_meta() {
        let doc = Document::parse(r#"<head><meta name="author" content="Erika Mustermann"></head>"#).unwrap();
        assert_eq!(doc.extract_author().as_deref(), Some("Erika Mustermann"));
    }

    #[test]
    fn test_title_falls_back_to_h1() {
        let doc = Document::parse("<html><body><h1> Nur  Überschrift </h1></body></html>").unwrap();
        assert_eq!(doc.extract_title().as_deref(), Some("Nur Überschrift"));
    }

    #[test]
    fn test_meta_property() {
        let doc = Document::parse(r#"<meta property="og:description" content="OG">"#).unwrap();
        assert_eq!(doc.meta_content("og:description").as_deref(), Some("OG"));
    }

    #[test]
    fn test_date_from_time_element() {
        let doc = Document::parse(r#"<article><time datetime="2023-12-24">Heiligabend</time></article>"#).unwrap();
        assert_eq!(doc.extract_date().as_deref(), Some("2023-12-24"));
    }

    #[test]
    fn test_json_ld_types_flatten_graph_and_arrays() {
        let html = r#"
            <script type="application/ld+json">
                {"@context": "https://schema.org", "@graph": [{"@type": "WebPage"}, {"@type": ["LocalBusiness", "Store"]}]}
            </script>
            <script type="application/ld+json">[{"@type": "Organization"}, {"name": "ohne Typ"}]</script>
            <script type="application/ld+json">{ kaputt </script>
        "#;
        let doc = Document::parse(html).unwrap();
        assert_eq!(doc.json_ld_types(), vec!["WebPage", "LocalBusiness", "Store", "Organization", "Unknown"]);
    }

    #[test]
    fn test_no_metadata() {
        let doc = Document::parse("<p>Text</p>").unwrap();
        assert!(doc.extract_title().is_none());
        assert!(doc.extract_author().is_none());
        assert!(doc.extract_date().is_none());
        assert!(doc.json_ld_types().is_empty());
    }
}
