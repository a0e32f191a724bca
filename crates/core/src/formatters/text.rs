use std::fmt::Write;

use crate::audit::AuditReport;
use crate::formatters::json::ScoreOutput;
use crate::report::{AnalysisRun, SiteReport};

const RULE_WIDTH: usize = 70;
const MOST_LINKED: usize = 5;

/// Configuration for plain text output
#[derive(Debug, Clone, Default)]
pub struct TextConfig {
    /// Wrap long lists at specified width (0 = no wrapping)
    pub line_width: usize,

    /// Include per-formula values and text statistics
    pub include_breakdown: bool,
}

/// Plain text formatter for scores and reports
pub struct TextFormatter {
    config: TextConfig,
}

impl TextFormatter {
    pub fn new(config: TextConfig) -> Self {
        Self { config }
    }

    pub fn score(&self, output: &ScoreOutput) -> String {
        format_score(output, &self.config)
    }

    pub fn site_report(&self, report: &SiteReport) -> String {
        format_site_report(report, &self.config)
    }

    pub fn analysis(&self, run: &AnalysisRun) -> String {
        format_analysis(run, &self.config)
    }

    pub fn audit(&self, report: &AuditReport) -> String {
        format_audit(report, &self.config)
    }
}

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
}

fn check(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

/// Render a readability verdict
pub fn format_score(output: &ScoreOutput, config: &TextConfig) -> String {
    let mut out = String::new();
    let verdict = &output.verdict;

    match verdict.bucket {
        Some(bucket) => {
            let _ = writeln!(out, "HIX: {:.1} / 20 ({})", verdict.hix, bucket);
        }
        None => {
            let _ = writeln!(out, "HIX: not scored (no words or sentences)");
        }
    }

    if let Some(legacy) = &output.legacy {
        match legacy.bucket {
            Some(bucket) => {
                let _ = writeln!(out, "Legacy HIX: {:.1} ({})", legacy.hix, bucket);
            }
            None => {
                let _ = writeln!(out, "Legacy HIX: not scored");
            }
        }
    }

    if config.include_breakdown
        && let Some(breakdown) = &verdict.breakdown
    {
        let stats = &breakdown.statistics;
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Sentences: {}  Words: {}  Syllables: {}",
            stats.sentence_count, stats.word_count, stats.syllable_count
        );
        let _ = writeln!(
            out,
            "Words per sentence: {:.2}  Syllables per word: {:.2}  Long words: {:.1}%",
            stats.average_sentence_length, stats.average_syllables_per_word, stats.percent_long_words
        );
        let _ = writeln!(out);
        for score in &breakdown.formulas {
            let _ = writeln!(out, "{:<8} raw {:>8.2}  normalized {:>5.2}", score.formula.name(), score.raw, score.normalized);
        }
    }

    out.trim_end().to_string()
}

/// Render one site report
pub fn format_site_report(report: &SiteReport, config: &TextConfig) -> String {
    let mut out = String::new();
    heading(&mut out, &report.name);

    let _ = writeln!(
        out,
        "Articles: {} found, {} analyzed, {} failed",
        report.total_articles, report.successful_analyses, report.failed
    );

    if report.successful_analyses == 0 {
        return out.trim_end().to_string();
    }

    let _ = writeln!(out, "Average words: {:.0}", report.average_word_count);
    let _ = writeln!(out, "Average complexity: {:.2} / 3", report.average_complexity);
    if let Some(bucket) = report.average_hix_bucket {
        let _ = writeln!(out, "Average HIX: {:.1} / 20 ({})", report.average_hix, bucket);
    }

    let dist = &report.complexity_distribution;
    let _ = writeln!(out, "Complexity: {} easy, {} medium, {} hard", dist.easy, dist.medium, dist.hard);

    let _ = writeln!(out, "Content types:");
    for (content_type, count) in &report.content_types {
        let _ = writeln!(out, "  {}: {}", content_type, count);
    }

    if !report.top_themes.is_empty() {
        let themes: Vec<String> = report.top_themes.iter().map(|(t, n)| format!("{} ({})", t, n)).collect();
        let _ = writeln!(out, "Top themes:");
        let _ = writeln!(out, "{}", indent(&wrap_list(&themes, config.line_width), "  "));
    }

    let _ = writeln!(out, "Average internal links: {:.1}", report.average_internal_links);
    for links in report.most_linked(MOST_LINKED) {
        let _ = writeln!(out, "  {} ({})", links.url, links.link_count);
    }

    out.trim_end().to_string()
}

/// Render a complete analyzer run: per-site reports, overlap and summary
pub fn format_analysis(run: &AnalysisRun, config: &TextConfig) -> String {
    let mut out = String::new();

    for report in &run.reports {
        out.push_str(&format_site_report(report, config));
        out.push_str("\n\n");
    }

    for skipped in &run.skipped {
        let _ = writeln!(out, "Skipped {}: {}", skipped.name, skipped.reason);
    }

    if !run.overlap.is_empty() {
        heading(&mut out, "Thematic overlap");
        for overlap in &run.overlap {
            let shared = if overlap.shared.is_empty() { "none".to_string() } else { overlap.shared.join(", ") };
            let _ = writeln!(out, "{} / {}: {}", overlap.first, overlap.second, shared);
        }
        out.push('\n');
    }

    let summary = &run.summary;
    heading(&mut out, "Summary");
    let _ = writeln!(
        out,
        "Articles: {} found, {} analyzed, {} failed",
        summary.total_articles, summary.total_analyzed, summary.total_failed
    );
    if let Some(bucket) = summary.average_hix_bucket {
        let _ = writeln!(out, "Average HIX: {:.1} / 20 ({})", summary.average_hix, bucket);
        let _ = writeln!(out, "Average words: {:.0}", summary.average_word_count);
        let _ = writeln!(out, "Average internal links: {:.1}", summary.average_internal_links);
    }
    for hint in &summary.migration_hints {
        let _ = writeln!(out, "* {}", hint);
    }

    out.trim_end().to_string()
}

/// Render an SEO audit
pub fn format_audit(report: &AuditReport, config: &TextConfig) -> String {
    let mut out = String::new();
    let tech = &report.technical;
    let content = &report.content;

    let _ = writeln!(out, "Audit: {}", report.url);
    let _ = writeln!(out, "Score: {}/100 ({})", report.score, report.rating);
    out.push('\n');

    heading(&mut out, "Technical");
    let _ = writeln!(
        out,
        "Title: {} ({} characters{})",
        check(tech.title.exists),
        tech.title.length,
        if tech.title.optimal { ", optimal" } else { "" }
    );
    if !tech.title.text.is_empty() {
        let _ = writeln!(out, "  {}", tech.title.text.chars().take(60).collect::<String>());
    }
    let _ = writeln!(
        out,
        "Meta description: {} ({} characters)",
        check(tech.meta_description.exists),
        tech.meta_description.length
    );
    if let Some(h1) = tech.heading(1) {
        let _ = writeln!(out, "H1: {}", h1.count);
        if let Some(first) = h1.samples.first() {
            let _ = writeln!(out, "  {}", first);
        }
    }
    let _ = writeln!(out, "Words: {}", tech.word_count);
    let _ = writeln!(
        out,
        "Images with alt: {}/{} ({:.1}%)",
        tech.images.with_alt, tech.images.total, tech.images.alt_ratio
    );
    let _ = writeln!(out, "Links: {} internal, {} external", tech.links.internal, tech.links.external);
    let _ = writeln!(out, "HTTPS: {}", check(tech.https));
    let _ = writeln!(out, "Mobile viewport: {}", check(tech.mobile_friendly));
    if let Some(load_time) = tech.load_time {
        let _ = writeln!(out, "Load time: {:.2}s", load_time);
    }
    if !tech.structured_data.is_empty() {
        let _ = writeln!(out, "Structured data: {}", tech.structured_data.join(", "));
    }
    out.push('\n');

    heading(&mut out, "Content");
    match content.flesch_band {
        Some(band) => {
            let _ = writeln!(out, "Reading ease: {:.1} ({})", content.flesch_score, band);
        }
        None => {
            let _ = writeln!(out, "Reading ease: not computable");
        }
    }
    let _ = writeln!(out, "Authority links: {}", content.authority_links);
    let eat = &content.eat_signals;
    let _ = writeln!(
        out,
        "E-A-T: author {}, about page {}, contact {}, date {}",
        check(eat.author_box),
        check(eat.about_page),
        check(eat.contact_info),
        check(eat.date_published)
    );
    out.push('\n');

    heading(&mut out, "Search intent");
    if let Some(keyword) = &report.intent.estimated_keyword {
        let _ = writeln!(out, "Estimated keyword: {}", keyword);
    }
    let _ = writeln!(out, "Primary: {}", report.intent.primary);
    if !report.intent.secondary.is_empty() {
        let secondary: Vec<&str> = report.intent.secondary.iter().map(|i| i.label()).collect();
        let _ = writeln!(out, "Secondary: {}", secondary.join(", "));
    }
    for score in &report.intent.scores {
        let _ = writeln!(out, "  {}: {}", score.intent, score.score);
    }
    out.push('\n');

    let geo = &report.geo;
    heading(&mut out, "Local");
    let _ = writeln!(out, "GEO score: {}/10", geo.score);
    let _ = writeln!(out, "Phone: {} ({})", check(geo.has_phone()), geo.phone_count);
    let _ = writeln!(out, "Address: {} ({})", check(geo.has_address()), geo.address_count);
    let _ = writeln!(out, "Opening hours: {}", check(geo.opening_hours));
    let _ = writeln!(out, "Google Maps: {}", check(geo.maps_embed));
    if !geo.cities.is_empty() {
        let _ = writeln!(out, "Cities: {}", geo.cities.join(", "));
    }
    if let Some(schema) = &geo.local_schema {
        let _ = writeln!(out, "Local schema: {}", schema);
    }
    out.push('\n');

    let modern = &report.modern;
    heading(&mut out, "Modern signals");
    let _ = writeln!(out, "AI overview risk: {}", modern.ai_overview_risk);
    let _ = writeln!(
        out,
        "Brand: logo {}, {} mentions, {} social links",
        check(modern.brand.logo),
        modern.brand.brand_mentions,
        modern.brand.social_links
    );
    let ux = &modern.ux;
    let _ = writeln!(
        out,
        "UX: {} lists, {} tables, {} images, {} videos",
        ux.lists, ux.tables, ux.images, ux.videos
    );
    if let Some(density) = &modern.keyword_density {
        let _ = writeln!(
            out,
            "Top keyword: '{}' ({}%), stuffing: {}",
            density.top_word,
            density.density_percent,
            check(density.stuffing_risk)
        );
    }

    if !report.recommendations.is_empty() {
        out.push('\n');
        heading(&mut out, "Recommendations");
        for (i, rec) in report.recommendations.iter().enumerate() {
            let wrapped = wrap_list(std::slice::from_ref(rec), config.line_width);
            let _ = writeln!(out, "{}. {}", i + 1, wrapped.replace('\n', "\n   "));
        }
    }

    out.trim_end().to_string()
}

fn indent(text: &str, prefix: &str) -> String {
    text.lines().map(|line| format!("{}{}", prefix, line)).collect::<Vec<_>>().join("\n")
}

/// Join items with `, `, wrapping at `width` characters (0 = one line)
fn wrap_list(items: &[String], width: usize) -> String {
    let joined = items.join(", ");
    if width == 0 {
        return joined;
    }

    let words: Vec<&str> = joined.split_whitespace().collect();
    wrap_words(&words, width)
}

/// Wrap a slice of words to specified width
fn wrap_words(words: &[&str], width: usize) -> String {
    let mut lines = Vec::new();
    let mut current_line = Vec::new();
    let mut current_length = 0;

    for &word in words {
        let word_len = word.chars().count();

        if current_length == 0 {
            current_line.push(word);
            current_length = word_len;
        } else if current_length + 1 + word_len <= width {
            current_length += 1 + word_len;
            current_line.push(word);
        } else {
            lines.push(current_line.join(" "));
            current_line = vec![word];
            current_length = word_len;
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line.join(" "));
    }

    lines.join("\n")
}
