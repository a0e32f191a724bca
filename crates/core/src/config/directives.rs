use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{LesbarError, Result};
use crate::fetch::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, FetchConfig};
use crate::profile::{ProfileKind, ScoringProfile};
use crate::report::DEFAULT_TOP_THEMES;
use crate::sitemap::DEFAULT_EXCLUSIONS;
use crate::text::LongWordRule;

/// Default politeness delay between article fetches.
pub const DEFAULT_DELAY_MS: u64 = 500;

/// Represents a single analyzer directive
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    /// Site name and sitemap file
    Site(String, PathBuf),
    /// Additional URL exclusion keyword
    Exclude(String),

    /// Fetching
    DelayMs(u64),
    Timeout(u64),
    UserAgent(String),

    /// Analysis
    MinTextLength(usize),
    TopThemes(usize),
    Profile(ProfileKind),
    LongWords(LongWordRule),
}

/// A site to analyse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteEntry {
    pub name: String,
    pub sitemap: PathBuf,
}

impl SiteEntry {
    pub fn new(name: impl Into<String>, sitemap: impl Into<PathBuf>) -> Self {
        Self { name: name.into(), sitemap: sitemap.into() }
    }
}

impl FromStr for SiteEntry {
    type Err = LesbarError;

    /// Parses `NAME=PATH`, as given on the command line.
    fn from_str(s: &str) -> Result<Self> {
        let (name, path) = s
            .split_once('=')
            .ok_or_else(|| LesbarError::ConfigError(format!("Expected NAME=PATH, got: {}", s)))?;
        let (name, path) = (name.trim(), path.trim());
        if name.is_empty() || path.is_empty() {
            return Err(LesbarError::ConfigError(format!("Expected NAME=PATH, got: {}", s)));
        }
        Ok(Self::new(name, path))
    }
}

/// Configuration for the site analyzer.
///
/// # Example
///
/// ```rust
/// use lesbar_core::AnalyzerConfig;
///
/// let config = AnalyzerConfig::builder()
///     .site("KI-Observatorium", "sitemaps/kio-sitemap.xml")
///     .delay_ms(0)
///     .build();
/// assert_eq!(config.sites.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerConfig {
    pub sites: Vec<SiteEntry>,
    /// URL keywords excluded from analysis (default: [`DEFAULT_EXCLUSIONS`]).
    pub exclusions: Vec<String>,
    /// Pause between article fetches in milliseconds (default: 500).
    pub delay_ms: u64,
    /// Request timeout in seconds (default: 10).
    pub timeout: u64,
    pub user_agent: String,
    /// Minimum extracted text length in characters (default: 100).
    pub min_text_length: usize,
    /// Themes kept per site report (default: 15).
    pub top_themes: usize,
    pub profile: ProfileKind,
    /// Overrides the profile's long-word rule when set.
    pub long_words: Option<LongWordRule>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            sites: Vec::new(),
            exclusions: DEFAULT_EXCLUSIONS.iter().map(|s| s.to_string()).collect(),
            delay_ms: DEFAULT_DELAY_MS,
            timeout: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            min_text_length: crate::article::DEFAULT_MIN_TEXT_LENGTH,
            top_themes: DEFAULT_TOP_THEMES,
            profile: ProfileKind::default(),
            long_words: None,
        }
    }
}

impl AnalyzerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> AnalyzerConfigBuilder {
        AnalyzerConfigBuilder::new()
    }

    /// Add a directive to this config
    pub fn add_directive(&mut self, directive: Directive) {
        match directive {
            Directive::Site(name, sitemap) => self.sites.push(SiteEntry { name, sitemap }),
            Directive::Exclude(keyword) => {
                if !self.exclusions.contains(&keyword) {
                    self.exclusions.push(keyword);
                }
            }
            Directive::DelayMs(value) => self.delay_ms = value,
            Directive::Timeout(value) => self.timeout = value,
            Directive::UserAgent(value) => self.user_agent = value,
            Directive::MinTextLength(value) => self.min_text_length = value,
            Directive::TopThemes(value) => self.top_themes = value,
            Directive::Profile(kind) => self.profile = kind,
            Directive::LongWords(rule) => self.long_words = Some(rule),
        }
    }

    /// Resolves relative sitemap paths against `base`.
    pub fn resolve_paths(&mut self, base: &Path) {
        for site in &mut self.sites {
            if site.sitemap.is_relative() {
                site.sitemap = base.join(&site.sitemap);
            }
        }
    }

    /// Builds the scoring profile this config names.
    ///
    /// # Errors
    ///
    /// Returns [`LesbarError::ConfigError`] if the precise profile cannot be loaded.
    pub fn scoring_profile(&self) -> Result<ScoringProfile> {
        let profile = self.profile.load()?;
        Ok(match self.long_words {
            Some(rule) => profile.with_long_words(rule),
            None => profile,
        })
    }

    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig { timeout: self.timeout, user_agent: self.user_agent.clone() }
    }
}

/// Builder for AnalyzerConfig.
pub struct AnalyzerConfigBuilder {
    config: AnalyzerConfig,
}

impl AnalyzerConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: AnalyzerConfig::default() }
    }

    /// Adds a site.
    pub fn site(mut self, name: impl Into<String>, sitemap: impl Into<PathBuf>) -> Self {
        self.config.sites.push(SiteEntry::new(name, sitemap));
        self
    }

    /// Adds an exclusion keyword.
    pub fn exclude(mut self, keyword: impl Into<String>) -> Self {
        self.config.add_directive(Directive::Exclude(keyword.into()));
        self
    }

    /// Sets the delay between fetches.
    pub fn delay_ms(mut self, value: u64) -> Self {
        self.config.delay_ms = value;
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, value: u64) -> Self {
        self.config.timeout = value;
        self
    }

    /// Sets the User-Agent.
    pub fn user_agent(mut self, value: impl Into<String>) -> Self {
        self.config.user_agent = value.into();
        self
    }

    /// Sets the minimum text length.
    pub fn min_text_length(mut self, value: usize) -> Self {
        self.config.min_text_length = value;
        self
    }

    /// Sets the number of themes per site.
    pub fn top_themes(mut self, value: usize) -> Self {
        self.config.top_themes = value;
        self
    }

    /// Sets the scoring profile.
    pub fn profile(mut self, kind: ProfileKind) -> Self {
        self.config.profile = kind;
        self
    }

    /// Overrides the long-word rule.
    pub fn long_words(mut self, rule: LongWordRule) -> Self {
        self.config.long_words = Some(rule);
        self
    }

    /// Builds the config.
    pub fn build(self) -> AnalyzerConfig {
        self.config
    }
}

impl Default for AnalyzerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a directive line from the analyzer config format
pub fn parse_directive(line: &str) -> Result<Directive> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Err(LesbarError::ConfigError("Empty or comment line".to_string()));
    }

    let Some((key, value)) = line.split_once(':') else {
        return Err(LesbarError::ConfigError(format!("Invalid directive format: {}", line)));
    };
    let key = key.trim();
    let value = value.trim();

    match key {
        "site" => {
            let (name, path) = value
                .split_once('|')
                .ok_or_else(|| LesbarError::ConfigError(format!("Invalid site format: {}", value)))?;
            let (name, path) = (name.trim(), path.trim());
            if name.is_empty() || path.is_empty() {
                return Err(LesbarError::ConfigError(format!("Invalid site format: {}", value)));
            }
            Ok(Directive::Site(name.to_string(), PathBuf::from(path)))
        }
        "exclude" => {
            if value.is_empty() {
                return Err(LesbarError::ConfigError("Empty exclude keyword".to_string()));
            }
            Ok(Directive::Exclude(value.to_lowercase()))
        }
        "delay_ms" => Ok(Directive::DelayMs(parse_number(key, value)?)),
        "timeout" => Ok(Directive::Timeout(parse_number(key, value)?)),
        "user_agent" => Ok(Directive::UserAgent(value.to_string())),
        "min_text_length" => Ok(Directive::MinTextLength(parse_number(key, value)?)),
        "top_themes" => Ok(Directive::TopThemes(parse_number(key, value)?)),
        "profile" => Ok(Directive::Profile(value.parse()?)),
        "long_words" => Ok(Directive::LongWords(parse_long_words(value)?)),
        _ => Err(LesbarError::ConfigError(format!("Unknown directive: {}", key))),
    }
}

fn parse_number<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| LesbarError::ConfigError(format!("Invalid number for {}: {}", key, value)))
}

/// Parses `at_least <n>` or `longer_than <n>`.
fn parse_long_words(value: &str) -> Result<LongWordRule> {
    let mut parts = value.split_whitespace();
    let (Some(rule), Some(n), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(LesbarError::ConfigError(format!("Invalid long_words rule: {}", value)));
    };
    let n = parse_number("long_words", n)?;

    match rule {
        "at_least" => Ok(LongWordRule::AtLeast(n)),
        "longer_than" => Ok(LongWordRule::LongerThan(n)),
        _ => Err(LesbarError::ConfigError(format!("Invalid long_words rule: {}", value))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_directive_site() {
        let directive = parse_directive("site: KI-Observatorium | sitemaps/kio-sitemap.xml").unwrap();
        assert_eq!(
            directive,
            Directive::Site("KI-Observatorium".to_string(), PathBuf::from("sitemaps/kio-sitemap.xml"))
        );
    }

    #[test]
    fn test_parse_directive_site_invalid() {
        assert!(parse_directive("site: nur-ein-name").is_err());
        assert!(parse_directive("site: | pfad.xml").is_err());
    }

    #[test]
    fn test_parse_directive_numbers() {
        assert_eq!(parse_directive("delay_ms: 250").unwrap(), Directive::DelayMs(250));
        assert_eq!(parse_directive("timeout: 5").unwrap(), Directive::Timeout(5));
        assert_eq!(parse_directive("top_themes: 20").unwrap(), Directive::TopThemes(20));
        assert!(parse_directive("delay_ms: bald").is_err());
    }

    #[test]
    fn test_parse_directive_user_agent_keeps_colons() {
        let directive = parse_directive("user_agent: Mozilla/5.0 (compatible; Test:1)").unwrap();
        assert_eq!(directive, Directive::UserAgent("Mozilla/5.0 (compatible; Test:1)".to_string()));
    }

    #[test]
    fn test_parse_directive_profile_and_long_words() {
        assert_eq!(parse_directive("profile: precise").unwrap(), Directive::Profile(ProfileKind::Precise));
        assert_eq!(
            parse_directive("long_words: at_least 6").unwrap(),
            Directive::LongWords(LongWordRule::AtLeast(6))
        );
        assert_eq!(
            parse_directive("long_words: longer_than 7").unwrap(),
            Directive::LongWords(LongWordRule::LongerThan(7))
        );
        assert!(parse_directive("long_words: shorter_than 3").is_err());
        assert!(parse_directive("long_words: at_least").is_err());
    }

    #[test]
    fn test_parse_directive_invalid() {
        assert!(parse_directive("invalid_directive").is_err());
        assert!(matches!(parse_directive("color: blue"), Err(LesbarError::ConfigError(_))));
    }

    #[test]
    fn test_add_directive_exclusions_dedup() {
        let mut config = AnalyzerConfig::new();
        let before = config.exclusions.len();
        config.add_directive(Directive::Exclude("veranstaltungen".to_string()));
        config.add_directive(Directive::Exclude("veranstaltungen".to_string()));
        config.add_directive(Directive::Exclude("impressum".to_string()));
        assert_eq!(config.exclusions.len(), before + 1);
    }

    #[test]
    fn test_defaults() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.delay_ms, 500);
        assert_eq!(config.timeout, 10);
        assert_eq!(config.min_text_length, 100);
        assert_eq!(config.top_themes, 15);
        assert_eq!(config.profile, ProfileKind::Heuristic);
        assert!(config.exclusions.iter().any(|e| e == "datenschutz"));
    }

    #[test]
    fn test_resolve_paths() {
        let mut config = AnalyzerConfig::builder()
            .site("A", "sitemaps/a.xml")
            .site("B", "/abs/b.xml")
            .build();
        config.resolve_paths(Path::new("/etc/lesbar"));
        assert_eq!(config.sites[0].sitemap, PathBuf::from("/etc/lesbar/sitemaps/a.xml"));
        assert_eq!(config.sites[1].sitemap, PathBuf::from("/abs/b.xml"));
    }

    #[test]
    fn test_site_entry_from_str() {
        let entry: SiteEntry = "Denkfabrik=sitemaps/denkfabrik.xml".parse().unwrap();
        assert_eq!(entry, SiteEntry::new("Denkfabrik", "sitemaps/denkfabrik.xml"));
        assert!("ohne-gleich".parse::<SiteEntry>().is_err());
        assert!("=pfad".parse::<SiteEntry>().is_err());
    }

    #[test]
    fn test_scoring_profile_override() {
        let config = AnalyzerConfig::builder().long_words(LongWordRule::AtLeast(6)).build();
        let profile = config.scoring_profile().unwrap();
        assert_eq!(profile.long_words(), LongWordRule::AtLeast(6));
        assert_eq!(profile.syllables().name(), "heuristic");
    }
}
