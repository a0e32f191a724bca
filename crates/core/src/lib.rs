pub mod article;
pub mod audit;
pub mod complexity;
pub mod config;
pub mod content_type;
#[cfg(feature = "fetch")]
pub mod crawl;
pub mod error;
pub mod fetch;
pub mod formatters;
pub mod formulas;
pub mod keywords;
pub mod legacy;
pub mod links;
pub mod metadata;
pub mod normalize;
pub mod parse;
pub mod preprocess;
pub mod profile;
pub mod readability;
pub mod report;
pub mod sitemap;
pub mod syllables;
pub mod text;

pub use article::{ArticleAnalysis, analyze_article, analyze_article_with};
pub use audit::{AuditRating, AuditReport, audit_html};
#[cfg(feature = "fetch")]
pub use audit::audit_url;
pub use complexity::{ComplexityAssessment, assess_complexity, score_complexity};
pub use config::{AnalyzerConfig, AnalyzerConfigBuilder, ConfigLoader, ConfigLoaderBuilder, ConfigParser, SiteEntry};
pub use content_type::{ContentType, detect_content_type};
#[cfg(feature = "fetch")]
pub use crawl::SiteAnalyzer;
pub use error::{LesbarError, Result};
pub use fetch::{FetchConfig, fetch_file, fetch_stdin};
#[cfg(feature = "fetch")]
pub use fetch::{fetch_url, fetch_url_timed};
pub use formatters::{JsonConfig, JsonFormatter, ScoreOutput, TextConfig, TextFormatter};
pub use formulas::Formula;
pub use keywords::{Keyword, KeywordKind, extract_keywords, extract_ngrams};
pub use legacy::{LegacyBucket, LegacyVerdict, score_legacy};
pub use links::extract_internal_links;
pub use normalize::normalize;
pub use parse::Document;
#[doc(hidden)]
pub use preprocess::PreprocessConfig;
pub use preprocess::preprocess_html;
pub use profile::{ProfileKind, ScoringProfile, ScoringProfileBuilder};
pub use readability::{HixBucket, HixScorer, ReadabilityVerdict, score_readability};
pub use report::{AnalysisRun, OverallSummary, SiteReport, thematic_overlap};
pub use sitemap::{extract_urls, filter_article_urls, load_sitemap};
pub use syllables::{HeuristicSyllables, SyllableCounter};
#[cfg(feature = "hyphenation")]
pub use syllables::HyphenationSyllables;
pub use text::{LongWordRule, SentenceSplitter, TextStatistics};
