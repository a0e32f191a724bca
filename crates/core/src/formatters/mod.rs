pub mod json;
pub mod text;

pub use json::{JsonConfig, JsonFormatter, ScoreOutput, to_json};
pub use text::{TextConfig, TextFormatter, format_analysis, format_audit, format_score, format_site_report};
