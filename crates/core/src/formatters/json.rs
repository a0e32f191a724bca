use serde::Serialize;

use crate::Result;
use crate::legacy::LegacyVerdict;
use crate::readability::ReadabilityVerdict;

/// Output of scoring one text: the verdict plus the optional legacy score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreOutput {
    #[serde(flatten)]
    pub verdict: ReadabilityVerdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legacy: Option<LegacyVerdict>,
}

/// Configuration for JSON output
#[derive(Debug, Clone, Default)]
pub struct JsonConfig {
    /// Pretty print JSON output
    pub pretty: bool,
}

/// Serializes any report type to JSON
pub fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    if pretty { Ok(serde_json::to_string_pretty(value)?) } else { Ok(serde_json::to_string(value)?) }
}

/// JSON formatter with configurable options
pub struct JsonFormatter {
    config: JsonConfig,
}

impl JsonFormatter {
    pub fn new(config: JsonConfig) -> Self {
        Self { config }
    }

    pub fn format<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        to_json(value, self.config.pretty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::legacy::score_legacy;
    use crate::readability::score_readability;

    const TEXT: &str = "Das ist ein kurzer Satz. Er ist leicht.";

    #[test]
    fn test_score_output_flattens_verdict() {
        let output = ScoreOutput { verdict: score_readability(TEXT), legacy: None };
        let json: serde_json::Value = serde_json::from_str(&to_json(&output, false).unwrap()).unwrap();

        assert!(json["hix"].is_number());
        assert_eq!(json["bucket"], "very_easy");
        assert!(json["breakdown"]["formulas"].is_array());
        assert!(json.get("legacy").is_none());
    }

    #[test]
    fn test_score_output_with_legacy() {
        let output = ScoreOutput { verdict: score_readability(TEXT).summary(), legacy: Some(score_legacy(TEXT)) };
        let json: serde_json::Value = serde_json::from_str(&to_json(&output, false).unwrap()).unwrap();

        assert!(json.get("breakdown").is_none());
        assert!(json["legacy"]["hix"].is_number());
    }

    #[test]
    fn test_unscored_serializes_null_bucket() {
        let output = ScoreOutput { verdict: score_readability(""), legacy: None };
        let json: serde_json::Value = serde_json::from_str(&to_json(&output, false).unwrap()).unwrap();

        assert_eq!(json["hix"], 0.0);
        assert!(json["bucket"].is_null());
    }

    #[test]
    fn test_pretty_output() {
        let formatter = JsonFormatter::new(JsonConfig { pretty: true });
        let output = formatter.format(&score_readability(TEXT)).unwrap();
        assert!(output.contains('\n'));
        assert!(output.contains("\"hix\""));
    }

    #[test]
    fn test_compact_output() {
        let output = to_json(&[1, 2, 3], false).unwrap();
        assert_eq!(output, "[1,2,3]");
    }
}
