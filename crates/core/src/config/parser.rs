use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::config::directives::{AnalyzerConfig, parse_directive};
use crate::error::{LesbarError, Result};

/// Analyzer config file parser
#[derive(Debug)]
pub struct ConfigParser;

impl ConfigParser {
    /// Parse a config file. Relative sitemap paths stay relative; see
    /// [`crate::config::ConfigLoader`] for resolution.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<AnalyzerConfig> {
        let file = std::fs::File::open(&path).map_err(|e| {
            LesbarError::ConfigError(format!("Cannot open file {}: {}", path.as_ref().display(), e))
        })?;

        Self::parse_reader(BufReader::new(file))
    }

    /// Parse config from a reader
    pub fn parse_reader<R: BufRead>(reader: R) -> Result<AnalyzerConfig> {
        let mut config = AnalyzerConfig::new();

        for (index, line) in reader.lines().enumerate() {
            let line_number = index + 1;
            let line =
                line.map_err(|e| LesbarError::ConfigError(format!("Read error at line {}: {}", line_number, e)))?;
            Self::apply_line(&mut config, &line, line_number)?;
        }

        Ok(config)
    }

    /// Parse config from a string
    pub fn parse_string(content: &str) -> Result<AnalyzerConfig> {
        let mut config = AnalyzerConfig::new();

        for (index, line) in content.lines().enumerate() {
            Self::apply_line(&mut config, line, index + 1)?;
        }

        Ok(config)
    }

    fn apply_line(config: &mut AnalyzerConfig, line: &str, line_number: usize) -> Result<()> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        let directive = parse_directive(line)
            .map_err(|e| LesbarError::ConfigError(format!("Parse error at line {}: {}", line_number, e)))?;
        config.add_directive(directive);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProfileKind;
    use crate::text::LongWordRule;
    use std::io::Cursor;
    use std::path::PathBuf;

    const CONFIG: &str = r#"
# Drei Sitemaps
site: KI-Observatorium | sitemaps/kio-sitemap.xml
site: Civic Innovation Platform | sitemaps/cip-sitemap.xml
site: Denkfabrik BMAS | sitemaps/denkfabrik-sitemap.xml

exclude: veranstaltungen
delay_ms: 0
timeout: 15
profile: heuristic
long_words: at_least 6
"#;

    #[test]
    fn test_parse_string_basic() {
        let config = ConfigParser::parse_string(CONFIG).unwrap();

        assert_eq!(config.sites.len(), 3);
        assert_eq!(config.sites[1].name, "Civic Innovation Platform");
        assert_eq!(config.sites[2].sitemap, PathBuf::from("sitemaps/denkfabrik-sitemap.xml"));
        assert!(config.exclusions.contains(&"veranstaltungen".to_string()));
        assert_eq!(config.delay_ms, 0);
        assert_eq!(config.timeout, 15);
        assert_eq!(config.profile, ProfileKind::Heuristic);
        assert_eq!(config.long_words, Some(LongWordRule::AtLeast(6)));
    }

    #[test]
    fn test_parse_reader() {
        let config = ConfigParser::parse_reader(Cursor::new(CONFIG)).unwrap();
        assert_eq!(config, ConfigParser::parse_string(CONFIG).unwrap());
    }

    #[test]
    fn test_parse_error_reports_line() {
        let err = ConfigParser::parse_string("# ok\n\nfarbe: blau\n").unwrap_err();
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_parse_empty_and_comments() {
        let config = ConfigParser::parse_string("# nur Kommentare\n\n   \n").unwrap();
        assert!(config.sites.is_empty());
        assert_eq!(config.delay_ms, 500);
    }

    #[test]
    fn test_parse_file_missing() {
        let result = ConfigParser::parse_file("/nonexistent/sites.txt");
        assert!(matches!(result, Err(LesbarError::ConfigError(_))));
    }
}
