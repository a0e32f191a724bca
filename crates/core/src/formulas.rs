//! The four readability formulas combined into the HIX.
//!
//! Each formula reads a [`TextStatistics`] value and produces one raw real
//! number. Raw values live on incompatible scales; [`crate::normalize`]
//! maps them onto the common 0–10 band.

use std::fmt;

use serde::Serialize;

use crate::text::TextStatistics;

/// Readability formula identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Formula {
    /// German Flesch reading ease (Amstad 1978). Higher is easier.
    Amstad,
    /// First Wiener Sachtextformel. Approximates a school grade; lower is easier.
    Wsf1,
    /// SMOG grade. Lower is easier.
    Smog,
    /// Läsbarhetsindex. Lower is easier.
    Lix,
}

impl Formula {
    /// All formulas in aggregation order.
    pub const ALL: [Formula; 4] = [Formula::Amstad, Formula::Wsf1, Formula::Smog, Formula::Lix];

    /// Evaluates the formula against `stats`.
    pub fn evaluate(&self, stats: &TextStatistics) -> f64 {
        match self {
            Formula::Amstad => amstad(stats),
            Formula::Wsf1 => wsf1(stats),
            Formula::Smog => smog(stats),
            Formula::Lix => lix(stats),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Formula::Amstad => "Amstad",
            Formula::Wsf1 => "WSF1",
            Formula::Smog => "SMOG",
            Formula::Lix => "LIX",
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw output of one formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FormulaResult {
    pub formula: Formula,
    pub raw: f64,
}

impl FormulaResult {
    pub fn evaluate(formula: Formula, stats: &TextStatistics) -> Self {
        Self { formula, raw: formula.evaluate(stats) }
    }
}

/// `180 − ASL − 58.5 × ASW`
pub fn amstad(stats: &TextStatistics) -> f64 {
    180.0 - stats.average_sentence_length - 58.5 * stats.average_syllables_per_word
}

/// `0.1935 × %poly + 0.1672 × ASL + 0.1297 × %long − 0.0327 × %mono − 0.875`
pub fn wsf1(stats: &TextStatistics) -> f64 {
    0.1935 * stats.percent_polysyllabic + 0.1672 * stats.average_sentence_length + 0.1297 * stats.percent_long_words
        - 0.0327 * stats.percent_monosyllabic
        - 0.875
}

/// `3 + sqrt(polysyllables per 30 sentences)`
pub fn smog(stats: &TextStatistics) -> f64 {
    3.0 + stats.polysyllables_per_thirty_sentences.sqrt()
}

/// `ASL + %long`
pub fn lix(stats: &TextStatistics) -> f64 {
    stats.average_sentence_length + stats.percent_long_words
}
