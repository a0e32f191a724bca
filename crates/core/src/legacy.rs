//! Legacy heuristic HIX.
//!
//! An older linear approximation that reports on an unbounded scale where
//! *higher means harder*:
//!
//! `hix = 4.06 × ASL − 0.875 × %long − 1.693 × %polysyllabic`
//!
//! with long words counted as six or more characters. Its values and bands
//! are unrelated to the 0–20 scale of [`crate::ReadabilityVerdict`], so it
//! has its own verdict and bucket types. Use it only to compare against
//! historical reports produced with this formula.

use std::fmt;

use serde::Serialize;

use crate::profile::ScoringProfile;
use crate::text::{LongWordRule, TextStatistics};

/// Bands of the legacy scale. Upper bounds are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LegacyBucket {
    /// Below 0.
    VeryEasy,
    /// 0 up to 10.
    Easy,
    /// 10 up to 20.
    Medium,
    /// 20 up to 30.
    Hard,
    /// 30 and above.
    VeryHard,
}

impl LegacyBucket {
    pub fn from_score(hix: f64) -> Self {
        if hix < 0.0 {
            LegacyBucket::VeryEasy
        } else if hix < 10.0 {
            LegacyBucket::Easy
        } else if hix < 20.0 {
            LegacyBucket::Medium
        } else if hix < 30.0 {
            LegacyBucket::Hard
        } else {
            LegacyBucket::VeryHard
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LegacyBucket::VeryEasy => "very easy",
            LegacyBucket::Easy => "easy",
            LegacyBucket::Medium => "medium",
            LegacyBucket::Hard => "hard",
            LegacyBucket::VeryHard => "very hard",
        }
    }
}

impl fmt::Display for LegacyBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of the legacy formula. `bucket` is `None` for unscorable text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LegacyVerdict {
    pub hix: f64,
    pub bucket: Option<LegacyBucket>,
}

impl LegacyVerdict {
    pub fn unscored() -> Self {
        Self { hix: 0.0, bucket: None }
    }
}

/// The profile the legacy formula was defined with: vowel-cluster syllables,
/// terminal splitting and `AtLeast(6)` long words.
pub fn legacy_profile() -> ScoringProfile {
    ScoringProfile::builder().long_words(LongWordRule::AtLeast(6)).build()
}

/// Evaluates the legacy formula on precomputed statistics.
pub fn legacy_hix(stats: &TextStatistics) -> f64 {
    4.06 * stats.average_sentence_length - 0.875 * stats.percent_long_words - 1.693 * stats.percent_polysyllabic
}

/// Scores `text` with [`legacy_profile`].
pub fn score_legacy(text: &str) -> LegacyVerdict {
    score_legacy_with(text, &legacy_profile())
}

/// Scores `text` with the legacy formula and a caller-supplied profile.
pub fn score_legacy_with(text: &str, profile: &ScoringProfile) -> LegacyVerdict {
    match TextStatistics::compute(text, profile) {
        Some(stats) => {
            let hix = legacy_hix(&stats);
            LegacyVerdict { hix, bucket: Some(LegacyBucket::from_score(hix)) }
        }
        None => LegacyVerdict::unscored(),
    }
}
