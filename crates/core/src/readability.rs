//! HIX scoring API.
//!
//! This module combines the text statistics, the four readability formulas
//! and their normalization into the Hohenheimer Verständlichkeitsindex. The
//! main entry point is [`HixScorer`], along with the convenience function
//! [`score_readability`].
//!
//! Scores use the 0–20 scale: the four normalized values (each 0–10) are
//! averaged and doubled. The unbounded heuristic variant lives in
//! [`crate::legacy`] and is never mixed with these types.
//!
//! # Example
//!
//! ```rust
//! use lesbar_core::{HixBucket, score_readability};
//!
//! let verdict = score_readability("Dies ist ein Test. Das ist einfach.");
//! assert!(verdict.hix >= 16.0);
//! assert!(matches!(verdict.bucket, Some(HixBucket::VeryEasy) | Some(HixBucket::Accessible)));
//! ```

use std::fmt;

use serde::Serialize;

use crate::formulas::{Formula, FormulaResult};
use crate::normalize::Calibration;
use crate::profile::ScoringProfile;
use crate::text::TextStatistics;

/// Interpretation bands of the 0–20 HIX scale.
///
/// Lower bounds are inclusive; the highest matching band wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HixBucket {
    /// Below 10.
    Expert,
    /// 10 up to 14.
    Technical,
    /// 14 up to 16.
    Educated,
    /// 16 up to 18.
    Accessible,
    /// 18 and above.
    VeryEasy,
}

impl HixBucket {
    /// Maps a HIX value to its band.
    pub fn from_score(hix: f64) -> Self {
        if hix >= 18.0 {
            HixBucket::VeryEasy
        } else if hix >= 16.0 {
            HixBucket::Accessible
        } else if hix >= 14.0 {
            HixBucket::Educated
        } else if hix >= 10.0 {
            HixBucket::Technical
        } else {
            HixBucket::Expert
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HixBucket::VeryEasy => "very easy (tabloid level)",
            HixBucket::Accessible => "accessible web text (general audience)",
            HixBucket::Educated => "educated audience (non-fiction books)",
            HixBucket::Technical => "technical articles, official and administrative text",
            HixBucket::Expert => "scientific, expert level",
        }
    }
}

impl fmt::Display for HixBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One formula's raw and normalized value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FormulaScore {
    pub formula: Formula,
    pub raw: f64,
    /// Raw value rescaled onto 0–10.
    pub normalized: f64,
}

/// The intermediate values behind a verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub statistics: TextStatistics,
    pub formulas: Vec<FormulaScore>,
}

/// Result of scoring one text on the 0–20 HIX scale.
///
/// `bucket` is `None` only for text that could not be scored (no words or
/// no sentences), in which case `hix` is 0. A legacy score of, say, 25 is
/// not comparable with `hix`; see [`crate::legacy::LegacyVerdict`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadabilityVerdict {
    pub hix: f64,
    pub bucket: Option<HixBucket>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ScoreBreakdown>,
}

impl ReadabilityVerdict {
    /// The sentinel for text without words or sentences.
    pub fn unscored() -> Self {
        Self { hix: 0.0, bucket: None, breakdown: None }
    }

    pub fn is_scored(&self) -> bool {
        self.bucket.is_some()
    }

    /// Drops the breakdown.
    pub fn summary(self) -> Self {
        Self { breakdown: None, ..self }
    }
}

/// HIX scorer bound to one [`ScoringProfile`].
///
/// # Example
///
/// ```rust
/// use lesbar_core::{HixScorer, LongWordRule, ScoringProfile};
///
/// let profile = ScoringProfile::builder().long_words(LongWordRule::AtLeast(6)).build();
/// let scorer = HixScorer::with_profile(profile);
/// let verdict = scorer.score("Kurze Sätze helfen. Lange Wörter nicht.");
/// assert!(verdict.is_scored());
/// ```
#[derive(Debug, Clone, Default)]
pub struct HixScorer {
    profile: ScoringProfile,
}

impl HixScorer {
    /// Creates a scorer with the heuristic profile.
    pub fn new() -> Self {
        Self { profile: ScoringProfile::heuristic() }
    }

    pub fn with_profile(profile: ScoringProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &ScoringProfile {
        &self.profile
    }

    /// Scores `text`, including the breakdown.
    pub fn score(&self, text: &str) -> ReadabilityVerdict {
        match TextStatistics::compute(text, &self.profile) {
            Some(stats) => self.score_statistics(stats),
            None => ReadabilityVerdict::unscored(),
        }
    }

    /// Scores precomputed statistics.
    pub fn score_statistics(&self, statistics: TextStatistics) -> ReadabilityVerdict {
        let formulas: Vec<FormulaScore> = Formula::ALL
            .iter()
            .map(|&formula| {
                let FormulaResult { raw, .. } = FormulaResult::evaluate(formula, &statistics);
                FormulaScore { formula, raw, normalized: Calibration::for_formula(formula).apply(raw) }
            })
            .collect();

        let mean = formulas.iter().map(|f| f.normalized).sum::<f64>() / formulas.len() as f64;
        let hix = (mean * 2.0).clamp(0.0, 20.0);

        tracing::debug!(
            hix,
            words = statistics.word_count,
            sentences = statistics.sentence_count,
            syllables = self.profile.syllables().name(),
            "scored text"
        );

        ReadabilityVerdict {
            hix,
            bucket: Some(HixBucket::from_score(hix)),
            breakdown: Some(ScoreBreakdown { statistics, formulas }),
        }
    }
}

/// Scores `text` with the heuristic profile.
///
/// # Example
///
/// ```rust
/// use lesbar_core::score_readability;
///
/// let verdict = score_readability("");
/// assert_eq!(verdict.hix, 0.0);
/// assert!(verdict.bucket.is_none());
/// ```
pub fn score_readability(text: &str) -> ReadabilityVerdict {
    HixScorer::new().score(text)
}
