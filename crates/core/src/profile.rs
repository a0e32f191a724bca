//! Scoring profiles.
//!
//! A [`ScoringProfile`] bundles the three parameters that change scores
//! between the heuristic and the precise pipeline: the syllable counter, the
//! long-word rule and the sentence splitter.
//!
//! # Example
//!
//! ```rust
//! use lesbar_core::{LongWordRule, ScoringProfile, SentenceSplitter};
//!
//! let profile = ScoringProfile::builder()
//!     .long_words(LongWordRule::AtLeast(6))
//!     .sentences(SentenceSplitter::AbbreviationAware)
//!     .build();
//! assert_eq!(profile.syllables().name(), "heuristic");
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::syllables::{HeuristicSyllables, SyllableCounter};
use crate::text::{LongWordRule, SentenceSplitter};
use crate::{LesbarError, Result};

/// Named profile presets, as used in configuration files and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileKind {
    #[default]
    Heuristic,
    Precise,
}

impl ProfileKind {
    /// Builds the profile this preset names.
    ///
    /// # Errors
    ///
    /// Returns [`LesbarError::ConfigError`] if the precise profile is requested
    /// and the hyphenation dictionary is unavailable.
    pub fn load(self) -> Result<ScoringProfile> {
        match self {
            ProfileKind::Heuristic => Ok(ScoringProfile::heuristic()),
            ProfileKind::Precise => ScoringProfile::precise(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileKind::Heuristic => "heuristic",
            ProfileKind::Precise => "precise",
        }
    }
}

impl FromStr for ProfileKind {
    type Err = LesbarError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "heuristic" => Ok(ProfileKind::Heuristic),
            "precise" => Ok(ProfileKind::Precise),
            other => Err(LesbarError::ConfigError(format!("Unknown scoring profile: {}", other))),
        }
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters injected into text statistics and scoring.
///
/// Cloning is cheap: the syllable counter is shared.
#[derive(Debug, Clone)]
pub struct ScoringProfile {
    syllables: Arc<dyn SyllableCounter>,
    long_words: LongWordRule,
    sentences: SentenceSplitter,
}

impl ScoringProfile {
    /// Creates a new builder starting from the heuristic defaults.
    pub fn builder() -> ScoringProfileBuilder {
        ScoringProfileBuilder::new()
    }

    /// Vowel-cluster syllables, `LongerThan(6)` and terminal-punctuation splitting.
    pub fn heuristic() -> Self {
        Self {
            syllables: Arc::new(HeuristicSyllables),
            long_words: LongWordRule::default(),
            sentences: SentenceSplitter::Terminal,
        }
    }

    /// Hyphenation-dictionary syllables and abbreviation-aware splitting.
    ///
    /// Loads the German dictionary; build this once and clone it.
    ///
    /// # Errors
    ///
    /// Returns [`LesbarError::ConfigError`] if the dictionary cannot be
    /// loaded or the crate was built without the `hyphenation` feature.
    pub fn precise() -> Result<Self> {
        #[cfg(feature = "hyphenation")]
        {
            let counter = crate::syllables::HyphenationSyllables::german()?;
            Ok(Self {
                syllables: Arc::new(counter),
                long_words: LongWordRule::default(),
                sentences: SentenceSplitter::AbbreviationAware,
            })
        }

        #[cfg(not(feature = "hyphenation"))]
        {
            Err(LesbarError::ConfigError(
                "precise profile requires the `hyphenation` feature".to_string(),
            ))
        }
    }

    /// Replaces the long-word rule, keeping the counter and splitter.
    pub fn with_long_words(mut self, rule: LongWordRule) -> Self {
        self.long_words = rule;
        self
    }

    pub fn syllables(&self) -> &dyn SyllableCounter {
        self.syllables.as_ref()
    }

    pub fn long_words(&self) -> LongWordRule {
        self.long_words
    }

    pub fn sentences(&self) -> SentenceSplitter {
        self.sentences
    }
}

impl Default for ScoringProfile {
    fn default() -> Self {
        Self::heuristic()
    }
}

/// Builder for ScoringProfile.
pub struct ScoringProfileBuilder {
    profile: ScoringProfile,
}

impl ScoringProfileBuilder {
    /// Creates a new builder with heuristic defaults.
    pub fn new() -> Self {
        Self { profile: ScoringProfile::heuristic() }
    }

    /// Sets the syllable counter.
    pub fn syllables(mut self, counter: Arc<dyn SyllableCounter>) -> Self {
        self.profile.syllables = counter;
        self
    }

    /// Sets the long-word rule.
    pub fn long_words(mut self, rule: LongWordRule) -> Self {
        self.profile.long_words = rule;
        self
    }

    /// Sets the sentence splitter.
    pub fn sentences(mut self, splitter: SentenceSplitter) -> Self {
        self.profile.sentences = splitter;
        self
    }

    /// Builds the profile.
    pub fn build(self) -> ScoringProfile {
        self.profile
    }
}

impl Default for ScoringProfileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
