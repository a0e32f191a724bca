//! Syllable counting capabilities.
//!
//! The readability formulas need a per-word syllable count. Two counters are
//! provided and injected through [`ScoringProfile`](crate::ScoringProfile):
//!
//! - [`HeuristicSyllables`] counts maximal runs of vowels (`aeiouäöüy`).
//!   It is fast and has no data dependencies, but it treats diphthongs and
//!   vowel sequences like `ie`, `ei` and `eu` as a single nucleus only because
//!   they happen to be adjacent, and it also merges sequences that span two
//!   syllables (`Studie`, `Museum`).
//! - [`HyphenationSyllables`] (feature `hyphenation`) counts hyphenation
//!   points from the German 1996 orthography patterns plus one.
//!
//! The two counters are not numerically equivalent and are tested
//! independently.

use std::fmt;

/// Counts syllables in a single word.
///
/// Implementations must return at least 1 for every input, including empty
/// strings and tokens without letters, so downstream averages stay defined.
pub trait SyllableCounter: Send + Sync {
    /// Number of syllables in `word`, never less than 1.
    fn count(&self, word: &str) -> usize;

    /// Short identifier used in reports and logs.
    fn name(&self) -> &'static str;
}

/// Vowels recognised by the heuristic counter.
const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'ä', 'ö', 'ü', 'y'];

/// Vowel-cluster syllable counter.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicSyllables;

impl HeuristicSyllables {
    pub fn new() -> Self {
        Self
    }
}

impl SyllableCounter for HeuristicSyllables {
    fn count(&self, word: &str) -> usize {
        let mut count = 0;
        let mut previous_was_vowel = false;

        for c in word.chars().flat_map(char::to_lowercase) {
            let is_vowel = VOWELS.contains(&c);
            if is_vowel && !previous_was_vowel {
                count += 1;
            }
            previous_was_vowel = is_vowel;
        }

        count.max(1)
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}

/// Dictionary-backed syllable counter using German hyphenation patterns.
///
/// The dictionary is loaded once by [`HyphenationSyllables::german`] and
/// owned by the value; share it with `Arc` rather than reloading it per
/// article.
#[cfg(feature = "hyphenation")]
pub struct HyphenationSyllables {
    dictionary: hyphenation::Standard,
}

#[cfg(feature = "hyphenation")]
impl HyphenationSyllables {
    /// Loads the embedded German (1996 orthography) pattern dictionary.
    pub fn german() -> crate::Result<Self> {
        use hyphenation::{Language, Load, Standard};

        let dictionary = Standard::from_embedded(Language::German1996).map_err(|e| {
            crate::LesbarError::ConfigError(format!("Failed to load German hyphenation dictionary: {}", e))
        })?;

        Ok(Self { dictionary })
    }
}

#[cfg(feature = "hyphenation")]
impl SyllableCounter for HyphenationSyllables {
    fn count(&self, word: &str) -> usize {
        use hyphenation::Hyphenator;

        let lowered = word.to_lowercase();
        if !lowered.chars().any(char::is_alphabetic) {
            return 1;
        }

        self.dictionary.hyphenate(&lowered).breaks.len() + 1
    }

    fn name(&self) -> &'static str {
        "hyphenation"
    }
}

#[cfg(feature = "hyphenation")]
impl fmt::Debug for HyphenationSyllables {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HyphenationSyllables").field("language", &"de-1996").finish()
    }
}

impl fmt::Debug for dyn SyllableCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SyllableCounter({})", self.name())
    }
}
