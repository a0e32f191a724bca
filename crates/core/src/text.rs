//! Sentence and word segmentation and the derived text statistics.
//!
//! [`TextStatistics::compute`] is the single place where raw article text is
//! turned into the counts and ratios the readability formulas consume. It
//! returns `None` when the text has no sentences or no words; callers map
//! that to the unscored sentinel.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::profile::ScoringProfile;

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid word regex"));
static SENTENCE_BOUNDARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid sentence boundary regex"));

/// Abbreviations that end in a period without ending the sentence.
///
/// Compared case-insensitively against the token preceding a period, with
/// inner periods kept (`z.b`, `d.h`).
const ABBREVIATIONS: &[&str] = &[
    "abs", "abschn", "abt", "allg", "bd", "bspw", "bzgl", "bzw", "ca", "d.h", "dgl", "dipl", "dr", "ebd", "etc",
    "evtl", "f", "ff", "ggf", "hrsg", "inkl", "ing", "jh", "jr", "kap", "max", "min", "mio", "mrd", "nr", "o.ä",
    "prof", "s", "sog", "st", "str", "tel", "u.a", "u.ä", "usw", "v.a", "vgl", "z.b", "z.t", "zit", "zzgl",
];

const MONTHS: &[&str] = &[
    "januar", "februar", "märz", "april", "mai", "juni", "juli", "august", "september", "oktober", "november",
    "dezember",
];

/// Rule deciding which words count as "long" for WSF1 and LIX.
///
/// The heuristic HIX historically counted words with six or more characters
/// while the scientific variant counts words with more than six. The two
/// rules differ exactly for six-character words; pick one per profile and
/// keep it fixed when comparing scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", content = "length", rename_all = "snake_case")]
pub enum LongWordRule {
    /// Length in characters `>= n`.
    AtLeast(usize),
    /// Length in characters `> n`.
    LongerThan(usize),
}

impl LongWordRule {
    pub fn is_long(&self, word: &str) -> bool {
        let len = word.chars().count();
        match *self {
            LongWordRule::AtLeast(n) => len >= n,
            LongWordRule::LongerThan(n) => len > n,
        }
    }
}

impl Default for LongWordRule {
    fn default() -> Self {
        LongWordRule::LongerThan(6)
    }
}

/// Sentence segmentation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SentenceSplitter {
    /// Every run of `.`, `!` or `?` ends a sentence.
    #[default]
    Terminal,
    /// Like `Terminal`, but a period after a known abbreviation or an ordinal
    /// number, or one followed by a lowercase word, does not end a sentence.
    AbbreviationAware,
}

impl SentenceSplitter {
    /// Splits `text` into trimmed, non-empty sentences.
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        match self {
            SentenceSplitter::Terminal => split_terminal(text),
            SentenceSplitter::AbbreviationAware => split_abbreviation_aware(text),
        }
    }
}

fn split_terminal(text: &str) -> Vec<&str> {
    SENTENCE_BOUNDARY_RE
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

fn split_abbreviation_aware(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_BOUNDARY_RE.find_iter(text) {
        if boundary.as_str() == "." && !ends_sentence(&text[start..boundary.start()], &text[boundary.end()..]) {
            continue;
        }

        let sentence = text[start..boundary.start()].trim();
        if !sentence.is_empty() {
            sentences.push(sentence);
        }
        start = boundary.end();
    }

    let rest = text[start..].trim();
    if !rest.is_empty() {
        sentences.push(rest);
    }

    sentences
}

/// Decides whether a single period ends a sentence, given the text before it
/// (since the last boundary) and the text after it.
fn ends_sentence(before: &str, after: &str) -> bool {
    // inner periods: "z.B", "3.5", "example.de"
    if after.chars().next().is_some_and(char::is_alphanumeric) {
        return false;
    }

    let token = before
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or("")
        .trim_start_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();

    let next_word: String = after
        .trim_start()
        .chars()
        .take_while(|c| c.is_alphanumeric())
        .collect();

    if next_word.is_empty() {
        return true;
    }

    if ABBREVIATIONS.contains(&token.as_str()) {
        return false;
    }

    if !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()) {
        let next_lower = next_word.to_lowercase();
        if MONTHS.contains(&next_lower.as_str()) || next_word.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
    }

    !next_word.chars().next().is_some_and(char::is_lowercase)
}

/// Splits `text` into word tokens (maximal runs of word characters).
pub fn words(text: &str) -> Vec<&str> {
    WORD_RE.find_iter(text).map(|m| m.as_str()).collect()
}

/// Counts word tokens in `text`.
pub fn count_words(text: &str) -> usize {
    WORD_RE.find_iter(text).count()
}

/// Statistics derived from one article's text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextStatistics {
    pub sentence_count: usize,
    pub word_count: usize,
    pub syllable_count: usize,
    pub long_word_count: usize,
    pub polysyllabic_count: usize,
    pub monosyllabic_count: usize,
    pub average_sentence_length: f64,
    pub average_syllables_per_word: f64,
    /// Share of long words in percent, per the profile's [`LongWordRule`].
    pub percent_long_words: f64,
    /// Share of words with three or more syllables in percent.
    pub percent_polysyllabic: f64,
    /// Share of words with exactly one syllable in percent.
    pub percent_monosyllabic: f64,
    /// Polysyllabic words scaled to a 30-sentence sample.
    pub polysyllables_per_thirty_sentences: f64,
}

impl TextStatistics {
    /// Derives statistics from `text` using the profile's segmentation,
    /// syllable counter and long-word rule.
    ///
    /// Returns `None` if the text yields no sentences or no words.
    pub fn compute(text: &str, profile: &ScoringProfile) -> Option<Self> {
        let sentence_count = profile.sentences().split(text).len();
        let words = words(text);
        let word_count = words.len();

        if sentence_count == 0 || word_count == 0 {
            return None;
        }

        let counter = profile.syllables();
        let long_words = profile.long_words();

        let mut syllable_count = 0;
        let mut long_word_count = 0;
        let mut polysyllabic_count = 0;
        let mut monosyllabic_count = 0;

        for word in &words {
            let syllables = counter.count(word).max(1);
            syllable_count += syllables;
            if syllables >= 3 {
                polysyllabic_count += 1;
            } else if syllables == 1 {
                monosyllabic_count += 1;
            }
            if long_words.is_long(word) {
                long_word_count += 1;
            }
        }

        let words_f = word_count as f64;
        let sentences_f = sentence_count as f64;

        Some(Self {
            sentence_count,
            word_count,
            syllable_count,
            long_word_count,
            polysyllabic_count,
            monosyllabic_count,
            average_sentence_length: words_f / sentences_f,
            average_syllables_per_word: syllable_count as f64 / words_f,
            percent_long_words: long_word_count as f64 / words_f * 100.0,
            percent_polysyllabic: polysyllabic_count as f64 / words_f * 100.0,
            percent_monosyllabic: monosyllabic_count as f64 / words_f * 100.0,
            polysyllables_per_thirty_sentences: polysyllabic_count as f64 * 30.0 / sentences_f,
        })
    }
}
