//! Coarse 1–3 difficulty classification.
//!
//! Independent of the HIX: three dimensions (sentence length, share of very
//! long words, density of nominalizing suffixes) each earn 0–2 points and
//! the sum is bucketed.

use serde::Serialize;

use crate::text::{SentenceSplitter, words};

/// Suffixes typical for nominal, technical German.
pub const TECHNICAL_SUFFIXES: &[&str] = &["ung", "heit", "keit", "ismus", "ation", "ität", "ieren"];

/// Words with more characters than this count as very long.
const VERY_LONG_WORD: usize = 10;

/// Per-dimension points and the resulting score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComplexityAssessment {
    /// Final score, 1 (easy) to 3 (hard).
    pub score: u8,
    pub points: u8,
    pub average_sentence_length: f64,
    pub long_word_ratio: f64,
    pub suffix_ratio: f64,
    pub sentence_length_points: u8,
    pub long_word_points: u8,
    pub suffix_points: u8,
}

impl ComplexityAssessment {
    fn minimal() -> Self {
        Self {
            score: 1,
            points: 0,
            average_sentence_length: 0.0,
            long_word_ratio: 0.0,
            suffix_ratio: 0.0,
            sentence_length_points: 0,
            long_word_points: 0,
            suffix_points: 0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self.score {
            1 => "easy",
            2 => "medium",
            _ => "hard",
        }
    }
}

/// True if `word` ends in a technical suffix with at least one character
/// before it. Case-insensitive.
pub fn has_technical_suffix(word: &str) -> bool {
    let lower = word.to_lowercase();
    let len = lower.chars().count();
    TECHNICAL_SUFFIXES
        .iter()
        .any(|suffix| lower.ends_with(suffix) && len > suffix.chars().count())
}

fn threshold_points(value: f64, medium: f64, high: f64) -> u8 {
    if value > high {
        2
    } else if value > medium {
        1
    } else {
        0
    }
}

/// Full complexity breakdown for `text`.
///
/// Sentences are split on terminal punctuation. Text without words or
/// sentences is classified as easy.
pub fn assess_complexity(text: &str) -> ComplexityAssessment {
    let sentences = SentenceSplitter::Terminal.split(text);
    let words = words(text);

    if sentences.is_empty() || words.is_empty() {
        return ComplexityAssessment::minimal();
    }

    let word_count = words.len() as f64;
    let average_sentence_length = word_count / sentences.len() as f64;
    let long_word_ratio = words.iter().filter(|w| w.chars().count() > VERY_LONG_WORD).count() as f64 / word_count;
    let suffix_ratio = words.iter().filter(|w| has_technical_suffix(w)).count() as f64 / word_count;

    let sentence_length_points = threshold_points(average_sentence_length, 15.0, 25.0);
    let long_word_points = threshold_points(long_word_ratio, 0.10, 0.20);
    let suffix_points = threshold_points(suffix_ratio, 0.05, 0.15);
    let points = sentence_length_points + long_word_points + suffix_points;

    let score = match points {
        0..=1 => 1,
        2..=3 => 2,
        _ => 3,
    };

    ComplexityAssessment {
        score,
        points,
        average_sentence_length,
        long_word_ratio,
        suffix_ratio,
        sentence_length_points,
        long_word_points,
        suffix_points,
    }
}

/// Complexity score of `text`, 1 to 3.
///
/// # Example
///
/// ```rust
/// use lesbar_core::score_complexity;
///
/// assert_eq!(score_complexity("Dies ist ein Test. Das ist einfach."), 1);
/// assert_eq!(score_complexity(""), 1);
/// ```
pub fn score_complexity(text: &str) -> u8 {
    assess_complexity(text).score
}
