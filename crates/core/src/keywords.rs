//! Keyword extraction: frequent bigrams plus repeated technical terms.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::text::words;

/// German stop words, plus a few domain words too common to be themes.
pub const GERMAN_STOPWORDS: &[&str] = &[
    "der", "die", "das", "und", "in", "zu", "den", "für", "von", "mit", "ist", "im", "des", "sich", "auf", "eine",
    "auch", "werden", "an", "wie", "oder", "einem", "einer", "bei", "nach", "um", "über", "zum", "zur", "aus", "dem",
    "als", "sie", "sind", "noch", "mehr", "kann", "wurde", "wird", "haben", "hat", "war", "durch", "vor", "bis",
    "sein", "nicht", "nur", "wenn", "dass", "können", "welche", "welcher", "welches", "dieser", "diese", "dieses",
    "ihrer", "seinem", "seinen", "innen", "außen", "sowie", "dabei", "dazu", "bereits", "sehr", "heute", "immer",
    "etwa", "meist", "gegen", "unter", "zwischen", "seit", "während", "denn", "weil", "obwohl", "sodass", "worden",
    "konnte", "sollte", "würde", "könnte", "müsste", "alle", "allem", "allen", "aller", "alles", "manche", "mancher",
    "manches", "jede", "jeder", "jedes", "einige", "einigen", "einiger", "einiges", "viele", "vielen", "vieler",
    "vieles", "wenige", "wenigen", "weniger", "andere", "anderen", "anderer", "anderes", "mehrere", "mehreren",
    "mehrerer", "ihre", "ihrem", "ihren", "ihres", "unsere", "unserem", "unseren", "gibt", "geben", "gegeben",
    "geht", "gehen", "gegangen", "macht", "machen", "gemacht", "sagt", "sagen", "gesagt", "kommt", "kommen",
    "gekommen", "steht", "stehen", "gestanden", "liegt", "liegen", "gelegen", "einsatz", "projekt", "beschäftigten",
    "arbeit", "unternehmen",
];

/// Suffixes that mark a word as a technical term. Unlike the complexity
/// classifier this list omits `-ieren`, which marks verbs.
const TERM_SUFFIXES: &[&str] = &["ung", "heit", "keit", "ismus", "ation", "ität"];

const BIGRAM_LIMIT: usize = 10;
const TERM_LIMIT: usize = 5;
const TERM_MIN_COUNT: usize = 3;

pub fn is_stopword(word: &str) -> bool {
    GERMAN_STOPWORDS.contains(&word)
}

/// Kind of extracted keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeywordKind {
    Bigram,
    Term,
}

impl fmt::Display for KeywordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeywordKind::Bigram => f.write_str("bigram"),
            KeywordKind::Term => f.write_str("term"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Keyword {
    pub text: String,
    pub count: usize,
    pub kind: KeywordKind,
}

/// Counts items and returns them most common first. Ties keep first-seen
/// order. `limit` of `None` returns everything.
pub fn most_common<I>(items: I, limit: Option<usize>) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = String>,
{
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    for (position, item) in items.into_iter().enumerate() {
        counts.entry(item).or_insert((0, position)).0 += 1;
    }

    let mut ranked: Vec<(String, usize, usize)> = counts
        .into_iter()
        .map(|(item, (count, first))| (item, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(|(item, count, _)| (item, count))
        .collect()
}

fn content_words(text: &str, min_len_exclusive: usize) -> Vec<String> {
    words(&text.to_lowercase())
        .into_iter()
        .filter(|w| w.chars().count() > min_len_exclusive && !is_stopword(w))
        .map(str::to_string)
        .collect()
}

/// Most frequent n-grams over lowercase content words (longer than three
/// characters and not stop words). Stop words are dropped before the
/// n-grams are formed, so grams can span them.
pub fn extract_ngrams(text: &str, n: usize, top_k: usize) -> Vec<(String, usize)> {
    if n == 0 {
        return Vec::new();
    }

    let words = content_words(text, 3);
    let grams = words.windows(n).map(|w| w.join(" "));
    most_common(grams, Some(top_k))
}

fn is_technical_term(word: &str) -> bool {
    TERM_SUFFIXES.iter().any(|s| word.ends_with(s)) || word.chars().count() > 10
}

/// Top bigrams followed by repeated technical terms, truncated to `top_k`.
///
/// Terms are words longer than five characters that end in a technical
/// suffix or are longer than ten characters; of the five most frequent,
/// those occurring at least three times are kept.
pub fn extract_keywords(text: &str, top_k: usize) -> Vec<Keyword> {
    let mut keywords: Vec<Keyword> = extract_ngrams(text, 2, BIGRAM_LIMIT)
        .into_iter()
        .map(|(text, count)| Keyword { text, count, kind: KeywordKind::Bigram })
        .collect();

    let terms = content_words(text, 5).into_iter().filter(|w| is_technical_term(w));
    keywords.extend(
        most_common(terms, Some(TERM_LIMIT))
            .into_iter()
            .filter(|(_, count)| *count >= TERM_MIN_COUNT)
            .map(|(text, count)| Keyword { text, count, kind: KeywordKind::Term }),
    );

    keywords.truncate(top_k);
    keywords
}
