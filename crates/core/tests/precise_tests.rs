//! Readability properties under the dictionary-backed precise profile
#![cfg(feature = "hyphenation")]

use lesbar_core::*;
use rstest::rstest;

fn precise_scorer() -> HixScorer {
    HixScorer::with_profile(ScoringProfile::precise().unwrap())
}

fn dense_sentence() -> String {
    let words = [
        "Digitalisierungsstrategie",
        "Implementierungsorganisation",
        "Administration",
        "Verwaltungsmodernisierung",
        "Kommunikationsinfrastruktur",
        "Qualitätssicherungsevaluation",
        "Standardisierung",
        "Informationsverarbeitung",
    ];
    let mut sentence = (0..40).map(|i| words[i % words.len()]).collect::<Vec<_>>().join(" ");
    sentence.push('.');
    sentence
}

#[test]
fn test_precise_simple_text_is_easy() {
    let verdict = precise_scorer().score("Dies ist ein Test. Das ist einfach.");

    assert!(verdict.hix >= 16.0, "hix = {}", verdict.hix);
    assert!(matches!(verdict.bucket, Some(HixBucket::VeryEasy) | Some(HixBucket::Accessible)));
}

#[test]
fn test_precise_dense_sentence_is_expert() {
    let text = dense_sentence();
    let verdict = precise_scorer().score(&text);

    assert!(verdict.hix < 10.0, "hix = {}", verdict.hix);
    assert_eq!(verdict.bucket, Some(HixBucket::Expert));
    assert_eq!(score_complexity(&text), 3);
}

#[rstest]
#[case("Dies ist ein Test. Das ist einfach.")]
#[case("Die Verwaltungsvorschrift regelt die Zuständigkeiten der Behörden. Bürgerinnen und Bürger können Anträge online stellen. Das spart Zeit.")]
#[case("Dr. Müller bzw. Frau Prof. Schmidt kommen z. B. morgen um 10 Uhr.")]
#[case("İstanbul liegt am Bosporus. Die ẞTRASSE ist breit. Der Schiﬀ fährt. 東京は大きい。")]
fn test_precise_score_stays_in_range(#[case] text: &str) {
    let verdict = precise_scorer().score(text);

    assert!(verdict.is_scored());
    assert!((0.0..=20.0).contains(&verdict.hix), "hix = {}", verdict.hix);
}

#[test]
fn test_precise_dense_text_in_range() {
    let verdict = precise_scorer().score(&dense_sentence());
    assert!((0.0..=20.0).contains(&verdict.hix));
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("?!...")]
#[case("...")]
fn test_precise_unscorable_text(#[case] text: &str) {
    let verdict = precise_scorer().score(text);

    assert_eq!(verdict.hix, 0.0);
    assert!(verdict.bucket.is_none());
    assert!(!verdict.is_scored());
}

#[test]
fn test_precise_profile_kind_loads() {
    let profile = ProfileKind::Precise.load().unwrap();
    let verdict = HixScorer::with_profile(profile).score("Der Hund bellt. Die Katze schläft.");
    assert!(verdict.is_scored());
}
