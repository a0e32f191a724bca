//! Search intent classification from title, first heading and opening text.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::parse::Document;

/// Characters of main text inspected for content patterns.
const CONTENT_WINDOW: usize = 2000;
const KEYWORD_POINTS: u32 = 3;
const CONTENT_POINTS: u32 = 2;
const ESTIMATED_KEYWORD_CHARS: usize = 60;

static EXPLANATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(ist|sind|bedeutet|bezeichnet|definiert)\b").expect("valid explanation regex")
});
static CALL_TO_ACTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(jetzt|hier|klicken|bestellen|kaufen|anmelden)\b").expect("valid call to action regex")
});
static LOCAL_INFO_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(adresse|telefon|öffnungszeiten|standort|weg)\b").expect("valid local info regex")
});

/// Search intent categories, in tie-breaking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    KnowSimple,
    KnowComplex,
    DoTransactional,
    WebsiteNavigational,
    VisitInPerson,
}

impl Intent {
    pub const ALL: [Intent; 5] = [
        Intent::KnowSimple,
        Intent::KnowComplex,
        Intent::DoTransactional,
        Intent::WebsiteNavigational,
        Intent::VisitInPerson,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Intent::KnowSimple => "Know Simple",
            Intent::KnowComplex => "Know Complex",
            Intent::DoTransactional => "Do Transactional",
            Intent::WebsiteNavigational => "Website Navigational",
            Intent::VisitInPerson => "Visit In Person",
        }
    }

    /// Cues looked for in the lowercase title and first `<h1>`.
    fn keyword_cues(&self) -> &'static [&'static str] {
        match self {
            Intent::KnowSimple => &["was ist", "definition", "bedeutung", "erkl"],
            Intent::KnowComplex => &["wie", "warum", "ratgeber", "anleitung", "guide"],
            Intent::DoTransactional => &["kaufen", "bestellen", "download", "anmelden", "buchen"],
            Intent::WebsiteNavigational => &["login", "kontakt", "impressum", "startseite"],
            Intent::VisitInPerson => &["in", "bei", "nähe", "adresse", "öffnungszeiten"],
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IntentScore {
    pub intent: Intent,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchIntent {
    /// Page title cut to 60 characters.
    pub estimated_keyword: Option<String>,
    pub primary: Intent,
    /// Up to two runners-up with a positive score.
    pub secondary: Vec<Intent>,
    /// Scores in declaration order.
    pub scores: Vec<IntentScore>,
}

pub fn classify_intent(doc: &Document, main_text: &str) -> SearchIntent {
    let title = doc.title().unwrap_or_default();
    let h1 = match doc.select_first("h1") {
        Ok(Some(h1)) => h1.text(),
        _ => String::new(),
    };
    let heading_text = format!("{} {}", title, h1).to_lowercase();
    let opening: String = main_text.chars().take(CONTENT_WINDOW).collect::<String>().to_lowercase();

    let scores: Vec<IntentScore> = Intent::ALL
        .iter()
        .map(|&intent| {
            let mut score = 0;
            if intent.keyword_cues().iter().any(|cue| heading_text.contains(cue)) {
                score += KEYWORD_POINTS;
            }
            if content_pattern_matches(intent, &opening) {
                score += CONTENT_POINTS;
            }
            IntentScore { intent, score }
        })
        .collect();

    let mut ranked = scores.clone();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));

    let primary = ranked[0].intent;
    let secondary = ranked[1..3].iter().filter(|s| s.score > 0).map(|s| s.intent).collect();

    let title = title.trim();
    let estimated_keyword =
        (!title.is_empty()).then(|| title.chars().take(ESTIMATED_KEYWORD_CHARS).collect::<String>());

    SearchIntent { estimated_keyword, primary, secondary, scores }
}

fn content_pattern_matches(intent: Intent, opening: &str) -> bool {
    match intent {
        Intent::KnowComplex => EXPLANATION_RE.find_iter(opening).count() > 5,
        Intent::DoTransactional => CALL_TO_ACTION_RE.find_iter(opening).count() > 3,
        Intent::VisitInPerson => LOCAL_INFO_RE.find_iter(opening).count() > 3,
        Intent::KnowSimple | Intent::WebsiteNavigational => false,
    }
}

impl SearchIntent {
    pub fn score_of(&self, intent: Intent) -> u32 {
        self.scores
            .iter()
            .find(|s| s.intent == intent)
            .map(|s| s.score)
            .unwrap_or(0)
    }
}
