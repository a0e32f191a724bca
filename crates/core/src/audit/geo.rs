//! Local SEO signals.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::parse::Document;

pub const GERMAN_CITIES: &[&str] = &[
    "berlin", "hamburg", "münchen", "köln", "frankfurt", "stuttgart", "düsseldorf", "dortmund", "essen", "leipzig",
    "bremen", "dresden", "hannover", "nürnberg", "duisburg",
];

/// JSON-LD types that mark a local business.
pub const LOCAL_SCHEMA_TYPES: &[&str] = &["LocalBusiness", "Restaurant", "Store", "Organization", "Place"];

pub const MAX_GEO_SCORE: u8 = 10;

const CITIES_LISTED: usize = 5;

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\+49|0)\s?(\d{2,5})[\s/-]?\d{3,8}").expect("valid phone regex"));
static ADDRESS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{5}\s+[A-ZÄÖÜ][a-zäöüß]+").expect("valid address regex"));
static OPENING_HOURS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(öffnungszeiten|geöffnet|montag|dienstag)").expect("valid opening hours regex"));
static MAPS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)google.com/maps").expect("valid maps regex"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeoSignals {
    pub phone_count: usize,
    /// Postcode followed by a capitalised place name.
    pub address_count: usize,
    pub opening_hours: bool,
    pub maps_embed: bool,
    /// First five cities mentioned, in list order.
    pub cities: Vec<String>,
    pub city_count: usize,
    pub local_schema: Option<String>,
    /// 0 to 10.
    pub score: u8,
}

impl GeoSignals {
    pub fn has_phone(&self) -> bool {
        self.phone_count > 0
    }

    pub fn has_address(&self) -> bool {
        self.address_count > 0
    }

    pub fn has_local_context(&self) -> bool {
        self.city_count > 0
    }
}

pub fn analyze_geo(doc: &Document, main_text: &str) -> GeoSignals {
    let lower = main_text.to_lowercase();
    let found: Vec<&str> = GERMAN_CITIES.iter().copied().filter(|city| lower.contains(city)).collect();

    let maps_embed = doc
        .select("iframe[src]")
        .unwrap_or_default()
        .iter()
        .any(|frame| frame.attr("src").is_some_and(|src| MAPS_RE.is_match(src)));

    let mut signals = GeoSignals {
        phone_count: PHONE_RE.find_iter(main_text).count(),
        address_count: ADDRESS_RE.find_iter(main_text).count(),
        opening_hours: OPENING_HOURS_RE.is_match(main_text),
        maps_embed,
        cities: found.iter().take(CITIES_LISTED).map(|c| c.to_string()).collect(),
        city_count: found.len(),
        local_schema: local_schema_type(doc),
        score: 0,
    };
    signals.score = geo_score(&signals);
    signals
}

fn local_schema_type(doc: &Document) -> Option<String> {
    doc.json_ld().iter().find_map(|value| match value.get("@type") {
        Some(Value::String(t)) if LOCAL_SCHEMA_TYPES.contains(&t.as_str()) => Some(t.clone()),
        _ => None,
    })
}

fn geo_score(signals: &GeoSignals) -> u8 {
    let points = [
        (signals.has_phone(), 2),
        (signals.has_address(), 2),
        (signals.opening_hours, 1),
        (signals.maps_embed, 2),
        (signals.has_local_context(), 2),
        (signals.local_schema.is_some(), 1),
    ];

    points.iter().filter(|(hit, _)| *hit).map(|(_, p)| p).sum::<u8>().min(MAX_GEO_SCORE)
}
