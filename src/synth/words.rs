//! Word pools feeding the synthesis strategies.
//!
//! Kept as static, thematically grouped lists. The [`WordSource`] trait is
//! the seam for swapping these out (or for an external list provider); the
//! synthesizer falls back to pure synthetic generation when a source fails.

use crate::error::{DomainHunterError, Result};

/// Sector vocabulary (lowercase ASCII, ready for combination)
pub const TECH_WORDS: &[&str] = &[
    "tech", "code", "data", "byte", "cloud", "pixel", "logic", "stack",
    "node", "grid", "sync", "wire", "chip", "core", "dev", "net",
];

pub const FINANCE_WORDS: &[&str] = &[
    "pay", "coin", "cash", "fund", "bank", "trade", "asset", "vault",
    "ledger", "credit", "yield", "capital", "wealth", "invest",
];

pub const HEALTH_WORDS: &[&str] = &[
    "care", "vital", "pulse", "heal", "fit", "well", "medi", "cure",
    "life", "nutri", "derma", "clinic",
];

pub const FOOD_WORDS: &[&str] = &[
    "taste", "fresh", "spice", "chef", "dish", "bite", "grill", "sweet",
    "sofra", "lezzet", "gurme", "mutfak",
];

pub const TRAVEL_WORDS: &[&str] = &[
    "trip", "tour", "route", "globe", "voyage", "nomad", "transit",
    "wander", "journey", "atlas",
];

pub const EDUCATION_WORDS: &[&str] = &[
    "learn", "study", "mentor", "akademi", "okul", "kurs", "ders",
    "campus", "skill", "tutor",
];

/// Current trend vocabulary, combined with seeds in trend strategies
pub const TREND_WORDS: &[&str] = &[
    "ai", "app", "lab", "hub", "pro", "go", "now", "meta", "nano",
    "eco", "bio", "neo", "next", "smart", "digital", "online",
];

/// Antonym / complement pairs for meaningful combination
pub const MEANINGFUL_PAIRS: &[(&str, &str)] = &[
    ("day", "night"), ("fast", "easy"), ("big", "small"), ("hot", "cool"),
    ("old", "new"), ("dark", "light"), ("open", "free"), ("safe", "fast"),
    ("siyah", "beyaz"), ("gece", "gunduz"), ("alsat", "net"),
];

/// Words grouped by shared sound for phonetic pairing
pub const PHONETIC_GROUPS: &[&[&str]] = &[
    &["zen", "zip", "zoom", "zest"],
    &["flux", "flex", "flow", "flare"],
    &["nova", "nori", "nimbus", "nero"],
    &["kilo", "kite", "koro", "kuma"],
    &["vista", "viva", "volt", "vera"],
];

/// Emotion/psychology vocabulary: trust, power, speed, comfort
pub const PSYCHOLOGY_WORDS: &[&str] = &[
    "trust", "secure", "guven", "prime", "power", "boost", "rapid",
    "swift", "calm", "happy", "mutlu", "kolay", "hizli", "dost",
];

/// Filler words for best-effort padding of under-length names
pub const FILLER_WORDS: &[&str] = &["hub", "net", "pro", "lab", "lio", "go"];

/// Sector-tuned character sets for the synthetic consonant-vowel generator
pub fn sector_special_chars(sector: &str) -> &'static [char] {
    match sector {
        "tech" => &['x', 'z', 'q', 'k'],
        "finance" => &['v', 'k', 'p'],
        "health" => &['m', 'l', 'v'],
        "food" => &['s', 'l', 'm'],
        _ => &['n', 'r', 'k'],
    }
}

/// Sector vocabulary lookup; unknown sectors get the tech pool
pub fn sector_pool(sector: &str) -> &'static [&'static str] {
    match sector {
        "tech" | "teknoloji" => TECH_WORDS,
        "finance" | "finans" => FINANCE_WORDS,
        "health" | "saglik" => HEALTH_WORDS,
        "food" | "yemek" => FOOD_WORDS,
        "travel" | "seyahat" => TRAVEL_WORDS,
        "education" | "egitim" => EDUCATION_WORDS,
        _ => TECH_WORDS,
    }
}

/// Names of all known sectors (for random sector picks)
pub const SECTORS: &[&str] = &["tech", "finance", "health", "food", "travel", "education"];

/// Pool kinds a [`WordSource`] can serve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordPool {
    Sector,
    Trend,
    Psychology,
    Filler,
}

/// Seam for word-list retrieval. Implementations may be backed by static
/// tables, files, or a remote service; any error makes the synthesizer fall
/// back to synthetic generation instead of propagating.
pub trait WordSource: Send + Sync {
    fn words(&self, pool: WordPool, sector: Option<&str>) -> Result<Vec<String>>;
    fn meaningful_pairs(&self) -> Result<Vec<(String, String)>>;
    fn phonetic_groups(&self) -> Result<Vec<Vec<String>>>;
}

/// Static built-in word source
pub struct BuiltinWords;

impl WordSource for BuiltinWords {
    fn words(&self, pool: WordPool, sector: Option<&str>) -> Result<Vec<String>> {
        let list: &[&str] = match pool {
            WordPool::Sector => sector_pool(sector.unwrap_or("tech")),
            WordPool::Trend => TREND_WORDS,
            WordPool::Psychology => PSYCHOLOGY_WORDS,
            WordPool::Filler => FILLER_WORDS,
        };
        if list.is_empty() {
            return Err(DomainHunterError::generation("empty word pool"));
        }
        Ok(list.iter().map(|s| s.to_string()).collect())
    }

    fn meaningful_pairs(&self) -> Result<Vec<(String, String)>> {
        Ok(MEANINGFUL_PAIRS
            .iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect())
    }

    fn phonetic_groups(&self) -> Result<Vec<Vec<String>>> {
        Ok(PHONETIC_GROUPS
            .iter()
            .map(|g| g.iter().map(|s| s.to_string()).collect())
            .collect())
    }
}
