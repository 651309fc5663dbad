//! Quality scoring for candidate names.
//!
//! Scores rank candidates for presentation only; they never gate
//! availability correctness.

use crate::policy::{ConfigPolicy, SharedPolicy};

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

/// Natural, brandable ending consonants
const GOOD_ENDINGS: &[char] = &['n', 'r', 's', 'l'];

/// Sequences that are hard to pronounce
const BANNED_SEQS: &[&str] = &[
    "vv", "rr", "xx", "qq", "yy", "vx", "xv", "xr", "rx", "rq", "qr",
];

/// Short prefixes that read well and carry search value
const VALUABLE_PREFIXES: &[&str] = &[
    "go", "my", "ai", "be", "we", "up", "on", "in", "to", "do",
];

/// Suffixes that read well and carry search value
const VALUABLE_SUFFIXES: &[&str] = &[
    "ly", "io", "ai", "fy", "er", "en", "it", "me", "us", "go",
];

/// Deterministic 0–100 scorer over a name string and the current policy
/// bonus weights.
pub struct QualityScorer {
    policy: SharedPolicy,
}

impl QualityScorer {
    pub fn new(policy: SharedPolicy) -> Self {
        Self { policy }
    }

    /// Score a candidate name. Always in `[0, 100]`; additive overflow is
    /// silently capped.
    pub fn score(&self, name: &str) -> u8 {
        let policy = self.policy.read().clone();
        score_with(name, &policy)
    }
}

/// Score against an explicit policy value
pub fn score_with(name: &str, policy: &ConfigPolicy) -> u8 {
    if name.is_empty() {
        return 0;
    }

    let mut total: u32 = 0;

    // Shorter names score higher
    total += match name.len() {
        0..=8 => 30,
        9..=12 => 20,
        _ => 10,
    };

    if pronounceable_ratio(name) {
        total += 25;
    }

    let bonuses = policy.score_bonuses;
    if !name.chars().any(|c| c.is_ascii_digit()) {
        total += bonuses.no_digits as u32;
    }
    if !name.contains('-') {
        total += bonuses.no_hyphens as u32;
    }
    if is_brandable(name) {
        total += bonuses.brandable as u32;
    }
    if is_seo_friendly(name) {
        total += bonuses.seo_friendly as u32;
    }
    if has_pronounceable_ending(name) {
        total += bonuses.pronounceable_ending as u32;
    }
    if is_unique_looking(name) {
        total += bonuses.uniqueness as u32;
    }

    total.min(100) as u8
}

/// Vowel/consonant ratio inside the readable window `[0.3, 0.8]`
fn pronounceable_ratio(name: &str) -> bool {
    let vowels = name.chars().filter(|c| VOWELS.contains(c)).count();
    let consonants = name
        .chars()
        .filter(|c| c.is_ascii_lowercase() && !VOWELS.contains(c))
        .count();
    if consonants == 0 {
        return false;
    }
    let ratio = vowels as f64 / consonants as f64;
    (0.3..=0.8).contains(&ratio)
}

fn is_brandable(name: &str) -> bool {
    let ends_well = name
        .chars()
        .last()
        .is_some_and(|c| GOOD_ENDINGS.contains(&c));
    ends_well && !BANNED_SEQS.iter().any(|seq| name.contains(seq))
}

fn is_seo_friendly(name: &str) -> bool {
    VALUABLE_PREFIXES.iter().any(|p| name.starts_with(p))
        || VALUABLE_SUFFIXES.iter().any(|s| name.ends_with(s))
}

fn has_pronounceable_ending(name: &str) -> bool {
    name.chars()
        .last()
        .is_some_and(|c| VOWELS.contains(&c) || GOOD_ENDINGS.contains(&c))
}

fn is_unique_looking(name: &str) -> bool {
    let chars: Vec<char> = name.chars().collect();
    let no_adjacent_repeats = chars.windows(2).all(|w| w[0] != w[1]);
    let distinct: std::collections::HashSet<char> = chars.iter().copied().collect();
    no_adjacent_repeats && distinct.len() >= 4
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy;

    fn default_scorer() -> QualityScorer {
        QualityScorer::new(policy::shared(ConfigPolicy::default()))
    }

    #[test]
    fn test_score_bounds() {
        let scorer = default_scorer();
        let inputs = [
            "",
            "a",
            "nexor",
            "smarttech24",
            "a-very-long-hyphen-name",
            "xyzzy",
            "0123456789",
            "gopher",
        ];
        for input in inputs {
            let s = scorer.score(input);
            assert!(s <= 100, "score {} out of bounds for {:?}", s, input);
        }
    }

    #[test]
    fn test_score_deterministic() {
        let scorer = default_scorer();
        assert_eq!(scorer.score("nexor"), scorer.score("nexor"));
    }

    #[test]
    fn test_short_clean_name_beats_long_noisy_name() {
        let scorer = default_scorer();
        assert!(scorer.score("nexor") > scorer.score("my-2nd-domain-name-99"));
    }

    #[test]
    fn test_length_buckets() {
        let policy = ConfigPolicy::default();
        // Same cleanliness profile, different lengths
        let short = score_with("bandor", &policy);
        let medium = score_with("bandorantes", &policy);
        let long = score_with("bandorantesfurlan", &policy);
        assert!(short > medium);
        assert!(medium > long);
    }

    #[test]
    fn test_digit_and_hyphen_penalties() {
        let policy = ConfigPolicy::default();
        assert!(score_with("nexor", &policy) > score_with("nexor7", &policy));
        assert!(score_with("techshop", &policy) > score_with("tech-shop", &policy));
    }

    #[test]
    fn test_clamp_at_100() {
        // Maxed-out bonus weights force additive overflow
        let mut policy = ConfigPolicy::default();
        policy.score_bonuses.no_digits = 100;
        policy.score_bonuses.no_hyphens = 100;
        assert_eq!(score_with("nexor", &policy), 100);
    }

    #[test]
    fn test_smarttech24_scenario() {
        let scorer = default_scorer();
        let s = scorer.score("smarttech24");
        assert!(s <= 100);
        assert!(s > 0);
    }

    #[test]
    fn test_empty_scores_zero() {
        let scorer = default_scorer();
        assert_eq!(scorer.score(""), 0);
    }
}
