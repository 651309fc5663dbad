//! Pure synthesis strategies.
//!
//! Each strategy maps `(inputs, rng) -> String`. Output is raw: the
//! synthesizer runs every result through the same policy cleaning step, so
//! strategies never worry about casing, length, or character rules.

use rand::seq::SliceRandom;
use rand::Rng;

const CONSONANTS: &[char] = &[
    'b', 'c', 'd', 'f', 'g', 'h', 'k', 'l', 'm', 'n', 'p', 'r', 's', 't', 'v', 'z',
];
const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u'];

fn pick<'a, T>(items: &'a [T], rng: &mut impl Rng) -> Option<&'a T> {
    items.choose(rng)
}

/// Seed word combined with a sector word, either order
pub fn sector_combo(seed: &str, sector_words: &[String], rng: &mut impl Rng) -> String {
    match pick(sector_words, rng) {
        Some(word) if rng.gen_bool(0.5) => format!("{}{}", seed, word),
        Some(word) => format!("{}{}", word, seed),
        None => seed.to_string(),
    }
}

/// Seed word combined with a trend word; trend words read better as affixes
pub fn trend_combo(seed: &str, trends: &[String], rng: &mut impl Rng) -> String {
    match pick(trends, rng) {
        Some(trend) if rng.gen_bool(0.7) => format!("{}{}", seed, trend),
        Some(trend) => format!("{}{}", trend, seed),
        None => seed.to_string(),
    }
}

/// Antonym/complement pairing, joined directly or hyphenated
pub fn meaningful_combo(pairs: &[(String, String)], rng: &mut impl Rng) -> String {
    match pick(pairs, rng) {
        Some((a, b)) if rng.gen_bool(0.8) => format!("{}{}", a, b),
        Some((a, b)) => format!("{}-{}", a, b),
        None => String::new(),
    }
}

/// Two words drawn from the same phonetic group
pub fn phonetic_combo(groups: &[Vec<String>], rng: &mut impl Rng) -> String {
    let Some(group) = pick(groups, rng) else {
        return String::new();
    };
    let Some(first) = pick(group, rng) else {
        return String::new();
    };
    let second = pick(group, rng).filter(|w| *w != first);
    match second {
        Some(second) => format!("{}{}", first, second),
        None => first.clone(),
    }
}

/// Seed word paired with an emotion/psychology word
pub fn psychology_combo(seed: &str, words: &[String], rng: &mut impl Rng) -> String {
    match pick(words, rng) {
        Some(word) if rng.gen_bool(0.5) => format!("{}{}", word, seed),
        Some(word) => format!("{}{}", seed, word),
        None => seed.to_string(),
    }
}

/// Synthetic consonant-vowel alternation, tuned by sector special
/// characters that are woven in to keep the sector's sound.
pub fn synthetic_name(length: usize, specials: &[char], rng: &mut impl Rng) -> String {
    let length = length.max(3);
    let mut out = String::with_capacity(length);
    let start_with_consonant = rng.gen_bool(0.8);

    for i in 0..length {
        let want_consonant = (i % 2 == 0) == start_with_consonant;
        let ch = if want_consonant {
            if !specials.is_empty() && rng.gen_bool(0.25) {
                *pick(specials, rng).unwrap_or(&'n')
            } else {
                *pick(CONSONANTS, rng).unwrap_or(&'n')
            }
        } else {
            *pick(VOWELS, rng).unwrap_or(&'a')
        };
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::thread_rng;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_sector_combo_contains_seed() {
        let mut rng = thread_rng();
        let words = strings(&["tech", "code"]);
        for _ in 0..10 {
            let name = sector_combo("shop", &words, &mut rng);
            assert!(name.contains("shop"));
            assert!(name.len() > "shop".len());
        }
    }

    #[test]
    fn test_meaningful_combo_uses_pair() {
        let mut rng = thread_rng();
        let pairs = vec![("day".to_string(), "night".to_string())];
        for _ in 0..10 {
            let name = meaningful_combo(&pairs, &mut rng);
            assert!(name.contains("day") && name.contains("night"));
        }
    }

    #[test]
    fn test_phonetic_combo_stays_in_group() {
        let mut rng = thread_rng();
        let groups = vec![strings(&["zen", "zip", "zoom"])];
        for _ in 0..10 {
            let name = phonetic_combo(&groups, &mut rng);
            assert!(!name.is_empty());
            assert!(name.starts_with('z'));
        }
    }

    #[test]
    fn test_synthetic_name_alternates() {
        let mut rng = thread_rng();
        for _ in 0..20 {
            let name = synthetic_name(6, &['x', 'z'], &mut rng);
            assert_eq!(name.len(), 6);
            assert!(name.chars().all(|c| c.is_ascii_lowercase()));
            // Alternation never yields two vowels in a row
            let vowels: Vec<bool> = name.chars().map(|c| VOWELS.contains(&c)).collect();
            for pair in vowels.windows(2) {
                assert!(pair[0] != pair[1], "no alternation in {:?}", name);
            }
        }
    }

    #[test]
    fn test_synthetic_name_minimum_length() {
        let mut rng = thread_rng();
        assert!(synthetic_name(1, &[], &mut rng).len() >= 3);
    }

    #[test]
    fn test_empty_pools_degrade_gracefully() {
        let mut rng = thread_rng();
        assert_eq!(sector_combo("seed", &[], &mut rng), "seed");
        assert_eq!(meaningful_combo(&[], &mut rng), "");
        assert_eq!(phonetic_combo(&[], &mut rng), "");
    }
}
