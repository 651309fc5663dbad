//! Candidate name synthesis.
//!
//! One synthesizer, many strategies: each strategy is a pure function
//! behind the [`Strategy`] tag, fed from pluggable word pools. Every raw
//! result flows through the same policy cleaning step, so all candidates
//! obey the active constraints no matter which strategy produced them.

pub mod strategies;
pub mod words;

pub use words::{BuiltinWords, WordPool, WordSource};

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use std::sync::Arc;

use crate::llm::{build_candidate_prompt, parse_candidate_lines, TextGenerator};
use crate::policy::{ConfigPolicy, SharedPolicy};
use crate::types::{Candidate, Seed, SeedMode, Strategy};
use words::{sector_special_chars, SECTORS};

const HEURISTIC_STRATEGIES: &[Strategy] = &[
    Strategy::SectorSpecific,
    Strategy::TrendCombo,
    Strategy::MeaningfulCombo,
    Strategy::PhoneticOptimized,
    Strategy::PsychologyBased,
    Strategy::Synthetic,
];

/// Candidate name synthesizer
pub struct NameSynthesizer {
    policy: SharedPolicy,
    source: Arc<dyn WordSource>,
}

impl NameSynthesizer {
    /// Create a synthesizer backed by the built-in word pools
    pub fn new(policy: SharedPolicy) -> Self {
        Self::with_source(policy, Arc::new(BuiltinWords))
    }

    /// Create a synthesizer with a custom word source
    pub fn with_source(policy: SharedPolicy, source: Arc<dyn WordSource>) -> Self {
        Self { policy, source }
    }

    /// Produce up to `count` distinct candidates for the seed. Finite and
    /// freshly randomized per call; not restartable.
    pub fn synthesize(&self, seed: &Seed, count: usize) -> Vec<Candidate> {
        let mut rng = rand::thread_rng();
        let policy = self.policy.read().clone();

        let mut seen: HashSet<String> = HashSet::new();
        let mut out = Vec::with_capacity(count);

        // Bounded attempts keep the call finite even when cleaning
        // collapses most raw results into duplicates.
        let max_attempts = count.saturating_mul(6) + 12;
        for _ in 0..max_attempts {
            if out.len() >= count {
                break;
            }
            let strategy = *HEURISTIC_STRATEGIES
                .choose(&mut rng)
                .unwrap_or(&Strategy::Synthetic);
            let raw = self.run_strategy(strategy, seed, &policy, &mut rng);
            if let Some(candidate) = self.finish(raw, strategy, &policy) {
                if seen.insert(candidate.name.clone()) {
                    out.push(candidate);
                }
            }
        }
        out
    }

    /// AI-assisted synthesis: ask the text-generation collaborator for a
    /// newline list of names, clean each like any other candidate. On any
    /// collaborator failure the heuristic strategies take over silently.
    pub async fn synthesize_ai(
        &self,
        generator: &dyn TextGenerator,
        topic: &str,
        count: usize,
    ) -> Vec<Candidate> {
        let prompt = build_candidate_prompt(topic, count);
        match generator.generate(&prompt).await {
            Ok(raw) => {
                let policy = self.policy.read().clone();
                let mut seen: HashSet<String> = HashSet::new();
                let mut out = Vec::with_capacity(count);
                for line in parse_candidate_lines(&raw) {
                    if out.len() >= count {
                        break;
                    }
                    if let Some(candidate) =
                        self.finish(line, Strategy::AiSuggestion, &policy)
                    {
                        if seen.insert(candidate.name.clone()) {
                            out.push(candidate);
                        }
                    }
                }
                if out.is_empty() {
                    tracing::debug!(provider = %generator.name(), "AI response yielded no usable candidates, falling back");
                    return self.synthesize(&Seed::keyword(topic), count);
                }
                out
            }
            Err(e) => {
                tracing::warn!(provider = %generator.name(), error = %e, "AI generation failed, falling back to heuristic strategies");
                self.synthesize(&Seed::keyword(topic), count)
            }
        }
    }

    fn run_strategy(
        &self,
        strategy: Strategy,
        seed: &Seed,
        policy: &ConfigPolicy,
        rng: &mut impl Rng,
    ) -> String {
        let sector = self.sector_name(seed, rng);
        let seed_word = self.seed_word(seed, &sector, policy, rng);

        let result = match strategy {
            Strategy::SectorSpecific => self
                .source
                .words(WordPool::Sector, Some(&sector))
                .map(|pool| strategies::sector_combo(&seed_word, &pool, rng)),
            Strategy::TrendCombo => self
                .source
                .words(WordPool::Trend, None)
                .map(|pool| strategies::trend_combo(&seed_word, &pool, rng)),
            Strategy::MeaningfulCombo => self
                .source
                .meaningful_pairs()
                .map(|pairs| strategies::meaningful_combo(&pairs, rng)),
            Strategy::PhoneticOptimized => self
                .source
                .phonetic_groups()
                .map(|groups| strategies::phonetic_combo(&groups, rng)),
            Strategy::PsychologyBased => self
                .source
                .words(WordPool::Psychology, None)
                .map(|pool| strategies::psychology_combo(&seed_word, &pool, rng)),
            Strategy::Synthetic | Strategy::AiSuggestion => {
                Ok(self.synthetic(&sector, policy, rng))
            }
        };

        match result {
            Ok(raw) => raw,
            Err(e) => {
                // Word source unavailable: degrade to the synthetic
                // generator instead of surfacing the error.
                tracing::debug!(strategy = %strategy, error = %e, "Word source failed, using synthetic generator");
                self.synthetic(&sector, policy, rng)
            }
        }
    }

    fn synthetic(&self, sector: &str, policy: &ConfigPolicy, rng: &mut impl Rng) -> String {
        let upper = policy.max_length.min(policy.min_length + 5).max(policy.min_length);
        let length = rng.gen_range(policy.min_length..=upper);
        strategies::synthetic_name(length, sector_special_chars(sector), rng)
    }

    fn sector_name(&self, seed: &Seed, rng: &mut impl Rng) -> String {
        match (seed.mode, &seed.value) {
            (SeedMode::Sector, Some(value)) => value.to_lowercase(),
            _ => SECTORS
                .choose(rng)
                .map(|s| s.to_string())
                .unwrap_or_else(|| "tech".to_string()),
        }
    }

    fn seed_word(
        &self,
        seed: &Seed,
        sector: &str,
        policy: &ConfigPolicy,
        rng: &mut impl Rng,
    ) -> String {
        match (seed.mode, &seed.value) {
            (SeedMode::Keyword, Some(value)) => value.clone(),
            _ => match self.source.words(WordPool::Sector, Some(sector)) {
                Ok(pool) => pool
                    .choose(rng)
                    .cloned()
                    .unwrap_or_else(|| self.synthetic(sector, policy, rng)),
                Err(_) => self.synthetic(sector, policy, rng),
            },
        }
    }

    /// Clean a raw strategy result and apply the best-effort length pad
    fn finish(
        &self,
        raw: String,
        strategy: Strategy,
        policy: &ConfigPolicy,
    ) -> Option<Candidate> {
        let mut name = policy.clean(&raw);
        if name.is_empty() {
            return None;
        }
        if name.len() < policy.min_length {
            name = self.pad(name, policy);
        }
        Some(Candidate::new(name, strategy))
    }

    /// Append filler-word letters until `min_length` is reached. Best
    /// effort: a filler that cleans to nothing leaves the name short, and
    /// the short name is still returned.
    fn pad(&self, mut name: String, policy: &ConfigPolicy) -> String {
        let fillers = match self.source.words(WordPool::Filler, None) {
            Ok(fillers) => fillers,
            Err(_) => return name,
        };
        for filler in fillers {
            for ch in filler.chars().filter(|c| c.is_ascii_lowercase()) {
                if name.len() >= policy.min_length {
                    return name;
                }
                name.push(ch);
            }
        }
        name
    }
}
