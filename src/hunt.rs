//! Continuous hunting: repeated synthesis and checking on a timer.
//!
//! Runs in-process as a scheduled task. Cancellation is explicit through a
//! watch channel; the round in flight always completes before the loop
//! stops, so no verdict is half-written.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

use crate::batch::BatchCoordinator;
use crate::score::QualityScorer;
use crate::sink::ResultSink;
use crate::synth::NameSynthesizer;
use crate::types::{DomainQuery, Seed, VerdictStatus};

/// Hunt loop configuration
#[derive(Debug, Clone)]
pub struct HuntConfig {
    /// Pause between rounds
    pub interval: Duration,
    /// Seed used for every round's synthesis
    pub seed: Seed,
    /// Candidates synthesized per round
    pub batch_size: usize,
    /// Extensions checked for every candidate
    pub extensions: Vec<String>,
    /// Sink category for found domains
    pub category: String,
}

impl Default for HuntConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(300),
            seed: Seed::random(),
            batch_size: 10,
            extensions: vec![".com".to_string()],
            category: "hunt".to_string(),
        }
    }
}

/// Totals across all completed rounds
#[derive(Debug, Clone, Copy, Default)]
pub struct HuntStats {
    pub rounds: u64,
    pub checked: u64,
    pub available_found: u64,
}

/// Timer-driven hunt loop
pub struct HuntLoop {
    synthesizer: NameSynthesizer,
    coordinator: Arc<BatchCoordinator>,
    scorer: QualityScorer,
    sink: ResultSink,
    config: HuntConfig,
}

impl HuntLoop {
    pub fn new(
        synthesizer: NameSynthesizer,
        coordinator: Arc<BatchCoordinator>,
        scorer: QualityScorer,
        sink: ResultSink,
        config: HuntConfig,
    ) -> Self {
        Self {
            synthesizer,
            coordinator,
            scorer,
            sink,
            config,
        }
    }

    /// Run rounds until the shutdown channel flips to `true`. The first
    /// round starts immediately; each later round waits out the interval.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) -> HuntStats {
        let mut stats = HuntStats::default();
        let mut interval = tokio::time::interval(self.config.interval);

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    self.round(&mut stats).await;
                }
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
            if *shutdown.borrow() {
                break;
            }
        }

        tracing::info!(
            rounds = %stats.rounds,
            checked = %stats.checked,
            available = %stats.available_found,
            "Hunt loop stopped"
        );
        stats
    }

    async fn round(&self, stats: &mut HuntStats) {
        let candidates = self
            .synthesizer
            .synthesize(&self.config.seed, self.config.batch_size);

        let domains: Vec<DomainQuery> = candidates
            .iter()
            .flat_map(|candidate| {
                self.config
                    .extensions
                    .iter()
                    .map(move |ext| DomainQuery::new(candidate.name.clone(), ext.clone()))
            })
            .collect();

        let verdicts = self.coordinator.check_all(&domains).await;
        stats.rounds += 1;
        stats.checked += verdicts.len() as u64;

        for verdict in &verdicts {
            if verdict.status == VerdictStatus::Available {
                stats.available_found += 1;
                let score = self.scorer.score(&verdict.domain.name);
                self.sink.append_verdict(
                    &verdict.domain.name,
                    &verdict.domain.extension,
                    &self.config.category,
                    verdict,
                    score,
                );
            }
        }

        tracing::debug!(
            round = %stats.rounds,
            checked = %verdicts.len(),
            "Hunt round completed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DomainHunterError, Result};
    use crate::policy::{self, ConfigPolicy};
    use crate::resolve::{AvailabilityResolver, DnsProbe, ProbeOutcome, WhoisLookup};
    use crate::types::{BatchConfig, ResolveConfig};
    use async_trait::async_trait;

    struct AllFreeDns;

    #[async_trait]
    impl DnsProbe for AllFreeDns {
        async fn resolve_a(&self, _domain: &str) -> ProbeOutcome {
            ProbeOutcome::NotFound
        }

        async fn resolve_ns(&self, _domain: &str) -> ProbeOutcome {
            ProbeOutcome::NotFound
        }
    }

    struct NoWhois;

    #[async_trait]
    impl WhoisLookup for NoWhois {
        async fn lookup(&self, domain: &str) -> Result<String> {
            Err(DomainHunterError::probe(domain, "down", None))
        }
    }

    fn hunt_loop(dir: &std::path::Path) -> HuntLoop {
        let shared = policy::shared(ConfigPolicy::default());
        let resolver = AvailabilityResolver::with_probes(
            Arc::new(AllFreeDns),
            Arc::new(NoWhois),
            ResolveConfig::default(),
        );
        HuntLoop::new(
            NameSynthesizer::new(Arc::clone(&shared)),
            Arc::new(BatchCoordinator::new(
                Arc::new(resolver),
                BatchConfig::default(),
            )),
            QualityScorer::new(shared),
            ResultSink::new(dir),
            HuntConfig {
                interval: Duration::from_millis(10),
                batch_size: 3,
                ..Default::default()
            },
        )
    }

    #[tokio::test]
    async fn test_hunt_runs_and_stops_on_shutdown() {
        let dir = tempfile::tempdir().unwrap();
        let hunt = hunt_loop(dir.path());

        let (tx, rx) = watch::channel(false);
        let stop = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(60)).await;
            let _ = tx.send(true);
        });

        let stats = hunt.run(rx).await;
        stop.await.unwrap();

        assert!(stats.rounds >= 1);
        assert!(stats.checked >= stats.rounds);
        // Every domain is available in this fixture, so the sink has lines
        assert!(dir.path().join("hunt.txt").exists());
    }

    #[tokio::test]
    async fn test_hunt_stops_immediately_when_pre_cancelled() {
        let dir = tempfile::tempdir().unwrap();
        let hunt = hunt_loop(dir.path());

        let (tx, rx) = watch::channel(true);
        let stats = hunt.run(rx).await;
        drop(tx);

        // At most the first immediate round runs before the flag is seen
        assert!(stats.rounds <= 1);
    }
}
