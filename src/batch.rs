//! Batch coordination: windowed fan-out of resolutions.
//!
//! Work is split into windows of `concurrency` domains. Within a window all
//! resolutions run concurrently; windows run sequentially, with an optional
//! delay between them for rate limiting. The returned list is sorted after
//! the fact: actionable (available) results first, then by response time.

use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;

use crate::resolve::AvailabilityResolver;
use crate::types::{AvailabilityVerdict, BatchConfig, DomainQuery};

/// Coordinates resolutions across many candidate×extension pairs
pub struct BatchCoordinator {
    resolver: Arc<AvailabilityResolver>,
    config: BatchConfig,
}

impl BatchCoordinator {
    pub fn new(resolver: Arc<AvailabilityResolver>, config: BatchConfig) -> Self {
        Self { resolver, config }
    }

    /// Resolve every domain, one verdict per input, sorted for
    /// presentation. Individual probe failures surface as `Unknown`
    /// verdicts; they never abort the batch.
    pub async fn check_all(&self, domains: &[DomainQuery]) -> Vec<AvailabilityVerdict> {
        self.check_all_with_progress(domains, |_, _| {}).await
    }

    /// `check_all` with a per-window progress callback `(done, total)`
    pub async fn check_all_with_progress<F>(
        &self,
        domains: &[DomainQuery],
        on_progress: F,
    ) -> Vec<AvailabilityVerdict>
    where
        F: Fn(usize, usize),
    {
        let window_size = self.config.concurrency.max(1);
        let total = domains.len();
        let mut verdicts: Vec<AvailabilityVerdict> = Vec::with_capacity(total);

        for window in domains.chunks(window_size) {
            let futures: Vec<_> = window
                .iter()
                .map(|domain| self.resolver.resolve(domain))
                .collect();
            verdicts.extend(join_all(futures).await);

            on_progress(verdicts.len(), total);

            if !self.config.window_delay.is_zero() && verdicts.len() < total {
                tokio::time::sleep(self.config.window_delay).await;
            }
        }

        sort_for_presentation(&mut verdicts);

        tracing::info!(
            domains = %total,
            available = %verdicts.iter().filter(|v| v.status == crate::types::VerdictStatus::Available).count(),
            "Batch check completed"
        );

        verdicts
    }

    /// Sequential variant: one domain at a time with a fixed delay between
    /// resolutions. Used to stay under WHOIS rate limits when a batch
    /// leans on WHOIS-only TLDs.
    pub async fn check_sequential(
        &self,
        domains: &[DomainQuery],
        inter_domain_delay: Duration,
    ) -> Vec<AvailabilityVerdict> {
        let mut verdicts = Vec::with_capacity(domains.len());
        for (i, domain) in domains.iter().enumerate() {
            verdicts.push(self.resolver.resolve(domain).await);
            if !inter_domain_delay.is_zero() && i + 1 < domains.len() {
                tokio::time::sleep(inter_domain_delay).await;
            }
        }
        sort_for_presentation(&mut verdicts);
        verdicts
    }
}

/// Available before unknown before taken, ties broken by response time
fn sort_for_presentation(verdicts: &mut [AvailabilityVerdict]) {
    verdicts.sort_by(|a, b| {
        a.status
            .rank()
            .cmp(&b.status.rank())
            .then(a.response_time_ms.cmp(&b.response_time_ms))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DomainHunterError, Result};
    use crate::resolve::{DnsProbe, ProbeOutcome, WhoisLookup};
    use crate::types::{ResolveConfig, VerdictStatus};
    use async_trait::async_trait;

    /// DNS fake: NXDOMAIN unless the name is listed as registered
    struct ScriptedDns {
        registered: Vec<String>,
    }

    #[async_trait]
    impl DnsProbe for ScriptedDns {
        async fn resolve_a(&self, domain: &str) -> ProbeOutcome {
            if self.registered.iter().any(|d| d == domain) {
                ProbeOutcome::Found
            } else {
                ProbeOutcome::NotFound
            }
        }

        async fn resolve_ns(&self, domain: &str) -> ProbeOutcome {
            self.resolve_a(domain).await
        }
    }

    /// WHOIS fake that always fails, exercising signal exclusion
    struct DownWhois;

    #[async_trait]
    impl WhoisLookup for DownWhois {
        async fn lookup(&self, domain: &str) -> Result<String> {
            Err(DomainHunterError::probe(
                domain,
                "whois down",
                Some("whois".to_string()),
            ))
        }
    }

    fn coordinator(registered: &[&str], config: BatchConfig) -> BatchCoordinator {
        let resolver = AvailabilityResolver::with_probes(
            Arc::new(ScriptedDns {
                registered: registered.iter().map(|s| s.to_string()).collect(),
            }),
            Arc::new(DownWhois),
            ResolveConfig::default(),
        );
        BatchCoordinator::new(Arc::new(resolver), config)
    }

    fn queries(names: &[&str]) -> Vec<DomainQuery> {
        names
            .iter()
            .map(|n| DomainQuery::new(*n, ".com"))
            .collect()
    }

    #[tokio::test]
    async fn test_every_input_gets_exactly_one_verdict() {
        let coordinator = coordinator(
            &["taken1.com", "taken2.com"],
            BatchConfig {
                concurrency: 2,
                window_delay: Duration::from_millis(0),
            },
        );
        let domains = queries(&["free1", "taken1", "free2", "taken2", "free3"]);
        let verdicts = coordinator.check_all(&domains).await;
        assert_eq!(verdicts.len(), domains.len());
    }

    #[tokio::test]
    async fn test_whois_failure_does_not_abort_batch() {
        // WHOIS is down for every domain; verdicts come from DNS alone
        let coordinator = coordinator(&["busy.com"], BatchConfig::default());
        let verdicts = coordinator.check_all(&queries(&["busy", "open"])).await;
        assert_eq!(verdicts.len(), 2);
        let busy = verdicts
            .iter()
            .find(|v| v.domain.name == "busy")
            .unwrap();
        let open = verdicts
            .iter()
            .find(|v| v.domain.name == "open")
            .unwrap();
        assert_eq!(busy.status, VerdictStatus::Taken);
        assert_eq!(open.status, VerdictStatus::Available);
    }

    #[tokio::test]
    async fn test_sorted_available_before_taken() {
        let coordinator = coordinator(
            &["t1.com", "t2.com", "t3.com"],
            BatchConfig {
                concurrency: 3,
                window_delay: Duration::from_millis(0),
            },
        );
        let verdicts = coordinator
            .check_all(&queries(&["t1", "a1", "t2", "a2", "t3", "a3"]))
            .await;

        let mut seen_taken = false;
        for verdict in &verdicts {
            match verdict.status {
                VerdictStatus::Taken => seen_taken = true,
                VerdictStatus::Available => {
                    assert!(!seen_taken, "available verdict after a taken one")
                }
                VerdictStatus::Unknown => {}
            }
        }
    }

    #[tokio::test]
    async fn test_window_larger_than_input() {
        let coordinator = coordinator(
            &[],
            BatchConfig {
                concurrency: 50,
                window_delay: Duration::from_millis(0),
            },
        );
        let verdicts = coordinator.check_all(&queries(&["one", "two"])).await;
        assert_eq!(verdicts.len(), 2);
    }

    #[tokio::test]
    async fn test_zero_concurrency_is_clamped() {
        let coordinator = coordinator(
            &[],
            BatchConfig {
                concurrency: 0,
                window_delay: Duration::from_millis(0),
            },
        );
        let verdicts = coordinator.check_all(&queries(&["solo"])).await;
        assert_eq!(verdicts.len(), 1);
    }

    #[tokio::test]
    async fn test_progress_callback_reaches_total() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        let coordinator = coordinator(
            &[],
            BatchConfig {
                concurrency: 2,
                window_delay: Duration::from_millis(0),
            },
        );
        let last = AtomicUsize::new(0);
        let domains = queries(&["a", "b", "c", "d", "e"]);
        coordinator
            .check_all_with_progress(&domains, |done, total| {
                assert!(done <= total);
                last.store(done, Ordering::SeqCst);
            })
            .await;
        assert_eq!(last.load(Ordering::SeqCst), 5);
    }

    #[tokio::test]
    async fn test_sequential_variant_completes() {
        let coordinator = coordinator(&["x.com"], BatchConfig::default());
        let verdicts = coordinator
            .check_sequential(&queries(&["x", "y"]), Duration::from_millis(1))
            .await;
        assert_eq!(verdicts.len(), 2);
    }

    #[tokio::test]
    async fn test_empty_batch() {
        let coordinator = coordinator(&[], BatchConfig::default());
        let verdicts = coordinator.check_all(&[]).await;
        assert!(verdicts.is_empty());
    }
}
