//! Availability resolution: three independent signals, one verdict.
//!
//! The A-record probe, NS-record probe and WHOIS query each produce a
//! signal; the verdict is the conservative OR of positives. Any single
//! positive marks the domain taken; a domain is declared available only
//! when every signal is negative or absent. False negatives (calling a
//! taken domain available) are worse for the user than false positives.

pub mod dns;
pub mod whois;

pub use dns::{DnsProbe, HickoryDns, ProbeOutcome};
pub use whois::{WhoisClient, WhoisLookup};

use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;
use tokio::time::timeout;

use crate::types::{
    AvailabilitySignals, AvailabilityVerdict, DomainQuery, ResolveConfig, SignalState,
    VerdictStatus,
};

/// Decide a verdict from the three signals.
///
/// A definitive NXDOMAIN outweighs sibling probe errors: only when all
/// three probes failed is the verdict `Unknown`.
pub fn decide(signals: &AvailabilitySignals) -> VerdictStatus {
    if signals.any_positive() {
        VerdictStatus::Taken
    } else if signals.all_unknown() {
        VerdictStatus::Unknown
    } else {
        VerdictStatus::Available
    }
}

/// Resolver combining DNS and WHOIS probes into availability verdicts.
/// `resolve` never fails; every probe error becomes a signal state.
pub struct AvailabilityResolver {
    dns: Arc<dyn DnsProbe>,
    whois: Arc<dyn WhoisLookup>,
    config: ResolveConfig,
}

impl AvailabilityResolver {
    /// Create a resolver with live DNS and WHOIS probes
    pub fn new(config: ResolveConfig) -> Self {
        let dns = Arc::new(HickoryDns::new(config.dns_timeout));
        let whois = Arc::new(WhoisClient::new(config.whois_timeout));
        Self {
            dns,
            whois,
            config,
        }
    }

    /// Create a resolver with injected probes
    pub fn with_probes(
        dns: Arc<dyn DnsProbe>,
        whois: Arc<dyn WhoisLookup>,
        config: ResolveConfig,
    ) -> Self {
        Self {
            dns,
            whois,
            config,
        }
    }

    /// Resolve one domain into a timed verdict
    pub async fn resolve(&self, domain: &DomainQuery) -> AvailabilityVerdict {
        let start = Instant::now();
        let full = domain.full_domain();

        let (a_outcome, ns_outcome) =
            tokio::join!(self.dns.resolve_a(&full), self.dns.resolve_ns(&full));

        let whois_result = match timeout(self.config.whois_timeout, self.whois.lookup(&full)).await
        {
            Ok(result) => result,
            Err(elapsed) => Err(elapsed.into()),
        };

        let (whois_signal, registrar, creation_date, expiration_date) = match &whois_result {
            Ok(text) => {
                let signal = if whois::indicates_registered(text) {
                    SignalState::Positive
                } else {
                    SignalState::Negative
                };
                (
                    signal,
                    whois::extract_registrar(text),
                    whois::extract_creation_date(text),
                    whois::extract_expiration_date(text),
                )
            }
            Err(e) => {
                // WHOIS trouble is expected for some TLDs; it is excluded
                // from the decision rather than aborting the resolution.
                tracing::debug!(domain = %full, error = %e, "WHOIS query failed, signal excluded");
                (SignalState::Unknown, None, None, None)
            }
        };

        let signals = AvailabilitySignals {
            a_record: a_outcome.to_signal(),
            ns_record: ns_outcome.to_signal(),
            whois_registered: whois_signal,
        };

        let status = decide(&signals);
        let elapsed = start.elapsed();

        tracing::debug!(
            domain = %full,
            status = %status,
            a = ?signals.a_record,
            ns = ?signals.ns_record,
            whois = ?signals.whois_registered,
            duration_ms = %elapsed.as_millis(),
            "Resolution completed"
        );

        AvailabilityVerdict {
            domain: domain.clone(),
            status,
            signals,
            response_time_ms: elapsed.as_millis() as u64,
            registrar,
            creation_date,
            expiration_date,
            timestamp: Utc::now(),
        }
    }
}

impl Default for AvailabilityResolver {
    fn default() -> Self {
        Self::new(ResolveConfig::default())
    }
}
