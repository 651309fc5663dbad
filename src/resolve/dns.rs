//! DNS probes (A and NS records).
//!
//! Probes return a tagged [`ProbeOutcome`] instead of erroring: a definitive
//! empty answer (NXDOMAIN / no records) is evidence, a resolver failure is
//! not, and the verdict logic needs to tell them apart.

use async_trait::async_trait;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::TokioAsyncResolver;
use std::time::Duration;
use tokio::time::timeout;

use crate::types::SignalState;

/// Outcome of a single record probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Records exist
    Found,
    /// The authority definitively reports no records
    NotFound,
    /// The probe itself failed (timeout, SERVFAIL, network)
    Error(String),
}

impl ProbeOutcome {
    /// Map a DNS probe outcome onto a verdict signal
    pub fn to_signal(&self) -> SignalState {
        match self {
            ProbeOutcome::Found => SignalState::Positive,
            ProbeOutcome::NotFound => SignalState::Negative,
            ProbeOutcome::Error(_) => SignalState::Unknown,
        }
    }
}

/// DNS record probing seam
#[async_trait]
pub trait DnsProbe: Send + Sync {
    /// Probe for A records on the bare domain name
    async fn resolve_a(&self, domain: &str) -> ProbeOutcome;

    /// Probe for NS records on the bare domain name
    async fn resolve_ns(&self, domain: &str) -> ProbeOutcome;
}

/// System-configured recursive resolver
pub struct HickoryDns {
    resolver: TokioAsyncResolver,
    timeout: Duration,
}

impl HickoryDns {
    pub fn new(probe_timeout: Duration) -> Self {
        let mut opts = ResolverOpts::default();
        opts.timeout = probe_timeout;
        let resolver = TokioAsyncResolver::tokio(ResolverConfig::default(), opts);
        Self {
            resolver,
            timeout: probe_timeout,
        }
    }

    fn classify(err: ResolveError) -> ProbeOutcome {
        match err.kind() {
            ResolveErrorKind::NoRecordsFound { .. } => ProbeOutcome::NotFound,
            _ => ProbeOutcome::Error(err.to_string()),
        }
    }
}

impl Default for HickoryDns {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}

#[async_trait]
impl DnsProbe for HickoryDns {
    async fn resolve_a(&self, domain: &str) -> ProbeOutcome {
        match timeout(self.timeout, self.resolver.lookup_ip(domain)).await {
            Ok(Ok(lookup)) => {
                if lookup.iter().next().is_some() {
                    ProbeOutcome::Found
                } else {
                    ProbeOutcome::NotFound
                }
            }
            Ok(Err(e)) => Self::classify(e),
            Err(_) => ProbeOutcome::Error(format!("A lookup for {} timed out", domain)),
        }
    }

    async fn resolve_ns(&self, domain: &str) -> ProbeOutcome {
        match timeout(self.timeout, self.resolver.ns_lookup(domain)).await {
            Ok(Ok(lookup)) => {
                if lookup.iter().next().is_some() {
                    ProbeOutcome::Found
                } else {
                    ProbeOutcome::NotFound
                }
            }
            Ok(Err(e)) => Self::classify(e),
            Err(_) => ProbeOutcome::Error(format!("NS lookup for {} timed out", domain)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_to_signal() {
        assert_eq!(ProbeOutcome::Found.to_signal(), SignalState::Positive);
        assert_eq!(ProbeOutcome::NotFound.to_signal(), SignalState::Negative);
        assert_eq!(
            ProbeOutcome::Error("boom".to_string()).to_signal(),
            SignalState::Unknown
        );
    }

    #[tokio::test]
    async fn test_resolver_construction() {
        let _probe = HickoryDns::new(Duration::from_secs(2));
    }
}
