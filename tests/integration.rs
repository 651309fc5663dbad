//! Integration tests for domain-hunter

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use domain_hunter::error::{DomainHunterError, Result};
use domain_hunter::policy::{self, ConfigPolicy, PolicyStore};
use domain_hunter::resolve::{AvailabilityResolver, DnsProbe, ProbeOutcome, WhoisLookup};
use domain_hunter::score::QualityScorer;
use domain_hunter::synth::NameSynthesizer;
use domain_hunter::types::{
    BatchConfig, DomainQuery, ResolveConfig, Seed, SignalState, VerdictStatus,
};
use domain_hunter::BatchCoordinator;

/// DNS fake: listed names resolve, everything else is NXDOMAIN
struct ScriptedDns {
    registered: Vec<&'static str>,
}

#[async_trait]
impl DnsProbe for ScriptedDns {
    async fn resolve_a(&self, domain: &str) -> ProbeOutcome {
        if self.registered.contains(&domain) {
            ProbeOutcome::Found
        } else {
            ProbeOutcome::NotFound
        }
    }

    async fn resolve_ns(&self, domain: &str) -> ProbeOutcome {
        self.resolve_a(domain).await
    }
}

/// WHOIS fake: canned registered/free responses, one domain always fails
struct ScriptedWhois {
    registered: Vec<&'static str>,
    failing: Vec<&'static str>,
}

#[async_trait]
impl WhoisLookup for ScriptedWhois {
    async fn lookup(&self, domain: &str) -> Result<String> {
        if self.failing.contains(&domain) {
            return Err(DomainHunterError::probe(
                domain,
                "unsupported TLD",
                Some("whois".to_string()),
            ));
        }
        if self.registered.contains(&domain) {
            Ok(format!(
                "Domain Name: {}\nRegistrar: MarkMonitor Inc.\nCreation Date: 1997-09-15T04:00:00Z",
                domain.to_uppercase()
            ))
        } else {
            Ok(format!("No match for domain \"{}\".", domain.to_uppercase()))
        }
    }
}

fn scripted_coordinator(
    dns_registered: Vec<&'static str>,
    whois_registered: Vec<&'static str>,
    whois_failing: Vec<&'static str>,
) -> BatchCoordinator {
    let resolver = AvailabilityResolver::with_probes(
        Arc::new(ScriptedDns {
            registered: dns_registered,
        }),
        Arc::new(ScriptedWhois {
            registered: whois_registered,
            failing: whois_failing,
        }),
        ResolveConfig::default(),
    );
    BatchCoordinator::new(Arc::new(resolver), BatchConfig::default())
}

#[tokio::test]
async fn test_pipeline_from_seed_to_sorted_verdicts() {
    let shared = policy::shared(ConfigPolicy::default());
    let synthesizer = NameSynthesizer::new(Arc::clone(&shared));
    let scorer = QualityScorer::new(shared);

    let candidates = synthesizer.synthesize(&Seed::keyword("pixel"), 5);
    assert!(!candidates.is_empty());

    let domains: Vec<DomainQuery> = candidates
        .iter()
        .map(|c| DomainQuery::new(c.name.clone(), ".com"))
        .collect();

    let coordinator = scripted_coordinator(vec![], vec![], vec![]);
    let verdicts = coordinator.check_all(&domains).await;

    assert_eq!(verdicts.len(), domains.len());
    for verdict in &verdicts {
        assert_eq!(verdict.status, VerdictStatus::Available);
        let score = scorer.score(&verdict.domain.name);
        assert!(score <= 100);
    }
}

#[tokio::test]
async fn test_batch_completeness_with_failing_whois() {
    // Five domains; the third one's WHOIS probe fails. The verdict for it
    // comes from DNS alone and the batch still returns five entries.
    let coordinator = scripted_coordinator(
        vec!["three.com"],
        vec![],
        vec!["three.com"],
    );
    let domains: Vec<DomainQuery> = ["one", "two", "three", "four", "five"]
        .iter()
        .map(|n| DomainQuery::new(*n, ".com"))
        .collect();

    let verdicts = coordinator.check_all(&domains).await;
    assert_eq!(verdicts.len(), 5);

    let third = verdicts
        .iter()
        .find(|v| v.domain.name == "three")
        .unwrap();
    assert_eq!(third.signals.whois_registered, SignalState::Unknown);
    assert_eq!(third.status, VerdictStatus::Taken);

    let first = verdicts.iter().find(|v| v.domain.name == "one").unwrap();
    assert_eq!(first.status, VerdictStatus::Available);
}

#[tokio::test]
async fn test_sort_order_no_taken_before_available() {
    let coordinator = scripted_coordinator(
        vec!["b.com", "d.com"],
        vec!["b.com", "d.com"],
        vec![],
    );
    let domains: Vec<DomainQuery> = ["a", "b", "c", "d", "e"]
        .iter()
        .map(|n| DomainQuery::new(*n, ".com"))
        .collect();

    let verdicts = coordinator.check_all(&domains).await;
    let first_taken = verdicts
        .iter()
        .position(|v| v.status == VerdictStatus::Taken);
    let last_available = verdicts
        .iter()
        .rposition(|v| v.status == VerdictStatus::Available);
    if let (Some(taken), Some(available)) = (first_taken, last_available) {
        assert!(available < taken, "taken verdict precedes an available one");
    }
}

#[tokio::test]
async fn test_registered_domain_verdict_with_registrar() {
    let coordinator = scripted_coordinator(
        vec!["google.com"],
        vec!["google.com"],
        vec![],
    );
    let verdicts = coordinator
        .check_all(&[DomainQuery::new("google", ".com")])
        .await;

    assert_eq!(verdicts[0].status, VerdictStatus::Taken);
    assert_eq!(verdicts[0].registrar.as_deref(), Some("MarkMonitor Inc."));
    assert!(verdicts[0].creation_date.is_some());
}

#[test]
fn test_policy_clean_and_validate_roundtrip() {
    let policy = ConfigPolicy {
        max_length: 12,
        ..Default::default()
    };

    // An already-clean candidate passes untouched
    assert_eq!(policy.clean("smarttech24"), "smarttech24");
    assert!(policy.validate("smarttech24").is_valid);

    // Accented input with hyphen artifacts normalizes fully
    assert_eq!(policy.clean("Çağ--lar-"), "caglar");
    assert!(policy.validate(&policy.clean("Çağ--lar-")).is_valid);
}

#[test]
fn test_synthesizer_respects_policy_length() {
    let shared = policy::shared(ConfigPolicy {
        max_length: 10,
        ..Default::default()
    });
    let synthesizer = NameSynthesizer::new(shared);
    for candidate in synthesizer.synthesize(&Seed::sector("tech"), 30) {
        assert!(candidate.name.len() <= 10);
    }
}

#[test]
fn test_policy_store_lifecycle() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");

    let store = PolicyStore::open(&path);
    assert!(store.set_allow_numbers(false));

    // Synthesizers sharing the handle see the change immediately
    let synthesizer = NameSynthesizer::new(store.handle());
    for candidate in synthesizer.synthesize(&Seed::keyword("tech24"), 10) {
        assert!(!candidate.name.chars().any(|c| c.is_ascii_digit()));
    }
}

#[test]
fn test_version_and_init() {
    assert!(!domain_hunter::VERSION.is_empty());
    assert!(domain_hunter::init().is_ok());
}

#[test]
fn test_error_display() {
    let error = DomainHunterError::validation("test error".to_string());
    assert!(error.to_string().contains("test error"));

    let error = DomainHunterError::config("config error".to_string());
    assert!(error.to_string().contains("config error"));
}

#[test]
fn test_cli_help() {
    use assert_cmd::Command;
    use predicates::prelude::*;

    Command::cargo_bin("domain-hunter")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE"));
}

// Live-network checks, run with `cargo test -- --ignored` when online.

#[tokio::test]
#[ignore = "requires network access"]
async fn test_live_known_taken_domain() {
    let resolver = AvailabilityResolver::new(ResolveConfig {
        dns_timeout: Duration::from_secs(5),
        whois_timeout: Duration::from_secs(10),
    });
    let verdict = resolver.resolve(&DomainQuery::new("google", ".com")).await;
    assert_eq!(verdict.status, VerdictStatus::Taken);
}

#[tokio::test]
#[ignore = "requires network access"]
async fn test_live_synthetic_unregistered_domain() {
    let resolver = AvailabilityResolver::new(ResolveConfig::default());
    let verdict = resolver
        .resolve(&DomainQuery::new("zz-nonexistent-39817", ".com"))
        .await;
    assert_eq!(verdict.status, VerdictStatus::Available);
}
