//! Core types and structures for domain-hunter

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Synthesis strategy that produced a candidate name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    SectorSpecific,
    TrendCombo,
    MeaningfulCombo,
    PhoneticOptimized,
    PsychologyBased,
    Synthetic,
    AiSuggestion,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::SectorSpecific => write!(f, "sector-specific"),
            Strategy::TrendCombo => write!(f, "trend-combo"),
            Strategy::MeaningfulCombo => write!(f, "meaningful-combo"),
            Strategy::PhoneticOptimized => write!(f, "phonetic-optimized"),
            Strategy::PsychologyBased => write!(f, "psychology-based"),
            Strategy::Synthetic => write!(f, "synthetic"),
            Strategy::AiSuggestion => write!(f, "ai-suggestion"),
        }
    }
}

/// Seed mode for candidate synthesis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedMode {
    Keyword,
    Sector,
    Random,
}

/// Synthesis seed: a mode plus an optional keyword or sector name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seed {
    pub mode: SeedMode,
    pub value: Option<String>,
}

impl Seed {
    pub fn keyword(value: impl Into<String>) -> Self {
        Self {
            mode: SeedMode::Keyword,
            value: Some(value.into()),
        }
    }

    pub fn sector(value: impl Into<String>) -> Self {
        Self {
            mode: SeedMode::Sector,
            value: Some(value.into()),
        }
    }

    pub fn random() -> Self {
        Self {
            mode: SeedMode::Random,
            value: None,
        }
    }
}

/// A synthesized base name (no extension), immutable once produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub strategy: Strategy,
}

impl Candidate {
    pub fn new(name: impl Into<String>, strategy: Strategy) -> Self {
        Self {
            name: name.into(),
            strategy,
        }
    }
}

/// A full domain to resolve: base name plus extension (always starts with '.')
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DomainQuery {
    pub name: String,
    pub extension: String,
}

impl DomainQuery {
    pub fn new(name: impl Into<String>, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        let extension = if extension.starts_with('.') {
            extension
        } else {
            format!(".{}", extension)
        };
        Self {
            name: name.into(),
            extension,
        }
    }

    /// The full domain string, e.g. "example.com"
    pub fn full_domain(&self) -> String {
        format!("{}{}", self.name, self.extension)
    }

    /// TLD without the leading dot
    pub fn tld(&self) -> &str {
        self.extension.trim_start_matches('.')
    }
}

impl std::fmt::Display for DomainQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.name, self.extension)
    }
}

/// One raw probe outcome feeding into a verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalState {
    /// The probe found evidence of registration
    Positive,
    /// The probe definitively found nothing (NXDOMAIN, WHOIS "no match")
    Negative,
    /// The probe itself failed; no evidence either way
    Unknown,
}

impl SignalState {
    pub fn is_positive(self) -> bool {
        matches!(self, SignalState::Positive)
    }

    pub fn is_unknown(self) -> bool {
        matches!(self, SignalState::Unknown)
    }
}

/// The three raw signals behind one resolution, computed fresh per call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySignals {
    pub a_record: SignalState,
    pub ns_record: SignalState,
    pub whois_registered: SignalState,
}

impl AvailabilitySignals {
    pub fn any_positive(&self) -> bool {
        self.a_record.is_positive()
            || self.ns_record.is_positive()
            || self.whois_registered.is_positive()
    }

    pub fn all_unknown(&self) -> bool {
        self.a_record.is_unknown()
            && self.ns_record.is_unknown()
            && self.whois_registered.is_unknown()
    }
}

/// Resolved availability classification for one full domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerdictStatus {
    Available,
    Taken,
    Unknown,
}

impl VerdictStatus {
    /// Sort rank: actionable results first
    pub fn rank(self) -> u8 {
        match self {
            VerdictStatus::Available => 0,
            VerdictStatus::Unknown => 1,
            VerdictStatus::Taken => 2,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            VerdictStatus::Available => "✅",
            VerdictStatus::Taken => "❌",
            VerdictStatus::Unknown => "❓",
        }
    }
}

impl std::fmt::Display for VerdictStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerdictStatus::Available => write!(f, "available"),
            VerdictStatus::Taken => write!(f, "taken"),
            VerdictStatus::Unknown => write!(f, "unknown"),
        }
    }
}

/// Availability check result for one domain, immutable once created.
///
/// WHOIS detail fields are kept as raw trimmed strings: registry output
/// formats vary too much to parse dates reliably, and the verdict never
/// depends on them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityVerdict {
    pub domain: DomainQuery,
    pub status: VerdictStatus,
    pub signals: AvailabilitySignals,
    pub response_time_ms: u64,
    pub registrar: Option<String>,
    pub creation_date: Option<String>,
    pub expiration_date: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Configuration for a single resolution
#[derive(Debug, Clone)]
pub struct ResolveConfig {
    pub dns_timeout: Duration,
    pub whois_timeout: Duration,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            dns_timeout: Duration::from_secs(5),
            whois_timeout: Duration::from_secs(10),
        }
    }
}

/// Configuration for batch coordination
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Window size: resolutions running concurrently
    pub concurrency: usize,
    /// Delay between windows (rate limiting)
    pub window_delay: Duration,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            concurrency: 10,
            window_delay: Duration::from_millis(0),
        }
    }
}
