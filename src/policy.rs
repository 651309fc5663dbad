//! Naming policy: the shared constraint object governing synthesis,
//! validation and scoring.
//!
//! The policy is loaded once from a JSON settings file and shared through a
//! [`SharedPolicy`] handle. Setters persist synchronously; if the write
//! fails the in-memory value still updates for the rest of the process.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{DomainHunterError, Result};

/// Position preference for hyphens or digits inside a name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharPosition {
    Start,
    Middle,
    End,
    Any,
}

/// Hard restriction flags, checked independently by `validate`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restrictions {
    pub no_start_with_hyphen: bool,
    pub no_end_with_hyphen: bool,
    pub no_consecutive_hyphens: bool,
    pub no_start_with_number: bool,
}

impl Default for Restrictions {
    fn default() -> Self {
        Self {
            no_start_with_hyphen: true,
            no_end_with_hyphen: true,
            no_consecutive_hyphens: true,
            no_start_with_number: true,
        }
    }
}

/// Additive score weights used by the quality scorer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBonuses {
    pub no_digits: u8,
    pub no_hyphens: u8,
    pub brandable: u8,
    pub seo_friendly: u8,
    pub pronounceable_ending: u8,
    pub uniqueness: u8,
}

impl Default for ScoreBonuses {
    fn default() -> Self {
        Self {
            no_digits: 15,
            no_hyphens: 15,
            brandable: 5,
            seo_friendly: 5,
            pronounceable_ending: 5,
            uniqueness: 5,
        }
    }
}

/// Validation outcome: every violated rule at once, never short-circuited
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyReport {
    pub is_valid: bool,
    pub issues: Vec<String>,
}

/// Constraint/preference value object for name synthesis and scoring.
///
/// Invariants: `min_length < max_length` and `max_numbers <= 5`, enforced on
/// load and on every setter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigPolicy {
    pub allow_hyphens: bool,
    pub allow_numbers: bool,
    pub min_length: usize,
    pub max_length: usize,
    pub hyphen_position: CharPosition,
    pub number_position: CharPosition,
    pub max_numbers: usize,
    pub restrictions: Restrictions,
    pub score_bonuses: ScoreBonuses,
}

impl Default for ConfigPolicy {
    fn default() -> Self {
        Self {
            allow_hyphens: true,
            allow_numbers: true,
            min_length: 3,
            max_length: 20,
            hyphen_position: CharPosition::Any,
            number_position: CharPosition::Any,
            max_numbers: 2,
            restrictions: Restrictions::default(),
            score_bonuses: ScoreBonuses::default(),
        }
    }
}

/// Maximum value allowed for `max_numbers`
pub const MAX_NUMBERS_CAP: usize = 5;

/// Transliterate accented input to ASCII before character filtering.
///
/// Table: ğ→g, ü→u, ş→s, ı→i, ö→o, ç→c (plus uppercase forms).
/// Anything else outside `[a-z0-9-]` is dropped by `clean`.
pub fn transliterate(input: &str) -> String {
    input
        .chars()
        .map(|ch| match ch {
            'ğ' | 'Ğ' => 'g',
            'ü' | 'Ü' => 'u',
            'ş' | 'Ş' => 's',
            'ı' | 'İ' => 'i',
            'ö' | 'Ö' => 'o',
            'ç' | 'Ç' => 'c',
            other => other,
        })
        .collect()
}

fn strip_hyphen_runs(name: &str) -> String {
    // Runs of 2+ hyphens are removed outright; a lone hyphen survives.
    let mut out = String::with_capacity(name.len());
    let chars: Vec<char> = name.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '-' {
            let mut j = i;
            while j < chars.len() && chars[j] == '-' {
                j += 1;
            }
            if j - i == 1 {
                out.push('-');
            }
            i = j;
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
    out
}

impl ConfigPolicy {
    /// Check the policy's own invariants
    pub fn check_invariants(&self) -> Result<()> {
        if self.min_length >= self.max_length {
            return Err(DomainHunterError::validation(format!(
                "min_length ({}) must be less than max_length ({})",
                self.min_length, self.max_length
            )));
        }
        if self.max_numbers > MAX_NUMBERS_CAP {
            return Err(DomainHunterError::validation(format!(
                "max_numbers ({}) must be at most {}",
                self.max_numbers, MAX_NUMBERS_CAP
            )));
        }
        Ok(())
    }

    /// Normalize a raw name into policy-conforming form. Idempotent:
    /// cleaning an already-clean name returns it unchanged.
    pub fn clean(&self, raw: &str) -> String {
        let lowered = transliterate(raw).to_lowercase();
        let mut name: String = lowered
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
            .collect();

        if !self.allow_hyphens {
            name.retain(|c| c != '-');
        } else {
            if self.restrictions.no_consecutive_hyphens {
                name = strip_hyphen_runs(&name);
            }
            if self.restrictions.no_start_with_hyphen {
                name = name.trim_start_matches('-').to_string();
            }
            if self.restrictions.no_end_with_hyphen {
                name = name.trim_end_matches('-').to_string();
            }
        }

        if !self.allow_numbers {
            name.retain(|c| !c.is_ascii_digit());
        } else if self.restrictions.no_start_with_number {
            let stripped = name.trim_start_matches(|c: char| c.is_ascii_digit());
            name = stripped.to_string();
        }

        if name.len() > self.max_length {
            name.truncate(self.max_length);
            // Truncation may expose a trailing hyphen artifact
            if self.restrictions.no_end_with_hyphen {
                name = name.trim_end_matches('-').to_string();
            }
        }

        name
    }

    /// Validate a candidate name against every rule, collecting all
    /// violations so callers can display the complete list.
    pub fn validate(&self, name: &str) -> PolicyReport {
        let mut issues = Vec::new();

        if name.len() < self.min_length {
            issues.push(format!(
                "name is {} characters, minimum is {}",
                name.len(),
                self.min_length
            ));
        }
        if name.len() > self.max_length {
            issues.push(format!(
                "name is {} characters, maximum is {}",
                name.len(),
                self.max_length
            ));
        }

        if name
            .chars()
            .any(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'))
        {
            issues.push("name contains characters outside [a-z0-9-]".to_string());
        }

        let hyphen_count = name.chars().filter(|c| *c == '-').count();
        let digit_count = name.chars().filter(|c| c.is_ascii_digit()).count();

        if !self.allow_hyphens && hyphen_count > 0 {
            issues.push("hyphens are not allowed".to_string());
        }
        if !self.allow_numbers && digit_count > 0 {
            issues.push("numbers are not allowed".to_string());
        }
        if self.allow_numbers && digit_count > self.max_numbers {
            issues.push(format!(
                "name has {} digits, maximum is {}",
                digit_count, self.max_numbers
            ));
        }

        if self.restrictions.no_start_with_hyphen && name.starts_with('-') {
            issues.push("name starts with a hyphen".to_string());
        }
        if self.restrictions.no_end_with_hyphen && name.ends_with('-') {
            issues.push("name ends with a hyphen".to_string());
        }
        if self.restrictions.no_consecutive_hyphens && name.contains("--") {
            issues.push("name contains consecutive hyphens".to_string());
        }
        if self.restrictions.no_start_with_number
            && name.chars().next().is_some_and(|c| c.is_ascii_digit())
        {
            issues.push("name starts with a number".to_string());
        }

        if self.allow_hyphens && hyphen_count > 0 {
            if let Some(issue) = position_issue(name, '-', self.hyphen_position, "hyphen") {
                issues.push(issue);
            }
        }
        if self.allow_numbers && digit_count > 0 {
            if let Some(issue) =
                position_issue_pred(name, |c| c.is_ascii_digit(), self.number_position, "number")
            {
                issues.push(issue);
            }
        }

        PolicyReport {
            is_valid: issues.is_empty(),
            issues,
        }
    }

    /// Load the policy from a JSON settings file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DomainHunterError::io(e.to_string(), Some(path.display().to_string()))
        })?;
        let policy: ConfigPolicy = serde_json::from_str(&content)?;
        policy.check_invariants()?;
        Ok(policy)
    }

    /// Persist the policy to a JSON settings file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DomainHunterError::config_persistence(path.display().to_string(), e.to_string())
            })?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| {
            DomainHunterError::config_persistence(path.display().to_string(), e.to_string())
        })
    }
}

fn position_issue(
    name: &str,
    target: char,
    position: CharPosition,
    label: &str,
) -> Option<String> {
    position_issue_pred(name, |c| c == target, position, label)
}

fn position_issue_pred(
    name: &str,
    pred: impl Fn(char) -> bool,
    position: CharPosition,
    label: &str,
) -> Option<String> {
    if matches!(position, CharPosition::Any) {
        return None;
    }
    let chars: Vec<char> = name.chars().collect();
    let last = chars.len().saturating_sub(1);
    let ok = chars.iter().enumerate().filter(|(_, c)| pred(**c)).all(
        |(i, _)| match position {
            CharPosition::Start => i == 0,
            CharPosition::End => i == last,
            CharPosition::Middle => i != 0 && i != last,
            CharPosition::Any => true,
        },
    );
    if ok {
        None
    } else {
        let wanted = match position {
            CharPosition::Start => "start",
            CharPosition::Middle => "middle",
            CharPosition::End => "end",
            CharPosition::Any => "any",
        };
        Some(format!("{} placement violates {} preference", label, wanted))
    }
}

/// Shared, read-mostly policy handle
pub type SharedPolicy = Arc<RwLock<ConfigPolicy>>;

/// Wrap a policy value in a shared handle
pub fn shared(policy: ConfigPolicy) -> SharedPolicy {
    Arc::new(RwLock::new(policy))
}

/// Policy store: couples the shared in-memory policy with its settings file.
///
/// Every setter persists synchronously before returning. A failed write is
/// logged and reported (`false`), but the in-memory value still updates so
/// subsequent synthesis/scoring calls see the new constraints.
pub struct PolicyStore {
    path: PathBuf,
    policy: SharedPolicy,
}

impl PolicyStore {
    /// Open the store, loading existing settings or falling back to defaults
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let policy = match ConfigPolicy::load(&path) {
            Ok(p) => p,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "No usable settings file, using defaults");
                ConfigPolicy::default()
            }
        };
        Self {
            path,
            policy: shared(policy),
        }
    }

    /// Shared handle for synthesizers and scorers
    pub fn handle(&self) -> SharedPolicy {
        Arc::clone(&self.policy)
    }

    /// Snapshot of the current policy value
    pub fn snapshot(&self) -> ConfigPolicy {
        self.policy.read().clone()
    }

    fn apply_and_persist(&self, mutate: impl FnOnce(&mut ConfigPolicy)) -> bool {
        let snapshot = {
            let mut guard = self.policy.write();
            mutate(&mut guard);
            guard.clone()
        };
        match snapshot.save(&self.path) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Settings persistence failed; in-memory policy still updated");
                false
            }
        }
    }

    pub fn set_allow_hyphens(&self, allow: bool) -> bool {
        self.apply_and_persist(|p| p.allow_hyphens = allow)
    }

    pub fn set_allow_numbers(&self, allow: bool) -> bool {
        self.apply_and_persist(|p| p.allow_numbers = allow)
    }

    pub fn set_hyphen_position(&self, position: CharPosition) -> bool {
        self.apply_and_persist(|p| p.hyphen_position = position)
    }

    pub fn set_number_position(&self, position: CharPosition) -> bool {
        self.apply_and_persist(|p| p.number_position = position)
    }

    pub fn set_restrictions(&self, restrictions: Restrictions) -> bool {
        self.apply_and_persist(|p| p.restrictions = restrictions)
    }

    /// Rejects bounds violating `min_length < max_length` before mutation
    pub fn set_length_bounds(&self, min_length: usize, max_length: usize) -> Result<bool> {
        if min_length >= max_length {
            return Err(DomainHunterError::validation(format!(
                "min_length ({}) must be less than max_length ({})",
                min_length, max_length
            )));
        }
        Ok(self.apply_and_persist(|p| {
            p.min_length = min_length;
            p.max_length = max_length;
        }))
    }

    /// Rejects values above the cap before mutation
    pub fn set_max_numbers(&self, max_numbers: usize) -> Result<bool> {
        if max_numbers > MAX_NUMBERS_CAP {
            return Err(DomainHunterError::validation(format!(
                "max_numbers ({}) must be at most {}",
                max_numbers, MAX_NUMBERS_CAP
            )));
        }
        Ok(self.apply_and_persist(|p| p.max_numbers = max_numbers))
    }
}
