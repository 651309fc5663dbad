//! Result persistence: append-only category files.
//!
//! One line per verdict, appended with a single write so concurrent
//! appends never interleave. Failures are logged and reported as `false`,
//! never propagated.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::types::AvailabilityVerdict;

/// Append-only verdict sink writing category-named files
pub struct ResultSink {
    base_dir: PathBuf,
}

impl ResultSink {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Append one verdict line to `<base_dir>/<category>.txt`, creating the
    /// directory if absent. Returns whether the append succeeded.
    pub fn append_verdict(
        &self,
        name: &str,
        extension: &str,
        category: &str,
        verdict: &AvailabilityVerdict,
        score: u8,
    ) -> bool {
        let line = format!(
            "{}{} | {} | Kalite: {}/100 | {} | Registrar: {}\n",
            name,
            extension,
            verdict.status.glyph(),
            score,
            verdict.timestamp.to_rfc3339(),
            verdict.registrar.as_deref().unwrap_or("None"),
        );

        match self.write_line(category, &line) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(
                    category = %category,
                    error = %e,
                    "Failed to append verdict"
                );
                false
            }
        }
    }

    fn write_line(&self, category: &str, line: &str) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.base_dir)?;
        let path = self.base_dir.join(format!("{}.txt", sanitize(category)));
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        // One write call per line keeps concurrent appends intact
        file.write_all(line.as_bytes())
    }
}

/// Category names become file names; anything unsafe is replaced
fn sanitize(category: &str) -> String {
    let cleaned: String = category
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        "results".to_string()
    } else {
        cleaned
    }
}
