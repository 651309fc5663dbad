//! AI text generation: an opaque collaborator that returns raw text.
//!
//! The synthesizer owns all parsing and cleaning; providers only move
//! prompts and text. Provider failures never propagate past the
//! synthesizer, which silently falls back to heuristic strategies.

pub mod openai;

pub use openai::OpenAiGenerator;

use async_trait::async_trait;

use crate::error::Result;

/// Opaque text-generation collaborator
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate raw text for a prompt
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Provider name for logging
    fn name(&self) -> &'static str;
}

/// Build the candidate-list prompt for a topic
pub fn build_candidate_prompt(topic: &str, count: usize) -> String {
    format!(
        "Suggest {} short brandable domain name ideas for: {}\n\n\
         Rules:\n\
         - one name per line, nothing else\n\
         - lowercase letters only, no extension, no numbering\n\
         - between 4 and 14 characters",
        count, topic
    )
}

/// Parse a raw response into candidate name lines.
///
/// Lines are trimmed; empty lines and extension-looking lines (anything
/// containing a dot) are discarded. List markers like "1." or "-" are
/// stripped first so numbered responses still parse.
pub fn parse_candidate_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(|line| strip_list_marker(line.trim()).trim().to_string())
        .filter(|line| !line.is_empty() && !line.contains('.'))
        .collect()
}

fn strip_list_marker(line: &str) -> &str {
    let line = line.trim_start_matches(['-', '*', ' ']);
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        let rest = &line[digits..];
        if let Some(rest) = rest.strip_prefix('.').or_else(|| rest.strip_prefix(')')) {
            return rest;
        }
    }
    line
}

/// Create a generator from the environment, if one is configured
pub fn from_env() -> Option<Box<dyn TextGenerator>> {
    let api_key = std::env::var("OPENAI_API_KEY").ok()?;
    let base_url = std::env::var("OPENAI_BASE_URL").ok();
    let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4.1-mini".to_string());
    match OpenAiGenerator::new(api_key, model, base_url) {
        Ok(generator) => Some(Box::new(generator)),
        Err(e) => {
            tracing::warn!(error = %e, "AI generator misconfigured, continuing without it");
            None
        }
    }
}
