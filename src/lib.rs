//! Domain Hunter - heuristic and AI-assisted domain name hunting
//!
//! Generates candidate names under configurable constraints, checks their
//! registration status through layered DNS/WHOIS signals, and ranks the
//! results so available domains surface first.

pub mod batch;
pub mod error;
pub mod hunt;
pub mod llm;
pub mod policy;
pub mod resolve;
pub mod score;
pub mod sink;
pub mod synth;
pub mod types;

// Re-export commonly used types
pub use error::{DomainHunterError, Result};
pub use types::{
    AvailabilitySignals, AvailabilityVerdict, BatchConfig, Candidate, DomainQuery, ResolveConfig,
    Seed, SeedMode, SignalState, Strategy, VerdictStatus,
};

// Re-export main functionality
pub use batch::BatchCoordinator;
pub use hunt::{HuntConfig, HuntLoop};
pub use policy::{ConfigPolicy, PolicyStore, SharedPolicy};
pub use resolve::AvailabilityResolver;
pub use score::QualityScorer;
pub use sink::ResultSink;
pub use synth::NameSynthesizer;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
