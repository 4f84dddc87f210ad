//! Turning Point: a round-based executive decision simulator
//!
//! A participant works through a scripted scenario round by round, choosing
//! one option per round. Each decision shifts a small vector of bounded
//! organizational-health dimensions, ripples through per-stakeholder
//! relationship records, and may probabilistically trigger an adverse event.
//! After the final round the engine produces a weighted score, a letter-grade
//! rating, and an exportable history.
//!
//! # Architecture
//!
//! - `engine` - Simulation instance, decision processing, metrics, scoring
//! - `data` - Scenario configuration, stakeholder records, audit records
//! - `scenarios` - Scenario library and built-in demo families
//!
//! Scenario content is configuration, not code: every family is a
//! [`data::ScenarioConfig`] value consumed by one generic engine. Randomness
//! and timestamps come from injectable sources so runs are reproducible.

pub mod data;
pub mod engine;
pub mod scenarios;

pub use data::ScenarioConfig;
pub use engine::Simulation;
pub use scenarios::ScenarioLibrary;

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for the engine
pub type Result<T> = anyhow::Result<T>;

/// Custom error types
#[derive(thiserror::Error, Debug)]
pub enum SimError {
    #[error("invalid scenario configuration: {0}")]
    Config(String),

    #[error("scenario family not found: {0}")]
    UnknownScenario(String),

    #[error("option '{option}' is not available in round {round}")]
    InvalidOption { round: u32, option: String },

    #[error("simulation is already complete")]
    SimulationComplete,
}
