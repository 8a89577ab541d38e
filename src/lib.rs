//! # Safari Encounter Core
//!
//! Spawning and capture modelling for a creature-collection safari zone.
//!
//! ## Architecture Overview
//!
//! The crate is split into a handful of small, composable pieces:
//!
//! - **Spawn Table**: a fixed, ordered catalogue of `(species, weight)`
//!   pairs with a weighted random draw biased toward species the player has
//!   not collected yet
//! - **Species Dex**: metadata lookup (dex id, elemental types, catch rate)
//!   behind a trait so any data source can back it
//! - **Encounter Entity**: one spawned creature with transient battle flags
//!   and the derived catch/escape factors recomputed on every read
//! - **Notifications**: a fire-and-forget boundary for user-facing events
//!   such as shiny spawns
//!
//! ## Collaborator Injection
//!
//! Everything the core needs from the surrounding game (collection status,
//! species metadata, catch bonuses, notification delivery) is reached
//! through explicit trait objects or generic parameters, so the probability
//! model is fully testable without a live game instance.

pub mod encounter;
pub mod notify;
pub mod spawn;
pub mod species;

// Core module re-exports
pub use encounter::*;
pub use notify::*;
pub use spawn::*;
pub use species::*;

/// Core error type for the safari encounter engine.
#[derive(thiserror::Error, Debug)]
pub enum SafariError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// A species name was not present in the dex
    #[error("Unknown species: {0}")]
    UnknownSpecies(String),

    /// The spawn table violates its configuration invariants
    #[error("Invalid spawn table: {0}")]
    InvalidTable(String),
}

/// Result type used throughout the safari codebase.
pub type SafariResult<T> = Result<T, SafariError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Gameplay balance constants.
pub mod config {
    /// Shiny chance denominator for safari encounters (one roll in N)
    pub const SHINY_CHANCE_SAFARI: u32 = 2048;

    /// Divisor applied to a species' catch rate to derive its base catch factor
    pub const CATCH_RATE_DIVISOR: f64 = 6.0;

    /// Base escape factor every freshly spawned encounter starts with
    pub const BASE_ESCAPE_FACTOR: f64 = 30.0;

    /// Upper clamp on the computed catch factor
    pub const MAX_CATCH_FACTOR: f64 = 100.0;

    /// Spawn-weight multiplier for species missing from the player's collection
    pub const UNCAUGHT_WEIGHT_MULTIPLIER: u32 = 2;
}
