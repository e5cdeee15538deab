//! Error types.
//!
//! The engine has a single validated failure mode: an elite count that
//! leaves no room for offspring. Everything else a problem does wrong is a
//! programming error and unwinds through the call that triggered it.

use thiserror::Error;

/// Errors reported while building an [`Engine`](crate::ga::Engine).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The elite would fill the whole population.
    #[error(
        "elite count {elite_count} must be smaller than the population size {population_size}"
    )]
    Configuration {
        elite_count: usize,
        population_size: usize,
    },
}
