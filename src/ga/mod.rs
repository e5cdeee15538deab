//! Elitist generational evolutionary engine.
//!
//! A problem-agnostic skeleton: callers describe their problem by
//! implementing [`Problem`] plus one evaluation trait, and the [`Engine`]
//! runs the generational loop without ever inspecting an individual.
//!
//! # Core Traits
//!
//! - [`Problem`]: Individual, fitness and generator types; mutation and
//!   recombination
//! - [`SingleEvaluation`] / [`BatchEvaluation`]: Exactly one of these,
//!   selected through [`Problem::Evaluation`] with the [`Single`] or
//!   [`Batch`] tag
//! - [`Generator`]: Index source used for tournament draws, implemented for
//!   every [`rand::Rng`]
//!
//! # Key Types
//!
//! - [`Engine`]: Owns the sorted population and advances it one generation
//!   at a time
//! - [`EngineConfig`]: Elite count and seed
//! - [`Solution`]: An individual paired with its fitness
//!
//! # Generation
//!
//! 1. Two binary tournaments pick the parents
//! 2. [`Problem::recombine`] yields children, consumed left to right
//! 3. Each child is mutated and evaluated until `N - elite_count` offspring
//!    exist; surplus children are dropped
//! 4. Offspring overwrite every non-elite slot and the population is
//!    re-sorted
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Zitzler, Laumanns & Thiele (2001), "SPEA2: Improving the Strength
//!   Pareto Evolutionary Algorithm"

mod config;
mod runner;
mod selection;
mod types;

pub use config::EngineConfig;
pub use runner::Engine;
pub use selection::{binary_tournament, fitness_order};
pub use types::{
    Batch, BatchEvaluation, EvaluationMode, Generator, Population, Problem, Single,
    SingleEvaluation, Solution,
};
