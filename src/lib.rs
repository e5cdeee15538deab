//! Problem-agnostic elitist evolutionary optimization.
//!
//! The crate provides a reusable generational loop (binary tournament
//! mating selection, recombination, mutation, evaluation and elitist
//! replacement) parameterized by a caller-supplied problem definition.
//! It knows nothing about what an individual is or how fitness is
//! computed; see [`ga`] for the problem contract and the engine.
//!
//! - [`ga`]: Problem traits, [`Engine`](ga::Engine) and configuration
//! - [`random`]: Seeded generators and Bernoulli draws for problem operators
//!
//! # Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::Rng;
//! use u_evolve::ga::{Engine, Problem, Single, SingleEvaluation};
//! use u_evolve::random::create_rng;
//!
//! struct Parabola;
//!
//! impl Problem for Parabola {
//!     type Individual = f64;
//!     type Fitness = f64;
//!     type Generator = StdRng;
//!     type Children = [f64; 1];
//!     type Evaluation = Single;
//!
//!     fn mutate(&mut self, x: &mut f64, rng: &mut StdRng) {
//!         *x += rng.random_range(-0.1..0.1);
//!     }
//!
//!     fn recombine(&mut self, a: &f64, b: &f64, _rng: &mut StdRng) -> [f64; 1] {
//!         [(a + b) / 2.0]
//!     }
//! }
//!
//! impl SingleEvaluation for Parabola {
//!     fn evaluate(&mut self, x: &f64, _rng: &mut StdRng) -> f64 {
//!         (x - 3.0).powi(2)
//!     }
//! }
//!
//! let initial = vec![-4.0, -1.0, 0.5, 2.0, 7.0, 9.0];
//! let mut engine = Engine::new(Parabola, initial, 1, create_rng(42)).unwrap();
//! let before = *engine.best().fitness();
//! engine.run(50);
//! assert!(*engine.best().fitness() <= before);
//! ```

mod error;
pub mod ga;
pub mod random;

pub use error::EngineError;
