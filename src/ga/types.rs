//! Core trait definitions for the evolutionary engine.
//!
//! [`Problem`] together with exactly one of [`SingleEvaluation`] or
//! [`BatchEvaluation`] forms the contract between the generic engine and a
//! domain-specific problem. The choice between the two evaluation styles is
//! made once, through [`Problem::Evaluation`], and checked by the compiler:
//! a problem whose tag does not match the trait it implements cannot be
//! handed to an [`Engine`](super::Engine).

use rand::Rng;

/// Source of randomness consumed by the engine itself.
///
/// The engine only ever needs uniform indices for tournament draws. Every
/// [`rand::Rng`] implements this automatically; scripted generators used in
/// tests can implement it directly.
pub trait Generator {
    /// Returns an index drawn uniformly from `0..len`.
    ///
    /// `len` is always at least 1.
    fn sample_index(&mut self, len: usize) -> usize;
}

impl<R: Rng> Generator for R {
    fn sample_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// An evaluated individual.
///
/// Solutions are only created by evaluating an individual and are never
/// modified afterwards; a changed individual becomes a new solution.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution<I, F> {
    individual: I,
    fitness: F,
}

impl<I, F> Solution<I, F> {
    pub(crate) fn new(individual: I, fitness: F) -> Self {
        Self {
            individual,
            fitness,
        }
    }

    /// The candidate solution.
    pub fn individual(&self) -> &I {
        &self.individual
    }

    /// Fitness produced by evaluating [`individual`](Self::individual).
    /// Lower is better.
    pub fn fitness(&self) -> &F {
        &self.fitness
    }

    /// Splits the solution into its individual and fitness.
    pub fn into_parts(self) -> (I, F) {
        (self.individual, self.fitness)
    }
}

/// Defines an optimization problem the engine can evolve.
///
/// The engine never looks inside an individual. It selects parents by
/// comparing fitness with `<`, then hands them to [`recombine`](Self::recombine),
/// [`mutate`](Self::mutate) and the evaluation strategy named by
/// [`Evaluation`](Self::Evaluation).
///
/// # Implementing
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::Rng;
/// use u_evolve::ga::{Problem, Single, SingleEvaluation};
///
/// struct Parabola;
///
/// impl Problem for Parabola {
///     type Individual = f64;
///     type Fitness = f64;
///     type Generator = StdRng;
///     type Children = [f64; 1];
///     type Evaluation = Single;
///
///     fn mutate(&mut self, x: &mut f64, rng: &mut StdRng) {
///         *x += rng.random_range(-0.1..0.1);
///     }
///
///     fn recombine(&mut self, a: &f64, b: &f64, _rng: &mut StdRng) -> [f64; 1] {
///         [(a + b) / 2.0]
///     }
/// }
///
/// impl SingleEvaluation for Parabola {
///     fn evaluate(&mut self, x: &f64, _rng: &mut StdRng) -> f64 {
///         (x - 3.0).powi(2)
///     }
/// }
/// ```
pub trait Problem {
    /// Candidate solution representation.
    type Individual;

    /// Quality measure. Lower is better.
    ///
    /// `<` must be a strict weak ordering over every value the problem
    /// produces (no `NaN` for floats).
    type Fitness: PartialOrd;

    /// Random stream owned by the engine and threaded through every call.
    type Generator: Generator;

    /// Children produced by one recombination, consumed left to right.
    type Children: IntoIterator<Item = Self::Individual>;

    /// Evaluation strategy tag: [`Single`] or [`Batch`].
    type Evaluation;

    /// Perturbs an individual in place.
    ///
    /// The default implementation is a no-op.
    fn mutate(&mut self, _individual: &mut Self::Individual, _generator: &mut Self::Generator) {}

    /// Produces zero or more children from two parents.
    ///
    /// Returning the parents unchanged is a valid way to skip crossover.
    /// The engine may stop consuming the returned children early once it
    /// has bred enough offspring for the generation.
    fn recombine(
        &mut self,
        parent1: &Self::Individual,
        parent2: &Self::Individual,
        generator: &mut Self::Generator,
    ) -> Self::Children;
}

/// Evaluates one individual at a time.
///
/// Pair with `type Evaluation = Single`.
pub trait SingleEvaluation: Problem {
    /// Computes the fitness of `individual`.
    ///
    /// May consume randomness (e.g. stochastic simulation); the result must
    /// be a function of the individual and the generator state.
    fn evaluate(
        &mut self,
        individual: &Self::Individual,
        generator: &mut Self::Generator,
    ) -> Self::Fitness;
}

/// Evaluates a group of candidates against the whole population.
///
/// Pair with `type Evaluation = Batch`. Suited to fitness functions that
/// need population context, such as dominance counts or density estimates.
pub trait BatchEvaluation: Problem {
    /// Computes the fitness of every candidate in `individuals`.
    ///
    /// `population` holds the running solutions. Its first `count` entries
    /// survive into the next population alongside the candidates: `count` is
    /// 0 while the initial population is built and the elite count during a
    /// generation. Exactly one value per candidate must be pushed to
    /// `fitness`, in candidate order.
    fn evaluate_batch(
        &mut self,
        individuals: &[Self::Individual],
        population: &[Solution<Self::Individual, Self::Fitness>],
        count: usize,
        fitness: &mut Vec<Self::Fitness>,
        generator: &mut Self::Generator,
    );
}

/// Tag selecting [`SingleEvaluation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Single;

/// Tag selecting [`BatchEvaluation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Batch;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Single {}
    impl Sealed for super::Batch {}
}

/// Population type of a problem.
pub type Population<P> = Vec<Solution<<P as Problem>::Individual, <P as Problem>::Fitness>>;

/// Binds an evaluation tag to the trait it requires.
///
/// Implemented by [`Single`] for every [`SingleEvaluation`] problem and by
/// [`Batch`] for every [`BatchEvaluation`] problem. Sealed.
///
/// A tag that does not match the evaluation trait is a compile error:
///
/// ```compile_fail
/// use rand::rngs::StdRng;
/// use u_evolve::ga::{Batch, Engine, Problem, SingleEvaluation};
/// use u_evolve::random::create_rng;
///
/// struct Mismatch;
///
/// impl Problem for Mismatch {
///     type Individual = i64;
///     type Fitness = i64;
///     type Generator = StdRng;
///     type Children = [i64; 1];
///     type Evaluation = Batch;
///
///     fn recombine(&mut self, a: &i64, _b: &i64, _rng: &mut StdRng) -> [i64; 1] {
///         [*a]
///     }
/// }
///
/// impl SingleEvaluation for Mismatch {
///     fn evaluate(&mut self, x: &i64, _rng: &mut StdRng) -> i64 {
///         *x
///     }
/// }
///
/// let _ = Engine::new(Mismatch, vec![1, 2], 0, create_rng(1));
/// ```
///
/// So is a tag that is neither [`Single`] nor [`Batch`]:
///
/// ```compile_fail
/// use rand::rngs::StdRng;
/// use u_evolve::ga::{Engine, Problem, SingleEvaluation};
/// use u_evolve::random::create_rng;
///
/// struct Untagged;
///
/// impl Problem for Untagged {
///     type Individual = i64;
///     type Fitness = i64;
///     type Generator = StdRng;
///     type Children = [i64; 1];
///     type Evaluation = ();
///
///     fn recombine(&mut self, a: &i64, _b: &i64, _rng: &mut StdRng) -> [i64; 1] {
///         [*a]
///     }
/// }
///
/// impl SingleEvaluation for Untagged {
///     fn evaluate(&mut self, x: &i64, _rng: &mut StdRng) -> i64 {
///         *x
///     }
/// }
///
/// let _ = Engine::new(Untagged, vec![1, 2], 0, create_rng(1));
/// ```
pub trait EvaluationMode<P: Problem>: sealed::Sealed {
    /// Short name used in log output.
    const NAME: &'static str;

    /// Evaluates the initial individuals, in the order supplied.
    fn evaluate_initial(
        problem: &mut P,
        individuals: Vec<P::Individual>,
        generator: &mut P::Generator,
    ) -> Population<P>;

    /// Breeds and evaluates `population.len() - elite_count` offspring.
    fn breed(
        problem: &mut P,
        population: &[Solution<P::Individual, P::Fitness>],
        elite_count: usize,
        generator: &mut P::Generator,
    ) -> Population<P>;
}
