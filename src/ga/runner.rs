//! Generational loop execution.
//!
//! [`Engine`] owns the population and drives one generation per call to
//! [`Engine::iterate`]:
//! binary tournament → recombination → mutation → evaluation → elitist
//! replacement → sort.

use super::config::{check_elite_count, EngineConfig};
use super::selection::{binary_tournament, fitness_order};
use super::types::{
    Batch, BatchEvaluation, EvaluationMode, Population, Problem, Single, SingleEvaluation,
    Solution,
};
use crate::error::EngineError;
use log::{debug, trace};
use rand::SeedableRng;

/// Elitist generational evolutionary engine.
///
/// The population always holds the same number of solutions, sorted
/// ascending by fitness (best first). Each generation keeps the
/// `elite_count` best solutions untouched and replaces every other slot
/// with freshly bred offspring.
///
/// # Usage
///
/// ```ignore
/// let mut engine = Engine::new(problem, individuals, 2, create_rng(42))?;
/// engine.run(100);
/// println!("best: {:?}", engine.best().fitness());
/// ```
pub struct Engine<P: Problem> {
    problem: P,
    population: Population<P>,
    elite_count: usize,
    generator: P::Generator,
    generation: usize,
}

impl<P> Engine<P>
where
    P: Problem,
    P::Evaluation: EvaluationMode<P>,
{
    /// Evaluates `individuals` in order and sorts the result.
    ///
    /// # Errors
    /// [`EngineError::Configuration`] if `elite_count` is not smaller than
    /// the number of individuals. Nothing is evaluated in that case.
    pub fn new(
        mut problem: P,
        individuals: Vec<P::Individual>,
        elite_count: usize,
        mut generator: P::Generator,
    ) -> Result<Self, EngineError> {
        check_elite_count(elite_count, individuals.len())?;

        let mut population = <P::Evaluation as EvaluationMode<P>>::evaluate_initial(
            &mut problem,
            individuals,
            &mut generator,
        );
        sort_population(&mut population);

        debug!(
            "engine ready: population {}, elite {}, {} evaluation",
            population.len(),
            elite_count,
            <P::Evaluation as EvaluationMode<P>>::NAME
        );

        Ok(Self {
            problem,
            population,
            elite_count,
            generator,
            generation: 0,
        })
    }

    /// Advances the population by exactly one generation.
    ///
    /// A panic raised by any problem operation propagates to the caller;
    /// the engine must not be used afterwards.
    pub fn iterate(&mut self) {
        let offspring = <P::Evaluation as EvaluationMode<P>>::breed(
            &mut self.problem,
            &self.population,
            self.elite_count,
            &mut self.generator,
        );
        debug_assert_eq!(offspring.len(), self.population.len() - self.elite_count);

        self.population.truncate(self.elite_count);
        self.population.extend(offspring);
        sort_population(&mut self.population);

        self.generation += 1;
        trace!("generation {} complete", self.generation);
    }

    /// Runs `generations` consecutive calls to [`iterate`](Self::iterate).
    pub fn run(&mut self, generations: usize) {
        for _ in 0..generations {
            self.iterate();
        }
    }
}

impl<P> Engine<P>
where
    P: Problem,
    P::Evaluation: EvaluationMode<P>,
    P::Generator: SeedableRng,
{
    /// Builds an engine whose generator is seeded from `config`.
    ///
    /// # Errors
    /// [`EngineError::Configuration`] if the configured elite count does not
    /// fit the population.
    pub fn with_config(
        problem: P,
        individuals: Vec<P::Individual>,
        config: &EngineConfig,
    ) -> Result<Self, EngineError> {
        config.validate(individuals.len())?;
        let seed = config.seed.unwrap_or_else(rand::random);
        let generator = <P::Generator as SeedableRng>::seed_from_u64(seed);
        Self::new(problem, individuals, config.elite_count, generator)
    }
}

impl<P: Problem> Engine<P> {
    /// Current population, sorted ascending by fitness.
    pub fn population(&self) -> &[Solution<P::Individual, P::Fitness>] {
        &self.population
    }

    /// Solution with the lowest fitness.
    pub fn best(&self) -> &Solution<P::Individual, P::Fitness> {
        // Never empty: elite_count < population size.
        &self.population[0]
    }

    /// Solution with the highest fitness.
    pub fn worst(&self) -> &Solution<P::Individual, P::Fitness> {
        &self.population[self.population.len() - 1]
    }

    /// The problem being optimized.
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Mutable access to the problem, e.g. for adaptive parameters.
    pub fn problem_mut(&mut self) -> &mut P {
        &mut self.problem
    }

    /// The generator threaded through every stochastic call.
    pub fn generator(&self) -> &P::Generator {
        &self.generator
    }

    /// Mutable access to the generator.
    pub fn generator_mut(&mut self) -> &mut P::Generator {
        &mut self.generator
    }

    /// Number of best solutions carried unchanged into each generation.
    pub fn elite_count(&self) -> usize {
        self.elite_count
    }

    /// Number of completed generations.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Consumes the engine, returning the sorted population.
    pub fn into_population(self) -> Population<P> {
        self.population
    }
}

impl<P: SingleEvaluation> EvaluationMode<P> for Single {
    const NAME: &'static str = "single";

    fn evaluate_initial(
        problem: &mut P,
        individuals: Vec<P::Individual>,
        generator: &mut P::Generator,
    ) -> Population<P> {
        individuals
            .into_iter()
            .map(|individual| {
                let fitness = problem.evaluate(&individual, generator);
                Solution::new(individual, fitness)
            })
            .collect()
    }

    fn breed(
        problem: &mut P,
        population: &[Solution<P::Individual, P::Fitness>],
        elite_count: usize,
        generator: &mut P::Generator,
    ) -> Population<P> {
        let needed = population.len() - elite_count;
        let mut offspring = Vec::with_capacity(needed);
        mate(problem, population, needed, generator, |problem, child, generator| {
            let fitness = problem.evaluate(&child, generator);
            offspring.push(Solution::new(child, fitness));
        });
        offspring
    }
}

impl<P: BatchEvaluation> EvaluationMode<P> for Batch {
    const NAME: &'static str = "batch";

    fn evaluate_initial(
        problem: &mut P,
        individuals: Vec<P::Individual>,
        generator: &mut P::Generator,
    ) -> Population<P> {
        evaluate_batch(problem, individuals, &[], 0, generator)
    }

    fn breed(
        problem: &mut P,
        population: &[Solution<P::Individual, P::Fitness>],
        elite_count: usize,
        generator: &mut P::Generator,
    ) -> Population<P> {
        let needed = population.len() - elite_count;
        let mut children = Vec::with_capacity(needed);
        mate(problem, population, needed, generator, |_, child, _| {
            children.push(child);
        });
        evaluate_batch(problem, children, population, elite_count, generator)
    }
}

/// Pairs `individuals` with the fitness values of one batch evaluation.
fn evaluate_batch<P: BatchEvaluation>(
    problem: &mut P,
    individuals: Vec<P::Individual>,
    population: &[Solution<P::Individual, P::Fitness>],
    count: usize,
    generator: &mut P::Generator,
) -> Population<P> {
    let mut fitness = Vec::with_capacity(individuals.len());
    problem.evaluate_batch(&individuals, population, count, &mut fitness, generator);
    assert_eq!(
        fitness.len(),
        individuals.len(),
        "batch evaluation must produce one fitness per individual"
    );

    individuals
        .into_iter()
        .zip(fitness)
        .map(|(individual, fitness)| Solution::new(individual, fitness))
        .collect()
}

/// Breeds exactly `needed` mutated children and hands each to `admit`.
///
/// Parents come from two binary tournaments per recombination. Children
/// are mutated and admitted left to right; once `needed` have been
/// admitted, the rest of the current recombination is dropped unmutated.
fn mate<P, A>(
    problem: &mut P,
    population: &[Solution<P::Individual, P::Fitness>],
    needed: usize,
    generator: &mut P::Generator,
    mut admit: A,
) where
    P: Problem,
    A: FnMut(&mut P, P::Individual, &mut P::Generator),
{
    let mut produced = 0;
    let mut recombinations = 0usize;

    while produced < needed {
        let first = binary_tournament(population, generator);
        let second = binary_tournament(population, generator);

        let children = problem.recombine(
            population[first].individual(),
            population[second].individual(),
            generator,
        );
        recombinations += 1;

        for mut child in children {
            problem.mutate(&mut child, generator);
            admit(problem, child, generator);
            produced += 1;
            if produced == needed {
                break;
            }
        }
    }

    trace!("bred {produced} offspring from {recombinations} recombinations");
}

/// Stable sort, ascending by fitness.
fn sort_population<I, F: PartialOrd>(population: &mut [Solution<I, F>]) {
    population.sort_by(|a, b| fitness_order(a.fitness(), b.fitness()));
}

// ============================================================================
// Tests
// ============================================================================
