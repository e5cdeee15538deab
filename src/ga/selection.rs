//! Mating selection.
//!
//! Parents are chosen by binary tournament with replacement. Selection
//! pressure comes from fitness comparisons alone; any ranking or density
//! information a problem wants to exploit belongs in its evaluation.
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::{Generator, Solution};
use std::cmp::Ordering;

/// Binary tournament: draw two indices uniformly with replacement, keep the
/// fitter one.
///
/// The first draw wins only if its fitness is strictly lower than the
/// second's; ties and incomparable values go to the second draw.
///
/// # Complexity
/// O(1) per selection
///
/// # Panics
/// Panics if `population` is empty.
pub fn binary_tournament<I, F, G>(population: &[Solution<I, F>], generator: &mut G) -> usize
where
    F: PartialOrd,
    G: Generator + ?Sized,
{
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );

    let n = population.len();
    let i = generator.sample_index(n);
    let j = generator.sample_index(n);
    if population[i].fitness() < population[j].fitness() {
        i
    } else {
        j
    }
}

/// Orders two fitness values using `<` only.
///
/// Values neither of which is below the other compare `Equal`.
pub fn fitness_order<F: PartialOrd>(a: &F, b: &F) -> Ordering {
    if a < b {
        Ordering::Less
    } else if b < a {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    struct Scripted {
        indices: Vec<usize>,
        cursor: usize,
    }

    impl Generator for Scripted {
        fn sample_index(&mut self, len: usize) -> usize {
            let index = self.indices[self.cursor % self.indices.len()];
            self.cursor += 1;
            assert!(index < len, "scripted index {index} out of range {len}");
            index
        }
    }

    fn make_population(fitnesses: &[f64]) -> Vec<Solution<usize, f64>> {
        fitnesses
            .iter()
            .enumerate()
            .map(|(i, &f)| Solution::new(i, f))
            .collect()
    }

    #[test]
    fn test_lower_fitness_wins() {
        let pop = make_population(&[4.0, 7.0, 9.0]);
        let mut gen = Scripted {
            indices: vec![0, 2, 2, 1],
            cursor: 0,
        };
        assert_eq!(binary_tournament(&pop, &mut gen), 0);
        assert_eq!(binary_tournament(&pop, &mut gen), 1);
        assert_eq!(gen.cursor, 4);
    }

    #[test]
    fn test_tie_goes_to_second_draw() {
        let pop = make_population(&[5.0, 5.0]);
        let mut gen = Scripted {
            indices: vec![0, 1],
            cursor: 0,
        };
        assert_eq!(binary_tournament(&pop, &mut gen), 1);
    }

    #[test]
    fn test_tournament_favors_best() {
        let pop = make_population(&[10.0, 5.0, 1.0, 8.0]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            counts[binary_tournament(&pop, &mut rng)] += 1;
        }
        // P(best) = 1 - (3/4)^2 = 7/16
        let best_count = counts[2];
        assert!(
            best_count > 4000 && best_count < 4800,
            "expected best selected ~44% of the time, got {best_count}/{n}"
        );
        assert!(counts[0] < counts[3] && counts[3] < counts[1] && counts[1] < counts[2]);
    }

    #[test]
    fn test_single_individual() {
        let pop = make_population(&[5.0]);
        let mut rng = create_rng(42);
        assert_eq!(binary_tournament(&pop, &mut rng), 0);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let pop: Vec<Solution<usize, f64>> = vec![];
        let mut rng = create_rng(42);
        binary_tournament(&pop, &mut rng);
    }

    #[test]
    fn test_fitness_order() {
        assert_eq!(fitness_order(&1, &2), Ordering::Less);
        assert_eq!(fitness_order(&2, &1), Ordering::Greater);
        assert_eq!(fitness_order(&2, &2), Ordering::Equal);
        assert_eq!(fitness_order(&f64::NAN, &1.0), Ordering::Equal);
    }
}
