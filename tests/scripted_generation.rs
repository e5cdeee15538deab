//! Hand-traced generation with a scripted index stream.
//!
//! Individuals are their own fitness, mutation does nothing and
//! recombination keeps the smaller parent. Tournament draws follow the
//! cycle 0, 2, 1.

use u_evolve::ga::{Engine, Generator, Problem, Single, SingleEvaluation};

struct Cycle {
    indices: Vec<usize>,
    cursor: usize,
}

impl Generator for Cycle {
    fn sample_index(&mut self, len: usize) -> usize {
        let index = self.indices[self.cursor % self.indices.len()];
        self.cursor += 1;
        assert!(index < len);
        index
    }
}

struct KeepSmaller;

impl Problem for KeepSmaller {
    type Individual = u32;
    type Fitness = u32;
    type Generator = Cycle;
    type Children = Vec<u32>;
    type Evaluation = Single;

    fn recombine(&mut self, a: &u32, b: &u32, _gen: &mut Cycle) -> Vec<u32> {
        vec![*a.min(b)]
    }
}

impl SingleEvaluation for KeepSmaller {
    fn evaluate(&mut self, x: &u32, _gen: &mut Cycle) -> u32 {
        *x
    }
}

fn fitnesses(engine: &Engine<KeepSmaller>) -> Vec<u32> {
    engine.population().iter().map(|s| *s.fitness()).collect()
}

#[test]
fn one_generation_matches_trace() {
    let generator = Cycle {
        indices: vec![0, 2, 1],
        cursor: 0,
    };
    let mut engine = Engine::new(KeepSmaller, vec![9, 4, 7], 1, generator).unwrap();
    assert_eq!(fitnesses(&engine), vec![4, 7, 9]);
    assert_eq!(engine.elite_count(), 1);

    engine.iterate();

    // (0,2) -> 4, (1,0) -> 4, recombine -> [4]
    // (2,1) -> 7, (0,2) -> 4, recombine -> [4]
    assert_eq!(fitnesses(&engine), vec![4, 4, 4]);
    assert_eq!(engine.generator().cursor, 8);
}

#[test]
fn generator_handle_is_shared_state() {
    let generator = Cycle {
        indices: vec![0, 2, 1],
        cursor: 0,
    };
    let mut engine = Engine::new(KeepSmaller, vec![9, 4, 7], 1, generator).unwrap();
    engine.generator_mut().cursor = 1;

    engine.iterate();

    // (2,1) -> 7, (0,2) -> 4 => [4]; (1,0) -> 4, (2,1) -> 7 => [4]
    assert_eq!(fitnesses(&engine), vec![4, 4, 4]);
    assert_eq!(engine.generator().cursor, 9);
}
