use crate::heuristic::Evaluator;
use crate::prelude::*;

use std::collections::HashSet;
use std::time::Instant;

mod frontier;
pub use frontier::*;

/// Order in which generated states are expanded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Cheapest route length plus estimate first.
    #[default]
    BestFirst,
    /// Shallowest first; routes are shortest, the heuristic is ignored.
    BreadthFirst,
}

impl core::str::FromStr for Strategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Strategy> {
        match s {
            "best-first" => Ok(Strategy::BestFirst),
            "breadth-first" => Ok(Strategy::BreadthFirst),
            _ => Err(anyhow::anyhow!("Unknown strategy {}", s)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Moves that solve the cube as given, whole-cube turns included.
    pub route: Vec<Move>,
    pub nodes_generated: usize,
    pub nodes_visited: usize,
    pub elapsed: Duration,
}

impl Solution {
    /// The route in the one-letter alphabet, e.g. `UrFF`.
    pub fn symbols(&self) -> String {
        self.route.iter().map(|m| m.symbol()).collect()
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Solution: {}", format_route(&self.route))?;
        writeln!(f, "Symbols: {}", self.symbols())?;
        writeln!(f, "Moves: {}", self.route.len())?;
        writeln!(f, "Nodes generated: {}", self.nodes_generated)?;
        writeln!(f, "Nodes visited: {}", self.nodes_visited)?;
        write!(f, "Time: {:?}", self.elapsed)
    }
}

/// Searches from a cube to the solved state.
///
/// Holds only a borrow of the database, so one solver may serve many threads.
#[derive(Clone, Copy)]
pub struct Solver<'db> {
    evaluator: Evaluator<'db>,
    symmetry: bool,
    strategy: Strategy,
}

impl<'db> Solver<'db> {
    pub fn new(database: &'db PatternDatabase) -> Self {
        Solver {
            evaluator: Evaluator::new(database, Heuristic::default()),
            symmetry: true,
            strategy: Strategy::default(),
        }
    }

    pub fn heuristic(mut self, heuristic: Heuristic) -> Self {
        self.evaluator.heuristic = heuristic;
        self
    }

    /// With symmetry the cube is first turned so DLB is solved, then only U, F and R are
    /// searched.
    pub fn symmetry(mut self, symmetry: bool) -> Self {
        self.symmetry = symmetry;
        self
    }

    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn solve(&self, cube: Cube) -> Result<Solution, SearchError> {
        match self.strategy {
            Strategy::BestFirst => self.search::<BestFirst>(cube),
            Strategy::BreadthFirst => self.search::<BreadthFirst>(cube),
        }
    }

    /// Solves every cube, at most one per available core at a time. Results are in input order.
    pub fn solve_all(&self, cubes: &[Cube]) -> Vec<Result<Solution, SearchError>> {
        let workers = std::thread::available_parallelism().map_or(1, |n| n.get());
        self.solve_in_chunks(cubes, workers)
    }

    fn solve_in_chunks(&self, cubes: &[Cube], workers: usize) -> Vec<Result<Solution, SearchError>> {
        let mut results = Vec::with_capacity(cubes.len());
        for chunk in cubes.chunks(workers.max(1)) {
            std::thread::scope(|s| {
                let handles = chunk
                    .iter()
                    .map(|&cube| s.spawn(move || self.solve(cube)))
                    .collect::<Vec<_>>();

                for handle in handles {
                    match handle.join() {
                        Ok(result) => results.push(result),
                        Err(e) => std::panic::resume_unwind(e),
                    }
                }
            });
        }
        results
    }

    fn search<F: Frontier>(&self, cube: Cube) -> Result<Solution, SearchError> {
        let start = Instant::now();

        let reduction = if self.symmetry {
            reduce(cube)
        } else {
            Reduction {
                cube,
                route: Vec::new(),
            }
        };
        let moves: Vec<Move> = if self.symmetry {
            Move::REDUCED.to_vec()
        } else {
            Move::all().collect()
        };

        let finish = |solution: &[Move], nodes_generated, nodes_visited, peak_frontier| {
            let solution = Solution {
                route: translate_route(&reduction.route, solution),
                nodes_generated,
                nodes_visited,
                elapsed: start.elapsed(),
            };
            log::info!(
                "Solved with heuristic mode {} in {} moves, {} generated, {} visited, took {:?}",
                self.evaluator.heuristic.mode(),
                solution.route.len(),
                nodes_generated,
                nodes_visited,
                solution.elapsed
            );
            log::debug!("Largest frontier held {} states", peak_frontier);
            solution
        };

        let initial = State::from(reduction.cube);
        if initial.is_solved() {
            return Ok(finish(&[], 0, 1, 0));
        }

        let mut visited = HashSet::new();
        visited.insert(initial.cube);
        let mut frontier = F::default();
        frontier.push(initial, &self.evaluator);
        let mut generated = 0;
        let mut peak_frontier = frontier.len();

        while let Some(state) = frontier.pop() {
            for child in state.children(&moves) {
                generated += 1;
                if visited.contains(&child.cube) {
                    continue;
                }
                if child.is_solved() {
                    return Ok(finish(
                        child.route.as_slice(),
                        generated,
                        visited.len(),
                        peak_frontier,
                    ));
                }
                visited.insert(child.cube);
                frontier.push(child, &self.evaluator);
            }
            peak_frontier = peak_frontier.max(frontier.len());
        }

        log::warn!(
            "Search exhausted after {} generated, {} visited",
            generated,
            visited.len()
        );
        Err(SearchError::Exhausted {
            generated,
            visited: visited.len(),
        })
    }
}
