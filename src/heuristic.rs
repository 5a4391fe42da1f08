use crate::prelude::*;

use crate::pattern::{Placement, PatternDatabase, PAIRS};

/// Cost in twenty-fourths of a move, so every heuristic divisor divides exactly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Estimate(u32);

impl Estimate {
    const PER_MOVE: u32 = 24;

    pub fn moves(count: usize) -> Estimate {
        Estimate(count as u32 * Self::PER_MOVE)
    }

    pub fn as_moves(self) -> f64 {
        self.0 as f64 / Self::PER_MOVE as f64
    }
}

impl core::ops::Add for Estimate {
    type Output = Estimate;

    fn add(self, other: Estimate) -> Estimate {
        Estimate(self.0 + other.0)
    }
}

impl std::fmt::Display for Estimate {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:.3}", self.as_moves())
    }
}

/// How the remaining distance is estimated, from cheapest to most informed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// Mis-oriented plus mis-placed cubies, over 8.
    Misplaced,
    /// Single-cubie database entries, over 4.
    Single,
    /// Pair database entries, over 6.
    #[default]
    Pair,
}

impl Heuristic {
    pub fn mode(self) -> u8 {
        match self {
            Heuristic::Misplaced => 0,
            Heuristic::Single => 1,
            Heuristic::Pair => 2,
        }
    }

    pub fn estimate(self, database: &PatternDatabase, cube: &Cube) -> Estimate {
        // Each weight is 24 over the divisor.
        match self {
            Heuristic::Misplaced => Estimate((cube.misoriented() + cube.misplaced()) as u32 * 3),
            Heuristic::Single => {
                let sum: u32 = (0..SLOTS)
                    .map(|slot| {
                        let at = Placement {
                            slot: slot as u8,
                            twist: cube.orientation()[slot],
                        };
                        database.single(cube.position()[slot], at) as u32
                    })
                    .sum();
                Estimate(sum * 6)
            }
            Heuristic::Pair => {
                let slots = cube.locate();
                let at = |cubie: u8| {
                    let slot = slots[cubie as usize];
                    Placement {
                        slot,
                        twist: cube.orientation()[slot as usize],
                    }
                };
                let sum: u32 = PAIRS
                    .iter()
                    .enumerate()
                    .map(|(i, &(a, b))| database.pair(i, at(a), at(b)) as u32)
                    .sum();
                Estimate(sum * 4)
            }
        }
    }
}

impl core::str::FromStr for Heuristic {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Heuristic> {
        match s {
            "0" | "misplaced" => Ok(Heuristic::Misplaced),
            "1" | "single" => Ok(Heuristic::Single),
            "2" | "pair" => Ok(Heuristic::Pair),
            _ => Err(anyhow::anyhow!("Unknown heuristic {}", s)),
        }
    }
}

/// Scores states as route length so far plus the estimated remainder.
#[derive(Clone, Copy)]
pub struct Evaluator<'db> {
    pub database: &'db PatternDatabase,
    pub heuristic: Heuristic,
}

impl<'db> Evaluator<'db> {
    pub fn new(database: &'db PatternDatabase, heuristic: Heuristic) -> Self {
        Evaluator {
            database,
            heuristic,
        }
    }

    pub fn cost(&self, state: &State) -> Estimate {
        Estimate::moves(state.depth()) + self.heuristic.estimate(self.database, &state.cube)
    }
}
