use crate::prelude::*;

mod explore;
pub use explore::{explore, Placement, PLACEMENTS};

mod store;

/// Marks pair entries no arrangement can reach (both cubies in one slot).
pub const UNREACHED: u8 = u8::MAX;

/// Corner pairs that share a cube edge when solved: U face, D face, then verticals.
pub const PAIRS: [(u8, u8); 12] = [
    (ULB, URB),
    (URB, URF),
    (URF, ULF),
    (ULB, ULF),
    (DLF, DRF),
    (DRF, DRB),
    (DRB, DLB),
    (DLF, DLB),
    (ULB, DLB),
    (URB, DRB),
    (URF, DRF),
    (ULF, DLF),
];

type SingleTable = [u8; PLACEMENTS];
type PairTable = Vec<u8>;

/// Exact distances for the one-cubie and two-cubie relaxations of the cube.
///
/// Built or loaded once, then only read; share it by reference between solves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternDatabase {
    single: [SingleTable; SLOTS],
    pairs: Vec<PairTable>,
}

impl PatternDatabase {
    pub fn build() -> Self {
        let start = std::time::Instant::now();
        log::info!("Building pattern database");

        let mut single = [[UNREACHED; PLACEMENTS]; SLOTS];
        for (cubie, table) in single.iter_mut().enumerate() {
            *table = single_table(cubie as u8);
        }
        let pairs = PAIRS.iter().map(|&pair| pair_table(pair)).collect();

        log::info!("Finished building pattern database, took {:?}", start.elapsed());
        PatternDatabase { single, pairs }
    }

    /// Same tables as `build`, with every exploration on its own thread.
    pub fn build_parallel() -> Self {
        let start = std::time::Instant::now();
        log::info!("Building pattern database on {} threads", SLOTS + PAIRS.len());

        let (single, pairs) = std::thread::scope(|s| {
            let single = (0..SLOTS as u8)
                .map(|cubie| s.spawn(move || single_table(cubie)))
                .collect::<Vec<_>>();
            let pairs = PAIRS
                .iter()
                .map(|&pair| s.spawn(move || pair_table(pair)))
                .collect::<Vec<_>>();

            let mut tables = [[UNREACHED; PLACEMENTS]; SLOTS];
            for (table, handle) in tables.iter_mut().zip(single) {
                *table = join(handle);
            }
            (tables, pairs.into_iter().map(join).collect::<Vec<_>>())
        });

        log::info!("Finished building pattern database, took {:?}", start.elapsed());
        PatternDatabase { single, pairs }
    }

    /// Moves needed to bring `cubie` home from `at`.
    pub fn single(&self, cubie: u8, at: Placement) -> u8 {
        self.single[cubie as usize][at.index()]
    }

    /// Moves needed to bring both cubies of `PAIRS[pair]` home, from `first` and `second`.
    pub fn pair(&self, pair: usize, first: Placement, second: Placement) -> u8 {
        self.pairs[pair][pair_index(first, second)]
    }
}

fn pair_index(first: Placement, second: Placement) -> usize {
    first.index() * PLACEMENTS + second.index()
}

fn single_table(cubie: u8) -> SingleTable {
    let mut table = [UNREACHED; PLACEMENTS];
    for ([at], distance) in explore(&format!("cubie {}", cubie), [Placement::home(cubie)]) {
        table[at.index()] = distance;
    }
    table
}

fn pair_table((a, b): (u8, u8)) -> PairTable {
    let mut table = vec![UNREACHED; PLACEMENTS * PLACEMENTS];
    let home = [Placement::home(a), Placement::home(b)];
    for ([first, second], distance) in explore(&format!("pair {}-{}", a, b), home) {
        table[pair_index(first, second)] = distance;
    }
    table
}

fn join<T>(handle: std::thread::ScopedJoinHandle<'_, T>) -> T {
    match handle.join() {
        Ok(table) => table,
        Err(e) => std::panic::resume_unwind(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_entries_are_zero() {
        for cubie in 0..SLOTS as u8 {
            assert_eq!(DATABASE.single(cubie, Placement::home(cubie)), 0);
        }
        for (i, &(a, b)) in PAIRS.iter().enumerate() {
            assert_eq!(DATABASE.pair(i, Placement::home(a), Placement::home(b)), 0);
        }
    }

    #[test]
    fn pairs_are_cube_edges() {
        for cubie in 0..SLOTS as u8 {
            let degree = PAIRS.iter().filter(|&&(a, b)| a == cubie || b == cubie).count();
            assert_eq!(degree, 3);
        }
        assert!(PAIRS.iter().all(|&(a, b)| a < b));
    }

    #[test]
    fn every_single_entry_is_filled() {
        for cubie in 0..SLOTS as u8 {
            for i in 0..PLACEMENTS {
                let distance = DATABASE.single(cubie, Placement::from_index(i));
                assert!(distance <= 3, "cubie {} at {}: {}", cubie, i, distance);
            }
        }
    }

    #[test]
    fn one_move_away_is_one() {
        let cube = cube_with_moves("R");
        for slot in [URF, URB, DRB, DRF] {
            let at = Placement {
                slot,
                twist: cube.orientation()[slot as usize],
            };
            assert_eq!(DATABASE.single(cube.position()[slot as usize], at), 1);
        }
    }

    #[test]
    fn pair_dominates_its_singles() {
        for (i, &(a, b)) in PAIRS.iter().enumerate() {
            for first in (0..PLACEMENTS).map(Placement::from_index) {
                for second in (0..PLACEMENTS).map(Placement::from_index) {
                    let both = DATABASE.pair(i, first, second);
                    if first.slot == second.slot {
                        assert_eq!(both, UNREACHED);
                        continue;
                    }
                    assert!(both >= DATABASE.single(a, first));
                    assert!(both >= DATABASE.single(b, second));
                }
            }
        }
    }

    #[test]
    fn parallel_build_matches() {
        assert_eq!(PatternDatabase::build_parallel(), *DATABASE);
    }
}
