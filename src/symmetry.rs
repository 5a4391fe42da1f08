use crate::prelude::*;

use std::collections::{HashSet, VecDeque};

/// Slot whose cubie is brought home by whole-cube turns before searching, so the
/// search only needs U, F and R.
pub const REFERENCE: u8 = DLB;

/// A cube turned as a whole until `REFERENCE` is solved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reduction {
    pub cube: Cube,
    /// One symbol per whole-cube turn; each stands for itself followed by its opposite.
    pub route: Vec<Move>,
}

impl Reduction {
    #[cfg(test)]
    pub fn expanded_route(&self) -> Vec<Move> {
        expand(&self.route)
    }
}

/// `move_` and then the opposite face the other way: the whole cube turns.
pub fn rotate(cube: Cube, move_: Move) -> Cube {
    cube.apply(move_).apply(move_.opposite())
}

fn expand(route: &[Move]) -> Vec<Move> {
    route.iter().flat_map(|&m| [m, m.opposite()]).collect()
}

pub fn reduce(cube: Cube) -> Reduction {
    if cube.is_home(REFERENCE) {
        return Reduction {
            cube,
            route: Vec::new(),
        };
    }

    let mut seen = HashSet::new();
    seen.insert(cube);
    let mut to_expand = VecDeque::new();
    to_expand.push_back((cube, Vec::new()));

    while let Some((from, route)) = to_expand.pop_front() {
        for m in Move::all() {
            let to = rotate(from, m);
            if !seen.insert(to) {
                continue;
            }

            let mut route = route.clone();
            route.push(m);
            if to.is_home(REFERENCE) {
                log::debug!("Reduced with {}", format_route(&route));
                return Reduction { cube: to, route };
            }
            to_expand.push_back((to, route));
        }
    }

    // The 24 rotations reach every (slot, twist) of the reference cubie.
    unreachable!("no rotation solves the reference cubie of\n{}", cube);
}

lazy_static::lazy_static! {
    static ref CONJUGATES: [[Move; Move::COUNT]; Move::COUNT] = conjugates();
}

fn conjugates() -> [[Move; Move::COUNT]; Move::COUNT] {
    let mut table = [[Move::from_index(0); Move::COUNT]; Move::COUNT];
    for turn in Move::all() {
        for m in Move::all() {
            let target = rotate(Cube::solved(), turn).apply(m);
            table[turn.index()][m.index()] =
                match Move::all().find(|&c| rotate(Cube::solved().apply(c), turn) == target) {
                    Some(c) => c,
                    None => unreachable!("{} is not conjugate to a face turn under {}", m, turn),
                };
        }
    }
    table
}

/// The face turn `m'` with `[turn, opposite, m]` equal to `[m', turn, opposite]`.
pub fn conjugate(turn: Move, m: Move) -> Move {
    CONJUGATES[turn.index()][m.index()]
}

/// Rewrites a solution of the reduced cube into one for the cube before reduction.
///
/// The whole-cube turns are moved past every solution move and end up last, where
/// they return the cube to the original frame.
pub fn translate_route(reduction: &[Move], solution: &[Move]) -> Vec<Move> {
    solution
        .iter()
        .map(|&m| reduction.iter().rev().fold(m, |m, &turn| conjugate(turn, m)))
        .chain(expand(reduction))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_needs_no_reduction() {
        let reduction = reduce(Cube::solved());
        assert!(reduction.route.is_empty());
        assert!(reduction.cube.is_solved());
    }

    #[test]
    fn reduced_moves_keep_reference() {
        let cube = cube_with_moves("U R' F2 R U F'");
        assert!(cube.is_home(REFERENCE));
        assert!(reduce(cube).route.is_empty());
    }

    #[test]
    fn rotation_turns_the_whole_cube() {
        let up: Move = "U".parse().unwrap();
        let turned = rotate(Cube::solved(), up);
        assert_eq!(turned.misoriented(), 0);
        assert_eq!(turned.misplaced(), SLOTS);
        assert!(rotate(rotate(rotate(turned, up), up), up).is_solved());
    }

    #[quickcheck]
    fn reduction_fixes_reference(moves: Vec<Move>) -> bool {
        let cube = Cube::solved().apply_all(moves);
        let reduction = reduce(cube);
        reduction.cube.is_home(REFERENCE)
            && reduction.cube == cube.apply_all(reduction.expanded_route())
            && reduction.route.len() <= 3
    }

    #[test]
    fn conjugation_rows_are_permutations() {
        for turn in Move::all() {
            let mut row = Move::all().map(|m| conjugate(turn, m)).collect::<Vec<_>>();
            row.sort();
            row.dedup();
            assert_eq!(row.len(), Move::COUNT);
        }
    }

    #[test]
    fn conjugation_respects_direction_and_axis() {
        for turn in Move::all() {
            for m in Move::all() {
                let c = conjugate(turn, m);
                assert_eq!(conjugate(turn, m.reverse()), c.reverse());
                assert_eq!(conjugate(turn, m.opposite()), c.opposite());
            }
        }
    }

    #[test]
    fn turn_axis_is_kept() {
        let up: Move = "U".parse().unwrap();
        let down: Move = "D".parse().unwrap();
        let front: Move = "F".parse().unwrap();
        assert_eq!(conjugate(up, up), up);
        assert_eq!(conjugate(up, down), down);
        assert_ne!(conjugate(up, front).face, Face::Front);
    }

    #[quickcheck]
    fn translation_matches_reduced_frame(scramble: Vec<Move>, solution: Vec<Move>) -> bool {
        let cube = Cube::solved().apply_all(scramble);
        let reduction = reduce(cube);
        let translated = translate_route(&reduction.route, &solution);

        translated.len() == solution.len() + 2 * reduction.route.len()
            && cube.apply_all(translated) == reduction.cube.apply_all(solution)
    }
}
