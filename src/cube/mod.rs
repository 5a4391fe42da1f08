use crate::prelude::*;

use enum_iterator::Sequence;

mod cubie;
mod facie;
mod state;

pub use cubie::Cube;
pub use facie::{format_stickers, parse_stickers, Color};
pub use state::State;

pub trait CubeLike: Sized + core::fmt::Debug + Eq {
    fn solved() -> Self;
    fn apply(self, move_: Move) -> Self;

    fn apply_all(self, moves: impl IntoIterator<Item = Move>) -> Self {
        moves.into_iter().fold(self, |cube, m| cube.apply(m))
    }
}

// Corner slots. A slot is a fixed place in space; cubie `i` is solved in slot `i`.
pub const ULB: u8 = 0;
pub const URB: u8 = 1;
pub const URF: u8 = 2;
pub const ULF: u8 = 3;
pub const DLF: u8 = 4;
pub const DRF: u8 = 5;
pub const DRB: u8 = 6;
pub const DLB: u8 = 7;

pub const SLOTS: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Sequence)]
pub enum Face {
    Up,
    Down,
    Right,
    Left,
    Front,
    Back,
}

impl Face {
    pub fn opposite(self) -> Face {
        match self {
            Face::Up => Face::Down,
            Face::Down => Face::Up,
            Face::Right => Face::Left,
            Face::Left => Face::Right,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Right => 'R',
            Face::Left => 'L',
            Face::Front => 'F',
            Face::Back => 'B',
        }
    }

    pub fn from_letter(c: char) -> Option<Face> {
        let face = match c {
            'U' => Face::Up,
            'D' => Face::Down,
            'R' => Face::Right,
            'L' => Face::Left,
            'F' => Face::Front,
            'B' => Face::Back,
            _ => return None,
        };
        Some(face)
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_is_solved() {
        assert_eq!(Cube::solved(), Cube::solved());
        assert!(Cube::solved().is_solved());
    }

    #[test]
    fn single_move_is_not_solved() {
        assert_ne!(Cube::solved().apply("F".parse().unwrap()), Cube::solved());
    }

    #[test]
    fn opposite_is_an_involution() {
        for face in enum_iterator::all::<Face>() {
            assert_eq!(face.opposite().opposite(), face);
            assert_ne!(face.opposite(), face);
        }
    }

    #[test]
    fn letters_round_trip() {
        for face in enum_iterator::all::<Face>() {
            assert_eq!(Face::from_letter(face.letter()), Some(face));
        }
    }
}
