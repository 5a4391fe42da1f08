use crate::cube::*;

use enum_iterator::Sequence;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub face: Face,
    pub direction: Direction,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Sequence)]
pub enum Direction {
    Single,
    Reverse,
}

/// `(target, source, twist)`: the cubie in `source` lands in `target` and gains `twist`.
pub type Cycle = [(u8, u8, u8); 4];

// Indexed by `Move::index`, in `U u D d R r L l F f B b` order.
const CYCLES: [Cycle; Move::COUNT] = [
    [(ULB, ULF, 0), (URB, ULB, 0), (URF, URB, 0), (ULF, URF, 0)],
    [(ULB, URB, 0), (URB, URF, 0), (URF, ULF, 0), (ULF, ULB, 0)],
    [(DLB, DRB, 0), (DRB, DRF, 0), (DRF, DLF, 0), (DLF, DLB, 0)],
    [(DLB, DLF, 0), (DRB, DLB, 0), (DRF, DRB, 0), (DLF, DRF, 0)],
    [(URF, DRF, 1), (URB, URF, 2), (DRB, URB, 1), (DRF, DRB, 2)],
    [(URF, URB, 1), (URB, DRB, 2), (DRB, DRF, 1), (DRF, URF, 2)],
    [(ULF, ULB, 2), (ULB, DLB, 1), (DLB, DLF, 2), (DLF, ULF, 1)],
    [(ULF, DLF, 2), (ULB, ULF, 1), (DLB, ULB, 2), (DLF, DLB, 1)],
    [(ULF, DLF, 1), (URF, ULF, 2), (DRF, URF, 1), (DLF, DRF, 2)],
    [(ULF, URF, 1), (URF, DRF, 2), (DRF, DLF, 1), (DLF, ULF, 2)],
    [(ULB, URB, 2), (URB, DRB, 1), (DRB, DLB, 2), (DLB, ULB, 1)],
    [(ULB, DLB, 2), (URB, ULB, 1), (DRB, URB, 2), (DLB, DRB, 1)],
];

impl Move {
    pub const COUNT: usize = 12;

    /// The alphabet left once the DLB cubie is fixed: none of these turns touch it.
    pub const REDUCED: [Move; 6] = [
        Move::new(Face::Up, Direction::Single),
        Move::new(Face::Up, Direction::Reverse),
        Move::new(Face::Front, Direction::Single),
        Move::new(Face::Front, Direction::Reverse),
        Move::new(Face::Right, Direction::Single),
        Move::new(Face::Right, Direction::Reverse),
    ];

    pub const fn new(face: Face, direction: Direction) -> Move {
        Move { face, direction }
    }

    pub fn all() -> impl Iterator<Item = Move> {
        enum_iterator::all::<Face>().flat_map(|face| {
            enum_iterator::all::<Direction>().map(move |direction| Move { face, direction })
        })
    }

    pub fn index(self) -> usize {
        self.face as usize * 2 + self.direction as usize
    }

    pub fn from_index(index: usize) -> Move {
        let face = match index / 2 {
            0 => Face::Up,
            1 => Face::Down,
            2 => Face::Right,
            3 => Face::Left,
            4 => Face::Front,
            5 => Face::Back,
            _ => panic!("move index out of range: {}", index),
        };
        let direction = if index % 2 == 0 {
            Direction::Single
        } else {
            Direction::Reverse
        };
        Move { face, direction }
    }

    pub fn cycle(self) -> &'static Cycle {
        &CYCLES[self.index()]
    }

    pub fn reverse(self) -> Move {
        let direction = match self.direction {
            Direction::Single => Direction::Reverse,
            Direction::Reverse => Direction::Single,
        };
        Move { direction, ..self }
    }

    /// The turn of the opposite face that, following `self`, turns the whole cube.
    pub fn opposite(self) -> Move {
        Move {
            face: self.face.opposite(),
            direction: self.reverse().direction,
        }
    }

    #[cfg(test)]
    pub fn inverse_seq(moves: &[Move]) -> Vec<Move> {
        moves.iter().rev().map(|m| m.reverse()).collect()
    }

    /// Internal one-character alphabet: upper case is clockwise, lower case is not.
    pub fn symbol(self) -> char {
        let c = self.face.letter();
        match self.direction {
            Direction::Single => c,
            Direction::Reverse => c.to_ascii_lowercase(),
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Move> {
        let face = Face::from_letter(symbol.to_ascii_uppercase())?;
        let direction = if symbol.is_ascii_uppercase() {
            Direction::Single
        } else {
            Direction::Reverse
        };
        Some(Move { face, direction })
    }

    /// Parses external notation, e.g. `U R' F2`. Double turns become two quarter turns.
    pub fn parse_sequence(s: &str) -> anyhow::Result<Vec<Move>> {
        let mut moves = Vec::new();
        for token in s.split_whitespace() {
            match token.strip_suffix('2') {
                Some(single) => {
                    let m: Move = single.parse()?;
                    moves.extend([m, m]);
                }
                None => moves.push(token.parse()?),
            }
        }
        Ok(moves)
    }

    /// Parses the internal alphabet, e.g. `UuFF`.
    pub fn parse_symbols(s: &str) -> anyhow::Result<Vec<Move>> {
        s.chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| Move::from_symbol(c).ok_or_else(|| anyhow::anyhow!("Unrecognized move {}", c)))
            .collect()
    }
}

pub fn format_route(moves: &[Move]) -> String {
    moves
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn scramble(rng: &mut impl rand::Rng, count: usize) -> Vec<Move> {
    (0..count)
        .map(|_| Move::from_index(rng.gen_range(0, Move::COUNT)))
        .collect()
}

pub fn random_scramble(count: usize) -> Vec<Move> {
    scramble(&mut rand::thread_rng(), count)
}

impl core::str::FromStr for Move {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Move> {
        let mut chars = s.chars();
        let face_char = match chars.next() {
            Some(c) => c,
            None => return Err(anyhow::anyhow!("No face for move")),
        };

        let face = match Face::from_letter(face_char) {
            Some(f) => f,
            None => return Err(anyhow::anyhow!("Unrecognized face {}", face_char)),
        };

        let direction = match chars.next() {
            None => Direction::Single,
            Some('\'') => Direction::Reverse,
            Some(c) => return Err(anyhow::anyhow!("Unrecognized direction {}", c)),
        };

        if let Some(c) = chars.next() {
            return Err(anyhow::anyhow!("Trailing characters in move {}: {}", s, c));
        }

        Ok(Move { face, direction })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.direction {
            Direction::Single => write!(f, "{}", self.face),
            Direction::Reverse => write!(f, "{}'", self.face),
        }
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Move {
    fn arbitrary<G: quickcheck::Gen>(g: &mut G) -> Self {
        Move::from_index(<usize as quickcheck::Arbitrary>::arbitrary(g) % Move::COUNT)
    }
}
