use crate::cube::Color;

/// Sticker input that does not describe a corner cube a solver could reach.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidConfiguration {
    #[error("Unknown colour {0:?}")]
    UnknownColor(char),
    #[error("Expected 24 stickers but got {0}")]
    StickerCount(usize),
    #[error("Slot {slot} shows {colors:?}, which is not a rotation of any corner")]
    NotACorner { slot: usize, colors: [Color; 3] },
    #[error("Slots {first} and {second} hold the same corner")]
    DuplicateCubie { first: usize, second: usize },
    #[error("Corner twists sum to {parity} mod 3, the cube has a twisted corner")]
    Twisted { parity: u8 },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("Frontier exhausted without reaching the goal ({generated} generated, {visited} visited)")]
    Exhausted { generated: usize, visited: usize },
}
