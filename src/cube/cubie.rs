use crate::prelude::*;

/// Corner-only cube: which cubie sits in each slot and how it is twisted.
///
/// Equality and hashing are structural over both arrays, which makes a `Cube`
/// directly usable as a visited-set key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cube {
    position: [u8; SLOTS],
    orientation: [u8; SLOTS],
}

impl super::CubeLike for Cube {
    fn solved() -> Self {
        Cube {
            position: [ULB, URB, URF, ULF, DLF, DRF, DRB, DLB],
            orientation: [0; SLOTS],
        }
    }

    fn apply(self, move_: Move) -> Self {
        let mut next = self;
        for &(to, from, twist) in move_.cycle() {
            next.position[to as usize] = self.position[from as usize];
            next.orientation[to as usize] = (self.orientation[from as usize] + twist) % 3;
        }
        next
    }
}

impl Cube {
    /// Callers are trusted to pass a permutation of `0..8` and twists below 3.
    pub(crate) fn from_parts(position: [u8; SLOTS], orientation: [u8; SLOTS]) -> Cube {
        debug_assert!(orientation.iter().all(|&o| o < 3));
        debug_assert!({
            let mut seen = [false; SLOTS];
            position.iter().all(|&c| !std::mem::replace(&mut seen[c as usize], true))
        });
        Cube {
            position,
            orientation,
        }
    }

    pub fn position(&self) -> &[u8; SLOTS] {
        &self.position
    }

    pub fn orientation(&self) -> &[u8; SLOTS] {
        &self.orientation
    }

    pub fn is_solved(&self) -> bool {
        *self == Cube::solved()
    }

    pub fn is_home(&self, slot: u8) -> bool {
        self.position[slot as usize] == slot && self.orientation[slot as usize] == 0
    }

    /// Slot of each cubie, indexed by cubie.
    pub fn locate(&self) -> [u8; SLOTS] {
        let mut slots = [0; SLOTS];
        for (slot, &cubie) in self.position.iter().enumerate() {
            slots[cubie as usize] = slot as u8;
        }
        slots
    }

    pub fn misplaced(&self) -> usize {
        self.position
            .iter()
            .enumerate()
            .filter(|&(slot, &cubie)| slot as u8 != cubie)
            .count()
    }

    pub fn misoriented(&self) -> usize {
        self.orientation.iter().filter(|&&o| o != 0).count()
    }

    /// Twist sum mod 3. Every move preserves it, so reachable cubes have 0.
    pub fn twist_parity(&self) -> u8 {
        (self.orientation.iter().map(|&o| o as u32).sum::<u32>() % 3) as u8
    }
}
