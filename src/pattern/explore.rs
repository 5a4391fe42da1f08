use crate::prelude::*;

use std::collections::{hash_map::Entry, HashMap, VecDeque};

/// Where one tracked cubie sits, ignoring every other cubie.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    pub slot: u8,
    pub twist: u8,
}

pub const PLACEMENTS: usize = SLOTS * 3;

impl Placement {
    pub const fn home(cubie: u8) -> Placement {
        Placement {
            slot: cubie,
            twist: 0,
        }
    }

    pub fn index(self) -> usize {
        self.twist as usize * SLOTS + self.slot as usize
    }

    pub fn from_index(index: usize) -> Placement {
        Placement {
            slot: (index % SLOTS) as u8,
            twist: (index / SLOTS) as u8,
        }
    }

    pub fn apply(self, move_: Move) -> Placement {
        move_
            .cycle()
            .iter()
            .find(|&&(_, from, _)| from == self.slot)
            .map_or(self, |&(to, _, twist)| Placement {
                slot: to,
                twist: (self.twist + twist) % 3,
            })
    }
}

/// Breadth-first distances from `home` to every reachable arrangement of the tracked cubies.
///
/// The move set contains every inverse, so the distance out from `home` equals the
/// distance back to it.
pub fn explore<const N: usize>(name: &str, home: [Placement; N]) -> HashMap<[Placement; N], u8> {
    let start = std::time::Instant::now();
    log::debug!("Exploring {}", name);

    let mut distances = HashMap::new();
    distances.insert(home, 0);

    let mut to_expand = VecDeque::new();
    to_expand.push_back(home);

    while let Some(from) = to_expand.pop_front() {
        let depth = distances[&from];
        for m in Move::all() {
            let to = from.map(|p| p.apply(m));
            if let Entry::Vacant(v) = distances.entry(to) {
                v.insert(depth + 1);
                to_expand.push_back(to);
            }
        }
    }

    log::debug!(
        "Finished exploring {}, {} arrangements, took {:?}",
        name,
        distances.len(),
        start.elapsed()
    );
    distances
}
