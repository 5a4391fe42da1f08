use crate::prelude::*;

use smallvec::SmallVec;

pub type Route = SmallVec<[Move; 16]>;

/// A cube together with the moves that produced it.
///
/// Children are built by copying the cube and extending a clone of the route, so
/// a state never shares storage with its parent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
    pub cube: Cube,
    pub route: Route,
}

impl super::CubeLike for State {
    fn solved() -> Self {
        State::from(Cube::solved())
    }

    fn apply(mut self, move_: Move) -> Self {
        self.cube = self.cube.apply(move_);
        self.route.push(move_);
        self
    }
}

impl From<Cube> for State {
    fn from(cube: Cube) -> Self {
        State {
            cube,
            route: Route::new(),
        }
    }
}

impl State {
    pub fn children<'a>(&'a self, moves: &'a [Move]) -> impl Iterator<Item = State> + 'a {
        moves.iter().map(move |&m| self.clone().apply(m))
    }

    pub fn is_solved(&self) -> bool {
        self.cube.is_solved()
    }

    pub fn depth(&self) -> usize {
        self.route.len()
    }
}
