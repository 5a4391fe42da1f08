pub use crate::cube::*;
pub use crate::error::*;
pub use crate::heuristic::Heuristic;
pub use crate::pattern::PatternDatabase;
pub use crate::r#move::*;
pub use crate::solver::*;
pub use crate::symmetry::*;

#[cfg(test)]
pub use crate::test::*;

pub use std::time::Duration;
