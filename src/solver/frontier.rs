use crate::heuristic::{Estimate, Evaluator};
use crate::prelude::*;

use core::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

pub trait Frontier: Default {
    fn push(&mut self, state: State, evaluator: &Evaluator);
    fn pop(&mut self) -> Option<State>;
    fn len(&self) -> usize;
}

/// A queued state with its total cost, computed once on insertion.
///
/// Ordered by cost alone, then by insertion so that equal costs leave first-in first-out.
#[derive(Debug)]
struct Node {
    cost: Estimate,
    order: usize,
    state: State,
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Node {}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.cost, self.order).cmp(&(other.cost, other.order))
    }
}

/// Lowest route length plus estimate first.
#[derive(Default)]
pub struct BestFirst {
    heap: BinaryHeap<Reverse<Node>>,
    inserted: usize,
}

impl Frontier for BestFirst {
    fn push(&mut self, state: State, evaluator: &Evaluator) {
        let cost = evaluator.cost(&state);
        self.heap.push(Reverse(Node {
            cost,
            order: self.inserted,
            state,
        }));
        self.inserted += 1;
    }

    fn pop(&mut self) -> Option<State> {
        self.heap.pop().map(|Reverse(node)| node.state)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

/// Plain queue; ignores the evaluator and finds shortest routes.
#[derive(Default)]
pub struct BreadthFirst {
    queue: VecDeque<State>,
}

impl Frontier for BreadthFirst {
    fn push(&mut self, state: State, _evaluator: &Evaluator) {
        self.queue.push_back(state);
    }

    fn pop(&mut self) -> Option<State> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristic::Heuristic;

    fn state(moves: &str) -> State {
        State::solved().apply_all(Move::parse_sequence(moves).unwrap())
    }

    #[test]
    fn best_first_pops_cheapest() {
        let evaluator = Evaluator::new(&DATABASE, Heuristic::Single);
        let mut frontier = BestFirst::default();
        frontier.push(state("R U F"), &evaluator);
        frontier.push(state("R"), &evaluator);
        frontier.push(state("R U"), &evaluator);

        assert_eq!(frontier.len(), 3);
        assert_eq!(frontier.pop().unwrap().depth(), 1);
        assert_eq!(frontier.pop().unwrap().depth(), 2);
        assert_eq!(frontier.pop().unwrap().depth(), 3);
        assert_eq!(frontier.len(), 0);
    }

    #[test]
    fn best_first_ties_are_fifo() {
        let evaluator = Evaluator::new(&DATABASE, Heuristic::Misplaced);
        let mut frontier = BestFirst::default();
        frontier.push(state("U"), &evaluator);
        frontier.push(state("D"), &evaluator);

        assert_eq!(frontier.pop().unwrap(), state("U"));
        assert_eq!(frontier.pop().unwrap(), state("D"));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn breadth_first_is_fifo() {
        let evaluator = Evaluator::new(&DATABASE, Heuristic::Pair);
        let mut frontier = BreadthFirst::default();
        frontier.push(state("R U F"), &evaluator);
        frontier.push(state("R"), &evaluator);

        assert_eq!(frontier.pop().unwrap().depth(), 3);
        assert_eq!(frontier.pop().unwrap().depth(), 1);
        assert_eq!(frontier.len(), 0);
    }
}
