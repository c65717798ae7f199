use crate::algo::SelectionRule;
use crate::problem::{BalancedProblem, Position};

/// The North-West Corner rule: always allocate the top-left remaining cell.
///
/// Cost-blind, so it is the cheapest rule to evaluate and usually yields
/// the most expensive plan.
#[derive(Clone, Copy, Debug, Default)]
pub struct NorthWestCorner;

impl<T> SelectionRule<T> for NorthWestCorner {
    fn select(&self, _problem: &BalancedProblem<T>) -> Position {
        Position::ORIGIN
    }
}
