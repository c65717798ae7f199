use itertools::Itertools;

use crate::algo::SelectionRule;
use crate::problem::{BalancedProblem, Position};
use crate::value::Value;

/// The Matrix Minima (least cost) rule: allocate the globally cheapest
/// remaining cell, first occurrence in row-major order on ties.
#[derive(Clone, Copy, Debug, Default)]
pub struct MatrixMinima;

impl<T: Value> SelectionRule<T> for MatrixMinima {
    fn select(&self, problem: &BalancedProblem<T>) -> Position {
        let cols = problem.cols();
        let index = (0..problem.rows())
            .flat_map(|row| problem.row(row).iter().copied())
            .position_min()
            .expect("bug: selection on an exhausted problem");
        Position::new(index / cols, index % cols)
    }
}
