mod matrix_minima;
mod north_west;
mod vogel;

pub use matrix_minima::MatrixMinima;
pub use north_west::NorthWestCorner;
pub use vogel::VogelApproximation;

use crate::problem::{BalancedProblem, Position};

/// A cell-selection heuristic driving the reduction loop.
///
/// Rules are stateless: each call inspects the current (already pruned)
/// problem and names the next cell to allocate. The returned position is
/// only valid until the engine removes the exhausted row or column.
pub trait SelectionRule<T> {
    fn select(&self, problem: &BalancedProblem<T>) -> Position;
}
