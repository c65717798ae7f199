use alloc::vec::Vec;

use itertools::Itertools;

use crate::algo::SelectionRule;
use crate::problem::{BalancedProblem, Position};
use crate::value::Value;

/// Vogel's Approximation rule: allocate the cheapest cell of the row or
/// column with the largest penalty, where a line's penalty is the gap
/// between its two smallest costs.
///
/// Penalties are only defined when every line has at least two cells.
/// Degenerate shapes (a single row or a single column) are reduced from the
/// top-left corner instead of through penalty comparison.
#[derive(Clone, Copy, Debug, Default)]
pub struct VogelApproximation;

impl<T: Value> SelectionRule<T> for VogelApproximation {
    fn select(&self, problem: &BalancedProblem<T>) -> Position {
        if problem.rows() < 2 || problem.cols() < 2 {
            return Position::ORIGIN;
        }

        let row_penalties: Vec<T> = (0..problem.rows())
            .map(|row| penalty(problem.row(row).iter().copied()))
            .collect();
        let col_penalties: Vec<T> = (0..problem.cols())
            .map(|col| penalty(problem.column(col)))
            .collect();

        let (best_row, row_max) = first_max(&row_penalties);
        let (best_col, col_max) = first_max(&col_penalties);

        // On equal penalties the row wins.
        if row_max >= col_max {
            let col = problem
                .row(best_row)
                .iter()
                .position_min()
                .expect("bug: penalty computed for an empty row");
            Position::new(best_row, col)
        } else {
            let row = problem
                .column(best_col)
                .position_min()
                .expect("bug: penalty computed for an empty column");
            Position::new(row, best_col)
        }
    }
}

/// Gap between the two smallest values of a line with at least two cells.
fn penalty<T: Value>(line: impl Iterator<Item = T>) -> T {
    let mut low = None;
    let mut next = None;
    for value in line {
        match low {
            Some(l) if value >= l => {
                if next.map_or(true, |n| value < n) {
                    next = Some(value);
                }
            }
            _ => {
                next = low;
                low = Some(value);
            }
        }
    }
    let low = low.expect("bug: penalty of an empty line");
    let next = next.expect("bug: penalty of a single-cell line");
    next - low
}

/// Index and value of the first maximum entry.
fn first_max<T: Value>(values: &[T]) -> (usize, T) {
    values
        .iter()
        .copied()
        .enumerate()
        .fold(None, |best, (index, value)| match best {
            Some((_, top)) if value <= top => best,
            _ => Some((index, value)),
        })
        .expect("bug: penalty scan over an empty axis")
}
