use crate::algo::SelectionRule;
use crate::allocation::Allocation;
use crate::plan::TransportPlan;
use crate::problem::BalancedProblem;
use crate::value::Value;

/// Runs one reduction step: ask the rule for a cell, allocate as much as the
/// cell's supply and demand permit, then remove the exhausted row or column.
///
/// Returns the recorded allocation and whether the problem is now exhausted.
///
/// Panics if the problem is already exhausted or the rule returns a position
/// outside the current matrix.
pub fn step<T, R>(problem: &mut BalancedProblem<T>, rule: &R) -> (Allocation<T>, bool)
where
    T: Value,
    R: SelectionRule<T>,
{
    let pos = rule.select(problem);
    let available = problem.supply()[pos.row];
    let required = problem.demand()[pos.col];
    let allocation = Allocation {
        origin: problem.origin(pos.row),
        destination: problem.destination(pos.col),
        quantity: available.min(required),
        cost: problem.cost(pos),
    };
    log::trace!(
        "ship {} from origin {} to destination {} at cost {}",
        allocation.quantity,
        allocation.origin,
        allocation.destination,
        allocation.cost
    );

    if problem.cells() == 1 {
        // The last cell absorbs the final supply == demand pair.
        problem.clear();
        return (allocation, true);
    }

    if available >= required && !(problem.cols() == 1 && problem.rows() > 1) {
        // Column exhausted; on an exact tie the column still goes first.
        problem.reduce_supply(pos.row, required);
        problem.drop_col(pos.col);
    } else {
        // Row exhausted, or a single-column tail whose removal would orphan
        // the surviving zero-supply rows.
        debug_assert!(problem.rows() > 1, "balance violated: cannot drop the last row");
        problem.reduce_demand(pos.col, available);
        problem.drop_row(pos.row);
    }

    (allocation, false)
}

/// Reduces the problem to exhaustion under the given rule and collects the
/// allocation stream into a plan.
///
/// Every step removes exactly one row or column (the final one both), so a
/// run over an r x c problem emits exactly `r + c - 1` allocations.
pub fn solve<T, R>(mut problem: BalancedProblem<T>, rule: &R) -> TransportPlan<T>
where
    T: Value,
    R: SelectionRule<T>,
{
    let mut plan = TransportPlan::new();
    while !problem.is_exhausted() {
        let (allocation, done) = step(&mut problem, rule);
        plan.push(allocation);
        if done {
            break;
        }
    }
    log::debug!(
        "reduction finished: {} allocations, total cost {}",
        plan.allocations().len(),
        plan.total_cost()
    );
    plan
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;
    use crate::algo::{MatrixMinima, NorthWestCorner, VogelApproximation};

    fn textbook() -> BalancedProblem<i64> {
        BalancedProblem::new(
            vec![vec![8, 7, 3, 0], vec![3, 8, 7, 0], vec![11, 3, 5, 0]],
            vec![60, 70, 80],
            vec![50, 70, 60, 30],
        )
        .unwrap()
    }

    fn as_tuples(plan: &TransportPlan<i64>) -> Vec<(usize, usize, i64, i64)> {
        plan.allocations()
            .iter()
            .map(|a| (a.origin, a.destination, a.quantity, a.cost))
            .collect()
    }

    #[test]
    fn test_north_west_corner_textbook_run() {
        let plan = solve(textbook(), &NorthWestCorner);
        assert_eq!(
            as_tuples(&plan),
            vec![
                (0, 0, 50, 8),
                (0, 1, 10, 7),
                (1, 1, 60, 8),
                (1, 2, 10, 7),
                (2, 2, 50, 5),
                (2, 3, 30, 0),
            ]
        );
        assert_eq!(plan.total_cost(), 1270);
        assert!(plan.check(&[60, 70, 80], &[50, 70, 60, 30]));
    }

    #[test]
    fn test_matrix_minima_textbook_run() {
        let plan = solve(textbook(), &MatrixMinima);
        assert_eq!(
            as_tuples(&plan),
            vec![
                (0, 3, 30, 0),
                (0, 2, 30, 3),
                (1, 0, 50, 3),
                (2, 1, 70, 3),
                (2, 2, 10, 5),
                (1, 2, 20, 7),
            ]
        );
        assert_eq!(plan.total_cost(), 640);
        assert!(plan.check(&[60, 70, 80], &[50, 70, 60, 30]));
    }

    #[test]
    fn test_vogel_textbook_run() {
        let plan = solve(textbook(), &VogelApproximation);
        assert_eq!(
            as_tuples(&plan),
            vec![
                (1, 0, 50, 3),
                (1, 3, 20, 0),
                (2, 1, 70, 3),
                (2, 3, 10, 0),
                (0, 2, 60, 3),
                (2, 2, 0, 5),
            ]
        );
        assert_eq!(plan.total_cost(), 540);
        assert!(plan.check(&[60, 70, 80], &[50, 70, 60, 30]));
    }

    #[test]
    fn test_single_cell_problem() {
        let problem = BalancedProblem::new(vec![vec![5]], vec![5], vec![5]).unwrap();
        let plan = solve(problem, &NorthWestCorner);
        assert_eq!(as_tuples(&plan), vec![(0, 0, 5, 5)]);
        assert_eq!(plan.total_cost(), 25);
    }

    #[test]
    fn test_exhausted_problem_yields_empty_plan() {
        let problem = BalancedProblem::<i64>::new(vec![], vec![], vec![]).unwrap();
        let plan = solve(problem, &NorthWestCorner);
        assert!(plan.allocations().is_empty());
        assert_eq!(plan.total_cost(), 0);
    }

    #[test]
    fn test_exact_tie_drops_the_column() {
        // Supply equals demand at the corner cell; the column must go, so
        // the second allocation stays in row 0.
        let problem =
            BalancedProblem::new(vec![vec![1, 2], vec![3, 4]], vec![5, 5], vec![5, 5]).unwrap();
        let plan = solve(problem, &NorthWestCorner);
        assert_eq!(
            as_tuples(&plan),
            vec![(0, 0, 5, 1), (0, 1, 0, 2), (1, 1, 5, 4)]
        );
        assert!(plan.check(&[5, 5], &[5, 5]));
    }

    #[test]
    fn test_single_column_tail_retires_rows() {
        // Once the first origin covers the whole demand, the zero-supply
        // tail must still be consumed row by row rather than orphaned.
        let problem =
            BalancedProblem::new(vec![vec![2], vec![9], vec![4]], vec![7, 0, 0], vec![7]).unwrap();
        let plan = solve(problem, &NorthWestCorner);
        assert_eq!(
            as_tuples(&plan),
            vec![(0, 0, 7, 2), (1, 0, 0, 9), (2, 0, 0, 4)]
        );
        assert!(plan.check(&[7, 0, 0], &[7]));
    }

    #[test]
    fn test_two_cell_row_finalizes_leftover_cell() {
        let problem = BalancedProblem::new(vec![vec![2, 3]], vec![5], vec![5, 0]).unwrap();
        let plan = solve(problem, &NorthWestCorner);
        assert_eq!(as_tuples(&plan), vec![(0, 0, 5, 2), (0, 1, 0, 3)]);
    }

    #[test]
    fn test_step_reports_completion_only_on_last_cell() {
        let mut problem =
            BalancedProblem::new(vec![vec![1, 2], vec![3, 4]], vec![4, 6], vec![3, 7]).unwrap();
        let (_, done) = step(&mut problem, &NorthWestCorner);
        assert!(!done);
        let (_, done) = step(&mut problem, &NorthWestCorner);
        assert!(!done);
        let (last, done) = step(&mut problem, &NorthWestCorner);
        assert!(done);
        assert!(problem.is_exhausted());
        assert_eq!(last.origin, 1);
        assert_eq!(last.destination, 1);
        assert_eq!(last.quantity, 6);
    }

    #[test]
    fn test_allocation_count_matches_dimension_bound() {
        let plan = solve(textbook(), &VogelApproximation);
        assert_eq!(plan.allocations().len(), 3 + 4 - 1);
    }
}
