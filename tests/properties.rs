use ibfs::{
    solve, BalancedProblem, MatrixMinima, NorthWestCorner, SelectionRule, VogelApproximation,
};
use proptest::collection::vec;
use proptest::prelude::*;

/// Random balanced instances built from a hidden shipment grid, so supply
/// and demand totals always agree (rows and columns of zeros included).
fn balanced_instances() -> impl Strategy<Value = (Vec<Vec<i64>>, Vec<i64>, Vec<i64>)> {
    ((1usize..6), (1usize..6)).prop_flat_map(|(rows, cols)| {
        (
            vec(vec(0i64..50, cols), rows),
            vec(vec(0i64..100, cols), rows),
        )
            .prop_map(|(shipments, costs)| {
                let supply: Vec<i64> = shipments.iter().map(|row| row.iter().sum()).collect();
                let demand: Vec<i64> = (0..shipments[0].len())
                    .map(|col| shipments.iter().map(|row| row[col]).sum())
                    .collect();
                (costs, supply, demand)
            })
    })
}

fn assert_feasible<R>(rule: &R, costs: Vec<Vec<i64>>, supply: Vec<i64>, demand: Vec<i64>)
where
    R: SelectionRule<i64>,
{
    let rows = supply.len();
    let cols = demand.len();
    let problem = BalancedProblem::new(costs, supply.clone(), demand.clone())
        .expect("balanced by construction");
    let plan = solve(problem, rule);

    assert!(plan.check(&supply, &demand));
    assert!(plan.allocations().len() <= rows + cols - 1);

    let refolded: i64 = plan
        .allocations()
        .iter()
        .map(|a| a.cost * a.quantity)
        .sum();
    assert_eq!(refolded, plan.total_cost());
}

proptest! {
    #[test]
    fn north_west_corner_is_feasible((costs, supply, demand) in balanced_instances()) {
        assert_feasible(&NorthWestCorner, costs, supply, demand);
    }

    #[test]
    fn matrix_minima_is_feasible((costs, supply, demand) in balanced_instances()) {
        assert_feasible(&MatrixMinima, costs, supply, demand);
    }

    #[test]
    fn vogel_approximation_is_feasible((costs, supply, demand) in balanced_instances()) {
        assert_feasible(&VogelApproximation, costs, supply, demand);
    }
}
