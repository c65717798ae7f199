use alloc::vec;
use alloc::vec::Vec;

use crate::error::Error;
use crate::problem::BalancedProblem;
use crate::value::Value;

/// Balances a transportation problem before construction.
///
/// When total supply exceeds total demand, a zero-cost dummy destination
/// absorbs the surplus; in the opposite case a zero-cost dummy origin covers
/// the deficit. Already balanced inputs pass through unchanged. Dimension
/// and shape errors are reported before any dummy line is appended, so a
/// mismatched input cannot be patched into validity by accident.
pub fn balance<T: Value>(
    mut costs: Vec<Vec<T>>,
    mut supply: Vec<T>,
    mut demand: Vec<T>,
) -> Result<BalancedProblem<T>, Error> {
    let cols = costs.first().map_or(0, |row| row.len());
    if costs.iter().any(|row| row.len() != cols) {
        return Err(Error::JaggedMatrix);
    }
    if costs.len() != supply.len() || cols != demand.len() {
        return Err(Error::DimensionMismatch);
    }

    let total_supply: T = supply.iter().copied().sum();
    let total_demand: T = demand.iter().copied().sum();

    if total_supply > total_demand {
        for row in &mut costs {
            row.push(T::zero());
        }
        demand.push(total_supply - total_demand);
    } else if total_demand > total_supply {
        costs.push(vec![T::zero(); cols]);
        supply.push(total_demand - total_supply);
    }

    BalancedProblem::new(costs, supply, demand)
}
