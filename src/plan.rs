use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::allocation::Allocation;
use crate::value::Value;

/// The ordered allocation sequence produced by a reduction run, together
/// with the accumulated total cost.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransportPlan<T> {
    allocations: Vec<Allocation<T>>,
    total_cost: T,
}

impl<T: Value> TransportPlan<T> {
    pub fn new() -> Self {
        Self {
            allocations: Vec::new(),
            total_cost: T::zero(),
        }
    }

    /// Appends one allocation and folds its cost into the total.
    pub fn push(&mut self, allocation: Allocation<T>) {
        self.total_cost += allocation.cost * allocation.quantity;
        self.allocations.push(allocation);
    }

    /// The allocations in the order they were decided.
    pub fn allocations(&self) -> &[Allocation<T>] {
        &self.allocations
    }

    /// Sum of cost times quantity over all allocations.
    pub fn total_cost(&self) -> T {
        self.total_cost
    }

    /// Shipped quantity per original origin index.
    pub fn shipped_by_origin(&self) -> BTreeMap<usize, T> {
        self.allocations.iter().fold(BTreeMap::new(), |mut acc, a| {
            *acc.entry(a.origin).or_default() += a.quantity;
            acc
        })
    }

    /// Shipped quantity per original destination index.
    pub fn shipped_by_destination(&self) -> BTreeMap<usize, T> {
        self.allocations.iter().fold(BTreeMap::new(), |mut acc, a| {
            *acc.entry(a.destination).or_default() += a.quantity;
            acc
        })
    }

    /// Checks that the plan is feasible for the given vectors: quantities
    /// grouped by origin must reproduce the supply exactly, and grouped by
    /// destination the demand.
    pub fn check(&self, supply: &[T], demand: &[T]) -> bool {
        let by_origin = self.shipped_by_origin();
        let by_destination = self.shipped_by_destination();

        let covers = |shipped: &BTreeMap<usize, T>, expected: &[T]| {
            shipped.keys().all(|&index| index < expected.len())
                && expected.iter().enumerate().all(|(index, want)| {
                    shipped.get(&index).copied().unwrap_or_else(T::zero) == *want
                })
        };

        let shipped: T = self.allocations.iter().map(|a| a.quantity).sum();
        log::debug!("  total shipped = {shipped}");
        log::debug!("     total cost = {}", self.total_cost);

        covers(&by_origin, supply) && covers(&by_destination, demand)
    }
}
