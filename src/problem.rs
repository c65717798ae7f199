use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::value::Value;

/// A cell index into the current (pruned) cost matrix.
///
/// Indices are dense: the matrix is renumbered after every row or column
/// removal, so a position is only valid for the iteration that produced it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// The top-left cell of the current matrix.
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A balanced transportation problem: a rectangular cost matrix plus supply
/// and demand vectors whose totals agree.
///
/// The reduction engine consumes the problem in place, one row or column per
/// step. `origins` and `destinations` record which original index each
/// surviving dense row and column refers to, so allocations can be reported
/// against the matrix as constructed.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(
    try_from = "RawProblem<T>",
    bound(deserialize = "T: Value + Deserialize<'de>")
)]
pub struct BalancedProblem<T> {
    costs: Vec<Vec<T>>,
    supply: Vec<T>,
    demand: Vec<T>,
    origins: Vec<usize>,
    destinations: Vec<usize>,
}

impl<T: Value> BalancedProblem<T> {
    /// Validates and wraps a transportation problem.
    ///
    /// The matrix must be rectangular, its dimensions must match the vector
    /// lengths, every entry must be non-negative, and total supply must
    /// equal total demand. Unbalanced inputs are rejected, never patched up;
    /// the `balance` preprocessor appends a dummy origin or destination
    /// first when totals are allowed to differ.
    pub fn new(costs: Vec<Vec<T>>, supply: Vec<T>, demand: Vec<T>) -> Result<Self, Error> {
        let cols = costs.first().map_or(0, |row| row.len());
        if costs.iter().any(|row| row.len() != cols) {
            return Err(Error::JaggedMatrix);
        }
        if costs.len() != supply.len() || cols != demand.len() {
            return Err(Error::DimensionMismatch);
        }
        let negative = |entry: &T| *entry < T::zero();
        if costs.iter().flatten().any(negative)
            || supply.iter().any(negative)
            || demand.iter().any(negative)
        {
            return Err(Error::NegativeEntry);
        }
        let total_supply: T = supply.iter().copied().sum();
        let total_demand: T = demand.iter().copied().sum();
        if total_supply != total_demand {
            return Err(Error::UnbalancedSupplyDemand);
        }

        let origins = (0..supply.len()).collect();
        let destinations = (0..demand.len()).collect();
        Ok(Self {
            costs,
            supply,
            demand,
            origins,
            destinations,
        })
    }

    /// Number of rows still present.
    pub fn rows(&self) -> usize {
        self.supply.len()
    }

    /// Number of columns still present.
    pub fn cols(&self) -> usize {
        self.demand.len()
    }

    /// Number of cells still present.
    pub fn cells(&self) -> usize {
        self.rows() * self.cols()
    }

    /// True once every row and column has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.cells() == 0
    }

    /// Cost of the cell at the given current position.
    pub fn cost(&self, pos: Position) -> T {
        self.costs[pos.row][pos.col]
    }

    /// Costs of the given current row.
    pub fn row(&self, row: usize) -> &[T] {
        &self.costs[row]
    }

    /// Costs of the given current column, top to bottom.
    pub fn column(&self, col: usize) -> impl Iterator<Item = T> + '_ {
        self.costs.iter().map(move |row| row[col])
    }

    /// Remaining capacity per current row.
    pub fn supply(&self) -> &[T] {
        &self.supply
    }

    /// Remaining requirement per current column.
    pub fn demand(&self) -> &[T] {
        &self.demand
    }

    /// Original index of the given current row.
    pub fn origin(&self, row: usize) -> usize {
        self.origins[row]
    }

    /// Original index of the given current column.
    pub fn destination(&self, col: usize) -> usize {
        self.destinations[col]
    }

    pub(crate) fn reduce_supply(&mut self, row: usize, by: T) {
        self.supply[row] -= by;
    }

    pub(crate) fn reduce_demand(&mut self, col: usize, by: T) {
        self.demand[col] -= by;
    }

    pub(crate) fn drop_row(&mut self, row: usize) {
        self.costs.remove(row);
        self.supply.remove(row);
        self.origins.remove(row);
    }

    pub(crate) fn drop_col(&mut self, col: usize) {
        for row in &mut self.costs {
            row.remove(col);
        }
        self.demand.remove(col);
        self.destinations.remove(col);
    }

    pub(crate) fn clear(&mut self) {
        self.costs.clear();
        self.supply.clear();
        self.demand.clear();
        self.origins.clear();
        self.destinations.clear();
    }
}

/// Unvalidated mirror of [`BalancedProblem`] used for serde round-trips.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawProblem<T> {
    pub costs: Vec<Vec<T>>,
    pub supply: Vec<T>,
    pub demand: Vec<T>,
}

impl<T: Value> TryFrom<RawProblem<T>> for BalancedProblem<T> {
    type Error = Error;

    fn try_from(raw: RawProblem<T>) -> Result<Self, Self::Error> {
        Self::new(raw.costs, raw.supply, raw.demand)
    }
}
