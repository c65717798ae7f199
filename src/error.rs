use displaydoc::Display;

/// Validation failures raised while constructing a transportation problem.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum Error {
    /// Total supply does not equal total demand
    UnbalancedSupplyDemand,
    /// Matrix dimensions do not match the supply and demand vector lengths
    DimensionMismatch,
    /// Rows of the cost matrix have unequal lengths
    JaggedMatrix,
    /// Negative cost or capacity entry, expected non-negative values
    NegativeEntry,
}

impl core::error::Error for Error {}
