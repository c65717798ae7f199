use serde::{Deserialize, Serialize};

/// One reduction step's decision: ship `quantity` units from `origin` to
/// `destination` at the given unit `cost`.
///
/// Indices refer to the rows and columns of the matrix as originally
/// constructed, not to the renumbered matrix the step selected from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation<T> {
    pub origin: usize,
    pub destination: usize,
    pub quantity: T,
    pub cost: T,
}
