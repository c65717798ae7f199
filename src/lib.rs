#![no_std]
#![deny(
    warnings,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]
#![forbid(unsafe_code)]

//! Initial basic feasible solutions for the balanced transportation
//! problem.
//!
//! A [`BalancedProblem`] is reduced in place, one row or column per step:
//! a [`SelectionRule`] names the next cell, the engine allocates as much as
//! that cell's supply and demand permit, and the exhausted row or column is
//! removed. [`NorthWestCorner`], [`MatrixMinima`], and
//! [`VogelApproximation`] each produce a feasible (not necessarily optimal)
//! [`TransportPlan`].

extern crate alloc;

mod algo;
mod allocation;
mod balance;
mod engine;
mod error;
mod plan;
mod problem;
mod value;

pub use crate::algo::{MatrixMinima, NorthWestCorner, SelectionRule, VogelApproximation};
pub use crate::allocation::Allocation;
pub use crate::balance::balance;
pub use crate::engine::{solve, step};
pub use crate::error::Error;
pub use crate::plan::TransportPlan;
pub use crate::problem::{BalancedProblem, Position, RawProblem};
pub use crate::value::Value;
