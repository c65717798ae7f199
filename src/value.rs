use core::fmt::{Debug, Display};
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use num_traits::Zero;

/// A trait representing a cost or capacity value, typically an integer.
pub trait Value:
    Copy
    + Sum<Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Ord
    + AddAssign
    + SubAssign
    + Zero
    + Debug
    + Display
    + Default
{
}

impl Value for i32 {}

impl Value for i64 {}

impl Value for u32 {}

impl Value for u64 {}
