//! Numeric abstraction over the entries of a cost matrix.

use std::fmt::Debug;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Element type accepted by the solver.
///
/// Implemented for the signed integer and floating-point primitives. Unsigned
/// integers are excluded because dual variables routinely become negative.
pub trait Cost:
    Copy
    + Debug
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + AddAssign
    + SubAssign
    + Send
    + Sync
    + 'static
{
    /// Additive identity, used to zero-fill padded matrices.
    const ZERO: Self;

    /// Sentinel larger than any reduced cost the solver compares against.
    ///
    /// `MAX` for integers and `+inf` for floats, so float instantiations never
    /// see a truncated integer bound.
    const INFINITY: Self;

    /// Widens the value for cost accumulation.
    fn to_f64(self) -> f64;

    /// Whether the value can take part in a total ordering.
    fn is_admissible(self) -> bool;
}

macro_rules! impl_cost_for_int {
    ($($t:ty),*) => {
        $(
            impl Cost for $t {
                const ZERO: Self = 0;
                const INFINITY: Self = <$t>::MAX;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn is_admissible(self) -> bool {
                    true
                }
            }
        )*
    };
}

macro_rules! impl_cost_for_float {
    ($($t:ty),*) => {
        $(
            impl Cost for $t {
                const ZERO: Self = 0.0;
                const INFINITY: Self = <$t>::INFINITY;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn is_admissible(self) -> bool {
                    self.is_finite()
                }
            }
        )*
    };
}

impl_cost_for_int!(i8, i16, i32, i64, i128, isize);
impl_cost_for_float!(f32, f64);
