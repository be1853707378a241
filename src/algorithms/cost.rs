//! Numeric edge costs for the shortest-path searches.

use core::fmt::Debug;
use core::ops::Add;

use num_traits::{Bounded, SaturatingAdd, Zero};

/// A non-negative, additive path cost.
///
/// `Zero::zero()` is the cost of the empty path and `Bounded::max_value()`
/// stands for "unreached". Implemented for the primitive integers and floats.
///
/// The maximum value is reserved: a path whose cost reaches
/// [`infinity`](Cost::infinity), through a single edge or through the
/// capped sum of several, is reported as unreachable. Pick a cost type wide
/// enough for the longest path you expect.
///
/// Negative costs are not detected; supplying them voids the optimality of
/// [`dijkstra`](crate::algorithms::dijkstra) and [`astar`](crate::algorithms::astar).
pub trait Cost: Copy + PartialOrd + Add<Output = Self> + Zero + Bounded + Debug {
    /// The "unreached" distance.
    #[inline(always)]
    fn infinity() -> Self {
        Self::max_value()
    }

    /// Returns `true` unless `self` is the "unreached" distance.
    #[inline(always)]
    fn is_finite_cost(&self) -> bool {
        *self < Self::infinity()
    }

    /// Adds two costs, capping the result at [`infinity`](Cost::infinity)
    /// instead of overflowing.
    fn cost_add(self, other: Self) -> Self;
}

macro_rules! impl_integer_cost {
    ($($t:ty),* $(,)?) => {
        $(
            impl Cost for $t {
                #[inline(always)]
                fn cost_add(self, other: Self) -> Self {
                    SaturatingAdd::saturating_add(&self, &other)
                }
            }
        )*
    };
}

macro_rules! impl_float_cost {
    ($($t:ty),* $(,)?) => {
        $(
            impl Cost for $t {
                #[inline(always)]
                fn cost_add(self, other: Self) -> Self {
                    let sum = self + other;
                    if sum > Self::infinity() {
                        Self::infinity()
                    } else {
                        sum
                    }
                }
            }
        )*
    };
}

impl_integer_cost!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_float_cost!(f32, f64);
