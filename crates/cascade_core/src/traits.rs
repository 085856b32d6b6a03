use num_traits::{Float, FromPrimitive};
use std::fmt::Debug;

/// A trait for types that can be used as scalars in our dynamical systems.
/// Must support basic arithmetic, debug printing, and conversion from f64.
pub trait Scalar: Float + FromPrimitive + Debug + 'static {}

impl<T: Float + FromPrimitive + Debug + 'static> Scalar for T {}

/// A one-dimensional map x_{n+1} = f(x_n).
///
/// Maps are pure: no hidden state, deterministic, total over the domain of
/// interest. Implemented by the built-in maps; wrap a closure in [`FnMap`]
/// to supply an ad-hoc map.
pub trait ScalarMap<T: Scalar> {
    /// Evaluates the map at `x`.
    fn apply(&self, x: T) -> T;
}

/// A family of one-dimensional maps indexed by a control parameter `r`,
/// x_{n+1} = f(x_n; r). Wrap a closure in [`FnFamily`] for an ad-hoc family.
pub trait MapFamily<T: Scalar> {
    /// Evaluates the member map at `x` for control parameter `r`.
    fn apply(&self, x: T, r: T) -> T;
}

/// Adapter making any `Fn(T) -> T` closure a [`ScalarMap`].
#[derive(Debug, Clone, Copy)]
pub struct FnMap<F>(pub F);

impl<T: Scalar, F: Fn(T) -> T> ScalarMap<T> for FnMap<F> {
    fn apply(&self, x: T) -> T {
        (self.0)(x)
    }
}

/// Adapter making any `Fn(T, T) -> T` closure a [`MapFamily`].
#[derive(Debug, Clone, Copy)]
pub struct FnFamily<F>(pub F);

impl<T: Scalar, F: Fn(T, T) -> T> MapFamily<T> for FnFamily<F> {
    fn apply(&self, x: T, r: T) -> T {
        (self.0)(x, r)
    }
}
