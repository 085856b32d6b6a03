use crate::traits::{MapFamily, Scalar, ScalarMap};

/// The cosine map x ↦ cos(x).
///
/// Iterating it from any seed converges to the Dottie number (≈ 0.739085),
/// which makes it the standard smoke-test map for orbit tracing.
#[derive(Debug, Clone, Copy)]
pub struct Cosine;

impl<T: Scalar> ScalarMap<T> for Cosine {
    fn apply(&self, x: T) -> T {
        x.cos()
    }
}

/// The logistic map x ↦ r·x·(1 − x) at a pinned growth parameter.
#[derive(Debug, Clone, Copy)]
pub struct Logistic<T: Scalar> {
    pub r: T,
}

impl<T: Scalar> Logistic<T> {
    pub fn new(r: T) -> Self {
        Self { r }
    }
}

impl<T: Scalar> ScalarMap<T> for Logistic<T> {
    fn apply(&self, x: T) -> T {
        self.r * x * (T::one() - x)
    }
}

/// The logistic family (x, r) ↦ r·x·(1 − x), swept over r by the
/// bifurcation scanner.
#[derive(Debug, Clone, Copy)]
pub struct LogisticFamily;

impl<T: Scalar> MapFamily<T> for LogisticFamily {
    fn apply(&self, x: T, r: T) -> T {
        r * x * (T::one() - x)
    }
}

#[cfg(test)]
mod tests {
    use super::{Cosine, Logistic, LogisticFamily};
    use crate::traits::{MapFamily, ScalarMap};

    #[test]
    fn cosine_evaluates_at_zero() {
        let y: f64 = Cosine.apply(0.0);
        assert!((y - 1.0).abs() < 1e-15);
    }

    #[test]
    fn logistic_pinned_and_family_agree() {
        let pinned = Logistic::new(3.7);
        let x = 0.42;
        assert_eq!(pinned.apply(x), LogisticFamily.apply(x, 3.7));
    }

    #[test]
    fn logistic_fixed_point_is_invariant() {
        // For r > 1 the nontrivial fixed point is (r - 1) / r.
        let r: f64 = 2.5;
        let fixed = (r - 1.0) / r;
        let next = Logistic::new(r).apply(fixed);
        assert!((next - fixed).abs() < 1e-15);
    }
}
