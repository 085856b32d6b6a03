use crate::traits::{Scalar, ScalarMap};
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Settings controlling single-orbit iteration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TraceSettings {
    /// Iteration cap. `max_iters = 0` is legal and yields the seed alone.
    pub max_iters: usize,
    /// Convergence threshold on consecutive iterates. Must be non-negative.
    pub tol: f64,
}

impl Default for TraceSettings {
    fn default() -> Self {
        Self {
            max_iters: 50,
            tol: 1e-6,
        }
    }
}

/// How an orbit trace ended.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Termination {
    /// Consecutive iterates came within `tol` of each other (or landed on an
    /// exact fixed point) before the iteration cap.
    Converged,
    /// The cap was exhausted without meeting the tolerance. A normal terminal
    /// state, not an error.
    IterationLimit,
    /// The map produced a non-finite iterate. The orbit holds the finite
    /// prefix only; the caller decides whether the partial result is usable.
    Diverged,
}

/// The sequence of states produced by repeated application of a map,
/// together with how the iteration ended.
#[derive(Debug, Clone, Serialize)]
pub struct Orbit<T: Scalar> {
    pub values: Vec<T>,
    pub termination: Termination,
}

impl<T: Scalar> Orbit<T> {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }

    pub fn diverged(&self) -> bool {
        self.termination == Termination::Diverged
    }
}

/// Iterates `map` from `x0`, recording every iterate.
///
/// Stops early once consecutive iterates satisfy `|x_next - x| < tol`, or
/// when the map returns its argument exactly (so an exact fixed point
/// terminates even at `tol = 0`). A non-finite iterate stops the trace with
/// `Termination::Diverged` and is not appended. The orbit length is always
/// between 1 and `max_iters + 1`.
pub fn trace<T: Scalar>(
    map: &impl ScalarMap<T>,
    x0: T,
    settings: TraceSettings,
) -> Result<Orbit<T>> {
    if !x0.is_finite() {
        bail!("Seed x0 must be finite.");
    }
    if !settings.tol.is_finite() || settings.tol < 0.0 {
        bail!("tol must be non-negative and finite.");
    }

    let tol = T::from_f64(settings.tol).unwrap();
    let mut values = Vec::with_capacity(settings.max_iters + 1);
    values.push(x0);

    let mut x = x0;
    let mut termination = Termination::IterationLimit;

    for _ in 0..settings.max_iters {
        let x_next = map.apply(x);
        if !x_next.is_finite() {
            termination = Termination::Diverged;
            break;
        }
        values.push(x_next);
        if (x_next - x).abs() < tol || x_next == x {
            termination = Termination::Converged;
            break;
        }
        x = x_next;
    }

    Ok(Orbit {
        values,
        termination,
    })
}

/// Projects an orbit onto the cobweb staircase between the diagonal y = x
/// and the graph of the map.
///
/// Each orbit step (xₙ, xₙ₊₁) contributes three points: the diagonal start
/// (xₙ, xₙ), the vertical step (xₙ, xₙ₊₁), and the horizontal landing
/// (xₙ₊₁, xₙ₊₁). An orbit of length N ≥ 2 yields exactly 3(N − 1) points;
/// shorter orbits yield none. Purely a coordinate re-pairing for rendering.
pub fn cobweb_path<T: Scalar>(orbit: &Orbit<T>) -> Vec<[T; 2]> {
    let xs = &orbit.values;
    if xs.len() < 2 {
        return Vec::new();
    }

    let mut path = Vec::with_capacity(3 * (xs.len() - 1));
    for pair in xs.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        path.push([a, a]);
        path.push([a, b]);
        path.push([b, b]);
    }
    path
}
