pub mod bifurcation;
pub mod maps;
pub mod orbit;
pub mod sync;
/// The `cascade_core` crate provides the numerical engine behind the Cascade
/// analysis tools for discrete-time dynamical systems.
///
/// Key components:
/// - **Traits**: `Scalar` (numeric type abstraction), `ScalarMap` / `MapFamily`
///   (one-dimensional maps and parameterized map families).
/// - **Orbit**: single-orbit iteration with convergence/divergence detection
///   and the cobweb staircase projection used for rendering.
/// - **Bifurcation**: parameter sweeps that discard a transient prefix and
///   collect the long-run attractor samples.
/// - **Sync**: the Kuramoto order parameter over phase-snapshot time series.
///
/// The crate computes; it never draws. Every public result is a plain numeric
/// sequence meant to be handed to a plotting or animation front end.
pub mod traits;
