use crate::traits::MapFamily;
use anyhow::{bail, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Settings controlling a bifurcation parameter sweep.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScanSettings {
    pub r_min: f64,
    pub r_max: f64,
    /// Number of evenly spaced parameter values over `[r_min, r_max]`.
    pub r_count: usize,
    /// Iterates discarded per parameter value before sampling begins, letting
    /// the orbit settle onto its attractor. Exactly `transient` iterates are
    /// discarded and exactly the next `retained` recorded; sweeps written
    /// against the legacy convention that dropped one extra iterate can pass
    /// `transient + 1`.
    pub transient: usize,
    /// Iterates recorded per parameter value after the transient.
    pub retained: usize,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            r_min: 1.0,
            r_max: 4.0,
            r_count: 500,
            transient: 500,
            retained: 1000,
        }
    }
}

/// Seed policy for the per-parameter initial condition.
///
/// `Uniform` redraws a fresh seed in `[0, 1)` independently for every
/// parameter value; with `seed: None` the sweep is stochastic run-to-run,
/// which is the reference behavior and a deliberate choice, not a defect.
/// Pinning `seed` reproduces the sweep exactly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum SeedPolicy {
    /// Every parameter value starts from the same initial condition.
    Fixed(f64),
    /// Every parameter value starts from a fresh uniform draw in `[0, 1)`.
    Uniform { seed: Option<u64> },
}

/// One retained post-transient iterate for one parameter value.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct BifurcationSample {
    pub r: f64,
    pub x: f64,
}

/// The output of a parameter sweep: the attractor samples, plus the
/// parameter values whose orbits left the finite domain.
#[derive(Debug, Clone, Serialize)]
pub struct BifurcationDiagram {
    pub samples: Vec<BifurcationSample>,
    /// Parameter values abandoned after a non-finite iterate. Samples already
    /// recorded for such a value are kept.
    pub diverged: Vec<f64>,
}

/// Sweeps the map family over `r_count` evenly spaced parameter values,
/// iterating `transient + retained` times per value from the policy's seed
/// and recording the post-transient iterates.
///
/// Sweep order over `r` is ascending and deterministic. A non-finite iterate
/// abandons the remaining samples for that parameter value only; the sweep
/// continues with the next value, so a single divergent branch cannot lose
/// the rest of the diagram. When nothing diverges the diagram holds exactly
/// `r_count × retained` samples.
pub fn scan<F: MapFamily<f64>>(
    family: &F,
    settings: ScanSettings,
    seeds: SeedPolicy,
) -> Result<BifurcationDiagram> {
    if !settings.r_min.is_finite() || !settings.r_max.is_finite() {
        bail!("Parameter bounds must be finite.");
    }
    if settings.r_min >= settings.r_max {
        bail!("r_min must be strictly less than r_max.");
    }
    if settings.r_count == 0 {
        bail!("r_count must be at least 1.");
    }
    if settings.retained == 0 {
        bail!("retained must be at least 1.");
    }
    if let SeedPolicy::Fixed(x0) = seeds {
        if !x0.is_finite() {
            bail!("Fixed seed must be finite.");
        }
    }

    enum SeedSource {
        Fixed(f64),
        Drawn(StdRng),
    }

    let mut source = match seeds {
        SeedPolicy::Fixed(x0) => SeedSource::Fixed(x0),
        SeedPolicy::Uniform { seed: Some(seed) } => SeedSource::Drawn(StdRng::seed_from_u64(seed)),
        SeedPolicy::Uniform { seed: None } => SeedSource::Drawn(StdRng::from_entropy()),
    };

    let span = settings.r_max - settings.r_min;
    let mut samples = Vec::with_capacity(settings.r_count * settings.retained);
    let mut diverged = Vec::new();

    'sweep: for i in 0..settings.r_count {
        let r = if settings.r_count == 1 {
            settings.r_min
        } else {
            settings.r_min + span * i as f64 / (settings.r_count - 1) as f64
        };

        let mut x = match &mut source {
            SeedSource::Fixed(x0) => *x0,
            SeedSource::Drawn(rng) => rng.gen_range(0.0..1.0),
        };

        for _ in 0..settings.transient {
            x = family.apply(x, r);
            if !x.is_finite() {
                diverged.push(r);
                continue 'sweep;
            }
        }

        for _ in 0..settings.retained {
            x = family.apply(x, r);
            if !x.is_finite() {
                diverged.push(r);
                continue 'sweep;
            }
            samples.push(BifurcationSample { r, x });
        }
    }

    Ok(BifurcationDiagram { samples, diverged })
}
