use anyhow::{bail, Result};
use num_complex::Complex;
use serde::{Deserialize, Serialize};

/// One row of the tabular `{time, oscillator, phase}` input produced by an
/// external simulation or storage collaborator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PhaseRecord {
    pub time: f64,
    pub oscillator: usize,
    pub phase: f64,
}

/// A time series of phase snapshots for a fixed oscillator population.
///
/// Time keys are strictly increasing and externally supplied; each snapshot
/// holds the phases of oscillators `0..n-1` in id order, with the same `n`
/// at every time key.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PhaseSeries {
    times: Vec<f64>,
    snapshots: Vec<Vec<f64>>,
}

impl PhaseSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a snapshot at `time`. The time must exceed the last time key
    /// and the snapshot must be non-empty, finite, and the same size as the
    /// existing population.
    pub fn push(&mut self, time: f64, snapshot: Vec<f64>) -> Result<()> {
        if !time.is_finite() {
            bail!("Time key must be finite.");
        }
        if let Some(&last) = self.times.last() {
            if time <= last {
                bail!(
                    "Time keys must be strictly increasing ({} follows {}).",
                    time,
                    last
                );
            }
        }
        if snapshot.is_empty() {
            bail!("Phase snapshot must contain at least one oscillator.");
        }
        if snapshot.iter().any(|phase| !phase.is_finite()) {
            bail!("Phases must be finite.");
        }
        if let Some(first) = self.snapshots.first() {
            if snapshot.len() != first.len() {
                bail!(
                    "Population size mismatch. Expected {}, got {}.",
                    first.len(),
                    snapshot.len()
                );
            }
        }

        self.times.push(time);
        self.snapshots.push(snapshot);
        Ok(())
    }

    /// Builds a series from unordered tabular rows, grouping by time key and
    /// ordering each snapshot by oscillator id. Every time key must carry the
    /// ids `0..n-1` exactly once.
    pub fn from_records(records: &[PhaseRecord]) -> Result<Self> {
        if records.iter().any(|rec| !rec.time.is_finite()) {
            bail!("Time key must be finite.");
        }

        let mut sorted = records.to_vec();
        sorted.sort_by(|a, b| {
            a.time
                .total_cmp(&b.time)
                .then(a.oscillator.cmp(&b.oscillator))
        });

        let mut series = Self::new();
        let mut start = 0;
        while start < sorted.len() {
            let time = sorted[start].time;
            let mut end = start;
            while end < sorted.len() && sorted[end].time == time {
                end += 1;
            }

            let group = &sorted[start..end];
            for (id, rec) in group.iter().enumerate() {
                if rec.oscillator != id {
                    bail!(
                        "Snapshot at time {} must cover oscillator ids 0..{} exactly once (found id {}).",
                        time,
                        group.len(),
                        rec.oscillator
                    );
                }
            }

            series.push(time, group.iter().map(|rec| rec.phase).collect())?;
            start = end;
        }

        Ok(series)
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Number of oscillators per snapshot; zero while the series is empty.
    pub fn population(&self) -> usize {
        self.snapshots.first().map_or(0, Vec::len)
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, &[f64])> {
        self.times
            .iter()
            .copied()
            .zip(self.snapshots.iter().map(Vec::as_slice))
    }
}

/// The order parameter at one time key.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct OrderParameterPoint {
    pub time: f64,
    pub r: f64,
}

pub type OrderParameterSeries = Vec<OrderParameterPoint>;

/// The Kuramoto order parameter: the magnitude of the mean unit phasor,
/// r = |⟨e^{iθ}⟩|. Returns a value in `[0, 1]`; 1 means perfect phase
/// alignment, values near 0 mean the phases are scattered. The result is
/// clamped against floating rounding marginally exceeding 1.
pub fn order_parameter(phases: &[f64]) -> Result<f64> {
    if phases.is_empty() {
        bail!("Order parameter requires at least one phase.");
    }
    if phases.iter().any(|phase| !phase.is_finite()) {
        bail!("Phases must be finite.");
    }

    let sum: Complex<f64> = phases.iter().map(|&theta| Complex::cis(theta)).sum();
    let mean = sum / phases.len() as f64;
    Ok(mean.norm().min(1.0))
}

/// Applies [`order_parameter`] independently to every snapshot, preserving
/// time-key order. No coupling or smoothing across time steps.
pub fn order_parameter_series(series: &PhaseSeries) -> Result<OrderParameterSeries> {
    series
        .iter()
        .map(|(time, phases)| {
            let r = order_parameter(phases)?;
            Ok(OrderParameterPoint { time, r })
        })
        .collect()
}

/// Projects a snapshot onto the unit circle as `(cos θ, sin θ)` pairs, one
/// per oscillator in id order, for frame-by-frame animation.
pub fn circle_projection(phases: &[f64]) -> Vec<[f64; 2]> {
    phases
        .iter()
        .map(|&theta| [theta.cos(), theta.sin()])
        .collect()
}
