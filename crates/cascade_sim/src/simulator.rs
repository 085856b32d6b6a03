use crate::config::Config;
use anyhow::{bail, Result};
use cascade_core::sync::PhaseSeries;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use std::f64::consts::PI;

const FREQUENCY_MEAN: f64 = 1.0;
const FREQUENCY_STD: f64 = 0.1;

pub struct Simulator {
    pub config: Config,
    pub phases: Vec<f64>,      // The phases (theta_i) of the oscillators
    pub frequencies: Vec<f64>, // The frequencies (omega_i) of the oscillators
}

impl Simulator {
    pub fn new(config: Config) -> Result<Self> {
        if config.n_oscillators == 0 {
            bail!("n_oscillators must be at least 1.");
        }
        if !config.dt.is_finite() || config.dt <= 0.0 {
            bail!("dt must be positive.");
        }
        if !config.coupling.is_finite() {
            bail!("coupling must be finite.");
        }
        if config.sample_every == 0 {
            bail!("sample_every must be at least 1.");
        }

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        // Initialise the phases of the oscillators randomly between 0 and 2π
        let phases: Vec<f64> = (0..config.n_oscillators)
            .map(|_| rng.gen_range(0.0..2.0 * PI))
            .collect();

        // Initialise the frequencies of the oscillators randomly from a
        // normal distribution with mean 1.0 and standard deviation 0.1
        let normal_distribution = Normal::new(FREQUENCY_MEAN, FREQUENCY_STD)?;
        let frequencies: Vec<f64> = (0..config.n_oscillators)
            .map(|_| normal_distribution.sample(&mut rng))
            .collect();

        Ok(Self {
            config,
            phases,
            frequencies,
        })
    }

    // Non-vectorised update step for all oscillators
    pub fn step(&mut self) {
        let n = self.config.n_oscillators;
        let mut new_phases = Vec::with_capacity(n);

        for i in 0..n {
            // Calculate the coupling term for the i-th oscillator
            let mut coupling = 0.0;
            for j in 0..n {
                coupling += (self.phases[j] - self.phases[i]).sin();
            }

            let coupling_increment = (self.config.coupling / n as f64) * coupling;

            // Update the phase of the i-th oscillator
            let new_phase =
                self.phases[i] + self.config.dt * (self.frequencies[i] + coupling_increment);
            new_phases.push(new_phase.rem_euclid(2.0 * PI));
        }

        self.phases = new_phases;
    }

    pub fn run(&mut self, n_steps: usize) {
        for _ in 0..n_steps {
            self.step();
        }
    }

    /// Runs the configured number of steps, recording the initial state and
    /// every `sample_every`-th step into a phase series keyed by simulation
    /// time.
    pub fn run_series(&mut self) -> Result<PhaseSeries> {
        let mut series = PhaseSeries::new();
        series.push(0.0, self.phases.clone())?;

        for step in 1..=self.config.n_steps {
            self.step();
            if step % self.config.sample_every == 0 {
                series.push(step as f64 * self.config.dt, self.phases.clone())?;
            }
        }

        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::Simulator;
    use crate::config::Config;
    use cascade_core::sync::order_parameter;
    use std::f64::consts::PI;

    fn test_config() -> Config {
        Config {
            n_oscillators: 20,
            coupling: 5.0,
            dt: 0.05,
            n_steps: 2000,
            sample_every: 100,
            seed: Some(42),
        }
    }

    #[test]
    fn rejects_degenerate_configs() {
        let mut config = test_config();
        config.n_oscillators = 0;
        assert!(Simulator::new(config).is_err());

        let mut config = test_config();
        config.dt = 0.0;
        assert!(Simulator::new(config).is_err());

        let mut config = test_config();
        config.sample_every = 0;
        assert!(Simulator::new(config).is_err());
    }

    #[test]
    fn strong_coupling_drives_synchronization() {
        let mut sim = Simulator::new(test_config()).expect("simulator should build");
        let start = order_parameter(&sim.phases).expect("order parameter should compute");

        sim.run(sim.config.n_steps);
        let end = order_parameter(&sim.phases).expect("order parameter should compute");

        assert!(end > 0.9, "expected near-synchrony, got r = {end}");
        assert!(end > start, "expected coherence to grow: {start} -> {end}");
    }

    #[test]
    fn phases_stay_wrapped() {
        let mut sim = Simulator::new(test_config()).expect("simulator should build");
        sim.run(500);
        assert!(sim
            .phases
            .iter()
            .all(|&theta| (0.0..2.0 * PI).contains(&theta)));
    }

    #[test]
    fn pinned_seed_reproduces_the_run() {
        let mut a = Simulator::new(test_config()).expect("simulator should build");
        let mut b = Simulator::new(test_config()).expect("simulator should build");
        a.run(100);
        b.run(100);
        assert_eq!(a.phases, b.phases);
        assert_eq!(a.frequencies, b.frequencies);
    }

    #[test]
    fn series_records_initial_state_and_sampled_steps() {
        let mut sim = Simulator::new(test_config()).expect("simulator should build");
        let series = sim.run_series().expect("series should build");

        // Initial snapshot plus n_steps / sample_every sampled ones.
        assert_eq!(series.len(), 1 + 2000 / 100);
        assert_eq!(series.population(), 20);

        let times: Vec<f64> = series.iter().map(|(t, _)| t).collect();
        assert_eq!(times[0], 0.0);
        assert!((times[1] - 100.0 * 0.05).abs() < 1e-12);
    }
}
