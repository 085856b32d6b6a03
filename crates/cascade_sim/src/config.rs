use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Number of oscillators (N).
    pub n_oscillators: usize,
    /// Coupling strength of the oscillators to each other (K).
    pub coupling: f64,
    /// Discretisation time step in seconds.
    pub dt: f64,
    /// The number of discrete time steps to simulate.
    pub n_steps: usize,
    /// Record every Nth step into the output series.
    pub sample_every: usize,
    /// RNG seed for the initial phases and natural frequencies. Omit for a
    /// fresh entropy-seeded run.
    pub seed: Option<u64>,
}

impl Config {
    /// Load the configuration from a TOML file
    pub fn from_file(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {path}."))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {path}."))?;
        Ok(config)
    }
}
