mod config;
mod simulator;

use anyhow::Result;
use cascade_core::sync::{circle_projection, order_parameter_series};
use config::Config;
use simulator::Simulator;

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());
    let config = Config::from_file(&path)?;
    eprintln!("Loaded configuration: {config:?}");

    let mut simulator = Simulator::new(config)?;
    let series = simulator.run_series()?;
    eprintln!(
        "Simulated {} snapshots of {} oscillators.",
        series.len(),
        series.population()
    );

    let order = order_parameter_series(&series)?;
    let final_frame = series
        .iter()
        .last()
        .map(|(_, phases)| circle_projection(phases))
        .unwrap_or_default();

    // Plain numeric sequences for the plotting/animation front end.
    let output = serde_json::json!({
        "order_parameter": order,
        "final_frame": final_frame,
    });
    println!("{}", serde_json::to_string(&output)?);

    Ok(())
}
