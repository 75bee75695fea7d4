//! Host binary for the Genesis simulation.
//!
//! Loads configuration, builds the world, the body and the mind, and runs
//! the frame loop until a bound is reached or the process is interrupted.
//! The final snapshot is printed to stdout as JSON.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `genesis-config.yaml` (or `$GENESIS_CONFIG`)
//! 2. Initialize structured logging (tracing)
//! 3. Build the simulation state
//! 4. Create operator state from simulation bounds
//! 5. Turn Ctrl-C into an operator stop
//! 6. Run the frame loop
//! 7. Log the result and print the final snapshot

mod error;
mod report_callback;

use std::sync::Arc;

use genesis_core::{OperatorState, SimulationConfig, SimulationState, runner};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;
use crate::report_callback::ReportCallback;

#[tokio::main]
async fn main() -> Result<(), EngineError> {
    // 1. Load configuration. Logging is not up yet, so remember whether
    // defaults were used and say so once it is.
    let (config, source) = load_config()?;

    // 2. Initialize structured logging.
    init_logging(&config)?;
    info!(config = %source, "genesis-engine starting");
    info!(
        world_name = config.world.name,
        seed = ?config.world.seed,
        max_ticks = config.simulation.max_ticks,
        max_real_time_seconds = config.simulation.max_real_time_seconds,
        fixed_dt = ?config.simulation.fixed_dt,
        "Configuration loaded"
    );

    // 3. Build the simulation.
    let mut state = SimulationState::new(&config)?;

    // 4. Operator controls.
    let operator = Arc::new(OperatorState::new(&config.simulation));

    // 5. Ctrl-C stops the loop cleanly.
    {
        let operator = Arc::clone(&operator);
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    info!("Interrupt received, stopping");
                    operator.request_stop();
                }
                Err(e) => warn!(error = %e, "Cannot listen for Ctrl-C"),
            }
        });
    }

    // 6. Run.
    let mut callback = ReportCallback::new(config.simulation.report_interval_ticks);
    let result = runner::run_simulation(&mut state, &operator, &mut callback).await?;

    // 7. Report.
    runner::log_simulation_end(&result, &state);
    let snapshot = state.snapshot(operator.is_paused(), operator.speed());
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    info!(
        end_reason = ?result.end_reason,
        total_ticks = result.total_ticks,
        "genesis-engine shutdown complete"
    );

    Ok(())
}

/// Load the simulation configuration.
///
/// Returns the config and a description of where it came from. A missing
/// file falls back to defaults; an unreadable or invalid one is an error.
fn load_config() -> Result<(SimulationConfig, String), EngineError> {
    let path = SimulationConfig::default_path();
    if path.exists() {
        let config = SimulationConfig::from_file(&path)?;
        Ok((config, path.display().to_string()))
    } else {
        Ok((SimulationConfig::default(), "defaults".to_owned()))
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `logging.level`.
fn init_logging(config: &SimulationConfig) -> Result<(), EngineError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.logging.level).map_err(|e| {
            EngineError::LogFilter {
                level: config.logging.level.clone(),
                reason: e.to_string(),
            }
        })?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);
    if config.logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
    Ok(())
}
