//! Frame loop runner with operator controls.
//!
//! This module provides [`run_simulation`], the top-level async function
//! that drives the tick loop with support for:
//!
//! - **Bounded simulation**: stop after `max_ticks` or `max_real_time_seconds`
//! - **Pause/resume**: the operator can halt and continue the loop
//! - **Speed multiplier**: 1x, 2x or 4x simulated time per frame
//! - **Reset**: rebuild the world, the body and the mind between frames
//! - **Operator stop**: immediate clean stop
//!
//! Frame time is measured on the tokio clock, clamped, then scaled by the
//! current speed. A configured `fixed_dt` replaces the measurement so that
//! seeded runs are reproducible.

use std::sync::Arc;

use tokio::time::{Duration, Instant};
use tracing::{info, warn};

use crate::operator::{OperatorState, SimulationEndReason};
use crate::tick::{self, SimulationState, TickError, TickSummary};

/// Errors that can occur during the simulation run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// A tick execution failed.
    #[error("tick error: {source}")]
    Tick {
        /// The underlying tick error.
        #[from]
        source: TickError,
    },
}

/// Result of the simulation run.
#[derive(Debug)]
pub struct SimulationResult {
    /// The reason the simulation ended.
    pub end_reason: SimulationEndReason,
    /// The last tick summary, if any tick completed.
    pub final_summary: Option<TickSummary>,
    /// Total number of ticks executed across resets.
    pub total_ticks: u64,
    /// Number of resets performed.
    pub resets: u32,
}

/// Callback invoked after each tick completes.
///
/// The callback receives the tick summary and the current simulation
/// state, typically to refresh a display or report discoveries.
pub trait TickCallback: Send {
    /// Called after a tick completes successfully.
    fn on_tick(&mut self, summary: &TickSummary, state: &SimulationState);

    /// Called after the state has been rebuilt by a reset.
    fn on_reset(&mut self, _state: &SimulationState) {}
}

/// A no-op tick callback for testing.
pub struct NoOpCallback;

impl TickCallback for NoOpCallback {
    fn on_tick(&mut self, _summary: &TickSummary, _state: &SimulationState) {}
}

/// Run the frame loop until a termination condition is met.
///
/// # Errors
///
/// Returns [`RunnerError`] if a tick or a reset fails.
pub async fn run_simulation(
    state: &mut SimulationState,
    operator: &Arc<OperatorState>,
    callback: &mut dyn TickCallback,
) -> Result<SimulationResult, RunnerError> {
    let bounds = state.config.simulation.clone();
    let mut last_summary: Option<TickSummary> = None;
    let mut total_ticks: u64 = 0;
    let mut resets: u32 = 0;

    info!(
        max_ticks = operator.max_ticks(),
        max_real_time_seconds = operator.max_real_time_seconds(),
        frame_interval_ms = bounds.frame_interval_ms,
        fixed_dt = ?bounds.fixed_dt,
        speed = operator.speed(),
        "Simulation starting"
    );

    let mut last_frame = Instant::now();

    loop {
        // --- Check pause ---
        if operator.is_paused() {
            info!("Simulation paused, waiting for resume...");
            operator.wait_if_paused().await;
            info!("Simulation resumed");
            // Time spent paused is not simulated.
            last_frame = Instant::now();
        }

        // --- Check stop request (before tick) ---
        if operator.is_stop_requested() {
            info!("Operator stop requested");
            return finish(
                operator,
                SimulationEndReason::OperatorStop,
                last_summary,
                total_ticks,
                resets,
            )
            .await;
        }

        // --- Check time limit (before tick) ---
        if operator.time_limit_reached() {
            info!(
                max_seconds = operator.max_real_time_seconds(),
                elapsed = operator.elapsed_seconds(),
                "Real-time limit reached"
            );
            return finish(
                operator,
                SimulationEndReason::MaxRealTimeReached,
                last_summary,
                total_ticks,
                resets,
            )
            .await;
        }

        // --- Check reset request ---
        if operator.take_reset_request() {
            state.reset()?;
            resets = resets.saturating_add(1);
            last_frame = Instant::now();
            callback.on_reset(state);
        }

        // --- Measure frame time ---
        let now = Instant::now();
        let elapsed = now.duration_since(last_frame).as_secs_f64();
        last_frame = now;
        let dt = bounds.fixed_dt.map_or_else(
            || state.clock.frame_dt(elapsed, operator.speed()),
            |fixed| fixed * f64::from(operator.speed()),
        );

        // --- Execute tick ---
        let summary = tick::run_tick(state, dt)?;
        total_ticks = total_ticks.saturating_add(1);

        // --- Notify callback ---
        callback.on_tick(&summary, state);

        // --- Check tick limit (after tick) ---
        if operator.tick_limit_reached(total_ticks) {
            info!(
                tick = summary.tick,
                max_ticks = operator.max_ticks(),
                "Tick limit reached"
            );
            return finish(
                operator,
                SimulationEndReason::MaxTicksReached,
                Some(summary),
                total_ticks,
                resets,
            )
            .await;
        }

        last_summary = Some(summary);

        // --- Sleep until the next frame ---
        if bounds.frame_interval_ms > 0 {
            tokio::time::sleep(Duration::from_millis(bounds.frame_interval_ms)).await;
        } else {
            tokio::task::yield_now().await;
        }
    }
}

async fn finish(
    operator: &OperatorState,
    end_reason: SimulationEndReason,
    final_summary: Option<TickSummary>,
    total_ticks: u64,
    resets: u32,
) -> Result<SimulationResult, RunnerError> {
    operator.set_end_reason(end_reason).await;
    Ok(SimulationResult {
        end_reason,
        final_summary,
        total_ticks,
        resets,
    })
}

/// Log the simulation end sequence.
///
/// Call after [`run_simulation`] returns.
pub fn log_simulation_end(result: &SimulationResult, state: &SimulationState) {
    info!(
        reason = ?result.end_reason,
        total_ticks = result.total_ticks,
        resets = result.resets,
        final_tick = result.final_summary.as_ref().map(|s| s.tick),
        "Simulation ended"
    );

    if let Some(ref summary) = result.final_summary {
        let mind = state.mind.state();
        info!(
            tick = summary.tick,
            sim_time = summary.sim_time,
            laws = mind.laws_discovered,
            phase = ?mind.phase,
            energy = state.agent.energy(),
            "Final tick summary"
        );
    } else {
        warn!("Simulation ended with no ticks executed");
    }
}
