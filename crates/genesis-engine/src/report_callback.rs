//! Tick callback that narrates the run through the log.
//!
//! Discoveries are logged as they happen; everything else is condensed
//! into a progress line every `interval` ticks.

use genesis_core::{SimulationState, TickCallback, TickSummary};
use tracing::{debug, info};

/// Callback that reports progress and discoveries.
pub struct ReportCallback {
    interval: u64,
    refused: u64,
}

impl ReportCallback {
    /// Report progress every `interval` ticks (0 = never).
    pub const fn new(interval: u64) -> Self {
        Self {
            interval,
            refused: 0,
        }
    }

    /// Decisions the body refused since the last progress line.
    pub const fn refused(&self) -> u64 {
        self.refused
    }
}

impl TickCallback for ReportCallback {
    fn on_tick(&mut self, summary: &TickSummary, state: &SimulationState) {
        if !summary.action_accepted {
            self.refused = self.refused.saturating_add(1);
        }

        for kind in &summary.new_laws {
            if let Some(law) = state.mind.laws().iter().find(|l| l.name == *kind) {
                info!(
                    tick = summary.tick,
                    sim_time = summary.sim_time,
                    law = %law.name,
                    confidence = law.confidence,
                    evidence = law.evidence,
                    formula = %law.formula,
                    "New law"
                );
            }
        }

        if summary.tick.checked_rem(self.interval) == Some(0) {
            let mind = state.mind.state();
            let body = state.agent.body();
            info!(
                tick = summary.tick,
                sim_time = summary.sim_time,
                x = body.position.x,
                y = body.position.y,
                energy = state.agent.energy(),
                phase = ?mind.phase,
                laws = mind.laws_discovered,
                refused = self.refused,
                "Progress"
            );
            self.refused = 0;
        }
    }

    fn on_reset(&mut self, state: &SimulationState) {
        self.refused = 0;
        debug!(session_id = %state.session_id.into_inner(), "Report counters cleared");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use genesis_core::{SimulationConfig, run_tick};

    use super::*;

    #[test]
    fn counts_refusals_between_reports() {
        let mut state = SimulationState::new(&SimulationConfig::default()).unwrap();
        let mut callback = ReportCallback::new(0);
        for _ in 0..30 {
            let mut summary = run_tick(&mut state, 0.016).unwrap();
            summary.action_accepted = false;
            callback.on_tick(&summary, &state);
        }
        assert_eq!(callback.refused(), 30);

        callback.on_reset(&state);
        assert_eq!(callback.refused(), 0);
    }

    #[test]
    fn progress_line_clears_the_counter() {
        let mut state = SimulationState::new(&SimulationConfig::default()).unwrap();
        let mut callback = ReportCallback::new(10);
        for _ in 0..10 {
            let mut summary = run_tick(&mut state, 0.016).unwrap();
            summary.action_accepted = false;
            callback.on_tick(&summary, &state);
        }
        assert_eq!(callback.refused(), 0);
    }
}
