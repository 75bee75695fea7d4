//! Integration tests running physics, body and mind together through the
//! tick cycle and the async runner.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use genesis_core::{
    NoOpCallback, OperatorState, SimulationConfig, SimulationEndReason, SimulationState,
    TickCallback, TickSummary, run_simulation, run_tick,
};
use genesis_types::{Action, ExperimentPhase, LawKind};

const DT: f64 = 0.016;

fn seeded(seed: u64) -> SimulationConfig {
    let mut config = SimulationConfig::default();
    config.world.seed = Some(seed);
    config.simulation.fixed_dt = Some(DT);
    config.simulation.frame_interval_ms = 0;
    config
}

fn run(config: &SimulationConfig, ticks: usize) -> (SimulationState, Vec<TickSummary>) {
    let mut state = SimulationState::new(config).unwrap();
    let summaries = (0..ticks)
        .map(|_| run_tick(&mut state, DT).unwrap())
        .collect();
    (state, summaries)
}

#[test]
fn spawn_drop_teaches_gravity_before_the_landing() {
    let (state, summaries) = run(&seeded(1), 300);

    let landing = summaries
        .iter()
        .position(|s| s.forces.on_ground)
        .unwrap();
    assert!(landing > 20, "the spawn drop takes longer than observation");

    let gravity = summaries
        .iter()
        .position(|s| s.new_laws.contains(&LawKind::Gravity))
        .unwrap();
    assert!(gravity < landing);

    // Gravity is already known, so the jumping experiment never runs.
    let experience = state.mind.state().experience;
    assert_eq!(experience.jumps, 0);
    assert!(experience.ticks_on_ground > 0);
    assert!(experience.ticks_in_air > 0);
}

#[test]
fn refused_decisions_cost_nothing_and_exploration_jumps_launch() {
    let config = seeded(3);
    let mut state = SimulationState::new(&config).unwrap();
    let max_regen = config.agent.rest_regen_rate * DT + 1e-9;
    let mut launched = 0_u32;
    let mut refused = 0_u32;

    for _ in 0..20_000 {
        let energy_before = state.agent.energy();
        let action_before = state.agent.current_action();
        let summary = run_tick(&mut state, DT).unwrap();

        if !summary.action_accepted {
            refused = refused.saturating_add(1);
            assert_eq!(state.agent.current_action(), action_before);
            let gained = state.agent.energy() - energy_before;
            assert!(
                (0.0..=max_regen).contains(&gained),
                "refused {} changed energy by {gained}",
                summary.action
            );
        } else if summary.action == Action::Jump {
            launched = launched.saturating_add(1);
            assert!(!state.agent.body().on_ground);
            assert!(state.agent.body().velocity.y < 0.0);
        }
    }

    assert!(refused > 0);
    assert!(launched > 0, "exploration eventually jumps from the ground");
    assert!(state.mind.laws().len() >= config.mind.exploration_min_laws);
    assert!(state.mind.state().experience.falls >= 1);
}

#[test]
fn observation_comes_before_any_experiment() {
    let (_, summaries) = run(&seeded(2), 19);
    assert!(summaries.iter().all(|s| s.action == Action::Wait));
}

#[test]
fn same_seed_same_run() {
    let config = seeded(7);
    let (first, a) = run(&config, 1_500);
    let (second, b) = run(&config, 1_500);

    let decisions = |s: &[TickSummary]| -> Vec<(Action, bool)> {
        s.iter().map(|t| (t.action, t.action_accepted)).collect()
    };
    assert_eq!(decisions(&a), decisions(&b));
    assert_eq!(first.mind.laws(), second.mind.laws());

    let texts = |state: &SimulationState| -> Vec<String> {
        state.mind.thoughts().iter().map(|t| t.text.clone()).collect()
    };
    assert_eq!(texts(&first), texts(&second));
    assert_eq!(first.agent.body(), second.agent.body());
}

#[test]
fn laws_are_reported_once_and_never_lost() {
    let (state, summaries) = run(&seeded(3), 3_000);
    let reported: Vec<_> = summaries.iter().flat_map(|s| s.new_laws.clone()).collect();
    let known: Vec<_> = state.mind.laws().iter().map(|l| l.name).collect();
    assert_eq!(reported, known);
}

#[test]
fn energy_stays_within_bounds() {
    let (state, summaries) = run(&seeded(4), 2_000);
    assert!(summaries.iter().all(|s| s.dt > 0.0));
    let vitals = state.agent.vitals();
    assert!(vitals.energy >= 0.0 && vitals.energy <= vitals.max_energy);
    assert!((0.0..=100.0).contains(&vitals.comfort));
    assert!((0.0..=100.0).contains(&vitals.pain));
}

struct Recorder {
    phases: Vec<ExperimentPhase>,
    resets: usize,
}

impl TickCallback for Recorder {
    fn on_tick(&mut self, _summary: &TickSummary, state: &SimulationState) {
        self.phases.push(state.mind.state().phase);
    }

    fn on_reset(&mut self, _state: &SimulationState) {
        self.resets = self.resets.saturating_add(1);
    }
}

#[tokio::test]
async fn runner_reports_every_tick_to_the_callback() {
    let mut config = seeded(5);
    config.simulation.max_ticks = 40;
    let mut state = SimulationState::new(&config).unwrap();
    let operator = Arc::new(OperatorState::new(&config.simulation));
    let mut recorder = Recorder {
        phases: Vec::new(),
        resets: 0,
    };

    let result = run_simulation(&mut state, &operator, &mut recorder)
        .await
        .unwrap();

    assert_eq!(result.end_reason, SimulationEndReason::MaxTicksReached);
    assert_eq!(recorder.phases.len(), 40);
    assert!(
        recorder
            .phases
            .iter()
            .take(19)
            .all(|p| *p == ExperimentPhase::InitialObservation)
    );
    assert_eq!(recorder.resets, 0);
}

#[tokio::test]
async fn runner_stops_when_asked_from_another_task() {
    let config = seeded(6);
    let mut state = SimulationState::new(&config).unwrap();
    let operator = Arc::new(OperatorState::new(&config.simulation));

    let stopper = {
        let operator = Arc::clone(&operator);
        tokio::spawn(async move {
            tokio::time::sleep(tokio::time::Duration::from_millis(30)).await;
            operator.request_stop();
        })
    };

    let result = run_simulation(&mut state, &operator, &mut NoOpCallback)
        .await
        .unwrap();
    stopper.await.unwrap();

    assert_eq!(result.end_reason, SimulationEndReason::OperatorStop);
    let snapshot = state.snapshot(operator.is_paused(), operator.speed());
    assert_eq!(snapshot.tick, result.total_ticks);
}
