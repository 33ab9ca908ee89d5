//! End-to-end scenarios through the simulator's public API.

use irqsim_core::{Command, CommandOutcome, StateMachine};
use irqsim_engine::LogSummary;
use irqsim_simulation::{InterruptSimulator, SimulatorConfig};
use irqsim_test_helpers::{fixed_time, keyboard_and_disk, tied_priorities};
use irqsim_types::{EventKind, EventSubject, MAIN_PROCESS_NAME};

fn simulator_with(forms: Vec<irqsim_types::InterruptForm>) -> InterruptSimulator {
    let mut simulator = InterruptSimulator::new(SimulatorConfig::default());
    simulator.set_time(fixed_time());
    for form in forms {
        simulator
            .handle(Command::AddInterrupt(form))
            .expect("fixture forms are valid");
    }
    simulator
}

#[test]
fn keyboard_and_disk_timeline() {
    let mut simulator = simulator_with(keyboard_and_disk());
    simulator.handle(Command::StartSimulation).unwrap();

    let state = simulator.state();
    let names: Vec<_> = state.interrupts.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Teclado", "Disco"]);

    let timeline: Vec<_> = state
        .log
        .iter()
        .map(|e| (e.kind, e.subject_name.as_str()))
        .collect();
    assert_eq!(
        timeline,
        vec![
            (EventKind::Start, MAIN_PROCESS_NAME),
            (EventKind::Start, "Teclado"),
            (EventKind::Complete, "Teclado"),
            (EventKind::Start, "Disco"),
            (EventKind::Complete, "Disco"),
            (EventKind::Complete, MAIN_PROCESS_NAME),
        ]
    );

    let summary = LogSummary::of(&state.log);
    assert_eq!(summary.preemptions, 0);
    assert_eq!(summary.resumes, 0);
}

#[test]
fn registry_ordering_is_stable_for_ties() {
    let simulator = simulator_with(tied_priorities());
    let names: Vec<_> = simulator
        .state()
        .interrupts
        .iter()
        .map(|i| i.name.clone())
        .collect();
    assert_eq!(names, vec!["A", "C", "B"]);
}

#[test]
fn empty_registry_yields_two_main_events() {
    let mut simulator = simulator_with(vec![]);
    simulator.start_simulation();

    let state = simulator.state();
    assert_eq!(state.log.len(), 2);
    assert!(state.log.iter().all(|e| e.subject == EventSubject::Main));
    assert_eq!(state.log[0].kind, EventKind::Start);
    assert_eq!(state.log[1].kind, EventKind::Complete);
    assert!(!state.can_start());
}

#[test]
fn stepping_through_the_whole_log() {
    let mut simulator = simulator_with(keyboard_and_disk());
    simulator.start_simulation();
    let len = simulator.log().len();

    let mut seen = vec![simulator.current_event().unwrap().id];
    while simulator.handle(Command::NextStep).unwrap() == CommandOutcome::Applied {
        seen.push(simulator.current_event().unwrap().id);
    }
    assert_eq!(seen.len(), len);
    assert_eq!(simulator.state().progress(), Some((len, len)));
    assert!(!simulator.state().can_step_forward());

    // Idempotent at the end.
    assert_eq!(simulator.handle(Command::NextStep), Ok(CommandOutcome::Ignored));
    assert_eq!(simulator.state().cursor, len - 1);

    while simulator.previous_step() {}
    assert_eq!(simulator.state().cursor, 0);
    assert!(!simulator.state().can_step_back());
}

#[test]
fn state_snapshots_are_detached() {
    let mut simulator = simulator_with(keyboard_and_disk());
    simulator.start_simulation();

    let mut state = simulator.state();
    state.interrupts.clear();
    state.log.clear();
    state.cursor = 99;
    state.is_running = false;

    let fresh = simulator.state();
    assert_eq!(fresh.interrupts.len(), 2);
    assert_eq!(fresh.log.len(), 6);
    assert_eq!(fresh.cursor, 0);
    assert!(fresh.is_running);
}

#[test]
fn paused_implies_running() {
    let mut simulator = simulator_with(keyboard_and_disk());

    simulator.handle(Command::PauseSimulation).unwrap();
    assert!(!simulator.state().is_paused);

    simulator.handle(Command::StartSimulation).unwrap();
    simulator.handle(Command::PauseSimulation).unwrap();
    let state = simulator.state();
    assert!(state.is_paused && state.is_running);

    simulator.handle(Command::Reset).unwrap();
    let state = simulator.state();
    assert!(!state.is_paused && !state.is_running);
    assert_eq!(state.interrupts.len(), 2);
}

#[test]
fn state_serializes_to_json() {
    let mut simulator = simulator_with(keyboard_and_disk());
    simulator.start_simulation();

    let json = serde_json::to_value(simulator.state()).unwrap();
    assert_eq!(json["is_running"], true);
    assert_eq!(json["log"].as_array().map(Vec::len), Some(6));
    assert_eq!(json["log"][1]["kind"], "start");
    assert_eq!(json["interrupts"][0]["name"], "Teclado");
}
