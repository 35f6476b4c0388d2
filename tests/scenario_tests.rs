//! End-to-end scenarios driving a machine through its public API.

use std::sync::{Arc, Mutex};
use waypoint::validation::ValidationMode;
use waypoint::{fsm_config, Config, FsmError, StateDefinition, StateMachine};

fn player() -> Config {
    fsm_config! {
        initial: "idle",
        states: {
            "idle" => { "start" => "running" },
            "running" => { "pause" => "idle", "stop" => "stopped" },
            "stopped" => {},
        }
    }
}

#[test]
fn start_stop_undo_then_branch() {
    let mut machine = StateMachine::new(player());

    machine.trigger("start").unwrap();
    assert_eq!(machine.state(), "running");
    machine.trigger("stop").unwrap();
    assert_eq!(machine.state(), "stopped");

    assert!(machine.undo());
    assert_eq!(machine.state(), "running");
    assert!(machine.undo());
    assert_eq!(machine.state(), "idle");
    assert!(!machine.undo());
    assert_eq!(machine.state(), "idle");

    machine.trigger("start").unwrap();
    assert_eq!(machine.state(), "running");
    assert!(!machine.redo());
}

#[test]
fn building_without_config_fails() {
    let result = StateMachine::builder().build();

    let err = result.unwrap_err();
    assert_eq!(err, FsmError::MissingConfig);
    assert_eq!(err.to_string(), "config not provided");
}

#[test]
fn construction_records_single_history_entry() {
    let machine = StateMachine::builder().config(player()).build().unwrap();

    assert_eq!(machine.state(), machine.initial());
    assert_eq!(machine.history().len(), 1);
    assert!(!machine.can_undo());
    assert!(!machine.can_redo());
}

#[test]
fn undo_all_then_redo_all_restores_state() {
    let mut machine = StateMachine::new(player());
    machine.trigger("start").unwrap();
    machine.trigger("pause").unwrap();
    machine.change_state("stopped").unwrap();
    machine.reset().unwrap();
    machine.change_state("running").unwrap();

    for _ in 0..5 {
        assert!(machine.undo());
    }
    assert_eq!(machine.state(), "idle");
    assert!(!machine.undo());

    for _ in 0..5 {
        assert!(machine.redo());
    }
    assert_eq!(machine.state(), "running");
    assert!(!machine.redo());
}

#[test]
fn reset_differs_from_clear_history() {
    let mut reset = StateMachine::new(player());
    reset.trigger("start").unwrap();
    reset.reset().unwrap();

    let mut cleared = StateMachine::new(player());
    cleared.trigger("start").unwrap();
    cleared.clear_history();

    assert_eq!(reset.state(), cleared.state());
    assert_eq!(reset.history().len(), 3);
    assert_eq!(cleared.history().len(), 1);
    assert!(reset.can_undo());
    assert!(!cleared.can_undo());
}

#[test]
fn states_query_is_independent_of_current_state() {
    let mut machine = StateMachine::new(player());
    let all_before: Vec<String> = machine.states(None).iter().map(|s| s.to_string()).collect();

    machine.trigger("start").unwrap();
    let all_after: Vec<String> = machine.states(None).iter().map(|s| s.to_string()).collect();

    assert_eq!(all_before, vec!["idle", "running", "stopped"]);
    assert_eq!(all_before, all_after);

    let pausable: Vec<&str> = machine
        .states(Some("pause"))
        .into_iter()
        .map(|s| s.as_str())
        .collect();
    assert_eq!(pausable, vec!["running"]);
    assert!(machine.states(Some("eject")).is_empty());
}

#[test]
fn machines_share_one_config() {
    let config = Arc::new(player());
    let mut first = StateMachine::new(Arc::clone(&config));
    let second = StateMachine::new(Arc::clone(&config));

    first.trigger("start").unwrap();

    assert_eq!(first.state(), "running");
    assert_eq!(second.state(), "idle");
    assert_eq!(Arc::strong_count(&config), 3);
}

#[test]
fn eager_validation_rejects_dangling_target_at_build() {
    let config = Config::builder()
        .initial("idle")
        .state("idle", StateDefinition::new().on("start", "running"))
        .build()
        .unwrap();

    let lazy = StateMachine::builder().config(config.clone()).build();
    assert!(lazy.is_ok());

    let eager = StateMachine::builder()
        .config(config)
        .validation(ValidationMode::Eager)
        .build();
    assert!(matches!(
        eager,
        Err(FsmError::InvalidConfiguration { ref violations }) if violations.len() == 1
    ));
}

#[test]
fn machine_can_be_shared_behind_a_mutex() {
    let machine = Arc::new(Mutex::new(StateMachine::new(player())));

    let worker = {
        let machine = Arc::clone(&machine);
        std::thread::spawn(move || {
            let mut machine = machine.lock().unwrap();
            machine.trigger("start").unwrap();
        })
    };
    worker.join().unwrap();

    let machine = machine.lock().unwrap();
    assert_eq!(machine.state(), "running");
}
