//! Media Player State Machine
//!
//! This example drives a small player through its states, then walks the
//! history back and forth.
//!
//! Key concepts:
//! - Event-driven transitions with `trigger`
//! - Undo/redo over the visited states
//! - A new move after an undo drops the redo branch
//!
//! Run with: RUST_LOG=waypoint=debug cargo run --example media_player

use tracing_subscriber::EnvFilter;
use waypoint::validation::ValidationMode;
use waypoint::{fsm_config, FsmError, StateMachine};

fn main() -> Result<(), FsmError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("waypoint=debug")),
        )
        .init();

    println!("=== Media Player State Machine ===\n");

    let config = fsm_config! {
        initial: "idle",
        states: {
            "idle" => { "play" => "playing" },
            "playing" => { "pause" => "paused", "stop" => "stopped" },
            "paused" => { "play" => "playing", "stop" => "stopped" },
            "stopped" => { "rewind" => "idle" },
        }
    };

    let mut player = StateMachine::builder()
        .config(config)
        .validation(ValidationMode::Eager)
        .build()?;

    println!("Initial state: {}", player.state());
    println!("Available events: {:?}\n", player.available_events());

    for event in ["play", "pause", "play", "stop"] {
        player.trigger(event)?;
        println!("{event:>8} -> {}", player.state());
    }

    match player.trigger("pause") {
        Err(err) => println!("\nRejected: {err}"),
        Ok(()) => println!("\nUnexpectedly paused a stopped player"),
    }

    println!("\nWalking back:");
    while player.undo() {
        println!("    undo -> {}", player.state());
    }

    player.trigger("play")?;
    println!("\nNew branch: play -> {}", player.state());
    println!("Redo available: {}", player.redo());

    println!("\nHistory: {:?}", player.snapshot().path);

    println!("\n=== Example Complete ===");
    Ok(())
}
