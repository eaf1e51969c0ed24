//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine driven by a
//! single event.
//!
//! Key concepts:
//! - Declarative configuration via the machine_config! macro
//! - Cyclic state transitions (states repeat)
//! - Event-driven transitions with trigger()
//!
//! Run with: cargo run --example traffic_light

use retrace::machine_config;
use retrace::StateMachine;

fn main() {
    println!("=== Traffic Light State Machine ===\n");

    let config = machine_config! {
        initial: "red",
        "red" => { "next" => "green" },
        "green" => { "next" => "yellow" },
        "yellow" => { "next" => "red" },
    }
    .expect("traffic light config is valid");

    let mut machine = StateMachine::new(config).expect("config validated");

    println!("Initial state: {}\n", machine.state());

    println!("Cycling through the light twice:");
    for _ in 0..6 {
        let from = machine.state().to_string();
        machine.trigger("next").expect("every state handles 'next'");
        println!("  {} -> {}", from, machine.state());
    }

    println!("\nEvery state handles the same event:");
    println!("  states handling 'next': {:?}", machine.states_handling("next"));

    println!("\n=== Example Complete ===");
}
