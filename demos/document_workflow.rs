//! Document Workflow with Undo/Redo
//!
//! This example demonstrates the undo/redo history on a small editorial
//! workflow, including the documented reset quirk.
//!
//! Key concepts:
//! - Direct jumps with change_state() and events with trigger()
//! - Stepping back and forward through visited states
//! - Forward progress breaking the redo chain
//! - reset() leaving history untouched
//!
//! Run with: cargo run --example document_workflow

use retrace::machine_config;
use retrace::StateMachine;

fn main() {
    println!("=== Document Workflow Example ===\n");

    let config = machine_config! {
        initial: "draft",
        "draft" => { "submit" => "review" },
        "review" => { "approve" => "published", "reject" => "draft" },
        "published" => { "retract" => "draft" },
    }
    .expect("workflow config is valid");

    let mut machine = StateMachine::new(config).expect("config validated");

    println!("Walking the happy path:");
    machine.trigger("submit").unwrap();
    machine.trigger("approve").unwrap();
    println!("  now in: {}", machine.state());
    println!("  visited: {:?}\n", machine.history().back_states());

    println!("Stepping back twice:");
    machine.undo();
    machine.undo();
    println!("  now in: {}", machine.state());
    println!("  redo available: {}\n", machine.history().can_redo());

    println!("Redo replays the undone changes:");
    machine.redo();
    println!("  now in: {}", machine.state());

    println!("\nForward progress breaks the redo chain:");
    machine.trigger("reject").unwrap();
    println!("  now in: {}", machine.state());
    println!("  redo available: {}", machine.history().can_redo());

    println!("\nreset() returns to the initial state but keeps history:");
    machine.reset();
    println!("  now in: {}", machine.state());
    println!("  back history: {:?}", machine.history().back_states());
    machine.undo();
    println!("  undo after reset lands in: {}", machine.state());

    println!("\n=== Example Complete ===");
}
