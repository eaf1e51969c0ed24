//! Retrace: a declarative finite state machine library with undo/redo.
//!
//! A machine is configured with a set of named states, an initial state,
//! and per-state tables mapping event identifiers to destination states.
//! At runtime it tracks the active state, follows transitions on named
//! events, supports direct state jumps, and keeps a two-stack undo/redo
//! history of every state change.
//!
//! # Core Concepts
//!
//! - **Configuration**: immutable, validated data (`MachineConfig`):
//!   states and their transition tables, assembled by hand, with
//!   [`builder::ConfigBuilder`], or with the [`machine_config!`] macro
//! - **Machine**: the mutable shell (`StateMachine`) holding the active
//!   state and history
//! - **History**: two stacks of state identifiers (`UndoHistory`);
//!   forward progress clears the redo chain
//!
//! # Example
//!
//! ```rust
//! use retrace::machine_config;
//! use retrace::StateMachine;
//!
//! let config = machine_config! {
//!     initial: "idle",
//!     "idle" => { "go" => "running" },
//!     "running" => { "stop" => "idle" },
//! }
//! .unwrap();
//!
//! let mut machine = StateMachine::new(config).unwrap();
//!
//! machine.trigger("go").unwrap();
//! assert_eq!(machine.state(), "running");
//!
//! assert!(machine.undo());
//! assert_eq!(machine.state(), "idle");
//!
//! assert!(machine.redo());
//! assert_eq!(machine.state(), "running");
//!
//! assert_eq!(machine.states_handling("go"), ["idle"]);
//! ```

pub mod builder;
pub mod core;
pub mod error;
pub mod machine;

// Re-export commonly used types
pub use crate::core::{MachineConfig, StateConfig, UndoHistory};
pub use crate::error::FsmError;
pub use crate::machine::StateMachine;
