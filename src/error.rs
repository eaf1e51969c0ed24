//! Error taxonomy for configuration validation and transitions.

use thiserror::Error;

/// Errors surfaced by [`StateMachine`](crate::StateMachine) operations.
///
/// Every variant is a precondition violation on caller input; the machine
/// is left unmodified whenever one is returned. Exhausted undo/redo history
/// is not represented here; [`undo`](crate::StateMachine::undo) and
/// [`redo`](crate::StateMachine::redo) report that expected steady-state
/// outcome with a boolean instead.
///
/// # Example
///
/// ```rust
/// use retrace::{FsmError, MachineConfig, StateMachine};
///
/// let config: MachineConfig = serde_json::from_str(
///     r#"{ "initial": "idle", "states": { "idle": { "transitions": {} } } }"#,
/// ).unwrap();
///
/// let mut machine = StateMachine::new(config).unwrap();
///
/// match machine.change_state("launched") {
///     Err(FsmError::UnknownState(state)) => assert_eq!(state, "launched"),
///     other => panic!("expected UnknownState, got {other:?}"),
/// }
/// ```
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FsmError {
    /// Construction was attempted without a usable configuration.
    #[error("configuration defines no states")]
    MissingConfig,

    /// A state identifier does not name a configured state.
    ///
    /// Returned by [`change_state`](crate::StateMachine::change_state) for
    /// unknown targets, and by construction when the initial state or a
    /// transition destination is missing from the state table.
    #[error("state '{0}' is not defined in the configuration")]
    UnknownState(String),

    /// The active state has no transition for the given event.
    #[error("state '{state}' has no transition for event '{event}'")]
    UnknownEvent {
        /// State that was active when the event was triggered.
        state: String,
        /// Event that no transition rule covers.
        event: String,
    },
}
