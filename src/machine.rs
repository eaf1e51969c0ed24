//! The state machine: configuration lookup plus history bookkeeping.

use std::sync::Arc;

use tracing::debug;

use crate::core::{MachineConfig, UndoHistory};
use crate::error::FsmError;

/// A finite state machine over a declarative configuration.
///
/// The machine owns a current state, validated against the configuration
/// on every mutation, and an undo/redo history of state changes. The
/// configuration is held behind [`Arc`]: pass an `Arc<MachineConfig>` to
/// share one configuration between machines, or a plain
/// [`MachineConfig`] to give the machine its own. Either way it is
/// immutable for the machine's lifetime.
///
/// Failed operations return an error and leave the machine untouched;
/// there is no partial mutation.
///
/// # Example
///
/// ```rust
/// use retrace::builder::ConfigBuilder;
/// use retrace::StateMachine;
///
/// let config = ConfigBuilder::new()
///     .initial("idle")
///     .state("idle")
///     .state("running")
///     .transition("idle", "go", "running")
///     .transition("running", "stop", "idle")
///     .build()
///     .unwrap();
///
/// let mut machine = StateMachine::new(config).unwrap();
/// assert_eq!(machine.state(), "idle");
///
/// machine.trigger("go").unwrap();
/// assert_eq!(machine.state(), "running");
///
/// assert!(machine.undo());
/// assert_eq!(machine.state(), "idle");
///
/// assert!(machine.redo());
/// assert_eq!(machine.state(), "running");
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    config: Arc<MachineConfig>,
    current: String,
    history: UndoHistory,
}

impl StateMachine {
    /// Create a machine in the configuration's initial state.
    ///
    /// Validates the configuration up front: fails with
    /// [`FsmError::MissingConfig`] when it defines no states and with
    /// [`FsmError::UnknownState`] when the initial state or any transition
    /// destination is not in the state table. Both history stacks start
    /// empty.
    pub fn new(config: impl Into<Arc<MachineConfig>>) -> Result<Self, FsmError> {
        let config = config.into();
        config.validate()?;
        let current = config.initial.clone();
        Ok(Self {
            config,
            current,
            history: UndoHistory::new(),
        })
    }

    /// Identifier of the active state.
    pub fn state(&self) -> &str {
        &self.current
    }

    /// The configuration this machine runs on.
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// The undo/redo history.
    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    /// Jump directly to `state`.
    ///
    /// The old state is pushed onto the back-history and the forward
    /// history is cleared. Fails with [`FsmError::UnknownState`] when the
    /// target is not configured; the machine is unchanged on failure.
    pub fn change_state(&mut self, state: &str) -> Result<(), FsmError> {
        if !self.config.states.contains_key(state) {
            return Err(FsmError::UnknownState(state.to_string()));
        }
        self.enter(state.to_string());
        Ok(())
    }

    /// Follow the active state's transition rule for `event`.
    ///
    /// Same mutation pattern as [`change_state`](Self::change_state), with
    /// the destination taken from the active state's transition table.
    /// Fails with [`FsmError::UnknownEvent`] when no rule covers the
    /// event; the machine is unchanged on failure.
    pub fn trigger(&mut self, event: &str) -> Result<(), FsmError> {
        let destination = self
            .config
            .state(&self.current)
            .and_then(|state| state.target(event))
            .ok_or_else(|| FsmError::UnknownEvent {
                state: self.current.clone(),
                event: event.to_string(),
            })?
            .to_string();
        self.enter(destination);
        Ok(())
    }

    /// Return to the configuration's initial state.
    ///
    /// Neither history stack is touched. That matches the documented
    /// behavior of the machine this library models: an [`undo`](Self::undo)
    /// right after `reset` pops the pre-existing back-history and can land
    /// on a state that predates the reset, rather than finding no history.
    pub fn reset(&mut self) {
        debug!(from = %self.current, to = %self.config.initial, "reset");
        self.current = self.config.initial.clone();
    }

    /// All configured state identifiers, in declaration order.
    pub fn states(&self) -> Vec<&str> {
        self.config.state_ids().collect()
    }

    /// State identifiers whose transition table handles `event`.
    ///
    /// Declaration order; empty when no state handles the event.
    pub fn states_handling(&self, event: &str) -> Vec<&str> {
        self.config
            .states
            .iter()
            .filter(|(_, state)| state.handles(event))
            .map(|(id, _)| id.as_str())
            .collect()
    }

    /// Step back to the previously visited state.
    ///
    /// Returns `false` and changes nothing when the back-history is
    /// empty. Exhausted history is an expected outcome, not an error.
    pub fn undo(&mut self) -> bool {
        let moved = self.history.undo(&mut self.current);
        if moved {
            debug!(to = %self.current, "undo");
        }
        moved
    }

    /// Step forward to the most recently undone state.
    ///
    /// Returns `false` and changes nothing when the forward-history is
    /// empty.
    pub fn redo(&mut self) -> bool {
        let moved = self.history.redo(&mut self.current);
        if moved {
            debug!(to = %self.current, "redo");
        }
        moved
    }

    /// Forget all undo/redo history.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    fn enter(&mut self, destination: String) {
        debug!(from = %self.current, to = %destination, "state change");
        let departed = std::mem::replace(&mut self.current, destination);
        self.history.record(departed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::ConfigBuilder;

    fn player_config() -> MachineConfig {
        ConfigBuilder::new()
            .initial("idle")
            .state("idle")
            .state("running")
            .state("paused")
            .transition("idle", "go", "running")
            .transition("running", "pause", "paused")
            .transition("running", "stop", "idle")
            .transition("paused", "resume", "running")
            .transition("paused", "stop", "idle")
            .build()
            .unwrap()
    }

    fn player() -> StateMachine {
        StateMachine::new(player_config()).unwrap()
    }

    #[test]
    fn fresh_machine_starts_in_initial_state() {
        let machine = player();
        assert_eq!(machine.state(), "idle");
        assert!(!machine.history().can_undo());
        assert!(!machine.history().can_redo());
    }

    #[test]
    fn construction_rejects_empty_configuration() {
        let config = MachineConfig {
            initial: "idle".to_string(),
            states: indexmap::IndexMap::new(),
        };

        let err = StateMachine::new(config).unwrap_err();
        assert_eq!(err, FsmError::MissingConfig);
    }

    #[test]
    fn construction_rejects_unknown_initial_state() {
        let mut config = player_config();
        config.initial = "launched".to_string();

        let err = StateMachine::new(config).unwrap_err();
        assert_eq!(err, FsmError::UnknownState("launched".to_string()));
    }

    #[test]
    fn shared_config_between_machines() {
        let config = Arc::new(player_config());
        let mut first = StateMachine::new(Arc::clone(&config)).unwrap();
        let second = StateMachine::new(config).unwrap();

        first.trigger("go").unwrap();

        assert_eq!(first.state(), "running");
        assert_eq!(second.state(), "idle");
    }

    #[test]
    fn change_state_records_history() {
        let mut machine = player();

        machine.change_state("paused").unwrap();

        assert_eq!(machine.state(), "paused");
        assert_eq!(machine.history().back_states(), ["idle"]);
    }

    #[test]
    fn change_state_to_unknown_target_is_atomic() {
        let mut machine = player();
        machine.trigger("go").unwrap();

        let err = machine.change_state("launched").unwrap_err();

        assert_eq!(err, FsmError::UnknownState("launched".to_string()));
        assert_eq!(machine.state(), "running");
        assert_eq!(machine.history().back_states(), ["idle"]);
    }

    #[test]
    fn trigger_follows_transition_table() {
        let mut machine = player();

        machine.trigger("go").unwrap();
        machine.trigger("pause").unwrap();

        assert_eq!(machine.state(), "paused");
        assert_eq!(machine.history().back_states(), ["idle", "running"]);
    }

    #[test]
    fn trigger_with_unhandled_event_is_atomic() {
        let mut machine = player();

        let err = machine.trigger("pause").unwrap_err();

        assert_eq!(
            err,
            FsmError::UnknownEvent {
                state: "idle".to_string(),
                event: "pause".to_string(),
            }
        );
        assert_eq!(machine.state(), "idle");
        assert!(!machine.history().can_undo());
    }

    #[test]
    fn forward_progress_clears_redo_chain() {
        let mut machine = player();
        machine.trigger("go").unwrap();
        assert!(machine.undo());
        assert!(machine.history().can_redo());

        machine.change_state("paused").unwrap();

        assert!(!machine.history().can_redo());
        assert!(!machine.redo());
    }

    #[test]
    fn undo_then_redo_restores_state() {
        let mut machine = player();
        machine.trigger("go").unwrap();

        assert!(machine.undo());
        assert_eq!(machine.state(), "idle");
        assert!(machine.redo());
        assert_eq!(machine.state(), "running");
    }

    #[test]
    fn undo_with_no_history_reports_false() {
        let mut machine = player();

        assert!(!machine.undo());
        assert_eq!(machine.state(), "idle");
    }

    #[test]
    fn redo_with_no_undone_states_reports_false() {
        let mut machine = player();
        machine.trigger("go").unwrap();

        assert!(!machine.redo());
        assert_eq!(machine.state(), "running");
    }

    #[test]
    fn reset_returns_to_initial_without_touching_history() {
        let mut machine = player();
        machine.trigger("go").unwrap();
        machine.trigger("pause").unwrap();

        machine.reset();

        assert_eq!(machine.state(), "idle");
        assert_eq!(machine.history().back_states(), ["idle", "running"]);
    }

    #[test]
    fn undo_after_reset_pops_pre_reset_history() {
        // Documented quirk: reset leaves the stacks alone, so the next
        // undo lands on a state recorded before the reset.
        let mut machine = player();
        machine.trigger("go").unwrap();

        machine.reset();
        assert!(machine.undo());

        assert_eq!(machine.state(), "idle");
        assert_eq!(machine.history().forward_states(), ["idle"]);
    }

    #[test]
    fn states_lists_declaration_order() {
        let machine = player();
        assert_eq!(machine.states(), ["idle", "running", "paused"]);
    }

    #[test]
    fn states_handling_filters_by_event() {
        let machine = player();

        assert_eq!(machine.states_handling("go"), ["idle"]);
        assert_eq!(machine.states_handling("stop"), ["running", "paused"]);
        assert!(machine.states_handling("explode").is_empty());
    }

    #[test]
    fn clear_history_disables_undo_and_redo() {
        let mut machine = player();
        machine.trigger("go").unwrap();
        machine.undo();

        machine.clear_history();

        assert!(!machine.undo());
        assert!(!machine.redo());
        assert_eq!(machine.state(), "idle");
    }
}
