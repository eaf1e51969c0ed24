//! Declarative machine configuration.
//!
//! A configuration is plain validated data: an initial state and an
//! insertion-ordered table of states, each carrying its own
//! event-to-destination transition table. Configurations are immutable
//! once handed to a machine and contain no behavior beyond lookups.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::FsmError;

/// Per-state transition table.
///
/// Maps event identifiers to destination state identifiers. Order is
/// preserved, so enumeration reflects declaration order.
///
/// # Example
///
/// ```rust
/// use retrace::StateConfig;
///
/// let mut state = StateConfig::new();
/// state.transitions.insert("go".to_string(), "running".to_string());
///
/// assert!(state.handles("go"));
/// assert_eq!(state.target("go"), Some("running"));
/// assert_eq!(state.target("stop"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateConfig {
    /// Event identifier to destination state identifier.
    #[serde(default)]
    pub transitions: IndexMap<String, String>,
}

impl StateConfig {
    /// Create a state with an empty transition table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether this state has a transition rule for the event.
    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }

    /// Destination state for the event, if a rule exists.
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }
}

/// Complete machine configuration: initial state plus state table.
///
/// The state table is insertion-ordered; [`state_ids`](Self::state_ids)
/// and machine-level enumeration return identifiers in declaration order.
///
/// A configuration is not trusted until [`validate`](Self::validate) has
/// accepted it. [`StateMachine::new`](crate::StateMachine::new) validates
/// on construction, so lookups during operation never dangle.
///
/// # Example
///
/// ```rust
/// use retrace::builder::ConfigBuilder;
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
/// assert_eq!(config.initial, "idle");
/// assert_eq!(config.state_ids().collect::<Vec<_>>(), ["idle", "running"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// Identifier of the state a fresh machine starts in.
    pub initial: String,
    /// State identifier to state definition, in declaration order.
    pub states: IndexMap<String, StateConfig>,
}

impl MachineConfig {
    /// Check the configuration for internal consistency.
    ///
    /// Fails with [`FsmError::MissingConfig`] when no states are defined,
    /// and with [`FsmError::UnknownState`] when `initial` or any
    /// transition destination is not a key of the state table.
    pub fn validate(&self) -> Result<(), FsmError> {
        if self.states.is_empty() {
            return Err(FsmError::MissingConfig);
        }
        if !self.states.contains_key(&self.initial) {
            return Err(FsmError::UnknownState(self.initial.clone()));
        }
        for state in self.states.values() {
            for destination in state.transitions.values() {
                if !self.states.contains_key(destination) {
                    return Err(FsmError::UnknownState(destination.clone()));
                }
            }
        }
        Ok(())
    }

    /// Look up a state definition by identifier.
    pub fn state(&self, id: &str) -> Option<&StateConfig> {
        self.states.get(id)
    }

    /// All state identifiers in declaration order.
    pub fn state_ids(&self) -> impl Iterator<Item = &str> {
        self.states.keys().map(String::as_str)
    }
}
