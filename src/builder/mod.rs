//! Builder API for ergonomic configuration construction.
//!
//! This module provides a fluent builder and a macro for assembling
//! [`MachineConfig`](crate::MachineConfig) values with minimal
//! boilerplate. Anything the builder accepts has already passed the same
//! validation that [`StateMachine::new`](crate::StateMachine::new) runs.

pub mod error;
pub mod macros;

pub use error::BuildError;

use indexmap::IndexMap;

use crate::core::{MachineConfig, StateConfig};

/// Fluent builder for [`MachineConfig`].
///
/// States are kept in declaration order. [`transition`](Self::transition)
/// declares its source state on demand; destinations must be declared
/// explicitly (with [`state`](Self::state) or as a source elsewhere) or
/// [`build`](Self::build) rejects the configuration.
///
/// # Example
///
/// ```rust
/// use retrace::builder::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .initial("draft")
///     .state("draft")
///     .state("published")
///     .transition("draft", "publish", "published")
///     .transition("published", "retract", "draft")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.initial, "draft");
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    initial: Option<String>,
    states: IndexMap<String, StateConfig>,
}

impl ConfigBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state with no transitions of its own (idempotent).
    pub fn state(mut self, id: impl Into<String>) -> Self {
        self.states.entry(id.into()).or_default();
        self
    }

    /// Add a transition rule, declaring the source state if needed.
    pub fn transition(
        mut self,
        from: impl Into<String>,
        event: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        self.states
            .entry(from.into())
            .or_default()
            .transitions
            .insert(event.into(), to.into());
        self
    }

    /// Build and validate the configuration.
    ///
    /// Fails with [`BuildError::MissingInitialState`] or
    /// [`BuildError::NoStates`] on builder misuse, and with
    /// [`BuildError::Invalid`] when the assembled configuration fails
    /// [`MachineConfig::validate`].
    pub fn build(self) -> Result<MachineConfig, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let config = MachineConfig {
            initial,
            states: self.states,
        };
        config.validate()?;
        Ok(config)
    }
}
