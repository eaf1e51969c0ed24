//! Build errors for the configuration builder.

use thiserror::Error;

use crate::error::FsmError;

/// Errors that can occur when building a machine configuration.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No states defined. Declare at least one state")]
    NoStates,

    /// The assembled configuration failed validation.
    #[error(transparent)]
    Invalid(#[from] FsmError),
}
