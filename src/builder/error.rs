//! Build errors for configuration construction.

use thiserror::Error;

/// Errors raised by [`ConfigBuilder`](crate::ConfigBuilder) validation.
///
/// Identifiers are carried as their `Debug` renderings so the error type
/// stays independent of the builder's generic parameters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("initial state {0} is not a declared state")]
    UnknownInitialState(String),

    #[error("transition source {0} is not a declared state")]
    UnknownSourceState(String),

    #[error("transition target {0} is not a declared state")]
    UnknownTargetState(String),
}
