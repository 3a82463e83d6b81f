//! Engine errors.

use std::fmt::Debug;
use thiserror::Error;

/// Errors raised by [`Fsm`](crate::Fsm) operations.
///
/// Every failure is surfaced at the offending call with no partial
/// mutation; the engine stays in its prior valid state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FsmError<S: Debug, E: Debug> {
    /// The requested state identifier is not a key of the configured
    /// state set.
    #[error("state {0:?} is not configured")]
    InvalidState(S),

    /// The dispatched event is not a valid trigger in the active state.
    #[error("event {0:?} is not valid in the current state")]
    InvalidEvent(E),
}
