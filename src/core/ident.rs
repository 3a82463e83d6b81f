//! Identifier traits for states and events.
//!
//! States and events are opaque, comparable identifiers: short strings,
//! enums, interned symbols. The engine never inspects them beyond equality
//! and hashing, so the traits are blanket-implemented markers rather than
//! behavior-carrying interfaces.

use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Identifier for a state in the transition graph.
///
/// Any cloneable, hashable, serializable value qualifies; `String` and
/// derive-annotated enums are the common choices.
///
/// # Example
///
/// ```rust
/// use serde::{Deserialize, Serialize};
/// use waypoint::StateId;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Phase {
///     Draft,
///     Published,
/// }
///
/// fn assert_state_id<S: StateId>() {}
/// assert_state_id::<Phase>();
/// assert_state_id::<String>();
/// ```
pub trait StateId:
    Clone + Eq + Hash + Debug + Serialize + DeserializeOwned + Send + Sync
{
}

impl<T> StateId for T where
    T: Clone + Eq + Hash + Debug + Serialize + DeserializeOwned + Send + Sync
{
}

/// Identifier for an event that triggers a transition.
///
/// Same requirements as [`StateId`]; the two traits exist separately so
/// signatures say which kind of identifier they expect.
pub trait EventId:
    Clone + Eq + Hash + Debug + Serialize + DeserializeOwned + Send + Sync
{
}

impl<T> EventId for T where
    T: Clone + Eq + Hash + Debug + Serialize + DeserializeOwned + Send + Sync
{
}
