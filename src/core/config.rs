//! Declarative FSM configuration.
//!
//! A [`Config`] names the initial state and maps every state identifier to
//! its transition table. The engine treats the configuration as read-only
//! for its whole lifetime; the types here are plain data, and the serde
//! derives exist so callers can produce configs from whatever format they
//! like before handing them over.

use crate::builder::ConfigBuilder;
use crate::core::ident::{EventId, StateId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Transition table for a single state: event identifier → target state.
///
/// # Example
///
/// ```rust
/// use waypoint::StateNode;
///
/// let node: StateNode<String, String> = StateNode::new()
///     .on("toggle".to_string(), "on".to_string());
///
/// assert_eq!(node.transitions.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateNode<S: StateId, E: EventId> {
    /// Events valid in this state, each naming its target state.
    pub transitions: HashMap<E, S>,
}

impl<S: StateId, E: EventId> StateNode<S, E> {
    /// Create a node with an empty transition table.
    pub fn new() -> Self {
        Self {
            transitions: HashMap::new(),
        }
    }

    /// Add a transition, returning the updated node.
    pub fn on(mut self, event: E, target: S) -> Self {
        self.transitions.insert(event, target);
        self
    }
}

impl<S: StateId, E: EventId> Default for StateNode<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete engine configuration: the initial state plus the state map.
///
/// The engine does not validate that `initial` is a key of `states`;
/// supplying a consistent config is the caller's responsibility. Use
/// [`ConfigBuilder`] (or the [`fsm_config!`](crate::fsm_config) macro)
/// when build-time validation is wanted.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use waypoint::{Config, StateNode};
///
/// let mut states = HashMap::new();
/// states.insert(
///     "off".to_string(),
///     StateNode::new().on("toggle".to_string(), "on".to_string()),
/// );
/// states.insert(
///     "on".to_string(),
///     StateNode::new().on("toggle".to_string(), "off".to_string()),
/// );
///
/// let config = Config { initial: "off".to_string(), states };
/// assert_eq!(config.states.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Config<S: StateId, E: EventId> {
    /// Identifier of the starting state.
    pub initial: S,
    /// Mapping from state identifier to its transition table.
    pub states: HashMap<S, StateNode<S, E>>,
}

impl<S: StateId, E: EventId> Config<S, E> {
    /// Start a validated fluent construction.
    pub fn builder() -> ConfigBuilder<S, E> {
        ConfigBuilder::new()
    }
}
