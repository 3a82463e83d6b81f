//! Fluent builder for engine configurations.

use crate::builder::error::BuildError;
use crate::core::{Config, EventId, StateId, StateNode};
use std::collections::HashMap;

/// Builder that assembles a [`Config`] and validates it at build time.
///
/// The engine itself treats its configuration as given and performs no
/// construction-time validation, so the checks live here: the initial
/// state must be set and declared, and every transition must connect two
/// declared states.
///
/// # Example
///
/// ```rust
/// use waypoint::{Config, Fsm};
///
/// let config: Config<String, String> = Config::builder()
///     .state("off".to_string())
///     .state("on".to_string())
///     .initial("off".to_string())
///     .transition("off".to_string(), "toggle".to_string(), "on".to_string())
///     .transition("on".to_string(), "toggle".to_string(), "off".to_string())
///     .build()?;
///
/// let fsm = Fsm::new(config);
/// assert_eq!(fsm.state(), "off");
/// # Ok::<(), waypoint::BuildError>(())
/// ```
pub struct ConfigBuilder<S: StateId, E: EventId> {
    initial: Option<S>,
    states: Vec<S>,
    transitions: Vec<(S, E, S)>,
}

impl<S: StateId, E: EventId> ConfigBuilder<S, E> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            states: Vec::new(),
            transitions: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Declare a state.
    pub fn state(mut self, state: S) -> Self {
        self.states.push(state);
        self
    }

    /// Declare several states at once.
    pub fn states<I: IntoIterator<Item = S>>(mut self, states: I) -> Self {
        self.states.extend(states);
        self
    }

    /// Record a transition from `from` to `to`, triggered by `event`.
    ///
    /// Both endpoints are checked against the declared states in
    /// [`build`](Self::build), not here.
    pub fn transition(mut self, from: S, event: E, to: S) -> Self {
        self.transitions.push((from, event, to));
        self
    }

    /// Validate and produce the configuration.
    pub fn build(self) -> Result<Config<S, E>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let mut states: HashMap<S, StateNode<S, E>> = self
            .states
            .into_iter()
            .map(|state| (state, StateNode::new()))
            .collect();

        if !states.contains_key(&initial) {
            return Err(BuildError::UnknownInitialState(format!("{initial:?}")));
        }

        for (from, event, to) in self.transitions {
            if !states.contains_key(&to) {
                return Err(BuildError::UnknownTargetState(format!("{to:?}")));
            }
            match states.get_mut(&from) {
                Some(node) => {
                    node.transitions.insert(event, to);
                }
                None => return Err(BuildError::UnknownSourceState(format!("{from:?}"))),
            }
        }

        Ok(Config { initial, states })
    }
}

impl<S: StateId, E: EventId> Default for ConfigBuilder<S, E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_initial_state() {
        let result = ConfigBuilder::<String, String>::new()
            .state("a".to_string())
            .build();

        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn builder_rejects_undeclared_initial() {
        let result = ConfigBuilder::<String, String>::new()
            .state("a".to_string())
            .initial("b".to_string())
            .build();

        assert!(matches!(result, Err(BuildError::UnknownInitialState(_))));
    }

    #[test]
    fn builder_rejects_undeclared_source() {
        let result = ConfigBuilder::<String, String>::new()
            .states(["a".to_string(), "b".to_string()])
            .initial("a".to_string())
            .transition("ghost".to_string(), "go".to_string(), "b".to_string())
            .build();

        assert!(matches!(result, Err(BuildError::UnknownSourceState(_))));
    }

    #[test]
    fn builder_rejects_undeclared_target() {
        let result = ConfigBuilder::<String, String>::new()
            .states(["a".to_string(), "b".to_string()])
            .initial("a".to_string())
            .transition("a".to_string(), "go".to_string(), "ghost".to_string())
            .build();

        assert!(matches!(result, Err(BuildError::UnknownTargetState(_))));
    }

    #[test]
    fn builder_produces_working_config() {
        let config = ConfigBuilder::<String, String>::new()
            .states(["a".to_string(), "b".to_string()])
            .initial("a".to_string())
            .transition("a".to_string(), "go".to_string(), "b".to_string())
            .transition("b".to_string(), "back".to_string(), "a".to_string())
            .build()
            .unwrap();

        assert_eq!(config.initial, "a");
        assert_eq!(config.states["a"].transitions["go"], "b");
        assert_eq!(config.states["b"].transitions["back"], "a");
    }

    #[test]
    fn states_without_transitions_are_allowed() {
        let config = ConfigBuilder::<String, String>::new()
            .states(["a".to_string(), "terminal".to_string()])
            .initial("a".to_string())
            .transition("a".to_string(), "end".to_string(), "terminal".to_string())
            .build()
            .unwrap();

        assert!(config.states["terminal"].transitions.is_empty());
    }
}
