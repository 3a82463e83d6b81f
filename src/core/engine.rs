//! The FSM engine: active state, immutable configuration, navigable history.

use crate::core::config::Config;
use crate::core::error::FsmError;
use crate::core::history::Timeline;
use crate::core::ident::{EventId, StateId};
use std::borrow::Borrow;
use std::hash::Hash;

/// Finite-state-machine engine with linear undo/redo navigation.
///
/// The engine owns three pieces of state: the active state identifier, the
/// configuration supplied at construction (read-only thereafter), and the
/// [`Timeline`] of visited states. All operations are synchronous in-memory
/// mutations; sharing one engine across threads requires external
/// serialization, which `&mut self` receivers already enforce.
///
/// # Example
///
/// ```rust
/// use waypoint::{Config, Fsm, fsm_config};
///
/// let config: Config<String, String> = fsm_config! {
///     initial: "off",
///     states: {
///         "off" => { "toggle" => "on" },
///         "on" => { "toggle" => "off" },
///     }
/// };
///
/// let mut fsm = Fsm::new(config);
/// fsm.trigger("toggle")?;
/// assert_eq!(fsm.state(), "on");
///
/// assert!(fsm.undo());
/// assert_eq!(fsm.state(), "off");
/// assert!(fsm.redo());
/// assert_eq!(fsm.state(), "on");
/// # Ok::<(), waypoint::FsmError<String, String>>(())
/// ```
#[derive(Clone, Debug)]
pub struct Fsm<S: StateId, E: EventId> {
    config: Config<S, E>,
    active: S,
    timeline: Timeline<S>,
}

impl<S: StateId, E: EventId> Fsm<S, E> {
    /// Create an engine in the configured initial state.
    ///
    /// The configuration is taken as given: `initial` is not checked
    /// against the state map here. An inconsistent config surfaces as
    /// [`FsmError::InvalidState`] on the first `trigger`.
    pub fn new(config: Config<S, E>) -> Self {
        let active = config.initial.clone();
        let timeline = Timeline::new(config.initial.clone());
        Self {
            config,
            active,
            timeline,
        }
    }

    /// The active state identifier.
    pub fn state(&self) -> &S {
        &self.active
    }

    /// Move directly to `state`.
    ///
    /// Fails with [`FsmError::InvalidState`] when `state` is not a
    /// configured key, leaving the engine untouched. On success the
    /// abandoned redo branch (if any) is discarded, the new state is
    /// appended to the history, and the cursor lands on it.
    pub fn change_state(&mut self, state: S) -> Result<(), FsmError<S, E>> {
        if !self.config.states.contains_key(&state) {
            return Err(FsmError::InvalidState(state));
        }
        self.timeline.push(state.clone());
        self.active = state;
        Ok(())
    }

    /// Dispatch `event` in the active state.
    ///
    /// Fails with [`FsmError::InvalidEvent`] when the active state's
    /// transition table has no entry for `event`; otherwise equivalent to
    /// [`change_state`](Self::change_state) on the mapped target.
    ///
    /// # Example
    ///
    /// ```rust
    /// use waypoint::{Config, Fsm, FsmError, fsm_config};
    ///
    /// let config: Config<String, String> = fsm_config! {
    ///     initial: "off",
    ///     states: {
    ///         "off" => { "toggle" => "on" },
    ///         "on" => { "toggle" => "off" },
    ///     }
    /// };
    /// let mut fsm = Fsm::new(config);
    ///
    /// assert!(fsm.trigger("toggle").is_ok());
    /// assert!(matches!(fsm.trigger("launch"), Err(FsmError::InvalidEvent(_))));
    /// ```
    pub fn trigger<Q>(&mut self, event: &Q) -> Result<(), FsmError<S, E>>
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = E> + ?Sized,
    {
        let node = self
            .config
            .states
            .get(&self.active)
            .ok_or_else(|| FsmError::InvalidState(self.active.clone()))?;
        let target = node
            .transitions
            .get(event)
            .cloned()
            .ok_or_else(|| FsmError::InvalidEvent(event.to_owned()))?;
        self.change_state(target)
    }

    /// Set the active state back to the configured initial state.
    ///
    /// History, cursor, and availability are untouched; pair with
    /// [`clear_history`](Self::clear_history) for a full session reset.
    pub fn reset(&mut self) {
        self.active = self.config.initial.clone();
    }

    /// All configured state identifiers, in no particular order.
    pub fn states(&self) -> Vec<&S> {
        self.config.states.keys().collect()
    }

    /// States from which `event` is a valid trigger, in no particular order.
    pub fn states_for<Q>(&self, event: &Q) -> Vec<&S>
    where
        E: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.config
            .states
            .iter()
            .filter(|(_, node)| node.transitions.contains_key(event))
            .map(|(state, _)| state)
            .collect()
    }

    /// Step back to the previously visited state.
    ///
    /// Returns `false` without mutation when already at the earliest
    /// recorded state.
    pub fn undo(&mut self) -> bool {
        match self.timeline.back() {
            Some(state) => {
                self.active = state.clone();
                true
            }
            None => false,
        }
    }

    /// Step forward to the next recorded state.
    ///
    /// Returns `false` without mutation when already at the latest
    /// recorded state.
    pub fn redo(&mut self) -> bool {
        match self.timeline.forward() {
            Some(state) => {
                self.active = state.clone();
                true
            }
            None => false,
        }
    }

    /// Whether [`undo`](Self::undo) would move the active state.
    pub fn can_undo(&self) -> bool {
        self.timeline.can_back()
    }

    /// Whether [`redo`](Self::redo) would move the active state.
    pub fn can_redo(&self) -> bool {
        self.timeline.can_forward()
    }

    /// Reset the history to a single entry holding the configured initial
    /// state, with the cursor at 0 and no undo/redo available.
    ///
    /// The active state is deliberately left alone, so after navigating
    /// elsewhere it may diverge from `history()[0]` until the next forward
    /// transition. Callers wanting full reinitialization call
    /// [`reset`](Self::reset) as well.
    pub fn clear_history(&mut self) {
        self.timeline.reset(self.config.initial.clone());
    }

    /// The visited-state path in visitation order.
    pub fn history(&self) -> &[S] {
        self.timeline.entries()
    }

    /// Index of the active position within [`history`](Self::history).
    pub fn cursor(&self) -> usize {
        self.timeline.cursor()
    }

    /// The configuration supplied at construction.
    pub fn config(&self) -> &Config<S, E> {
        &self.config
    }
}
