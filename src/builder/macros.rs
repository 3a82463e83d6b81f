//! Macros for declarative configuration literals.

/// Build a [`Config`](crate::Config) from a declarative literal mirroring
/// the configuration shape: an initial state plus per-state transition
/// tables.
///
/// Every identifier expression goes through `Into`, so string literals
/// work for `String`-keyed configs. The target type usually needs an
/// annotation at the binding site.
///
/// # Example
///
/// ```rust
/// use waypoint::{fsm_config, Config};
///
/// let config: Config<String, String> = fsm_config! {
///     initial: "draft",
///     states: {
///         "draft" => { "submit" => "review" },
///         "review" => { "approve" => "published", "reject" => "draft" },
///         "published" => {},
///     }
/// };
///
/// assert_eq!(config.initial, "draft");
/// assert_eq!(config.states.len(), 3);
/// ```
#[macro_export]
macro_rules! fsm_config {
    (
        initial: $initial:expr,
        states: {
            $(
                $state:expr => { $( $event:expr => $target:expr ),* $(,)? }
            ),* $(,)?
        } $(,)?
    ) => {{
        let mut states = ::std::collections::HashMap::new();
        $(
            #[allow(unused_mut)]
            let mut node = $crate::StateNode::new();
            $(
                node = node.on($event.into(), $target.into());
            )*
            states.insert($state.into(), node);
        )*
        $crate::Config {
            initial: $initial.into(),
            states,
        }
    }};
}

#[cfg(test)]
mod tests {
    use crate::core::{Config, StateNode};
    use std::collections::HashMap;

    #[test]
    fn macro_matches_hand_built_config() {
        let from_macro: Config<String, String> = fsm_config! {
            initial: "off",
            states: {
                "off" => { "toggle" => "on" },
                "on" => { "toggle" => "off" },
            }
        };

        let mut states = HashMap::new();
        states.insert(
            "off".to_string(),
            StateNode::new().on("toggle".to_string(), "on".to_string()),
        );
        states.insert(
            "on".to_string(),
            StateNode::new().on("toggle".to_string(), "off".to_string()),
        );
        let by_hand = Config {
            initial: "off".to_string(),
            states,
        };

        assert_eq!(from_macro, by_hand);
    }

    #[test]
    fn macro_accepts_empty_transition_tables() {
        let config: Config<String, String> = fsm_config! {
            initial: "done",
            states: {
                "done" => {},
            }
        };

        assert!(config.states["done"].transitions.is_empty());
    }
}
