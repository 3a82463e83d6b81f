//! Waypoint: a finite state machine engine with linear undo/redo history.
//!
//! Waypoint tracks an active state against a declarative, immutable
//! transition table, and keeps a navigable history of every state reached
//! through a forward transition. Consumers (UI widgets, workflow steps,
//! protocol stubs) embed the engine instead of hand-rolling state tracking.
//!
//! # Core Concepts
//!
//! - **Config**: the initial state plus per-state event → target tables,
//!   supplied once and read-only thereafter
//! - **Forward transitions**: `change_state` and `trigger`, which append to
//!   the history and discard any abandoned redo branch
//! - **Navigation**: `undo`/`redo` move a cursor over the visited path
//!   without rewriting it
//!
//! # Example
//!
//! ```rust
//! use waypoint::{fsm_config, Config, Fsm};
//!
//! let config: Config<String, String> = fsm_config! {
//!     initial: "off",
//!     states: {
//!         "off" => { "toggle" => "on" },
//!         "on" => { "toggle" => "off" },
//!     }
//! };
//!
//! let mut fsm = Fsm::new(config);
//!
//! fsm.trigger("toggle")?;
//! fsm.trigger("toggle")?;
//! assert_eq!(fsm.state(), "off");
//!
//! assert!(fsm.undo());
//! assert_eq!(fsm.state(), "on");
//! assert!(fsm.undo());
//! assert_eq!(fsm.state(), "off");
//! assert!(!fsm.undo());
//! # Ok::<(), waypoint::FsmError<String, String>>(())
//! ```
//!
//! The engine performs no I/O and runs every operation synchronously;
//! sharing one instance across threads requires external serialization,
//! which the `&mut self` receivers already enforce.

pub mod builder;
pub mod core;

// Re-export commonly used types
pub use builder::{BuildError, ConfigBuilder};
pub use core::{Config, EventId, Fsm, FsmError, StateId, StateNode, Timeline};
