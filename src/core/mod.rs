//! Core engine types.
//!
//! This module contains the engine itself and the data it owns:
//! - Identifier traits for states and events
//! - The declarative configuration shape
//! - The navigable visited-state timeline
//! - The [`Fsm`] engine tying them together
//!
//! Every operation here is a synchronous in-memory mutation; nothing in
//! this module performs I/O.

mod config;
mod engine;
mod error;
mod history;
mod ident;

pub use config::{Config, StateNode};
pub use engine::Fsm;
pub use error::FsmError;
pub use history::Timeline;
pub use ident::{EventId, StateId};
