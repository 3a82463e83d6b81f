//! Builder API for ergonomic configuration construction.
//!
//! The engine accepts any [`Config`](crate::Config) as-is; this module is
//! where validation lives. [`ConfigBuilder`] checks the assembled graph at
//! build time, and the [`fsm_config!`](crate::fsm_config) macro produces
//! literal configs with minimal boilerplate.

pub mod config;
pub mod error;
pub mod macros;

pub use config::ConfigBuilder;
pub use error::BuildError;
