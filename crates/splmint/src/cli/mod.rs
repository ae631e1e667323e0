//! # CLI Layer
//!
//! One possible UI client for splmint. This is the only place that knows about
//! stdout/stderr, exit codes and argument parsing.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `commands`: Context wiring and per-command handlers
//! - `render`: Colored output of command messages

mod commands;
mod render;
pub mod setup;

pub use commands::run;
