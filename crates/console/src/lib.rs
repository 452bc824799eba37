//! Terminal host for the chess rules engine.
//!
//! Drives one session from a line-oriented input, answers for one side with
//! an engine when configured, and runs engine-versus-engine self-play.

mod config;
mod repl;
mod selfplay;

pub use config::*;
pub use repl::*;
pub use selfplay::*;
