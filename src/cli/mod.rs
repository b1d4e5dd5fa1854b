//! Command Line Interface (CLI) layer for capimg.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the `detect` and `gen`
//! subcommands. It wires user-provided patterns and flags to the
//! underlying library functionality exposed via `capimg::api`.
//!
//! If you are embedding capimg into another application, prefer the
//! high-level `capimg::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
