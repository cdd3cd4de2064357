//! Command Execution Module
//!
//! Runs external pipeline tools through bash in strict mode, either one at a
//! time or as a bounded-concurrency batch.
//!
//! # Architecture
//!
//! - [`shell`]: single synchronous command
//! - [`parallel`]: batch execution on a fixed-size worker pool

pub mod parallel;
pub mod shell;

pub use parallel::{run_multi_shell_cmds, DEFAULT_MAX_PARALLEL};
pub use shell::{run_shell_cmd, strict_command};
