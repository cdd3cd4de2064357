//! Trans-ABySS Pipeline Utilities
//!
//! Shared helpers for the Trans-ABySS command-line tools: running external
//! assembly tools through bash, timing them, checking intermediate files,
//! validating command-line arguments, and verifying the runtime environment
//! before a pipeline starts.
//!
//! # Architecture
//!
//! - [`execution`]: strict-mode shell commands, serial and parallel
//! - [`monitoring`]: elapsed-time stopwatch
//! - [`files`]: non-blank line checks and `touch`
//! - [`cli`]: argument validators for clap
//! - [`environment`]: package paths, executable lookup, pre-flight check
//!
//! Helpers report failures as [`UtilError`]; only the outermost entry point
//! terminates the process, using [`UtilError::exit_code`].
//!
//! # Example
//!
//! ```rust,no_run
//! use transabyss_utils::environment::{check_env, package_paths};
//! use transabyss_utils::execution::run_multi_shell_cmds;
//!
//! fn main() {
//!     transabyss_utils::logging::init(false);
//!
//!     let scripts: [&str; 0] = [];
//!     if !check_env(package_paths(), &["abyss-pe"], &scripts) {
//!         std::process::exit(1);
//!     }
//!
//!     let cmds = ["abyss-pe k=25 name=k25 in=reads.fa", "abyss-pe k=32 name=k32 in=reads.fa"];
//!     if let Err(e) = run_multi_shell_cmds(&cmds, 2) {
//!         std::process::exit(e.exit_code());
//!     }
//! }
//! ```

pub mod cli;
pub mod environment;
pub mod error;
pub mod execution;
pub mod files;
pub mod logging;
pub mod monitoring;

// Re-export commonly used items
pub use environment::{check_env, locate, locate_all, package_paths, PackagePaths};
pub use error::{Result, UtilError};
pub use execution::{run_multi_shell_cmds, run_shell_cmd};
pub use files::{is_empty_txt, touch};
pub use monitoring::Timer;

/// Package version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name
pub const APP_NAME: &str = "Trans-ABySS";

/// Authorship and bug-report information
pub const SUPPORT_INFO: &str = "\
Written by Ka Ming Nip.
Copyright 2014 Canada's Michael Smith Genome Sciences Centre
Report bugs to <trans-abyss@googlegroups.com>
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_version() {
        assert_eq!(VERSION, "1.5.2");
    }

    #[test]
    fn test_app_name() {
        assert_eq!(APP_NAME, "Trans-ABySS");
    }

    #[test]
    fn test_support_info_lines() {
        let lines: Vec<&str> = SUPPORT_INFO.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Written by "));
        assert_eq!(lines[2], "Report bugs to <trans-abyss@googlegroups.com>");
        assert!(SUPPORT_INFO.ends_with('\n'));
    }
}
