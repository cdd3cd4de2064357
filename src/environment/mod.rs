//! Environment Management Module
//!
//! Locates the package installation and the external programs a pipeline
//! depends on, and runs the start-up dependency check.

pub mod check;
pub mod locate;
pub mod package;

pub use check::check_env;
pub use locate::{is_executable, locate, locate_all, locate_in, FoundExecutables};
pub use package::{package_paths, PackagePaths, PACKAGE_DIR_ENV};
