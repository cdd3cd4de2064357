//! Command-Line Support Module
//!
//! Argument checks shared by the pipeline's command-line tools.
//!
//! - [`actions`]: threshold and path validators for clap arguments

pub mod actions;

pub use actions::{
    absolute_path, path_action, paths_action, threshold_action, ArgAction, Inequality,
    PathAction, PathsAction, ThresholdAction, UsageError,
};
