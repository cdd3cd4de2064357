//! Timing Module
//!
//! Provides the stopwatch used to report how long commands and batches ran.
//!
//! # Components
//!
//! - [`Timer`]: wall-clock stopwatch reporting hours, minutes and seconds

pub mod timer;

pub use timer::{convert_hms, log_elapsed, should_report, Timer};
