//! Elapsed Time Measurement
//!
//! A stopwatch that reports wall-clock time as whole hours, minutes and
//! seconds, used by the command runners to report long-running commands.

use std::time::{Duration, Instant};

use log::info;

/// Commands finishing within this many seconds are not reported.
const REPORT_THRESHOLD_SECS: u64 = 5;

/// A stopwatch started at construction.
#[derive(Debug, Clone)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Creates a timer that starts immediately.
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Returns the elapsed time since creation.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Returns the elapsed time as `(hours, minutes, seconds)`.
    pub fn stop(&self) -> (u64, u64, u64) {
        convert_hms(self.elapsed())
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::start()
    }
}

/// Splits a duration into `(hours, minutes, seconds)`.
///
/// Sub-second precision is floored away, so
/// `h * 3600 + m * 60 + s == duration.as_secs()`.
pub fn convert_hms(duration: Duration) -> (u64, u64, u64) {
    let total = duration.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    (hours, minutes, seconds)
}

/// Whether an elapsed time is long enough to be worth logging.
pub fn should_report((hours, minutes, seconds): (u64, u64, u64)) -> bool {
    hours > 0 || minutes > 0 || seconds > REPORT_THRESHOLD_SECS
}

/// Logs the elapsed time of `timer` if it exceeds the report threshold.
pub fn log_elapsed(timer: &Timer) {
    let hms = timer.stop();
    if should_report(hms) {
        let (h, m, s) = hms;
        info!("Elapsed time: {} h {} m {} s", h, m, s);
    }
}
