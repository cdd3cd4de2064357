//! Logging Setup
//!
//! All diagnostics go to standard output, one line per message, written and
//! flushed as a whole so they interleave cleanly with the output of the
//! commands being run.

use std::io::Write;

/// Configures the global logger.
///
/// The default level is `info`, or `debug` when `verbose` is set; `RUST_LOG`
/// overrides both. Calling this more than once is harmless: later calls are
/// ignored.
pub fn init(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Stdout)
        .format(|buf, record| match record.level() {
            log::Level::Warn | log::Level::Error => {
                writeln!(buf, "[{}] {}", record.level(), record.args())
            }
            _ => writeln!(buf, "{}", record.args()),
        })
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice() {
        init(false);
        init(true);
        log::info!("logger initialised");
    }
}
