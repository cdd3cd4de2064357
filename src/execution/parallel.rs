//! Parallel Command Execution
//!
//! Runs a batch of strict-mode shell commands on a fixed-size worker pool.
//! Commands execute concurrently, but their results are inspected in
//! submission order: the first failure by index is the one reported, even
//! if a later command failed sooner.
//!
//! On failure the batch is abandoned. Commands that are already running are
//! neither awaited nor killed; commands still queued are skipped.

use std::collections::BTreeMap;
use std::io;
use std::process::ExitStatus;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Arc;

use log::{debug, info};

use crate::error::{Result, UtilError};
use crate::monitoring::{log_elapsed, Timer};

use super::shell::{exit_code, strict_command, strict_process};

/// Default number of commands run at once.
pub const DEFAULT_MAX_PARALLEL: usize = 2;

/// Outcome of one command, tagged with its submission index.
type Completion = (usize, io::Result<ExitStatus>);

/// Runs `cmds` with at most `max_parallel` running at any time.
///
/// A single timer covers the whole batch; its elapsed time is logged when
/// the batch took longer than a few seconds.
///
/// # Arguments
///
/// * `cmds` - Commands in submission order
/// * `max_parallel` - Worker pool size, at least 1
///
/// # Returns
///
/// * `Ok(())` - Every command exited with status 0
/// * `Err(UtilError::CommandFailed)` - The lowest-index failing command
/// * `Err(UtilError::InvalidParallelism)` - `max_parallel` was 0
pub fn run_multi_shell_cmds<S: AsRef<str>>(cmds: &[S], max_parallel: usize) -> Result<()> {
    if max_parallel == 0 {
        return Err(UtilError::InvalidParallelism(max_parallel));
    }

    let timer = Timer::start();

    if cmds.is_empty() {
        return Ok(());
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(max_parallel)
        .thread_name(|i| format!("shell-worker-{}", i))
        .build()?;

    let abort = Arc::new(AtomicBool::new(false));
    let (tx, rx): (Sender<Completion>, Receiver<Completion>) = channel();

    for (index, cmd) in cmds.iter().enumerate() {
        let cmd = cmd.as_ref().to_string();
        let tx = tx.clone();
        let abort = Arc::clone(&abort);

        pool.spawn(move || {
            if abort.load(Ordering::Relaxed) {
                debug!("Skipping command {} after batch failure", index);
                return;
            }

            debug!("Starting command {}: {}", index, cmd);
            let outcome = strict_process(&cmd).status();

            // The receiver is gone once the batch has been abandoned.
            let _ = tx.send((index, outcome));
        });
    }
    drop(tx);

    let result = drain_in_order(cmds, &rx);
    if result.is_err() {
        abort.store(true, Ordering::Relaxed);
        return result;
    }

    log_elapsed(&timer);
    Ok(())
}

/// Consumes completions in submission order, stopping at the first failure.
fn drain_in_order<S: AsRef<str>>(cmds: &[S], rx: &Receiver<Completion>) -> Result<()> {
    let mut pending: BTreeMap<usize, io::Result<ExitStatus>> = BTreeMap::new();

    for (index, cmd) in cmds.iter().enumerate() {
        let outcome = loop {
            if let Some(outcome) = pending.remove(&index) {
                break outcome;
            }
            let (done, outcome) = rx.recv().map_err(|_| UtilError::WorkerLost)?;
            pending.insert(done, outcome);
        };

        let command = strict_command(cmd.as_ref());
        let status = outcome.map_err(|source| UtilError::Spawn {
            command: command.clone(),
            source,
        })?;

        let code = exit_code(status);
        if code != 0 {
            info!("CMD: {}", command);
            info!("ERROR: CMD ended with status code {}", code);
            return Err(UtilError::CommandFailed { command, code });
        }
    }

    Ok(())
}
