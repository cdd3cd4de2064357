//! Single Command Execution
//!
//! Runs one shell command in bash strict mode:
//! - `-e` aborts on the first failing statement
//! - `-u` treats unset variables as errors
//! - `-o pipefail` fails a pipeline when any stage fails
//!
//! The command is handed to bash as a single argument, so quotes inside it
//! need no escaping.

use std::process::{Command, ExitStatus};

use log::info;

use crate::error::{Result, UtilError};
use crate::monitoring::{log_elapsed, Timer};

/// Shell used for every command.
pub const SHELL: &str = "bash";

/// Strict-mode flags passed to [`SHELL`] ahead of `-c`.
pub const STRICT_FLAGS: &[&str] = &["-euo", "pipefail"];

/// Returns the strict-mode invocation of `cmd` as it is logged.
pub fn strict_command(cmd: &str) -> String {
    format!("{} {} -c '{}'", SHELL, STRICT_FLAGS.join(" "), cmd)
}

/// Builds the process for running `cmd` in strict mode.
///
/// Standard streams are inherited from the caller.
pub(crate) fn strict_process(cmd: &str) -> Command {
    let mut process = Command::new(SHELL);
    process.args(STRICT_FLAGS).arg("-c").arg(cmd);
    process
}

/// Runs `cmd` in strict mode and waits for it to finish.
///
/// The strict-mode command line is logged before execution, and the elapsed
/// time afterwards when the command took longer than a few seconds.
///
/// # Returns
///
/// * `Ok(())` - The command exited with status 0
/// * `Err(UtilError::CommandFailed)` - The command exited non-zero; its
///   status is available through [`UtilError::exit_code`]
/// * `Err(UtilError::Spawn)` - bash could not be started
pub fn run_shell_cmd(cmd: &str) -> Result<()> {
    let command = strict_command(cmd);
    info!("CMD: {}", command);

    let timer = Timer::start();
    let status = strict_process(cmd)
        .status()
        .map_err(|source| UtilError::Spawn {
            command: command.clone(),
            source,
        })?;
    log_elapsed(&timer);

    let code = exit_code(status);
    if code != 0 {
        info!("ERROR: CMD ended with status code {}", code);
        return Err(UtilError::CommandFailed { command, code });
    }

    Ok(())
}

/// Maps a process status to the exit code a shell would report.
///
/// A process killed by signal `N` reports `128 + N`.
pub(crate) fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
