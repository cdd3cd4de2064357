//! Trans-ABySS Utilities CLI Entry Point
//!
//! Exposes the shared pipeline helpers as subcommands, mainly for shell
//! scripts and for checking an installation.
//!
//! # Usage
//!
//! ```bash
//! # Verify the installation and required programs
//! transabyss-utils check-env --exe abyss-pe --exe blat
//!
//! # Run a command in bash strict mode
//! transabyss-utils run 'abyss-pe k=25 name=k25 in=reads.fa'
//!
//! # Run several commands, two at a time
//! transabyss-utils run-parallel --max-parallel 2 'gzip a.fa' 'gzip b.fa' 'gzip c.fa'
//!
//! # Check that an output has at least 2 non-blank lines
//! transabyss-utils is-empty --min-lines 2 k25-contigs.fa
//! ```

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use log::{error, warn};

use transabyss_utils::cli::{path_action, paths_action, threshold_action};
use transabyss_utils::environment::{check_env, locate_all, package_paths};
use transabyss_utils::execution::{run_multi_shell_cmds, run_shell_cmd, DEFAULT_MAX_PARALLEL};
use transabyss_utils::files::{is_empty_txt, touch, DEFAULT_MIN_NON_EMPTY_LINES};
use transabyss_utils::{logging, Result, UtilError, APP_NAME, SUPPORT_INFO, VERSION};

/// Shared shell, file and environment utilities for Trans-ABySS pipelines.
#[derive(Parser, Debug)]
#[command(name = "transabyss-utils", version, about)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check package directories, scripts and required executables
    CheckEnv {
        /// Executable that must be found on PATH
        #[arg(long = "exe", value_name = "NAME")]
        executables: Vec<String>,

        /// Script file that must exist
        #[arg(long = "script", value_name = "PATH", value_parser = paths_action(false))]
        scripts: Vec<PathBuf>,
    },

    /// Run one command in bash strict mode
    Run {
        /// Shell command
        command: String,
    },

    /// Run several commands in bash strict mode on a worker pool
    RunParallel {
        /// Maximum number of commands running at once
        #[arg(
            long,
            default_value_t = DEFAULT_MAX_PARALLEL,
            value_parser = threshold_action(1usize, ">=")
        )]
        max_parallel: usize,

        /// Shell commands, checked in the given order
        #[arg(required = true)]
        commands: Vec<String>,
    },

    /// Print whether a text file has fewer non-blank lines than required
    IsEmpty {
        /// Text file to inspect
        #[arg(value_parser = path_action(true))]
        file: PathBuf,

        /// Minimum number of non-blank lines
        #[arg(
            long,
            default_value_t = DEFAULT_MIN_NON_EMPTY_LINES,
            value_parser = threshold_action(1usize, ">=")
        )]
        min_lines: usize,
    },

    /// Create files or update their timestamps
    Touch {
        /// Files to touch
        #[arg(required = true, value_parser = paths_action(false))]
        paths: Vec<PathBuf>,
    },

    /// Locate executables on PATH
    Which {
        /// Program names or paths
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Print version and support information
    Info,
}

/// Runs a subcommand and returns the process exit status.
fn run(command: Commands) -> Result<i32> {
    match command {
        Commands::CheckEnv {
            executables,
            scripts,
        } => {
            let okay = check_env(package_paths(), &executables, &scripts);
            Ok(if okay { 0 } else { 1 })
        }
        Commands::Run { command } => {
            run_shell_cmd(&command)?;
            Ok(0)
        }
        Commands::RunParallel {
            max_parallel,
            commands,
        } => {
            run_multi_shell_cmds(&commands, max_parallel)?;
            Ok(0)
        }
        Commands::IsEmpty { file, min_lines } => {
            println!("{}", is_empty_txt(&file, min_lines)?);
            Ok(0)
        }
        Commands::Touch { paths } => {
            for path in &paths {
                touch(path, None)?;
            }
            Ok(0)
        }
        Commands::Which { names } => {
            let (found, missing) = locate_all(&names)?;
            for (name, path) in &found {
                println!("{}\t{}", name, path.display());
            }
            for name in &missing {
                warn!("{}: not found", name);
            }
            Ok(if missing.is_empty() { 0 } else { 1 })
        }
        Commands::Info => {
            println!("{} {}", APP_NAME, VERSION);
            print!("{}", SUPPORT_INFO);
            Ok(0)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let code = match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            // The runners have already logged failed commands.
            if !matches!(e, UtilError::CommandFailed { .. }) {
                error!("{}", e);
            }
            e.exit_code()
        }
    };

    process::exit(code);
}
