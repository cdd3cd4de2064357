//! Environment Pre-flight Check
//!
//! Verifies that the package directories, helper scripts and external
//! executables a pipeline needs are all present. Every check runs and is
//! logged, so one call reports every problem at once.

use std::path::Path;

use log::{info, warn};

use crate::environment::locate::locate_all;
use crate::environment::package::PackagePaths;
use crate::error::UtilError;
use crate::APP_NAME;

/// Checks the runtime environment.
///
/// 1. The package directory exists
/// 2. Its `bin` directory exists
/// 3. Each script in `scripts` is a regular file
/// 4. Each program in `executables` resolves on `PATH`
///
/// # Returns
///
/// `true` only if every check passed. Aborting on failure is left to the
/// caller.
///
/// # Example
///
/// ```rust,no_run
/// use transabyss_utils::environment::{check_env, package_paths};
///
/// let scripts: [&str; 0] = [];
/// if !check_env(package_paths(), &["abyss-pe", "blat"], &scripts) {
///     std::process::exit(1);
/// }
/// ```
pub fn check_env<S, P>(paths: &PackagePaths, executables: &[S], scripts: &[P]) -> bool
where
    S: AsRef<str>,
    P: AsRef<Path>,
{
    let mut okay = true;

    okay &= check_dir(&paths.package_dir, &format!("{} directory", APP_NAME));
    okay &= check_dir(&paths.bin_dir, &format!("{} `bin` directory", APP_NAME));

    for script in scripts {
        let script = script.as_ref();
        if script.is_file() {
            info!("Found script at: {}", script.display());
        } else {
            info!("No such file: {}", script.display());
            okay = false;
        }
    }

    if !executables.is_empty() {
        okay &= check_executables(executables);
    }

    okay
}

fn check_dir(dir: &Path, description: &str) -> bool {
    if dir.is_dir() {
        info!("Found {} at: {}", description, dir.display());
        true
    } else {
        info!("No such directory: {}", dir.display());
        false
    }
}

fn check_executables<S: AsRef<str>>(executables: &[S]) -> bool {
    let (found, missing) = match locate_all(executables) {
        Ok(resolved) => resolved,
        Err(e @ UtilError::PathUnset) => {
            warn!("{}", e);
            let names = executables.iter().map(|s| s.as_ref().to_string()).collect();
            (Default::default(), names)
        }
        Err(e) => {
            warn!("Executable lookup failed: {}", e);
            return false;
        }
    };

    for (program, path) in &found {
        info!("Found `{}' at {}", program, path.display());
    }

    if missing.is_empty() {
        return true;
    }

    info!(
        "The following executables ({}) are not accessible from the PATH environment variable:\n{}",
        missing.len(),
        missing.join("\n")
    );
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const NO_NAMES: [&str; 0] = [];

    fn package_with_bin() -> (tempfile::TempDir, PackagePaths) {
        let temp_dir = tempdir().unwrap();
        let paths = PackagePaths::new(temp_dir.path());
        fs::create_dir(&paths.bin_dir).unwrap();
        (temp_dir, paths)
    }

    #[test]
    fn test_check_env_directories_only() {
        let (_guard, paths) = package_with_bin();
        assert!(check_env(&paths, &NO_NAMES, &NO_NAMES));
    }

    #[test]
    fn test_check_env_missing_bin_dir() {
        let temp_dir = tempdir().unwrap();
        let paths = PackagePaths::new(temp_dir.path());
        assert!(!check_env(&paths, &NO_NAMES, &NO_NAMES));
    }

    #[test]
    fn test_check_env_missing_package_dir() {
        let temp_dir = tempdir().unwrap();
        let paths = PackagePaths::new(temp_dir.path().join("gone"));
        assert!(!check_env(&paths, &NO_NAMES, &NO_NAMES));
    }

    #[test]
    fn test_check_env_scripts() {
        let (_guard, paths) = package_with_bin();
        let script = paths.bin_dir.join("transabyss-merge.py");
        fs::write(&script, "print('ok')\n").unwrap();

        assert!(check_env(&paths, &NO_NAMES, &[&script]));
        assert!(!check_env(
            &paths,
            &NO_NAMES,
            &[script.clone(), paths.bin_dir.join("missing.py")]
        ));
        // A directory is not a script.
        assert!(!check_env(&paths, &NO_NAMES, &[&paths.bin_dir]));
    }

    #[cfg(unix)]
    #[test]
    fn test_check_env_executables() {
        let (_guard, paths) = package_with_bin();

        assert!(check_env(&paths, &["sh"], &NO_NAMES));
        assert!(!check_env(
            &paths,
            &["sh", "definitely-not-a-real-exe-xyz"],
            &NO_NAMES
        ));
    }

    #[test]
    fn test_check_env_is_exhaustive() {
        let temp_dir = tempdir().unwrap();
        let paths = PackagePaths::new(temp_dir.path().join("gone"));

        // Every failing category still yields a single false.
        assert!(!check_env(
            &paths,
            &["definitely-not-a-real-exe-xyz"],
            &[temp_dir.path().join("missing.py")]
        ));
    }
}
