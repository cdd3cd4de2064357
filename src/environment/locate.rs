//! Executable Lookup
//!
//! A `which` for pipeline dependencies: resolves program names against the
//! `PATH` search list, in order, first match wins.

use std::collections::BTreeMap;
use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Result, UtilError};

/// Programs found on the search path, by name.
pub type FoundExecutables = BTreeMap<String, PathBuf>;

/// Checks whether `path` is a regular file the process may execute.
///
/// On unix the kernel decides, checking execute permission for the
/// effective user; symlinks are followed.
pub fn is_executable(path: impl AsRef<Path>) -> bool {
    let Ok(metadata) = path.as_ref().metadata() else {
        return false;
    };

    if !metadata.is_file() {
        return false;
    }

    #[cfg(unix)]
    {
        use rustix::fs::{accessat, Access, AtFlags, CWD};
        accessat(CWD, path.as_ref(), Access::EXEC_OK, AtFlags::EACCESS).is_ok()
    }

    #[cfg(not(unix))]
    {
        true
    }
}

/// Resolves `program` against the `PATH` environment variable.
///
/// # Returns
///
/// * `Ok(Some(path))` - The first executable match
/// * `Ok(None)` - No match
/// * `Err(UtilError::PathUnset)` - A search was needed but `PATH` is not set
pub fn locate(program: &str) -> Result<Option<PathBuf>> {
    if has_directory(program) {
        return Ok(check_explicit(program));
    }

    let search_path = env::var_os("PATH").ok_or(UtilError::PathUnset)?;
    Ok(locate_in(program, &search_path))
}

/// Resolves `program` against an explicit `PATH`-style search list.
///
/// A program containing a directory part is checked as given. Otherwise each
/// entry of `search_path` is tried in order, with surrounding double quotes
/// removed.
pub fn locate_in(program: &str, search_path: &OsStr) -> Option<PathBuf> {
    if has_directory(program) {
        return check_explicit(program);
    }

    env::split_paths(search_path)
        .map(|dir| unquote(dir).join(program))
        .find(|candidate| is_executable(candidate))
        .inspect(|found| debug!("Resolved '{}' to {}", program, found.display()))
}

/// Resolves every program, splitting them into found and missing.
///
/// Missing names keep their input order.
pub fn locate_all<S: AsRef<str>>(programs: &[S]) -> Result<(FoundExecutables, Vec<String>)> {
    let mut found = FoundExecutables::new();
    let mut missing = Vec::new();

    for program in programs {
        let program = program.as_ref();
        match locate(program)? {
            Some(path) => {
                found.insert(program.to_string(), path);
            }
            None => missing.push(program.to_string()),
        }
    }

    Ok((found, missing))
}

fn has_directory(program: &str) -> bool {
    Path::new(program)
        .parent()
        .is_some_and(|parent| !parent.as_os_str().is_empty())
}

fn check_explicit(program: &str) -> Option<PathBuf> {
    is_executable(program).then(|| PathBuf::from(program))
}

fn unquote(dir: PathBuf) -> PathBuf {
    match dir.to_str() {
        Some(text) if text.contains('"') => PathBuf::from(text.trim_matches('"')),
        _ => dir,
    }
}
