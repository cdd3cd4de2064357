//! Package Location
//!
//! Resolves the Trans-ABySS package directory and its `bin` directory.
//!
//! # Resolution Priority
//!
//! 1. `TRANSABYSS_PACKAGE_DIR` environment variable
//! 2. The directory above the one holding the running executable, which is
//!    expected to be installed as `{package}/bin/{exe}`

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use once_cell::sync::Lazy;

/// Environment variable overriding the package directory.
pub const PACKAGE_DIR_ENV: &str = "TRANSABYSS_PACKAGE_DIR";

/// Name of the binary directory inside the package.
pub const BIN_DIR_NAME: &str = "bin";

/// Process-wide package paths, resolved on first use.
static PACKAGE_PATHS: Lazy<PackagePaths> = Lazy::new(|| match PackagePaths::discover() {
    Ok(paths) => {
        debug!("Package directory: {}", paths.package_dir.display());
        paths
    }
    Err(e) => {
        warn!("Could not locate the package directory: {}", e);
        warn!("  Falling back to the current directory");
        PackagePaths::new(".")
    }
});

/// The package root and its binary directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagePaths {
    /// Root of the installed package
    pub package_dir: PathBuf,
    /// `{package_dir}/bin`
    pub bin_dir: PathBuf,
}

impl PackagePaths {
    /// Creates the path pair rooted at `package_dir`.
    pub fn new(package_dir: impl Into<PathBuf>) -> Self {
        let package_dir = package_dir.into();
        let bin_dir = package_dir.join(BIN_DIR_NAME);
        Self {
            package_dir,
            bin_dir,
        }
    }

    /// Resolves the package directory for the running process.
    pub fn discover() -> io::Result<Self> {
        if let Some(dir) = env::var_os(PACKAGE_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return Ok(Self::new(dir));
        }

        let exe = env::current_exe()?.canonicalize()?;
        Self::from_executable(&exe).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no package directory above {}", exe.display()),
            )
        })
    }

    /// Derives the package directory from an executable inside `{package}/bin`.
    pub fn from_executable(exe: &Path) -> Option<Self> {
        exe.parent()?.parent().map(Self::new)
    }
}

/// Returns the package paths of the running process.
pub fn package_paths() -> &'static PackagePaths {
    &PACKAGE_PATHS
}
