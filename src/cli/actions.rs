//! Argument Validation Actions
//!
//! Reusable checks for command-line arguments. Each factory returns a value
//! that can be registered on a clap argument with `value_parser(...)`; a
//! failed check is reported as a usage error, and clap prints it with the
//! usage line and exits.
//!
//! # Example
//!
//! ```rust
//! use clap::{Arg, Command};
//! use transabyss_utils::cli::{path_action, threshold_action};
//!
//! let cmd = Command::new("transabyss")
//!     .arg(Arg::new("kmer").long("kmer").value_parser(threshold_action(1u32, ">=")))
//!     .arg(Arg::new("outdir").long("outdir").value_parser(path_action(false)));
//!
//! let matches = cmd.try_get_matches_from(["transabyss", "--kmer", "32"]).unwrap();
//! assert_eq!(matches.get_one::<u32>("kmer"), Some(&32));
//! ```

use std::env;
use std::ffi::OsStr;
use std::fmt::Display;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

use clap::builder::TypedValueParser;
use clap::error::ErrorKind;
use thiserror::Error;

/// A rejected argument value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct UsageError {
    /// Option the value was given for, when known
    pub option: Option<String>,
    /// Human-readable description of the problem
    pub message: String,
}

impl UsageError {
    fn new(option: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            option: option.map(str::to_string),
            message: message.into(),
        }
    }

    /// Converts into a clap usage error for `cmd`.
    pub fn into_clap(self, cmd: &clap::Command) -> clap::Error {
        cmd.clone().error(ErrorKind::ValueValidation, self.message)
    }
}

/// Validates and transforms one argument value.
pub trait ArgAction {
    /// Value handed over by the parser
    type Value;
    /// Value stored once validation succeeds
    type Output;

    /// Checks `value` given for `option`.
    fn apply(&self, option: Option<&str>, value: Self::Value) -> Result<Self::Output, UsageError>;
}

/// Comparison a numeric argument must satisfy against its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inequality {
    /// `>=`
    AtLeast,
    /// `>`
    Above,
    /// `<`
    Below,
    /// `<=`
    AtMost,
}

impl Inequality {
    /// Operator as written on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AtLeast => ">=",
            Self::Above => ">",
            Self::Below => "<",
            Self::AtMost => "<=",
        }
    }

    /// Whether `value OP threshold` holds.
    pub fn holds<T: PartialOrd>(&self, value: &T, threshold: &T) -> bool {
        match self {
            Self::AtLeast => value >= threshold,
            Self::Above => value > threshold,
            Self::Below => value < threshold,
            Self::AtMost => value <= threshold,
        }
    }
}

impl FromStr for Inequality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ">=" => Ok(Self::AtLeast),
            ">" => Ok(Self::Above),
            "<" => Ok(Self::Below),
            "<=" => Ok(Self::AtMost),
            other => Err(format!("unknown inequality '{}'", other)),
        }
    }
}

impl Display for Inequality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numeric bound check created by [`threshold_action`].
#[derive(Debug, Clone)]
pub struct ThresholdAction<T> {
    threshold: T,
    inequality: String,
}

/// Creates a check requiring `value INEQUALITY threshold`.
///
/// `inequality` is one of `>=`, `>`, `<` or `<=`. An unknown operator is
/// reported as a usage error when the argument is parsed.
pub fn threshold_action<T>(threshold: T, inequality: &str) -> ThresholdAction<T> {
    ThresholdAction {
        threshold,
        inequality: inequality.to_string(),
    }
}

impl<T: PartialOrd + Display> ArgAction for ThresholdAction<T> {
    type Value = T;
    type Output = T;

    fn apply(&self, option: Option<&str>, value: T) -> Result<T, UsageError> {
        let name = option.unwrap_or("argument");

        let Ok(inequality) = self.inequality.parse::<Inequality>() else {
            return Err(UsageError::new(
                option,
                format!(
                    "cannot evaluate inequality '{} {} {}' for option '{}'",
                    value, self.inequality, self.threshold, name
                ),
            ));
        };

        if !inequality.holds(&value, &self.threshold) {
            return Err(UsageError::new(
                option,
                format!(
                    "value {} for '{}' must be {} {}",
                    value, name, inequality, self.threshold
                ),
            ));
        }

        Ok(value)
    }
}

impl<T> TypedValueParser for ThresholdAction<T>
where
    T: FromStr + PartialOrd + Display + Clone + Send + Sync + 'static,
    <T as FromStr>::Err: Display,
{
    type Value = T;

    fn parse_ref(
        &self,
        cmd: &clap::Command,
        arg: Option<&clap::Arg>,
        value: &OsStr,
    ) -> Result<T, clap::Error> {
        let option = arg.map(option_name);
        let raw = value
            .to_str()
            .ok_or_else(|| clap::Error::new(ErrorKind::InvalidUtf8).with_cmd(cmd))?;

        let parsed = raw.trim().parse::<T>().map_err(|e| {
            UsageError::new(
                option.as_deref(),
                format!(
                    "invalid value '{}' for '{}': {}",
                    raw,
                    option.as_deref().unwrap_or("argument"),
                    e
                ),
            )
            .into_clap(cmd)
        })?;

        self.apply(option.as_deref(), parsed)
            .map_err(|e| e.into_clap(cmd))
    }
}

/// Single path check created by [`path_action`].
#[derive(Debug, Clone, Copy)]
pub struct PathAction {
    check_exist: bool,
}

/// Creates a path check that stores the absolute, normalized path.
///
/// With `check_exist`, a path that does not exist is a usage error.
pub fn path_action(check_exist: bool) -> PathAction {
    PathAction { check_exist }
}

impl ArgAction for PathAction {
    type Value = PathBuf;
    type Output = PathBuf;

    fn apply(&self, option: Option<&str>, value: PathBuf) -> Result<PathBuf, UsageError> {
        if self.check_exist && !value.exists() {
            return Err(UsageError::new(
                option,
                format!("No such file or directory {}", value.display()),
            ));
        }

        absolute_path(&value).map_err(|e| {
            UsageError::new(
                option,
                format!("cannot resolve path {}: {}", value.display(), e),
            )
        })
    }
}

impl TypedValueParser for PathAction {
    type Value = PathBuf;

    fn parse_ref(
        &self,
        cmd: &clap::Command,
        arg: Option<&clap::Arg>,
        value: &OsStr,
    ) -> Result<PathBuf, clap::Error> {
        let option = arg.map(option_name);
        self.apply(option.as_deref(), PathBuf::from(value))
            .map_err(|e| e.into_clap(cmd))
    }
}

/// Multiple path check created by [`paths_action`].
#[derive(Debug, Clone, Copy)]
pub struct PathsAction {
    single: PathAction,
}

/// Creates a check applying [`path_action`] to every value of an argument.
///
/// Values are processed in order; the first missing path aborts the rest.
/// Registered with clap, it validates each value as the parser reads it, so
/// combine it with `num_args(1..)` or `clap::ArgAction::Append`.
pub fn paths_action(check_exist: bool) -> PathsAction {
    PathsAction {
        single: path_action(check_exist),
    }
}

impl ArgAction for PathsAction {
    type Value = Vec<PathBuf>;
    type Output = Vec<PathBuf>;

    fn apply(&self, option: Option<&str>, values: Vec<PathBuf>) -> Result<Vec<PathBuf>, UsageError> {
        values
            .into_iter()
            .map(|value| self.single.apply(option, value))
            .collect()
    }
}

impl TypedValueParser for PathsAction {
    type Value = PathBuf;

    fn parse_ref(
        &self,
        cmd: &clap::Command,
        arg: Option<&clap::Arg>,
        value: &OsStr,
    ) -> Result<PathBuf, clap::Error> {
        self.single.parse_ref(cmd, arg, value)
    }
}

/// Returns `path` made absolute against the current directory, with `.`
/// removed and `..` collapsed. Symlinks are not resolved.
pub fn absolute_path(path: &Path) -> io::Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()?.join(path)
    };

    Ok(normalize_lexically(&joined))
}

fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => normalized.push(component),
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root.
                normalized.pop();
            }
            Component::Normal(part) => normalized.push(part),
        }
    }

    normalized
}

fn option_name(arg: &clap::Arg) -> String {
    if let Some(long) = arg.get_long() {
        format!("--{}", long)
    } else if let Some(short) = arg.get_short() {
        format!("-{}", short)
    } else {
        arg.get_id().to_string()
    }
}
