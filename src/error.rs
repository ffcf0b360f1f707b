//! Error types for ppc
//!
//! Library errors use `thiserror`; the binary wraps them in `anyhow`.
//!
//! - [`ResolveError`]: the compile pipeline (tags, requires, cycles, conflicts)
//! - [`LoadError`]: reading modules, rules and profiles from disk
//! - [`ConfigError`]: reading `ppc.toml`

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while resolving, validating and rendering a module set.
///
/// Every variant is terminal for the compile that produced it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// A module carries a tag that is not `group:value`
    #[error("module {module} has invalid tag {tag:?} (expected group:value)")]
    InvalidTag { module: String, tag: String },

    /// A root id is not present in the registry
    #[error("selected module not found: {id}")]
    UnknownRoot { id: String },

    /// A `requires` entry names a module that is not in the registry
    #[error("required module not found: {missing} (required by {required_by})")]
    MissingRequirement {
        missing: String,
        required_by: String,
    },

    /// A circular requires chain, from the first repeated id back to itself
    #[error("circular requires: {}", .path.join(" -> "))]
    Cycle { path: Vec<String> },

    /// An exclusive group carries more than one value across the resolved set
    #[error("conflicting tags in group {group:?}: {}", format_conflicts(.values))]
    Conflict {
        group: String,
        values: Vec<ConflictingValue>,
    },
}

impl ResolveError {
    /// The cycle rendered as `a -> b -> a`, if this is a cycle error.
    pub fn cycle_path(&self) -> Option<String> {
        match self {
            ResolveError::Cycle { path } => Some(path.join(" -> ")),
            _ => None,
        }
    }
}

/// One value observed for an exclusive group, with the earliest module carrying it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictingValue {
    pub value: String,
    pub module: String,
}

fn format_conflicts(values: &[ConflictingValue]) -> String {
    values
        .iter()
        .map(|v| format!("{} ({})", v.value, v.module))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors raised while loading a prompt pack from disk
#[derive(Error, Debug)]
pub enum LoadError {
    /// Prompts directory does not exist
    #[error("prompts directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// File does not start with a `---` line
    #[error("{file}: missing frontmatter (modules require YAML frontmatter with id)")]
    NoFrontmatter { file: PathBuf },

    /// Opening `---` without a closing one
    #[error("{file}: frontmatter start found but missing closing ---")]
    UnclosedFrontmatter { file: PathBuf },

    /// Frontmatter is not valid YAML for a module
    #[error("{file}: invalid YAML frontmatter: {message}")]
    InvalidFrontmatter { file: PathBuf, message: String },

    /// Frontmatter without a usable `id`
    #[error("{file}: frontmatter missing required field: id")]
    MissingId { file: PathBuf },

    /// Two files declare the same module id
    #[error("duplicate module id {id:?}\n  → Files:\n    1. {first}\n    2. {second}")]
    DuplicateId {
        id: String,
        first: PathBuf,
        second: PathBuf,
    },

    /// `rules.yml` is absent
    #[error("missing rules file: {path}")]
    MissingRules { path: PathBuf },

    /// `rules.yml` is not valid YAML
    #[error("invalid rules file {path}: {message}")]
    InvalidRules { path: PathBuf, message: String },

    /// A profile file could not be read
    #[error("profile {path:?}: {message}")]
    ProfileUnreadable { path: PathBuf, message: String },

    /// A profile file parsed but failed validation
    #[error("profile {path:?}: {message}")]
    InvalidProfile { path: PathBuf, message: String },

    /// IO error while walking or reading files
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while reading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Explicitly requested config file is missing
    #[error("config file not found: {path}")]
    NotFound { path: PathBuf },

    /// Config file is not valid TOML for the expected schema
    #[error("invalid config {path}: {message}")]
    Invalid { path: PathBuf, message: String },

    /// IO error
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
