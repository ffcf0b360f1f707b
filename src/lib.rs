//! ppc - prompt pack compiler
//!
//! Compiles a pack of Markdown prompt modules into one deterministic document.
//! A selection (mode, contract, traits, revision budget) names root modules;
//! their `requires` closure is validated against exclusive tag groups, ordered
//! by layer, priority and id, rendered with variables, and hashed.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    compile, diagnose, render_explain, CompileRequest, CompileResult, DoctorOptions,
    DoctorReport, Selection, SelectionOverrides,
};
pub use config::Config;
pub use domain::entities::{Module, ModuleRegistry, RuleSet};
pub use domain::ports::ModuleSource;
pub use domain::value_objects::{ContentHash, Layer};
pub use error::{ConfigError, LoadError, ResolveError};
pub use infrastructure::FsModuleSource;
