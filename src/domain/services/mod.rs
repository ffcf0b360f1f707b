//! Domain Services
//!
//! Pure business logic over modules and registries. No I/O.
//!
//! - `requires` - transitive closure of selected roots
//! - `exclusivity` - exclusive tag group validation
//! - `ordering` - final (layer, priority, id) order
//! - `renderer` - placeholder substitution and document assembly
//! - `graph` - reachability and DOT output for `doctor --graph`
//! - `differ` - drift detection for `compile --check`

mod differ;
mod exclusivity;
mod graph;
mod ordering;
mod renderer;
mod requires;

pub use differ::{DiffResult, DiffTag, Differ};
pub use exclusivity::validate_exclusive_groups;
pub use graph::{build_dot, first_cycle, is_entrypoint, reachable_from_entrypoints, BASE_ID};
pub use ordering::{compare_modules, sort_modules};
pub use renderer::{render, substitute_vars};
pub use requires::{expand_requires, Closure, Provenance};
