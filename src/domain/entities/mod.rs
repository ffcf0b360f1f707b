//! Domain Entities
//!
//! - `Module` - one prompt fragment
//! - `ModuleRegistry` - every module of a prompt pack, by id
//! - `RuleSet` - exclusive tag groups

mod module;
mod registry;
mod rules;

pub use module::Module;
pub use registry::ModuleRegistry;
pub use rules::RuleSet;
