//! ModuleSource port
//!
//! Supplies the registry and rules a compile works from.

use crate::domain::entities::{ModuleRegistry, RuleSet};
use crate::error::LoadError;

pub trait ModuleSource {
    /// Every module of the pack, keyed by id
    fn load_registry(&self) -> Result<ModuleRegistry, LoadError>;

    /// Exclusive tag groups
    fn load_rules(&self) -> Result<RuleSet, LoadError>;
}
