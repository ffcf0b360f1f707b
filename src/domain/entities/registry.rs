//! Module registry entity
//!
//! The read-only set of all modules known to a prompt pack, keyed by id.
//! Ids are unique; the loader rejects duplicates before a registry is built.

use std::collections::BTreeMap;

use crate::domain::entities::Module;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleRegistry {
    modules: BTreeMap<String, Module>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a module, returning the module it displaced (if the id was taken).
    pub fn insert(&mut self, module: Module) -> Option<Module> {
        self.modules.insert(module.id().to_string(), module)
    }

    pub fn get(&self, id: &str) -> Option<&Module> {
        self.modules.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.modules.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Modules in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = &Module> {
        self.modules.values()
    }

    /// Ids in ascending order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.modules.keys().map(String::as_str)
    }
}

impl FromIterator<Module> for ModuleRegistry {
    fn from_iter<T: IntoIterator<Item = Module>>(iter: T) -> Self {
        let mut registry = ModuleRegistry::new();
        for module in iter {
            registry.insert(module);
        }
        registry
    }
}
