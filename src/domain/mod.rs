//! Domain Layer
//!
//! The compile pipeline as pure logic, without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Module, ModuleRegistry, RuleSet
//! - `value_objects/` - Layer, KeyedTag, ContentHash
//! - `services/` - closure expansion, exclusivity, ordering, rendering
//! - `ports/` - interface definitions for infrastructure

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
