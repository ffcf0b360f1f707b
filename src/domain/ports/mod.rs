//! Domain Ports (Interfaces)
//!
//! Infrastructure provides the concrete implementations.

pub mod module_source;

pub use module_source::ModuleSource;
