//! Infrastructure Layer
//!
//! Concrete I/O: reading prompt packs and profiles, writing documents.

pub mod fs;
pub mod loader;

pub use fs::write_atomic;
pub use loader::FsModuleSource;
