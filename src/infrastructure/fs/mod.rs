//! File system helpers

mod local;

pub use local::write_atomic;
