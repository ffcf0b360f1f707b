//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod hash;
mod layer;
mod tag;

pub use hash::ContentHash;
pub use layer::Layer;
pub use tag::KeyedTag;
