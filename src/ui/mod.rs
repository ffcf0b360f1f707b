//! Output helpers for the `ppc` binary

pub mod json;
