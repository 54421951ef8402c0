//! The quoting core: byte classification and the emission engine.

/// Per-byte quoting categories and the classification function.
pub mod classify;
/// Single-pass scanner and segment emission.
pub mod engine;

pub use classify::{Category, classify};
pub use engine::{Delimiter, Quoter, Verbosity};
