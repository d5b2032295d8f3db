//! # Engine
//!
//! The orchestration layer: the derived operations composed out of the
//! port primitives, and the closure-backed adapter that brings them to
//! primitive sets assembled at runtime.

mod adapter;
mod ops;

pub use adapter::Adapter;
pub use ops::ListOps;
