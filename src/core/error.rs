//! # Errors
//!
//! One runtime error kind exists in the whole crate: a required primitive
//! missing from a [`PrimitiveSet`](crate::PrimitiveSet) at construction.
//! Everything else is defined fallback behavior (empty batches are
//! queries-false/mutations-no-op, deleting an absent item is silent
//! success), and the `remove_if` predicate is checked by the type system,
//! not at runtime.
//!
//! Collaborator failures are not represented here: a primitive that panics
//! unwinds through the derived layer untouched.

use thiserror::Error;

/// Raised synchronously by [`Adapter::new`](crate::Adapter::new) when the
/// capability set is incomplete.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required primitive was not supplied. Carries the primitive's name.
    #[error("required primitive `{0}` is missing from the capability set")]
    MissingPrimitive(&'static str),
}
