//! # batchwise - derived batch behavior for list-like stores
//!
//! > "Behavior is not storage"
//!
//! batchwise augments any object exposing a minimal set of list primitives
//! with a richer set of derived, composable operations: toggle, replace,
//! conditional membership, bulk removal with predicates. It is a
//! behavioral adapter, not a data structure — all state lives in the
//! wrapped collaborator, and this layer only orchestrates calls to it.
//!
//! ## Philosophy
//!
//! - **Behavior over storage** - the collaborator owns the items; this
//!   crate owns nothing
//! - **Primitives are opaque** - no assumptions about cost or layout, a
//!   `Vec`, a set, or a class-membership view all qualify
//! - **Define once, gain everywhere** - the operations exist once, as an
//!   extension trait; every implementor of the port gets them
//! - **Pure core, swappable adapters** - hexagonal architecture
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       batchwise                              │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │  CORE (pure types, no collaborators)                        │
//! │    IntoBatch, PrimitiveSet, ConfigError                     │
//! │                                                              │
//! │  PORTS (trait contracts)                                     │
//! │    ListStore - the primitive capability set                 │
//! │                                                              │
//! │  ADAPTERS (swappable collaborators)                         │
//! │    VecStore, TokenList                                      │
//! │                                                              │
//! │  ENGINE (orchestration)                                      │
//! │    ListOps - the derived operations                         │
//! │    Adapter - closure-backed primitive sets                  │
//! │                                                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use batchwise::{ListOps, VecStore};
//!
//! let mut list = VecStore::new();
//!
//! // Chainable mutations, query results where you expect them
//! list.add([1, 2, 3]).toggle(1).replace(3, 4);
//!
//! assert!(list.has_any([4, 5]));
//! assert!(!list.has([4, 5]));
//! ```
//!
//! Runtime-assembled primitive sets go through the [`Adapter`]:
//!
//! ```rust,ignore
//! use batchwise::{Adapter, PrimitiveSet};
//!
//! let adapter = Adapter::new(
//!     PrimitiveSet::new()
//!         .insert(|item| /* ... */)
//!         .delete(|item| /* ... */)
//!         // ...contains, values, item, len
//! )?; // fails naming the first missing primitive
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Core domain - pure types, no collaborators
/// Contains: IntoBatch, PrimitiveSet, ConfigError
pub mod core;

/// Port definitions - the primitive capability set contract
/// Contains: ListStore trait
pub mod ports;

/// Adapter implementations - reference collaborators
/// Contains: VecStore, TokenList
pub mod adapters;

/// Engine - orchestration layer
/// Contains: ListOps derived operations, closure-backed Adapter
pub mod engine;

// ============================================================================
// RE-EXPORTS (public API)
// ============================================================================

// Core types
pub use crate::core::batch::IntoBatch;
pub use crate::core::config::PrimitiveSet;
pub use crate::core::error::ConfigError;

// Port traits
pub use crate::ports::ListStore;

// Reference collaborators
pub use crate::adapters::{TokenList, VecStore};

// Engine
pub use crate::engine::{Adapter, ListOps};

// ============================================================================
// CRATE-LEVEL DOCUMENTATION
// ============================================================================

/// The primitive capability set in one glance:
///
/// 1. **insert**: `fn(item)` - store it
/// 2. **delete**: `fn(&item)` - drop it, silently if absent
/// 3. **contains**: `fn(&item) -> bool` - is it in?
/// 4. **values**: `fn() -> Vec<item>` - snapshot, store order
/// 5. **item**: `fn(index) -> Option<item>` - indexed access
/// 6. **len**: `fn() -> usize` - how many
///
/// Plus two optional ones: **clear** (else: delete over a snapshot) and
/// **sanitize** (else: identity). Everything else is derived.
#[doc(hidden)]
pub const _PRIMITIVES: () = ();
