//! # Ports
//!
//! The single trait contract of the crate: the primitive capability set a
//! collaborator must supply to gain the derived operations.
//!
//! The derived layer ([`ListOps`](crate::ListOps)) is built purely by
//! composing these primitives. It treats them as opaque calls and makes no
//! assumption about their cost or about how the collaborator stores items:
//! an ordered `Vec`, a set, a view over class-membership flags, anything
//! goes.
//!
//! Two primitives are optional and ship with named fallbacks as default
//! methods: `clear` (synthesized from `delete` over a `values()` snapshot)
//! and `sanitize` (identity). Collaborators override them when they can do
//! better.

/// The primitive capability set.
///
/// Required primitives: [`insert`](ListStore::insert),
/// [`delete`](ListStore::delete), [`contains`](ListStore::contains),
/// [`values`](ListStore::values), [`item`](ListStore::item),
/// [`len`](ListStore::len). The compiler enforces their presence; the
/// closure-backed [`Adapter`](crate::Adapter) enforces it at construction
/// instead.
///
/// Implementing this trait is all it takes: every [`ListOps`](crate::ListOps)
/// operation arrives through a blanket impl, including on
/// `Box<dyn ListStore<T>>`.
pub trait ListStore<T> {
    /// Store `item`. Duplicate handling is collaborator-defined; the
    /// derived `add` checks membership first, so duplicates never reach
    /// this call through the derived layer.
    fn insert(&mut self, item: T);

    /// Drop `item` if present. Must be a silent no-op when absent, never
    /// an error.
    fn delete(&mut self, item: &T);

    /// Membership test.
    fn contains(&self, item: &T) -> bool;

    /// Snapshot of all current items, in collaborator order.
    fn values(&self) -> Vec<T>;

    /// Indexed access. The index domain is `[0, len)`; out-of-range
    /// results are collaborator-defined and not validated by the derived
    /// layer.
    fn item(&self, index: usize) -> Option<T>;

    /// Current item count.
    fn len(&self) -> usize;

    /// Whether the collection is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every item.
    ///
    /// Optional primitive. The default deletes each item of a `values()`
    /// snapshot; override when the store can clear in one call.
    fn clear(&mut self) {
        for item in self.values() {
            self.delete(&item);
        }
    }

    /// Normalize a candidate batch before any membership or mutation logic
    /// runs (dedup, coercion, splitting — whatever the collaborator
    /// needs).
    ///
    /// Optional primitive, identity by default. Runs exactly once per
    /// batch handed to a public derived operation and is never reapplied
    /// when derived operations compose internally.
    fn sanitize(&self, items: Vec<T>) -> Vec<T> {
        items
    }
}
