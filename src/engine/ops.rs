//! # Derived Operations
//!
//! The full derived-operation set, written once as an extension trait over
//! any [`ListStore`]. Everything here is composition: the only state
//! touched is the collaborator's, through its primitives, and the net
//! effect of each operation is exactly the primitive calls it makes.
//!
//! ## Sanitization discipline
//!
//! Public operations sanitize each incoming batch exactly once, up front,
//! then compose through the non-sanitizing helpers below. Operations that
//! call one another internally therefore never re-sanitize an
//! already-sanitized batch.
//!
//! A `sanitize` or `remove_if` predicate that reenters the same
//! collaborator (reachable through shared interior mutability) is
//! permitted but not guaranteed consistent.
//!
//! ## Chaining
//!
//! Mutating operations return `&mut Self`; queries return their computed
//! value:
//!
//! ```rust,ignore
//! list.add([1, 2, 3]).toggle(1).replace(3, 4);
//! assert!(list.has_any([4, 5]));
//! ```

use crate::core::batch::IntoBatch;
use crate::ports::ListStore;

// ============================================================================
// RAW HELPERS (no sanitization - batches arrive already sanitized)
// ============================================================================

/// Non-empty AND every item present. Short-circuits on the first absence.
fn contains_all<T, S>(store: &S, items: &[T]) -> bool
where
    S: ListStore<T> + ?Sized,
{
    !items.is_empty() && items.iter().all(|item| store.contains(item))
}

/// At least one item present. Short-circuits on the first presence.
fn contains_any<T, S>(store: &S, items: &[T]) -> bool
where
    S: ListStore<T> + ?Sized,
{
    items.iter().any(|item| store.contains(item))
}

/// Insert every item not already present.
fn add_raw<T, S>(store: &mut S, items: &[T])
where
    T: Clone,
    S: ListStore<T> + ?Sized,
{
    for item in items {
        if !store.contains(item) {
            store.insert(item.clone());
        }
    }
}

/// Delete every item, present or not. `delete` is a no-op for absent
/// items, so no membership check is needed.
fn delete_raw<T, S>(store: &mut S, items: &[T])
where
    S: ListStore<T> + ?Sized,
{
    for item in items {
        store.delete(item);
    }
}

// ============================================================================
// EXTENSION TRAIT
// ============================================================================

/// Derived list operations for any [`ListStore`].
///
/// Blanket-implemented: implementing the port is all a collaborator needs
/// to do, and these operations arrive on it (and on
/// `Box<dyn ListStore<T>>`) automatically.
pub trait ListOps<T>: ListStore<T>
where
    T: Clone + PartialEq,
{
    /// True iff the batch is non-empty and every item is present.
    ///
    /// Short-circuits on the first absent item. The empty batch yields
    /// false.
    fn has(&self, items: impl IntoBatch<T>) -> bool {
        let items = self.sanitize(items.into_batch());
        contains_all(self, &items)
    }

    /// True iff at least one item of the batch is present.
    ///
    /// Short-circuits on the first present item. The empty batch yields
    /// false.
    fn has_any(&self, items: impl IntoBatch<T>) -> bool {
        let items = self.sanitize(items.into_batch());
        contains_any(self, &items)
    }

    /// Insert every item not already present. Idempotent: items already in
    /// the collection are skipped, so the collaborator's `insert` never
    /// sees a duplicate through this call.
    fn add(&mut self, items: impl IntoBatch<T>) -> &mut Self {
        let items = self.sanitize(items.into_batch());
        add_raw(self, &items);
        self
    }

    /// Delete every item of the batch, present or not. Removing an absent
    /// item is silent success, never an error.
    fn remove(&mut self, items: impl IntoBatch<T>) -> &mut Self {
        let items = self.sanitize(items.into_batch());
        delete_raw(self, &items);
        self
    }

    /// Remove exactly the items for which `predicate` is true.
    ///
    /// Two-phase: the current items are snapshotted by indexed access
    /// (`0..len` at call time) and the matching set is collected before
    /// any removal happens, so the collection is never mutated while being
    /// iterated by index.
    fn remove_if(&mut self, mut predicate: impl FnMut(&T) -> bool) -> &mut Self {
        let count = self.len();
        let doomed: Vec<T> = (0..count)
            .filter_map(|index| self.item(index))
            .filter(|item| predicate(item))
            .collect();
        delete_raw(self, &doomed);
        self
    }

    /// Remove every item, via the collaborator's `clear` primitive (or its
    /// snapshot-deletion fallback).
    fn remove_all(&mut self) -> &mut Self {
        self.clear();
        self
    }

    /// Remove every item not in the `permitted` batch.
    fn remove_all_except(&mut self, permitted: impl IntoBatch<T>) -> &mut Self {
        let permitted = self.sanitize(permitted.into_batch());
        self.remove_if(|item| !permitted.contains(item))
    }

    /// Replace `old` items with `new` items, all or nothing.
    ///
    /// The swap happens only when every `old` item is currently present
    /// (the `has` contract, so an empty `old` batch never passes the
    /// gate); otherwise the collection is left completely untouched — no
    /// partial removal or addition. Bare values coerce to one-element
    /// batches: `list.replace(3, 4)`.
    fn replace(&mut self, old: impl IntoBatch<T>, new: impl IntoBatch<T>) -> &mut Self {
        let old = self.sanitize(old.into_batch());
        let new = self.sanitize(new.into_batch());
        if contains_all(self, &old) {
            delete_raw(self, &old);
            add_raw(self, &new);
        }
        self
    }

    /// Flip each item of the batch independently: present items are
    /// removed, absent items are added.
    ///
    /// Each decision uses the state at the moment that item is processed,
    /// in batch order. If the collaborator's `sanitize` does not
    /// deduplicate, a value appearing twice in one batch is toggled twice
    /// and nets to a no-op — accepted behavior, not a bug.
    fn toggle(&mut self, items: impl IntoBatch<T>) -> &mut Self {
        let items = self.sanitize(items.into_batch());
        for item in items {
            if self.contains(&item) {
                self.delete(&item);
            } else {
                self.insert(item);
            }
        }
        self
    }

    /// Toggle the batch as one group: if every item is present, all are
    /// removed; otherwise the absent ones are added. The group ends up
    /// all-in or all-out.
    fn toggle_together(&mut self, items: impl IntoBatch<T>) -> &mut Self {
        let items = self.sanitize(items.into_batch());
        if contains_all(self, &items) {
            delete_raw(self, &items);
        } else {
            add_raw(self, &items);
        }
        self
    }

    /// Conditional membership: when `condition` holds, remove the
    /// `else_items` then add the `then_items`; when it does not, remove
    /// the `then_items` then add the `else_items`. Removal always precedes
    /// addition within the chosen branch.
    ///
    /// Pass `[]` for a branch with nothing to apply.
    fn set_if(
        &mut self,
        condition: bool,
        then_items: impl IntoBatch<T>,
        else_items: impl IntoBatch<T>,
    ) -> &mut Self {
        let then_items = self.sanitize(then_items.into_batch());
        let else_items = self.sanitize(else_items.into_batch());
        if condition {
            delete_raw(self, &else_items);
            add_raw(self, &then_items);
        } else {
            delete_raw(self, &then_items);
            add_raw(self, &else_items);
        }
        self
    }

    /// Snapshot iterator over the current items, in `values()` order.
    ///
    /// Restartable: every call takes a fresh snapshot.
    fn iter(&self) -> std::vec::IntoIter<T> {
        self.values().into_iter()
    }
}

impl<T, S> ListOps<T> for S
where
    T: Clone + PartialEq,
    S: ListStore<T> + ?Sized,
{
}

// ============================================================================
// TESTS
// ============================================================================
