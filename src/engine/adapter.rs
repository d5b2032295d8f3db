//! # Adapter
//!
//! The dynamic entry point: an adapter built at runtime from a
//! caller-supplied [`PrimitiveSet`] of closures.
//!
//! Construction validates the capability set:
//! - the six required primitives must be present, and the first missing
//!   one fails construction with a [`ConfigError`] naming it
//! - the two optional primitives fall back to named defaults (snapshot
//!   deletion for `clear`, identity for `sanitize`)
//!
//! The adapter holds no state of its own beyond the primitive closures; it
//! implements [`ListStore`] by delegation, which is all it takes for the
//! whole [`ListOps`](crate::ListOps) surface to arrive through the blanket
//! impl. It is constructed once and never reconfigured.
//!
//! Since the closures usually all capture the same underlying collection,
//! they are typically built over shared interior mutability
//! (`Rc<RefCell<…>>`). [`Adapter::wrapping`] does exactly that wiring for
//! any existing [`ListStore`].

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::config::{
    ClearFn, ContainsFn, DeleteFn, InsertFn, ItemFn, LenFn, PrimitiveSet, SanitizeFn, ValuesFn,
};
use crate::core::error::ConfigError;
use crate::ports::ListStore;

/// A list-behavior adapter over a validated set of primitive closures.
pub struct Adapter<T> {
    insert: InsertFn<T>,
    delete: DeleteFn<T>,
    contains: ContainsFn<T>,
    values: ValuesFn<T>,
    item: ItemFn<T>,
    len: LenFn,

    /// Optional one-call clear; `None` falls back to snapshot deletion.
    clear: Option<ClearFn>,

    /// Optional batch normalization; `None` is the identity.
    sanitize: Option<SanitizeFn<T>>,
}

impl<T> Adapter<T> {
    /// Validate `set` and construct the adapter.
    ///
    /// Fails with [`ConfigError::MissingPrimitive`] naming the first
    /// required primitive that was not supplied. Validation order:
    /// `insert`, `delete`, `contains`, `values`, `item`, `len`.
    pub fn new(set: PrimitiveSet<T>) -> Result<Self, ConfigError> {
        Ok(Self {
            insert: set
                .insert
                .ok_or(ConfigError::MissingPrimitive("insert"))?,
            delete: set
                .delete
                .ok_or(ConfigError::MissingPrimitive("delete"))?,
            contains: set
                .contains
                .ok_or(ConfigError::MissingPrimitive("contains"))?,
            values: set
                .values
                .ok_or(ConfigError::MissingPrimitive("values"))?,
            item: set.item.ok_or(ConfigError::MissingPrimitive("item"))?,
            len: set.len.ok_or(ConfigError::MissingPrimitive("len"))?,
            clear: set.clear,
            sanitize: set.sanitize,
        })
    }
}

impl<T: 'static> Adapter<T> {
    /// Construct an adapter whose primitives all delegate to `store`.
    ///
    /// This is the composition entry point: the store stays shared and
    /// usable on its own, and the adapter's primitive set mirrors it —
    /// including its `clear` and `sanitize`, overridden or not. Cannot
    /// fail, so no validation round-trip.
    pub fn wrapping<S>(store: Rc<RefCell<S>>) -> Self
    where
        S: ListStore<T> + 'static,
    {
        let insert = {
            let store = Rc::clone(&store);
            Box::new(move |item| store.borrow_mut().insert(item)) as InsertFn<T>
        };
        let delete = {
            let store = Rc::clone(&store);
            Box::new(move |item: &T| store.borrow_mut().delete(item)) as DeleteFn<T>
        };
        let contains = {
            let store = Rc::clone(&store);
            Box::new(move |item: &T| store.borrow().contains(item)) as ContainsFn<T>
        };
        let values = {
            let store = Rc::clone(&store);
            Box::new(move || store.borrow().values()) as ValuesFn<T>
        };
        let item = {
            let store = Rc::clone(&store);
            Box::new(move |index| store.borrow().item(index)) as ItemFn<T>
        };
        let len = {
            let store = Rc::clone(&store);
            Box::new(move || store.borrow().len()) as LenFn
        };
        let clear = {
            let store = Rc::clone(&store);
            Box::new(move || store.borrow_mut().clear()) as ClearFn
        };
        let sanitize = {
            let store = Rc::clone(&store);
            Box::new(move |items| store.borrow().sanitize(items)) as SanitizeFn<T>
        };

        Self {
            insert,
            delete,
            contains,
            values,
            item,
            len,
            clear: Some(clear),
            sanitize: Some(sanitize),
        }
    }
}

impl<T> ListStore<T> for Adapter<T> {
    fn insert(&mut self, item: T) {
        (self.insert)(item);
    }

    fn delete(&mut self, item: &T) {
        (self.delete)(item);
    }

    fn contains(&self, item: &T) -> bool {
        (self.contains)(item)
    }

    fn values(&self) -> Vec<T> {
        (self.values)()
    }

    fn item(&self, index: usize) -> Option<T> {
        (self.item)(index)
    }

    fn len(&self) -> usize {
        (self.len)()
    }

    fn clear(&mut self) {
        match &mut self.clear {
            Some(clear) => clear(),
            None => {
                for item in (self.values)() {
                    (self.delete)(&item);
                }
            }
        }
    }

    fn sanitize(&self, items: Vec<T>) -> Vec<T> {
        match &self.sanitize {
            Some(sanitize) => sanitize(items),
            None => items,
        }
    }
}

/// Iterating the adapter yields the same sequence as `values()`, over a
/// fresh snapshot each time.
impl<T> IntoIterator for &Adapter<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        (self.values)().into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::TokenList;
    use crate::engine::ListOps;

    /// A full required-primitive set over a shared `Vec<i32>`.
    fn full_set(shared: &Rc<RefCell<Vec<i32>>>) -> PrimitiveSet<i32> {
        let insert = Rc::clone(shared);
        let delete = Rc::clone(shared);
        let contains = Rc::clone(shared);
        let values = Rc::clone(shared);
        let item = Rc::clone(shared);
        let len = Rc::clone(shared);

        PrimitiveSet::new()
            .insert(move |x| insert.borrow_mut().push(x))
            .delete(move |x: &i32| delete.borrow_mut().retain(|y| y != x))
            .contains(move |x: &i32| contains.borrow().contains(x))
            .values(move || values.borrow().clone())
            .item(move |i| item.borrow().get(i).copied())
            .len(move || len.borrow().len())
    }

    fn expect_missing(result: Result<Adapter<i32>, ConfigError>) -> ConfigError {
        match result {
            Ok(_) => panic!("expected a missing-primitive error"),
            Err(err) => err,
        }
    }

    #[test]
    fn test_construction_requires_every_primitive() {
        let err = expect_missing(Adapter::new(PrimitiveSet::new()));
        assert_eq!(err, ConfigError::MissingPrimitive("insert"));
    }

    #[test]
    fn test_construction_names_the_first_missing_primitive() {
        let set: PrimitiveSet<i32> = PrimitiveSet::new()
            .insert(|_| {})
            .delete(|_| {})
            .contains(|_| false);

        let err = expect_missing(Adapter::new(set));
        assert_eq!(err, ConfigError::MissingPrimitive("values"));
    }

    #[test]
    fn test_construction_succeeds_without_optional_primitives() {
        let shared = Rc::new(RefCell::new(Vec::new()));
        assert!(Adapter::new(full_set(&shared)).is_ok());
    }

    #[test]
    fn test_derived_operations_drive_the_supplied_closures() {
        let shared = Rc::new(RefCell::new(Vec::new()));
        let mut adapter = Adapter::new(full_set(&shared)).unwrap();

        adapter.add([1, 2, 3]).toggle(1).replace(3, 4);

        assert_eq!(*shared.borrow(), vec![2, 4]);
        assert!(adapter.has_any([4, 5]));
        assert!(!adapter.has([4, 5]));
    }

    #[test]
    fn test_fallback_clear_deletes_over_a_snapshot() {
        let shared = Rc::new(RefCell::new(Vec::new()));
        let mut adapter = Adapter::new(full_set(&shared)).unwrap();

        adapter.add([1, 2, 3]);
        adapter.remove_all();

        assert!(shared.borrow().is_empty());
        assert!(adapter.is_empty());
    }

    #[test]
    fn test_supplied_clear_is_preferred() {
        let shared = Rc::new(RefCell::new(vec![1, 2]));
        let cleared = Rc::new(RefCell::new(false));

        let clear_target = Rc::clone(&shared);
        let clear_flag = Rc::clone(&cleared);
        let set = full_set(&shared).clear(move || {
            clear_target.borrow_mut().clear();
            *clear_flag.borrow_mut() = true;
        });

        let mut adapter = Adapter::new(set).unwrap();
        adapter.remove_all();

        assert!(*cleared.borrow());
        assert!(shared.borrow().is_empty());
    }

    #[test]
    fn test_supplied_sanitize_runs_before_membership_logic() {
        let shared = Rc::new(RefCell::new(Vec::new()));
        let set = full_set(&shared).sanitize(|batch| {
            // Dedup while keeping first-occurrence order.
            let mut out: Vec<i32> = Vec::new();
            for item in batch {
                if !out.contains(&item) {
                    out.push(item);
                }
            }
            out
        });

        let mut adapter = Adapter::new(set).unwrap();
        adapter.toggle([5, 5]);

        // With dedup the pair collapses, so 5 is toggled once.
        assert!(adapter.has(5));
    }

    #[test]
    fn test_wrapping_mirrors_the_store_including_sanitize() {
        let store = Rc::new(RefCell::new(TokenList::new()));
        let mut adapter = Adapter::wrapping(Rc::clone(&store));

        adapter.add("btn active");

        assert!(adapter.has("active"));
        assert_eq!(store.borrow().to_attr(), "btn active");
    }

    #[test]
    fn test_adapter_is_iterable() {
        let shared = Rc::new(RefCell::new(Vec::new()));
        let mut adapter = Adapter::new(full_set(&shared)).unwrap();
        adapter.add([1, 2, 3]);

        let collected: Vec<i32> = (&adapter).into_iter().collect();
        assert_eq!(collected, vec![1, 2, 3]);

        // Restartable: a second pass sees a fresh snapshot.
        let again: Vec<i32> = (&adapter).into_iter().collect();
        assert_eq!(again, collected);
    }

    #[test]
    fn test_adapter_holds_no_state_of_its_own() {
        let shared = Rc::new(RefCell::new(Vec::new()));
        let mut adapter = Adapter::new(full_set(&shared)).unwrap();

        adapter.add([1, 2]);

        // Mutating the collaborator behind the adapter's back is fully
        // visible - there is no hidden buffering.
        shared.borrow_mut().push(3);
        assert!(adapter.has(3));
        assert_eq!(adapter.len(), 3);
    }
}
