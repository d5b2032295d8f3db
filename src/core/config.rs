//! # Primitive Capability Set
//!
//! The configuration handed to [`Adapter::new`](crate::Adapter::new): one
//! slot per primitive, filled with caller-supplied closures.
//!
//! Six primitives are required:
//!
//! | slot | signature | contract |
//! |---|---|---|
//! | `insert` | `FnMut(T)` | store the item |
//! | `delete` | `FnMut(&T)` | drop the item; silent no-op when absent |
//! | `contains` | `Fn(&T) -> bool` | membership test |
//! | `values` | `Fn() -> Vec<T>` | snapshot of all items, store order |
//! | `item` | `Fn(usize) -> Option<T>` | indexed access over `[0, len)` |
//! | `len` | `Fn() -> usize` | current count |
//!
//! Two are optional and fall back to named defaults when unset:
//!
//! | slot | fallback |
//! |---|---|
//! | `clear` | delete each item of a `values()` snapshot |
//! | `sanitize` | identity |
//!
//! The closures usually all capture the same underlying collection, so in
//! practice they are built over an `Rc<RefCell<…>>` (or
//! [`Adapter::wrapping`](crate::Adapter::wrapping) does the wiring for any
//! [`ListStore`](crate::ListStore)).

/// Boxed `insert` primitive.
pub type InsertFn<T> = Box<dyn FnMut(T)>;

/// Boxed `delete` primitive.
pub type DeleteFn<T> = Box<dyn FnMut(&T)>;

/// Boxed `contains` primitive.
pub type ContainsFn<T> = Box<dyn Fn(&T) -> bool>;

/// Boxed `values` primitive.
pub type ValuesFn<T> = Box<dyn Fn() -> Vec<T>>;

/// Boxed `item` primitive.
pub type ItemFn<T> = Box<dyn Fn(usize) -> Option<T>>;

/// Boxed `len` primitive.
pub type LenFn = Box<dyn Fn() -> usize>;

/// Boxed optional `clear` primitive.
pub type ClearFn = Box<dyn FnMut()>;

/// Boxed optional `sanitize` primitive.
pub type SanitizeFn<T> = Box<dyn Fn(Vec<T>) -> Vec<T>>;

/// Builder for the set of primitives backing an
/// [`Adapter`](crate::Adapter).
///
/// Every slot starts empty; construction of the adapter validates that the
/// six required slots were filled and reports the first missing one by
/// name.
pub struct PrimitiveSet<T> {
    pub(crate) insert: Option<InsertFn<T>>,
    pub(crate) delete: Option<DeleteFn<T>>,
    pub(crate) contains: Option<ContainsFn<T>>,
    pub(crate) values: Option<ValuesFn<T>>,
    pub(crate) item: Option<ItemFn<T>>,
    pub(crate) len: Option<LenFn>,
    pub(crate) clear: Option<ClearFn>,
    pub(crate) sanitize: Option<SanitizeFn<T>>,
}

impl<T> PrimitiveSet<T> {
    /// Create an empty capability set.
    pub fn new() -> Self {
        Self {
            insert: None,
            delete: None,
            contains: None,
            values: None,
            item: None,
            len: None,
            clear: None,
            sanitize: None,
        }
    }

    /// Supply the `insert` primitive.
    pub fn insert(mut self, f: impl FnMut(T) + 'static) -> Self {
        self.insert = Some(Box::new(f));
        self
    }

    /// Supply the `delete` primitive.
    pub fn delete(mut self, f: impl FnMut(&T) + 'static) -> Self {
        self.delete = Some(Box::new(f));
        self
    }

    /// Supply the `contains` primitive.
    pub fn contains(mut self, f: impl Fn(&T) -> bool + 'static) -> Self {
        self.contains = Some(Box::new(f));
        self
    }

    /// Supply the `values` primitive.
    pub fn values(mut self, f: impl Fn() -> Vec<T> + 'static) -> Self {
        self.values = Some(Box::new(f));
        self
    }

    /// Supply the `item` primitive.
    pub fn item(mut self, f: impl Fn(usize) -> Option<T> + 'static) -> Self {
        self.item = Some(Box::new(f));
        self
    }

    /// Supply the `len` primitive.
    pub fn len(mut self, f: impl Fn() -> usize + 'static) -> Self {
        self.len = Some(Box::new(f));
        self
    }

    /// Supply the optional `clear` primitive.
    ///
    /// When unset, the adapter deletes each item of a `values()` snapshot
    /// instead.
    pub fn clear(mut self, f: impl FnMut() + 'static) -> Self {
        self.clear = Some(Box::new(f));
        self
    }

    /// Supply the optional `sanitize` primitive.
    ///
    /// When unset, batches pass through unchanged.
    pub fn sanitize(mut self, f: impl Fn(Vec<T>) -> Vec<T> + 'static) -> Self {
        self.sanitize = Some(Box::new(f));
        self
    }
}

impl<T> Default for PrimitiveSet<T> {
    fn default() -> Self {
        Self::new()
    }
}
