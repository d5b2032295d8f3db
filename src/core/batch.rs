//! # Batch Coercion
//!
//! Every variadic-style operation takes "zero or more items". Rust has no
//! rest parameters, so the batch is an explicit ordered sequence and this
//! trait does the coercion:
//!
//! - a bare value becomes a one-element batch
//! - arrays, slices and `Vec`s pass through in order
//! - `[]` is the empty batch (stands in for an omitted argument)
//!
//! Order is preserved end to end. It is observable: `toggle` processes the
//! batch front to back and decides presence per item as it goes.

/// Conversion into an ordered batch of candidate items.
///
/// Implemented for single values, arrays, slices of clonable items and
/// `Vec`s. The produced `Vec` is handed to `sanitize` before any primitive
/// call is made.
pub trait IntoBatch<T> {
    /// Consume `self` and produce the ordered batch.
    fn into_batch(self) -> Vec<T>;
}

/// A bare value is a one-element batch.
impl<T> IntoBatch<T> for T {
    fn into_batch(self) -> Vec<T> {
        vec![self]
    }
}

impl<T> IntoBatch<T> for Vec<T> {
    fn into_batch(self) -> Vec<T> {
        self
    }
}

impl<T: Clone> IntoBatch<T> for &Vec<T> {
    fn into_batch(self) -> Vec<T> {
        self.clone()
    }
}

impl<T: Clone> IntoBatch<T> for &[T] {
    fn into_batch(self) -> Vec<T> {
        self.to_vec()
    }
}

impl<T, const N: usize> IntoBatch<T> for [T; N] {
    fn into_batch(self) -> Vec<T> {
        self.into_iter().collect()
    }
}

/// Convenience for token-style collaborators keyed by `String`.
impl IntoBatch<String> for &str {
    fn into_batch(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_value_is_single_element_batch() {
        assert_eq!(42.into_batch(), vec![42]);
    }

    #[test]
    fn test_vec_passes_through() {
        let batch: Vec<i32> = vec![1, 2, 3].into_batch();
        assert_eq!(batch, vec![1, 2, 3]);
    }

    #[test]
    fn test_slice_is_cloned_in_order() {
        let items = vec![1, 2, 3];
        let slice: &[i32] = &items;
        let batch: Vec<i32> = slice.into_batch();
        assert_eq!(batch, vec![1, 2, 3]);
    }

    #[test]
    fn test_array_preserves_order() {
        let batch: Vec<&str> = ["b", "a"].into_batch();
        assert_eq!(batch, vec!["b", "a"]);
    }

    #[test]
    fn test_empty_array_is_empty_batch() {
        let batch: Vec<i32> = <[i32; 0] as IntoBatch<i32>>::into_batch([]);
        assert!(batch.is_empty());
    }

    #[test]
    fn test_str_coerces_to_string_batch() {
        let batch: Vec<String> = "active".into_batch();
        assert_eq!(batch, vec!["active".to_string()]);
    }
}
