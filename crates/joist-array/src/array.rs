//! The fixed-length primitive array type and its construction paths.

use joist_core::{Array, ArrayInstanceId, ElementKind, PrimElement};

/// A fixed-length, mutable, element-type-specialized array.
///
/// `PrimArray` reproduces managed-runtime primitive array semantics in
/// an environment with no native equivalent: the length is fixed at
/// construction and immutable for the object's lifetime, every indexed
/// access is bounds-checked, and the compound update operations behave
/// like the host language's `++`/`--` operators. The buffer is
/// exclusively owned by the array; all outside access goes through this
/// type's API, borrowed slice views included.
///
/// The sibling element kinds are instantiations of this one type; see
/// the aliases ([`F64Array`], [`I32Array`], ...) for the full set.
#[derive(Debug)]
pub struct PrimArray<E: PrimElement> {
    /// Contiguous storage. `Box<[E]>` carries no capacity field, so the
    /// fixed-length invariant is structural rather than policed.
    pub(crate) data: Box<[E]>,
    /// Object identity, fresh per construction and per clone.
    id: ArrayInstanceId,
}

impl<E: PrimElement> PrimArray<E> {
    /// Create an array by copying `source` into fresh storage.
    ///
    /// The slice's own length is the element count, so the source is
    /// trusted exactly as far as the borrow checker already enforces.
    pub fn from_slice(source: &[E]) -> Self {
        Self {
            data: source.to_vec().into_boxed_slice(),
            id: ArrayInstanceId::next(),
        }
    }

    /// Create a zero-filled array of `len` elements.
    ///
    /// This is the generic allocation path used when no source buffer
    /// exists; every slot starts at the element kind's zero value.
    pub fn zeroed(len: usize) -> Self {
        Self {
            data: vec![E::ZERO; len].into_boxed_slice(),
            id: ArrayInstanceId::next(),
        }
    }

    /// Number of elements. Fixed for the lifetime of the array.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the array has zero elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrow the whole buffer as a slice.
    pub fn as_slice(&self) -> &[E] {
        &self.data
    }

    /// Borrow the whole buffer mutably.
    ///
    /// Bulk in-place mutation (fills, element-wise kernels) goes
    /// through this view; single-element access should prefer the
    /// checked accessors.
    pub fn as_mut_slice(&mut self) -> &mut [E] {
        &mut self.data
    }

    /// Iterate over the elements in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.data.iter()
    }
}

impl<E: PrimElement> Clone for PrimArray<E> {
    /// Copies the contents; the clone is a new object with a fresh
    /// [`ArrayInstanceId`].
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            id: ArrayInstanceId::next(),
        }
    }
}

impl<E: PrimElement> Array for PrimArray<E> {
    fn kind(&self) -> ElementKind {
        E::KIND
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn instance_id(&self) -> ArrayInstanceId {
        self.id
    }

    fn boxed_clone(&self) -> Box<dyn Array> {
        Box::new(self.clone())
    }
}

impl<E: PrimElement> From<Vec<E>> for PrimArray<E> {
    fn from(data: Vec<E>) -> Self {
        Self {
            data: data.into_boxed_slice(),
            id: ArrayInstanceId::next(),
        }
    }
}

impl<E: PrimElement> From<&[E]> for PrimArray<E> {
    fn from(source: &[E]) -> Self {
        Self::from_slice(source)
    }
}

impl<E: PrimElement> FromIterator<E> for PrimArray<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

impl<'a, E: PrimElement> IntoIterator for &'a PrimArray<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<E: PrimElement> IntoIterator for PrimArray<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_vec().into_iter()
    }
}

/// Fixed-length array of `bool`.
pub type BoolArray = PrimArray<bool>;

/// Fixed-length array of `i8`.
pub type I8Array = PrimArray<i8>;

/// Fixed-length array of `i16`.
pub type I16Array = PrimArray<i16>;

/// Fixed-length array of `i32`.
pub type I32Array = PrimArray<i32>;

/// Fixed-length array of `i64`.
pub type I64Array = PrimArray<i64>;

/// Fixed-length array of `u8`.
pub type U8Array = PrimArray<u8>;

/// Fixed-length array of `u16`.
pub type U16Array = PrimArray<u16>;

/// Fixed-length array of `f32`.
pub type F32Array = PrimArray<f32>;

/// Fixed-length array of `f64`, the double-precision kind.
pub type F64Array = PrimArray<f64>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeroed_creates_zero_storage() {
        let arr = F64Array::zeroed(100);
        assert_eq!(arr.len(), 100);
        assert!(arr.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn zeroed_bool_is_all_false() {
        let arr = BoolArray::zeroed(8);
        assert!(arr.iter().all(|&v| !v));
    }

    #[test]
    fn from_slice_copies_contents() {
        let src = [1.0, 2.0, 3.0];
        let arr = F64Array::from_slice(&src);
        assert_eq!(arr.as_slice(), &src);
    }

    #[test]
    fn from_slice_of_zero_elements() {
        let arr = F64Array::from_slice(&[]);
        assert_eq!(arr.len(), 0);
        assert!(arr.is_empty());
    }

    #[test]
    fn from_slice_does_not_alias_source() {
        let mut src = vec![1.0, 2.0];
        let arr = F64Array::from_slice(&src);
        src[0] = 99.0;
        assert_eq!(arr.as_slice(), &[1.0, 2.0]);
    }

    #[test]
    fn distinct_constructions_have_distinct_ids() {
        let a = I32Array::zeroed(4);
        let b = I32Array::zeroed(4);
        assert_ne!(a.instance_id(), b.instance_id());
    }

    #[test]
    fn clone_copies_contents_with_fresh_identity() {
        let mut a = F64Array::from_slice(&[1.0, 2.0]);
        let b = a.clone();
        assert_eq!(a.as_slice(), b.as_slice());
        assert_ne!(a.instance_id(), b.instance_id());

        // Divergence after cloning proves the buffers are independent.
        a.set(0, 7.0).unwrap();
        assert_eq!(b.get(0), Ok(1.0));
    }

    #[test]
    fn kind_reports_element_type() {
        assert_eq!(F64Array::zeroed(1).kind(), ElementKind::F64);
        assert_eq!(I16Array::zeroed(1).kind(), ElementKind::I16);
        assert_eq!(BoolArray::zeroed(1).kind(), ElementKind::Bool);
    }

    #[test]
    fn sibling_kinds_share_the_capability_surface() {
        let arrays: Vec<Box<dyn Array>> = vec![
            Box::new(F64Array::zeroed(3)),
            Box::new(I64Array::zeroed(5)),
            Box::new(U8Array::zeroed(0)),
        ];
        assert_eq!(arrays[0].kind(), ElementKind::F64);
        assert_eq!(arrays[1].len(), 5);
        assert!(arrays[2].is_empty());
    }

    #[test]
    fn boxed_clone_preserves_contents_and_kind() {
        let a = F64Array::from_slice(&[4.0, 5.0]);
        let b = a.boxed_clone();
        assert_eq!(b.kind(), ElementKind::F64);
        assert_eq!(b.len(), 2);
        assert_ne!(b.instance_id(), a.instance_id());
    }

    #[test]
    fn from_vec_takes_ownership() {
        let arr: I32Array = vec![5, 6, 7].into();
        assert_eq!(arr.as_slice(), &[5, 6, 7]);
    }

    #[test]
    fn collects_from_iterator() {
        let arr: F64Array = (0..4).map(|i| i as f64).collect();
        assert_eq!(arr.as_slice(), &[0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn iterates_in_index_order() {
        let arr = I32Array::from_slice(&[10, 20, 30]);
        let collected: Vec<i32> = (&arr).into_iter().copied().collect();
        assert_eq!(collected, vec![10, 20, 30]);
        let owned: Vec<i32> = arr.into_iter().collect();
        assert_eq!(owned, vec![10, 20, 30]);
    }

    #[test]
    fn as_mut_slice_supports_bulk_fill() {
        let mut arr = F32Array::zeroed(6);
        arr.as_mut_slice().fill(2.5);
        assert!(arr.iter().all(|&v| v == 2.5));
        assert_eq!(arr.len(), 6);
    }
}
