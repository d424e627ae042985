//! The capability trait shared by all primitive array kinds.

use crate::id::ArrayInstanceId;
use crate::kind::ElementKind;

/// Type-erased view of a fixed-length primitive array.
///
/// The behaviour common to every element kind (kind report, length,
/// identity, polymorphic cloning) lives here so sibling array kinds
/// can be handled uniformly behind `&dyn Array`. Element-typed
/// access (indexing, iteration, copy-out) stays on the concrete array
/// type, since it cannot be expressed object-safely across
/// heterogeneous element types.
pub trait Array {
    /// The element kind stored by this array.
    fn kind(&self) -> ElementKind;

    /// Number of elements. Fixed at construction for the lifetime of
    /// the array.
    fn len(&self) -> usize;

    /// Whether the array has zero elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The identity of this array object.
    ///
    /// Two `&dyn Array` references observe the same array exactly when
    /// their instance IDs are equal.
    fn instance_id(&self) -> ArrayInstanceId;

    /// Clone the array behind the trait object.
    ///
    /// The clone has equal contents, the same kind and length, and a
    /// fresh identity.
    fn boxed_clone(&self) -> Box<dyn Array>;
}
