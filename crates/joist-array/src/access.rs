//! Checked indexed access, bulk copy-out, and the compound step family.
//!
//! Every operation funnels through the same single unsigned-range
//! comparison before touching the buffer; a failed check returns
//! [`IndexError`] with the buffer untouched. The compound operations
//! are one logical access each (bounds check, then a single
//! read-modify-write on the slot), so a caller can never observe a
//! half-applied or doubly-applied update.

use joist_core::{IndexError, PrimElement, StepElement};

use crate::array::PrimArray;

impl<E: PrimElement> PrimArray<E> {
    /// Bounds check shared by every indexed operation.
    ///
    /// `usize` indexes make the negative arm of the managed-runtime
    /// rule unrepresentable, so one comparison covers the whole range.
    fn check(&self, index: usize) -> Result<(), IndexError> {
        if index < self.data.len() {
            Ok(())
        } else {
            Err(IndexError {
                index,
                len: self.data.len(),
            })
        }
    }

    /// Read the element at `index`.
    ///
    /// No side effects; out-of-range indexes fail with [`IndexError`].
    pub fn get(&self, index: usize) -> Result<E, IndexError> {
        self.check(index)?;
        Ok(self.data[index])
    }

    /// Write `value` at `index`, returning the newly stored value.
    ///
    /// The return mirrors an assignment expression's value. On failure
    /// the buffer is unmodified.
    pub fn set(&mut self, index: usize, value: E) -> Result<E, IndexError> {
        self.check(index)?;
        self.data[index] = value;
        Ok(value)
    }

    /// Copy the first `dest.len()` elements into `dest`.
    ///
    /// The destination slice's own length is the requested count, so
    /// copying a prefix is `copy_out(&mut dest[..n])` and writing past
    /// the destination is unrepresentable. Fails with [`IndexError`]
    /// when the request exceeds this array's length, writing nothing.
    pub fn copy_out(&self, dest: &mut [E]) -> Result<(), IndexError> {
        if dest.len() > self.data.len() {
            return Err(IndexError {
                index: dest.len(),
                len: self.data.len(),
            });
        }
        dest.copy_from_slice(&self.data[..dest.len()]);
        Ok(())
    }
}

impl<E: StepElement> PrimArray<E> {
    /// Add one unit to the element at `index`, returning the new value.
    pub fn incr(&mut self, index: usize) -> Result<E, IndexError> {
        self.check(index)?;
        let slot = &mut self.data[index];
        *slot = slot.step_up();
        Ok(*slot)
    }

    /// Subtract one unit from the element at `index`, returning the
    /// new value.
    pub fn decr(&mut self, index: usize) -> Result<E, IndexError> {
        self.check(index)?;
        let slot = &mut self.data[index];
        *slot = slot.step_down();
        Ok(*slot)
    }

    /// Add one unit to the element at `index`, returning the value
    /// observed before the update (postfix-operator semantics).
    pub fn post_incr(&mut self, index: usize) -> Result<E, IndexError> {
        self.check(index)?;
        let slot = &mut self.data[index];
        let before = *slot;
        *slot = before.step_up();
        Ok(before)
    }

    /// Subtract one unit from the element at `index`, returning the
    /// value observed before the update.
    pub fn post_decr(&mut self, index: usize) -> Result<E, IndexError> {
        self.check(index)?;
        let slot = &mut self.data[index];
        let before = *slot;
        *slot = before.step_down();
        Ok(before)
    }
}
