//! Element contracts implemented by each primitive kind.
//!
//! The storage crate compiles one array type per implementor of
//! [`PrimElement`]; everything an array needs to know about its element
//! type flows through these two traits.

use std::fmt;

use crate::kind::ElementKind;

/// An element type storable in a fixed-length primitive array.
///
/// Implemented for the nine primitive kinds. The bounds mirror what the
/// storage layer relies on: elements are plain `Copy` values with no
/// drop glue, and arrays of them are `Send + Sync` whenever the caller
/// provides the outer synchronization.
pub trait PrimElement: Copy + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// The value used by the zero-filled generic allocation path.
    const ZERO: Self;

    /// The runtime kind tag for this element type.
    const KIND: ElementKind;
}

/// A [`PrimElement`] that supports one-unit compound steps.
///
/// Backs the increment/decrement operation family. Integer kinds wrap
/// on overflow; floating-point kinds follow IEEE-754 arithmetic with no
/// special handling of NaN or infinity.
pub trait StepElement: PrimElement {
    /// One unit up.
    fn step_up(self) -> Self;

    /// One unit down.
    fn step_down(self) -> Self;
}

impl PrimElement for bool {
    const ZERO: Self = false;
    const KIND: ElementKind = ElementKind::Bool;
}

impl PrimElement for i8 {
    const ZERO: Self = 0;
    const KIND: ElementKind = ElementKind::I8;
}

impl StepElement for i8 {
    fn step_up(self) -> Self {
        self.wrapping_add(1)
    }

    fn step_down(self) -> Self {
        self.wrapping_sub(1)
    }
}

impl PrimElement for i16 {
    const ZERO: Self = 0;
    const KIND: ElementKind = ElementKind::I16;
}

impl StepElement for i16 {
    fn step_up(self) -> Self {
        self.wrapping_add(1)
    }

    fn step_down(self) -> Self {
        self.wrapping_sub(1)
    }
}

impl PrimElement for i32 {
    const ZERO: Self = 0;
    const KIND: ElementKind = ElementKind::I32;
}

impl StepElement for i32 {
    fn step_up(self) -> Self {
        self.wrapping_add(1)
    }

    fn step_down(self) -> Self {
        self.wrapping_sub(1)
    }
}

impl PrimElement for i64 {
    const ZERO: Self = 0;
    const KIND: ElementKind = ElementKind::I64;
}

impl StepElement for i64 {
    fn step_up(self) -> Self {
        self.wrapping_add(1)
    }

    fn step_down(self) -> Self {
        self.wrapping_sub(1)
    }
}

impl PrimElement for u8 {
    const ZERO: Self = 0;
    const KIND: ElementKind = ElementKind::U8;
}

impl StepElement for u8 {
    fn step_up(self) -> Self {
        self.wrapping_add(1)
    }

    fn step_down(self) -> Self {
        self.wrapping_sub(1)
    }
}

impl PrimElement for u16 {
    const ZERO: Self = 0;
    const KIND: ElementKind = ElementKind::U16;
}

impl StepElement for u16 {
    fn step_up(self) -> Self {
        self.wrapping_add(1)
    }

    fn step_down(self) -> Self {
        self.wrapping_sub(1)
    }
}

impl PrimElement for f32 {
    const ZERO: Self = 0.0;
    const KIND: ElementKind = ElementKind::F32;
}

impl StepElement for f32 {
    fn step_up(self) -> Self {
        self + 1.0
    }

    fn step_down(self) -> Self {
        self - 1.0
    }
}

impl PrimElement for f64 {
    const ZERO: Self = 0.0;
    const KIND: ElementKind = ElementKind::F64;
}

impl StepElement for f64 {
    fn step_up(self) -> Self {
        self + 1.0
    }

    fn step_down(self) -> Self {
        self - 1.0
    }
}
