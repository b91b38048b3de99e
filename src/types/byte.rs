use super::bit::AssignedBit;
use super::*;
use midnight_proofs::circuit::{Cell, Value};

/// The inner type of AssignedByte. A wrapper around `u8`
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Byte(pub u8);

impl Byte {
    /// Reads a [Byte] back from a field element, keeping its least significant byte.
    pub(crate) fn new_from_field<F: PrimeField>(field: F) -> Self {
        Byte(field.to_repr().as_ref().first().copied().unwrap_or_default())
    }
}

/// This wrapper type on `AssignedNative<F>` is designed to enforce type safety
/// on assigned bytes. It prevents the user from creating an `AssignedByte`
/// without using the designated entry points, which guarantee (with
/// constraints) that the assigned value is indeed in the range [0, 256).
///
/// The byte keeps its little endian bit decomposition, so it can be merged into words
/// without decomposing it again.
#[derive(Clone, Debug)]
pub struct AssignedByte<F: PrimeField> {
    full_number: AssignedNative<F>,
    bits: [AssignedBit<F>; 8],
}

impl<F: PrimeField> AssignedByte<F> {
    /// Pairs a cell with the bits it was constrained to recompose.
    /// WARNING: only the base operations can call this, since they're the ones that enforce the
    /// decomposition constraints.
    pub(crate) fn new_unchecked(full_number: AssignedNative<F>, bits: [AssignedBit<F>; 8]) -> Self {
        Self { full_number, bits }
    }

    /// Gets the inner cell of an assigned byte.
    pub fn cell(&self) -> Cell {
        self.full_number.cell()
    }

    /// Gets the inner value of an assigned byte.
    pub fn value(&self) -> Value<Byte> {
        self.full_number.value().map(|v| Byte::new_from_field(*v))
    }

    /// The assigned byte seen as a native field cell.
    pub fn as_native(&self) -> &AssignedNative<F> {
        &self.full_number
    }

    /// The little endian bits of the byte.
    pub fn bits(&self) -> &[AssignedBit<F>; 8] {
        &self.bits
    }
}
