use super::bit::AssignedBit;
use super::*;
use midnight_proofs::circuit::{Cell, Value};

/// The inner type of AssignedBlake2bWord. A wrapper around `u64`
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Blake2bWord(pub u64);

impl Blake2bWord {
    /// Reads a [Blake2bWord] back from a field element, keeping its 64 least significant bits.
    pub(crate) fn new_from_field<F: PrimeField>(field: F) -> Self {
        let repr = field.to_repr();
        let mut bytes = [0u8; 8];
        for (byte, repr_byte) in bytes.iter_mut().zip(repr.as_ref()) {
            *byte = *repr_byte;
        }
        u64::from_le_bytes(bytes).into()
    }
}

impl From<u64> for Blake2bWord {
    /// An u64 has a trivial conversion into a [Blake2bWord]
    fn from(value: u64) -> Self {
        Blake2bWord(value)
    }
}

/// This wrapper type on `AssignedNative<F>` is designed to enforce type safety
/// on assigned Blake2bWords. It prevents the user from creating an [AssignedBlake2bWord]
/// without using the designated entry points, which guarantee (with constraints) that the
/// assigned value is indeed in the range [0, 2^64 - 1].
///
/// A word always travels with its little endian bit decomposition. Xor and rotations work on
/// the bits, additions work on the full number, and neither has to decompose the word again.
#[derive(Clone, Debug)]
pub struct AssignedBlake2bWord<F: PrimeField> {
    full_number: AssignedNative<F>,
    bits: [AssignedBit<F>; 64],
}

impl<F: PrimeField> AssignedBlake2bWord<F> {
    /// Pairs a cell with the 64 bits it was constrained to recompose.
    /// WARNING: only the base operations can call this, since they're the ones that enforce the
    /// decomposition constraints.
    pub(crate) fn new_unchecked(
        full_number: AssignedNative<F>,
        bits: [AssignedBit<F>; 64],
    ) -> Self {
        Self { full_number, bits }
    }

    /// Gets the inner cell of an assigned word.
    pub fn cell(&self) -> Cell {
        self.full_number.cell()
    }

    /// Gets the inner value of an assigned word.
    pub fn value(&self) -> Value<Blake2bWord> {
        self.full_number.value().map(|v| Blake2bWord::new_from_field(*v))
    }

    /// The assigned word seen as a native field cell.
    pub fn as_native(&self) -> &AssignedNative<F> {
        &self.full_number
    }

    /// The little endian bits of the word.
    pub fn bits(&self) -> &[AssignedBit<F>; 64] {
        &self.bits
    }
}
