use super::*;
use midnight_proofs::circuit::{Cell, Value};

/// The inner type of AssignedBit. A wrapper around `bool`
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Bit(pub bool);

impl Bit {
    /// Reads a [Bit] back from a field element. Anything different from one is read as zero;
    /// the circuit is the one responsible for rejecting non-boolean values.
    pub(crate) fn new_from_field<F: PrimeField>(field: F) -> Self {
        Bit(field == F::ONE)
    }

    /// The field element holding this bit.
    pub(crate) fn to_field<F: PrimeField>(self) -> F {
        F::from(u64::from(self.0))
    }
}

/// This wrapper type on `AssignedNative<F>` is designed to enforce type safety
/// on assigned bits. Every [AssignedBit] lives in a cell that is constrained to be 0 or 1:
/// either by the boolean gate of a running-sum decomposition, or because it is the output of
/// an operation (xor, negate, select, is-zero) that maps booleans to booleans.
#[derive(Clone, Debug)]
#[must_use]
pub struct AssignedBit<F: PrimeField>(AssignedNative<F>);

impl<F: PrimeField> AssignedBit<F> {
    /// Wraps a cell as a bit.
    /// WARNING: only the base operations can call this, since they're the ones activating the
    /// constraints that make the cell boolean.
    pub(crate) fn new_unchecked(cell: AssignedNative<F>) -> Self {
        Self(cell)
    }

    /// Gets the inner cell of an assigned bit.
    pub fn cell(&self) -> Cell {
        self.0.cell()
    }

    /// Gets the inner value of an assigned bit.
    pub fn value(&self) -> Value<Bit> {
        self.0.value().map(|v| Bit::new_from_field(*v))
    }

    /// The assigned bit seen as a native field cell.
    pub fn as_native(&self) -> &AssignedNative<F> {
        &self.0
    }
}
