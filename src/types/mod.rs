//! Basic types for the blake2b chip.

/// This module holds types that exist across our code to explicitly state that a value is in a
/// given range. Everytime you see an AssignedBit, AssignedByte or AssignedBlake2bWord, you can be
/// certain that their values were constrained in the circuit: a bit by the boolean gate, a byte
/// and a word by a running-sum decomposition into bits that are themselves constrained.
///
/// All these types are created in a context where its value has been constrained by a circuit
/// restriction to be in range. Only the base operations are able to build them.
use ff::PrimeField;
use midnight_proofs::circuit::AssignedCell;
use num_bigint::BigUint;
use std::array;

/// Native type for an [AssignedCell] that hasn't been constrained yet
pub type AssignedNative<F> = AssignedCell<F, F>;

/// Module for assigned bits.
pub mod bit;
/// Module for assigned bytes.
pub mod byte;
/// Module for assigned blake2b words.
pub mod blake2b_word;

/// Returns the `nb_bits` least significant bits of a field element, least significant first.
/// We assume that the internal representation of the field is in little endian form. If it's
/// not, the result is undefined and probably incorrect.
/// Bits above the field representation are reported as zero, so this never fails: a value
/// that doesn't fit in `nb_bits` simply produces a decomposition the circuit will reject.
pub(crate) fn le_bits_from_field<F: PrimeField>(fe: &F, nb_bits: usize) -> Vec<bool> {
    let repr = fe.to_repr();
    let bytes = repr.as_ref();
    (0..nb_bits)
        .map(|i| bytes.get(i / 8).is_some_and(|byte| (byte >> (i % 8)) & 1 == 1))
        .collect()
}

/// Interprets the little endian representation of a field element as an unsigned integer.
pub(crate) fn biguint_from_le_field<F: PrimeField>(fe: &F) -> BigUint {
    BigUint::from_bytes_le(fe.to_repr().as_ref())
}

/// Maps an unsigned integer into the field. Values above the modulus wrap around.
pub(crate) fn field_from_biguint<F: PrimeField>(value: &BigUint) -> F {
    value
        .to_bytes_be()
        .iter()
        .fold(F::ZERO, |acc, byte| acc * F::from(256u64) + F::from(u64::from(*byte)))
}

/// Converts a slice of exactly `N` elements into an array. The length is a circuit shape
/// invariant, so a mismatch is a programming error.
pub(crate) fn to_array<T: Clone, const N: usize>(elements: &[T]) -> [T; N] {
    assert_eq!(elements.len(), N, "expected exactly {N} elements, got {}", elements.len());
    array::from_fn(|i| elements[i].clone())
}
