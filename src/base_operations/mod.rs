//! Base operations of the circuit. Everything the blake2b chip needs from the proof system is
//! expressed here as a handful of custom gates over four advice columns:
//! * an arithmetic gate with fixed coefficients (additions, linear combinations, products,
//!   selections and zero tests),
//! * a running-sum decomposition with a boolean gate (range checks and bit decompositions),
//! * a bitwise xor gate and a bit negation gate.
//!
//! Word-level operations (addition mod 2^64, xor, rotations) are built on top of them and only
//! ever see the [BaseInstructions] interface.

use crate::types::bit::{AssignedBit, Bit};
use crate::types::{le_bits_from_field, to_array, AssignedNative};
use ff::PrimeField;
use midnight_proofs::circuit::{Region, Value};
use midnight_proofs::plonk::{
    Advice, Column, ConstraintSystem, Constraints, Error, Expression, Fixed, Selector,
};
use midnight_proofs::poly::Rotation;

/// Word addition modulo 2^64 with explicit carries.
pub mod addition_mod_64;
/// The arithmetic gate.
pub mod arithmetic;
/// The chip implementing [BaseInstructions].
pub mod base_chip;
/// The interface the blake2b chip is written against.
pub mod base_instructions;
/// Running-sum bit decomposition.
pub mod decompose;
/// Bit negation.
pub mod negate;
/// Rotations as relabelings of bit decompositions.
pub mod rotation;
/// Bitwise xor.
pub mod xor;

pub use base_chip::{BaseOperationsChip, BaseOperationsConfig};
pub use base_instructions::BaseInstructions;

/// One operand of a gated row. Either a copy of a cell already in the trace or a fresh
/// value that will be constrained by the row itself.
#[derive(Debug)]
pub(crate) enum Wire<'a, F: PrimeField> {
    Copy(&'a AssignedNative<F>),
    Fresh(Value<F>),
}

impl<F: PrimeField> Wire<'_, F> {
    pub(crate) fn zero() -> Self {
        Wire::Fresh(Value::known(F::ZERO))
    }
}
