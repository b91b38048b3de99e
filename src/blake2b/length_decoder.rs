//! The message length is a private input, but the circuit must know which block is the last
//! one to apply the finalization flag and to pick the digest. The index of that block is
//! `ceil(L / 128) - 1`, computed out of circuit as a division hint and verified in circuit.
//! The same length marks where the zero padding starts, and the padding bytes are constrained
//! to be zero.

use crate::base_operations::BaseInstructions;
use crate::blake2b::utils::BLAKE2B_BLOCK_SIZE;
use crate::types::bit::AssignedBit;
use crate::types::{biguint_from_le_field, field_from_biguint, AssignedNative};
use ff::PrimeField;
use midnight_proofs::circuit::{Region, Value};
use midnight_proofs::plonk::Error;
use num_bigint::BigUint;

/// Bits of the range check on the quotient of the length division.
const QUOTIENT_BITS: usize = 64;

/// Computes `(dividend / divisor, dividend % divisor)` over the integers, reading the field
/// element as an unsigned integer. Nothing here is constrained.
pub(crate) fn div_rem_hint<F: PrimeField>(
    dividend: Value<F>,
    divisor: u64,
) -> (Value<F>, Value<F>) {
    let quotient_and_remainder = dividend.map(|dividend| {
        let dividend = biguint_from_le_field(&dividend);
        let divisor = BigUint::from(divisor);
        (
            field_from_biguint::<F>(&(&dividend / &divisor)),
            field_from_biguint::<F>(&(&dividend % &divisor)),
        )
    });
    (
        quotient_and_remainder.map(|(quotient, _)| quotient),
        quotient_and_remainder.map(|(_, remainder)| remainder),
    )
}

/// Constrains `quotient` and `remainder` to be the integer division of `dividend` by
/// `divisor`: `quotient·divisor + remainder == dividend`, `remainder < divisor` and
/// `quotient < 2^64`. Without the range checks a prover could pick any remainder and pay for
/// it with a wrapped-around quotient.
pub fn verify_division<F: PrimeField, B: BaseInstructions<F>>(
    base: &B,
    region: &mut Region<'_, F>,
    offset: &mut usize,
    dividend: &AssignedNative<F>,
    quotient: &AssignedNative<F>,
    remainder: &AssignedNative<F>,
    divisor: u64,
) -> Result<(), Error> {
    assert!(divisor.is_power_of_two(), "The divisor must be a power of two");

    let recomposed = base.linear_combination(
        region,
        offset,
        &[(F::from(divisor), quotient), (F::ONE, remainder)],
        F::ZERO,
    )?;
    base.assert_equal(region, &recomposed, dividend)?;
    base.range_check(region, offset, remainder, divisor.trailing_zeros() as usize)?;
    base.range_check(region, offset, quotient, QUOTIENT_BITS)
}

/// Returns the index of the block holding the last byte of a message of `input_length`
/// bytes, as `(input_length + 127) / 128 - 1`.
pub fn decode_final_block_index<F: PrimeField, B: BaseInstructions<F>>(
    base: &B,
    region: &mut Region<'_, F>,
    offset: &mut usize,
    input_length: &AssignedNative<F>,
) -> Result<AssignedNative<F>, Error> {
    let block_size = BLAKE2B_BLOCK_SIZE as u64;
    let dividend = base.add_constant(region, offset, input_length, F::from(block_size - 1))?;

    let (quotient_value, remainder_value) = div_rem_hint(dividend.value().cloned(), block_size);
    let quotient = base.witness(region, offset, quotient_value)?;
    let remainder = base.witness(region, offset, remainder_value)?;
    verify_division(base, region, offset, &dividend, &quotient, &remainder, block_size)?;

    base.add_constant(region, offset, &quotient, -F::ONE)
}

/// Turns a block index into a one-hot vector of `max_blocks` flags. The flags are summed and
/// the sum is asserted equal to `one`, so an index outside `[0, max_blocks)` makes the circuit
/// unsatisfiable.
pub fn encode_final_block_selector<F: PrimeField, B: BaseInstructions<F>>(
    base: &B,
    region: &mut Region<'_, F>,
    offset: &mut usize,
    final_block_index: &AssignedNative<F>,
    one: &AssignedNative<F>,
    max_blocks: usize,
) -> Result<Vec<AssignedBit<F>>, Error> {
    assert!(max_blocks > 0, "The selector needs at least one block");

    let mut flags = Vec::with_capacity(max_blocks);
    for i in 0..max_blocks {
        let distance =
            base.add_constant(region, offset, final_block_index, -F::from(i as u64))?;
        flags.push(base.is_zero(region, offset, &distance)?);
    }

    let mut flags_sum = flags[0].as_native().clone();
    for flag in &flags[1..] {
        flags_sum = base.add(region, offset, &flags_sum, flag.as_native())?;
    }
    base.assert_equal(region, &flags_sum, one)?;

    Ok(flags)
}

/// Constrains every byte of `padded_input` at a position `>= input_length` to be zero.
///
/// A running flag is raised at the position equal to `input_length` and stays raised after
/// it, and each byte times its flag must vanish. Positions are distinct field elements, so the
/// flag is raised at most once and remains boolean.
pub fn constrain_zero_padding<F: PrimeField, B: BaseInstructions<F>>(
    base: &B,
    region: &mut Region<'_, F>,
    offset: &mut usize,
    padded_input: &[AssignedNative<F>],
    input_length: &AssignedNative<F>,
    zero: &AssignedNative<F>,
) -> Result<(), Error> {
    let mut past_end: Option<AssignedNative<F>> = None;
    for (position, byte) in padded_input.iter().enumerate() {
        let distance = base.add_constant(region, offset, input_length, -F::from(position as u64))?;
        let reached = base.is_zero(region, offset, &distance)?;
        let flag = match &past_end {
            Some(previous) => base.add(region, offset, previous, reached.as_native())?,
            None => reached.as_native().clone(),
        };

        let masked = base.mul(region, offset, byte, &flag)?;
        base.assert_equal(region, &masked, zero)?;
        past_end = Some(flag);
    }
    Ok(())
}
