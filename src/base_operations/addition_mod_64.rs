use super::base_instructions::BaseInstructions;
use crate::types::blake2b_word::AssignedBlake2bWord;
use crate::types::{to_array, AssignedNative};
use ff::PrimeField;
use midnight_proofs::circuit::Region;
use midnight_proofs::plonk::Error;
use std::iter;

/// Number of carry bits needed for the sum of `summands` 64-bit words.
fn carry_bits_for(summands: usize) -> usize {
    match summands {
        2 => 1,
        3 => 2,
        _ => panic!("Addition mod 64 takes 2 or 3 summands"),
    }
}

/// Adds two or three words modulo 2^64.
///
/// The full sum is computed in one row and decomposed into `64 + carries` bits, which proves it
/// fits there. The result is then `sum - Σ carry_j·2^(64+j)`, which equals the recomposition of
/// the low 64 bits without another running sum. Those 64 bits are the decomposition of the
/// returned word.
pub fn add_mod_64<F: PrimeField, B: BaseInstructions<F>>(
    base: &B,
    region: &mut Region<'_, F>,
    offset: &mut usize,
    summands: &[&AssignedBlake2bWord<F>],
) -> Result<AssignedBlake2bWord<F>, Error> {
    let carry_bits = carry_bits_for(summands.len());

    let terms: Vec<(F, &AssignedNative<F>)> =
        summands.iter().map(|word| (F::ONE, word.as_native())).collect();
    let sum = base.linear_combination(region, offset, &terms, F::ZERO)?;
    let bits = base.to_bits(region, offset, &sum, 64 + carry_bits)?;

    let truncation_terms: Vec<(F, &AssignedNative<F>)> = iter::once((F::ONE, &sum))
        .chain(
            bits[64..]
                .iter()
                .enumerate()
                .map(|(j, carry)| (-F::from_u128(1u128 << (64 + j)), carry.as_native())),
        )
        .collect();
    let result = base.linear_combination(region, offset, &truncation_terms, F::ZERO)?;

    Ok(AssignedBlake2bWord::new_unchecked(result, to_array(&bits[..64])))
}
