//! Blake2b reads its message and writes its digest as little endian 64-bit words. Since bytes
//! and words both carry their bit decompositions, packing is a concatenation of bits and
//! unpacking is a split of them.

use crate::base_operations::BaseInstructions;
use crate::types::blake2b_word::AssignedBlake2bWord;
use crate::types::byte::AssignedByte;
use crate::types::AssignedNative;
use ff::PrimeField;
use midnight_proofs::circuit::Region;
use midnight_proofs::plonk::Error;

/// Packs every 8 bytes into a word, the first byte being the least significant one. Each byte
/// is decomposed into 8 bits, which also proves it is smaller than 256.
pub fn bytes_to_words<F: PrimeField, B: BaseInstructions<F>>(
    base: &B,
    region: &mut Region<'_, F>,
    offset: &mut usize,
    bytes: &[AssignedNative<F>],
) -> Result<Vec<AssignedBlake2bWord<F>>, Error> {
    assert!(bytes.len() % 8 == 0, "Amount of bytes must be a multiple of 8 to build words");

    bytes
        .chunks(8)
        .map(|word_bytes| {
            let mut bits = Vec::with_capacity(64);
            for byte in word_bytes {
                let byte = base.byte_from_native(region, offset, byte)?;
                bits.extend_from_slice(byte.bits());
            }
            base.word_from_bits(region, offset, &bits)
        })
        .collect()
}

/// Splits every word into 8 bytes, least significant first.
pub fn words_to_bytes<F: PrimeField, B: BaseInstructions<F>>(
    base: &B,
    region: &mut Region<'_, F>,
    offset: &mut usize,
    words: &[AssignedBlake2bWord<F>],
) -> Result<Vec<AssignedByte<F>>, Error> {
    words
        .iter()
        .flat_map(|word| word.bits().chunks(8))
        .map(|byte_bits| base.byte_from_bits(region, offset, byte_bits))
        .collect()
}
