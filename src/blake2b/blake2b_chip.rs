use crate::base_operations::addition_mod_64::add_mod_64;
use crate::base_operations::rotation::rotate_right;
use crate::base_operations::{BaseInstructions, BaseOperationsChip, BaseOperationsConfig};
use crate::blake2b::blake2b_instructions::{Blake2bInstructions, ConstantCells};
use crate::blake2b::codec;
use crate::blake2b::length_decoder::{
    constrain_zero_padding, decode_final_block_index, encode_final_block_selector,
};
use crate::blake2b::utils::{
    enforce_input_sizes, ABCD, BLAKE2B_256_OUTPUT_SIZE, BLAKE2B_BLOCK_SIZE, IV_CONSTANTS,
    PARAMETER_BLOCK_0, ROTATIONS, ROUNDS, SIGMA,
};
use crate::blake2b::{NB_BLAKE2B_ADVICE_COLS, NB_BLAKE2B_FIXED_COLS};
use crate::types::bit::AssignedBit;
use crate::types::blake2b_word::AssignedBlake2bWord;
use crate::types::byte::AssignedByte;
use crate::types::{to_array, AssignedNative};
use ff::PrimeField;
use midnight_proofs::circuit::{Chip, Layouter, Region};
use midnight_proofs::plonk::{Advice, Column, ConstraintSystem, Error, Fixed};
use std::array;

/// Columns and gates for the blake2b chip implementation.
#[derive(Clone, Debug)]
pub struct Blake2bConfig {
    /// Base operations config, which owns every gate the chip uses.
    pub base: BaseOperationsConfig,
}

/// This is the main chip for the Blake2b-256 hash function. It is responsible for the entire
/// hash computation, from the padded message bytes to the digest bytes.
///
/// All the work happens over bit decompositions: words are added as field elements and
/// decomposed once, xor works bit by bit and rotations only relabel bits. The circuit does not
/// depend on the message length, only on the amount of padded blocks.
#[derive(Clone, Debug)]
pub struct Blake2bChip<F: PrimeField> {
    config: Blake2bConfig,
    base: BaseOperationsChip<F>,
}

impl<F: PrimeField> Chip<F> for Blake2bChip<F> {
    type Config = Blake2bConfig;
    type Loaded = ();

    fn config(&self) -> &Self::Config {
        &self.config
    }

    fn loaded(&self) -> &Self::Loaded {
        &()
    }
}

impl<F: PrimeField> Blake2bChip<F> {
    /// Generation of a fresh chip from a configuration.
    pub fn new(config: &Blake2bConfig) -> Self {
        Self {
            config: config.clone(),
            base: BaseOperationsChip::new(&config.base),
        }
    }

    /// Configuration of the circuit, this includes initialization of all the necessary configs.
    /// It should be called in the configuration of the user circuit before instantiating the
    /// Blake2b gadget.
    ///
    /// Note: following the convention in midnight-circuits, this function enables equality on all
    /// necessary columns, i.e., it should not be done manually before calling this function.
    pub fn configure(
        meta: &mut ConstraintSystem<F>,
        advice: [Column<Advice>; NB_BLAKE2B_ADVICE_COLS],
        coefficients: [Column<Fixed>; NB_BLAKE2B_FIXED_COLS],
        constants: Column<Fixed>,
    ) -> Blake2bConfig {
        let base = BaseOperationsChip::configure(meta, advice, coefficients, constants);
        Blake2bConfig { base }
    }

    /// Computes the Blake2b-256 digest of the first `input_length` bytes of `padded_input`.
    ///
    /// `padded_input` holds a whole number of blocks, which fixes the shape of the circuit.
    /// The bytes after `input_length` must be zero. The circuit is unsatisfiable unless they
    /// are and `1 <= input_length <= padded_input.len()`.
    ///
    /// Panics if the padded input is empty, is not a multiple of 128 bytes, or has more than
    /// [crate::blake2b::utils::MAX_SUPPORTED_BLOCKS] blocks.
    #[tracing::instrument(skip_all, name = "blake2b_256_hash")]
    pub fn hash(
        &self,
        layouter: &mut impl Layouter<F>,
        padded_input: &[AssignedNative<F>],
        input_length: &AssignedNative<F>,
    ) -> Result<[AssignedByte<F>; BLAKE2B_256_OUTPUT_SIZE], Error> {
        enforce_input_sizes(padded_input.len());
        let max_blocks = padded_input.len() / BLAKE2B_BLOCK_SIZE;
        tracing::debug!(max_blocks, "synthesizing blake2b-256");

        layouter.assign_region(
            || "blake2b-256",
            |mut region| {
                let mut offset = 0;
                let region = &mut region;
                let offset = &mut offset;

                let constants = self.assign_constant_cells(region, offset)?;
                let is_final_block = self.encode_final_block_selector(
                    region,
                    offset,
                    &constants,
                    input_length,
                    max_blocks,
                )?;

                self.constrain_zero_padding(
                    region,
                    offset,
                    &constants,
                    padded_input,
                    input_length,
                )?;

                let words = self.bytes_to_words(region, offset, padded_input)?;
                let blocks: Vec<[AssignedBlake2bWord<F>; 16]> =
                    words.chunks(16).map(|block| to_array(block)).collect();

                let final_state = self.perform_blake2b_iterations(
                    region,
                    offset,
                    &constants,
                    &blocks,
                    input_length,
                    &is_final_block,
                )?;

                // The digest is the little endian encoding of the first 4 state words.
                let digest_words = final_state[..BLAKE2B_256_OUTPUT_SIZE / 8]
                    .iter()
                    .map(|word| self.base.word_from_native(region, offset, word))
                    .collect::<Result<Vec<_>, Error>>()?;
                let digest = self.words_to_bytes(region, offset, &digest_words)?;

                tracing::debug!(rows = *offset, "blake2b-256 region laid out");
                Ok(to_array(&digest))
            },
        )
    }
}

impl<F: PrimeField> Blake2bInstructions<F> for Blake2bChip<F> {
    /// The constants are decomposed once and shared by every compression.
    fn assign_constant_cells(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
    ) -> Result<ConstantCells<F>, Error> {
        let iv = IV_CONSTANTS
            .iter()
            .map(|constant| self.base.constant_word(region, offset, *constant))
            .collect::<Result<Vec<_>, Error>>()?;
        let iv: [AssignedBlake2bWord<F>; 8] = to_array(&iv);

        // state[0] = state[0] ^ 0x01010000 ^ outlen
        let mut initial_state = iv.clone();
        initial_state[0] =
            self.base.constant_word(region, offset, IV_CONSTANTS[0] ^ PARAMETER_BLOCK_0)?;

        let zero_word = self.base.constant_word(region, offset, 0)?;
        let one = self.base.assign_constant(region, offset, F::ONE)?;

        Ok(ConstantCells {
            iv,
            initial_state,
            zero_word,
            one,
        })
    }

    fn bytes_to_words(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        bytes: &[AssignedNative<F>],
    ) -> Result<Vec<AssignedBlake2bWord<F>>, Error> {
        codec::bytes_to_words(&self.base, region, offset, bytes)
    }

    fn words_to_bytes(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        words: &[AssignedBlake2bWord<F>],
    ) -> Result<Vec<AssignedByte<F>>, Error> {
        codec::words_to_bytes(&self.base, region, offset, words)
    }

    fn encode_final_block_selector(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        constants: &ConstantCells<F>,
        input_length: &AssignedNative<F>,
        max_blocks: usize,
    ) -> Result<Vec<AssignedBit<F>>, Error> {
        let final_block_index = decode_final_block_index(&self.base, region, offset, input_length)?;
        encode_final_block_selector(
            &self.base,
            region,
            offset,
            &final_block_index,
            &constants.one,
            max_blocks,
        )
    }

    fn constrain_zero_padding(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        constants: &ConstantCells<F>,
        padded_input: &[AssignedNative<F>],
        input_length: &AssignedNative<F>,
    ) -> Result<(), Error> {
        let zero = constants.zero_word.as_native();
        constrain_zero_padding(&self.base, region, offset, padded_input, input_length, zero)
    }

    fn perform_blake2b_iterations(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        constants: &ConstantCells<F>,
        blocks: &[[AssignedBlake2bWord<F>; 16]],
        input_length: &AssignedNative<F>,
        is_final_block: &[AssignedBit<F>],
    ) -> Result<[AssignedNative<F>; 8], Error> {
        assert_eq!(blocks.len(), is_final_block.len(), "One selector flag per block is needed");

        let zero = constants.zero_word.as_native();
        let mut global_state = constants.initial_state.clone();
        let mut selected_state: [AssignedNative<F>; 8] = array::from_fn(|_| zero.clone());

        for (i, (block, is_final)) in blocks.iter().zip(is_final_block).enumerate() {
            // t = is_final ? L : (i + 1) * 128
            let full_blocks_bytes = self.base.assign_constant(
                region,
                offset,
                F::from(((i + 1) * BLAKE2B_BLOCK_SIZE) as u64),
            )?;
            let processed_bytes =
                self.base.select(region, offset, is_final, input_length, &full_blocks_bytes)?;

            global_state = self.compress(
                region,
                offset,
                constants,
                &global_state,
                block,
                &processed_bytes,
                is_final,
            )?;

            // Exactly one block is final, so only its state survives the sum.
            for (selected, word) in selected_state.iter_mut().zip(&global_state) {
                let contribution =
                    self.base.select(region, offset, is_final, word.as_native(), zero)?;
                *selected = self.base.add(region, offset, selected, &contribution)?;
            }
        }

        Ok(selected_state)
    }

    #[tracing::instrument(skip_all, name = "blake2b_compress")]
    fn compress(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        constants: &ConstantCells<F>,
        state: &[AssignedBlake2bWord<F>; 8],
        block: &[AssignedBlake2bWord<F>; 16],
        processed_bytes: &AssignedNative<F>,
        is_final_block: &AssignedBit<F>,
    ) -> Result<[AssignedBlake2bWord<F>; 8], Error> {
        let mut v: [AssignedBlake2bWord<F>; 16] = array::from_fn(|i| {
            if i < 8 {
                state[i].clone()
            } else {
                constants.iv[i - 8].clone()
            }
        });

        // v[12] ^= t mod 2^64, v[13] ^= t >> 64
        let counter = self.base.word_from_native(region, offset, processed_bytes)?;
        v[12] = self.base.xor_words(region, offset, &v[12], &counter)?;
        v[13] = self.base.xor_words(region, offset, &v[13], &constants.zero_word)?;

        // v[14] = is_final ? !v[14] : v[14]
        let mut finalization_bits = Vec::with_capacity(64);
        for bit in v[14].bits() {
            let flipped = self.base.flip_bit(region, offset, bit)?;
            finalization_bits.push(self.base.select_bit(
                region,
                offset,
                is_final_block,
                &flipped,
                bit,
            )?);
        }
        v[14] = self.base.word_from_bits(region, offset, &finalization_bits)?;

        for round in 0..ROUNDS {
            let sigma = &SIGMA[round % SIGMA.len()];
            for (j, state_indexes) in ABCD.iter().enumerate() {
                self.mix(
                    region,
                    offset,
                    *state_indexes,
                    &block[sigma[2 * j]],
                    &block[sigma[2 * j + 1]],
                    &mut v,
                )?;
            }
        }

        let mut next_state = Vec::with_capacity(8);
        for i in 0..8 {
            let partial = self.base.xor_words(region, offset, &state[i], &v[i])?;
            next_state.push(self.base.xor_words(region, offset, &partial, &v[i + 8])?);
        }
        Ok(to_array(&next_state))
    }

    fn mix(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        state_indexes: [usize; 4],
        x: &AssignedBlake2bWord<F>,
        y: &AssignedBlake2bWord<F>,
        v: &mut [AssignedBlake2bWord<F>; 16],
    ) -> Result<(), Error> {
        self.mix_single(region, offset, state_indexes, ROTATIONS[0], x, v)?;
        self.mix_single(region, offset, state_indexes, ROTATIONS[1], y, v)
    }

    fn mix_single(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        state_indexes: [usize; 4],
        rotations: (usize, usize),
        z: &AssignedBlake2bWord<F>,
        v: &mut [AssignedBlake2bWord<F>; 16],
    ) -> Result<(), Error> {
        let [a, b, c, d] = state_indexes;
        let (rotation_d, rotation_b) = rotations;

        // v[a] = v[a] + v[b] + z mod 2^64
        v[a] = add_mod_64(&self.base, region, offset, &[&v[a], &v[b], z])?;

        // v[d] = rotr_64(v[d] ^ v[a], rotation_d)
        let d_xor_a = self.base.xor_bits(region, offset, v[d].bits(), v[a].bits())?;
        v[d] = self.base.word_from_bits(region, offset, &rotate_right(&d_xor_a, rotation_d))?;

        // v[c] = v[c] + v[d] mod 2^64
        v[c] = add_mod_64(&self.base, region, offset, &[&v[c], &v[d]])?;

        // v[b] = rotr_64(v[b] ^ v[c], rotation_b)
        let b_xor_c = self.base.xor_bits(region, offset, v[b].bits(), v[c].bits())?;
        v[b] = self.base.word_from_bits(region, offset, &rotate_right(&b_xor_c, rotation_b))?;

        Ok(())
    }
}
