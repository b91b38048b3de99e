use crate::types::bit::AssignedBit;
use crate::types::blake2b_word::AssignedBlake2bWord;
use crate::types::byte::AssignedByte;
use crate::types::AssignedNative;
use ff::PrimeField;
use midnight_proofs::circuit::Region;
use midnight_proofs::plonk::Error;

/// Cells assigned once at the beginning of the trace and shared by every block.
#[derive(Clone, Debug)]
pub struct ConstantCells<F: PrimeField> {
    /// Initialization vector, used as the second half of every work vector.
    pub iv: [AssignedBlake2bWord<F>; 8],
    /// Chaining state before the first block: the IV with the parameter block folded into
    /// its first word.
    pub initial_state: [AssignedBlake2bWord<F>; 8],
    /// The zero word, high half of the byte counter. Its cell also serves as the zero every
    /// masked padding byte is compared to.
    pub zero_word: AssignedBlake2bWord<F>,
    /// The constant one, used by the one-hot guard of the block selector.
    pub one: AssignedNative<F>,
}

/// This is the trait that groups the Blake2b implementation chips. Every Blake2b chip
/// should implement this trait.
pub trait Blake2bInstructions<F: PrimeField>: Clone {
    /// Assign initializations constants at the beginning. These constants are the
    /// initialization vector (IV) constants, the initial chaining state, which only depends on
    /// the (fixed) output length, and a couple of small constants.
    fn assign_constant_cells(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
    ) -> Result<ConstantCells<F>, Error>;

    /// Packs bytes into little endian words. Every byte is range checked on the way.
    fn bytes_to_words(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        bytes: &[AssignedNative<F>],
    ) -> Result<Vec<AssignedBlake2bWord<F>>, Error>;

    /// Splits words into their little endian bytes.
    fn words_to_bytes(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        words: &[AssignedBlake2bWord<F>],
    ) -> Result<Vec<AssignedByte<F>>, Error>;

    /// Returns one flag per block, set only for the block holding the last byte of a message
    /// of `input_length` bytes. The circuit is unsatisfiable unless
    /// `1 <= input_length <= max_blocks * 128`.
    fn encode_final_block_selector(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        constants: &ConstantCells<F>,
        input_length: &AssignedNative<F>,
        max_blocks: usize,
    ) -> Result<Vec<AssignedBit<F>>, Error>;

    /// Constrains the bytes of `padded_input` after the first `input_length` ones to be zero,
    /// so the final block is the message followed by zero padding.
    fn constrain_zero_padding(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        constants: &ConstantCells<F>,
        padded_input: &[AssignedNative<F>],
        input_length: &AssignedNative<F>,
    ) -> Result<(), Error>;

    /// Here occurs the top loop of the hash function. It compresses every block, with the byte
    /// counter and the finalization flag of block `i` depending on `is_final_block[i]`, and
    /// accumulates the chaining state of the final block. The returned words are that state.
    fn perform_blake2b_iterations(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        constants: &ConstantCells<F>,
        blocks: &[[AssignedBlake2bWord<F>; 16]],
        input_length: &AssignedNative<F>,
        is_final_block: &[AssignedBit<F>],
    ) -> Result<[AssignedNative<F>; 8], Error>;

    /// This method computes a compression of Blake2b and returns the next chaining state.
    /// `processed_bytes` is the byte counter, which must fit in 64 bits. The finalization
    /// word is complemented when `is_final_block` is set.
    #[allow(clippy::too_many_arguments)]
    fn compress(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        constants: &ConstantCells<F>,
        state: &[AssignedBlake2bWord<F>; 8],
        block: &[AssignedBlake2bWord<F>; 16],
        processed_bytes: &AssignedNative<F>,
        is_final_block: &AssignedBit<F>,
    ) -> Result<[AssignedBlake2bWord<F>; 8], Error>;

    /// This method computes a full mixing step (G) of the algorithm over the work vector.
    /// One compression has 96 of them.
    /// 'x' and 'y' are the message words consumed by this step.
    /// The 'state_indexes' are the positions of the work vector that take part in it.
    fn mix(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        state_indexes: [usize; 4],
        x: &AssignedBlake2bWord<F>,
        y: &AssignedBlake2bWord<F>,
        v: &mut [AssignedBlake2bWord<F>; 16],
    ) -> Result<(), Error>;

    /// Half of a mixing step: two additions modulo 2^64, two xors and two rotations, with
    /// `rotations` being the right rotations of `v[d]` and `v[b]`.
    fn mix_single(
        &self,
        region: &mut Region<'_, F>,
        offset: &mut usize,
        state_indexes: [usize; 4],
        rotations: (usize, usize),
        z: &AssignedBlake2bWord<F>,
        v: &mut [AssignedBlake2bWord<F>; 16],
    ) -> Result<(), Error>;
}
