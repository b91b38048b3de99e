/// Enforces the shape of the padded input at circuit building time.
/// The padded input must be a non empty sequence of whole blocks, and there can't be more
/// blocks than [MAX_SUPPORTED_BLOCKS].
pub(crate) fn enforce_input_sizes(padded_input_size: usize) {
    assert!(padded_input_size > 0, "Padded input must contain at least one block");
    assert!(
        padded_input_size % BLAKE2B_BLOCK_SIZE == 0,
        "Padded input size must be a multiple of 128 bytes"
    );
    assert!(
        padded_input_size / BLAKE2B_BLOCK_SIZE <= MAX_SUPPORTED_BLOCKS,
        "Padded input exceeds the maximum supported amount of blocks"
    );
}

/// Pads a message with zeros up to the next multiple of the block size. The empty message is
/// padded to a single block. This is the shape [crate::blake2b::blake2b_chip::Blake2bChip::hash]
/// expects for its input.
pub fn pad_with_zeros(message: &[u8]) -> Vec<u8> {
    let blocks = message.len().div_ceil(BLAKE2B_BLOCK_SIZE).max(1);
    let mut padded = message.to_vec();
    padded.resize(blocks * BLAKE2B_BLOCK_SIZE, 0);
    padded
}

// ----- Blake2b constants -----

/// Size in bytes of a message block.
pub const BLAKE2B_BLOCK_SIZE: usize = 128;

/// Size in bytes of the digest produced by the gadget.
pub const BLAKE2B_256_OUTPUT_SIZE: usize = 32;

/// Amount of rounds of a compression.
pub const ROUNDS: usize = 12;

/// Bound on the amount of blocks the gadget accepts. The byte counter `t` is at most
/// `MAX_SUPPORTED_BLOCKS * 128 < 2^64`, so its high word is always zero.
pub const MAX_SUPPORTED_BLOCKS: usize = 1 << 24;

/// Parameter block word xored into the first state word: digest length 32, no key, fanout and
/// depth 1.
pub const PARAMETER_BLOCK_0: u64 = 0x0101_0000 ^ BLAKE2B_256_OUTPUT_SIZE as u64;

/// Right rotations of the two halves of a mixing step, as (rotation of d, rotation of b).
pub const ROTATIONS: [(usize, usize); 2] = [(32, 24), (16, 63)];

/// Message permutations. Round `i` uses row `i % 10`.
pub const SIGMA: [[usize; 16]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
    [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
    [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
    [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
    [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
    [12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
    [13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
    [6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
    [10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
];

/// These are constants used for the mixing rounds:
/// In each round, Blake2b algorithm modifies 4 fixed components of the state.
/// The first 4 mixes work on the columns of the work vector seen as a 4x4 matrix
/// (state[0], state[4], state[8], state[12] and so on), the last 4 on its diagonals.
pub const ABCD: [[usize; 4]; 8] = [
    [0, 4, 8, 12],
    [1, 5, 9, 13],
    [2, 6, 10, 14],
    [3, 7, 11, 15],
    [0, 5, 10, 15],
    [1, 6, 11, 12],
    [2, 7, 8, 13],
    [3, 4, 9, 14],
];

/// Initialization vector.
pub const IV_CONSTANTS: [u64; 8] = [
    0x6A09E667F3BCC908u64,
    0xBB67AE8584CAA73Bu64,
    0x3C6EF372FE94F82Bu64,
    0xA54FF53A5F1D36F1u64,
    0x510E527FADE682D1u64,
    0x9B05688C2B3E6C1Fu64,
    0x1F83D9ABFB41BD6Bu64,
    0x5BE0CD19137E2179u64,
];
