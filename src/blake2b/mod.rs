//! A chip defining a variable-length Blake2b-256 hash invocation. The input is a zero padded
//! message of a whole number of blocks plus its true length in bytes, both as [AssignedNative]
//! cells. The padded bytes are range checked inside the chip, so the circuit will fail if
//! they're not bytes.
//!
//! The shape of the circuit only depends on the amount of padded blocks: every block is
//! compressed, and the state after the block that holds the last message byte is selected
//! with a one-hot vector derived from the length.
//!
//! The chip relies on a set of basic instructions, implemented as a trait called
//! [blake2b_instructions::Blake2bInstructions]. There is currently one implementation of the
//! instruction set, [blake2b_chip::Blake2bChip], which works over bit decompositions: every
//! word carries its 64 bits, xor is one row per bit and rotations are free.
//!
//! [AssignedNative]: crate::types::AssignedNative

/// This is the trait that contains most of the behaviour of the blake2b chips.
pub mod blake2b_instructions;

/// Basic definitions and constants for the blake2b chip.
pub mod utils;

/// Conversions between bytes and little endian words.
pub mod codec;

/// Decoding of the message length into the one-hot final block selector.
pub mod length_decoder;

/// The chip.
pub mod blake2b_chip;

/// Number of advice columns required by the chip.
pub const NB_BLAKE2B_ADVICE_COLS: usize = 4;

/// Number of fixed coefficient columns required by the chip, the constants column aside.
pub const NB_BLAKE2B_FIXED_COLS: usize = 6;
