use thiserror::Error;

/// Errors raised while turning a user message into circuit inputs. These are checked before
/// any circuit is built, the circuit itself only reports failures through the proof system.
#[derive(Debug, Error)]
pub enum CircuitInputError {
    /// The gadget hashes messages of at least one byte.
    #[error("message is empty, at least one byte is needed")]
    EmptyMessage,

    /// The message does not fit in the blocks the circuit is built for.
    #[error("message has {len} bytes but the circuit holds at most {max}")]
    MessageTooLong {
        /// Length of the message in bytes.
        len: usize,
        /// Capacity of the circuit in bytes.
        max: usize,
    },

    /// The expected digest is not a Blake2b-256 digest.
    #[error("expected digest has {0} bytes instead of 32")]
    InvalidDigestLength(usize),

    /// The circuit holds at least one block and at most
    /// [crate::blake2b::utils::MAX_SUPPORTED_BLOCKS], and its size must not exceed
    /// [crate::usage_utils::circuit_runner::MAX_K].
    #[error("a circuit of {0} blocks is not supported")]
    InvalidBlockCount(usize),

    /// The message is not valid hex.
    #[error("invalid hex message: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}
