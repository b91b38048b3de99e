//! Utilities to use the blake2b chip: an example circuit, input preparation and provers.

/// Example circuit hashing a private padded message.
pub mod blake2b_circuit;
/// Mock and real provers for the example circuit.
pub mod circuit_runner;
/// Errors of the host-side input preparation.
pub mod error;
