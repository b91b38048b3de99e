//! Halo2 variable-length Blake2b-256 implementation.
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![deny(rust_2018_idioms)]

pub mod base_operations;

pub mod blake2b;
pub mod types;
pub mod usage_utils;
