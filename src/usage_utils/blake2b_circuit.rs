//! This is an example circuit of how you should use the Blake2b chip

use crate::blake2b::blake2b_chip::{Blake2bChip, Blake2bConfig};
use crate::blake2b::utils::BLAKE2B_BLOCK_SIZE;
use crate::blake2b::{NB_BLAKE2B_ADVICE_COLS, NB_BLAKE2B_FIXED_COLS};
use crate::types::AssignedNative;
use ff::PrimeField;
use midnight_proofs::circuit::{Layouter, SimpleFloorPlanner, Value};
use midnight_proofs::plonk::{
    Advice, Circuit, Column, ConstraintSystem, Error, Fixed, Instance,
};
use std::array;

/// The struct of the circuit. It contains the zero padded message that will be hashed and its
/// true length.
#[derive(Clone, Debug)]
pub struct Blake2bCircuit<F: PrimeField> {
    /// The padded input and the length should be unknown for the verifier.
    padded_input: Vec<Value<F>>,
    input_length: Value<F>,
    /// The amount of blocks should be known at circuit building time, so we don't store it as
    /// a value. Any message of up to `max_blocks * 128` bytes fits in the same circuit.
    max_blocks: usize,
}

/// The configuration of the circuit. It contains the chip that will be used to compute the hash
/// and the column that will hold the expected digest in the form of public inputs.
#[derive(Clone, Debug)]
pub struct Blake2bCircuitConfig {
    /// The chip configuration. We only need this.
    blake2b_config: Blake2bConfig,
    /// Columns where the private inputs are placed.
    advice: [Column<Advice>; NB_BLAKE2B_ADVICE_COLS],
    /// Column that will hold the expected digest in the form of public inputs
    expected_digest: Column<Instance>,
}

impl<F: PrimeField> Circuit<F> for Blake2bCircuit<F> {
    type Config = Blake2bCircuitConfig;
    type FloorPlanner = SimpleFloorPlanner;
    type Params = ();

    fn without_witnesses(&self) -> Self {
        Self {
            padded_input: vec![Value::unknown(); self.max_blocks * BLAKE2B_BLOCK_SIZE],
            input_length: Value::unknown(),
            max_blocks: self.max_blocks,
        }
    }

    fn configure(meta: &mut ConstraintSystem<F>) -> Self::Config {
        let advice: [Column<Advice>; NB_BLAKE2B_ADVICE_COLS] =
            array::from_fn(|_| meta.advice_column());
        let coefficients: [Column<Fixed>; NB_BLAKE2B_FIXED_COLS] =
            array::from_fn(|_| meta.fixed_column());
        let constants = meta.fixed_column();

        let expected_digest = meta.instance_column();
        meta.enable_equality(expected_digest);

        // The chip enables equality on the advice columns it receives.
        let blake2b_config = Blake2bChip::configure(meta, advice, coefficients, constants);

        Blake2bCircuitConfig {
            blake2b_config,
            advice,
            expected_digest,
        }
    }

    fn synthesize(
        &self,
        config: Self::Config,
        mut layouter: impl Layouter<F>,
    ) -> Result<(), Error> {
        // The input bytes are assigned in the circuit before calling the hash function.
        // They're not constrained to be in the range [0,255] here, but they are when used inside
        // the blake2b chip.
        let (assigned_input, assigned_length) =
            self.assign_inputs_to_the_trace(&config, &mut layouter)?;

        let blake2b_chip = Blake2bChip::new(&config.blake2b_config);
        let digest = blake2b_chip.hash(&mut layouter, &assigned_input, &assigned_length)?;

        // Assert results
        for (i, digest_byte) in digest.iter().enumerate() {
            layouter.constrain_instance(digest_byte.cell(), config.expected_digest, i)?;
        }
        Ok(())
    }
}

impl<F: PrimeField> Blake2bCircuit<F> {
    /// Creates a new instance of the circuit for a padded input of `max_blocks` blocks and the
    /// length of the message inside it.
    pub fn new(padded_input: Vec<Value<F>>, input_length: Value<F>, max_blocks: usize) -> Self {
        assert_eq!(
            padded_input.len(),
            max_blocks * BLAKE2B_BLOCK_SIZE,
            "Padded input must hold exactly max_blocks blocks"
        );
        Self {
            padded_input,
            input_length,
            max_blocks,
        }
    }

    /// Amount of blocks the circuit is built for.
    pub fn max_blocks(&self) -> usize {
        self.max_blocks
    }

    /// Here the inputs are stored in the trace. It doesn't really matter how they're stored, this
    /// specific circuit spreads the bytes over the advice columns and puts the length after them.
    fn assign_inputs_to_the_trace(
        &self,
        config: &Blake2bCircuitConfig,
        layouter: &mut impl Layouter<F>,
    ) -> Result<(Vec<AssignedNative<F>>, AssignedNative<F>), Error> {
        layouter.assign_region(
            || "Inputs",
            |mut region| {
                let columns = config.advice.len();
                let input = self
                    .padded_input
                    .iter()
                    .enumerate()
                    .map(|(index, input_byte)| {
                        let row = index / columns;
                        let column = index % columns;
                        region.assign_advice(
                            || format!("Input row: {row}, column: {column}"),
                            config.advice[column],
                            row,
                            || *input_byte,
                        )
                    })
                    .collect::<Result<Vec<_>, Error>>()?;

                let length_row = self.padded_input.len().div_ceil(columns);
                let length = region.assign_advice(
                    || "Input length",
                    config.advice[0],
                    length_row,
                    || self.input_length,
                )?;
                Ok((input, length))
            },
        )
    }
}
