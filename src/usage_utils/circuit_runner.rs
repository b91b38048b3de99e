//! Circuit runner module for creating Blake2bCircuit, synthesizing, proving and verifying it.
//! It can work with both Mock Prover and Real Prover.

use crate::blake2b::utils::{
    pad_with_zeros, BLAKE2B_256_OUTPUT_SIZE, BLAKE2B_BLOCK_SIZE, MAX_SUPPORTED_BLOCKS,
};
use crate::usage_utils::blake2b_circuit::Blake2bCircuit;
use crate::usage_utils::error::CircuitInputError;
use ff::PrimeField;
use midnight_curves::bls12_381::{Bls12, Fq};
use midnight_proofs::circuit::Value;
use midnight_proofs::dev::MockProver;
use midnight_proofs::plonk::Error;
use midnight_proofs::{
    plonk::{create_proof, keygen_pk, keygen_vk_with_k, prepare, ProvingKey, VerifyingKey},
    poly::{
        commitment::Guard,
        kzg::{params::ParamsKZG, KZGCommitmentScheme},
    },
    transcript::{CircuitTranscript, Transcript},
};

/// Rows used by one compressed block, including its share of the input region and of the
/// padding check.
const ROWS_PER_BLOCK: usize = 81_500;

/// Rows used once per circuit: constants, length decoding and digest encoding, plus room for
/// the blinding rows.
const FIXED_ROWS: usize = 1_500;

/// Smallest circuit size used by the runner.
const MIN_K: u32 = 17;

/// Largest circuit size the prover supports. The gates have degree 4, so the extended domain
/// is `2^(k+2)` and must fit in the `2^S` roots of unity of the scalar field.
pub const MAX_K: u32 = <Fq as PrimeField>::S - 2;

/// The inputs for the Blake2bCircuit: the padded message, its length, the amount of blocks and
/// the expected digest. This helps us to avoid passing multiple parameters to the methods that
/// create circuits
pub type Blake2bCircuitInputs = (Vec<Value<Fq>>, Value<Fq>, usize, [Fq; BLAKE2B_256_OUTPUT_SIZE]);

/// Circuit runner struct
#[derive(Debug)]
pub struct CircuitRunner;

/// Circuit runner methods for input handling
impl CircuitRunner {
    /// Smallest `k` such that a circuit of `max_blocks` blocks fits in `2^k` rows.
    pub fn compute_k(max_blocks: usize) -> u32 {
        let rows = FIXED_ROWS + ROWS_PER_BLOCK * max_blocks;
        let k = rows.next_power_of_two().trailing_zeros().max(MIN_K);
        tracing::debug!(max_blocks, rows, k, "circuit size");
        k
    }

    /// Convert the message and expected digest into circuit inputs.
    /// The message is zero padded to `max_blocks` blocks and is a private input of the circuit,
    /// while the digest bytes are public inputs.
    pub fn prepare_parameters(
        message: &str,
        expected: &str,
        max_blocks: usize,
    ) -> Result<Blake2bCircuitInputs, CircuitInputError> {
        if max_blocks == 0 || max_blocks > MAX_SUPPORTED_BLOCKS {
            return Err(CircuitInputError::InvalidBlockCount(max_blocks));
        }
        if Self::compute_k(max_blocks) > MAX_K {
            return Err(CircuitInputError::InvalidBlockCount(max_blocks));
        }

        // INPUT
        let message_bytes = hex::decode(message)?;
        if message_bytes.is_empty() {
            return Err(CircuitInputError::EmptyMessage);
        }
        let capacity = max_blocks * BLAKE2B_BLOCK_SIZE;
        if message_bytes.len() > capacity {
            return Err(CircuitInputError::MessageTooLong {
                len: message_bytes.len(),
                max: capacity,
            });
        }
        let mut padded_input = pad_with_zeros(&message_bytes);
        padded_input.resize(capacity, 0);
        let input_values =
            padded_input.iter().map(|x| Value::known(Fq::from(*x as u64))).collect::<Vec<_>>();
        let input_length = Value::known(Fq::from(message_bytes.len() as u64));

        // OUTPUT
        let expected_bytes = hex::decode(expected)?;
        let expected_bytes: [u8; BLAKE2B_256_OUTPUT_SIZE] = expected_bytes
            .as_slice()
            .try_into()
            .map_err(|_| CircuitInputError::InvalidDigestLength(expected_bytes.len()))?;
        let expected_output_fields = expected_bytes.map(|byte| Fq::from(byte as u64));

        Ok((input_values, input_length, max_blocks, expected_output_fields))
    }

    /// Create circuit for the given inputs. In this function the inputs are packed in a
    /// [Blake2bCircuitInputs] tuple to avoid passing multiple parameters to the function
    pub fn create_circuit_for_packed_inputs(ci: Blake2bCircuitInputs) -> Blake2bCircuit<Fq> {
        Blake2bCircuit::<Fq>::new(ci.0, ci.1, ci.2)
    }
}

/// Circuit runner methods for Mock Prover
impl CircuitRunner {
    /// Preprocess inputs, synthesize, prove and verify the circuit using Mock Prover.
    /// Input errors are returned, an unsatisfied circuit panics with the failing constraints.
    pub fn mocked_preprocess_inputs_synthesize_prove_and_verify(
        message: &str,
        expected: &str,
        max_blocks: usize,
    ) -> Result<(), CircuitInputError> {
        let circuit_inputs = Self::prepare_parameters(message, expected, max_blocks)?;
        let expected_output_fields = circuit_inputs.3;

        let circuit = Self::create_circuit_for_packed_inputs(circuit_inputs);
        let prover = Self::mock_prove_with_public_inputs_ref(&expected_output_fields, &circuit);
        Self::verify_mock_prover(prover);
        Ok(())
    }

    /// Verify the circuit using Mock Prover
    pub fn verify_mock_prover(prover: MockProver<Fq>) {
        prover.assert_satisfied()
    }

    /// Create and run the Mock Prover using public inputs. Synthesis errors of the mock prover
    /// are programming errors, so they panic.
    pub fn mock_prove_with_public_inputs_ref(
        expected_output_fields: &[Fq],
        circuit: &Blake2bCircuit<Fq>,
    ) -> MockProver<Fq> {
        let k = Self::compute_k(circuit.max_blocks());
        MockProver::run(k, circuit, vec![expected_output_fields.to_vec()])
            .unwrap_or_else(|e| panic!("Mock prover synthesis failed: {e:?}"))
    }
}

/// Circuit runner methods for Real Prover
impl CircuitRunner {
    /// Synthesize, prove and verify the circuit using a real prover. Returns whether the proof
    /// was accepted.
    pub fn real_synthesize_prove_and_verify(
        circuit_inputs: Blake2bCircuitInputs,
    ) -> Result<bool, Error> {
        let expected_output_fields = circuit_inputs.3;
        let circuit: Blake2bCircuit<Fq> = Self::create_circuit_for_packed_inputs(circuit_inputs);
        let k = Self::compute_k(circuit.max_blocks());

        let params = ParamsKZG::<Bls12>::unsafe_setup(k, &mut rand::thread_rng());
        let vk = Self::create_vk(&circuit, &params)?;
        let pk = Self::create_pk(&circuit, vk)?;
        let proof = Self::create_proof(&expected_output_fields, circuit, &params, &pk)?;
        Self::verify(&expected_output_fields, &params, &pk, &proof)
    }

    /// Create the verifying key for the given circuit and parameters
    pub fn create_vk(
        circuit: &Blake2bCircuit<Fq>,
        params: &ParamsKZG<Bls12>,
    ) -> Result<VerifyingKey<Fq, KZGCommitmentScheme<Bls12>>, Error> {
        keygen_vk_with_k(params, circuit, Self::compute_k(circuit.max_blocks()))
    }

    /// Create the proving key for the given circuit and parameters
    pub fn create_pk(
        circuit: &Blake2bCircuit<Fq>,
        vk: VerifyingKey<Fq, KZGCommitmentScheme<Bls12>>,
    ) -> Result<ProvingKey<Fq, KZGCommitmentScheme<Bls12>>, Error> {
        keygen_pk(vk, circuit)
    }

    /// Create the proof for the given circuit and parameters
    #[tracing::instrument(skip_all, name = "blake2b_create_proof")]
    pub fn create_proof(
        expected_output_fields: &[Fq],
        circuit: Blake2bCircuit<Fq>,
        params: &ParamsKZG<Bls12>,
        pk: &ProvingKey<Fq, KZGCommitmentScheme<Bls12>>,
    ) -> Result<Vec<u8>, Error> {
        let mut transcript = CircuitTranscript::init();
        create_proof(
            params,
            pk,
            &[circuit],
            0,
            &[&[expected_output_fields]],
            rand::thread_rng(),
            &mut transcript,
        )?;
        Ok(transcript.finalize())
    }

    /// Verify the proof for the given circuit and parameters
    pub fn verify(
        expected_output_fields: &[Fq],
        params: &ParamsKZG<Bls12>,
        pk: &ProvingKey<Fq, KZGCommitmentScheme<Bls12>>,
        proof: &[u8],
    ) -> Result<bool, Error> {
        let mut transcript = CircuitTranscript::init_from_bytes(proof);

        let guard = prepare::<Fq, KZGCommitmentScheme<Bls12>, _>(
            pk.get_vk(),
            &[&[]],
            &[&[expected_output_fields]],
            &mut transcript,
        )?;
        Ok(guard.verify(&params.verifier_params()).is_ok())
    }
}
