use blake2_rfc::blake2b::blake2b;
use blake2b256_halo2::blake2b::utils::{BLAKE2B_256_OUTPUT_SIZE, BLAKE2B_BLOCK_SIZE};
use blake2b256_halo2::usage_utils::circuit_runner::{Blake2bCircuitInputs, CircuitRunner};
use criterion::measurement::WallTime;
use criterion::{BenchmarkGroup, SamplingMode};
use midnight_curves::bls12_381::Bls12;
use midnight_proofs::poly::kzg::params::ParamsKZG;
use rand::Rng;

pub fn benchmarking_block_sizes() -> Vec<usize> {
    vec![1, 2, 4, 8]
}

pub fn sample_size() -> usize {
    10
}

pub fn configure_group(group: &mut BenchmarkGroup<WallTime>) {
    group.sampling_mode(SamplingMode::Flat);
    group.sample_size(sample_size());
}

/// Parameters big enough for a circuit of `amount_of_blocks` blocks.
pub fn params_for(amount_of_blocks: usize) -> ParamsKZG<Bls12> {
    let k = CircuitRunner::compute_k(amount_of_blocks);
    ParamsKZG::<Bls12>::unsafe_setup(k, &mut rand::thread_rng())
}

/// A random message filling all the blocks but the last byte, so the final block is only
/// known from the length.
pub fn random_input_for_desired_blocks(amount_of_blocks: usize) -> Blake2bCircuitInputs {
    let mut rng = rand::thread_rng();

    let input_size = amount_of_blocks * BLAKE2B_BLOCK_SIZE - 1;
    let random_input_bytes: Vec<u8> = (0..input_size).map(|_| rng.gen()).collect();
    let digest = blake2b(BLAKE2B_256_OUTPUT_SIZE, &[], &random_input_bytes);

    CircuitRunner::prepare_parameters(
        &hex::encode(&random_input_bytes),
        &hex::encode(digest.as_bytes()),
        amount_of_blocks,
    )
    .expect("Random inputs fit the circuit")
}
