use super::*;

use crate::tests::tests_compress::compress_circuit::CompressCircuit;
use rand::Rng;

fn initial_state() -> [u64; 8] {
    let mut state = IV_CONSTANTS;
    state[0] ^= PARAMETER_BLOCK_0;
    state
}

fn random_block() -> [u64; 16] {
    let mut rng = rand::thread_rng();
    array::from_fn(|_| rng.gen())
}

#[test]
fn test_reference_compression_matches_blake2b_256() {
    let mut rng = rand::thread_rng();
    for length in [0, 1, 3, 127, 128, 129, 256, 300] {
        let message: Vec<u8> = (0..length).map(|_| rng.gen()).collect();
        assert_eq!(reference_blake2b_256(&message), blake2b_256(&message));
    }
}

#[test]
fn test_final_compression_of_abc() {
    let mut block = [0u8; BLAKE2B_BLOCK_SIZE];
    block[..3].copy_from_slice(b"abc");
    let expected_state = reference_compress(&initial_state(), &block_words(&block), 3, true);
    let digest: Vec<u8> = expected_state[..4].iter().flat_map(|w| w.to_le_bytes()).collect();
    assert_eq!(
        hex::encode(digest),
        "bddd813c634239723171ef3fee98579b94964e3bb1cb3e427262c8c068d52319"
    );

    let circuit = CompressCircuit::<Fq>::new_for(
        initial_state(),
        block_words(&block),
        3,
        true,
        expected_state,
    );
    mock_verify(COMPRESSION_K, &circuit);
}

#[test]
fn test_intermediate_compression_of_a_random_block() {
    let block = random_block();
    let state: [u64; 8] = random_block()[..8].try_into().unwrap();
    let expected_state = reference_compress(&state, &block, 128, false);

    let circuit = CompressCircuit::<Fq>::new_for(state, block, 128, false, expected_state);
    mock_verify(COMPRESSION_K, &circuit);
}

#[test]
#[should_panic]
fn test_compression_fails_when_the_finalization_flag_is_ignored() {
    let block = random_block();
    let expected_state = reference_compress(&initial_state(), &block, 128, false);

    let circuit =
        CompressCircuit::<Fq>::new_for(initial_state(), block, 128, true, expected_state);
    mock_verify(COMPRESSION_K, &circuit);
}
