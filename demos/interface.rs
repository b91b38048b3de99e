use blake2_rfc::blake2b::blake2b;
use blake2b256_halo2::blake2b::utils::{BLAKE2B_256_OUTPUT_SIZE, BLAKE2B_BLOCK_SIZE};
use blake2b256_halo2::usage_utils::circuit_runner::CircuitRunner;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
struct Blake2bInput {
    #[serde(rename = "in")]
    input: String,
    max_blocks: usize,
}

fn main() {
    tracing_subscriber::fmt::init();

    let workspace_root = env!("CARGO_MANIFEST_DIR");
    let file_path = format!("{}/demos/inputs.json", workspace_root);

    let file_content = std::fs::read_to_string(file_path).expect("Failed to read input file");
    let complete_input: Blake2bInput =
        serde_json::from_str(&file_content).expect("Failed to parse input");

    let input = &complete_input.input;
    let max_blocks = complete_input.max_blocks;
    let input_bytes = hex::decode(input).expect("Failed decode");

    let digest = blake2b(BLAKE2B_256_OUTPUT_SIZE, &[], &input_bytes);
    let expected = hex::encode(digest.as_bytes());

    println!("Hash digest: {}\n\n", expected);
    println!("The amount of bytes in your input is {}", input_bytes.len());
    println!(
        "The amount of blocks actually hashed is {}",
        input_bytes.len().div_ceil(BLAKE2B_BLOCK_SIZE)
    );
    println!(
        "The circuit is built for {} blocks, so any message of up to {} bytes is proven by \
    the same circuit",
        max_blocks,
        max_blocks * BLAKE2B_BLOCK_SIZE
    );
    println!("The circuit uses 2^{} rows\n\n", CircuitRunner::compute_k(max_blocks));
    println!("Computing the circuit with the mock prover, this could take a while ...\n\n");

    CircuitRunner::mocked_preprocess_inputs_synthesize_prove_and_verify(
        input, &expected, max_blocks,
    )
    .expect("Invalid input");
    println!("The circuit is satisfied");
}
