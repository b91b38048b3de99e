use super::*;

use crate::blake2b::length_decoder::div_rem_hint;
use crate::tests::tests_length_decoder::length_decoder_circuit::{
    DivisionCircuit, LengthDecoderCircuit, ZeroPaddingCircuit,
};

/// One-hot flags of `max_blocks` blocks with `final_block` set.
fn one_hot(final_block: usize, max_blocks: usize) -> Vec<bool> {
    (0..max_blocks).map(|i| i == final_block).collect()
}

fn run_zero_padding(bytes: &[u8], input_length: u64) {
    let padded_input = bytes.iter().map(|byte| value_for(*byte)).collect();
    let circuit = ZeroPaddingCircuit::<Fq>::new_for(padded_input, value_for(input_length));
    mock_verify(SMALL_K, &circuit);
}

fn run_decoder(input_length: u64, expected_flags: Vec<bool>) {
    let circuit = LengthDecoderCircuit::<Fq>::new_for(value_for(input_length), expected_flags);
    mock_verify(SMALL_K, &circuit);
}

#[test]
fn test_division_hint() {
    let (quotient, remainder) = div_rem_hint(Value::known(Fq::from(300)), 128);
    quotient.map(|quotient| assert_eq!(quotient, Fq::from(2)));
    remainder.map(|remainder| assert_eq!(remainder, Fq::from(44)));
}

#[test]
fn test_short_messages_end_in_the_first_block() {
    run_decoder(1, one_hot(0, 3));
    run_decoder(127, one_hot(0, 3));
    run_decoder(128, one_hot(0, 3));
}

#[test]
fn test_block_boundaries() {
    run_decoder(129, one_hot(1, 3));
    run_decoder(256, one_hot(1, 3));
    run_decoder(257, one_hot(2, 3));
    run_decoder(384, one_hot(2, 3));
}

#[test]
fn test_single_block_circuit() {
    run_decoder(64, vec![true]);
}

#[test]
#[should_panic]
fn test_wrong_final_block_is_rejected() {
    run_decoder(129, one_hot(0, 3));
}

#[test]
#[should_panic]
fn test_empty_message_is_rejected() {
    run_decoder(0, one_hot(0, 3));
}

#[test]
#[should_panic]
fn test_length_beyond_the_padded_input_is_rejected() {
    run_decoder(385, one_hot(2, 3));
}

#[test]
fn test_honest_division_is_accepted() {
    let circuit =
        DivisionCircuit::<Fq>::new_for(value_for(255u64), value_for(1u64), value_for(127u64));
    mock_verify(SMALL_K, &circuit);
}

#[test]
#[should_panic]
fn test_division_with_a_remainder_above_the_divisor_is_rejected() {
    let circuit = DivisionCircuit::<Fq>::new_for(value_for(255u64), zero(), value_for(255u64));
    mock_verify(SMALL_K, &circuit);
}

#[test]
#[should_panic]
fn test_division_with_a_wrapped_around_quotient_is_rejected() {
    // 128 = q·128 + 1 with q = 127/128 in the field
    let quotient = Fq::from(127) * Fq::from(128).invert().unwrap();
    let circuit =
        DivisionCircuit::<Fq>::new_for(value_for(128u64), Value::known(quotient), one());
    mock_verify(SMALL_K, &circuit);
}

#[test]
#[should_panic]
fn test_division_that_does_not_recompose_is_rejected() {
    let circuit =
        DivisionCircuit::<Fq>::new_for(value_for(255u64), value_for(1u64), value_for(126u64));
    mock_verify(SMALL_K, &circuit);
}

#[test]
fn test_zero_padding_after_the_message_is_accepted() {
    run_zero_padding(&[7, 7, 7, 0, 0, 0, 0, 0], 3);
    run_zero_padding(&[7, 0, 0, 0, 0, 0, 0, 0], 1);
}

#[test]
fn test_message_filling_the_input_has_no_padding() {
    run_zero_padding(&[7; 8], 8);
}

#[test]
fn test_zero_bytes_inside_the_message_are_accepted() {
    run_zero_padding(&[0, 0, 7, 0, 0, 0, 0, 0], 3);
}

#[test]
#[should_panic]
fn test_non_zero_byte_right_after_the_message_is_rejected() {
    run_zero_padding(&[7, 7, 7, 1, 0, 0, 0, 0], 3);
}

#[test]
#[should_panic]
fn test_non_zero_last_padding_byte_is_rejected() {
    run_zero_padding(&[7, 0, 0, 0, 0, 0, 0, 1], 1);
}
