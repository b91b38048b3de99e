use super::*;
mod xor_circuit;

use crate::tests::tests_xor::xor_circuit::{XorCircuit, XorRowCircuit};
use rand::Rng;

#[test]
fn test_xor_of_random_words() {
    let mut rng = rand::thread_rng();
    for _ in 0..4 {
        let lhs: u64 = rng.gen();
        let rhs: u64 = rng.gen();
        let circuit =
            XorCircuit::<Fq>::new_for(value_for(lhs), value_for(rhs), value_for(lhs ^ rhs));
        mock_verify(SMALL_K, &circuit);
    }
}

#[test]
fn test_xor_of_a_word_with_itself_is_zero() {
    let word = 0xDEAD_BEEF_0123_4567u64;
    let circuit = XorCircuit::<Fq>::new_for(value_for(word), value_for(word), zero());
    mock_verify(SMALL_K, &circuit);
}

#[test]
fn test_xor_with_the_largest_word_complements() {
    let word = 0x0F0F_0000_FFFF_1234u64;
    let circuit = XorCircuit::<Fq>::new_for(value_for(word), value_for(u64::MAX), value_for(!word));
    mock_verify(SMALL_K, &circuit);
}

#[test]
#[should_panic]
fn test_xor_fails_when_given_a_wrong_result() {
    let lhs = 0x1234_5678_9ABC_DEF0u64;
    let rhs = 0x0FED_CBA9_8765_4321u64;
    let circuit =
        XorCircuit::<Fq>::new_for(value_for(lhs), value_for(rhs), value_for((lhs ^ rhs) + 1));
    mock_verify(SMALL_K, &circuit);
}

#[test]
#[should_panic]
fn test_xor_rejects_operands_wider_than_a_word() {
    let circuit = XorCircuit::<Fq>::new_for(value_for(1u128 << 64), zero(), value_for(1u128 << 64));
    mock_verify(SMALL_K, &circuit);
}

#[test]
fn test_xor_row_truth_table() {
    for (lhs, rhs) in [(0u8, 0u8), (0, 1), (1, 0), (1, 1)] {
        let circuit =
            XorRowCircuit::<Fq>::new_for(value_for(lhs), value_for(rhs), value_for(lhs ^ rhs));
        mock_verify(SMALL_K, &circuit);
    }
}

#[test]
#[should_panic]
fn test_xor_row_rejects_or_instead_of_xor() {
    let circuit = XorRowCircuit::<Fq>::new_for(one(), one(), one());
    mock_verify(SMALL_K, &circuit);
}

#[test]
#[should_panic]
fn test_xor_row_rejects_a_non_boolean_result() {
    let circuit = XorRowCircuit::<Fq>::new_for(one(), zero(), value_for(2u8));
    mock_verify(SMALL_K, &circuit);
}
