use super::*;

use crate::tests::tests_addition::addition_mod_64_circuit::AdditionMod64Circuit;
use rand::Rng;

fn run_addition(summands: &[u64], expected_result: u64) {
    let summands = summands.iter().map(|summand| value_for(*summand)).collect();
    let circuit = AdditionMod64Circuit::<Fq>::new_for(summands, value_for(expected_result));
    mock_verify(SMALL_K, &circuit);
}

#[test]
fn test_positive_addition_of_two_words() {
    run_addition(&[5, 7], 12);
}

#[test]
fn test_addition_of_two_words_with_overflow() {
    run_addition(&[u64::MAX, 1], 0);
    run_addition(&[u64::MAX, u64::MAX], u64::MAX - 1);
}

#[test]
fn test_addition_of_three_words_with_double_overflow() {
    // 3·(2^64 - 1) = 2·2^64 + 2^64 - 3
    run_addition(&[u64::MAX, u64::MAX, u64::MAX], u64::MAX - 2);
}

#[test]
fn test_addition_of_random_words() {
    let mut rng = rand::thread_rng();
    for _ in 0..4 {
        let (x, y, z): (u64, u64, u64) = (rng.gen(), rng.gen(), rng.gen());
        run_addition(&[x, y], x.wrapping_add(y));
        run_addition(&[x, y, z], x.wrapping_add(y).wrapping_add(z));
    }
}

#[test]
#[should_panic]
fn test_addition_fails_when_the_result_is_not_truncated() {
    let circuit = AdditionMod64Circuit::<Fq>::new_for(
        vec![value_for(u64::MAX), value_for(1u64)],
        value_for(1u128 << 64),
    );
    mock_verify(SMALL_K, &circuit);
}

#[test]
#[should_panic]
fn test_addition_fails_when_given_a_wrong_result() {
    run_addition(&[u64::MAX, 2], 0);
}

#[test]
#[should_panic(expected = "Addition mod 64 takes 2 or 3 summands")]
fn test_addition_of_four_words_is_not_supported() {
    run_addition(&[1, 2, 3, 4], 10);
}
