use super::*;

use crate::tests::tests_arithmetic::arithmetic_circuit::{
    ArithmeticCircuit, IsZeroCircuit, IsZeroRowsCircuit, SelectCircuit,
};

#[test]
fn test_linear_combination_product_and_sums() {
    let (x, y, z) = (11u64, 4u64, 100u64);
    let circuit = ArithmeticCircuit::<Fq>::new_for(
        [value_for(x), value_for(y), value_for(z)],
        [
            value_for(2 * x - 3 * y + z + 5),
            value_for(x * y),
            value_for(x + y),
            value_for(x - y),
        ],
    );
    mock_verify(SMALL_K, &circuit);
}

#[test]
fn test_subtraction_wraps_around_the_field() {
    let circuit = ArithmeticCircuit::<Fq>::new_for(
        [zero(), one(), zero()],
        [
            Value::known(Fq::from(2)),
            zero(),
            one(),
            Value::known(-Fq::ONE),
        ],
    );
    mock_verify(SMALL_K, &circuit);
}

#[test]
#[should_panic]
fn test_product_fails_when_given_a_wrong_result() {
    let circuit = ArithmeticCircuit::<Fq>::new_for(
        [value_for(3u8), value_for(5u8), zero()],
        [value_for(6u8), value_for(16u8), value_for(8u8), Value::known(-Fq::from(2))],
    );
    mock_verify(SMALL_K, &circuit);
}

#[test]
fn test_select_picks_the_first_value_when_the_flag_is_set() {
    let circuit =
        SelectCircuit::<Fq>::new_for(one(), value_for(7u8), value_for(9u8), value_for(7u8));
    mock_verify(SMALL_K, &circuit);
}

#[test]
fn test_select_picks_the_second_value_when_the_flag_is_unset() {
    let circuit =
        SelectCircuit::<Fq>::new_for(zero(), value_for(7u8), value_for(9u8), value_for(9u8));
    mock_verify(SMALL_K, &circuit);
}

#[test]
#[should_panic]
fn test_select_fails_when_given_the_other_value() {
    let circuit =
        SelectCircuit::<Fq>::new_for(one(), value_for(7u8), value_for(9u8), value_for(9u8));
    mock_verify(SMALL_K, &circuit);
}

#[test]
fn test_is_zero_of_zero_and_non_zero_values() {
    mock_verify(SMALL_K, &IsZeroCircuit::<Fq>::new_for(zero(), one()));
    mock_verify(SMALL_K, &IsZeroCircuit::<Fq>::new_for(value_for(5u8), zero()));
    mock_verify(SMALL_K, &IsZeroCircuit::<Fq>::new_for(Value::known(-Fq::ONE), zero()));
}

#[test]
#[should_panic]
fn test_is_zero_fails_when_given_a_wrong_result() {
    mock_verify(SMALL_K, &IsZeroCircuit::<Fq>::new_for(value_for(5u8), one()));
}

#[test]
fn test_is_zero_rows_accept_an_honest_assignment() {
    let five = Fq::from(5);
    let inverse = Value::known(five.invert().unwrap());
    let circuit = IsZeroRowsCircuit::<Fq>::new_for(Value::known(five), inverse, zero());
    mock_verify(SMALL_K, &circuit);
    mock_verify(SMALL_K, &IsZeroRowsCircuit::<Fq>::new_for(zero(), zero(), one()));
}

#[test]
#[should_panic]
fn test_is_zero_rows_reject_claiming_a_non_zero_value_is_zero() {
    mock_verify(SMALL_K, &IsZeroRowsCircuit::<Fq>::new_for(value_for(5u8), zero(), one()));
}

#[test]
#[should_panic]
fn test_is_zero_rows_reject_claiming_zero_is_not_zero() {
    mock_verify(SMALL_K, &IsZeroRowsCircuit::<Fq>::new_for(zero(), one(), zero()));
}
