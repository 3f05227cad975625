//! End-to-end behaviour of the public `Calculator` API.

use arith_engine::{CalcError, Calculator, CalculatorConfig, ErrorKind};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

fn finite_pair(rng: &mut StdRng) -> (f64, f64) {
    (rng.gen_range(-1.0e6..1.0e6), rng.gen_range(-1.0e6..1.0e6))
}

#[test]
fn test_add_records_result() {
    let mut calc = Calculator::new();

    assert_eq!(calc.add(2.0, 3.0), Ok(5.0));
    assert_eq!(calc.history(), vec![5.0]);
}

#[test]
fn test_add_negative_numbers() {
    let mut calc = Calculator::new();
    assert_eq!(calc.add(-5.0, -3.0), Ok(-8.0));
}

#[test]
fn test_divide_by_zero_message() {
    let mut calc = Calculator::new();

    let err = calc.divide(5.0, 0.0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    assert_eq!(err.to_string(), "cannot divide by zero");
    assert!(calc.history().is_empty());
}

#[test]
fn test_average_of_sequence() {
    let calc = Calculator::new();
    assert_eq!(calc.average(&[1.0, 2.0, 3.0, 4.0, 5.0]), Ok(3.0));
}

#[test]
fn test_average_empty() {
    let calc = Calculator::new();
    assert_eq!(calc.average(&[]), Err(CalcError::EmptyInput));
}

#[test]
fn test_mixed_operations_history() {
    let mut calc = Calculator::new();

    calc.add(10.0, 5.0).unwrap();
    calc.subtract(20.0, 10.0).unwrap();
    calc.divide(20.0, 4.0).unwrap();

    assert_eq!(calc.history(), vec![15.0, 10.0, 5.0]);
}

#[test]
fn test_binary_ops_match_ieee_arithmetic() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut calc = Calculator::new();
    let mut expected = Vec::new();

    for _ in 0..200 {
        let (a, b) = finite_pair(&mut rng);

        assert_eq!(calc.add(a, b), Ok(a + b));
        expected.push(a + b);

        assert_eq!(calc.subtract(a, b), Ok(a - b));
        expected.push(a - b);

        if b != 0.0 {
            assert_eq!(calc.divide(a, b), Ok(a / b));
            expected.push(a / b);
        }
    }

    assert_eq!(calc.history(), expected);
}

#[test]
fn test_failures_leave_history_untouched() {
    let mut calc = Calculator::new();
    calc.add(1.0, 1.0).unwrap();
    let before = calc.history();

    assert!(calc.add(f64::NAN, 1.0).is_err());
    assert!(calc.subtract(1.0, f64::INFINITY).is_err());
    assert!(calc.divide(f64::NEG_INFINITY, 2.0).is_err());
    assert!(calc.divide(3.0, 0.0).is_err());

    assert_eq!(calc.history(), before);
}

#[test]
fn test_invalid_argument_wins_over_zero_divisor() {
    let mut calc = Calculator::new();

    let err = calc.divide(f64::NAN, 0.0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let err = calc.divide(1.0, f64::NAN).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_empty_input_wins_over_non_finite() {
    let calc = Calculator::new();

    assert_eq!(calc.average(&[]).unwrap_err().kind(), ErrorKind::EmptyInput);
    assert_eq!(
        calc.average(&[2.0, 4.0, f64::NAN]).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
}

#[test]
fn test_average_single_element_identity() {
    let mut rng = StdRng::seed_from_u64(11);
    let calc = Calculator::new();

    for _ in 0..100 {
        let x: f64 = rng.gen_range(-1.0e9..1.0e9);
        assert_eq!(calc.average(&[x]), Ok(x));
    }
}

#[test]
fn test_average_is_order_independent() {
    let mut rng = StdRng::seed_from_u64(42);
    let calc = Calculator::new();

    let mut numbers: Vec<f64> = (0..50).map(|_| rng.gen_range(-100.0..100.0)).collect();
    let expected = numbers.iter().sum::<f64>() / numbers.len() as f64;

    for _ in 0..10 {
        numbers.shuffle(&mut rng);
        let got = calc.average(&numbers).unwrap();
        assert!((got - expected).abs() < 1e-9, "got {got}, expected {expected}");
    }
}

#[test]
fn test_history_length_tracks_successes() {
    let mut calc = Calculator::with_config(CalculatorConfig::new().with_history_capacity(4));

    for k in 1..=10 {
        calc.add(k as f64, 1.0).unwrap();
        calc.divide(k as f64, 0.0).unwrap_err();
        assert_eq!(calc.history_len(), k);
    }

    assert_eq!(calc.history(), (1..=10).map(|k| k as f64 + 1.0).collect::<Vec<_>>());
}

#[test]
fn test_snapshot_survives_later_operations() {
    let mut calc = Calculator::new();
    calc.add(1.0, 2.0).unwrap();

    let snapshot = calc.history();
    calc.add(3.0, 4.0).unwrap();
    calc.clear_history();

    assert_eq!(snapshot, vec![3.0]);
    assert!(calc.history().is_empty());
}

#[test]
fn test_clear_then_record() {
    let mut calc = Calculator::new();
    calc.add(1.0, 2.0).unwrap();

    calc.clear_history();
    calc.add(5.0, 5.0).unwrap();

    assert_eq!(calc.history(), vec![10.0]);
    assert_eq!(calc.last_result(), Some(10.0));
}

#[test]
fn test_instances_are_isolated() {
    let mut a = Calculator::new();
    let b = Calculator::new();

    a.add(1.0, 1.0).unwrap();

    assert_eq!(a.history_len(), 1);
    assert!(b.history().is_empty());
}

#[test]
fn test_overflow_is_recorded() {
    let mut calc = Calculator::new();

    assert_eq!(calc.add(f64::MAX, f64::MAX), Ok(f64::INFINITY));
    assert_eq!(calc.subtract(f64::MIN, f64::MAX), Ok(f64::NEG_INFINITY));
    assert_eq!(calc.divide(1.0, f64::MIN_POSITIVE / 1e10), Ok(f64::INFINITY));

    assert_eq!(
        calc.history(),
        vec![f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY]
    );

    // Overflowing averages are returned but, as always, not recorded
    assert_eq!(calc.average(&[f64::MAX, f64::MAX]), Ok(f64::INFINITY));
    assert_eq!(calc.history_len(), 3);
}
