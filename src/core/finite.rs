//! # Finite Checks
//!
//! Pure validation and reduction helpers. No state, no side effects.

use super::error::{CalcError, CalcResult, NON_FINITE_ELEMENT, NON_FINITE_OPERAND};

/// Ensure both operands of a binary operation are finite
pub fn ensure_finite_pair(a: f64, b: f64) -> CalcResult<()> {
    if a.is_finite() && b.is_finite() {
        Ok(())
    } else {
        Err(CalcError::invalid(NON_FINITE_OPERAND))
    }
}

/// Ensure a divisor is non-zero
///
/// Only meaningful once the operands passed [`ensure_finite_pair`].
/// `-0.0` compares equal to `0.0` and is rejected too.
pub fn ensure_nonzero(divisor: f64) -> CalcResult<()> {
    if divisor == 0.0 {
        Err(CalcError::DivisionByZero)
    } else {
        Ok(())
    }
}

/// Arithmetic mean of a non-empty, all-finite slice
///
/// Emptiness is checked before finiteness.
pub fn mean(numbers: &[f64]) -> CalcResult<f64> {
    if numbers.is_empty() {
        return Err(CalcError::EmptyInput);
    }

    if !numbers.iter().all(|n| n.is_finite()) {
        return Err(CalcError::invalid(NON_FINITE_ELEMENT));
    }

    // Plain left-to-right accumulation from +0.0
    let sum = numbers.iter().fold(0.0, |acc, n| acc + n);
    Ok(sum / numbers.len() as f64)
}
