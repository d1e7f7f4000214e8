//! Binary operators and their arithmetic over [`Value`]

use crate::core::{EvalError, EvalResult, Value};

/// Binary operators understood by the evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
    /// Exponentiation (**)
    Power,
}

impl Operation {
    /// Returns the operator symbol as the tokenizer reads it
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "**",
        }
    }

    /// Applies the operator to two values
    pub fn apply(self, lhs: Value, rhs: Value) -> EvalResult<Value> {
        match self {
            Self::Add => add(lhs, rhs),
            Self::Subtract => subtract(lhs, rhs),
            Self::Multiply => multiply(lhs, rhs),
            Self::Divide => divide(lhs, rhs),
            Self::Power => power(lhs, rhs),
        }
    }
}

/// Unary minus
pub(crate) fn negate(value: Value) -> EvalResult<Value> {
    match value {
        Value::Integer(n) => n.checked_neg().map(Value::Integer).ok_or(EvalError::Overflow),
        Value::Float(x) => Ok(Value::Float(-x)),
    }
}

fn add(lhs: Value, rhs: Value) -> EvalResult<Value> {
    match (lhs, rhs) {
        (Value::Integer(a), Value::Integer(b)) => {
            a.checked_add(b).map(Value::Integer).ok_or(EvalError::Overflow)
        }
        _ => Ok(Value::Float(lhs.as_f64() + rhs.as_f64())),
    }
}

fn subtract(lhs: Value, rhs: Value) -> EvalResult<Value> {
    match (lhs, rhs) {
        (Value::Integer(a), Value::Integer(b)) => {
            a.checked_sub(b).map(Value::Integer).ok_or(EvalError::Overflow)
        }
        _ => Ok(Value::Float(lhs.as_f64() - rhs.as_f64())),
    }
}

fn multiply(lhs: Value, rhs: Value) -> EvalResult<Value> {
    match (lhs, rhs) {
        (Value::Integer(a), Value::Integer(b)) => {
            a.checked_mul(b).map(Value::Integer).ok_or(EvalError::Overflow)
        }
        _ => Ok(Value::Float(lhs.as_f64() * rhs.as_f64())),
    }
}

/// True division: always a float, zero divisor rejected
fn divide(lhs: Value, rhs: Value) -> EvalResult<Value> {
    if rhs.is_zero() {
        return Err(EvalError::DivisionByZero);
    }
    Ok(Value::Float(lhs.as_f64() / rhs.as_f64()))
}

fn power(base: Value, exponent: Value) -> EvalResult<Value> {
    match (base, exponent) {
        (Value::Integer(b), Value::Integer(e)) => integer_power(b, e),
        _ => float_power(base.as_f64(), exponent.as_f64()),
    }
}

fn integer_power(base: i64, exponent: i64) -> EvalResult<Value> {
    if exponent < 0 {
        if base == 0 {
            return Err(EvalError::DivisionByZero);
        }
        return float_power(base as f64, exponent as f64);
    }

    match base {
        0 => Ok(Value::Integer(i64::from(exponent == 0))),
        1 => Ok(Value::Integer(1)),
        -1 => Ok(Value::Integer(if exponent % 2 == 0 { 1 } else { -1 })),
        _ => {
            let exponent = u32::try_from(exponent).map_err(|_| EvalError::Overflow)?;
            base.checked_pow(exponent)
                .map(Value::Integer)
                .ok_or(EvalError::Overflow)
        }
    }
}

fn float_power(base: f64, exponent: f64) -> EvalResult<Value> {
    if exponent == 0.0 {
        return Ok(Value::Float(1.0));
    }
    if base == 0.0 && exponent < 0.0 && exponent.is_finite() {
        return Err(EvalError::DivisionByZero);
    }
    if base < 0.0 && base.is_finite() && exponent.is_finite() && exponent.fract() != 0.0 {
        return Err(EvalError::Domain(
            "negative number raised to a fractional power".into(),
        ));
    }

    let result = base.powf(exponent);
    if result.is_infinite() && base.is_finite() && exponent.is_finite() {
        return Err(EvalError::Overflow);
    }
    Ok(Value::Float(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(n: i64) -> Value {
        Value::Integer(n)
    }

    fn float(x: f64) -> Value {
        Value::Float(x)
    }

    // ===== Operation metadata =====

    #[test]
    fn test_operation_symbols() {
        assert_eq!(Operation::Add.symbol(), "+");
        assert_eq!(Operation::Subtract.symbol(), "-");
        assert_eq!(Operation::Multiply.symbol(), "*");
        assert_eq!(Operation::Divide.symbol(), "/");
        assert_eq!(Operation::Power.symbol(), "**");
    }

    // ===== Integer arithmetic =====

    #[test]
    fn test_integer_arithmetic_stays_integer() {
        assert_eq!(Operation::Add.apply(int(2), int(2)), Ok(int(4)));
        assert_eq!(Operation::Subtract.apply(int(2), int(5)), Ok(int(-3)));
        assert_eq!(Operation::Multiply.apply(int(6), int(7)), Ok(int(42)));
    }

    #[test]
    fn test_integer_overflow_is_error() {
        assert_eq!(
            Operation::Add.apply(int(i64::MAX), int(1)),
            Err(EvalError::Overflow)
        );
        assert_eq!(
            Operation::Multiply.apply(int(i64::MAX), int(2)),
            Err(EvalError::Overflow)
        );
        assert_eq!(negate(int(i64::MIN)), Err(EvalError::Overflow));
    }

    #[test]
    fn test_mixed_arithmetic_promotes_to_float() {
        assert_eq!(Operation::Add.apply(int(1), float(0.5)), Ok(float(1.5)));
        assert_eq!(Operation::Multiply.apply(float(2.0), int(3)), Ok(float(6.0)));
    }

    // ===== Division =====

    #[test]
    fn test_division_always_float() {
        assert_eq!(Operation::Divide.apply(int(10), int(2)), Ok(float(5.0)));
        assert_eq!(Operation::Divide.apply(int(1), int(4)), Ok(float(0.25)));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            Operation::Divide.apply(int(10), int(0)),
            Err(EvalError::DivisionByZero)
        );
        assert_eq!(
            Operation::Divide.apply(float(1.0), float(0.0)),
            Err(EvalError::DivisionByZero)
        );
        assert_eq!(
            Operation::Divide.apply(int(1), float(-0.0)),
            Err(EvalError::DivisionByZero)
        );
    }

    // ===== Power =====

    #[test]
    fn test_integer_power() {
        assert_eq!(Operation::Power.apply(int(2), int(3)), Ok(int(8)));
        assert_eq!(Operation::Power.apply(int(2), int(0)), Ok(int(1)));
        assert_eq!(Operation::Power.apply(int(0), int(0)), Ok(int(1)));
        assert_eq!(Operation::Power.apply(int(-2), int(3)), Ok(int(-8)));
    }

    #[test]
    fn test_integer_power_trivial_bases_with_huge_exponent() {
        let huge = int(i64::MAX);
        assert_eq!(Operation::Power.apply(int(1), huge), Ok(int(1)));
        assert_eq!(Operation::Power.apply(int(0), huge), Ok(int(0)));
        assert_eq!(Operation::Power.apply(int(-1), huge), Ok(int(-1)));
        assert_eq!(Operation::Power.apply(int(-1), int(10)), Ok(int(1)));
    }

    #[test]
    fn test_integer_power_overflow() {
        assert_eq!(
            Operation::Power.apply(int(2), int(64)),
            Err(EvalError::Overflow)
        );
        assert_eq!(
            Operation::Power.apply(int(10), int(i64::MAX)),
            Err(EvalError::Overflow)
        );
    }

    #[test]
    fn test_negative_integer_exponent_gives_float() {
        assert_eq!(Operation::Power.apply(int(2), int(-1)), Ok(float(0.5)));
        assert_eq!(Operation::Power.apply(int(4), int(-2)), Ok(float(0.0625)));
    }

    #[test]
    fn test_zero_to_negative_power() {
        assert_eq!(
            Operation::Power.apply(int(0), int(-1)),
            Err(EvalError::DivisionByZero)
        );
        assert_eq!(
            Operation::Power.apply(float(0.0), float(-0.5)),
            Err(EvalError::DivisionByZero)
        );
    }

    #[test]
    fn test_float_power() {
        assert_eq!(Operation::Power.apply(int(4), float(0.5)), Ok(float(2.0)));
        assert_eq!(Operation::Power.apply(float(2.0), int(3)), Ok(float(8.0)));
        assert_eq!(Operation::Power.apply(float(7.5), int(0)), Ok(float(1.0)));
    }

    #[test]
    fn test_negative_base_fractional_exponent() {
        assert!(matches!(
            Operation::Power.apply(int(-8), float(0.5)),
            Err(EvalError::Domain(_))
        ));
    }

    #[test]
    fn test_negative_base_integral_float_exponent() {
        assert_eq!(Operation::Power.apply(int(-2), float(2.0)), Ok(float(4.0)));
    }

    #[test]
    fn test_float_power_overflow() {
        assert_eq!(
            Operation::Power.apply(float(10.0), int(400)),
            Err(EvalError::Overflow)
        );
    }

    // ===== Negation =====

    #[test]
    fn test_negate() {
        assert_eq!(negate(int(5)), Ok(int(-5)));
        assert_eq!(negate(float(2.5)), Ok(float(-2.5)));
    }
}
