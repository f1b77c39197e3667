//! Type coercion driven by declared parameter types.
//!
//! A small closed rule set keyed by [`ParamType`]; anything outside the rules
//! is an explicit coercion error naming the parameter and the value
//! attempted. Every rule is idempotent: coercing an already-coerced value
//! yields the same value.

use crate::errors::DispatchError;
use crate::models::{ParamType, Value};

/// Coerce `value` to the declared `target` type.
///
/// `parameter` is only used to name the offender in errors.
pub fn coerce(parameter: &str, value: Value, target: &ParamType) -> Result<Value, DispatchError> {
    match target {
        ParamType::Integer => coerce_integer(parameter, value),
        ParamType::Float => coerce_float(parameter, value),
        ParamType::String => coerce_string(parameter, value),
        ParamType::Boolean => coerce_boolean(parameter, value),
        ParamType::Mapping | ParamType::ProviderChoices | ParamType::Context => {
            match value {
                Value::Object(_) => Ok(value),
                other => Err(mismatch(parameter, &other, target)),
            }
        }
        // Nested schema models are validated by the schema layer; only the
        // mapping shape is checked here.
        ParamType::Model(_) => match value {
            Value::Object(_) => Ok(value),
            other => Err(mismatch(parameter, &other, target)),
        },
        ParamType::List => match value {
            Value::Array(_) => Ok(value),
            other => Err(mismatch(parameter, &other, target)),
        },
    }
}

/// Narrow a float to i64 by truncation. Non-finite values and magnitudes
/// outside the i64 range are rejected rather than clamped.
fn truncate_to_i64(f: f64) -> Option<i64> {
    let truncated = f.trunc();
    // -2^63 and 2^63 are exactly representable; [-2^63, 2^63) fits in i64.
    if truncated >= i64::MIN as f64 && truncated < -(i64::MIN as f64) {
        Some(truncated as i64)
    } else {
        None
    }
}

fn coerce_integer(parameter: &str, value: Value) -> Result<Value, DispatchError> {
    match &value {
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                Ok(value)
            } else {
                // Float literal narrows to int by truncation.
                n.as_f64()
                    .and_then(truncate_to_i64)
                    .map(Value::from)
                    .ok_or_else(|| mismatch(parameter, &value, &ParamType::Integer))
            }
        }
        Value::String(s) => {
            let trimmed = s.trim();
            if let Ok(i) = trimmed.parse::<i64>() {
                Ok(Value::from(i))
            } else if let Some(i) = trimmed.parse::<f64>().ok().and_then(truncate_to_i64) {
                Ok(Value::from(i))
            } else {
                Err(mismatch(parameter, &value, &ParamType::Integer))
            }
        }
        _ => Err(mismatch(parameter, &value, &ParamType::Integer)),
    }
}

fn coerce_float(parameter: &str, value: Value) -> Result<Value, DispatchError> {
    match &value {
        Value::Number(n) => n
            .as_f64()
            .filter(|f| f.is_finite())
            .map(Value::from)
            .ok_or_else(|| mismatch(parameter, &value, &ParamType::Float)),
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(f) if f.is_finite() => Ok(Value::from(f)),
            _ => Err(mismatch(parameter, &value, &ParamType::Float)),
        },
        _ => Err(mismatch(parameter, &value, &ParamType::Float)),
    }
}

fn coerce_string(parameter: &str, value: Value) -> Result<Value, DispatchError> {
    match &value {
        Value::String(_) => Ok(value),
        Value::Number(n) => Ok(Value::from(n.to_string())),
        _ => Err(mismatch(parameter, &value, &ParamType::String)),
    }
}

fn coerce_boolean(parameter: &str, value: Value) -> Result<Value, DispatchError> {
    match &value {
        Value::Bool(_) => Ok(value),
        Value::Number(n) => match n.as_i64() {
            Some(0) => Ok(Value::from(false)),
            Some(1) => Ok(Value::from(true)),
            _ => Err(mismatch(parameter, &value, &ParamType::Boolean)),
        },
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.eq_ignore_ascii_case("true") {
                Ok(Value::from(true))
            } else if trimmed.eq_ignore_ascii_case("false") {
                Ok(Value::from(false))
            } else {
                Err(mismatch(parameter, &value, &ParamType::Boolean))
            }
        }
        _ => Err(mismatch(parameter, &value, &ParamType::Boolean)),
    }
}

fn mismatch(parameter: &str, value: &Value, target: &ParamType) -> DispatchError {
    DispatchError::InvalidParameter {
        parameter: parameter.to_string(),
        value: value.to_string(),
        expected: target.to_string(),
    }
}
