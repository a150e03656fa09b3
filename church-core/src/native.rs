//! Bridging conversions between encoded values and host primitives.
//!
//! An encoded value is read back by applying it to host atoms and to the
//! native `INCREMENT` function, then extracting the atom that comes out.
//! This is the only place host integers and booleans meet the encodings.

use once_cell::sync::Lazy;
use tracing::trace;

use crate::error::ChurchError;
use crate::language::{AtomType, Value, lambda};
use crate::list::{head, is_nil, tail};

// ============================================================================
// Value Extraction Helpers
// ============================================================================

pub fn make_int(n: u64) -> Value {
    Value::Atom(AtomType::Int(n))
}

pub fn make_bool(b: bool) -> Value {
    Value::Atom(AtomType::Bool(b))
}

/// Extract a host integer from a Value
pub fn extract_int(value: &Value) -> Result<u64, ChurchError> {
    match value {
        Value::Atom(AtomType::Int(n)) => Ok(*n),
        _ => Err(ChurchError::bridge_mismatch("an integer", value)),
    }
}

/// Extract a host boolean from a Value
pub fn extract_bool(value: &Value) -> Result<bool, ChurchError> {
    match value {
        Value::Atom(AtomType::Bool(b)) => Ok(*b),
        _ => Err(ChurchError::bridge_mismatch("a boolean", value)),
    }
}

/// Host-side `i => i + 1`, the function numerals are counted with.
static INCREMENT: Lazy<Value> = Lazy::new(|| lambda(|i| Ok(make_int(extract_int(&i)? + 1))));

// ============================================================================
// Bridges
// ============================================================================

/// Numeral to host integer: apply `INCREMENT` to `0`.
pub fn to_int(n: &Value) -> Result<u64, ChurchError> {
    let counted = n
        .apply2(Value::clone(&INCREMENT), make_int(0))
        .and_then(|v| extract_int(&v))
        .map_err(|e| e.with_context("to_int"))?;
    trace!(value = counted, "numeral to host integer");
    Ok(counted)
}

/// Boolean to host boolean: apply to `true` and `false`.
pub fn to_bool(p: &Value) -> Result<bool, ChurchError> {
    let selected = p
        .apply2(make_bool(true), make_bool(false))
        .and_then(|v| extract_bool(&v))
        .map_err(|e| e.with_context("to_bool"))?;
    trace!(value = selected, "boolean to host boolean");
    Ok(selected)
}

/// List to a host `Vec`, converting each element with `convert`.
pub fn to_vec<T, F>(list: &Value, mut convert: F) -> Result<Vec<T>, ChurchError>
where
    F: FnMut(&Value) -> Result<T, ChurchError>,
{
    let mut result = Vec::new();
    let mut current = list.clone();

    while !to_bool(&is_nil(&current)?)? {
        result.push(convert(&head(&current)?)?);
        current = tail(&current)?;
    }

    trace!(len = result.len(), "list to host vector");
    Ok(result)
}

/// List to a host `Vec` of the element values themselves.
pub fn to_values(list: &Value) -> Result<Vec<Value>, ChurchError> {
    to_vec(list, |v| Ok(v.clone()))
}
