//! Strings as lists of character-code numerals.

use tracing::trace;

use crate::error::ChurchError;
use crate::language::Value;
use crate::list::{NIL, append, list_eq, list_node};
use crate::native::{to_int, to_vec};
use crate::numeral::numeral;

/// Encode host text, one numeral per `char` (Unicode scalar value).
/// Characters are folded right to left so the list reads in text order.
pub fn to_church_string(s: &str) -> Value {
    trace!(text = s, "encoding string");
    s.chars().rev().fold(Value::clone(&NIL), |acc, c| {
        list_node(&numeral(u64::from(u32::from(c))), &acc)
    })
}

/// Decode an encoded string back to host text.
pub fn from_church_string(s: &Value) -> Result<String, ChurchError> {
    let codes = to_vec(s, to_int).map_err(|e| e.with_context("from_church_string"))?;
    let text = codes
        .into_iter()
        .map(|code| {
            u32::try_from(code)
                .ok()
                .and_then(char::from_u32)
                .ok_or_else(|| ChurchError::invalid_char_code(code))
        })
        .collect::<Result<String, ChurchError>>()?;
    trace!(text = text.as_str(), "decoded string");
    Ok(text)
}

/// Concatenation is list append.
pub fn concat(a: &Value, b: &Value) -> Result<Value, ChurchError> {
    append(a, b)
}

/// Character-by-character numeral equality.
pub fn string_eq(a: &Value, b: &Value) -> Result<Value, ChurchError> {
    list_eq(a, b)
}
