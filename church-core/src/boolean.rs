//! Booleans as two-way selectors.
//!
//! `TRUE` picks its first argument and `FALSE` its second. The logical
//! operators only ever re-select between their inputs, so no host branching
//! takes place and the unused operand is never applied.

use once_cell::sync::Lazy;

use crate::error::ChurchError;
use crate::language::{Value, lambda, lambda2};

/// `a => b => a`
pub static TRUE: Lazy<Value> = Lazy::new(|| lambda2(|a, _b| Ok(a)));

/// `a => b => b`
pub static FALSE: Lazy<Value> = Lazy::new(|| lambda2(|_a, b| Ok(b)));

pub static AND: Lazy<Value> = Lazy::new(|| lambda2(|p, q| and(&p, &q)));
pub static OR: Lazy<Value> = Lazy::new(|| lambda2(|p, q| or(&p, &q)));
pub static NOT: Lazy<Value> = Lazy::new(|| lambda(|p| not(&p)));

/// `p(q)(p)`: when `p` is false the answer is `p` itself.
pub fn and(p: &Value, q: &Value) -> Result<Value, ChurchError> {
    p.apply2(q.clone(), p.clone())
}

/// `p(p)(q)`: when `p` is true the answer is `p` itself.
pub fn or(p: &Value, q: &Value) -> Result<Value, ChurchError> {
    p.apply2(p.clone(), q.clone())
}

pub fn not(p: &Value) -> Result<Value, ChurchError> {
    p.apply2(Value::clone(&FALSE), Value::clone(&TRUE))
}

/// Encode a host boolean. Boundary use only.
pub fn from_bool(b: bool) -> Value {
    if b {
        Value::clone(&TRUE)
    } else {
        Value::clone(&FALSE)
    }
}
