//! The two-element grouping every composite encoding is built from.

use once_cell::sync::Lazy;

use crate::boolean::{FALSE, TRUE};
use crate::error::ChurchError;
use crate::language::{Value, lambda, lambda2};

pub static PAIR: Lazy<Value> = Lazy::new(|| lambda2(|x, y| Ok(pair(&x, &y))));
pub static FIRST: Lazy<Value> = Lazy::new(|| lambda(|p| first(&p)));
pub static SECOND: Lazy<Value> = Lazy::new(|| lambda(|p| second(&p)));

/// `f => f(x)(y)`
pub fn pair(x: &Value, y: &Value) -> Value {
    let x = x.clone();
    let y = y.clone();
    lambda(move |select| select.apply2(x.clone(), y.clone()))
}

pub fn first(p: &Value) -> Result<Value, ChurchError> {
    p.apply(Value::clone(&TRUE))
}

pub fn second(p: &Value) -> Result<Value, ChurchError> {
    p.apply(Value::clone(&FALSE))
}
