//! Records as key-to-value functions.
//!
//! An object answers a numeral key with a value. `set` never touches the
//! object it is given; it wraps it in a new function that answers the new
//! key itself and delegates every other key to the old object. The old
//! object stays valid and keeps its old answers.
//!
//! Nothing marks a stored value as data or as a method. Fields read with
//! `get` hold plain values; fields used with `send` must hold functions
//! expecting the object itself as their one argument.

use once_cell::sync::Lazy;
use tracing::debug;

use crate::boolean::FALSE;
use crate::conditional::if_then_else;
use crate::error::ChurchError;
use crate::language::{Value, lambda, lambda2, lambda3, thunk};
use crate::numeral::equals;

/// Answers FALSE for every key.
pub static EMPTY_OBJ: Lazy<Value> = Lazy::new(|| lambda(|_key| Ok(Value::clone(&FALSE))));

pub static SET: Lazy<Value> = Lazy::new(|| lambda3(|obj, key, value| Ok(set(&obj, &key, &value))));
pub static GET: Lazy<Value> = Lazy::new(|| lambda2(|obj, key| get(&obj, &key)));
pub static SEND: Lazy<Value> = Lazy::new(|| lambda2(|obj, key| send(&obj, &key)));

/// A new object mapping `key` to `value` and everything else as `obj` does.
/// Keys are compared with numeral `equals`; the latest `set` wins.
pub fn set(obj: &Value, key: &Value, value: &Value) -> Value {
    let obj = obj.clone();
    let key = key.clone();
    let value = value.clone();
    lambda(move |requested: Value| {
        let value = value.clone();
        let obj = obj.clone();
        let matches = equals(&requested, &key)?;
        if_then_else(
            &matches,
            &thunk(move || Ok(value.clone())),
            &thunk(move || obj.apply(requested.clone())),
        )
    })
}

pub fn get(obj: &Value, key: &Value) -> Result<Value, ChurchError> {
    obj.apply(key.clone())
}

/// Look up `key` and apply the stored function to `obj` itself.
pub fn send(obj: &Value, key: &Value) -> Result<Value, ChurchError> {
    let method = obj.apply(key.clone())?;
    if method.ptr_eq(&FALSE) {
        debug!("send: field is the absent marker, the message falls through to FALSE");
    }
    method
        .apply(obj.clone())
        .map_err(|e| e.with_context("send"))
}
