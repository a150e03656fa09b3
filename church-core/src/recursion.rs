//! Anonymous recursion through a fixed-point combinator.
//!
//! Arguments are evaluated eagerly, so the textbook `Y` would unroll forever
//! before doing any work. The self-application is wrapped in an extra
//! `y => x(x)(y)` so it only happens when the recursive reference is actually
//! called.

use once_cell::sync::Lazy;

use crate::error::ChurchError;
use crate::language::{Value, lambda};

/// `f => (x => x(x))(x => f(y => x(x)(y)))`
pub static Y: Lazy<Value> = Lazy::new(|| lambda(|f| fix(&f)));

/// Fixed point of `f`, where `f` takes "self" as its first argument.
pub fn fix(f: &Value) -> Result<Value, ChurchError> {
    let f = f.clone();
    let unroll = lambda(move |x: Value| {
        let delayed = lambda(move |y| x.apply(x.clone())?.apply(y));
        f.apply(delayed)
    });
    unroll.apply(unroll.clone())
}

/// `arg => fix(step)(arg)`.
///
/// The fixed point is taken when the result is first applied, which lets
/// recursive combinators be built in infallible constructors such as the
/// library's `Lazy` statics.
pub fn recursive(step: Value) -> Value {
    lambda(move |arg| fix(&step)?.apply(arg))
}
