//! Natural numbers as iteration counts.
//!
//! The numeral for `n` takes a function `f` and a seed `x` and applies `f`
//! to `x` exactly `n` times. There is no negative numeral: predecessor and
//! subtraction saturate at `ZERO`, and the comparisons below rely on that.

use once_cell::sync::Lazy;

use crate::boolean::{FALSE, TRUE, and, not};
use crate::error::ChurchError;
use crate::language::{Value, lambda, lambda2};
use crate::pair::{first, pair, second};

// ============================================================================
// Constants
// ============================================================================

pub static ZERO: Lazy<Value> = Lazy::new(|| lambda2(|_f, x| Ok(x)));
pub static ONE: Lazy<Value> = Lazy::new(|| lambda2(|f, x| f.apply(x)));
pub static TWO: Lazy<Value> = Lazy::new(|| lambda2(|f, x| f.apply(f.apply(x)?)));
pub static THREE: Lazy<Value> = Lazy::new(|| lambda2(|f, x| f.apply(f.apply(f.apply(x)?)?)));
pub static FOUR: Lazy<Value> =
    Lazy::new(|| lambda2(|f, x| f.apply(f.apply(f.apply(f.apply(x)?)?)?)));
pub static FIVE: Lazy<Value> =
    Lazy::new(|| lambda2(|f, x| f.apply(f.apply(f.apply(f.apply(f.apply(x)?)?)?)?)));

pub static SIX: Lazy<Value> = Lazy::new(|| succ(&FIVE));
pub static SEVEN: Lazy<Value> = Lazy::new(|| succ(&SIX));
pub static EIGHT: Lazy<Value> = Lazy::new(|| succ(&SEVEN));
pub static NINE: Lazy<Value> = Lazy::new(|| succ(&EIGHT));
pub static TEN: Lazy<Value> = Lazy::new(|| succ(&NINE));

// ============================================================================
// Combinators
// ============================================================================

pub static SUCC: Lazy<Value> = Lazy::new(|| lambda(|n| Ok(succ(&n))));
pub static PRED: Lazy<Value> = Lazy::new(|| lambda(|n| pred(&n)));
pub static ADD: Lazy<Value> = Lazy::new(|| lambda2(|m, n| Ok(add(&m, &n))));
pub static SUB: Lazy<Value> = Lazy::new(|| lambda2(|m, n| sub(&m, &n)));
pub static MUL: Lazy<Value> = Lazy::new(|| lambda2(|m, n| Ok(mul(&m, &n))));
pub static POW: Lazy<Value> = Lazy::new(|| lambda2(|m, n| Ok(pow(&m, &n))));
pub static DOUBLE: Lazy<Value> = Lazy::new(|| lambda(|n| Ok(double(&n))));
pub static SQUARE: Lazy<Value> = Lazy::new(|| lambda(|n| Ok(square(&n))));
pub static IS_ZERO: Lazy<Value> = Lazy::new(|| lambda(|n| is_zero(&n)));
pub static EQUALS: Lazy<Value> = Lazy::new(|| lambda2(|m, n| equals(&m, &n)));
pub static LEQ: Lazy<Value> = Lazy::new(|| lambda2(|m, n| leq(&m, &n)));
pub static LT: Lazy<Value> = Lazy::new(|| lambda2(|m, n| lt(&m, &n)));
pub static GT: Lazy<Value> = Lazy::new(|| lambda2(|m, n| gt(&m, &n)));

/// `(a, b) => (b, b + 1)`, the step `pred` iterates.
static PHI: Lazy<Value> = Lazy::new(|| {
    lambda(|p| {
        let b = second(&p)?;
        Ok(pair(&b, &succ(&b)))
    })
});

/// Ignores its argument and answers FALSE; `is_zero` feeds it to a numeral.
static ALWAYS_FALSE: Lazy<Value> = Lazy::new(|| lambda(|_| Ok(Value::clone(&FALSE))));

/// Build the numeral for a host integer. The result applies `f` in a loop
/// rather than through a chain of `succ` closures.
pub fn numeral(n: u64) -> Value {
    lambda2(move |f, x| {
        let mut acc = x;
        for _ in 0..n {
            acc = f.apply(acc)?;
        }
        Ok(acc)
    })
}

/// `f => x => f(n(f)(x))`
pub fn succ(n: &Value) -> Value {
    let n = n.clone();
    lambda2(move |f, x| {
        let inner = n.apply2(f.clone(), x)?;
        f.apply(inner)
    })
}

/// Iterate `(a, b) -> (b, b + 1)` `n` times from `(0, 0)` and keep the first
/// component. `pred(ZERO)` is `ZERO`.
pub fn pred(n: &Value) -> Result<Value, ChurchError> {
    let start = pair(&ZERO, &ZERO);
    first(&n.apply2(Value::clone(&PHI), start)?)
}

/// `m - n`, applying `pred` to `m` `n` times. Never goes below zero.
pub fn sub(m: &Value, n: &Value) -> Result<Value, ChurchError> {
    n.apply2(Value::clone(&PRED), m.clone())
}

/// `f => x => m(f)(n(f)(x))`
pub fn add(m: &Value, n: &Value) -> Value {
    let m = m.clone();
    let n = n.clone();
    lambda2(move |f, x| {
        let nx = n.apply2(f.clone(), x)?;
        m.apply2(f, nx)
    })
}

/// `f => m(n(f))`
pub fn mul(m: &Value, n: &Value) -> Value {
    let m = m.clone();
    let n = n.clone();
    lambda(move |f| m.apply(n.apply(f)?))
}

/// `m` to the power `n`: `f => n(m)(f)`.
pub fn pow(m: &Value, n: &Value) -> Value {
    let m = m.clone();
    let n = n.clone();
    lambda(move |f| n.apply2(m.clone(), f))
}

pub fn double(n: &Value) -> Value {
    add(n, n)
}

pub fn square(n: &Value) -> Value {
    mul(n, n)
}

/// TRUE unless applying `n` ever invokes its function argument.
pub fn is_zero(n: &Value) -> Result<Value, ChurchError> {
    n.apply2(Value::clone(&ALWAYS_FALSE), Value::clone(&TRUE))
}

/// Both saturating differences are zero.
pub fn equals(m: &Value, n: &Value) -> Result<Value, ChurchError> {
    let m_minus_n = is_zero(&sub(m, n)?)?;
    let n_minus_m = is_zero(&sub(n, m)?)?;
    and(&m_minus_n, &n_minus_m)
}

pub fn leq(m: &Value, n: &Value) -> Result<Value, ChurchError> {
    is_zero(&sub(m, n)?)
}

pub fn lt(m: &Value, n: &Value) -> Result<Value, ChurchError> {
    not(&leq(n, m)?)
}

pub fn gt(m: &Value, n: &Value) -> Result<Value, ChurchError> {
    not(&leq(m, n)?)
}
