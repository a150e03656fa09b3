use std::fmt;
use std::sync::Arc;

use crate::error::ChurchError;

// ============================================================================
// Core Type System
// ============================================================================

/// Body of a single-argument function value.
pub type LambdaFn = dyn Fn(Value) -> Result<Value, ChurchError> + Send + Sync;

/// Body of a zero-argument deferred computation.
pub type ThunkFn = dyn Fn() -> Result<Value, ChurchError> + Send + Sync;

/// Host primitives. These only exist at the bridging boundary: an encoded
/// value is applied to atoms so its shape can be read back on the host side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AtomType {
    Int(u64),
    Bool(bool),
}

pub struct LambdaCell {
    pub body: Box<LambdaFn>,
}

pub struct ThunkCell {
    pub body: Box<ThunkFn>,
}

// Closures have no useful Debug output
impl fmt::Debug for LambdaCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LambdaCell")
            .field("body", &"<closure>")
            .finish()
    }
}

impl fmt::Debug for ThunkCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThunkCell")
            .field("body", &"<closure>")
            .finish()
    }
}

#[derive(Clone, Debug)]
pub enum Value {
    /// A function of one argument. Every encoded value is one of these.
    Lambda(Arc<LambdaCell>),
    /// A deferred branch, run only by `force`
    Thunk(Arc<ThunkCell>),
    Atom(AtomType),
}

impl Value {
    /// Apply this value to a single argument.
    pub fn apply(&self, arg: Value) -> Result<Value, ChurchError> {
        match self {
            Value::Lambda(cell) => (cell.body)(arg),
            other => Err(ChurchError::not_callable(other)),
        }
    }

    /// Curried application to two arguments: `self(a)(b)`.
    pub fn apply2(&self, a: Value, b: Value) -> Result<Value, ChurchError> {
        self.apply(a)?.apply(b)
    }

    /// Curried application to three arguments: `self(a)(b)(c)`.
    pub fn apply3(&self, a: Value, b: Value, c: Value) -> Result<Value, ChurchError> {
        self.apply(a)?.apply(b)?.apply(c)
    }

    /// Run a deferred computation.
    pub fn force(&self) -> Result<Value, ChurchError> {
        match self {
            Value::Thunk(cell) => (cell.body)(),
            other => Err(ChurchError::not_a_thunk(other)),
        }
    }

    /// Identity comparison: true only for clones of the same allocation or
    /// equal atoms. Two separately built encodings of the same number are
    /// different values here.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Lambda(a), Value::Lambda(b)) => Arc::ptr_eq(a, b),
            (Value::Thunk(a), Value::Thunk(b)) => Arc::ptr_eq(a, b),
            (Value::Atom(a), Value::Atom(b)) => a == b,
            _ => false,
        }
    }

    pub fn is_lambda(&self) -> bool {
        matches!(self, Value::Lambda(_))
    }
}

// ============================================================================
// Constructors
// ============================================================================

/// Wrap a Rust closure as a single-argument function value.
pub fn lambda<F>(f: F) -> Value
where
    F: Fn(Value) -> Result<Value, ChurchError> + Send + Sync + 'static,
{
    Value::Lambda(Arc::new(LambdaCell { body: Box::new(f) }))
}

/// Curried two-argument function value: `a => b => f(a, b)`.
pub fn lambda2<F>(f: F) -> Value
where
    F: Fn(Value, Value) -> Result<Value, ChurchError> + Send + Sync + 'static,
{
    let f = Arc::new(f);
    lambda(move |a| {
        let f = Arc::clone(&f);
        Ok(lambda(move |b| f(a.clone(), b)))
    })
}

/// Curried three-argument function value: `a => b => c => f(a, b, c)`.
pub fn lambda3<F>(f: F) -> Value
where
    F: Fn(Value, Value, Value) -> Result<Value, ChurchError> + Send + Sync + 'static,
{
    let f = Arc::new(f);
    lambda(move |a| {
        let f = Arc::clone(&f);
        Ok(lambda2(move |b, c| f(a.clone(), b, c)))
    })
}

/// Wrap a Rust closure as a zero-argument deferred computation.
pub fn thunk<F>(f: F) -> Value
where
    F: Fn() -> Result<Value, ChurchError> + Send + Sync + 'static,
{
    Value::Thunk(Arc::new(ThunkCell { body: Box::new(f) }))
}

// ============================================================================
// Display Implementation
// ============================================================================

impl fmt::Display for AtomType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AtomType::Int(n) => write!(f, "{n}"),
            AtomType::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Lambda(_) => write!(f, "<lambda>"),
            Value::Thunk(_) => write!(f, "<thunk>"),
            Value::Atom(atom) => write!(f, "{atom}"),
        }
    }
}
