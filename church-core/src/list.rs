//! Singly linked lists built from pairs.
//!
//! `NIL` is a pair whose first component is TRUE. A node is
//! `PAIR(FALSE)(PAIR(head)(tail))`, so `IS_NIL` is just `FIRST`.
//! Traversals recurse through `fix` and branch with `if_then_else`;
//! they do not terminate on cyclic lists.

use once_cell::sync::Lazy;

use crate::boolean::{FALSE, TRUE, and};
use crate::conditional::if_then_else;
use crate::error::ChurchError;
use crate::language::{Value, lambda, lambda2, lambda3, thunk};
use crate::numeral::{ZERO, add, equals};
use crate::pair::{first, pair, second};
use crate::recursion::recursive;

// ============================================================================
// Construction and projection
// ============================================================================

pub static NIL: Lazy<Value> = Lazy::new(|| pair(&TRUE, &TRUE));

pub static LIST_NODE: Lazy<Value> = Lazy::new(|| lambda2(|x, y| Ok(list_node(&x, &y))));
pub static IS_NIL: Lazy<Value> = Lazy::new(|| lambda(|l| is_nil(&l)));
pub static HEAD: Lazy<Value> = Lazy::new(|| lambda(|l| head(&l)));
pub static TAIL: Lazy<Value> = Lazy::new(|| lambda(|l| tail(&l)));

pub fn list_node(head: &Value, tail: &Value) -> Value {
    pair(&FALSE, &pair(head, tail))
}

pub fn is_nil(list: &Value) -> Result<Value, ChurchError> {
    first(list)
}

pub fn head(list: &Value) -> Result<Value, ChurchError> {
    first(&second(list)?)
}

pub fn tail(list: &Value) -> Result<Value, ChurchError> {
    second(&second(list)?)
}

/// Build a list holding `items` in iteration order.
pub fn list_of<I>(items: I) -> Value
where
    I: IntoIterator<Item = Value>,
    I::IntoIter: DoubleEndedIterator,
{
    items
        .into_iter()
        .rev()
        .fold(Value::clone(&NIL), |acc, item| list_node(&item, &acc))
}

// ============================================================================
// Traversals
// ============================================================================

/// Sum of a list of numerals.
pub static SUMLIST: Lazy<Value> = Lazy::new(|| {
    recursive(lambda2(|this, list| {
        let rest = list.clone();
        if_then_else(
            &is_nil(&list)?,
            &thunk(|| Ok(Value::clone(&ZERO))),
            &thunk(move || {
                let sum_of_tail = this.apply(tail(&rest)?)?;
                Ok(add(&head(&rest)?, &sum_of_tail))
            }),
        )
    }))
});

/// `MAP(f)(list)`
pub static MAP: Lazy<Value> = Lazy::new(|| {
    recursive(lambda3(|this, f, list| {
        let rest = list.clone();
        if_then_else(
            &is_nil(&list)?,
            &thunk(|| Ok(Value::clone(&NIL))),
            &thunk(move || {
                let mapped = f.apply(head(&rest)?)?;
                let mapped_tail = this.apply2(f.clone(), tail(&rest)?)?;
                Ok(list_node(&mapped, &mapped_tail))
            }),
        )
    }))
});

/// `APPEND(l1)(l2)`: copies the nodes of `l1` and shares `l2`.
pub static APPEND: Lazy<Value> = Lazy::new(|| {
    recursive(lambda3(|this, l1, l2| {
        let rest = l1.clone();
        let other = l2.clone();
        if_then_else(
            &is_nil(&l1)?,
            &thunk(move || Ok(l2.clone())),
            &thunk(move || {
                let appended = this.apply2(tail(&rest)?, other.clone())?;
                Ok(list_node(&head(&rest)?, &appended))
            }),
        )
    }))
});

/// Element-wise `EQUALS` over two lists of numerals. Lists of different
/// lengths compare FALSE.
pub static LIST_EQ: Lazy<Value> = Lazy::new(|| {
    recursive(lambda3(|this, l1, l2| {
        let (left, right) = (l1.clone(), l2.clone());
        if_then_else(
            &is_nil(&l1)?,
            &thunk(move || is_nil(&l2)),
            &thunk(move || {
                let (left, right, this) = (left.clone(), right.clone(), this.clone());
                if_then_else(
                    &is_nil(&right)?,
                    &thunk(|| Ok(Value::clone(&FALSE))),
                    &thunk(move || {
                        let heads = equals(&head(&left)?, &head(&right)?)?;
                        let tails = this.apply2(tail(&left)?, tail(&right)?)?;
                        and(&heads, &tails)
                    }),
                )
            }),
        )
    }))
});

pub fn sum_list(list: &Value) -> Result<Value, ChurchError> {
    SUMLIST.apply(list.clone())
}

pub fn map(f: &Value, list: &Value) -> Result<Value, ChurchError> {
    MAP.apply2(f.clone(), list.clone())
}

pub fn append(l1: &Value, l2: &Value) -> Result<Value, ChurchError> {
    APPEND.apply2(l1.clone(), l2.clone())
}

pub fn list_eq(l1: &Value, l2: &Value) -> Result<Value, ChurchError> {
    LIST_EQ.apply2(l1.clone(), l2.clone())
}
