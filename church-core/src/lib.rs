//! Church-encoded computation core.
//!
//! Booleans, natural numbers, pairs, lists, strings, records and loops,
//! all represented as single-argument functions. No host boolean, integer
//! or collection takes part in the semantics; host values only appear in
//! the bridging conversions of [`native`] and [`string`].
//!
//! Every operation comes in two forms: a curried function value
//! (`ADD`, `MAP`, `WHILE`, ...) that can be passed to other combinators,
//! and a Rust function (`add`, `map`, `while_loop`, ...) that applies the
//! same encoding and reports misapplication as a [`ChurchError`].
//!
//! ```
//! use church::{FIVE, fix, if_then_else, lambda2, mul, pred, thunk, to_int, equals, ONE};
//!
//! let fac = fix(&lambda2(|this, n| {
//!     let n2 = n.clone();
//!     if_then_else(
//!         &equals(&n, &ONE)?,
//!         &thunk(|| Ok(church::Value::clone(&ONE))),
//!         &thunk(move || Ok(mul(&n2, &this.apply(pred(&n2)?)?))),
//!     )
//! }))
//! .unwrap();
//! assert_eq!(to_int(&fac.apply(church::Value::clone(&FIVE)).unwrap()).unwrap(), 120);
//! ```

pub mod boolean;
pub mod conditional;
pub mod control;
pub mod error;
pub mod language;
pub mod list;
pub mod native;
pub mod numeral;
pub mod object;
pub mod pair;
pub mod recursion;
pub mod string;

// Re-export commonly used items for convenience
pub use boolean::{AND, FALSE, NOT, OR, TRUE, and, from_bool, not, or};
pub use conditional::{IF, if_then_else};
pub use control::{FOR, LET, WHILE, for_loop, let_in, while_loop};
pub use error::{ChurchError, ChurchErrorKind};
pub use language::{AtomType, Value, lambda, lambda2, lambda3, thunk};
pub use list::{
    APPEND, HEAD, IS_NIL, LIST_EQ, LIST_NODE, MAP, NIL, SUMLIST, TAIL, append, head, is_nil,
    list_eq, list_node, list_of, map, sum_list, tail,
};
pub use native::{to_bool, to_int, to_values, to_vec};
pub use numeral::{
    ADD, DOUBLE, EIGHT, EQUALS, FIVE, FOUR, GT, IS_ZERO, LEQ, LT, MUL, NINE, ONE, POW, PRED,
    SEVEN, SIX, SQUARE, SUB, SUCC, TEN, THREE, TWO, ZERO, add, double, equals, gt, is_zero, leq,
    lt, mul, numeral, pow, pred, square, sub, succ,
};
pub use object::{EMPTY_OBJ, GET, SEND, SET, get, send, set};
pub use pair::{FIRST, PAIR, SECOND, first, pair, second};
pub use recursion::{Y, fix, recursive};
pub use string::{concat, from_church_string, string_eq, to_church_string};
