//! Lazy two-branch selection.

use once_cell::sync::Lazy;

use crate::error::ChurchError;
use crate::language::{Value, lambda3};

/// `p => a => b => p(a)(b)()`
pub static IF: Lazy<Value> = Lazy::new(|| lambda3(|p, a, b| if_then_else(&p, &a, &b)));

/// Select a branch with `p` and force it. Both branches must be thunks;
/// the one not selected is never run, which is what keeps a recursive call
/// in the other branch from diverging.
pub fn if_then_else(
    p: &Value,
    then_branch: &Value,
    else_branch: &Value,
) -> Result<Value, ChurchError> {
    p.apply2(then_branch.clone(), else_branch.clone())?.force()
}
