//! Local binding and loops.
//!
//! Loop state is never updated in place: every iteration builds a new state
//! value. Termination is up to the caller's condition.

use once_cell::sync::Lazy;

use crate::conditional::if_then_else;
use crate::error::ChurchError;
use crate::language::{Value, lambda, lambda2, lambda3, thunk};
use crate::pair::{first, pair, second};
use crate::recursion::recursive;

/// `v => f => f(v)`
pub static LET: Lazy<Value> = Lazy::new(|| lambda2(|value, body| let_in(&value, &body)));

/// `WHILE(condition)(transform)(state)`
pub static WHILE: Lazy<Value> = Lazy::new(|| {
    recursive(lambda(|this| {
        Ok(lambda3(move |condition, transform, state| {
            let again = {
                let (this, condition, transform, state) =
                    (this.clone(), condition.clone(), transform.clone(), state.clone());
                thunk(move || {
                    let next = transform.apply(state.clone())?;
                    this.apply3(condition.clone(), transform.clone(), next)
                })
            };
            let finished = {
                let state = state.clone();
                thunk(move || Ok(state.clone()))
            };
            if_then_else(&condition.apply(state)?, &again, &finished)
        }))
    }))
});

/// `FOR(init_index)(condition)(step)(init_acc)(body)`
pub static FOR: Lazy<Value> = Lazy::new(|| {
    lambda3(|init_index, condition, step| {
        Ok(lambda2(move |init_acc, body| {
            for_loop(&init_index, &condition, &step, &init_acc, &body)
        }))
    })
});

pub fn let_in(value: &Value, body: &Value) -> Result<Value, ChurchError> {
    body.apply(value.clone())
}

/// While `condition(state)` is TRUE, continue with `transform(state)`;
/// return the first state for which it is FALSE.
pub fn while_loop(
    condition: &Value,
    transform: &Value,
    state: &Value,
) -> Result<Value, ChurchError> {
    WHILE.apply3(condition.clone(), transform.clone(), state.clone())
}

/// Thread an `(index, accumulator)` pair through `while_loop`. The condition
/// sees the index; each step computes `step(index)` and
/// `body(accumulator)(index)`. Returns the final accumulator.
pub fn for_loop(
    init_index: &Value,
    condition: &Value,
    step: &Value,
    init_acc: &Value,
    body: &Value,
) -> Result<Value, ChurchError> {
    let guard = {
        let condition = condition.clone();
        lambda(move |state| condition.apply(first(&state)?))
    };

    let advance = {
        let (step, body) = (step.clone(), body.clone());
        lambda(move |state: Value| {
            let (step, body) = (step.clone(), body.clone());
            let acc_source = state.clone();
            let_in(
                &first(&state)?,
                &lambda(move |index| {
                    let (step, body) = (step.clone(), body.clone());
                    let_in(
                        &second(&acc_source)?,
                        &lambda(move |acc| {
                            let next_index = step.apply(index.clone())?;
                            let next_acc = body.apply2(acc, index.clone())?;
                            Ok(pair(&next_index, &next_acc))
                        }),
                    )
                }),
            )
        })
    };

    let final_state = while_loop(&guard, &advance, &pair(init_index, init_acc))?;
    second(&final_state)
}
