use std::env;
use std::process;

use church::{
    ADD, AND, ChurchError, DOUBLE, EIGHT, EMPTY_OBJ, FALSE, FIVE, FOUR, LEQ, LT, MUL, NIL, NINE,
    NOT, ONE, OR, POW, PRED, SEVEN, SIX, SUB, SUCC, TEN, THREE, TRUE, TWO, Value, ZERO, add, append,
    equals, first, fix, for_loop, from_church_string, get, head, if_then_else, is_zero, lambda,
    lambda2, leq, let_in, list_eq, list_node, map, mul, not, pair, pred, second, send, set,
    sum_list, tail, thunk, to_bool, to_church_string, to_int, to_vec, while_loop,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Demonstration sections, selectable through `CHURCH_DEMO_SECTIONS`.
const SECTIONS: [&str; 8] = ["bool", "num", "fn", "list", "str", "obj", "let", "loop"];

fn selected_sections() -> Vec<String> {
    match env::var("CHURCH_DEMO_SECTIONS") {
        Ok(list) if !list.trim().is_empty() => list
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .filter(|s| SECTIONS.contains(&s.as_str()))
            .collect(),
        _ => SECTIONS.iter().map(|s| s.to_string()).collect(),
    }
}

fn v(value: &Value) -> Value {
    value.clone()
}

fn booleans() -> Result<(), ChurchError> {
    println!("true: {}", to_bool(&TRUE)?);
    println!("false: {}", to_bool(&FALSE)?);
    for (p, q) in [(&TRUE, &TRUE), (&FALSE, &TRUE), (&TRUE, &FALSE), (&FALSE, &FALSE)] {
        let (pn, qn) = (to_bool(p)?, to_bool(q)?);
        println!("{pn} & {qn}: {}", to_bool(&AND.apply2(v(p), v(q))?)?);
        println!("{pn} | {qn}: {}", to_bool(&OR.apply2(v(p), v(q))?)?);
    }
    println!("!true: {}", to_bool(&NOT.apply(v(&TRUE))?)?);
    println!("!false: {}", to_bool(&not(&FALSE)?)?);
    Ok(())
}

fn numbers() -> Result<(), ChurchError> {
    for n in [&ZERO, &ONE, &TWO, &THREE] {
        println!("{}", to_int(n)?);
    }
    println!("4++: {}", to_int(&SUCC.apply(v(&FOUR))?)?);
    println!("5--: {}", to_int(&PRED.apply(v(&FIVE))?)?);
    println!("6+7: {}", to_int(&ADD.apply2(v(&SIX), v(&SEVEN))?)?);
    println!("7-6: {}", to_int(&SUB.apply2(v(&SEVEN), v(&SIX))?)?);
    println!("8*9: {}", to_int(&MUL.apply2(v(&EIGHT), v(&NINE))?)?);
    println!("10^2: {}", to_int(&POW.apply2(v(&TEN), v(&TWO))?)?);
    println!("2<=4: {}", to_bool(&LEQ.apply2(v(&TWO), v(&FOUR))?)?);
    println!("4<=2: {}", to_bool(&leq(&FOUR, &TWO)?)?);
    println!("2<=2: {}", to_bool(&leq(&TWO, &TWO)?)?);
    println!("2<4: {}", to_bool(&LT.apply2(v(&TWO), v(&FOUR))?)?);
    println!("4<2: {}", to_bool(&LT.apply2(v(&FOUR), v(&TWO))?)?);
    Ok(())
}

fn functions() -> Result<(), ChurchError> {
    let fac = fix(&lambda2(|this, n| {
        let n_rec = n.clone();
        if_then_else(
            &equals(&n, &ONE)?,
            &thunk(|| Ok(v(&ONE))),
            &thunk(move || Ok(mul(&n_rec, &this.apply(pred(&n_rec)?)?))),
        )
    }))?;
    println!("FAC(5): {}", to_int(&fac.apply(v(&FIVE))?)?);
    Ok(())
}

fn lists() -> Result<(), ChurchError> {
    let list = list_node(&THREE, &list_node(&TWO, &list_node(&ONE, &NIL)));
    println!("[3,2,1]: {:?}", to_vec(&list, to_int)?);
    println!("SUM([3,2,1]): {}", to_int(&sum_list(&list)?)?);
    let doubled = map(&DOUBLE, &list)?;
    println!("MAP(x => x+x, [3,2,1]): {:?}", to_vec(&doubled, to_int)?);
    println!("SUM(MAP...): {}", to_int(&sum_list(&doubled)?)?);
    println!("HEAD([3,2,1]): {}", to_int(&head(&list)?)?);
    println!("TAIL([3,2,1]): {:?}", to_vec(&tail(&list)?, to_int)?);
    Ok(())
}

fn strings() -> Result<(), ChurchError> {
    let hello = to_church_string("Hello ");
    let world = to_church_string("world");
    println!(
        "\"Hello \"+\"world\": {}",
        from_church_string(&append(&hello, &world)?)?
    );
    let same = list_eq(&to_church_string("foo"), &to_church_string("foo"))?;
    let different = list_eq(&to_church_string("foo"), &to_church_string("bar"))?;
    println!("\"foo\"==\"foo\": {}", to_bool(&same)?);
    println!("\"foo\"==\"bar\": {}", to_bool(&different)?);
    Ok(())
}

fn objects() -> Result<(), ChurchError> {
    let (name, age, dog_age) = (v(&ONE), v(&TWO), v(&FOUR));

    let user = set(&set(&EMPTY_OBJ, &name, &ONE), &age, &THREE);
    println!("GET NAME: {}", to_int(&get(&user, &name)?)?);
    println!("GET AGE: {}", to_int(&get(&user, &age)?)?);

    let age_key = age.clone();
    let dog_years = lambda(move |this| Ok(mul(&this.apply(age_key.clone())?, &SEVEN)));
    let user2 = set(&set(&EMPTY_OBJ, &dog_age, &dog_years), &age, &THREE);
    println!("SEND DOGAGE: {}", to_int(&send(&user2, &dog_age)?)?);
    Ok(())
}

fn bindings() -> Result<(), ChurchError> {
    let result = let_in(
        &FOUR,
        &lambda(|x| let_in(&SEVEN, &lambda(move |y| Ok(add(&x, &y))))),
    )?;
    println!("let x=4; let y=7; return x+y: {}", to_int(&result)?);
    Ok(())
}

fn loops() -> Result<(), ChurchError> {
    // (index, accumulator) = (n, 0); while index != 0: (index - 1, accumulator + index)
    let sum_to_five = while_loop(
        &lambda(|state| not(&is_zero(&first(&state)?)?)),
        &lambda(|state| {
            let (i, a) = (first(&state)?, second(&state)?);
            Ok(pair(&pred(&i)?, &add(&i, &a)))
        }),
        &pair(&FIVE, &ZERO),
    )?;
    println!("0+1+...+5 using WHILE: {}", to_int(&second(&sum_to_five)?)?);

    let product = for_loop(
        &ONE,
        &lambda(|i| leq(&i, &FIVE)),
        &SUCC,
        &ONE,
        &lambda2(|acc, i| Ok(mul(&acc, &i))),
    )?;
    println!("1*2*3*4*5 using FOR: {}", to_int(&product)?);
    Ok(())
}

fn run(sections: &[String]) -> Result<(), ChurchError> {
    for section in sections {
        debug!(section = section.as_str(), "running demonstration section");
        println!("--- {section}");
        match section.as_str() {
            "bool" => booleans()?,
            "num" => numbers()?,
            "fn" => functions()?,
            "list" => lists()?,
            "str" => strings()?,
            "obj" => objects()?,
            "let" => bindings()?,
            "loop" => loops()?,
            _ => {}
        }
    }
    Ok(())
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let sections = selected_sections();
    info!(?sections, "church demonstration");

    if let Err(e) = run(&sections) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
