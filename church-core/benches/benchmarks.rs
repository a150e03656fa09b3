use church::{
    DOUBLE, ONE, SUCC, Value, equals, fix, for_loop, if_then_else, lambda, lambda2, leq, list_eq,
    list_of, map, mul, numeral, pow, pred, sub, sum_list, thunk, to_church_string, to_int,
};
use codspeed_criterion_compat::{Criterion, black_box, criterion_group, criterion_main};

// ============================================================================
// Arithmetic Benchmarks
// ============================================================================

fn bench_to_int(c: &mut Criterion) {
    let n = numeral(1000);
    c.bench_function("to_int 1000", |b| b.iter(|| black_box(to_int(&n).unwrap())));
}

fn bench_mul(c: &mut Criterion) {
    let (m, n) = (numeral(30), numeral(30));
    c.bench_function("mul 30*30", |b| {
        b.iter(|| black_box(to_int(&mul(&m, &n)).unwrap()))
    });
}

fn bench_pow(c: &mut Criterion) {
    let (m, n) = (numeral(4), numeral(5));
    c.bench_function("pow 4^5", |b| {
        b.iter(|| black_box(to_int(&pow(&m, &n)).unwrap()))
    });
}

fn bench_sub(c: &mut Criterion) {
    let (m, n) = (numeral(50), numeral(25));
    c.bench_function("sub 50-25", |b| {
        b.iter(|| black_box(to_int(&sub(&m, &n).unwrap()).unwrap()))
    });
}

// ============================================================================
// Recursion Benchmarks
// ============================================================================

fn factorial() -> Value {
    fix(&lambda2(|this, n| {
        let n_rec = n.clone();
        if_then_else(
            &equals(&n, &ONE)?,
            &thunk(|| Ok(Value::clone(&ONE))),
            &thunk(move || Ok(mul(&n_rec, &this.apply(pred(&n_rec)?)?))),
        )
    }))
    .unwrap()
}

fn bench_factorial(c: &mut Criterion) {
    let fac = factorial();
    c.bench_function("factorial 5", |b| {
        b.iter(|| black_box(to_int(&fac.apply(numeral(5)).unwrap()).unwrap()))
    });
}

fn bench_for_loop(c: &mut Criterion) {
    let limit = numeral(5);
    c.bench_function("for product 1..5", |b| {
        b.iter(|| {
            let limit = limit.clone();
            let product = for_loop(
                &ONE,
                &lambda(move |i| leq(&i, &limit)),
                &SUCC,
                &ONE,
                &lambda2(|acc, i| Ok(mul(&acc, &i))),
            )
            .unwrap();
            black_box(to_int(&product).unwrap())
        })
    });
}

// ============================================================================
// List and String Benchmarks
// ============================================================================

fn bench_sum_list(c: &mut Criterion) {
    let list = list_of((0..50).map(numeral));
    c.bench_function("sum_list 50 elements", |b| {
        b.iter(|| black_box(to_int(&sum_list(&list).unwrap()).unwrap()))
    });
}

fn bench_map_double(c: &mut Criterion) {
    let list = list_of((0..50).map(numeral));
    c.bench_function("map double 50 elements", |b| {
        b.iter(|| black_box(map(&DOUBLE, &list).unwrap()))
    });
}

fn bench_string_eq(c: &mut Criterion) {
    let left = to_church_string("hello");
    let right = to_church_string("hello");
    c.bench_function("string_eq hello", |b| {
        b.iter(|| black_box(list_eq(&left, &right).unwrap()))
    });
}

criterion_group!(arithmetic, bench_to_int, bench_mul, bench_pow, bench_sub);
criterion_group!(recursion, bench_factorial, bench_for_loop);
criterion_group!(lists, bench_sum_list, bench_map_double, bench_string_eq);
criterion_main!(arithmetic, recursion, lists);
