use std::sync::Arc;
use std::thread;

use church::{FIVE, SEVEN, Value, add, list_of, mul, numeral, sum_list, to_int};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_value_is_send_sync() {
    assert_send_sync::<Value>();
}

#[test]
fn test_value_shared_across_threads() {
    let list = Arc::new(list_of((1..=4).map(numeral)));

    let mut handles = vec![];

    // Every thread reads the same list and sums it independently
    for i in 0..5u64 {
        let list = Arc::clone(&list);
        let handle = thread::spawn(move || {
            let total = sum_list(&list).unwrap();
            to_int(&add(&total, &numeral(i))).unwrap()
        });
        handles.push(handle);
    }

    let results: Vec<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![10, 11, 12, 13, 14]);
}

#[test]
fn test_statics_initialise_once_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| thread::spawn(|| to_int(&mul(&FIVE, &SEVEN)).unwrap()))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 35);
    }
}
