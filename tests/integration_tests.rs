use sovran_any::{any_cast_mut, any_cast_ref, make_any, AnyError, AnyValue, TypeInfo};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::thread;

#[test]
fn test_plain_text_scenario() {
    // Start empty
    let mut a = AnyValue::new();
    assert!(!a.has_value());

    // Store a string
    a.set("plain text".to_string());
    assert!(a.has_value());
    assert_eq!(any_cast_ref::<String>(Some(&a)).unwrap(), "plain text");
    assert!(any_cast_ref::<i32>(Some(&a)).is_none());

    // Mutate through the returned reference
    *any_cast_mut::<String>(Some(&mut a)).unwrap() = "other text".to_string();
    assert_eq!(any_cast_ref::<String>(Some(&a)).unwrap(), "other text");

    // Copy, then mutate only the copy
    let mut b = a.clone();
    *any_cast_mut::<String>(Some(&mut b)).unwrap() = "b-only".to_string();
    assert_eq!(any_cast_ref::<String>(Some(&a)).unwrap(), "other text");
    assert_eq!(any_cast_ref::<String>(Some(&b)).unwrap(), "b-only");
}

#[test]
fn test_pair_factory_scenario() {
    let pair = make_any::<(i32, i32), _>((3, 4));
    assert_eq!(any_cast_ref::<(i32, i32)>(Some(&pair)), Some(&(3, 4)));
    assert!(any_cast_ref::<i32>(Some(&pair)).is_none());
    assert!(any_cast_ref::<(i64, i64)>(Some(&pair)).is_none());
}

#[test]
fn test_cast_recovers_stored_value() {
    let values = [
        AnyValue::from_value(0u8),
        AnyValue::from_value(-17i64),
        AnyValue::from_value(String::from("hello")),
        AnyValue::from_value(vec![1.0f64, 2.0]),
        AnyValue::from_value(Some('z')),
    ];

    assert_eq!(values[0].downcast_ref::<u8>(), Some(&0));
    assert_eq!(values[1].downcast_ref::<i64>(), Some(&-17));
    assert_eq!(values[2].downcast_ref::<String>().unwrap(), "hello");
    assert_eq!(values[3].downcast_ref::<Vec<f64>>(), Some(&vec![1.0, 2.0]));
    assert_eq!(values[4].downcast_ref::<Option<char>>(), Some(&Some('z')));
}

#[test]
fn test_cast_to_other_type_is_none() {
    let value = AnyValue::from_value(42i32);

    assert!(value.downcast_ref::<u32>().is_none());
    assert!(value.downcast_ref::<i64>().is_none());
    assert!(value.downcast_ref::<String>().is_none());
    assert!(value.downcast_ref::<&i32>().is_none());
    assert!(value.downcast_ref::<Box<i32>>().is_none());
    assert!(value.downcast_ref::<Option<i32>>().is_none());
}

#[test]
fn test_copy_matches_source() {
    let containers = vec![
        AnyValue::new(),
        AnyValue::from_value(1u16),
        AnyValue::from_value("text".to_string()),
    ];

    for source in &containers {
        let copy = source.clone();
        assert_eq!(copy.has_value(), source.has_value());
        assert_eq!(copy.type_info(), source.type_info());
    }
}

#[test]
fn test_copies_are_independent_both_ways() {
    let mut source = AnyValue::from_value(vec![1, 2]);
    let mut copy = source.clone();

    copy.downcast_mut::<Vec<i32>>().unwrap().push(3);
    assert_eq!(source.get::<Vec<i32>>(), Ok(vec![1, 2]));

    source.downcast_mut::<Vec<i32>>().unwrap().clear();
    assert_eq!(copy.get::<Vec<i32>>(), Ok(vec![1, 2, 3]));
}

#[test]
fn test_reset_always_empties() {
    let mut containers = vec![
        AnyValue::new(),
        AnyValue::from_value(3.25f32),
        make_any::<String, _>("x"),
    ];

    for value in &mut containers {
        value.reset();
        assert!(!value.has_value());
        assert_eq!(value.type_info(), TypeInfo::none());
    }
}

#[test]
fn test_clone_from_equivalent_copy_is_unchanged() {
    // `c.clone_from(&c)` cannot be written; cloning from an identical copy is
    // the closest observable case.
    let mut c = AnyValue::from_value("same".to_string());
    let snapshot = c.clone();
    c.clone_from(&snapshot);

    assert!(c.is::<String>());
    assert_eq!(c.downcast_ref::<String>().unwrap(), "same");
}

#[test]
fn test_move_keeps_value_and_type() {
    let mut c = make_any::<(i32, i32), _>((5, 6));
    let type_before = c.type_info();

    let moved_to = c.take();
    assert_eq!(moved_to.type_info(), type_before);
    assert_eq!(moved_to.downcast_ref::<(i32, i32)>(), Some(&(5, 6)));

    // The source remains usable
    assert!(!c.has_value());
    c.set(1u8);
    assert!(c.is::<u8>());

    // A plain Rust move works too
    let moved_again = moved_to;
    assert_eq!(moved_again.get::<(i32, i32)>(), Ok((5, 6)));
}

#[test]
fn test_reassign_to_new_type() {
    let mut value = AnyValue::from_value(1i32);
    assert!(value.is::<i32>());

    value.set("now a string".to_string());
    assert!(!value.is::<i32>());
    assert!(value.downcast_ref::<i32>().is_none());
    assert_eq!(value.get::<String>().unwrap(), "now a string");
}

#[test]
fn test_collections_of_containers() {
    let mut settings: HashMap<&str, AnyValue> = HashMap::new();
    settings.insert("retries", AnyValue::from_value(3u32));
    settings.insert("name", make_any::<String, _>("service"));
    settings.insert("ratio", AnyValue::from_value(0.5f64));

    let snapshot = settings.clone();
    if let Some(retries) = any_cast_mut::<u32>(settings.get_mut("retries")) {
        *retries += 1;
    }

    assert_eq!(any_cast_ref::<u32>(settings.get("retries")), Some(&4));
    assert_eq!(any_cast_ref::<u32>(snapshot.get("retries")), Some(&3));
    assert_eq!(any_cast_ref::<u32>(settings.get("missing")), None);
    assert_eq!(
        snapshot["name"].get::<u32>(),
        Err(AnyError::TypeMismatch {
            expected: TypeInfo::of::<u32>(),
            found: TypeInfo::of::<String>(),
        })
    );
}

#[test]
fn test_shared_behind_mutex() {
    let store = Arc::new(Mutex::new(AnyValue::from_value(0u32)));

    // Several threads increment the same held value
    let mut handles = vec![];
    for _ in 0..8 {
        let store_clone = Arc::clone(&store);
        handles.push(thread::spawn(move || {
            for _ in 0..100 {
                let mut value = store_clone.lock().unwrap();
                *value.downcast_mut::<u32>().unwrap() += 1;
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(store.lock().unwrap().get::<u32>(), Ok(800));

    // Replace the value from another thread
    let store_clone = Arc::clone(&store);
    thread::spawn(move || {
        store_clone.lock().unwrap().set("replaced".to_string());
    })
    .join()
    .unwrap();
    assert_eq!(store.lock().unwrap().get::<String>().unwrap(), "replaced");
}

#[test]
fn test_moved_to_another_thread() {
    let value = make_any::<Vec<i32>, _>([1, 2, 3]);
    let copy = value.clone();

    let summed = thread::spawn(move || value.with(|v: &Vec<i32>| v.iter().sum::<i32>()))
        .join()
        .unwrap();

    assert_eq!(summed, Ok(6));
    assert_eq!(copy.get::<Vec<i32>>(), Ok(vec![1, 2, 3]));
}
