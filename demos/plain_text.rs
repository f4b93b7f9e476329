use sovran_any::{any_cast_mut, any_cast_ref, make_any};

fn main() {
    let mut a = make_any::<String, _>("plain text");

    if let Some(text) = any_cast_ref::<String>(Some(&a)) {
        println!("any value: {}", text);
    }

    if let Some(text) = any_cast_mut::<String>(Some(&mut a)) {
        *text = "other plain text".to_string();
    }

    match any_cast_ref::<String>(Some(&a)) {
        Some(text) => println!("any value: {}", text),
        None => println!("any value is not a String"),
    }
}
