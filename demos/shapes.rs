use sovran_any::{AnyError, AnyValue};

#[derive(Debug, Clone)]
struct Circle {
    radius: f64,
}

#[derive(Debug, Clone)]
struct Rect {
    width: f64,
    height: f64,
}

fn area(shape: &AnyValue) -> Result<f64, AnyError> {
    if let Some(circle) = shape.downcast_ref::<Circle>() {
        return Ok(std::f64::consts::PI * circle.radius * circle.radius);
    }
    shape.with(|rect: &Rect| rect.width * rect.height)
}

fn main() -> Result<(), AnyError> {
    let shapes = vec![
        AnyValue::from_value(Circle { radius: 1.0 }),
        AnyValue::from_value(Rect {
            width: 2.0,
            height: 3.0,
        }),
        AnyValue::from_value("not a shape"),
        AnyValue::new(),
    ];

    // Work on copies so the originals stay untouched
    let mut scaled = shapes.clone();
    for shape in &mut scaled {
        if let Some(circle) = shape.downcast_mut::<Circle>() {
            circle.radius *= 2.0;
        }
    }

    for (original, copy) in shapes.iter().zip(&scaled) {
        match (area(original), area(copy)) {
            (Ok(before), Ok(after)) => {
                println!("{:?}: area {:.2} -> {:.2}", original, before, after)
            }
            (Err(e), _) => println!("{:?}: {}", original, e),
            (_, Err(e)) => println!("{:?}: {}", copy, e),
        }
    }

    let total: f64 = shapes.iter().filter_map(|shape| area(shape).ok()).sum();
    println!("Total area: {:.2}", total);

    area(&shapes[1]).map(|_| ())
}
