//! Values plain JSON cannot carry.
//!
//! Run with: cargo run --example extended_types

use chrono::{TimeZone, Utc};
use serde_canon::{decode, encode, Function, RegExp, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let launch = Utc.with_ymd_and_hms(2012, 10, 14, 20, 27, 37).unwrap();

    let values = vec![
        Value::from(-0.0),
        Value::from(f64::INFINITY),
        Value::from(f64::NAN),
        Value::Undefined,
        Value::Arguments(vec![Value::from("x"), Value::from("y")]),
        Value::date(launch),
        Value::RegExp(RegExp::new("^foo$", "mi")?),
    ];

    for value in &values {
        let text = encode(value)?;
        let back = decode(&text)?;
        println!("{:<45} -> {:?}", text, back);
    }

    let f = Value::Function(Function::new("add", |args| {
        let sum: f64 = args.iter().filter_map(Value::as_f64).sum();
        Value::from(sum)
    }));
    if let Value::Function(func) = &f {
        println!("\nadd(1, 2) = {}", func.call(&[Value::from(1), Value::from(2)]));
    }
    match encode(&Value::Array(vec![Value::from(-1), f])) {
        Ok(_) => unreachable!("functions never encode"),
        Err(err) => println!("encoding a function: {} (at {:?})", err, err.path()),
    }

    Ok(())
}
