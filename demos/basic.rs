//! Encoding and decoding dynamic values.
//!
//! Run with: cargo run --example basic

use serde_canon::{canon, decode, encode, encode_with_options, CanonOptions, ObjectMap, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let config = canon!({
        "port": 8080,
        "host": "localhost",
        "features": ["auth", "logging"],
        "debug": true
    });

    let text = encode(&config)?;
    println!("Canonical:\n{}\n", text);
    println!("Pretty:\n{}\n", encode_with_options(&config, &CanonOptions::pretty())?);

    // Insertion order does not matter
    let mut reordered = ObjectMap::new();
    reordered.insert("debug".to_string(), Value::Bool(true));
    reordered.insert("features".to_string(), canon!(["auth", "logging"]));
    reordered.insert("host".to_string(), Value::from("localhost"));
    reordered.insert("port".to_string(), Value::from(8080));
    assert_eq!(encode(&Value::Object(reordered))?, text);
    println!("✓ Same text regardless of key order");

    let back = decode(&text)?;
    assert_eq!(back, config);
    println!("✓ Round-trip successful");

    if let Some(port) = back.get("port").and_then(Value::as_i64) {
        println!("port = {}", port);
    }

    Ok(())
}
