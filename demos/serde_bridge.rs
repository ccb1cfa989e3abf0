//! Rust types through serde.
//!
//! Run with: cargo run --example serde_bridge

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_canon::{from_str, to_string, to_string_pretty, to_value};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
enum Status {
    Pending,
    Shipped { carrier: String },
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Order {
    id: u32,
    customer: String,
    total: f64,
    placed: DateTime<Utc>,
    status: Status,
    note: Option<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let order = Order {
        id: 42,
        customer: "Alice Johnson".to_string(),
        total: 24.98,
        placed: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
        status: Status::Shipped {
            carrier: "post".to_string(),
        },
        note: None,
    };

    let text = to_string(&order)?;
    println!("Canonical:\n{}\n", text);
    println!("Pretty:\n{}\n", to_string_pretty(&order)?);

    let back: Order = from_str(&text)?;
    assert_eq!(back, order);
    println!("✓ Round-trip successful");

    let value = to_value(&order)?;
    println!("status field: {:?}", value.get("status"));

    Ok(())
}
