//! Property-based tests for the canonical guarantees.
//!
//! - Atoms are written exactly as JSON writes them.
//! - `decode(encode(v)) == v` for every serializable value.
//! - `encode(decode(t)) == t` for every canonical text.
//! - Key insertion order never changes the output.
//! - Dates across the whole representable range, including expanded years,
//!   and regular expressions with any flag set survive a round trip.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use proptest::prelude::*;
use serde::{Deserialize, Serialize};
use serde_canon::{decode, encode, from_str, to_string, Number, ObjectMap, RegExp, Value};

fn roundtrip<T: Serialize + for<'de> Deserialize<'de> + PartialEq + std::fmt::Debug>(
    value: &T,
) -> bool {
    match to_string(value) {
        Ok(serialized) => match from_str::<T>(&serialized) {
            Ok(deserialized) => *value == deserialized,
            Err(e) => {
                eprintln!("Deserialize failed: {}", e);
                eprintln!("Serialized was: {}", serialized);
                false
            }
        },
        Err(e) => {
            eprintln!("Serialize failed: {}", e);
            false
        }
    }
}

fn arb_number() -> impl Strategy<Value = Number> {
    prop_oneof![
        any::<i64>().prop_map(Number::Integer),
        any::<f64>().prop_map(Number::from_f64),
        Just(Number::Float(-0.0)),
    ]
}

/// Instants from about 5000 BC to AD 20000, with sub-millisecond noise.
fn arb_datetime() -> impl Strategy<Value = DateTime<Utc>> {
    (-220_000_000_000i64..560_000_000_000i64, 0u32..1_000_000_000u32)
        .prop_filter_map("outside chrono's range", |(secs, nanos)| {
            Utc.timestamp_opt(secs, nanos).single()
        })
}

fn arb_regexp() -> impl Strategy<Value = RegExp> {
    let flags = prop::sample::subsequence(vec!['d', 'g', 'i', 'm', 's', 'u', 'v', 'y'], 0..=8)
        .prop_shuffle()
        .prop_filter("u and v exclude each other", |flags| {
            !(flags.contains(&'u') && flags.contains(&'v'))
        });
    (".{0,12}", flags).prop_map(|(source, flags)| {
        RegExp::new(source, &flags.into_iter().collect::<String>()).unwrap()
    })
}

fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        Just(Value::Undefined),
        any::<bool>().prop_map(Value::Bool),
        arb_number().prop_map(Value::Number),
        ".*".prop_map(Value::String),
        arb_datetime().prop_map(Value::date),
        arb_datetime().prop_map(Value::Date),
        arb_regexp().prop_map(Value::RegExp),
    ];
    leaf.prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(Value::Array),
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Arguments),
            prop::collection::vec((".{0,6}", inner), 0..8)
                .prop_map(|entries| Value::Object(entries.into_iter().collect::<ObjectMap>())),
        ]
    })
}

/// NaN is the one value not equal to itself; compare through the encoding.
fn same(a: &Value, b: &Value) -> bool {
    encode(a).ok() == encode(b).ok()
}

proptest! {
    #[test]
    fn prop_i64_matches_json(n in any::<i64>()) {
        prop_assert_eq!(encode(&Value::from(n)).unwrap(), serde_json::to_string(&n).unwrap());
    }

    #[test]
    fn prop_bool_matches_json(b in any::<bool>()) {
        prop_assert_eq!(encode(&Value::Bool(b)).unwrap(), serde_json::to_string(&b).unwrap());
    }

    #[test]
    fn prop_string_decodes_like_json(s in ".*") {
        let text = encode(&Value::from(s.as_str())).unwrap();
        let via_json: String = serde_json::from_str(&text).unwrap();
        prop_assert_eq!(via_json, s);
    }

    #[test]
    fn prop_finite_f64_reparses_exactly(f in any::<f64>().prop_filter("finite", |f| f.is_finite())) {
        let text = encode(&Value::from(f)).unwrap();
        let back = decode(&text).unwrap().as_f64().unwrap();
        prop_assert_eq!(back.to_bits(), f.to_bits());
    }

    #[test]
    fn prop_value_roundtrip(value in arb_value()) {
        let text = encode(&value).unwrap();
        let back = decode(&text).unwrap();
        prop_assert!(same(&back, &value), "{} decoded to {:?}", text, back);
    }

    #[test]
    fn prop_text_is_a_fixed_point(value in arb_value()) {
        let text = encode(&value).unwrap();
        prop_assert_eq!(encode(&decode(&text).unwrap()).unwrap(), text);
    }

    #[test]
    fn prop_date_roundtrip(dt in arb_datetime()) {
        let value = Value::Date(dt);
        let text = encode(&value).unwrap();
        let back = decode(&text).unwrap();
        prop_assert_eq!(&back, &value);

        let millis = back.as_date().unwrap();
        prop_assert_eq!(millis.timestamp_millis(), dt.timestamp_millis());
        prop_assert_eq!(millis.timestamp_subsec_nanos() % 1_000_000, 0);
        let expanded = !(0..=9999).contains(&dt.year());
        prop_assert_eq!(text.starts_with(r#"["Date","+"#) || text.starts_with(r#"["Date","-"#), expanded);
    }

    #[test]
    fn prop_regexp_roundtrip(re in arb_regexp()) {
        let text = encode(&Value::RegExp(re.clone())).unwrap();
        match decode(&text).unwrap() {
            Value::RegExp(back) => {
                prop_assert_eq!(back.source(), re.source());
                prop_assert_eq!(back.flags(), re.flags());
            }
            other => prop_assert!(false, "{} decoded to {:?}", text, other),
        }
        let order: Vec<usize> = re.flags().chars().filter_map(|f| "dgimsuvy".find(f)).collect();
        prop_assert!(order.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn prop_insertion_order_irrelevant(entries in prop::collection::vec((".{0,6}", any::<i32>()), 0..16)) {
        let forward: ObjectMap = entries.iter().map(|(k, v)| (k.clone(), Value::from(*v))).collect();
        let mut reversed = ObjectMap::new();
        for (k, _) in entries.iter().rev() {
            if let Some(v) = forward.get(k) {
                reversed.insert(k.clone(), v.clone());
            }
        }
        prop_assert_eq!(
            encode(&Value::Object(forward)).unwrap(),
            encode(&Value::Object(reversed)).unwrap()
        );
    }

    #[test]
    fn prop_vec_i32(v in prop::collection::vec(any::<i32>(), 0..20)) {
        prop_assert!(roundtrip(&v));
    }

    #[test]
    fn prop_option_i32(opt in proptest::option::of(any::<i32>())) {
        prop_assert!(roundtrip(&opt));
    }

    #[test]
    fn prop_tuple_i32_bool(t in (any::<i32>(), any::<bool>())) {
        prop_assert!(roundtrip(&t));
    }
}
