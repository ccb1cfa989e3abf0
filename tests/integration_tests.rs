use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_canon::{
    canon, decode, encode, from_str, to_string, to_value, ErrorKind, Function, Number, ObjectMap,
    RegExp, Value,
};

fn pdt_launch() -> DateTime<Utc> {
    // Sun Oct 14 2012 13:27:37 GMT-0700
    FixedOffset::west_opt(7 * 3600)
        .unwrap()
        .with_ymd_and_hms(2012, 10, 14, 13, 27, 37)
        .unwrap()
        .with_timezone(&Utc)
}

fn args(items: &[&str]) -> Value {
    Value::Arguments(items.iter().map(|s| Value::from(*s)).collect())
}

// Encoding

#[test]
fn test_encodes_atoms_like_json() {
    assert_eq!(encode(&Value::Bool(true)).unwrap(), "true");
    assert_eq!(encode(&Value::Bool(false)).unwrap(), "false");
    assert_eq!(encode(&Value::Null).unwrap(), "null");
    assert_eq!(encode(&Value::from(0)).unwrap(), "0");
    assert_eq!(encode(&Value::from("foo bar")).unwrap(), "\"foo bar\"");
}

#[test]
fn test_encodes_negative_zero() {
    assert_eq!(encode(&Value::from(-0.0)).unwrap(), "-0");
}

#[test]
fn test_encodes_non_finite_numbers() {
    assert_eq!(encode(&Value::from(f64::INFINITY)).unwrap(), r#"["Number","Infinity"]"#);
    assert_eq!(
        encode(&Value::from(f64::NEG_INFINITY)).unwrap(),
        r#"["Number","-Infinity"]"#
    );
    assert_eq!(encode(&Value::from(f64::NAN)).unwrap(), r#"["Number","NaN"]"#);
}

#[test]
fn test_encodes_undefined() {
    assert_eq!(encode(&Value::Undefined).unwrap(), r#"["Undefined"]"#);
}

#[test]
fn test_encodes_arguments() {
    assert_eq!(encode(&args(&["x", "y"])).unwrap(), r#"["Arguments","x","y"]"#);
}

#[test]
fn test_encodes_dates_in_utc() {
    assert_eq!(
        encode(&Value::date(pdt_launch())).unwrap(),
        r#"["Date","2012-10-14T20:27:37.000Z"]"#
    );
}

#[test]
fn test_encodes_regexps() {
    let re = RegExp::new("^foo$", "im").unwrap();
    assert_eq!(encode(&Value::RegExp(re)).unwrap(), r#"["RegExp","/^foo$/im"]"#);
}

#[test]
fn test_encodes_arrays() {
    assert_eq!(encode(&canon!([1, 2, 3])).unwrap(), r#"["Array",1,2,3]"#);
}

#[test]
fn test_encodes_objects_with_sorted_keys() {
    assert_eq!(
        encode(&canon!({"foo": 1, "bar": 2, "baz": 3})).unwrap(),
        r#"["Object","bar",2,"baz",3,"foo",1]"#
    );
}

#[test]
fn test_encodes_nested_arrays_and_objects() {
    assert_eq!(
        encode(&canon!([1, [2, [3, 4]]])).unwrap(),
        r#"["Array",1,["Array",2,["Array",3,4]]]"#
    );
    assert_eq!(
        encode(&canon!({"foo": {"bar": {"baz": 0}}})).unwrap(),
        r#"["Object","foo",["Object","bar",["Object","baz",0]]]"#
    );
    assert_eq!(
        encode(&canon!([1, {"foo": [2, 3]}])).unwrap(),
        r#"["Array",1,["Object","foo",["Array",2,3]]]"#
    );
    assert_eq!(
        encode(&canon!({"foo": [1, {"bar": 2}]})).unwrap(),
        r#"["Object","foo",["Array",1,["Object","bar",2]]]"#
    );
}

#[test]
fn test_cannot_encode_functions() {
    let f = Value::Function(Function::new("stringify", |_| Value::Undefined));

    let err = encode(&f).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unserializable);
    assert_eq!(err.to_string(), "Functions cannot be serialized");

    let nested = Value::Array(vec![Value::from(-1), Value::from(-2), f]);
    let err = encode(&nested).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unserializable);
    assert_eq!(err.to_string(), "Functions cannot be serialized");
    assert_eq!(err.path(), Some("$[3]"));
}

#[test]
fn test_encodes_objects_with_a_million_keys() {
    let obj: ObjectMap = (0..1_000_000)
        .map(|i| (i.to_string(), Value::from(i)))
        .collect();
    assert_eq!(encode(&Value::Object(obj)).unwrap().len(), 15_777_790);
}

#[test]
fn test_key_order_does_not_affect_output() {
    let mut forward = ObjectMap::new();
    let mut backward = ObjectMap::new();
    for key in ["a", "b", "c", "B", "10", "9"] {
        forward.insert(key.to_string(), Value::from(key));
    }
    for key in ["9", "10", "B", "c", "b", "a"] {
        backward.insert(key.to_string(), Value::from(key));
    }
    let text = encode(&Value::Object(forward)).unwrap();
    assert_eq!(text, encode(&Value::Object(backward)).unwrap());
    assert_eq!(
        text,
        r#"["Object","10","10","9","9","B","B","a","a","b","b","c","c"]"#
    );
}

// Decoding

#[test]
fn test_decodes_atoms_like_json() {
    assert_eq!(decode("true").unwrap(), Value::Bool(true));
    assert_eq!(decode("false").unwrap(), Value::Bool(false));
    assert_eq!(decode("null").unwrap(), Value::Null);
    assert_eq!(decode("0").unwrap(), Value::from(0));
    assert_eq!(decode("\"foo bar\"").unwrap(), Value::from("foo bar"));
}

#[test]
fn test_decodes_negative_zero() {
    let zero = decode("-0").unwrap().as_f64().unwrap();
    assert_eq!(zero, 0.0);
    assert_eq!(1.0 / zero, f64::NEG_INFINITY);
}

#[test]
fn test_decodes_non_finite_numbers() {
    assert_eq!(
        decode(r#"["Number","Infinity"]"#).unwrap(),
        Value::from(f64::INFINITY)
    );
    assert_eq!(
        decode(r#"["Number","-Infinity"]"#).unwrap(),
        Value::from(f64::NEG_INFINITY)
    );

    let nan = decode(r#"["Number","NaN"]"#).unwrap();
    assert!(matches!(nan, Value::Number(Number::NaN)));
    assert_ne!(nan, decode(r#"["Number","NaN"]"#).unwrap());
}

#[test]
fn test_decodes_undefined() {
    assert_eq!(decode(r#"["Undefined"]"#).unwrap(), Value::Undefined);
}

#[test]
fn test_decodes_arguments() {
    let value = decode(r#"["Arguments","x","y"]"#).unwrap();
    assert!(value.is_arguments());
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0], Value::from("x"));
    assert_eq!(items[1], Value::from("y"));
}

#[test]
fn test_decodes_dates() {
    assert_eq!(
        decode(r#"["Date","2012-10-14T20:27:37.000Z"]"#).unwrap(),
        Value::date(pdt_launch())
    );
}

#[test]
fn test_decodes_regexps() {
    let value = decode(r#"["RegExp","/^foo$/im"]"#).unwrap();
    let re = value.as_regexp().unwrap();
    assert_eq!(re.source(), "^foo$");
    assert_eq!(re.flags(), "im");
}

#[test]
fn test_decodes_arrays_and_objects() {
    assert_eq!(decode(r#"["Array",1,2,3]"#).unwrap(), canon!([1, 2, 3]));
    assert_eq!(
        decode(r#"["Object","bar",2,"baz",3,"foo",1]"#).unwrap(),
        canon!({"foo": 1, "bar": 2, "baz": 3})
    );
}

#[test]
fn test_decodes_nested_arrays_and_objects() {
    assert_eq!(
        decode(r#"["Array",1,["Array",2,["Array",3,4]]]"#).unwrap(),
        canon!([1, [2, [3, 4]]])
    );
    assert_eq!(
        decode(r#"["Object","foo",["Object","bar",["Object","baz",0]]]"#).unwrap(),
        canon!({"foo": {"bar": {"baz": 0}}})
    );
    assert_eq!(
        decode(r#"["Array",1,["Object","foo",["Array",2,3]]]"#).unwrap(),
        canon!([1, {"foo": [2, 3]}])
    );
    assert_eq!(
        decode(r#"["Object","foo",["Array",1,["Object","bar",2]]]"#).unwrap(),
        canon!({"foo": [1, {"bar": 2}]})
    );
}

#[test]
fn test_decode_tolerates_whitespace_and_escapes() {
    let value = decode(" [ \"Array\" ,\n\t\"\\u0041\\/\" , 1e2 ] ").unwrap();
    assert_eq!(value, canon!(["A/", 100]));
}

#[test]
fn test_decode_errors() {
    assert_eq!(decode("").unwrap_err().kind(), ErrorKind::Syntax);
    assert_eq!(decode("[\"Array\",1,]").unwrap_err().kind(), ErrorKind::Syntax);
    assert_eq!(decode("NaN").unwrap_err().kind(), ErrorKind::Syntax);
    assert_eq!(decode("[1,2,3]").unwrap_err().kind(), ErrorKind::MalformedCanonicalForm);
    assert_eq!(decode(r#"{"a":1}"#).unwrap_err().kind(), ErrorKind::MalformedCanonicalForm);
    assert_eq!(
        decode(r#"["Function","x"]"#).unwrap_err().kind(),
        ErrorKind::MalformedCanonicalForm
    );

    let err = decode(r#"["Object","a",["Array",1,["Map"]]]"#).unwrap_err();
    assert_eq!(err.path(), Some("$[2][2]"));
    assert!(err.to_string().contains("$[2][2]"));
}

#[test]
fn test_bare_object_is_rejected_at_its_own_slot() {
    let err = decode(r#"["Array",["Undefined"],{"a":{"b":["Set"]},"c":1}]"#).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedCanonicalForm);
    assert_eq!(err.path(), Some("$[2]"));

    let err = decode(r#"["Object","k",["Arguments",{"x":[]}]]"#).unwrap_err();
    assert_eq!(err.path(), Some("$[2][1]"));
}

// Round trips

#[test]
fn test_every_variant_round_trips() {
    let mut obj = ObjectMap::new();
    obj.insert("when".to_string(), Value::date(pdt_launch()));
    obj.insert(
        "pattern".to_string(),
        Value::RegExp(RegExp::new("a|b", "gu").unwrap()),
    );
    obj.insert("args".to_string(), args(&["x"]));
    obj.insert("nothing".to_string(), Value::Undefined);
    obj.insert("inf".to_string(), Value::from(f64::NEG_INFINITY));
    obj.insert("text".to_string(), Value::from("line\nbreak \"quoted\" \u{1F600}"));
    let value = Value::Array(vec![Value::Object(obj), Value::Null, Value::from(0.1)]);

    let text = encode(&value).unwrap();
    let back = decode(&text).unwrap();
    assert_eq!(back, value);
    assert_eq!(encode(&back).unwrap(), text);
}

#[test]
fn test_sub_millisecond_dates_round_trip() {
    let value = Value::Date(Utc.timestamp_opt(1_350_246_457, 123_456_789).unwrap());
    let text = encode(&value).unwrap();
    assert_eq!(text, r#"["Date","2012-10-14T20:27:37.123Z"]"#);
    assert_eq!(decode(&text).unwrap(), value);

    let nested = Value::Array(vec![Value::Date(
        Utc.timestamp_opt(-1, 999_999).unwrap(),
    )]);
    assert_eq!(decode(&encode(&nested).unwrap()).unwrap(), nested);
}

#[test]
fn test_deep_nesting_round_trips() {
    let mut value = Value::from("leaf");
    for _ in 0..500 {
        value = Value::Arguments(vec![value]);
    }
    let text = encode(&value).unwrap();
    assert_eq!(decode(&text).unwrap(), value);
}

#[test]
fn test_display_is_canonical_text() {
    let value = canon!({"b": [true], "a": undefined});
    assert_eq!(value.to_string(), r#"["Object","a",["Undefined"],"b",["Array",true]]"#);
}

// Serde bridge

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct User {
    id: u32,
    name: String,
    active: bool,
    tags: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Product {
    sku: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Order {
    order_id: u32,
    customer: User,
    items: Vec<Product>,
    placed: DateTime<Utc>,
    status: Status,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
enum Status {
    Pending,
    Shipped { carrier: String },
    Cancelled(String),
}

fn order(status: Status) -> Order {
    Order {
        order_id: 7,
        customer: User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["admin".to_string()],
        },
        items: vec![
            Product {
                sku: "W-1".to_string(),
                price: 9.99,
                quantity: 2,
            },
            Product {
                sku: "G-2".to_string(),
                price: 14.5,
                quantity: 1,
            },
        ],
        placed: pdt_launch(),
        status,
    }
}

#[test]
fn test_struct_round_trips() {
    for status in [
        Status::Pending,
        Status::Shipped {
            carrier: "post".to_string(),
        },
        Status::Cancelled("out of stock".to_string()),
    ] {
        let original = order(status);
        let text = to_string(&original).unwrap();
        let back: Order = from_str(&text).unwrap();
        assert_eq!(back, original);
    }
}

#[test]
fn test_struct_output_is_canonical() {
    let user = User {
        id: 1,
        name: "Bo".to_string(),
        active: false,
        tags: vec![],
    };
    assert_eq!(
        to_string(&user).unwrap(),
        r#"["Object","active",false,"id",1,"name","Bo","tags",["Array"]]"#
    );
}

#[test]
fn test_to_value_matches_decoded_text() {
    let original = order(Status::Pending);
    let value = to_value(&original).unwrap();
    assert_eq!(decode(&to_string(&original).unwrap()).unwrap(), value);
    assert_eq!(
        value.get("status"),
        Some(&Value::from("Pending"))
    );
}
