/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Arrays and objects nest; `undefined` produces [`Value::Undefined`](crate::Value::Undefined)
/// and any other single token or parenthesised expression goes through
/// `Value::from`.
///
/// ```rust
/// use serde_canon::{canon, encode};
///
/// let value = canon!({"b": [1, -2, undefined], "a": null});
/// assert_eq!(
///     encode(&value).unwrap(),
///     r#"["Object","a",null,"b",["Array",1,-2,["Undefined"]]]"#
/// );
/// ```
#[macro_export]
macro_rules! canon {
    (undefined) => {
        $crate::Value::Undefined
    };

    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(::std::vec::Vec::new())
    };

    ([ $($elems:tt)+ ]) => {
        $crate::Value::Array($crate::canon!(@array [] $($elems)+))
    };

    ({}) => {
        $crate::Value::Object($crate::ObjectMap::new())
    };

    ({ $($members:tt)+ }) => {{
        let mut object = $crate::ObjectMap::new();
        $crate::canon!(@object object $($members)+);
        $crate::Value::Object(object)
    }};

    // Array elements, accumulated left to right.
    (@array [$($out:expr,)*]) => {
        vec![$($out,)*]
    };

    (@array [$($out:expr,)*] - $num:tt $(, $($rest:tt)*)?) => {
        $crate::canon!(@array [$($out,)* $crate::canon!(-$num),] $($($rest)*)?)
    };

    (@array [$($out:expr,)*] $next:tt $(, $($rest:tt)*)?) => {
        $crate::canon!(@array [$($out,)* $crate::canon!($next),] $($($rest)*)?)
    };

    // Object members, inserted in source order.
    (@object $object:ident) => {};

    (@object $object:ident $key:literal : - $num:tt $(, $($rest:tt)*)?) => {
        $object.insert(($key).to_string(), $crate::canon!(-$num));
        $crate::canon!(@object $object $($($rest)*)?);
    };

    (@object $object:ident $key:literal : $value:tt $(, $($rest:tt)*)?) => {
        $object.insert(($key).to_string(), $crate::canon!($value));
        $crate::canon!(@object $object $($($rest)*)?);
    };

    ($other:expr) => {
        $crate::Value::from($other)
    };
}
