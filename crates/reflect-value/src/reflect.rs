//! Reflect - the capability a type supplies to become comparable.

use crate::value::{Field, Value};
use serde_json::Value as JsonValue;

/// Converts a runtime value into the closed [`Value`] model.
///
/// Provided impls cover the primitive scalar types, strings, `Option`,
/// `Vec`, slices, fixed-size arrays, and [`serde_json::Value`]. Struct
/// types implement it by hand or through [`reflect_composite!`].
///
/// Numeric width is erased: every signed integer reflects to
/// [`Value::Int`], every unsigned one to [`Value::UInt`], both float
/// widths to [`Value::Float`]. The int/uint/float kinds stay distinct
/// from each other under the comparator's type-identity check.
pub trait Reflect {
    fn reflect(&self) -> Value;
}

macro_rules! reflect_via_int {
    ($($t:ty),+) => {
        $(impl Reflect for $t {
            fn reflect(&self) -> Value {
                Value::Int(*self as i64)
            }
        })+
    };
}

macro_rules! reflect_via_uint {
    ($($t:ty),+) => {
        $(impl Reflect for $t {
            fn reflect(&self) -> Value {
                Value::UInt(*self as u64)
            }
        })+
    };
}

reflect_via_int!(i8, i16, i32, i64, isize);
reflect_via_uint!(u8, u16, u32, u64, usize);

impl Reflect for f32 {
    fn reflect(&self) -> Value {
        Value::Float(f64::from(*self))
    }
}

impl Reflect for f64 {
    fn reflect(&self) -> Value {
        Value::Float(*self)
    }
}

impl Reflect for bool {
    fn reflect(&self) -> Value {
        Value::Bool(*self)
    }
}

impl Reflect for char {
    fn reflect(&self) -> Value {
        Value::Char(*self)
    }
}

impl Reflect for str {
    fn reflect(&self) -> Value {
        Value::Str(self.to_string())
    }
}

impl Reflect for String {
    fn reflect(&self) -> Value {
        Value::Str(self.clone())
    }
}

impl<T: Reflect + ?Sized> Reflect for &T {
    fn reflect(&self) -> Value {
        (**self).reflect()
    }
}

impl<T: Reflect> Reflect for Option<T> {
    fn reflect(&self) -> Value {
        match self {
            Some(inner) => inner.reflect(),
            None => Value::Null,
        }
    }
}

impl<T: Reflect> Reflect for [T] {
    fn reflect(&self) -> Value {
        Value::List(self.iter().map(Reflect::reflect).collect())
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn reflect(&self) -> Value {
        self.as_slice().reflect()
    }
}

impl<T: Reflect> Reflect for Vec<T> {
    fn reflect(&self) -> Value {
        self.as_slice().reflect()
    }
}

/// JSON documents reflect directly: objects become composites named
/// `"object"` with keys in document order, numbers map to int/uint/float
/// by serde_json's own classification.
impl Reflect for JsonValue {
    fn reflect(&self) -> Value {
        match self {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(*b),
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::UInt(u)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            JsonValue::String(s) => Value::Str(s.clone()),
            JsonValue::Array(items) => {
                Value::List(items.iter().map(Reflect::reflect).collect())
            }
            JsonValue::Object(map) => Value::Composite {
                type_name: "object".to_string(),
                fields: map
                    .iter()
                    .map(|(key, value)| Field::new(key.clone(), value.reflect()))
                    .collect(),
            },
        }
    }
}

/// Generates a [`Reflect`] impl for a struct from its declaration-order
/// field list - the manual-schema route for types that cannot derive
/// their member list.
///
/// ```
/// use reflect_value::{reflect_composite, Reflect, Value};
///
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// reflect_composite!(Person, "Person", { name, age });
///
/// let p = Person { name: "A".into(), age: 1 };
/// assert_eq!(p.reflect().type_name(), "Person");
/// ```
#[macro_export]
macro_rules! reflect_composite {
    ($ty:ty, $name:literal, { $($field:ident),+ $(,)? }) => {
        impl $crate::Reflect for $ty {
            fn reflect(&self) -> $crate::Value {
                $crate::Value::Composite {
                    type_name: $name.to_string(),
                    fields: vec![
                        $($crate::Field::new(
                            stringify!($field),
                            $crate::Reflect::reflect(&self.$field),
                        ),)+
                    ],
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars_reflect_to_their_kind() {
        assert_eq!(5i32.reflect(), Value::Int(5));
        assert_eq!(5u8.reflect(), Value::UInt(5));
        assert_eq!(5.0f32.reflect(), Value::Float(5.0));
        assert_eq!(true.reflect(), Value::Bool(true));
        assert_eq!('x'.reflect(), Value::Char('x'));
        assert_eq!("hi".reflect(), Value::Str("hi".into()));
    }

    #[test]
    fn option_reflects_to_null_or_inner() {
        assert_eq!(None::<i32>.reflect(), Value::Null);
        assert_eq!(Some(5i32).reflect(), Value::Int(5));
    }

    #[test]
    fn sequences_reflect_to_list() {
        let expected = Value::List(vec![Value::Int(1), Value::Int(2)]);
        assert_eq!(vec![1i32, 2].reflect(), expected);
        assert_eq!([1i32, 2].reflect(), expected);
        assert_eq!([1i32, 2].as_slice().reflect(), expected);
    }

    #[test]
    fn json_objects_keep_document_order() {
        let doc = json!({"b": 1, "a": [true, null]});
        let reflected = doc.reflect();
        assert_eq!(reflected.type_name(), "object");
        match reflected {
            Value::Composite { fields, .. } => {
                assert_eq!(fields[0].name, "b");
                assert_eq!(fields[0].value, Value::Int(1));
                assert_eq!(fields[1].name, "a");
                assert_eq!(
                    fields[1].value,
                    Value::List(vec![Value::Bool(true), Value::Null])
                );
            }
            other => panic!("expected composite, got {other:?}"),
        }
    }

    #[test]
    fn json_numbers_classify_by_representation() {
        assert_eq!(json!(-1).reflect(), Value::Int(-1));
        assert_eq!(json!(u64::MAX).reflect(), Value::UInt(u64::MAX));
        assert_eq!(json!(1.5).reflect(), Value::Float(1.5));
    }

    #[test]
    fn composite_macro_preserves_declaration_order() {
        struct Point {
            x: i32,
            y: i32,
        }
        reflect_composite!(Point, "Point", { x, y });

        let p = Point { x: 1, y: 2 };
        assert_eq!(
            p.reflect(),
            Value::composite("Point", [("x", Value::Int(1)), ("y", Value::Int(2))])
        );
    }
}
