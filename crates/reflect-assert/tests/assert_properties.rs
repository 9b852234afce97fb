//! Property tests for the comparison algebra: reflexivity over generated
//! value trees, and symmetry of the pass/fail outcome for scalar pairs.

use proptest::prelude::*;
use reflect_assert::assert_equal;
use reflect_value::{Field, Value};

/// Arbitrary scalar values. Floats are kept finite and NaN-free since
/// native float equality makes NaN unequal to itself.
fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        any::<u64>().prop_map(Value::UInt),
        (-1.0e9f64..1.0e9).prop_map(Value::Float),
        any::<char>().prop_map(Value::Char),
        "[a-z]{0,8}".prop_map(Value::Str),
        ("[A-Z][a-z]{1,5}", "[A-Z][a-z]{1,5}")
            .prop_map(|(type_name, variant)| Value::Enum { type_name, variant }),
    ]
}

/// Arbitrary non-cyclic value trees. Composite field names are drawn
/// from a map so they stay unique within one composite.
fn value_tree() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(4, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Value::List),
            ("[A-Z][a-z]{1,5}", prop::collection::btree_map("[a-z]{1,6}", inner, 0..5))
                .prop_map(|(type_name, fields)| Value::Composite {
                    type_name,
                    fields: fields
                        .into_iter()
                        .map(|(name, value)| Field::new(name, value))
                        .collect(),
                }),
        ]
    })
}

proptest! {
    #[test]
    fn comparison_is_reflexive(value in value_tree()) {
        prop_assert!(assert_equal(&value, &value).is_ok());
    }

    #[test]
    fn comparison_accepts_structural_clones(value in value_tree()) {
        let clone = value.clone();
        prop_assert!(assert_equal(&value, &clone).is_ok());
    }

    #[test]
    fn scalar_outcome_is_symmetric(a in scalar(), b in scalar()) {
        let forward = assert_equal(&a, &b).is_ok();
        let backward = assert_equal(&b, &a).is_ok();
        prop_assert_eq!(forward, backward);
    }
}
