//! The recursive deep-equality engine.

use reflect_value::{Field, Reflect, Value};
use thiserror::Error;

use crate::property::Property;

/// The single reportable condition: a deep-equality mismatch, carrying a
/// human-readable, path-qualified description of the first difference
/// found.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct MismatchError {
    pub message: String,
}

impl MismatchError {
    fn new(message: String) -> Self {
        Self { message }
    }
}

/// Reflects both sides and panics with the mismatch message when they are
/// not deeply equal; returns silently otherwise. The panic is the host
/// test framework's failure signal.
///
/// The two arguments may be of different Rust types; the engine then
/// reports a type mismatch.
pub fn assert_reflection_eq<E, A>(expected: &E, actual: &A)
where
    E: Reflect + ?Sized,
    A: Reflect + ?Sized,
{
    if let Err(err) = assert_equal(&expected.reflect(), &actual.reflect()) {
        panic!("{err}");
    }
}

/// Framework-free core: `Ok(())` when the values are deeply equal,
/// `Err(MismatchError)` describing the first difference otherwise.
pub fn assert_equal(expected: &Value, actual: &Value) -> Result<(), MismatchError> {
    compare(expected, actual, None)
}

fn compare(
    expected: &Value,
    actual: &Value,
    property: Option<&Property>,
) -> Result<(), MismatchError> {
    // Check for nulls, stopping if both sides are absent.
    if check_nullness(expected, actual, property)? {
        return Ok(());
    }

    check_type(expected, actual)?;

    match (expected, actual) {
        (Value::List(expected_items), Value::List(actual_items)) => {
            compare_lists(expected_items, actual_items, property)
        }
        (
            Value::Composite {
                type_name,
                fields: expected_fields,
            },
            Value::Composite { .. },
        ) => compare_fields(type_name, expected_fields, actual),
        _ => compare_value(expected, actual, property),
    }
}

/// Returns `Ok(true)` when both values are null (comparison passes),
/// `Ok(false)` when neither is, and a nullness mismatch when exactly one
/// side is absent.
fn check_nullness(
    expected: &Value,
    actual: &Value,
    property: Option<&Property>,
) -> Result<bool, MismatchError> {
    match (expected.is_null(), actual.is_null()) {
        (true, true) => Ok(true),
        (false, false) => Ok(false),
        (expected_is_null, _) => {
            let detail = if expected_is_null {
                "Expected: null, Actual: non-null."
            } else {
                "Expected: non-null, Actual: null."
            };
            let message = match property {
                Some(p) => format!("{} is not the same nullness. {detail}", p.path()),
                None => format!("Objects are not the same nullness. {detail}"),
            };
            Err(MismatchError::new(message))
        }
    }
}

/// Type identity must hold before any kind dispatch; this failure is
/// never path-qualified, even deep inside a recursive walk.
fn check_type(expected: &Value, actual: &Value) -> Result<(), MismatchError> {
    let expected_type = expected.type_name();
    let actual_type = actual.type_name();
    if expected_type != actual_type {
        return Err(MismatchError::new(format!(
            "Objects are not the same type. Expected: {expected_type}, Actual: {actual_type}"
        )));
    }
    Ok(())
}

fn compare_lists(
    expected: &[Value],
    actual: &[Value],
    property: Option<&Property>,
) -> Result<(), MismatchError> {
    let expected_size = expected.len();
    let actual_size = actual.len();
    if expected_size != actual_size {
        let message = match property {
            Some(p) => format!(
                "{} is not the same size. Expected size: {expected_size}, Actual size: {actual_size}",
                p.path()
            ),
            None => format!(
                "Lists are not the same size. Expected size: {expected_size}, Actual size: {actual_size}"
            ),
        };
        return Err(MismatchError::new(message));
    }

    // Elements reuse the list's own path segment; no index segment is
    // appended.
    for (expected_item, actual_item) in expected.iter().zip(actual) {
        compare(expected_item, actual_item, property)?;
    }
    Ok(())
}

fn compare_fields(
    type_name: &str,
    expected_fields: &[Field],
    actual: &Value,
) -> Result<(), MismatchError> {
    for field in expected_fields {
        let property = Property::new(type_name, &field.name);
        match actual.field(&field.name) {
            Some(actual_value) => compare(&field.value, actual_value, Some(&property))?,
            // Unreachable when both Reflect impls agree on the type's
            // field list; kept as a diagnostic for hand-written impls
            // that drift apart.
            None => {
                return Err(MismatchError::new(format!(
                    "{} is missing from the actual value.",
                    property.path()
                )))
            }
        }
    }
    Ok(())
}

fn compare_value(
    expected: &Value,
    actual: &Value,
    property: Option<&Property>,
) -> Result<(), MismatchError> {
    if expected == actual {
        return Ok(());
    }
    // With no path context, fall back to the type name so a root-level
    // scalar mismatch still reads well.
    let shown = match property {
        Some(p) => p.path(),
        None => Property::root(expected.type_name()).path(),
    };
    Err(MismatchError::new(format!(
        "{shown} is not the same value. Expected: {expected}, Actual: {actual}"
    )))
}
