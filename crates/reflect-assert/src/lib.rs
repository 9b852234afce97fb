//! reflect-assert - recursive deep-equality test assertions.
//!
//! Replaces hand-written field-by-field comparisons with one recursive
//! routine over the [`reflect_value::Value`] model: null handling, strict
//! type identity, value/list/composite dispatch, and path-qualified
//! failure messages like `Order.Items is not the same value`.
//!
//! Two entry points:
//!
//! - [`assert_reflection_eq`] reflects both sides and panics with the
//!   mismatch message, for direct use inside `#[test]` functions.
//! - [`assert_equal`] is the framework-free core returning
//!   `Result<(), MismatchError>`, for callers that route failures into
//!   their own reporting.
//!
//! The walk is depth-first with no cycle tracking: comparing a cyclic
//! graph recurses without bound, and recursion depth is otherwise limited
//! by the thread's stack and the depth of the compared structure. The
//! comparator holds no state and never mutates its inputs, so concurrent
//! callers are safe.

mod compare;
mod property;

pub use compare::{assert_equal, assert_reflection_eq, MismatchError};
pub use property::Property;
