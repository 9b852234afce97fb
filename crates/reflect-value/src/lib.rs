//! reflect-value - the closed value model behind reflect-assert.
//!
//! Every comparable runtime value is expressed as a [`Value`]: scalars,
//! unit enums, ordered lists, and named composites with fields in
//! declaration order. Types opt in through the [`Reflect`] trait, either
//! with the provided impls (primitives, strings, `Option`, `Vec`, slices,
//! [`serde_json::Value`]) or with a hand-written / [`reflect_composite!`]
//! generated impl.

mod reflect;
mod value;

pub use reflect::Reflect;
pub use value::{Field, Value};
