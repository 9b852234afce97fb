//! Value - the closed, tagged representation of a comparable runtime value.

use std::fmt;

/// A comparable runtime value.
///
/// The comparator classifies values into three kinds: value kinds
/// (scalars and unit enums, compared by native equality), the ordered
/// sequence kind ([`Value::List`]), and the composite kind
/// ([`Value::Composite`], compared member by member).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absent value; what `Option::None` reflects to.
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Char(char),
    Str(String),
    /// A unit enum value. Equality is variant-name equality; `type_name`
    /// is the value's runtime type for the type-identity check.
    Enum {
        type_name: String,
        variant: String,
    },
    /// An ordered, indexable sequence.
    List(Vec<Value>),
    /// A named structural type with fields in declaration order.
    Composite {
        type_name: String,
        fields: Vec<Field>,
    },
}

/// One named member of a composite value.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub value: Value,
}

impl Field {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl Value {
    /// Build a composite from a type name and `(field, value)` pairs in
    /// declaration order.
    pub fn composite<N, F>(type_name: N, fields: F) -> Self
    where
        N: Into<String>,
        F: IntoIterator<Item = (&'static str, Value)>,
    {
        Value::Composite {
            type_name: type_name.into(),
            fields: fields
                .into_iter()
                .map(|(name, value)| Field::new(name, value))
                .collect(),
        }
    }

    /// Build a unit enum value.
    pub fn enum_variant(type_name: impl Into<String>, variant: impl Into<String>) -> Self {
        Value::Enum {
            type_name: type_name.into(),
            variant: variant.into(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The value's runtime type name: the kind tag for scalars and lists,
    /// the carried name for enums and composites. All lists share the type
    /// `"list"`; element-type disagreements surface during element
    /// recursion instead.
    pub fn type_name(&self) -> &str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::UInt(_) => "uint",
            Value::Float(_) => "float",
            Value::Char(_) => "char",
            Value::Str(_) => "string",
            Value::Enum { type_name, .. } => type_name,
            Value::List(_) => "list",
            Value::Composite { type_name, .. } => type_name,
        }
    }

    /// Look up a composite field by name. Returns `None` for non-composite
    /// values and for absent fields.
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Composite { fields, .. } => fields
                .iter()
                .find(|field| field.name == name)
                .map(|field| &field.value),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    /// Renders the value the way failure messages show it: scalars bare
    /// (`null`, `true`, `42`, string text without quotes), enums as their
    /// variant name, lists bracketed, composites as `TypeName { .. }`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::UInt(u) => write!(f, "{u}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Char(c) => write!(f, "{c}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::Enum { variant, .. } => write!(f, "{variant}"),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Composite { type_name, fields } => {
                write!(f, "{type_name} {{")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, " {}: {}", field.name, field.value)?;
                }
                write!(f, " }}")
            }
        }
    }
}
