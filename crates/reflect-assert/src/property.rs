//! Property - one step in the member-access path being compared.

/// The path segment used to qualify failure messages: the declaring
/// composite's type name and the member's name.
///
/// A segment is rebuilt fresh on every descent into a member and never
/// represents more than the direct parent; recursion always re-enters
/// with a new segment for the current member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Name of the composite type that declares the member; `None` at
    /// the root, where `name` holds the leaf type name instead.
    pub parent: Option<String>,
    pub name: String,
}

impl Property {
    pub fn new(parent: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            parent: Some(parent.into()),
            name: name.into(),
        }
    }

    /// A segment with no declaring parent; used when a root-level scalar
    /// needs a displayable name.
    pub fn root(name: impl Into<String>) -> Self {
        Self {
            parent: None,
            name: name.into(),
        }
    }

    /// Dotted `Parent.name` form, or bare `name` when there is no parent.
    pub fn path(&self) -> String {
        match &self.parent {
            Some(parent) => format!("{parent}.{}", self.name),
            None => self.name.clone(),
        }
    }
}
