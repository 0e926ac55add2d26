//! CRUD operation names.

use derive_more::Display;

/// One of the four operations every connector exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Operation {
    /// Create a resource.
    #[display("create")]
    Create,
    /// Read a resource or a collection.
    #[display("read")]
    Read,
    /// Update a resource.
    #[display("update")]
    Update,
    /// Delete a resource.
    #[display("delete")]
    Delete,
}

impl Operation {
    /// All operations, in slot order.
    pub const ALL: [Self; 4] = [Self::Create, Self::Read, Self::Update, Self::Delete];

    /// Lower-case operation name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Read => "read",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}
