//! Species references held by teams

use super::pokemon_type::Type;

/// Most types a single species can carry
pub const MAX_TYPES_PER_MEMBER: usize = 2;

/// A species reference: catalog id, display name and typing
///
/// Identity is the species id; two members with the same id are the same
/// member regardless of name or types.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamMember {
    /// Catalog species id
    pub id: u32,
    /// Display name
    pub name: String,
    /// Types in slot order
    pub types: Vec<Type>,
}

impl TeamMember {
    /// Create a new member
    pub fn new(id: u32, name: impl Into<String>, types: impl Into<Vec<Type>>) -> Self {
        Self {
            id,
            name: name.into(),
            types: types.into(),
        }
    }

    /// Whether the typing is something a species can actually have (1 or 2 types)
    pub fn has_valid_types(&self) -> bool {
        (1..=MAX_TYPES_PER_MEMBER).contains(&self.types.len())
    }

    /// Check if this member has a given type
    pub fn has_type(&self, ty: Type) -> bool {
        self.types.contains(&ty)
    }
}
