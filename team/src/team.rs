//! Team identity and contents

use std::fmt;

use pokeplan_dex::TeamMember;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque team identifier, stable for the team's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(Uuid);

impl TeamId {
    /// Generate a fresh random id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TeamId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named, ordered collection of species references
///
/// Teams are read-only outside the store; all changes go through
/// [`TeamStore`](crate::TeamStore) so its invariants always hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    id: TeamId,
    name: String,
    #[serde(default)]
    members: Vec<TeamMember>,
}

impl Team {
    pub(crate) fn new(name: String) -> Self {
        Self {
            id: TeamId::new(),
            name,
            members: Vec::new(),
        }
    }

    pub fn id(&self) -> TeamId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Members in display order
    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Check if a species is already on the team
    pub fn contains(&self, member_id: u32) -> bool {
        self.members.iter().any(|m| m.id == member_id)
    }

    /// Find a member by species id
    pub fn member(&self, member_id: u32) -> Option<&TeamMember> {
        self.members.iter().find(|m| m.id == member_id)
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn members_mut(&mut self) -> &mut Vec<TeamMember> {
        &mut self.members
    }

    /// Whether this team's name collides with `name` (both already trimmed)
    pub(crate) fn name_matches(&self, name: &str) -> bool {
        name_key(&self.name) == name_key(name)
    }
}

/// Case-insensitive comparison key for a team name
pub(crate) fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}
