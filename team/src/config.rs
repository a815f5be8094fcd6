//! Store limits and persistence key

use serde::Deserialize;

/// Default member capacity of a team
pub const MAX_MEMBERS_PER_TEAM: usize = 6;

/// Default number of teams a user may own
pub const MAX_TEAMS: usize = 15;

/// Default key the team collection is persisted under
pub const TEAMS_STORAGE_KEY: &str = "pokeplan.teams";

/// Configuration for a [`TeamStore`](crate::TeamStore)
///
/// Missing fields take their defaults when deserialized, so a host can load
/// a partial config from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub max_members_per_team: usize,
    pub max_teams: usize,
    pub storage_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            max_members_per_team: MAX_MEMBERS_PER_TEAM,
            max_teams: MAX_TEAMS,
            storage_key: TEAMS_STORAGE_KEY.to_string(),
        }
    }
}
