//! The team store: the only place teams are mutated

use std::collections::HashSet;

use pokeplan_dex::{analyze, Analysis, RelationTable, TeamMember};

use crate::config::StoreConfig;
use crate::error::TeamError;
use crate::storage::{MemoryStorage, TeamStorage};
use crate::team::{name_key, Team, TeamId};

/// Owns one user's teams and enforces every team invariant
///
/// After any call returns, no team exceeds its member capacity, no team has
/// two members with the same species id, no two teams share a name
/// (case-insensitively), the team count is within its limit and every name
/// is non-empty.
///
/// Every mutation that changes state is written through to the storage
/// backend. Write failures are logged and otherwise ignored.
pub struct TeamStore<S = MemoryStorage> {
    config: StoreConfig,
    teams: Vec<Team>,
    storage: S,
}

impl<S: TeamStorage> TeamStore<S> {
    /// Create an empty store with default limits
    pub fn new(storage: S) -> Self {
        Self::with_config(StoreConfig::default(), storage)
    }

    /// Create an empty store without reading from `storage`
    pub fn with_config(config: StoreConfig, storage: S) -> Self {
        Self {
            config,
            teams: Vec::new(),
            storage,
        }
    }

    /// Create a store from the snapshot persisted under the configured key.
    ///
    /// A missing or unreadable snapshot yields an empty store. A snapshot
    /// that breaks any invariant is repaired before use: later teams that
    /// repeat an earlier id or name are dropped.
    pub fn load(config: StoreConfig, storage: S) -> Self {
        let teams = match storage.load(&config.storage_key) {
            Ok(Some(teams)) => teams,
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, key = %config.storage_key, "Failed to load teams, starting empty");
                Vec::new()
            }
        };

        let teams = sanitize(teams, &config);
        tracing::info!(count = teams.len(), "Loaded teams");

        Self {
            config,
            teams,
            storage,
        }
    }

    /// All teams in creation order
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    /// Get a team by id
    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id() == id)
    }

    /// Find a team by name (case-insensitive, surrounding whitespace ignored)
    pub fn team_by_name(&self, name: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.name_matches(name))
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Create an empty team, returning its id
    pub fn create_team(&mut self, name: &str) -> Result<TeamId, TeamError> {
        let name = validate_name(name)?;
        if self.teams.len() >= self.config.max_teams {
            return Err(TeamError::Limit {
                max: self.config.max_teams,
            });
        }
        if self.team_by_name(name).is_some() {
            return Err(TeamError::DuplicateName(name.to_string()));
        }

        let team = Team::new(name.to_string());
        let id = team.id();
        tracing::debug!(team = %id, name, "Created team");
        self.teams.push(team);
        self.persist();
        Ok(id)
    }

    /// Delete a team. Unknown ids are ignored.
    pub fn delete_team(&mut self, id: TeamId) {
        let Some(idx) = self.position(id) else {
            return;
        };
        let team = self.teams.remove(idx);
        tracing::debug!(team = %id, name = team.name(), "Deleted team");
        self.persist();
    }

    /// Rename a team
    ///
    /// Renaming to the current name is a no-op. The team itself is excluded
    /// from the duplicate check, so changing only the case of its own name
    /// is allowed.
    pub fn rename_team(&mut self, id: TeamId, new_name: &str) -> Result<(), TeamError> {
        let name = validate_name(new_name)?;
        let idx = self.position(id).ok_or(TeamError::NotFound(id))?;

        if self.teams[idx].name() == name {
            return Ok(());
        }
        if self
            .teams
            .iter()
            .any(|t| t.id() != id && t.name_matches(name))
        {
            return Err(TeamError::DuplicateName(name.to_string()));
        }

        tracing::debug!(team = %id, from = self.teams[idx].name(), to = name, "Renamed team");
        self.teams[idx].set_name(name.to_string());
        self.persist();
        Ok(())
    }

    /// Add a member to a team
    ///
    /// Only an unknown team id is an error. A full team, a member whose
    /// typing is empty (or has more than two types) and a species already on
    /// the team are all silently ignored; callers that want to tell the user
    /// should check [`Team::len`] and [`Team::contains`] first.
    pub fn add_member(&mut self, id: TeamId, member: TeamMember) -> Result<(), TeamError> {
        let max = self.config.max_members_per_team;
        let idx = self.position(id).ok_or(TeamError::NotFound(id))?;
        let team = &mut self.teams[idx];

        let skip = if team.len() >= max {
            Some("team is full")
        } else if !member.has_valid_types() {
            Some("member has no valid typing")
        } else if team.contains(member.id) {
            Some("member already on team")
        } else {
            None
        };
        if let Some(reason) = skip {
            tracing::debug!(team = %id, member = member.id, reason, "Ignored add_member");
            return Ok(());
        }

        tracing::debug!(team = %id, member = member.id, name = %member.name, "Added member");
        team.members_mut().push(member);
        self.persist();
        Ok(())
    }

    /// Remove a member by species id. Absent members are ignored.
    pub fn remove_member(&mut self, id: TeamId, member_id: u32) -> Result<(), TeamError> {
        let idx = self.position(id).ok_or(TeamError::NotFound(id))?;
        let members = self.teams[idx].members_mut();

        let Some(pos) = members.iter().position(|m| m.id == member_id) else {
            return Ok(());
        };
        members.remove(pos);
        tracing::debug!(team = %id, member = member_id, "Removed member");
        self.persist();
        Ok(())
    }

    /// Move the member at `from` to `to`, keeping everyone else in order.
    ///
    /// Out-of-range indices are ignored.
    pub fn reorder_member(&mut self, id: TeamId, from: usize, to: usize) -> Result<(), TeamError> {
        let idx = self.position(id).ok_or(TeamError::NotFound(id))?;
        let members = self.teams[idx].members_mut();

        if from >= members.len() || to >= members.len() || from == to {
            return Ok(());
        }
        let member = members.remove(from);
        members.insert(to, member);
        tracing::debug!(team = %id, from, to, "Reordered member");
        self.persist();
        Ok(())
    }

    /// Run the matchup analysis over a team's current members
    pub fn analyze_team(
        &self,
        id: TeamId,
        relations: &RelationTable,
    ) -> Result<Analysis, TeamError> {
        let team = self.team(id).ok_or(TeamError::NotFound(id))?;
        Ok(analyze(team.members(), relations))
    }

    fn position(&self, id: TeamId) -> Option<usize> {
        self.teams.iter().position(|t| t.id() == id)
    }

    /// Write the full collection through. Failures leave memory untouched.
    fn persist(&mut self) {
        if let Err(e) = self.storage.save(&self.config.storage_key, &self.teams) {
            tracing::warn!(error = %e, key = %self.config.storage_key, "Failed to persist teams");
        }
    }
}

/// Trim a team name, rejecting names that are empty afterwards
fn validate_name(name: &str) -> Result<&str, TeamError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(TeamError::Validation(
            "team name must not be empty".to_string(),
        ));
    }
    Ok(name)
}

/// Repair a loaded snapshot so it satisfies every store invariant
fn sanitize(teams: Vec<Team>, config: &StoreConfig) -> Vec<Team> {
    let mut ids = HashSet::new();
    let mut names = HashSet::new();
    let mut kept = Vec::with_capacity(teams.len().min(config.max_teams));

    for mut team in teams {
        let Ok(name) = validate_name(team.name()) else {
            tracing::warn!(team = %team.id(), "Dropped stored team with empty name");
            continue;
        };
        let name = name.to_string();
        if ids.contains(&team.id()) {
            tracing::warn!(team = %team.id(), name = %name, "Dropped stored team with duplicate id");
            continue;
        }
        if names.contains(&name_key(&name)) {
            tracing::warn!(team = %team.id(), name = %name, "Dropped stored team with duplicate name");
            continue;
        }
        if kept.len() >= config.max_teams {
            tracing::warn!(team = %team.id(), name = %name, "Dropped stored team over the team limit");
            continue;
        }
        ids.insert(team.id());
        names.insert(name_key(&name));
        team.set_name(name);

        let id = team.id();
        let members = team.members_mut();
        let before = members.len();
        let mut seen = HashSet::new();
        members.retain(|m| m.has_valid_types() && seen.insert(m.id));
        members.truncate(config.max_members_per_team);
        if members.len() != before {
            tracing::warn!(
                team = %id,
                dropped = before - members.len(),
                "Dropped invalid stored members"
            );
        }

        kept.push(team);
    }

    kept
}
