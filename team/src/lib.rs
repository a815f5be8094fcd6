//! Persisted, capacity-bounded team store.
//!
//! A [`TeamStore`] owns one user's [`Team`]s and is the only way to change
//! them. It is built explicitly around an injected [`TeamStorage`] backend:
//! read once with [`TeamStore::load`], then written through on every change.
//!
//! ```
//! use pokeplan_dex::{RelationTable, TeamMember, Type};
//! use pokeplan_team::{MemoryStorage, StoreConfig, TeamStore};
//!
//! let mut store = TeamStore::load(StoreConfig::default(), MemoryStorage::new());
//! let id = store.create_team("Squad")?;
//! store.add_member(id, TeamMember::new(6, "charizard", [Type::Fire, Type::Flying]))?;
//!
//! let analysis = store.analyze_team(id, &RelationTable::standard())?;
//! assert_eq!(analysis.weakness_to(Type::Rock), 2);
//! # Ok::<(), pokeplan_team::TeamError>(())
//! ```

mod config;
mod error;
mod storage;
mod store;
mod team;


pub use config::{StoreConfig, MAX_MEMBERS_PER_TEAM, MAX_TEAMS, TEAMS_STORAGE_KEY};
pub use error::{StorageError, TeamError};
pub use storage::{FileStorage, MemoryStorage, TeamStorage};
pub use store::TeamStore;
pub use team::{Team, TeamId};
