//! Type relations, team members and matchup analysis for team planning.
//!
//! # Overview
//!
//! `pokeplan-dex` holds the data the rest of the workspace shares:
//!
//! ```text
//! pokeplan-catalog (PokeAPI reads)
//!        │
//!        ▼
//! pokeplan-dex (domain types + analysis) ← THIS CRATE
//!        │
//!        ▼
//! pokeplan-team (team store)
//! ```
//!
//! # Main Types
//!
//! - [`Type`] - the 18 battle types, with the built-in [`TYPE_CHART`]
//! - [`TypeRelations`] - one type's six damage relation sets
//! - [`RelationTable`] - every type's relations, keyed by [`Type`]
//! - [`TeamMember`] - a species reference held by a team
//! - [`Analysis`] - a team's coverage/weakness/resistance/immunity tallies and score
//!
//! # Example Usage
//!
//! ```
//! use pokeplan_dex::{analyze, pairwise_effectiveness, RelationTable, TeamMember, Type};
//!
//! let relations = RelationTable::standard();
//! let team = vec![
//!     TeamMember::new(6, "charizard", [Type::Fire, Type::Flying]),
//!     TeamMember::new(9, "blastoise", [Type::Water]),
//! ];
//!
//! let analysis = analyze(&team, &relations);
//! println!("score: {}", analysis.score);
//!
//! assert_eq!(
//!     pairwise_effectiveness(&[Type::Rock], &[Type::Fire, Type::Flying], &relations),
//!     4.0
//! );
//! ```

pub mod query;
pub mod types;

pub use query::{analyze, pairwise_effectiveness, Analysis, Comparison, TypeCount};
pub use types::{
    ParseTypeError, RelationTable, TeamMember, Type, TypeRelations, MAX_TYPES_PER_MEMBER,
    TYPE_CHART,
};
