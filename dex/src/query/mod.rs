//! Matchup queries over a [`RelationTable`](crate::RelationTable)
//!
//! Two intentionally different computations live here: the team tally in
//! [`analyze`] counts relation memberships without stacking, while
//! [`pairwise_effectiveness`] and the helpers built on it compound
//! multipliers the way dual types do in battle.

mod analysis;
mod matchup;

pub use analysis::{analyze, Analysis, TypeCount};
pub use matchup::{
    compare,
    immunities,
    is_immune_to,
    is_weak_to_any,
    pairwise_effectiveness,
    resistances,
    resists_all,
    weaknesses,
    Comparison,
    Matchup,
    Side,
};
