//! Domain types for team planning

mod member;
mod pokemon_type;
mod relations;

pub use member::{TeamMember, MAX_TYPES_PER_MEMBER};
pub use pokemon_type::{ParseTypeError, Type, TYPE_CHART};
pub use relations::{RelationTable, TypeRelations};
