//! PokeAPI response shapes and their conversion into domain types
//!
//! Only the fields this crate reads are modelled; serde ignores the rest.

use pokeplan_dex::{TeamMember, Type, TypeRelations};
use serde::Deserialize;

/// A named link to another resource
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// One page of a listing endpoint such as `/type`
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    pub count: u64,
    pub next: Option<String>,
    pub results: Vec<NamedResource>,
}

/// A `/type/{name}` record
#[derive(Debug, Clone, Deserialize)]
pub struct TypeRecord {
    pub id: u32,
    pub name: String,
    pub damage_relations: DamageRelations,
}

/// The `damage_relations` block of a type record
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DamageRelations {
    pub double_damage_to: Vec<NamedResource>,
    pub double_damage_from: Vec<NamedResource>,
    pub half_damage_to: Vec<NamedResource>,
    pub half_damage_from: Vec<NamedResource>,
    pub no_damage_to: Vec<NamedResource>,
    pub no_damage_from: Vec<NamedResource>,
}

/// A `/pokemon/{name}` record
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonRecord {
    pub id: u32,
    pub name: String,
    pub types: Vec<TypeSlot>,
}

/// A pokemon's type in a given slot
#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub ty: NamedResource,
}

/// Resolve resource names to types, dropping names outside the 18 battle types
fn known_types(resources: &[NamedResource]) -> Vec<Type> {
    resources
        .iter()
        .filter_map(|r| {
            let ty = Type::from_name(&r.name);
            if ty.is_none() {
                tracing::warn!(name = %r.name, "Skipping unknown type");
            }
            ty
        })
        .collect()
}

impl DamageRelations {
    pub fn to_relations(&self) -> TypeRelations {
        TypeRelations {
            double_damage_to: known_types(&self.double_damage_to),
            double_damage_from: known_types(&self.double_damage_from),
            half_damage_to: known_types(&self.half_damage_to),
            half_damage_from: known_types(&self.half_damage_from),
            no_damage_to: known_types(&self.no_damage_to),
            no_damage_from: known_types(&self.no_damage_from),
        }
    }
}

impl PokemonRecord {
    /// Convert to a team member, types in slot order
    pub fn to_member(&self) -> TeamMember {
        let mut slots: Vec<&TypeSlot> = self.types.iter().collect();
        slots.sort_by_key(|s| s.slot);
        let names: Vec<NamedResource> = slots.into_iter().map(|s| s.ty.clone()).collect();
        TeamMember::new(self.id, self.name.clone(), known_types(&names))
    }
}
