//! Damage relations between types, as served by the catalog

use std::collections::HashMap;

use super::pokemon_type::{Type, TYPE_CHART};

static NO_RELATIONS: TypeRelations = TypeRelations {
    double_damage_to: Vec::new(),
    double_damage_from: Vec::new(),
    half_damage_to: Vec::new(),
    half_damage_from: Vec::new(),
    no_damage_to: Vec::new(),
    no_damage_from: Vec::new(),
};

/// The six damage relation sets of one type against all others
///
/// Lists keep the order the source listed them in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TypeRelations {
    /// Types this type's moves hit for 2x
    pub double_damage_to: Vec<Type>,
    /// Attacking types that hit this type for 2x
    pub double_damage_from: Vec<Type>,
    /// Types this type's moves hit for 0.5x
    pub half_damage_to: Vec<Type>,
    /// Attacking types that hit this type for 0.5x
    pub half_damage_from: Vec<Type>,
    /// Types this type's moves do not affect
    pub no_damage_to: Vec<Type>,
    /// Attacking types this type is immune to
    pub no_damage_from: Vec<Type>,
}

impl TypeRelations {
    /// Relations with every set empty
    pub fn empty() -> &'static TypeRelations {
        &NO_RELATIONS
    }

    /// Derive the relations of `ty` from [`TYPE_CHART`]
    pub fn from_chart(ty: Type) -> Self {
        let mut relations = Self::default();
        for &other in Type::all() {
            match ty.effectiveness(other) {
                m if m == 2.0 => relations.double_damage_to.push(other),
                m if m == 0.5 => relations.half_damage_to.push(other),
                m if m == 0.0 => relations.no_damage_to.push(other),
                _ => {}
            }
            match TYPE_CHART[other as usize][ty as usize] {
                m if m == 2.0 => relations.double_damage_from.push(other),
                m if m == 0.5 => relations.half_damage_from.push(other),
                m if m == 0.0 => relations.no_damage_from.push(other),
                _ => {}
            }
        }
        relations
    }

    /// True when all six sets are empty
    pub fn is_empty(&self) -> bool {
        self.double_damage_to.is_empty()
            && self.double_damage_from.is_empty()
            && self.half_damage_to.is_empty()
            && self.half_damage_from.is_empty()
            && self.no_damage_to.is_empty()
            && self.no_damage_from.is_empty()
    }

    /// Multiplier of this type attacking a single `defender`
    ///
    /// Each offensive list is consulted on its own, so a defender that a
    /// malformed record lists twice compounds.
    pub fn multiplier_against(&self, defender: Type) -> f64 {
        let mut multiplier = 1.0;
        if self.double_damage_to.contains(&defender) {
            multiplier *= 2.0;
        }
        if self.half_damage_to.contains(&defender) {
            multiplier *= 0.5;
        }
        if self.no_damage_to.contains(&defender) {
            multiplier *= 0.0;
        }
        multiplier
    }
}

/// Mapping from every known [`Type`] to its [`TypeRelations`]
///
/// Looking up a type with no entry yields empty relations rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RelationTable {
    entries: HashMap<Type, TypeRelations>,
}

impl RelationTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// The full Gen 6+ table derived from [`TYPE_CHART`]
    pub fn standard() -> Self {
        Type::all()
            .iter()
            .map(|&ty| (ty, TypeRelations::from_chart(ty)))
            .collect()
    }

    /// Relations of `ty`, or empty relations if the table has no entry
    pub fn get(&self, ty: Type) -> &TypeRelations {
        self.entries.get(&ty).unwrap_or(TypeRelations::empty())
    }

    /// Whether the table holds an entry for `ty`
    pub fn contains(&self, ty: Type) -> bool {
        self.entries.contains_key(&ty)
    }

    /// Set the relations of `ty`, returning the previous entry
    pub fn insert(&mut self, ty: Type, relations: TypeRelations) -> Option<TypeRelations> {
        self.entries.insert(ty, relations)
    }

    /// Number of types with an entry
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no type has an entry
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in [`Type::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (Type, &TypeRelations)> {
        Type::all()
            .iter()
            .filter_map(|ty| self.entries.get(ty).map(|r| (*ty, r)))
    }
}

impl FromIterator<(Type, TypeRelations)> for RelationTable {
    fn from_iter<I: IntoIterator<Item = (Type, TypeRelations)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
