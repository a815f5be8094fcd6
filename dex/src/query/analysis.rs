//! Team-wide matchup tally and score

use crate::types::{RelationTable, TeamMember, Type};

/// How many times a type showed up in one tally
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeCount {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub ty: Type,
    pub count: u32,
}

/// Aggregate matchups of a team's combined typing
///
/// Each list is in first-encountered order: members in team order, each
/// member's types in slot order, each relation list in source order.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Analysis {
    /// Types the team hits for 2x
    pub coverage: Vec<TypeCount>,
    /// Attacking types that hit some member type for 2x
    pub weaknesses: Vec<TypeCount>,
    /// Attacking types some member type takes 0.5x from
    pub resistances: Vec<TypeCount>,
    /// Attacking types some member type takes nothing from
    pub immunities: Vec<TypeCount>,
    /// `coverage - weaknesses + resistances / 2 + immunities`, one decimal
    pub score: f64,
}

impl Analysis {
    /// True when every tally is empty
    pub fn is_empty(&self) -> bool {
        self.coverage.is_empty()
            && self.weaknesses.is_empty()
            && self.resistances.is_empty()
            && self.immunities.is_empty()
    }

    /// Coverage count for `ty`, 0 if absent
    pub fn coverage_of(&self, ty: Type) -> u32 {
        count_of(&self.coverage, ty)
    }

    /// Weakness count for `ty`, 0 if absent
    pub fn weakness_to(&self, ty: Type) -> u32 {
        count_of(&self.weaknesses, ty)
    }

    /// Resistance count for `ty`, 0 if absent
    pub fn resistance_to(&self, ty: Type) -> u32 {
        count_of(&self.resistances, ty)
    }

    /// Immunity count for `ty`, 0 if absent
    pub fn immunity_to(&self, ty: Type) -> u32 {
        count_of(&self.immunities, ty)
    }
}

fn count_of(tally: &[TypeCount], ty: Type) -> u32 {
    tally
        .iter()
        .find(|c| c.ty == ty)
        .map(|c| c.count)
        .unwrap_or(0)
}

#[derive(Default)]
struct Tally(Vec<TypeCount>);

impl Tally {
    fn add_all(&mut self, types: &[Type]) {
        for &ty in types {
            match self.0.iter_mut().find(|c| c.ty == ty) {
                Some(entry) => entry.count += 1,
                None => self.0.push(TypeCount { ty, count: 1 }),
            }
        }
    }
}

/// Fold every member type's relations into the four tallies and score them.
///
/// This is a plain multiplicity count: a dual type with two resistances to
/// the same attacker counts the same as two members resisting it once.
/// Missing table entries count as empty relations.
pub fn analyze(members: &[TeamMember], relations: &RelationTable) -> Analysis {
    if members.is_empty() || relations.is_empty() {
        return Analysis::default();
    }

    let mut coverage = Tally::default();
    let mut weaknesses = Tally::default();
    let mut resistances = Tally::default();
    let mut immunities = Tally::default();

    for ty in members.iter().flat_map(|m| m.types.iter()) {
        let r = relations.get(*ty);
        coverage.add_all(&r.double_damage_to);
        weaknesses.add_all(&r.double_damage_from);
        resistances.add_all(&r.half_damage_from);
        immunities.add_all(&r.no_damage_from);
    }

    let raw = coverage.0.len() as f64 - weaknesses.0.len() as f64
        + resistances.0.len() as f64 * 0.5
        + immunities.0.len() as f64;

    Analysis {
        coverage: coverage.0,
        weaknesses: weaknesses.0,
        resistances: resistances.0,
        immunities: immunities.0,
        score: round_tenths(raw),
    }
}

/// Round half away from zero to one decimal place
fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
