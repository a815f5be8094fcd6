//! One-vs-one type matchups with multi-type stacking

use crate::types::{RelationTable, TeamMember, Type};

/// Multiplier of `attacker` types hitting `defender` types.
///
/// Starts at 1 and compounds the multiplier of every attacker/defender type
/// pair, so `[A, B]` vs `[C]` is `[A]` vs `[C]` times `[B]` vs `[C]`.
pub fn pairwise_effectiveness(
    attacker: &[Type],
    defender: &[Type],
    relations: &RelationTable,
) -> f64 {
    attacker
        .iter()
        .flat_map(|a| {
            let r = relations.get(*a);
            defender.iter().map(move |d| r.multiplier_against(*d))
        })
        .product()
}

/// Check if defender is weak (>1x effectiveness) to any of the attacking types
pub fn is_weak_to_any(defender: &[Type], attacking: &[Type], relations: &RelationTable) -> bool {
    attacking
        .iter()
        .any(|t| pairwise_effectiveness(&[*t], defender, relations) > 1.0)
}

/// Check if defender resists (<1x effectiveness) all of the attacking types
pub fn resists_all(defender: &[Type], attacking: &[Type], relations: &RelationTable) -> bool {
    if attacking.is_empty() {
        return false;
    }
    attacking
        .iter()
        .all(|t| pairwise_effectiveness(&[*t], defender, relations) < 1.0)
}

/// Check if defender is immune (0x effectiveness) to a type
pub fn is_immune_to(defender: &[Type], attacking: Type, relations: &RelationTable) -> bool {
    pairwise_effectiveness(&[attacking], defender, relations) == 0.0
}

/// Get all types that are super effective against the defender
pub fn weaknesses(defender: &[Type], relations: &RelationTable) -> Vec<Type> {
    filter_attackers(defender, relations, |eff| eff > 1.0)
}

/// Get all types that the defender resists (0 < effectiveness < 1)
pub fn resistances(defender: &[Type], relations: &RelationTable) -> Vec<Type> {
    filter_attackers(defender, relations, |eff| eff > 0.0 && eff < 1.0)
}

/// Get all types that the defender is immune to
pub fn immunities(defender: &[Type], relations: &RelationTable) -> Vec<Type> {
    filter_attackers(defender, relations, |eff| eff == 0.0)
}

fn filter_attackers(
    defender: &[Type],
    relations: &RelationTable,
    keep: impl Fn(f64) -> bool,
) -> Vec<Type> {
    Type::all()
        .iter()
        .copied()
        .filter(|t| keep(pairwise_effectiveness(&[*t], defender, relations)))
        .collect()
}

/// One direction of a head-to-head comparison
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matchup {
    /// All attacker types folded against all defender types
    pub combined: f64,
    /// Attacker type with the highest single-type multiplier (first on ties)
    pub best_type: Option<Type>,
    /// Multiplier of `best_type`, 1.0 when the attacker has no types
    pub best_multiplier: f64,
}

impl Matchup {
    fn between(attacker: &TeamMember, defender: &TeamMember, relations: &RelationTable) -> Self {
        let mut best: Option<(Type, f64)> = None;
        for &ty in &attacker.types {
            let eff = pairwise_effectiveness(&[ty], &defender.types, relations);
            if best.is_none_or(|(_, b)| eff > b) {
                best = Some((ty, eff));
            }
        }
        Self {
            combined: pairwise_effectiveness(&attacker.types, &defender.types, relations),
            best_type: best.map(|(ty, _)| ty),
            best_multiplier: best.map(|(_, eff)| eff).unwrap_or(1.0),
        }
    }
}

/// Side-by-side matchup of two species
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comparison {
    /// Left attacking right
    pub left: Matchup,
    /// Right attacking left
    pub right: Matchup,
}

impl Comparison {
    /// Which side lands the harder best hit, `None` on a tie
    pub fn favored(&self) -> Option<Side> {
        if self.left.best_multiplier > self.right.best_multiplier {
            Some(Side::Left)
        } else if self.right.best_multiplier > self.left.best_multiplier {
            Some(Side::Right)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Left,
    Right,
}

/// Compare two species head to head
pub fn compare(left: &TeamMember, right: &TeamMember, relations: &RelationTable) -> Comparison {
    Comparison {
        left: Matchup::between(left, right, relations),
        right: Matchup::between(right, left, relations),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart() -> RelationTable {
        RelationTable::standard()
    }

    #[test]
    fn test_pairwise_single() {
        let t = chart();
        assert_eq!(pairwise_effectiveness(&[Type::Water], &[Type::Fire], &t), 2.0);
        assert_eq!(pairwise_effectiveness(&[Type::Fire], &[Type::Water], &t), 0.5);
        assert_eq!(pairwise_effectiveness(&[Type::Normal], &[Type::Ghost], &t), 0.0);
        assert_eq!(pairwise_effectiveness(&[Type::Normal], &[Type::Normal], &t), 1.0);
    }

    #[test]
    fn test_pairwise_stacks() {
        let t = chart();
        // Fire vs Grass/Steel = 4x
        assert_eq!(
            pairwise_effectiveness(&[Type::Fire], &[Type::Grass, Type::Steel], &t),
            4.0
        );
        // Fire vs Water/Rock = 0.25x
        assert_eq!(
            pairwise_effectiveness(&[Type::Fire], &[Type::Water, Type::Rock], &t),
            0.25
        );
        // Ground vs Flying/Steel = 0x
        assert_eq!(
            pairwise_effectiveness(&[Type::Ground], &[Type::Flying, Type::Steel], &t),
            0.0
        );
    }

    #[test]
    fn test_pairwise_is_multiplicative() {
        let t = chart();
        for &a in Type::all() {
            for &b in Type::all() {
                for &c in Type::all() {
                    let joint = pairwise_effectiveness(&[a, b], &[c], &t);
                    let split = pairwise_effectiveness(&[a], &[c], &t)
                        * pairwise_effectiveness(&[b], &[c], &t);
                    assert_eq!(joint, split, "{a} + {b} vs {c}");
                }
            }
        }
    }

    #[test]
    fn test_pairwise_matches_chart() {
        let t = chart();
        for &a in Type::all() {
            for &d in Type::all() {
                assert_eq!(
                    pairwise_effectiveness(&[a], &[d], &t),
                    a.effectiveness(d) as f64,
                    "{a} vs {d}"
                );
            }
        }
    }

    #[test]
    fn test_pairwise_empty_inputs() {
        let t = chart();
        assert_eq!(pairwise_effectiveness(&[], &[Type::Fire], &t), 1.0);
        assert_eq!(pairwise_effectiveness(&[Type::Fire], &[], &t), 1.0);
        assert_eq!(
            pairwise_effectiveness(&[Type::Water], &[Type::Fire], &RelationTable::new()),
            1.0
        );
    }

    #[test]
    fn test_is_weak_to_any() {
        let t = chart();
        let water = [Type::Water];
        assert!(is_weak_to_any(&water, &[Type::Electric, Type::Grass], &t));
        assert!(!is_weak_to_any(&water, &[Type::Fire, Type::Ice], &t));
    }

    #[test]
    fn test_resists_all() {
        let t = chart();
        let steel = [Type::Steel];
        assert!(resists_all(&steel, &[Type::Normal, Type::Ice, Type::Fairy], &t));
        assert!(!resists_all(&steel, &[Type::Fire, Type::Ice], &t));
        assert!(!resists_all(&steel, &[], &t));
    }

    #[test]
    fn test_is_immune_to() {
        let t = chart();
        assert!(is_immune_to(&[Type::Ghost], Type::Normal, &t));
        assert!(is_immune_to(&[Type::Ground], Type::Electric, &t));
        assert!(!is_immune_to(&[Type::Ghost], Type::Dark, &t));
    }

    #[test]
    fn test_weaknesses_dual_type() {
        // Water/Ground (Swampert) is only weak to Grass (4x)
        assert_eq!(
            weaknesses(&[Type::Water, Type::Ground], &chart()),
            vec![Type::Grass]
        );
        assert_eq!(
            weaknesses(&[Type::Steel], &chart()),
            vec![Type::Fire, Type::Fighting, Type::Ground]
        );
    }

    #[test]
    fn test_resistances_and_immunities() {
        let t = chart();
        let resists = resistances(&[Type::Steel], &t);
        assert!(resists.contains(&Type::Normal));
        assert!(resists.contains(&Type::Fairy));
        assert!(!resists.contains(&Type::Fire));
        assert!(!resists.contains(&Type::Poison));

        assert_eq!(immunities(&[Type::Ghost], &t), vec![Type::Normal, Type::Fighting]);
        assert_eq!(
            immunities(&[Type::Steel], &t),
            vec![Type::Poison]
        );
    }

    #[test]
    fn test_compare() {
        let t = chart();
        let blastoise = TeamMember::new(9, "blastoise", [Type::Water]);
        let charizard = TeamMember::new(6, "charizard", [Type::Fire, Type::Flying]);

        let cmp = compare(&blastoise, &charizard, &t);
        assert_eq!(cmp.left.combined, 2.0);
        assert_eq!(cmp.left.best_type, Some(Type::Water));
        assert_eq!(cmp.left.best_multiplier, 2.0);

        // Fire vs Water 0.5, Flying vs Water 1.0
        assert_eq!(cmp.right.combined, 0.5);
        assert_eq!(cmp.right.best_type, Some(Type::Flying));
        assert_eq!(cmp.right.best_multiplier, 1.0);

        assert_eq!(cmp.favored(), Some(Side::Left));
    }

    #[test]
    fn test_compare_untyped_side() {
        let t = chart();
        let blank = TeamMember::new(0, "missingno", Vec::<Type>::new());
        let pikachu = TeamMember::new(25, "pikachu", [Type::Electric]);
        let cmp = compare(&blank, &pikachu, &t);
        assert_eq!(cmp.left.best_type, None);
        assert_eq!(cmp.left.best_multiplier, 1.0);
        assert_eq!(cmp.favored(), None);
    }
}
