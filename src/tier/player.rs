//! Player character rules, shared by the first non-player tier

use super::{AbilityPlan, AttributePlan, BudgetRules, SpecialtyAudit};
use crate::character::{Abilities, Ability, Allowance, Attributes, STATUS, UNTRAINED_RANK};
use crate::dice::RandomSource;
use crate::tables::{status_from_roll, AgeCategory};
use std::collections::BTreeMap;
use tracing::debug;

/// Points per rank above the untrained rank
const POINTS_PER_RANK: i32 = 30;

/// Discount on the first purchased rank
const FIRST_RANK_DISCOUNT: i32 = 20;

/// Points per specialty rank
const POINTS_PER_SPECIALTY_RANK: i32 = 10;

/// Point cost of holding an ability at `rank`; untrained ranks are free
///
/// Costs beyond `i32::MAX` saturate, which no budget can pay.
#[inline]
pub fn rank_cost(rank: u32) -> i32 {
    if rank > UNTRAINED_RANK {
        let cost = i64::from(rank - UNTRAINED_RANK) * i64::from(POINTS_PER_RANK)
            - i64::from(FIRST_RANK_DISCOUNT);
        i32::try_from(cost).unwrap_or(i32::MAX)
    } else {
        0
    }
}

fn references(pages: &[(&str, &str)]) -> BTreeMap<String, String> {
    pages
        .iter()
        .map(|(section, page)| (section.to_string(), page.to_string()))
        .collect()
}

pub(super) fn generate_abilities(
    age_category: AgeCategory,
    rng: &mut impl RandomSource,
    rolled_experience: bool,
) -> AbilityPlan {
    let status = status_from_roll(rng.roll(2));
    let status_cost = (status as i32 - 2) * POINTS_PER_RANK - FIRST_RANK_DISCOUNT;
    let experience = if rolled_experience { rng.roll(1) * 10 } else { 0 };
    debug!(status, experience, "Rolled status");

    let mut abilities = Abilities::new();
    abilities.insert(STATUS.to_string(), Ability::Rank(status));

    AbilityPlan {
        abilities,
        allowance: Allowance {
            ability_points: Some(age_category.ability_points() - status_cost),
            specialty_points: Some(age_category.specialty_points()),
            experience: Some(experience),
            max_rank: Some(age_category.max_rank()),
            references: references(&[
                ("Abilities List", "p56"),
                ("Abilities Costs", "p50"),
                ("Specialties Costs", "p51"),
            ]),
            ..Default::default()
        },
    }
}

pub(super) fn generate_attributes(age_category: AgeCategory) -> AttributePlan {
    AttributePlan {
        attributes: Attributes {
            destiny_points: age_category.destiny_points(),
            ..Default::default()
        },
        allowance: Allowance {
            max_benefits: Some(age_category.max_benefits()),
            min_drawbacks: Some(age_category.min_drawbacks()),
            references: references(&[("Benefits List", "p73"), ("Drawbacks List", "p94")]),
            ..Default::default()
        },
    }
}

pub(super) fn budget_rules(age_category: AgeCategory) -> BudgetRules {
    BudgetRules::PointBuy {
        ability_points: age_category.ability_points(),
        specialty_points: age_category.specialty_points(),
        max_rank: age_category.max_rank(),
    }
}

/// Specialties cost 10 points per rank and may not outrank their ability
pub(super) fn validate_ability(name: &str, ability: &Ability) -> SpecialtyAudit {
    let mut audit = SpecialtyAudit::default();
    let rank = ability.rank();
    for (specialty, value) in ability.specialties() {
        let cost = i64::from(value) * i64::from(POINTS_PER_SPECIALTY_RANK);
        audit.consumed = audit.consumed.saturating_add(i32::try_from(cost).unwrap_or(i32::MAX));
        if value > rank {
            audit.fail(format!("{} at {} exceeds the {} rank of {}", specialty, value, name, rank));
        }
    }
    audit
}
