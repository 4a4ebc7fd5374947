//! Third non-player tier: a handful of whitelisted rank patterns

use super::{AbilityPlan, BudgetRules, SpecialtyAudit};
use crate::character::{Abilities, Ability, Allowance, STATUS};
use crate::dice::RandomSource;
use crate::tables::status_from_roll;
use std::collections::BTreeMap;

/// Allowed rank multisets, each sorted ascending
const ALLOWED_PATTERNS: &[&[u32]] = &[&[3], &[3, 3], &[3, 3, 3, 4], &[3, 3, 4, 4]];

const SPECIALTY_SLOTS: i32 = 3;

/// The only rank a specialty may have at this tier
const SPECIALTY_RANK: u32 = 1;

pub(super) fn generate_abilities(rng: &mut impl RandomSource) -> AbilityPlan {
    let status = status_from_roll(rng.roll(2));

    let mut abilities = Abilities::new();
    abilities.insert(STATUS.to_string(), Ability::Rank(status));

    AbilityPlan {
        abilities,
        allowance: Allowance {
            guidance: vec![
                "1 or 2 abilities at rank 3 or 4".to_string(),
                "if the first ability is at rank 4, choose another two at rank 3".to_string(),
                "2 or 3 specialties at rank 1".to_string(),
            ],
            references: BTreeMap::from([("Abilities List".to_string(), "p56".to_string())]),
            ..Default::default()
        },
    }
}

pub(super) fn budget_rules() -> BudgetRules {
    BudgetRules::Patterns {
        patterns: ALLOWED_PATTERNS,
        specialty_slots: SPECIALTY_SLOTS,
    }
}

/// Specialties are free but must sit at rank 1
pub(super) fn validate_ability(_name: &str, ability: &Ability) -> SpecialtyAudit {
    let mut audit = SpecialtyAudit::default();
    for (specialty, value) in ability.specialties() {
        if value != SPECIALTY_RANK {
            audit.fail(format!("{} should be {}, is {}", specialty, SPECIALTY_RANK, value));
        }
    }
    audit
}
