//! Second non-player tier: a fixed checklist of ranks

use super::{AbilityPlan, BudgetRules, SpecialtyAudit};
use crate::character::{Abilities, Ability, Allowance, STATUS};
use crate::dice::RandomSource;
use crate::tables::status_from_roll;
use smallvec::smallvec;
use std::collections::BTreeMap;

/// Specialties allowed at this tier
const SPECIALTY_SLOTS: i32 = 4;

pub(super) fn generate_abilities(rng: &mut impl RandomSource) -> AbilityPlan {
    let status = status_from_roll(rng.roll(2));

    let mut abilities = Abilities::new();
    abilities.insert(STATUS.to_string(), Ability::Rank(status));

    AbilityPlan {
        abilities,
        allowance: Allowance {
            guidance: vec![
                "1 ability at rank 5".to_string(),
                "2 abilities at rank 4".to_string(),
                "4 abilities at rank 3".to_string(),
                "4 specialties at half the ability rank, rounded down".to_string(),
            ],
            references: BTreeMap::from([("Abilities List".to_string(), "p56".to_string())]),
            ..Default::default()
        },
    }
}

pub(super) fn budget_rules() -> BudgetRules {
    BudgetRules::Checklist {
        ranks: smallvec![5, 4, 4, 3, 3, 3, 3],
        specialty_slots: SPECIALTY_SLOTS,
    }
}

/// Every specialty takes one slot and sits at half its ability's rank
pub(super) fn validate_ability(name: &str, ability: &Ability) -> SpecialtyAudit {
    let mut audit = SpecialtyAudit::default();
    let rank = ability.rank();
    let expected = rank / 2;
    for (specialty, value) in ability.specialties() {
        audit.consumed += 1;
        if value != expected {
            audit.fail(format!(
                "{} at {} should be half of the {} rank of {} ({})",
                specialty, value, name, rank, expected
            ));
        }
    }
    audit
}
