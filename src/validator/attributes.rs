//! Benefit, drawback and destiny point checks

use super::report::{CheckKind, CheckOutcome};
use crate::character::Character;
use crate::tier::Tier;

/// Check trait counts against the age bracket and balance destiny points
///
/// Drawbacks beyond the required minimum each buy back one destiny point;
/// each benefit spends one.
pub fn check_attributes(character: &Character, tier: Tier) -> CheckOutcome {
    let mut outcome = CheckOutcome::new(CheckKind::Attributes);
    if !tier.has_attribute_economy() {
        return outcome;
    }

    let age_category = character.age_category;
    let attributes = &character.attributes;

    let drawbacks = attributes.drawback_count();
    let min_drawbacks = age_category.min_drawbacks();
    if drawbacks < min_drawbacks {
        outcome.fail(format!("{} Drawbacks, expected min {}", drawbacks, min_drawbacks));
    }

    let benefits = attributes.benefit_count();
    let max_benefits = age_category.max_benefits();
    if benefits > max_benefits {
        outcome.fail(format!("{} Benefits, expected max {}", benefits, max_benefits));
    }

    let initial = age_category.destiny_points();
    let bought = drawbacks as i32 - min_drawbacks as i32;
    let remaining = initial - benefits as i32 + bought;
    outcome.note(format!(
        "Destiny points: {} initial - {} benefits + {} drawbacks = {}",
        initial, benefits, bought, remaining
    ));
    outcome.reject_if(remaining < 0);
    outcome
}
