//! Character generation
//!
//! Resolves the age bracket, lets the tier lay out abilities and attributes,
//! rolls a background and computes the derived statistics. All randomness
//! comes from the supplied [`RandomSource`], in a fixed call order: age roll,
//! tier rolls, goal, motivation, virtue, vice, events.

mod background;


pub use background::*;

use crate::character::{Character, STATUS};
use crate::dice::RandomSource;
use crate::tables::AgeCategory;
use crate::tier::{AbilityPlan, AttributePlan, Tier};
use tracing::{debug, info};

/// Resolve the age bracket and the age written to the background
///
/// A rolled bracket is recorded at its youngest age so that reloading the
/// document lands in the same bracket.
pub fn resolve_age(age: Option<u32>, rng: &mut impl RandomSource) -> (AgeCategory, u32) {
    match age {
        Some(age) => (AgeCategory::from_age(age), age),
        None => {
            let roll = rng.roll(3);
            let category = AgeCategory::from_roll(roll);
            debug!(roll, age_category = category.index(), "Rolled age bracket");
            (category, category.representative_age())
        }
    }
}

/// Generate a complete character for a tier
pub fn generate(
    tier: Tier,
    age: Option<u32>,
    name: &str,
    rng: &mut impl RandomSource,
) -> Character {
    let (age_category, age) = resolve_age(age, rng);

    let AbilityPlan {
        abilities,
        mut allowance,
    } = tier.generate_abilities(age_category, rng);
    let AttributePlan {
        attributes,
        allowance: attribute_allowance,
    } = tier.generate_attributes(age_category);
    allowance.merge(attribute_allowance);

    let status = abilities.get(STATUS).map_or(0, |ability| ability.rank());
    let background = generate_background(age_category, age, status, rng);

    let mut character = Character {
        name: name.to_string(),
        age_category,
        abilities,
        allowance: Some(allowance),
        attributes,
        background,
        ..Default::default()
    };
    character.refresh_derived();

    info!(
        name,
        tier = %tier,
        age,
        age_category = age_category.index(),
        status,
        "Generated character"
    );
    character
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{Ability, Derived};
    use crate::dice::testing::ScriptedSource;
    use crate::tables::BACKGROUND_EVENTS;

    /// Status roll of 6, goal, motivation, virtue, vice, then three events
    fn adult_script() -> ScriptedSource {
        ScriptedSource::new([
            3, 3, // status 4
            1, 1, // goal
            1, 2, // motivation
            2, 2, // virtue
            6, 6, // vice
            1, 1, // event 0
            1, 1, // repeat
            1, 2, // event 1
            2, 2, // event 2
        ])
    }

    #[test]
    fn test_generate_adult_player() {
        let mut dice = adult_script();
        let character = generate(Tier::PlayerCharacter, Some(25), "Ser Example", &mut dice);

        assert_eq!(dice.remaining(), 0);
        assert_eq!(character.name, "Ser Example");
        assert_eq!(character.age_category.index(), 3);
        assert_eq!(character.attributes.destiny_points, 4);
        assert_eq!(character.abilities["Status"], Ability::Rank(4));
        assert_eq!(
            character.background.events,
            vec![BACKGROUND_EVENTS[0], BACKGROUND_EVENTS[1], BACKGROUND_EVENTS[2]]
        );
        assert_eq!(character.background.age, 25);

        let allowance = character.allowance.as_ref().unwrap();
        assert_eq!(allowance.ability_points, Some(170));
        assert_eq!(allowance.specialty_points, Some(80));
        assert_eq!(allowance.max_benefits, Some(3));
        assert_eq!(allowance.min_drawbacks, Some(1));
        assert_eq!(allowance.references.len(), 5);
    }

    #[test]
    fn test_derived_uses_untrained_defaults() {
        let mut dice = adult_script();
        let character = generate(Tier::PlayerCharacter, Some(25), "Ser Example", &mut dice);
        assert_eq!(
            character.derived,
            Some(Derived {
                combat_defense: 6,
                health: 6,
                intrigue_defense: 2 + 4 + 2,
                composure: 6,
            })
        );
    }

    #[test]
    fn test_rolled_age_uses_bracket_floor() {
        // 3d6 = 18 -> Venerable
        let mut dice = ScriptedSource::new([6, 6, 6]);
        let (category, age) = resolve_age(None, &mut dice);
        assert_eq!(category, AgeCategory::VENERABLE);
        assert_eq!(age, 80);
    }

    #[test]
    fn test_explicit_age_consumes_no_dice() {
        let mut dice = ScriptedSource::new([]);
        let (category, age) = resolve_age(Some(45), &mut dice);
        assert_eq!(category.index(), 4);
        assert_eq!(age, 45);
    }

    #[test]
    fn test_lower_tier_has_no_attribute_economy() {
        // status, four flavor picks, no events for a youth
        let mut dice = ScriptedSource::new([4, 4, 1, 1, 1, 1, 1, 1, 1, 1]);
        let character = generate(Tier::NcTier2, Some(5), "Guard", &mut dice);
        assert_eq!(character.attributes.destiny_points, 0);
        assert!(character.background.events.is_empty());
        let allowance = character.allowance.unwrap();
        assert!(allowance.ability_points.is_none());
        assert!(!allowance.guidance.is_empty());
    }
}
