//! Character validation
//!
//! Three independent checks (abilities, attributes, derived statistics)
//! whose conjunction is the verdict. Rule violations are reported in the
//! result, never raised. As a side effect the stored derived statistics are
//! replaced with a fresh computation.

mod abilities;
mod attributes;
mod report;


pub use abilities::*;
pub use attributes::*;
pub use report::*;

use crate::character::Character;
use crate::tier::Tier;
use tracing::{info, warn};

/// Compare stored derived statistics with a recomputation, then store it
pub fn check_derived(character: &mut Character) -> CheckOutcome {
    let mut outcome = CheckOutcome::new(CheckKind::Derived);
    let stored = character.derived;
    let computed = character.refresh_derived();

    match stored {
        Some(stored) if stored == computed => {}
        Some(stored) => outcome.fail(format!(
            "Calculated derived statistics is {} instead of {}",
            computed, stored
        )),
        None => outcome.fail(format!(
            "Calculated derived statistics is {} instead of nothing",
            computed
        )),
    }
    outcome
}

/// Validate a character against a tier
pub fn validate(character: &mut Character, tier: Tier) -> ValidationReport {
    let abilities = check_abilities(character, tier);
    let attributes = check_attributes(character, tier);
    let derived = check_derived(character);

    let report = ValidationReport::new(vec![abilities, attributes, derived]);
    if report.is_legal() {
        info!(name = %character.name, tier = %tier, "Character is legal");
    } else {
        warn!(
            name = %character.name,
            tier = %tier,
            failed = ?report.failures(),
            "Character is not legal"
        );
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::{load_document, Ability, Derived};

    const ADULT: &str = "
Ser Example:
  Abilities:
    Fighting: 4
  Attributes:
    Destiny Points: 4
    Benefits: {}
    Drawbacks:
      Wounded: Took an arrow at the Trident
  Derived:
    Combat Defense: 6
    Health: 6
    Intrigue Defense: 6
    Composure: 6
  Background:
    Age: 25
";

    #[test]
    fn test_adult_player_is_legal() {
        let mut character = load_document(ADULT).unwrap();
        let report = validate(&mut character, Tier::PlayerCharacter);
        assert!(report.is_legal(), "{}", report);
        assert_eq!(
            report.diagnostics(),
            vec![
                "Fighting: 4 exp 40",
                "Ability points: starting 210, left: 170",
                "Specialty points: starting 80, left: 80",
                "Destiny points: 4 initial - 0 benefits + 0 drawbacks = 4",
            ]
        );
    }

    #[test]
    fn test_derived_mismatch_is_reported_and_refreshed() {
        let mut character = load_document(ADULT).unwrap();
        character.abilities.insert("Endurance".to_string(), Ability::Rank(4));

        let report = validate(&mut character, Tier::PlayerCharacter);
        assert!(!report.is_legal());
        assert_eq!(report.failures(), vec![CheckKind::Derived]);
        assert_eq!(
            report.check(CheckKind::Derived).unwrap().lines,
            vec![
                "Calculated derived statistics is Combat Defense 6, Health 12, Intrigue Defense 6, \
                 Composure 6 instead of Combat Defense 6, Health 6, Intrigue Defense 6, Composure 6"
            ]
        );
        assert_eq!(character.derived.unwrap().health, 12);
    }

    #[test]
    fn test_missing_derived_is_reported() {
        let mut character = load_document(ADULT).unwrap();
        character.derived = None;
        let report = validate(&mut character, Tier::PlayerCharacter);
        assert_eq!(report.failures(), vec![CheckKind::Derived]);
        assert_eq!(character.derived, Some(Derived::from_abilities(&character.abilities)));
    }

    #[test]
    fn test_validation_is_idempotent() {
        let mut character = load_document(ADULT).unwrap();
        let first = validate(&mut character, Tier::PlayerCharacter);
        let second = validate(&mut character, Tier::PlayerCharacter);
        assert_eq!(first, second);
    }

    #[test]
    fn test_huge_rank_is_illegal_not_fatal() {
        let text = "
Ser Overreach:
  Abilities:
    Fighting: 100000000
  Attributes:
    Destiny Points: 4
    Drawbacks:
      Wounded: Took an arrow at the Trident
  Background:
    Age: 25
";
        let mut character = load_document(text).unwrap();
        character.refresh_derived();
        let report = validate(&mut character, Tier::PlayerCharacter);
        assert!(!report.is_legal());
        assert_eq!(report.failures(), vec![CheckKind::Abilities]);
        assert!(report
            .diagnostics()
            .contains(&format!("Ability points: starting 210, left: {}", 210 - i32::MAX)));
    }

    #[test]
    fn test_huge_endurance_saturates_health() {
        let text = "
Ser Stalwart:
  Abilities:
    Endurance: 2000000000
  Background:
    Age: 25
";
        let mut character = load_document(text).unwrap();
        let report = validate(&mut character, Tier::NcTier3);
        assert!(!report.is_legal());
        assert_eq!(character.derived.unwrap().health, u32::MAX);
    }

    #[test]
    fn test_tier_changes_verdict() {
        let mut character = load_document(ADULT).unwrap();
        // A single rank-4 ability matches no third-tier pattern
        let report = validate(&mut character, Tier::NcTier3);
        assert_eq!(report.failures(), vec![CheckKind::Abilities]);
        assert!(report.check(CheckKind::Attributes).unwrap().passed);
    }
}
