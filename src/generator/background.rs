//! Background generation

use crate::character::Background;
use crate::dice::RandomSource;
use crate::tables::flavor::{roll_index, GOALS, MOTIVATIONS, VICES, VIRTUES};
use crate::tables::{pick, status_description, AgeCategory, BACKGROUND_EVENTS, ROLL_TABLE_SIZE};
use smallvec::SmallVec;
use tracing::debug;

/// Roll the flavor fields and one distinct life event per age bracket
pub fn generate_background(
    age_category: AgeCategory,
    age: u32,
    status: u32,
    rng: &mut impl RandomSource,
) -> Background {
    Background {
        age,
        age_group: Some(age_category.label()),
        status: Some(status_description(status).to_string()),
        goal: Some(pick(&GOALS, rng.roll(2)).to_string()),
        motivation: Some(pick(&MOTIVATIONS, rng.roll(2)).to_string()),
        virtue: Some(pick(&VIRTUES, rng.roll(2)).to_string()),
        vice: Some(pick(&VICES, rng.roll(2)).to_string()),
        events: generate_events(age_category.index(), rng),
    }
}

/// Draw `count` distinct background events by rejecting repeated rolls
///
/// Terminates because `count` never exceeds the 11-entry table.
pub fn generate_events(count: usize, rng: &mut impl RandomSource) -> Vec<String> {
    let count = count.min(ROLL_TABLE_SIZE);
    let mut chosen: SmallVec<[usize; 8]> = SmallVec::with_capacity(count);
    let mut rerolls = 0u32;

    while chosen.len() < count {
        let index = roll_index(rng.roll(2));
        if chosen.contains(&index) {
            rerolls += 1;
        } else {
            chosen.push(index);
        }
    }

    debug!(count, rerolls, "Rolled background events");
    chosen.into_iter().map(|index| BACKGROUND_EVENTS[index].to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::testing::ScriptedSource;
    use crate::dice::RngSource;
    use std::collections::HashSet;

    #[test]
    fn test_rejects_duplicate_events() {
        // 2, 2 (repeat), 3, 4
        let mut dice = ScriptedSource::new([1, 1, 1, 1, 1, 2, 2, 2]);
        let events = generate_events(3, &mut dice);
        assert_eq!(
            events,
            vec![BACKGROUND_EVENTS[0], BACKGROUND_EVENTS[1], BACKGROUND_EVENTS[2]]
        );
        assert_eq!(dice.remaining(), 0);
    }

    #[test]
    fn test_no_events_for_youth() {
        let mut dice = ScriptedSource::new([]);
        assert!(generate_events(0, &mut dice).is_empty());
    }

    #[test]
    fn test_oldest_bracket_events_are_distinct() {
        let mut dice = RngSource::seeded(11);
        for _ in 0..50 {
            let events = generate_events(7, &mut dice);
            let unique: HashSet<_> = events.iter().collect();
            assert_eq!(events.len(), 7);
            assert_eq!(unique.len(), 7);
        }
    }

    #[test]
    fn test_background_fields() {
        // goal 2, motivation 3, virtue 4, vice 12, then one event roll of 7
        let mut dice = ScriptedSource::new([1, 1, 1, 2, 2, 2, 6, 6, 3, 4]);
        let background = generate_background(AgeCategory::new(1).unwrap(), 12, 5, &mut dice);
        assert_eq!(background.age, 12);
        assert_eq!(background.age_group.as_deref(), Some("Adolescent (10-13)"));
        assert_eq!(
            background.status.as_deref(),
            Some("Banner lord, ward, courtier, septon, advisor")
        );
        assert_eq!(background.goal.as_deref(), Some("Enlightenment"));
        assert_eq!(background.motivation.as_deref(), Some("Duty"));
        assert_eq!(background.virtue.as_deref(), Some("Courageous"));
        assert_eq!(background.vice.as_deref(), Some("Wrathful"));
        assert_eq!(background.events, vec![BACKGROUND_EVENTS[5]]);
    }
}
