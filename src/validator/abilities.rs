//! Ability budget checks

use super::report::{CheckKind, CheckOutcome};
use crate::character::Character;
use crate::tier::{rank_cost, BudgetRules, RankList, Tier};

/// Check every ability against the tier's budget rules
pub fn check_abilities(character: &Character, tier: Tier) -> CheckOutcome {
    match tier.budget_rules(character.age_category) {
        BudgetRules::PointBuy {
            ability_points,
            specialty_points,
            max_rank,
        } => point_buy(character, tier, ability_points, specialty_points, max_rank),
        BudgetRules::Checklist {
            ranks,
            specialty_slots,
        } => checklist(character, tier, ranks, specialty_slots),
        BudgetRules::Patterns {
            patterns,
            specialty_slots,
        } => patterns_match(character, tier, patterns, specialty_slots),
    }
}

/// Ranks bought from the age bracket's pools
///
/// A Flaw on an ability raises the rank it is costed at by one; the stored
/// rank is what the age maximum applies to.
fn point_buy(
    character: &Character,
    tier: Tier,
    ability_points: i32,
    specialty_points: i32,
    max_rank: u32,
) -> CheckOutcome {
    let mut outcome = CheckOutcome::new(CheckKind::Abilities);
    let flaws = &character.attributes.drawbacks;
    let mut ability_left = ability_points;
    let mut specialty_left = specialty_points;

    for (name, ability) in &character.abilities {
        let rank = ability.rank();
        let effective = if tier.applies_flaws() && flaws.is_flawed(name) {
            rank.saturating_add(1)
        } else {
            rank
        };
        let cost = rank_cost(effective);
        ability_left = ability_left.saturating_sub(cost);
        outcome.note(format!("{}: {} exp {}", name, effective, cost));

        if rank > max_rank {
            outcome.fail(format!(
                "{} at {} exceeds the maximum value of {} for the age",
                name, rank, max_rank
            ));
        }

        let audit = tier.validate_ability(name, ability);
        specialty_left = specialty_left.saturating_sub(audit.consumed);
        outcome.absorb(audit.legal, audit.lines);
    }

    outcome.note(format!("Ability points: starting {}, left: {}", ability_points, ability_left));
    outcome.note(format!(
        "Specialty points: starting {}, left: {}",
        specialty_points, specialty_left
    ));
    outcome.reject_if(ability_left < 0 || specialty_left < 0);
    outcome
}

/// Every rank removes one matching entry from a fixed checklist, which
/// must end up empty
fn checklist(
    character: &Character,
    tier: Tier,
    ranks: RankList,
    specialty_slots: i32,
) -> CheckOutcome {
    let mut outcome = CheckOutcome::new(CheckKind::Abilities);
    let mut remaining = ranks;
    let mut slots_left = specialty_slots;

    for (name, ability) in &character.abilities {
        let rank = ability.rank();
        outcome.note(format!("{}: {}", name, rank));
        match remaining.iter().position(|&entry| entry == rank) {
            Some(index) => {
                remaining.remove(index);
            }
            None => outcome.fail(format!(
                "{} rank {} is not in checklist {:?}",
                name,
                rank,
                remaining.as_slice()
            )),
        }

        let audit = tier.validate_ability(name, ability);
        slots_left = slots_left.saturating_sub(audit.consumed);
        outcome.absorb(audit.legal, audit.lines);
    }

    outcome.note(format!("Abilities left: {:?}", remaining.as_slice()));
    outcome.note(format!("Specialties left: {}", slots_left));
    if !remaining.is_empty() {
        outcome.fail(format!("Checklist ranks {:?} were never assigned", remaining.as_slice()));
    }
    outcome.reject_if(slots_left < 0);
    outcome
}

/// The sorted multiset of ranks must equal one allowed pattern
fn patterns_match(
    character: &Character,
    tier: Tier,
    patterns: &[&[u32]],
    specialty_slots: i32,
) -> CheckOutcome {
    let mut outcome = CheckOutcome::new(CheckKind::Abilities);
    let mut spent = RankList::new();
    let mut slots_left = specialty_slots;

    for (name, ability) in &character.abilities {
        let rank = ability.rank();
        outcome.note(format!("{}: {}", name, rank));
        spent.push(rank);

        let audit = tier.validate_ability(name, ability);
        slots_left = slots_left.saturating_sub(audit.consumed);
        outcome.absorb(audit.legal, audit.lines);
    }

    spent.sort_unstable();
    outcome.note(format!("Abilities spent: {:?}", spent.as_slice()));
    outcome.note(format!("Specialties left: {}", slots_left));

    if !patterns.iter().any(|&pattern| pattern == spent.as_slice()) {
        outcome.fail(format!(
            "Abilities spent {:?} match none of {:?}",
            spent.as_slice(),
            patterns
        ));
    }
    outcome.reject_if(slots_left < 0);
    outcome
}
