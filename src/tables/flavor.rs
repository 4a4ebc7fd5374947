//! Flavor text tables for background generation
//!
//! Every roll table holds 11 entries and is indexed by a 2d6 roll minus 2.

use super::status::MIN_STATUS;

/// Entries in every 2d6 roll table
pub const ROLL_TABLE_SIZE: usize = 11;

/// Status descriptions, indexed by Status rank minus 2
pub const STATUSES: [&str; 5] = [
    "House retainer, common hedge knight, freeman",
    "Sworn sword, guardsman, squire",
    "Ranking member of household, maester, junior septon, landed knight, noble bastard",
    "Banner lord, ward, courtier, septon, advisor",
    "Lord of the house, heir, lady, offspring",
];

pub const GOALS: [&str; ROLL_TABLE_SIZE] = [
    "Enlightenment",
    "Skill, mastery in a specific ability",
    "Fame",
    "Knowledge",
    "Love",
    "Power",
    "Security",
    "Revenge",
    "Wealth",
    "Justice",
    "Good",
];

pub const MOTIVATIONS: [&str; ROLL_TABLE_SIZE] = [
    "Charity",
    "Duty",
    "Fear",
    "Greed",
    "Love",
    "Hatred",
    "Lust",
    "Peace",
    "Stability",
    "Excellence",
    "Madness",
];

pub const VIRTUES: [&str; ROLL_TABLE_SIZE] = [
    "Charitable",
    "Chaste",
    "Courageous",
    "Devoted",
    "Honest",
    "Humble",
    "Just",
    "Magnanimous",
    "Merciful",
    "Pious",
    "Wise",
];

pub const VICES: [&str; ROLL_TABLE_SIZE] = [
    "Ambitious/Grasping",
    "Arrogant",
    "Avaricious",
    "Cowardly",
    "Cruel",
    "Foolish",
    "Licentious",
    "Miserly",
    "Prejudiced",
    "Scheming",
    "Wrathful",
];

pub const BACKGROUND_EVENTS: [&str; ROLL_TABLE_SIZE] = [
    "You served another house (page, sworn sword).",
    "You had a torrid love affair.",
    "You fought or were involved in a battle.",
    "You were kidnapped and escaped, were ransomed, or rescued.",
    "You traveled across the narrow sea for a time.",
    "You achieved a significant deed, maybe saving the life of your lord, killed a giant boar, and so on.",
    "You kept the company of a famous individual.",
    "You were present at a significant tournament (competing or watching).",
    "You were involved in a villainous scandal.",
    "You were falsely accused of wrongdoing.",
    "You were held hostage by another house as a ward or prisoner.",
];

/// Index into a roll table for a 2d6 roll, clamped to the table
#[inline]
pub fn roll_index(roll: u32) -> usize {
    (roll.saturating_sub(2) as usize).min(ROLL_TABLE_SIZE - 1)
}

/// Pick the entry of a roll table matching a 2d6 roll
#[inline]
pub fn pick(table: &[&'static str; ROLL_TABLE_SIZE], roll: u32) -> &'static str {
    table[roll_index(roll)]
}

/// Describe a Status rank; ranks outside the table clamp to its ends
pub fn status_description(rank: u32) -> &'static str {
    let index = (rank.saturating_sub(MIN_STATUS) as usize).min(STATUSES.len() - 1);
    STATUSES[index]
}
