//! Age brackets and the per-age-category budget arrays

use serde::{Deserialize, Serialize};

/// Lower bound (inclusive) of every bracket above the first, in years
const AGE_BOUNDARIES: [u32; 7] = [10, 14, 18, 30, 50, 70, 80];

/// Upper bound (inclusive) of every 3d6 bracket below the last
const AGE_ROLL_BOUNDARIES: [u32; 7] = [3, 4, 5, 7, 12, 16, 17];

/// Age range and name of each bracket
const AGE_GROUPS: [(&str, &str); AgeCategory::COUNT] = [
    ("0-9", "Youth"),
    ("10-13", "Adolescent"),
    ("14-17", "Young Adult"),
    ("18-29", "Adult"),
    ("30-49", "Middle Age"),
    ("50-69", "Old"),
    ("70-79", "Very Old"),
    ("80+", "Venerable"),
];

const ABILITY_POINTS: [i32; AgeCategory::COUNT] = [120, 150, 180, 210, 240, 270, 330, 360];
const SPECIALTY_POINTS: [i32; AgeCategory::COUNT] = [40, 40, 60, 80, 100, 160, 200, 240];
const MIN_DRAWBACKS: [u32; AgeCategory::COUNT] = [0, 0, 0, 1, 1, 2, 3, 4];
const MAX_BENEFITS: [u32; AgeCategory::COUNT] = [3, 3, 3, 3, 3, 2, 1, 0];
const MAX_RANK: [u32; AgeCategory::COUNT] = [4, 4, 5, 7, 6, 5, 5, 5];

/// Index 0..7 into the age bracket table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgeCategory(u8);

impl AgeCategory {
    pub const COUNT: usize = 8;

    /// Youngest bracket
    pub const YOUTH: AgeCategory = AgeCategory(0);

    /// Oldest bracket, open-ended upwards
    pub const VENERABLE: AgeCategory = AgeCategory(7);

    /// Build from a raw index, rejecting anything past the last bracket
    pub fn new(index: usize) -> Option<Self> {
        (index < Self::COUNT).then_some(AgeCategory(index as u8))
    }

    /// Map an age in years; everything at or above 80 is Venerable
    #[inline]
    pub fn from_age(age: u32) -> Self {
        let index = AGE_BOUNDARIES.iter().take_while(|&&b| age >= b).count();
        AgeCategory(index as u8)
    }

    /// Map a 3d6 roll; out-of-range rolls clamp to the end brackets
    #[inline]
    pub fn from_roll(roll: u32) -> Self {
        let index = AGE_ROLL_BOUNDARIES.iter().take_while(|&&b| roll > b).count();
        AgeCategory(index as u8)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Total ability points available before status is bought
    pub fn ability_points(self) -> i32 {
        ABILITY_POINTS[self.index()]
    }

    pub fn specialty_points(self) -> i32 {
        SPECIALTY_POINTS[self.index()]
    }

    pub fn min_drawbacks(self) -> u32 {
        MIN_DRAWBACKS[self.index()]
    }

    pub fn max_benefits(self) -> u32 {
        MAX_BENEFITS[self.index()]
    }

    /// Highest rank any single ability may reach
    pub fn max_rank(self) -> u32 {
        MAX_RANK[self.index()]
    }

    /// Starting destiny points: 7 for a youth down to 0 for the venerable
    pub fn destiny_points(self) -> i32 {
        7 - self.0 as i32
    }

    /// Youngest age inside the bracket, used when the bracket was rolled
    pub fn representative_age(self) -> u32 {
        match self.index() {
            0 => 0,
            i => AGE_BOUNDARIES[i - 1],
        }
    }

    /// Human-readable bracket, e.g. "Adult (18-29)"
    pub fn label(self) -> String {
        let (range, name) = AGE_GROUPS[self.index()];
        format!("{} ({})", name, range)
    }
}

/// Map an age in years to its bracket
#[inline]
pub fn age_category_from_age(age: u32) -> AgeCategory {
    AgeCategory::from_age(age)
}

/// Map a 3d6 roll (3..18) to its bracket
#[inline]
pub fn age_category_from_roll(roll: u32) -> AgeCategory {
    AgeCategory::from_roll(roll)
}
