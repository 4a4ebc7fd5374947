//! Tier policies
//!
//! Each tier decides how abilities and attributes are generated and which
//! budget the validator holds them to. The set of tiers is closed, so the
//! policy is an enum dispatched by `match`.

mod nc_tier2;
mod nc_tier3;
mod player;

pub use player::rank_cost;

use crate::character::{Abilities, Ability, Allowance, Attributes};
use crate::dice::RandomSource;
use crate::error::ChargenError;
use crate::tables::AgeCategory;
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// Multiset of ability ranks
pub type RankList = SmallVec<[u32; 8]>;

/// Rule set a character is built and checked against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Full point-buy economy
    #[default]
    PlayerCharacter,
    /// Player economy plus a rolled experience bonus
    NcTier1,
    /// Fixed rank checklist
    NcTier2,
    /// Whitelisted rank patterns
    NcTier3,
}

/// Abilities produced by a tier along with what is left to spend
#[derive(Debug, Clone, Default)]
pub struct AbilityPlan {
    pub abilities: Abilities,
    pub allowance: Allowance,
}

/// Attributes produced by a tier along with their limits
#[derive(Debug, Clone, Default)]
pub struct AttributePlan {
    pub attributes: Attributes,
    pub allowance: Allowance,
}

/// How a tier budgets ability ranks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetRules {
    /// Ranks bought from a point pool, specialties from another
    PointBuy {
        ability_points: i32,
        specialty_points: i32,
        max_rank: u32,
    },
    /// Every rank must consume one entry of a fixed multiset
    Checklist {
        ranks: RankList,
        specialty_slots: i32,
    },
    /// The full multiset of ranks must equal one of the patterns
    Patterns {
        patterns: &'static [&'static [u32]],
        specialty_slots: i32,
    },
}

/// Outcome of checking one ability's specialties
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialtyAudit {
    pub legal: bool,
    /// Points or slots taken from the specialty budget
    pub consumed: i32,
    pub lines: Vec<String>,
}

impl Default for SpecialtyAudit {
    fn default() -> Self {
        Self {
            legal: true,
            consumed: 0,
            lines: Vec::new(),
        }
    }
}

impl SpecialtyAudit {
    pub(crate) fn fail(&mut self, line: String) {
        self.legal = false;
        self.lines.push(line);
    }
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::PlayerCharacter, Tier::NcTier1, Tier::NcTier2, Tier::NcTier3];

    /// Roll status and lay out the starting abilities
    pub fn generate_abilities(
        self,
        age_category: AgeCategory,
        rng: &mut impl RandomSource,
    ) -> AbilityPlan {
        match self {
            Tier::PlayerCharacter => player::generate_abilities(age_category, rng, false),
            Tier::NcTier1 => player::generate_abilities(age_category, rng, true),
            Tier::NcTier2 => nc_tier2::generate_abilities(rng),
            Tier::NcTier3 => nc_tier3::generate_abilities(rng),
        }
    }

    /// Starting destiny points and trait limits; empty for the lower tiers
    pub fn generate_attributes(self, age_category: AgeCategory) -> AttributePlan {
        match self {
            Tier::PlayerCharacter | Tier::NcTier1 => player::generate_attributes(age_category),
            Tier::NcTier2 | Tier::NcTier3 => AttributePlan::default(),
        }
    }

    pub fn budget_rules(self, age_category: AgeCategory) -> BudgetRules {
        match self {
            Tier::PlayerCharacter | Tier::NcTier1 => player::budget_rules(age_category),
            Tier::NcTier2 => nc_tier2::budget_rules(),
            Tier::NcTier3 => nc_tier3::budget_rules(),
        }
    }

    /// Check one ability's specialties and report what they cost
    pub fn validate_ability(self, name: &str, ability: &Ability) -> SpecialtyAudit {
        match self {
            Tier::PlayerCharacter | Tier::NcTier1 => player::validate_ability(name, ability),
            Tier::NcTier2 => nc_tier2::validate_ability(name, ability),
            Tier::NcTier3 => nc_tier3::validate_ability(name, ability),
        }
    }

    /// Whether benefits, drawbacks and destiny points are budgeted
    pub fn has_attribute_economy(self) -> bool {
        matches!(self, Tier::PlayerCharacter | Tier::NcTier1)
    }

    /// Whether Flaws raise an ability's cost
    pub fn applies_flaws(self) -> bool {
        self.has_attribute_economy()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::PlayerCharacter => "player",
            Tier::NcTier1 => "nc-tier1",
            Tier::NcTier2 => "nc-tier2",
            Tier::NcTier3 => "nc-tier3",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = ChargenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "player" | "pc" | "playercharacter" => Ok(Tier::PlayerCharacter),
            "nc1" | "nctier1" | "tier1" => Ok(Tier::NcTier1),
            "nc2" | "nctier2" | "tier2" => Ok(Tier::NcTier2),
            "nc3" | "nctier3" | "tier3" => Ok(Tier::NcTier3),
            _ => Err(ChargenError::UnknownTier(s.to_string())),
        }
    }
}
