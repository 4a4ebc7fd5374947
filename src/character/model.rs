//! Character data structures

use crate::character::derived::Derived;
use crate::tables::AgeCategory;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Rank of any ability the character never listed
pub const UNTRAINED_RANK: u32 = 2;

/// Ability that doubles as the player status budget
pub const STATUS: &str = "Status";

/// Treat an explicit YAML null the same as an absent value
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A listed ability: either a bare rank or a rank with specialties
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ability {
    Rank(u32),
    Trained(TrainedAbility),
}

/// Ability carrying specialties next to its rank
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainedAbility {
    #[serde(rename = "Stat")]
    pub rank: u32,
    #[serde(flatten)]
    pub specialties: BTreeMap<String, u32>,
}

impl Ability {
    #[inline]
    pub fn rank(&self) -> u32 {
        match self {
            Ability::Rank(rank) => *rank,
            Ability::Trained(trained) => trained.rank,
        }
    }

    /// Specialty `(name, rank)` pairs; empty for a bare rank
    pub fn specialties(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        let map = match self {
            Ability::Rank(_) => None,
            Ability::Trained(trained) => Some(&trained.specialties),
        };
        map.into_iter()
            .flat_map(|specialties| specialties.iter().map(|(name, rank)| (name.as_str(), *rank)))
    }
}

/// Ability name to ability, kept sorted so traces are stable
pub type Abilities = BTreeMap<String, Ability>;

/// Rank of an ability, or the untrained rank when it is not listed
#[inline]
pub fn rank_of(abilities: &Abilities, name: &str) -> u32 {
    abilities.get(name).map_or(UNTRAINED_RANK, Ability::rank)
}

/// Benefit or drawback value: a list of applications or a single description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TraitEntry {
    Applications(Vec<serde_yaml::Value>),
    Description(serde_yaml::Value),
}

impl TraitEntry {
    /// Each application of a listed trait counts once
    #[inline]
    pub fn count(&self) -> u32 {
        match self {
            TraitEntry::Applications(list) => list.len() as u32,
            TraitEntry::Description(_) => 1,
        }
    }
}

/// Count the traits in a benefit or drawback mapping
pub fn count_traits<'a>(entries: impl IntoIterator<Item = &'a TraitEntry>) -> u32 {
    entries.into_iter().map(TraitEntry::count).sum()
}

/// Drawbacks, with the abilities hampered by a Flaw listed apart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Drawbacks {
    /// Abilities evaluated one rank higher when costing them
    #[serde(
        rename = "Flaws",
        default,
        deserialize_with = "nullable",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub flaws: Vec<String>,
    #[serde(flatten)]
    pub entries: BTreeMap<String, TraitEntry>,
}

impl Drawbacks {
    /// Every flaw is itself a drawback
    pub fn count(&self) -> u32 {
        count_traits(self.entries.values()) + self.flaws.len() as u32
    }

    pub fn is_flawed(&self, ability: &str) -> bool {
        self.flaws.iter().any(|flaw| flaw == ability)
    }
}

/// Destiny points, benefits and drawbacks
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attributes {
    #[serde(rename = "Destiny Points", default)]
    pub destiny_points: i32,
    #[serde(rename = "Benefits", default, deserialize_with = "nullable")]
    pub benefits: BTreeMap<String, TraitEntry>,
    #[serde(rename = "Drawbacks", default, deserialize_with = "nullable")]
    pub drawbacks: Drawbacks,
}

impl Attributes {
    pub fn benefit_count(&self) -> u32 {
        count_traits(self.benefits.values())
    }

    pub fn drawback_count(&self) -> u32 {
        self.drawbacks.count()
    }
}

/// Flavor fields and life events
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Background {
    /// Age in years
    #[serde(rename = "Age")]
    pub age: u32,
    #[serde(rename = "Age Group", default, skip_serializing_if = "Option::is_none")]
    pub age_group: Option<String>,
    #[serde(rename = "Status", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "Goal", default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    #[serde(rename = "Motivation", default, skip_serializing_if = "Option::is_none")]
    pub motivation: Option<String>,
    #[serde(rename = "Virtue", default, skip_serializing_if = "Option::is_none")]
    pub virtue: Option<String>,
    #[serde(rename = "Vice", default, skip_serializing_if = "Option::is_none")]
    pub vice: Option<String>,
    #[serde(rename = "Events", default, deserialize_with = "nullable")]
    pub events: Vec<String>,
}

/// Armor and arms slots, carried through untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    #[serde(rename = "Armor", default)]
    pub armor: serde_yaml::Value,
    #[serde(rename = "Arms", default)]
    pub arms: serde_yaml::Value,
}

/// Spending guidance written next to a generated character
///
/// Validation ignores this block; it only tells the player what is left to
/// spend and where the rules live.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allowance {
    /// Ability points left once status has been bought
    #[serde(rename = "Ability Points", default, skip_serializing_if = "Option::is_none")]
    pub ability_points: Option<i32>,
    #[serde(rename = "Specialty Points", default, skip_serializing_if = "Option::is_none")]
    pub specialty_points: Option<i32>,
    #[serde(rename = "Experience", default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<u32>,
    #[serde(rename = "Max Benefits", default, skip_serializing_if = "Option::is_none")]
    pub max_benefits: Option<u32>,
    #[serde(rename = "Min Drawbacks", default, skip_serializing_if = "Option::is_none")]
    pub min_drawbacks: Option<u32>,
    #[serde(rename = "Max Rank", default, skip_serializing_if = "Option::is_none")]
    pub max_rank: Option<u32>,
    #[serde(rename = "Guidance", default, skip_serializing_if = "Vec::is_empty")]
    pub guidance: Vec<String>,
    /// Rulebook section to page
    #[serde(rename = "References", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub references: BTreeMap<String, String>,
}

impl Allowance {
    /// Fold another allowance in, keeping values already set
    pub fn merge(&mut self, other: Allowance) {
        self.ability_points = self.ability_points.or(other.ability_points);
        self.specialty_points = self.specialty_points.or(other.specialty_points);
        self.experience = self.experience.or(other.experience);
        self.max_benefits = self.max_benefits.or(other.max_benefits);
        self.min_drawbacks = self.min_drawbacks.or(other.min_drawbacks);
        self.max_rank = self.max_rank.or(other.max_rank);
        self.guidance.extend(other.guidance);
        for (section, page) in other.references {
            self.references.entry(section).or_insert(page);
        }
    }
}

/// One character, as generated or as read from a document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Document key, not part of the record
    #[serde(skip)]
    pub name: String,
    /// Fixed at creation from the age or the age roll
    #[serde(skip)]
    pub age_category: AgeCategory,
    #[serde(flatten)]
    pub equipment: Equipment,
    #[serde(rename = "Abilities", deserialize_with = "nullable")]
    pub abilities: Abilities,
    #[serde(rename = "Allowance", default, skip_serializing_if = "Option::is_none")]
    pub allowance: Option<Allowance>,
    #[serde(rename = "Attributes", default, deserialize_with = "nullable")]
    pub attributes: Attributes,
    /// Stored copy of the derived statistics, cross-checked on validation
    #[serde(rename = "Derived", default)]
    pub derived: Option<Derived>,
    #[serde(rename = "Background")]
    pub background: Background,
}

impl Character {
    /// Rank of an ability, defaulting to the untrained rank
    #[inline]
    pub fn rank(&self, ability: &str) -> u32 {
        rank_of(&self.abilities, ability)
    }

    #[inline]
    pub fn status(&self) -> u32 {
        self.rank(STATUS)
    }

    /// Derived statistics recomputed from the current abilities
    pub fn compute_derived(&self) -> Derived {
        Derived::from_abilities(&self.abilities)
    }

    /// Overwrite the stored derived statistics with a fresh computation
    pub fn refresh_derived(&mut self) -> Derived {
        let derived = self.compute_derived();
        self.derived = Some(derived);
        derived
    }
}
