//! Derived statistics, a pure function of ability ranks

use crate::character::model::{rank_of, Abilities};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Combat and intrigue defenses, health and composure
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Derived {
    #[serde(rename = "Combat Defense")]
    pub combat_defense: u32,
    #[serde(rename = "Health")]
    pub health: u32,
    #[serde(rename = "Intrigue Defense")]
    pub intrigue_defense: u32,
    #[serde(rename = "Composure", alias = "Composture")]
    pub composure: u32,
}

impl Derived {
    /// Unlisted abilities count at the untrained rank; sums saturate
    pub fn from_abilities(abilities: &Abilities) -> Self {
        let rank = |name: &str| rank_of(abilities, name);
        let sum = |names: [&str; 3]| {
            names
                .into_iter()
                .fold(0u32, |total, name| total.saturating_add(rank(name)))
        };
        Self {
            combat_defense: sum(["Agility", "Athletics", "Awareness"]),
            health: rank("Endurance").saturating_mul(3),
            intrigue_defense: sum(["Cunning", "Status", "Awareness"]),
            composure: rank("Will").saturating_mul(3),
        }
    }
}

impl fmt::Display for Derived {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Combat Defense {}, Health {}, Intrigue Defense {}, Composure {}",
            self.combat_defense, self.health, self.intrigue_defense, self.composure
        )
    }
}
