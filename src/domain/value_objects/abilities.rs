//! Creature ability scores and derived modifiers

use serde::{Deserialize, Serialize};

/// The six creature abilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ability {
    #[serde(rename = "str")]
    Strength,
    #[serde(rename = "dex")]
    Dexterity,
    #[serde(rename = "con")]
    Constitution,
    #[serde(rename = "int")]
    Intelligence,
    #[serde(rename = "wis")]
    Wisdom,
    #[serde(rename = "cha")]
    Charisma,
}

impl Ability {
    pub const ALL: [Ability; 6] = [
        Ability::Strength,
        Ability::Dexterity,
        Ability::Constitution,
        Ability::Intelligence,
        Ability::Wisdom,
        Ability::Charisma,
    ];

    /// Short key used in persisted documents
    pub fn key(&self) -> &'static str {
        match self {
            Ability::Strength => "str",
            Ability::Dexterity => "dex",
            Ability::Constitution => "con",
            Ability::Intelligence => "int",
            Ability::Wisdom => "wis",
            Ability::Charisma => "cha",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Ability::Strength => "Strength",
            Ability::Dexterity => "Dexterity",
            Ability::Constitution => "Constitution",
            Ability::Intelligence => "Intelligence",
            Ability::Wisdom => "Wisdom",
            Ability::Charisma => "Charisma",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "str" => Some(Ability::Strength),
            "dex" => Some(Ability::Dexterity),
            "con" => Some(Ability::Constitution),
            "int" => Some(Ability::Intelligence),
            "wis" => Some(Ability::Wisdom),
            "cha" => Some(Ability::Charisma),
            _ => None,
        }
    }
}

impl std::fmt::Display for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Ability scores for a creature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScores {
    #[serde(rename = "str")]
    pub strength: i32,
    #[serde(rename = "dex")]
    pub dexterity: i32,
    #[serde(rename = "con")]
    pub constitution: i32,
    #[serde(rename = "int")]
    pub intelligence: i32,
    #[serde(rename = "wis")]
    pub wisdom: i32,
    #[serde(rename = "cha")]
    pub charisma: i32,
}

impl Default for AbilityScores {
    fn default() -> Self {
        Self {
            strength: 10,
            dexterity: 10,
            constitution: 10,
            intelligence: 10,
            wisdom: 10,
            charisma: 10,
        }
    }
}

impl AbilityScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_score(mut self, ability: Ability, value: i32) -> Self {
        self.set_score(ability, value);
        self
    }

    pub fn score(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Constitution => self.constitution,
            Ability::Intelligence => self.intelligence,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }

    pub fn set_score(&mut self, ability: Ability, value: i32) {
        match ability {
            Ability::Strength => self.strength = value,
            Ability::Dexterity => self.dexterity = value,
            Ability::Constitution => self.constitution = value,
            Ability::Intelligence => self.intelligence = value,
            Ability::Wisdom => self.wisdom = value,
            Ability::Charisma => self.charisma = value,
        }
    }

    /// Ability modifier: floor((score - 10) / 2)
    pub fn modifier(&self, ability: Ability) -> i32 {
        // Rust's / rounds toward zero, so handle negatives explicitly
        let diff = self.score(ability) - 10;
        if diff >= 0 {
            diff / 2
        } else {
            (diff - 1) / 2
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_uses_floor_division() {
        let scores = AbilityScores::default()
            .with_score(Ability::Strength, 1)
            .with_score(Ability::Dexterity, 8)
            .with_score(Ability::Constitution, 11)
            .with_score(Ability::Intelligence, 14)
            .with_score(Ability::Wisdom, 20)
            .with_score(Ability::Charisma, 30);

        assert_eq!(scores.modifier(Ability::Strength), -5);
        assert_eq!(scores.modifier(Ability::Dexterity), -1);
        assert_eq!(scores.modifier(Ability::Constitution), 0);
        assert_eq!(scores.modifier(Ability::Intelligence), 2);
        assert_eq!(scores.modifier(Ability::Wisdom), 5);
        assert_eq!(scores.modifier(Ability::Charisma), 10);
    }

    #[test]
    fn default_scores_have_zero_modifiers() {
        let scores = AbilityScores::default();
        for ability in Ability::ALL {
            assert_eq!(scores.score(ability), 10);
            assert_eq!(scores.modifier(ability), 0);
        }
    }

    #[test]
    fn keys_round_trip() {
        for ability in Ability::ALL {
            assert_eq!(Ability::from_key(ability.key()), Some(ability));
        }
        assert_eq!(Ability::from_key("WIS"), Some(Ability::Wisdom));
        assert_eq!(Ability::from_key("luck"), None);
    }
}
