//! Creature skills - closed vocabulary, proficiency levels, and check
//! bonus math

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::abilities::{Ability, AbilityScores};

/// Proficiency bonus for a creature level / challenge tier
pub fn proficiency_bonus(level: u8) -> i32 {
    ((level as i32 - 1) / 4) + 2
}

/// A skill in the closed vocabulary, with its governing ability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillDefinition {
    pub key: &'static str,
    pub label: &'static str,
    pub ability: Ability,
}

const fn skill(key: &'static str, label: &'static str, ability: Ability) -> SkillDefinition {
    SkillDefinition { key, label, ability }
}

/// The standard skill vocabulary
pub const SKILL_DEFINITIONS: [SkillDefinition; 18] = [
    skill("acrobatics", "Acrobatics", Ability::Dexterity),
    skill("animal_handling", "Animal Handling", Ability::Wisdom),
    skill("arcana", "Arcana", Ability::Intelligence),
    skill("athletics", "Athletics", Ability::Strength),
    skill("deception", "Deception", Ability::Charisma),
    skill("history", "History", Ability::Intelligence),
    skill("insight", "Insight", Ability::Wisdom),
    skill("intimidation", "Intimidation", Ability::Charisma),
    skill("investigation", "Investigation", Ability::Intelligence),
    skill("medicine", "Medicine", Ability::Wisdom),
    skill("nature", "Nature", Ability::Intelligence),
    skill("perception", "Perception", Ability::Wisdom),
    skill("performance", "Performance", Ability::Charisma),
    skill("persuasion", "Persuasion", Ability::Charisma),
    skill("religion", "Religion", Ability::Intelligence),
    skill("sleight_of_hand", "Sleight of Hand", Ability::Dexterity),
    skill("stealth", "Stealth", Ability::Dexterity),
    skill("survival", "Survival", Ability::Wisdom),
];

/// Look up a skill definition by key (case-insensitive)
pub fn skill_definition(key: &str) -> Option<&'static SkillDefinition> {
    let key = key.to_lowercase();
    SKILL_DEFINITIONS.iter().find(|definition| definition.key == key)
}

/// Proficiency level in a skill
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillProficiency {
    #[default]
    None,
    Half,
    Proficient,
    Expert,
}

impl SkillProficiency {
    pub fn multiplier(&self) -> f64 {
        match self {
            SkillProficiency::None => 0.0,
            SkillProficiency::Half => 0.5,
            SkillProficiency::Proficient => 1.0,
            SkillProficiency::Expert => 2.0,
        }
    }
}

/// Skill proficiencies for a creature, keyed by vocabulary key
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Skills(BTreeMap<String, SkillProficiency>);

impl Skills {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, proficiency: SkillProficiency) {
        self.0.insert(key.into().to_lowercase(), proficiency);
    }

    pub fn get(&self, key: &str) -> SkillProficiency {
        self.0.get(&key.to_lowercase()).copied().unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, SkillProficiency)> + '_ {
        self.0.iter().map(|(key, proficiency)| (key.as_str(), *proficiency))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Skill check bonus: governing ability modifier plus the scaled
    /// proficiency bonus. `None` when the key is not in the vocabulary.
    pub fn check_bonus(&self, key: &str, scores: &AbilityScores, level: u8) -> Option<i32> {
        let definition = skill_definition(key)?;
        let modifier = scores.modifier(definition.ability);
        let bonus = proficiency_bonus(level);
        Some(modifier + (bonus as f64 * self.get(key).multiplier()) as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proficiency_bonus_progression() {
        assert_eq!(proficiency_bonus(1), 2);
        assert_eq!(proficiency_bonus(4), 2);
        assert_eq!(proficiency_bonus(5), 3);
        assert_eq!(proficiency_bonus(8), 3);
        assert_eq!(proficiency_bonus(9), 4);
        assert_eq!(proficiency_bonus(13), 5);
        assert_eq!(proficiency_bonus(17), 6);
        assert_eq!(proficiency_bonus(20), 6);
    }

    #[test]
    fn vocabulary_lookup_is_case_insensitive() {
        let stealth = skill_definition("Stealth").unwrap();
        assert_eq!(stealth.ability, Ability::Dexterity);
        assert_eq!(skill_definition("athletics").unwrap().ability, Ability::Strength);
        assert!(skill_definition("basket_weaving").is_none());
    }

    #[test]
    fn check_bonus_scales_with_proficiency() {
        let scores = AbilityScores::default().with_score(Ability::Dexterity, 14);
        let mut skills = Skills::new();

        // Level 5 -> proficiency bonus 3, DEX mod 2
        assert_eq!(skills.check_bonus("stealth", &scores, 5), Some(2));

        skills.set("stealth", SkillProficiency::Half);
        assert_eq!(skills.check_bonus("stealth", &scores, 5), Some(3));

        skills.set("stealth", SkillProficiency::Proficient);
        assert_eq!(skills.check_bonus("stealth", &scores, 5), Some(5));

        skills.set("stealth", SkillProficiency::Expert);
        assert_eq!(skills.check_bonus("stealth", &scores, 5), Some(8));
    }

    #[test]
    fn unknown_skill_has_no_bonus() {
        let skills = Skills::new();
        assert_eq!(skills.check_bonus("basket_weaving", &AbilityScores::default(), 1), None);
    }
}
