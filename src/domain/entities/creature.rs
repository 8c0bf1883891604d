//! Creature entity - statted game entities with structured sense data

use serde::{Deserialize, Serialize};

use crate::domain::schema::{self, SchemaViolation, ARMOR_CLASS_RANGE};
use crate::domain::value_objects::{
    AbilityScores, Bonuses, CreatureId, Senses, SkillProficiency, Skills, SpellSlots, WorldId,
};

/// Creature type classification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreatureKind {
    Aberration,
    #[default]
    Beast,
    Celestial,
    Construct,
    Dragon,
    Elemental,
    Fey,
    Fiend,
    Giant,
    Humanoid,
    Monstrosity,
    Ooze,
    Plant,
    Undead,
}

/// Creature size category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Tiny,
    Small,
    #[default]
    Medium,
    Large,
    Huge,
    Gargantuan,
}

/// Hit point pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitPoints {
    pub value: i32,
    pub max: i32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub temp: i32,
}

fn is_zero(value: &i32) -> bool {
    *value == 0
}

impl Default for HitPoints {
    fn default() -> Self {
        Self::new(1)
    }
}

impl HitPoints {
    /// A full pool of the given size
    pub fn new(max: i32) -> Self {
        Self {
            value: max,
            max,
            temp: 0,
        }
    }
}

/// Movement speeds, in `units` per round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    pub walk: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fly: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swim: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub climb: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub burrow: Option<f64>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub hover: bool,
    #[serde(default = "default_movement_units")]
    pub units: String,
}

fn default_movement_units() -> String {
    "ft".to_string()
}

impl Default for Movement {
    fn default() -> Self {
        Self {
            walk: 30.0,
            fly: None,
            swim: None,
            climb: None,
            burrow: None,
            hover: false,
            units: default_movement_units(),
        }
    }
}

/// Derived and tracked attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureAttributes {
    #[serde(default)]
    pub hp: HitPoints,
    #[serde(default = "default_armor_class")]
    pub ac: i32,
    #[serde(default)]
    pub movement: Movement,
    #[serde(default)]
    pub senses: Senses,
}

fn default_armor_class() -> i32 {
    ARMOR_CLASS_RANGE.default
}

impl Default for CreatureAttributes {
    fn default() -> Self {
        Self {
            hp: HitPoints::default(),
            ac: default_armor_class(),
            movement: Movement::default(),
            senses: Senses::default(),
        }
    }
}

/// Trait block, including the legacy free-text sense slot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatureTraits {
    #[serde(default)]
    pub size: Size,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<String>,
    /// Legacy free-text senses; read once by the migration pass and left
    /// in place for the caller to clean up
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub senses: Option<String>,
}

/// A creature in a world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    #[serde(default)]
    pub id: CreatureId,
    #[serde(default)]
    pub world_id: WorldId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub kind: CreatureKind,
    /// Challenge tier driving the proficiency bonus
    #[serde(default = "default_level")]
    pub level: u8,
    #[serde(default)]
    pub abilities: AbilityScores,
    #[serde(default)]
    pub attributes: CreatureAttributes,
    #[serde(default, skip_serializing_if = "Skills::is_empty")]
    pub skills: Skills,
    #[serde(default, skip_serializing_if = "Bonuses::is_empty")]
    pub bonuses: Bonuses,
    #[serde(default)]
    pub spells: SpellSlots,
    #[serde(default)]
    pub traits: CreatureTraits,
}

fn default_level() -> u8 {
    1
}

impl Default for Creature {
    fn default() -> Self {
        Self::new(WorldId::new(), String::new(), CreatureKind::default())
    }
}

impl Creature {
    pub fn new(world_id: WorldId, name: impl Into<String>, kind: CreatureKind) -> Self {
        Self {
            id: CreatureId::new(),
            world_id,
            name: name.into(),
            kind,
            level: default_level(),
            abilities: AbilityScores::default(),
            attributes: CreatureAttributes::default(),
            skills: Skills::default(),
            bonuses: Bonuses::default(),
            spells: SpellSlots::default(),
            traits: CreatureTraits::default(),
        }
    }

    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    pub fn with_abilities(mut self, abilities: AbilityScores) -> Self {
        self.abilities = abilities;
        self
    }

    pub fn with_hit_points(mut self, max: i32) -> Self {
        self.attributes.hp = HitPoints::new(max);
        self
    }

    pub fn with_armor_class(mut self, ac: i32) -> Self {
        self.attributes.ac = ac;
        self
    }

    pub fn with_skill(mut self, key: impl Into<String>, proficiency: SkillProficiency) -> Self {
        self.skills.set(key, proficiency);
        self
    }

    pub fn with_spell_slots(mut self, spells: SpellSlots) -> Self {
        self.spells = spells;
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.traits.size = size;
        self
    }

    /// Validate against the creature schema
    pub fn validate(&self) -> Vec<SchemaViolation> {
        schema::validate_creature(self)
    }

    /// Deserialize from a persisted creature document body
    pub fn from_document(data: &serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(data.clone())
    }

    /// Serialize to the persisted document layout
    pub fn to_document(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schema::ABILITY_RANGE;
    use crate::domain::value_objects::Ability;

    #[test]
    fn builder_populates_defaults() {
        let creature = Creature::new(WorldId::new(), "Basilisk", CreatureKind::Monstrosity)
            .with_level(3)
            .with_hit_points(52)
            .with_armor_class(15)
            .with_skill("perception", SkillProficiency::Proficient)
            .with_size(Size::Medium);

        assert_eq!(creature.name, "Basilisk");
        assert_eq!(creature.level, 3);
        assert_eq!(creature.attributes.hp.value, 52);
        assert_eq!(creature.attributes.ac, 15);
        assert_eq!(creature.abilities.score(Ability::Strength), ABILITY_RANGE.default);
        assert!(creature.validate().is_empty());
    }

    #[test]
    fn document_layout_nests_senses_under_attributes() {
        let mut creature = Creature::new(WorldId::new(), "Owlbear", CreatureKind::Monstrosity);
        creature.attributes.senses.set_range("darkvision", 60.0);

        let document = creature.to_document().unwrap();
        assert_eq!(
            document
                .pointer("/attributes/senses/darkvision")
                .and_then(|v| v.as_f64()),
            Some(60.0)
        );
        assert_eq!(
            document.pointer("/attributes/senses/units").and_then(|v| v.as_str()),
            Some("ft")
        );
    }

    #[test]
    fn legacy_trait_senses_survive_round_trip() {
        let mut creature = Creature::new(WorldId::new(), "Ghoul", CreatureKind::Undead);
        creature.traits.senses = Some("Darkvision 60 ft".to_string());

        let document = creature.to_document().unwrap();
        assert_eq!(
            document.pointer("/traits/senses").and_then(|v| v.as_str()),
            Some("Darkvision 60 ft")
        );

        let restored = Creature::from_document(&document).unwrap();
        assert_eq!(restored, creature);
    }

    #[test]
    fn partial_document_deserializes_with_defaults() {
        let document = serde_json::json!({
            "name": "Wolf",
            "kind": "beast",
        });

        let creature = Creature::from_document(&document).unwrap();
        assert_eq!(creature.name, "Wolf");
        assert_eq!(creature.kind, CreatureKind::Beast);
        assert_eq!(creature.level, 1);
        assert_eq!(creature.attributes.movement.walk, 30.0);
        assert!(creature.traits.senses.is_none());
    }
}
