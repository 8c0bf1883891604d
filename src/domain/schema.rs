//! Declarative creature schema - field ranges and the validation pass
//!
//! The range declarations are configuration over the validation pass below.
//! `validate_creature` reports violations without mutating or panicking;
//! callers decide whether to reject, clamp, or log.

use crate::domain::entities::Creature;
use crate::domain::value_objects::{round_to_half, skill_definition, Ability, MAX_SPELL_LEVEL};

/// Valid range for a numeric field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRange {
    pub min: i32,
    pub max: i32,
    pub default: i32,
}

impl FieldRange {
    pub const fn new(min: i32, max: i32, default: i32) -> Self {
        Self { min, max, default }
    }

    pub fn contains(&self, value: i32) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(self.min, self.max)
    }
}

/// Ability scores run 1-30 with a default of 10
pub const ABILITY_RANGE: FieldRange = FieldRange::new(1, 30, 10);

/// Armor class
pub const ARMOR_CLASS_RANGE: FieldRange = FieldRange::new(1, 30, 10);

/// Creature level / challenge tier driving the proficiency bonus
pub const LEVEL_RANGE: FieldRange = FieldRange::new(1, 30, 1);

/// A single schema violation, reported rather than raised
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    pub field: String,
    pub message: String,
}

impl SchemaViolation {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a creature against the schema, returning every violation
pub fn validate_creature(creature: &Creature) -> Vec<SchemaViolation> {
    let mut violations = Vec::new();

    if creature.name.trim().is_empty() {
        violations.push(SchemaViolation::new("name", "name is required"));
    }

    for ability in Ability::ALL {
        let score = creature.abilities.score(ability);
        if !ABILITY_RANGE.contains(score) {
            violations.push(SchemaViolation::new(
                format!("abilities.{}", ability.key()),
                format!(
                    "score {} outside {}-{}",
                    score, ABILITY_RANGE.min, ABILITY_RANGE.max
                ),
            ));
        }
    }

    if !LEVEL_RANGE.contains(creature.level as i32) {
        violations.push(SchemaViolation::new(
            "level",
            format!(
                "level {} outside {}-{}",
                creature.level, LEVEL_RANGE.min, LEVEL_RANGE.max
            ),
        ));
    }

    if !ARMOR_CLASS_RANGE.contains(creature.attributes.ac) {
        violations.push(SchemaViolation::new(
            "attributes.ac",
            format!(
                "armor class {} outside {}-{}",
                creature.attributes.ac, ARMOR_CLASS_RANGE.min, ARMOR_CLASS_RANGE.max
            ),
        ));
    }

    let hp = &creature.attributes.hp;
    if hp.max < 0 || hp.value < 0 || hp.temp < 0 {
        violations.push(SchemaViolation::new(
            "attributes.hp",
            "hit points cannot be negative",
        ));
    }
    if hp.value > hp.max {
        violations.push(SchemaViolation::new(
            "attributes.hp",
            format!("current {} exceeds max {}", hp.value, hp.max),
        ));
    }

    for (key, range) in creature.attributes.senses.entries() {
        if range < 0.0 {
            violations.push(SchemaViolation::new(
                format!("attributes.senses.{}", key),
                "sense range cannot be negative",
            ));
        } else if round_to_half(range) != range {
            violations.push(SchemaViolation::new(
                format!("attributes.senses.{}", key),
                format!("range {} is not a half-unit value", range),
            ));
        }
    }

    for (key, _) in creature.skills.iter() {
        if skill_definition(key).is_none() {
            violations.push(SchemaViolation::new(
                format!("skills.{}", key),
                "unknown skill",
            ));
        }
    }

    for level in 1..=MAX_SPELL_LEVEL {
        if let Some(slot) = creature.spells.slot(level) {
            if slot.value > slot.effective_max() {
                violations.push(SchemaViolation::new(
                    format!("spells.{}", level),
                    format!(
                        "{} slots available but only {} granted",
                        slot.value,
                        slot.effective_max()
                    ),
                ));
            }
        }
    }

    violations
}
