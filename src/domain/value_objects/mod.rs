//! Value objects - Immutable objects defined by their attributes

mod abilities;
mod bonuses;
mod ids;
mod senses;
mod skills;
mod spell_slots;

pub use abilities::{Ability, AbilityScores};
pub use bonuses::{AttackBonus, Bonuses};
pub use ids::*;
pub use senses::{round_to_half, SenseTypes, Senses, DEFAULT_SENSE_UNITS};
pub use skills::{
    proficiency_bonus, skill_definition, SkillDefinition, SkillProficiency, Skills,
    SKILL_DEFINITIONS,
};
pub use spell_slots::{PactSlots, SlotState, SpellSlotError, SpellSlots, MAX_SPELL_LEVEL};
