//! Bestiary Engine - Creature data schema and legacy document migration
//!
//! The Engine owns the structured data model for creature entities in a
//! TTRPG rules engine:
//! - Ability scores with valid ranges, skills, global bonuses
//! - Sensory capabilities and spell-slot tracking
//! - A one-time migration pass that upgrades legacy persisted creature
//!   documents (free-text sense descriptions) to the current schema

pub mod application;
pub mod domain;
pub mod infrastructure;
