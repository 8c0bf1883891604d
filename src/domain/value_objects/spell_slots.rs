//! Spell-slot tracking

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Highest spell level with slots
pub const MAX_SPELL_LEVEL: u8 = 9;

/// Errors raised by slot bookkeeping
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SpellSlotError {
    #[error("spell level {0} is outside 1-9")]
    InvalidLevel(u8),

    #[error("no level {level} slot available")]
    NoSlotAvailable { level: u8 },
}

/// Tracked state for one spell level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotState {
    /// Remaining slots
    pub value: u32,
    /// Slots granted by the progression table
    pub max: u32,
    /// Manual replacement for `max` (takes precedence when set)
    #[serde(rename = "override", default, skip_serializing_if = "Option::is_none")]
    pub slot_override: Option<u32>,
}

impl SlotState {
    /// A slot level at full capacity
    pub fn full(max: u32) -> Self {
        Self {
            value: max,
            max,
            slot_override: None,
        }
    }

    /// Effective maximum, honoring the override
    pub fn effective_max(&self) -> u32 {
        self.slot_override.unwrap_or(self.max)
    }
}

/// Pact-magic slots: a single shared slot level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PactSlots {
    pub value: u32,
    pub max: u32,
    pub level: u8,
}

/// Spell slots for a creature, by spell level, plus optional pact magic
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellSlots {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    slots: BTreeMap<u8, SlotState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pact: Option<PactSlots>,
}

impl SpellSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slots for a full caster of the given class level, all available
    pub fn for_full_caster(level: u8) -> Self {
        Self {
            slots: full_caster_slots(level)
                .into_iter()
                .map(|(slot_level, count)| (slot_level, SlotState::full(count)))
                .collect(),
            pact: None,
        }
    }

    pub fn with_pact(mut self, level: u8, count: u32) -> Self {
        self.pact = Some(PactSlots {
            value: count,
            max: count,
            level,
        });
        self
    }

    pub fn slot(&self, level: u8) -> Option<&SlotState> {
        self.slots.get(&level)
    }

    pub fn pact(&self) -> Option<&PactSlots> {
        self.pact.as_ref()
    }

    /// Remaining slots at a level (0 when the level is untracked)
    pub fn available(&self, level: u8) -> u32 {
        self.slots.get(&level).map(|slot| slot.value).unwrap_or(0)
    }

    pub fn set_max(&mut self, level: u8, max: u32) -> Result<(), SpellSlotError> {
        if level == 0 || level > MAX_SPELL_LEVEL {
            return Err(SpellSlotError::InvalidLevel(level));
        }
        let slot = self.slots.entry(level).or_default();
        slot.max = max;
        slot.value = slot.value.min(slot.effective_max());
        Ok(())
    }

    /// Expend one slot at the given level
    pub fn expend(&mut self, level: u8) -> Result<(), SpellSlotError> {
        if level == 0 || level > MAX_SPELL_LEVEL {
            return Err(SpellSlotError::InvalidLevel(level));
        }
        match self.slots.get_mut(&level) {
            Some(slot) if slot.value > 0 => {
                slot.value -= 1;
                Ok(())
            }
            _ => Err(SpellSlotError::NoSlotAvailable { level }),
        }
    }

    /// Restore every slot to its effective maximum (long rest)
    pub fn restore_all(&mut self) {
        for slot in self.slots.values_mut() {
            slot.value = slot.effective_max();
        }
        if let Some(pact) = self.pact.as_mut() {
            pact.value = pact.max;
        }
    }
}

/// Full-caster slot progression (class level -> slot counts per spell level)
fn full_caster_slots(level: u8) -> Vec<(u8, u32)> {
    let table: &[(u8, &[u32])] = &[
        (1, &[2]),
        (2, &[3]),
        (3, &[4, 2]),
        (4, &[4, 3]),
        (5, &[4, 3, 2]),
        (6, &[4, 3, 3]),
        (7, &[4, 3, 3, 1]),
        (8, &[4, 3, 3, 2]),
        (9, &[4, 3, 3, 3, 1]),
        (10, &[4, 3, 3, 3, 2]),
        (11, &[4, 3, 3, 3, 2, 1]),
        (12, &[4, 3, 3, 3, 2, 1]),
        (13, &[4, 3, 3, 3, 2, 1, 1]),
        (14, &[4, 3, 3, 3, 2, 1, 1]),
        (15, &[4, 3, 3, 3, 2, 1, 1, 1]),
        (16, &[4, 3, 3, 3, 2, 1, 1, 1]),
        (17, &[4, 3, 3, 3, 2, 1, 1, 1, 1]),
        (18, &[4, 3, 3, 3, 3, 1, 1, 1, 1]),
        (19, &[4, 3, 3, 3, 3, 2, 1, 1, 1]),
        (20, &[4, 3, 3, 3, 3, 2, 2, 1, 1]),
    ];

    table
        .iter()
        .find(|(table_level, _)| *table_level == level)
        .map(|(_, counts)| {
            counts
                .iter()
                .enumerate()
                .map(|(index, &count)| ((index + 1) as u8, count))
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_caster_progression() {
        let level1 = SpellSlots::for_full_caster(1);
        assert_eq!(level1.available(1), 2);
        assert_eq!(level1.available(2), 0);

        let level5 = SpellSlots::for_full_caster(5);
        assert_eq!(level5.available(1), 4);
        assert_eq!(level5.available(2), 3);
        assert_eq!(level5.available(3), 2);

        let level20 = SpellSlots::for_full_caster(20);
        assert_eq!(level20.available(9), 1);
    }

    #[test]
    fn expend_decrements_until_exhausted() {
        let mut slots = SpellSlots::for_full_caster(1);
        assert_eq!(slots.available(1), 2);

        slots.expend(1).unwrap();
        slots.expend(1).unwrap();
        assert_eq!(slots.available(1), 0);
        assert_eq!(
            slots.expend(1),
            Err(SpellSlotError::NoSlotAvailable { level: 1 })
        );
    }

    #[test]
    fn expend_rejects_invalid_levels() {
        let mut slots = SpellSlots::for_full_caster(5);
        assert_eq!(slots.expend(0), Err(SpellSlotError::InvalidLevel(0)));
        assert_eq!(slots.expend(10), Err(SpellSlotError::InvalidLevel(10)));
    }

    #[test]
    fn restore_honors_override() {
        let mut slots = SpellSlots::for_full_caster(3);
        slots.expend(2).unwrap();

        slots.set_max(2, 2).unwrap();
        if let Some(slot) = slots.slots.get_mut(&2) {
            slot.slot_override = Some(4);
        }

        slots.restore_all();
        assert_eq!(slots.available(2), 4);
        assert_eq!(slots.available(1), 4);
    }

    #[test]
    fn pact_slots_restore_with_the_rest() {
        let mut slots = SpellSlots::new().with_pact(3, 2);
        slots.pact = slots.pact.map(|mut pact| {
            pact.value = 0;
            pact
        });

        slots.restore_all();
        assert_eq!(slots.pact().map(|pact| pact.value), Some(2));
        assert_eq!(slots.pact().map(|pact| pact.level), Some(3));
    }
}
