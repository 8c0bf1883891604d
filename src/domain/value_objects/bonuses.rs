//! Global bonus formulas layered onto derived values

use serde::{Deserialize, Serialize};

/// Attack/damage bonus pair for one attack kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackBonus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attack: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<String>,
}

impl AttackBonus {
    pub fn is_empty(&self) -> bool {
        self.attack.is_none() && self.damage.is_none()
    }
}

/// Global bonuses: free-text dice formulas, absent by default
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bonuses {
    #[serde(default, skip_serializing_if = "AttackBonus::is_empty")]
    pub melee_weapon: AttackBonus,
    #[serde(default, skip_serializing_if = "AttackBonus::is_empty")]
    pub ranged_weapon: AttackBonus,
    #[serde(default, skip_serializing_if = "AttackBonus::is_empty")]
    pub melee_spell: AttackBonus,
    #[serde(default, skip_serializing_if = "AttackBonus::is_empty")]
    pub ranged_spell: AttackBonus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ability_check: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saving_throw: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spell_dc: Option<String>,
}

impl Bonuses {
    pub fn is_empty(&self) -> bool {
        self.melee_weapon.is_empty()
            && self.ranged_weapon.is_empty()
            && self.melee_spell.is_empty()
            && self.ranged_spell.is_empty()
            && self.ability_check.is_none()
            && self.saving_throw.is_none()
            && self.spell_dc.is_none()
    }
}
