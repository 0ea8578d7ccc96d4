//! Pilot modules: loadout-level equipment that occupies module slots
//! rather than component slots.

use super::location::Faction;
use super::modifier::Modifier;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModuleId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ModuleSlot {
    Consumable,
    Weapon,
    Mech,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PilotModule {
    pub id: ModuleId,
    pub name: String,
    pub slot: ModuleSlot,
    pub faction: Faction,
    pub modifiers: Vec<Modifier>,
}

impl core::fmt::Display for PilotModule {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Number of module slots of each kind a chassis provides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModuleSlots {
    pub consumable: u8,
    pub weapon: u8,
    pub mech: u8,
}

impl ModuleSlots {
    pub fn capacity(&self, slot: ModuleSlot) -> u8 {
        match slot {
            ModuleSlot::Consumable => self.consumable,
            ModuleSlot::Weapon => self.weapon,
            ModuleSlot::Mech => self.mech,
        }
    }
}
