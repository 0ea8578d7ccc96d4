//! Chassis, component and omni-pod definitions.

use super::item::{Item, ItemId, ItemKind};
use super::location::{ChassisClass, Faction, HardPointType, Location};
use super::modifier::Modifier;
use super::module::ModuleSlots;
use super::upgrades::UpgradeIds;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChassisId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OmniPodId(pub u32);

/// Static description of one location of a chassis.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComponentDef {
    pub location: Location,
    pub slots: u8,
    /// Maximum armour; for torsos this is the combined front + back maximum.
    pub max_armour: u16,
    /// Items permanently installed (actuators, cockpit, fixed engines, ...).
    pub fixed_items: Vec<ItemId>,
    /// Hardpoints of a standard chassis; omni chassis take them from pods.
    pub hardpoints: Vec<HardPointType>,
}

impl ComponentDef {
    pub fn hardpoint_count(&self, kind: HardPointType) -> usize {
        count_hardpoints(&self.hardpoints, kind)
    }
}

pub(crate) fn count_hardpoints(hardpoints: &[HardPointType], kind: HardPointType) -> usize {
    hardpoints.iter().filter(|&&h| h == kind).count()
}

/// Swappable section of an omni chassis, selected per location.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OmniPod {
    pub id: OmniPodId,
    pub name: String,
    /// Chassis series this pod fits (pods are interchangeable within a series).
    pub series: String,
    pub location: Location,
    pub hardpoints: Vec<HardPointType>,
    /// Jump jets this pod contributes to the loadout allowance.
    pub max_jump_jets: u8,
    /// Actuators the pilot may switch on and off (lower arm, hand).
    pub toggleable: Vec<ItemId>,
    pub quirks: Vec<Modifier>,
}

impl OmniPod {
    pub fn hardpoint_count(&self, kind: HardPointType) -> usize {
        count_hardpoints(&self.hardpoints, kind)
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChassisVariant {
    /// Free engine and upgrade choice; hardpoints fixed per location.
    Standard,
    /// Fixed engine and upgrades; hardpoints, jump jets and actuators come
    /// from the omni pod selected for each location.
    Omni { default_pods: Vec<OmniPodId> },
}

/// Immutable catalog entry for a chassis.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chassis {
    pub id: ChassisId,
    pub name: String,
    pub series: String,
    pub faction: Faction,
    /// Mass budget in tons.
    pub mass_max: f64,
    pub engine_min: u16,
    pub engine_max: u16,
    /// Jump-jet allowance of a standard chassis.
    pub max_jump_jets: u8,
    /// One definition per location.
    pub components: Vec<ComponentDef>,
    pub module_slots: ModuleSlots,
    pub quirks: Vec<Modifier>,
    pub default_upgrades: UpgradeIds,
    pub variant: ChassisVariant,
}

impl Chassis {
    pub fn class(&self) -> ChassisClass {
        ChassisClass::from_mass(self.mass_max)
    }

    pub fn is_omni(&self) -> bool {
        matches!(self.variant, ChassisVariant::Omni { .. })
    }

    pub fn component(&self, location: Location) -> Option<&ComponentDef> {
        self.components.iter().find(|c| c.location == location)
    }

    pub fn total_slots(&self) -> u16 {
        self.components.iter().map(|c| u16::from(c.slots)).sum()
    }

    pub fn default_pod(&self, location: Location) -> Option<OmniPodId> {
        match &self.variant {
            ChassisVariant::Standard => None,
            ChassisVariant::Omni { default_pods } => default_pods.get(location.index()).copied(),
        }
    }

    /// Whether this chassis can carry `item` at all, regardless of loadout state.
    pub fn is_allowed(&self, item: &Item) -> bool {
        if !item.faction.is_compatible(&self.faction) {
            return false;
        }
        match &item.kind {
            ItemKind::Internal(_) => false,
            ItemKind::Engine(engine) => {
                !self.is_omni() && (self.engine_min..=self.engine_max).contains(&engine.rating)
            }
            ItemKind::JumpJet(jj) => {
                self.mass_max >= jj.min_chassis_mass && self.mass_max <= jj.max_chassis_mass
            }
            _ => true,
        }
    }
}
