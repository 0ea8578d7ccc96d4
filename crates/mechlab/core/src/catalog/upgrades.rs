//! Loadout-wide upgrades and their cost functions.
//!
//! Upgrades change how much structure and armour weigh, how many dynamic
//! slots they occupy chassis-wide, which heat sink is used, and what guided
//! launchers cost. Masses are always derived from totals through these cost
//! functions rather than accumulated piecewise.

use super::item::ItemId;
use super::location::Faction;

/// Catalog identifier shared by all upgrade kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpgradeId(pub u32);

impl core::fmt::Display for UpgradeId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "upgrade#{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StructureUpgrade {
    pub id: UpgradeId,
    pub name: String,
    pub faction: Faction,
    /// Fraction of the chassis mass spent on internal structure.
    pub mass_factor: f64,
    /// Slots reserved chassis-wide, not tied to a location.
    pub dynamic_slots: u8,
}

impl StructureUpgrade {
    /// Structure mass for a chassis, rounded up to the next half ton.
    pub fn structure_mass(&self, chassis_mass: f64) -> f64 {
        // The factor is a decimal fraction; shave representation error before rounding up.
        (chassis_mass * self.mass_factor * 2.0 - 1e-9).ceil() / 2.0
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmourUpgrade {
    pub id: UpgradeId,
    pub name: String,
    pub faction: Faction,
    pub points_per_ton: f64,
    pub dynamic_slots: u8,
    /// Armour that only functions alongside an installed ECM.
    pub requires_ecm: bool,
}

impl ArmourUpgrade {
    /// Mass of `points` armour points in tons.
    pub fn armour_mass(&self, points: u32) -> f64 {
        f64::from(points) / self.points_per_ton
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeatSinkUpgrade {
    pub id: UpgradeId,
    pub name: String,
    pub faction: Faction,
    /// The heat-sink item installed under this upgrade.
    pub heat_sink: ItemId,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuidanceUpgrade {
    pub id: UpgradeId,
    pub name: String,
    pub faction: Faction,
    /// Added to every guidance-capable launcher.
    pub extra_slots: u8,
    pub extra_mass: f64,
}

/// Ids of the upgrades a chassis starts with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpgradeIds {
    pub structure: UpgradeId,
    pub armour: UpgradeId,
    pub heat_sink: UpgradeId,
    pub guidance: UpgradeId,
}

/// The upgrades currently selected on a loadout.
#[derive(Clone, Copy, Debug)]
pub struct Upgrades<'c> {
    pub structure: &'c StructureUpgrade,
    pub armour: &'c ArmourUpgrade,
    pub heat_sink: &'c HeatSinkUpgrade,
    pub guidance: &'c GuidanceUpgrade,
}

impl Upgrades<'_> {
    /// Chassis-wide slots taken by structure and armour upgrades.
    pub fn dynamic_slots(&self) -> u16 {
        u16::from(self.structure.dynamic_slots) + u16::from(self.armour.dynamic_slots)
    }

    pub fn ids(&self) -> UpgradeIds {
        UpgradeIds {
            structure: self.structure.id,
            armour: self.armour.id,
            heat_sink: self.heat_sink.id,
            guidance: self.guidance.id,
        }
    }
}

impl PartialEq for Upgrades<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.ids() == other.ids()
    }
}
