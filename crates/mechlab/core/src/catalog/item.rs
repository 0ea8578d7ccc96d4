//! Item definitions.
//!
//! # Design: Base + Kind Pattern
//!
//! - [`Item`] holds the fields every item has (mass, slots, hardpoint, caps)
//! - [`ItemKind`] holds kind-specific data (engine rating, large bore, ...)
//!
//! Items live in the [`Catalog`](super::Catalog) and are only ever referenced
//! by loadouts, never copied or mutated.

use super::location::{Faction, HardPointType, Location};
use super::modifier::Modifier;
use super::upgrades::{GuidanceUpgrade, Upgrades};
use crate::config::RulesConfig;

/// Catalog identifier of an item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(pub u32);

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

/// Immutable catalog entry for anything that can occupy a slot.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    /// Mass in tons.
    pub mass: f64,
    pub slots: u8,
    pub faction: Faction,
    /// Hardpoint consumed by this item, if any.
    pub hardpoint: Option<HardPointType>,
    /// Locations this item may be installed in; `None` means anywhere.
    pub allowed_locations: Option<Vec<Location>>,
    /// Maximum number of this exact item per loadout.
    pub max_per_loadout: Option<u8>,
    pub modifiers: Vec<Modifier>,
    pub kind: ItemKind,
}

/// Item type with type-specific data.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    Weapon(WeaponData),
    Ammunition,
    Engine(EngineData),
    HeatSink,
    JumpJet(JumpJetData),
    Ecm,
    Case,
    /// Structural part placed by the chassis or by another item, never by a user.
    Internal(InternalKind),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponData {
    /// Large-bore weapons cannot share an omni arm with lower-arm or hand actuators.
    pub large_bore: bool,
    /// Launchers that take the extra slots and mass of a guidance upgrade.
    pub guidance_capable: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EngineType {
    Standard,
    Xl,
    Light,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineData {
    pub engine_type: EngineType,
    pub rating: u16,
    /// Internal part placed in both side torsos while this engine is installed.
    pub side_internal: Option<ItemId>,
}

impl EngineData {
    /// Heat sinks built into the engine itself; they are not items.
    pub fn internal_heat_sinks(&self) -> u16 {
        (self.rating / RulesConfig::ENGINE_RATING_PER_HEAT_SINK)
            .min(RulesConfig::ENGINE_INTERNAL_HEAT_SINKS)
    }

    /// Number of additional heat sinks the engine can absorb at no slot cost.
    pub fn heat_sink_slots(&self) -> u16 {
        (self.rating / RulesConfig::ENGINE_RATING_PER_HEAT_SINK)
            .saturating_sub(RulesConfig::ENGINE_INTERNAL_HEAT_SINKS)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JumpJetData {
    /// Inclusive chassis mass range (tons) this jump jet is rated for.
    pub min_chassis_mass: f64,
    pub max_chassis_mass: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum InternalKind {
    Actuator(Actuator),
    Cockpit,
    Sensors,
    LifeSupport,
    Gyro,
    /// Side part of an XL or light engine.
    EngineSide,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Actuator {
    Shoulder,
    UpperArm,
    LowerArm,
    Hand,
    Hip,
    UpperLeg,
    LowerLeg,
    Foot,
}

impl Item {
    pub fn engine(&self) -> Option<&EngineData> {
        match &self.kind {
            ItemKind::Engine(engine) => Some(engine),
            _ => None,
        }
    }

    pub fn is_engine(&self) -> bool {
        matches!(self.kind, ItemKind::Engine(_))
    }

    pub fn is_heat_sink(&self) -> bool {
        matches!(self.kind, ItemKind::HeatSink)
    }

    pub fn is_jump_jet(&self) -> bool {
        matches!(self.kind, ItemKind::JumpJet(_))
    }

    pub fn is_ecm(&self) -> bool {
        matches!(self.kind, ItemKind::Ecm)
    }

    pub fn is_case(&self) -> bool {
        matches!(self.kind, ItemKind::Case)
    }

    pub fn is_weapon(&self) -> bool {
        matches!(self.kind, ItemKind::Weapon(_))
    }

    pub fn is_internal(&self) -> bool {
        matches!(self.kind, ItemKind::Internal(_))
    }

    pub fn is_large_bore(&self) -> bool {
        matches!(self.kind, ItemKind::Weapon(WeaponData { large_bore: true, .. }))
    }

    pub fn actuator(&self) -> Option<Actuator> {
        match self.kind {
            ItemKind::Internal(InternalKind::Actuator(actuator)) => Some(actuator),
            _ => None,
        }
    }

    fn takes_guidance(&self) -> bool {
        matches!(
            self.kind,
            ItemKind::Weapon(WeaponData {
                guidance_capable: true,
                ..
            })
        )
    }

    /// Whether the catalog allows this item in `location`.
    pub fn is_allowed_in(&self, location: Location) -> bool {
        self.allowed_locations
            .as_ref()
            .is_none_or(|locations| locations.contains(&location))
    }

    /// Slot cost once the selected guidance upgrade is applied.
    pub fn slots_with(&self, guidance: &GuidanceUpgrade) -> u16 {
        let extra = if self.takes_guidance() {
            guidance.extra_slots
        } else {
            0
        };
        u16::from(self.slots) + u16::from(extra)
    }

    /// Mass once the selected guidance upgrade is applied.
    pub fn mass_with(&self, guidance: &GuidanceUpgrade) -> f64 {
        if self.takes_guidance() {
            self.mass + guidance.extra_mass
        } else {
            self.mass
        }
    }

    /// Tech compatibility against the loadout's current upgrades.
    ///
    /// Heat sinks must be the item selected by the heat-sink upgrade, and
    /// guided launchers must share a technology base with the guidance upgrade.
    pub fn is_compatible(&self, upgrades: &Upgrades<'_>) -> bool {
        if self.is_heat_sink() {
            return self.id == upgrades.heat_sink.heat_sink;
        }
        if self.takes_guidance() {
            return self.faction.is_compatible(&upgrades.guidance.faction);
        }
        true
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(rating: u16) -> EngineData {
        EngineData {
            engine_type: EngineType::Standard,
            rating,
            side_internal: None,
        }
    }

    #[test]
    fn small_engines_have_no_heat_sink_slots() {
        assert_eq!(engine(200).internal_heat_sinks(), 8);
        assert_eq!(engine(200).heat_sink_slots(), 0);
        assert_eq!(engine(250).heat_sink_slots(), 0);
    }

    #[test]
    fn large_engines_absorb_extra_heat_sinks() {
        assert_eq!(engine(300).internal_heat_sinks(), 10);
        assert_eq!(engine(300).heat_sink_slots(), 2);
        assert_eq!(engine(400).heat_sink_slots(), 6);
    }
}
