//! Loadout rules for configurable mechs.
//!
//! `mechlab-core` decides whether an item, upgrade, armour value or omni pod
//! can be fitted to a chassis and explains why not. The crate is pure
//! in-memory logic over an immutable [`Catalog`]:
//!
//! - [`ConfiguredComponent`] enforces the rules of a single location
//! - [`Loadout`] enforces chassis-wide budgets on top of them
//! - every query answers with an [`EquipResult`]
//! - [`LoadoutBuilder`] replays an unordered set of [`Command`]s in a safe order
pub mod catalog;
pub mod command;
pub mod config;
pub mod equip;
pub mod error;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;

pub use catalog::{
    ArmourSide, Catalog, CatalogBuilder, CatalogError, Chassis, ChassisId, Faction,
    HardPointType, Item, ItemId, ItemKind, Location, ModifierStack, ModuleId, OmniPodId,
    UpgradeId,
};
pub use command::{BuildReport, Command, CommandFault, LoadoutBuilder, LoadoutCommand};
pub use config::RulesConfig;
pub use equip::{EquipResult, EquipResultKind};
pub use error::{ErrorSeverity, MechlabError};
pub use state::{
    Admission, ConfiguredComponent, EquipPermit, ItemIndex, Loadout, LoadoutError, WeaponGroups,
};
