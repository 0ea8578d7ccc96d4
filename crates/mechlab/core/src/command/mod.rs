//! Edit commands and their application order.
//!
//! Every edit to a [`Loadout`] can be expressed as a [`Command`]. Commands
//! carry catalog ids rather than references so they can be produced by a
//! deserializer or a UI without borrowing the catalog, and each one either
//! applies fully or leaves the loadout untouched.
//!
//! Commands also know their [`priority`]: the stage at which
//! [`LoadoutBuilder`] applies them when rebuilding a loadout from an
//! unordered set of edits.

mod builder;
mod items;
mod layout;
mod pilot;
mod upgrades;

pub use builder::{BuildReport, CommandFault, LoadoutBuilder};
pub use items::{AddItem, RemoveItem, ToggleItem};
pub use layout::{Rename, SetArmour, SetOmniPod};
pub use pilot::{AddModule, SetWeaponGroup};
pub use upgrades::{SetArmourType, SetGuidanceType, SetHeatSinkType, SetStructureType};

use crate::catalog::Catalog;
use crate::state::{Loadout, LoadoutError};

/// Application stages; lower values are applied first.
pub mod priority {
    pub const RENAME: u8 = 0;
    pub const OMNI_POD: u8 = 5;
    /// Heat-sink absorption depends on the engine.
    pub const ENGINE: u8 = 6;
    /// ECM-dependent armour depends on the ECM.
    pub const ECM: u8 = 7;
    pub const UPGRADE: u8 = 10;
    pub const ARMOUR: u8 = 20;
    pub const MODULE: u8 = 30;
    /// Toggles change free slots, so they precede item placement.
    pub const TOGGLE: u8 = 50;
    pub const REMOVE_ITEM: u8 = 90;
    pub const ADD_ITEM: u8 = 100;
    /// Weapon ordinals only exist once every weapon is placed.
    pub const WEAPON_GROUP: u8 = 110;
}

/// Defines how a command mutates a loadout.
pub trait LoadoutCommand {
    /// Stage at which the builder applies this command.
    fn priority(&self, catalog: &Catalog) -> u8;

    /// Applies the command. On error the loadout is unchanged.
    fn apply(&self, loadout: &mut Loadout<'_>) -> Result<(), LoadoutError>;

    /// Human-readable description with catalog names resolved.
    fn describe(&self, catalog: &Catalog) -> String;
}

/// Every edit kind a loadout supports.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    Rename(Rename),
    SetOmniPod(SetOmniPod),
    SetStructureType(SetStructureType),
    SetArmourType(SetArmourType),
    SetHeatSinkType(SetHeatSinkType),
    SetGuidanceType(SetGuidanceType),
    SetArmour(SetArmour),
    AddModule(AddModule),
    ToggleItem(ToggleItem),
    RemoveItem(RemoveItem),
    AddItem(AddItem),
    SetWeaponGroup(SetWeaponGroup),
}

impl Command {
    fn inner(&self) -> &dyn LoadoutCommand {
        match self {
            Command::Rename(c) => c,
            Command::SetOmniPod(c) => c,
            Command::SetStructureType(c) => c,
            Command::SetArmourType(c) => c,
            Command::SetHeatSinkType(c) => c,
            Command::SetGuidanceType(c) => c,
            Command::SetArmour(c) => c,
            Command::AddModule(c) => c,
            Command::ToggleItem(c) => c,
            Command::RemoveItem(c) => c,
            Command::AddItem(c) => c,
            Command::SetWeaponGroup(c) => c,
        }
    }
}

impl LoadoutCommand for Command {
    fn priority(&self, catalog: &Catalog) -> u8 {
        self.inner().priority(catalog)
    }

    fn apply(&self, loadout: &mut Loadout<'_>) -> Result<(), LoadoutError> {
        self.inner().apply(loadout)
    }

    fn describe(&self, catalog: &Catalog) -> String {
        self.inner().describe(catalog)
    }
}

macro_rules! impl_from_command {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Command {
                fn from(command: $variant) -> Self {
                    Command::$variant(command)
                }
            }
        )*
    };
}

impl_from_command!(
    Rename,
    SetOmniPod,
    SetStructureType,
    SetArmourType,
    SetHeatSinkType,
    SetGuidanceType,
    SetArmour,
    AddModule,
    ToggleItem,
    RemoveItem,
    AddItem,
    SetWeaponGroup,
);
