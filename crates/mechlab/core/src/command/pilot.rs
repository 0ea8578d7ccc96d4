//! Pilot module and weapon group commands.

use crate::catalog::{Catalog, ModuleId};
use crate::state::{Loadout, LoadoutError};

use super::{LoadoutCommand, priority};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AddModule {
    pub module: ModuleId,
}

impl AddModule {
    pub fn new(module: ModuleId) -> Self {
        Self { module }
    }
}

impl LoadoutCommand for AddModule {
    fn priority(&self, _catalog: &Catalog) -> u8 {
        priority::MODULE
    }

    fn apply(&self, loadout: &mut Loadout<'_>) -> Result<(), LoadoutError> {
        let module = loadout.catalog().module(self.module)?;
        loadout.add_module(module)
    }

    fn describe(&self, catalog: &Catalog) -> String {
        match catalog.module(self.module) {
            Ok(module) => format!("add module {module}"),
            Err(_) => format!("add module {:?}", self.module),
        }
    }
}

/// Puts a weapon, addressed by ordinal, into or out of a weapon group.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SetWeaponGroup {
    pub group: usize,
    pub weapon: usize,
    pub enabled: bool,
}

impl SetWeaponGroup {
    pub fn new(group: usize, weapon: usize, enabled: bool) -> Self {
        Self {
            group,
            weapon,
            enabled,
        }
    }
}

impl LoadoutCommand for SetWeaponGroup {
    fn priority(&self, _catalog: &Catalog) -> u8 {
        priority::WEAPON_GROUP
    }

    fn apply(&self, loadout: &mut Loadout<'_>) -> Result<(), LoadoutError> {
        loadout.set_weapon_group(self.group, self.weapon, self.enabled)
    }

    fn describe(&self, _catalog: &Catalog) -> String {
        let (verb, preposition) = if self.enabled {
            ("add", "to")
        } else {
            ("remove", "from")
        };
        format!(
            "{verb} weapon {} {preposition} group {}",
            self.weapon,
            self.group + 1
        )
    }
}
