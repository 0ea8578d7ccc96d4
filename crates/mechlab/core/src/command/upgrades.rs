//! Upgrade selection commands.

use crate::catalog::{Catalog, UpgradeId};
use crate::state::{Loadout, LoadoutError};

use super::{LoadoutCommand, priority};

macro_rules! upgrade_command {
    ($(#[$meta:meta])* $name:ident, $lookup:ident, $setter:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name {
            pub upgrade: UpgradeId,
        }

        impl $name {
            pub fn new(upgrade: UpgradeId) -> Self {
                Self { upgrade }
            }
        }

        impl LoadoutCommand for $name {
            fn priority(&self, _catalog: &Catalog) -> u8 {
                priority::UPGRADE
            }

            fn apply(&self, loadout: &mut Loadout<'_>) -> Result<(), LoadoutError> {
                let upgrade = loadout.catalog().$lookup(self.upgrade)?;
                loadout.$setter(upgrade)
            }

            fn describe(&self, catalog: &Catalog) -> String {
                let name = catalog
                    .$lookup(self.upgrade)
                    .map_or_else(|_| self.upgrade.to_string(), |u| u.name.clone());
                format!(concat!("set ", $label, " to {}"), name)
            }
        }
    };
}

upgrade_command!(SetStructureType, structure, set_structure, "structure");
upgrade_command!(SetArmourType, armour, set_armour_type, "armour type");
upgrade_command!(
    /// Swaps the heat-sink type, replacing every installed heat sink.
    SetHeatSinkType,
    heat_sink,
    set_heat_sink_type,
    "heat sinks"
);
upgrade_command!(SetGuidanceType, guidance, set_guidance, "guidance");
