//! Name, omni-pod and armour commands.

use crate::catalog::{ArmourSide, Catalog, Location, OmniPodId};
use crate::state::{Loadout, LoadoutError};

use super::{LoadoutCommand, priority};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rename {
    pub name: String,
}

impl Rename {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl LoadoutCommand for Rename {
    fn priority(&self, _catalog: &Catalog) -> u8 {
        priority::RENAME
    }

    fn apply(&self, loadout: &mut Loadout<'_>) -> Result<(), LoadoutError> {
        loadout.rename(self.name.clone());
        Ok(())
    }

    fn describe(&self, _catalog: &Catalog) -> String {
        format!("rename to '{}'", self.name)
    }
}

/// Selects an omni pod; the pod's location is implied.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SetOmniPod {
    pub pod: OmniPodId,
}

impl SetOmniPod {
    pub fn new(pod: OmniPodId) -> Self {
        Self { pod }
    }
}

impl LoadoutCommand for SetOmniPod {
    fn priority(&self, _catalog: &Catalog) -> u8 {
        priority::OMNI_POD
    }

    fn apply(&self, loadout: &mut Loadout<'_>) -> Result<(), LoadoutError> {
        let pod = loadout.catalog().omni_pod(self.pod)?;
        loadout.set_omni_pod(pod)
    }

    fn describe(&self, catalog: &Catalog) -> String {
        match catalog.omni_pod(self.pod) {
            Ok(pod) => format!("set {} pod to {}", pod.location, pod.name),
            Err(_) => format!("set omni pod {:?}", self.pod),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SetArmour {
    pub location: Location,
    pub side: ArmourSide,
    pub amount: u16,
    pub manual: bool,
}

impl SetArmour {
    pub fn new(location: Location, side: ArmourSide, amount: u16, manual: bool) -> Self {
        Self {
            location,
            side,
            amount,
            manual,
        }
    }
}

impl LoadoutCommand for SetArmour {
    fn priority(&self, _catalog: &Catalog) -> u8 {
        priority::ARMOUR
    }

    fn apply(&self, loadout: &mut Loadout<'_>) -> Result<(), LoadoutError> {
        loadout.set_armour(self.location, self.side, self.amount, self.manual)
    }

    fn describe(&self, _catalog: &Catalog) -> String {
        format!(
            "set {} {} armour to {}",
            self.location, self.side, self.amount
        )
    }
}
