//! Item placement commands.

use crate::catalog::{Catalog, ItemId, Location};
use crate::state::{Loadout, LoadoutError};

use super::{LoadoutCommand, priority};

fn item_name(catalog: &Catalog, id: ItemId) -> String {
    catalog
        .item(id)
        .map_or_else(|_| id.to_string(), |item| item.name.clone())
}

/// Adds an item, at a given location or wherever the loadout accepts it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AddItem {
    pub item: ItemId,
    pub location: Option<Location>,
}

impl AddItem {
    pub fn new(item: ItemId, location: Option<Location>) -> Self {
        Self { item, location }
    }
}

impl LoadoutCommand for AddItem {
    /// Engines and ECMs are placed before anything that depends on them.
    fn priority(&self, catalog: &Catalog) -> u8 {
        match catalog.item(self.item) {
            Ok(item) if item.is_engine() => priority::ENGINE,
            Ok(item) if item.is_ecm() => priority::ECM,
            _ => priority::ADD_ITEM,
        }
    }

    fn apply(&self, loadout: &mut Loadout<'_>) -> Result<(), LoadoutError> {
        let item = loadout.catalog().item(self.item)?;
        loadout.add_item(item, self.location)?;
        Ok(())
    }

    fn describe(&self, catalog: &Catalog) -> String {
        let name = item_name(catalog, self.item);
        match self.location {
            Some(location) => format!("add {name} to {location}"),
            None => format!("add {name}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RemoveItem {
    pub location: Location,
    pub item: ItemId,
}

impl RemoveItem {
    pub fn new(location: Location, item: ItemId) -> Self {
        Self { location, item }
    }
}

impl LoadoutCommand for RemoveItem {
    fn priority(&self, _catalog: &Catalog) -> u8 {
        priority::REMOVE_ITEM
    }

    fn apply(&self, loadout: &mut Loadout<'_>) -> Result<(), LoadoutError> {
        let item = loadout.catalog().item(self.item)?;
        loadout.remove_item(self.location, item)?;
        Ok(())
    }

    fn describe(&self, catalog: &Catalog) -> String {
        format!(
            "remove {} from {}",
            item_name(catalog, self.item),
            self.location
        )
    }
}

/// Switches an omni-pod actuator on or off.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToggleItem {
    pub location: Location,
    pub item: ItemId,
    pub enabled: bool,
}

impl ToggleItem {
    pub fn new(location: Location, item: ItemId, enabled: bool) -> Self {
        Self {
            location,
            item,
            enabled,
        }
    }
}

impl LoadoutCommand for ToggleItem {
    fn priority(&self, _catalog: &Catalog) -> u8 {
        priority::TOGGLE
    }

    fn apply(&self, loadout: &mut Loadout<'_>) -> Result<(), LoadoutError> {
        let item = loadout.catalog().item(self.item)?;
        loadout.toggle(self.location, item, self.enabled)
    }

    fn describe(&self, catalog: &Catalog) -> String {
        let state = if self.enabled { "on" } else { "off" };
        format!(
            "turn {} {state} on {}",
            item_name(catalog, self.item),
            self.location
        )
    }
}
