//! Immutable game data.
//!
//! The [`Catalog`] bundles every chassis, item, omni pod, upgrade and pilot
//! module of one game-data version. It is constructed explicitly through
//! [`CatalogBuilder`], which validates all cross references once, and is then
//! shared by reference: loadouts borrow their definitions from it for their
//! whole lifetime. There is no global catalog.
mod chassis;
mod error;
mod item;
mod location;
mod modifier;
mod module;
mod upgrades;

pub use chassis::{Chassis, ChassisId, ChassisVariant, ComponentDef, OmniPod, OmniPodId};
pub use error::CatalogError;
pub use item::{
    Actuator, EngineData, EngineType, InternalKind, Item, ItemId, ItemKind, JumpJetData,
    WeaponData,
};
pub use location::{ArmourSide, ChassisClass, Faction, HardPointType, Location};
pub use modifier::{Modifier, ModifierOp, ModifierStack};
pub use module::{ModuleId, ModuleSlot, ModuleSlots, PilotModule};
pub use upgrades::{
    ArmourUpgrade, GuidanceUpgrade, HeatSinkUpgrade, StructureUpgrade, UpgradeId, UpgradeIds,
    Upgrades,
};

pub(crate) use chassis::count_hardpoints;

use std::collections::BTreeMap;

use crate::config::RulesConfig;

/// Read-only collection of all definitions of one game-data version.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    rules: RulesConfig,
    items: BTreeMap<ItemId, Item>,
    chassis: BTreeMap<ChassisId, Chassis>,
    omni_pods: BTreeMap<OmniPodId, OmniPod>,
    structures: BTreeMap<UpgradeId, StructureUpgrade>,
    armours: BTreeMap<UpgradeId, ArmourUpgrade>,
    heat_sinks: BTreeMap<UpgradeId, HeatSinkUpgrade>,
    guidances: BTreeMap<UpgradeId, GuidanceUpgrade>,
    modules: BTreeMap<ModuleId, PilotModule>,
}

impl Catalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    /// Returns the item definition for `id`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownItem` if no such item exists.
    pub fn item(&self, id: ItemId) -> Result<&Item, CatalogError> {
        self.items.get(&id).ok_or(CatalogError::UnknownItem(id))
    }

    pub fn item_by_name(&self, name: &str) -> Option<&Item> {
        self.items.values().find(|item| item.name == name)
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// # Errors
    ///
    /// Returns `CatalogError::UnknownChassis` if no such chassis exists.
    pub fn chassis(&self, id: ChassisId) -> Result<&Chassis, CatalogError> {
        self.chassis.get(&id).ok_or(CatalogError::UnknownChassis(id))
    }

    pub fn chassis_by_name(&self, name: &str) -> Option<&Chassis> {
        self.chassis.values().find(|chassis| chassis.name == name)
    }

    pub fn all_chassis(&self) -> impl Iterator<Item = &Chassis> {
        self.chassis.values()
    }

    /// # Errors
    ///
    /// Returns `CatalogError::UnknownOmniPod` if no such pod exists.
    pub fn omni_pod(&self, id: OmniPodId) -> Result<&OmniPod, CatalogError> {
        self.omni_pods.get(&id).ok_or(CatalogError::UnknownOmniPod(id))
    }

    /// Pods of a chassis series that fit `location`.
    pub fn omni_pods_for<'a>(
        &'a self,
        series: &'a str,
        location: Location,
    ) -> impl Iterator<Item = &'a OmniPod> + 'a {
        self.omni_pods
            .values()
            .filter(move |pod| pod.series == series && pod.location == location)
    }

    /// # Errors
    ///
    /// Returns `CatalogError::UnknownUpgrade` if no such structure upgrade exists.
    pub fn structure(&self, id: UpgradeId) -> Result<&StructureUpgrade, CatalogError> {
        self.structures.get(&id).ok_or(CatalogError::UnknownUpgrade(id))
    }

    /// # Errors
    ///
    /// Returns `CatalogError::UnknownUpgrade` if no such armour upgrade exists.
    pub fn armour(&self, id: UpgradeId) -> Result<&ArmourUpgrade, CatalogError> {
        self.armours.get(&id).ok_or(CatalogError::UnknownUpgrade(id))
    }

    /// # Errors
    ///
    /// Returns `CatalogError::UnknownUpgrade` if no such heat-sink upgrade exists.
    pub fn heat_sink(&self, id: UpgradeId) -> Result<&HeatSinkUpgrade, CatalogError> {
        self.heat_sinks.get(&id).ok_or(CatalogError::UnknownUpgrade(id))
    }

    /// # Errors
    ///
    /// Returns `CatalogError::UnknownUpgrade` if no such guidance upgrade exists.
    pub fn guidance(&self, id: UpgradeId) -> Result<&GuidanceUpgrade, CatalogError> {
        self.guidances.get(&id).ok_or(CatalogError::UnknownUpgrade(id))
    }

    /// # Errors
    ///
    /// Returns `CatalogError::UnknownModule` if no such module exists.
    pub fn module(&self, id: ModuleId) -> Result<&PilotModule, CatalogError> {
        self.modules.get(&id).ok_or(CatalogError::UnknownModule(id))
    }

    pub fn modules(&self) -> impl Iterator<Item = &PilotModule> {
        self.modules.values()
    }

    /// Resolves a set of upgrade ids.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::UnknownUpgrade` for the first id that does not resolve.
    pub fn upgrades(&self, ids: &UpgradeIds) -> Result<Upgrades<'_>, CatalogError> {
        Ok(Upgrades {
            structure: self.structure(ids.structure)?,
            armour: self.armour(ids.armour)?,
            heat_sink: self.heat_sink(ids.heat_sink)?,
            guidance: self.guidance(ids.guidance)?,
        })
    }
}

/// Collects definitions and validates their cross references.
#[derive(Default)]
pub struct CatalogBuilder {
    catalog: Catalog,
    duplicate: Option<CatalogError>,
}

impl CatalogBuilder {
    fn note_duplicate(&mut self, replaced: bool, kind: &'static str, id: u32) {
        if replaced && self.duplicate.is_none() {
            self.duplicate = Some(CatalogError::DuplicateId { kind, id });
        }
    }

    pub fn rules(mut self, rules: RulesConfig) -> Self {
        self.catalog.rules = rules;
        self
    }

    pub fn item(mut self, item: Item) -> Self {
        let (id, raw) = (item.id, item.id.0);
        let replaced = self.catalog.items.insert(id, item).is_some();
        self.note_duplicate(replaced, "item", raw);
        self
    }

    pub fn chassis(mut self, chassis: Chassis) -> Self {
        let (id, raw) = (chassis.id, chassis.id.0);
        let replaced = self.catalog.chassis.insert(id, chassis).is_some();
        self.note_duplicate(replaced, "chassis", raw);
        self
    }

    pub fn omni_pod(mut self, pod: OmniPod) -> Self {
        let (id, raw) = (pod.id, pod.id.0);
        let replaced = self.catalog.omni_pods.insert(id, pod).is_some();
        self.note_duplicate(replaced, "omni pod", raw);
        self
    }

    pub fn structure(mut self, upgrade: StructureUpgrade) -> Self {
        let (id, raw) = (upgrade.id, upgrade.id.0);
        let replaced = self.catalog.structures.insert(id, upgrade).is_some();
        self.note_duplicate(replaced, "structure upgrade", raw);
        self
    }

    pub fn armour(mut self, upgrade: ArmourUpgrade) -> Self {
        let (id, raw) = (upgrade.id, upgrade.id.0);
        let replaced = self.catalog.armours.insert(id, upgrade).is_some();
        self.note_duplicate(replaced, "armour upgrade", raw);
        self
    }

    pub fn heat_sink(mut self, upgrade: HeatSinkUpgrade) -> Self {
        let (id, raw) = (upgrade.id, upgrade.id.0);
        let replaced = self.catalog.heat_sinks.insert(id, upgrade).is_some();
        self.note_duplicate(replaced, "heat sink upgrade", raw);
        self
    }

    pub fn guidance(mut self, upgrade: GuidanceUpgrade) -> Self {
        let (id, raw) = (upgrade.id, upgrade.id.0);
        let replaced = self.catalog.guidances.insert(id, upgrade).is_some();
        self.note_duplicate(replaced, "guidance upgrade", raw);
        self
    }

    pub fn module(mut self, module: PilotModule) -> Self {
        let (id, raw) = (module.id, module.id.0);
        let replaced = self.catalog.modules.insert(id, module).is_some();
        self.note_duplicate(replaced, "module", raw);
        self
    }

    /// Validates all references and freezes the catalog.
    ///
    /// # Errors
    ///
    /// Returns the first duplicate id, dangling reference or malformed chassis found.
    pub fn build(self) -> Result<Catalog, CatalogError> {
        if let Some(duplicate) = self.duplicate {
            return Err(duplicate);
        }
        let catalog = self.catalog;

        for item in catalog.items.values() {
            if let Some(side) = item.engine().and_then(|engine| engine.side_internal) {
                let side_item = catalog.item(side)?;
                if side_item.kind != ItemKind::Internal(InternalKind::EngineSide) {
                    return Err(invalid(
                        &item.name,
                        "engine side part is not an engine side internal",
                    ));
                }
            }
        }

        for upgrade in catalog.heat_sinks.values() {
            if !catalog.item(upgrade.heat_sink)?.is_heat_sink() {
                return Err(invalid(&upgrade.name, "heat sink upgrade does not select a heat sink"));
            }
        }

        for pod in catalog.omni_pods.values() {
            for &id in &pod.toggleable {
                if catalog.item(id)?.actuator().is_none() {
                    return Err(invalid(&pod.name, "toggleable item is not an actuator"));
                }
            }
        }

        for chassis in catalog.chassis.values() {
            validate_chassis(&catalog, chassis)?;
        }

        tracing::debug!(
            items = catalog.items.len(),
            chassis = catalog.chassis.len(),
            omni_pods = catalog.omni_pods.len(),
            "catalog built"
        );
        Ok(catalog)
    }
}

fn invalid(owner: &str, reason: &'static str) -> CatalogError {
    CatalogError::InvalidReference {
        owner: owner.to_string(),
        reason,
    }
}

fn malformed(chassis: &Chassis, reason: &'static str) -> CatalogError {
    CatalogError::MalformedChassis {
        chassis: chassis.name.clone(),
        reason,
    }
}

fn validate_chassis(catalog: &Catalog, chassis: &Chassis) -> Result<(), CatalogError> {
    if chassis.components.len() != Location::ALL.len()
        || chassis
            .components
            .iter()
            .zip(Location::ALL)
            .any(|(component, location)| component.location != location)
    {
        return Err(malformed(chassis, "components must cover every location in order"));
    }

    for component in &chassis.components {
        for &id in &component.fixed_items {
            catalog.item(id)?;
        }
    }

    catalog.upgrades(&chassis.default_upgrades)?;

    if let ChassisVariant::Omni { default_pods } = &chassis.variant {
        if default_pods.len() != Location::ALL.len() {
            return Err(malformed(chassis, "omni chassis needs one default pod per location"));
        }
        for (&id, location) in default_pods.iter().zip(Location::ALL) {
            let pod = catalog.omni_pod(id)?;
            if pod.location != location || pod.series != chassis.series {
                return Err(malformed(chassis, "default pod does not fit its location"));
            }
        }
    }

    Ok(())
}
