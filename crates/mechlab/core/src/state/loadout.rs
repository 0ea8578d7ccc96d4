use arrayvec::ArrayVec;

use crate::catalog::{
    ArmourSide, ArmourUpgrade, Catalog, CatalogError, Chassis, ChassisId, Faction,
    GuidanceUpgrade, HardPointType, HeatSinkUpgrade, Item, ItemId, Location, ModifierStack,
    OmniPod, PilotModule, StructureUpgrade, Upgrades,
};
use crate::config::RulesConfig;
use crate::equip::{EquipResult, EquipResultKind};

use super::component::{ConfiguredComponent, ItemIndex};
use super::error::LoadoutError;
use super::weapon_groups::WeaponGroups;

/// The only location that can house an engine.
pub const ENGINE_LOCATION: Location = Location::CenterTorso;

type Modules<'c> = ArrayVec<&'c PilotModule, { RulesConfig::MAX_MODULES }>;

/// Proof that an item passed every loadout check, consumed by [`Loadout::equip`].
///
/// A permit is bound to the loadout revision it was issued at; any mutation in
/// between makes it stale.
#[must_use = "a permit does nothing until passed to Loadout::equip"]
#[derive(Debug)]
pub struct EquipPermit<'c> {
    item: &'c Item,
    location: Location,
    revision: u64,
}

impl<'c> EquipPermit<'c> {
    pub fn item(&self) -> &'c Item {
        self.item
    }

    /// Component the item will be installed in.
    pub fn location(&self) -> Location {
        self.location
    }
}

/// A chassis with its configured components, upgrades, modules and weapon groups.
///
/// Every mutator validates before it changes anything, so a loadout never
/// violates its slot, mass, hardpoint or armour budgets between calls.
#[derive(Clone, Debug)]
pub struct Loadout<'c> {
    catalog: &'c Catalog,
    chassis: &'c Chassis,
    name: String,
    /// Indexed by [`Location::index`].
    components: Vec<ConfiguredComponent<'c>>,
    upgrades: Upgrades<'c>,
    modules: Modules<'c>,
    weapon_groups: WeaponGroups,
    revision: u64,
}

impl<'c> Loadout<'c> {
    /// Creates an empty loadout of the chassis with id `chassis`.
    ///
    /// # Errors
    ///
    /// Returns `LoadoutError::Catalog` if the chassis or anything it references is missing.
    pub fn new(catalog: &'c Catalog, chassis: ChassisId) -> Result<Self, LoadoutError> {
        Self::with_chassis(catalog, catalog.chassis(chassis)?)
    }

    /// Creates an empty loadout of `chassis` with its default upgrades and pods.
    ///
    /// # Errors
    ///
    /// Returns `LoadoutError::Catalog` if a default upgrade, pod or fixed item is missing.
    pub fn with_chassis(catalog: &'c Catalog, chassis: &'c Chassis) -> Result<Self, LoadoutError> {
        let upgrades = catalog.upgrades(&chassis.default_upgrades)?;
        let mut components = Vec::with_capacity(Location::ALL.len());
        for location in Location::ALL {
            let def = chassis
                .component(location)
                .ok_or_else(|| CatalogError::MalformedChassis {
                    chassis: chassis.name.clone(),
                    reason: "missing component",
                })?;
            let pod = chassis
                .default_pod(location)
                .map(|id| catalog.omni_pod(id))
                .transpose()?;
            components.push(ConfiguredComponent::new(
                catalog,
                def,
                pod,
                upgrades.guidance,
            )?);
        }

        tracing::debug!(chassis = %chassis.name, omni = chassis.is_omni(), "loadout created");
        Ok(Self {
            catalog,
            chassis,
            name: chassis.name.clone(),
            components,
            upgrades,
            modules: ArrayVec::new(),
            weapon_groups: WeaponGroups::new(),
            revision: 0,
        })
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn chassis(&self) -> &'c Chassis {
        self.chassis
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.revision += 1;
    }

    /// Increases on every mutation; permits are tied to one revision.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn component(&self, location: Location) -> &ConfiguredComponent<'c> {
        &self.components[location.index()]
    }

    fn component_mut(&mut self, location: Location) -> &mut ConfiguredComponent<'c> {
        &mut self.components[location.index()]
    }

    pub fn components(&self) -> impl Iterator<Item = &ConfiguredComponent<'c>> {
        self.components.iter()
    }

    pub fn upgrades(&self) -> &Upgrades<'c> {
        &self.upgrades
    }

    pub fn modules(&self) -> &[&'c PilotModule] {
        &self.modules
    }

    pub fn weapon_groups(&self) -> &WeaponGroups {
        &self.weapon_groups
    }

    fn rules(&self) -> &RulesConfig {
        self.catalog.rules()
    }

    // ========================================================================
    // Aggregates
    // ========================================================================

    /// Every item on the loadout: fixed, enabled toggles and equipped.
    pub fn all_items(&self) -> impl Iterator<Item = &'c Item> + '_ {
        self.components.iter().flat_map(ConfiguredComponent::all_items)
    }

    /// Weapons in ordinal order (location order, then insertion order).
    pub fn weapons(&self) -> impl Iterator<Item = &'c Item> + '_ {
        self.all_items().filter(|item| item.is_weapon())
    }

    pub fn count(&self, id: ItemId) -> usize {
        self.all_items().filter(|item| item.id == id).count()
    }

    /// The installed engine and its location.
    pub fn engine(&self) -> Option<(&'c Item, Location)> {
        self.components
            .iter()
            .find_map(|c| c.engine().map(|engine| (engine, c.location())))
    }

    pub fn heat_sink_count(&self) -> usize {
        self.components.iter().map(ConfiguredComponent::heat_sink_count).sum()
    }

    /// Heat sinks including those built into the engine.
    pub fn total_heat_sinks(&self) -> usize {
        let internal = self
            .engine()
            .and_then(|(engine, _)| engine.engine())
            .map_or(0, |data| usize::from(data.internal_heat_sinks()));
        internal + self.heat_sink_count()
    }

    pub fn jump_jet_count(&self) -> usize {
        self.all_items().filter(|item| item.is_jump_jet()).count()
    }

    /// Jump-jet allowance: the chassis value, or the sum over pods on omni chassis.
    pub fn max_jump_jets(&self) -> usize {
        if self.chassis.is_omni() {
            self.components
                .iter()
                .filter_map(ConfiguredComponent::omni_pod)
                .map(|pod| usize::from(pod.max_jump_jets))
                .sum()
        } else {
            usize::from(self.chassis.max_jump_jets)
        }
    }

    fn ecm_count(&self) -> usize {
        self.all_items().filter(|item| item.is_ecm()).count()
    }

    pub fn armour_total(&self) -> u32 {
        self.components
            .iter()
            .map(|c| u32::from(c.armour_total()))
            .sum()
    }

    /// Total mass in tons, derived from structure and armour cost functions.
    pub fn mass(&self) -> f64 {
        let structure = self.upgrades.structure.structure_mass(self.chassis.mass_max);
        let armour = self.upgrades.armour.armour_mass(self.armour_total());
        let items: f64 = self
            .all_items()
            .map(|item| item.mass_with(self.upgrades.guidance))
            .sum();
        structure + armour + items
    }

    pub fn free_mass(&self) -> f64 {
        self.chassis.mass_max - self.mass()
    }

    fn fits_mass(&self, extra: f64) -> bool {
        extra <= self.free_mass() + self.rules().mass_tolerance
    }

    /// Component slots plus chassis-wide dynamic slots.
    pub fn slots_used(&self) -> u16 {
        let components: u16 = self.components.iter().map(ConfiguredComponent::slots_used).sum();
        components + self.upgrades.dynamic_slots()
    }

    pub fn slots_total(&self) -> u16 {
        self.chassis.total_slots()
    }

    pub fn slots_free(&self) -> u16 {
        self.slots_total().saturating_sub(self.slots_used())
    }

    pub fn hardpoint_count(&self, kind: HardPointType) -> usize {
        self.components.iter().map(|c| c.hardpoint_count(kind)).sum()
    }

    pub fn hardpoints_used(&self, kind: HardPointType) -> usize {
        self.components.iter().map(|c| c.hardpoints_used(kind)).sum()
    }

    /// Chassis quirks, pod quirks, item and module modifiers.
    pub fn modifiers(&self) -> ModifierStack {
        let mut stack = ModifierStack::from_iter(&self.chassis.quirks);
        for component in &self.components {
            if let Some(pod) = component.omni_pod() {
                stack.extend(&pod.quirks);
            }
        }
        for item in self.all_items() {
            stack.extend(&item.modifiers);
        }
        for module in &self.modules {
            stack.extend(&module.modifiers);
        }
        stack
    }

    // ========================================================================
    // Item checks
    // ========================================================================

    /// Side internal an engine places in both side torsos.
    ///
    /// Catalog construction guarantees the reference resolves.
    fn engine_side(&self, item: &Item) -> Option<&'c Item> {
        let id = item.engine()?.side_internal?;
        self.catalog.item(id).ok()
    }

    fn engine_side_slots(&self, item: &Item) -> u16 {
        self.engine_side(item).map_or(0, |side| u16::from(side.slots))
    }

    /// True if the engine will absorb `item` when placed at `target`
    /// (`None` lets the loadout pick the engine's component).
    fn absorbs(&self, item: &Item, target: Option<Location>) -> bool {
        if !item.is_heat_sink() {
            return false;
        }
        self.engine().is_some_and(|(_, location)| {
            target.is_none_or(|t| t == location)
                && self.component(location).free_engine_heat_sink_slots() > 0
        })
    }

    /// Loadout-wide checks, independent of where the item goes.
    pub fn can_equip_global(&self, item: &Item) -> EquipResult {
        self.check_global(item, None)
    }

    fn check_global(&self, item: &Item, target: Option<Location>) -> EquipResult {
        use EquipResultKind::*;

        if !self.chassis.is_allowed(item) {
            return NotSupported.into();
        }
        if !item.is_compatible(&self.upgrades) {
            return IncompatibleUpgrades.into();
        }

        let side = self.engine_side(item);
        let side_mass = side.map_or(0.0, |s| s.mass * 2.0);
        if !self.fits_mass(item.mass_with(self.upgrades.guidance) + side_mass) {
            return TooHeavy.into();
        }

        if !self.absorbs(item, target) {
            let needed = item.slots_with(self.upgrades.guidance) + 2 * self.engine_side_slots(item);
            if needed > self.slots_free() {
                return NotEnoughSlots.into();
            }
        }

        if item.is_jump_jet() && self.jump_jet_count() >= self.max_jump_jets() {
            return JumpJetCapacityReached.into();
        }
        if item.is_engine() && self.engine().is_some() {
            return EngineAlreadyEquipped.into();
        }
        if let Some(max) = item.max_per_loadout {
            if self.count(item.id) >= usize::from(max) {
                return TooManyOfThatType.into();
            }
        }
        if let Some(kind) = item.hardpoint {
            if self.hardpoints_used(kind) >= self.hardpoint_count(kind) {
                return NoFreeHardPoints.into();
            }
        }
        if item.is_case()
            && self
                .components
                .iter()
                .filter(|c| c.is_allowed(item))
                .all(ConfiguredComponent::has_case)
        {
            return EverythingAlreadyHasCase.into();
        }

        EquipResult::SUCCESS
    }

    fn check_engine_sides(&self, item: &Item) -> EquipResult {
        let needed = self.engine_side_slots(item);
        for location in Location::SIDE_TORSOS {
            if self.component(location).slots_free() < needed {
                return EquipResult::at(EquipResultKind::NotEnoughSlotsForXlSide, location);
            }
        }
        EquipResult::SUCCESS
    }

    /// Whether `item` can be added somewhere on this loadout.
    ///
    /// Non-engine items are offered to every component; if none accepts, the
    /// most specific rejection is returned without its location.
    pub fn can_equip_directly(&self, item: &Item) -> EquipResult {
        let global = self.check_global(item, None);
        if !global.is_success() {
            return global;
        }

        if item.is_engine() {
            let sides = self.check_engine_sides(item);
            if !sides.is_success() {
                return sides;
            }
            return self.component(ENGINE_LOCATION).can_equip(item);
        }

        let mut best: Option<EquipResult> = None;
        for component in &self.components {
            let result = component.can_equip(item);
            if result.is_success() {
                return EquipResult::SUCCESS;
            }
            if best.is_none_or(|b| result.is_more_specific_than(&b)) {
                best = Some(result);
            }
        }
        best.map_or(EquipResultKind::NotSupported.into(), EquipResult::without_location)
    }

    /// Whether `item` can be added to the component at `location`.
    pub fn can_equip_at(&self, location: Location, item: &Item) -> EquipResult {
        let global = self.check_global(item, Some(location));
        if !global.is_success() {
            return global;
        }
        if item.is_engine() {
            if location != ENGINE_LOCATION {
                return EquipResult::at(EquipResultKind::NotSupported, location);
            }
            let sides = self.check_engine_sides(item);
            if !sides.is_success() {
                return sides;
            }
        }
        self.component(location).can_equip(item)
    }

    /// Locations that could host `item` by allowance and hardpoints alone.
    ///
    /// A location in the result may still reject the item for slots or mass.
    pub fn candidate_locations(&self, item: &Item) -> Vec<Location> {
        if let Some(kind) = item.hardpoint {
            if self.hardpoints_used(kind) >= self.hardpoint_count(kind) {
                return Vec::new();
            }
        }
        self.components
            .iter()
            .filter(|c| c.is_allowed(item))
            .filter(|c| item.hardpoint.is_none_or(|kind| c.hardpoint_count(kind) > 0))
            .map(ConfiguredComponent::location)
            .collect()
    }

    /// Where `item` goes when the caller does not choose a location.
    fn preferred_location(&self, item: &Item) -> Option<Location> {
        if item.is_engine() {
            return Some(ENGINE_LOCATION);
        }
        if self.absorbs(item, None) {
            if let Some((_, location)) = self.engine() {
                return Some(location);
            }
        }
        self.components
            .iter()
            .find(|c| c.can_equip(item).is_success())
            .map(ConfiguredComponent::location)
    }

    /// Validates an addition and issues a permit for it.
    ///
    /// With `location == None` the loadout picks the component: the engine's
    /// component for heat sinks it can absorb, otherwise the first that accepts.
    ///
    /// # Errors
    ///
    /// Returns the rejecting [`EquipResult`].
    pub fn authorize(
        &self,
        item: &'c Item,
        location: Option<Location>,
    ) -> Result<EquipPermit<'c>, EquipResult> {
        let location = match location {
            Some(location) => {
                self.can_equip_at(location, item).into_result()?;
                location
            }
            None => {
                self.can_equip_directly(item).into_result()?;
                self.preferred_location(item)
                    .ok_or(EquipResult::new(EquipResultKind::NotSupported))?
            }
        };
        Ok(EquipPermit {
            item,
            location,
            revision: self.revision,
        })
    }

    /// Installs the permitted item.
    ///
    /// # Errors
    ///
    /// Returns `LoadoutError::StalePermit` if the loadout changed since the
    /// permit was issued.
    pub fn equip(&mut self, permit: EquipPermit<'c>) -> Result<ItemIndex, LoadoutError> {
        if permit.revision != self.revision {
            return Err(LoadoutError::StalePermit);
        }
        Ok(self.insert(permit.item, permit.location))
    }

    /// Checks and installs `item` in one call.
    ///
    /// # Errors
    ///
    /// Returns `LoadoutError::Rejected` with the failing check.
    pub fn add_item(
        &mut self,
        item: &'c Item,
        location: Option<Location>,
    ) -> Result<ItemIndex, LoadoutError> {
        let permit = self.authorize(item, location)?;
        self.equip(permit)
    }

    fn weapons_before(&self, location: Location) -> usize {
        self.components[..location.index()]
            .iter()
            .map(|c| c.all_items().filter(|item| item.is_weapon()).count())
            .sum()
    }

    fn insert(&mut self, item: &'c Item, location: Location) -> ItemIndex {
        if let Some(side) = self.engine_side(item) {
            for side_location in Location::SIDE_TORSOS {
                self.component_mut(side_location).insert(side);
            }
        }
        if item.is_weapon() {
            let ordinal = self.weapons_before(location)
                + self
                    .component(location)
                    .all_items()
                    .filter(|i| i.is_weapon())
                    .count();
            self.weapon_groups.weapon_inserted(ordinal);
        }
        let index = self.component_mut(location).insert(item);
        self.revision += 1;
        tracing::debug!(item = %item, location = %location, ?index, "item equipped");
        index
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Whether removing `item` from `location` keeps the loadout valid.
    pub fn can_remove_item(&self, location: Location, item: &Item) -> EquipResult {
        if !self.component(location).can_remove_item(item) {
            return EquipResult::at(EquipResultKind::NotSupported, location);
        }
        if item.is_ecm() && self.upgrades.armour.requires_ecm && self.ecm_count() <= 1 {
            return EquipResult::new(EquipResultKind::CannotRemoveEcm);
        }
        EquipResult::SUCCESS
    }

    /// Removes the most recently added copy of `item` from `location`.
    ///
    /// Removing an engine also removes its side internals and the heat sinks
    /// it absorbed.
    ///
    /// # Errors
    ///
    /// Returns `LoadoutError::Rejected(CannotRemoveEcm)` if the armour needs
    /// the ECM, `LoadoutError::ItemNotEquipped` or `LoadoutError::NotRemovable`
    /// if the item is not a user-equipped item at `location`.
    pub fn remove_item(
        &mut self,
        location: Location,
        item: &Item,
    ) -> Result<ItemIndex, LoadoutError> {
        if item.is_ecm() && self.upgrades.armour.requires_ecm && self.ecm_count() <= 1 {
            return Err(EquipResult::new(EquipResultKind::CannotRemoveEcm).into());
        }
        if item.is_engine() && self.component(location).can_remove_item(item) {
            let drained = self.component_mut(location).drain_absorbed_heat_sinks();
            if !drained.is_empty() {
                tracing::debug!(
                    count = drained.len(),
                    location = %location,
                    "absorbed heat sinks removed with engine"
                );
            }
        }

        let ordinal = item.is_weapon().then(|| {
            let within = self
                .component(location)
                .all_items()
                .filter(|i| i.is_weapon())
                .enumerate()
                .filter(|(_, i)| i.id == item.id)
                .map(|(position, _)| position)
                .last()
                .unwrap_or_default();
            self.weapons_before(location) + within
        });

        let index = self.component_mut(location).remove_item(item)?;
        if let Some(side) = self.engine_side(item) {
            for side_location in Location::SIDE_TORSOS {
                self.component_mut(side_location).take(side)?;
            }
        }
        if let Some(ordinal) = ordinal {
            self.weapon_groups.weapon_removed(ordinal);
        }
        self.revision += 1;
        tracing::debug!(item = %item, location = %location, ?index, "item removed");
        Ok(index)
    }

    // ========================================================================
    // Armour
    // ========================================================================

    /// Checks an armour change.
    ///
    /// # Errors
    ///
    /// Returns `LoadoutError::InvalidArmourSide` if `side` does not exist on `location`.
    pub fn can_set_armour(
        &self,
        location: Location,
        side: ArmourSide,
        amount: u16,
    ) -> Result<EquipResult, LoadoutError> {
        if !location.armour_sides().contains(&side) {
            return Err(LoadoutError::InvalidArmourSide { location, side });
        }
        let component = self.component(location);
        if amount > component.armour_max(side) {
            return Ok(EquipResult::at(EquipResultKind::ExceededMaxArmour, location));
        }

        let current = component.armour(side);
        if amount > current {
            let armour = self.upgrades.armour;
            let total = self.armour_total();
            let added = armour.armour_mass(total - u32::from(current) + u32::from(amount))
                - armour.armour_mass(total);
            if !self.fits_mass(added) {
                return Ok(EquipResult::new(EquipResultKind::TooHeavy));
            }
        }
        Ok(EquipResult::SUCCESS)
    }

    /// Sets armour on one side of `location`.
    ///
    /// # Errors
    ///
    /// Returns `LoadoutError::InvalidArmourSide` or the rejecting check.
    pub fn set_armour(
        &mut self,
        location: Location,
        side: ArmourSide,
        amount: u16,
        manual: bool,
    ) -> Result<(), LoadoutError> {
        self.can_set_armour(location, side, amount)?.into_result()?;
        self.component_mut(location).set_armour(side, amount, manual);
        self.revision += 1;
        tracing::trace!(location = %location, %side, amount, "armour set");
        Ok(())
    }

    // ========================================================================
    // Upgrades
    // ========================================================================

    /// Slot and mass budgets, as they must hold after any change.
    fn check_budgets(&self) -> EquipResult {
        for component in &self.components {
            if component.slots_used() > component.slots_total() {
                return EquipResult::at(EquipResultKind::NotEnoughSlots, component.location());
            }
        }
        if self.slots_used() > self.slots_total() {
            return EquipResultKind::NotEnoughSlots.into();
        }
        if !self.fits_mass(0.0) {
            return EquipResultKind::TooHeavy.into();
        }
        EquipResult::SUCCESS
    }

    fn check_fixed_upgrades(&self, faction: &Faction) -> EquipResult {
        if self.chassis.is_omni() || !faction.is_compatible(&self.chassis.faction) {
            return EquipResultKind::NotSupported.into();
        }
        EquipResult::SUCCESS
    }

    pub fn can_set_structure(&self, structure: &'c StructureUpgrade) -> EquipResult {
        self.with_structure(structure).err().unwrap_or(EquipResult::SUCCESS)
    }

    fn with_structure(&self, structure: &'c StructureUpgrade) -> Result<Self, EquipResult> {
        self.check_fixed_upgrades(&structure.faction).into_result()?;
        let mut trial = self.clone();
        trial.upgrades.structure = structure;
        trial.check_budgets().into_result()?;
        Ok(trial)
    }

    /// # Errors
    ///
    /// Returns `LoadoutError::Rejected` with the failing check.
    pub fn set_structure(&mut self, structure: &'c StructureUpgrade) -> Result<(), LoadoutError> {
        self.commit(self.with_structure(structure)?, "structure");
        Ok(())
    }

    pub fn can_set_armour_type(&self, armour: &'c ArmourUpgrade) -> EquipResult {
        self.with_armour_type(armour).err().unwrap_or(EquipResult::SUCCESS)
    }

    fn with_armour_type(&self, armour: &'c ArmourUpgrade) -> Result<Self, EquipResult> {
        self.check_fixed_upgrades(&armour.faction).into_result()?;
        if armour.requires_ecm && self.ecm_count() == 0 {
            return Err(EquipResultKind::NeedEcm.into());
        }
        let mut trial = self.clone();
        trial.upgrades.armour = armour;
        trial.check_budgets().into_result()?;
        Ok(trial)
    }

    /// # Errors
    ///
    /// Returns `LoadoutError::Rejected` with the failing check.
    pub fn set_armour_type(&mut self, armour: &'c ArmourUpgrade) -> Result<(), LoadoutError> {
        self.commit(self.with_armour_type(armour)?, "armour");
        Ok(())
    }

    pub fn can_set_heat_sink_type(&self, heat_sink: &'c HeatSinkUpgrade) -> EquipResult {
        self.with_heat_sink_type(heat_sink)
            .err()
            .unwrap_or(EquipResult::SUCCESS)
    }

    /// Replaces every equipped heat sink with the upgrade's item, in place.
    fn with_heat_sink_type(&self, heat_sink: &'c HeatSinkUpgrade) -> Result<Self, EquipResult> {
        self.check_fixed_upgrades(&heat_sink.faction).into_result()?;
        let replacement = self
            .catalog
            .item(heat_sink.heat_sink)
            .map_err(|_| EquipResult::new(EquipResultKind::NotSupported))?;

        let mut trial = self.clone();
        let mut removed = Vec::new();
        for component in &mut trial.components {
            let location = component.location();
            let drained = component.drain_items(Item::is_heat_sink);
            removed.extend(drained.iter().map(|_| location));
        }
        trial.upgrades.heat_sink = heat_sink;
        for location in removed {
            trial.can_equip_at(location, replacement).into_result()?;
            trial.insert(replacement, location);
        }
        Ok(trial)
    }

    /// # Errors
    ///
    /// Returns `LoadoutError::Rejected` with the failing check.
    pub fn set_heat_sink_type(
        &mut self,
        heat_sink: &'c HeatSinkUpgrade,
    ) -> Result<(), LoadoutError> {
        self.commit(self.with_heat_sink_type(heat_sink)?, "heat sinks");
        Ok(())
    }

    pub fn can_set_guidance(&self, guidance: &'c GuidanceUpgrade) -> EquipResult {
        self.with_guidance(guidance).err().unwrap_or(EquipResult::SUCCESS)
    }

    fn with_guidance(&self, guidance: &'c GuidanceUpgrade) -> Result<Self, EquipResult> {
        if !guidance.faction.is_compatible(&self.chassis.faction) {
            return Err(EquipResultKind::NotSupported.into());
        }
        let mut trial = self.clone();
        trial.upgrades.guidance = guidance;
        for component in &mut trial.components {
            component.set_guidance(guidance);
        }
        if trial.all_items().any(|item| !item.is_compatible(&trial.upgrades)) {
            return Err(EquipResultKind::IncompatibleUpgrades.into());
        }
        trial.check_budgets().into_result()?;
        Ok(trial)
    }

    /// # Errors
    ///
    /// Returns `LoadoutError::Rejected` with the failing check.
    pub fn set_guidance(&mut self, guidance: &'c GuidanceUpgrade) -> Result<(), LoadoutError> {
        self.commit(self.with_guidance(guidance)?, "guidance");
        Ok(())
    }

    fn commit(&mut self, trial: Self, what: &'static str) {
        let revision = self.revision.max(trial.revision) + 1;
        *self = trial;
        self.revision = revision;
        tracing::debug!(upgrade = what, ids = ?self.upgrades.ids(), "upgrades changed");
    }

    // ========================================================================
    // Omni pods and toggles
    // ========================================================================

    /// Checks a pod swap at the pod's location.
    ///
    /// # Errors
    ///
    /// Returns `LoadoutError::NotOmni` on a standard chassis.
    pub fn can_set_omni_pod(&self, pod: &'c OmniPod) -> Result<EquipResult, LoadoutError> {
        if !self.chassis.is_omni() {
            return Err(LoadoutError::NotOmni {
                chassis: self.chassis.name.clone(),
            });
        }
        let location = pod.location;
        if pod.series != self.chassis.series {
            return Ok(EquipResult::at(EquipResultKind::NotSupported, location));
        }

        let current = self.component(location);
        let lost_jump_jets = current.items().iter().filter(|i| i.is_jump_jet()).count();
        let lost_allowance = current
            .omni_pod()
            .map_or(0, |p| usize::from(p.max_jump_jets));
        let allowance = self.max_jump_jets() - lost_allowance + usize::from(pod.max_jump_jets);
        if self.jump_jet_count() - lost_jump_jets > allowance {
            return Ok(EquipResult::at(EquipResultKind::JumpJetCapacityReached, location));
        }

        let lost_ecm = current.items().iter().filter(|i| i.is_ecm()).count();
        if self.upgrades.armour.requires_ecm && lost_ecm > 0 && self.ecm_count() <= lost_ecm {
            return Ok(EquipResult::at(EquipResultKind::CannotRemoveEcm, location));
        }

        // The new pod's actuators start enabled.
        let mut trial = self.clone();
        trial.component_mut(location).install_pod(self.catalog, pod)?;
        Ok(trial.check_budgets())
    }

    /// Installs `pod`, removing everything equipped at its location.
    ///
    /// # Errors
    ///
    /// Returns `LoadoutError::NotOmni` or the rejecting check.
    pub fn set_omni_pod(&mut self, pod: &'c OmniPod) -> Result<(), LoadoutError> {
        self.can_set_omni_pod(pod)?.into_result()?;
        let location = pod.location;

        let component = self.component(location);
        let first = self.weapons_before(location)
            + component.fixed_items().iter().filter(|i| i.is_weapon()).count();
        let weapons = component.items().iter().filter(|i| i.is_weapon()).count();
        let catalog = self.catalog;
        self.component_mut(location).install_pod(catalog, pod)?;
        for ordinal in (first..first + weapons).rev() {
            self.weapon_groups.weapon_removed(ordinal);
        }
        self.revision += 1;
        tracing::debug!(pod = %pod.name, location = %location, "omni pod set");
        Ok(())
    }

    pub fn can_toggle(&self, location: Location, item: &Item, enabled: bool) -> EquipResult {
        let component = self.component(location);
        let local = component.can_toggle(item, enabled);
        if !local.is_success() || !enabled || component.toggle_state(item.id) == Some(true) {
            return local;
        }
        if u16::from(item.slots) > self.slots_free() {
            return EquipResultKind::NotEnoughSlots.into();
        }
        if !self.fits_mass(item.mass) {
            return EquipResultKind::TooHeavy.into();
        }
        EquipResult::SUCCESS
    }

    /// Switches a toggleable actuator on or off.
    ///
    /// # Errors
    ///
    /// Returns `LoadoutError::Rejected` with the failing check.
    pub fn toggle(
        &mut self,
        location: Location,
        item: &Item,
        enabled: bool,
    ) -> Result<(), LoadoutError> {
        self.can_toggle(location, item, enabled).into_result()?;
        self.component_mut(location).set_toggle(item.id, enabled);
        self.revision += 1;
        tracing::trace!(item = %item, location = %location, enabled, "actuator toggled");
        Ok(())
    }

    // ========================================================================
    // Modules
    // ========================================================================

    pub fn can_add_module(&self, module: &PilotModule) -> EquipResult {
        use EquipResultKind::*;

        if !module.faction.is_compatible(&self.chassis.faction) {
            return NotSupported.into();
        }
        if self.modules.iter().any(|m| m.id == module.id) {
            return ModuleAlreadyEquipped.into();
        }
        let used = self.modules.iter().filter(|m| m.slot == module.slot).count();
        if used >= usize::from(self.chassis.module_slots.capacity(module.slot))
            || self.modules.is_full()
        {
            return NoFreeModuleSlot.into();
        }
        EquipResult::SUCCESS
    }

    /// # Errors
    ///
    /// Returns `LoadoutError::Rejected` with the failing check.
    pub fn add_module(&mut self, module: &'c PilotModule) -> Result<(), LoadoutError> {
        self.can_add_module(module).into_result()?;
        self.modules
            .try_push(module)
            .map_err(|_| EquipResult::new(EquipResultKind::NoFreeModuleSlot))?;
        self.revision += 1;
        tracing::debug!(module = %module, "module added");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `LoadoutError::ModuleNotEquipped` if the module is not on this loadout.
    pub fn remove_module(&mut self, module: &PilotModule) -> Result<(), LoadoutError> {
        let position = self
            .modules
            .iter()
            .position(|m| m.id == module.id)
            .ok_or_else(|| LoadoutError::ModuleNotEquipped {
                module: module.name.clone(),
            })?;
        self.modules.remove(position);
        self.revision += 1;
        Ok(())
    }

    // ========================================================================
    // Weapon groups
    // ========================================================================

    /// Adds or removes the weapon at `ordinal` from a weapon group.
    ///
    /// # Errors
    ///
    /// Returns `LoadoutError::InvalidWeapon` if there is no such weapon and
    /// `LoadoutError::InvalidWeaponGroup` for an unknown group.
    pub fn set_weapon_group(
        &mut self,
        group: usize,
        ordinal: usize,
        enabled: bool,
    ) -> Result<(), LoadoutError> {
        if ordinal >= self.weapons().count() {
            return Err(LoadoutError::InvalidWeapon { ordinal });
        }
        self.weapon_groups.set(group, ordinal, enabled)?;
        self.revision += 1;
        Ok(())
    }
}

impl PartialEq for Loadout<'_> {
    fn eq(&self, other: &Self) -> bool {
        let modules = |l: &Self| l.modules.iter().map(|m| m.id).collect::<Vec<_>>();
        self.chassis.id == other.chassis.id
            && self.name == other.name
            && self.upgrades == other.upgrades
            && self.components == other.components
            && modules(self) == modules(other)
            && self.weapon_groups == other.weapon_groups
    }
}
