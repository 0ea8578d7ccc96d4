//! Per-location mutable state and local equip rules.
//!
//! A [`ConfiguredComponent`] is built once from its catalog [`ComponentDef`]
//! (and, on omni chassis, the selected [`OmniPod`]) and owns the ordered list
//! of items equipped in that location plus its armour values. It knows
//! nothing about the rest of the loadout: mass, chassis-wide slots and
//! item caps are [`Loadout`](super::Loadout)'s job.
//!
//! # Heat-sink absorption
//!
//! An engine with spare heat-sink slots soaks up the first heat sinks placed
//! in its component: they cost no slots and have no visible index. Item
//! indices returned by [`ConfiguredComponent::add_item`] therefore count only
//! visible items.

use crate::catalog::{
    Actuator, ArmourSide, Catalog, ComponentDef, GuidanceUpgrade, HardPointType, Item, ItemId,
    Location, OmniPod, count_hardpoints,
};
use crate::equip::{EquipResult, EquipResultKind};

use super::error::LoadoutError;

/// Position of an item among the visible items of a component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ItemIndex {
    /// Heat sink absorbed by the engine; it has no visible slot.
    Absorbed,
    Visible(usize),
}

/// Proof that a component accepted an item, consumed by [`ConfiguredComponent::add_item`].
#[must_use = "an admission does nothing until passed to add_item"]
#[derive(Debug)]
pub struct Admission<'c> {
    item: &'c Item,
    location: Location,
    revision: u64,
}

impl<'c> Admission<'c> {
    pub fn item(&self) -> &'c Item {
        self.item
    }

    pub fn location(&self) -> Location {
        self.location
    }
}

#[derive(Clone, Copy, Debug)]
struct Toggle<'c> {
    item: &'c Item,
    enabled: bool,
}

#[derive(Clone, Debug)]
pub struct ConfiguredComponent<'c> {
    def: &'c ComponentDef,
    pod: Option<&'c OmniPod>,
    fixed: Vec<&'c Item>,
    toggles: Vec<Toggle<'c>>,
    items: Vec<&'c Item>,
    armour: [u16; 2],
    manual_armour: bool,
    guidance: &'c GuidanceUpgrade,
    revision: u64,
}

impl<'c> ConfiguredComponent<'c> {
    /// Builds an empty component with its fixed items resolved from `catalog`.
    ///
    /// # Errors
    ///
    /// Returns `LoadoutError::Catalog` if a fixed or toggleable item is missing.
    pub fn new(
        catalog: &'c Catalog,
        def: &'c ComponentDef,
        pod: Option<&'c OmniPod>,
        guidance: &'c GuidanceUpgrade,
    ) -> Result<Self, LoadoutError> {
        let fixed = def
            .fixed_items
            .iter()
            .map(|&id| catalog.item(id))
            .collect::<Result<Vec<_>, _>>()?;

        let mut component = Self {
            def,
            pod: None,
            fixed,
            toggles: Vec::new(),
            items: Vec::new(),
            armour: [0; 2],
            manual_armour: false,
            guidance,
            revision: 0,
        };
        if let Some(pod) = pod {
            component.install_pod(catalog, pod)?;
        }
        Ok(component)
    }

    pub fn location(&self) -> Location {
        self.def.location
    }

    pub fn def(&self) -> &'c ComponentDef {
        self.def
    }

    pub fn omni_pod(&self) -> Option<&'c OmniPod> {
        self.pod
    }

    /// Increases on every mutation; admissions are tied to one revision.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Items equipped by the user, in insertion order.
    pub fn items(&self) -> &[&'c Item] {
        &self.items
    }

    pub fn fixed_items(&self) -> &[&'c Item] {
        &self.fixed
    }

    /// Every item occupying this component: fixed, enabled toggles, equipped.
    pub fn all_items(&self) -> impl Iterator<Item = &'c Item> + '_ {
        self.fixed
            .iter()
            .copied()
            .chain(self.toggles.iter().filter(|t| t.enabled).map(|t| t.item))
            .chain(self.items.iter().copied())
    }

    /// Items that could be toggled here and whether they are enabled.
    pub fn toggleables(&self) -> impl Iterator<Item = (&'c Item, bool)> + '_ {
        self.toggles.iter().map(|t| (t.item, t.enabled))
    }

    pub fn toggle_state(&self, id: ItemId) -> Option<bool> {
        self.toggles
            .iter()
            .find(|t| t.item.id == id)
            .map(|t| t.enabled)
    }

    pub fn count(&self, id: ItemId) -> usize {
        self.all_items().filter(|item| item.id == id).count()
    }

    pub fn engine(&self) -> Option<&'c Item> {
        self.fixed
            .iter()
            .chain(self.items.iter())
            .copied()
            .find(|item| item.is_engine())
    }

    pub fn has_case(&self) -> bool {
        self.all_items().any(Item::is_case)
    }

    // ========================================================================
    // Slots
    // ========================================================================

    fn engine_heat_sink_slots(&self) -> usize {
        self.engine()
            .and_then(Item::engine)
            .map_or(0, |engine| usize::from(engine.heat_sink_slots()))
    }

    fn fixed_heat_sinks(&self) -> usize {
        self.fixed.iter().filter(|item| item.is_heat_sink()).count()
    }

    pub fn heat_sink_count(&self) -> usize {
        self.fixed_heat_sinks() + self.items.iter().filter(|item| item.is_heat_sink()).count()
    }

    /// Heat sinks currently absorbed by this component's engine.
    pub fn absorbed_heat_sinks(&self) -> usize {
        self.heat_sink_count().min(self.engine_heat_sink_slots())
    }

    /// Further heat sinks the engine here would absorb.
    pub fn free_engine_heat_sink_slots(&self) -> usize {
        self.engine_heat_sink_slots() - self.absorbed_heat_sinks()
    }

    /// Absorption flag for each equipped item, in order.
    ///
    /// Fixed heat sinks fill the engine first, then equipped ones by position.
    fn absorbed_flags(&self) -> impl Iterator<Item = bool> + '_ {
        let capacity = self.engine_heat_sink_slots();
        let mut ordinal = self.fixed_heat_sinks();
        self.items.iter().map(move |item| {
            if item.is_heat_sink() {
                ordinal += 1;
                ordinal <= capacity
            } else {
                false
            }
        })
    }

    pub fn slots_used(&self) -> u16 {
        let capacity = self.engine_heat_sink_slots();
        let mut absorbed_fixed = 0;
        let fixed: u16 = self
            .fixed
            .iter()
            .map(|item| {
                if item.is_heat_sink() && absorbed_fixed < capacity {
                    absorbed_fixed += 1;
                    0
                } else {
                    u16::from(item.slots)
                }
            })
            .sum();
        let toggled: u16 = self
            .toggles
            .iter()
            .filter(|t| t.enabled)
            .map(|t| u16::from(t.item.slots))
            .sum();
        let equipped: u16 = self
            .items
            .iter()
            .zip(self.absorbed_flags())
            .filter(|(_, absorbed)| !absorbed)
            .map(|(item, _)| item.slots_with(self.guidance))
            .sum();
        fixed + toggled + equipped
    }

    pub fn slots_total(&self) -> u16 {
        u16::from(self.def.slots)
    }

    pub fn slots_free(&self) -> u16 {
        self.slots_total().saturating_sub(self.slots_used())
    }

    /// Slots an item would take here, after heat-sink absorption.
    pub fn slot_cost(&self, item: &Item) -> u16 {
        if item.is_heat_sink() && self.free_engine_heat_sink_slots() > 0 {
            0
        } else {
            item.slots_with(self.guidance)
        }
    }

    /// Slots held by enabled arm actuators that a large-bore weapon displaces.
    fn displaceable_actuator_slots(&self) -> u16 {
        self.toggles
            .iter()
            .filter(|t| t.enabled)
            .map(|t| u16::from(t.item.slots))
            .sum()
    }

    // ========================================================================
    // Hardpoints
    // ========================================================================

    pub fn hardpoint_count(&self, kind: HardPointType) -> usize {
        match self.pod {
            Some(pod) => pod.hardpoint_count(kind),
            None => count_hardpoints(&self.def.hardpoints, kind),
        }
    }

    pub fn hardpoints_used(&self, kind: HardPointType) -> usize {
        self.all_items()
            .filter(|item| item.hardpoint == Some(kind))
            .count()
    }

    // ========================================================================
    // Equip rules
    // ========================================================================

    /// Catalog-level allowance: can this item ever be placed here?
    pub fn is_allowed(&self, item: &Item) -> bool {
        !item.is_internal()
            && item.is_allowed_in(self.location())
            && !(self.pod.is_some() && item.is_engine())
    }

    /// Local checks for adding `item`; never mutates.
    pub fn can_equip(&self, item: &Item) -> EquipResult {
        let location = self.location();
        if !self.is_allowed(item) {
            return EquipResult::at(EquipResultKind::NotSupported, location);
        }
        if item.is_case() && self.has_case() {
            return EquipResult::at(EquipResultKind::ComponentAlreadyHasCase, location);
        }
        if let Some(kind) = item.hardpoint {
            if self.hardpoints_used(kind) >= self.hardpoint_count(kind) {
                return EquipResult::at(EquipResultKind::NoFreeHardPoints, location);
            }
        }

        let mut available = self.slots_free();
        if item.is_large_bore() {
            available += self.displaceable_actuator_slots();
        }
        if self.slot_cost(item) > available {
            return EquipResult::at(EquipResultKind::NotEnoughSlots, location);
        }

        EquipResult::SUCCESS
    }

    /// Runs [`can_equip`](Self::can_equip) and, on success, issues a one-shot admission.
    ///
    /// # Errors
    ///
    /// Returns the rejecting [`EquipResult`].
    pub fn admit(&self, item: &'c Item) -> Result<Admission<'c>, EquipResult> {
        self.can_equip(item).into_result()?;
        Ok(Admission {
            item,
            location: self.location(),
            revision: self.revision,
        })
    }

    /// Adds the admitted item and returns its index.
    ///
    /// # Errors
    ///
    /// Returns `LoadoutError::StalePermit` if the admission was issued for
    /// another component or before a later mutation.
    pub fn add_item(&mut self, admission: Admission<'c>) -> Result<ItemIndex, LoadoutError> {
        if admission.location != self.location() || admission.revision != self.revision {
            return Err(LoadoutError::StalePermit);
        }
        Ok(self.insert(admission.item))
    }

    /// Appends without checks; callers have validated the item.
    pub(crate) fn insert(&mut self, item: &'c Item) -> ItemIndex {
        if item.is_large_bore() {
            for toggle in &mut self.toggles {
                toggle.enabled = false;
            }
        }
        self.items.push(item);
        self.revision += 1;
        tracing::trace!(location = %self.location(), item = %item, "item inserted");
        self.index_of(self.items.len() - 1)
    }

    fn index_of(&self, position: usize) -> ItemIndex {
        let mut absorbed_before = 0;
        for (index, absorbed) in self.absorbed_flags().enumerate() {
            if index == position {
                return if absorbed {
                    ItemIndex::Absorbed
                } else {
                    ItemIndex::Visible(position - absorbed_before)
                };
            }
            if absorbed {
                absorbed_before += 1;
            }
        }
        ItemIndex::Visible(position - absorbed_before)
    }

    /// True if `item` was equipped here by a user and may be taken out.
    pub fn can_remove_item(&self, item: &Item) -> bool {
        !item.is_internal() && self.items.iter().any(|i| i.id == item.id)
    }

    /// Removes the most recently added copy of `item` and returns the index it had.
    ///
    /// # Errors
    ///
    /// Returns `LoadoutError::NotRemovable` for internal parts and
    /// `LoadoutError::ItemNotEquipped` if the item is not equipped here.
    pub fn remove_item(&mut self, item: &Item) -> Result<ItemIndex, LoadoutError> {
        if item.is_internal() {
            return Err(LoadoutError::NotRemovable {
                location: self.location(),
                item: item.name.clone(),
            });
        }
        self.take(item)
    }

    /// Removes without the internal-part guard; used for engine side parts.
    pub(crate) fn take(&mut self, item: &Item) -> Result<ItemIndex, LoadoutError> {
        let position = self
            .items
            .iter()
            .rposition(|i| i.id == item.id)
            .ok_or_else(|| LoadoutError::ItemNotEquipped {
                location: self.location(),
                item: item.name.clone(),
            })?;
        let index = self.index_of(position);
        self.items.remove(position);
        self.revision += 1;
        tracing::trace!(location = %self.location(), item = %item, "item removed");
        Ok(index)
    }

    /// Removes every equipped item matching `pred`, keeping the order of the rest.
    pub(crate) fn drain_items(&mut self, mut pred: impl FnMut(&Item) -> bool) -> Vec<&'c Item> {
        let (drained, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.items)
            .into_iter()
            .partition(|item| pred(item));
        self.items = kept;
        self.revision += 1;
        drained
    }

    /// Removes the equipped heat sinks the engine here absorbs.
    pub(crate) fn drain_absorbed_heat_sinks(&mut self) -> Vec<&'c Item> {
        let flags: Vec<bool> = self.absorbed_flags().collect();
        let (drained, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.items)
            .into_iter()
            .zip(flags)
            .partition(|&(_, absorbed)| absorbed);
        self.items = kept.into_iter().map(|(item, _)| item).collect();
        self.revision += 1;
        drained.into_iter().map(|(item, _)| item).collect()
    }

    // ========================================================================
    // Toggles
    // ========================================================================

    /// Local checks for switching a toggleable actuator.
    pub fn can_toggle(&self, item: &Item, enabled: bool) -> EquipResult {
        let location = self.location();
        let Some(current) = self.toggle_state(item.id) else {
            return EquipResult::at(EquipResultKind::NotToggleable, location);
        };
        if current == enabled || !enabled {
            return EquipResult::SUCCESS;
        }
        if self.items.iter().any(|i| i.is_large_bore()) {
            return EquipResult::at(EquipResultKind::LargeBoreWeaponPresent, location);
        }
        if item.actuator() == Some(Actuator::Hand)
            && self.toggle_of(Actuator::LowerArm) == Some(false)
        {
            return EquipResult::at(EquipResultKind::LaaBeforeHa, location);
        }
        if u16::from(item.slots) > self.slots_free() {
            return EquipResult::at(EquipResultKind::NotEnoughSlots, location);
        }
        EquipResult::SUCCESS
    }

    fn toggle_of(&self, actuator: Actuator) -> Option<bool> {
        self.toggles
            .iter()
            .find(|t| t.item.actuator() == Some(actuator))
            .map(|t| t.enabled)
    }

    /// Switches an actuator; disabling the lower arm also disables the hand.
    pub(crate) fn set_toggle(&mut self, id: ItemId, enabled: bool) {
        let lower_arm = self
            .toggles
            .iter()
            .any(|t| t.item.id == id && t.item.actuator() == Some(Actuator::LowerArm));
        for toggle in &mut self.toggles {
            if toggle.item.id == id
                || (lower_arm && !enabled && toggle.item.actuator() == Some(Actuator::Hand))
            {
                toggle.enabled = enabled;
            }
        }
        self.revision += 1;
    }

    // ========================================================================
    // Omni pods and upgrades
    // ========================================================================

    /// Installs `pod`, dropping equipped items and enabling all its actuators.
    pub(crate) fn install_pod(
        &mut self,
        catalog: &'c Catalog,
        pod: &'c OmniPod,
    ) -> Result<(), LoadoutError> {
        let toggles = pod
            .toggleable
            .iter()
            .map(|&id| {
                catalog.item(id).map(|item| Toggle {
                    item,
                    enabled: true,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.items.clear();
        self.toggles = toggles;
        self.pod = Some(pod);
        self.revision += 1;
        Ok(())
    }

    pub(crate) fn set_guidance(&mut self, guidance: &'c GuidanceUpgrade) {
        self.guidance = guidance;
        self.revision += 1;
    }

    // ========================================================================
    // Armour
    // ========================================================================

    pub fn armour(&self, side: ArmourSide) -> u16 {
        self.armour[side.slot()]
    }

    /// Armour on all meaningful sides of this location.
    pub fn armour_total(&self) -> u16 {
        self.location()
            .armour_sides()
            .iter()
            .map(|&side| self.armour(side))
            .sum()
    }

    /// Maximum for one side; two-sided components share one budget.
    pub fn armour_max(&self, side: ArmourSide) -> u16 {
        let max = self.def.max_armour;
        match side {
            ArmourSide::Only => max,
            ArmourSide::Front => max.saturating_sub(self.armour(ArmourSide::Back)),
            ArmourSide::Back => max.saturating_sub(self.armour(ArmourSide::Front)),
        }
    }

    pub fn has_manual_armour(&self) -> bool {
        self.manual_armour
    }

    /// Sets armour without validation; limits are enforced by the loadout.
    pub fn set_armour(&mut self, side: ArmourSide, amount: u16, manual: bool) {
        self.armour[side.slot()] = amount;
        self.manual_armour = manual;
        self.revision += 1;
    }
}

impl PartialEq for ConfiguredComponent<'_> {
    fn eq(&self, other: &Self) -> bool {
        let ids = |items: &[&Item]| items.iter().map(|i| i.id).collect::<Vec<_>>();
        let toggles = |c: &Self| c.toggleables().map(|(i, on)| (i.id, on)).collect::<Vec<_>>();
        self.location() == other.location()
            && self.pod.map(|p| p.id) == other.pod.map(|p| p.id)
            && ids(&self.fixed) == ids(&other.fixed)
            && ids(&self.items) == ids(&other.items)
            && toggles(self) == toggles(other)
            && self.armour == other.armour
            && self.manual_armour == other.manual_armour
            && self.guidance.id == other.guidance.id
    }
}
