//! Weapon-group assignments.
//!
//! Weapons are addressed by ordinal: their position when walking the loadout's
//! equipped weapons in location order, then insertion order. Each weapon has a
//! bit mask of the groups it fires with.

use arrayvec::ArrayVec;
use bitflags::bitflags;

use crate::config::RulesConfig;

use super::error::LoadoutError;

bitflags! {
    /// Groups a single weapon belongs to.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct GroupMask: u8 {
        const GROUP_1 = 1 << 0;
        const GROUP_2 = 1 << 1;
        const GROUP_3 = 1 << 2;
        const GROUP_4 = 1 << 3;
        const GROUP_5 = 1 << 4;
        const GROUP_6 = 1 << 5;
    }
}

impl GroupMask {
    /// Mask for a zero-based group index.
    ///
    /// # Errors
    ///
    /// Returns `LoadoutError::InvalidWeaponGroup` for indices past the last group.
    pub fn group(group: usize) -> Result<Self, LoadoutError> {
        if group >= RulesConfig::WEAPON_GROUPS {
            return Err(LoadoutError::InvalidWeaponGroup { group });
        }
        Ok(Self::from_bits_truncate(1 << group))
    }
}

/// Group masks indexed by weapon ordinal; ordinals past the end are ungrouped.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponGroups {
    masks: ArrayVec<GroupMask, { RulesConfig::MAX_GROUPED_WEAPONS }>,
}

impl WeaponGroups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mask(&self, ordinal: usize) -> GroupMask {
        self.masks.get(ordinal).copied().unwrap_or_default()
    }

    /// Whether the weapon at `ordinal` fires with `group`.
    ///
    /// # Errors
    ///
    /// Returns `LoadoutError::InvalidWeaponGroup` for an unknown group.
    pub fn is_in_group(&self, group: usize, ordinal: usize) -> Result<bool, LoadoutError> {
        Ok(self.mask(ordinal).contains(GroupMask::group(group)?))
    }

    /// Ordinals of all weapons in `group`.
    ///
    /// # Errors
    ///
    /// Returns `LoadoutError::InvalidWeaponGroup` for an unknown group.
    pub fn weapons_in(&self, group: usize) -> Result<Vec<usize>, LoadoutError> {
        let flag = GroupMask::group(group)?;
        Ok(self
            .masks
            .iter()
            .enumerate()
            .filter(|(_, mask)| mask.contains(flag))
            .map(|(ordinal, _)| ordinal)
            .collect())
    }

    /// Adds or removes the weapon at `ordinal` from `group`.
    ///
    /// # Errors
    ///
    /// Returns `LoadoutError::InvalidWeaponGroup` for an unknown group and
    /// `LoadoutError::InvalidWeapon` for an ordinal past the tracked range.
    pub fn set(&mut self, group: usize, ordinal: usize, enabled: bool) -> Result<(), LoadoutError> {
        let flag = GroupMask::group(group)?;
        if ordinal >= self.masks.capacity() {
            return Err(LoadoutError::InvalidWeapon { ordinal });
        }
        while self.masks.len() <= ordinal {
            self.masks.push(GroupMask::empty());
        }
        self.masks[ordinal].set(flag, enabled);
        Ok(())
    }

    /// Shifts assignments up after a weapon was inserted at `ordinal`.
    pub(crate) fn weapon_inserted(&mut self, ordinal: usize) {
        if ordinal >= self.masks.len() {
            return;
        }
        if self.masks.is_full() {
            self.masks.pop();
        }
        self.masks.insert(ordinal, GroupMask::empty());
    }

    /// Drops the assignment of the removed weapon and shifts later ones down.
    pub(crate) fn weapon_removed(&mut self, ordinal: usize) {
        if ordinal < self.masks.len() {
            self.masks.remove(ordinal);
        }
    }
}

impl WeaponGroups {
    fn assigned(&self) -> &[GroupMask] {
        let len = self
            .masks
            .iter()
            .rposition(|mask| !mask.is_empty())
            .map_or(0, |last| last + 1);
        &self.masks[..len]
    }
}

impl PartialEq for WeaponGroups {
    fn eq(&self, other: &Self) -> bool {
        self.assigned() == other.assigned()
    }
}

impl Eq for WeaponGroups {}
