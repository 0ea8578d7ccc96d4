//! Mutable loadout state.
//!
//! A [`Loadout`] owns one [`ConfiguredComponent`] per location. Checks on
//! both return [`EquipResult`](crate::EquipResult) values and never mutate;
//! mutators consume a token issued by a successful check ([`Admission`],
//! [`EquipPermit`]) or re-run the check themselves.
mod component;
mod error;
mod loadout;
mod weapon_groups;

pub use component::{Admission, ConfiguredComponent, ItemIndex};
pub use error::LoadoutError;
pub use loadout::{ENGINE_LOCATION, EquipPermit, Loadout};
pub use weapon_groups::{GroupMask, WeaponGroups};
