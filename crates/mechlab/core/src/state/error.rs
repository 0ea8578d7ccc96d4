//! Loadout editing errors.

use crate::catalog::{ArmourSide, CatalogError, Location};
use crate::equip::EquipResult;
use crate::error::{ErrorSeverity, MechlabError};

/// Errors returned by loadout and component mutators.
///
/// `Rejected` carries the [`EquipResult`] of a failed rule check; the other
/// variants report a caller that broke a documented precondition.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoadoutError {
    /// A loadout rule rejected the edit.
    #[error("{0}")]
    Rejected(EquipResult),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("{item} is not equipped on {location}")]
    ItemNotEquipped { location: Location, item: String },

    #[error("{item} cannot be removed from {location}")]
    NotRemovable { location: Location, item: String },

    /// The permit or admission was issued for a different state.
    #[error("permit is stale: the component changed after it was issued")]
    StalePermit,

    #[error("{location} has no {side} armour")]
    InvalidArmourSide { location: Location, side: ArmourSide },

    #[error("'{chassis}' is not an omni chassis")]
    NotOmni { chassis: String },

    #[error("weapon group {group} does not exist")]
    InvalidWeaponGroup { group: usize },

    #[error("no weapon at position {ordinal}")]
    InvalidWeapon { ordinal: usize },

    #[error("module '{module}' is not equipped")]
    ModuleNotEquipped { module: String },
}

impl From<EquipResult> for LoadoutError {
    fn from(result: EquipResult) -> Self {
        LoadoutError::Rejected(result)
    }
}

impl LoadoutError {
    /// The rejection reason, if a rule check failed.
    pub fn equip_result(&self) -> Option<EquipResult> {
        match self {
            LoadoutError::Rejected(result) => Some(*result),
            _ => None,
        }
    }
}

impl MechlabError for LoadoutError {
    fn severity(&self) -> ErrorSeverity {
        use LoadoutError::*;
        match self {
            Rejected(_) => ErrorSeverity::Recoverable,
            Catalog(error) => error.severity(),
            ItemNotEquipped { .. } | NotRemovable { .. } | StalePermit => ErrorSeverity::Internal,
            InvalidArmourSide { .. }
            | NotOmni { .. }
            | InvalidWeaponGroup { .. }
            | InvalidWeapon { .. }
            | ModuleNotEquipped { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use LoadoutError::*;
        match self {
            Rejected(result) => result.kind.error_code(),
            Catalog(error) => error.error_code(),
            ItemNotEquipped { .. } => "LOADOUT_ITEM_NOT_EQUIPPED",
            NotRemovable { .. } => "LOADOUT_NOT_REMOVABLE",
            StalePermit => "LOADOUT_STALE_PERMIT",
            InvalidArmourSide { .. } => "LOADOUT_INVALID_ARMOUR_SIDE",
            NotOmni { .. } => "LOADOUT_NOT_OMNI",
            InvalidWeaponGroup { .. } => "LOADOUT_INVALID_WEAPON_GROUP",
            InvalidWeapon { .. } => "LOADOUT_INVALID_WEAPON",
            ModuleNotEquipped { .. } => "LOADOUT_MODULE_NOT_EQUIPPED",
        }
    }
}
