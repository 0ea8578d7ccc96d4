//! Catalog access errors.

use super::chassis::{ChassisId, OmniPodId};
use super::item::ItemId;
use super::module::ModuleId;
use super::upgrades::UpgradeId;
use crate::error::{ErrorSeverity, MechlabError};

/// Errors raised while building or querying a [`Catalog`](super::Catalog).
///
/// A catalog is treated as already-validated game data, so reference errors
/// found while building it are fatal: nothing constructed from it can be trusted.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("item {0} not found")]
    UnknownItem(ItemId),

    #[error("chassis {0:?} not found")]
    UnknownChassis(ChassisId),

    #[error("omni pod {0:?} not found")]
    UnknownOmniPod(OmniPodId),

    #[error("upgrade {0} not found")]
    UnknownUpgrade(UpgradeId),

    #[error("pilot module {0:?} not found")]
    UnknownModule(ModuleId),

    #[error("duplicate {kind} id {id}")]
    DuplicateId { kind: &'static str, id: u32 },

    #[error("chassis '{chassis}' is malformed: {reason}")]
    MalformedChassis {
        chassis: String,
        reason: &'static str,
    },

    #[error("'{owner}' has an invalid reference: {reason}")]
    InvalidReference {
        owner: String,
        reason: &'static str,
    },
}

impl MechlabError for CatalogError {
    fn severity(&self) -> ErrorSeverity {
        use CatalogError::*;
        match self {
            // Lookups by id may come from user input (e.g. a decoded link)
            UnknownItem(_) | UnknownChassis(_) | UnknownOmniPod(_) | UnknownUpgrade(_)
            | UnknownModule(_) => ErrorSeverity::Validation,

            DuplicateId { .. } | MalformedChassis { .. } | InvalidReference { .. } => {
                ErrorSeverity::Fatal
            }
        }
    }

    fn error_code(&self) -> &'static str {
        use CatalogError::*;
        match self {
            UnknownItem(_) => "CATALOG_UNKNOWN_ITEM",
            UnknownChassis(_) => "CATALOG_UNKNOWN_CHASSIS",
            UnknownOmniPod(_) => "CATALOG_UNKNOWN_OMNI_POD",
            UnknownUpgrade(_) => "CATALOG_UNKNOWN_UPGRADE",
            UnknownModule(_) => "CATALOG_UNKNOWN_MODULE",
            DuplicateId { .. } => "CATALOG_DUPLICATE_ID",
            MalformedChassis { .. } => "CATALOG_MALFORMED_CHASSIS",
            InvalidReference { .. } => "CATALOG_INVALID_REFERENCE",
        }
    }
}
