//! Common error infrastructure for mechlab-core.
//!
//! Validation outcomes are not errors: every "can I do this?" query answers
//! with an [`EquipResult`](crate::equip::EquipResult). The error types in this
//! crate cover the remaining failures:
//!
//! - [`CatalogError`](crate::catalog::CatalogError): dangling or duplicate
//!   catalog references, detected while building or querying a catalog
//! - [`LoadoutError`](crate::state::LoadoutError): rejected edits and broken
//!   caller contracts (removing an item that was never added, stale permits)
//!
//! Both implement [`MechlabError`] so hosts can classify them uniformly.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the edit was rejected by a rule; a different edit may succeed
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: a caller broke a documented contract
/// - **Fatal**: the catalog itself is inconsistent
/// Variants are ordered from least to most severe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Rejected by a loadout rule (too heavy, not enough slots, ...).
    Recoverable,

    /// Invalid input (wrong armour side, unknown weapon group, ...).
    Validation,

    /// Contract violation by the caller (stale permit, item not equipped).
    Internal,

    /// Catalog inconsistency; nothing built on it can be trusted.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates a bug in the caller or the data.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all mechlab-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Error codes are stable identifiers, suitable for logs and tests
pub trait MechlabError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_covers_fatal() {
        assert!(ErrorSeverity::Fatal.is_internal());
        assert!(ErrorSeverity::Internal.is_internal());
        assert!(!ErrorSeverity::Recoverable.is_internal());
        assert!(ErrorSeverity::Recoverable.is_recoverable());
        assert_eq!(ErrorSeverity::Validation.as_str(), "validation");
    }
}
