//! Stock game data for `mechlab-core`.
//!
//! The catalog is defined in code: a handful of Inner Sphere chassis, one
//! Clan omni chassis with alternative pods, and the weapons, engines,
//! upgrades and pilot modules they use. Host applications start from
//! [`stock_builder`] to add their own definitions; tests use
//! [`stock_catalog`] directly.
//!
//! Identifiers live in [`ids`] and are stable across releases.

pub mod ids;

mod chassis;
mod equipment;
mod modules;
mod upgrades;

pub use equipment::ENGINE_RATINGS;

use mechlab_core::{Catalog, CatalogBuilder, CatalogError};

/// Builder preloaded with every stock definition.
pub fn stock_builder() -> CatalogBuilder {
    let builder = equipment::items()
        .into_iter()
        .fold(Catalog::builder(), CatalogBuilder::item);
    let builder = upgrades::register(builder);
    let builder = modules::register(builder);
    chassis::register(builder)
}

/// Validated stock catalog.
///
/// # Errors
///
/// Returns the [`CatalogError`] of the first inconsistent definition.
pub fn stock_catalog() -> Result<Catalog, CatalogError> {
    stock_builder().build()
}
