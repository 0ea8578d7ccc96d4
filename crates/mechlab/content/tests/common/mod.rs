#![allow(dead_code)]

use mechlab_core::{Catalog, ChassisId, Item, ItemId, Loadout};
use tracing_subscriber::EnvFilter;

/// Routes engine logs to the test harness; `RUST_LOG=mechlab_core=debug` shows them.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn catalog() -> Catalog {
    init_tracing();
    mechlab_content::stock_catalog().expect("stock catalog is valid")
}

pub fn item(catalog: &Catalog, id: ItemId) -> &Item {
    catalog.item(id).expect("stock item")
}

pub fn loadout(catalog: &Catalog, chassis: ChassisId) -> Loadout<'_> {
    Loadout::new(catalog, chassis).expect("stock chassis")
}
