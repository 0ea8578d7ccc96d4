//! Stock pilot modules.

use mechlab_core::CatalogBuilder;
use mechlab_core::catalog::{Faction, Modifier, ModuleId, ModuleSlot, PilotModule};

use crate::ids::module::*;

fn module(id: ModuleId, name: &str, slot: ModuleSlot, modifiers: Vec<Modifier>) -> PilotModule {
    PilotModule {
        id,
        name: name.to_string(),
        slot,
        faction: Faction::Any,
        modifiers,
    }
}

pub fn register(builder: CatalogBuilder) -> CatalogBuilder {
    use ModuleSlot::*;

    [
        module(COOL_SHOT, "Cool Shot", Consumable, vec![]),
        module(UAV, "UAV", Consumable, vec![]),
        module(AIR_STRIKE, "Air Strike", Consumable, vec![]),
        module(
            ADVANCED_ZOOM,
            "Advanced Zoom",
            Mech,
            vec![Modifier::additive("sensor.zoom", 2.0)],
        ),
        module(
            RADAR_DEPRIVATION,
            "Radar Deprivation",
            Mech,
            vec![Modifier::multiplicative("sensor.target_decay", -1.0)],
        ),
        module(
            SEISMIC_SENSOR,
            "Seismic Sensor",
            Mech,
            vec![Modifier::additive("sensor.seismic_range", 200.0)],
        ),
        module(
            MEDIUM_LASER_COOLDOWN,
            "Medium Laser Cooldown",
            Weapon,
            vec![Modifier::multiplicative("medium_laser.cooldown", -0.12)],
        ),
        module(
            LRM_RANGE,
            "LRM Range",
            Weapon,
            vec![Modifier::multiplicative("lrm.range", 0.1)],
        ),
    ]
    .into_iter()
    .fold(builder, CatalogBuilder::module)
}
