//! Stock structure, armour, heat-sink and guidance upgrades.

use mechlab_core::CatalogBuilder;
use mechlab_core::catalog::{
    ArmourUpgrade, Faction, GuidanceUpgrade, HeatSinkUpgrade, StructureUpgrade,
};

use crate::ids::{item, upgrade::*};

pub fn register(builder: CatalogBuilder) -> CatalogBuilder {
    use Faction::{Any, Clan, InnerSphere as IS};

    let structure = |id, name: &str, faction, mass_factor, dynamic_slots| StructureUpgrade {
        id,
        name: name.to_string(),
        faction,
        mass_factor,
        dynamic_slots,
    };
    let armour = |id, name: &str, faction, points_per_ton, dynamic_slots, requires_ecm| {
        ArmourUpgrade {
            id,
            name: name.to_string(),
            faction,
            points_per_ton,
            dynamic_slots,
            requires_ecm,
        }
    };
    let heat_sink = |id, name: &str, faction, heat_sink| HeatSinkUpgrade {
        id,
        name: name.to_string(),
        faction,
        heat_sink,
    };
    let guidance = |id, name: &str, faction, extra_slots, extra_mass| GuidanceUpgrade {
        id,
        name: name.to_string(),
        faction,
        extra_slots,
        extra_mass,
    };

    builder
        .structure(structure(STANDARD_STRUCTURE, "Standard Structure", Any, 0.1, 0))
        .structure(structure(ENDO_STEEL, "Endo-Steel", IS, 0.05, 14))
        .structure(structure(CLAN_ENDO_STEEL, "C-Endo-Steel", Clan, 0.05, 7))
        .armour(armour(STANDARD_ARMOUR, "Standard Armour", Any, 32.0, 0, false))
        .armour(armour(FERRO_FIBROUS, "Ferro-Fibrous", IS, 35.84, 14, false))
        .armour(armour(CLAN_FERRO_FIBROUS, "C-Ferro-Fibrous", Clan, 38.4, 7, false))
        .armour(armour(LIGHT_FERRO_FIBROUS, "Light Ferro-Fibrous", IS, 33.92, 7, false))
        .armour(armour(STEALTH_ARMOUR, "Stealth Armour", IS, 32.0, 12, true))
        .heat_sink(heat_sink(SINGLE_HEAT_SINKS, "Single Heat Sinks", Any, item::HEAT_SINK))
        .heat_sink(heat_sink(DOUBLE_HEAT_SINKS, "Double Heat Sinks", IS, item::DOUBLE_HEAT_SINK))
        .heat_sink(heat_sink(
            CLAN_DOUBLE_HEAT_SINKS,
            "C-Double Heat Sinks",
            Clan,
            item::CLAN_DOUBLE_HEAT_SINK,
        ))
        .guidance(guidance(NO_GUIDANCE, "No Guidance", Any, 0, 0.0))
        .guidance(guidance(ARTEMIS_IV, "Artemis IV", IS, 1, 1.0))
        .guidance(guidance(CLAN_ARTEMIS_IV, "C-Artemis IV", Clan, 1, 1.0))
}
