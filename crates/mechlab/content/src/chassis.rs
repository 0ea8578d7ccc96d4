//! Stock chassis and omni pods.
//!
//! Maximum armour follows the usual rule: twice the internal structure of a
//! location, a flat 18 points for the head. Torso values are front and back
//! combined.

use mechlab_core::CatalogBuilder;
use mechlab_core::catalog::{
    Chassis, ChassisId, ChassisVariant, ComponentDef, Faction, HardPointType, ItemId, Location,
    Modifier, ModuleSlots, OmniPod, OmniPodId, UpgradeIds,
};

use crate::ids::{chassis::*, item::*, pod::*, upgrade::*};

const HEAD_MAX_ARMOUR: u16 = 18;

/// Internal structure points by tonnage: centre torso, side torso, arm, leg.
const INTERNAL_STRUCTURE: [(u8, [u16; 4]); 5] = [
    (30, [10, 7, 5, 7]),
    (35, [11, 8, 6, 8]),
    (50, [16, 12, 8, 12]),
    (75, [23, 16, 12, 16]),
    (100, [31, 21, 17, 21]),
];

const NONE: &[HardPointType] = &[];

fn max_armour(tonnage: u8, location: Location) -> u16 {
    let Some(&(_, [ct, st, arm, leg])) = INTERNAL_STRUCTURE.iter().find(|(t, _)| *t == tonnage)
    else {
        return 0;
    };
    let internal = match location {
        Location::Head => return HEAD_MAX_ARMOUR,
        Location::CenterTorso => ct,
        Location::LeftTorso | Location::RightTorso => st,
        Location::LeftArm | Location::RightArm => arm,
        Location::LeftLeg | Location::RightLeg => leg,
    };
    internal * 2
}

/// Arm actuators present beyond shoulder and upper arm.
#[derive(Clone, Copy)]
enum Arms {
    Full,
    UpperOnly,
}

/// Hardpoints per location, in [`Location::ALL`] order.
type Hardpoints = [&'static [HardPointType]; 8];

fn fixed_items(location: Location, arms: Arms) -> Vec<ItemId> {
    match (location, arms) {
        (Location::Head, _) => vec![LIFE_SUPPORT, SENSORS, COCKPIT],
        (Location::LeftArm | Location::RightArm, Arms::Full) => {
            vec![SHOULDER, UPPER_ARM, LOWER_ARM, HAND]
        }
        (Location::LeftArm | Location::RightArm, Arms::UpperOnly) => vec![SHOULDER, UPPER_ARM],
        (Location::CenterTorso, _) => vec![GYRO],
        (Location::LeftLeg | Location::RightLeg, _) => vec![HIP, UPPER_LEG, LOWER_LEG, FOOT],
        (Location::LeftTorso | Location::RightTorso, _) => Vec::new(),
    }
}

fn slots(location: Location) -> u8 {
    match location {
        Location::Head | Location::LeftLeg | Location::RightLeg => 6,
        _ => 12,
    }
}

fn frame(tonnage: u8, arms: Arms, hardpoints: Hardpoints) -> Vec<ComponentDef> {
    Location::ALL
        .into_iter()
        .zip(hardpoints)
        .map(|(location, hardpoints)| ComponentDef {
            location,
            slots: slots(location),
            max_armour: max_armour(tonnage, location),
            fixed_items: fixed_items(location, arms),
            hardpoints: hardpoints.to_vec(),
        })
        .collect()
}

fn inner_sphere_upgrades() -> UpgradeIds {
    UpgradeIds {
        structure: STANDARD_STRUCTURE,
        armour: STANDARD_ARMOUR,
        heat_sink: SINGLE_HEAT_SINKS,
        guidance: NO_GUIDANCE,
    }
}

struct StandardSpec {
    id: ChassisId,
    name: &'static str,
    series: &'static str,
    tonnage: u8,
    engines: (u16, u16),
    max_jump_jets: u8,
    arms: Arms,
    hardpoints: Hardpoints,
    quirks: Vec<Modifier>,
}

fn standard(spec: StandardSpec) -> Chassis {
    Chassis {
        id: spec.id,
        name: spec.name.to_string(),
        series: spec.series.to_string(),
        faction: Faction::InnerSphere,
        mass_max: f64::from(spec.tonnage),
        engine_min: spec.engines.0,
        engine_max: spec.engines.1,
        max_jump_jets: spec.max_jump_jets,
        components: frame(spec.tonnage, spec.arms, spec.hardpoints),
        module_slots: ModuleSlots {
            consumable: 2,
            weapon: 1,
            mech: 2,
        },
        quirks: spec.quirks,
        default_upgrades: inner_sphere_upgrades(),
        variant: ChassisVariant::Standard,
    }
}

fn standard_chassis() -> Vec<Chassis> {
    use HardPointType::*;

    vec![
        standard(StandardSpec {
            id: URBANMECH_UM_R60,
            name: "UM-R60",
            series: "UrbanMech",
            tonnage: 30,
            engines: (100, 180),
            max_jump_jets: 2,
            arms: Arms::Full,
            hardpoints: [NONE, &[Energy], NONE, NONE, NONE, &[Ballistic], NONE, NONE],
            quirks: vec![Modifier::additive("armour.centre_torso", 12.0)],
        }),
        standard(StandardSpec {
            id: JENNER_JR7_D,
            name: "JR7-D",
            series: "Jenner",
            tonnage: 35,
            engines: (100, 300),
            max_jump_jets: 5,
            arms: Arms::UpperOnly,
            hardpoints: [
                NONE,
                &[Energy, Energy],
                NONE,
                &[Missile],
                NONE,
                &[Energy, Energy],
                NONE,
                NONE,
            ],
            quirks: Vec::new(),
        }),
        standard(StandardSpec {
            id: HUNCHBACK_HBK_4G,
            name: "HBK-4G",
            series: "Hunchback",
            tonnage: 50,
            engines: (150, 260),
            max_jump_jets: 0,
            arms: Arms::Full,
            hardpoints: [
                &[Energy],
                &[Energy],
                NONE,
                NONE,
                &[Ballistic, Ballistic],
                &[Energy],
                NONE,
                NONE,
            ],
            quirks: vec![Modifier::multiplicative("ballistic.cooldown", -0.1)],
        }),
        standard(StandardSpec {
            id: ATLAS_AS7_D,
            name: "AS7-D",
            series: "Atlas",
            tonnage: 100,
            engines: (200, 360),
            max_jump_jets: 0,
            arms: Arms::Full,
            hardpoints: [
                NONE,
                &[Energy],
                &[Missile, Missile],
                &[Energy, Energy],
                &[Ballistic],
                &[Energy],
                NONE,
                NONE,
            ],
            quirks: Vec::new(),
        }),
        standard(StandardSpec {
            id: ATLAS_AS7_D_DC,
            name: "AS7-D-DC",
            series: "Atlas",
            tonnage: 100,
            engines: (200, 360),
            max_jump_jets: 0,
            arms: Arms::Full,
            hardpoints: [
                NONE,
                &[Energy],
                &[Missile, Missile, Ecm],
                &[Energy, Energy],
                &[Ballistic],
                &[Energy],
                NONE,
                NONE,
            ],
            quirks: vec![Modifier::additive("armour.centre_torso", 20.0)],
        }),
    ]
}

const TIMBER_WOLF: &str = "Timber Wolf";
const TIMBER_WOLF_TONNAGE: u8 = 75;
const TIMBER_WOLF_ENGINE: u16 = 375;

fn pod(id: OmniPodId, name: &str, location: Location, hardpoints: &[HardPointType]) -> OmniPod {
    OmniPod {
        id,
        name: name.to_string(),
        series: TIMBER_WOLF.to_string(),
        location,
        hardpoints: hardpoints.to_vec(),
        max_jump_jets: 0,
        toggleable: if location.is_arm() {
            vec![LOWER_ARM, HAND]
        } else {
            Vec::new()
        },
        quirks: Vec::new(),
    }
}

fn omni_pods() -> Vec<OmniPod> {
    use HardPointType::*;
    use Location::*;

    let jump_leg = |id, name, location| OmniPod {
        max_jump_jets: 1,
        ..pod(id, name, location, NONE)
    };
    vec![
        pod(TBR_PRIME_HEAD, "TBR-PRIME Head", Head, NONE),
        pod(TBR_PRIME_LEFT_ARM, "TBR-PRIME Left Arm", LeftArm, &[Energy, Energy]),
        pod(TBR_PRIME_LEFT_TORSO, "TBR-PRIME Left Torso", LeftTorso, &[Missile, Energy]),
        pod(TBR_PRIME_CENTRE_TORSO, "TBR-PRIME Centre Torso", CenterTorso, NONE),
        pod(TBR_PRIME_RIGHT_TORSO, "TBR-PRIME Right Torso", RightTorso, &[Missile, Ballistic]),
        pod(TBR_PRIME_RIGHT_ARM, "TBR-PRIME Right Arm", RightArm, &[Energy, Energy, Ballistic]),
        pod(TBR_PRIME_LEFT_LEG, "TBR-PRIME Left Leg", LeftLeg, NONE),
        pod(TBR_PRIME_RIGHT_LEG, "TBR-PRIME Right Leg", RightLeg, NONE),
        pod(TBR_S_LEFT_ARM, "TBR-S Left Arm", LeftArm, &[Energy, Energy, Energy]),
        pod(TBR_S_RIGHT_ARM, "TBR-S Right Arm", RightArm, &[Energy, Energy, Energy]),
        jump_leg(TBR_S_LEFT_LEG, "TBR-S Left Leg", LeftLeg),
        jump_leg(TBR_S_RIGHT_LEG, "TBR-S Right Leg", RightLeg),
        OmniPod {
            quirks: vec![Modifier::additive("armour.right_torso", 10.0)],
            ..pod(TBR_C_RIGHT_TORSO, "TBR-C Right Torso", RightTorso, &[Missile, Missile, Ecm])
        },
    ]
}

fn timber_wolf_prime() -> Chassis {
    let engine = clan_xl_engine(TIMBER_WOLF_ENGINE);
    let mut components = frame(TIMBER_WOLF_TONNAGE, Arms::UpperOnly, [NONE; 8]);
    for component in &mut components {
        match component.location {
            Location::CenterTorso => component.fixed_items.push(engine),
            Location::LeftTorso | Location::RightTorso => {
                component.fixed_items.push(CLAN_XL_ENGINE_SIDE);
            }
            _ => {}
        }
    }

    Chassis {
        id: TIMBER_WOLF_PRIME,
        name: "TBR-PRIME".to_string(),
        series: TIMBER_WOLF.to_string(),
        faction: Faction::Clan,
        mass_max: f64::from(TIMBER_WOLF_TONNAGE),
        engine_min: TIMBER_WOLF_ENGINE,
        engine_max: TIMBER_WOLF_ENGINE,
        max_jump_jets: 0,
        components,
        module_slots: ModuleSlots {
            consumable: 2,
            weapon: 2,
            mech: 2,
        },
        quirks: Vec::new(),
        default_upgrades: UpgradeIds {
            structure: CLAN_ENDO_STEEL,
            armour: CLAN_FERRO_FIBROUS,
            heat_sink: CLAN_DOUBLE_HEAT_SINKS,
            guidance: NO_GUIDANCE,
        },
        variant: ChassisVariant::Omni {
            default_pods: vec![
                TBR_PRIME_HEAD,
                TBR_PRIME_LEFT_ARM,
                TBR_PRIME_LEFT_TORSO,
                TBR_PRIME_CENTRE_TORSO,
                TBR_PRIME_RIGHT_TORSO,
                TBR_PRIME_RIGHT_ARM,
                TBR_PRIME_LEFT_LEG,
                TBR_PRIME_RIGHT_LEG,
            ],
        },
    }
}

pub fn register(builder: CatalogBuilder) -> CatalogBuilder {
    let builder = omni_pods().into_iter().fold(builder, CatalogBuilder::omni_pod);
    standard_chassis()
        .into_iter()
        .chain([timber_wolf_prime()])
        .fold(builder, CatalogBuilder::chassis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn armour_limits_follow_internal_structure() {
        assert_eq!(max_armour(100, Location::CenterTorso), 62);
        assert_eq!(max_armour(50, Location::LeftArm), 16);
        assert_eq!(max_armour(30, Location::Head), HEAD_MAX_ARMOUR);
    }

    #[test]
    fn every_stock_tonnage_has_internal_structure() {
        for chassis in standard_chassis().into_iter().chain([timber_wolf_prime()]) {
            assert!(
                chassis.components.iter().all(|c| c.max_armour > 0),
                "{} has no armour limits",
                chassis.name
            );
        }
    }
}
