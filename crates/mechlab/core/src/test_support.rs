//! Small hand-built catalog shared by unit tests.
//!
//! "Test Standard" (50 t, Inner Sphere) has energy hardpoints only in the
//! arms (one left, two right), twelve free slots in each torso and no fixed
//! engine. "Test Omni" (75 t, Clan) carries a fixed standard 300 engine and
//! takes its hardpoints, jump jets and arm actuators from pods.

use crate::catalog::*;

pub const STANDARD_CHASSIS: ChassisId = ChassisId(1);
pub const OMNI_CHASSIS: ChassisId = ChassisId(2);

pub const MEDIUM_LASER: ItemId = ItemId(100);
pub const LARGE_BORE_CANNON: ItemId = ItemId(101);
pub const LRM_10: ItemId = ItemId(102);
pub const FIVE_SLOT_ITEM: ItemId = ItemId(110);
pub const EIGHT_SLOT_ITEM: ItemId = ItemId(111);
pub const STD_ENGINE_300: ItemId = ItemId(200);
pub const XL_ENGINE_300: ItemId = ItemId(201);
pub const XL_SIDE: ItemId = ItemId(202);
pub const HEAT_SINK: ItemId = ItemId(300);
pub const DOUBLE_HEAT_SINK: ItemId = ItemId(301);
pub const JUMP_JET: ItemId = ItemId(400);
pub const ECM: ItemId = ItemId(500);
pub const CASE: ItemId = ItemId(501);
pub const COCKPIT: ItemId = ItemId(600);
pub const SHOULDER: ItemId = ItemId(601);
pub const UPPER_ARM: ItemId = ItemId(602);
pub const LOWER_ARM: ItemId = ItemId(603);
pub const HAND: ItemId = ItemId(604);
pub const HIP: ItemId = ItemId(605);

pub const STANDARD_STRUCTURE: UpgradeId = UpgradeId(1);
pub const ENDO_STEEL: UpgradeId = UpgradeId(2);
pub const STANDARD_ARMOUR: UpgradeId = UpgradeId(10);
pub const STEALTH_ARMOUR: UpgradeId = UpgradeId(12);
pub const SINGLE_HEAT_SINKS: UpgradeId = UpgradeId(20);
pub const DOUBLE_HEAT_SINKS: UpgradeId = UpgradeId(21);
pub const NO_GUIDANCE: UpgradeId = UpgradeId(30);
pub const ARTEMIS: UpgradeId = UpgradeId(31);

pub const CONSUMABLE_MODULE: ModuleId = ModuleId(1);
pub const SECOND_CONSUMABLE_MODULE: ModuleId = ModuleId(2);

pub const ALT_RIGHT_ARM_POD: OmniPodId = OmniPodId(20);

fn item(id: ItemId, name: &str, mass: f64, slots: u8, kind: ItemKind) -> Item {
    Item {
        id,
        name: name.into(),
        mass,
        slots,
        faction: Faction::Any,
        hardpoint: None,
        allowed_locations: None,
        max_per_loadout: None,
        modifiers: Vec::new(),
        kind,
    }
}

fn weapon(id: ItemId, name: &str, mass: f64, slots: u8, hardpoint: HardPointType) -> Item {
    Item {
        hardpoint: Some(hardpoint),
        ..item(
            id,
            name,
            mass,
            slots,
            ItemKind::Weapon(WeaponData {
                large_bore: false,
                guidance_capable: false,
            }),
        )
    }
}

fn internal(id: ItemId, name: &str, slots: u8, kind: InternalKind) -> Item {
    item(id, name, 0.0, slots, ItemKind::Internal(kind))
}

fn engine(id: ItemId, name: &str, mass: f64, data: EngineData) -> Item {
    Item {
        allowed_locations: Some(vec![Location::CenterTorso]),
        ..item(id, name, mass, 6, ItemKind::Engine(data))
    }
}

fn items() -> Vec<Item> {
    vec![
        weapon(MEDIUM_LASER, "Medium Laser", 1.0, 1, HardPointType::Energy),
        Item {
            kind: ItemKind::Weapon(WeaponData {
                large_bore: true,
                guidance_capable: false,
            }),
            ..weapon(LARGE_BORE_CANNON, "Gauss Rifle", 15.0, 7, HardPointType::Ballistic)
        },
        Item {
            kind: ItemKind::Weapon(WeaponData {
                large_bore: false,
                guidance_capable: true,
            }),
            ..weapon(LRM_10, "LRM 10", 5.0, 2, HardPointType::Missile)
        },
        item(FIVE_SLOT_ITEM, "Five-Slot Ballast", 1.0, 5, ItemKind::Ammunition),
        item(EIGHT_SLOT_ITEM, "Eight-Slot Ballast", 1.0, 8, ItemKind::Ammunition),
        engine(
            STD_ENGINE_300,
            "STD Engine 300",
            19.0,
            EngineData {
                engine_type: EngineType::Standard,
                rating: 300,
                side_internal: None,
            },
        ),
        engine(
            XL_ENGINE_300,
            "XL Engine 300",
            9.5,
            EngineData {
                engine_type: EngineType::Xl,
                rating: 300,
                side_internal: Some(XL_SIDE),
            },
        ),
        internal(XL_SIDE, "Engine Side", 3, InternalKind::EngineSide),
        item(HEAT_SINK, "Heat Sink", 1.0, 1, ItemKind::HeatSink),
        Item {
            faction: Faction::InnerSphere,
            ..item(DOUBLE_HEAT_SINK, "Double Heat Sink", 1.0, 3, ItemKind::HeatSink)
        },
        Item {
            allowed_locations: Some(vec![
                Location::LeftTorso,
                Location::CenterTorso,
                Location::RightTorso,
                Location::LeftLeg,
                Location::RightLeg,
            ]),
            ..item(
                JUMP_JET,
                "Jump Jet",
                0.5,
                1,
                ItemKind::JumpJet(JumpJetData {
                    min_chassis_mass: 35.0,
                    max_chassis_mass: 55.0,
                }),
            )
        },
        Item {
            hardpoint: Some(HardPointType::Ecm),
            max_per_loadout: Some(1),
            ..item(ECM, "Guardian ECM", 1.5, 2, ItemKind::Ecm)
        },
        Item {
            allowed_locations: Some(vec![Location::LeftTorso, Location::RightTorso]),
            ..item(CASE, "C.A.S.E.", 0.5, 1, ItemKind::Case)
        },
        internal(COCKPIT, "Cockpit", 1, InternalKind::Cockpit),
        internal(SHOULDER, "Shoulder", 1, InternalKind::Actuator(Actuator::Shoulder)),
        internal(UPPER_ARM, "Upper Arm Actuator", 1, InternalKind::Actuator(Actuator::UpperArm)),
        internal(LOWER_ARM, "Lower Arm Actuator", 1, InternalKind::Actuator(Actuator::LowerArm)),
        internal(HAND, "Hand Actuator", 1, InternalKind::Actuator(Actuator::Hand)),
        internal(HIP, "Hip", 1, InternalKind::Actuator(Actuator::Hip)),
    ]
}

fn component(
    location: Location,
    slots: u8,
    max_armour: u16,
    fixed_items: Vec<ItemId>,
    hardpoints: Vec<HardPointType>,
) -> ComponentDef {
    ComponentDef {
        location,
        slots,
        max_armour,
        fixed_items,
        hardpoints,
    }
}

fn default_upgrades() -> UpgradeIds {
    UpgradeIds {
        structure: STANDARD_STRUCTURE,
        armour: STANDARD_ARMOUR,
        heat_sink: SINGLE_HEAT_SINKS,
        guidance: NO_GUIDANCE,
    }
}

fn standard_chassis() -> Chassis {
    use HardPointType::*;
    use Location::*;

    Chassis {
        id: STANDARD_CHASSIS,
        name: "Test Standard".into(),
        series: "Test".into(),
        faction: Faction::InnerSphere,
        mass_max: 50.0,
        engine_min: 100,
        engine_max: 400,
        max_jump_jets: 4,
        components: vec![
            component(Head, 6, 18, vec![COCKPIT], vec![]),
            component(LeftArm, 12, 32, vec![SHOULDER, UPPER_ARM], vec![Energy, Ballistic]),
            component(LeftTorso, 12, 48, vec![], vec![Missile, Ecm]),
            component(CenterTorso, 12, 64, vec![], vec![]),
            component(RightTorso, 12, 48, vec![], vec![Ballistic, Missile]),
            component(RightArm, 12, 32, vec![SHOULDER, UPPER_ARM], vec![Energy, Energy]),
            component(LeftLeg, 6, 32, vec![HIP], vec![]),
            component(RightLeg, 6, 32, vec![HIP], vec![]),
        ],
        module_slots: ModuleSlots {
            consumable: 1,
            weapon: 1,
            mech: 2,
        },
        quirks: vec![Modifier::additive("armour.centre_torso", 10.0)],
        default_upgrades: default_upgrades(),
        variant: ChassisVariant::Standard,
    }
}

fn omni_pod(id: u32, name: &str, location: Location, hardpoints: Vec<HardPointType>) -> OmniPod {
    let toggleable = if location.is_arm() {
        vec![LOWER_ARM, HAND]
    } else {
        Vec::new()
    };
    OmniPod {
        id: OmniPodId(id),
        name: name.into(),
        series: "Test Omni".into(),
        location,
        hardpoints,
        max_jump_jets: 0,
        toggleable,
        quirks: Vec::new(),
    }
}

fn omni_pods() -> Vec<OmniPod> {
    use HardPointType::*;
    use Location::*;

    let legs = |id, name, location| OmniPod {
        max_jump_jets: 1,
        ..omni_pod(id, name, location, vec![])
    };
    vec![
        omni_pod(10, "Prime Head", Head, vec![]),
        omni_pod(11, "Prime Left Arm", LeftArm, vec![Energy]),
        omni_pod(12, "Prime Left Torso", LeftTorso, vec![Missile]),
        omni_pod(13, "Prime Centre Torso", CenterTorso, vec![]),
        omni_pod(14, "Prime Right Torso", RightTorso, vec![Ecm]),
        omni_pod(15, "Prime Right Arm", RightArm, vec![Energy, Energy, Ballistic]),
        legs(16, "Prime Left Leg", LeftLeg),
        legs(17, "Prime Right Leg", RightLeg),
        OmniPod {
            quirks: vec![Modifier::multiplicative("ballistic.cooldown", -0.05)],
            ..omni_pod(ALT_RIGHT_ARM_POD.0, "B Right Arm", RightArm, vec![Ballistic])
        },
    ]
}

fn omni_chassis() -> Chassis {
    use Location::*;

    Chassis {
        id: OMNI_CHASSIS,
        name: "Test Omni Prime".into(),
        series: "Test Omni".into(),
        faction: Faction::Clan,
        mass_max: 75.0,
        engine_min: 300,
        engine_max: 300,
        max_jump_jets: 0,
        components: vec![
            component(Head, 6, 18, vec![COCKPIT], vec![]),
            component(LeftArm, 12, 48, vec![SHOULDER, UPPER_ARM], vec![]),
            component(LeftTorso, 12, 64, vec![], vec![]),
            component(CenterTorso, 12, 92, vec![STD_ENGINE_300], vec![]),
            component(RightTorso, 12, 64, vec![], vec![]),
            component(RightArm, 12, 48, vec![SHOULDER, UPPER_ARM], vec![]),
            component(LeftLeg, 6, 64, vec![HIP], vec![]),
            component(RightLeg, 6, 64, vec![HIP], vec![]),
        ],
        module_slots: ModuleSlots {
            consumable: 2,
            weapon: 2,
            mech: 2,
        },
        quirks: Vec::new(),
        default_upgrades: default_upgrades(),
        variant: ChassisVariant::Omni {
            default_pods: (10..18).map(OmniPodId).collect(),
        },
    }
}

pub fn builder() -> CatalogBuilder {
    let mut builder = Catalog::builder();
    for item in items() {
        builder = builder.item(item);
    }
    for pod in omni_pods() {
        builder = builder.omni_pod(pod);
    }
    builder
        .structure(StructureUpgrade {
            id: STANDARD_STRUCTURE,
            name: "Standard Structure".into(),
            faction: Faction::Any,
            mass_factor: 0.1,
            dynamic_slots: 0,
        })
        .structure(StructureUpgrade {
            id: ENDO_STEEL,
            name: "Endo-Steel".into(),
            faction: Faction::InnerSphere,
            mass_factor: 0.05,
            dynamic_slots: 14,
        })
        .armour(ArmourUpgrade {
            id: STANDARD_ARMOUR,
            name: "Standard Armour".into(),
            faction: Faction::Any,
            points_per_ton: 32.0,
            dynamic_slots: 0,
            requires_ecm: false,
        })
        .armour(ArmourUpgrade {
            id: STEALTH_ARMOUR,
            name: "Stealth Armour".into(),
            faction: Faction::InnerSphere,
            points_per_ton: 32.0,
            dynamic_slots: 12,
            requires_ecm: true,
        })
        .heat_sink(HeatSinkUpgrade {
            id: SINGLE_HEAT_SINKS,
            name: "Single Heat Sinks".into(),
            faction: Faction::Any,
            heat_sink: HEAT_SINK,
        })
        .heat_sink(HeatSinkUpgrade {
            id: DOUBLE_HEAT_SINKS,
            name: "Double Heat Sinks".into(),
            faction: Faction::InnerSphere,
            heat_sink: DOUBLE_HEAT_SINK,
        })
        .guidance(GuidanceUpgrade {
            id: NO_GUIDANCE,
            name: "No Guidance".into(),
            faction: Faction::Any,
            extra_slots: 0,
            extra_mass: 0.0,
        })
        .guidance(GuidanceUpgrade {
            id: ARTEMIS,
            name: "Artemis IV".into(),
            faction: Faction::InnerSphere,
            extra_slots: 1,
            extra_mass: 1.0,
        })
        .module(PilotModule {
            id: CONSUMABLE_MODULE,
            name: "Cool Shot".into(),
            slot: ModuleSlot::Consumable,
            faction: Faction::Any,
            modifiers: vec![Modifier::additive("heat.instant_cooling", 5.0)],
        })
        .module(PilotModule {
            id: SECOND_CONSUMABLE_MODULE,
            name: "UAV".into(),
            slot: ModuleSlot::Consumable,
            faction: Faction::Any,
            modifiers: Vec::new(),
        })
        .chassis(standard_chassis())
        .chassis(omni_chassis())
}

pub fn catalog() -> Catalog {
    builder().build().expect("fixture catalog is valid")
}
