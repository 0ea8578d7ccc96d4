//! Editing scenarios against the stock catalog.

mod common;

use common::{catalog, item, loadout};
use mechlab_content::ids::{chassis::*, item::*, pod::*, upgrade::*};
use mechlab_core::{
    ArmourSide, EquipResult, EquipResultKind, HardPointType, ItemIndex, Location, LoadoutError,
};

#[test]
fn zero_free_mass_rejects_every_item_with_mass() {
    let catalog = catalog();
    let mut loadout = loadout(&catalog, HUNCHBACK_HBK_4G);
    loadout.add_item(item(&catalog, std_engine(250)), None).unwrap();

    let ammo = item(&catalog, AC_20_AMMO);
    while loadout.free_mass() >= ammo.mass {
        loadout.add_item(ammo, None).unwrap();
    }
    let points_per_ton = loadout.upgrades().armour.points_per_ton;
    let points = (loadout.free_mass() * points_per_ton).round() as u16;
    loadout
        .set_armour(Location::CenterTorso, ArmourSide::Front, points, true)
        .unwrap();
    assert!(loadout.free_mass().abs() < 1e-9);

    for id in [SMALL_LASER, MEDIUM_LASER, AC_20_AMMO, HEAT_SINK] {
        assert_eq!(
            loadout.can_equip_directly(item(&catalog, id)),
            EquipResultKind::TooHeavy.into(),
            "{id}"
        );
    }
}

#[test]
fn single_energy_hardpoint_takes_one_energy_weapon() {
    let catalog = catalog();
    let mut loadout = loadout(&catalog, URBANMECH_UM_R60);
    assert_eq!(loadout.hardpoint_count(HardPointType::Energy), 1);

    let laser = item(&catalog, MEDIUM_LASER);
    let permit = loadout.authorize(laser, None).unwrap();
    assert_eq!(permit.location(), Location::LeftArm);
    loadout.equip(permit).unwrap();

    assert_eq!(
        loadout.can_equip_directly(item(&catalog, SMALL_LASER)),
        EquipResultKind::NoFreeHardPoints.into()
    );
    assert!(loadout.candidate_locations(laser).is_empty());
}

#[test]
fn most_specific_rejection_is_reported_without_location() {
    let catalog = catalog();
    let mut loadout = loadout(&catalog, HUNCHBACK_HBK_4G);
    let ammo = item(&catalog, AC_20_AMMO);
    for _ in 0..3 {
        loadout.add_item(ammo, Some(Location::RightTorso)).unwrap();
    }

    // Only the right torso has ballistic hardpoints, and it is three slots short.
    let ac20 = item(&catalog, AC_20);
    assert_eq!(
        loadout.can_equip_at(Location::RightTorso, ac20),
        EquipResult::at(EquipResultKind::NotEnoughSlots, Location::RightTorso)
    );
    assert_eq!(loadout.can_equip_directly(ac20), EquipResultKind::NotEnoughSlots.into());
}

#[test]
fn wide_engines_occupy_both_side_torsos() {
    let catalog = catalog();
    let mut loadout = loadout(&catalog, ATLAS_AS7_D);
    let free = |loadout: &mechlab_core::Loadout<'_>| {
        Location::SIDE_TORSOS.map(|location| loadout.component(location).slots_free())
    };
    let before = free(&loadout);

    let xl = item(&catalog, xl_engine(300));
    loadout.add_item(xl, None).unwrap();
    assert_eq!(free(&loadout), before.map(|slots| slots - 3));
    assert_eq!(loadout.count(XL_ENGINE_SIDE), 2);

    loadout.remove_item(Location::CenterTorso, xl).unwrap();
    assert_eq!(free(&loadout), before);

    loadout.add_item(item(&catalog, light_engine(300)), None).unwrap();
    assert_eq!(free(&loadout), before.map(|slots| slots - 2));
}

#[test]
fn engine_rating_must_fit_the_chassis() {
    let catalog = catalog();
    let loadout = loadout(&catalog, URBANMECH_UM_R60);
    assert!(loadout.can_equip_directly(item(&catalog, std_engine(180))).is_success());
    assert_eq!(
        loadout.can_equip_directly(item(&catalog, std_engine(200))),
        EquipResultKind::NotSupported.into()
    );
}

#[test]
fn heat_sinks_fill_engine_capacity_before_slots() {
    let catalog = catalog();
    let mut loadout = loadout(&catalog, ATLAS_AS7_D);
    let engine = item(&catalog, std_engine(350));
    loadout.add_item(engine, None).unwrap();
    let capacity = engine.engine().map(|e| e.heat_sink_slots()).unwrap();
    assert_eq!(capacity, 4);

    let sink = item(&catalog, HEAT_SINK);
    let slots = loadout.slots_used();
    for _ in 0..capacity {
        assert_eq!(loadout.add_item(sink, None).unwrap(), ItemIndex::Absorbed);
        assert_eq!(loadout.slots_used(), slots);
    }
    assert_ne!(loadout.add_item(sink, None).unwrap(), ItemIndex::Absorbed);
    assert_eq!(loadout.slots_used(), slots + u16::from(sink.slots));
    assert_eq!(loadout.total_heat_sinks(), 10 + usize::from(capacity) + 1);
}

#[test]
fn removing_an_engine_takes_its_absorbed_heat_sinks_along() {
    let catalog = catalog();
    let mut loadout = loadout(&catalog, ATLAS_AS7_D);
    loadout
        .set_heat_sink_type(catalog.heat_sink(DOUBLE_HEAT_SINKS).unwrap())
        .unwrap();
    let engine = item(&catalog, std_engine(350));
    loadout.add_item(engine, None).unwrap();

    let sink = item(&catalog, DOUBLE_HEAT_SINK);
    for _ in 0..4 {
        let index = loadout.add_item(sink, Some(Location::CenterTorso)).unwrap();
        assert_eq!(index, ItemIndex::Absorbed);
    }
    assert_ne!(loadout.add_item(sink, None).unwrap(), ItemIndex::Absorbed);
    let absorbed = loadout.component(Location::CenterTorso).absorbed_heat_sinks();
    assert_eq!(absorbed, 4);

    assert!(loadout.can_remove_item(Location::CenterTorso, engine).is_success());
    loadout.remove_item(Location::CenterTorso, engine).unwrap();

    let centre = loadout.component(Location::CenterTorso);
    assert!(centre.items().is_empty());
    assert_eq!(centre.heat_sink_count(), 0);
    assert_eq!(loadout.heat_sink_count(), 1);
    for component in loadout.components() {
        assert!(component.slots_used() <= component.slots_total(), "{}", component.location());
    }
    assert!(loadout.slots_used() <= loadout.slots_total());
}

#[test]
fn clan_equipment_does_not_fit_inner_sphere_chassis() {
    let catalog = catalog();
    let hunchback = loadout(&catalog, HUNCHBACK_HBK_4G);
    assert_eq!(
        hunchback.can_equip_directly(item(&catalog, CLAN_ER_MEDIUM_LASER)),
        EquipResultKind::NotSupported.into()
    );

    let timber_wolf = loadout(&catalog, TIMBER_WOLF_PRIME);
    assert_eq!(
        timber_wolf.can_equip_directly(item(&catalog, MEDIUM_LASER)),
        EquipResultKind::NotSupported.into()
    );
    assert!(timber_wolf.can_equip_directly(item(&catalog, CLAN_ER_MEDIUM_LASER)).is_success());
}

#[test]
fn double_heat_sinks_exclude_single_ones() {
    let catalog = catalog();
    let mut loadout = loadout(&catalog, HUNCHBACK_HBK_4G);
    loadout
        .set_heat_sink_type(catalog.heat_sink(DOUBLE_HEAT_SINKS).unwrap())
        .unwrap();
    assert_eq!(
        loadout.can_equip_directly(item(&catalog, HEAT_SINK)),
        EquipResultKind::IncompatibleUpgrades.into()
    );
    assert!(loadout.can_equip_directly(item(&catalog, DOUBLE_HEAT_SINK)).is_success());
}

#[test]
fn jump_jets_follow_chassis_class_and_capacity() {
    let catalog = catalog();
    let mut loadout = loadout(&catalog, URBANMECH_UM_R60);
    assert_eq!(
        loadout.can_equip_directly(item(&catalog, JUMP_JET_CLASS_IV)),
        EquipResultKind::NotSupported.into()
    );

    let jet = item(&catalog, JUMP_JET_CLASS_V);
    for location in [Location::LeftLeg, Location::RightLeg] {
        loadout.add_item(jet, Some(location)).unwrap();
    }
    assert_eq!(loadout.jump_jet_count(), 2);
    assert_eq!(
        loadout.can_equip_directly(jet),
        EquipResultKind::JumpJetCapacityReached.into()
    );
}

#[test]
fn case_is_limited_to_one_per_component() {
    let catalog = catalog();
    let mut loadout = loadout(&catalog, ATLAS_AS7_D);
    let case = item(&catalog, CASE);

    loadout.add_item(case, Some(Location::LeftTorso)).unwrap();
    assert_eq!(
        loadout.can_equip_at(Location::LeftTorso, case),
        EquipResult::at(EquipResultKind::ComponentAlreadyHasCase, Location::LeftTorso)
    );
    loadout.add_item(case, None).unwrap();
    assert!(loadout.component(Location::RightTorso).has_case());
    assert_eq!(
        loadout.can_equip_directly(case),
        EquipResultKind::EverythingAlreadyHasCase.into()
    );
}

#[test]
fn torso_armour_shares_one_maximum() {
    let catalog = catalog();
    let mut loadout = loadout(&catalog, ATLAS_AS7_D);
    let max = loadout.component(Location::CenterTorso).def().max_armour;
    assert_eq!(max, 62);

    loadout
        .set_armour(Location::CenterTorso, ArmourSide::Front, 40, true)
        .unwrap();
    assert!(loadout
        .can_set_armour(Location::CenterTorso, ArmourSide::Back, max - 40)
        .unwrap()
        .is_success());
    assert_eq!(
        loadout
            .can_set_armour(Location::CenterTorso, ArmourSide::Back, max - 39)
            .unwrap(),
        EquipResult::at(EquipResultKind::ExceededMaxArmour, Location::CenterTorso)
    );
}

#[test]
fn stealth_armour_is_tied_to_an_ecm() {
    let catalog = catalog();
    let stealth = catalog.armour(STEALTH_ARMOUR).unwrap();

    let plain = loadout(&catalog, ATLAS_AS7_D);
    assert_eq!(plain.can_set_armour_type(stealth), EquipResultKind::NeedEcm.into());

    let mut dc = loadout(&catalog, ATLAS_AS7_D_DC);
    let ecm = item(&catalog, GUARDIAN_ECM);
    let permit = dc.authorize(ecm, None).unwrap();
    assert_eq!(permit.location(), Location::LeftTorso);
    dc.equip(permit).unwrap();
    dc.set_armour_type(stealth).unwrap();
    assert_eq!(
        dc.can_remove_item(Location::LeftTorso, ecm),
        EquipResultKind::CannotRemoveEcm.into()
    );
    assert_eq!(
        dc.can_equip_directly(ecm),
        EquipResultKind::TooManyOfThatType.into()
    );
}

#[test]
fn removing_an_item_that_is_not_there_fails() {
    let catalog = catalog();
    let mut loadout = loadout(&catalog, JENNER_JR7_D);
    let laser = item(&catalog, MEDIUM_LASER);
    assert!(matches!(
        loadout.remove_item(Location::RightArm, laser),
        Err(LoadoutError::ItemNotEquipped { location: Location::RightArm, .. })
    ));
}

mod omni {
    use super::*;

    #[test]
    fn fixed_engine_and_upgrades_stay_put() {
        let catalog = catalog();
        let loadout = loadout(&catalog, TIMBER_WOLF_PRIME);
        let (engine, location) = loadout.engine().unwrap();
        assert_eq!((engine.id, location), (clan_xl_engine(375), Location::CenterTorso));
        assert_eq!(loadout.count(CLAN_XL_ENGINE_SIDE), 2);
        assert_eq!(
            loadout.can_remove_item(Location::CenterTorso, engine),
            EquipResult::at(EquipResultKind::NotSupported, Location::CenterTorso)
        );
        assert_eq!(
            loadout.can_set_structure(catalog.structure(STANDARD_STRUCTURE).unwrap()),
            EquipResultKind::NotSupported.into()
        );
    }

    #[test]
    fn pods_decide_hardpoints() {
        let catalog = catalog();
        let mut loadout = loadout(&catalog, TIMBER_WOLF_PRIME);
        let energy = loadout.hardpoint_count(HardPointType::Energy);
        let ballistic = loadout.hardpoint_count(HardPointType::Ballistic);

        loadout
            .set_omni_pod(catalog.omni_pod(TBR_S_RIGHT_ARM).unwrap())
            .unwrap();
        assert_eq!(loadout.hardpoint_count(HardPointType::Energy), energy + 1);
        assert_eq!(loadout.hardpoint_count(HardPointType::Ballistic), ballistic - 1);

        let laser = item(&catalog, CLAN_ER_MEDIUM_LASER);
        for _ in 0..3 {
            loadout.add_item(laser, Some(Location::RightArm)).unwrap();
        }
        assert_eq!(
            loadout.can_equip_at(Location::RightArm, laser),
            EquipResult::at(EquipResultKind::NoFreeHardPoints, Location::RightArm)
        );
    }

    #[test]
    fn leg_pods_grant_jump_jets() {
        let catalog = catalog();
        let mut loadout = loadout(&catalog, TIMBER_WOLF_PRIME);
        let jet = item(&catalog, JUMP_JET_CLASS_III);
        assert_eq!(
            loadout.can_equip_directly(jet),
            EquipResultKind::JumpJetCapacityReached.into()
        );

        for pod in [TBR_S_LEFT_LEG, TBR_S_RIGHT_LEG] {
            loadout.set_omni_pod(catalog.omni_pod(pod).unwrap()).unwrap();
        }
        assert_eq!(loadout.max_jump_jets(), 2);
        loadout.add_item(jet, Some(Location::LeftTorso)).unwrap();
        loadout.add_item(jet, Some(Location::RightTorso)).unwrap();

        // Jets outside the leg survive the swap and would exceed the allowance.
        assert_eq!(
            loadout
                .can_set_omni_pod(catalog.omni_pod(TBR_PRIME_LEFT_LEG).unwrap())
                .unwrap(),
            EquipResultKind::JumpJetCapacityReached.into()
        );
    }

    #[test]
    fn large_bore_weapon_switches_actuators_off() {
        let catalog = catalog();
        let mut loadout = loadout(&catalog, TIMBER_WOLF_PRIME);
        let gauss = item(&catalog, CLAN_GAUSS_RIFLE);

        loadout.add_item(gauss, Some(Location::RightArm)).unwrap();
        let arm = loadout.component(Location::RightArm);
        assert_eq!(arm.toggle_state(LOWER_ARM), Some(false));
        assert_eq!(arm.toggle_state(HAND), Some(false));

        loadout.remove_item(Location::RightArm, gauss).unwrap();
        assert_eq!(
            loadout.can_toggle(Location::RightArm, item(&catalog, HAND), true),
            EquipResult::at(EquipResultKind::LaaBeforeHa, Location::RightArm)
        );
        loadout
            .toggle(Location::RightArm, item(&catalog, LOWER_ARM), true)
            .unwrap();
        loadout
            .toggle(Location::RightArm, item(&catalog, HAND), true)
            .unwrap();
    }

    #[test]
    fn pod_quirks_join_the_modifier_stack() {
        let catalog = catalog();
        let mut loadout = loadout(&catalog, TIMBER_WOLF_PRIME);
        let before = loadout.modifiers().apply("armour.right_torso", 0.0);
        loadout
            .set_omni_pod(catalog.omni_pod(TBR_C_RIGHT_TORSO).unwrap())
            .unwrap();
        assert_eq!(loadout.modifiers().apply("armour.right_torso", 0.0), before + 10.0);
        assert_eq!(loadout.hardpoint_count(HardPointType::Ecm), 1);
    }
}
