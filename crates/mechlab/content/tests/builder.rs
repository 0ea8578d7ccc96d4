//! Rebuilding stock loadouts from unordered command sets.

mod common;

use common::{catalog, item, loadout};
use mechlab_content::ids::{chassis::*, item::*, pod::*, upgrade::*};
use mechlab_core::command::{
    AddItem, Command, LoadoutBuilder, LoadoutCommand, Rename, SetArmour, SetHeatSinkType,
    SetOmniPod, SetWeaponGroup,
};
use mechlab_core::{ArmourSide, EquipResultKind, ErrorSeverity, Location};

fn atlas_commands() -> Vec<Command> {
    let mut commands = vec![
        AddItem::new(std_engine(300), None).into(),
        SetArmour::new(Location::CenterTorso, ArmourSide::Front, 50, true).into(),
    ];
    commands.extend((0..6).map(|_| AddItem::new(DOUBLE_HEAT_SINK, None).into()));
    commands.push(SetHeatSinkType::new(DOUBLE_HEAT_SINKS).into());
    commands
}

#[test]
fn submission_order_does_not_matter() {
    let catalog = catalog();
    let reversed: LoadoutBuilder = atlas_commands().into_iter().rev().collect();
    let (rebuilt, report) = reversed.build(&catalog, ATLAS_AS7_D).unwrap();
    assert!(report.is_complete(), "{:?}", report.summary());

    let mut by_hand = loadout(&catalog, ATLAS_AS7_D);
    by_hand.add_item(item(&catalog, std_engine(300)), None).unwrap();
    by_hand
        .set_heat_sink_type(catalog.heat_sink(DOUBLE_HEAT_SINKS).unwrap())
        .unwrap();
    by_hand
        .set_armour(Location::CenterTorso, ArmourSide::Front, 50, true)
        .unwrap();
    for _ in 0..6 {
        by_hand.add_item(item(&catalog, DOUBLE_HEAT_SINK), None).unwrap();
    }

    assert_eq!(rebuilt, by_hand);
    assert_eq!(rebuilt.component(Location::CenterTorso).absorbed_heat_sinks(), 2);
    assert_eq!(rebuilt.heat_sink_count(), 6);
}

#[test]
fn naive_replay_leaves_heat_sinks_outside_the_engine() {
    let catalog = catalog();
    let builder: LoadoutBuilder = atlas_commands().into_iter().rev().collect();
    let (rebuilt, _) = builder.build(&catalog, ATLAS_AS7_D).unwrap();

    let mut naive = loadout(&catalog, ATLAS_AS7_D);
    for command in builder.commands() {
        command.apply(&mut naive).unwrap();
    }

    // Every edit is accepted, but the sinks were placed before the engine existed.
    assert_eq!(naive.heat_sink_count(), 6);
    assert_eq!(naive.component(Location::CenterTorso).absorbed_heat_sinks(), 0);
    assert!(naive.slots_used() > rebuilt.slots_used());
    assert_ne!(naive, rebuilt);
}

#[test]
fn rebuilding_is_deterministic() {
    let catalog = catalog();
    let builder: LoadoutBuilder = atlas_commands().into_iter().rev().collect();

    let (first, first_report) = builder.build(&catalog, ATLAS_AS7_D).unwrap();
    let (second, second_report) = builder.build(&catalog, ATLAS_AS7_D).unwrap();
    assert_eq!(first, second);
    assert_eq!(first_report, second_report);
    assert_eq!(builder.schedule(&catalog), builder.schedule(&catalog));
}

#[test]
fn pods_are_swapped_before_jump_jets_are_placed() {
    let catalog = catalog();
    let builder = LoadoutBuilder::new()
        .with(AddItem::new(JUMP_JET_CLASS_III, Some(Location::LeftLeg)))
        .with(AddItem::new(JUMP_JET_CLASS_III, Some(Location::RightLeg)))
        .with(SetOmniPod::new(TBR_S_LEFT_LEG))
        .with(SetOmniPod::new(TBR_S_RIGHT_LEG));

    let (loadout, report) = builder.build(&catalog, TIMBER_WOLF_PRIME).unwrap();
    assert!(report.is_complete(), "{:?}", report.summary());
    assert_eq!(report.applied, vec![2, 3, 0, 1]);
    assert_eq!(loadout.jump_jet_count(), 2);
}

#[test]
fn weapon_groups_are_assigned_after_weapons() {
    let catalog = catalog();
    let builder = LoadoutBuilder::new()
        .with(SetWeaponGroup::new(1, 1, true))
        .with(AddItem::new(MEDIUM_LASER, Some(Location::LeftArm)))
        .with(AddItem::new(LRM_10, Some(Location::LeftTorso)));

    let (loadout, report) = builder.build(&catalog, ATLAS_AS7_D).unwrap();
    assert!(report.is_complete(), "{:?}", report.summary());
    assert_eq!(loadout.weapon_groups().weapons_in(1).unwrap(), vec![1]);
}

#[test]
fn faults_are_collected_into_one_report() {
    let catalog = catalog();
    let builder = LoadoutBuilder::new()
        .with(Rename::new("Restored"))
        .with(AddItem::new(CLAN_ER_MEDIUM_LASER, None))
        .with(AddItem::new(std_engine(400), None))
        .with(AddItem::new(MEDIUM_LASER, None));

    let (loadout, report) = builder.build(&catalog, ATLAS_AS7_D).unwrap();
    assert_eq!(loadout.name(), "Restored");
    assert_eq!(loadout.count(MEDIUM_LASER), 1);
    assert_eq!(report.applied, vec![0, 3]);

    let kinds: Vec<_> = report
        .faults
        .iter()
        .map(|fault| fault.error.equip_result().map(|result| result.kind))
        .collect();
    assert_eq!(
        kinds,
        vec![
            Some(EquipResultKind::NotSupported),
            Some(EquipResultKind::NotSupported)
        ]
    );
    assert_eq!(report.severity(), Some(ErrorSeverity::Recoverable));

    let summary = report.summary().unwrap();
    assert!(summary.contains("add C-ER Medium Laser: Not supported."), "{summary}");
    assert!(summary.contains("add STD Engine 400"), "{summary}");
}
