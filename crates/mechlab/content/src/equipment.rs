//! Stock items: weapons, ammunition, engines, heat sinks, jump jets,
//! electronics and chassis internals.

use mechlab_core::catalog::{
    Actuator, EngineData, EngineType, Faction, HardPointType, InternalKind, Item, ItemId,
    ItemKind, JumpJetData, Location, WeaponData,
};

use crate::ids::item::*;

/// Ratings offered for every engine family.
pub const ENGINE_RATINGS: [u16; 13] = [
    100, 150, 180, 200, 250, 255, 275, 300, 325, 350, 360, 375, 400,
];

/// Base standard-engine mass by rating, without gyro.
const STD_ENGINE_MASS: [(u16, f64); 13] = [
    (100, 3.0),
    (150, 5.5),
    (180, 7.0),
    (200, 8.5),
    (250, 12.5),
    (255, 13.0),
    (275, 15.5),
    (300, 19.0),
    (325, 23.5),
    (350, 28.5),
    (360, 31.5),
    (375, 36.5),
    (400, 52.5),
];

fn base(id: ItemId, name: &str, faction: Faction, mass: f64, slots: u8, kind: ItemKind) -> Item {
    Item {
        id,
        name: name.to_string(),
        mass,
        slots,
        faction,
        hardpoint: None,
        allowed_locations: None,
        max_per_loadout: None,
        modifiers: Vec::new(),
        kind,
    }
}

fn weapon(
    id: ItemId,
    name: &str,
    faction: Faction,
    mass: f64,
    slots: u8,
    hardpoint: HardPointType,
) -> Item {
    let kind = ItemKind::Weapon(WeaponData {
        large_bore: false,
        guidance_capable: false,
    });
    Item {
        hardpoint: Some(hardpoint),
        ..base(id, name, faction, mass, slots, kind)
    }
}

fn large_bore(mut item: Item) -> Item {
    if let ItemKind::Weapon(data) = &mut item.kind {
        data.large_bore = true;
    }
    item
}

fn guided(mut item: Item) -> Item {
    if let ItemKind::Weapon(data) = &mut item.kind {
        data.guidance_capable = true;
    }
    item
}

fn weapons() -> Vec<Item> {
    use Faction::{Clan, InnerSphere as IS};
    use HardPointType::*;

    vec![
        weapon(SMALL_LASER, "Small Laser", IS, 0.5, 1, Energy),
        weapon(MEDIUM_LASER, "Medium Laser", IS, 1.0, 1, Energy),
        weapon(LARGE_LASER, "Large Laser", IS, 5.0, 2, Energy),
        weapon(PPC, "PPC", IS, 7.0, 3, Energy),
        weapon(MACHINE_GUN, "Machine Gun", IS, 0.5, 1, Ballistic),
        weapon(AC_2, "AC/2", IS, 6.0, 1, Ballistic),
        weapon(AC_5, "AC/5", IS, 8.0, 4, Ballistic),
        weapon(AC_10, "AC/10", IS, 12.0, 7, Ballistic),
        large_bore(weapon(AC_20, "AC/20", IS, 14.0, 10, Ballistic)),
        large_bore(weapon(GAUSS_RIFLE, "Gauss Rifle", IS, 15.0, 7, Ballistic)),
        guided(weapon(LRM_5, "LRM 5", IS, 2.0, 1, Missile)),
        guided(weapon(LRM_10, "LRM 10", IS, 5.0, 2, Missile)),
        guided(weapon(LRM_15, "LRM 15", IS, 7.0, 3, Missile)),
        guided(weapon(LRM_20, "LRM 20", IS, 10.0, 5, Missile)),
        guided(weapon(SRM_2, "SRM 2", IS, 1.0, 1, Missile)),
        guided(weapon(SRM_4, "SRM 4", IS, 2.0, 1, Missile)),
        guided(weapon(SRM_6, "SRM 6", IS, 3.0, 2, Missile)),
        weapon(AMS, "AMS", IS, 0.5, 1, AntiMissile),
        weapon(CLAN_ER_MEDIUM_LASER, "C-ER Medium Laser", Clan, 1.0, 1, Energy),
        weapon(CLAN_ER_LARGE_LASER, "C-ER Large Laser", Clan, 4.0, 1, Energy),
        weapon(CLAN_ER_PPC, "C-ER PPC", Clan, 6.0, 2, Energy),
        weapon(CLAN_MACHINE_GUN, "C-Machine Gun", Clan, 0.25, 1, Ballistic),
        weapon(CLAN_UAC_5, "C-UAC/5", Clan, 7.0, 3, Ballistic),
        large_bore(weapon(CLAN_GAUSS_RIFLE, "C-Gauss Rifle", Clan, 12.0, 6, Ballistic)),
        guided(weapon(CLAN_LRM_20, "C-LRM 20", Clan, 5.0, 4, Missile)),
        guided(weapon(CLAN_SRM_6, "C-SRM 6", Clan, 1.5, 2, Missile)),
        weapon(CLAN_AMS, "C-AMS", Clan, 0.5, 1, AntiMissile),
    ]
}

fn ammunition() -> Vec<Item> {
    use Faction::{Clan, InnerSphere as IS};

    [
        (AC_2_AMMO, "AC/2 Ammo", IS, 1.0),
        (AC_5_AMMO, "AC/5 Ammo", IS, 1.0),
        (AC_10_AMMO, "AC/10 Ammo", IS, 1.0),
        (AC_20_AMMO, "AC/20 Ammo", IS, 1.0),
        (GAUSS_AMMO, "Gauss Ammo", IS, 1.0),
        (LRM_AMMO, "LRM Ammo", IS, 1.0),
        (SRM_AMMO, "SRM Ammo", IS, 1.0),
        (MACHINE_GUN_AMMO, "Machine Gun Ammo", IS, 0.5),
        (AMS_AMMO, "AMS Ammo", IS, 0.5),
        (CLAN_UAC_5_AMMO, "C-UAC/5 Ammo", Clan, 1.0),
        (CLAN_GAUSS_AMMO, "C-Gauss Ammo", Clan, 1.0),
        (CLAN_LRM_AMMO, "C-LRM Ammo", Clan, 1.0),
        (CLAN_SRM_AMMO, "C-SRM Ammo", Clan, 1.0),
        (CLAN_MACHINE_GUN_AMMO, "C-Machine Gun Ammo", Clan, 0.5),
        (CLAN_AMS_AMMO, "C-AMS Ammo", Clan, 0.5),
    ]
    .into_iter()
    .map(|(id, name, faction, mass)| base(id, name, faction, mass, 1, ItemKind::Ammunition))
    .collect()
}

fn half_ton_ceil(mass: f64) -> f64 {
    (mass * 2.0).ceil() / 2.0
}

fn gyro_mass(rating: u16) -> f64 {
    f64::from(rating.div_ceil(100))
}

struct EngineFamily {
    engine_type: EngineType,
    faction: Faction,
    label: &'static str,
    id: fn(u16) -> ItemId,
    side_internal: Option<ItemId>,
    /// Share of the standard engine's mass.
    mass_ratio: f64,
}

const ENGINE_FAMILIES: [EngineFamily; 3] = [
    EngineFamily {
        engine_type: EngineType::Standard,
        faction: Faction::Any,
        label: "STD",
        id: std_engine,
        side_internal: None,
        mass_ratio: 1.0,
    },
    EngineFamily {
        engine_type: EngineType::Xl,
        faction: Faction::InnerSphere,
        label: "XL",
        id: xl_engine,
        side_internal: Some(XL_ENGINE_SIDE),
        mass_ratio: 0.5,
    },
    EngineFamily {
        engine_type: EngineType::Light,
        faction: Faction::InnerSphere,
        label: "Light",
        id: light_engine,
        side_internal: Some(LIGHT_ENGINE_SIDE),
        mass_ratio: 0.75,
    },
];

const CLAN_XL: EngineFamily = EngineFamily {
    engine_type: EngineType::Xl,
    faction: Faction::Clan,
    label: "C-XL",
    id: clan_xl_engine,
    side_internal: Some(CLAN_XL_ENGINE_SIDE),
    mass_ratio: 0.5,
};

/// Clan engines exist only as fixed parts of omni chassis.
const CLAN_XL_RATINGS: [u16; 1] = [375];

fn engine(family: &EngineFamily, rating: u16, std_mass: f64) -> Item {
    let mass = half_ton_ceil(std_mass * family.mass_ratio) + gyro_mass(rating);
    let kind = ItemKind::Engine(EngineData {
        engine_type: family.engine_type,
        rating,
        side_internal: family.side_internal,
    });
    Item {
        allowed_locations: Some(vec![Location::CenterTorso]),
        ..base(
            (family.id)(rating),
            &format!("{} Engine {rating}", family.label),
            family.faction,
            mass,
            6,
            kind,
        )
    }
}

fn engines() -> Vec<Item> {
    let std_mass = |rating: u16| {
        STD_ENGINE_MASS
            .iter()
            .find(|(r, _)| *r == rating)
            .map(|(_, mass)| *mass)
    };

    let mut engines: Vec<Item> = ENGINE_FAMILIES
        .iter()
        .flat_map(|family| {
            ENGINE_RATINGS
                .iter()
                .filter_map(move |&rating| Some(engine(family, rating, std_mass(rating)?)))
        })
        .collect();
    engines.extend(
        CLAN_XL_RATINGS
            .iter()
            .filter_map(|&rating| Some(engine(&CLAN_XL, rating, std_mass(rating)?))),
    );
    engines
}

fn heat_sinks() -> Vec<Item> {
    let sink = |id, name, faction, slots| base(id, name, faction, 1.0, slots, ItemKind::HeatSink);
    vec![
        sink(HEAT_SINK, "Heat Sink", Faction::Any, 1),
        sink(DOUBLE_HEAT_SINK, "Double Heat Sink", Faction::InnerSphere, 3),
        sink(CLAN_DOUBLE_HEAT_SINK, "C-Double Heat Sink", Faction::Clan, 2),
    ]
}

fn jump_jets() -> Vec<Item> {
    use Location::*;

    [
        (JUMP_JET_CLASS_V, "Jump Jet - Class V", 0.5, 20.0, 55.0),
        (JUMP_JET_CLASS_IV, "Jump Jet - Class IV", 1.0, 60.0, 70.0),
        (JUMP_JET_CLASS_III, "Jump Jet - Class III", 1.0, 75.0, 85.0),
        (JUMP_JET_CLASS_II, "Jump Jet - Class II", 2.0, 90.0, 100.0),
    ]
    .into_iter()
    .map(|(id, name, mass, min_chassis_mass, max_chassis_mass)| {
        let kind = ItemKind::JumpJet(JumpJetData {
            min_chassis_mass,
            max_chassis_mass,
        });
        Item {
            allowed_locations: Some(vec![LeftTorso, CenterTorso, RightTorso, LeftLeg, RightLeg]),
            ..base(id, name, Faction::Any, mass, 1, kind)
        }
    })
    .collect()
}

fn electronics() -> Vec<Item> {
    let ecm = |id, name, faction, mass, slots| Item {
        hardpoint: Some(HardPointType::Ecm),
        max_per_loadout: Some(1),
        ..base(id, name, faction, mass, slots, ItemKind::Ecm)
    };
    vec![
        ecm(GUARDIAN_ECM, "Guardian ECM", Faction::InnerSphere, 1.5, 2),
        ecm(CLAN_ECM, "C-ECM", Faction::Clan, 1.0, 1),
        Item {
            allowed_locations: Some(vec![Location::LeftTorso, Location::RightTorso]),
            ..base(CASE, "C.A.S.E.", Faction::InnerSphere, 0.5, 1, ItemKind::Case)
        },
    ]
}

fn internals() -> Vec<Item> {
    use Actuator::*;

    let internal =
        |id, name, slots, kind| base(id, name, Faction::Any, 0.0, slots, ItemKind::Internal(kind));
    vec![
        internal(COCKPIT, "Cockpit", 1, InternalKind::Cockpit),
        internal(SENSORS, "Sensors", 1, InternalKind::Sensors),
        internal(LIFE_SUPPORT, "Life Support", 1, InternalKind::LifeSupport),
        internal(GYRO, "Gyro", 4, InternalKind::Gyro),
        internal(SHOULDER, "Shoulder", 1, InternalKind::Actuator(Shoulder)),
        internal(UPPER_ARM, "Upper Arm Actuator", 1, InternalKind::Actuator(UpperArm)),
        internal(LOWER_ARM, "Lower Arm Actuator", 1, InternalKind::Actuator(LowerArm)),
        internal(HAND, "Hand Actuator", 1, InternalKind::Actuator(Hand)),
        internal(HIP, "Hip", 1, InternalKind::Actuator(Hip)),
        internal(UPPER_LEG, "Upper Leg Actuator", 1, InternalKind::Actuator(UpperLeg)),
        internal(LOWER_LEG, "Lower Leg Actuator", 1, InternalKind::Actuator(LowerLeg)),
        internal(FOOT, "Foot Actuator", 1, InternalKind::Actuator(Foot)),
        internal(XL_ENGINE_SIDE, "Engine Side (XL)", 3, InternalKind::EngineSide),
        internal(LIGHT_ENGINE_SIDE, "Engine Side (Light)", 2, InternalKind::EngineSide),
        internal(CLAN_XL_ENGINE_SIDE, "Engine Side (C-XL)", 2, InternalKind::EngineSide),
    ]
}

/// Every stock item.
pub fn items() -> Vec<Item> {
    let mut items = weapons();
    items.extend(ammunition());
    items.extend(engines());
    items.extend(heat_sinks());
    items.extend(jump_jets());
    items.extend(electronics());
    items.extend(internals());
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(id: ItemId) -> Item {
        items().into_iter().find(|item| item.id == id).unwrap()
    }

    #[test]
    fn engine_mass_includes_gyro() {
        assert_eq!(find(std_engine(300)).mass, 22.0);
        assert_eq!(find(xl_engine(300)).mass, 12.5);
        assert_eq!(find(light_engine(250)).mass, 12.5);
    }

    #[test]
    fn every_family_covers_every_rating() {
        let engines = items().into_iter().filter(Item::is_engine).count();
        assert_eq!(engines, ENGINE_FAMILIES.len() * ENGINE_RATINGS.len() + CLAN_XL_RATINGS.len());
    }

    #[test]
    fn item_ids_are_unique() {
        let mut ids: Vec<ItemId> = items().iter().map(|item| item.id).collect();
        let count = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), count);
    }
}
