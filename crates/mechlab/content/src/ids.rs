//! Stable identifiers of the stock content.
//!
//! Ids are grouped by definition kind. Engine ids are derived from their
//! rating, see [`item::std_engine`] and friends.

pub mod item {
    use mechlab_core::ItemId;

    // ===== Inner Sphere weapons =====
    pub const SMALL_LASER: ItemId = ItemId(100);
    pub const MEDIUM_LASER: ItemId = ItemId(101);
    pub const LARGE_LASER: ItemId = ItemId(102);
    pub const PPC: ItemId = ItemId(103);
    pub const MACHINE_GUN: ItemId = ItemId(104);
    pub const AC_2: ItemId = ItemId(105);
    pub const AC_5: ItemId = ItemId(106);
    pub const AC_10: ItemId = ItemId(107);
    pub const AC_20: ItemId = ItemId(108);
    pub const GAUSS_RIFLE: ItemId = ItemId(109);
    pub const LRM_5: ItemId = ItemId(110);
    pub const LRM_10: ItemId = ItemId(111);
    pub const LRM_15: ItemId = ItemId(112);
    pub const LRM_20: ItemId = ItemId(113);
    pub const SRM_2: ItemId = ItemId(114);
    pub const SRM_4: ItemId = ItemId(115);
    pub const SRM_6: ItemId = ItemId(116);
    pub const AMS: ItemId = ItemId(117);

    // ===== Clan weapons =====
    pub const CLAN_ER_MEDIUM_LASER: ItemId = ItemId(150);
    pub const CLAN_ER_LARGE_LASER: ItemId = ItemId(151);
    pub const CLAN_ER_PPC: ItemId = ItemId(152);
    pub const CLAN_MACHINE_GUN: ItemId = ItemId(153);
    pub const CLAN_UAC_5: ItemId = ItemId(154);
    pub const CLAN_GAUSS_RIFLE: ItemId = ItemId(155);
    pub const CLAN_LRM_20: ItemId = ItemId(156);
    pub const CLAN_SRM_6: ItemId = ItemId(157);
    pub const CLAN_AMS: ItemId = ItemId(158);

    // ===== ammunition =====
    pub const AC_2_AMMO: ItemId = ItemId(200);
    pub const AC_5_AMMO: ItemId = ItemId(201);
    pub const AC_10_AMMO: ItemId = ItemId(202);
    pub const AC_20_AMMO: ItemId = ItemId(203);
    pub const GAUSS_AMMO: ItemId = ItemId(204);
    pub const LRM_AMMO: ItemId = ItemId(205);
    pub const SRM_AMMO: ItemId = ItemId(206);
    pub const MACHINE_GUN_AMMO: ItemId = ItemId(207);
    pub const AMS_AMMO: ItemId = ItemId(208);
    pub const CLAN_UAC_5_AMMO: ItemId = ItemId(250);
    pub const CLAN_GAUSS_AMMO: ItemId = ItemId(251);
    pub const CLAN_LRM_AMMO: ItemId = ItemId(252);
    pub const CLAN_SRM_AMMO: ItemId = ItemId(253);
    pub const CLAN_MACHINE_GUN_AMMO: ItemId = ItemId(254);
    pub const CLAN_AMS_AMMO: ItemId = ItemId(255);

    // ===== heat sinks, jump jets, equipment =====
    pub const HEAT_SINK: ItemId = ItemId(700);
    pub const DOUBLE_HEAT_SINK: ItemId = ItemId(701);
    pub const CLAN_DOUBLE_HEAT_SINK: ItemId = ItemId(702);
    pub const JUMP_JET_CLASS_V: ItemId = ItemId(800);
    pub const JUMP_JET_CLASS_IV: ItemId = ItemId(801);
    pub const JUMP_JET_CLASS_III: ItemId = ItemId(802);
    pub const JUMP_JET_CLASS_II: ItemId = ItemId(803);
    pub const GUARDIAN_ECM: ItemId = ItemId(900);
    pub const CLAN_ECM: ItemId = ItemId(901);
    pub const CASE: ItemId = ItemId(902);

    // ===== internals =====
    pub const COCKPIT: ItemId = ItemId(1000);
    pub const SENSORS: ItemId = ItemId(1001);
    pub const LIFE_SUPPORT: ItemId = ItemId(1002);
    pub const GYRO: ItemId = ItemId(1003);
    pub const SHOULDER: ItemId = ItemId(1010);
    pub const UPPER_ARM: ItemId = ItemId(1011);
    pub const LOWER_ARM: ItemId = ItemId(1012);
    pub const HAND: ItemId = ItemId(1013);
    pub const HIP: ItemId = ItemId(1014);
    pub const UPPER_LEG: ItemId = ItemId(1015);
    pub const LOWER_LEG: ItemId = ItemId(1016);
    pub const FOOT: ItemId = ItemId(1017);
    pub const XL_ENGINE_SIDE: ItemId = ItemId(1100);
    pub const LIGHT_ENGINE_SIDE: ItemId = ItemId(1101);
    pub const CLAN_XL_ENGINE_SIDE: ItemId = ItemId(1102);

    // ===== engines =====
    const STD_ENGINE_BASE: u32 = 3000;
    const XL_ENGINE_BASE: u32 = 4000;
    const LIGHT_ENGINE_BASE: u32 = 5000;
    const CLAN_XL_ENGINE_BASE: u32 = 6000;

    pub const fn std_engine(rating: u16) -> ItemId {
        ItemId(STD_ENGINE_BASE + rating as u32)
    }

    pub const fn xl_engine(rating: u16) -> ItemId {
        ItemId(XL_ENGINE_BASE + rating as u32)
    }

    pub const fn light_engine(rating: u16) -> ItemId {
        ItemId(LIGHT_ENGINE_BASE + rating as u32)
    }

    pub const fn clan_xl_engine(rating: u16) -> ItemId {
        ItemId(CLAN_XL_ENGINE_BASE + rating as u32)
    }
}

pub mod chassis {
    use mechlab_core::ChassisId;

    pub const URBANMECH_UM_R60: ChassisId = ChassisId(1);
    pub const JENNER_JR7_D: ChassisId = ChassisId(2);
    pub const HUNCHBACK_HBK_4G: ChassisId = ChassisId(3);
    pub const ATLAS_AS7_D: ChassisId = ChassisId(4);
    pub const ATLAS_AS7_D_DC: ChassisId = ChassisId(5);
    pub const TIMBER_WOLF_PRIME: ChassisId = ChassisId(100);
}

pub mod pod {
    use mechlab_core::OmniPodId;

    pub const TBR_PRIME_HEAD: OmniPodId = OmniPodId(1000);
    pub const TBR_PRIME_LEFT_ARM: OmniPodId = OmniPodId(1001);
    pub const TBR_PRIME_LEFT_TORSO: OmniPodId = OmniPodId(1002);
    pub const TBR_PRIME_CENTRE_TORSO: OmniPodId = OmniPodId(1003);
    pub const TBR_PRIME_RIGHT_TORSO: OmniPodId = OmniPodId(1004);
    pub const TBR_PRIME_RIGHT_ARM: OmniPodId = OmniPodId(1005);
    pub const TBR_PRIME_LEFT_LEG: OmniPodId = OmniPodId(1006);
    pub const TBR_PRIME_RIGHT_LEG: OmniPodId = OmniPodId(1007);

    pub const TBR_S_LEFT_ARM: OmniPodId = OmniPodId(1011);
    pub const TBR_S_RIGHT_ARM: OmniPodId = OmniPodId(1015);
    pub const TBR_S_LEFT_LEG: OmniPodId = OmniPodId(1016);
    pub const TBR_S_RIGHT_LEG: OmniPodId = OmniPodId(1017);
    pub const TBR_C_RIGHT_TORSO: OmniPodId = OmniPodId(1024);
}

pub mod upgrade {
    use mechlab_core::UpgradeId;

    pub const STANDARD_STRUCTURE: UpgradeId = UpgradeId(1);
    pub const ENDO_STEEL: UpgradeId = UpgradeId(2);
    pub const CLAN_ENDO_STEEL: UpgradeId = UpgradeId(3);

    pub const STANDARD_ARMOUR: UpgradeId = UpgradeId(10);
    pub const FERRO_FIBROUS: UpgradeId = UpgradeId(11);
    pub const CLAN_FERRO_FIBROUS: UpgradeId = UpgradeId(12);
    pub const LIGHT_FERRO_FIBROUS: UpgradeId = UpgradeId(13);
    pub const STEALTH_ARMOUR: UpgradeId = UpgradeId(14);

    pub const SINGLE_HEAT_SINKS: UpgradeId = UpgradeId(20);
    pub const DOUBLE_HEAT_SINKS: UpgradeId = UpgradeId(21);
    pub const CLAN_DOUBLE_HEAT_SINKS: UpgradeId = UpgradeId(22);

    pub const NO_GUIDANCE: UpgradeId = UpgradeId(30);
    pub const ARTEMIS_IV: UpgradeId = UpgradeId(31);
    pub const CLAN_ARTEMIS_IV: UpgradeId = UpgradeId(32);
}

pub mod module {
    use mechlab_core::ModuleId;

    pub const COOL_SHOT: ModuleId = ModuleId(1);
    pub const UAV: ModuleId = ModuleId(2);
    pub const AIR_STRIKE: ModuleId = ModuleId(3);
    pub const ADVANCED_ZOOM: ModuleId = ModuleId(10);
    pub const RADAR_DEPRIVATION: ModuleId = ModuleId(11);
    pub const SEISMIC_SENSOR: ModuleId = ModuleId(12);
    pub const MEDIUM_LASER_COOLDOWN: ModuleId = ModuleId(20);
    pub const LRM_RANGE: ModuleId = ModuleId(21);
}
