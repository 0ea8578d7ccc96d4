//! Fixed structural vocabulary shared by every chassis.

/// A structural body slot of a chassis, hosting exactly one configured component.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumIter,
    strum::EnumCount,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Location {
    #[strum(to_string = "Head")]
    Head,
    #[strum(to_string = "Left Arm")]
    LeftArm,
    #[strum(to_string = "Left Torso")]
    LeftTorso,
    #[strum(to_string = "Center Torso")]
    CenterTorso,
    #[strum(to_string = "Right Torso")]
    RightTorso,
    #[strum(to_string = "Right Arm")]
    RightArm,
    #[strum(to_string = "Left Leg")]
    LeftLeg,
    #[strum(to_string = "Right Leg")]
    RightLeg,
}

impl Location {
    /// All locations in canonical order (head to legs, left before right).
    pub const ALL: [Location; 8] = [
        Location::Head,
        Location::LeftArm,
        Location::LeftTorso,
        Location::CenterTorso,
        Location::RightTorso,
        Location::RightArm,
        Location::LeftLeg,
        Location::RightLeg,
    ];

    /// Side torsos, which host the side internals of wide engines.
    pub const SIDE_TORSOS: [Location; 2] = [Location::LeftTorso, Location::RightTorso];

    /// Position of this location in [`Location::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Torsos carry separate front and back armour.
    pub const fn is_two_sided(self) -> bool {
        matches!(
            self,
            Location::LeftTorso | Location::CenterTorso | Location::RightTorso
        )
    }

    pub const fn is_arm(self) -> bool {
        matches!(self, Location::LeftArm | Location::RightArm)
    }

    pub const fn short_name(self) -> &'static str {
        match self {
            Location::Head => "HD",
            Location::LeftArm => "LA",
            Location::LeftTorso => "LT",
            Location::CenterTorso => "CT",
            Location::RightTorso => "RT",
            Location::RightArm => "RA",
            Location::LeftLeg => "LL",
            Location::RightLeg => "RL",
        }
    }

    /// Armour sides that are meaningful for this location.
    pub const fn armour_sides(self) -> &'static [ArmourSide] {
        if self.is_two_sided() {
            &[ArmourSide::Front, ArmourSide::Back]
        } else {
            &[ArmourSide::Only]
        }
    }
}

/// Which face of a component an armour value applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ArmourSide {
    /// Single-sided components (head, arms, legs).
    Only,
    Front,
    Back,
}

impl ArmourSide {
    /// Storage slot of this side inside a component's armour pair.
    pub(crate) const fn slot(self) -> usize {
        match self {
            ArmourSide::Only | ArmourSide::Front => 0,
            ArmourSide::Back => 1,
        }
    }
}

/// Technology base of chassis, items, upgrades and modules.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Faction {
    /// Usable by every technology base.
    #[default]
    Any,
    InnerSphere,
    Clan,
}

impl Faction {
    /// Check whether equipment of this faction may be used with `other`.
    pub fn is_compatible(&self, other: &Faction) -> bool {
        matches!((self, other), (Faction::Any, _) | (_, Faction::Any)) || self == other
    }
}

/// Weight class of a chassis.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ChassisClass {
    Light,
    Medium,
    Heavy,
    Assault,
}

impl ChassisClass {
    /// Classify a chassis by its maximum mass in tons.
    pub fn from_mass(mass: f64) -> Self {
        if mass < 40.0 {
            ChassisClass::Light
        } else if mass < 60.0 {
            ChassisClass::Medium
        } else if mass < 80.0 {
            ChassisClass::Heavy
        } else {
            ChassisClass::Assault
        }
    }
}

/// Typed installation capacity of a location.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum HardPointType {
    Energy,
    Ballistic,
    Missile,
    AntiMissile,
    Ecm,
}
