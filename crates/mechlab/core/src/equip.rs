//! Outcome taxonomy of every validation query.
//!
//! Checks never fail with an error: they answer with an [`EquipResult`], which
//! is either [`EquipResult::SUCCESS`] or a failure kind optionally scoped to a
//! location. When several components reject the same item for different
//! reasons, [`EquipResult::is_more_specific_than`] picks the most informative
//! one to show the user.

use crate::catalog::Location;

/// Why an edit can or cannot be made.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum EquipResultKind {
    Success,
    /// The chassis or location cannot carry the item at all.
    NotSupported,
    /// The item does not fit the selected upgrades (wrong heat sink type, ...).
    IncompatibleUpgrades,
    TooHeavy,
    NotEnoughSlots,
    /// Side torsos cannot take the side parts of a wide engine.
    NotEnoughSlotsForXlSide,
    JumpJetCapacityReached,
    EngineAlreadyEquipped,
    TooManyOfThatType,
    NoFreeHardPoints,
    ComponentAlreadyHasCase,
    EverythingAlreadyHasCase,
    ExceededMaxArmour,
    /// Actuators cannot be switched on next to a large-bore weapon.
    LargeBoreWeaponPresent,
    /// The hand actuator needs the lower arm actuator.
    LaaBeforeHa,
    NotToggleable,
    /// The selected armour only works with an ECM installed.
    NeedEcm,
    CannotRemoveEcm,
    ModuleAlreadyEquipped,
    NoFreeModuleSlot,
}

impl EquipResultKind {
    /// Fixed ranking used to choose between rejections; higher is more specific.
    ///
    /// Component-local reasons outrank chassis-wide ones, and a reason that
    /// shows the item almost fits (slots) outranks one that shows it never
    /// could (not supported).
    pub const fn specificity(self) -> u8 {
        use EquipResultKind::*;
        match self {
            Success => 0,
            NotSupported => 1,
            IncompatibleUpgrades => 5,
            TooHeavy
            | JumpJetCapacityReached
            | EngineAlreadyEquipped
            | TooManyOfThatType
            | EverythingAlreadyHasCase
            | NotToggleable
            | NeedEcm
            | CannotRemoveEcm
            | ModuleAlreadyEquipped
            | NoFreeModuleSlot => 10,
            NoFreeHardPoints => 20,
            ComponentAlreadyHasCase => 25,
            NotEnoughSlots => 30,
            NotEnoughSlotsForXlSide => 35,
            ExceededMaxArmour | LargeBoreWeaponPresent | LaaBeforeHa => 40,
        }
    }

    pub const fn message(self) -> &'static str {
        use EquipResultKind::*;
        match self {
            Success => "Success",
            NotSupported => "Not supported",
            IncompatibleUpgrades => "Incompatible with the selected upgrades",
            TooHeavy => "Too heavy",
            NotEnoughSlots => "Not enough slots",
            NotEnoughSlotsForXlSide => "Not enough slots for the engine side parts",
            JumpJetCapacityReached => "Jump jet capacity reached",
            EngineAlreadyEquipped => "An engine is already equipped",
            TooManyOfThatType => "Too many of that type",
            NoFreeHardPoints => "No free hardpoints",
            ComponentAlreadyHasCase => "Component already has CASE",
            EverythingAlreadyHasCase => "Every supported component already has CASE",
            ExceededMaxArmour => "Exceeded maximum armour",
            LargeBoreWeaponPresent => "A large-bore weapon is present",
            LaaBeforeHa => "The lower arm actuator must be enabled before the hand actuator",
            NotToggleable => "Item cannot be toggled",
            NeedEcm => "The selected armour requires an ECM",
            CannotRemoveEcm => "The ECM is required by the selected armour",
            ModuleAlreadyEquipped => "Module already equipped",
            NoFreeModuleSlot => "No free module slot",
        }
    }

    /// Stable identifier, e.g. `NOT_ENOUGH_SLOTS`.
    pub fn error_code(self) -> &'static str {
        self.into()
    }
}

/// Outcome of a validation query: a kind plus the location it applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipResult {
    pub kind: EquipResultKind,
    pub location: Option<Location>,
}

impl EquipResult {
    pub const SUCCESS: EquipResult = EquipResult::new(EquipResultKind::Success);

    pub const fn new(kind: EquipResultKind) -> Self {
        Self {
            kind,
            location: None,
        }
    }

    pub const fn at(kind: EquipResultKind, location: Location) -> Self {
        Self {
            kind,
            location: Some(location),
        }
    }

    pub const fn is_success(&self) -> bool {
        matches!(self.kind, EquipResultKind::Success)
    }

    /// Strict comparison of specificity; equal weights are never more specific.
    pub const fn is_more_specific_than(&self, other: &EquipResult) -> bool {
        self.kind.specificity() > other.kind.specificity()
    }

    /// The same result as a loadout-wide answer.
    #[must_use]
    pub const fn without_location(self) -> Self {
        Self::new(self.kind)
    }

    /// Converts into a `Result`, so checks compose with `?`.
    pub fn into_result(self) -> Result<(), EquipResult> {
        if self.is_success() { Ok(()) } else { Err(self) }
    }
}

impl From<EquipResultKind> for EquipResult {
    fn from(kind: EquipResultKind) -> Self {
        Self::new(kind)
    }
}

impl core::fmt::Display for EquipResult {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.location {
            Some(location) => write!(f, "{} on {}.", self.kind.message(), location),
            None => write!(f, "{}.", self.kind.message()),
        }
    }
}
