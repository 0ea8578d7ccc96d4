/// Rule constants and tunable parameters of one game-data version.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RulesConfig {
    /// Slack used when comparing masses in tons.
    ///
    /// Item masses are multiples of a quarter ton, but armour mass is derived
    /// from points-per-ton ratios and is not exactly representable.
    pub mass_tolerance: f64,
}

impl RulesConfig {
    // ===== compile-time constants used as type parameters =====
    /// Engine rating that yields one internal heat sink.
    pub const ENGINE_RATING_PER_HEAT_SINK: u16 = 25;
    /// Internal heat sinks an engine provides before it grows extra heat-sink slots.
    pub const ENGINE_INTERNAL_HEAT_SINKS: u16 = 10;
    /// Number of weapon groups a loadout can assign weapons to.
    pub const WEAPON_GROUPS: usize = 6;
    /// Upper bound on weapons tracked by weapon-group assignments.
    pub const MAX_GROUPED_WEAPONS: usize = 64;
    /// Upper bound on pilot modules per loadout, across all slot kinds.
    pub const MAX_MODULES: usize = 12;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MASS_TOLERANCE: f64 = 1e-6;

    pub fn new() -> Self {
        Self {
            mass_tolerance: Self::DEFAULT_MASS_TOLERANCE,
        }
    }

    pub fn with_mass_tolerance(mass_tolerance: f64) -> Self {
        Self { mass_tolerance }
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self::new()
    }
}
