//! Simulation tuning constants.
//!
//! Everything here is a plain constant: the simulation has no runtime
//! configuration of its own, and content crates reference these values when
//! templates leave a field unspecified.

/// Central collection of gameplay constants.
pub struct GameConfig;

impl GameConfig {
    // ========================================================================
    // Scheduling
    // ========================================================================

    /// Timeline cost of one turn at the reference speed.
    pub const BASE_TURN_COST: u64 = 1000;

    /// Speed value that pays exactly [`Self::BASE_TURN_COST`] per turn.
    ///
    /// Cost is inversely proportional to speed, so an entity at twice this
    /// speed acts exactly twice as often.
    pub const REFERENCE_SPEED: u32 = 100;

    // ========================================================================
    // Template Defaults
    // ========================================================================

    pub const DEFAULT_MAX_HP: i32 = 1;
    pub const DEFAULT_ATTACK_VALUE: i32 = 1;
    pub const DEFAULT_DEFENSE_VALUE: i32 = 0;
    pub const DEFAULT_SIGHT_RADIUS: u32 = 5;
    pub const DEFAULT_INVENTORY_SLOTS: usize = 10;
    pub const DEFAULT_SPEED: u32 = Self::REFERENCE_SPEED;

    // ========================================================================
    // Combat
    // ========================================================================

    /// Flat damage per landed hit. Attack stats shift the hit chance, never
    /// the damage.
    pub const MELEE_DAMAGE: i32 = 1;

    /// Inclusive hit-chance clamp bounds, in percent. No attack is ever a
    /// guaranteed hit or a guaranteed miss.
    pub const HIT_CHANCE_MIN: i32 = 10;
    pub const HIT_CHANCE_MAX: i32 = 90;

    // ========================================================================
    // Growth Behavior
    // ========================================================================

    /// How many times a fungus may spread before going dormant.
    pub const FUNGUS_GROWTHS: u32 = 5;

    /// Percent chance per turn that a fungus spreads.
    pub const FUNGUS_GROWTH_CHANCE: i32 = 2;

    /// Broadcast radius of the spreading announcement.
    pub const FUNGUS_SPREAD_RADIUS: i32 = 5;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_chance_bounds_are_sane() {
        assert!(GameConfig::HIT_CHANCE_MIN > 0);
        assert!(GameConfig::HIT_CHANCE_MAX < 100);
        assert!(GameConfig::HIT_CHANCE_MIN < GameConfig::HIT_CHANCE_MAX);
    }

    #[test]
    fn defaults_are_positive() {
        assert!(GameConfig::DEFAULT_MAX_HP > 0);
        assert!(GameConfig::DEFAULT_SPEED > 0);
        assert!(GameConfig::DEFAULT_INVENTORY_SLOTS > 0);
    }
}
