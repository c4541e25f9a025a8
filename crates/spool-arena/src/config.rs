//! Arena configuration parameters.

use crate::error::ArenaError;

/// How an owner sizes the replacement arena when it runs out of slots.
///
/// The new capacity is `capacity * numerator / denominator + pending`,
/// where `pending` is the number of slots the triggering insertion needs.
/// Adding `pending` guarantees the new arena fits the insertion even when
/// the scaled capacity alone would not (e.g. growing from zero). The
/// result never exceeds [`ArenaConfig::MAX_CAPACITY`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthPolicy {
    /// Scale factor numerator.
    pub numerator: u32,
    /// Scale factor denominator. Must be non-zero.
    pub denominator: u32,
}

impl GrowthPolicy {
    /// Grow by half again: `capacity * 1.5 + pending`.
    pub const ONE_AND_A_HALF: GrowthPolicy = GrowthPolicy {
        numerator: 3,
        denominator: 2,
    };

    /// Double the capacity: `capacity * 2 + pending`.
    pub const DOUBLE: GrowthPolicy = GrowthPolicy {
        numerator: 2,
        denominator: 1,
    };

    /// Capacity of the replacement arena for `capacity` current slots and
    /// `pending` slots about to be requested.
    pub fn grow(&self, capacity: usize, pending: usize) -> usize {
        let scaled = capacity.saturating_mul(self.numerator as usize) / self.denominator as usize;
        scaled
            .saturating_add(pending)
            .min(ArenaConfig::MAX_CAPACITY)
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::ONE_AND_A_HALF
    }
}

/// Configuration for an arena and the list that owns it.
///
/// Validated at list construction; immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Number of slots reserved up front.
    ///
    /// Default: 24.
    pub initial_capacity: usize,

    /// Sizing rule applied whenever a pending insertion would exceed capacity.
    pub growth: GrowthPolicy,
}

impl ArenaConfig {
    /// Default initial capacity in slots.
    pub const DEFAULT_CAPACITY: usize = 24;

    /// Largest capacity addressable by a [`SlotId`](crate::SlotId).
    pub const MAX_CAPACITY: usize = u32::MAX as usize;

    /// Create a config with the given initial capacity and default growth.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            growth: GrowthPolicy::default(),
        }
    }

    /// Replace the growth policy.
    pub fn with_growth(mut self, growth: GrowthPolicy) -> Self {
        self.growth = growth;
        self
    }

    /// Check that the config describes a usable, non-shrinking arena.
    pub fn validate(&self) -> Result<(), ArenaError> {
        if self.growth.denominator == 0 {
            return Err(ArenaError::InvalidConfig {
                reason: "growth denominator must be non-zero".into(),
            });
        }
        if self.growth.numerator < self.growth.denominator {
            return Err(ArenaError::InvalidConfig {
                reason: format!(
                    "growth factor {}/{} would shrink the arena",
                    self.growth.numerator, self.growth.denominator
                ),
            });
        }
        if self.initial_capacity > Self::MAX_CAPACITY {
            return Err(ArenaError::InvalidConfig {
                reason: format!(
                    "initial capacity {} exceeds the slot index range",
                    self.initial_capacity
                ),
            });
        }
        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capacity_is_24() {
        let config = ArenaConfig::default();
        assert_eq!(config.initial_capacity, 24);
        assert_eq!(config.growth, GrowthPolicy::ONE_AND_A_HALF);
    }

    #[test]
    fn one_and_a_half_adds_pending() {
        let policy = GrowthPolicy::ONE_AND_A_HALF;
        assert_eq!(policy.grow(4, 1), 7);
        assert_eq!(policy.grow(10, 5), 20);
    }

    #[test]
    fn growth_from_zero_fits_pending() {
        assert_eq!(GrowthPolicy::ONE_AND_A_HALF.grow(0, 3), 3);
        assert_eq!(GrowthPolicy::DOUBLE.grow(0, 1), 1);
    }

    #[test]
    fn growth_is_capped_at_slot_index_range() {
        let max = ArenaConfig::MAX_CAPACITY;
        assert_eq!(GrowthPolicy::DOUBLE.grow(max, 10), max);
        assert_eq!(GrowthPolicy::DOUBLE.grow(usize::MAX, 1), max);
    }

    #[test]
    fn shrinking_factor_rejected() {
        let config = ArenaConfig::new(8).with_growth(GrowthPolicy {
            numerator: 1,
            denominator: 2,
        });
        assert!(matches!(
            config.validate(),
            Err(ArenaError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn zero_denominator_rejected() {
        let config = ArenaConfig::new(8).with_growth(GrowthPolicy {
            numerator: 1,
            denominator: 0,
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn default_config_is_valid() {
        assert!(ArenaConfig::default().validate().is_ok());
        assert!(ArenaConfig::new(0).validate().is_ok());
    }
}
