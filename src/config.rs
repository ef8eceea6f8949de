//! Slider bounds for the adjustable race parameters
//!
//! All durations the user can set come through these ranges; the strictly
//! positive minimums are what make the progress math total.

use crate::consts::BOBBY_RUN_TIME;
use crate::sim::{Matchup, RacerConfig};

/// Bounds and default for one duration slider, in seconds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl SliderRange {
    /// Clamp a raw slider value into range, falling back to the default on
    /// non-finite input
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_finite() {
            value.clamp(self.min, self.max)
        } else {
            self.default
        }
    }
}

/// Joey's hot dog eating time
pub const JOEY_EAT: SliderRange = SliderRange {
    min: 2.0,
    max: 10.0,
    step: 0.1,
    default: 5.0,
};

/// Joey's base running time
pub const JOEY_RUN: SliderRange = SliderRange {
    min: 20.0,
    max: 40.0,
    step: 0.5,
    default: 30.0,
};

/// Bobby's hot dog eating time (his base running is fixed)
pub const BOBBY_EAT: SliderRange = SliderRange {
    min: 20.0,
    max: 40.0,
    step: 0.5,
    default: 30.0,
};

/// The matchup the page starts with
pub fn default_matchup() -> Matchup {
    Matchup {
        joey: RacerConfig::new(JOEY_EAT.default, JOEY_RUN.default),
        bobby: RacerConfig::new(BOBBY_EAT.default, BOBBY_RUN_TIME),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_within_bounds() {
        for range in [JOEY_EAT, JOEY_RUN, BOBBY_EAT] {
            assert!(range.min > 0.0);
            assert!(range.min <= range.default && range.default <= range.max);
            assert!(range.step > 0.0);
        }
        assert!(BOBBY_RUN_TIME > 0.0);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(JOEY_EAT.clamp(1.0), 2.0);
        assert_eq!(JOEY_EAT.clamp(99.0), 10.0);
        assert_eq!(JOEY_EAT.clamp(7.3), 7.3);
        assert_eq!(JOEY_EAT.clamp(f64::NAN), JOEY_EAT.default);
    }

    #[test]
    fn test_default_matchup_matches_ranges() {
        let m = default_matchup();
        assert_eq!(m.joey.eat_time, JOEY_EAT.default);
        assert_eq!(m.joey.run_time, JOEY_RUN.default);
        assert_eq!(m.bobby.eat_time, BOBBY_EAT.default);
        assert_eq!(m.bobby.run_time, BOBBY_RUN_TIME);
    }
}
