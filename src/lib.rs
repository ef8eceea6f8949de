//! Hot Dog Derby - Joey Chestnut vs Bobby Witt Jr.
//!
//! A two-phase race: eat the hot dog, then run the bases. Phase timings are
//! slider-driven; the page redraws on an animation-frame loop.
//!
//! Core modules:
//! - `sim`: Pure race model (progress fractions, base path, state machine)
//! - `config`: Slider bounds and the default matchup
//! - `renderer`: WebGPU rendering of the baseball field

pub mod config;
pub mod renderer;
pub mod sim;

pub use config::SliderRange;
pub use sim::{Matchup, Progress, RacePhase, RaceState, RacerConfig, RacerId};

/// Shared layout constants
pub mod consts {
    /// The field scene spans the unit square; margin added around it in NDC
    pub const FIELD_MARGIN: f32 = 0.05;

    /// Runner marker radius (field units)
    pub const MARKER_RADIUS: f32 = 0.025;
    /// White outline width around runner markers (field units)
    pub const MARKER_OUTLINE: f32 = 0.006;

    /// Bobby's base running is fixed at his fastest recorded home-to-home
    /// sprint, in seconds
    pub const BOBBY_RUN_TIME: f64 = 14.3;
}

/// Linear interpolation between `a` and `b` by `t` in [0, 1]
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
