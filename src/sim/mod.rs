//! Pure race model
//!
//! Everything the page derives each frame lives here. This module must stay
//! pure and deterministic:
//! - Elapsed time and durations in, progress fractions and positions out
//! - No rendering or platform dependencies
//! - No stored derived values (progress is recomputed on every query)

pub mod path;
pub mod progress;
pub mod state;
pub mod update;

pub use path::{base_position, WAYPOINTS};
pub use progress::{compute_progress, Progress};
pub use state::{Matchup, RacePhase, RaceState, RacerConfig, RacerId};
pub use update::{update, ControlInput};
