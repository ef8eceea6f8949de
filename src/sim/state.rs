//! Race state and configuration types
//!
//! `RaceState` is an explicitly passed value owned by the page; the model
//! functions only read it and return derived values. Configs are captured
//! when a run starts and stay fixed until reset.

/// The two competitors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RacerId {
    Joey,
    Bobby,
}

impl RacerId {
    pub fn display_name(&self) -> &'static str {
        match self {
            RacerId::Joey => "Joey Chestnut",
            RacerId::Bobby => "Bobby Witt Jr.",
        }
    }
}

/// Per-racer phase durations, in seconds. Always positive (slider bounds
/// enforce the minimums).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RacerConfig {
    /// Hot dog eating time
    pub eat_time: f64,
    /// Home-to-home base running time
    pub run_time: f64,
}

impl RacerConfig {
    pub fn new(eat_time: f64, run_time: f64) -> Self {
        Self { eat_time, run_time }
    }

    /// Total time to finish both phases
    pub fn total(&self) -> f64 {
        self.eat_time + self.run_time
    }
}

/// Both racers' configs for one run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matchup {
    pub joey: RacerConfig,
    pub bobby: RacerConfig,
}

impl Matchup {
    pub fn config(&self, id: RacerId) -> RacerConfig {
        match id {
            RacerId::Joey => self.joey,
            RacerId::Bobby => self.bobby,
        }
    }
}

/// Current phase of the race
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RacePhase {
    /// Waiting for the first start
    #[default]
    NotStarted,
    /// Clock advancing
    Running,
    /// Clock frozen, resumable
    Paused,
    /// A winner has been decided
    Finished,
}

/// Mutable race state, owned by the page
#[derive(Debug, Clone, Default)]
pub struct RaceState {
    pub phase: RacePhase,
    /// Elapsed race time in seconds, monotonically non-decreasing while
    /// running
    pub elapsed: f64,
    /// Wall-clock origin (ms) of the current run segment; re-based on
    /// resume so paused time never accrues
    pub run_origin_ms: Option<f64>,
    pub winner: Option<RacerId>,
}

impl RaceState {
    pub fn new() -> Self {
        Self::default()
    }
}
