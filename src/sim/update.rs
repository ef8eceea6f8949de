//! Per-poll race update
//!
//! Consumes one-shot control input, re-derives elapsed time from the wall
//! clock, and decides the winner. Called once per animation frame.

use super::progress::compute_progress;
use super::state::{Matchup, RacePhase, RaceState, RacerId};

/// Control commands for one poll. Flags are one-shot: the page sets them on
/// a button press and clears them after the update consumes them.
#[derive(Debug, Clone, Copy, Default)]
pub struct ControlInput {
    /// Start / pause / resume toggle
    pub toggle_run: bool,
    /// Return to the not-started state
    pub reset: bool,
}

/// Advance the race by one poll at wall-clock time `now_ms`.
pub fn update(state: &mut RaceState, matchup: &Matchup, input: &ControlInput, now_ms: f64) {
    if input.reset {
        *state = RaceState::new();
        return;
    }

    if input.toggle_run {
        match state.phase {
            RacePhase::NotStarted | RacePhase::Paused => {
                // Re-base the origin so already-elapsed time carries over
                // and paused time does not
                state.run_origin_ms = Some(now_ms - state.elapsed * 1000.0);
                state.phase = RacePhase::Running;
                state.winner = None;
            }
            RacePhase::Running => {
                state.phase = RacePhase::Paused;
            }
            RacePhase::Finished => {}
        }
    }

    if state.phase != RacePhase::Running {
        return;
    }

    if let Some(origin) = state.run_origin_ms {
        state.elapsed = ((now_ms - origin) / 1000.0).max(0.0);
    }

    if let Some(winner) = decide_winner(state.elapsed, matchup) {
        state.winner = Some(winner);
        state.phase = RacePhase::Finished;
    }
}

/// Winner rule: first racer with both phases complete. If both complete in
/// the same evaluation step, the smaller total duration wins.
fn decide_winner(elapsed: f64, matchup: &Matchup) -> Option<RacerId> {
    let joey = compute_progress(elapsed, matchup.joey.eat_time, matchup.joey.run_time);
    let bobby = compute_progress(elapsed, matchup.bobby.eat_time, matchup.bobby.run_time);

    match (joey.is_finished(), bobby.is_finished()) {
        (true, true) => {
            if matchup.joey.total() < matchup.bobby.total() {
                Some(RacerId::Joey)
            } else {
                Some(RacerId::Bobby)
            }
        }
        (true, false) => Some(RacerId::Joey),
        (false, true) => Some(RacerId::Bobby),
        (false, false) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::RacerConfig;

    fn matchup(joey: (f64, f64), bobby: (f64, f64)) -> Matchup {
        Matchup {
            joey: RacerConfig::new(joey.0, joey.1),
            bobby: RacerConfig::new(bobby.0, bobby.1),
        }
    }

    #[test]
    fn test_start_pause_resume_preserves_elapsed() {
        let m = matchup((5.0, 30.0), (30.0, 14.3));
        let mut state = RaceState::new();

        // Start at t=1000ms
        let start = ControlInput {
            toggle_run: true,
            ..Default::default()
        };
        update(&mut state, &m, &start, 1000.0);
        assert_eq!(state.phase, RacePhase::Running);

        // 3 seconds later
        update(&mut state, &m, &ControlInput::default(), 4000.0);
        assert!((state.elapsed - 3.0).abs() < 1e-9);

        // Pause, then let 10 wall seconds pass
        update(&mut state, &m, &start, 4000.0);
        assert_eq!(state.phase, RacePhase::Paused);
        update(&mut state, &m, &ControlInput::default(), 14000.0);
        assert!((state.elapsed - 3.0).abs() < 1e-9);

        // Resume; elapsed continues from 3s, not 13s
        update(&mut state, &m, &start, 14000.0);
        update(&mut state, &m, &ControlInput::default(), 15000.0);
        assert!((state.elapsed - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_reset_from_every_phase() {
        let m = matchup((5.0, 30.0), (30.0, 14.3));
        let reset = ControlInput {
            reset: true,
            ..Default::default()
        };
        let start = ControlInput {
            toggle_run: true,
            ..Default::default()
        };

        for stop_at in [0.0, 2000.0, 40_000.0] {
            let mut state = RaceState::new();
            update(&mut state, &m, &start, 0.0);
            update(&mut state, &m, &ControlInput::default(), stop_at);
            update(&mut state, &m, &reset, stop_at);
            assert_eq!(state.phase, RacePhase::NotStarted);
            assert_eq!(state.elapsed, 0.0);
            assert!(state.winner.is_none());
            assert!(state.run_origin_ms.is_none());
        }
    }

    #[test]
    fn test_joey_wins_by_total_time() {
        // Joey total 35.0s, Bobby total 44.3s
        let m = matchup((5.0, 30.0), (30.0, 14.3));
        let mut state = RaceState::new();
        let start = ControlInput {
            toggle_run: true,
            ..Default::default()
        };
        update(&mut state, &m, &start, 0.0);
        update(&mut state, &m, &ControlInput::default(), 36_000.0);
        assert_eq!(state.phase, RacePhase::Finished);
        assert_eq!(state.winner, Some(RacerId::Joey));
    }

    #[test]
    fn test_simultaneous_finish_tie_break() {
        // Both already finished at the first evaluation; smaller total wins
        let m = matchup((5.0, 30.0), (20.0, 14.3));
        let mut state = RaceState::new();
        update(
            &mut state,
            &m,
            &ControlInput {
                toggle_run: true,
                ..Default::default()
            },
            0.0,
        );
        update(&mut state, &m, &ControlInput::default(), 60_000.0);
        // Bobby's 34.3s total beats Joey's 35.0s
        assert_eq!(state.winner, Some(RacerId::Bobby));
    }

    #[test]
    fn test_finished_freezes_clock_and_ignores_toggle() {
        let m = matchup((5.0, 30.0), (30.0, 14.3));
        let mut state = RaceState::new();
        let start = ControlInput {
            toggle_run: true,
            ..Default::default()
        };
        update(&mut state, &m, &start, 0.0);
        update(&mut state, &m, &ControlInput::default(), 36_000.0);
        let decided_at = state.elapsed;

        update(&mut state, &m, &start, 50_000.0);
        assert_eq!(state.phase, RacePhase::Finished);
        assert_eq!(state.elapsed, decided_at);
    }

    #[test]
    fn test_no_winner_mid_race() {
        let m = matchup((5.0, 30.0), (30.0, 14.3));
        let mut state = RaceState::new();
        update(
            &mut state,
            &m,
            &ControlInput {
                toggle_run: true,
                ..Default::default()
            },
            0.0,
        );
        update(&mut state, &m, &ControlInput::default(), 10_000.0);
        assert_eq!(state.phase, RacePhase::Running);
        assert!(state.winner.is_none());
    }
}
