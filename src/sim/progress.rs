//! Phase progress fractions
//!
//! Each racer runs two sequential timed phases: eating, then base running.
//! Base running only starts accruing once the full eating duration has
//! elapsed. Both fractions are normalized to [0, 1] and recomputed from
//! scratch on every query.

/// Normalized completion of both phases for one racer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    /// Hot dog eating phase, in [0, 1]
    pub eating: f64,
    /// Base running phase, in [0, 1]; stays 0 until eating completes
    pub running: f64,
}

impl Progress {
    /// A racer is finished once both phases are complete
    pub fn is_finished(&self) -> bool {
        self.eating >= 1.0 && self.running >= 1.0
    }
}

/// Map elapsed race time to the two phase fractions.
///
/// `eat_time` and `run_time` must be positive; the slider bounds guarantee
/// this, so zero durations are not handled.
pub fn compute_progress(elapsed: f64, eat_time: f64, run_time: f64) -> Progress {
    let eating = (elapsed / eat_time).min(1.0);
    let running = if elapsed <= eat_time {
        0.0
    } else {
        ((elapsed - eat_time) / run_time).min(1.0)
    };
    Progress { eating, running }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_mid_eating_phase() {
        let p = compute_progress(3.0, 5.0, 30.0);
        assert_eq!(p.eating, 0.6);
        assert_eq!(p.running, 0.0);
        assert!(!p.is_finished());
    }

    #[test]
    fn test_running_starts_after_eating() {
        let p = compute_progress(6.0, 5.0, 30.0);
        assert_eq!(p.eating, 1.0);
        assert!((p.running - 1.0 / 30.0).abs() < 1e-12);
    }

    #[test]
    fn test_both_phases_complete() {
        let p = compute_progress(35.0, 5.0, 30.0);
        assert_eq!(p.eating, 1.0);
        assert_eq!(p.running, 1.0);
        assert!(p.is_finished());
    }

    #[test]
    fn test_running_zero_at_eating_boundary() {
        // elapsed == eat_time is still "not started running"
        let p = compute_progress(5.0, 5.0, 30.0);
        assert_eq!(p.eating, 1.0);
        assert_eq!(p.running, 0.0);
    }

    #[test]
    fn test_zero_elapsed() {
        let p = compute_progress(0.0, 2.0, 20.0);
        assert_eq!(p.eating, 0.0);
        assert_eq!(p.running, 0.0);
    }

    proptest! {
        #[test]
        fn prop_running_zero_during_eating(
            eat in 0.1f64..60.0,
            run in 0.1f64..60.0,
            frac in 0.0f64..=1.0,
        ) {
            let p = compute_progress(eat * frac, eat, run);
            prop_assert_eq!(p.running, 0.0);
        }

        #[test]
        fn prop_finished_past_total(
            eat in 0.1f64..60.0,
            run in 0.1f64..60.0,
            extra in 0.0f64..100.0,
        ) {
            let p = compute_progress(eat + run + extra, eat, run);
            prop_assert_eq!(p.eating, 1.0);
            prop_assert_eq!(p.running, 1.0);
        }

        #[test]
        fn prop_monotone_in_elapsed(
            eat in 0.1f64..60.0,
            run in 0.1f64..60.0,
            t1 in 0.0f64..120.0,
            dt in 0.0f64..120.0,
        ) {
            let a = compute_progress(t1, eat, run);
            let b = compute_progress(t1 + dt, eat, run);
            prop_assert!(b.eating >= a.eating);
            prop_assert!(b.running >= a.running);
        }

        #[test]
        fn prop_fractions_in_unit_interval(
            eat in 0.1f64..60.0,
            run in 0.1f64..60.0,
            t in 0.0f64..1000.0,
        ) {
            let p = compute_progress(t, eat, run);
            prop_assert!((0.0..=1.0).contains(&p.eating));
            prop_assert!((0.0..=1.0).contains(&p.running));
        }
    }
}
