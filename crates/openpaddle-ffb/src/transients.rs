//! Transient effect state machine (bump and jitter).
//!
//! Two independent countdown counters driven once per servo tick. While
//! either is active it overrides the spring force entirely; bump wins when
//! both are active. Triggering one effect never resets the other's counter.

use serde::{Deserialize, Serialize};

use crate::constants::{
    BUMP_FORCE, BUMP_TICKS, JITTER_FORCE, JITTER_PERIOD_TICKS, JITTER_TICKS,
};
use crate::math::Vec3;

/// Which transient branch produced output this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransientKind {
    /// Collision-rebound impulse
    Bump,
    /// Scored-against square-wave vibration
    Jitter,
}

/// Countdown state for the bump and jitter effects.
///
/// # Examples
///
/// ```
/// use openpaddle_ffb::{TransientEffects, TransientKind};
///
/// let mut transients = TransientEffects::new();
/// assert!(transients.step().is_none());
///
/// transients.trigger_bump();
/// let (force, kind) = transients.step().unwrap();
/// assert_eq!(kind, TransientKind::Bump);
/// assert!(force.x > 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TransientEffects {
    bump_ticks: u32,
    jitter_ticks: u32,
}

impl TransientEffects {
    /// Create an idle state machine.
    pub const fn new() -> Self {
        Self {
            bump_ticks: 0,
            jitter_ticks: 0,
        }
    }

    /// Arm the bump effect for another [`BUMP_TICKS`] servo ticks.
    ///
    /// Repeated triggers accumulate rather than restart the countdown.
    pub fn trigger_bump(&mut self) {
        self.arm_bump(BUMP_TICKS);
    }

    /// Arm the jitter effect for another [`JITTER_TICKS`] servo ticks.
    pub fn trigger_jitter(&mut self) {
        self.arm_jitter(JITTER_TICKS);
    }

    /// Add an explicit number of bump ticks.
    pub fn arm_bump(&mut self, ticks: u32) {
        self.bump_ticks = self.bump_ticks.saturating_add(ticks);
    }

    /// Add an explicit number of jitter ticks.
    pub fn arm_jitter(&mut self, ticks: u32) {
        self.jitter_ticks = self.jitter_ticks.saturating_add(ticks);
    }

    /// Advance the state machine by one servo tick.
    ///
    /// Returns the overriding force when an effect is active, or `None` when
    /// idle (the spring model applies). Bump is checked first; while it is
    /// active the jitter counter is untouched.
    pub fn step(&mut self) -> Option<(Vec3, TransientKind)> {
        if self.bump_ticks > 0 {
            self.bump_ticks -= 1;
            return Some((Vec3::new(BUMP_FORCE, 0.0, 0.0), TransientKind::Bump));
        }

        if self.jitter_ticks > 0 {
            // First half of each period pushes right, second half pushes left
            let magnitude = if self.jitter_ticks % JITTER_PERIOD_TICKS < JITTER_PERIOD_TICKS / 2 {
                JITTER_FORCE
            } else {
                -JITTER_FORCE
            };
            self.jitter_ticks -= 1;
            return Some((Vec3::new(magnitude, 0.0, 0.0), TransientKind::Jitter));
        }

        None
    }

    /// Remaining bump ticks.
    pub fn bump_ticks(&self) -> u32 {
        self.bump_ticks
    }

    /// Remaining jitter ticks.
    pub fn jitter_ticks(&self) -> u32 {
        self.jitter_ticks
    }

    /// True when either effect has remaining ticks.
    pub fn is_active(&self) -> bool {
        self.bump_ticks > 0 || self.jitter_ticks > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_produces_no_force() {
        let mut transients = TransientEffects::new();
        assert!(transients.step().is_none());
        assert!(!transients.is_active());
    }

    #[test]
    fn test_bump_runs_for_exactly_its_tick_budget() {
        let mut transients = TransientEffects::new();
        transients.trigger_bump();

        for _ in 0..BUMP_TICKS {
            let (force, kind) = transients.step().expect("bump should be active");
            assert_eq!(kind, TransientKind::Bump);
            assert_eq!(force, Vec3::new(BUMP_FORCE, 0.0, 0.0));
        }
        assert!(transients.step().is_none());
        assert_eq!(transients.bump_ticks(), 0);
    }

    #[test]
    fn test_repeated_bump_triggers_accumulate() {
        let mut transients = TransientEffects::new();
        transients.trigger_bump();
        transients.trigger_bump();
        assert_eq!(transients.bump_ticks(), 2 * BUMP_TICKS);
    }

    #[test]
    fn test_bump_preempts_jitter_without_consuming_it() {
        let mut transients = TransientEffects::new();
        transients.trigger_jitter();
        transients.trigger_bump();

        for _ in 0..BUMP_TICKS {
            let (_, kind) = transients.step().expect("active");
            assert_eq!(kind, TransientKind::Bump);
        }
        // Jitter counter was frozen while bump drove the output
        assert_eq!(transients.jitter_ticks(), JITTER_TICKS);

        let (_, kind) = transients.step().expect("jitter takes over");
        assert_eq!(kind, TransientKind::Jitter);
    }

    #[test]
    fn test_jitter_square_wave_parity() {
        let mut transients = TransientEffects::new();
        transients.trigger_jitter();

        for _ in 0..JITTER_TICKS {
            let remaining = transients.jitter_ticks();
            let (force, kind) = transients.step().expect("jitter active");
            assert_eq!(kind, TransientKind::Jitter);

            let expected = if remaining % JITTER_PERIOD_TICKS < JITTER_PERIOD_TICKS / 2 {
                JITTER_FORCE
            } else {
                -JITTER_FORCE
            };
            assert_eq!(force.x, expected);
            assert_eq!(force.y, 0.0);
            assert_eq!(force.z, 0.0);
        }
        assert!(transients.step().is_none());
    }

    #[test]
    fn test_counters_never_go_negative() {
        let mut transients = TransientEffects::new();
        for _ in 0..10 {
            assert!(transients.step().is_none());
        }
        assert_eq!(transients.bump_ticks(), 0);
        assert_eq!(transients.jitter_ticks(), 0);
    }
}
