//! Count-up animation of the displayed allowance.
//!
//! A three-state machine driven by explicit ticks. It owns no clock:
//! the caller decides when a tick happens (see `timer`), which keeps every
//! transition testable without waiting on wall time.
//!
//! ```text
//!   Idle ──retarget(Some)──▶ Animating ──tick reaches target──▶ Settled
//!    ▲                        │   ▲                               │
//!    └──── retarget(None) ────┘   └──── retarget(Some(new)) ──────┘
//! ```

use crate::types::AnimationConfig;

/// Where the animation currently is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    /// No target; display is 0.
    Idle,
    /// Climbing linearly from 0 toward `target`.
    Animating {
        value: f64,
        target: f64,
        increment: f64,
    },
    /// Reached `value` exactly; stays until the next retarget.
    Settled { value: f64 },
}

/// Linear count-up toward the latest target.
#[derive(Debug, Clone, PartialEq)]
pub struct Animator {
    phase: Phase,
    steps: f64,
}

impl Animator {
    pub fn new(config: AnimationConfig) -> Self {
        Animator {
            phase: Phase::Idle,
            steps: config.steps(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Value to show right now.
    pub fn display(&self) -> f64 {
        match self.phase {
            Phase::Idle => 0.0,
            Phase::Animating { value, .. } => value,
            Phase::Settled { value } => value,
        }
    }

    /// Target the animation is heading to (or sitting at).
    pub fn target(&self) -> Option<f64> {
        match self.phase {
            Phase::Idle => None,
            Phase::Animating { target, .. } => Some(target),
            Phase::Settled { value } => Some(value),
        }
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Animating { .. })
    }

    /// React to a new allowance.
    ///
    /// None (or a non-positive / non-finite value) drops back to Idle.
    /// A different target restarts from 0; the same target is a no-op.
    /// Returns true when the phase changed.
    pub fn retarget(&mut self, target: Option<f64>) -> bool {
        let Some(target) = target.filter(|t| t.is_finite() && *t > 0.0) else {
            let changed = self.phase != Phase::Idle;
            self.phase = Phase::Idle;
            return changed;
        };

        if self.target() == Some(target) {
            return false;
        }

        self.phase = Phase::Animating {
            value: 0.0,
            target,
            increment: target / self.steps,
        };
        true
    }

    /// Advance one tick. Returns true while more ticks are needed.
    pub fn tick(&mut self) -> bool {
        let Phase::Animating { value, target, increment } = self.phase else {
            return false;
        };

        let next = value + increment;
        if next >= target {
            self.phase = Phase::Settled { value: target };
            false
        } else {
            self.phase = Phase::Animating { value: next, target, increment };
            true
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
