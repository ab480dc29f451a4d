#![forbid(unsafe_code)]

//! Settle-then-retarget oscillation.
//!
//! The primary spring swings between `-range` and `+range`. While it is
//! moving toward the current extreme the machine is *settling*; once the
//! spring satisfies the settling predicate the machine *retargets*: the cycle
//! counter increments and the target flips to the opposite extreme. The
//! retarget is instantaneous, so the observable state is always settling.
//!
//! # Invariants
//!
//! 1. The first target is `-range` with cycle 0.
//! 2. Each retarget increments the cycle by exactly one and flips the sign.
//! 3. The settling check is made against this machine's target, not the
//!    target stored in the spring state.

use crate::animation::SpringState;

/// Which extreme is currently targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extreme {
    /// `-range`: contracted.
    Negative,
    /// `+range`: expanded.
    Positive,
}

impl Extreme {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Negative => Self::Positive,
            Self::Positive => Self::Negative,
        }
    }

    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Negative => -1.0,
            Self::Positive => 1.0,
        }
    }
}

/// Emitted when the machine retargets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Retarget {
    /// Cycle count after the increment.
    pub cycle: u32,
    /// New target position.
    pub target: f64,
}

/// Cycle counter and current oscillation target.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleState {
    range: f64,
    epsilon: f64,
    cycle: u32,
    extreme: Extreme,
}

impl CycleState {
    /// Start at cycle 0 targeting `-range`.
    #[must_use]
    pub fn new(range: f64, epsilon: f64) -> Self {
        Self {
            range,
            epsilon,
            cycle: 0,
            extreme: Extreme::Negative,
        }
    }

    #[inline]
    #[must_use]
    pub fn cycle(&self) -> u32 {
        self.cycle
    }

    #[inline]
    #[must_use]
    pub fn extreme(&self) -> Extreme {
        self.extreme
    }

    /// Current target position.
    #[inline]
    #[must_use]
    pub fn target(&self) -> f64 {
        self.extreme.sign() * self.range
    }

    /// Check the primary channel and retarget if it has settled.
    pub fn observe(&mut self, primary: &SpringState) -> Option<Retarget> {
        let probe = SpringState {
            target: self.target(),
            ..*primary
        };
        if !probe.is_settled(self.epsilon) {
            return None;
        }
        self.cycle += 1;
        self.extreme = self.extreme.flipped();
        tracing::debug!(cycle = self.cycle, target = self.target(), "spring settled, retargeting");
        Some(Retarget {
            cycle: self.cycle,
            target: self.target(),
        })
    }

    pub fn reset(&mut self) {
        self.cycle = 0;
        self.extreme = Extreme::Negative;
    }
}
