#![forbid(unsafe_code)]

//! Timed four-phase breathing cycle.
//!
//! Unlike the settle-driven [`CycleState`](crate::cycle::CycleState), the
//! meditation rhythm is purely clock driven: inhale, hold, exhale, pause,
//! each lasting a fixed number of ticks, then back to inhale.
//!
//! # Invariants
//!
//! 1. The phase timer increments once per [`BreathClock::tick`]; when it
//!    reaches the current phase's duration the phase advances and the timer
//!    resets to zero.
//! 2. Phases are visited strictly in order `Inhale → Hold → Exhale → Pause →
//!    Inhale …`.
//! 3. The completed-breath counter increments exactly once per traversal, on
//!    the `Exhale → Pause` transition.
//! 4. Durations are at least one tick, so every tick makes progress.

/// One phase of the breathing rhythm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BreathPhase {
    Inhale,
    Hold,
    Exhale,
    Pause,
}

impl BreathPhase {
    pub const ALL: [Self; 4] = [Self::Inhale, Self::Hold, Self::Exhale, Self::Pause];

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Inhale => Self::Hold,
            Self::Hold => Self::Exhale,
            Self::Exhale => Self::Pause,
            Self::Pause => Self::Inhale,
        }
    }

    /// `+1` while the lungs are full or filling, `-1` otherwise.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Inhale | Self::Hold => 1.0,
            Self::Exhale | Self::Pause => -1.0,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Inhale => "inhale",
            Self::Hold => "hold",
            Self::Exhale => "exhale",
            Self::Pause => "pause",
        }
    }
}

/// Duration of each phase, in ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseDurations {
    pub inhale: u32,
    pub hold: u32,
    pub exhale: u32,
    pub pause: u32,
}

impl PhaseDurations {
    /// Convert whole-second durations at `fps` ticks per second.
    #[must_use]
    pub fn from_seconds(fps: u32, inhale: f64, hold: f64, exhale: f64, pause: f64) -> Self {
        let ticks = |secs: f64| ((secs * f64::from(fps)).round() as u32).max(1);
        Self {
            inhale: ticks(inhale),
            hold: ticks(hold),
            exhale: ticks(exhale),
            pause: ticks(pause),
        }
    }

    #[must_use]
    pub fn get(&self, phase: BreathPhase) -> u32 {
        let ticks = match phase {
            BreathPhase::Inhale => self.inhale,
            BreathPhase::Hold => self.hold,
            BreathPhase::Exhale => self.exhale,
            BreathPhase::Pause => self.pause,
        };
        ticks.max(1)
    }

    /// Ticks for one full traversal.
    #[must_use]
    pub fn total(&self) -> u32 {
        BreathPhase::ALL.iter().map(|&p| self.get(p)).sum()
    }
}

/// A phase boundary crossed during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseChange {
    pub from: BreathPhase,
    pub to: BreathPhase,
}

/// Phase sequencer for the breathing exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreathClock {
    durations: PhaseDurations,
    phase: BreathPhase,
    timer: u32,
    breaths: u32,
}

impl BreathClock {
    #[must_use]
    pub fn new(durations: PhaseDurations) -> Self {
        Self {
            durations,
            phase: BreathPhase::Inhale,
            timer: 0,
            breaths: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn phase(&self) -> BreathPhase {
        self.phase
    }

    /// Ticks spent in the current phase.
    #[inline]
    #[must_use]
    pub fn timer(&self) -> u32 {
        self.timer
    }

    /// Completed inhale-hold-exhale traversals.
    #[inline]
    #[must_use]
    pub fn breaths(&self) -> u32 {
        self.breaths
    }

    /// Advance one tick, returning the transition if a boundary was crossed.
    pub fn tick(&mut self) -> Option<PhaseChange> {
        self.timer += 1;
        if self.timer < self.durations.get(self.phase) {
            return None;
        }
        let from = self.phase;
        self.phase = from.next();
        self.timer = 0;
        if from == BreathPhase::Exhale {
            self.breaths += 1;
        }
        tracing::debug!(from = from.name(), to = self.phase.name(), breaths = self.breaths, "breath phase");
        Some(PhaseChange {
            from,
            to: self.phase,
        })
    }

    pub fn reset(&mut self) {
        self.phase = BreathPhase::Inhale;
        self.timer = 0;
        self.breaths = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_seven_eight() -> PhaseDurations {
        PhaseDurations::from_seconds(30, 4.0, 7.0, 8.0, 2.0)
    }

    #[test]
    fn seconds_convert_to_ticks() {
        let d = four_seven_eight();
        assert_eq!((d.inhale, d.hold, d.exhale, d.pause), (120, 210, 240, 60));
        assert_eq!(d.total(), 630);
    }

    #[test]
    fn zero_duration_clamped_to_one_tick() {
        let d = PhaseDurations::from_seconds(30, 0.0, 7.0, 8.0, 2.0);
        assert_eq!(d.get(BreathPhase::Inhale), 1);
    }

    #[test]
    fn phase_lasts_its_duration() {
        let mut clock = BreathClock::new(four_seven_eight());
        for _ in 0..119 {
            assert!(clock.tick().is_none());
        }
        assert_eq!(
            clock.tick(),
            Some(PhaseChange {
                from: BreathPhase::Inhale,
                to: BreathPhase::Hold
            })
        );
        assert_eq!(clock.timer(), 0);
    }

    #[test]
    fn next_wraps() {
        let mut p = BreathPhase::Inhale;
        for expected in [
            BreathPhase::Hold,
            BreathPhase::Exhale,
            BreathPhase::Pause,
            BreathPhase::Inhale,
        ] {
            p = p.next();
            assert_eq!(p, expected);
        }
    }

    #[test]
    fn breath_counted_at_exhale_to_pause() {
        let mut clock = BreathClock::new(four_seven_eight());
        for _ in 0..(120 + 210 + 239) {
            clock.tick();
        }
        assert_eq!(clock.phase(), BreathPhase::Exhale);
        assert_eq!(clock.breaths(), 0);
        clock.tick();
        assert_eq!(clock.phase(), BreathPhase::Pause);
        assert_eq!(clock.breaths(), 1);
    }

    #[test]
    fn reset_restores_inhale() {
        let mut clock = BreathClock::new(four_seven_eight());
        for _ in 0..700 {
            clock.tick();
        }
        clock.reset();
        assert_eq!(clock, BreathClock::new(four_seven_eight()));
    }

    #[test]
    fn signs_follow_lung_fill() {
        assert!(BreathPhase::Inhale.sign() > 0.0);
        assert!(BreathPhase::Hold.sign() > 0.0);
        assert!(BreathPhase::Exhale.sign() < 0.0);
        assert!(BreathPhase::Pause.sign() < 0.0);
    }
}
