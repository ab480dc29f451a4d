#![forbid(unsafe_code)]

//! Multi-spring rig: several independent springs on one frame clock.
//!
//! A [`SpringRig`] drives `N` channels from a single base target. Each
//! channel has its own [`SpringParams`] (faster, slower, bouncier) and a
//! [`Drive`] describing how its target is derived from the base target and
//! the shared frame counter. Channels that would otherwise track the base
//! identically pick up a phase-shifted sine perturbation, which is what
//! gives the composite motion its organic asymmetry.
//!
//! # Invariants
//!
//! 1. [`SpringRig::advance`] increments the frame counter exactly once and
//!    steps every channel exactly once.
//! 2. Channels never read each other's state.
//! 3. [`SpringRig::reset`] returns every channel to rest at the origin and
//!    rewinds the frame counter.

use super::spring::{SpringParams, SpringState, step};

/// How a channel turns the base target into its own target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Drive {
    /// `base * scale`.
    Follow { scale: f64 },
    /// `base * rise` while `base >= 0`, `base * fall` otherwise.
    Split { rise: f64, fall: f64 },
    /// `base + amplitude * sin(frame * rate)`.
    Wobble { rate: f64, amplitude: f64 },
    /// `amplitude * sin(frame * rate)`, ignoring the base.
    Wave { rate: f64, amplitude: f64 },
}

impl Drive {
    /// Target for this drive at `frame` given the shared `base` target.
    #[must_use]
    pub fn target(&self, base: f64, frame: u64) -> f64 {
        let t = frame as f64;
        match *self {
            Self::Follow { scale } => base * scale,
            Self::Split { rise, fall } => {
                if base >= 0.0 {
                    base * rise
                } else {
                    base * fall
                }
            }
            Self::Wobble { rate, amplitude } => base + amplitude * (t * rate).sin(),
            Self::Wave { rate, amplitude } => amplitude * (t * rate).sin(),
        }
    }
}

/// One animated channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Channel {
    pub params: SpringParams,
    pub drive: Drive,
    pub state: SpringState,
}

impl Channel {
    /// A channel at rest at the origin.
    #[must_use]
    pub fn new(params: SpringParams, drive: Drive) -> Self {
        Self {
            params,
            drive,
            state: SpringState::origin(),
        }
    }
}

/// A fixed set of channels sharing one frame clock.
#[derive(Debug, Clone)]
pub struct SpringRig<const N: usize> {
    frame: u64,
    channels: [Channel; N],
}

impl<const N: usize> SpringRig<N> {
    #[must_use]
    pub fn new(channels: [Channel; N]) -> Self {
        Self { frame: 0, channels }
    }

    /// Frames advanced since construction or the last reset.
    #[inline]
    #[must_use]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// State of channel `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`; channel indices are compile-time constants of
    /// the owning exercise.
    #[inline]
    #[must_use]
    pub fn state(&self, index: usize) -> &SpringState {
        &self.channels[index].state
    }

    /// Position of channel `index`.
    #[inline]
    #[must_use]
    pub fn position(&self, index: usize) -> f64 {
        self.channels[index].state.position
    }

    #[must_use]
    pub fn channels(&self) -> &[Channel; N] {
        &self.channels
    }

    /// Advance the frame clock and step every channel toward its derived
    /// target.
    pub fn advance(&mut self, base: f64) {
        self.frame += 1;
        let frame = self.frame;
        for channel in &mut self.channels {
            channel.state.target = channel.drive.target(base, frame);
            channel.state = step(channel.state, &channel.params);
        }
    }

    /// Return every channel to rest at the origin and rewind the clock.
    pub fn reset(&mut self) {
        self.frame = 0;
        for channel in &mut self.channels {
            channel.state = SpringState::origin();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(w: f64, z: f64) -> SpringParams {
        SpringParams::new(30.0, w, z)
    }

    #[test]
    fn follow_scales_base() {
        let d = Drive::Follow { scale: 1.2 };
        assert!((d.target(8.0, 7) - 9.6).abs() < 1e-12);
        assert!((d.target(-8.0, 7) + 9.6).abs() < 1e-12);
    }

    #[test]
    fn split_uses_sign_of_base() {
        let d = Drive::Split {
            rise: 0.8,
            fall: 0.6,
        };
        assert!((d.target(8.0, 0) - 6.4).abs() < 1e-12);
        assert!((d.target(-8.0, 0) + 4.8).abs() < 1e-12);
    }

    #[test]
    fn wobble_adds_sine_to_base() {
        let d = Drive::Wobble {
            rate: 0.02,
            amplitude: 0.5,
        };
        let expected = 8.0 + 0.5 * (100.0_f64 * 0.02).sin();
        assert!((d.target(8.0, 100) - expected).abs() < 1e-12);
        assert!((d.target(8.0, 0) - 8.0).abs() < 1e-12);
    }

    #[test]
    fn wave_ignores_base() {
        let d = Drive::Wave {
            rate: 0.01,
            amplitude: 2.0,
        };
        assert!((d.target(8.0, 50) - d.target(-8.0, 50)).abs() < 1e-12);
    }

    #[test]
    fn advance_ticks_clock_once() {
        let mut rig = SpringRig::new([Channel::new(params(4.0, 0.3), Drive::Follow { scale: 1.0 })]);
        rig.advance(8.0);
        rig.advance(8.0);
        assert_eq!(rig.frame(), 2);
        assert!(rig.position(0) > 0.0);
        assert!((rig.state(0).target - 8.0).abs() < 1e-12);
    }

    #[test]
    fn channels_are_independent() {
        let solo = {
            let mut rig = SpringRig::new([Channel::new(params(4.0, 0.3), Drive::Follow { scale: 1.0 })]);
            for _ in 0..20 {
                rig.advance(8.0);
            }
            rig.position(0)
        };
        let mut pair = SpringRig::new([
            Channel::new(params(4.0, 0.3), Drive::Follow { scale: 1.0 }),
            Channel::new(params(9.0, 0.1), Drive::Wave { rate: 0.3, amplitude: 5.0 }),
        ]);
        for _ in 0..20 {
            pair.advance(8.0);
        }
        assert_eq!(pair.position(0), solo);
    }

    #[test]
    fn distinct_params_give_distinct_motion() {
        let mut rig = SpringRig::new([
            Channel::new(params(4.0, 0.3), Drive::Follow { scale: 1.0 }),
            Channel::new(params(4.4, 0.27), Drive::Follow { scale: 1.0 }),
        ]);
        for _ in 0..10 {
            rig.advance(8.0);
        }
        assert!((rig.position(0) - rig.position(1)).abs() > 1e-6);
    }

    #[test]
    fn reset_rewinds() {
        let mut rig = SpringRig::new([Channel::new(params(4.0, 0.3), Drive::Follow { scale: 1.0 })]);
        for _ in 0..10 {
            rig.advance(-8.0);
        }
        rig.reset();
        assert_eq!(rig.frame(), 0);
        assert_eq!(*rig.state(0), SpringState::origin());
    }
}
