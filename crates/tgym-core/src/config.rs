#![forbid(unsafe_code)]

//! Animation configuration.
//!
//! Every tunable constant of the animation lives in one immutable
//! [`AnimationConfig`], built once at startup and passed by reference to the
//! exercises and the loop. `AnimationConfig::default()` is the shipped
//! tuning: 30 fps, ω = 4.0, ζ = 0.3, range ±8, settle tolerance 0.5, and a
//! 4-7-8-2 second breathing rhythm.
//!
//! With the `serde` feature the config deserializes from TOML or JSON;
//! missing fields keep their defaults.
//!
//! ```toml
//! fps = 30
//! damping_ratio = 0.25
//!
//! [breath]
//! hold_secs = 5.0
//! ```

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::animation::{FrameMapper, SpringParams};
use crate::breath::PhaseDurations;

/// Errors produced by [`AnimationConfig::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid animation config: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Breathing phase durations in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct BreathTiming {
    pub inhale_secs: f64,
    pub hold_secs: f64,
    pub exhale_secs: f64,
    pub pause_secs: f64,
}

impl Default for BreathTiming {
    fn default() -> Self {
        Self {
            inhale_secs: 4.0,
            hold_secs: 7.0,
            exhale_secs: 8.0,
            pause_secs: 2.0,
        }
    }
}

/// Immutable animation constants.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct AnimationConfig {
    /// Ticks per second; also the spring sample rate.
    pub fps: u32,
    /// Angular frequency of the primary spring (rad/s).
    pub angular_frequency: f64,
    /// Damping ratio of the primary spring.
    pub damping_ratio: f64,
    /// Half-width R of the nominal position range `[-R, +R]`.
    pub range: f64,
    /// Settling tolerance for both position error and velocity.
    pub settle_epsilon: f64,
    pub breath: BreathTiming,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            fps: 30,
            angular_frequency: 4.0,
            damping_ratio: 0.3,
            range: 8.0,
            settle_epsilon: 0.5,
            breath: BreathTiming::default(),
        }
    }
}

impl AnimationConfig {
    /// Highest rate whose period the runtime ticker can honour (1 ms).
    pub const MAX_FPS: u32 = 1000;

    /// Check every field, collecting all problems.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();
        if self.fps == 0 {
            errors.push("fps must be positive".to_string());
        } else if self.fps > Self::MAX_FPS {
            errors.push(format!("fps must be at most {}, got {}", Self::MAX_FPS, self.fps));
        }
        if !(self.angular_frequency.is_finite() && self.angular_frequency > 0.0) {
            errors.push(format!(
                "angular_frequency must be positive, got {}",
                self.angular_frequency
            ));
        }
        if !(self.damping_ratio.is_finite() && self.damping_ratio >= 0.0) {
            errors.push(format!(
                "damping_ratio must be non-negative, got {}",
                self.damping_ratio
            ));
        }
        if !(self.range.is_finite() && self.range > 0.0) {
            errors.push(format!("range must be positive, got {}", self.range));
        }
        if !(self.settle_epsilon.is_finite() && self.settle_epsilon > 0.0) {
            errors.push(format!(
                "settle_epsilon must be positive, got {}",
                self.settle_epsilon
            ));
        }
        let b = &self.breath;
        for (name, secs) in [
            ("breath.inhale_secs", b.inhale_secs),
            ("breath.hold_secs", b.hold_secs),
            ("breath.exhale_secs", b.exhale_secs),
            ("breath.pause_secs", b.pause_secs),
        ] {
            if !(secs.is_finite() && secs > 0.0) {
                errors.push(format!("{name} must be positive, got {secs}"));
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Wall-clock period of one tick.
    #[must_use]
    pub fn frame_period(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.fps.max(1)))
    }

    /// Spring parameters at this config's sample rate.
    #[must_use]
    pub fn spring(&self, angular_frequency: f64, damping_ratio: f64) -> SpringParams {
        SpringParams::new(f64::from(self.fps), angular_frequency, damping_ratio)
    }

    /// Primary spring parameters.
    #[must_use]
    pub fn primary_spring(&self) -> SpringParams {
        self.spring(self.angular_frequency, self.damping_ratio)
    }

    #[must_use]
    pub fn mapper(&self) -> FrameMapper {
        FrameMapper::new(self.range)
    }

    /// Breathing phase durations in ticks.
    #[must_use]
    pub fn phase_durations(&self) -> PhaseDurations {
        let b = &self.breath;
        PhaseDurations::from_seconds(
            self.fps,
            b.inhale_secs,
            b.hold_secs,
            b.exhale_secs,
            b.pause_secs,
        )
    }
}
