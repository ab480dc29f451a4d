//! The two exercises and the closed set that selects between them.
//!
//! Each exercise owns a spring rig plus the state machine that moves its
//! base target, and turns its current state into localized text lines.
//! [`Session`] is chosen once before the loop starts and dispatches by
//! `match`.

pub mod art;
pub mod meditation;
pub mod strength;

use clap::ValueEnum;
use serde::Deserialize;
use tgym_core::AnimationConfig;
use tgym_i18n::TextProvider;

pub use meditation::{BreathHints, Heart, Meditation};
pub use strength::{Activation, Strength, StrengthHints, Tilt};

/// Behaviour shared by every exercise.
pub trait Exercise {
    /// Advance one tick.
    fn update(&mut self);

    /// Animation lines for the current state.
    fn render(&self, texts: &dyn TextProvider) -> Vec<String>;

    /// The instruction for the current phase.
    fn instructions<'a>(&self, texts: &'a dyn TextProvider) -> &'a str;

    fn tips(&self, texts: &dyn TextProvider) -> Vec<String>;

    /// Progress line, e.g. `Rep: 3`.
    fn counter(&self, texts: &dyn TextProvider) -> String;

    /// Closing line shown after the loop ends.
    fn summary(&self, texts: &dyn TextProvider) -> String;

    /// True once the requested number of reps or breaths is done. Always
    /// false when no goal was set.
    fn is_complete(&self) -> bool;

    /// Back to the initial state.
    fn reset(&mut self);
}

/// Which exercise to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseKind {
    /// Buttock lifting, paced by the settling spring.
    Strength,
    /// 4-7-8 breathing, paced by the phase clock.
    Meditation,
}

impl ExerciseKind {
    /// Menu choice number, as shown in the selection prompt.
    #[must_use]
    pub fn from_choice(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(Self::Strength),
            2 => Some(Self::Meditation),
            _ => None,
        }
    }
}

/// The exercise selected for this run.
#[derive(Debug, Clone)]
pub enum Session {
    Strength(Strength),
    Meditation(Meditation),
}

impl Session {
    /// Build `kind` from `config`, finishing after `goal` reps or breaths if
    /// given.
    #[must_use]
    pub fn new(kind: ExerciseKind, config: &AnimationConfig, goal: Option<u32>) -> Self {
        match kind {
            ExerciseKind::Strength => Self::Strength(Strength::new(config, goal)),
            ExerciseKind::Meditation => Self::Meditation(Meditation::new(config, goal)),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ExerciseKind {
        match self {
            Self::Strength(_) => ExerciseKind::Strength,
            Self::Meditation(_) => ExerciseKind::Meditation,
        }
    }
}

impl Exercise for Session {
    fn update(&mut self) {
        match self {
            Self::Strength(e) => e.update(),
            Self::Meditation(e) => e.update(),
        }
    }

    fn render(&self, texts: &dyn TextProvider) -> Vec<String> {
        match self {
            Self::Strength(e) => e.render(texts),
            Self::Meditation(e) => e.render(texts),
        }
    }

    fn instructions<'a>(&self, texts: &'a dyn TextProvider) -> &'a str {
        match self {
            Self::Strength(e) => e.instructions(texts),
            Self::Meditation(e) => e.instructions(texts),
        }
    }

    fn tips(&self, texts: &dyn TextProvider) -> Vec<String> {
        match self {
            Self::Strength(e) => e.tips(texts),
            Self::Meditation(e) => e.tips(texts),
        }
    }

    fn counter(&self, texts: &dyn TextProvider) -> String {
        match self {
            Self::Strength(e) => e.counter(texts),
            Self::Meditation(e) => e.counter(texts),
        }
    }

    fn summary(&self, texts: &dyn TextProvider) -> String {
        match self {
            Self::Strength(e) => e.summary(texts),
            Self::Meditation(e) => e.summary(texts),
        }
    }

    fn is_complete(&self) -> bool {
        match self {
            Self::Strength(e) => e.is_complete(),
            Self::Meditation(e) => e.is_complete(),
        }
    }

    fn reset(&mut self) {
        match self {
            Self::Strength(e) => e.reset(),
            Self::Meditation(e) => e.reset(),
        }
    }
}

/// Look up each key in order.
fn lookup_all(texts: &dyn TextProvider, keys: &[&str]) -> Vec<String> {
    keys.iter().map(|key| texts.lookup(key).to_string()).collect()
}
