//! 4-7-8 breathing over five lung frames.
//!
//! A [`BreathClock`] walks inhale, hold, exhale, pause on fixed tick counts.
//! The breath spring chases `+range` while the lungs are full (inhale, hold)
//! and `-range` while they are empty (exhale, pause); the lung spring follows
//! asymmetrically and, with a slow heart wave, sets the padding. The heart
//! glyph in the art beats with the heart spring.

use tgym_core::{
    AnimationConfig, BreathClock, BreathPhase, Channel, Drive, FrameMapper, SpringRig, offset,
};
use tgym_i18n::TextProvider;

use super::{Exercise, art, lookup_all};

const BREATH: usize = 0;
const LUNG: usize = 1;
const HEART: usize = 2;

const BASE_PADDING: i32 = 10;
const MIN_PADDING: i32 = 5;
const MAX_PADDING: i32 = 20;

/// Heart glyph strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heart {
    Calm,
    Quick,
    Strong,
}

impl Heart {
    fn from_position(position: f64) -> Self {
        if position > 3.0 {
            Self::Strong
        } else if position > 1.0 {
            Self::Quick
        } else {
            Self::Calm
        }
    }

    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Calm => art::HEART_GLYPH,
            Self::Quick => "💗",
            Self::Strong => "💖",
        }
    }
}

/// Everything the renderer needs from the spring state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreathHints {
    pub frame: usize,
    pub padding: usize,
    pub heart: Heart,
}

impl BreathHints {
    #[must_use]
    pub fn derive(mapper: &FrameMapper, frame_count: usize, breath: f64, lung: f64, heart: f64) -> Self {
        let padding = (BASE_PADDING + offset(lung, 0.2) + offset(heart, 0.1))
            .clamp(MIN_PADDING, MAX_PADDING);
        Self {
            frame: mapper.frame_index(breath, frame_count),
            padding: padding.unsigned_abs() as usize,
            heart: Heart::from_position(heart),
        }
    }
}

/// Arrow and text key shown beside the first art line.
fn phase_indicator(phase: BreathPhase) -> (&'static str, &'static str) {
    match phase {
        BreathPhase::Inhale => ("↑", "inhaling"),
        BreathPhase::Hold => ("⏸", "holding"),
        BreathPhase::Exhale => ("↓", "exhaling"),
        BreathPhase::Pause => ("⏹", "pausing"),
    }
}

/// The meditation exercise.
#[derive(Debug, Clone)]
pub struct Meditation {
    rig: SpringRig<3>,
    clock: BreathClock,
    range: f64,
    mapper: FrameMapper,
    goal: Option<u32>,
}

impl Meditation {
    #[must_use]
    pub fn new(config: &AnimationConfig, goal: Option<u32>) -> Self {
        let rig = SpringRig::new([
            Channel::new(config.spring(0.8, 0.9), Drive::Follow { scale: 1.0 }),
            Channel::new(config.spring(1.0, 0.8), Drive::Split { rise: 0.8, fall: 0.6 }),
            Channel::new(
                config.spring(0.5, 0.95),
                Drive::Wave {
                    rate: 0.005,
                    amplitude: 4.0,
                },
            ),
        ]);
        Self {
            rig,
            clock: BreathClock::new(config.phase_durations()),
            range: config.range,
            mapper: config.mapper(),
            goal,
        }
    }

    #[must_use]
    pub fn phase(&self) -> BreathPhase {
        self.clock.phase()
    }

    /// Completed breaths.
    #[must_use]
    pub fn breaths(&self) -> u32 {
        self.clock.breaths()
    }

    #[must_use]
    pub fn clock(&self) -> &BreathClock {
        &self.clock
    }

    #[must_use]
    pub fn rig(&self) -> &SpringRig<3> {
        &self.rig
    }

    #[must_use]
    pub fn hints(&self) -> BreathHints {
        BreathHints::derive(
            &self.mapper,
            art::LUNG.len(),
            self.rig.position(BREATH),
            self.rig.position(LUNG),
            self.rig.position(HEART),
        )
    }
}

impl Exercise for Meditation {
    fn update(&mut self) {
        // The tick that ends a phase still pulls toward that phase's target.
        let phase = self.clock.phase();
        self.clock.tick();
        self.rig.advance(phase.sign() * self.range);
    }

    fn render(&self, texts: &dyn TextProvider) -> Vec<String> {
        let hints = self.hints();
        let pad = " ".repeat(hints.padding);
        let (arrow, key) = phase_indicator(self.clock.phase());
        art::LUNG
            .get(hints.frame)
            .iter()
            .enumerate()
            .map(|(i, line)| {
                let mut line = line.replace(art::HEART_GLYPH, hints.heart.glyph());
                if i == 0 {
                    line.push_str(&format!("  {arrow} {}", texts.lookup(key)));
                }
                format!("{pad}{line}")
            })
            .collect()
    }

    fn instructions<'a>(&self, texts: &'a dyn TextProvider) -> &'a str {
        match self.clock.phase() {
            BreathPhase::Inhale => texts.lookup("breathe_in_instruction"),
            BreathPhase::Hold => texts.lookup("hold_breath_instruction"),
            BreathPhase::Exhale => texts.lookup("breathe_out_instruction"),
            BreathPhase::Pause => texts.lookup("pause_instruction"),
        }
    }

    fn tips(&self, texts: &dyn TextProvider) -> Vec<String> {
        lookup_all(
            texts,
            &[
                "tip_breathe_478",
                "tip_inhale",
                "tip_hold",
                "tip_exhale",
                "tip_pause",
                "tip_focus",
                "tip_exit",
            ],
        )
    }

    fn counter(&self, texts: &dyn TextProvider) -> String {
        texts.lookup_formatted("breath_counter", &[&self.breaths()])
    }

    fn summary(&self, texts: &dyn TextProvider) -> String {
        texts.lookup_formatted("meditation_complete", &[&self.breaths()])
    }

    fn is_complete(&self) -> bool {
        self.goal.is_some_and(|goal| self.breaths() >= goal)
    }

    fn reset(&mut self) {
        self.rig.reset();
        self.clock.reset();
    }
}
