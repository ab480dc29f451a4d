//! Buttock lifting: a settle-driven oscillation over five glute frames.
//!
//! The main spring alternates between `-range` (squeeze) and `+range`
//! (lift). Four helper springs on the same clock add the texture: two
//! wobbling cheeks whose difference tilts and shifts the art, a slow
//! breathing sway that moves the padding, and a stiff tension spring that
//! lights up the activation label.

use tgym_core::{AnimationConfig, Channel, CycleState, Drive, FrameMapper, SpringRig, offset};
use tgym_i18n::TextProvider;

use super::{Exercise, art, lookup_all};

const MAIN: usize = 0;
const LEFT: usize = 1;
const RIGHT: usize = 2;
const BREATH: usize = 3;
const TENSION: usize = 4;

const BASE_PADDING: i32 = 15;
const MIN_PADDING: i32 = 5;
const MAX_PADDING: i32 = 25;

/// Tilt shown when the cheeks drift apart by more than one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tilt {
    Level,
    Right,
    Left,
}

impl Tilt {
    /// Suffix appended to every art line.
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Level => "",
            Self::Right => " ↗",
            Self::Left => " ↖",
        }
    }
}

/// Muscle activation derived from the tension spring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Relaxed,
    Engaged,
    Peak,
}

impl Activation {
    fn from_intensity(intensity: f64) -> Self {
        if intensity > 0.8 {
            Self::Peak
        } else if intensity > 0.5 {
            Self::Engaged
        } else {
            Self::Relaxed
        }
    }

    /// Label key and its indent past the art padding.
    #[must_use]
    pub fn label(self) -> Option<(&'static str, usize)> {
        match self {
            Self::Relaxed => None,
            Self::Engaged => Some(("label_engaged", 10)),
            Self::Peak => Some(("label_peak", 8)),
        }
    }
}

/// Everything the renderer needs from the spring state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthHints {
    pub frame: usize,
    pub padding: usize,
    pub left_pad: usize,
    pub tilt: Tilt,
    pub activation: Activation,
}

impl StrengthHints {
    /// Derive hints from raw channel positions.
    #[must_use]
    pub fn derive(
        mapper: &FrameMapper,
        frame_count: usize,
        main: f64,
        left: f64,
        right: f64,
        breath: f64,
        tension: f64,
    ) -> Self {
        let left_offset = offset(left, 0.3);
        let right_offset = offset(right, 0.3);
        let breath_offset = offset(breath, 0.5);

        let padding =
            (BASE_PADDING + breath_offset + left_offset - right_offset).clamp(MIN_PADDING, MAX_PADDING);
        let left_pad = (padding + (left_offset - right_offset) / 2).max(0);

        let tilt = if (left - right).abs() > 1.0 {
            if left > right { Tilt::Right } else { Tilt::Left }
        } else {
            Tilt::Level
        };

        Self {
            frame: mapper.frame_index(main, frame_count),
            padding: padding.unsigned_abs() as usize,
            left_pad: left_pad.unsigned_abs() as usize,
            tilt,
            activation: Activation::from_intensity(mapper.normalize(tension)),
        }
    }
}

/// The strength exercise.
#[derive(Debug, Clone)]
pub struct Strength {
    rig: SpringRig<5>,
    cycle: CycleState,
    mapper: FrameMapper,
    goal: Option<u32>,
}

impl Strength {
    #[must_use]
    pub fn new(config: &AnimationConfig, goal: Option<u32>) -> Self {
        let (w, z) = (config.angular_frequency, config.damping_ratio);
        let rig = SpringRig::new([
            Channel::new(config.spring(w, z), Drive::Follow { scale: 1.0 }),
            Channel::new(
                config.spring(w * 1.1, z * 0.9),
                Drive::Wobble {
                    rate: 0.02,
                    amplitude: 0.5,
                },
            ),
            Channel::new(
                config.spring(w * 0.9, z * 1.1),
                Drive::Wobble {
                    rate: 0.018,
                    amplitude: 0.4,
                },
            ),
            Channel::new(
                config.spring(1.5, 0.8),
                Drive::Wave {
                    rate: 0.01,
                    amplitude: 2.0,
                },
            ),
            Channel::new(config.spring(w * 2.0, z * 2.0), Drive::Follow { scale: 1.2 }),
        ]);
        Self {
            rig,
            cycle: CycleState::new(config.range, config.settle_epsilon),
            mapper: config.mapper(),
            goal,
        }
    }

    /// Settle events so far; two make one rep.
    #[must_use]
    pub fn cycle(&self) -> u32 {
        self.cycle.cycle()
    }

    /// Fully completed reps.
    #[must_use]
    pub fn reps(&self) -> u32 {
        self.cycle.cycle() / 2
    }

    #[must_use]
    pub fn rig(&self) -> &SpringRig<5> {
        &self.rig
    }

    #[must_use]
    pub fn hints(&self) -> StrengthHints {
        StrengthHints::derive(
            &self.mapper,
            art::GLUTE.len(),
            self.rig.position(MAIN),
            self.rig.position(LEFT),
            self.rig.position(RIGHT),
            self.rig.position(BREATH),
            self.rig.position(TENSION),
        )
    }
}

impl Exercise for Strength {
    fn update(&mut self) {
        self.rig.advance(self.cycle.target());
        self.cycle.observe(self.rig.state(MAIN));
    }

    fn render(&self, texts: &dyn TextProvider) -> Vec<String> {
        let hints = self.hints();
        let pad = " ".repeat(hints.left_pad);
        let mut lines: Vec<String> = art::GLUTE
            .get(hints.frame)
            .iter()
            .map(|line| format!("{pad}{line}{}", hints.tilt.suffix()))
            .collect();
        if let Some((key, indent)) = hints.activation.label() {
            lines.push(format!("{}{}", " ".repeat(hints.padding + indent), texts.lookup(key)));
        }
        lines
    }

    fn instructions<'a>(&self, texts: &'a dyn TextProvider) -> &'a str {
        match self.cycle.cycle() % 4 {
            0 | 1 => texts.lookup("squeeze_instruction"),
            _ => texts.lookup("lift_instruction"),
        }
    }

    fn tips(&self, texts: &dyn TextProvider) -> Vec<String> {
        lookup_all(
            texts,
            &["tip_follow_rhythm", "tip_squeeze", "tip_lift", "tip_core", "tip_exit"],
        )
    }

    fn counter(&self, texts: &dyn TextProvider) -> String {
        texts.lookup_formatted("rep_counter", &[&(self.reps() + 1)])
    }

    fn summary(&self, texts: &dyn TextProvider) -> String {
        texts.lookup_formatted("workout_complete", &[&self.reps()])
    }

    fn is_complete(&self) -> bool {
        self.goal.is_some_and(|goal| self.reps() >= goal)
    }

    fn reset(&mut self) {
        self.rig.reset();
        self.cycle.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tgym_i18n::KeyEcho;

    fn hints(main: f64, left: f64, right: f64, breath: f64, tension: f64) -> StrengthHints {
        StrengthHints::derive(&FrameMapper::new(8.0), 5, main, left, right, breath, tension)
    }

    #[test]
    fn at_rest_hints() {
        let h = hints(0.0, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(h.frame, 2);
        assert_eq!(h.padding, 15);
        assert_eq!(h.left_pad, 15);
        assert_eq!(h.tilt, Tilt::Level);
        assert_eq!(h.activation, Activation::Relaxed);
    }

    #[test]
    fn padding_clamps() {
        // breath 2.0 -> +1; left 40 -> +12; right -40 -> -(-12)
        assert_eq!(hints(0.0, 40.0, -40.0, 2.0, 0.0).padding, 25);
        assert_eq!(hints(0.0, -40.0, 40.0, -2.0, 0.0).padding, 5);
    }

    #[test]
    fn left_pad_uses_truncating_halves() {
        // left 3.4 -> 1, right -3.4 -> -1; padding 17, shift (1 - -1) / 2 = 1
        let h = hints(0.0, 3.4, -3.4, 0.0, 0.0);
        assert_eq!(h.padding, 17);
        assert_eq!(h.left_pad, 18);
        // left 3.4 -> 1, right 0 -> 0; shift 1 / 2 = 0
        assert_eq!(hints(0.0, 3.4, 0.0, 0.0, 0.0).left_pad, 16);
    }

    #[test]
    fn tilt_direction() {
        assert_eq!(hints(0.0, 2.1, 1.0, 0.0, 0.0).tilt, Tilt::Right);
        assert_eq!(hints(0.0, 1.0, 2.1, 0.0, 0.0).tilt, Tilt::Left);
        assert_eq!(hints(0.0, 1.0, 2.0, 0.0, 0.0).tilt, Tilt::Level);
    }

    #[test]
    fn activation_thresholds() {
        // normalize(t) = (t + 8) / 16
        assert_eq!(hints(0.0, 0.0, 0.0, 0.0, 8.0).activation, Activation::Peak);
        assert_eq!(hints(0.0, 0.0, 0.0, 0.0, 5.6).activation, Activation::Peak);
        assert_eq!(hints(0.0, 0.0, 0.0, 0.0, 4.0).activation, Activation::Engaged);
        // Exactly 0.5 is not above the threshold.
        assert_eq!(hints(0.0, 0.0, 0.0, 0.0, 0.0).activation, Activation::Relaxed);
        assert_eq!(hints(0.0, 0.0, 0.0, 0.0, -8.0).activation, Activation::Relaxed);
    }

    #[test]
    fn frame_follows_main() {
        assert_eq!(hints(-8.0, 0.0, 0.0, 0.0, 0.0).frame, 0);
        assert_eq!(hints(8.0, 0.0, 0.0, 0.0, 0.0).frame, 4);
        assert_eq!(hints(20.0, 0.0, 0.0, 0.0, 0.0).frame, 4);
    }

    #[test]
    fn instruction_phases() {
        let config = AnimationConfig::default();
        let mut s = Strength::new(&config, None);
        let mut seen = Vec::new();
        let mut last = u32::MAX;
        for _ in 0..2000 {
            if s.cycle() != last {
                last = s.cycle();
                seen.push((last, s.instructions(&KeyEcho).to_string()));
            }
            if last >= 4 {
                break;
            }
            s.update();
        }
        let expected = [
            (0, "squeeze_instruction"),
            (1, "squeeze_instruction"),
            (2, "lift_instruction"),
            (3, "lift_instruction"),
            (4, "squeeze_instruction"),
        ];
        assert_eq!(seen.len(), expected.len());
        for ((cycle, text), (want_cycle, want_text)) in seen.iter().zip(expected) {
            assert_eq!(*cycle, want_cycle);
            assert_eq!(text, want_text);
        }
    }

    #[test]
    fn counter_is_one_based() {
        let config = AnimationConfig::default();
        let s = Strength::new(&config, None);
        let texts = tgym_i18n::Localizer::embedded("en").unwrap();
        assert_eq!(s.counter(&texts), "Rep: 1");
    }

    #[test]
    fn goal_completes() {
        let config = AnimationConfig::default();
        let mut s = Strength::new(&config, Some(1));
        let mut ticks = 0;
        while !s.is_complete() {
            s.update();
            ticks += 1;
            assert!(ticks < 1000, "one rep never completed");
        }
        assert_eq!(s.cycle(), 2);
        assert_eq!(s.reps(), 1);
    }

    #[test]
    fn no_goal_never_completes() {
        let config = AnimationConfig::default();
        let mut s = Strength::new(&config, None);
        for _ in 0..600 {
            s.update();
        }
        assert!(!s.is_complete());
    }

    #[test]
    fn render_draws_frame_lines() {
        let config = AnimationConfig::default();
        let s = Strength::new(&config, None);
        let lines = s.render(&KeyEcho);
        // At rest: balanced frame, no tilt, no label.
        assert_eq!(lines.len(), art::GLUTE.get(2).len());
        assert!(lines[0].starts_with(&" ".repeat(15)));
        assert!(lines[0].ends_with(art::GLUTE.get(2)[0]));
    }

    #[test]
    fn reset_rewinds() {
        let config = AnimationConfig::default();
        let mut s = Strength::new(&config, None);
        for _ in 0..200 {
            s.update();
        }
        s.reset();
        assert_eq!(s.cycle(), 0);
        assert_eq!(s.rig().frame(), 0);
        assert_eq!(s.hints().frame, 2);
    }
}
