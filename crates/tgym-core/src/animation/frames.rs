#![forbid(unsafe_code)]

//! Continuous-to-discrete frame mapping.
//!
//! A [`FrameSet`] is an ordered run of pre-authored ASCII-art frames from one
//! extreme (fully contracted, index 0) to the other (fully expanded, index
//! `N - 1`). A [`FrameMapper`] turns a spring position in the nominal range
//! `[-R, +R]` into an index into that run.
//!
//! # Invariants
//!
//! 1. [`FrameMapper::normalize`] always returns a value in `[0.0, 1.0]`;
//!    positions past either end of the range (spring overshoot) clamp.
//! 2. [`FrameMapper::frame_index`] is monotonic non-decreasing in position
//!    and always lies in `[0, N - 1]`.
//! 3. Quantization truncates: `floor(normalized * (N - 1))`. With five frames
//!    a normalized value of exactly `0.5` selects frame 2, and only exactly
//!    `1.0` selects frame 4.

use thiserror::Error;

/// One multi-line frame.
pub type Frame = &'static [&'static str];

/// Errors building a [`FrameSet`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameSetError {
    #[error("frame set must contain at least one frame")]
    Empty,
}

/// Ordered, immutable sequence of frames.
#[derive(Debug, Clone, Copy)]
pub struct FrameSet {
    frames: &'static [Frame],
}

impl FrameSet {
    /// Wrap a static frame table.
    ///
    /// `const` so frame tables can be checked at compile time.
    pub const fn new(frames: &'static [Frame]) -> Result<Self, FrameSetError> {
        if frames.is_empty() {
            return Err(FrameSetError::Empty);
        }
        Ok(Self { frames })
    }

    /// Number of frames (always at least 1).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always `false`; kept for API symmetry with slices.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame at `index`, clamped to the last frame.
    #[must_use]
    pub fn get(&self, index: usize) -> Frame {
        self.frames[index.min(self.frames.len() - 1)]
    }
}

/// Maps physical positions in `[-range, +range]` onto frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameMapper {
    range: f64,
}

impl FrameMapper {
    #[must_use]
    pub const fn new(range: f64) -> Self {
        Self { range }
    }

    #[inline]
    #[must_use]
    pub fn range(&self) -> f64 {
        self.range
    }

    /// Position rescaled from `[-range, +range]` to `[0, 1]`, clamped.
    #[must_use]
    pub fn normalize(&self, position: f64) -> f64 {
        let n = (position + self.range) / (2.0 * self.range);
        // NaN maps to the contracted end rather than escaping the range.
        if n.is_nan() { 0.0 } else { n.clamp(0.0, 1.0) }
    }

    /// Index into a run of `frame_count` frames.
    #[must_use]
    pub fn frame_index(&self, position: f64, frame_count: usize) -> usize {
        let last = frame_count.saturating_sub(1);
        let index = (self.normalize(position) * last as f64) as usize;
        index.min(last)
    }

    /// Select the frame for `position`.
    #[must_use]
    pub fn map(&self, position: f64, frames: &FrameSet) -> (usize, Frame) {
        let index = self.frame_index(position, frames.len());
        (index, frames.get(index))
    }
}

/// Integer offset from a scaled position, truncated toward zero.
#[inline]
#[must_use]
pub fn offset(position: f64, coefficient: f64) -> i32 {
    (position * coefficient) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    static FIVE: [Frame; 5] = [&["0"], &["1"], &["2"], &["3"], &["4"]];

    fn five() -> FrameSet {
        FrameSet::new(&FIVE).expect("non-empty")
    }

    #[test]
    fn empty_frame_set_rejected() {
        static NONE: [Frame; 0] = [];
        assert_eq!(FrameSet::new(&NONE).unwrap_err(), FrameSetError::Empty);
    }

    #[test]
    fn normalize_endpoints_and_midpoint() {
        let m = FrameMapper::new(8.0);
        assert!((m.normalize(-8.0) - 0.0).abs() < f64::EPSILON);
        assert!((m.normalize(0.0) - 0.5).abs() < f64::EPSILON);
        assert!((m.normalize(8.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn normalize_clamps_overshoot() {
        let m = FrameMapper::new(8.0);
        assert!((m.normalize(-50.0) - 0.0).abs() < f64::EPSILON);
        assert!((m.normalize(9.3) - 1.0).abs() < f64::EPSILON);
        assert!((m.normalize(f64::NAN) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn midpoint_selects_frame_two_of_five() {
        let m = FrameMapper::new(8.0);
        assert_eq!(m.frame_index(0.0, 5), 2);
    }

    #[test]
    fn quantization_truncates() {
        let m = FrameMapper::new(8.0);
        // normalized 0.99375 * 4 = 3.975 -> 3
        assert_eq!(m.frame_index(7.9, 5), 3);
        assert_eq!(m.frame_index(8.0, 5), 4);
        // normalized 0.25 * 4 = 1.0 -> 1
        assert_eq!(m.frame_index(-4.0, 5), 1);
        // just below -> 0
        assert_eq!(m.frame_index(-4.01, 5), 0);
    }

    #[test]
    fn overshoot_stays_in_bounds() {
        let m = FrameMapper::new(8.0);
        assert_eq!(m.frame_index(1e9, 5), 4);
        assert_eq!(m.frame_index(-1e9, 5), 0);
        assert_eq!(m.frame_index(f64::INFINITY, 5), 4);
    }

    #[test]
    fn single_frame_always_zero() {
        let m = FrameMapper::new(8.0);
        for p in [-20.0, 0.0, 20.0] {
            assert_eq!(m.frame_index(p, 1), 0);
        }
    }

    #[test]
    fn map_returns_matching_frame() {
        let (index, frame) = FrameMapper::new(8.0).map(8.0, &five());
        assert_eq!(index, 4);
        assert_eq!(frame, &["4"]);
    }

    #[test]
    fn offset_truncates_toward_zero() {
        assert_eq!(offset(3.9, 0.3), 1);
        assert_eq!(offset(-3.9, 0.3), -1);
        assert_eq!(offset(2.0, 0.3), 0);
        assert_eq!(offset(-1.9, 0.5), 0);
    }
}
