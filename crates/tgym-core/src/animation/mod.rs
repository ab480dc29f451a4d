#![forbid(unsafe_code)]

//! Spring animation primitives.
//!
//! - [`spring`]: one damped harmonic oscillator step at a fixed sample rate.
//! - [`rig`]: several springs on a shared frame clock with derived targets.
//! - [`frames`]: continuous position to discrete ASCII-art frame mapping.

pub mod frames;
pub mod rig;
pub mod spring;

pub use frames::{Frame, FrameMapper, FrameSet, FrameSetError, offset};
pub use rig::{Channel, Drive, SpringRig};
pub use spring::{Damping, SpringParams, SpringState, step};
