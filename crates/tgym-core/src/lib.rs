#![forbid(unsafe_code)]

//! Core: spring physics and the state machines that drive the animation.
//!
//! # Role in Terminal Gym
//! `tgym-core` is the numerical heart. It owns the damped-spring integrator,
//! the multi-spring rig, the position-to-frame mapper, and the two target
//! state machines (settle-driven cycling and timed breathing). It performs
//! no I/O and knows nothing about terminals or text.
//!
//! # How it fits in the system
//! Exercises in the `tgym` binary own a [`SpringRig`](animation::SpringRig)
//! plus one of the state machines, advance them once per tick of the
//! `tgym-runtime` loop, and map the result to frames for rendering.

pub mod animation;
pub mod breath;
pub mod config;
pub mod cycle;

pub use animation::{
    Channel, Damping, Drive, Frame, FrameMapper, FrameSet, FrameSetError, SpringParams, SpringRig,
    SpringState, offset, step,
};
pub use breath::{BreathClock, BreathPhase, PhaseChange, PhaseDurations};
pub use config::{AnimationConfig, BreathTiming, ConfigError};
pub use cycle::{CycleState, Extreme, Retarget};
