#![forbid(unsafe_code)]

//! Terminal Gym
//!
//! A terminal companion for two exercises, each paced by spring physics:
//! buttock lifting follows a settle-and-retarget oscillation, deep breathing
//! follows a 4-7-8 phase clock. The crate wires the command line, settings,
//! logging and localized screens around the `tgym-core` springs and the
//! `tgym-runtime` loop.

pub mod cli;
pub mod config;
pub mod error;
pub mod exercise;
pub mod gym;
pub mod logging;
pub mod screen;

pub use cli::{Cli, run, run_from_env};
pub use error::{GymError, Result};
