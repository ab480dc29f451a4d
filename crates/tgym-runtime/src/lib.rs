#![forbid(unsafe_code)]

//! Terminal Gym Runtime
//!
//! The pieces that turn an animation model into frames on a terminal.
//!
//! # Key Components
//!
//! - [`Program`] - fixed-rate loop with one final farewell render
//! - [`Model`] - trait for per-tick state and its text view
//! - [`Renderer`] - clear/draw output seam; [`TerminalRenderer`] for ANSI terminals
//! - [`Ticker`] - deadline pacing that skips missed ticks
//! - [`CancellationToken`] - cooperative shutdown shared with the signal bridge
//! - [`SignalGuard`] - SIGINT/SIGTERM → cancellation
//!
//! # Role in Terminal Gym
//! `tgym-runtime` knows nothing about springs or exercises. The binary plugs
//! its session in as a [`Model`] and hands the loop a token that the signal
//! bridge cancels.

pub mod cancellation;
pub mod program;
pub mod renderer;
pub mod signal;
pub mod ticker;

pub use cancellation::{CancellationSource, CancellationToken};
pub use program::{ExitReason, Model, Program, RunSummary};
pub use renderer::{RecordingRenderer, RenderOp, Renderer, TerminalRenderer};
pub use signal::SignalGuard;
pub use ticker::{Ticker, Wake};
