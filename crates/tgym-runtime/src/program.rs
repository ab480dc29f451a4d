//! The fixed-rate animation loop.
//!
//! # Tick
//!
//! Each tick runs, in order: [`Model::update`], [`Renderer::clear`],
//! [`Renderer::draw`] of [`Model::view`]. The loop then waits for the next
//! deadline on the cancellation token.
//!
//! # Exit
//!
//! The loop leaves when the token is cancelled (checked before every tick
//! and during every wait) or when [`Model::is_complete`] turns true after a
//! tick. Either way it performs exactly one final clear followed by the
//! [`Model::farewell`] lines, then returns a [`RunSummary`].
//!
//! # Failure Modes
//!
//! Renderer I/O errors abort the loop and propagate; no farewell is drawn.

use std::io;

use web_time::Duration;

use crate::cancellation::CancellationToken;
use crate::renderer::Renderer;
use crate::ticker::{Ticker, Wake};

/// Application state driven by [`Program`].
pub trait Model {
    /// Advance one tick.
    fn update(&mut self);

    /// Lines for the current frame.
    fn view(&self) -> Vec<String>;

    /// Lines shown once after the loop ends.
    fn farewell(&self) -> Vec<String>;

    /// Whether the session has reached its goal.
    fn is_complete(&self) -> bool {
        false
    }
}

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    Cancelled,
    Completed,
}

/// Outcome of [`Program::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of ticks that ran `update`.
    pub ticks: u64,
    pub reason: ExitReason,
}

/// Drives a [`Model`] at a fixed rate into a [`Renderer`].
#[derive(Debug)]
pub struct Program<M, R> {
    model: M,
    renderer: R,
    period: Duration,
}

impl<M: Model, R: Renderer> Program<M, R> {
    pub fn new(model: M, renderer: R, period: Duration) -> Self {
        Self {
            model,
            renderer,
            period,
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Run until cancelled or complete.
    pub fn run(&mut self, token: &CancellationToken) -> io::Result<RunSummary> {
        let mut ticker = Ticker::new(self.period);
        let mut ticks = 0u64;
        tracing::info!(period_ms = self.period.as_millis() as u64, "animation started");

        let reason = loop {
            if token.is_cancelled() {
                break ExitReason::Cancelled;
            }
            self.model.update();
            ticks += 1;
            self.renderer.clear()?;
            self.renderer.draw(&self.model.view())?;

            if self.model.is_complete() {
                break ExitReason::Completed;
            }
            if ticker.wait(token) == Wake::Cancelled {
                break ExitReason::Cancelled;
            }
        };

        self.renderer.clear()?;
        self.renderer.draw(&self.model.farewell())?;
        tracing::info!(
            ticks,
            ?reason,
            stop = ?token.reason(),
            skipped = ticker.skipped(),
            "animation stopped"
        );
        Ok(RunSummary { ticks, reason })
    }
}
