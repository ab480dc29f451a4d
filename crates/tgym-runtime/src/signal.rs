//! Bridge from termination signals to cancellation.
//!
//! On unix a background thread iterates SIGINT/SIGTERM through
//! `signal-hook` and cancels the given source; it never touches animation
//! state. Dropping the guard closes the iterator and joins the thread.
//!
//! Elsewhere the console Ctrl+C handler is installed through `ctrlc` and
//! cancels the source with reason `SIGINT`. That handler is process-wide
//! and stays registered after the guard is dropped.

use std::io;

use crate::cancellation::CancellationSource;

#[cfg(unix)]
use signal_hook::consts::signal::{SIGINT, SIGTERM};
#[cfg(unix)]
use signal_hook::iterator::Signals;

/// Keeps the signal bridge alive.
#[cfg(unix)]
#[derive(Debug)]
pub struct SignalGuard {
    handle: signal_hook::iterator::Handle,
    thread: Option<std::thread::JoinHandle<()>>,
}

#[cfg(unix)]
impl SignalGuard {
    /// Cancel `source` on the first SIGINT or SIGTERM.
    pub fn install(source: CancellationSource) -> io::Result<Self> {
        let mut signals = Signals::new([SIGINT, SIGTERM]).map_err(io::Error::other)?;
        let handle = signals.handle();
        let thread = std::thread::Builder::new()
            .name("tgym-signals".into())
            .spawn(move || {
                for signal in signals.forever() {
                    let name = match signal {
                        SIGINT => "SIGINT",
                        SIGTERM => "SIGTERM",
                        _ => continue,
                    };
                    tracing::info!(signal = name, "termination signal received");
                    source.cancel_with(name);
                }
            })?;
        Ok(Self {
            handle,
            thread: Some(thread),
        })
    }
}

#[cfg(unix)]
impl Drop for SignalGuard {
    fn drop(&mut self) {
        self.handle.close();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

#[cfg(not(unix))]
#[derive(Debug)]
pub struct SignalGuard {
    _installed: (),
}

#[cfg(not(unix))]
impl SignalGuard {
    /// Cancel `source` on Ctrl+C. Fails if a handler is already installed.
    pub fn install(source: CancellationSource) -> io::Result<Self> {
        ctrlc::set_handler(move || {
            tracing::info!(signal = "SIGINT", "termination signal received");
            source.cancel_with("SIGINT");
        })
        .map_err(io::Error::other)?;
        Ok(Self { _installed: () })
    }
}
