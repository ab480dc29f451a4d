//! Stop requests for a running session.
//!
//! Whoever may end a session early (the signal bridge, or a test) holds the
//! [`CancellationSource`]. The loop, the ticker and the countdown hold
//! [`CancellationToken`]s and either poll them between ticks or sleep on them
//! until the next frame is due, so a stop request is observed within one
//! frame instead of after a full sleep.
//!
//! ```
//! use tgym_runtime::cancellation::CancellationSource;
//! use web_time::{Duration, Instant};
//!
//! let source = CancellationSource::new();
//! let token = source.token();
//! assert!(!token.wait_until(Instant::now() + Duration::from_millis(5)));
//!
//! source.cancel_with("SIGINT");
//! assert_eq!(token.reason(), Some("SIGINT"));
//! ```

use std::fmt;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};

use web_time::{Duration, Instant};

/// Reason recorded by [`CancellationSource::cancel`].
pub const REQUESTED: &str = "requested";

#[derive(Default)]
struct Shared {
    /// `Some(reason)` once stopped. Guarded together with `wake` so a
    /// sleeper cannot miss the notification.
    stop: Mutex<Option<&'static str>>,
    wake: Condvar,
}

impl Shared {
    fn stop(&self) -> MutexGuard<'_, Option<&'static str>> {
        self.stop.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Issues stop requests to every token cloned from it.
///
/// Dropping the source leaves its tokens running.
#[derive(Clone, Default)]
pub struct CancellationSource {
    shared: Arc<Shared>,
}

impl CancellationSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token(&self) -> CancellationToken {
        CancellationToken {
            shared: Arc::clone(&self.shared),
        }
    }

    pub fn cancel(&self) {
        self.cancel_with(REQUESTED);
    }

    /// Stop every token and wake sleepers. Only the first reason is kept.
    pub fn cancel_with(&self, reason: &'static str) {
        let mut stop = self.shared.stop();
        if stop.is_none() {
            *stop = Some(reason);
            tracing::debug!(reason, "session stop requested");
        }
        self.shared.wake.notify_all();
    }

    pub fn is_cancelled(&self) -> bool {
        self.shared.stop().is_some()
    }
}

impl fmt::Debug for CancellationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CancellationSource")
            .field("stop", &*self.shared.stop())
            .finish()
    }
}

/// Observes a [`CancellationSource`].
#[derive(Clone)]
pub struct CancellationToken {
    shared: Arc<Shared>,
}

impl CancellationToken {
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.reason().is_some()
    }

    /// Why the session was stopped, if it was.
    pub fn reason(&self) -> Option<&'static str> {
        *self.shared.stop()
    }

    /// Sleep until `deadline` or a stop request. Returns `true` if stopped.
    pub fn wait_until(&self, deadline: Instant) -> bool {
        let mut stop = self.shared.stop();
        while stop.is_none() {
            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            stop = match self.shared.wake.wait_timeout(stop, deadline - now) {
                Ok((guard, _)) => guard,
                Err(poisoned) => poisoned.into_inner().0,
            };
        }
        true
    }

    /// [`wait_until`](Self::wait_until) relative to now.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => self.wait_until(deadline),
            None => {
                let stop = self
                    .shared
                    .wake
                    .wait_while(self.shared.stop(), |stop| stop.is_none())
                    .unwrap_or_else(PoisonError::into_inner);
                stop.is_some()
            }
        }
    }
}

impl fmt::Debug for CancellationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CancellationToken")
            .field("stop", &self.reason())
            .finish()
    }
}
