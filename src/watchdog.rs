//! Run-completion detection via idle debounce ("padding").
//!
//! A macro can invoke further macros, so finishing is not a single event the
//! host reports. The host only exposes a per-frame macro-line cursor; the
//! watchdog samples it every tick and declares the run finished once the
//! cursor has stayed idle for longer than the configured padding window.

use std::time::{Duration, Instant};

use crate::chain::ChainState;
use crate::host::MacroHost;

/// Watches the host's macro-line cursor and clears the chain state once a
/// run has been idle for longer than the padding threshold.
///
/// The timer is sampled on the host's frame tick, never awaited; there is no
/// background thread.
#[derive(Debug)]
pub struct PaddingWatchdog {
    threshold: Duration,
    /// Time of the most recent frame that reported an active cursor.
    /// `None` while no activity has been observed for the current chain.
    active_at: Option<Instant>,
}

impl PaddingWatchdog {
    /// Create a watchdog with the given padding threshold.
    pub fn new(threshold: Duration) -> Self {
        Self {
            threshold,
            active_at: None,
        }
    }

    /// Sample the host state for this frame and clear `state` if the run has
    /// ended.
    pub fn tick(&mut self, state: &mut ChainState, host: &impl MacroHost) {
        self.tick_at(Instant::now(), state, host);
    }

    /// `tick` with an explicit sample time, so tests can drive the clock.
    pub fn tick_at(&mut self, now: Instant, state: &mut ChainState, host: &impl MacroHost) {
        if !state.is_active() {
            return;
        }

        // A session change invalidates any chain in progress.
        if !host.is_logged_in() {
            log::debug!("session ended, dropping active chain");
            state.clear();
            self.active_at = None;
            return;
        }

        if host.current_line() >= 0 {
            // Still executing; restart the idle measurement from this frame.
            self.active_at = Some(now);
            return;
        }

        if let Some(active_at) = self.active_at
            && now.duration_since(active_at) > self.threshold
        {
            log::debug!(
                "macro run idle for more than {:?}, chain finished",
                self.threshold
            );
            state.clear();
            self.active_at = None;
        }
    }
}
