//! Timed UI state machines.
//!
//! Each machine owns at most one pending deadline and is advanced by
//! calling `tick(now)` from the event loop. Passing the clock in keeps the
//! transitions deterministic and lets tests drive them with synthetic
//! instants.

use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::clipboard::Clipboard;

/// How long the "copied" marker stays visible.
pub const COPY_FEEDBACK_DURATION: Duration = Duration::from_secs(2);

/// Simulated run time before the output is shown.
pub const RUN_DELAY: Duration = Duration::from_millis(1500);

/// Feedback for the copy-to-clipboard action.
///
/// A successful copy turns the marker on and (re)starts a single reset
/// deadline. A failed copy leaves the marker alone and records the error.
#[derive(Debug, Default)]
pub struct CopyFeedback {
    reset_at: Option<Instant>,
    last_error: Option<String>,
}

impl CopyFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy `text` and start the feedback timer.
    ///
    /// Returns whether the clipboard accepted the text.
    pub fn copy(&mut self, clipboard: &mut dyn Clipboard, text: &str, now: Instant) -> bool {
        match clipboard.write_text(text) {
            Ok(()) => {
                debug!(bytes = text.len(), backend = clipboard.description(), "copied code");
                self.reset_at = Some(now + COPY_FEEDBACK_DURATION);
                self.last_error = None;
                true
            }
            Err(e) => {
                warn!(error = %e, backend = clipboard.description(), "copy failed");
                self.last_error = Some(e.to_string());
                false
            }
        }
    }

    /// Whether the "copied" marker is showing.
    pub fn is_active(&self) -> bool {
        self.reset_at.is_some()
    }

    /// Error from the most recent failed copy, cleared by the next success.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Advance the clock. Returns `true` on the tick that clears the marker.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.reset_at {
            Some(deadline) if now >= deadline => {
                self.reset_at = None;
                true
            }
            _ => false,
        }
    }

    /// Drop the pending reset without firing it.
    pub fn cancel(&mut self) {
        self.reset_at = None;
        self.last_error = None;
    }
}

/// Phase of the simulated run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Idle,
    /// Waiting for the simulated run to finish.
    Running { until: Instant },
}

/// The "Run Code" control.
///
/// `Idle -> Running -> Idle + display open`. Triggering while running is
/// rejected rather than queued, and a run cannot be aborted except by
/// [`RunControl::cancel`] when the view goes away.
#[derive(Debug)]
pub struct RunControl {
    phase: RunPhase,
    display_open: bool,
}

impl Default for RunControl {
    fn default() -> Self {
        Self::new()
    }
}

impl RunControl {
    pub fn new() -> Self {
        Self {
            phase: RunPhase::Idle,
            display_open: false,
        }
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, RunPhase::Running { .. })
    }

    /// Whether the output display is open.
    pub fn display_open(&self) -> bool {
        self.display_open
    }

    /// Start a run. Returns `false`, changing nothing, if one is in progress.
    pub fn trigger(&mut self, now: Instant) -> bool {
        if self.is_running() {
            return false;
        }
        self.phase = RunPhase::Running {
            until: now + RUN_DELAY,
        };
        self.display_open = false;
        true
    }

    /// Advance the clock. Returns `true` on the tick that finishes the run
    /// and opens the display.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.phase {
            RunPhase::Running { until } if now >= until => {
                self.phase = RunPhase::Idle;
                self.display_open = true;
                true
            }
            _ => false,
        }
    }

    /// Close the output display.
    pub fn close_display(&mut self) {
        self.display_open = false;
    }

    /// Release any pending run and close the display.
    pub fn cancel(&mut self) {
        self.phase = RunPhase::Idle;
        self.display_open = false;
    }

    /// Label for the control in its current phase.
    pub fn label(&self) -> &'static str {
        if self.is_running() {
            "Running..."
        } else {
            "Run Code"
        }
    }
}
