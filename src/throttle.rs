//! Leading-edge throttle on caller-supplied timestamps.

use std::time::{Duration, Instant};

/// Window applied to password input events.
pub const INPUT_THROTTLE_WINDOW: Duration = Duration::from_millis(300);

/// Fires on the first event of a window and drops every later event until
/// the window has elapsed. Dropped events are not queued.
#[derive(Debug, Clone)]
pub struct Throttle {
    window: Duration,
    last_fire: Option<Instant>,
}

impl Throttle {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_fire: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Returns `true` if an event at `now` should fire, recording it as the
    /// start of a new window.
    ///
    /// A timestamp earlier than the last fire is treated as inside the window.
    pub fn try_fire(&mut self, now: Instant) -> bool {
        let ready = match self.last_fire {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.window,
        };
        if ready {
            self.last_fire = Some(now);
        }
        ready
    }
}

impl Default for Throttle {
    fn default() -> Self {
        Self::new(INPUT_THROTTLE_WINDOW)
    }
}
