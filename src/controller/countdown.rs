//! Power-on countdown
//!
//! Simulates the arm time after the camera is switched on. The counter is
//! driven purely by ticks; the controller decides when a tick is due.

/// Value the countdown starts from, in seconds
pub const COUNTDOWN_START: u8 = 30;

/// Ephemeral 30-to-0 second timer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Countdown {
    remaining: Option<u8>,
}

impl Countdown {
    /// Seconds left, or `None` while inactive
    pub fn remaining(self) -> Option<u8> {
        self.remaining
    }

    /// Whether the countdown is running
    pub fn is_active(self) -> bool {
        self.remaining.is_some()
    }

    /// Start at [`COUNTDOWN_START`] if inactive
    ///
    /// Returns `false` and leaves the running countdown untouched otherwise.
    pub fn start(&mut self) -> bool {
        if self.remaining.is_some() {
            return false;
        }
        self.remaining = Some(COUNTDOWN_START);
        true
    }

    /// Advance by one second
    ///
    /// Reaching zero deactivates the countdown. Ticking an inactive countdown
    /// does nothing, so a tick scheduled before a cancel is harmless.
    pub fn tick(&mut self) {
        self.remaining = match self.remaining {
            Some(n) if n > 1 => Some(n - 1),
            _ => None,
        };
    }

    /// Deactivate regardless of the remaining value
    pub fn cancel(&mut self) {
        self.remaining = None;
    }
}
