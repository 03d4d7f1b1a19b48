//! Frame-driven timers
//!
//! Timers hold a deadline against the host clock and fire from the frame
//! tick, so cancelling one is just clearing its deadline.

use std::time::Duration;

/// A one-shot timeout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timeout {
    deadline: Option<Duration>,
}

impl Timeout {
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Arm (or re-arm) to fire `delay` after `now`
    pub fn arm(&mut self, now: Duration, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    pub fn clear(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Fire if due; a fired timeout disarms itself
    pub fn fire(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
