use std::time::{Duration, Instant};

/// One-shot deadline polled by the host with the current time.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Delay {
    deadline: Instant,
}

impl Delay {
    pub fn new(now: Instant, duration: Duration) -> Self {
        Self { deadline: now + duration }
    }

    #[inline]
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    #[inline]
    pub fn is_elapsed(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// Time left before the deadline; zero once elapsed.
    #[inline]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }
}
