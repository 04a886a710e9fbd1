use std::time::Duration;

use crate::schema::Schema;
use crate::toast::ToastQueue;

/// Tunables for the contact pipeline.
#[derive(Debug, Clone)]
pub struct ContactConfig {
    /// Simulated submission latency.
    pub delay: Duration,
    pub toast_ttl: Duration,
    pub toast_limit: usize,
    pub schema: Schema,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(1500),
            toast_ttl: ToastQueue::DEFAULT_TTL,
            toast_limit: ToastQueue::DEFAULT_LIMIT,
            schema: Schema::contact(),
        }
    }
}

impl ContactConfig {
    pub fn toast_queue(&self) -> ToastQueue {
        ToastQueue::new(self.toast_ttl, self.toast_limit)
    }
}
