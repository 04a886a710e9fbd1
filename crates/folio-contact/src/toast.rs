use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// A transient notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
}

impl Toast {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into() }
    }

    /// Shown once a submission completes.
    pub fn message_sent() -> Self {
        Self::new(
            "Message sent!",
            "Thank you for your message. I'll get back to you soon.",
        )
    }
}

/// Sink for notifications raised by the form.
pub trait Notifier {
    fn notify(&mut self, toast: Toast, now: Instant);
}

/// Records every toast; handy for hosts that render them immediately.
impl Notifier for Vec<Toast> {
    fn notify(&mut self, toast: Toast, _now: Instant) {
        self.push(toast);
    }
}

#[derive(Debug, Clone)]
struct Shown {
    toast: Toast,
    at: Instant,
}

/// Visible notifications with a time-to-live and a visible limit.
///
/// Newest first; pushing past the limit evicts the oldest.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    ttl: Duration,
    limit: usize,
    items: VecDeque<Shown>,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TTL, Self::DEFAULT_LIMIT)
    }
}

impl ToastQueue {
    pub const DEFAULT_TTL: Duration = Duration::from_secs(5);
    pub const DEFAULT_LIMIT: usize = 1;

    pub fn new(ttl: Duration, limit: usize) -> Self {
        Self { ttl, limit, items: VecDeque::new() }
    }

    pub fn push(&mut self, toast: Toast, now: Instant) {
        if self.limit == 0 {
            return;
        }
        self.items.push_front(Shown { toast, at: now });
        self.items.truncate(self.limit);
    }

    /// Drops expired toasts.
    pub fn prune(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.items.retain(|s| now.saturating_duration_since(s.at) < ttl);
    }

    /// Toasts still alive at `now`, newest first.
    pub fn visible(&self, now: Instant) -> impl Iterator<Item = &Toast> {
        let ttl = self.ttl;
        self.items
            .iter()
            .filter(move |s| now.saturating_duration_since(s.at) < ttl)
            .map(|s| &s.toast)
    }

    pub fn dismiss_all(&mut self) {
        self.items.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, toast: Toast, now: Instant) {
        self.push(toast, now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(v: u64) -> Duration { Duration::from_secs(v) }

    #[test]
    fn toast_expires_after_ttl() {
        let t0 = Instant::now();
        let mut q = ToastQueue::default();
        q.push(Toast::message_sent(), t0);
        assert_eq!(q.visible(t0 + Duration::from_millis(4999)).count(), 1);
        assert_eq!(q.visible(t0 + secs(5)).count(), 0);

        q.prune(t0 + secs(1));
        assert!(!q.is_empty());
        q.prune(t0 + secs(6));
        assert!(q.is_empty());
    }

    #[test]
    fn newest_wins_at_the_limit() {
        let t0 = Instant::now();
        let mut q = ToastQueue::default();
        q.push(Toast::new("first", ""), t0);
        q.push(Toast::new("second", ""), t0 + secs(1));
        let titles: Vec<_> = q.visible(t0 + secs(1)).map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["second"]);
    }

    #[test]
    fn larger_limit_keeps_newest_first() {
        let t0 = Instant::now();
        let mut q = ToastQueue::new(secs(5), 2);
        for title in ["a", "b", "c"] {
            q.push(Toast::new(title, ""), t0);
        }
        let titles: Vec<_> = q.visible(t0).map(|t| t.title.clone()).collect();
        assert_eq!(titles, ["c", "b"]);
        q.dismiss_all();
        assert!(q.is_empty());
    }

    #[test]
    fn vec_notifier_records_everything() {
        let mut sink: Vec<Toast> = Vec::new();
        sink.notify(Toast::message_sent(), Instant::now());
        assert_eq!(sink, [Toast::message_sent()]);
    }
}
