use std::time::{Duration, Instant};

/// Frame-driven counter that climbs from 0 to `end` over `duration`.
///
/// The first [`update`](Self::update) fixes the start time, so a counter
/// created off-screen starts counting when it is first drawn.
#[derive(Debug, Clone)]
pub struct CountUp {
    end: u32,
    duration: Duration,
    suffix: String,
    started: Option<Instant>,
    value: u32,
}

impl CountUp {
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(2000);

    pub fn new(end: u32) -> Self {
        Self {
            end,
            duration: Self::DEFAULT_DURATION,
            suffix: String::new(),
            started: None,
            value: 0,
        }
    }

    pub fn duration(mut self, v: Duration) -> Self { self.duration = v; self }
    pub fn suffix(mut self, v: impl Into<String>) -> Self { self.suffix = v.into(); self }

    /// Advances to `now` and returns the displayed value:
    /// `floor(min(elapsed / duration, 1) · end)`.
    pub fn update(&mut self, now: Instant) -> u32 {
        let start = *self.started.get_or_insert(now);
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            (now.saturating_duration_since(start).as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
        };
        self.value = (progress * self.end as f64).floor() as u32;
        self.value
    }

    #[inline]
    pub fn value(&self) -> u32 {
        self.value
    }

    /// True once the counter shows `end`; the host can stop requesting frames.
    pub fn is_finished(&self) -> bool {
        self.started.is_some() && self.value >= self.end
    }

    /// Display text, e.g. `"5+"`.
    pub fn label(&self) -> String {
        format!("{}{}", self.value, self.suffix)
    }
}
