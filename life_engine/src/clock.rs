use std::time::{Duration, Instant};

/// Cancellable repeating timer behind the generational clock.
///
/// The deadline is the scheduling handle: `Some` while a tick is pending,
/// `None` once cancelled. The owner re-arms it after each firing.
pub(crate) struct TickClock {
    interval: Duration,
    deadline: Option<Instant>,
}

impl TickClock {
    pub(crate) fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    pub(crate) fn arm(&mut self) {
        self.deadline = Some(Instant::now() + self.interval);
    }

    pub(crate) fn cancel(&mut self) {
        self.deadline = None;
    }

    pub(crate) fn due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }
}
