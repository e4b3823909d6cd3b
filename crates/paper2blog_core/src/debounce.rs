use std::time::{Duration, Instant};

/// Trailing-edge debounce driven by explicit timestamps.
///
/// Each `trigger` replaces the pending value and pushes the deadline to
/// `now + wait`. `poll` yields the last value once the deadline has passed.
/// A trigger stream that never pauses for `wait` never fires.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    wait: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
        }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    pub fn trigger(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.wait));
    }

    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, deadline)) if now >= *deadline => self.pending.take().map(|(value, _)| value),
            _ => None,
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WAIT: Duration = Duration::from_millis(300);

    #[test]
    fn rapid_calls_collapse_to_last_value() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(WAIT);

        debouncer.trigger("a", start);
        debouncer.trigger("ab", start + Duration::from_millis(100));
        debouncer.trigger("abc", start + Duration::from_millis(200));

        assert_eq!(debouncer.poll(start + Duration::from_millis(350)), None);
        assert_eq!(
            debouncer.poll(start + Duration::from_millis(500)),
            Some("abc")
        );
        assert_eq!(debouncer.poll(start + Duration::from_secs(5)), None);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn never_fires_while_stream_keeps_going() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(WAIT);
        for i in 0..20u64 {
            let now = start + Duration::from_millis(i * 250);
            debouncer.trigger(i, now);
            assert_eq!(debouncer.poll(now), None);
        }
        assert_eq!(
            debouncer.deadline(),
            Some(start + Duration::from_millis(19 * 250) + WAIT)
        );
    }

    #[test]
    fn cancel_drops_pending_value() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(WAIT);
        debouncer.trigger(1, start);
        assert_eq!(debouncer.cancel(), Some(1));
        assert_eq!(debouncer.poll(start + WAIT), None);
    }
}
