use std::sync::atomic::{AtomicU64, Ordering};

/// Ticket identifying one outgoing request. Obtained from
/// [`RequestTracker::begin`] and checked after the response arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Tags overlapping requests with a monotonically increasing sequence so
/// that only the most recent one's result is kept. A response whose ticket
/// is no longer current must be discarded by the caller.
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: AtomicU64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new outgoing request, superseding all earlier ones.
    pub fn begin(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// True while no newer request has been started.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_keep_single_request_current() {
        let tracker = RequestTracker::new();
        let ticket = tracker.begin();
        assert!(tracker.is_current(ticket));
    }

    #[test]
    fn should_supersede_earlier_requests() {
        let tracker = RequestTracker::new();
        let first = tracker.begin();
        let second = tracker.begin();

        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }

    #[test]
    fn should_only_honor_the_latest_of_many() {
        let tracker = RequestTracker::new();
        let tickets: Vec<_> = (0..10).map(|_| tracker.begin()).collect();

        for stale in &tickets[..9] {
            assert!(!tracker.is_current(*stale));
        }
        assert!(tracker.is_current(tickets[9]));
    }
}
