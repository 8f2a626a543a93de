/// Handle for a scheduled virtual timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

#[derive(Debug)]
struct Pending<T> {
    id: TimerId,
    due_ms: f64,
    payload: T,
}

/// A timeout queue driven by explicit time, standing in for
/// `setTimeout` and `requestAnimationFrame`.
///
/// Timers with the same due time fire in scheduling order.
#[derive(Debug)]
pub struct VirtualTimers<T> {
    now_ms: f64,
    next_id: u64,
    pending: Vec<Pending<T>>,
}

impl<T> Default for VirtualTimers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> VirtualTimers<T> {
    pub fn new() -> Self {
        Self {
            now_ms: 0.0,
            next_id: 0,
            pending: Vec::new(),
        }
    }

    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn schedule(&mut self, delay_ms: f64, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            id,
            due_ms: self.now_ms + delay_ms.max(0.0),
            payload,
        });
        id
    }

    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|timer| timer.id != id);
        before != self.pending.len()
    }

    /// Moves time forward to `now_ms` and returns the payloads that came
    /// due, earliest first.
    pub fn advance_to(&mut self, now_ms: f64) -> Vec<T> {
        self.now_ms = self.now_ms.max(now_ms);
        let now = self.now_ms;
        let (mut due, waiting): (Vec<_>, Vec<_>) = self
            .pending
            .drain(..)
            .partition(|timer| timer.due_ms <= now);
        self.pending = waiting;
        due.sort_by(|a, b| {
            a.due_ms.total_cmp(&b.due_ms).then(a.id.0.cmp(&b.id.0))
        });
        due.into_iter().map(|timer| timer.payload).collect()
    }

    pub fn advance(&mut self, ms: f64) -> Vec<T> {
        self.advance_to(self.now_ms + ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_in_due_then_schedule_order() {
        let mut timers = VirtualTimers::new();
        timers.schedule(100.0, "late");
        timers.schedule(10.0, "first");
        timers.schedule(10.0, "second");

        assert_eq!(timers.advance(9.0), Vec::<&str>::new());
        assert_eq!(timers.advance(1.0), vec!["first", "second"]);
        assert_eq!(timers.len(), 1);
        assert_eq!(timers.advance(500.0), vec!["late"]);
        assert!(timers.is_empty());
    }

    #[test]
    fn cancelled_timers_never_fire() {
        let mut timers = VirtualTimers::new();
        let id = timers.schedule(5.0, 1);
        timers.schedule(5.0, 2);
        assert!(timers.cancel(id));
        assert!(!timers.cancel(id));
        assert_eq!(timers.advance(5.0), vec![2]);
    }
}
