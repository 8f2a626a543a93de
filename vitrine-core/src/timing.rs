//! Scheduling primitives that do not own any timer.
//!
//! The host owns real timeouts and animation frames. These types only decide
//! whether a callback that fires is still the one that should act.

/// Identifies one debounced request. Only the newest ticket is honored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// Trailing-edge debounce keyed by generation.
///
/// Every [`Debouncer::notify`] supersedes the previous ticket, so a host
/// timer that fires for an older ticket is ignored even if it was never
/// cancelled.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay_ms: u32,
    generation: u64,
    pending: bool,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            generation: 0,
            pending: false,
        }
    }

    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Records a new event and returns the ticket the host should schedule
    /// `delay_ms` from now.
    pub fn notify(&mut self) -> Ticket {
        self.generation = self.generation.wrapping_add(1);
        self.pending = true;
        Ticket(self.generation)
    }

    /// Returns `true` exactly once, for the latest ticket.
    pub fn fire(&mut self, ticket: Ticket) -> bool {
        if self.pending && ticket.0 == self.generation {
            self.pending = false;
            true
        } else {
            false
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Leading-edge throttle: the first call runs, later calls run only once
/// strictly more than `interval_ms` has passed since the last run.
#[derive(Debug, Clone)]
pub struct Throttle {
    interval_ms: f64,
    last_run_ms: Option<f64>,
}

impl Throttle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            last_run_ms: None,
        }
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    pub fn last_run_ms(&self) -> Option<f64> {
        self.last_run_ms
    }

    /// Claims a run slot at `now_ms`, recording it on success.
    pub fn try_acquire(&mut self, now_ms: f64) -> bool {
        let due = match self.last_run_ms {
            None => true,
            Some(last) => now_ms - last > self.interval_ms,
        };
        if due {
            self.last_run_ms = Some(now_ms);
        }
        due
    }
}

/// At most one animation frame outstanding.
#[derive(Debug, Clone, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// Returns `true` when the caller should request a frame.
    pub fn try_open(&mut self) -> bool {
        if self.pending {
            false
        } else {
            self.pending = true;
            true
        }
    }

    pub fn close(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
