//! Deterministic stand-ins for the browser, used by this crate's tests.

mod clock;
mod dom;
mod timers;

pub use clock::ManualClock;
pub use dom::{FakeDom, FakeNode, NodeId, ScrollCall};
pub use timers::{TimerId, VirtualTimers};
