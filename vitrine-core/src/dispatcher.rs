//! Unified scroll dispatcher.
//!
//! Scroll notifications collapse into at most one pending animation frame.
//! Each frame runs the [`Tier::EveryFrame`] effects and, when the throttle
//! allows, the [`Tier::Throttled`] ones.

use crate::effects::{EffectRegistry, Tier};
use crate::host::{Clock, Dom};
use crate::timing::{FrameGate, Throttle};

/// What the host should do with a scroll notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDecision {
    /// Request an animation frame and call
    /// [`ScrollDispatcher::on_frame`] from it.
    ScheduleFrame,
    /// A frame is already pending; nothing to do.
    Coalesced,
}

/// Effects run by one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameReport {
    pub every_frame: usize,
    /// `None` when the throttle skipped the heavy tier.
    pub throttled: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchStats {
    pub notifications: u64,
    pub frames_scheduled: u64,
    pub frames_run: u64,
    pub throttled_runs: u64,
}

#[derive(Debug, Clone)]
pub struct ScrollDispatcher {
    gate: FrameGate,
    throttle: Throttle,
    stats: DispatchStats,
}

impl ScrollDispatcher {
    pub fn new(throttle_ms: f64) -> Self {
        Self {
            gate: FrameGate::default(),
            throttle: Throttle::new(throttle_ms),
            stats: DispatchStats::default(),
        }
    }

    pub fn on_scroll(&mut self) -> ScrollDecision {
        self.stats.notifications += 1;
        if self.gate.try_open() {
            self.stats.frames_scheduled += 1;
            ScrollDecision::ScheduleFrame
        } else {
            ScrollDecision::Coalesced
        }
    }

    /// Runs one scheduled frame and releases the gate.
    pub fn on_frame<D: Dom>(
        &mut self,
        clock: &impl Clock,
        dom: &D,
        effects: &mut EffectRegistry<D>,
    ) -> FrameReport {
        let now = clock.now_ms();
        let every_frame = effects.run_tier(Tier::EveryFrame, dom);
        let throttled = if self.throttle.try_acquire(now) {
            self.stats.throttled_runs += 1;
            Some(effects.run_tier(Tier::Throttled, dom))
        } else {
            None
        };
        self.stats.frames_run += 1;
        self.gate.close();

        FrameReport {
            every_frame,
            throttled,
        }
    }

    /// Runs every effect once without touching the gate or the throttle.
    pub fn prime<D: Dom>(
        &self,
        dom: &D,
        effects: &mut EffectRegistry<D>,
    ) -> usize {
        effects.run_all(dom)
    }

    pub fn frame_pending(&self) -> bool {
        self.gate.is_pending()
    }

    pub fn stats(&self) -> DispatchStats {
        self.stats
    }
}
