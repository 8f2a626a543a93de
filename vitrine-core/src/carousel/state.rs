//! CarouselState: index bookkeeping shared by both carousels

/// What happens when navigation runs past either end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WrapMode {
    /// Stop at the first and last page; the matching arrow is disabled.
    #[default]
    Finite,
    /// Step modulo the item count.
    Infinite,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState {
    index: usize,
    item_count: usize,
    visible_count: usize,
    /// Item width plus gap, in pixels. Never negative.
    step: f64,
    wrap_mode: WrapMode,
}

impl CarouselState {
    pub fn new(item_count: usize, wrap_mode: WrapMode) -> Self {
        Self {
            index: 0,
            item_count,
            visible_count: 1,
            step: 0.0,
            wrap_mode,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn wrap_mode(&self) -> WrapMode {
        self.wrap_mode
    }

    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// Largest index that still fills the viewport.
    pub fn max_index(&self) -> usize {
        self.item_count.saturating_sub(self.visible_count)
    }

    pub fn can_prev(&self) -> bool {
        match self.wrap_mode {
            WrapMode::Finite => self.index > 0,
            WrapMode::Infinite => self.item_count > 1,
        }
    }

    pub fn can_next(&self) -> bool {
        match self.wrap_mode {
            WrapMode::Finite => self.index < self.max_index(),
            WrapMode::Infinite => self.item_count > 1,
        }
    }

    /// Horizontal translation of the track for the current index.
    pub fn offset_px(&self) -> f64 {
        -(self.index as f64 * self.step)
    }

    /// Moves one item back. Returns whether the index changed.
    pub fn prev(&mut self) -> bool {
        if !self.can_prev() {
            return false;
        }
        let before = self.index;
        self.index = match self.wrap_mode {
            WrapMode::Finite => self.index - 1,
            WrapMode::Infinite => {
                (self.index + self.item_count - 1) % self.item_count
            }
        };
        before != self.index
    }

    /// Moves one item forward. Returns whether the index changed.
    pub fn next(&mut self) -> bool {
        if !self.can_next() {
            return false;
        }
        let before = self.index;
        self.index = match self.wrap_mode {
            WrapMode::Finite => self.index + 1,
            WrapMode::Infinite => (self.index + 1) % self.item_count,
        };
        before != self.index
    }

    /// Applies fresh measurements and pulls the index back into range.
    pub fn recompute(&mut self, metrics: super::TrackMetrics) {
        self.step = if metrics.step.is_finite() {
            metrics.step.max(0.0)
        } else {
            0.0
        };
        self.visible_count = metrics.visible_count.max(1);
        self.index = self.index.min(self.max_index());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::TrackMetrics;

    fn finite(items: usize, visible: usize, step: f64) -> CarouselState {
        let mut state = CarouselState::new(items, WrapMode::Finite);
        state.recompute(TrackMetrics {
            step,
            visible_count: visible,
        });
        state
    }

    #[test]
    fn finite_state_clamps_at_both_ends() {
        let mut state = finite(5, 2, 100.0);
        assert_eq!(state.max_index(), 3);
        assert!(!state.can_prev());
        assert!(!state.prev());
        assert_eq!(state.index(), 0);

        for _ in 0..10 {
            state.next();
        }
        assert_eq!(state.index(), 3);
        assert!(!state.can_next());
        assert_eq!(state.offset_px(), -300.0);
    }

    #[test]
    fn recompute_pulls_index_back_when_more_items_fit() {
        let mut state = finite(6, 1, 280.0);
        for _ in 0..5 {
            state.next();
        }
        assert_eq!(state.index(), 5);

        state.recompute(TrackMetrics {
            step: 280.0,
            visible_count: 4,
        });
        assert_eq!(state.index(), 2);
        assert_eq!(state.max_index(), 2);
    }

    #[test]
    fn infinite_state_wraps_in_both_directions() {
        let mut state = CarouselState::new(5, WrapMode::Infinite);
        state.prev();
        state.prev();
        state.prev();
        assert_eq!(state.index(), 2);

        for _ in 0..3 {
            state.next();
        }
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn empty_state_ignores_navigation() {
        for mode in [WrapMode::Finite, WrapMode::Infinite] {
            let mut state = CarouselState::new(0, mode);
            assert!(!state.next());
            assert!(!state.prev());
            assert_eq!(state.index(), 0);
            assert_eq!(state.max_index(), 0);
        }
    }

    #[test]
    fn single_item_never_moves() {
        let mut state = CarouselState::new(1, WrapMode::Infinite);
        assert!(!state.next());
        assert!(!state.prev());
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn negative_or_nan_step_is_stored_as_zero() {
        let state = finite(3, 1, -4.0);
        assert_eq!(state.step(), 0.0);
        assert_eq!(state.offset_px(), 0.0);

        let state = finite(3, 1, f64::NAN);
        assert_eq!(state.step(), 0.0);
    }
}
