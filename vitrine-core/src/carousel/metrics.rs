use crate::host::Dom;

/// Layout measurements that drive a [`super::CarouselState`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackMetrics {
    /// Distance between the left edges of adjacent items.
    pub step: f64,
    /// Whole items that fit in the viewport, at least one. Every item
    /// counts as visible when the items have no width.
    pub visible_count: usize,
}

impl TrackMetrics {
    /// Measurements for an empty or unmeasurable track.
    pub const EMPTY: Self = Self {
        step: 0.0,
        visible_count: 1,
    };

    pub fn from_layout(
        item_width: f64,
        gap: f64,
        viewport_width: f64,
        item_count: usize,
    ) -> Self {
        if item_count == 0 {
            return Self::EMPTY;
        }

        let step = item_width + gap;
        if !step.is_finite() || step <= 0.0 {
            return Self {
                step: 0.0,
                visible_count: item_count,
            };
        }

        let fit = (viewport_width / step).floor();
        let visible_count = if fit.is_finite() && fit >= 1.0 {
            fit as usize
        } else {
            1
        };

        Self {
            step,
            visible_count,
        }
    }
}

/// Reads the first length of a computed `gap` value.
///
/// `"24px"` and `"24px 12px"` both give `24.0`; `"normal"` or anything else
/// that does not start with a number gives `0.0`.
pub fn parse_gap(value: &str) -> f64 {
    let Some(first) = value.split_whitespace().next() else {
        return 0.0;
    };
    let number = first.strip_suffix("px").unwrap_or(first);
    match number.parse::<f64>() {
        Ok(gap) if gap.is_finite() => gap,
        _ => 0.0,
    }
}

/// Measures a track: first item width, the track's column gap and the
/// viewport's client width.
pub fn measure_track<D: Dom>(
    dom: &D,
    viewport: &D::Element,
    track: &D::Element,
    items: &[D::Element],
) -> TrackMetrics {
    let Some(first) = items.first() else {
        return TrackMetrics::EMPTY;
    };

    let gap = dom
        .computed_style(track, "gap")
        .or_else(|| dom.computed_style(track, "column-gap"))
        .map(|value| parse_gap(&value))
        .unwrap_or(0.0);

    TrackMetrics::from_layout(
        dom.rect(first).width,
        gap,
        dom.client_width(viewport),
        items.len(),
    )
}
