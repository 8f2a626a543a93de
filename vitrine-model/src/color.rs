//! 8-bit RGB colours and linear interpolation between them.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An sRGB triple. Serialized as a `[r, g, b]` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[u8; 3]", into = "[u8; 3]"))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Warm grey used for words that have not been scrolled into focus.
    pub const ASHLITE: Rgb = Rgb::new(167, 163, 156);
    /// Near-black used for words once their section is fully in view.
    pub const NERO: Rgb = Rgb::new(37, 37, 37);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Interpolate channel by channel towards `to`.
    ///
    /// `progress` is clamped into `[0, 1]` (NaN counts as 0) and every channel
    /// is rounded to the nearest integer, so the endpoints are reproduced
    /// exactly and no channel can leave `[0, 255]`.
    pub fn lerp(self, to: Rgb, progress: f64) -> Rgb {
        let t = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        let mix = |a: u8, b: u8| -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        };
        Rgb::new(mix(self.r, to.r), mix(self.g, to.g), mix(self.b, to.b))
    }

    /// CSS functional notation, e.g. `rgb(167,163,156)`.
    pub fn to_css(self) -> String {
        self.to_string()
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Rgb::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        [c.r, c.g, c.b]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}
