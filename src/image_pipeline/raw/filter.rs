//! GMCY color filter layout of the A5 sensor.
//!
//! ```text
//!       0 1 2 3 4 5
//!     0 C Y C Y C Y
//!     1 G M G M G M
//!     2 C Y C Y C Y
//!     3 M G M G M G
//! ```

use std::fmt;

/// Two bits per tile entry, indexed by `(row & 3, col & 1)`.
pub const FILTER_PATTERN: u16 = 0x1e4e;

/// Color of the filter over a photosite. The discriminant is the channel index in a [`Gmcy`].
///
/// [`Gmcy`]: crate::image_pipeline::raw::Gmcy
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FilterColor {
    Green = 0,
    Magenta = 1,
    Cyan = 2,
    Yellow = 3,
}

impl FilterColor {
    pub const ALL: [FilterColor; 4] = [Self::Green, Self::Magenta, Self::Cyan, Self::Yellow];

    /// Channel index of this color in a [`Gmcy`](crate::image_pipeline::raw::Gmcy).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    const fn from_bits(bits: u16) -> Self {
        match bits & 3 {
            0 => Self::Green,
            1 => Self::Magenta,
            2 => Self::Cyan,
            _ => Self::Yellow,
        }
    }
}

impl fmt::Display for FilterColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Green => f.write_str("G"),
            Self::Magenta => f.write_str("M"),
            Self::Cyan => f.write_str("C"),
            Self::Yellow => f.write_str("Y"),
        }
    }
}

/// Returns the filter color at `(row, col)`.
#[inline]
pub const fn filter_color(row: usize, col: usize) -> FilterColor {
    let tile = ((row << 1) & 6) + (col & 1);
    FilterColor::from_bits(FILTER_PATTERN >> (tile << 1))
}
