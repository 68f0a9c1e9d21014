//! Debayering module for filling in the three missing GMCY channels at each pixel

mod coarse;
mod refine;
mod gmcy_debayer;


pub use coarse::{COARSE_SHIFTS, coarse_interpolate};
pub use refine::{REFINE_SHIFTS, refine_interpolate};
pub use gmcy_debayer::{GmcyDebayer, MIN_DIMENSION};

/// Row-major offsets of a 3x3 window, matching the order of the shift tables.
pub(crate) fn window(row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
    (row - 1..=row + 1).flat_map(move |sy| (col - 1..=col + 1).map(move |sx| (sy, sx)))
}
