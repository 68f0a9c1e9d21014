use crate::image_pipeline::debayer::window;
use crate::image_pipeline::raw::{GmcyGrid, filter_color};

/// Right shift applied to each position of the 3x3 window. A shift of 16 drops the centre's
/// own sample, which is already in place.
pub const COARSE_SHIFTS: [u32; 9] = [
    2, 1, 2,
    1, 16, 1,
    2, 1, 2,
];

/// First interpolation pass.
///
/// Adds each neighbour's native sample, weighted by [`COARSE_SHIFTS`], into the matching
/// channel of every interior pixel. Relies on the missing channels being zero beforehand.
/// The outermost rows and columns are left as they are.
///
/// Reads are gathered per pixel before anything is written back. A neighbour's native
/// channel is never one of the channels this pass writes, so the result does not depend on
/// scan order.
pub fn coarse_interpolate(grid: &mut GmcyGrid) {
    let (width, height) = (grid.width(), grid.height());
    if width < 3 || height < 3 {
        return;
    }

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let mut acc = grid.pixel(y, x).map(u32::from);
            for ((sy, sx), shift) in window(y, x).zip(COARSE_SHIFTS) {
                let c = filter_color(sy, sx).index();
                acc[c] += u32::from(grid.pixel(sy, sx)[c]) >> shift;
            }
            *grid.pixel_mut(y, x) = acc.map(|v| v as u16);
        }
    }
}
