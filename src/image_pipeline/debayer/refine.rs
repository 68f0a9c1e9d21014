use std::mem;

use crate::image_pipeline::debayer::window;
use crate::image_pipeline::raw::{Gmcy, GmcyGrid, filter_color};

/// Like [`COARSE_SHIFTS`](super::COARSE_SHIFTS) but the centre counts in full.
pub const REFINE_SHIFTS: [u32; 9] = [
    2, 1, 2,
    1, 0, 1,
    2, 1, 2,
];

const RATIO_BITS: u32 = 16;

/// Second interpolation pass. May be run more than once.
///
/// Each channel of an interior pixel is rebuilt from its neighbours' native samples, each
/// scaled by how the centre's own color compares between the neighbour and the centre. Only
/// pixels at least two away from every edge are touched.
///
/// Rows are built into a pair of buffers. A row is written back only once the row below it
/// has been computed, since that row still reads it. The last computed row is never written
/// back.
pub fn refine_interpolate(grid: &mut GmcyGrid) {
    let (width, height) = (grid.width(), grid.height());
    if width < 5 || height < 5 {
        return;
    }

    let mut last_row: Vec<Gmcy> = vec![[0; 4]; width];
    let mut this_row: Vec<Gmcy> = vec![[0; 4]; width];

    for y in 2..height - 2 {
        this_row.fill([0; 4]);
        for x in 2..width - 2 {
            this_row[x] = refine_pixel(grid, y, x);
        }
        if y > 2 {
            grid.row_mut(y - 1)[2..width - 2].copy_from_slice(&last_row[2..width - 2]);
        }
        mem::swap(&mut last_row, &mut this_row);
    }
}

fn refine_pixel(grid: &GmcyGrid, y: usize, x: usize) -> Gmcy {
    let c = filter_color(y, x).index();
    let centre = u64::from(grid.pixel(y, x)[c]);

    let mut acc = [0u64; 4];
    for ((sy, sx), shift) in window(y, x).zip(REFINE_SHIFTS) {
        let sc = filter_color(sy, sx).index();
        let neighbour = grid.pixel(sy, sx);
        // Zero divisors only show up in black regions.
        let divisor = u64::from(neighbour[c]).max(1);
        acc[sc] += ((u64::from(neighbour[sc]) << RATIO_BITS) / divisor * centre)
            >> (RATIO_BITS + shift);
    }
    acc.map(|v| v.min(u64::from(u16::MAX)) as u16)
}
