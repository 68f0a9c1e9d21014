use tracing::{debug, info};

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::debayer::{coarse_interpolate, refine_interpolate};
use crate::image_pipeline::raw::GmcyGrid;

/// Smallest width or height that leaves an interior after the two-pixel border.
pub const MIN_DIMENSION: usize = 5;

/// Demosaics a GMCY grid in place: one coarse pass, then `refine_passes` refining passes.
pub struct GmcyDebayer {
    refine_passes: usize,
}

impl GmcyDebayer {
    pub fn new(refine_passes: usize) -> Self {
        Self { refine_passes }
    }

    pub fn refine_passes(&self) -> usize {
        self.refine_passes
    }

    pub fn process(&self, grid: &mut GmcyGrid) -> Result<()> {
        let (width, height) = (grid.width(), grid.height());
        if width < MIN_DIMENSION || height < MIN_DIMENSION {
            return Err(ConversionError::InvalidDimensions(width, height));
        }

        info!("Demosaicing {}x{} GMCY grid", width, height);

        {
            let _span = tracing::debug_span!("coarse_interpolate").entered();
            debug!("First interpolation...");
            coarse_interpolate(grid);
        }

        for pass in 0..self.refine_passes {
            let _span = tracing::debug_span!("refine_interpolate", pass).entered();
            debug!("Second interpolation, pass {}...", pass + 1);
            refine_interpolate(grid);
        }

        Ok(())
    }
}

impl Default for GmcyDebayer {
    fn default() -> Self {
        Self::new(1)
    }
}
