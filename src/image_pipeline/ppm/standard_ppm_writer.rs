use std::io::Write;
use tracing::{debug, warn};
use crate::image_pipeline::common::error::{Result, ConversionError};
use crate::image_pipeline::raw::GmcyGrid;
use crate::image_pipeline::ppm::color::ColorConverter;
use crate::image_pipeline::ppm::histogram::{BUCKET_SHIFT, Histogram};
use crate::image_pipeline::ppm::types::ConversionConfig;
use crate::image_pipeline::ppm::writer::PpmWriter;

/// Output level of a white-point pixel at unit brightness, before clipping.
pub const WHITE_SCALE: f32 = 362.0;

const MAX_SAMPLE: i32 = 255;

/// Binary PPM header for an image of the given size.
pub fn ppm_header(width: usize, height: usize) -> String {
    format!("P6\n{} {}\n{}\n", width, height, MAX_SAMPLE)
}

/// Renders a demosaiced grid as 8-bit binary PPM, one pixel smaller than the grid on
/// every side.
pub struct StandardPpmWriter;

impl StandardPpmWriter {
    /// Histogram of every RGB channel over pixels at least two away from the edges.
    pub fn gather_histogram(grid: &GmcyGrid, converter: &ColorConverter) -> Histogram {
        let mut histogram = Histogram::new();
        let (width, height) = (grid.width(), grid.height());
        for y in 2..height.saturating_sub(2) {
            for x in 2..width.saturating_sub(2) {
                histogram.add_sample(&converter.convert(grid.pixel(y, x)));
            }
        }
        histogram
    }

    /// White point for the grid: the top bucket boundary holding more than the highlight
    /// share of the frame's pixel count.
    pub fn white_point(grid: &GmcyGrid, converter: &ColorConverter) -> f32 {
        let histogram = Self::gather_histogram(grid, converter);
        let threshold = Histogram::highlight_threshold(grid.width() * grid.height());
        let mut bucket = histogram.ceiling_bucket(threshold);
        if bucket == 0 {
            warn!("Image is too dark to find a white point, using the lowest bucket");
            bucket = 1;
        }
        (bucket << BUCKET_SHIFT) as f32
    }
}

impl PpmWriter for StandardPpmWriter {
    fn write_ppm(&self, grid: &GmcyGrid, output: &mut dyn Write, config: &ConversionConfig) -> Result<()> {
        let (width, height) = (grid.width(), grid.height());
        if width < 3 || height < 3 {
            return Err(ConversionError::InvalidDimensions(width, height));
        }

        let converter = ColorConverter::new(config.color_balance);

        debug!("First pass RGB...");
        let max = Self::white_point(grid, &converter);
        let max2 = max * max;
        debug!("White point: {}", max);

        debug!("Second pass RGB...");
        output.write_all(ppm_header(width - 2, height - 2).as_bytes())?;

        let exponent = (config.gamma - 1.0) / 2.0;
        let multiplier = config.brightness * WHITE_SCALE / max;
        let row_gains = config
            .row_gains
            .map(|gain| f64::from(gain).powf(f64::from(config.gamma)) as f32);
        let exponent = f64::from(exponent);

        let mut line = vec![0u8; (width - 2) * 3];
        for y in 1..height - 1 {
            let row = &grid.row(y)[1..width - 1];
            for (pixel, out) in row.iter().zip(line.chunks_exact_mut(3)) {
                let sample = converter.convert(pixel);
                // The power term is evaluated in double precision, the rest in single.
                let scale = (f64::from(multiplier * row_gains[y & 3])
                    * f64::from(sample.magnitude / max2).powf(exponent)) as f32;
                for (dst, value) in out.iter_mut().zip(sample.rgb) {
                    *dst = ((value * scale) as i32).clamp(0, MAX_SAMPLE) as u8;
                }
            }
            output.write_all(&line)?;
        }

        debug!("PPM rendering complete");
        Ok(())
    }
}
