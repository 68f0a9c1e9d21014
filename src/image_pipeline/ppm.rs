//! PPM writing module
//!
//! Converts demosaiced GMCY grids to RGB and renders them as binary PPM with
//! histogram-driven exposure and gamma.

mod writer;
mod standard_ppm_writer;
mod color;
mod histogram;
pub mod types;


pub use writer::PpmWriter;
pub use standard_ppm_writer::{StandardPpmWriter, WHITE_SCALE, ppm_header};
pub use color::{ColorBalance, ColorConverter, GMCY_TO_RGB, RgbSample};
pub use histogram::{BUCKET_SHIFT, HIGHLIGHT_FRACTION, HISTOGRAM_BUCKETS, Histogram};
pub use types::{ConversionConfig, ConversionConfigBuilder};
