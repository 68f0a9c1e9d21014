//! Image processing pipeline module
//!
//! Decodes PowerShot A5 raw frames (CRW container, GMCY color filter array) and renders
//! them as binary PPM. RAW reading, demosaicing, PPM rendering and conversion
//! orchestration each live in their own module.

pub mod raw;
pub mod debayer;
pub mod ppm;
pub mod conversions;
pub mod common;

pub use common::{
    ConversionError,
    Result,
};

pub use raw::{
    CrwReader,
    FilterColor,
    GmcyGrid,
    RawImageReader,
    filter_color,
};

pub use debayer::{
    GmcyDebayer,
    coarse_interpolate,
    refine_interpolate,
};

pub use ppm::{
    ColorBalance,
    ColorConverter,
    ConversionConfig,
    ConversionConfigBuilder,
    Histogram,
    PpmWriter,
    RgbSample,
    StandardPpmWriter,
};

pub use conversions::{
    CrwToPpmPipeline,
    output_path_for,
};
