use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raw::GmcyGrid;
use crate::image_pipeline::ppm::types::ConversionConfig;

pub trait PpmWriter {
    fn write_ppm(&self, grid: &GmcyGrid, output: &mut dyn Write, config: &ConversionConfig) -> Result<()>;
}
