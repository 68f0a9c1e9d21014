//! Pipeline conversions module
//!
//! This module contains orchestration logic for CRW to PPM conversion.

mod crw_to_ppm;


pub use crw_to_ppm::{CrwToPpmPipeline, output_path_for};
