//! RAW image reading module
//!
//! Unpacks PowerShot A5 CRW frames into a four-channel GMCY grid.

mod reader;
mod crw_reader;
mod filter;
pub mod types;


pub use reader::RawImageReader;
pub use crw_reader::{
    BYTE_ORDER_MARK, CrwReader, HEADER_LEN, HEAP_SIGNATURE, HEAP_SIGNATURE_OFFSET, RECORD_LEN,
    SAMPLE_SHIFT, SAMPLES_PER_RECORD,
};
pub use filter::{FILTER_PATTERN, FilterColor, filter_color};
pub use types::{Gmcy, GmcyGrid, SENSOR_HEIGHT, SENSOR_WIDTH};
