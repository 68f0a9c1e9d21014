//! RAW reader for the Canon PowerShot A5 CRW container.
//!
//! The container is a 26-byte header followed by one packed record per sensor row. Each
//! record holds 992 ten-bit samples in 1240 bytes; only the first 960 are image data.

use tracing::{debug, warn};
use crate::image_pipeline::common::error::{Result, ConversionError};
use crate::image_pipeline::raw::filter::filter_color;
use crate::image_pipeline::raw::reader::RawImageReader;
use crate::image_pipeline::raw::types::{GmcyGrid, SENSOR_HEIGHT, SENSOR_WIDTH};

/// Length of the fixed header preceding the row records.
pub const HEADER_LEN: usize = 26;

/// Little-endian marker at offset 0.
pub const BYTE_ORDER_MARK: &[u8; 2] = b"II";

/// Heap signature at [`HEAP_SIGNATURE_OFFSET`].
pub const HEAP_SIGNATURE: &[u8; 8] = b"HEAPCCDR";

/// Byte offset of [`HEAP_SIGNATURE`] within the header.
pub const HEAP_SIGNATURE_OFFSET: usize = 6;

/// Bytes per packed row record.
pub const RECORD_LEN: usize = 1240;

/// Samples encoded in one record. Columns past [`SENSOR_WIDTH`] are blank.
pub const SAMPLES_PER_RECORD: usize = RECORD_LEN * 8 / 10;

/// Left shift applied to every sample, leaving headroom for the interpolation passes.
pub const SAMPLE_SHIFT: u32 = 4;

const SAMPLE_MASK: u32 = 0x3ff;

/// Packed bytes per group of eight samples.
const GROUP_LEN: usize = 10;

/// Reader for PowerShot A5 raw files.
pub struct CrwReader;

impl CrwReader {
    /// Checks both header signatures.
    ///
    /// Fails with [`ConversionError::TruncatedInputError`] when the header is incomplete and
    /// with [`ConversionError::FormatError`] when either marker is wrong.
    pub fn validate_header(data: &[u8]) -> Result<()> {
        if data.len() < HEADER_LEN {
            return Err(ConversionError::TruncatedInputError {
                expected: HEADER_LEN,
                got: data.len(),
            });
        }

        let signature = &data[HEAP_SIGNATURE_OFFSET..HEAP_SIGNATURE_OFFSET + HEAP_SIGNATURE.len()];
        if &data[..BYTE_ORDER_MARK.len()] != BYTE_ORDER_MARK || signature != HEAP_SIGNATURE {
            return Err(ConversionError::FormatError(format!(
                "expected {:?} and {:?} markers in header",
                String::from_utf8_lossy(BYTE_ORDER_MARK),
                String::from_utf8_lossy(HEAP_SIGNATURE),
            )));
        }

        Ok(())
    }

    /// Total container length for a full frame.
    pub const fn expected_len() -> usize {
        HEADER_LEN + SENSOR_HEIGHT * RECORD_LEN
    }
}

/// Unpacks eight ten-bit samples from a ten-byte group.
///
/// The two halves interleave their bytes differently; the layout is fixed by the camera.
#[inline]
fn unpack_group(dp: &[u8], pix: &mut [u16]) {
    let d = |i: usize| dp[i] as u32;
    let samples = [
        (d(1) << 2) + (d(0) >> 6),
        (d(0) << 4) + (d(3) >> 4),
        (d(3) << 6) + (d(2) >> 2),
        (d(2) << 8) + d(5),
        (d(4) << 2) + (d(7) >> 6),
        (d(7) << 4) + (d(6) >> 4),
        (d(6) << 6) + (d(9) >> 2),
        (d(9) << 8) + d(8),
    ];
    for (out, sample) in pix.iter_mut().zip(samples) {
        *out = (sample & SAMPLE_MASK) as u16;
    }
}

impl RawImageReader for CrwReader {
    /// Reads and unpacks a CRW frame from a byte array.
    ///
    /// This method:
    /// 1. Validates the header markers, reading nothing further on mismatch
    /// 2. Unpacks each row record into ten-bit samples
    /// 3. Stores each sample, shifted left by [`SAMPLE_SHIFT`], in the channel the filter
    ///    pattern assigns to its photosite, zeroing the other three channels
    ///
    /// # Arguments
    ///
    /// * `data` - Raw bytes of the CRW file
    ///
    /// # Returns
    ///
    /// * `Ok(GmcyGrid)` - Fully populated sensor grid
    /// * `Err(ConversionError)` - Wrong container or truncated data
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use powershot_a5_rs::image_pipeline::{CrwReader, RawImageReader};
    ///
    /// let raw_bytes = std::fs::read("image.crw").unwrap();
    /// let grid = CrwReader.read_raw(&raw_bytes).unwrap();
    /// assert_eq!(grid.width(), 960);
    /// ```
    fn read_raw(&self, data: &[u8]) -> Result<GmcyGrid> {
        Self::validate_header(data)?;

        debug!("Unpacking CRW image, {} bytes", data.len());

        let expected = Self::expected_len();
        if data.len() < expected {
            return Err(ConversionError::TruncatedInputError {
                expected,
                got: data.len(),
            });
        }
        if data.len() > expected {
            warn!("Ignoring {} trailing bytes after the last row", data.len() - expected);
        }

        let mut grid = GmcyGrid::sensor();
        let mut samples = [0u16; SAMPLES_PER_RECORD];

        for (row, record) in data[HEADER_LEN..expected].chunks_exact(RECORD_LEN).enumerate() {
            let packed = &record[..SENSOR_WIDTH * GROUP_LEN / 8];
            for (group, pix) in packed.chunks_exact(GROUP_LEN).zip(samples.chunks_exact_mut(8)) {
                unpack_group(group, pix);
            }

            for (col, (pixel, &sample)) in grid.row_mut(row).iter_mut().zip(&samples).enumerate() {
                *pixel = [0; 4];
                pixel[filter_color(row, col).index()] = sample << SAMPLE_SHIFT;
            }
        }

        debug!("Unpacked {}x{} GMCY grid", SENSOR_WIDTH, SENSOR_HEIGHT);

        Ok(grid)
    }
}
