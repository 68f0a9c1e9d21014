use tracing::{info, instrument};
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::image_pipeline::{
    common::error::{ConversionError, Result},
    debayer::GmcyDebayer,
    raw::{CrwReader, RawImageReader},
    ppm::{ConversionConfig, PpmWriter, StandardPpmWriter},
};

/// Extension given to rendered images.
pub const OUTPUT_EXTENSION: &str = "ppm";

/// Output path for an input file: the same path with its extension replaced by `.ppm`.
pub fn output_path_for<P: AsRef<Path>>(input_path: P) -> PathBuf {
    input_path.as_ref().with_extension(OUTPUT_EXTENSION)
}

pub struct CrwToPpmPipeline<R: RawImageReader, W: PpmWriter> {
    reader: R,
    writer: W,
    config: ConversionConfig,
}

impl CrwToPpmPipeline<CrwReader, StandardPpmWriter> {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            reader: CrwReader,
            writer: StandardPpmWriter,
            config,
        }
    }
}

impl<R: RawImageReader, W: PpmWriter> CrwToPpmPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: ConversionConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    /// Decodes, demosaics and renders one CRW image to `output`.
    ///
    /// Nothing is written to `output` unless decoding succeeds.
    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<()> {
        info!("Starting CRW to PPM conversion");

        let mut grid = {
            let _span = tracing::info_span!("decode_raw").entered();
            self.reader.read_raw(input_data)?
        };

        {
            let _span = tracing::info_span!("debayer",
                width = grid.width(),
                height = grid.height(),
                refine_passes = self.config.refine_passes
            ).entered();
            GmcyDebayer::new(self.config.refine_passes).process(&mut grid)?;
        }

        {
            let _span = tracing::info_span!("render_ppm").entered();
            self.writer.write_ppm(&grid, output, &self.config)?;
        }

        info!(
            width = grid.width() - 2,
            height = grid.height() - 2,
            "Conversion complete"
        );
        Ok(())
    }

    fn read_input(input_path: &Path) -> Result<Vec<u8>> {
        let _span = tracing::info_span!("read_input_file").entered();
        std::fs::read(input_path).map_err(|e| {
            ConversionError::InputReadError(format!("{}: {}", input_path.display(), e))
        })
    }

    /// Converts `input_path` into a new file at `output_path`.
    ///
    /// The image is rendered in memory, written to a temporary file next to the destination
    /// and only then moved over `output_path`. On failure no output file is left behind.
    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let input_data = Self::read_input(input_path)?;

        let mut rendered = Vec::new();
        self.convert(&input_data, &mut rendered)?;

        let output_error = |e: std::io::Error| {
            ConversionError::OutputWriteError(format!("{}: {}", output_path.display(), e))
        };

        let output_dir = match output_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        let _span = tracing::info_span!("persist_output", bytes = rendered.len()).entered();
        let mut staging = NamedTempFile::new_in(output_dir).map_err(output_error)?;
        staging.write_all(&rendered).map_err(output_error)?;
        staging.flush().map_err(output_error)?;
        staging.persist(output_path).map_err(|e| output_error(e.error))?;

        Ok(())
    }

    /// Converts `input_path` and appends the image to `output`.
    ///
    /// The image is rendered in memory first, so a failed conversion writes nothing.
    #[instrument(skip(self, input_path, output))]
    pub fn convert_file_to<P: AsRef<Path>>(&self, input_path: P, output: &mut dyn Write) -> Result<()> {
        let input_path = input_path.as_ref();
        info!(input = %input_path.display(), "Converting file to stream");

        let input_data = Self::read_input(input_path)?;

        let mut rendered = Vec::new();
        self.convert(&input_data, &mut rendered)?;

        let stream_error = |e: std::io::Error| {
            ConversionError::OutputWriteError(format!("stream: {}", e))
        };
        output.write_all(&rendered).map_err(stream_error)?;
        output.flush().map_err(stream_error)?;
        Ok(())
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ConversionConfig) {
        self.config = config;
    }
}
