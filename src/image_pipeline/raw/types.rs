//! RAW image data types

/// Sensor rows in a PowerShot A5 frame.
pub const SENSOR_HEIGHT: usize = 776;
/// Meaningful sensor columns per row.
pub const SENSOR_WIDTH: usize = 960;

/// One pixel's green, magenta, cyan and yellow values, indexed by [`FilterColor`].
///
/// [`FilterColor`]: crate::image_pipeline::raw::FilterColor
pub type Gmcy = [u16; 4];

/// Fixed-size grid of GMCY samples, stored row-major.
///
/// Straight after unpacking only the channel picked by the filter pattern is set at each
/// pixel; the other three are zero. The interpolation passes fill them in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GmcyGrid {
    width: usize,
    height: usize,
    data: Vec<Gmcy>,
}

impl GmcyGrid {
    /// Creates a zeroed grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![[0; 4]; width * height],
        }
    }

    /// Creates a zeroed grid with the sensor's dimensions.
    pub fn sensor() -> Self {
        Self::new(SENSOR_WIDTH, SENSOR_HEIGHT)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.height && col < self.width,
            "pixel ({row},{col}) outside {}x{} grid",
            self.width,
            self.height
        );
        row * self.width + col
    }

    #[inline]
    pub fn pixel(&self, row: usize, col: usize) -> &Gmcy {
        &self.data[self.offset(row, col)]
    }

    #[inline]
    pub fn pixel_mut(&mut self, row: usize, col: usize) -> &mut Gmcy {
        let offset = self.offset(row, col);
        &mut self.data[offset]
    }

    pub fn row(&self, row: usize) -> &[Gmcy] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.width]
    }

    pub fn row_mut(&mut self, row: usize) -> &mut [Gmcy] {
        let start = self.offset(row, 0);
        let width = self.width;
        &mut self.data[start..start + width]
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Gmcy] {
        &self.data
    }
}
