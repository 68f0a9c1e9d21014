//! GMCY to RGB conversion.
//!
//! Response of each filter to the primaries, on a scale of 0-100:
//!
//! ```text
//!             red  green  blue
//!   green      11     86     8
//!   magenta    50     29    51
//!   cyan       11     92    75
//!   yellow     81     98     8
//! ```
//!
//! [`GMCY_TO_RGB`] is derived from this table.

use crate::image_pipeline::raw::Gmcy;

/// Rows give red, green and blue; columns are green, magenta, cyan, yellow.
pub const GMCY_TO_RGB: [[f32; 4]; 3] = [
    [-2.400719, 3.539540, -2.515721, 3.421035],
    [4.013642, -1.710916, 0.690795, 0.417247],
    [-2.345669, 3.385090, 3.521597, -2.249256],
];

/// Multipliers applied to each output row of [`GMCY_TO_RGB`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorBalance {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl Default for ColorBalance {
    fn default() -> Self {
        Self {
            red: 1.0,
            green: 1.0,
            blue: 1.0,
        }
    }
}

/// RGB value of one pixel plus its squared magnitude. Channels may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RgbSample {
    pub rgb: [f32; 3],
    pub magnitude: f32,
}

#[derive(Debug, Clone)]
pub struct ColorConverter {
    coeff: [[f32; 4]; 3],
}

impl ColorConverter {
    pub fn new(balance: ColorBalance) -> Self {
        let mut coeff = GMCY_TO_RGB;
        let multipliers = [balance.red, balance.green, balance.blue];
        for (row, mul) in coeff.iter_mut().zip(multipliers) {
            for c in row.iter_mut() {
                *c *= mul;
            }
        }
        Self { coeff }
    }

    #[inline]
    pub fn convert(&self, gmcy: &Gmcy) -> RgbSample {
        let mut sample = RgbSample::default();
        for (out, row) in sample.rgb.iter_mut().zip(&self.coeff) {
            *out = row.iter().zip(gmcy).map(|(k, &v)| k * f32::from(v)).sum();
            sample.magnitude += *out * *out;
        }
        sample
    }
}

impl Default for ColorConverter {
    fn default() -> Self {
        Self::new(ColorBalance::default())
    }
}
