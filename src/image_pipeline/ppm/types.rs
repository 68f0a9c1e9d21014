//! Conversion configuration types

use crate::image_pipeline::ppm::color::ColorBalance;

/// Configuration for CRW to PPM conversion
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionConfig {
    /// Gamma applied to pixel brightness
    pub gamma: f32,
    /// Exposure multiplier
    pub brightness: f32,
    /// Per-channel multipliers on the GMCY to RGB matrix, for white balance
    pub color_balance: ColorBalance,
    /// Gain per `row & 3`, for removing horizontal banding. Raised to `gamma` before use.
    pub row_gains: [f32; 4],
    /// Number of refining interpolation passes after the coarse one
    pub refine_passes: usize,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            gamma: 0.8,
            brightness: 1.0,
            color_balance: ColorBalance::default(),
            row_gains: [1.0; 4],
            refine_passes: 1,
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    gamma: Option<f32>,
    brightness: Option<f32>,
    color_balance: Option<ColorBalance>,
    row_gains: Option<[f32; 4]>,
    refine_passes: Option<usize>,
}

impl ConversionConfigBuilder {
    pub fn gamma(mut self, gamma: f32) -> Self {
        self.gamma = Some(gamma);
        self
    }

    pub fn brightness(mut self, brightness: f32) -> Self {
        self.brightness = Some(brightness);
        self
    }

    pub fn color_balance(mut self, balance: ColorBalance) -> Self {
        self.color_balance = Some(balance);
        self
    }

    pub fn row_gains(mut self, gains: [f32; 4]) -> Self {
        self.row_gains = Some(gains);
        self
    }

    pub fn refine_passes(mut self, passes: usize) -> Self {
        self.refine_passes = Some(passes);
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            gamma: self.gamma.unwrap_or(default.gamma),
            brightness: self.brightness.unwrap_or(default.brightness),
            color_balance: self.color_balance.unwrap_or(default.color_balance),
            row_gains: self.row_gains.unwrap_or(default.row_gains),
            refine_passes: self.refine_passes.unwrap_or(default.refine_passes),
        }
    }
}
