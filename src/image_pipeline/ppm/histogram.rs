use crate::image_pipeline::ppm::color::RgbSample;

pub const HISTOGRAM_BUCKETS: usize = 512;

/// Each bucket spans `1 << BUCKET_SHIFT` channel values.
pub const BUCKET_SHIFT: u32 = 10;

/// Share of the frame's pixel count allowed above the white point.
pub const HIGHLIGHT_FRACTION: f64 = 0.11;

/// Channel value histogram used to pick the white point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    buckets: [u32; HISTOGRAM_BUCKETS],
}

impl Histogram {
    pub fn new() -> Self {
        Self {
            buckets: [0; HISTOGRAM_BUCKETS],
        }
    }

    pub fn from_buckets(buckets: [u32; HISTOGRAM_BUCKETS]) -> Self {
        Self { buckets }
    }

    /// Counts one channel value. Negative values land in the bottom bucket and
    /// anything past the top in the last one.
    #[inline]
    pub fn add(&mut self, value: f32) {
        let bucket = (value as i32) >> BUCKET_SHIFT;
        self.buckets[bucket.clamp(0, HISTOGRAM_BUCKETS as i32 - 1) as usize] += 1;
    }

    /// Counts the three channels of a sample.
    pub fn add_sample(&mut self, sample: &RgbSample) {
        for &value in &sample.rgb {
            self.add(value);
        }
    }

    pub fn buckets(&self) -> &[u32; HISTOGRAM_BUCKETS] {
        &self.buckets
    }

    pub fn total(&self) -> u64 {
        self.buckets.iter().map(|&b| u64::from(b)).sum()
    }

    /// Walks down from the top bucket and returns the first bucket at which the running
    /// count exceeds `threshold`, or 0 if it never does. Bucket 0 itself is never counted.
    pub fn ceiling_bucket(&self, threshold: u64) -> usize {
        let mut total = 0u64;
        for bucket in (1..HISTOGRAM_BUCKETS).rev() {
            total += u64::from(self.buckets[bucket]);
            if total > threshold {
                return bucket;
            }
        }
        0
    }

    /// Highlight threshold for a frame of `pixel_count` pixels.
    pub fn highlight_threshold(pixel_count: usize) -> u64 {
        (pixel_count as f64 * HIGHLIGHT_FRACTION) as u64
    }

    /// Channel value treated as white.
    pub fn ceiling(&self, threshold: u64) -> f32 {
        (self.ceiling_bucket(threshold) << BUCKET_SHIFT) as f32
    }
}

impl Default for Histogram {
    fn default() -> Self {
        Self::new()
    }
}
