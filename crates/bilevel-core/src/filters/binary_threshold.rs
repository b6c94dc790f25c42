use tracing::debug;

use crate::buffer::PixelImage;
use crate::consts::{UNIT_MAX, UNIT_MIN};
use crate::error::{BilevelError, Result};
use crate::execution::{for_each_pixel_in_rows, ExecutionContext};
use crate::pixel::Pixel;
use crate::region::Rect;

use super::grayscale::{Grayscale, GrayscaleMode};
use super::ImageProcessor;

/// Two-color thresholding of an image region.
///
/// `prepare` converts the requested rectangle to grayscale at full strength,
/// then `apply` replaces every pixel in the clipped region with `upper_color`
/// when its first channel is `>= threshold` and with `lower_color` otherwise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BinaryThreshold<P> {
    threshold: f32,
    upper_color: P,
    lower_color: P,
}

impl<P: Pixel> BinaryThreshold<P> {
    /// `threshold` must lie in [0.0, 1.0]. Colors default to white (upper) and black (lower).
    pub fn new(threshold: f32) -> Result<Self> {
        BilevelError::check_range("threshold", threshold, UNIT_MIN, UNIT_MAX)?;
        Ok(Self {
            threshold,
            upper_color: P::white(),
            lower_color: P::black(),
        })
    }

    pub fn with_colors(mut self, upper: P, lower: P) -> Self {
        self.upper_color = upper;
        self.lower_color = lower;
        self
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn upper_color(&self) -> P {
        self.upper_color
    }

    pub fn set_upper_color(&mut self, color: P) {
        self.upper_color = color;
    }

    pub fn lower_color(&self) -> P {
        self.lower_color
    }

    pub fn set_lower_color(&mut self, color: P) {
        self.lower_color = color;
    }

    /// Output color for a pixel that has already been converted to grayscale.
    pub fn classify(&self, pixel: P) -> P {
        // Any channel is the luminance once the pixel is gray.
        if pixel.to_vector4()[0] >= self.threshold {
            self.upper_color
        } else {
            self.lower_color
        }
    }
}

impl<P: Pixel> ImageProcessor<P> for BinaryThreshold<P> {
    fn prepare(&self, image: &mut PixelImage<P>, rect: Rect, exec: &ExecutionContext) {
        Grayscale::full(GrayscaleMode::Bt709).run(image, rect, exec);
    }

    fn apply(&self, image: &mut PixelImage<P>, rect: Rect, exec: &ExecutionContext) {
        let region = rect.resolve(image.width(), image.height());
        debug!(threshold = self.threshold, ?region, "Binary threshold pass");
        for_each_pixel_in_rows(image, &region, exec, |px| *px = self.classify(*px));
    }
}
