use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::buffer::PixelImage;
use crate::consts::{
    BT601_LUMINANCE_B, BT601_LUMINANCE_G, BT601_LUMINANCE_R, BT709_LUMINANCE_B,
    BT709_LUMINANCE_G, BT709_LUMINANCE_R, GRAYSCALE_FULL_AMOUNT, UNIT_MAX, UNIT_MIN,
};
use crate::error::{BilevelError, Result};
use crate::execution::{for_each_pixel_in_rows, ExecutionContext};
use crate::pixel::Pixel;
use crate::region::Rect;

use super::ImageProcessor;

/// Luminance weighting used to collapse RGB into a single gray value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum GrayscaleMode {
    /// ITU-R BT.709 (HDTV) weights.
    #[default]
    Bt709,
    /// ITU-R BT.601 (SDTV) weights.
    Bt601,
}

impl GrayscaleMode {
    pub fn weights(&self) -> [f32; 3] {
        match self {
            Self::Bt709 => [BT709_LUMINANCE_R, BT709_LUMINANCE_G, BT709_LUMINANCE_B],
            Self::Bt601 => [BT601_LUMINANCE_R, BT601_LUMINANCE_G, BT601_LUMINANCE_B],
        }
    }
}

impl std::fmt::Display for GrayscaleMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bt709 => write!(f, "BT.709"),
            Self::Bt601 => write!(f, "BT.601"),
        }
    }
}

/// Blend each pixel toward its luminance by `amount`.
///
/// At `amount = 1.0` every processed pixel ends with equal color channels.
/// Pixels that are already gray are left untouched, so running the filter
/// twice changes nothing the second time. Alpha is preserved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grayscale {
    mode: GrayscaleMode,
    amount: f32,
}

impl Grayscale {
    /// `amount` must lie in [0.0, 1.0].
    pub fn new(mode: GrayscaleMode, amount: f32) -> Result<Self> {
        BilevelError::check_range("amount", amount, UNIT_MIN, UNIT_MAX)?;
        Ok(Self { mode, amount })
    }

    /// Full-strength conversion, as used ahead of thresholding.
    pub fn full(mode: GrayscaleMode) -> Self {
        Self {
            mode,
            amount: GRAYSCALE_FULL_AMOUNT,
        }
    }

    pub fn mode(&self) -> GrayscaleMode {
        self.mode
    }

    pub fn amount(&self) -> f32 {
        self.amount
    }

    /// Grayscale value of one pixel under this filter's settings.
    pub fn convert<P: Pixel>(&self, pixel: P) -> P {
        let [r, g, b, a] = pixel.to_vector4();
        if r == g && g == b {
            return pixel;
        }
        let [kr, kg, kb] = self.mode.weights();
        let lum = kr * r + kg * g + kb * b;
        if self.amount >= UNIT_MAX {
            return P::from_vector4([lum, lum, lum, a]);
        }
        let mix = |c: f32| c + (lum - c) * self.amount;
        P::from_vector4([mix(r), mix(g), mix(b), a])
    }
}

impl Default for Grayscale {
    fn default() -> Self {
        Self::full(GrayscaleMode::default())
    }
}

impl<P: Pixel> ImageProcessor<P> for Grayscale {
    fn apply(&self, image: &mut PixelImage<P>, rect: Rect, exec: &ExecutionContext) {
        let region = rect.resolve(image.width(), image.height());
        debug!(mode = %self.mode, amount = self.amount, ?region, "Grayscale pass");
        for_each_pixel_in_rows(image, &region, exec, |px| *px = self.convert(*px));
    }
}
