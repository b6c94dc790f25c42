pub mod binary_threshold;
pub mod grayscale;

use crate::buffer::PixelImage;
use crate::execution::ExecutionContext;
use crate::pixel::Pixel;
use crate::region::Rect;

/// An in-place, region-scoped image filter.
///
/// The pipeline owner calls `prepare` and then `apply` with the same
/// arguments; `run` does both. Neither phase reports errors: parameters are
/// validated when the filter is built, and rectangles are clipped rather than
/// rejected.
pub trait ImageProcessor<P: Pixel> {
    /// Work that must complete before `apply` reads any pixel. Defaults to nothing.
    fn prepare(&self, _image: &mut PixelImage<P>, _rect: Rect, _exec: &ExecutionContext) {}

    fn apply(&self, image: &mut PixelImage<P>, rect: Rect, exec: &ExecutionContext);

    fn run(&self, image: &mut PixelImage<P>, rect: Rect, exec: &ExecutionContext) {
        self.prepare(image, rect, exec);
        self.apply(image, rect, exec);
    }
}
