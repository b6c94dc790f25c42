use image::Rgba;

use crate::buffer::PixelImage;
use crate::error::Result;
use crate::execution::ExecutionContext;
use crate::filters::binary_threshold::BinaryThreshold;
use crate::filters::grayscale::Grayscale;
use crate::filters::ImageProcessor;
use crate::region::Rect;

use super::config::FilterStep;

/// Validate a step's parameters and build its filter.
pub fn build_filter(step: &FilterStep) -> Result<Box<dyn ImageProcessor<Rgba<u8>>>> {
    let filter: Box<dyn ImageProcessor<Rgba<u8>>> = match step {
        FilterStep::Grayscale { mode, amount, .. } => Box::new(Grayscale::new(*mode, *amount)?),
        FilterStep::BinaryThreshold {
            threshold,
            upper,
            lower,
            ..
        } => Box::new(BinaryThreshold::new(*threshold)?.with_colors(Rgba(*upper), Rgba(*lower))),
    };
    Ok(filter)
}

/// Apply a single filter step to an image in place.
///
/// Fails only on invalid step parameters, before any pixel is touched.
pub fn apply_filter_step(
    image: &mut PixelImage<Rgba<u8>>,
    step: &FilterStep,
    exec: &ExecutionContext,
) -> Result<()> {
    let filter = build_filter(step)?;
    let rect = step
        .region()
        .unwrap_or_else(|| Rect::full(image.width(), image.height()));
    filter.run(image, rect, exec);
    Ok(())
}
