use image::ImageBuffer;
use ndarray::{Array2, ArrayViewMut1};

use crate::error::{BilevelError, Result};
use crate::pixel::Pixel;

/// An in-memory image that filters mutate in place.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelImage<P> {
    /// Pixel data, row-major, shape = (height, width)
    pub data: Array2<P>,
}

impl<P: Pixel> PixelImage<P> {
    pub fn new(data: Array2<P>) -> Self {
        Self { data }
    }

    /// Create a `width` x `height` image filled with `fill`.
    pub fn filled(width: usize, height: usize, fill: P) -> Self {
        Self::new(Array2::from_elem((height, width), fill))
    }

    /// Build from row-major pixels. Fails if `pixels.len() != width * height`.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<P>) -> Result<Self> {
        let data = Array2::from_shape_vec((height, width), pixels)
            .map_err(|_| BilevelError::InvalidDimensions { width, height })?;
        Ok(Self::new(data))
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&P> {
        self.data.get((y, x))
    }

    /// Mutable access to row `y`. Panics if `y >= height`.
    pub fn row_mut(&mut self, y: usize) -> ArrayViewMut1<'_, P> {
        self.data.row_mut(y)
    }

    pub fn pixels(&self) -> impl Iterator<Item = &P> {
        self.data.iter()
    }
}

impl<P> PixelImage<P>
where
    P: Pixel + image::Pixel,
{
    /// Copy an `image` crate buffer into a `PixelImage`.
    pub fn from_image_buffer(buffer: &ImageBuffer<P, Vec<P::Subpixel>>) -> Self {
        let (w, h) = buffer.dimensions();
        let data = Array2::from_shape_fn((h as usize, w as usize), |(row, col)| {
            *buffer.get_pixel(col as u32, row as u32)
        });
        Self::new(data)
    }

    /// Copy into an `image` crate buffer.
    pub fn to_image_buffer(&self) -> ImageBuffer<P, Vec<P::Subpixel>> {
        ImageBuffer::from_fn(self.width() as u32, self.height() as u32, |x, y| {
            self.data[[y as usize, x as usize]]
        })
    }
}
