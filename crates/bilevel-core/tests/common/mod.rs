use bilevel_core::buffer::PixelImage;
use image::Rgba;

/// Gray f32 pixel with opaque alpha.
pub fn gray(v: f32) -> Rgba<f32> {
    Rgba([v, v, v, 1.0])
}

/// Single-row f32 image from gray values.
pub fn gray_row(values: &[f32]) -> PixelImage<Rgba<f32>> {
    PixelImage::from_pixels(values.len(), 1, values.iter().map(|&v| gray(v)).collect())
        .expect("pixel count matches dimensions")
}

/// Deterministic, non-gray 8-bit test pattern.
pub fn color_pattern(width: usize, height: usize) -> PixelImage<Rgba<u8>> {
    let pixels = (0..height)
        .flat_map(|y| {
            (0..width).map(move |x| {
                Rgba([
                    ((x * 37 + y * 11) % 256) as u8,
                    ((x * 5 + y * 53) % 256) as u8,
                    ((x * 91 + y * 7 + 13) % 256) as u8,
                    255,
                ])
            })
        })
        .collect();
    PixelImage::from_pixels(width, height, pixels).expect("pixel count matches dimensions")
}

/// Coordinates where `a` and `b` differ.
pub fn changed_pixels<P: PartialEq>(a: &PixelImage<P>, b: &PixelImage<P>) -> Vec<(usize, usize)> {
    let mut changed = Vec::new();
    for ((y, x), p) in a.data.indexed_iter() {
        if b.data[[y, x]] != *p {
            changed.push((x, y));
        }
    }
    changed
}
