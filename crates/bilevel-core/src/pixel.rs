use image::{Luma, Rgb, Rgba};

/// A pixel value that can be expressed as a normalized `[r, g, b, a]` vector.
///
/// Components are f32 in [0.0, 1.0]. Pixels are small `Copy` values compared
/// by value; filters read them through `to_vector4` and write them back through
/// `from_vector4`, so any storage layout works as long as the round trip is
/// stable for values the layout can represent.
pub trait Pixel: Copy + PartialEq + Send + Sync + 'static {
    /// Convert to normalized `[r, g, b, a]`.
    fn to_vector4(&self) -> [f32; 4];

    /// Build a pixel from normalized `[r, g, b, a]`. Out-of-range components are clamped.
    fn from_vector4(v: [f32; 4]) -> Self;

    /// Opaque white.
    fn white() -> Self {
        Self::from_vector4([1.0, 1.0, 1.0, 1.0])
    }

    /// Opaque black.
    fn black() -> Self {
        Self::from_vector4([0.0, 0.0, 0.0, 1.0])
    }
}

fn unorm8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn unorm16(v: f32) -> u16 {
    (v.clamp(0.0, 1.0) * 65535.0).round() as u16
}

impl Pixel for Rgba<u8> {
    fn to_vector4(&self) -> [f32; 4] {
        let [r, g, b, a] = self.0;
        [
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        ]
    }

    fn from_vector4(v: [f32; 4]) -> Self {
        Rgba([unorm8(v[0]), unorm8(v[1]), unorm8(v[2]), unorm8(v[3])])
    }
}

impl Pixel for Rgba<u16> {
    fn to_vector4(&self) -> [f32; 4] {
        let [r, g, b, a] = self.0;
        [
            r as f32 / 65535.0,
            g as f32 / 65535.0,
            b as f32 / 65535.0,
            a as f32 / 65535.0,
        ]
    }

    fn from_vector4(v: [f32; 4]) -> Self {
        Rgba([unorm16(v[0]), unorm16(v[1]), unorm16(v[2]), unorm16(v[3])])
    }
}

impl Pixel for Rgba<f32> {
    fn to_vector4(&self) -> [f32; 4] {
        self.0
    }

    fn from_vector4(v: [f32; 4]) -> Self {
        Rgba(v.map(|c| c.clamp(0.0, 1.0)))
    }
}

/// Opaque RGB; alpha reads as 1.0 and is dropped on write.
impl Pixel for Rgb<u8> {
    fn to_vector4(&self) -> [f32; 4] {
        let [r, g, b] = self.0;
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
    }

    fn from_vector4(v: [f32; 4]) -> Self {
        Rgb([unorm8(v[0]), unorm8(v[1]), unorm8(v[2])])
    }
}

/// Single-channel luma. Expands to `[l, l, l, 1.0]`; writes keep the red component.
impl Pixel for Luma<u8> {
    fn to_vector4(&self) -> [f32; 4] {
        let l = self.0[0] as f32 / 255.0;
        [l, l, l, 1.0]
    }

    fn from_vector4(v: [f32; 4]) -> Self {
        Luma([unorm8(v[0])])
    }
}
