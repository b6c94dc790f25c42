mod common;

use approx::assert_relative_eq;
use image::Rgba;

use bilevel_core::buffer::PixelImage;
use bilevel_core::error::BilevelError;
use bilevel_core::execution::ExecutionContext;
use bilevel_core::filters::grayscale::{Grayscale, GrayscaleMode};
use bilevel_core::filters::ImageProcessor;
use bilevel_core::pixel::Pixel;
use bilevel_core::region::Rect;

use common::{changed_pixels, color_pattern};

fn is_gray(px: &Rgba<u8>) -> bool {
    px[0] == px[1] && px[1] == px[2]
}

#[test]
fn test_full_amount_equalizes_channels() {
    let mut img = color_pattern(16, 9);
    Grayscale::default().run(&mut img, Rect::full(16, 9), &ExecutionContext::new());
    assert!(img.pixels().all(is_gray));
}

#[test]
fn test_float_pixels_equalize_exactly() {
    let mut img = PixelImage::filled(3, 3, Rgba([0.9f32, 0.1, 0.4, 0.5]));
    Grayscale::default().run(&mut img, Rect::full(3, 3), &ExecutionContext::new());
    for px in img.pixels() {
        assert_eq!(px[0], px[1]);
        assert_eq!(px[1], px[2]);
        assert_eq!(px[3], 0.5);
    }
}

#[test]
fn test_bt709_weights_for_pure_red() {
    let g = Grayscale::full(GrayscaleMode::Bt709).convert(Rgba([1.0f32, 0.0, 0.0, 1.0]));
    assert_relative_eq!(g[0], 0.2126, epsilon = 1e-6);
}

#[test]
fn test_bt601_weights_for_pure_red() {
    let g = Grayscale::full(GrayscaleMode::Bt601).convert(Rgba([1.0f32, 0.0, 0.0, 1.0]));
    assert_relative_eq!(g[0], 0.299, epsilon = 1e-6);
}

#[test]
fn test_gray_pixels_pass_through() {
    let g = Grayscale::default();
    for v in [0.0f32, 0.37, 0.5, 1.0] {
        let px = Rgba([v, v, v, 1.0]);
        assert_eq!(g.convert(px), px);
    }
    assert_eq!(g.convert(Rgba::<u8>::white()), Rgba::<u8>::white());
    assert_eq!(g.convert(Rgba::<u8>::black()), Rgba::<u8>::black());
}

#[test]
fn test_idempotent() {
    let exec = ExecutionContext::new();
    let mut img = color_pattern(12, 12);
    Grayscale::default().run(&mut img, Rect::full(12, 12), &exec);
    let once = img.clone();
    Grayscale::default().run(&mut img, Rect::full(12, 12), &exec);
    assert_eq!(img, once);
}

#[test]
fn test_zero_amount_is_noop() {
    let mut img = color_pattern(8, 8);
    let original = img.clone();
    let g = Grayscale::new(GrayscaleMode::Bt709, 0.0).unwrap();
    g.run(&mut img, Rect::full(8, 8), &ExecutionContext::new());
    assert_eq!(img, original);
}

#[test]
fn test_partial_amount_moves_toward_luminance() {
    let g = Grayscale::new(GrayscaleMode::Bt709, 0.5).unwrap();
    let out = g.convert(Rgba([1.0f32, 0.0, 0.0, 1.0]));
    assert_relative_eq!(out[0], (1.0 + 0.2126) / 2.0, epsilon = 1e-6);
    assert_relative_eq!(out[1], 0.2126 / 2.0, epsilon = 1e-6);
}

#[test]
fn test_construction_keeps_parameters() {
    let g = Grayscale::new(GrayscaleMode::Bt601, 0.25).unwrap();
    assert_eq!(g.mode(), GrayscaleMode::Bt601);
    assert_eq!(g.amount(), 0.25);

    let full = Grayscale::default();
    assert_eq!(full.mode(), GrayscaleMode::Bt709);
    assert_eq!(full.amount(), 1.0);
}

#[test]
fn test_invalid_amount_rejected() {
    for amount in [-0.1f32, 1.1, f32::NAN] {
        match Grayscale::new(GrayscaleMode::Bt601, amount) {
            Err(BilevelError::Configuration { name, min, max, .. }) => {
                assert_eq!(name, "amount");
                assert_eq!((min, max), (0.0, 1.0));
            }
            other => panic!("expected configuration error for {amount}, got {other:?}"),
        }
    }
}

#[test]
fn test_only_requested_region_changes() {
    let original = color_pattern(10, 10);
    let mut img = original.clone();
    Grayscale::default().run(&mut img, Rect::new(2, 4, 3, 3), &ExecutionContext::new());
    for (x, y) in changed_pixels(&original, &img) {
        assert!((2..5).contains(&x) && (4..7).contains(&y), "({x},{y}) changed");
    }
    assert!(is_gray(img.get(3, 5).unwrap()));
}

#[test]
fn test_mode_display() {
    assert_eq!(format!("{}", GrayscaleMode::Bt709), "BT.709");
    assert_eq!(format!("{}", GrayscaleMode::Bt601), "BT.601");
    assert_eq!(GrayscaleMode::default(), GrayscaleMode::Bt709);
}
