//! Near-white background removal.
//!
//! Plain per-channel thresholding: every pixel is judged on its own RGB
//! values, independent of its neighbors and its position. No color-distance
//! metric and no edge feathering.

use image::{Rgba, RgbaImage};

use crate::config::StripConfig;

/// Replace near-white pixels with transparent white.
///
/// A pixel matches when R, G and B each exceed the cutoff (strictly
/// greater-than); the pixel's own alpha does not participate. Matching pixels
/// become `(255, 255, 255, replacement_alpha)`, everything else passes
/// through unchanged.
///
/// The pass is idempotent: a replaced pixel still satisfies the cutoff and
/// maps to itself on a second run.
pub fn strip_near_white(mut img: RgbaImage, opts: &StripConfig) -> RgbaImage {
    let replacement = Rgba([255, 255, 255, opts.replacement_alpha]);
    for pixel in img.pixels_mut() {
        let Rgba([r, g, b, _]) = *pixel;
        if r > opts.threshold && g > opts.threshold && b > opts.threshold {
            *pixel = replacement;
        }
    }
    img
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> StripConfig {
        StripConfig::default()
    }

    fn single_pixel(pixel: Rgba<u8>) -> RgbaImage {
        RgbaImage::from_pixel(1, 1, pixel)
    }

    #[test]
    fn test_white_pixel_becomes_transparent() {
        let out = strip_near_white(single_pixel(Rgba([255, 255, 255, 255])), &opts());
        assert_eq!(out.get_pixel(0, 0), &Rgba([255, 255, 255, 0]));
    }

    #[test]
    fn test_threshold_is_strictly_greater_than() {
        // 241 on every channel matches
        let out = strip_near_white(single_pixel(Rgba([241, 241, 241, 255])), &opts());
        assert_eq!(out.get_pixel(0, 0), &Rgba([255, 255, 255, 0]));

        // 240 on every channel does not
        let out = strip_near_white(single_pixel(Rgba([240, 240, 240, 255])), &opts());
        assert_eq!(out.get_pixel(0, 0), &Rgba([240, 240, 240, 255]));
    }

    #[test]
    fn test_all_channels_must_exceed() {
        let out = strip_near_white(single_pixel(Rgba([255, 255, 240, 255])), &opts());
        assert_eq!(out.get_pixel(0, 0), &Rgba([255, 255, 240, 255]));
    }

    #[test]
    fn test_non_matching_pixels_pass_through() {
        let out = strip_near_white(single_pixel(Rgba([12, 34, 56, 78])), &opts());
        assert_eq!(out.get_pixel(0, 0), &Rgba([12, 34, 56, 78]));
    }

    #[test]
    fn test_match_ignores_source_alpha() {
        // A nearly-transparent near-white pixel is still background
        let out = strip_near_white(single_pixel(Rgba([250, 250, 250, 7])), &opts());
        assert_eq!(out.get_pixel(0, 0), &Rgba([255, 255, 255, 0]));
    }

    #[test]
    fn test_idempotence() {
        let mut img = RgbaImage::new(4, 4);
        for (i, pixel) in img.pixels_mut().enumerate() {
            // Mix of background, boundary and foreground pixels
            let v = (i * 17).min(255) as u8;
            *pixel = Rgba([v, v, v, 255]);
        }

        let once = strip_near_white(img, &opts());
        let twice = strip_near_white(once.clone(), &opts());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_custom_threshold_and_alpha() {
        let custom = StripConfig {
            threshold: 100,
            replacement_alpha: 8,
        };
        let out = strip_near_white(single_pixel(Rgba([101, 101, 101, 255])), &custom);
        assert_eq!(out.get_pixel(0, 0), &Rgba([255, 255, 255, 8]));
    }

    #[test]
    fn test_threshold_255_disables_the_pass() {
        let custom = StripConfig {
            threshold: 255,
            replacement_alpha: 0,
        };
        let out = strip_near_white(single_pixel(Rgba([255, 255, 255, 255])), &custom);
        assert_eq!(out.get_pixel(0, 0), &Rgba([255, 255, 255, 255]));
    }
}
