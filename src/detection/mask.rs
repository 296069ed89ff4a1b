use image::{GrayImage, Luma, RgbImage};

use crate::models::ColorRange;

pub const FOREGROUND: u8 = 255;

/// Build a binary membership mask over an HSV image: a pixel is foreground
/// iff it falls inside at least one of the target's ranges. The OR across
/// ranges is what lets hue-wrapping colors match as two disjoint ranges.
pub fn build_mask(hsv: &RgbImage, ranges: &[ColorRange]) -> GrayImage {
    let mut mask = GrayImage::new(hsv.width(), hsv.height());
    for (x, y, pixel) in hsv.enumerate_pixels() {
        if ranges.iter().any(|range| range.contains(pixel.0)) {
            mask.put_pixel(x, y, Luma([FOREGROUND]));
        }
    }
    mask
}
