use image::{Rgb, RgbImage};
use imageproc::map::map_colors;

/// Convert an RGB pixel to HSV with hue halved into 0-179 and
/// saturation/value scaled to full bytes, the same channel layout the
/// threshold ranges are written in.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> [u8; 3] {
    let r = r as f32 / 255.0;
    let g = g as f32 / 255.0;
    let b = b as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let hue_deg = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * (((g - b) / delta).rem_euclid(6.0))
    } else if max == g {
        60.0 * (((b - r) / delta) + 2.0)
    } else {
        60.0 * (((r - g) / delta) + 4.0)
    };

    let h = ((hue_deg / 2.0).round() as u16 % 180) as u8;
    let s = if max == 0.0 {
        0
    } else {
        (delta / max * 255.0).round() as u8
    };
    let v = (max * 255.0).round() as u8;

    [h, s, v]
}

/// Image-wide conversion. The result stores H, S, V in the three channels
/// of an `RgbImage` buffer; it is computed once per run and shared
/// read-only by every target's mask pass.
pub fn to_hsv(img: &RgbImage) -> RgbImage {
    map_colors(img, |p| Rgb(rgb_to_hsv(p[0], p[1], p[2])))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_colors_land_on_expected_hues() {
        assert_eq!(rgb_to_hsv(255, 0, 0), [0, 255, 255]);
        assert_eq!(rgb_to_hsv(0, 255, 0), [60, 255, 255]);
        assert_eq!(rgb_to_hsv(0, 0, 255), [120, 255, 255]);
    }

    #[test]
    fn grays_have_zero_saturation() {
        assert_eq!(rgb_to_hsv(0, 0, 0), [0, 0, 0]);
        assert_eq!(rgb_to_hsv(128, 128, 128), [0, 0, 128]);
        assert_eq!(rgb_to_hsv(255, 255, 255), [0, 0, 255]);
    }

    #[test]
    fn near_red_wraps_to_high_hue() {
        // A red nudged toward magenta sits just below the hue wrap point.
        let [h, _, _] = rgb_to_hsv(255, 0, 30);
        assert!(h >= 170, "expected wrapped red hue, got {h}");
    }

    #[test]
    fn image_conversion_matches_pixel_conversion() {
        let mut img = RgbImage::new(2, 1);
        img.put_pixel(0, 0, Rgb([12, 200, 99]));
        img.put_pixel(1, 0, Rgb([255, 128, 0]));
        let hsv = to_hsv(&img);
        assert_eq!(hsv.get_pixel(0, 0).0, rgb_to_hsv(12, 200, 99));
        assert_eq!(hsv.get_pixel(1, 0).0, rgb_to_hsv(255, 128, 0));
    }
}
