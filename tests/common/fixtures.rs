use image::{Rgb, RgbImage};

/// Solid blue, lands in the built-in "earth" HSV window.
pub const EARTH_BLUE: Rgb<u8> = Rgb([0, 0, 255]);
/// Solid red, lands in the built-in "mars" HSV window (first range).
pub const MARS_RED: Rgb<u8> = Rgb([255, 0, 0]);
/// Black background, outside both windows (value below threshold).
pub const BACKGROUND: Rgb<u8> = Rgb([0, 0, 0]);

pub fn blank_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_pixel(width, height, BACKGROUND)
}

/// Paint a filled disk onto the image.
pub fn draw_disk(img: &mut RgbImage, cx: i32, cy: i32, radius: i32, color: Rgb<u8>) {
    for y in (cy - radius).max(0)..=(cy + radius).min(img.height() as i32 - 1) {
        for x in (cx - radius).max(0)..=(cx + radius).min(img.width() as i32 - 1) {
            let dx = x - cx;
            let dy = y - cy;
            if dx * dx + dy * dy <= radius * radius {
                img.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}

/// 200x200 image with one earth-colored disk at (50,50), radius 20.
pub fn single_disk_image() -> RgbImage {
    let mut img = blank_image(200, 200);
    draw_disk(&mut img, 50, 50, 20, EARTH_BLUE);
    img
}

/// Scenario image with a second mars-colored disk at (50,150).
pub fn two_disk_image() -> RgbImage {
    let mut img = single_disk_image();
    draw_disk(&mut img, 50, 150, 15, MARS_RED);
    img
}
