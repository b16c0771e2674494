use image::{DynamicImage, GrayImage, ImageFormat, Luma, Rgb, RgbImage};
use tempfile::NamedTempFile;

/// Side length of the dark squares drawn by [`make_scene`]
pub const SQUARE_SIDE: u32 = 20;

/// White RGB canvas with a dark filled square at each `(x, y)` top-left corner.
///
/// Squares are [`SQUARE_SIDE`] pixels wide; keep them at least 60 pixels apart so
/// the default closing does not merge them.
pub fn make_scene(width: u32, height: u32, squares: &[(u32, u32)]) -> RgbImage {
    let mut img = RgbImage::from_pixel(width, height, Rgb([255, 255, 255]));
    for &(sx, sy) in squares {
        fill_rect(&mut img, sx, sy, SQUARE_SIDE, SQUARE_SIDE, Rgb([20, 20, 20]));
    }
    img
}

/// Fill an axis-aligned rectangle, clipped to the image
pub fn fill_rect(img: &mut RgbImage, x: u32, y: u32, w: u32, h: u32, color: Rgb<u8>) {
    for py in y..(y + h).min(img.height()) {
        for px in x..(x + w).min(img.width()) {
            img.put_pixel(px, py, color);
        }
    }
}

/// Black grayscale image with one white pixel at `(x, y)`
pub fn single_point(width: u32, height: u32, x: u32, y: u32) -> DynamicImage {
    let mut img = GrayImage::new(width, height);
    img.put_pixel(x, y, Luma([255]));
    DynamicImage::ImageLuma8(img)
}

/// Number of non-zero pixels in a grayscale raster
pub fn count_lit(img: &DynamicImage) -> usize {
    img.to_luma8().pixels().filter(|p| p[0] != 0).count()
}

/// Saves `img` into a temp file with the given extension.
/// The file will be automatically cleaned up when dropped.
pub fn save_temp(img: &DynamicImage, format: ImageFormat, suffix: &str) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp image file");
    img.save_with_format(file.path(), format)
        .expect("Failed to save test image");
    file
}

/// Temp file holding bytes that no decoder accepts
pub fn garbage_file() -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".bmp")
        .tempfile()
        .expect("Failed to create temp file");
    std::fs::write(file.path(), b"definitely not an image").expect("Failed to write temp file");
    file
}
