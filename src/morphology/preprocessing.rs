use image::{DynamicImage, GenericImageView, GrayImage, Luma, Rgb, RgbImage};
use imageproc::contrast::{ThresholdType, threshold};
use imageproc::map::map_colors;

/// Convert image to grayscale with BT.601 weights (0.299 R + 0.587 G + 0.114 B).
///
/// Uses 14-bit fixed point with round-half-up, so results match the common
/// 8-bit color conversion exactly.
pub fn to_grayscale(img: &DynamicImage) -> GrayImage {
    match img {
        DynamicImage::ImageLuma8(gray) => gray.clone(),
        _ => map_colors(&img.to_rgb8(), |Rgb([r, g, b])| Luma([bt601_luma(r, g, b)])),
    }
}

fn bt601_luma(r: u8, g: u8, b: u8) -> u8 {
    const R: u32 = 4899;
    const G: u32 = 9617;
    const B: u32 = 1868;
    const SHIFT: u32 = 14;
    let sum = R * r as u32 + G * g as u32 + B * b as u32 + (1 << (SHIFT - 1));
    (sum >> SHIFT) as u8
}

/// Inverse binary threshold: pixels brighter than `cutoff` become 0, all others 255
pub fn threshold_inverse(img: &GrayImage, cutoff: u8) -> GrayImage {
    threshold(img, cutoff, ThresholdType::BinaryInverted)
}

/// Replace every channel value `v` with `255 - v` (alpha is kept)
pub fn invert(img: &DynamicImage) -> DynamicImage {
    let mut inverted = img.clone();
    inverted.invert();
    inverted
}

/// Copy pixels of `src` where `mask` is non-zero; everything else is left black.
///
/// `mask` must have the dimensions of `src`.
pub fn masked_copy(src: &DynamicImage, mask: &GrayImage) -> DynamicImage {
    debug_assert_eq!(src.dimensions(), mask.dimensions());

    match src {
        DynamicImage::ImageLuma8(gray) => {
            let out = GrayImage::from_fn(gray.width(), gray.height(), |x, y| {
                if mask.get_pixel(x, y)[0] != 0 {
                    *gray.get_pixel(x, y)
                } else {
                    Luma([0])
                }
            });
            DynamicImage::ImageLuma8(out)
        }
        _ => {
            let rgb = src.to_rgb8();
            let out = RgbImage::from_fn(rgb.width(), rgb.height(), |x, y| {
                if mask.get_pixel(x, y)[0] != 0 {
                    *rgb.get_pixel(x, y)
                } else {
                    Rgb([0, 0, 0])
                }
            });
            DynamicImage::ImageRgb8(out)
        }
    }
}
