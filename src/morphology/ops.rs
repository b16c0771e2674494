use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};
use imageproc::map::{blue_channel, green_channel, red_channel};
use imageproc::morphology::{Mask, grayscale_dilate, grayscale_erode};

use super::element::StructuringElement;
use crate::models::MorphOp;

/// Apply `op` to every channel of `img` independently.
///
/// Grayscale inputs stay grayscale; every other color type is processed as RGB.
pub fn apply(img: &DynamicImage, op: MorphOp, element: &StructuringElement) -> DynamicImage {
    let mask = element.to_mask();
    match img {
        DynamicImage::ImageLuma8(gray) => DynamicImage::ImageLuma8(apply_mask(gray, op, &mask)),
        _ => {
            let rgb = img.to_rgb8();
            let channels = split_channels(&rgb).map(|channel| apply_mask(&channel, op, &mask));
            DynamicImage::ImageRgb8(merge_channels(&channels))
        }
    }
}

fn apply_mask(img: &GrayImage, op: MorphOp, mask: &Mask) -> GrayImage {
    match op {
        MorphOp::Erode => grayscale_erode(img, mask),
        MorphOp::Dilate => grayscale_dilate(img, mask),
    }
}

fn split_channels(img: &RgbImage) -> [GrayImage; 3] {
    [red_channel(img), green_channel(img), blue_channel(img)]
}

fn merge_channels(channels: &[GrayImage; 3]) -> RgbImage {
    let [r, g, b] = channels;
    RgbImage::from_fn(r.width(), r.height(), |x, y| {
        let Luma([rv]) = *r.get_pixel(x, y);
        let Luma([gv]) = *g.get_pixel(x, y);
        let Luma([bv]) = *b.get_pixel(x, y);
        Rgb([rv, gv, bv])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ElementShape;

    #[test]
    fn channels_round_trip() {
        let img = RgbImage::from_fn(4, 3, |x, y| Rgb([x as u8, y as u8, (x + y) as u8 * 10]));
        assert_eq!(merge_channels(&split_channels(&img)), img);
    }

    #[test]
    fn dilation_of_a_point_draws_the_element() {
        let mut img = GrayImage::new(7, 7);
        img.put_pixel(3, 3, Luma([255]));
        let element = StructuringElement::with_radius(ElementShape::Cross, 1).unwrap();

        let out = apply(&DynamicImage::ImageLuma8(img), MorphOp::Dilate, &element).to_luma8();
        let lit: Vec<(u32, u32)> = out
            .enumerate_pixels()
            .filter(|(_, _, p)| p[0] == 255)
            .map(|(x, y, _)| (x, y))
            .collect();
        assert_eq!(lit, vec![(3, 2), (2, 3), (3, 3), (4, 3), (3, 4)]);
    }
}
