use ab_glyph::FontArc;
use image::{DynamicImage, Rgb, RgbImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_line_segment_mut, draw_text_mut, text_size};
use std::path::Path;

use crate::models::{BoundingBox, ContourSet, DetectedContour};

pub const CONTOUR_COLOR: Rgb<u8> = Rgb([0, 0, 255]);
pub const BOX_COLOR: Rgb<u8> = Rgb([0, 255, 0]);
pub const LARGEST_BOX_COLOR: Rgb<u8> = Rgb([255, 0, 0]);
pub const LABEL_COLOR: Rgb<u8> = Rgb([0, 0, 150]);

/// Label height in pixels
pub const LABEL_SCALE: f32 = 20.0;

/// Distance between the label baseline and the bottom edge
const LABEL_MARGIN: u32 = 5;

/// Fonts tried when no font file is given explicitly
const FONT_PATHS: [&str; 5] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Load `explicit` if given, otherwise the first readable system font
pub fn load_font(explicit: Option<&Path>) -> Option<FontArc> {
    if let Some(path) = explicit {
        match std::fs::read(path).map(FontArc::try_from_vec) {
            Ok(Ok(font)) => return Some(font),
            Ok(Err(e)) => log::warn!("Ignoring font {}: {}", path.display(), e),
            Err(e) => log::warn!("Ignoring font {}: {}", path.display(), e),
        }
    }

    for path in FONT_PATHS {
        if let Ok(data) = std::fs::read(path)
            && let Ok(font) = FontArc::try_from_vec(data)
        {
            log::debug!("Using font {}", path);
            return Some(font);
        }
    }

    None
}

/// Draw contour outlines, bounding boxes, the largest-area box and the
/// object count onto a copy of `source`
pub fn annotate(source: &DynamicImage, contours: &ContourSet, font: Option<&FontArc>) -> RgbImage {
    let mut canvas = source.to_rgb8();

    for contour in contours.iter() {
        draw_outline(&mut canvas, contour, CONTOUR_COLOR);
    }

    // Boxes go on top of the label
    if let Some(font) = font {
        draw_label(&mut canvas, &contours.label(), font);
    }

    for contour in contours.iter() {
        draw_box(&mut canvas, &contour.bbox, BOX_COLOR);
    }

    if let Some(largest) = contours.largest() {
        draw_box(&mut canvas, &contours.contours[largest].bbox, LARGEST_BOX_COLOR);
    }

    canvas
}

/// Closed polyline through the contour points, two pixels wide
fn draw_outline(canvas: &mut RgbImage, contour: &DetectedContour, color: Rgb<u8>) {
    let points = &contour.points;
    if points.len() == 1 {
        let p = points[0];
        draw_line_segment_mut(canvas, (p.x as f32, p.y as f32), (p.x as f32 + 1.0, p.y as f32), color);
        return;
    }

    for (i, start) in points.iter().enumerate() {
        let end = points[(i + 1) % points.len()];
        for (dx, dy) in [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)] {
            draw_line_segment_mut(
                canvas,
                (start.x as f32 + dx, start.y as f32 + dy),
                (end.x as f32 + dx, end.y as f32 + dy),
                color,
            );
        }
    }
}

/// Rectangle outline, two pixels wide
fn draw_box(canvas: &mut RgbImage, bbox: &BoundingBox, color: Rgb<u8>) {
    draw_hollow_rect_mut(canvas, bbox.to_rect(), color);
    draw_hollow_rect_mut(canvas, bbox.inflate(1), color);
}

fn draw_label(canvas: &mut RgbImage, label: &str, font: &FontArc) {
    let (_, text_height) = text_size(LABEL_SCALE, font, label);
    let y = canvas
        .height()
        .saturating_sub(LABEL_MARGIN)
        .saturating_sub(text_height);
    draw_text_mut(canvas, LABEL_COLOR, 0, y as i32, LABEL_SCALE, font, label);
}

#[cfg(test)]
mod tests {
    use super::*;
    use imageproc::contours::BorderType;
    use imageproc::point::Point;

    #[test]
    fn boxes_are_drawn_over_the_label() {
        let Some(font) = load_font(None) else {
            return;
        };
        let source = DynamicImage::ImageRgb8(RgbImage::from_pixel(200, 60, Rgb([255, 255, 255])));
        let (_, text_height) = text_size(LABEL_SCALE, &font, "Objects: 1");
        let row = 60 - LABEL_MARGIN - text_height + text_height / 2;

        let points = vec![
            Point::new(2, row as i32),
            Point::new(150, row as i32),
            Point::new(150, 58),
            Point::new(2, 58),
        ];
        let contours = ContourSet {
            contours: vec![DetectedContour {
                bbox: BoundingBox::enclosing(&points).unwrap(),
                points,
                border_type: BorderType::Outer,
                parent: None,
                area: 100.0,
            }],
        };

        let out = annotate(&source, &contours, Some(&font));
        for x in 2..=150 {
            assert_eq!(*out.get_pixel(x, row), LARGEST_BOX_COLOR, "x = {x}");
        }
    }
}
