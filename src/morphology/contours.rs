use image::GrayImage;
use imageproc::contours::find_contours;
use imageproc::geometry::contour_area;

use crate::models::{BoundingBox, ContourSet, DetectedContour};

/// Trace outer borders and hole borders of every non-zero region.
///
/// Parent indices refer to positions in the returned set.
pub fn detect_contours(binary: &GrayImage) -> ContourSet {
    let contours = find_contours::<i32>(binary)
        .into_iter()
        .filter_map(|contour| {
            // traced borders always hold at least one point, so nothing is dropped
            let bbox = BoundingBox::enclosing(&contour.points)?;
            let area = contour_area(&contour.points);
            Some(DetectedContour {
                points: contour.points,
                border_type: contour.border_type,
                parent: contour.parent,
                bbox,
                area,
            })
        })
        .collect();

    ContourSet { contours }
}
