use image::{GrayImage, Luma};
use imageproc::morphology::Mask;

use crate::error::{MorphError, Result};
use crate::models::ElementShape;

/// Largest side length accepted by [`Mask::from_image`]
pub const MAX_ELEMENT_SIZE: u32 = 511;

/// Binary neighbourhood used by erosion and dilation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuringElement {
    shape: ElementShape,
    anchor: (u32, u32),
    cells: GrayImage,
}

impl StructuringElement {
    /// Build a `width` x `height` element. The anchor defaults to the centre.
    ///
    /// A 1x1 element is always a single set cell regardless of `shape`.
    pub fn new(
        shape: ElementShape,
        width: u32,
        height: u32,
        anchor: Option<(u32, u32)>,
    ) -> Result<Self> {
        check_size("element width", width)?;
        check_size("element height", height)?;

        let anchor = anchor.unwrap_or((width / 2, height / 2));
        if anchor.0 >= width {
            return Err(MorphError::InvalidParameter {
                name: "anchor x",
                value: anchor.0,
                reason: "anchor must lie inside the element",
            });
        }
        if anchor.1 >= height {
            return Err(MorphError::InvalidParameter {
                name: "anchor y",
                value: anchor.1,
                reason: "anchor must lie inside the element",
            });
        }

        if anchor.0 > u8::MAX as u32 || anchor.1 > u8::MAX as u32 {
            return Err(MorphError::InvalidParameter {
                name: "anchor",
                value: anchor.0.max(anchor.1),
                reason: "anchor offsets above 255 are not supported",
            });
        }

        let shape = if width == 1 && height == 1 {
            ElementShape::Rectangle
        } else {
            shape
        };

        let mut cells = GrayImage::new(width, height);
        let (w, h) = (width as i64, height as i64);
        let r = h / 2;
        let c = w / 2;
        let inv_r2 = if r > 0 { 1.0 / (r * r) as f64 } else { 0.0 };

        for row in 0..h {
            let (start, end) = match shape {
                ElementShape::Rectangle => (0, w),
                ElementShape::Cross if row == anchor.1 as i64 => (0, w),
                ElementShape::Cross => (anchor.0 as i64, anchor.0 as i64 + 1),
                ElementShape::Ellipse => {
                    let dy = row - r;
                    if dy.abs() <= r {
                        let dx = (c as f64 * (((r * r - dy * dy) as f64) * inv_r2).sqrt()).round()
                            as i64;
                        ((c - dx).max(0), (c + dx + 1).min(w))
                    } else {
                        (0, 0)
                    }
                }
            };
            for col in start..end {
                cells.put_pixel(col as u32, row as u32, Luma([255]));
            }
        }

        Ok(Self {
            shape,
            anchor,
            cells,
        })
    }

    /// Square element of side `2 * radius + 1` anchored at its centre
    pub fn with_radius(shape: ElementShape, radius: u32) -> Result<Self> {
        let size = radius
            .checked_mul(2)
            .and_then(|d| d.checked_add(1))
            .ok_or(MorphError::InvalidParameter {
                name: "kernel radius",
                value: radius,
                reason: "radius is too large",
            })?;
        Self::new(shape, size, size, Some((radius, radius)))
    }

    pub fn shape(&self) -> ElementShape {
        self.shape
    }

    pub fn width(&self) -> u32 {
        self.cells.width()
    }

    pub fn height(&self) -> u32 {
        self.cells.height()
    }

    pub fn anchor(&self) -> (u32, u32) {
        self.anchor
    }

    /// Whether the cell at column `x`, row `y` belongs to the element
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width() && y < self.height() && self.cells.get_pixel(x, y)[0] != 0
    }

    /// Number of set cells
    pub fn count(&self) -> usize {
        self.cells.pixels().filter(|p| p[0] != 0).count()
    }

    /// Cell grid as a binary image (255 = set)
    pub fn cells(&self) -> &GrayImage {
        &self.cells
    }

    pub fn to_mask(&self) -> Mask {
        Mask::from_image(&self.cells, self.anchor.0 as u8, self.anchor.1 as u8)
    }
}

fn check_size(name: &'static str, value: u32) -> Result<()> {
    if value == 0 {
        return Err(MorphError::InvalidParameter {
            name,
            value,
            reason: "size must be at least 1",
        });
    }
    if value > MAX_ELEMENT_SIZE {
        return Err(MorphError::InvalidParameter {
            name,
            value,
            reason: "size must be at most 511",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(element: &StructuringElement) -> Vec<String> {
        (0..element.height())
            .map(|y| {
                (0..element.width())
                    .map(|x| if element.contains(x, y) { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn rectangle_fills_every_cell() {
        let element = StructuringElement::new(ElementShape::Rectangle, 4, 3, None).unwrap();
        assert_eq!(element.count(), 12);
        assert_eq!(element.anchor(), (2, 1));
    }

    #[test]
    fn cross_follows_anchor() {
        let element = StructuringElement::with_radius(ElementShape::Cross, 2).unwrap();
        assert_eq!(
            rows(&element),
            vec!["..#..", "..#..", "#####", "..#..", "..#.."]
        );
    }

    #[test]
    fn ellipse_is_a_disk() {
        let element = StructuringElement::with_radius(ElementShape::Ellipse, 2).unwrap();
        assert_eq!(
            rows(&element),
            vec!["..#..", "#####", "#####", "#####", "..#.."]
        );
    }

    #[test]
    fn single_cell_is_always_rectangle() {
        for shape in ElementShape::ALL {
            let element = StructuringElement::with_radius(shape, 0).unwrap();
            assert_eq!(element.shape(), ElementShape::Rectangle);
            assert_eq!(element.count(), 1);
            assert!(element.contains(0, 0));
        }
    }

    #[test]
    fn rejects_out_of_range_sizes() {
        assert!(matches!(
            StructuringElement::new(ElementShape::Ellipse, 0, 3, None),
            Err(MorphError::InvalidParameter { .. })
        ));
        assert!(matches!(
            StructuringElement::new(ElementShape::Ellipse, 512, 3, None),
            Err(MorphError::InvalidParameter { .. })
        ));
        assert!(matches!(
            StructuringElement::new(ElementShape::Cross, 3, 3, Some((3, 0))),
            Err(MorphError::InvalidParameter { .. })
        ));
    }
}
