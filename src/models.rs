use imageproc::contours::BorderType;
use imageproc::point::Point;
use imageproc::rect::Rect;
use std::fmt;

/// Shape of a structuring element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ElementShape {
    #[default]
    Rectangle,
    Cross,
    Ellipse,
}

impl ElementShape {
    pub const ALL: [ElementShape; 3] = [
        ElementShape::Rectangle,
        ElementShape::Cross,
        ElementShape::Ellipse,
    ];
}

impl fmt::Display for ElementShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementShape::Rectangle => write!(f, "Rectangle"),
            ElementShape::Cross => write!(f, "Cross"),
            ElementShape::Ellipse => write!(f, "Ellipse"),
        }
    }
}

/// Morphological operation applied with a structuring element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MorphOp {
    #[default]
    Erode,
    Dilate,
}

impl MorphOp {
    pub const ALL: [MorphOp; 2] = [MorphOp::Erode, MorphOp::Dilate];
}

impl fmt::Display for MorphOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MorphOp::Erode => write!(f, "Erosion"),
            MorphOp::Dilate => write!(f, "Dilation"),
        }
    }
}

/// Axis-aligned bounding box in image coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    /// Smallest box containing every point (`None` for an empty slice)
    pub fn enclosing(points: &[Point<i32>]) -> Option<Self> {
        let first = points.first()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in &points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }

        Some(Self {
            x: min_x.max(0) as u32,
            y: min_y.max(0) as u32,
            width: (max_x - min_x + 1) as u32,
            height: (max_y - min_y + 1) as u32,
        })
    }

    pub fn to_rect(&self) -> Rect {
        Rect::at(self.x as i32, self.y as i32).of_size(self.width, self.height)
    }

    /// The same box grown by `amount` pixels on every side
    pub fn inflate(&self, amount: u32) -> Rect {
        Rect::at(self.x as i32 - amount as i32, self.y as i32 - amount as i32)
            .of_size(self.width + 2 * amount, self.height + 2 * amount)
    }
}

/// One traced border of a foreground region
#[derive(Debug, Clone)]
pub struct DetectedContour {
    pub points: Vec<Point<i32>>,
    pub border_type: BorderType,
    /// Index of the enclosing border within the owning [`ContourSet`]
    pub parent: Option<usize>,
    pub bbox: BoundingBox,
    /// Polygon area enclosed by the border points
    pub area: f64,
}

impl DetectedContour {
    pub fn is_hole(&self) -> bool {
        self.border_type == BorderType::Hole
    }
}

/// Contours produced by one detection call, in detection order
#[derive(Debug, Clone, Default)]
pub struct ContourSet {
    pub contours: Vec<DetectedContour>,
}

impl ContourSet {
    pub fn len(&self) -> usize {
        self.contours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DetectedContour> {
        self.contours.iter()
    }

    /// Index of the contour with the strictly largest area.
    ///
    /// Ties keep the earliest contour, and when every area is zero the first
    /// contour is returned.
    pub fn largest(&self) -> Option<usize> {
        if self.contours.is_empty() {
            return None;
        }

        let mut max_area = 0.0;
        let mut max_index = 0;
        for (i, contour) in self.contours.iter().enumerate() {
            if contour.area > max_area {
                max_area = contour.area;
                max_index = i;
            }
        }
        Some(max_index)
    }

    /// Label drawn onto the annotated view
    pub fn label(&self) -> String {
        format!("Objects: {}", self.len())
    }
}
