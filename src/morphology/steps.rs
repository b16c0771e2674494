use ab_glyph::FontArc;
use image::DynamicImage;

use super::element::StructuringElement;
use super::{annotate, contours, ops, preprocessing};
use crate::error::{MorphError, Result};
use crate::models::MorphOp;
use crate::pipeline::{PipelineContext, PipelineData, PipelineStep};

/// Convert image to grayscale
pub struct GrayscaleStep;

impl PipelineStep for GrayscaleStep {
    fn process(&self, mut data: PipelineData, _context: &PipelineContext) -> Result<PipelineData> {
        let gray = DynamicImage::ImageLuma8(preprocessing::to_grayscale(&data.image));
        data.record("Gray", gray.clone());
        data.image = gray;
        Ok(data)
    }

    fn name(&self) -> &str {
        "Grayscale Conversion"
    }
}

/// Inverse binary threshold: dark pixels become foreground
pub struct ThresholdStep {
    pub cutoff: u8,
}

impl PipelineStep for ThresholdStep {
    fn process(&self, mut data: PipelineData, _context: &PipelineContext) -> Result<PipelineData> {
        let gray = data.image.to_luma8();
        let binary = DynamicImage::ImageLuma8(preprocessing::threshold_inverse(&gray, self.cutoff));
        data.record("Binary", binary.clone());
        data.image = binary;
        Ok(data)
    }

    fn name(&self) -> &str {
        "Inverse Binary Threshold"
    }
}

/// Erode or dilate the working raster
pub struct MorphologyStep {
    pub op: MorphOp,
    pub element: StructuringElement,
    /// Record the result under this view name
    pub view: Option<String>,
}

impl MorphologyStep {
    pub fn new(op: MorphOp, element: StructuringElement) -> Self {
        Self {
            op,
            element,
            view: None,
        }
    }

    pub fn recorded_as(mut self, view: impl Into<String>) -> Self {
        self.view = Some(view.into());
        self
    }
}

impl PipelineStep for MorphologyStep {
    fn process(&self, mut data: PipelineData, _context: &PipelineContext) -> Result<PipelineData> {
        log::debug!(
            "{} with {}x{} {}",
            self.op,
            self.element.width(),
            self.element.height(),
            self.element.shape()
        );
        let result = ops::apply(&data.image, self.op, &self.element);
        if let Some(view) = &self.view {
            data.record(view.clone(), result.clone());
        }
        data.image = result;
        Ok(data)
    }

    fn name(&self) -> &str {
        match self.op {
            MorphOp::Erode => "Erosion",
            MorphOp::Dilate => "Dilation",
        }
    }
}

/// Copy source pixels where the working raster is non-zero.
///
/// Only records the "Extract" view; the working raster is unchanged.
pub struct ExtractStep;

impl PipelineStep for ExtractStep {
    fn process(&self, mut data: PipelineData, _context: &PipelineContext) -> Result<PipelineData> {
        let mask = data.image.to_luma8();
        let extracted = preprocessing::masked_copy(&data.source, &mask);
        data.record("Extract", extracted);
        Ok(data)
    }

    fn name(&self) -> &str {
        "Masked Extraction"
    }
}

/// Trace contours of the working raster
pub struct ContourDetectionStep;

impl PipelineStep for ContourDetectionStep {
    fn process(&self, mut data: PipelineData, _context: &PipelineContext) -> Result<PipelineData> {
        let binary = data.image.to_luma8();
        let found = contours::detect_contours(&binary);
        log::debug!("Found {} contours", found.len());
        data.contours = Some(found);
        Ok(data)
    }

    fn name(&self) -> &str {
        "Contour Detection"
    }
}

/// Draw detected contours, their boxes and the object count onto the source
pub struct AnnotateStep {
    pub font: Option<FontArc>,
}

impl PipelineStep for AnnotateStep {
    fn process(&self, mut data: PipelineData, _context: &PipelineContext) -> Result<PipelineData> {
        let contours = data.contours.as_ref().ok_or(MorphError::MissingStage {
            stage: "Contour Detection",
        })?;
        let annotated = annotate::annotate(&data.source, contours, self.font.as_ref());
        data.record("Dst", DynamicImage::ImageRgb8(annotated));
        Ok(data)
    }

    fn name(&self) -> &str {
        "Annotation"
    }
}
