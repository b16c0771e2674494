pub mod annotate;
pub mod contours;
pub mod element;
pub mod ops;
pub mod preprocessing;
pub mod steps;

use ab_glyph::FontArc;
use std::sync::Arc;

use crate::error::Result;
use crate::models::{ElementShape, MorphOp};
use crate::pipeline::Pipeline;
use element::StructuringElement;
use steps::*;

/// Parameters of the batch pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Intensity cutoff of the inverse binary threshold
    pub threshold: u8,
    /// Side length of the elliptical dilation element
    pub dilate_size: u32,
    /// Side length of the elliptical erosion element.
    /// Slightly smaller than `dilate_size`, so the pair is only an approximate closing.
    pub erode_size: u32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            threshold: 130,
            dilate_size: 25,
            erode_size: 23,
        }
    }
}

/// Build the grayscale → threshold → dilate → erode → extract → contours → annotate pipeline
pub fn build_standard_pipeline(config: &PipelineConfig, font: Option<FontArc>) -> Result<Pipeline> {
    let dilate_elem = StructuringElement::new(
        ElementShape::Ellipse,
        config.dilate_size,
        config.dilate_size,
        None,
    )?;
    let erode_elem = StructuringElement::new(
        ElementShape::Ellipse,
        config.erode_size,
        config.erode_size,
        None,
    )?;

    Ok(Pipeline::new()
        .add_step(Arc::new(GrayscaleStep))
        .add_step(Arc::new(ThresholdStep {
            cutoff: config.threshold,
        }))
        .add_step(Arc::new(MorphologyStep::new(MorphOp::Dilate, dilate_elem)))
        .add_step(Arc::new(
            MorphologyStep::new(MorphOp::Erode, erode_elem).recorded_as("Morph"),
        ))
        .add_step(Arc::new(ExtractStep))
        .add_step(Arc::new(ContourDetectionStep))
        .add_step(Arc::new(AnnotateStep { font })))
}
