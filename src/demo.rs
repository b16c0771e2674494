//! State and recompute logic of the interactive erosion/dilation demo.
//!
//! The GUI only translates widget callbacks into [`ControlEvent`]s and hands
//! them to [`DemoState::handle`]; everything observable lives here.

use image::DynamicImage;

use crate::error::Result;
use crate::models::{ElementShape, MorphOp};
use crate::morphology::element::StructuringElement;
use crate::morphology::{ops, preprocessing};
use crate::source::SourceImage;

/// Largest kernel radius offered by the slider (kernel size is `2r + 1`)
pub const MAX_KERNEL_RADIUS: u8 = 21;

/// Current values of the demo controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParameterState {
    pub shape: ElementShape,
    radius: u8,
    pub op: MorphOp,
    pub negative: bool,
}

impl ParameterState {
    pub fn new(shape: ElementShape, radius: u8, op: MorphOp, negative: bool) -> Self {
        Self {
            shape,
            radius: radius.min(MAX_KERNEL_RADIUS),
            op,
            negative,
        }
    }

    pub fn radius(&self) -> u8 {
        self.radius
    }

    /// Side length of the structuring element
    pub fn kernel_size(&self) -> u32 {
        2 * self.radius as u32 + 1
    }

    /// Apply a control event. Radii above [`MAX_KERNEL_RADIUS`] are clamped.
    pub fn apply(&mut self, event: ControlEvent) {
        match event {
            ControlEvent::ShapeSelected(shape) => self.shape = shape,
            ControlEvent::RadiusChanged(radius) => self.radius = radius.min(MAX_KERNEL_RADIUS),
            ControlEvent::OperationSelected(op) => self.op = op,
            ControlEvent::NegativeToggled(negative) => self.negative = negative,
        }
    }

    pub fn element(&self) -> Result<StructuringElement> {
        StructuringElement::with_radius(self.shape, self.radius as u32)
    }
}

/// A change of one demo control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    ShapeSelected(ElementShape),
    RadiusChanged(u8),
    OperationSelected(MorphOp),
    NegativeToggled(bool),
}

/// Optionally invert `source`, then erode or dilate it per `params`
pub fn recompute(source: &DynamicImage, params: &ParameterState) -> Result<DynamicImage> {
    let element = params.element()?;
    let result = if params.negative {
        ops::apply(&preprocessing::invert(source), params.op, &element)
    } else {
        ops::apply(source, params.op, &element)
    };
    log::debug!(
        "{} with {}x{} {}{}",
        params.op,
        element.width(),
        element.height(),
        element.shape(),
        if params.negative { " (negative)" } else { "" }
    );
    Ok(result)
}

/// Everything the demo window shows: source, controls and latest result
#[derive(Debug, Clone)]
pub struct DemoState {
    source: SourceImage,
    params: ParameterState,
    derived: DynamicImage,
}

impl DemoState {
    pub fn new(source: SourceImage) -> Result<Self> {
        Self::with_params(source, ParameterState::default())
    }

    pub fn with_params(source: SourceImage, params: ParameterState) -> Result<Self> {
        let derived = recompute(source.image(), &params)?;
        Ok(Self {
            source,
            params,
            derived,
        })
    }

    /// Update the parameters and recompute the derived image
    pub fn handle(&mut self, event: ControlEvent) -> Result<()> {
        self.params.apply(event);
        self.refresh()
    }

    /// Swap in a new source image, keeping the current parameters
    pub fn replace_source(&mut self, source: SourceImage) -> Result<()> {
        self.source = source;
        self.refresh()
    }

    fn refresh(&mut self) -> Result<()> {
        self.derived = recompute(self.source.image(), &self.params)?;
        Ok(())
    }

    pub fn source(&self) -> &SourceImage {
        &self.source
    }

    pub fn params(&self) -> &ParameterState {
        &self.params
    }

    pub fn derived(&self) -> &DynamicImage {
        &self.derived
    }
}
