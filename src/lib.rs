pub mod demo;
pub mod error;
pub mod models;
pub mod morphology;
pub mod pipeline;
pub mod source;

pub use demo::{ControlEvent, DemoState, ParameterState, MAX_KERNEL_RADIUS};
pub use error::{MorphError, Result};
pub use models::{BoundingBox, ContourSet, DetectedContour, ElementShape, MorphOp};
pub use morphology::element::StructuringElement;
pub use morphology::{PipelineConfig, build_standard_pipeline};
pub use pipeline::{
    DebugConfig, Pipeline, PipelineContext, PipelineData, PipelineStep, StageView,
};
pub use source::{DEFAULT_DEMO_IMAGE, DEFAULT_PIPELINE_IMAGE, SourceImage};

#[cfg(feature = "gui")]
pub mod gui;
