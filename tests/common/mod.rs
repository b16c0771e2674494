mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from morphlab for tests
pub use morphlab::{
    ContourSet, ControlEvent, DemoState, ElementShape, MorphError, MorphOp, ParameterState,
    PipelineConfig, SourceImage, StructuringElement, build_standard_pipeline,
};
