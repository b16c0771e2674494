mod demo_app;
mod message;
mod stages;
mod widgets;

pub use demo_app::{MorphologyDemo, run_demo};
pub use message::{DemoMessage, ViewerMessage};
pub use stages::{StageViewer, run_stage_viewer};
