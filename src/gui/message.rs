use std::path::PathBuf;

use crate::demo::ControlEvent;

/// Messages of the interactive demo window
#[derive(Debug, Clone)]
pub enum DemoMessage {
    Control(ControlEvent),
    OpenImage,
    ImagePicked(Option<PathBuf>),
}

/// Messages of the pipeline stage viewer
#[derive(Debug, Clone)]
pub enum ViewerMessage {
    KeyPressed,
}
