use std::path::PathBuf;

/// Errors raised while loading images, building structuring elements or
/// running the stage pipeline.
#[derive(Debug, thiserror::Error)]
pub enum MorphError {
    /// The image file does not exist.
    #[error("image not found: {}", path.display())]
    ImageNotFound { path: PathBuf },

    /// The image file exists but could not be opened or read.
    #[error("failed to read image {}: {source}", path.display())]
    ImageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file content is not a supported raster format.
    #[error("failed to decode image {}: {source}", path.display())]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to save image {}: {source}", path.display())]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A parameter lies outside the range the operation accepts.
    #[error("invalid {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: u32,
        reason: &'static str,
    },

    #[error("debug directory is not empty: {}", path.display())]
    DebugDirNotEmpty { path: PathBuf },

    /// A pipeline step ran before the step producing its input.
    #[error("pipeline stage `{stage}` has not produced any output yet")]
    MissingStage { stage: &'static str },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl MorphError {
    /// Whether this error means the source image could not be loaded.
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            MorphError::ImageNotFound { .. }
                | MorphError::ImageRead { .. }
                | MorphError::ImageDecode { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, MorphError>;
