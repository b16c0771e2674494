use image::{ColorType, DynamicImage, ImageReader};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{MorphError, Result};

/// Default input of the batch pipeline
pub const DEFAULT_PIPELINE_IMAGE: &str = "./test_images/eight.bmp";

/// Default input of the interactive demo
pub const DEFAULT_DEMO_IMAGE: &str = "./test_images/letters.bmp";

/// A decoded raster loaded once at startup and shared read-only afterwards
#[derive(Debug, Clone)]
pub struct SourceImage {
    path: PathBuf,
    image: Arc<DynamicImage>,
}

impl SourceImage {
    /// Load and decode an image file, guessing the format from its content
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(MorphError::ImageNotFound { path });
        }

        let reader = ImageReader::open(&path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|source| MorphError::ImageRead {
                path: path.clone(),
                source,
            })?;

        let image = reader.decode().map_err(|source| MorphError::ImageDecode {
            path: path.clone(),
            source,
        })?;

        log::debug!(
            "Loaded {} ({}x{}, {:?})",
            path.display(),
            image.width(),
            image.height(),
            image.color()
        );

        Ok(Self {
            path,
            image: Arc::new(image),
        })
    }

    /// Wrap an already decoded image (the path is only informative)
    pub fn from_image(image: DynamicImage, path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            image: Arc::new(image),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    /// Shared handle to the decoded raster
    pub fn shared(&self) -> Arc<DynamicImage> {
        Arc::clone(&self.image)
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn color(&self) -> ColorType {
        self.image.color()
    }
}
