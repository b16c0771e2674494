use image::DynamicImage;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{MorphError, Result};
use crate::models::ContourSet;

/// Name of the stage view holding the unmodified input
pub const SOURCE_STAGE: &str = "Src";

/// A named raster recorded by a pipeline step for display
#[derive(Debug, Clone)]
pub struct StageView {
    pub name: String,
    pub image: DynamicImage,
}

/// Data that flows through the pipeline
#[derive(Debug, Clone)]
pub struct PipelineData {
    /// The working raster handed to the next step
    pub image: DynamicImage,

    /// Reference to the original image (shared efficiently via Arc)
    pub source: Arc<DynamicImage>,

    /// Contours found by the detection step, if it ran
    pub contours: Option<ContourSet>,

    /// Views recorded so far, in execution order
    pub stages: Vec<StageView>,
}

impl PipelineData {
    /// Start from a full image, recording it as the source view
    pub fn from_image(image: DynamicImage) -> Self {
        Self::from_shared(Arc::new(image))
    }

    pub fn from_shared(source: Arc<DynamicImage>) -> Self {
        Self {
            image: (*source).clone(),
            stages: vec![StageView {
                name: SOURCE_STAGE.to_string(),
                image: (*source).clone(),
            }],
            source,
            contours: None,
        }
    }

    /// Record a view under `name`
    pub fn record(&mut self, name: impl Into<String>, image: DynamicImage) {
        self.stages.push(StageView {
            name: name.into(),
            image,
        });
    }

    /// Most recent view recorded under `name`
    pub fn stage(&self, name: &str) -> Option<&StageView> {
        self.stages.iter().rev().find(|s| s.name == name)
    }

    /// Number of contours detected (0 when detection has not run)
    pub fn object_count(&self) -> usize {
        self.contours.as_ref().map_or(0, ContourSet::len)
    }
}

/// Debug configuration for pipeline execution
#[derive(Clone, Debug)]
pub struct DebugConfig {
    /// Root directory for debug outputs
    pub output_dir: PathBuf,
}

/// Context available to all pipeline steps
#[derive(Clone, Debug, Default)]
pub struct PipelineContext {
    pub debug: Option<DebugConfig>,
}

/// Trait that all pipeline steps must implement
pub trait PipelineStep: Send + Sync {
    /// Transform the data, optionally recording views
    fn process(&self, data: PipelineData, context: &PipelineContext) -> Result<PipelineData>;

    /// Human-readable name for this step (used in log output)
    fn name(&self) -> &str;
}

/// Composable pipeline builder
pub struct Pipeline {
    steps: Vec<Arc<dyn PipelineStep>>,
    context: PipelineContext,
}

impl Pipeline {
    /// Create a new empty pipeline
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            context: PipelineContext::default(),
        }
    }

    /// Enable debug mode with output directory
    /// The directory must be empty or non-existent
    pub fn with_debug(mut self, output_dir: PathBuf) -> Result<Self> {
        if output_dir.exists() {
            let entries = std::fs::read_dir(&output_dir)?;
            if entries.count() > 0 {
                return Err(MorphError::DebugDirNotEmpty { path: output_dir });
            }
        } else {
            std::fs::create_dir_all(&output_dir)?;
        }

        self.context.debug = Some(DebugConfig { output_dir });
        Ok(self)
    }

    /// Add a processing step to the pipeline
    pub fn add_step(mut self, step: Arc<dyn PipelineStep>) -> Self {
        self.steps.push(step);
        self
    }

    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name()).collect()
    }

    /// Run every step in order on `input`
    pub fn run(&self, input: DynamicImage) -> Result<PipelineData> {
        self.run_shared(Arc::new(input))
    }

    pub fn run_shared(&self, input: Arc<DynamicImage>) -> Result<PipelineData> {
        self.run_partial(input, self.steps.len())
    }

    /// Run only the first `num_steps` steps (useful for debugging)
    pub fn run_partial(&self, input: Arc<DynamicImage>, num_steps: usize) -> Result<PipelineData> {
        let mut data = PipelineData::from_shared(input);
        let mut saved = self.save_new_stages(&data, 0)?;

        for step in self.steps.iter().take(num_steps) {
            log::debug!("Running step: {}", step.name());
            data = step.process(data, &self.context)?;
            saved = self.save_new_stages(&data, saved)?;
        }

        log::debug!(
            "Pipeline finished: {} views, {} objects",
            data.stages.len(),
            data.object_count()
        );
        Ok(data)
    }

    /// Write views recorded since `already_saved` in debug mode, returning the new total
    fn save_new_stages(&self, data: &PipelineData, already_saved: usize) -> Result<usize> {
        let Some(debug_config) = &self.context.debug else {
            return Ok(data.stages.len());
        };

        for (idx, stage) in data.stages.iter().enumerate().skip(already_saved) {
            let path = debug_config.output_dir.join(stage_file_name(idx, &stage.name));
            save_image(&stage.image, &path)?;
            log::debug!("Debug: saved {}", path.display());
        }

        Ok(data.stages.len())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// File name of a saved stage view (e.g. "03_binary.png")
pub fn stage_file_name(index: usize, name: &str) -> String {
    format!("{:02}_{}.png", index + 1, name.to_lowercase().replace(' ', "_"))
}

pub fn save_image(image: &DynamicImage, path: &Path) -> Result<()> {
    image.save(path).map_err(|source| MorphError::ImageSave {
        path: path.to_path_buf(),
        source,
    })
}
