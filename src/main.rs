use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use morphlab::morphology::annotate::load_font;
use morphlab::{DEFAULT_PIPELINE_IMAGE, PipelineConfig, SourceImage, build_standard_pipeline};

#[derive(Parser)]
#[command(name = "morph-pipeline")]
#[command(about = "Count dark objects in an image with threshold, dilation and erosion")]
struct Cli {
    /// Path to input image file
    #[arg(value_name = "IMAGE", default_value = DEFAULT_PIPELINE_IMAGE)]
    image_path: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Save every stage view to directory (must be empty)
    #[arg(long, value_name = "DIR")]
    debug_out: Option<PathBuf>,

    /// Pixels darker than this become foreground
    #[arg(long, default_value_t = 130)]
    threshold: u8,

    /// Side length of the elliptical dilation element
    #[arg(long, default_value_t = 25)]
    dilate_size: u32,

    /// Side length of the elliptical erosion element
    #[arg(long, default_value_t = 23)]
    erode_size: u32,

    /// TrueType font for the label burned into the result
    #[arg(long, value_name = "TTF")]
    font: Option<PathBuf>,

    /// Print the count without opening the stage window
    #[arg(long)]
    no_display: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let source = SourceImage::load(&args.image_path)
        .with_context(|| format!("Could not load {}", args.image_path.display()))?;
    log::info!(
        "Loaded {} ({}x{}, {:?})",
        source.path().display(),
        source.width(),
        source.height(),
        source.color()
    );

    let font = load_font(args.font.as_deref());
    if font.is_none() {
        log::warn!("No usable font found; the result image will carry no label");
    }

    let config = PipelineConfig {
        threshold: args.threshold,
        dilate_size: args.dilate_size,
        erode_size: args.erode_size,
    };
    let mut pipeline = build_standard_pipeline(&config, font)?;
    if let Some(debug_dir) = args.debug_out {
        pipeline = pipeline.with_debug(debug_dir)?;
    }

    log::debug!("Running steps: {}", pipeline.step_names().join(" -> "));
    let data = pipeline.run_shared(source.shared())?;

    let label = data
        .contours
        .as_ref()
        .map(|contours| contours.label())
        .context("Pipeline finished without detecting contours")?;
    println!("{label}");

    if let Some(largest) = data.contours.as_ref().and_then(|c| c.largest()) {
        log::debug!("Largest object is contour #{largest}");
    }

    show(&data, args.no_display)
}

#[cfg(feature = "gui")]
fn show(data: &morphlab::PipelineData, no_display: bool) -> anyhow::Result<()> {
    if no_display {
        return Ok(());
    }
    morphlab::gui::run_stage_viewer(data).context("Stage viewer failed")
}

#[cfg(not(feature = "gui"))]
fn show(_data: &morphlab::PipelineData, _no_display: bool) -> anyhow::Result<()> {
    log::debug!("Built without the gui feature, skipping the stage window");
    Ok(())
}
