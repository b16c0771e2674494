use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;

use morphlab::{DEFAULT_DEMO_IMAGE, DemoState, SourceImage};

#[derive(Parser)]
#[command(name = "morph-demo")]
#[command(about = "Interactively erode or dilate an image")]
struct Cli {
    /// Path to input image file
    #[arg(value_name = "IMAGE", default_value = DEFAULT_DEMO_IMAGE)]
    image_path: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let source = SourceImage::load(&args.image_path).with_context(|| {
        format!(
            "Could not open or find the image {}",
            args.image_path.display()
        )
    })?;
    let state = DemoState::new(source).context("Initial recompute failed")?;

    morphlab::gui::run_demo(state).context("Demo window failed")
}
