use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use vision_readers::adapters::GoogleCloudVisionAnnotator;
use vision_readers::core::models::{VisionCredentials, VisionSettings};
use vision_readers::core::orchestrators::LogoReader;
use vision_readers::global_constants;

#[derive(Parser)]
#[command(name = "logo-reader", about = "Detect the brand logo in an image with Cloud Vision")]
struct Cli {
    /// Image file to annotate
    #[arg(default_value = global_constants::DEFAULT_LOGO_IMAGE_PATH)]
    image_path: PathBuf,

    /// Settings JSON file (defaults to the per-user config directory)
    #[arg(long)]
    settings: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    log::info!("[MAIN] Starting logo-reader for {:?}", cli.image_path);

    let settings = VisionSettings::load(cli.settings.as_deref()).context("Failed to load settings")?;
    let credentials = VisionCredentials::from_environment(&settings)?;
    let annotator = Arc::new(GoogleCloudVisionAnnotator::build(&settings, credentials));

    let reader = LogoReader::build(annotator);
    let mut stdout = std::io::stdout().lock();

    if let Some(brand) = reader.detect_logo_brand(&cli.image_path, &mut stdout).await? {
        writeln!(stdout, "{} {}", global_constants::MESSAGE_BRAND_PREFIX, brand)?;
    }

    Ok(())
}
