//! Generate command - run the icon pipeline.
//!
//! The pipeline is a linear chain: decode the source, strip the near-white
//! background, save the transparent master, fan out over the configured PNG
//! sizes, then assemble the ICO container. Every step re-derives from the
//! in-memory master, so the master file on disk is never read back.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use image::{ImageFormat, RgbaImage};

use crate::config::IconConfig;
use crate::image::{ico, resize, strip};
use crate::logger::ProgressLine;
use crate::{debug, log};

/// Artifact name of the full-resolution transparent master.
const MASTER_FILENAME: &str = "icon_transparent.png";

/// Run the full pipeline for the given configuration.
pub fn run_generate(config: &IconConfig) -> Result<()> {
    let source = config.source_path()?;
    let output_dir = config.output_dir();

    let master = load_source(&source)?;
    debug!("generate"; "loaded {} ({}x{})", source.display(), master.width(), master.height());

    // Resizing forces width = height, so a non-square source gets stretched.
    if master.width() != master.height() {
        log!("warning"; "source is not square ({}x{}); resized icons will be stretched",
            master.width(), master.height());
    }

    let master = strip::strip_near_white(master, &config.strip);

    fs::create_dir_all(&output_dir).with_context(|| {
        format!(
            "failed to create output directory `{}`",
            output_dir.display()
        )
    })?;

    let master_path = output_dir.join(MASTER_FILENAME);
    master
        .save_with_format(&master_path, ImageFormat::Png)
        .with_context(|| format!("failed to save `{}`", master_path.display()))?;
    debug!("generate"; "saved transparent master to {}", master_path.display());

    let progress = ProgressLine::new(&[("png", config.output.sizes.len()), ("ico", 1)]);
    let resized = resize::generate_resized_set(&master, &config.output.sizes, &output_dir, &progress)?;
    debug!("generate"; "wrote {} resized png{}", resized.len(), if resized.len() == 1 { "" } else { "s" });

    let ico_path = ico::build_ico_container(&master, &config.output.ico_sizes, &output_dir)?;
    progress.inc("ico");
    progress.finish();
    debug!("generate"; "wrote {}", ico_path.display());

    log!("generate"; "icons generated in {}", output_dir.display());
    Ok(())
}

/// Decode the source image into an RGBA buffer.
fn load_source(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path)
        .with_context(|| format!("failed to decode source image `{}`", path.display()))?;
    Ok(img.to_rgba8())
}
