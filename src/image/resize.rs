//! Multi-size PNG export.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::{ImageFormat, RgbaImage, imageops::FilterType};
use rayon::prelude::*;

use crate::logger::ProgressLine;

/// The one size that keeps a platform-specific filename.
const LINUX_ICON_SIZE: u32 = 256;

/// Resize the transparent master to every configured size and save each as a
/// square PNG in `output_dir`. Returns the written paths keyed by size.
///
/// Lanczos3 keeps edges sharp when shrinking. The sizes are independent of
/// each other, so the fan-out runs on the rayon pool.
pub fn generate_resized_set(
    master: &RgbaImage,
    sizes: &[u32],
    output_dir: &Path,
    progress: &ProgressLine,
) -> Result<Vec<(u32, PathBuf)>> {
    sizes
        .par_iter()
        .map(|&size| {
            let path = output_dir.join(png_filename(size));
            let resized = image::imageops::resize(master, size, size, FilterType::Lanczos3);
            resized
                .save_with_format(&path, ImageFormat::Png)
                .with_context(|| format!("failed to save `{}`", path.display()))?;
            progress.inc("png");
            Ok((size, path))
        })
        .collect()
}

/// Artifact name for a resized PNG. The 256 variant keeps the name Linux
/// desktop entries point at.
fn png_filename(size: u32) -> String {
    if size == LINUX_ICON_SIZE {
        "linux_icon.png".to_string()
    } else {
        format!("icon{size}.png")
    }
}
