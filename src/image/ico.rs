//! Windows ICO container assembly.
//!
//! Every entry is re-derived from the transparent master rather than read
//! back from the already-resized PNG artifacts, so the container does not
//! depend on which PNG sizes were configured.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::{RgbaImage, imageops::FilterType};

/// Artifact name of the multi-resolution container.
const ICO_FILENAME: &str = "windows_icon.ico";

/// Encode one variant of the master per entry in `sizes` and write the
/// multi-resolution ICO file. Returns the written path.
pub fn build_ico_container(
    master: &RgbaImage,
    sizes: &[u32],
    output_dir: &Path,
) -> Result<PathBuf> {
    let mut dir = IconDir::new(ResourceType::Icon);
    for &size in sizes {
        let resized = image::imageops::resize(master, size, size, FilterType::Lanczos3);
        let entry = IconImage::from_rgba_data(size, size, resized.into_raw());
        dir.add_entry(
            IconDirEntry::encode(&entry)
                .with_context(|| format!("failed to encode {size}x{size} ICO entry"))?,
        );
    }

    let path = output_dir.join(ICO_FILENAME);
    let file =
        File::create(&path).with_context(|| format!("failed to create `{}`", path.display()))?;
    dir.write(file)
        .with_context(|| format!("failed to write `{}`", path.display()))?;
    Ok(path)
}
