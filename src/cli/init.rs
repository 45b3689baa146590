//! Init command - write a starter config file.

use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::cli::Cli;
use crate::log;

/// Starter config written by `iconforge init`, defaults spelled out.
const STARTER_CONFIG: &str = r#"# iconforge configuration

[input]
# Master image the pipeline starts from, relative to this file.
# The positional argument of `iconforge generate` takes precedence.
# source = "icon-full.png"

[strip]
# Per-channel brightness cutoff: a pixel whose R, G and B all exceed this
# value is treated as background. 255 disables the pass.
threshold = 240
# Alpha written to matched pixels (the color is always white).
replacement_alpha = 0

[output]
# Directory the icon set is written to, created if missing.
dir = "icons"
# Square PNG sizes to emit. 256 is saved as linux_icon.png.
sizes = [16, 32, 48, 128, 256, 512]
# Sizes embedded in windows_icon.ico, re-derived from the transparent master.
ico_sizes = [16, 32, 48, 256]
"#;

/// Run the init command.
///
/// Writes the starter config into `dir` (or the current directory), refusing
/// to overwrite an existing file.
pub fn run_init(cli: &Cli, dir: Option<&Path>) -> Result<()> {
    let target_dir = dir.unwrap_or_else(|| Path::new("."));
    if let Some(dir) = dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create `{}`", dir.display()))?;
    }

    let file_name = cli
        .config
        .file_name()
        .unwrap_or_else(|| OsStr::new("iconforge.toml"));
    let path = target_dir.join(file_name);
    if path.exists() {
        bail!("`{}` already exists, refusing to overwrite", path.display());
    }

    fs::write(&path, STARTER_CONFIG)
        .with_context(|| format!("failed to write `{}`", path.display()))?;
    log!("init"; "wrote {}", path.display());
    Ok(())
}
