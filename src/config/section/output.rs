//! `[output]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [output]
//! dir = "icons"                        # created if missing
//! sizes = [16, 32, 48, 128, 256, 512] # square PNG variants
//! ico_sizes = [16, 32, 48, 256]       # embedded in windows_icon.ico
//! ```
//!
//! The 256 PNG variant is saved as `linux_icon.png`; every other size is
//! saved as `icon{size}.png`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Output artifact settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the artifacts are written to (created if missing).
    pub dir: PathBuf,

    /// Square PNG sizes to emit.
    pub sizes: Vec<u32>,

    /// Sizes embedded in the Windows ICO container. Re-derived from the
    /// transparent master, so they need not appear in `sizes`.
    pub ico_sizes: Vec<u32>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("icons"),
            sizes: vec![16, 32, 48, 128, 256, 512],
            ico_sizes: vec![16, 32, 48, 256],
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::config::test_parse_config;

    #[test]
    fn test_output_config() {
        let config =
            test_parse_config("[output]\ndir = \"build/icons\"\nsizes = [8, 16]\nico_sizes = [8]");
        assert_eq!(config.output.dir, PathBuf::from("build/icons"));
        assert_eq!(config.output.sizes, vec![8, 16]);
        assert_eq!(config.output.ico_sizes, vec![8]);
    }

    #[test]
    fn test_output_config_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.output.dir, PathBuf::from("icons"));
        assert_eq!(config.output.sizes, vec![16, 32, 48, 128, 256, 512]);
        assert_eq!(config.output.ico_sizes, vec![16, 32, 48, 256]);
    }

    #[test]
    fn test_output_config_partial_override() {
        let config = test_parse_config("[output]\ndir = \"assets\"");
        assert_eq!(config.output.dir, PathBuf::from("assets"));
        // size lists use defaults
        assert_eq!(config.output.sizes, vec![16, 32, 48, 128, 256, 512]);
        assert_eq!(config.output.ico_sizes, vec![16, 32, 48, 256]);
    }
}
