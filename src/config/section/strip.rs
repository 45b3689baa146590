//! `[strip]` section configuration.
//!
//! Controls the background removal pass.
//!
//! # Example
//!
//! ```toml
//! [strip]
//! threshold = 240          # per-channel cutoff, strictly greater-than
//! replacement_alpha = 0    # alpha written to matched pixels
//! ```
//!
//! A pixel counts as background when R, G and B all exceed `threshold`.
//! Raising the value keeps more of the image; 255 disables the pass.

use serde::{Deserialize, Serialize};

/// Background removal settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StripConfig {
    /// Per-channel brightness cutoff above which a pixel counts as background.
    pub threshold: u8,

    /// Alpha channel written to matched pixels (the color is always white).
    pub replacement_alpha: u8,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            threshold: 240,
            replacement_alpha: 0,
        }
    }
}
