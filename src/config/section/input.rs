//! `[input]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [input]
//! source = "icon-full.png"    # master image, relative to the config file
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Source image settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Path to the master image. The positional argument of `generate`
    /// takes precedence when both are given.
    pub source: Option<PathBuf>,
}
