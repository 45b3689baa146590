//! Tool configuration management for `iconforge.toml`.
//!
//! # Sections
//!
//! | Section    | Purpose                                        |
//! |------------|------------------------------------------------|
//! | `[input]`  | Source image path                              |
//! | `[strip]`  | Background cutoff and replacement alpha        |
//! | `[output]` | Output directory, PNG and ICO size lists       |
//!
//! Values merge CLI-over-file-over-default: serde defaults reproduce the
//! classic icon set, the config file overrides them, and `generate` flags
//! override the file. Paths from the file resolve against the project root
//! (the config file's parent directory); paths from the CLI resolve against
//! the invocation directory.

mod error;
mod section;

pub use error::ConfigError;
pub use section::{InputConfig, OutputConfig, StripConfig};

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::cli::{Cli, Commands};
use crate::log;

/// Largest dimension an ICO directory entry can describe.
const ICO_MAX_SIZE: u32 = 256;

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing iconforge.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IconConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Source image settings
    #[serde(default)]
    pub input: InputConfig,

    /// Background removal settings
    #[serde(default)]
    pub strip: StripConfig,

    /// Output artifact settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl IconConfig {
    /// Load configuration for the given CLI invocation.
    ///
    /// Searches upward from cwd for the config file; running without one is
    /// fine (defaults plus CLI flags). The project root is the config file's
    /// parent directory, or cwd when no file exists.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.root = path
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| cwd.clone());
                config.config_path = path;
                config
            }
            None => {
                let mut config = Self::default();
                config.root = cwd.clone();
                config
            }
        };

        config.apply_cli_overrides(cli, &cwd);
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            // Show only the filename since the file sits at the project root
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy())
                .unwrap_or_else(|| path.to_string_lossy());
            log!("warning"; "ignoring unknown fields in {}: {}", name, ignored.join(", "));
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Apply `generate` flags on top of file/default values.
    ///
    /// CLI paths are relative to the invocation directory, not the project
    /// root, so they are resolved here before being stored.
    fn apply_cli_overrides(&mut self, cli: &Cli, cwd: &Path) {
        let Commands::Generate { args } = &cli.command else {
            return;
        };

        crate::logger::set_verbose(args.verbose);

        if let Some(source) = &args.source {
            self.input.source = Some(cwd.join(source));
        }
        if let Some(output) = &args.output {
            self.output.dir = cwd.join(output);
        }
        if let Some(threshold) = args.threshold {
            self.strip.threshold = threshold;
        }
    }

    /// Validate size lists before any filesystem work.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.output.sizes.is_empty() {
            return Err(ConfigError::Validation(
                "output.sizes must not be empty".into(),
            ));
        }
        if self.output.sizes.contains(&0) {
            return Err(ConfigError::Validation(
                "output.sizes must not contain 0".into(),
            ));
        }
        if self.output.ico_sizes.is_empty() {
            return Err(ConfigError::Validation(
                "output.ico_sizes must not be empty".into(),
            ));
        }
        if let Some(&size) = self
            .output
            .ico_sizes
            .iter()
            .find(|&&s| s == 0 || s > ICO_MAX_SIZE)
        {
            return Err(ConfigError::Validation(format!(
                "output.ico_sizes entry {size} is outside the ICO range 1-{ICO_MAX_SIZE}"
            )));
        }
        Ok(())
    }

    /// Absolute path to the source image, or an error when neither the CLI
    /// nor the config file names one.
    pub fn source_path(&self) -> Result<PathBuf> {
        match &self.input.source {
            Some(source) => Ok(self.root.join(source)),
            None => bail!("no source image given (pass one to `generate` or set `[input] source`)"),
        }
    }

    /// Absolute path to the output directory.
    pub fn output_dir(&self) -> PathBuf {
        self.root.join(&self.output.dir)
    }
}

// ============================================================================
// config file discovery
// ============================================================================

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;

    // First check if config_name is an absolute path
    if config_name.is_absolute() && config_name.exists() {
        return Some(config_name.to_path_buf());
    }

    // Walk up from cwd looking for the config file
    let mut current = cwd.as_path();
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

/// Parse a TOML snippet, panicking on error. Test helper for section tests.
#[cfg(test)]
pub(crate) fn test_parse_config(content: &str) -> IconConfig {
    IconConfig::from_str(content).expect("config should parse")
}
