//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Iconforge icon pipeline CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: iconforge.toml)
    #[arg(short = 'C', long, default_value = "iconforge.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a starter config file
    #[command(visible_alias = "i")]
    Init {
        /// Directory to place the config file in (default: current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        path: Option<PathBuf>,
    },

    /// Generate the icon set from a source image
    #[command(visible_alias = "g")]
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },
}

/// Generate command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Source image path (overrides `[input] source` from the config file)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub source: Option<PathBuf>,

    /// Output directory (overrides `[output] dir`)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Per-channel background cutoff, 0-255 (overrides `[strip] threshold`)
    #[arg(short, long)]
    pub threshold: Option<u8>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

#[allow(unused)]
impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
    pub const fn is_generate(&self) -> bool {
        matches!(self.command, Commands::Generate { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_args_parse() {
        let cli = Cli::try_parse_from([
            "iconforge",
            "generate",
            "master.png",
            "-o",
            "out",
            "-t",
            "200",
            "-V",
        ])
        .unwrap();

        let Commands::Generate { args } = &cli.command else {
            panic!("expected generate command");
        };
        assert_eq!(args.source.as_deref(), Some(std::path::Path::new("master.png")));
        assert_eq!(args.output.as_deref(), Some(std::path::Path::new("out")));
        assert_eq!(args.threshold, Some(200));
        assert!(args.verbose);
    }

    #[test]
    fn test_generate_alias() {
        let cli = Cli::try_parse_from(["iconforge", "g", "master.png"]).unwrap();
        assert!(cli.is_generate());
    }

    #[test]
    fn test_init_defaults() {
        let cli = Cli::try_parse_from(["iconforge", "init"]).unwrap();
        assert!(cli.is_init());
        assert_eq!(cli.config, PathBuf::from("iconforge.toml"));
    }

    #[test]
    fn test_threshold_range_rejected() {
        // u8 parser rejects values over 255
        assert!(Cli::try_parse_from(["iconforge", "generate", "-t", "256"]).is_err());
    }
}
