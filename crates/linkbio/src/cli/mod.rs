//! Command-line interface.
//!
//! ```text
//! linkbio [--config links.yaml] [-v] render [--out index.html] [--theme auto|light|dark]
//! linkbio check
//! linkbio watch --out index.html [--interval 2]
//! ```

mod commands;
pub mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use crate::config::PageConfig;
use crate::theme::{ColorMode, ColorSchemeQuery};

/// Render a link-in-bio page with device-aware light/dark theming.
#[derive(Debug, Parser)]
#[command(name = "linkbio", version, about)]
pub struct Cli {
    /// Page configuration (.yaml, .yml or .json); the sample page when omitted
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Mount the page and write an HTML snapshot
    Render(RenderArgs),
    /// Validate the configuration and list the links
    Check,
    /// Re-export the snapshot whenever the device color preference flips
    Watch(WatchArgs),
}

/// Where the initial device preference comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ThemeArg {
    /// Ask the operating system
    #[default]
    Auto,
    Light,
    Dark,
}

impl ThemeArg {
    pub(crate) fn color_scheme(self) -> ColorSchemeQuery {
        match self {
            ThemeArg::Auto => ColorSchemeQuery::detect(),
            ThemeArg::Light => ColorSchemeQuery::new(ColorMode::Light),
            ThemeArg::Dark => ColorSchemeQuery::new(ColorMode::Dark),
        }
    }
}

#[derive(Debug, clap::Args)]
pub struct RenderArgs {
    /// Output file; stdout when omitted
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Device preference to render with
    #[arg(long, value_enum, default_value_t = ThemeArg::Auto)]
    pub theme: ThemeArg,

    /// Click the theme toggle once before exporting
    #[arg(long)]
    pub toggle: bool,

    /// Directory holding a page.html template override
    #[arg(long)]
    pub template_dir: Option<PathBuf>,
}

#[derive(Debug, clap::Args)]
pub struct WatchArgs {
    /// Output file
    #[arg(short, long)]
    pub out: PathBuf,

    /// Seconds between preference checks
    #[arg(long, default_value_t = 2)]
    pub interval: u64,

    /// Directory holding a page.html template override
    #[arg(long)]
    pub template_dir: Option<PathBuf>,
}

/// Loads the configuration and runs the selected command.
pub fn run(cli: Cli) -> Result<ExitCode> {
    let config = match &cli.config {
        Some(path) => PageConfig::from_path(path)
            .with_context(|| format!("could not load config {}", path.display()))?,
        None => PageConfig::default(),
    };

    match cli.command {
        Command::Render(args) => commands::render(&config, &args),
        Command::Check => commands::check(&config),
        Command::Watch(args) => commands::watch(&config, &args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render() {
        let cli = Cli::try_parse_from([
            "linkbio", "-vv", "render", "--theme", "dark", "--out", "index.html",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Render(args) => {
                assert_eq!(args.theme, ThemeArg::Dark);
                assert_eq!(args.out, Some(PathBuf::from("index.html")));
                assert!(!args.toggle);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let cli = Cli::try_parse_from(["linkbio", "check", "--config", "links.yaml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("links.yaml")));
        assert!(matches!(cli.command, Command::Check));
    }

    #[test]
    fn test_watch_requires_out() {
        assert!(Cli::try_parse_from(["linkbio", "watch"]).is_err());
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
