use std::path::PathBuf;

use clap::Parser;

/// Command-line interface for the bootstrap tool.
#[derive(Parser, Debug)]
#[command(
    name = "bootstrap",
    about = "Resolve dotfiles configs and install them with dotbot",
    version = option_env!("BOOTSTRAP_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
)]
pub struct Cli {
    /// Explicit config files to install
    #[arg(long = "configs", value_name = "PATH", num_args = 1..)]
    pub configs: Vec<PathBuf>,

    /// Profile files (or bare profile names) listing configs to install
    #[arg(long = "profiles", value_name = "PATH", num_args = 1..)]
    pub profiles: Vec<PathBuf>,

    /// Resolve and report configs without installing
    #[arg(short = 'd', long)]
    pub dry_run: bool,

    /// Skip the package index refresh before installing
    #[arg(long = "no-package-update", action = clap::ArgAction::SetFalse)]
    pub package_update: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Override the dotfiles root directory
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Generate shell completions and exit
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completions: Option<clap_complete::Shell>,

    /// Extra arguments passed through to dotbot
    #[arg(last = true, value_name = "DOTBOT_ARGS")]
    pub dotbot_args: Vec<String>,
}
