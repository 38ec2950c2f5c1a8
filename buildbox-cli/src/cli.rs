use std::path::PathBuf;

use buildbox::{Builder, BuilderConfig};
use buildbox_shared::BuilderLayout;
use clap::{Args, Parser, Subcommand};

use crate::commands;

#[derive(Parser, Debug)]
#[command(
    name = "buildbox",
    version,
    about = "Inspect and control the lifetime of this build machine",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Args, Debug)]
pub struct GlobalFlags {
    /// Filesystem root the builder state lives under
    #[arg(long, env = "BUILDBOX_ROOT", default_value = "/", global = true)]
    pub root: PathBuf,

    /// Builder configuration file (defaults to etc/buildbox/main.toml under the root)
    #[arg(long, env = "BUILDBOX_CONFIG", global = true)]
    pub config: Option<PathBuf>,
}

impl GlobalFlags {
    pub fn create_builder(&self) -> anyhow::Result<Builder> {
        let layout = BuilderLayout::new(&self.root);
        let config_path = self.config.clone().unwrap_or_else(|| layout.config_path());
        tracing::debug!(config = %config_path.display(), "loading builder configuration");

        let config = BuilderConfig::load(&config_path)?;
        Ok(Builder::new(layout, config))
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Explain how this builder works and the terms of use
    Help,

    /// Show the remaining lifetime and the build PID
    Show,

    /// Extend (or shorten) the lifetime of this builder
    Prolong(commands::prolong::ProlongArgs),

    /// Hand the builder back for immediate teardown
    Release,
}
