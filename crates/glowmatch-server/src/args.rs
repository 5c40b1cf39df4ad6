//! Command-line arguments for the server binary.

use std::path::PathBuf;

use clap::Parser;
use glowmatch_core::{GlowConfig, DEFAULT_CONFIG_FILE};

/// glowmatch Server - content-based skincare recommendations
#[derive(Parser, Debug)]
#[command(name = "glowmatch-server")]
#[command(author, version, about, long_about = None)]
pub struct ServerArgs {
    /// Configuration file (TOML)
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILE, env = "GLOWMATCH_CONFIG")]
    pub config: PathBuf,

    /// Product dataset (CSV or JSON), overrides catalog.dataset
    #[arg(short, long)]
    pub dataset: Option<PathBuf>,

    /// Prebuilt snapshot, overrides catalog.snapshot
    #[arg(short, long)]
    pub snapshot: Option<PathBuf>,

    /// Host address to bind to, overrides server.host
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on, overrides server.port
    #[arg(short, long)]
    pub port: Option<u16>,
}

impl ServerArgs {
    /// Applies the command-line overrides on top of the loaded configuration.
    pub fn apply(self, config: &mut GlowConfig) {
        config.catalog.override_source(self.dataset, self.snapshot);
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}
