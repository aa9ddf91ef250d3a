//! Service Configuration
//!
//! Command-line flags, each with an environment variable fallback.

use crate::ingestion::types::SeedSource;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "recipe-catalog", about = "Serves a recipe collection over HTTP")]
pub struct ServiceConfig {
    /// Address the HTTP server binds to.
    #[arg(long, env = "RECIPES_BIND", default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Seed file to import at startup. Defaults to the bundled recipes.json.
    #[arg(long, env = "RECIPES_SEED")]
    pub seed: Option<PathBuf>,

    /// Maximum log level (error, warn, info, debug, trace).
    #[arg(long, env = "RECIPES_LOG", default_value = "info")]
    pub log_level: tracing::Level,
}

impl ServiceConfig {
    pub fn seed_source(&self) -> SeedSource {
        SeedSource::from(self.seed.clone())
    }
}
