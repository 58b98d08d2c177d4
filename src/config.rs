//! Server configuration

use clap::Parser;
use std::net::SocketAddr;

/// Entries the directory starts with unless `--no-seed` is given.
pub const DEFAULT_SEED: &[(&str, &str)] = &[
    ("vids", "https://www.youtube.com"),
    ("docs", "https://gobyexample.com"),
];

/// Command-line / environment configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "link-directory", version, about = "Concurrent short-alias link directory")]
pub struct Config {
    /// Address the HTTP server listens on
    #[arg(long, env = "LINKDIR_BIND", default_value = "127.0.0.1:8090")]
    pub bind: SocketAddr,

    /// Log filter (e.g. `info`, `debug`, `link_directory=trace`)
    #[arg(long, env = "LINKDIR_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Start with an empty directory
    #[arg(long)]
    pub no_seed: bool,
}

impl Config {
    /// The entries to load into the store at startup.
    pub fn seed_entries(&self) -> &'static [(&'static str, &'static str)] {
        if self.no_seed { &[] } else { DEFAULT_SEED }
    }
}
