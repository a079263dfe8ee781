use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "atto")]
#[command(version = "0.1.0")]
#[command(about = "A minimal modal terminal text editor")]
pub struct CliArgs {
    /// File to open (created on first save if it does not exist)
    pub file: PathBuf,

    /// Use this config file instead of the discovered one
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
}

impl CliArgs {
    /// Config path to load: the explicit one, else discovery.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(crate::config::discover)
    }
}
