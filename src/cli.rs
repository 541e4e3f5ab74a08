//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Terminal form for composing semicolon-delimited migration records.
#[derive(Debug, Parser)]
#[command(name = "migcon", version)]
pub struct Cli {
    /// Config file (JSON). Defaults to the per-user config file if present.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory containing the choice source files.
    #[arg(long)]
    pub lists_dir: Option<PathBuf>,

    /// Login base used at startup and after a reset.
    #[arg(long)]
    pub login: Option<String>,
}

impl Cli {
    /// Applies command-line overrides on top of a loaded config.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(dir) = &self.lists_dir {
            config.lists_dir = dir.clone();
        }
        if let Some(login) = &self.login {
            config.default_login = login.clone();
        }
        config
    }
}
