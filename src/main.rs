use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use snake_game::config::GameConfig;
use snake_game::{event_loop, log};

#[derive(Parser)]
#[command(name = "snake_game")]
#[command(version, about = "Classic grid snake")]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board width in pixels
    #[arg(long)]
    width: Option<i32>,

    /// Board height in pixels
    #[arg(long)]
    height: Option<i32>,

    /// Cell size in pixels
    #[arg(long)]
    cell_size: Option<i32>,

    /// Milliseconds between ticks
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Append log lines to this file
    #[arg(long)]
    log_file: Option<String>,
}

impl Cli {
    fn into_config(self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };
        if let Some(v) = self.width {
            config.width = v;
        }
        if let Some(v) = self.height {
            config.height = v;
        }
        if let Some(v) = self.cell_size {
            config.cell_size = v;
        }
        if let Some(v) = self.tick_ms {
            config.tick_ms = v;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.log_file.is_some() {
            config.log_file = self.log_file;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let config = Cli::parse().into_config()?;
    log::init(config.log_file.clone());
    if let Some(seed) = config.seed {
        log::info(&format!("fixed seed {seed}, food placement is reproducible"));
    }
    event_loop::run(config)
}
