mod commands;
mod config;
mod prompter;
mod screen;
mod shell;

use anyhow::Result;
use clap::Parser;
use numguess_core::PlayerStore;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::prompter::CliPrompter;
use crate::shell::Shell;

#[derive(Parser)]
#[command(name = "numguess")]
#[command(about = "Guess the number, with a local leaderboard")]
struct Args {
    /// Config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Player store file, overriding the config
    #[arg(short, long, env = "NUMGUESS_DATA")]
    data: Option<PathBuf>,

    /// Do not clear the terminal between screens
    #[arg(long)]
    no_clear: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so they stay out of the game screens
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("numguess=warn".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config_path = args.config.unwrap_or_else(config::default_config_path);
    let mut config = match Config::load(&config_path) {
        Ok(c) => {
            info!("Loaded config from {:?}", config_path);
            c
        }
        Err(e) => {
            warn!("Failed to load config: {:#}, using defaults", e);
            Config::default()
        }
    };
    if let Some(data) = args.data {
        config.data_path = data;
    }
    if args.no_clear {
        config.clear_screen = false;
    }

    info!("Using player store {:?}", config.data_path);
    let store = PlayerStore::new(&config.data_path);
    let prompter = CliPrompter;

    Shell::new(&store, &prompter)
        .leaderboard_size(config.leaderboard_size)
        .clear_screen(config.clear_screen)
        .run(&mut rand::thread_rng())?;

    Ok(())
}
