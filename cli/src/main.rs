use anyhow::Context;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use pushbox_core::Session;
use std::io;
use std::path::PathBuf;

use config::{Config, DEFAULT_STAGE};
use input::Keys;
use render::{ColorRenderer, TextRenderer};

mod config;
mod game;
mod input;
mod loader;
mod render;

/// Push every block onto a goal.
#[derive(Parser, Debug)]
#[command(name = "pushbox", version, about)]
struct Args {
    /// Stage file to play (default: stage from the config file, then stage.txt)
    stage: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print plain stage symbols instead of colored cells
    #[arg(long)]
    plain: bool,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .parse_default_env()
        .init();

    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    let stage_path = args
        .stage
        .or_else(|| config.stage.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STAGE));

    let mut session = {
        let data = loader::load_stage(&stage_path)?;
        Session::from_stage(&data)
            .with_context(|| format!("Could not start stage {}", stage_path.display()))?
    };
    log::info!(
        "Loaded {}x{} stage from {}",
        session.grid().width(),
        session.grid().height(),
        stage_path.display()
    );

    let mut keys = Keys::new(io::stdin().lock());
    let stdout = io::stdout().lock();
    let state = if args.plain || !config.color {
        game::play(
            &mut session,
            &mut keys,
            &config.keys,
            &mut TextRenderer::new(stdout),
        )?
    } else {
        game::play(
            &mut session,
            &mut keys,
            &config.keys,
            &mut ColorRenderer::new(stdout),
        )?
    };

    log::info!("Session finished: {:?}", state);
    Ok(())
}
