//! Tankyard entry point.
//!
//! Loads `config.ini` (falling back to defaults), builds a session and runs
//! it either headless or, with the `raylib` feature, in a window.
//!
//! ```sh
//! cargo run --release --features raylib
//! cargo run -- --headless --ticks 50 --replay demos/duel.json
//! ```

use std::path::PathBuf;

use clap::Parser;
use log::{error, info, warn};

use tankyard::game::{Game, RunOptions};
use tankyard::replay::Replay;
use tankyard::resources::drawlist::LogSink;
use tankyard::resources::gameconfig::GameConfig;

/// Two-player top-down tank arena
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "config.ini")]
    config: PathBuf,

    /// Stop after this many ticks.
    #[arg(long, value_name = "N")]
    ticks: Option<u64>,

    /// JSON file of scripted key events to feed in.
    #[arg(long, value_name = "PATH")]
    replay: Option<PathBuf>,

    /// Run without a window even when built with raylib.
    #[arg(long)]
    headless: bool,

    /// Sleep one tick interval between headless ticks.
    #[arg(long)]
    realtime: bool,

    /// Write the effective configuration to the config path and exit.
    #[arg(long)]
    write_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }

    if cli.write_config {
        match config.save_to_file() {
            Ok(()) => println!("Configuration written to {}", cli.config.display()),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    let replay = match cli.replay.as_deref().map(Replay::load).transpose() {
        Ok(replay) => replay,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let game = match Game::new(config) {
        Ok(game) => game,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let headless = cli.headless || replay.is_some() || !cfg!(feature = "raylib");
    if headless {
        run_headless(
            game,
            RunOptions {
                max_ticks: cli.ticks,
                replay,
                realtime: cli.realtime,
            },
        );
    } else {
        run_windowed(game);
    }
}

fn run_headless(mut game: Game, options: RunOptions) {
    let mut sink = LogSink::default();
    let ticks = game.run_headless(&mut sink, &options);
    for tank in game.tanks() {
        if let Some(position) = game.position(*tank) {
            info!("tank {:?} at ({}, {})", tank, position.x, position.y);
        }
    }
    info!(
        "{} tick(s), {} draw command(s), {} bullet(s) live",
        ticks,
        sink.executed,
        game.bullets().len()
    );
}

#[cfg(feature = "raylib")]
fn run_windowed(game: Game) {
    tankyard::frontend::run_window(game);
}

#[cfg(not(feature = "raylib"))]
fn run_windowed(_game: Game) {
    warn!("Built without the raylib feature; nothing to show");
}
