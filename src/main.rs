//! Bubble Pop main entry point.
//!
//! A tiny "pop the rising bubbles" minigame written in Rust using:
//! - **raylib** for windowing, graphics, and input
//! - **bevy_ecs** for entity-component-system architecture
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (defaults when missing) and open the score store
//! 2. Open the raylib window and construct [`BubbleGame`]
//! 3. Hand the raylib handle to the ECS world and add the input and render
//!    systems to the frame schedule
//! 4. Each frame: advance the game by the frame time (ticks, input, layout,
//!    pops, lifecycle, render)
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --seed 42
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::prelude::*;
use bubblepop::game::{BubbleGame, FrameSet};
use bubblepop::resources::gameconfig::GameConfig;
use bubblepop::resources::scorestore::{IniScoreStore, MemoryScoreStore, ScoreStore};
use bubblepop::systems::input::{update_input_state, update_screen_size};
use bubblepop::systems::render::render_system;
use clap::Parser;
use log::{debug, error, info, warn};
use std::path::PathBuf;

/// Bubble Pop
#[derive(Parser)]
#[command(version, about = "Pop the rising bubbles before they float away.")]
struct Cli {
    /// Configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Score store file; overrides `[storage] prefs_path`.
    #[arg(long, value_name = "PATH")]
    prefs: Option<PathBuf>,

    /// Seed for bubble placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Store a last score of 0 before starting.
    #[arg(long)]
    reset_score: bool,

    /// Keep the score in memory only.
    #[arg(long)]
    ephemeral: bool,

    /// Write the effective configuration to the config file and exit.
    #[arg(long)]
    write_config: bool,
}

fn open_store(cli: &Cli, config: &GameConfig) -> Result<Box<dyn ScoreStore>, String> {
    let mut store: Box<dyn ScoreStore> = if cli.ephemeral {
        info!("Using in-memory score store");
        Box::new(MemoryScoreStore::default())
    } else {
        match IniScoreStore::open(&config.prefs_path) {
            Ok(store) => Box::new(store),
            // Unreadable store: play on without persistence unless asked to reset it
            Err(e) if !cli.reset_score => {
                warn!("{}; keeping the score in memory", e);
                Box::new(MemoryScoreStore::default())
            }
            Err(e) => return Err(e),
        }
    };
    if cli.reset_score {
        store.save_last_score(0)?;
        info!("Last score reset to 0");
    }
    Ok(store)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        info!("Using default configuration: {}", e);
    }
    if let Some(prefs) = &cli.prefs {
        config.prefs_path = prefs.clone();
    }

    // Early-exit: dump configuration and quit (no window needed)
    if cli.write_config {
        if let Err(e) = config.save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Configuration written to {}", config.config_path.display());
        return;
    }

    let store = match open_store(&cli, &config) {
        Ok(store) => store,
        Err(e) => {
            error!("Cannot open score store: {}", e);
            std::process::exit(1);
        }
    };

    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title("Bubble Pop")
        .build();
    rl.set_target_fps(config.target_fps);
    // Esc is handled as a lifecycle request
    rl.set_exit_key(None);

    // --------------- Game component ---------------
    let mut game = match cli.seed {
        Some(seed) => BubbleGame::with_seed(config, store, seed),
        None => BubbleGame::new(config, store),
    };

    let mut pops: u64 = 0;
    game.set_pop_listener(move || {
        pops += 1;
        debug!("Pop #{} this session", pops);
    });

    game.set_viewport(rl.get_screen_width(), rl.get_screen_height());

    {
        let world = game.world_mut();
        world.insert_non_send_resource(rl);
        world.insert_non_send_resource(thread);
    }
    game.frame_schedule_mut()
        .add_systems((update_screen_size, update_input_state).in_set(FrameSet::Input));
    game.frame_schedule_mut()
        .add_systems(render_system.in_set(FrameSet::Render));

    // --------------- Main loop ---------------
    while !game
        .world()
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && !game.is_quitting()
    {
        let dt = game
            .world()
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        game.advance(dt);
    }

    info!("Bye! Final score: {}", game.score());
}
