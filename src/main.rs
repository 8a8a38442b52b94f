//! Tilemap editor entry point.
//!
//! A grid-based level editor written in Rust using:
//! - **raylib** for windowing, input, textures and drawing
//! - **bevy_ecs** for the editor state (resources), per-frame systems and
//!   event observers
//!
//! # Controls
//!
//! - Up / Down: cycle the held tile through the tileset
//! - Left click: paint the held tile into the hovered cell
//! - Right click: erase the hovered cell
//! - S / L: save / load a level (name typed in the terminal)
//! - Space: screenshot (name typed in the terminal)
//! - F11: toggle the debug overlay
//!
//! # Main Loop
//!
//! 1. Load `config.ini`, open the window, slice the tileset
//! 2. Insert editor resources and observers into the ECS world
//! 3. Each frame: read input, snap the mouse to the grid, handle input,
//!    apply queued edits once, render
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --level castle
//! ```

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};
use std::path::{Path, PathBuf};
use std::process;

use tilemapeditor::editor::{add_editing_systems, setup_editor};
use tilemapeditor::events::level::load_level_into;
use tilemapeditor::levelfile;
use tilemapeditor::resources::editorconfig::EditorConfig;
use tilemapeditor::resources::overlay::RenderOverlay;
use tilemapeditor::resources::prompt::Prompt;
use tilemapeditor::resources::tilegrid::TileGrid;
use tilemapeditor::resources::tileset::TilesetCatalog;
use tilemapeditor::systems::cursor::update_cursor_cell;
use tilemapeditor::systems::edit::update_edit_commands;
use tilemapeditor::systems::input::{handle_editor_input, update_input_state};
use tilemapeditor::systems::render::render_system;

/// Tilemap editor: paint tiles from a tileset onto a grid and save it as text.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Configuration file to read.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Open this level (a name inside the levels directory) at startup.
    #[arg(long, value_name = "NAME")]
    level: Option<String>,

    /// Check that a level file matches the configured grid and tileset, then exit.
    #[arg(long, value_name = "PATH")]
    check_level: Option<PathBuf>,

    /// Write the effective configuration as INI and exit.
    /// Optionally provide a path (default: the --config path).
    #[arg(long, value_name = "PATH")]
    write_config: Option<Option<PathBuf>>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = EditorConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{} ({:?}), using defaults", e, config.config_path);
    }
    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        process::exit(1);
    }

    // Early-exit: write the configuration and quit (no window needed)
    if let Some(maybe_path) = cli.write_config {
        if let Some(path) = maybe_path {
            config.config_path = path;
        }
        if let Err(e) = config.save_to_file() {
            error!("{}", e);
            process::exit(1);
        }
        println!("Configuration written to {}", config.config_path.display());
        return;
    }

    // Early-exit: validate a level file and quit (no window needed)
    if let Some(path) = cli.check_level {
        let grid = TileGrid::new(config.grid_width, config.grid_height, config.tile_count());
        match levelfile::read_level(&path, &grid) {
            Ok(cells) => {
                let filled = cells.iter().flatten().count();
                println!(
                    "{} is a valid {}x{} level ({} tiles placed)",
                    path.display(),
                    grid.width(),
                    grid.height(),
                    filled
                );
                return;
            }
            Err(e) => {
                eprintln!("Invalid level: {}", e);
                process::exit(1);
            }
        }
    }

    // --------------- Raylib window & tileset ---------------
    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .title(&config.window_title)
        .build();
    rl.set_target_fps(config.target_fps);
    // Only closing the window quits.
    rl.set_exit_key(None);

    let catalog = match TilesetCatalog::load(
        &mut rl,
        &thread,
        &config.tileset_path,
        config.tileset_layout(),
    ) {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    };

    // --------------- ECS world + resources ---------------
    let levels_dir = config.levels_dir.clone();
    let mut world = World::new();
    setup_editor(&mut world, config, Prompt::stdin());
    world.insert_non_send_resource(catalog);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    if let Some(name) = cli.level {
        open_startup_level(&mut world, &levels_dir, &name);
    }

    let mut update = Schedule::default();
    add_editing_systems(&mut update);
    update.add_systems(
        (update_input_state, update_cursor_cell)
            .chain()
            .before(handle_editor_input),
    );
    update.add_systems(render_system.after(update_edit_commands));

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        update.run(&mut world);
    }
    info!("Window closed, exiting");
}

/// Load `<levels_dir>/<name>.txt` before the first frame.
fn open_startup_level(world: &mut World, levels_dir: &Path, name: &str) {
    let path = match levelfile::level_path(levels_dir, name) {
        Ok(path) => path,
        Err(e) => {
            error!("{}", e);
            return;
        }
    };
    let result = world.resource_scope(|world, mut grid: Mut<TileGrid>| {
        let mut overlay = world.resource_mut::<RenderOverlay>();
        load_level_into(&path, &mut grid, &mut overlay)
    });
    match result {
        Ok(()) => info!("Level loaded from {}", path.display()),
        Err(e) => error!("Unable to load level: {}", e),
    }
}
