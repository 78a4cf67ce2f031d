//! Tileworks demo entry point.
//!
//! A small 2D toolkit written in Rust using:
//! - **raylib** for windowing, graphics, and audio
//! - **bevy_ecs** for resources, messages and the per-frame schedule
//!
//! # Main Loop
//!
//! 1. Load `config.ini`, open the raylib window, fill the ECS world
//! 2. Build the player sprite (load, crop, rescale, texture, release)
//! 3. Load the tile sheet, font and UI widgets; start the audio thread
//! 4. Every frame: sample WASD, run the schedule (audio bridge, motion),
//!    draw rectangles, tiles, sprites and text
//! 5. Destroy sprites and shut the audio thread down on exit
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --config ./config.ini
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};
use raylib::prelude::*;

use tileworks::components::rect::RectGroup;
use tileworks::components::text::Paragraph;
use tileworks::error::GameError;
use tileworks::resources::audio::{destroy_audio, initialize_audio, setup_audio};
use tileworks::resources::fontstore::FontStore;
use tileworks::resources::gameconfig::GameConfig;
use tileworks::resources::input::WasdController;
use tileworks::resources::resourcepaths::ResourcePaths;
use tileworks::resources::screensize::{Coord, ScreenSize};
use tileworks::resources::spritestore::SpriteStore;
use tileworks::resources::tileatlas::{TILE_SIZE, TileLayer, TileType, Tileset};
use tileworks::sprite::backend::{RaylibCanvas, RaylibUploader};
use tileworks::sprite::{Surface, create_sprite_from_image};
use tileworks::systems::audio::{
    forward_audio_cmds, poll_audio_messages, update_bevy_audio_cmds, update_bevy_audio_messages,
};
use tileworks::systems::input::update_input_state;
use tileworks::systems::movement::sprite_motion_system;
use tileworks::systems::render::render_pass;

const TILE_SHEET: &str = "tiles.png";
const UI_FONT: &str = "default";
const PLAYER_KEY: &str = "player";

/// Tileworks sprite demo
#[derive(Parser)]
#[command(version, about = "Move a sprite over a tile floor with WASD.")]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Player image under `<root>/img/`, overriding the config.
    #[arg(long, value_name = "FILE")]
    image: Option<String>,

    /// Write the default configuration to `--config` and exit.
    #[arg(long)]
    write_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if cli.write_config {
        if let Err(e) = GameConfig::with_path(&cli.config).save_to_file() {
            error!("{}", e);
            std::process::exit(1);
        }
        return;
    }

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }
    if let Some(image) = cli.image {
        config.player_image = image;
    }

    if let Err(e) = run(config) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(config: GameConfig) -> Result<(), GameError> {
    info!("Starting tileworks");
    let (width, height) = config.window_size();
    let mut builder = raylib::init();
    builder.size(width as i32, height as i32).title(&config.title);
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);

    let paths = config.resource_paths();
    let screen = ScreenSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    };

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(screen);
    world.insert_resource(WasdController::new());

    let mut sprites: SpriteStore<Texture2D> = SpriteStore::new();
    let mut player = {
        let mut uploader = RaylibUploader::new(&mut rl, &thread);
        create_sprite_from_image(&mut uploader, &paths, &config.player_recipe())?
    };
    player.set_speed(config.player_speed);
    player.set_moment_bounds(
        config.moment_min,
        config.moment_max,
        config.moment_min,
        config.moment_max,
    );
    player.set_position(
        (screen.w - player.width()) / 2,
        (screen.h - player.height()) / 2,
    );
    sprites.insert_controlled(PLAYER_KEY, player);
    world.insert_non_send_resource(sprites);

    load_tiles(&mut world, &mut rl, &thread, &paths, screen);
    load_ui(&mut world, &mut rl, &thread, &paths, screen);

    // Init audio
    setup_audio(&mut world);
    initialize_audio(&mut world, &paths);

    world.insert_resource(paths);
    world.insert_resource(config);

    let mut update = Schedule::default();
    update.add_systems(
        // audio systems must be together
        (
            update_bevy_audio_cmds,
            forward_audio_cmds,
            poll_audio_messages,
            update_bevy_audio_messages,
        )
            .chain(),
    );
    update.add_systems(sprite_motion_system::<Texture2D>);

    // --------------- Main loop ---------------
    while !rl.window_should_close() {
        update_input_state(&mut world.resource_mut::<WasdController>(), |key| {
            rl.is_key_down(key)
        });

        update.run(&mut world);

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        let mut canvas = RaylibCanvas::new(&mut d);
        render_pass(&mut world, &mut canvas);
    }

    if let Some(mut sprites) = world.remove_non_send_resource::<SpriteStore<Texture2D>>() {
        sprites.clear();
    }
    destroy_audio(&mut world);
    info!("Bye");
    Ok(())
}

/// Upload the tile sheet and lay a floor with a brick border. A missing sheet
/// only disables the layer.
fn load_tiles(
    world: &mut World,
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    paths: &ResourcePaths,
    screen: ScreenSize,
) {
    let sheet = match Surface::load(paths.image(TILE_SHEET)) {
        Ok(sheet) => sheet,
        Err(e) => {
            warn!("No tile layer: {}", e);
            return;
        }
    };
    let mut uploader = RaylibUploader::new(rl, thread);
    let tileset = match Tileset::build(&mut uploader, &sheet) {
        Ok(tileset) => tileset,
        Err(e) => {
            warn!("No tile layer: {}", e);
            return;
        }
    };

    let columns = (screen.w / TILE_SIZE).max(1) as usize;
    let rows = (screen.h / TILE_SIZE).max(1) as usize;
    let tiles = (0..rows)
        .flat_map(|row| (0..columns).map(move |col| (row, col)))
        .map(|(row, col)| {
            let edge = row == 0 || col == 0 || row == rows - 1 || col == columns - 1;
            match (edge, (row * 7 + col * 3) % 11) {
                (true, 0) => TileType::BrickCrack1,
                (true, _) => TileType::Brick,
                (false, 0) => TileType::FloorCrack1,
                (false, 5) => TileType::FloorCrack2,
                (false, _) => TileType::Floor,
            }
        })
        .collect();

    world.insert_non_send_resource(tileset);
    world.insert_resource(TileLayer::new(columns, tiles, (0, 0)));
}

/// Load the UI font and build the title bar. Without the font only the
/// rectangles are shown.
fn load_ui(
    world: &mut World,
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    paths: &ResourcePaths,
    screen: ScreenSize,
) {
    let mut rects = RectGroup::new(screen);
    rects
        .add_rect("title", Coord::Centered, 8, 320, 40, Color::DARKBLUE)
        .set_border(2, Color::SKYBLUE);
    world.insert_resource(rects);

    let mut fonts: FontStore = FontStore::new();
    match fonts.load(rl, thread, paths, UI_FONT) {
        Ok(font) => {
            let mut paragraph: Paragraph<Font> = Paragraph::new(screen);
            paragraph.add_line(
                "title",
                Coord::Centered,
                16,
                font.clone(),
                24.0,
                Color::RAYWHITE,
                "tileworks",
            );
            paragraph.add_line(
                "help",
                Coord::Centered,
                screen.h - 32,
                font,
                18.0,
                Color::LIGHTGRAY,
                "WASD to move",
            );
            world.insert_non_send_resource(paragraph);
        }
        Err(e) => warn!("No text: {}", e),
    }
    world.insert_non_send_resource(fonts);
}
