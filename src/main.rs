use sdl2::image::InitFlag;
use std::time::{Duration, Instant};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod assets;
mod camera;
mod config;
mod error;
mod game;
mod gui;
mod input_system;
mod interaction;
mod platform;
mod player;
mod render;
mod text;
mod tile;

use config::{DEFAULT_CONFIG_PATH, GameConfig};
use game::{Flow, Game};
use input_system::InputSystem;
use platform::{CanvasSurface, TextureStore};

const FRAME_TIME: Duration = Duration::from_nanos(1_000_000_000 / 60);

fn main() -> Result<(), String> {
    init_tracing();

    let config = GameConfig::load_or_default(DEFAULT_CONFIG_PATH);

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(InitFlag::PNG)?;

    let window = video_subsystem
        .window(&config.window.title, config.window.width, config.window.height)
        .position_centered()
        .resizable()
        .build()
        .map_err(|e| e.to_string())?;

    let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let mut game = Game::new(config);

    // The game draws at a fixed logical size; SDL2 scales it to the window
    let (window_width, window_height) = canvas.output_size()?;
    let (logical_width, logical_height) = game.layout(window_width, window_height);
    canvas
        .set_logical_size(logical_width, logical_height)
        .map_err(|e| e.to_string())?;

    let texture_creator = canvas.texture_creator();
    let mut textures = TextureStore::new(&texture_creator);
    let mut event_pump = sdl_context.event_pump()?;
    let mut input_system = InputSystem::new();

    info!(
        window_width,
        window_height, logical_width, logical_height, "window_ready"
    );
    info!("controls: arrows move/select, ENTER confirm, E interact, SPACE continue, F3 debug, Z quit");

    loop {
        let frame_start = Instant::now();
        let input = input_system.poll_events(&mut event_pump);

        match game.update(input, &mut textures) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Terminate) => break,
            Err(err) => error!(error = %err, "new_game_failed"),
        }

        game.draw(&mut CanvasSurface::new(&mut canvas, &textures))?;
        canvas.present();

        if let Some(remaining) = FRAME_TIME.checked_sub(frame_start.elapsed()) {
            std::thread::sleep(remaining);
        }
    }

    info!(state = ?game.state(), "shutdown");
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
