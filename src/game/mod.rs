// Game module - top-level state machine
//
// This module contains:
// - types.rs: GameState, Flow and the main menu options
// - world.rs: PlaySession (player, map, camera) and the office content
//
// Game is the only place where the other components meet. Each frame the
// host calls update() then draw(); update() reads input and mutates state,
// draw() only reads.

pub mod types;
pub mod world;

pub use types::*;
pub use world::PlaySession;

use crate::assets::AssetSource;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::gui::{DebugOverlay, DebugStats, Menu, MenuItem};
use crate::input_system::{InputState, Key};
use crate::interaction::{self, DialogueBox, InteractionPoint};
use crate::render::Surface;
use sdl2::pixels::Color;
use std::time::Instant;

const BACKGROUND: Color = Color::RGB(0xf0, 0xf0, 0xf0);
const TITLE: &str = "NETSCAPE";
const MENU_HINT: &str = "UP/DOWN SELECT - ENTER CONFIRM";
const LOAD_FAILED: &str = "COULD NOT LOAD GAME FILES";

pub struct Game {
    state: GameState,
    config: GameConfig,
    menu: Menu,
    session: Option<PlaySession>,
    interaction_points: Vec<InteractionPoint>,
    dialogue: DialogueBox,
    debug: DebugOverlay,
    should_exit: bool,
    status: Option<&'static str>,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        let items = MainMenuOption::all()
            .iter()
            .map(|option| MenuItem::new(option.label()))
            .collect();

        Game {
            state: GameState::MainMenu,
            menu: Menu::new(TITLE, MENU_HINT, items),
            session: None,
            interaction_points: world::office_interaction_points(),
            dialogue: DialogueBox::new(),
            debug: DebugOverlay::new(config.show_debug_overlay),
            should_exit: false,
            status: None,
            config,
        }
    }

    /// Logical resolution, independent of the window size
    pub fn layout(&self, _outer_width: u32, _outer_height: u32) -> (u32, u32) {
        (LOGICAL_WIDTH, LOGICAL_HEIGHT)
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Advances the game by one frame
    ///
    /// Returns `Flow::Terminate` once the player asked to quit. An error
    /// means starting a new game failed; the game stays on the main menu
    /// and can keep running.
    pub fn update(
        &mut self,
        input: &InputState,
        assets: &mut dyn AssetSource,
    ) -> Result<Flow, GameError> {
        if self.should_exit || input.quit_requested() {
            self.should_exit = true;
            return Ok(Flow::Terminate);
        }

        self.debug.fps.tick(Instant::now());

        if input.just_pressed(Key::F3) {
            self.debug.toggle();
            tracing::debug!(enabled = self.debug.enabled, "debug_overlay_toggled");
        }

        match self.state {
            GameState::MainMenu => self.update_main_menu(input, assets)?,
            GameState::Playing => self.update_playing(input),
        }

        if self.should_exit {
            tracing::info!(state = ?self.state, "exit_requested");
            Ok(Flow::Terminate)
        } else {
            Ok(Flow::Continue)
        }
    }

    fn update_main_menu(
        &mut self,
        input: &InputState,
        assets: &mut dyn AssetSource,
    ) -> Result<(), GameError> {
        if input.just_pressed(Key::Up) {
            self.menu.navigate_up();
        }
        if input.just_pressed(Key::Down) {
            self.menu.navigate_down();
        }
        if input.just_pressed(Key::Enter) {
            match MainMenuOption::from_index(self.menu.confirm()) {
                Some(MainMenuOption::NewGame) => self.start_new_game(assets)?,
                Some(MainMenuOption::Exit) => self.should_exit = true,
                None => {}
            }
        }
        Ok(())
    }

    fn start_new_game(&mut self, assets: &mut dyn AssetSource) -> Result<(), GameError> {
        match PlaySession::load(assets, &self.config) {
            Ok(session) => {
                self.session = Some(session);
                self.interaction_points = world::office_interaction_points();
                self.dialogue.close();
                self.status = None;
                self.state = GameState::Playing;
                tracing::info!("new_game_started");
                Ok(())
            }
            Err(err) => {
                self.status = Some(LOAD_FAILED);
                Err(err)
            }
        }
    }

    fn update_playing(&mut self, input: &InputState) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        if !self.dialogue.is_visible() {
            session.player.apply_movement(input);

            if input.is_held(Key::Z) || input.just_pressed(Key::Escape) {
                self.should_exit = true;
            }

            let triggered = interaction::scan_points(
                &mut self.interaction_points,
                session.player.x,
                session.player.y,
                input.just_pressed(Key::E),
            );
            if let Some(index) = triggered {
                if self.dialogue.open(index, &self.interaction_points) {
                    tracing::info!(point = index, "dialogue_opened");
                }
            }
        } else if input.just_pressed(Key::Space) {
            let point = self.dialogue.current_point();
            self.dialogue.advance(&mut self.interaction_points);
            if !self.dialogue.is_visible() {
                tracing::info!(point = ?point, "dialogue_closed");
            }
        }

        session.update_camera();
    }

    pub fn draw(&self, surface: &mut dyn Surface) -> Result<(), String> {
        surface.clear(BACKGROUND);

        match (self.state, &self.session) {
            (GameState::Playing, Some(session)) => {
                session.render(surface)?;
                interaction::render_prompts(surface, &self.interaction_points, &session.camera)?;
                self.dialogue.render(surface, &self.interaction_points)?;
                self.debug.render(
                    surface,
                    &DebugStats {
                        player: (session.player.x, session.player.y),
                        camera: (session.camera.x, session.camera.y),
                        fps: self.debug.fps.fps(),
                    },
                )
            }
            _ => self.menu.render(surface, self.status),
        }
    }
}
