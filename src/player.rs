use crate::camera::Camera;
use crate::input_system::{InputState, Key};
use crate::render::{Surface, TextureId};
use sdl2::rect::Rect;

/// Idle frame on the player sprite sheet
pub const IDLE_FRAME: (i32, i32, u32, u32) = (0, 104, 16, 24);

/// Offset from the player position to the point the camera follows
pub const CAMERA_ANCHOR: f64 = 8.0;

pub struct Player {
    pub x: f64,
    pub y: f64,
    pub speed: f64,
    sprite: TextureId,
}

impl Player {
    pub fn new(x: f64, y: f64, speed: f64, sprite: TextureId) -> Self {
        Player { x, y, speed, sprite }
    }

    /// Moves by `speed` on each axis whose arrow key is held
    ///
    /// Axes are independent, so diagonal movement is faster than straight.
    pub fn apply_movement(&mut self, input: &InputState) {
        if input.is_held(Key::Left) {
            self.x -= self.speed;
        }
        if input.is_held(Key::Right) {
            self.x += self.speed;
        }
        if input.is_held(Key::Up) {
            self.y -= self.speed;
        }
        if input.is_held(Key::Down) {
            self.y += self.speed;
        }
    }

    /// World point the camera centres on
    pub fn camera_target(&self) -> (f64, f64) {
        (self.x + CAMERA_ANCHOR, self.y + CAMERA_ANCHOR)
    }

    pub fn render(&self, surface: &mut dyn Surface, camera: &Camera) -> Result<(), String> {
        let (sx, sy, w, h) = IDLE_FRAME;
        let (x, y) = camera.to_screen(self.x, self.y);
        surface.blit(self.sprite, Rect::new(sx, sy, w, h), x, y)
    }
}
