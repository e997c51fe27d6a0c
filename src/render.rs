//! Drawing Capability
//!
//! The game never talks to SDL2 directly while drawing. Everything that ends
//! up on screen goes through the [`Surface`] trait, which the platform layer
//! implements on top of an SDL2 canvas.
//!
//! Coordinates are in logical pixels (320x240). Textures are referred to by
//! [`TextureId`] handles that the asset source hands out when an image is
//! loaded.

use sdl2::pixels::Color;
use sdl2::rect::Rect;

/// Opaque handle to a texture owned by the asset source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub usize);

/// A 2D drawing target
///
/// Methods mirror the SDL2 canvas calls they wrap and report failures the
/// same way SDL2 does, as `Err(String)`.
pub trait Surface {
    /// Fill the whole surface with a solid color
    fn clear(&mut self, color: Color);

    /// Copy the `src` region of a texture so its top-left lands at (x, y)
    fn blit(&mut self, texture: TextureId, src: Rect, x: f64, y: f64) -> Result<(), String>;

    /// Fill a rectangle, blending with what is underneath when alpha < 255
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), String>;

    /// Outline a rectangle
    fn draw_rect(&mut self, rect: Rect, color: Color) -> Result<(), String>;

    /// Logical size of the surface in pixels
    fn logical_size(&self) -> (u32, u32);
}
