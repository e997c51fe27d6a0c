//! SDL2 Backend
//!
//! Implements the game's capabilities on top of SDL2:
//!
//! - [`TextureStore`] is the [`AssetSource`]: it decodes images through
//!   SDL2_image and keeps the textures alive, handing out [`TextureId`]s.
//! - [`CanvasSurface`] is the [`Surface`]: it forwards draw calls to the
//!   window canvas, resolving texture handles through the store.

use crate::assets::AssetSource;
use crate::error::GameError;
use crate::render::{Surface, TextureId};
use sdl2::image::LoadTexture;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Texture, TextureCreator, WindowCanvas};
use sdl2::video::WindowContext;
use std::path::Path;

pub struct TextureStore<'a> {
    creator: &'a TextureCreator<WindowContext>,
    textures: Vec<Texture<'a>>,
}

impl<'a> TextureStore<'a> {
    pub fn new(creator: &'a TextureCreator<WindowContext>) -> Self {
        TextureStore {
            creator,
            textures: Vec::new(),
        }
    }

    pub fn get(&self, id: TextureId) -> Option<&Texture<'a>> {
        self.textures.get(id.0)
    }
}

impl AssetSource for TextureStore<'_> {
    fn load_texture(&mut self, path: &Path) -> Result<TextureId, GameError> {
        let texture = self
            .creator
            .load_texture(path)
            .map_err(|message| GameError::Texture {
                path: path.to_path_buf(),
                message,
            })?;

        let query = texture.query();
        tracing::info!(
            path = %path.display(),
            width = query.width,
            height = query.height,
            "texture_loaded"
        );

        self.textures.push(texture);
        Ok(TextureId(self.textures.len() - 1))
    }
}

pub struct CanvasSurface<'c, 'a> {
    canvas: &'c mut WindowCanvas,
    textures: &'c TextureStore<'a>,
}

impl<'c, 'a> CanvasSurface<'c, 'a> {
    pub fn new(canvas: &'c mut WindowCanvas, textures: &'c TextureStore<'a>) -> Self {
        CanvasSurface { canvas, textures }
    }

    fn set_color(&mut self, color: Color) {
        let blend = if color.a < 255 {
            BlendMode::Blend
        } else {
            BlendMode::None
        };
        self.canvas.set_blend_mode(blend);
        self.canvas.set_draw_color(color);
    }
}

impl Surface for CanvasSurface<'_, '_> {
    fn clear(&mut self, color: Color) {
        self.set_color(color);
        self.canvas.clear();
    }

    fn blit(&mut self, texture: TextureId, src: Rect, x: f64, y: f64) -> Result<(), String> {
        let texture = self
            .textures
            .get(texture)
            .ok_or_else(|| format!("unknown texture {:?}", texture))?;
        let dst = Rect::new(x.round() as i32, y.round() as i32, src.width(), src.height());
        self.canvas.copy(texture, Some(src), Some(dst))
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), String> {
        self.set_color(color);
        self.canvas.fill_rect(rect)
    }

    fn draw_rect(&mut self, rect: Rect, color: Color) -> Result<(), String> {
        self.set_color(color);
        self.canvas.draw_rect(rect)
    }

    fn logical_size(&self) -> (u32, u32) {
        self.canvas.logical_size()
    }
}
