use crate::error::GameError;
use crate::render::TextureId;
use crate::tile::TileMap;
use std::path::Path;

/// Source of already-parsed play resources
///
/// The game asks for assets by path and gets back handles or data; how the
/// bytes are read and decoded is up to the implementation.
pub trait AssetSource {
    fn load_texture(&mut self, path: &Path) -> Result<TextureId, GameError>;

    fn load_tile_map(&mut self, path: &Path) -> Result<TileMap, GameError> {
        TileMap::load_from_file(path)
    }
}
