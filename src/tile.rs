use crate::camera::Camera;
use crate::error::GameError;
use crate::render::{Surface, TextureId};
use sdl2::rect::Rect;
use serde::Deserialize;
use std::path::Path;

/// Edge length of one tile, both on screen and in the atlas
pub const TILE_SIZE: u32 = 16;

/// Number of tile columns in the atlas image
pub const ATLAS_COLUMNS: u32 = 16;

/// One layer of the tile map as stored in the map JSON
///
/// `data` is row-major and holds 1-based atlas indices; 0 means no tile.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TileLayer {
    pub data: Vec<u32>,
    pub width: u32,
    pub height: u32,
}

/// Where a single tile ends up and which atlas cell it shows
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilePlacement {
    pub x: f64,
    pub y: f64,
    pub src: Rect,
}

impl TileLayer {
    /// Map-space pixel position and atlas region of every non-empty cell
    pub fn placements(&self) -> impl Iterator<Item = TilePlacement> + '_ {
        self.data.iter().enumerate().filter_map(move |(i, &id)| {
            if id == 0 {
                return None;
            }
            let i = i as u32;
            let x = (i % self.width) * TILE_SIZE;
            let y = (i / self.width) * TILE_SIZE;
            Some(TilePlacement {
                x: x as f64,
                y: y as f64,
                src: atlas_region(id),
            })
        })
    }
}

/// Atlas cell for a 1-based tile id
pub fn atlas_region(id: u32) -> Rect {
    let index = id - 1;
    let src_x = (index % ATLAS_COLUMNS) * TILE_SIZE;
    let src_y = (index / ATLAS_COLUMNS) * TILE_SIZE;
    Rect::new(src_x as i32, src_y as i32, TILE_SIZE, TILE_SIZE)
}

/// Parsed tile map, immutable once loaded
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TileMap {
    pub layers: Vec<TileLayer>,
}

impl TileMap {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| GameError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(path, &content)
    }

    /// Parses and validates map JSON; `path` is only used for error messages
    pub fn from_json(path: impl AsRef<Path>, content: &str) -> Result<Self, GameError> {
        let path = path.as_ref();
        let map: TileMap = serde_json::from_str(content).map_err(|source| GameError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        map.validate()
            .map_err(|message| GameError::InvalidTileMap {
                path: path.to_path_buf(),
                message,
            })?;
        Ok(map)
    }

    fn validate(&self) -> Result<(), String> {
        if self.layers.is_empty() {
            return Err("map has no layers".to_string());
        }

        for (index, layer) in self.layers.iter().enumerate() {
            if layer.width == 0 || layer.height == 0 {
                return Err(format!("layer {} has zero size", index));
            }
            let expected = layer.width as usize * layer.height as usize;
            if layer.data.len() != expected {
                return Err(format!(
                    "layer {} has {} tiles, expected {}x{} = {}",
                    index,
                    layer.data.len(),
                    layer.width,
                    layer.height,
                    expected
                ));
            }
        }

        Ok(())
    }

    /// Map size in pixels, taken from the first layer
    pub fn pixel_size(&self) -> (f64, f64) {
        self.layers
            .first()
            .map(|layer| {
                (
                    (layer.width * TILE_SIZE) as f64,
                    (layer.height * TILE_SIZE) as f64,
                )
            })
            .unwrap_or((0.0, 0.0))
    }

    /// Draws every layer in file order, shifted by the camera offset
    pub fn render(
        &self,
        surface: &mut dyn Surface,
        atlas: TextureId,
        camera: &Camera,
    ) -> Result<(), String> {
        for layer in &self.layers {
            for tile in layer.placements() {
                let (x, y) = camera.to_screen(tile.x, tile.y);
                surface.blit(atlas, tile.src, x, y)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::testing::RecordingSurface;
    use std::io::Write;

    fn filled_layer(width: u32, height: u32, id: u32) -> TileLayer {
        TileLayer {
            data: vec![id; (width * height) as usize],
            width,
            height,
        }
    }

    #[test]
    fn test_uniform_layer_reads_first_atlas_cell() {
        let layer = filled_layer(10, 10, 1);
        let placements: Vec<_> = layer.placements().collect();

        assert_eq!(placements.len(), 100);
        assert!(placements.iter().all(|p| p.src == Rect::new(0, 0, 16, 16)));
        assert_eq!(placements[23].x, 48.0);
        assert_eq!(placements[23].y, 32.0);
    }

    #[test]
    fn test_atlas_region_wraps_columns() {
        assert_eq!(atlas_region(1), Rect::new(0, 0, 16, 16));
        assert_eq!(atlas_region(16), Rect::new(240, 0, 16, 16));
        assert_eq!(atlas_region(17), Rect::new(0, 16, 16, 16));
        assert_eq!(atlas_region(35), Rect::new(32, 32, 16, 16));
    }

    #[test]
    fn test_empty_cells_are_skipped() {
        let layer = TileLayer {
            data: vec![0, 2, 0, 0],
            width: 2,
            height: 2,
        };
        let placements: Vec<_> = layer.placements().collect();

        assert_eq!(placements.len(), 1);
        assert_eq!((placements[0].x, placements[0].y), (16.0, 0.0));
        assert_eq!(placements[0].src, Rect::new(16, 0, 16, 16));
    }

    #[test]
    fn test_render_applies_camera_offset() {
        let map = TileMap {
            layers: vec![filled_layer(2, 1, 1), filled_layer(2, 1, 3)],
        };
        let mut surface = RecordingSurface::new(320, 240);
        let camera = Camera::new(-5.0, -7.0);

        map.render(&mut surface, TextureId(4), &camera).unwrap();

        let blits = surface.blits_of(TextureId(4));
        assert_eq!(blits.len(), 4);
        assert_eq!(blits[0], (Rect::new(0, 0, 16, 16), -5.0, -7.0));
        assert_eq!(blits[1], (Rect::new(0, 0, 16, 16), 11.0, -7.0));
        // Second layer is drawn after the first
        assert_eq!(blits[2], (Rect::new(32, 0, 16, 16), -5.0, -7.0));
    }

    #[test]
    fn test_pixel_size_uses_first_layer() {
        let map = TileMap {
            layers: vec![filled_layer(50, 40, 1), filled_layer(2, 2, 1)],
        };
        assert_eq!(map.pixel_size(), (800.0, 640.0));
    }

    #[test]
    fn test_from_json_parses_layers() {
        let json = r#"{
            "layers": [
                { "data": [1, 2, 3, 4, 5, 6], "width": 3, "height": 2, "name": "floor" }
            ],
            "tilewidth": 16
        }"#;
        let map = TileMap::from_json("floor.json", json).unwrap();

        assert_eq!(map.layers.len(), 1);
        assert_eq!(map.layers[0].width, 3);
        assert_eq!(map.layers[0].height, 2);
        assert_eq!(map.layers[0].data, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_from_json_rejects_size_mismatch() {
        let json = r#"{ "layers": [ { "data": [1, 2, 3], "width": 2, "height": 2 } ] }"#;
        let err = TileMap::from_json("bad.json", json).unwrap_err();
        assert!(matches!(err, GameError::InvalidTileMap { .. }));
    }

    #[test]
    fn test_from_json_rejects_missing_layers() {
        let err = TileMap::from_json("empty.json", r#"{ "layers": [] }"#).unwrap_err();
        assert!(matches!(err, GameError::InvalidTileMap { .. }));

        let err = TileMap::from_json("broken.json", "{ not json").unwrap_err();
        assert!(matches!(err, GameError::Json { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "layers": [ {{ "data": [1, 1, 1, 1], "width": 2, "height": 2 }} ] }}"#
        )
        .unwrap();

        let map = TileMap::load_from_file(file.path()).unwrap();
        assert_eq!(map.pixel_size(), (32.0, 32.0));
    }

    #[test]
    fn test_load_from_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = TileMap::load_from_file(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, GameError::Io { .. }));
    }
}
