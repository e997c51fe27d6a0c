// Play session state and the static world content
//
// A PlaySession exists only while playing. It owns the player, the loaded
// map and atlas handle, and the camera derived from the player each frame.

use crate::assets::AssetSource;
use crate::camera::Camera;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::interaction::InteractionPoint;
use crate::player::Player;
use crate::render::{Surface, TextureId};
use crate::tile::TileMap;

use super::{LOGICAL_HEIGHT, LOGICAL_WIDTH};

pub struct PlaySession {
    pub player: Player,
    pub tile_map: TileMap,
    pub tile_atlas: TextureId,
    pub camera: Camera,
}

impl PlaySession {
    /// Loads every play resource; nothing is kept if any load fails
    pub fn load(assets: &mut dyn AssetSource, config: &GameConfig) -> Result<Self, GameError> {
        let paths = &config.assets;
        let player_sprite = assets.load_texture(&paths.player_sprite)?;
        let tile_atlas = assets.load_texture(&paths.tile_atlas)?;
        let tile_map = assets.load_tile_map(&paths.tile_map)?;

        let (map_width, map_height) = tile_map.pixel_size();
        tracing::info!(
            map_width,
            map_height,
            layers = tile_map.layers.len(),
            "play_resources_loaded"
        );

        let mut session = PlaySession {
            player: Player::new(
                config.player.start_x,
                config.player.start_y,
                config.player.speed,
                player_sprite,
            ),
            tile_map,
            tile_atlas,
            camera: Camera::new(0.0, 0.0),
        };
        session.update_camera();
        Ok(session)
    }

    /// Follow then constrain, once per frame after movement
    pub fn update_camera(&mut self) {
        let (target_x, target_y) = self.player.camera_target();
        let (map_width, map_height) = self.tile_map.pixel_size();
        let (view_width, view_height) = (LOGICAL_WIDTH as f64, LOGICAL_HEIGHT as f64);

        self.camera.follow(target_x, target_y, view_width, view_height);
        self.camera.constrain(view_width, view_height, map_width, map_height);
    }

    /// Tile layers first, then the player on top
    pub fn render(&self, surface: &mut dyn Surface) -> Result<(), String> {
        self.tile_map.render(surface, self.tile_atlas, &self.camera)?;
        self.player.render(surface, &self.camera)
    }
}

/// Interaction points placed in the office
pub fn office_interaction_points() -> Vec<InteractionPoint> {
    vec![
        InteractionPoint::new(
            170.0,
            140.0,
            30.0,
            &[
                "Welcome to the office! This is your first day.",
                "Your desk is located in the corner.",
                "Press 'E' to interact with objects when prompted.",
            ],
        ),
        InteractionPoint::new(
            150.0,
            400.0,
            30.0,
            &[
                "This is the break room.",
                "Take breaks regularly to maintain productivity!",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::testing::MemoryAssets;

    #[test]
    fn test_load_places_player_and_camera() {
        let mut assets = MemoryAssets::with_map(50, 40);
        let session = PlaySession::load(&mut assets, &GameConfig::default()).unwrap();

        assert_eq!((session.player.x, session.player.y), (100.0, 100.0));
        assert_eq!(session.camera, Camera::new(0.0, 0.0));
        assert_eq!(session.tile_atlas, TextureId(1));
    }

    #[test]
    fn test_camera_tracks_player_inside_map() {
        let mut assets = MemoryAssets::with_map(50, 40);
        let mut session = PlaySession::load(&mut assets, &GameConfig::default()).unwrap();
        session.player.x = 392.0;
        session.player.y = 292.0;
        session.update_camera();

        assert_eq!(session.camera, Camera::new(-240.0, -180.0));
    }

    #[test]
    fn test_missing_tile_map_fails_load() {
        let mut assets = MemoryAssets::default();
        assert!(PlaySession::load(&mut assets, &GameConfig::default()).is_err());
    }

    #[test]
    fn test_office_points_start_unused() {
        let points = office_interaction_points();
        assert_eq!(points.len(), 2);
        assert!(points.iter().all(|p| !p.is_active && !p.has_interacted && p.current_msg == 0));
        assert_eq!(points[0].messages.len(), 3);
    }
}
