/// Screen-space offset applied to everything drawn in world coordinates
///
/// The offset is what gets added to a world position to obtain its screen
/// position, so it is usually zero or negative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Camera {
    pub x: f64,
    pub y: f64,
}

impl Camera {
    pub fn new(x: f64, y: f64) -> Self {
        Camera { x, y }
    }

    /// Centres the view on the target point
    pub fn follow(&mut self, target_x: f64, target_y: f64, view_width: f64, view_height: f64) {
        self.x = -target_x + view_width / 2.0;
        self.y = -target_y + view_height / 2.0;
    }

    /// Keeps the view inside the map
    ///
    /// For maps smaller than the view the lower clamp wins and the map is
    /// pinned to the top-left corner offset by the size difference.
    pub fn constrain(&mut self, view_width: f64, view_height: f64, map_width: f64, map_height: f64) {
        self.x = self.x.min(0.0);
        self.y = self.y.min(0.0);

        self.x = self.x.max(view_width - map_width);
        self.y = self.y.max(view_height - map_height);
    }

    /// Converts a world position to a screen position
    pub fn to_screen(&self, world_x: f64, world_y: f64) -> (f64, f64) {
        (world_x + self.x, world_y + self.y)
    }
}
