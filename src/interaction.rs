//! Proximity Interaction and Dialogue
//!
//! An [`InteractionPoint`] is a spot in the world carrying a short
//! conversation. Walking within its range makes it active; pressing the
//! interact key while it is active opens the [`DialogueBox`] on its first
//! message. Each point can be triggered only once per session.
//!
//! Per-point states:
//!
//! ```text
//! Inactive --enter range--> InRange --interact--> Consumed
//!     ^                        |                     |
//!     +------leave range-------+---------------------+ (stays consumed)
//! ```

use crate::camera::Camera;
use crate::render::Surface;
use crate::text::{draw_simple_text, text_width, wrap_text, GLYPH_HEIGHT};
use sdl2::pixels::Color;
use sdl2::rect::Rect;

/// Text shown above an active point that hasn't been used yet
pub const PROMPT_TEXT: &str = "PRESS E";

/// Hint shown in the dialogue box while more messages follow
pub const CONTINUE_TEXT: &str = "SPACE >";

#[derive(Debug, Clone)]
pub struct InteractionPoint {
    pub x: f64,
    pub y: f64,
    pub range: f64,
    pub messages: Vec<String>,
    pub current_msg: usize,
    /// Player is currently within range
    pub is_active: bool,
    /// One-shot gate, never reset during a session
    pub has_interacted: bool,
}

impl InteractionPoint {
    pub fn new(x: f64, y: f64, range: f64, messages: &[&str]) -> Self {
        InteractionPoint {
            x,
            y,
            range,
            messages: messages.iter().map(|m| m.to_string()).collect(),
            current_msg: 0,
            is_active: false,
            has_interacted: false,
        }
    }

    pub fn is_player_in_range(&self, player_x: f64, player_y: f64) -> bool {
        let dx = self.x - player_x;
        let dy = self.y - player_y;
        (dx * dx + dy * dy).sqrt() <= self.range
    }

    pub fn shows_prompt(&self) -> bool {
        self.is_active && !self.has_interacted
    }

    pub fn current_message(&self) -> Option<&str> {
        self.messages.get(self.current_msg).map(String::as_str)
    }

    pub fn has_more_messages(&self) -> bool {
        self.current_msg + 1 < self.messages.len()
    }
}

/// Updates range flags for every point and fires at most one interaction
///
/// Returns the index of the point that was just triggered. Scanning stops
/// at the triggered point, matching one interaction per frame.
pub fn scan_points(
    points: &mut [InteractionPoint],
    player_x: f64,
    player_y: f64,
    interact_pressed: bool,
) -> Option<usize> {
    for (index, point) in points.iter_mut().enumerate() {
        if point.is_player_in_range(player_x, player_y) {
            point.is_active = true;

            if interact_pressed && !point.has_interacted {
                point.has_interacted = true;
                point.current_msg = 0;
                return Some(index);
            }
        } else {
            point.is_active = false;
        }
    }
    None
}

/// Draws "PRESS E" above every point that can still be used
pub fn render_prompts(
    surface: &mut dyn Surface,
    points: &[InteractionPoint],
    camera: &Camera,
) -> Result<(), String> {
    for point in points.iter().filter(|p| p.shows_prompt()) {
        let (x, y) = camera.to_screen(point.x, point.y - 20.0);
        draw_simple_text(
            surface,
            PROMPT_TEXT,
            x.round() as i32,
            y.round() as i32,
            Color::RGB(255, 255, 255),
            1,
        )?;
    }
    Ok(())
}

/// Bottom-of-screen box showing the active point's current message
///
/// The box refers to its point by index into the world's point list and is
/// visible exactly while that index is set.
#[derive(Debug, Clone)]
pub struct DialogueBox {
    pub width: u32,
    pub height: u32,
    pub padding: u32,
    current_point: Option<usize>,
}

impl DialogueBox {
    pub fn new() -> Self {
        DialogueBox {
            width: 280,
            height: 80,
            padding: 10,
            current_point: None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.current_point.is_some()
    }

    pub fn current_point(&self) -> Option<usize> {
        self.current_point
    }

    /// Shows the box for `points[index]`
    ///
    /// Points without messages have nothing to show, so the box stays hidden.
    pub fn open(&mut self, index: usize, points: &[InteractionPoint]) -> bool {
        match points.get(index) {
            Some(point) if !point.messages.is_empty() => {
                self.current_point = Some(index);
                true
            }
            _ => false,
        }
    }

    /// Steps to the next message, closing the box after the last one
    pub fn advance(&mut self, points: &mut [InteractionPoint]) {
        let Some(index) = self.current_point else {
            return;
        };
        match points.get_mut(index) {
            Some(point) if point.has_more_messages() => point.current_msg += 1,
            _ => self.close(),
        }
    }

    pub fn close(&mut self) {
        self.current_point = None;
    }

    pub fn render(&self, surface: &mut dyn Surface, points: &[InteractionPoint]) -> Result<(), String> {
        let Some(point) = self.current_point.and_then(|index| points.get(index)) else {
            return Ok(());
        };
        let Some(message) = point.current_message() else {
            return Ok(());
        };

        let (screen_width, screen_height) = surface.logical_size();
        let x = (screen_width as i32 - self.width as i32) / 2;
        let y = screen_height as i32 - self.height as i32 - 20;
        let frame = Rect::new(x, y, self.width, self.height);

        surface.fill_rect(frame, Color::RGBA(0, 0, 0, 200))?;
        surface.draw_rect(frame, Color::RGB(255, 255, 255))?;
        surface.draw_rect(
            Rect::new(x + 1, y + 1, self.width - 2, self.height - 2),
            Color::RGB(255, 255, 255),
        )?;

        let padding = self.padding as i32;
        let line_height = (GLYPH_HEIGHT + 4) as i32;
        let text_area = self.width - 2 * self.padding;
        for (row, line) in wrap_text(message, text_area, 1).iter().enumerate() {
            draw_simple_text(
                surface,
                line,
                x + padding,
                y + padding + row as i32 * line_height,
                Color::RGB(255, 255, 255),
                1,
            )?;
        }

        if point.has_more_messages() {
            draw_simple_text(
                surface,
                CONTINUE_TEXT,
                x + self.width as i32 - padding - text_width(CONTINUE_TEXT, 1) as i32,
                y + self.height as i32 - padding - GLYPH_HEIGHT as i32,
                Color::RGB(200, 200, 200),
                1,
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::testing::{DrawCall, RecordingSurface};

    fn office_points() -> Vec<InteractionPoint> {
        vec![
            InteractionPoint::new(170.0, 140.0, 30.0, &["first", "second", "third"]),
            InteractionPoint::new(150.0, 400.0, 30.0, &["only"]),
        ]
    }

    #[test]
    fn test_range_check_uses_plain_distance() {
        let point = InteractionPoint::new(0.0, 0.0, 30.0, &["hi"]);
        assert!(point.is_player_in_range(30.0, 0.0));
        assert!(point.is_player_in_range(18.0, 24.0));
        assert!(!point.is_player_in_range(31.0, 0.0));
        assert!(!point.is_player_in_range(300.0, 0.0));
    }

    #[test]
    fn test_entering_and_leaving_toggles_active_only() {
        let mut points = office_points();

        for _ in 0..2 {
            assert_eq!(scan_points(&mut points, 170.0, 140.0, false), None);
            assert!(points[0].is_active);
            assert!(!points[0].has_interacted);

            assert_eq!(scan_points(&mut points, 0.0, 0.0, false), None);
            assert!(!points[0].is_active);
            assert!(!points[0].has_interacted);
        }
    }

    #[test]
    fn test_interact_in_range_consumes_point() {
        let mut points = office_points();
        points[0].current_msg = 2;

        assert_eq!(scan_points(&mut points, 165.0, 140.0, true), Some(0));
        assert!(points[0].has_interacted);
        assert_eq!(points[0].current_msg, 0);
        assert!(!points[0].shows_prompt());
    }

    #[test]
    fn test_interact_out_of_range_does_nothing() {
        let mut points = office_points();
        assert_eq!(scan_points(&mut points, 0.0, 0.0, true), None);
        assert!(points.iter().all(|p| !p.has_interacted));
    }

    #[test]
    fn test_consumed_point_never_retriggers() {
        let mut points = office_points();
        let mut dialogue = DialogueBox::new();

        let index = scan_points(&mut points, 170.0, 140.0, true).unwrap();
        dialogue.open(index, &points);
        dialogue.advance(&mut points);
        assert_eq!(points[0].current_msg, 1);
        dialogue.close();

        // Leave, come back, press interact again
        scan_points(&mut points, 0.0, 0.0, false);
        assert_eq!(scan_points(&mut points, 170.0, 140.0, true), None);
        assert_eq!(points[0].current_msg, 1);
        assert!(points[0].is_active);
        assert!(points[0].has_interacted);
    }

    #[test]
    fn test_advance_steps_then_closes() {
        let mut points = office_points();
        let mut dialogue = DialogueBox::new();
        assert!(dialogue.open(0, &points));
        assert!(dialogue.is_visible());

        dialogue.advance(&mut points);
        assert_eq!(points[0].current_msg, 1);
        assert!(dialogue.is_visible());

        dialogue.advance(&mut points);
        assert_eq!(points[0].current_msg, 2);
        assert!(dialogue.is_visible());

        dialogue.advance(&mut points);
        assert!(!dialogue.is_visible());
        assert_eq!(dialogue.current_point(), None);
        assert_eq!(points[0].current_msg, 2);
    }

    #[test]
    fn test_single_message_closes_on_first_advance() {
        let mut points = office_points();
        let mut dialogue = DialogueBox::new();
        dialogue.open(1, &points);
        dialogue.advance(&mut points);
        assert!(!dialogue.is_visible());
    }

    #[test]
    fn test_open_rejects_empty_or_unknown_points() {
        let points = vec![InteractionPoint::new(0.0, 0.0, 10.0, &[])];
        let mut dialogue = DialogueBox::new();
        assert!(!dialogue.open(0, &points));
        assert!(!dialogue.open(5, &points));
        assert!(!dialogue.is_visible());
    }

    #[test]
    fn test_hidden_box_draws_nothing() {
        let points = office_points();
        let mut surface = RecordingSurface::new(320, 240);
        DialogueBox::new().render(&mut surface, &points).unwrap();
        assert!(surface.calls.is_empty());
    }

    #[test]
    fn test_visible_box_is_bottom_centred() {
        let points = office_points();
        let mut dialogue = DialogueBox::new();
        dialogue.open(0, &points);

        let mut surface = RecordingSurface::new(320, 240);
        dialogue.render(&mut surface, &points).unwrap();

        assert_eq!(
            surface.calls[0],
            DrawCall::FillRect(Rect::new(20, 140, 280, 80), Color::RGBA(0, 0, 0, 200))
        );
    }

    #[test]
    fn test_prompts_only_for_unused_active_points() {
        let mut points = office_points();
        points[0].is_active = true;
        points[1].is_active = true;
        points[1].has_interacted = true;

        let mut surface = RecordingSurface::new(320, 240);
        render_prompts(&mut surface, &points, &Camera::default()).unwrap();

        // Every glyph pixel of the single prompt lies at or right of x = 170
        let xs: Vec<i32> = surface
            .calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::FillRect(rect, _) => Some(rect.x()),
                _ => None,
            })
            .collect();
        assert!(!xs.is_empty());
        assert!(xs.iter().all(|&x| (170..170 + 7 * 6).contains(&x)));
    }
}
