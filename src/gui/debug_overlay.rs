use crate::render::Surface;
use crate::text::draw_simple_text;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use std::time::{Duration, Instant};

const BAR_HEIGHT: u32 = 13;
const SEGMENT_SPACING: i32 = 105;

/// Values shown on the debug bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugStats {
    pub player: (f64, f64),
    pub camera: (f64, f64),
    pub fps: f64,
}

/// Frames-per-second measured over one-second windows
#[derive(Debug, Clone)]
pub struct FpsCounter {
    window_start: Option<Instant>,
    frames: u32,
    fps: f64,
}

impl FpsCounter {
    pub fn new() -> Self {
        FpsCounter {
            window_start: None,
            frames: 0,
            fps: 0.0,
        }
    }

    pub fn tick(&mut self, now: Instant) {
        let start = *self.window_start.get_or_insert(now);
        self.frames += 1;

        let elapsed = now.duration_since(start);
        if elapsed >= Duration::from_secs(1) {
            self.fps = self.frames as f64 / elapsed.as_secs_f64();
            self.frames = 0;
            self.window_start = Some(now);
        }
    }

    pub fn fps(&self) -> f64 {
        self.fps
    }
}

/// Diagnostic bar across the top of the screen, toggled with F3
pub struct DebugOverlay {
    pub enabled: bool,
    pub fps: FpsCounter,
}

impl DebugOverlay {
    pub fn new(enabled: bool) -> Self {
        DebugOverlay {
            enabled,
            fps: FpsCounter::new(),
        }
    }

    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }

    pub fn render(&self, surface: &mut dyn Surface, stats: &DebugStats) -> Result<(), String> {
        if !self.enabled {
            return Ok(());
        }

        let (width, _) = surface.logical_size();
        surface.fill_rect(Rect::new(0, 0, width, BAR_HEIGHT), Color::RGBA(0, 0, 0, 180))?;

        for (i, segment) in format_debug_stats(stats).iter().enumerate() {
            draw_simple_text(
                surface,
                segment,
                4 + i as i32 * SEGMENT_SPACING,
                3,
                Color::RGB(0, 255, 0),
                1,
            )?;
        }

        Ok(())
    }
}

pub fn format_debug_stats(stats: &DebugStats) -> Vec<String> {
    vec![
        format!("POS: {:.0}, {:.0}", stats.player.0, stats.player.1),
        format!("CAM: {:.0}, {:.0}", stats.camera.0, stats.camera.1),
        format!("FPS: {:.1}", stats.fps),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::testing::RecordingSurface;

    #[test]
    fn test_format_debug_stats() {
        let stats = DebugStats {
            player: (100.0, 102.0),
            camera: (-480.0, -12.0),
            fps: 59.94,
        };
        assert_eq!(
            format_debug_stats(&stats),
            vec!["POS: 100, 102", "CAM: -480, -12", "FPS: 59.9"]
        );
    }

    #[test]
    fn test_fps_counter_reports_after_one_second() {
        let start = Instant::now();
        let mut counter = FpsCounter::new();
        for frame in 0..=60u64 {
            counter.tick(start + Duration::from_micros(frame * 1_000_000 / 60));
        }
        assert!((counter.fps() - 61.0).abs() < 0.01, "fps = {}", counter.fps());
    }

    #[test]
    fn test_fps_counter_zero_before_first_window() {
        let start = Instant::now();
        let mut counter = FpsCounter::new();
        counter.tick(start);
        counter.tick(start + Duration::from_millis(500));
        assert_eq!(counter.fps(), 0.0);
    }

    #[test]
    fn test_disabled_overlay_draws_nothing() {
        let overlay = DebugOverlay::new(false);
        let mut surface = RecordingSurface::new(320, 240);
        let stats = DebugStats {
            player: (0.0, 0.0),
            camera: (0.0, 0.0),
            fps: 0.0,
        };
        overlay.render(&mut surface, &stats).unwrap();
        assert!(surface.calls.is_empty());
    }

    #[test]
    fn test_toggle() {
        let mut overlay = DebugOverlay::new(true);
        overlay.toggle();
        assert!(!overlay.enabled);
        overlay.toggle();
        assert!(overlay.enabled);
    }
}
