//! Main Menu Component
//!
//! A vertical list of text items with a wrapping selection cursor, drawn
//! centred on the logical screen.

use crate::render::Surface;
use crate::text::{draw_centered_text, text_width, GLYPH_HEIGHT};
use sdl2::pixels::Color;
use sdl2::rect::Rect;

/// Configuration for menu appearance
#[derive(Debug, Clone)]
pub struct MenuStyle {
    /// Vertical position of the title's top edge
    pub title_y: i32,

    /// Vertical position of the first item's centre line
    pub items_y: i32,

    /// Distance between item centre lines
    pub item_spacing: i32,

    /// Glyph scale for the title
    pub title_scale: u32,

    /// Glyph scale for items
    pub item_scale: u32,

    pub title_color: Color,
    pub item_color: Color,
    pub hint_color: Color,
    pub status_color: Color,

    /// Selection highlight fill (alpha-blended)
    pub highlight_color: Color,

    /// Selection highlight outline
    pub highlight_border_color: Color,
}

impl Default for MenuStyle {
    fn default() -> Self {
        MenuStyle {
            title_y: 40,
            items_y: 110,
            item_spacing: 36,
            title_scale: 3,
            item_scale: 2,
            title_color: Color::RGB(0, 0, 0),
            item_color: Color::RGB(0, 0, 0),
            hint_color: Color::RGB(100, 100, 100),
            status_color: Color::RGB(180, 30, 30),
            highlight_color: Color::RGBA(0, 0, 255, 100),
            highlight_border_color: Color::RGB(0, 0, 255),
        }
    }
}

/// A menu entry
///
/// `selected` mirrors the menu's cursor for drawing; the menu's index is the
/// source of truth.
#[derive(Debug, Clone)]
pub struct MenuItem {
    pub text: String,
    pub selected: bool,
}

impl MenuItem {
    pub fn new(text: impl Into<String>) -> Self {
        MenuItem {
            text: text.into(),
            selected: false,
        }
    }
}

pub struct Menu {
    title: String,
    hint: String,
    items: Vec<MenuItem>,
    selected_index: usize,
    style: MenuStyle,
}

impl Menu {
    /// Creates a menu with the first item selected
    ///
    /// `items` must not be empty.
    pub fn new(title: impl Into<String>, hint: impl Into<String>, items: Vec<MenuItem>) -> Self {
        assert!(!items.is_empty(), "menu needs at least one item");
        let mut menu = Menu {
            title: title.into(),
            hint: hint.into(),
            items,
            selected_index: 0,
            style: MenuStyle::default(),
        };
        menu.sync_selected_flags();
        menu
    }

    /// Move selection up (wraps to bottom)
    pub fn navigate_up(&mut self) {
        let count = self.items.len();
        self.selected_index = (self.selected_index + count - 1) % count;
        self.sync_selected_flags();
    }

    /// Move selection down (wraps to top)
    pub fn navigate_down(&mut self) {
        self.selected_index = (self.selected_index + 1) % self.items.len();
        self.sync_selected_flags();
    }

    /// Index of the item the player chose
    pub fn confirm(&self) -> usize {
        self.selected_index
    }

    fn sync_selected_flags(&mut self) {
        let selected = self.selected_index;
        for (i, item) in self.items.iter_mut().enumerate() {
            item.selected = i == selected;
        }
    }

    /// Draws title, items, hint line and an optional status line
    pub fn render(&self, surface: &mut dyn Surface, status: Option<&str>) -> Result<(), String> {
        let (screen_width, screen_height) = surface.logical_size();
        let center_x = screen_width as i32 / 2;
        let style = &self.style;

        draw_centered_text(
            surface,
            &self.title,
            center_x,
            style.title_y,
            style.title_color,
            style.title_scale,
        )?;

        let glyph_height = (GLYPH_HEIGHT * style.item_scale) as i32;
        for (i, item) in self.items.iter().enumerate() {
            let center_y = style.items_y + i as i32 * style.item_spacing;

            if item.selected {
                let width = text_width(&item.text, style.item_scale) + 40;
                let height = glyph_height as u32 + 12;
                let highlight = Rect::new(
                    center_x - width as i32 / 2,
                    center_y - height as i32 / 2,
                    width,
                    height,
                );
                surface.fill_rect(highlight, style.highlight_color)?;
                surface.draw_rect(highlight, style.highlight_border_color)?;
            }

            draw_centered_text(
                surface,
                &item.text,
                center_x,
                center_y - glyph_height / 2,
                style.item_color,
                style.item_scale,
            )?;
        }

        let hint_y = screen_height as i32 - 40;
        draw_centered_text(surface, &self.hint, center_x, hint_y, style.hint_color, 1)?;

        if let Some(status) = status {
            draw_centered_text(
                surface,
                status,
                center_x,
                hint_y + 14,
                style.status_color,
                1,
            )?;
        }

        Ok(())
    }
}
