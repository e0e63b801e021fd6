use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with alpha multiplied by `factor` (clamped to 0..=1).
    pub fn faded(self, factor: f32) -> Self {
        let factor = factor.clamp(0.0, 1.0);
        Self {
            a: (self.a as f32 * factor).round() as u8,
            ..self
        }
    }
}

/// Geometry and colors of a menu panel.
///
/// Coordinates are normalized screen space. `x` is the horizontal center of the
/// panel and `y` the top edge of the header; everything else stacks downwards.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuStyle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub header_height: f32,
    pub item_height: f32,
    pub footer_height: f32,
    /// Horizontal inset of row text from the panel edges.
    pub padding: f32,
    pub title_scale: f32,
    pub item_scale: f32,
    pub footer_scale: f32,
    pub font: u8,
    pub scrollbar_width: f32,
    /// Seconds for the open animation to reach full opacity.
    pub open_duration: f32,
    pub footer_hint: String,

    pub background: Color,
    pub header: Color,
    pub footer: Color,
    pub selection: Color,
    pub text: Color,
    pub selected_text: Color,
    pub disabled_text: Color,
    pub toggle_on: Color,
    pub toggle_off: Color,
    pub scrollbar_track: Color,
    pub scrollbar_thumb: Color,
}

impl Default for MenuStyle {
    fn default() -> Self {
        Self {
            x: 0.8,
            y: 0.15,
            width: 0.20,
            header_height: 0.08,
            item_height: 0.035,
            footer_height: 0.030,
            padding: 0.008,
            title_scale: 0.5,
            item_scale: 0.35,
            footer_scale: 0.28,
            font: 0,
            scrollbar_width: 0.003,
            open_duration: 0.15,
            footer_hint: "Up/Down Navigate  Left/Right Adjust  Enter Select".to_string(),

            background: Color::rgba(10, 10, 10, 230),
            header: Color::rgba(15, 15, 15, 255),
            footer: Color::rgba(15, 15, 15, 255),
            selection: Color::rgba(255, 255, 255, 30),
            text: Color::rgba(255, 255, 255, 255),
            selected_text: Color::rgba(255, 255, 255, 255),
            disabled_text: Color::rgba(150, 150, 150, 255),
            toggle_on: Color::rgba(100, 255, 100, 255),
            toggle_off: Color::rgba(255, 100, 100, 255),
            scrollbar_track: Color::rgba(40, 40, 40, 200),
            scrollbar_thumb: Color::rgba(200, 200, 200, 230),
        }
    }
}

impl MenuStyle {
    pub fn left(&self) -> f32 {
        self.x - self.width / 2.0
    }

    pub fn right(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Top edge of the first visible row.
    pub fn list_top(&self) -> f32 {
        self.y + self.header_height
    }

    pub fn row_top(&self, visible_row: usize) -> f32 {
        self.list_top() + visible_row as f32 * self.item_height
    }

    pub fn list_height(&self, rows: usize) -> f32 {
        rows as f32 * self.item_height
    }
}
