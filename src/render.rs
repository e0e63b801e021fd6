//! Turns menu state into draw calls. Nothing here mutates the menu.

use serde::Serialize;

use crate::menu::{ItemPayload, Menu, MenuItem};
use crate::style::{Color, MenuStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Justify {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextOptions {
    pub font: u8,
    pub justify: Justify,
    /// Horizontal span `(start, end)` the text is laid out in; right- and center-
    /// justified text aligns against it.
    pub wrap: (f32, f32),
}

/// Drawing primitives supplied by the host. Rectangles are given by their center
/// and size in normalized screen space.
pub trait Renderer {
    fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    fn draw_text(&mut self, x: f32, y: f32, scale: f32, text: &str, color: Color, opts: TextOptions);
}

const TOGGLE_ON: &str = "ON";
const TOGGLE_OFF: &str = "OFF";
const SUBMENU_MARKER: &str = "›";

impl Menu {
    pub fn render(&self, renderer: &mut dyn Renderer) {
        render(self, renderer);
    }
}

/// Draws one frame of `menu`: panel, header, highlight, rows, footer, then the
/// scrollbar when the list overflows.
pub fn render(menu: &Menu, renderer: &mut dyn Renderer) {
    let style = menu.style();
    let rows = menu.visible_range().len();
    let fade = if menu.is_opening() {
        menu.open_progress()
    } else {
        1.0
    };
    log::trace!(
        "render '{}': rows {:?}, selected {}",
        menu.title(),
        menu.visible_range(),
        menu.selected()
    );

    draw_panel(style, rows, fade, renderer);
    draw_header(menu, style, renderer);
    draw_selection(menu, style, renderer);
    draw_items(menu, style, renderer);
    draw_footer(style, rows, renderer);
    draw_scrollbar(menu, style, rows, renderer);
}

/// `"{position}/{selectable}"`, or `"0/0"` when nothing can be selected.
pub fn counter_text(menu: &Menu) -> String {
    format!("{}/{}", menu.selected_ordinal(), menu.selectable_count())
}

/// Right-hand indicator of a row, if its kind has one.
pub fn value_text(item: &MenuItem) -> Option<String> {
    match item.payload() {
        ItemPayload::Toggle(state) => {
            let text = if state.get() { TOGGLE_ON } else { TOGGLE_OFF };
            Some(text.to_string())
        }
        ItemPayload::Submenu(_) => Some(SUBMENU_MARKER.to_string()),
        ItemPayload::Number(option) => Some(format!("< {} >", option.display_value())),
        ItemPayload::Action(_) | ItemPayload::Text | ItemPayload::Separator => None,
    }
}

fn text_opts(style: &MenuStyle, justify: Justify) -> TextOptions {
    TextOptions {
        font: style.font,
        justify,
        wrap: (style.left() + style.padding, style.right() - style.padding),
    }
}

fn draw_panel(style: &MenuStyle, rows: usize, fade: f32, renderer: &mut dyn Renderer) {
    let height = style.header_height + style.list_height(rows) + style.footer_height;
    renderer.draw_rect(
        style.x,
        style.y + height / 2.0,
        style.width,
        height,
        style.background.faded(fade),
    );
}

fn draw_header(menu: &Menu, style: &MenuStyle, renderer: &mut dyn Renderer) {
    let center_y = style.y + style.header_height / 2.0;
    renderer.draw_rect(style.x, center_y, style.width, style.header_height, style.header);

    let text_y = center_y - style.title_scale * 0.035;
    renderer.draw_text(
        style.left() + style.padding,
        text_y,
        style.title_scale,
        menu.title(),
        style.text,
        text_opts(style, Justify::Left),
    );
    renderer.draw_text(
        style.right() - style.padding,
        text_y,
        style.item_scale,
        &counter_text(menu),
        style.disabled_text,
        text_opts(style, Justify::Right),
    );
}

fn draw_selection(menu: &Menu, style: &MenuStyle, renderer: &mut dyn Renderer) {
    let Some(item) = menu.current_item() else {
        return;
    };
    if !item.is_selectable() || !menu.visible_range().contains(&menu.selected()) {
        return;
    }
    let row = menu.selected() - menu.scroll();
    renderer.draw_rect(
        style.x,
        style.row_top(row) + style.item_height / 2.0,
        style.width,
        style.item_height,
        style.selection,
    );
}

fn draw_items(menu: &Menu, style: &MenuStyle, renderer: &mut dyn Renderer) {
    for (row, index) in menu.visible_range().enumerate() {
        let item = &menu.items()[index];
        let text_y = style.row_top(row) + style.item_height / 2.0 - style.item_scale * 0.035;
        let selected = index == menu.selected() && item.is_selectable();

        match item.payload() {
            ItemPayload::Separator => {
                renderer.draw_text(
                    style.x,
                    text_y,
                    style.item_scale,
                    item.label(),
                    style.text,
                    text_opts(style, Justify::Center),
                );
                continue;
            }
            ItemPayload::Text => {
                renderer.draw_text(
                    style.left() + style.padding,
                    text_y,
                    style.item_scale,
                    item.label(),
                    style.disabled_text,
                    text_opts(style, Justify::Left),
                );
                continue;
            }
            _ => {}
        }

        let label_color = if selected {
            style.selected_text
        } else {
            style.text
        };
        renderer.draw_text(
            style.left() + style.padding,
            text_y,
            style.item_scale,
            item.label(),
            label_color,
            text_opts(style, Justify::Left),
        );

        let Some(value) = value_text(item) else {
            continue;
        };
        let value_color = match item.toggle_state() {
            Some(true) => style.toggle_on,
            Some(false) => style.toggle_off,
            None => label_color,
        };
        renderer.draw_text(
            style.right() - style.padding,
            text_y,
            style.item_scale,
            &value,
            value_color,
            text_opts(style, Justify::Right),
        );
    }
}

fn draw_footer(style: &MenuStyle, rows: usize, renderer: &mut dyn Renderer) {
    let top = style.list_top() + style.list_height(rows);
    let center_y = top + style.footer_height / 2.0;
    renderer.draw_rect(style.x, center_y, style.width, style.footer_height, style.footer);
    renderer.draw_text(
        style.x,
        center_y - style.footer_scale * 0.035,
        style.footer_scale,
        &style.footer_hint,
        style.disabled_text,
        text_opts(style, Justify::Center),
    );
}

fn draw_scrollbar(menu: &Menu, style: &MenuStyle, rows: usize, renderer: &mut dyn Renderer) {
    let len = menu.len();
    if len <= menu.max_visible() {
        return;
    }
    let track_height = style.list_height(rows);
    let track_x = style.right() - style.scrollbar_width / 2.0;
    renderer.draw_rect(
        track_x,
        style.list_top() + track_height / 2.0,
        style.scrollbar_width,
        track_height,
        style.scrollbar_track,
    );

    let thumb_height = track_height * menu.max_visible() as f32 / len as f32;
    let travel = track_height - thumb_height;
    let offset = travel * menu.scroll() as f32 / (len - menu.max_visible()) as f32;
    renderer.draw_rect(
        track_x,
        style.list_top() + offset + thumb_height / 2.0,
        style.scrollbar_width,
        thumb_height,
        style.scrollbar_thumb,
    );
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;
    use crate::recorder::{DrawCall, RecordingRenderer};
    use crate::sound::Silent;

    fn texts(calls: &[DrawCall]) -> Vec<&str> {
        calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                DrawCall::Rect { .. } => None,
            })
            .collect()
    }

    fn rects(calls: &[DrawCall]) -> Vec<(f32, f32, f32, f32, Color)> {
        calls
            .iter()
            .filter_map(|c| match *c {
                DrawCall::Rect { x, y, w, h, color } => Some((x, y, w, h, color)),
                DrawCall::Text { .. } => None,
            })
            .collect()
    }

    fn settings_menu() -> Menu {
        let mut menu = Menu::new("Settings");
        menu.add_separator("General");
        menu.add_toggle("Debug", Rc::new(Cell::new(true)));
        menu.add_toggle("Mute", Rc::new(Cell::new(false)));
        menu.add_int("Volume", Rc::new(Cell::new(5)), 0, 10, 1);
        menu.add_float("Gamma", Rc::new(Cell::new(1.5f32)), 0.5, 2.0, 0.1);
        menu.add_text("Restart required");
        menu.add_action("Apply", || {});
        menu.add_folder("Advanced");
        menu.open();
        menu
    }

    #[test]
    fn draws_rows_with_indicators() {
        let menu = settings_menu();
        let mut out = RecordingRenderer::default();
        menu.render(&mut out);

        assert_eq!(
            texts(out.calls()),
            vec![
                "Settings",
                "1/6",
                "General",
                "Debug",
                "ON",
                "Mute",
                "OFF",
                "Volume",
                "< 5 >",
                "Gamma",
                "< 1.50 >",
                "Restart required",
                "Apply",
                "Advanced",
                "›",
                menu.style().footer_hint.as_str(),
            ]
        );
    }

    #[test]
    fn text_colors_follow_kind() {
        let menu = settings_menu();
        let style = menu.style().clone();
        let mut out = RecordingRenderer::default();
        menu.render(&mut out);

        let color_of = |needle: &str| {
            out.calls()
                .iter()
                .find_map(|c| match c {
                    DrawCall::Text { text, color, opts, .. } if text == needle => Some((*color, opts.justify)),
                    _ => None,
                })
                .expect("text drawn")
        };
        assert_eq!(color_of("ON"), (style.toggle_on, Justify::Right));
        assert_eq!(color_of("OFF"), (style.toggle_off, Justify::Right));
        assert_eq!(color_of("General"), (style.text, Justify::Center));
        assert_eq!(color_of("Restart required"), (style.disabled_text, Justify::Left));
        assert_eq!(color_of("1/6"), (style.disabled_text, Justify::Right));
    }

    #[test]
    fn highlight_sits_behind_selected_row() {
        let sound = Silent;
        let mut menu = settings_menu();
        menu.down(&sound);
        let style = menu.style().clone();
        let mut out = RecordingRenderer::default();
        menu.render(&mut out);

        let highlight: Vec<_> = rects(out.calls())
            .into_iter()
            .filter(|r| r.4 == style.selection)
            .collect();
        assert_eq!(highlight.len(), 1);
        let expected_y = style.row_top(2) + style.item_height / 2.0;
        assert!((highlight[0].1 - expected_y).abs() < 1e-6);
    }

    #[test]
    fn no_highlight_without_selectable_rows() {
        let mut menu = Menu::new("Info");
        menu.add_separator("About");
        menu.add_text("Version 1");
        let style = menu.style().clone();
        let mut out = RecordingRenderer::default();
        menu.render(&mut out);

        assert!(rects(out.calls()).iter().all(|r| r.4 != style.selection));
        assert!(texts(out.calls()).contains(&"0/0"));
    }

    #[test]
    fn empty_menu_draws_frame_only() {
        let menu = Menu::new("Nothing");
        let mut out = RecordingRenderer::default();
        menu.render(&mut out);
        // panel, header, footer
        assert_eq!(rects(out.calls()).len(), 3);
        assert_eq!(texts(out.calls()), vec!["Nothing", "0/0", menu.style().footer_hint.as_str()]);
    }

    #[test]
    fn scrollbar_only_when_overflowing() {
        let mut short = Menu::with_style("Short", MenuStyle::default(), 5);
        for i in 0..5 {
            short.add_action(format!("{i}"), || {});
        }
        let mut out = RecordingRenderer::default();
        short.render(&mut out);
        let style = short.style().clone();
        assert!(rects(out.calls()).iter().all(|r| r.4 != style.scrollbar_thumb));

        let mut long = Menu::with_style("Long", MenuStyle::default(), 2);
        for i in 0..4 {
            long.add_action(format!("{i}"), || {});
        }
        let sound = Silent;
        long.down(&sound);
        long.down(&sound);
        long.down(&sound);
        assert_eq!(long.scroll(), 2);

        let mut out = RecordingRenderer::default();
        long.render(&mut out);
        let thumb = rects(out.calls())
            .into_iter()
            .find(|r| r.4 == style.scrollbar_thumb)
            .expect("thumb drawn");
        let track_height = style.list_height(2);
        let thumb_height = track_height / 2.0;
        assert!((thumb.3 - thumb_height).abs() < 1e-6);
        // scrolled to the end: thumb bottom meets track bottom
        let thumb_bottom = thumb.1 + thumb.3 / 2.0;
        assert!((thumb_bottom - (style.list_top() + track_height)).abs() < 1e-6);
    }

    #[test]
    fn only_visible_rows_are_drawn() {
        let mut menu = Menu::with_style("Window", MenuStyle::default(), 3);
        for i in 0..10 {
            menu.add_action(format!("row {i}"), || {});
        }
        let sound = Silent;
        for _ in 0..5 {
            menu.down(&sound);
        }
        let mut out = RecordingRenderer::default();
        menu.render(&mut out);
        let drawn: Vec<_> = texts(out.calls())
            .into_iter()
            .filter(|t| t.starts_with("row"))
            .collect();
        assert_eq!(drawn, vec!["row 3", "row 4", "row 5"]);
    }

    #[test]
    fn panel_fades_in_while_opening() {
        let mut menu = Menu::new("Fade");
        menu.add_action("x", || {});
        menu.open();
        let style = menu.style().clone();

        let mut out = RecordingRenderer::default();
        menu.render(&mut out);
        assert_eq!(rects(out.calls())[0].4.a, 0);

        menu.advance(style.open_duration);
        let mut out = RecordingRenderer::default();
        menu.render(&mut out);
        assert_eq!(rects(out.calls())[0].4, style.background);
    }
}
