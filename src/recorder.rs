//! Headless capability backends: they keep what the menu asked for instead of
//! drawing or playing it.

use std::cell::RefCell;

use serde::Serialize;

use crate::render::{Renderer, TextOptions};
use crate::sound::{Signal, SoundPlayer};
use crate::style::Color;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCall {
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Color,
    },
    Text {
        x: f32,
        y: f32,
        scale: f32,
        text: String,
        color: Color,
        opts: TextOptions,
    },
}

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    calls: Vec<DrawCall>,
}

impl RecordingRenderer {
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn take(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }
}

impl Renderer for RecordingRenderer {
    fn draw_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        self.calls.push(DrawCall::Rect { x, y, w, h, color });
    }

    fn draw_text(&mut self, x: f32, y: f32, scale: f32, text: &str, color: Color, opts: TextOptions) {
        self.calls.push(DrawCall::Text {
            x,
            y,
            scale,
            text: text.to_string(),
            color,
            opts,
        });
    }
}

#[derive(Debug, Default)]
pub struct RecordingSound {
    played: RefCell<Vec<Signal>>,
}

impl RecordingSound {
    pub fn signals(&self) -> Vec<Signal> {
        self.played.borrow().clone()
    }

    pub fn clear(&self) {
        self.played.borrow_mut().clear();
    }
}

impl SoundPlayer for RecordingSound {
    fn play(&self, signal: Signal) {
        self.played.borrow_mut().push(signal);
    }
}
