use std::fmt;

use crate::binding::{Action, Binding};
use crate::menu::MenuRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    Int,
    Float,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Action,
    Toggle,
    Number(NumberKind),
    Submenu,
    Text,
    Separator,
}

impl ItemKind {
    pub fn is_selectable(self) -> bool {
        !matches!(self, ItemKind::Separator | ItemKind::Text)
    }
}

pub enum NumberOption {
    Int {
        value: Box<dyn Binding<i32>>,
        min: i32,
        max: i32,
        step: i32,
    },
    Float {
        value: Box<dyn Binding<f32>>,
        min: f32,
        max: f32,
        step: f32,
    },
}

impl NumberOption {
    pub fn kind(&self) -> NumberKind {
        match self {
            NumberOption::Int { .. } => NumberKind::Int,
            NumberOption::Float { .. } => NumberKind::Float,
        }
    }

    /// Moves the bound value by one step in `dir` (negative = down), clamped to
    /// the range. Returns whether the stored value changed.
    pub fn step_by(&self, dir: i32) -> bool {
        match self {
            NumberOption::Int {
                value,
                min,
                max,
                step,
            } => {
                let current = value.get();
                let next = clamp_int(current.saturating_add(step.saturating_mul(dir)), *min, *max);
                if next == current {
                    return false;
                }
                value.set(next);
                true
            }
            NumberOption::Float {
                value,
                min,
                max,
                step,
            } => {
                let current = value.get();
                let next = clamp_float(current + step * dir as f32, *min, *max);
                if next == current {
                    return false;
                }
                value.set(next);
                true
            }
        }
    }

    pub fn display_value(&self) -> String {
        match self {
            NumberOption::Int { value, .. } => value.get().to_string(),
            NumberOption::Float { value, .. } => format!("{:.2}", value.get()),
        }
    }
}

// Ranges are never validated and `clamp` panics on min > max.
fn clamp_int(v: i32, min: i32, max: i32) -> i32 {
    v.max(min).min(max)
}

fn clamp_float(v: f32, min: f32, max: f32) -> f32 {
    v.max(min).min(max)
}

pub enum ItemPayload {
    Action(Box<dyn Action>),
    Toggle(Box<dyn Binding<bool>>),
    Number(NumberOption),
    Submenu(MenuRef),
    Text,
    Separator,
}

/// One row of a menu.
pub struct MenuItem {
    label: String,
    payload: ItemPayload,
}

impl MenuItem {
    pub fn new(label: impl Into<String>, payload: ItemPayload) -> Self {
        Self {
            label: label.into(),
            payload,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn payload(&self) -> &ItemPayload {
        &self.payload
    }

    pub(crate) fn parts_mut(&mut self) -> (&str, &mut ItemPayload) {
        (&self.label, &mut self.payload)
    }

    pub fn kind(&self) -> ItemKind {
        match &self.payload {
            ItemPayload::Action(_) => ItemKind::Action,
            ItemPayload::Toggle(_) => ItemKind::Toggle,
            ItemPayload::Number(n) => ItemKind::Number(n.kind()),
            ItemPayload::Submenu(_) => ItemKind::Submenu,
            ItemPayload::Text => ItemKind::Text,
            ItemPayload::Separator => ItemKind::Separator,
        }
    }

    pub fn is_selectable(&self) -> bool {
        self.kind().is_selectable()
    }

    pub fn submenu(&self) -> Option<&MenuRef> {
        match &self.payload {
            ItemPayload::Submenu(menu) => Some(menu),
            _ => None,
        }
    }

    pub fn toggle_state(&self) -> Option<bool> {
        match &self.payload {
            ItemPayload::Toggle(b) => Some(b.get()),
            _ => None,
        }
    }

    pub fn number(&self) -> Option<&NumberOption> {
        match &self.payload {
            ItemPayload::Number(n) => Some(n),
            _ => None,
        }
    }
}

impl fmt::Debug for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuItem")
            .field("label", &self.label)
            .field("kind", &self.kind())
            .finish()
    }
}
