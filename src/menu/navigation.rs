use log::{debug, warn};

use super::{ItemKind, ItemPayload, Menu, MenuItem, MenuRef};
use crate::sound::{Signal, SoundPlayer};

impl Menu {
    pub fn up(&mut self, sound: &dyn SoundPlayer) {
        self.step_selection(false, sound);
    }

    pub fn down(&mut self, sound: &dyn SoundPlayer) {
        self.step_selection(true, sound);
    }

    /// Decrements the selected number row. Other rows ignore it.
    pub fn left(&mut self, sound: &dyn SoundPlayer) {
        self.adjust(-1, sound);
    }

    /// Increments the selected number row. Other rows ignore it.
    pub fn right(&mut self, sound: &dyn SoundPlayer) {
        self.adjust(1, sound);
    }

    /// Activates the selected row.
    ///
    /// Actions run their callback and toggles flip their binding; both return `None`.
    /// A submenu row restarts the child's open state and hands the child back so the
    /// host can make it the active menu. The selection of `self` is left as is.
    pub fn select(&mut self, sound: &dyn SoundPlayer) -> Option<MenuRef> {
        let item = self.items.get_mut(self.selected)?;
        let (label, payload) = item.parts_mut();
        match payload {
            ItemPayload::Action(action) => {
                debug!("'{}': invoking '{label}'", self.title);
                action.invoke();
                sound.play(Signal::Select);
                None
            }
            ItemPayload::Toggle(state) => {
                let next = !state.get();
                state.set(next);
                debug!("'{}': '{label}' -> {next}", self.title);
                sound.play(Signal::Select);
                None
            }
            ItemPayload::Submenu(child) => {
                let child = child.clone();
                match child.try_borrow_mut() {
                    Ok(mut menu) => menu.open(),
                    Err(_) => warn!(
                        "'{}': submenu '{label}' is already borrowed, not resetting it",
                        self.title
                    ),
                }
                debug!("'{}': entering '{label}'", self.title);
                sound.play(Signal::Select);
                Some(child)
            }
            ItemPayload::Number(_) | ItemPayload::Text | ItemPayload::Separator => None,
        }
    }

    /// Makes the menu active: restarts the open animation, selects the first selectable
    /// row and scrolls so that as much of the list above it as fits is shown.
    pub fn open(&mut self) {
        self.opening = true;
        self.open_progress = 0.0;
        self.selected = self.first_selectable().unwrap_or(0);
        self.scroll = (self.selected + 1)
            .saturating_sub(self.max_visible)
            .min(self.max_scroll());
        self.reveal_separator_above();
    }

    pub fn close(&mut self) {
        self.opening = false;
    }

    /// Advances the open animation by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        if !self.opening {
            return;
        }
        let duration = self.style.open_duration;
        self.open_progress = if duration <= 0.0 {
            1.0
        } else {
            (self.open_progress + dt.max(0.0) / duration).min(1.0)
        };
        if self.open_progress >= 1.0 {
            self.opening = false;
        }
    }

    fn step_selection(&mut self, forward: bool, sound: &dyn SoundPlayer) {
        let Some(next) = self.find_selectable(forward) else {
            return;
        };
        if next == self.selected {
            return;
        }
        self.selected = next;
        self.scroll_to_selection();
        debug!(
            "'{}': selected {} (scroll {})",
            self.title, self.selected, self.scroll
        );
        sound.play(Signal::Navigate);
    }

    /// Nearest selectable row after (or before) the selection, wrapping around.
    /// Gives up after one full lap.
    fn find_selectable(&self, forward: bool) -> Option<usize> {
        let len = self.items.len();
        if len == 0 {
            return None;
        }
        let mut index = self.selected.min(len - 1);
        for _ in 0..len {
            index = if forward {
                (index + 1) % len
            } else {
                (index + len - 1) % len
            };
            if self.items[index].is_selectable() {
                return Some(index);
            }
        }
        None
    }

    pub(super) fn scroll_to_selection(&mut self) {
        if self.selected < self.scroll {
            self.scroll = self.selected;
        } else if self.selected >= self.scroll + self.max_visible {
            self.scroll = self.selected + 1 - self.max_visible;
        }
        self.scroll = self.scroll.min(self.max_scroll());
        self.reveal_separator_above();
    }

    /// A separator right above the window belongs to the rows below it, so pull it in
    /// as long as the selection stays visible.
    fn reveal_separator_above(&mut self) {
        let Some(above) = self.scroll.checked_sub(1) else {
            return;
        };
        let is_separator = self
            .items
            .get(above)
            .map(MenuItem::kind)
            .is_some_and(|kind| kind == ItemKind::Separator);
        if is_separator && self.selected < above + self.max_visible {
            self.scroll = above;
        }
    }

    fn adjust(&mut self, dir: i32, sound: &dyn SoundPlayer) {
        let Some(item) = self.items.get(self.selected) else {
            return;
        };
        let Some(option) = item.number() else {
            return;
        };
        if option.step_by(dir) {
            debug!(
                "'{}': '{}' = {}",
                self.title,
                item.label(),
                option.display_value()
            );
            sound.play(Signal::Adjust);
        }
    }
}
