//! Menu container: an ordered list of rows plus the transient selection, scroll and
//! open-animation state the navigation and render passes work on.

use std::{cell::RefCell, ops::Range, rc::Rc};

use crate::binding::{Action, Binding};
use crate::style::MenuStyle;

mod item;
mod navigation;

pub use item::{ItemKind, ItemPayload, MenuItem, NumberKind, NumberOption};

/// Shared handle to a menu. A submenu is owned jointly by the item that opens it and
/// by whoever else keeps a clone (typically the host's navigation stack).
pub type MenuRef = Rc<RefCell<Menu>>;

pub const DEFAULT_MAX_VISIBLE: usize = 12;
pub const DEFAULT_INT_STEP: i32 = 1;
pub const DEFAULT_FLOAT_STEP: f32 = 0.1;

pub struct Menu {
    title: String,
    items: Vec<MenuItem>,
    selected: usize,
    scroll: usize,
    max_visible: usize,
    opening: bool,
    open_progress: f32,
    style: MenuStyle,
}

impl Menu {
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_style(title, MenuStyle::default(), DEFAULT_MAX_VISIBLE)
    }

    /// `max_visible` below 1 is raised to 1.
    pub fn with_style(title: impl Into<String>, style: MenuStyle, max_visible: usize) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
            selected: 0,
            scroll: 0,
            max_visible: max_visible.max(1),
            opening: false,
            open_progress: 1.0,
            style,
        }
    }

    pub fn into_ref(self) -> MenuRef {
        Rc::new(RefCell::new(self))
    }

    pub fn add_action(&mut self, label: impl Into<String>, action: impl Action + 'static) {
        self.push(MenuItem::new(label, ItemPayload::Action(Box::new(action))));
    }

    pub fn add_toggle(&mut self, label: impl Into<String>, state: impl Binding<bool> + 'static) {
        self.push(MenuItem::new(label, ItemPayload::Toggle(Box::new(state))));
    }

    pub fn add_int(
        &mut self,
        label: impl Into<String>,
        value: impl Binding<i32> + 'static,
        min: i32,
        max: i32,
        step: i32,
    ) {
        let option = NumberOption::Int {
            value: Box::new(value),
            min,
            max,
            step,
        };
        self.push(MenuItem::new(label, ItemPayload::Number(option)));
    }

    pub fn add_float(
        &mut self,
        label: impl Into<String>,
        value: impl Binding<f32> + 'static,
        min: f32,
        max: f32,
        step: f32,
    ) {
        let option = NumberOption::Float {
            value: Box::new(value),
            min,
            max,
            step,
        };
        self.push(MenuItem::new(label, ItemPayload::Number(option)));
    }

    pub fn add_text(&mut self, label: impl Into<String>) {
        self.push(MenuItem::new(label, ItemPayload::Text));
    }

    pub fn add_separator(&mut self, label: impl Into<String>) {
        self.push(MenuItem::new(label, ItemPayload::Separator));
    }

    pub fn add_submenu(&mut self, label: impl Into<String>, submenu: MenuRef) {
        self.push(MenuItem::new(label, ItemPayload::Submenu(submenu)));
    }

    /// Creates a child menu titled `label` that shares this menu's style and
    /// capacity, appends it as a submenu row and returns it.
    pub fn add_folder(&mut self, label: impl Into<String>) -> MenuRef {
        self.add_folder_with(label, |_| {})
    }

    /// Like [`Menu::add_folder`], populating the child with `build` before returning.
    pub fn add_folder_with(
        &mut self,
        label: impl Into<String>,
        build: impl FnOnce(&mut Menu),
    ) -> MenuRef {
        let label = label.into();
        let mut child = Menu::with_style(label.clone(), self.style.clone(), self.max_visible);
        build(&mut child);
        let child = child.into_ref();
        self.add_submenu(label, child.clone());
        child
    }

    fn push(&mut self, item: MenuItem) {
        self.items.push(item);
        if !self.is_selectable(self.selected) {
            if let Some(first) = self.first_selectable() {
                self.selected = first;
                self.scroll_to_selection();
            }
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn max_visible(&self) -> usize {
        self.max_visible
    }

    pub fn style(&self) -> &MenuStyle {
        &self.style
    }

    pub fn is_opening(&self) -> bool {
        self.opening
    }

    /// 0.0 right after [`Menu::open`], 1.0 once fully shown.
    pub fn open_progress(&self) -> f32 {
        self.open_progress
    }

    pub fn current_item(&self) -> Option<&MenuItem> {
        self.items.get(self.selected)
    }

    /// Kind of the selected row; `Action` for an empty menu.
    pub fn current_kind(&self) -> ItemKind {
        self.current_item()
            .map(MenuItem::kind)
            .unwrap_or(ItemKind::Action)
    }

    pub fn current_submenu(&self) -> Option<MenuRef> {
        self.current_item().and_then(MenuItem::submenu).cloned()
    }

    pub fn selectable_count(&self) -> usize {
        self.items.iter().filter(|i| i.is_selectable()).count()
    }

    /// 1-based position of the selection among selectable rows, 0 if there is none.
    pub fn selected_ordinal(&self) -> usize {
        if !self.is_selectable(self.selected) {
            return 0;
        }
        self.items[..=self.selected]
            .iter()
            .filter(|i| i.is_selectable())
            .count()
    }

    /// Item indices currently inside the scroll window.
    pub fn visible_range(&self) -> Range<usize> {
        let end = (self.scroll + self.max_visible).min(self.items.len());
        self.scroll.min(end)..end
    }

    pub fn max_scroll(&self) -> usize {
        self.items.len().saturating_sub(self.max_visible)
    }

    fn is_selectable(&self, index: usize) -> bool {
        self.items.get(index).is_some_and(MenuItem::is_selectable)
    }

    fn first_selectable(&self) -> Option<usize> {
        self.items.iter().position(MenuItem::is_selectable)
    }
}

impl std::fmt::Debug for Menu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Menu")
            .field("title", &self.title)
            .field("items", &self.items)
            .field("selected", &self.selected)
            .field("scroll", &self.scroll)
            .field("max_visible", &self.max_visible)
            .field("opening", &self.opening)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn empty_menu_defaults() {
        let menu = Menu::new("Empty");
        assert!(menu.is_empty());
        assert_eq!(menu.current_kind(), ItemKind::Action);
        assert!(menu.current_submenu().is_none());
        assert_eq!(menu.selected_ordinal(), 0);
        assert_eq!(menu.visible_range(), 0..0);
    }

    #[test]
    fn appending_keeps_selection_on_selectable_row() {
        let mut menu = Menu::new("Main");
        menu.add_separator("General");
        menu.add_text("Read only");
        assert_eq!(menu.selected(), 0);
        assert_eq!(menu.selectable_count(), 0);

        menu.add_toggle("Debug", Rc::new(Cell::new(false)));
        assert_eq!(menu.selected(), 2);
        assert_eq!(menu.current_kind(), ItemKind::Toggle);
        assert_eq!(menu.selected_ordinal(), 1);

        menu.add_action("Quit", || {});
        assert_eq!(menu.selected(), 2);
        assert_eq!(menu.selectable_count(), 2);
    }

    #[test]
    fn number_kinds_are_reported() {
        let mut menu = Menu::new("Numbers");
        menu.add_int("Int", Rc::new(Cell::new(1)), 0, 5, DEFAULT_INT_STEP);
        menu.add_float("Float", Rc::new(Cell::new(0.5)), 0.0, 1.0, DEFAULT_FLOAT_STEP);
        assert_eq!(menu.items()[0].kind(), ItemKind::Number(NumberKind::Int));
        assert_eq!(menu.items()[1].kind(), ItemKind::Number(NumberKind::Float));
    }

    #[test]
    fn folder_inherits_style_and_is_shared() {
        let mut style = MenuStyle::default();
        style.width = 0.3;
        let mut root = Menu::with_style("Root", style, 4);
        let folder = root.add_folder_with("Vehicles", |m| {
            m.add_action("Spawn", || {});
            m.add_action("Repair", || {});
        });

        assert_eq!(root.current_kind(), ItemKind::Submenu);
        let current = root.current_submenu().expect("submenu row selected");
        assert!(Rc::ptr_eq(&current, &folder));

        let folder = folder.borrow();
        assert_eq!(folder.title(), "Vehicles");
        assert_eq!(folder.len(), 2);
        assert_eq!(folder.max_visible(), 4);
        assert_eq!(folder.style().width, 0.3);
    }

    #[test]
    fn max_visible_is_at_least_one() {
        let menu = Menu::with_style("Tiny", MenuStyle::default(), 0);
        assert_eq!(menu.max_visible(), 1);
    }
}
