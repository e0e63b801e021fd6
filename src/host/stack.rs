use serde::Serialize;

use crate::host::commands::Command;
use crate::menu::MenuRef;
use crate::render::Renderer;
use crate::sound::{Signal, SoundPlayer};

/// Which menus became active or inactive while handling one command.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StackUpdate {
    pub entered: Option<String>,
    pub exited: Option<String>,
}

/// Point-in-time view of the active menu, for logs and the CLI.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub path: Vec<String>,
    pub selected: usize,
    pub scroll: usize,
    pub position: String,
    pub item: Option<String>,
    pub kind: String,
}

/// The host side of hierarchical navigation: submenus handed back by `select` are
/// pushed here and `Back` pops them again. The root is never popped.
pub struct MenuStack {
    stack: Vec<MenuRef>,
}

impl MenuStack {
    /// Opens `root` and makes it the active menu.
    pub fn new(root: MenuRef) -> Self {
        root.borrow_mut().open();
        Self { stack: vec![root] }
    }

    pub fn active(&self) -> &MenuRef {
        // `stack` always holds the root.
        &self.stack[self.stack.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn path(&self) -> Vec<String> {
        self.stack
            .iter()
            .map(|m| m.borrow().title().to_string())
            .collect()
    }

    pub fn handle(&mut self, cmd: Command, sound: &dyn SoundPlayer) -> StackUpdate {
        match cmd {
            Command::Up => self.active().borrow_mut().up(sound),
            Command::Down => self.active().borrow_mut().down(sound),
            Command::Left => self.active().borrow_mut().left(sound),
            Command::Right => self.active().borrow_mut().right(sound),
            Command::Select => return self.select(sound),
            Command::Back => return self.back(sound),
        }
        StackUpdate::default()
    }

    fn select(&mut self, sound: &dyn SoundPlayer) -> StackUpdate {
        let child = self.active().borrow_mut().select(sound);
        let Some(child) = child else {
            return StackUpdate::default();
        };
        let title = child.borrow().title().to_string();
        log::debug!("entering '{title}' at depth {}", self.stack.len() + 1);
        self.stack.push(child);
        StackUpdate {
            entered: Some(title),
            exited: None,
        }
    }

    fn back(&mut self, sound: &dyn SoundPlayer) -> StackUpdate {
        if self.stack.len() <= 1 {
            return StackUpdate::default();
        }
        let Some(leaving) = self.stack.pop() else {
            return StackUpdate::default();
        };
        leaving.borrow_mut().close();
        sound.play(Signal::Back);

        let exited = leaving.borrow().title().to_string();
        log::debug!("leaving '{exited}' for depth {}", self.stack.len());
        StackUpdate {
            entered: Some(self.active().borrow().title().to_string()),
            exited: Some(exited),
        }
    }

    pub fn advance(&self, dt: f32) {
        self.active().borrow_mut().advance(dt);
    }

    pub fn render(&self, renderer: &mut dyn Renderer) {
        self.active().borrow().render(renderer);
    }

    pub fn snapshot(&self) -> Snapshot {
        let menu = self.active().borrow();
        Snapshot {
            path: self.path(),
            selected: menu.selected(),
            scroll: menu.scroll(),
            position: crate::render::counter_text(&menu),
            item: menu.current_item().map(|i| i.label().to_string()),
            kind: format!("{:?}", menu.current_kind()),
        }
    }
}
