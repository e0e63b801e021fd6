use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use crate::binding::FnBinding;
use crate::config::ResolvedConfig;
use crate::menu::{Menu, MenuRef, DEFAULT_FLOAT_STEP};

#[derive(Debug, Clone, PartialEq)]
pub struct AudioSettings {
    pub master: i32,
    pub music: f32,
    pub muted: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            master: 8,
            music: 0.6,
            muted: false,
        }
    }
}

/// Host-owned state the demo tree is bound to.
#[derive(Debug, Default, Clone)]
pub struct DemoState {
    pub invincible: Rc<Cell<bool>>,
    pub wanted_level: Rc<Cell<i32>>,
    pub time_scale: Rc<Cell<f32>>,
    pub audio: Rc<RefCell<AudioSettings>>,
    pub vehicles_spawned: Rc<Cell<u32>>,
    pub last_weather: Rc<RefCell<Option<String>>>,
}

const WEATHER: &[&str] = &[
    "Clear", "Extra sunny", "Clouds", "Overcast", "Rain", "Clearing", "Thunder", "Smog",
    "Foggy", "Snow", "Blizzard", "Light snow", "Christmas", "Halloween",
];

/// Builds the sample tree the CLI drives: bound toggles and numbers, nested
/// folders, static rows and a folder long enough to scroll.
pub fn build(resolved: &ResolvedConfig) -> (MenuRef, DemoState) {
    let state = DemoState::default();
    state.time_scale.set(1.0);

    let mut root = Menu::with_style("Main Menu", resolved.style.clone(), resolved.max_visible);

    root.add_separator("Player");
    root.add_toggle("Invincible", state.invincible.clone());
    root.add_int("Wanted level", state.wanted_level.clone(), 0, 5, 1);

    root.add_folder_with("Vehicles", |m| {
        let spawned = state.vehicles_spawned.clone();
        m.add_action("Spawn car", move || {
            spawned.set(spawned.get() + 1);
            log::info!("spawned vehicle #{}", spawned.get());
        });
        m.add_action("Repair", || log::info!("vehicle repaired"));
        m.add_text("Spawns appear in front of the player");
    });

    root.add_separator("World");
    root.add_float("Time scale", state.time_scale.clone(), 0.1, 2.0, DEFAULT_FLOAT_STEP);
    root.add_folder_with("Weather", |m| {
        for name in WEATHER {
            let last = state.last_weather.clone();
            m.add_action(*name, move || {
                log::info!("weather -> {name}");
                *last.borrow_mut() = Some(name.to_string());
            });
        }
    });

    root.add_folder_with("Settings", |m| {
        m.add_separator("Audio");
        let (get, set) = (state.audio.clone(), state.audio.clone());
        m.add_int(
            "Master volume",
            FnBinding::new(
                move || get.borrow().master,
                move |v| set.borrow_mut().master = v,
            ),
            0,
            10,
            1,
        );
        let (get, set) = (state.audio.clone(), state.audio.clone());
        m.add_float(
            "Music volume",
            FnBinding::new(
                move || get.borrow().music,
                move |v| set.borrow_mut().music = v,
            ),
            0.0,
            1.0,
            0.05,
        );
        let (get, set) = (state.audio.clone(), state.audio.clone());
        m.add_toggle(
            "Mute",
            FnBinding::new(
                move || get.borrow().muted,
                move |v| set.borrow_mut().muted = v,
            ),
        );
        m.add_separator("About");
        m.add_text(concat!("framemenu ", env!("CARGO_PKG_VERSION")));
    });

    (root.into_ref(), state)
}
