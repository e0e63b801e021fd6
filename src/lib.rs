pub mod binding;
pub mod config;
pub mod host;
pub mod menu;
pub mod recorder;
pub mod render;
pub mod sound;
pub mod style;

pub use binding::{Action, Binding};
pub use menu::{ItemKind, Menu, MenuItem, MenuRef, NumberKind};
pub use render::Renderer;
pub use sound::{Signal, SoundPlayer};
pub use style::{Color, MenuStyle};
