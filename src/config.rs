use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use crate::menu::DEFAULT_MAX_VISIBLE;
use crate::style::{Color, MenuStyle};

pub const CONFIG_ENV: &str = "FRAMEMENU_CONFIG";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Rows shown before the list scrolls.
    #[serde(default)]
    pub max_visible: Option<usize>,

    #[serde(default)]
    pub style: StyleConfig,
}

/// Overrides for [`MenuStyle`]; anything left out keeps its default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub width: Option<f32>,
    pub header_height: Option<f32>,
    pub item_height: Option<f32>,
    pub footer_height: Option<f32>,
    pub padding: Option<f32>,
    pub title_scale: Option<f32>,
    pub item_scale: Option<f32>,
    pub footer_scale: Option<f32>,
    pub font: Option<u8>,
    pub scrollbar_width: Option<f32>,
    pub open_duration: Option<f32>,
    pub footer_hint: Option<String>,
    pub colors: ColorsConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    pub background: Option<Color>,
    pub header: Option<Color>,
    pub footer: Option<Color>,
    pub selection: Option<Color>,
    pub text: Option<Color>,
    pub selected_text: Option<Color>,
    pub disabled_text: Option<Color>,
    pub toggle_on: Option<Color>,
    pub toggle_off: Option<Color>,
    pub scrollbar_track: Option<Color>,
    pub scrollbar_thumb: Option<Color>,
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub style: MenuStyle,
    pub max_visible: usize,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve(None)
    }
}

pub fn load_optional() -> Result<Option<Config>> {
    let Some(path) = resolve_config_path() else {
        return Ok(None);
    };
    if !path.exists() {
        return Ok(None);
    }
    load_from(&path).map(Some)
}

pub fn load_from(path: &Path) -> Result<Config> {
    let bytes = fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
    let cfg: Config =
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))?;
    Ok(cfg)
}

pub fn resolve_config_path() -> Option<PathBuf> {
    if let Ok(p) = env::var(CONFIG_ENV) {
        if !p.trim().is_empty() {
            return Some(PathBuf::from(p));
        }
    }

    let local = PathBuf::from("framemenu.json");
    if local.exists() {
        return Some(local);
    }

    if let Some(appdata) = env::var_os("APPDATA") {
        return Some(PathBuf::from(appdata).join("framemenu").join("config.json"));
    }

    if let Some(home) = env::var_os("HOME") {
        return Some(PathBuf::from(home).join(".config").join("framemenu").join("config.json"));
    }

    None
}

pub fn ensure_config_file_exists() -> Result<PathBuf> {
    let Some(path) = resolve_config_path() else {
        return Err(anyhow!(
            "No config path available (set {CONFIG_ENV} or ensure APPDATA/HOME is present)"
        ));
    };
    write_template(&path)?;
    Ok(path)
}

/// Writes a starter config to `path` unless a file is already there.
pub fn write_template(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config dir {}", parent.display()))?;
    }

    if !path.exists() {
        let template = serde_json::json!({
            "max_visible": DEFAULT_MAX_VISIBLE,
            "style": {}
        });
        let mut s = serde_json::to_string_pretty(&template).context("serialize config template")?;
        s.push('\n');
        fs::write(path, s.as_bytes()).with_context(|| format!("write {}", path.display()))?;
    }
    Ok(())
}

pub fn resolve(config: Option<&Config>) -> ResolvedConfig {
    let mut style = MenuStyle::default();
    let Some(cfg) = config else {
        return ResolvedConfig {
            style,
            max_visible: DEFAULT_MAX_VISIBLE,
        };
    };

    let s = &cfg.style;
    apply(&mut style.x, s.x);
    apply(&mut style.y, s.y);
    apply(&mut style.width, s.width);
    apply(&mut style.header_height, s.header_height);
    apply(&mut style.item_height, s.item_height);
    apply(&mut style.footer_height, s.footer_height);
    apply(&mut style.padding, s.padding);
    apply(&mut style.title_scale, s.title_scale);
    apply(&mut style.item_scale, s.item_scale);
    apply(&mut style.footer_scale, s.footer_scale);
    apply(&mut style.font, s.font);
    apply(&mut style.scrollbar_width, s.scrollbar_width);
    apply(&mut style.open_duration, s.open_duration);
    apply(&mut style.footer_hint, s.footer_hint.clone());

    let c = &s.colors;
    apply(&mut style.background, c.background);
    apply(&mut style.header, c.header);
    apply(&mut style.footer, c.footer);
    apply(&mut style.selection, c.selection);
    apply(&mut style.text, c.text);
    apply(&mut style.selected_text, c.selected_text);
    apply(&mut style.disabled_text, c.disabled_text);
    apply(&mut style.toggle_on, c.toggle_on);
    apply(&mut style.toggle_off, c.toggle_off);
    apply(&mut style.scrollbar_track, c.scrollbar_track);
    apply(&mut style.scrollbar_thumb, c.scrollbar_thumb);

    let max_visible = match cfg.max_visible {
        Some(0) => {
            log::warn!("max_visible = 0 in config, using 1");
            1
        }
        Some(n) => n,
        None => DEFAULT_MAX_VISIBLE,
    };

    ResolvedConfig { style, max_visible }
}

fn apply<T>(slot: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *slot = v;
    }
}
