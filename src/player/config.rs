use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::types::FieldKind;

const MAX_FPS: u32 = 240;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    #[serde(default = "default_fps")]
    pub fps: u32,
    #[serde(default)]
    pub initial_field: FieldKind,
    #[serde(default)]
    pub key_bindings: KeyBindings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyBindings {
    #[serde(default = "default_quit")]
    pub quit: String,
    #[serde(default = "default_quit_alt")]
    pub quit_alt: String,
    #[serde(default = "default_next_field")]
    pub next_field: String,
}

fn default_fps() -> u32 { 60 }
fn default_quit() -> String { "q".into() }
fn default_quit_alt() -> String { "Esc".into() }
fn default_next_field() -> String { "Space".into() }

impl Default for KeyBindings {
    fn default() -> Self {
        KeyBindings {
            quit: default_quit(),
            quit_alt: default_quit_alt(),
            next_field: default_next_field(),
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            fps: default_fps(),
            initial_field: FieldKind::default(),
            key_bindings: KeyBindings::default(),
        }
    }
}

impl PlayerConfig {
    pub fn load() -> Self {
        match std::fs::read_to_string(Self::config_path()) {
            Ok(json) => Self::from_json(&json),
            Err(_) => Self::default(),
        }
    }

    /// Parse a config file, falling back to defaults when it is invalid.
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<PlayerConfig>(json) {
            Ok(config) => config.sanitized(),
            Err(e) => {
                warn!("invalid player config ({e}), using defaults");
                Self::default()
            }
        }
    }

    fn sanitized(mut self) -> Self {
        self.fps = self.fps.clamp(1, MAX_FPS);
        self
    }

    fn config_path() -> std::path::PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        let mut path = std::path::PathBuf::from(home);
        path.push(".config");
        path.push("ascii-blobs");
        path.push("player.json");
        path
    }
}

/// Check whether a crossterm `KeyEvent` matches a binding string from config.
pub fn matches_binding(binding: &str, event: &KeyEvent) -> bool {
    if let Some(rest) = binding.strip_prefix("Ctrl-") {
        if !event.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }
        return match rest.chars().next() {
            Some(c) => event.code == KeyCode::Char(c),
            None => false,
        };
    }

    // Plain bindings never fire while Ctrl or Alt is held.
    if event.modifiers.contains(KeyModifiers::CONTROL)
        || event.modifiers.contains(KeyModifiers::ALT)
    {
        return false;
    }

    match binding {
        "Enter" => event.code == KeyCode::Enter,
        "Esc" => event.code == KeyCode::Esc,
        "Space" => event.code == KeyCode::Char(' '),
        "Tab" => event.code == KeyCode::Tab,
        "Right" => event.code == KeyCode::Right,
        "Left" => event.code == KeyCode::Left,
        s => {
            if let Some(n) = s.strip_prefix('F').and_then(|rest| rest.parse::<u8>().ok()) {
                return event.code == KeyCode::F(n);
            }
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => event.code == KeyCode::Char(c),
                _ => false,
            }
        }
    }
}
