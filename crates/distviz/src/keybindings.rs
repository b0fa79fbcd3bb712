//! Configurable key bindings.
//!
//! Bindings are lists of key strings such as `"q"`, `"ctrl+c"` or
//! `"shift+left"`, loaded from `{data_dir}/keybindings.yaml`.

use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

pub const KEYBINDINGS_FILE: &str = "keybindings.yaml";

/// Root keybindings configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindingsConfig {
    /// Keys that work everywhere
    pub global: GlobalBindings,
    /// Family tab selection
    pub tabs: TabBindings,
    /// Parameter panel controls
    pub controls: ControlBindings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalBindings {
    pub quit: Vec<String>,
    pub cancel: Vec<String>,
}

impl Default for GlobalBindings {
    fn default() -> Self {
        Self {
            quit: vec!["q".into(), "ctrl+c".into()],
            cancel: vec!["esc".into()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabBindings {
    pub next: Vec<String>,
    pub prev: Vec<String>,
    /// The n-th key jumps straight to the n-th family
    pub select: Vec<String>,
}

impl Default for TabBindings {
    fn default() -> Self {
        Self {
            next: vec!["]".into(), "tab".into()],
            prev: vec!["[".into(), "shift+tab".into()],
            select: (1..=9).map(|n| n.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlBindings {
    pub up: Vec<String>,
    pub down: Vec<String>,
    pub decrease: Vec<String>,
    pub increase: Vec<String>,
    pub coarse_decrease: Vec<String>,
    pub coarse_increase: Vec<String>,
    pub toggle_mode: Vec<String>,
    pub reset: Vec<String>,
}

impl Default for ControlBindings {
    fn default() -> Self {
        Self {
            up: vec!["k".into(), "up".into()],
            down: vec!["j".into(), "down".into()],
            decrease: vec!["h".into(), "left".into()],
            increase: vec!["l".into(), "right".into()],
            coarse_decrease: vec!["shift+h".into(), "shift+left".into()],
            coarse_increase: vec!["shift+l".into(), "shift+right".into()],
            toggle_mode: vec!["m".into()],
            reset: vec!["r".into()],
        }
    }
}

impl KeybindingsConfig {
    /// Convert a key event to our string format.
    ///
    /// Examples:
    /// - `Char('a')` -> `"a"`
    /// - `Char('c')` with ctrl -> `"ctrl+c"`
    /// - `Char('H')` with shift -> `"shift+h"`
    /// - `Left` with shift -> `"shift+left"`
    /// - `BackTab` -> `"shift+tab"`
    pub fn key_to_string(key: &KeyEvent) -> String {
        let mut parts = Vec::new();
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            parts.push("ctrl");
        }
        if key.modifiers.contains(KeyModifiers::ALT) {
            parts.push("alt");
        }

        let key_str = match key.code {
            KeyCode::Char(c) => {
                // Shifted punctuation already arrives as its own character
                if c.is_uppercase() || (shift && c.is_alphabetic()) {
                    parts.push("shift");
                }
                c.to_lowercase().to_string()
            }
            KeyCode::Enter => "enter".to_string(),
            KeyCode::Esc => "esc".to_string(),
            KeyCode::Tab => {
                if shift {
                    parts.push("shift");
                }
                "tab".to_string()
            }
            KeyCode::BackTab => {
                parts.push("shift");
                "tab".to_string()
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                if shift {
                    parts.push("shift");
                }
                match key.code {
                    KeyCode::Up => "up",
                    KeyCode::Down => "down",
                    KeyCode::Left => "left",
                    _ => "right",
                }
                .to_string()
            }
            KeyCode::Home => "home".to_string(),
            KeyCode::End => "end".to_string(),
            KeyCode::PageUp => "pageup".to_string(),
            KeyCode::PageDown => "pagedown".to_string(),
            KeyCode::F(n) => format!("f{}", n),
            _ => return String::new(),
        };

        parts.push(&key_str);
        parts.join("+")
    }

    /// Check if a key event matches any of the configured bindings.
    pub fn matches(key: &KeyEvent, bindings: &[String]) -> bool {
        let key_str = Self::key_to_string(key);
        if key_str.is_empty() {
            return false;
        }
        bindings.iter().any(|b| b.eq_ignore_ascii_case(&key_str))
    }

    /// First binding of a command, for help text.
    pub fn hint(bindings: &[String]) -> &str {
        bindings.first().map(String::as_str).unwrap_or("?")
    }

    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join(KEYBINDINGS_FILE)
    }

    /// Load keybindings from file, returning defaults if the file doesn't
    /// exist or fails to parse.
    pub fn load_or_default(data_dir: &Path) -> Self {
        let path = Self::path(data_dir);
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => serde_saphyr::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring {}: {e}", path.display());
                Self::default()
            }),
            Err(e) => {
                tracing::warn!("Failed to read {}: {e}", path.display());
                Self::default()
            }
        }
    }
}
