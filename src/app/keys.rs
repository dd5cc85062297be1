use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyConfig {
    // Global
    pub quit: String,
    pub toggle_keyhints: String,

    // View Switching
    pub view_list: String,
    pub view_tree: String,
    pub view_sidebar: String,
    pub view_next: String,
    pub view_prev: String,

    // Navigation (Shared)
    pub nav_up: String,
    pub nav_up_alt: String,
    pub nav_down: String,
    pub nav_down_alt: String,
    pub nav_left: String,
    pub nav_left_alt: String,
    pub nav_right: String,
    pub nav_right_alt: String,

    // List
    pub grab: String,
    pub drop: String,
    pub cancel: String,
    pub move_up: String,
    pub move_down: String,
    pub delete_item: String,

    // Tree
    pub toggle_node: String,
    pub toggle_node_alt: String,

    // Sidebar
    pub toggle_sidebar: String,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            quit: "q".to_string(),
            toggle_keyhints: "?".to_string(),

            view_list: "1".to_string(),
            view_tree: "2".to_string(),
            view_sidebar: "3".to_string(),
            view_next: "Tab".to_string(),
            view_prev: "BackTab".to_string(),

            nav_up: "k".to_string(),
            nav_up_alt: "Up".to_string(),
            nav_down: "j".to_string(),
            nav_down_alt: "Down".to_string(),
            nav_left: "h".to_string(),
            nav_left_alt: "Left".to_string(),
            nav_right: "l".to_string(),
            nav_right_alt: "Right".to_string(),

            grab: "Space".to_string(),
            drop: "Enter".to_string(),
            cancel: "Esc".to_string(),
            move_up: "K".to_string(),
            move_down: "J".to_string(),
            delete_item: "d".to_string(),

            toggle_node: "Enter".to_string(),
            toggle_node_alt: "Space".to_string(),

            toggle_sidebar: "s".to_string(),
        }
    }
}

impl KeyConfig {
    pub fn matches(&self, event: KeyEvent, key_str: &str) -> bool {
        match key_str {
            "Space" => event.code == KeyCode::Char(' '),
            "Enter" => event.code == KeyCode::Enter,
            "Backspace" => event.code == KeyCode::Backspace,
            "Esc" => event.code == KeyCode::Esc,
            "Tab" => event.code == KeyCode::Tab,
            "BackTab" => event.code == KeyCode::BackTab,
            "Up" => event.code == KeyCode::Up,
            "Down" => event.code == KeyCode::Down,
            "Left" => event.code == KeyCode::Left,
            "Right" => event.code == KeyCode::Right,
            s if s.chars().count() == 1 => match s.chars().next() {
                // Uppercase bindings also accept shift + lowercase
                Some(ch) if ch.is_uppercase() => {
                    event.code == KeyCode::Char(ch)
                        || (event.code == KeyCode::Char(ch.to_ascii_lowercase())
                            && event.modifiers.contains(KeyModifiers::SHIFT))
                }
                // Shift + lowercase belongs to the uppercase binding
                Some(ch) if ch.is_lowercase() => {
                    event.code == KeyCode::Char(ch)
                        && !event.modifiers.contains(KeyModifiers::SHIFT)
                }
                Some(ch) => event.code == KeyCode::Char(ch),
                None => false,
            },
            _ => false,
        }
    }

    pub fn matches_any(&self, event: KeyEvent, key_strs: &[&str]) -> bool {
        key_strs.iter().any(|k| self.matches(event, k))
    }

    pub fn is_up(&self, event: KeyEvent) -> bool {
        self.matches_any(event, &[self.nav_up.as_str(), self.nav_up_alt.as_str()])
    }

    pub fn is_down(&self, event: KeyEvent) -> bool {
        self.matches_any(event, &[self.nav_down.as_str(), self.nav_down_alt.as_str()])
    }

    pub fn is_left(&self, event: KeyEvent) -> bool {
        self.matches_any(event, &[self.nav_left.as_str(), self.nav_left_alt.as_str()])
    }

    pub fn is_right(&self, event: KeyEvent) -> bool {
        self.matches_any(event, &[self.nav_right.as_str(), self.nav_right_alt.as_str()])
    }

    // Helper for UI display
    pub fn display(&self, key_str: &str) -> String {
        match key_str {
            "Up" => "↑".to_string(),
            "Down" => "↓".to_string(),
            "Left" => "←".to_string(),
            "Right" => "→".to_string(),
            "BackTab" => "S-Tab".to_string(),
            "Backspace" => "Bksp".to_string(),
            _ => key_str.to_string(),
        }
    }
}
