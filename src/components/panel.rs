use serde::{Deserialize, Serialize};

/// Sidebar width in columns while closed.
pub const CLOSED_WIDTH: u16 = 5;
/// Sidebar width in columns while open.
pub const OPEN_WIDTH: u16 = 16;

/// Open/closed flag of the collapsible sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PanelState {
    open: bool,
}

impl PanelState {
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
        tracing::debug!(open = self.open, "sidebar toggled");
    }

    pub fn target_width(&self) -> u16 {
        if self.open {
            OPEN_WIDTH
        } else {
            CLOSED_WIDTH
        }
    }

    /// Toggle arrow: points outwards while closed, back while open.
    pub fn arrow_glyph(&self) -> &'static str {
        if self.open {
            "←"
        } else {
            "→"
        }
    }
}
