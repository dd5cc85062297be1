use std::time::{Duration, Instant};

use ratatui::layout::{Position, Rect};
use serde::{Deserialize, Serialize};

use crate::components::{ItemId, NodePath};

/// Which demo fills the screen 🎛️
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    List,
    Tree,
    Sidebar,
}

impl ViewMode {
    pub fn next(self) -> Self {
        match self {
            ViewMode::List => ViewMode::Tree,
            ViewMode::Tree => ViewMode::Sidebar,
            ViewMode::Sidebar => ViewMode::List,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ViewMode::List => ViewMode::Sidebar,
            ViewMode::Tree => ViewMode::List,
            ViewMode::Sidebar => ViewMode::Tree,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ViewMode::List => "Draggable List",
            ViewMode::Tree => "File Tree",
            ViewMode::Sidebar => "Sidebar",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub start_time: Instant,
    pub deadline: Instant,
}

impl Toast {
    pub const DURATION: Duration = Duration::from_millis(2000);
}

/// Screen position of one rendered list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRowHit {
    pub area: Rect,
    pub index: usize,
    pub id: ItemId,
    pub sequence: u32,
    /// The ✕ button at the end of the row.
    pub remove: Rect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRowHit {
    pub area: Rect,
    pub index: usize,
    pub path: NodePath,
}

/// Geometry recorded while drawing, used to resolve mouse positions.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    pub list_area: Option<Rect>,
    pub list_rows: Vec<ListRowHit>,
    pub tree_rows: Vec<TreeRowHit>,
    pub sidebar_toggle: Option<Rect>,
    pub nav_links: Vec<(Rect, usize)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn list_row_at(&self, column: u16, row: u16) -> Option<&ListRowHit> {
        let pos = Position::new(column, row);
        self.list_rows.iter().find(|hit| hit.area.contains(pos))
    }

    pub fn tree_row_at(&self, column: u16, row: u16) -> Option<&TreeRowHit> {
        let pos = Position::new(column, row);
        self.tree_rows.iter().find(|hit| hit.area.contains(pos))
    }

    pub fn on_sidebar_toggle(&self, column: u16, row: u16) -> bool {
        let pos = Position::new(column, row);
        self.sidebar_toggle.is_some_and(|area| area.contains(pos))
    }

    pub fn nav_link_at(&self, column: u16, row: u16) -> Option<usize> {
        let pos = Position::new(column, row);
        self.nav_links
            .iter()
            .find(|(area, _)| area.contains(pos))
            .map(|(_, idx)| *idx)
    }
}
