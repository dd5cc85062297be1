use std::time::{Duration, Instant};

use serde::Serialize;

use super::config::UserConfig;
use super::keys::KeyConfig;
use crate::components::panel::{CLOSED_WIDTH, OPEN_WIDTH};
use crate::components::{
    seed, DragEvent, DragOutcome, ItemId, ListSnapshot, NodeKind, NodePath, PanelState,
    ReorderList, ToggleOutcome, TreeExpansion, TreeNode, TreeRow,
};
use crate::ui::theme::Theme;

mod ui;

pub use ui::{HitMap, ListRowHit, Toast, TreeRowHit, ViewMode};

/// Time constant of the sidebar width easing.
const SIDEBAR_EASE_SECS: f32 = 0.08;

/// Final state of every component, printed by `--dump-state`.
#[derive(Debug, Clone, Serialize)]
pub struct AppSnapshot {
    pub list: ListSnapshot,
    pub tree_expanded: Vec<NodePath>,
    pub sidebar_open: bool,
}

pub struct App {
    pub theme: Theme,
    pub keys: KeyConfig,
    pub is_running: bool,
    pub view_mode: ViewMode,

    /// Reorderable song list 🎵
    pub list: ReorderList,
    pub list_selected: usize,

    /// File tree 📂
    pub tree: Vec<TreeNode>,
    pub tree_expansion: TreeExpansion,
    pub tree_selected: usize,

    /// Sidebar 🧭
    pub panel: PanelState,
    /// Rendered width in columns; eases towards the panel's target width.
    pub sidebar_width: f32,
    pub nav_selected: usize,

    /// UI State
    pub show_keyhints: bool,
    pub toast: Option<Toast>,
    pub hits: HitMap,
    last_tick: Instant,
}

impl App {
    pub fn new(config: &UserConfig) -> Self {
        let panel = PanelState::new(config.ui.sidebar_open);

        Self {
            theme: config.theme.clone(),
            keys: config.keys.clone(),
            is_running: true,
            view_mode: config.ui.start_view,
            list: ReorderList::new(seed::songs()),
            list_selected: 0,
            tree: seed::file_tree(),
            tree_expansion: TreeExpansion::new(),
            tree_selected: 0,
            panel,
            sidebar_width: panel.target_width() as f32,
            nav_selected: 0,
            show_keyhints: false,
            toast: None,
            hits: HitMap::default(),
            last_tick: Instant::now(),
        }
    }

    pub fn set_view(&mut self, view: ViewMode) {
        if self.view_mode == view {
            return;
        }
        // A drag never survives leaving the list
        self.list.cancel_drag();
        self.view_mode = view;
        tracing::debug!(?view, "view switched");
    }

    pub fn show_toast(&mut self, message: &str) {
        let now = Instant::now();
        let deadline = now + Toast::DURATION;

        if let Some(ref mut current) = self.toast {
            // Keep start_time so a rapid update does not replay the entrance
            current.message = message.to_string();
            current.deadline = deadline;
        } else {
            self.toast = Some(Toast {
                message: message.to_string(),
                start_time: now,
                deadline,
            });
        }
    }

    pub fn on_tick(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_tick);
        self.last_tick = now;

        if let Some(ref toast) = self.toast {
            if now > toast.deadline {
                self.toast = None;
            }
        }

        self.advance_animation(dt);
    }

    /// Ease the sidebar width towards its target over `dt`.
    pub fn advance_animation(&mut self, dt: Duration) {
        let target = self.panel.target_width() as f32;
        let k = 1.0 - (-dt.as_secs_f32() / SIDEBAR_EASE_SECS).exp();
        self.sidebar_width += (target - self.sidebar_width) * k;

        if (target - self.sidebar_width).abs() < 0.05 {
            self.sidebar_width = target;
        }
        self.sidebar_width = self
            .sidebar_width
            .clamp(CLOSED_WIDTH as f32, OPEN_WIDTH as f32);
    }

    pub fn is_sidebar_animating(&self) -> bool {
        self.sidebar_width != self.panel.target_width() as f32
    }

    // ━━━ List ━━━

    pub fn move_list_cursor(&mut self, delta: isize) {
        let len = self.list.len();
        if len == 0 {
            self.list_selected = 0;
            return;
        }
        self.list_selected = self.list_selected.saturating_add_signed(delta).min(len - 1);

        if self.list.is_dragging() {
            let sequence = self.list.items()[self.list_selected].sequence;
            self.list.apply(DragEvent::Over(sequence));
        }
    }

    pub fn select_list_row(&mut self, index: usize) {
        if index < self.list.len() {
            self.list_selected = index;
        }
    }

    /// Start dragging the row under the cursor.
    pub fn grab_selected(&mut self) {
        if let Some(item) = self.list.items().get(self.list_selected) {
            let sequence = item.sequence;
            self.list.apply(DragEvent::Begin(sequence));
        }
    }

    /// Drop the active item on the row with `to`. The source is resolved
    /// from the active item's id, not from a remembered sequence.
    pub fn drop_dragged(&mut self, to: u32) -> Option<DragOutcome> {
        let from = self.list.active_item()?.sequence;
        let outcome = self.list.apply(DragEvent::End { from, to })?;
        self.after_move(outcome);
        Some(outcome)
    }

    /// Drop on the current hover target (keyboard drop).
    pub fn drop_on_hover(&mut self) -> Option<DragOutcome> {
        let to = self
            .list
            .over_item()
            .or_else(|| self.list.active_item())?
            .sequence;
        self.drop_dragged(to)
    }

    pub fn cancel_drag(&mut self) {
        if self.list.is_dragging() {
            self.list.apply(DragEvent::Cancel);
            self.show_toast("Drag cancelled");
        }
    }

    /// Move the selected row one slot up (-1) or down (+1).
    pub fn shift_selected(&mut self, delta: i64) -> Option<DragOutcome> {
        let from = self.list.items().get(self.list_selected)?.sequence;
        let to = from as i64 + delta;
        if to < 1 {
            return None;
        }
        let outcome = self.list.end_drag(from, to as u32);
        self.after_move(outcome);
        Some(outcome)
    }

    pub fn remove_item(&mut self, id: ItemId) {
        if let Some(removed) = self.list.remove(id) {
            self.list_selected = self
                .list_selected
                .min(self.list.len().saturating_sub(1));
            self.show_toast(&format!("Removed: {}", removed.title));
        }
    }

    pub fn remove_selected(&mut self) {
        if let Some(id) = self.list.items().get(self.list_selected).map(|item| item.id) {
            self.remove_item(id);
        }
    }

    fn after_move(&mut self, outcome: DragOutcome) {
        if let DragOutcome::Moved { id, to, .. } = outcome {
            self.list_selected = to as usize - 1;
            if let Some(item) = self.list.get(id) {
                let message = format!("Moved {} to #{}", item.title, to);
                self.show_toast(&message);
            }
        }
    }

    // ━━━ Tree ━━━

    pub fn tree_rows(&self) -> Vec<TreeRow> {
        crate::components::tree::visible_rows(&self.tree, &self.tree_expansion)
    }

    pub fn move_tree_cursor(&mut self, delta: isize) {
        let len = self.tree_rows().len();
        self.tree_selected = self
            .tree_selected
            .saturating_add_signed(delta)
            .min(len.saturating_sub(1));
    }

    pub fn toggle_tree_row(&mut self, index: usize) -> ToggleOutcome {
        let Some(row) = self.tree_rows().into_iter().nth(index) else {
            return ToggleOutcome::Ignored;
        };
        self.tree_selected = index;
        self.tree_expansion.toggle(&self.tree, &row.path)
    }

    /// `l`: open a closed folder.
    pub fn expand_selected(&mut self) {
        let rows = self.tree_rows();
        if let Some(row) = rows.get(self.tree_selected) {
            if let NodeKind::Folder { expanded: false, .. } = row.kind {
                self.tree_expansion.toggle(&self.tree, &row.path);
            }
        }
    }

    /// `h`: close an open folder, otherwise jump to the parent row.
    pub fn collapse_or_parent(&mut self) {
        let rows = self.tree_rows();
        let Some(row) = rows.get(self.tree_selected) else {
            return;
        };

        if let NodeKind::Folder { expanded: true, .. } = row.kind {
            self.tree_expansion.toggle(&self.tree, &row.path);
        } else if let Some(parent) = row.path.parent() {
            if let Some(idx) = rows.iter().position(|r| r.path == parent) {
                self.tree_selected = idx;
            }
        }
    }

    // ━━━ Sidebar ━━━

    pub fn toggle_sidebar(&mut self) {
        self.panel.toggle();
    }

    pub fn move_nav_cursor(&mut self, delta: isize) {
        self.nav_selected = self
            .nav_selected
            .saturating_add_signed(delta)
            .min(seed::NAV_LINKS.len() - 1);
    }

    pub fn snapshot(&self) -> AppSnapshot {
        AppSnapshot {
            list: self.list.snapshot(),
            tree_expanded: self.tree_expansion.snapshot(),
            sidebar_open: self.panel.is_open(),
        }
    }
}
