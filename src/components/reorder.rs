//! Reorderable list state 🎵
//!
//! Owns an ordered collection of [`ListItem`]s whose `sequence` field is
//! always the dense rank `1..=N`. Drag gestures arrive as discrete
//! [`DragEvent`]s; the list reorders only when a drag ends.
//!
//! `sequence` is a display field. It is what a rendered drag handle
//! carries, so drag events address items by it, but anything held across
//! a mutation (the active drag item, the hover target) is keyed by
//! [`ItemId`].

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Stable identity of a list item, assigned at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub id: ItemId,
    pub artist: String,
    pub title: String,
    /// 1-based display rank, renumbered after every structural change.
    pub sequence: u32,
}

impl ListItem {
    pub fn new(id: u32, artist: &str, title: &str, sequence: u32) -> Self {
        Self {
            id: ItemId(id),
            artist: artist.to_string(),
            title: title.to_string(),
            sequence,
        }
    }
}

/// Normalized drag gesture, produced by the input layer from keys or mouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEvent {
    Begin(u32),
    Over(u32),
    End { from: u32, to: u32 },
    Cancel,
}

/// Result of dropping a dragged item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// The item moved; `from`/`to` are its sequence before and after.
    Moved { id: ItemId, from: u32, to: u32 },
    /// Dropped onto itself.
    Unchanged,
    /// One of the sequences no longer resolves (stale handle).
    Cancelled,
}

/// Full ordered snapshot handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListSnapshot {
    pub items: Vec<ListItem>,
    pub active: Option<ItemId>,
}

#[derive(Debug, Clone, Default)]
pub struct ReorderList {
    items: Vec<ListItem>,
    active: Option<ItemId>,
    over: Option<ItemId>,
}

impl ReorderList {
    /// Seed the list. Items are ordered by their supplied `sequence`
    /// (ties keep input order), repeated ids are dropped, then ranks are
    /// renumbered densely.
    pub fn new(mut items: Vec<ListItem>) -> Self {
        items.sort_by_key(|item| item.sequence);

        let mut seen = HashSet::new();
        items.retain(|item| {
            let fresh = seen.insert(item.id);
            if !fresh {
                tracing::warn!(id = %item.id, title = %item.title, "dropping item with duplicate id");
            }
            fresh
        });

        let mut list = Self {
            items,
            active: None,
            over: None,
        };
        list.renumber();
        list
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&ListItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn by_sequence(&self, sequence: u32) -> Option<&ListItem> {
        self.items.iter().find(|item| item.sequence == sequence)
    }

    pub fn active_item(&self) -> Option<&ListItem> {
        self.active.and_then(|id| self.get(id))
    }

    /// Hover target of the drag in progress, if any.
    pub fn over_item(&self) -> Option<&ListItem> {
        self.over.and_then(|id| self.get(id))
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Record the item with this sequence as the active drag item.
    /// An unknown sequence leaves no active item.
    pub fn begin_drag(&mut self, sequence: u32) -> Option<&ListItem> {
        self.active = self.by_sequence(sequence).map(|item| item.id);
        self.over = self.active;
        tracing::debug!(sequence, active = ?self.active, "drag started");
        self.active_item()
    }

    /// Drag-move-over: remember the hovered item. Order is untouched
    /// until the drop.
    pub fn drag_over(&mut self, sequence: u32) {
        if self.active.is_none() {
            return;
        }
        if let Some(id) = self.by_sequence(sequence).map(|item| item.id) {
            self.over = Some(id);
        }
    }

    /// Drop the item at `from` onto the slot at `to`.
    pub fn end_drag(&mut self, from: u32, to: u32) -> DragOutcome {
        self.active = None;
        self.over = None;

        let from_idx = self.items.iter().position(|item| item.sequence == from);
        let to_idx = self.items.iter().position(|item| item.sequence == to);

        let (Some(from_idx), Some(to_idx)) = (from_idx, to_idx) else {
            tracing::debug!(from, to, "drag end did not resolve, treating as cancel");
            return DragOutcome::Cancelled;
        };

        if from_idx == to_idx {
            return DragOutcome::Unchanged;
        }

        let item = self.items.remove(from_idx);
        let id = item.id;
        self.items.insert(to_idx, item);
        self.renumber();

        let to = self.items[to_idx].sequence;
        tracing::debug!(%id, from, to, "item moved");
        DragOutcome::Moved { id, from, to }
    }

    /// Abandon the drag in progress. Safe to call when nothing is dragged.
    pub fn cancel_drag(&mut self) {
        self.active = None;
        self.over = None;
    }

    /// Remove the item with `id`; unknown ids are ignored.
    pub fn remove(&mut self, id: ItemId) -> Option<ListItem> {
        let idx = self.items.iter().position(|item| item.id == id)?;
        let removed = self.items.remove(idx);

        if self.active == Some(id) {
            self.active = None;
        }
        if self.over == Some(id) {
            self.over = self.active;
        }

        self.renumber();
        tracing::debug!(%id, remaining = self.items.len(), "item removed");
        Some(removed)
    }

    /// Feed one normalized gesture event. Only `End` yields an outcome.
    pub fn apply(&mut self, event: DragEvent) -> Option<DragOutcome> {
        match event {
            DragEvent::Begin(sequence) => {
                self.begin_drag(sequence);
                None
            }
            DragEvent::Over(sequence) => {
                self.drag_over(sequence);
                None
            }
            DragEvent::End { from, to } => Some(self.end_drag(from, to)),
            DragEvent::Cancel => {
                self.cancel_drag();
                None
            }
        }
    }

    pub fn snapshot(&self) -> ListSnapshot {
        ListSnapshot {
            items: self.items.clone(),
            active: self.active,
        }
    }

    fn renumber(&mut self) {
        for (i, item) in self.items.iter_mut().enumerate() {
            item.sequence = i as u32 + 1;
        }
    }
}
