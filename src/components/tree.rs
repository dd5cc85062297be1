//! Collapsible file tree 📂
//!
//! The tree itself is immutable. Expansion flags live in a separate
//! [`TreeExpansion`] keyed by [`NodePath`], the structural position of a
//! node, so siblings that share a name stay distinct.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub name: String,
    /// `Some` (even empty) marks a container, `None` a leaf.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodes: Option<Vec<TreeNode>>,
}

impl TreeNode {
    pub fn folder(name: &str, children: Vec<TreeNode>) -> Self {
        Self {
            name: name.to_string(),
            nodes: Some(children),
        }
    }

    pub fn file(name: &str) -> Self {
        Self {
            name: name.to_string(),
            nodes: None,
        }
    }

    pub fn is_container(&self) -> bool {
        self.nodes.is_some()
    }

    pub fn children(&self) -> &[TreeNode] {
        self.nodes.as_deref().unwrap_or(&[])
    }
}

/// Child indices from the forest root down to a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    pub fn root(index: usize) -> Self {
        Self(vec![index])
    }

    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    pub fn parent(&self) -> Option<Self> {
        if self.0.len() <= 1 {
            return None;
        }
        Some(Self(self.0[..self.0.len() - 1].to_vec()))
    }

    pub fn depth(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }
}

impl From<Vec<usize>> for NodePath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|i| i.to_string()).collect();
        write!(f, "/{}", parts.join("/"))
    }
}

pub fn lookup<'a>(roots: &'a [TreeNode], path: &NodePath) -> Option<&'a TreeNode> {
    let (first, rest) = path.indices().split_first()?;
    let mut node = roots.get(*first)?;
    for &i in rest {
        node = node.nodes.as_ref()?.get(i)?;
    }
    Some(node)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Expanded,
    Collapsed,
    /// Leaf or unresolved path: nothing recorded.
    Ignored,
}

/// Expanded flags per node. A path that is absent is closed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TreeExpansion {
    expanded: BTreeSet<NodePath>,
}

impl TreeExpansion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, path: &NodePath) -> bool {
        self.expanded.contains(path)
    }

    /// Flip one container's flag. Descendant flags are left alone, so
    /// re-opening a parent restores what was open underneath it.
    pub fn toggle(&mut self, roots: &[TreeNode], path: &NodePath) -> ToggleOutcome {
        match lookup(roots, path) {
            Some(node) if node.is_container() => {
                if self.expanded.remove(path) {
                    tracing::debug!(%path, name = %node.name, "collapsed");
                    ToggleOutcome::Collapsed
                } else {
                    self.expanded.insert(path.clone());
                    tracing::debug!(%path, name = %node.name, "expanded");
                    ToggleOutcome::Expanded
                }
            }
            _ => ToggleOutcome::Ignored,
        }
    }

    pub fn snapshot(&self) -> Vec<NodePath> {
        self.expanded.iter().cloned().collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Folder { has_children: bool, expanded: bool },
    File,
}

/// One rendered line of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRow {
    pub path: NodePath,
    pub name: String,
    pub depth: usize,
    pub kind: NodeKind,
}

/// Depth-first walk that only descends into expanded containers.
pub fn visible_rows(roots: &[TreeNode], expansion: &TreeExpansion) -> Vec<TreeRow> {
    fn walk(node: &TreeNode, path: NodePath, expansion: &TreeExpansion, rows: &mut Vec<TreeRow>) {
        let expanded = expansion.is_expanded(&path);
        let kind = match &node.nodes {
            Some(children) => NodeKind::Folder {
                has_children: !children.is_empty(),
                expanded,
            },
            None => NodeKind::File,
        };

        rows.push(TreeRow {
            path: path.clone(),
            name: node.name.clone(),
            depth: path.depth(),
            kind,
        });

        if expanded {
            for (i, child) in node.children().iter().enumerate() {
                walk(child, path.child(i), expansion, rows);
            }
        }
    }

    let mut rows = Vec::new();
    for (i, root) in roots.iter().enumerate() {
        walk(root, NodePath::root(i), expansion, &mut rows);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::seed;

    fn path(indices: &[usize]) -> NodePath {
        NodePath::from(indices.to_vec())
    }

    #[test]
    fn test_lookup_follows_indices() {
        let roots = seed::file_tree();

        assert_eq!(lookup(&roots, &path(&[0])).map(|n| n.name.as_str()), Some("Home"));
        assert_eq!(
            lookup(&roots, &path(&[0, 0, 0, 0, 1])).map(|n| n.name.as_str()),
            Some("The-Dark-Knight.mp4")
        );
        assert_eq!(
            lookup(&roots, &path(&[0, 4])).map(|n| n.name.as_str()),
            Some("passwords.txt")
        );
        assert!(lookup(&roots, &path(&[0, 9])).is_none());
        assert!(lookup(&roots, &path(&[0, 4, 0])).is_none());
        assert!(lookup(&roots, &NodePath::default()).is_none());
    }

    #[test]
    fn test_toggle_leaf_is_ignored() {
        let roots = seed::file_tree();
        let mut expansion = TreeExpansion::new();
        expansion.toggle(&roots, &path(&[0]));
        let before = expansion.clone();

        let outcome = expansion.toggle(&roots, &path(&[0, 4]));

        assert_eq!(outcome, ToggleOutcome::Ignored);
        assert_eq!(expansion, before);
    }

    #[test]
    fn test_toggle_twice_restores_and_keeps_descendants() {
        let roots = seed::file_tree();
        let mut expansion = TreeExpansion::new();
        expansion.toggle(&roots, &path(&[0]));
        expansion.toggle(&roots, &path(&[0, 0]));
        expansion.toggle(&roots, &path(&[0, 0, 1]));
        let before = expansion.clone();

        assert_eq!(expansion.toggle(&roots, &path(&[0, 0])), ToggleOutcome::Collapsed);
        assert!(expansion.is_expanded(&path(&[0, 0, 1])));
        assert_eq!(expansion.toggle(&roots, &path(&[0, 0])), ToggleOutcome::Expanded);

        assert_eq!(expansion, before);
    }

    #[test]
    fn test_empty_container_is_toggle_eligible() {
        let roots = seed::file_tree();
        let mut expansion = TreeExpansion::new();
        let pictures = path(&[0, 2]);

        assert_eq!(expansion.toggle(&roots, &pictures), ToggleOutcome::Expanded);
        assert!(expansion.is_expanded(&pictures));
    }

    #[test]
    fn test_same_named_siblings_are_distinct() {
        let roots = vec![TreeNode::folder(
            "root",
            vec![TreeNode::folder("dup", vec![]), TreeNode::folder("dup", vec![])],
        )];
        let mut expansion = TreeExpansion::new();

        expansion.toggle(&roots, &path(&[0, 1]));

        assert!(!expansion.is_expanded(&path(&[0, 0])));
        assert!(expansion.is_expanded(&path(&[0, 1])));
    }

    #[test]
    fn test_visible_rows_respects_collapsed_parents() {
        let roots = seed::file_tree();
        let mut expansion = TreeExpansion::new();

        assert_eq!(visible_rows(&roots, &expansion).len(), 1);

        expansion.toggle(&roots, &path(&[0]));
        let rows = visible_rows(&roots, &expansion);
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Home", "Movies", "Music", "Pictures", "Documents", "passwords.txt"]
        );
        assert_eq!(rows[1].depth, 1);
        assert_eq!(
            rows[3].kind,
            NodeKind::Folder {
                has_children: false,
                expanded: false
            }
        );
        assert_eq!(rows[5].kind, NodeKind::File);

        // A remembered grandchild stays hidden while its parent is closed
        expansion.toggle(&roots, &path(&[0, 1, 0]));
        assert_eq!(visible_rows(&roots, &expansion).len(), 6);
    }

    #[test]
    fn test_node_path_navigation() {
        let p = path(&[0, 2, 1]);

        assert_eq!(p.indices(), &[0, 2, 1]);
        assert_eq!(p.depth(), 2);
        assert_eq!(p.parent(), Some(path(&[0, 2])));
        assert_eq!(NodePath::root(0).parent(), None);
        assert_eq!(p.to_string(), "/0/2/1");
    }
}
