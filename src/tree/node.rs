//! In-memory tree model

use std::path::Path;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::metadata::Entry;

/// Rolled-up counts for a subtree plus a snapshot of the node's own metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub dir_count: usize,
    pub file_count: usize,
    pub size: u64,
    pub mod_time: DateTime<Local>,
    pub permission: String,
}

impl Stats {
    /// Zero counts, with size, mtime and permission taken from the entry.
    pub fn for_entry(entry: &Entry) -> Self {
        Self {
            dir_count: 0,
            file_count: 0,
            size: entry.size(),
            mod_time: entry.modified(),
            permission: entry.permission().to_string(),
        }
    }

    /// Fold a child subtree into these counts: its own counts plus one for the child itself.
    pub fn absorb(&mut self, child: &TreeNode) {
        self.dir_count += child.stats.dir_count;
        self.file_count += child.stats.file_count;
        if child.is_dir() {
            self.dir_count += 1;
        } else {
            self.file_count += 1;
        }
    }
}

/// One entry, its retained children in display order, and its stats.
///
/// Built bottom-up by the walker and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct TreeNode {
    entry: Entry,
    children: Vec<TreeNode>,
    stats: Stats,
}

impl TreeNode {
    /// A node with no children and zero counts.
    pub fn leaf(entry: Entry) -> Self {
        let stats = Stats::for_entry(&entry);
        Self {
            entry,
            children: Vec::new(),
            stats,
        }
    }

    /// A directory node. `stats` may count more than `children` holds when
    /// the walker hid some children from display.
    pub fn dir(entry: Entry, children: Vec<TreeNode>, stats: Stats) -> Self {
        Self {
            entry,
            children,
            stats,
        }
    }

    pub fn name(&self) -> &str {
        self.entry.name()
    }

    pub fn path(&self) -> &Path {
        self.entry.path()
    }

    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn is_dir(&self) -> bool {
        self.entry.is_dir()
    }

    /// Label shown for this node: the name, or the full path when asked for.
    pub fn label(&self, full_path: bool) -> String {
        if full_path {
            self.entry.path().to_string_lossy().to_string()
        } else {
            self.entry.name().to_string()
        }
    }

    /// Whether this subtree is dropped from output under `prune`.
    ///
    /// Only the file count matters: a directory of empty directories is pruned too.
    pub fn is_prunable(&self, prune: bool) -> bool {
        prune && self.is_dir() && self.stats.file_count == 0
    }

    /// Children that survive pruning, in display order.
    pub fn visible_children(&self, prune: bool) -> impl Iterator<Item = &TreeNode> {
        self.children.iter().filter(move |c| !c.is_prunable(prune))
    }
}
