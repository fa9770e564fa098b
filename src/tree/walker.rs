//! TreeWalker - depth-first traversal that builds the full tree in memory

use std::fs;
use std::path::Path;

use log::{debug, trace};

use crate::error::{Result, TreeError};
use crate::metadata::Entry;

use super::config::{Options, SortOrder};
use super::filter::FilterChain;
use super::node::{Stats, TreeNode};
use super::sort::sort_entries;

/// Tree walker that applies filtering and sorting at every directory level.
///
/// The first I/O failure aborts the walk; no partial tree is ever returned.
pub struct TreeWalker {
    options: Options,
    filter: FilterChain,
}

impl TreeWalker {
    /// Create a walker. Fails on a malformed include or exclude pattern.
    pub fn new(options: Options) -> Result<Self> {
        let filter = FilterChain::new(&options)?;
        Ok(Self { options, filter })
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn walk(&self, root: &Path) -> Result<TreeNode> {
        let absolute = std::path::absolute(root).map_err(|e| TreeError::from_io(root, e))?;
        let entry = Entry::read(root, self.options.follow_links)?.with_path(absolute);
        debug!("walking {}", entry.path().display());

        let tree = self.walk_entry(entry, 0)?;
        debug!(
            "walk finished: {} directories, {} files",
            tree.stats().dir_count,
            tree.stats().file_count
        );
        Ok(tree)
    }

    fn walk_entry(&self, entry: Entry, level: usize) -> Result<TreeNode> {
        if !entry.is_dir() {
            return Ok(TreeNode::leaf(entry));
        }

        let mut stats = Stats::for_entry(&entry);

        // Depth is checked before descending, so children past the cap are neither shown nor counted
        if !self.options.descends_from(level) {
            return Ok(TreeNode::dir(entry, Vec::new(), stats));
        }

        let mut entries = self.filter.apply(self.read_entries(entry.path())?);
        sort_entries(&mut entries, self.options.sort);
        trace!(
            "{}: {} entries after filtering",
            entry.path().display(),
            entries.len()
        );

        let mut children = Vec::with_capacity(entries.len());
        for child in entries {
            let node = self.walk_entry(child, level + 1)?;
            // dirs_only hides files from display but they still count
            stats.absorb(&node);
            if !self.options.dirs_only || node.is_dir() {
                children.push(node);
            }
        }

        Ok(TreeNode::dir(entry, children, stats))
    }

    /// Read a directory's raw entries, in name order.
    fn read_entries(&self, dir: &Path) -> Result<Vec<Entry>> {
        let listing = fs::read_dir(dir).map_err(|e| TreeError::from_io(dir, e))?;

        let mut entries = Vec::new();
        for item in listing {
            let item = item.map_err(|e| TreeError::from_io(dir, e))?;
            entries.push(Entry::from_dir_entry(&item, self.options.follow_links)?);
        }
        sort_entries(&mut entries, SortOrder::Name);
        Ok(entries)
    }
}

/// Walk `path` with `options` and return the finished tree.
pub fn traverse(path: &Path, options: &Options) -> Result<TreeNode> {
    TreeWalker::new(options.clone())?.walk(path)
}
