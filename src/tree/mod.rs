//! Directory tree walking logic
//!
//! `TreeWalker` reads the filesystem depth-first, filtering and sorting each
//! directory's entries, and returns an owned `TreeNode` tree with rolled-up stats.
//! Renderers in `crate::output` consume that tree without re-filtering or re-sorting.

mod config;
mod filter;
mod node;
mod sort;
mod walker;

// Re-export public types
pub use config::{DEFAULT_INDENT, DEFAULT_TIME_FORMAT, Options, SortOrder, limit_from_signed};
pub use filter::{FilterChain, cap_fan_out, filter_hidden, filter_pattern};
pub use node::{Stats, TreeNode};
pub use sort::sort_entries;
pub use walker::{TreeWalker, traverse};
