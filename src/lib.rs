//! hitree - print the tree structure of a directory as text or JSON

pub mod error;
pub mod metadata;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Result, TreeError};
pub use metadata::{Entry, EntryKind, OwnerIds, OwnerInfo};
pub use output::{
    FileType, JsonTree, OutputConfig, OutputSink, Palette, TreeFormatter, to_json_string,
    to_json_tree, write_json,
};
pub use tree::{Options, SortOrder, Stats, TreeNode, TreeWalker, traverse};
