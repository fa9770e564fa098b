//! Per-entry filesystem metadata
//!
//! This module wraps a raw filesystem object into the uniform [`Entry`] record the
//! rest of the pipeline works with. Each entry is read exactly once per traversal step.

use std::fs::{self, Metadata};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::{Result, TreeError};

/// The kind of filesystem object an entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    SymlinkToDir,
    SymlinkToFile,
    Other,
}

impl EntryKind {
    pub fn is_symlink(&self) -> bool {
        matches!(self, EntryKind::SymlinkToDir | EntryKind::SymlinkToFile)
    }
}

/// Numeric owner and group ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnerIds {
    pub uid: u32,
    pub gid: u32,
}

/// Access to ownership information, where the platform has it.
///
/// Targets without POSIX ownership return `None` instead of failing.
pub trait OwnerInfo {
    fn owner_info(&self) -> Option<OwnerIds>;
}

impl OwnerInfo for Metadata {
    #[cfg(unix)]
    fn owner_info(&self) -> Option<OwnerIds> {
        use std::os::unix::fs::MetadataExt;
        Some(OwnerIds {
            uid: self.uid(),
            gid: self.gid(),
        })
    }

    #[cfg(not(unix))]
    fn owner_info(&self) -> Option<OwnerIds> {
        None
    }
}

/// One filesystem object as observed during a walk. Immutable once read.
#[derive(Debug, Clone)]
pub struct Entry {
    name: String,
    path: PathBuf,
    kind: EntryKind,
    followed: bool,
    size: u64,
    modified: DateTime<Local>,
    permission: String,
    owner: Option<OwnerIds>,
}

impl Entry {
    /// Read the entry at `path`.
    ///
    /// With `follow_links`, a symlink reports its target's metadata and fails if the
    /// target is missing. Without it, the link itself is reported and its target is only
    /// probed to tell directory links from file links.
    pub fn read(path: &Path, follow_links: bool) -> Result<Self> {
        let link_meta = fs::symlink_metadata(path).map_err(|e| TreeError::from_io(path, e))?;
        Self::resolve(path, link_meta, follow_links)
    }

    /// Build the entry from a directory listing item, reusing the metadata the listing
    /// already holds. Only symlinks touch the filesystem again, to reach their target.
    pub fn from_dir_entry(item: &fs::DirEntry, follow_links: bool) -> Result<Self> {
        let path = item.path();
        let link_meta = item.metadata().map_err(|e| TreeError::from_io(&path, e))?;
        Self::resolve(&path, link_meta, follow_links)
    }

    fn resolve(path: &Path, link_meta: Metadata, follow_links: bool) -> Result<Self> {
        if !link_meta.file_type().is_symlink() {
            let kind = if link_meta.is_dir() {
                EntryKind::Directory
            } else if link_meta.is_file() {
                EntryKind::File
            } else {
                EntryKind::Other
            };
            return Ok(Self::from_metadata(path, kind, false, &link_meta));
        }

        if follow_links {
            let target = fs::metadata(path).map_err(|e| TreeError::from_io(path, e))?;
            let kind = if target.is_dir() {
                EntryKind::SymlinkToDir
            } else {
                EntryKind::SymlinkToFile
            };
            Ok(Self::from_metadata(path, kind, true, &target))
        } else {
            // Broken links count as file links
            let kind = match fs::metadata(path) {
                Ok(target) if target.is_dir() => EntryKind::SymlinkToDir,
                _ => EntryKind::SymlinkToFile,
            };
            Ok(Self::from_metadata(path, kind, false, &link_meta))
        }
    }

    fn from_metadata(path: &Path, kind: EntryKind, followed: bool, meta: &Metadata) -> Self {
        let modified = meta
            .modified()
            .map(DateTime::<Local>::from)
            .unwrap_or_else(|_| DateTime::<Local>::from(std::time::UNIX_EPOCH));

        Self {
            name: display_name(path),
            path: path.to_path_buf(),
            kind,
            followed,
            size: meta.len(),
            modified,
            permission: permission_string(meta),
            owner: meta.owner_info(),
        }
    }

    /// Replace the recorded path, keeping the display name.
    pub(crate) fn with_path(mut self, path: PathBuf) -> Self {
        self.path = path;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Whether this entry is walked as a directory.
    ///
    /// Directory symlinks only count when they were followed.
    pub fn is_dir(&self) -> bool {
        match self.kind {
            EntryKind::Directory => true,
            EntryKind::SymlinkToDir => self.followed,
            _ => false,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn modified(&self) -> DateTime<Local> {
        self.modified
    }

    pub fn permission(&self) -> &str {
        &self.permission
    }

    pub fn owner(&self) -> Option<OwnerIds> {
        self.owner
    }
}

/// The last path component, or the path as given when it has none (`.`, `/`).
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

/// Format permission bits as `-rwxr-xr-x`.
///
/// Only the permission bits are shown, so the leading type column is always `-`.
pub fn permission_string(meta: &Metadata) -> String {
    format_mode(mode_bits(meta))
}

#[cfg(unix)]
fn mode_bits(meta: &Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode()
}

#[cfg(not(unix))]
fn mode_bits(meta: &Metadata) -> u32 {
    if meta.permissions().readonly() {
        0o444
    } else {
        0o666
    }
}

pub fn format_mode(mode: u32) -> String {
    let perms = mode & 0o777;
    let mut s = String::with_capacity(10);
    s.push('-');
    for shift in [6, 3, 0] {
        let bits = (perms >> shift) & 7;
        s.push(if bits & 4 != 0 { 'r' } else { '-' });
        s.push(if bits & 2 != 0 { 'w' } else { '-' });
        s.push(if bits & 1 != 0 { 'x' } else { '-' });
    }
    s
}
