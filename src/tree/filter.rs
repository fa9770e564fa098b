//! Per-directory entry filtering
//!
//! Stages run in a fixed order, each one skipped when not configured:
//! fan-out cap, hidden names, exclude pattern, include pattern.

use glob::Pattern;
use log::debug;

use crate::error::{Result, TreeError};
use crate::metadata::Entry;

use super::config::Options;

/// The filter stages of one walk, with patterns compiled up front.
#[derive(Debug, Clone, Default)]
pub struct FilterChain {
    file_limit: Option<usize>,
    include_hidden: bool,
    exclude: Option<Pattern>,
    include: Option<Pattern>,
}

impl FilterChain {
    /// Build the chain from options. A malformed glob fails here, before any traversal.
    pub fn new(options: &Options) -> Result<Self> {
        Ok(Self {
            file_limit: options.file_limit,
            include_hidden: options.include_hidden,
            exclude: compile(options.exclude_pattern.as_deref())?,
            include: compile(options.include_pattern.as_deref())?,
        })
    }

    /// Apply every configured stage to one directory's raw listing.
    pub fn apply(&self, entries: Vec<Entry>) -> Vec<Entry> {
        let mut entries = match self.file_limit {
            Some(limit) => cap_fan_out(entries, limit),
            None => entries,
        };
        if !self.include_hidden {
            entries = filter_hidden(entries);
        }
        if let Some(pattern) = &self.exclude {
            entries = filter_pattern(entries, pattern, false);
        }
        if let Some(pattern) = &self.include {
            entries = filter_pattern(entries, pattern, true);
        }
        entries
    }
}

fn compile(pattern: Option<&str>) -> Result<Option<Pattern>> {
    match pattern {
        None | Some("") => Ok(None),
        Some(p) => Pattern::new(p)
            .map(Some)
            .map_err(|source| TreeError::InvalidPattern {
                pattern: p.to_string(),
                source,
            }),
    }
}

/// Drop the whole listing when it holds more than `limit` entries.
pub fn cap_fan_out(entries: Vec<Entry>, limit: usize) -> Vec<Entry> {
    if entries.len() > limit {
        debug!(
            "{} entries exceed the limit of {}, listing no children",
            entries.len(),
            limit
        );
        return Vec::new();
    }
    entries
}

/// Drop entries whose name starts with `.`.
pub fn filter_hidden(entries: Vec<Entry>) -> Vec<Entry> {
    entries.into_iter().filter(|e| !e.is_hidden()).collect()
}

/// Keep (`include = true`) or drop (`include = false`) files whose name matches.
///
/// Directories always pass through untouched.
pub fn filter_pattern(entries: Vec<Entry>, pattern: &Pattern, include: bool) -> Vec<Entry> {
    entries
        .into_iter()
        .filter(|e| e.is_dir() || pattern.matches(e.name()) == include)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn entries_in(dir: &Path) -> Vec<Entry> {
        let mut entries: Vec<Entry> = fs::read_dir(dir)
            .unwrap()
            .map(|e| Entry::read(&e.unwrap().path(), false).unwrap())
            .collect();
        entries.sort_by(|a, b| a.name().cmp(b.name()));
        entries
    }

    fn names(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.name()).collect()
    }

    fn flat_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in [
            ".hidden",
            "golang.go",
            "python.py",
            "python.pyc",
            "normal.py",
            "normal.go",
            "normal.txt",
        ] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        fs::create_dir(dir.path().join("a")).unwrap();
        fs::create_dir(dir.path().join("dir.go")).unwrap();
        dir
    }

    #[test]
    fn test_hidden_filtered_by_default() {
        let dir = flat_dir();
        let chain = FilterChain::new(&Options::default()).unwrap();
        let kept = chain.apply(entries_in(dir.path()));
        assert!(!names(&kept).contains(&".hidden"));
        assert_eq!(kept.len(), 8);
    }

    #[test]
    fn test_include_hidden() {
        let dir = flat_dir();
        let opts = Options {
            include_hidden: true,
            ..Default::default()
        };
        let kept = FilterChain::new(&opts).unwrap().apply(entries_in(dir.path()));
        assert!(names(&kept).contains(&".hidden"));
    }

    #[test]
    fn test_include_pattern_files_only() {
        let dir = flat_dir();
        let opts = Options {
            include_pattern: Some("*.go".to_string()),
            ..Default::default()
        };
        let kept = FilterChain::new(&opts).unwrap().apply(entries_in(dir.path()));
        assert_eq!(names(&kept), vec!["a", "dir.go", "golang.go", "normal.go"]);
    }

    #[test]
    fn test_exclude_pattern_never_drops_directories() {
        let dir = flat_dir();
        let opts = Options {
            exclude_pattern: Some("*.go".to_string()),
            ..Default::default()
        };
        let kept = FilterChain::new(&opts).unwrap().apply(entries_in(dir.path()));
        assert_eq!(
            names(&kept),
            vec!["a", "dir.go", "normal.py", "normal.txt", "python.py", "python.pyc"]
        );
    }

    #[test]
    fn test_exclude_then_include() {
        let dir = flat_dir();
        let opts = Options {
            include_pattern: Some("*.py?".to_string()),
            exclude_pattern: Some("normal*".to_string()),
            ..Default::default()
        };
        let kept = FilterChain::new(&opts).unwrap().apply(entries_in(dir.path()));
        assert_eq!(names(&kept), vec!["a", "dir.go", "python.pyc"]);
    }

    #[test]
    fn test_fan_out_cap() {
        let dir = flat_dir();
        let capped = Options {
            file_limit: Some(3),
            ..Default::default()
        };
        let kept = FilterChain::new(&capped).unwrap().apply(entries_in(dir.path()));
        assert!(kept.is_empty());

        // The cap counts raw entries, hidden ones included
        let exact = Options {
            file_limit: Some(9),
            ..Default::default()
        };
        let kept = FilterChain::new(&exact).unwrap().apply(entries_in(dir.path()));
        assert_eq!(kept.len(), 8);
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let opts = Options {
            include_pattern: Some("[".to_string()),
            ..Default::default()
        };
        let err = FilterChain::new(&opts).unwrap_err();
        assert!(matches!(err, TreeError::InvalidPattern { .. }));
    }

    #[test]
    fn test_empty_pattern_is_ignored() {
        let opts = Options {
            exclude_pattern: Some(String::new()),
            ..Default::default()
        };
        let chain = FilterChain::new(&opts).unwrap();
        assert!(chain.exclude.is_none());
    }
}
