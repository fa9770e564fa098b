//! Sibling ordering

use crate::metadata::Entry;

use super::config::SortOrder;

/// Order one directory's entries in place. Sorting never affects statistics.
pub fn sort_entries(entries: &mut [Entry], order: SortOrder) {
    match order {
        SortOrder::Name => entries.sort_by(|a, b| a.name().cmp(b.name())),
        SortOrder::NameReverse => entries.sort_by(|a, b| b.name().cmp(a.name())),
        SortOrder::ModTime => entries.sort_by_key(|e| e.modified().timestamp()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;

    fn names(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.name()).collect()
    }

    fn touch(dir: &TempDir, name: &str, age_secs: u64) -> Entry {
        let path = dir.path().join(name);
        let file = File::create(&path).unwrap();
        file.set_modified(SystemTime::now() - Duration::from_secs(age_secs))
            .unwrap();
        Entry::read(&path, false).unwrap()
    }

    #[test]
    fn test_sort_by_name_and_reverse() {
        let dir = TempDir::new().unwrap();
        for name in ["b.rs", "a.rs", "c.rs"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        let mut entries: Vec<Entry> = ["b.rs", "a.rs", "c.rs"]
            .iter()
            .map(|n| Entry::read(&dir.path().join(n), false).unwrap())
            .collect();

        sort_entries(&mut entries, SortOrder::Name);
        assert_eq!(names(&entries), vec!["a.rs", "b.rs", "c.rs"]);

        sort_entries(&mut entries, SortOrder::NameReverse);
        assert_eq!(names(&entries), vec!["c.rs", "b.rs", "a.rs"]);
    }

    #[test]
    fn test_sort_by_mod_time_oldest_first() {
        let dir = TempDir::new().unwrap();
        let mut entries = vec![
            touch(&dir, "new.rs", 10),
            touch(&dir, "old.rs", 3_000),
            touch(&dir, "mid.rs", 600),
        ];
        sort_entries(&mut entries, SortOrder::ModTime);
        assert_eq!(names(&entries), vec!["old.rs", "mid.rs", "new.rs"]);
    }
}
