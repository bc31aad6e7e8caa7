//! Snapshot ordering policy.

use std::cmp::Ordering;

use crate::fs::entry::Entry;

/// Sorts entries in place with the snapshot's total order: directories
/// before files, same-kind entries by case-insensitive natural name
/// comparison ("img_2" before "img_10"), and a byte-order tiebreak so
/// names that collate equal (for example case variants) still order
/// deterministically.
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(compare);
}

/// The comparator behind [`sort_entries`]. Strict total order: for any two
/// distinct entries exactly one of before/after holds.
pub fn compare(a: &Entry, b: &Entry) -> Ordering {
    match (a.is_dir(), b.is_dir()) {
        (true, false) => return Ordering::Less,
        (false, true) => return Ordering::Greater,
        _ => {}
    }
    compare_names(a.name(), b.name())
}

fn compare_names(a: &str, b: &str) -> Ordering {
    alphanumeric_sort::compare_str(a.to_lowercase(), b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn entries_for(tmp: &TempDir, files: &[&str], dirs: &[&str]) -> Vec<Entry> {
        for name in files {
            fs::write(tmp.path().join(name), "").unwrap();
        }
        for name in dirs {
            fs::create_dir(tmp.path().join(name)).unwrap();
        }
        crate::fs::ops::read_directory(tmp.path()).unwrap()
    }

    #[test]
    fn directories_sort_before_files() {
        let tmp = TempDir::new().unwrap();
        let mut entries = entries_for(&tmp, &["aaa.txt"], &["zzz"]);

        sort_entries(&mut entries);

        assert!(entries[0].is_dir());
        assert_eq!(entries[0].name(), "zzz");
        assert_eq!(entries[1].name(), "aaa.txt");
    }

    #[test]
    fn same_kind_sorts_by_name() {
        let tmp = TempDir::new().unwrap();
        let mut entries = entries_for(&tmp, &["cherry.md", "apple.rs", "banana.txt"], &[]);

        sort_entries(&mut entries);

        let names: Vec<&str> = entries.iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["apple.rs", "banana.txt", "cherry.md"]);
    }

    #[test]
    fn name_comparison_is_natural_not_bytewise() {
        let tmp = TempDir::new().unwrap();
        let mut entries = entries_for(&tmp, &["img_10.png", "img_2.png"], &[]);

        sort_entries(&mut entries);

        let names: Vec<&str> = entries.iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["img_2.png", "img_10.png"]);
    }

    #[test]
    fn name_comparison_is_case_insensitive() {
        let tmp = TempDir::new().unwrap();
        let mut entries = entries_for(&tmp, &["Banana.txt", "apple.txt"], &[]);

        sort_entries(&mut entries);

        let names: Vec<&str> = entries.iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["apple.txt", "Banana.txt"]);
    }

    #[test]
    fn comparator_is_a_strict_total_order() {
        let tmp = TempDir::new().unwrap();
        let entries = entries_for(&tmp, &["a.txt", "A.txt", "b.txt"], &["docs", "src"]);

        for a in &entries {
            for b in &entries {
                let forward = compare(a, b);
                let backward = compare(b, a);
                if a.name() == b.name() {
                    assert_eq!(forward, Ordering::Equal);
                } else {
                    assert_ne!(forward, Ordering::Equal, "{} vs {}", a.name(), b.name());
                    assert_eq!(forward, backward.reverse());
                }
            }
        }
    }
}
