use catalog::store::{read_map, write_json};
use indexmap::IndexMap;
use log::info;
use serde::{Serialize, de::DeserializeOwned};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Persisted progress of a resumable collector
///
/// The full key → result map is loaded once at start, consulted before each
/// unit of work, and written back in full on every [`Checkpoint::flush`].
#[derive(Debug)]
pub struct Checkpoint<T> {
    path: PathBuf,
    entries: IndexMap<String, T>,
}

impl<T> Checkpoint<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Loads the checkpoint at `path`, starting empty if the file does not exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let entries = if path.exists() {
            let entries = read_map(&path)?;
            info!(
                "Loaded {} existing entries from {}",
                entries.len(),
                path.display()
            );
            entries
        } else {
            IndexMap::new()
        };

        Ok(Self { path, entries })
    }

    /// Whether `key` has already been processed
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Records the result for `key`, replacing any previous one
    pub fn insert(&mut self, key: impl Into<String>, value: T) {
        self.entries.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes every entry collected so far to disk
    pub fn flush(&self) -> Result<()> {
        write_json(&self.path, &self.entries)?;
        Ok(())
    }

    pub fn into_entries(self) -> IndexMap<String, T> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::course_data::SubjectFaculty;
    use std::fs;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("datafetcher-checkpoint-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_missing_file_starts_empty() {
        let checkpoint = Checkpoint::<SubjectFaculty>::load(temp_path("missing.json")).unwrap();
        assert!(checkpoint.is_empty());
        assert!(!checkpoint.contains("CS"));
    }

    #[test]
    fn test_resume_after_flush() {
        let path = temp_path("resume.json");

        let mut checkpoint = Checkpoint::load(&path).unwrap();
        checkpoint.insert(
            "MATH",
            SubjectFaculty {
                name: "Mathematics".to_string(),
                faculty: "Faculty of Mathematics".to_string(),
            },
        );
        checkpoint.insert(
            "AFM",
            SubjectFaculty {
                name: "Accounting and Financial Management".to_string(),
                faculty: "Faculty of Arts".to_string(),
            },
        );
        checkpoint.flush().unwrap();

        let resumed = Checkpoint::<SubjectFaculty>::load(&path).unwrap();
        assert_eq!(resumed.len(), 2);
        assert!(resumed.contains("MATH"));
        assert_eq!(resumed.get("AFM").unwrap().faculty, "Faculty of Arts");

        // Insertion order survives the round trip
        let keys: Vec<String> = resumed.into_entries().into_keys().collect();
        assert_eq!(keys, ["MATH", "AFM"]);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_checkpoint_is_an_error() {
        let path = temp_path("corrupt.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "[]").unwrap();

        assert!(Checkpoint::<SubjectFaculty>::load(&path).is_err());

        let _ = fs::remove_file(&path);
    }
}
