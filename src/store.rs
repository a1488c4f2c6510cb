//! Durable storage for interval changes.

use std::path::{Path, PathBuf};
use anyhow::Result;
use crate::plan::{self, Interval, Plan};
use crate::traits::Timestamp;

/// Destination for committed interval state.
pub trait IntervalStore {
    /// Saves the full set of intervals
    fn save(&mut self, intervals: &[Interval]) -> Result<()>;
}

/// Stores intervals back into a plan file on disk.
///
/// Version and markers of the plan the store was opened with are written
/// back unchanged alongside the intervals.
pub struct JsonFileStore {
    path: PathBuf,
    version: String,
    markers: Vec<Timestamp>,
}

impl JsonFileStore {
    /// Opens an existing plan file, returning the store and the plan it holds.
    pub fn open(path: impl Into<PathBuf>) -> Result<(Self, Plan)> {
        let path = path.into();
        let plan = plan::read_plan(&path)?;
        let store = Self {
            path,
            version: plan.version.clone(),
            markers: plan.markers.clone(),
        };
        Ok((store, plan))
    }

    /// Writes `plan` to a new file and returns a store bound to it.
    pub fn create(path: impl Into<PathBuf>, plan: &Plan) -> Result<Self> {
        let path = path.into();
        plan::write_plan(&path, plan)?;
        Ok(Self {
            path,
            version: plan.version.clone(),
            markers: plan.markers.clone(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl IntervalStore for JsonFileStore {
    fn save(&mut self, intervals: &[Interval]) -> Result<()> {
        let plan = Plan {
            version: self.version.clone(),
            intervals: intervals.to_vec(),
            markers: self.markers.clone(),
        };
        plan::write_plan(&self.path, &plan)?;
        log::info!("Saved {} intervals to {}", intervals.len(), self.path.display());
        Ok(())
    }
}

/// Keeps every saved snapshot in memory (unsaved documents, tests).
#[derive(Debug, Default)]
pub struct MemoryStore {
    snapshots: Vec<Vec<Interval>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the most recently saved intervals, if any.
    pub fn latest(&self) -> Option<&[Interval]> {
        self.snapshots.last().map(Vec::as_slice)
    }

    /// Returns how many times `save` was called.
    pub fn save_count(&self) -> usize {
        self.snapshots.len()
    }
}

impl IntervalStore for MemoryStore {
    fn save(&mut self, intervals: &[Interval]) -> Result<()> {
        self.snapshots.push(intervals.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_keeps_snapshots() {
        let mut store = MemoryStore::new();
        assert_eq!(store.latest(), None);

        store.save(&[Interval::new(1, "a", 0, 10)]).unwrap();
        store.save(&[Interval::new(1, "a", 5, 15)]).unwrap();

        assert_eq!(store.save_count(), 2);
        assert_eq!(store.latest().unwrap()[0].start, 5);
    }

    #[test]
    fn test_file_store_preserves_markers() -> Result<()> {
        let path = std::env::temp_dir().join("rtimeline_store_test.json");
        let plan = Plan::new(vec![Interval::new(1, "a", 0, 10)], vec![42, 99]);

        let mut store = JsonFileStore::create(&path, &plan)?;
        store.save(&[Interval::new(1, "a", 20, 30)])?;

        let (_, reloaded) = JsonFileStore::open(&path)?;
        assert_eq!(reloaded.markers, vec![42, 99]);
        assert_eq!(reloaded.intervals, vec![Interval::new(1, "a", 20, 30)]);

        let _ = std::fs::remove_file(path);
        Ok(())
    }

    #[test]
    fn test_open_missing_file_fails_with_path() {
        let path = std::env::temp_dir().join("rtimeline_does_not_exist.json");
        let err = JsonFileStore::open(&path).err().unwrap();
        assert!(format!("{:#}", err).contains("rtimeline_does_not_exist.json"));
    }
}
