use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use anyhow::{Result, Context, bail};
use brotli::enc::BrotliEncoderParams;
use brotli::{CompressorWriter, Decompressor};
use crate::traits::{IntervalId, Timestamp};

pub const PLAN_VERSION: &str = "1.0";

/// A scheduled activity or sub-timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub id: IntervalId,
    pub name: String,
    pub start: Timestamp,
    pub end: Timestamp,
}

impl Interval {
    pub fn new(id: IntervalId, name: impl Into<String>, start: Timestamp, end: Timestamp) -> Self {
        Self {
            id,
            name: name.into(),
            start,
            end,
        }
    }

    /// Returns the computed duration (end - start)
    pub fn duration(&self) -> Timestamp {
        self.end - self.start
    }
}

/// Contents of a plan file: intervals plus free-standing markers that
/// intervals can snap to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub version: String,
    pub intervals: Vec<Interval>,
    #[serde(default)]
    pub markers: Vec<Timestamp>,
}

impl Default for Plan {
    fn default() -> Self {
        Self {
            version: PLAN_VERSION.to_string(),
            intervals: Vec::new(),
            markers: Vec::new(),
        }
    }
}

impl Plan {
    pub fn new(intervals: Vec<Interval>, markers: Vec<Timestamp>) -> Self {
        Self {
            version: PLAN_VERSION.to_string(),
            intervals,
            markers,
        }
    }

    /// Checks that ids are unique and every interval lies after the epoch
    /// and ends no earlier than it starts.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for interval in &self.intervals {
            if !seen.insert(interval.id) {
                bail!("Duplicate interval id {}", interval.id);
            }
            if interval.start < 0 {
                bail!(
                    "Interval {} ('{}') starts before the timeline epoch ({})",
                    interval.id,
                    interval.name,
                    interval.start
                );
            }
            if interval.end < interval.start {
                bail!(
                    "Interval {} ('{}') ends before it starts ({} < {})",
                    interval.id,
                    interval.name,
                    interval.end,
                    interval.start
                );
            }
        }
        Ok(())
    }

    /// Returns the (min start, max end) across all intervals and markers.
    pub fn extent(&self) -> Option<(Timestamp, Timestamp)> {
        let starts = self.intervals.iter().map(|i| i.start).chain(self.markers.iter().copied());
        let ends = self.intervals.iter().map(|i| i.end).chain(self.markers.iter().copied());
        Some((starts.min()?, ends.max()?))
    }
}

/// Reads and validates a plan file.
///
/// Files ending in `.br` are Brotli-decompressed transparently.
pub fn read_plan(path: &Path) -> Result<Plan> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open plan file: {}", path.display()))?;

    let mut reader: Box<dyn Read> = if is_brotli(path) {
        Box::new(BufReader::new(Decompressor::new(file, 4096)))
    } else {
        Box::new(BufReader::new(file))
    };

    let mut contents = String::new();
    reader
        .read_to_string(&mut contents)
        .with_context(|| format!("Failed to read plan file: {}", path.display()))?;

    let plan: Plan = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse plan file: {}", path.display()))?;
    plan.validate()
        .with_context(|| format!("Invalid plan file: {}", path.display()))?;

    Ok(plan)
}

/// Writes a plan file, Brotli-compressing when the path ends in `.br`.
pub fn write_plan(path: &Path, plan: &Plan) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create file: {}", path.display()))?;

    let mut writer: Box<dyn Write> = if is_brotli(path) {
        let params = BrotliEncoderParams {
            quality: 6,
            lgwin: 22,
            ..Default::default()
        };
        Box::new(CompressorWriter::with_params(BufWriter::new(file), 4096, &params))
    } else {
        Box::new(BufWriter::new(file))
    };

    serde_json::to_writer_pretty(&mut writer, plan)
        .with_context(|| format!("Failed to serialize plan to {}", path.display()))?;
    writer.flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;

    Ok(())
}

fn is_brotli(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "br")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let plan = Plan::new(
            vec![Interval::new(1, "a", 0, 10), Interval::new(1, "b", 20, 30)],
            vec![],
        );
        assert!(plan.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_interval() {
        let plan = Plan::new(vec![Interval::new(1, "a", 50, 10)], vec![]);
        let err = plan.validate().unwrap_err();
        assert!(err.to_string().contains("ends before it starts"));
    }

    #[test]
    fn test_validate_rejects_start_before_epoch() {
        let plan = Plan::new(vec![Interval::new(1, "a", -1000, 5000)], vec![5000]);
        let err = plan.validate().unwrap_err();
        assert!(err.to_string().contains("before the timeline epoch"));
    }

    #[test]
    fn test_extent_includes_markers() {
        let plan = Plan::new(
            vec![Interval::new(1, "a", 100, 200), Interval::new(2, "b", 150, 400)],
            vec![50],
        );
        assert_eq!(plan.extent(), Some((50, 400)));
        assert_eq!(Plan::default().extent(), None);
    }

    #[test]
    fn test_markers_default_when_missing() {
        let plan: Plan = serde_json::from_str(
            r#"{"version": "1.0", "intervals": [{"id": 1, "name": "a", "start": 0, "end": 5}]}"#,
        )
        .unwrap();
        assert!(plan.markers.is_empty());
        assert_eq!(plan.intervals[0].duration(), 5);
    }

    #[test]
    fn test_compressed_file_matches_plain() -> Result<()> {
        let plan = Plan::new(vec![Interval::new(4, "Survey", 1000, 9000)], vec![500, 12000]);
        let plain = std::env::temp_dir().join("rtimeline_plan_test.json");
        let packed = std::env::temp_dir().join("rtimeline_plan_test.json.br");

        write_plan(&plain, &plan)?;
        write_plan(&packed, &plan)?;
        assert_eq!(read_plan(&plain)?, read_plan(&packed)?);

        let _ = std::fs::remove_file(plain);
        let _ = std::fs::remove_file(packed);
        Ok(())
    }
}
