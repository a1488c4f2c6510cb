use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::plan::{Interval, Plan};
use crate::traits::Timestamp;

const DEFAULT_ACTIVITY_COUNT: usize = 8;
const MINUTE: Timestamp = 60_000;

const ACTIVITY_NAMES: &[&str] = &[
    "Uplink", "Slew", "Calibrate", "Observe", "Downlink", "Maneuver",
    "Warmup", "Checkout", "Idle", "Survey", "Relay", "Standby",
];

/// Generates deterministic plans for demos and load testing.
pub struct SamplePlanGenerator {
    activity_count: usize,
    seed: u64,
}

impl Default for SamplePlanGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SamplePlanGenerator {
    pub fn new() -> Self {
        Self {
            activity_count: DEFAULT_ACTIVITY_COUNT,
            seed: 42, // Default seed for reproducibility
        }
    }

    pub fn with_config(activity_count: usize, seed: u64) -> Self {
        Self { activity_count, seed }
    }

    /// Builds a plan of back-to-back activities separated by short gaps.
    ///
    /// Some activities overlap their predecessor so both edges of a moved
    /// interval have nearby snap candidates, and a marker is dropped every
    /// few activities.
    pub fn generate(&self) -> Plan {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut intervals = Vec::with_capacity(self.activity_count);
        let mut markers = Vec::new();
        let mut cursor: Timestamp = 5 * MINUTE;

        for index in 0..self.activity_count {
            let duration = rng.gen_range(5..=45) * MINUTE;
            let start = if index > 0 && rng.gen_bool(0.25) {
                cursor - rng.gen_range(1..=5) * MINUTE
            } else {
                cursor + rng.gen_range(0..=10) * MINUTE
            };
            let name = ACTIVITY_NAMES[rng.gen_range(0..ACTIVITY_NAMES.len())];

            intervals.push(Interval::new(
                index as u64 + 1,
                format!("{} {}", name, index + 1),
                start,
                start + duration,
            ));

            if index % 3 == 2 {
                markers.push(start + duration + rng.gen_range(1..=4) * MINUTE);
            }
            cursor = start + duration;
        }

        Plan::new(intervals, markers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_plan() {
        let a = SamplePlanGenerator::with_config(20, 7).generate();
        let b = SamplePlanGenerator::with_config(20, 7).generate();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generated_plan_is_valid() {
        let plan = SamplePlanGenerator::with_config(50, 3).generate();
        assert_eq!(plan.intervals.len(), 50);
        assert!(plan.validate().is_ok());
        assert!(plan.intervals.iter().all(|i| i.start >= 0 && i.duration() > 0));
        assert_eq!(plan.markers.len(), 16);
    }
}
