//! Zoom levels and pixel/time conversion.
//!
//! The zoom ladder is configuration: each level is the duration shown
//! across `width` pixels. The controller tracks the current rung.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use crate::traits::{Pixels, Timestamp, ZoomController};

/// Zoom ladder configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoomConfig {
    /// Visible duration (ms) across `width` pixels, from most to least zoomed in
    pub levels: Vec<Timestamp>,
    /// Pixel width the level durations refer to
    pub width: Pixels,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        const SECOND: Timestamp = 1000;
        const MINUTE: Timestamp = 60 * SECOND;
        const HOUR: Timestamp = 60 * MINUTE;
        const DAY: Timestamp = 24 * HOUR;

        Self {
            levels: vec![
                SECOND,
                5 * SECOND,
                15 * SECOND,
                30 * SECOND,
                MINUTE,
                5 * MINUTE,
                15 * MINUTE,
                30 * MINUTE,
                HOUR,
                2 * HOUR,
                4 * HOUR,
                8 * HOUR,
                12 * HOUR,
                DAY,
                2 * DAY,
                7 * DAY,
                14 * DAY,
            ],
            width: 200.0,
        }
    }
}

impl ZoomConfig {
    /// Rejects ladders the controller cannot convert with.
    pub fn validate(&self) -> Result<()> {
        if self.levels.is_empty() {
            bail!("Zoom configuration needs at least one level");
        }
        if let Some(level) = self.levels.iter().find(|&&level| level <= 0) {
            bail!("Zoom level durations must be positive, got {}", level);
        }
        if self.width.is_nan() || self.width <= 0.0 {
            bail!("Zoom width must be positive, got {}", self.width);
        }
        Ok(())
    }
}

/// Converts between pixels and milliseconds at a chosen zoom level.
#[derive(Debug, Clone)]
pub struct TimelineZoomController {
    config: ZoomConfig,
    index: usize,
}

impl TimelineZoomController {
    /// Creates a controller starting at the middle of the ladder.
    pub fn new(config: ZoomConfig) -> Result<Self> {
        config.validate()?;
        let index = config.levels.len() / 2;
        Ok(Self { config, index })
    }

    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    /// Returns the current position on the zoom ladder.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Jumps to a ladder position, clamped to the ladder.
    pub fn set_index(&mut self, index: usize) {
        self.index = index.min(self.config.levels.len() - 1);
    }

    /// Returns the duration shown across the configured width.
    pub fn duration(&self) -> Timestamp {
        self.config.levels[self.index]
    }

    /// Moves `amount` rungs along the ladder (positive zooms out) and
    /// returns the new level's duration.
    pub fn zoom(&mut self, amount: isize) -> Timestamp {
        let max = self.config.levels.len() - 1;
        self.index = self.index.saturating_add_signed(amount).min(max);
        self.duration()
    }

    /// Picks the most zoomed-in level that still fits `duration` into
    /// `available` pixels.
    pub fn fit(&mut self, duration: Timestamp, available: Pixels) {
        let required = duration as f64 * self.config.width / available.max(1.0);
        self.index = self
            .config
            .levels
            .iter()
            .position(|&level| level as f64 >= required)
            .unwrap_or(self.config.levels.len() - 1);
    }
}

impl Default for TimelineZoomController {
    fn default() -> Self {
        let config = ZoomConfig::default();
        let index = config.levels.len() / 2;
        Self { config, index }
    }
}

impl ZoomController for TimelineZoomController {
    fn to_millis(&self, pixels: Pixels) -> Timestamp {
        (pixels * self.duration() as f64 / self.config.width).round() as Timestamp
    }

    fn to_pixels(&self, millis: Timestamp) -> Pixels {
        millis as f64 * self.config.width / self.duration() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> TimelineZoomController {
        TimelineZoomController::new(ZoomConfig {
            levels: vec![1000, 2000, 4000],
            width: 100.0,
        })
        .unwrap()
    }

    #[test]
    fn test_starts_mid_ladder() {
        let zoom = controller();
        assert_eq!(zoom.index(), 1);
        assert_eq!(zoom.duration(), 2000);
    }

    #[test]
    fn test_conversions() {
        let zoom = controller();
        assert_eq!(zoom.to_millis(5.0), 100);
        assert_eq!(zoom.to_millis(-5.0), -100);
        assert_eq!(zoom.to_millis(0.26), 5);
        assert_eq!(zoom.to_pixels(100), 5.0);
        assert_eq!(zoom.to_pixels(zoom.to_millis(30.0)), 30.0);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut zoom = controller();
        assert_eq!(zoom.zoom(1), 4000);
        assert_eq!(zoom.zoom(5), 4000);
        assert_eq!(zoom.zoom(-10), 1000);
        zoom.set_index(99);
        assert_eq!(zoom.index(), 2);
    }

    #[test]
    fn test_fit() {
        let mut zoom = controller();
        zoom.fit(3000, 100.0);
        assert_eq!(zoom.duration(), 4000);
        zoom.fit(3000, 300.0);
        assert_eq!(zoom.duration(), 1000);
        zoom.fit(1_000_000, 100.0);
        assert_eq!(zoom.duration(), 4000);
    }

    #[test]
    fn test_invalid_configs_rejected() {
        assert!(TimelineZoomController::new(ZoomConfig { levels: vec![], width: 100.0 }).is_err());
        assert!(TimelineZoomController::new(ZoomConfig { levels: vec![0], width: 100.0 }).is_err());
        assert!(TimelineZoomController::new(ZoomConfig { levels: vec![10], width: 0.0 }).is_err());
        assert!(ZoomConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_controller() {
        let zoom = TimelineZoomController::default();
        assert_eq!(zoom.index(), 8);
        assert_eq!(zoom.duration(), 60 * 60 * 1000);
        assert_eq!(zoom.config().width, 200.0);
    }

    #[test]
    fn test_config_from_json() {
        let config: ZoomConfig = serde_json::from_str(r#"{"levels": [500, 1500], "width": 250}"#).unwrap();
        assert_eq!(config.levels, vec![500, 1500]);
        assert_eq!(config.width, 250.0);
    }
}
