//! Settings persistence coordination.
//!
//! Viewer preferences (zoom ladder and current zoom level) are
//! stored in eframe's persistent storage as JSON strings.

use serde::{Deserialize, Serialize};

/// Coordinates settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Saves a setting to persistent storage.
    ///
    /// # Arguments
    /// * `storage` - The eframe storage interface (mutable)
    /// * `key` - The storage key for this setting
    /// * `value` - The value to serialize and save
    pub fn save_setting<T>(storage: &mut dyn eframe::Storage, key: &str, value: &T)
    where
        T: Serialize,
    {
        match serde_json::to_string(value) {
            Ok(json_str) => {
                storage.set_string(key, json_str);
                storage.flush();
            }
            Err(err) => log::warn!("Failed to serialize setting '{}': {}", key, err),
        }
    }

    /// Loads a setting from persistent storage with a custom default.
    ///
    /// # Returns
    /// The deserialized value if found and valid, otherwise the provided default
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        Self::try_load_setting(storage, key).unwrap_or(default)
    }

    /// Attempts to load a setting, returning None if not found or invalid.
    pub fn try_load_setting<T>(storage: Option<&dyn eframe::Storage>, key: &str) -> Option<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let storage = storage?;
        let json_str = storage.get_string(key)?;
        match serde_json::from_str(&json_str) {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("Ignoring invalid setting '{}': {}", key, err);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::Storage;
    use rtimeline::ZoomConfig;
    use std::collections::HashMap;

    /// Simple mock storage for testing
    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                data: HashMap::new(),
            }
        }
    }

    impl Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_save_and_load_zoom_config() {
        let mut storage = MockStorage::new();
        let config = ZoomConfig {
            levels: vec![1000, 60_000],
            width: 150.0,
        };

        SettingsCoordinator::save_setting(&mut storage, "zoom_config", &config);

        let loaded: ZoomConfig = SettingsCoordinator::load_setting_or(Some(&storage), "zoom_config", ZoomConfig::default());
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_falls_back_to_default() {
        let mut storage = MockStorage::new();
        storage.set_string("zoom_index", "not json".to_string());

        let missing: usize = SettingsCoordinator::load_setting_or(Some(&storage), "missing", 3);
        let invalid: usize = SettingsCoordinator::load_setting_or(Some(&storage), "zoom_index", 4);
        let no_storage: usize = SettingsCoordinator::load_setting_or(None, "zoom_index", 5);

        assert_eq!((missing, invalid, no_storage), (3, 4, 5));
    }

    #[test]
    fn test_try_load_setting() {
        let mut storage = MockStorage::new();

        let result: Option<usize> = SettingsCoordinator::try_load_setting(Some(&storage), "zoom_index");
        assert_eq!(result, None);

        SettingsCoordinator::save_setting(&mut storage, "zoom_index", &7usize);
        let result: Option<usize> = SettingsCoordinator::try_load_setting(Some(&storage), "zoom_index");
        assert_eq!(result, Some(7));
    }
}
