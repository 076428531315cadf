//! Settings store for loading and persisting the camera configuration
//!
//! `ConfigManager` keeps the record in a JSON file and replaces it atomically
//! on every write. `MemoryConfigStore` keeps it in memory for tests and for
//! embedding the controller without a file system.

use crate::config::models::CameraConfig;
use crate::error::{Result, TrailCamError};
use parking_lot::Mutex;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "TRAILCAM_HOME";

/// File name of the settings record inside the data directory
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Durable home of the camera configuration
///
/// Read once at startup and written after every mutation.
pub trait ConfigStore {
    /// Return the stored record, or the defaults if none exists or it cannot be read
    fn load(&self) -> CameraConfig;

    /// Replace the stored record with `config`
    fn persist(&self, config: &CameraConfig) -> Result<()>;
}

/// File-backed settings store
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Create a store that reads and writes `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store for `settings.json` inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(SETTINGS_FILE_NAME))
    }

    /// Get the default data directory
    ///
    /// Returns: `$TRAILCAM_HOME`, or `./.trailcam` when unset
    pub fn default_data_dir() -> PathBuf {
        std::env::var_os(DATA_DIR_ENV)
            .map_or_else(|| PathBuf::from(".trailcam"), PathBuf::from)
    }

    /// Path of the settings file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the stored record
    ///
    /// Returns `Ok(None)` when no record has been written yet.
    pub fn read(&self) -> Result<Option<CameraConfig>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let json = std::fs::read_to_string(&self.path)?;
        let config = serde_json::from_str(&json)?;
        Ok(Some(config))
    }

    /// Ensure the directory holding the settings file exists
    fn ensure_parent_dir(&self) -> Result<PathBuf> {
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            Some(_) => PathBuf::from("."),
            None => {
                return Err(TrailCamError::ConfigError(crate::error::StringError::new(
                    "Invalid settings path",
                )));
            }
        };

        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }
}

impl ConfigStore for ConfigManager {
    fn load(&self) -> CameraConfig {
        match self.read() {
            Ok(Some(config)) => {
                info!("Settings loaded from {}", self.path.display());
                config
            }
            Ok(None) => {
                info!("Settings file not found, using defaults");
                CameraConfig::default()
            }
            Err(e) => {
                warn!(
                    "Failed to read settings from {}, using defaults: {}",
                    self.path.display(),
                    e
                );
                CameraConfig::default()
            }
        }
    }

    /// Atomic write: serialize into a temp file in the same directory, then rename over the record
    fn persist(&self, config: &CameraConfig) -> Result<()> {
        let dir = self.ensure_parent_dir()?;
        let json = serde_json::to_string_pretty(config)?;

        let mut temp = tempfile::NamedTempFile::new_in(&dir)?;
        temp.write_all(json.as_bytes())?;
        temp.as_file().sync_all()?;
        temp.persist(&self.path)
            .map_err(|e| TrailCamError::PersistFailed(Box::new(e.error)))?;

        debug!("Settings saved to {}", self.path.display());
        Ok(())
    }
}

/// In-memory settings store
///
/// Holds the serialized record exactly as the file store would write it, so
/// loads go through the same parsing path.
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    state: Mutex<MemoryRecord>,
}

/// Record and write counter, updated together
#[derive(Debug, Default)]
struct MemoryRecord {
    json: Option<String>,
    writes: usize,
}

impl MemoryConfigStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a raw record
    pub fn with_record(json: impl Into<String>) -> Self {
        Self {
            state: Mutex::new(MemoryRecord {
                json: Some(json.into()),
                writes: 0,
            }),
        }
    }

    /// Raw record currently held
    pub fn record(&self) -> Option<String> {
        self.state.lock().json.clone()
    }

    /// Number of successful persists
    pub fn write_count(&self) -> usize {
        self.state.lock().writes
    }
}

impl ConfigStore for MemoryConfigStore {
    fn load(&self) -> CameraConfig {
        let state = self.state.lock();
        let Some(json) = state.json.as_deref() else {
            return CameraConfig::default();
        };

        serde_json::from_str(json).unwrap_or_else(|e| {
            warn!("Failed to parse stored settings, using defaults: {}", e);
            CameraConfig::default()
        })
    }

    fn persist(&self, config: &CameraConfig) -> Result<()> {
        let json = serde_json::to_string(config)?;
        let mut state = self.state.lock();
        state.json = Some(json);
        state.writes += 1;
        Ok(())
    }
}

impl<S: ConfigStore + ?Sized> ConfigStore for std::sync::Arc<S> {
    fn load(&self) -> CameraConfig {
        (**self).load()
    }

    fn persist(&self, config: &CameraConfig) -> Result<()> {
        (**self).persist(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::domains::PhotoResolution;

    /// Helper to create a temporary directory for tests
    /// Returns a `TempDir` that automatically cleans up when dropped
    fn create_test_dir() -> tempfile::TempDir {
        tempfile::tempdir().expect("Failed to create temp directory")
    }

    #[test]
    fn test_settings_path() {
        let manager = ConfigManager::in_dir("/var/lib/trailcam");
        assert!(manager.path().ends_with("settings.json"));
        assert!(manager.path().starts_with("/var/lib/trailcam"));
    }

    #[test]
    fn test_load_missing_settings() {
        let dir = create_test_dir();
        let manager = ConfigManager::in_dir(dir.path());

        assert!(manager.read().unwrap().is_none());
        let config = manager.load();
        assert_eq!(config.photo_resolution, PhotoResolution::Mp12);
    }

    #[test]
    fn test_persist_then_load() {
        let dir = create_test_dir();
        let manager = ConfigManager::in_dir(dir.path().join("nested"));

        let mut config = manager.load();
        config.photo_resolution = PhotoResolution::Mp24;
        config.camera_name = "CREEK".to_string();
        manager.persist(&config).unwrap();

        let loaded = manager.load();
        assert_eq!(loaded, config);

        // No temp files are left next to the record
        let entries = std::fs::read_dir(dir.path().join("nested")).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn test_corrupt_settings_fall_back_to_defaults() {
        let dir = create_test_dir();
        let manager = ConfigManager::in_dir(dir.path());
        std::fs::write(manager.path(), "{ not json").unwrap();

        assert!(manager.read().is_err());
        let config = manager.load();
        assert_eq!(config.camera_name, "BROWNING CAM");
    }

    #[test]
    fn test_persist_into_unwritable_location_fails() {
        let dir = create_test_dir();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "file, not a directory").unwrap();

        let manager = ConfigManager::in_dir(blocker.join("sub"));
        assert!(manager.persist(&CameraConfig::default()).is_err());
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryConfigStore::new();
        let mut config = store.load();
        config.hdr = true;

        store.persist(&config).unwrap();
        assert_eq!(store.write_count(), 1);
        assert_eq!(store.load(), config);
    }

    #[test]
    fn test_memory_store_with_bad_record() {
        let store = MemoryConfigStore::with_record("[1, 2, 3]");
        let config = store.load();
        assert!(config.image_data_strip);
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn test_memory_store_concurrent_writers() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(MemoryConfigStore::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    let mut config = CameraConfig::default();
                    for i in 0..50 {
                        config.camera_name = format!("CAM {t}-{i}");
                        store.persist(&config).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.write_count(), 400);
        // The held record is one of the last writes, intact
        let name = store.load().camera_name;
        assert!(name.starts_with("CAM ") && name.ends_with("-49"), "{name}");
    }
}
